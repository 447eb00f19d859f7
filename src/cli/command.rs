use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::config::DEFAULT_DATA_DIR;
use crate::storage::remote::DEFAULT_SEED_URL;

#[derive(Parser, Debug)]
#[command(name = "contact-book", version, about = "Simple Contact Book")]
pub struct Cli {
    /// Storage medium (json, memory)
    #[arg(long, global = true, env = "CONTACTS_STORAGE", default_value_t = String::from("json"))]
    pub storage: String,

    /// Directory holding the json snapshot
    #[arg(long, global = true, env = "CONTACTS_DIR", default_value = DEFAULT_DATA_DIR)]
    pub data_dir: PathBuf,

    /// Endpoint used to seed an empty contact book
    #[arg(long, global = true, env = "CONTACTS_SEED_URL", default_value = DEFAULT_SEED_URL)]
    pub seed_url: String,

    /// Never fetch seed contacts
    #[arg(long, global = true, env = "CONTACTS_NO_SEED")]
    pub no_seed: bool,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// No log output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommand and their flags
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all contacts
    List,

    /// Search name, email and phone (case-insensitive)
    Search {
        /// Text to look for; empty lists everything
        #[arg(default_value = "")]
        term: String,
    },

    /// Add a new contact
    Add {
        /// Contact name
        #[arg(long)]
        name: String,

        /// Contact email address
        #[arg(long, default_value = "")]
        email: String,

        /// Contact phone number
        #[arg(long, default_value = "")]
        phone: String,
    },

    /// Edit an existing contact
    /// Provide the contact id followed by the fields you wish to update
    Edit {
        /// Id of the contact to edit
        #[arg(long)]
        id: u64,

        /// Update name
        #[arg(long)]
        name: Option<String>,

        /// Update email address
        #[arg(long)]
        email: Option<String>,

        /// Update phone number
        #[arg(long)]
        phone: Option<String>,
    },

    /// Delete a contact by id
    Delete {
        /// Id of the contact to delete
        #[arg(long)]
        id: u64,
    },

    /// Interactive session with inline create/edit forms
    Shell,
}
