use crate::{
    cli::{
        command::{Cli, Commands},
        display_contacts, shell,
    },
    config::{Settings, load_dotenv},
    domain::store::{ContactStore, LoadSource},
    errors::AppError,
};
use clap::Parser;
use std::io;
use tracing::{debug, info};

pub fn run_app() -> Result<(), AppError> {
    load_dotenv();
    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.quiet);

    let settings = Settings::new(&cli.storage, cli.data_dir, &cli.seed_url, cli.no_seed)?;
    let mut store = settings.open_store()?;

    match store.initialize()? {
        LoadSource::Snapshot => debug!(
            count = store.len(),
            medium = store.storage_medium(),
            "contact book loaded"
        ),
        LoadSource::Seed => info!(count = store.len(), "contact book seeded"),
        LoadSource::Empty => info!("starting with an empty contact book"),
    }

    execute(&mut store, cli.command)
}

pub fn execute(store: &mut ContactStore, command: Commands) -> Result<(), AppError> {
    match command {
        Commands::List => {
            if store.is_empty() {
                println!("No contact yet");
                return Ok(());
            }
            print!("{}", display_contacts(store.contacts().iter()));
            Ok(())
        }

        Commands::Search { term } => {
            let found = store.search(&term);
            if found.is_empty() {
                println!("No contact matches '{term}'");
                return Ok(());
            }
            print!("{}", display_contacts(found.into_iter()));
            Ok(())
        }

        Commands::Add { name, email, phone } => {
            store.begin_create();
            store.update_draft_field("name", name)?;
            store.update_draft_field("email", email)?;
            store.update_draft_field("phone", phone)?;
            let id = store.commit_draft()?;

            println!("Contact added successfully (id {id})");
            Ok(())
        }

        Commands::Edit {
            id,
            name,
            email,
            phone,
        } => {
            store.begin_edit(id)?;
            for (field, value) in [("name", name), ("email", email), ("phone", phone)] {
                if let Some(value) = value {
                    store.update_draft_field(field, value)?;
                }
            }
            store.commit_draft()?;

            println!("Contact updated successfully");
            Ok(())
        }

        Commands::Delete { id } => {
            if store.delete_contact(id)? {
                println!("Contact deleted successfully");
            } else {
                println!("No contact with id {id}");
            }
            Ok(())
        }

        Commands::Shell => {
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            shell::run_shell(store, stdin.lock(), &mut stdout)
        }
    }
}

fn init_tracing(verbose: u8, quiet: bool) {
    use tracing_subscriber::EnvFilter;

    if quiet {
        return;
    }

    // RUST_LOG wins over the verbosity flag
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        match verbose {
            0 => EnvFilter::new("warn"),
            1 => EnvFilter::new("info"),
            2 => EnvFilter::new("debug,reqwest=info"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}
