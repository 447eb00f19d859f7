use super::*;
use crate::domain::store::{ContactStore, Mode};
use crate::errors::AppError;

use std::io::{BufRead, Write};

#[derive(Debug, PartialEq, Eq)]
pub enum ShellCommand {
    List,
    Search(String),
    Show(u64),
    New,
    Edit(u64),
    Set(String, String),
    Save,
    Cancel,
    Delete(u64),
    Help,
    Quit,
}

impl ShellCommand {
    pub fn parse(line: &str) -> Result<Self, AppError> {
        let line = line.trim();
        let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();

        match verb.to_lowercase().as_str() {
            "list" | "ls" => Ok(ShellCommand::List),
            "search" | "find" => Ok(ShellCommand::Search(rest.to_string())),
            "show" => Ok(ShellCommand::Show(required_id(rest, "show <id>")?)),
            "new" | "add" => Ok(ShellCommand::New),
            "edit" => Ok(ShellCommand::Edit(required_id(rest, "edit <id>")?)),
            "set" => {
                let (field, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                if field.is_empty() {
                    return Err(AppError::Validation(
                        "usage: set <name|email|phone> <value>".to_string(),
                    ));
                }
                Ok(ShellCommand::Set(field.to_string(), value.trim().to_string()))
            }
            "save" => Ok(ShellCommand::Save),
            "cancel" => Ok(ShellCommand::Cancel),
            "delete" | "rm" => Ok(ShellCommand::Delete(required_id(rest, "delete <id>")?)),
            "help" | "?" => Ok(ShellCommand::Help),
            "quit" | "exit" => Ok(ShellCommand::Quit),
            other => Err(AppError::Validation(format!(
                "Unrecognized command: '{other}' (type help)"
            ))),
        }
    }
}

fn required_id(arg: &str, usage: &str) -> Result<u64, AppError> {
    if arg.is_empty() {
        return Err(AppError::Validation(format!("usage: {usage}")));
    }
    Ok(arg.parse::<u64>()?)
}

/// Reads commands line by line until `quit` or end of input. Command errors
/// are printed and the session carries on.
pub fn run_shell<R: BufRead, W: Write>(
    store: &mut ContactStore,
    input: R,
    out: &mut W,
) -> Result<(), AppError> {
    writeln!(out, "--- Contact BOOK ---")?;
    show_help(out)?;
    prompt(store, out)?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            prompt(store, out)?;
            continue;
        }

        match ShellCommand::parse(&line) {
            Ok(ShellCommand::Quit) => {
                writeln!(out, "Bye!")?;
                return Ok(());
            }
            Ok(command) => {
                if let Err(err) = apply(store, command, out) {
                    writeln!(out, "Error: {err}")?;
                }
            }
            Err(err) => writeln!(out, "Error: {err}")?,
        }
        prompt(store, out)?;
    }

    writeln!(out)?;
    Ok(())
}

fn apply<W: Write>(
    store: &mut ContactStore,
    command: ShellCommand,
    out: &mut W,
) -> Result<(), AppError> {
    match command {
        ShellCommand::List => show_list(store, "", out),
        ShellCommand::Search(term) => show_list(store, &term, out),
        ShellCommand::Show(id) => {
            let contact = store.get(id).ok_or(AppError::NotFound(id))?;
            writeln!(out, "{}", display_contact(contact))?;
            Ok(())
        }
        ShellCommand::New => {
            store.begin_create();
            show_draft(store, out)
        }
        ShellCommand::Edit(id) => {
            store.begin_edit(id)?;
            show_draft(store, out)
        }
        ShellCommand::Set(field, value) => {
            store.update_draft_field(&field, value)?;
            show_draft(store, out)
        }
        ShellCommand::Save => {
            let id = store.commit_draft()?;
            writeln!(out, "Contact saved (id {id})")?;
            Ok(())
        }
        ShellCommand::Cancel => {
            store.cancel_edit();
            writeln!(out, "Edit cancelled")?;
            Ok(())
        }
        ShellCommand::Delete(id) => {
            if store.delete_contact(id)? {
                writeln!(out, "Contact deleted successfully")?;
            } else {
                writeln!(out, "No contact with id {id}")?;
            }
            Ok(())
        }
        ShellCommand::Help => show_help(out),
        ShellCommand::Quit => Ok(()),
    }
}

fn show_list<W: Write>(store: &ContactStore, term: &str, out: &mut W) -> Result<(), AppError> {
    let found = store.search(term);
    if found.is_empty() {
        if term.is_empty() {
            writeln!(out, "No contact yet")?;
        } else {
            writeln!(out, "No contact matches '{term}'")?;
        }
        return Ok(());
    }
    write!(out, "{}", display_contacts(found.into_iter()))?;
    Ok(())
}

fn show_draft<W: Write>(store: &ContactStore, out: &mut W) -> Result<(), AppError> {
    if let Mode::Editing { target, draft } = store.mode() {
        write!(out, "{}", display_draft(*target, draft))?;
    }
    Ok(())
}

fn show_help<W: Write>(out: &mut W) -> Result<(), AppError> {
    writeln!(
        out,
        "Commands:\n  \
        list                 show all contacts\n  \
        search <text>        filter by name, email or phone\n  \
        show <id>            show one contact\n  \
        new                  start a new contact\n  \
        edit <id>            edit an existing contact\n  \
        set <field> <value>  change name, email or phone of the open form\n  \
        save                 store the open form\n  \
        cancel               discard the open form\n  \
        delete <id>          remove a contact\n  \
        quit                 leave"
    )?;
    Ok(())
}

fn prompt<W: Write>(store: &ContactStore, out: &mut W) -> Result<(), AppError> {
    match store.mode() {
        Mode::Browsing => write!(out, "> ")?,
        Mode::Editing { .. } => write!(out, "(editing) > ")?,
    }
    out.flush()?;
    Ok(())
}
