//! Line-oriented front end: command parsing, dispatch, and rendering.

use std::{
    fmt::Write as _,
    io::{self, BufRead, Write},
};

use client_core::{
    AddressListController, AddressStore, ConfirmationGate, ControllerError, DeleteOutcome,
    NoticeLevel, RowMode, ViewState,
};
use shared::domain::{AddressField, AddressId};
use thiserror::Error;
use tracing::debug;

pub const USAGE: &str = "\
commands:
  list                     reload addresses from the store
  add <cep>                add an address by postal code
  edit <id>                start editing an address
  set <field> <value>      change a draft field (postalCode, street, neighborhood, city, region)
  save                     save the draft
  cancel                   discard the draft
  delete <id>              delete an address
  help                     show this help
  quit                     exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Add(String),
    Edit(AddressId),
    Set(AddressField, String),
    Save,
    Cancel,
    Delete(AddressId),
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command `{0}`; type `help` for the list")]
    Unknown(String),
    #[error("usage: {0}")]
    Usage(&'static str),
}

fn parse_id(raw: &str, usage: &'static str) -> Result<AddressId, CommandError> {
    raw.trim()
        .parse::<i64>()
        .map(AddressId)
        .map_err(|_| CommandError::Usage(usage))
}

/// Blank lines parse to `None`.
pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (name, rest) = line
        .split_once(char::is_whitespace)
        .map(|(name, rest)| (name, rest.trim()))
        .unwrap_or((line, ""));

    let command = match name.to_ascii_lowercase().as_str() {
        "list" | "ls" => Command::List,
        "add" => Command::Add(rest.to_string()),
        "edit" => Command::Edit(parse_id(rest, "edit <id>")?),
        "set" => {
            let (field, value) = rest
                .split_once(char::is_whitespace)
                .map(|(field, value)| (field, value.trim()))
                .unwrap_or((rest, ""));
            if field.is_empty() {
                return Err(CommandError::Usage("set <field> <value>"));
            }
            let field = field
                .parse::<AddressField>()
                .map_err(|_| CommandError::Usage("set <field> <value>"))?;
            Command::Set(field, value.to_string())
        }
        "save" => Command::Save,
        "cancel" => Command::Cancel,
        "delete" | "rm" => Command::Delete(parse_id(rest, "delete <id>")?),
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}

pub async fn execute<S: AddressStore, G: ConfirmationGate>(
    controller: &mut AddressListController<S, G>,
    command: Command,
) -> Result<(), ControllerError> {
    match command {
        Command::List => controller.refresh().await,
        Command::Add(raw) => controller.add(&raw).await,
        Command::Edit(id) => controller.begin_edit(id),
        Command::Set(field, value) => {
            if !controller.update_draft_field(field, value) {
                println!("Nothing is being edited; use `edit <id>` first.");
            }
            Ok(())
        }
        Command::Save => controller.save_edit().await,
        Command::Cancel => {
            controller.cancel_edit();
            Ok(())
        }
        Command::Delete(id) => {
            if controller.delete(id).await? == DeleteOutcome::Declined {
                println!("Delete cancelled.");
            }
            Ok(())
        }
        Command::Help | Command::Quit => Ok(()),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    /// Nothing changed; prompt again without re-rendering.
    Skip,
    Render,
    Quit,
}

/// Handles one input line. Command failures are surfaced through the
/// controller's notice and never end the session.
pub async fn handle_line<S: AddressStore, G: ConfirmationGate>(
    controller: &mut AddressListController<S, G>,
    line: &str,
) -> LineOutcome {
    let command = match parse_command(line) {
        Ok(Some(command)) => command,
        Ok(None) => return LineOutcome::Skip,
        Err(err) => {
            println!("{err}");
            return LineOutcome::Skip;
        }
    };
    match command {
        Command::Quit => LineOutcome::Quit,
        Command::Help => {
            println!("{USAGE}");
            LineOutcome::Skip
        }
        command => {
            if let Err(err) = execute(controller, command).await {
                debug!(error = %err, "command failed");
            }
            LineOutcome::Render
        }
    }
}

pub fn render(view: &ViewState<'_>) -> String {
    let mut out = String::new();
    if let Some(notice) = view.notice {
        let marker = match notice.level {
            NoticeLevel::Info => "*",
            NoticeLevel::Error => "!",
        };
        let _ = writeln!(out, "{marker} {}", notice.message);
    }

    if view.rows.is_empty() {
        out.push_str("No addresses.\n");
    }
    for row in &view.rows {
        match row.mode {
            RowMode::Viewing => {
                let _ = writeln!(out, "[{}] {}", row.record.id, row.record.summary());
            }
            RowMode::Editing(draft) => {
                let _ = writeln!(out, "[{}] editing (save | cancel)", row.record.id);
                for field in AddressField::ALL {
                    let _ = writeln!(out, "    {field}: {}", draft.get(field));
                }
            }
        }
    }

    if !view.postal_code_input.is_empty() {
        let _ = writeln!(out, "pending postal code: {}", view.postal_code_input);
    }
    out
}

/// Reads one line from stdin off the async runtime. `None` on end of input.
pub async fn read_line() -> io::Result<Option<String>> {
    tokio::task::spawn_blocking(|| -> io::Result<Option<String>> {
        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        Ok((read > 0).then_some(line))
    })
    .await
    .map_err(io::Error::other)?
}

pub async fn run<S: AddressStore, G: ConfirmationGate>(
    mut controller: AddressListController<S, G>,
) -> anyhow::Result<()> {
    println!("{USAGE}\n");
    if let Err(err) = controller.refresh().await {
        debug!(error = %err, "initial load failed");
    }
    show(&mut controller);

    loop {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = read_line().await? else {
            break;
        };

        match handle_line(&mut controller, &line).await {
            LineOutcome::Quit => break,
            LineOutcome::Skip => continue,
            LineOutcome::Render => show(&mut controller),
        }
    }
    Ok(())
}

fn show<S: AddressStore, G: ConfirmationGate>(controller: &mut AddressListController<S, G>) {
    print!("{}", render(&controller.view()));
    controller.dismiss_notice();
}

#[cfg(test)]
#[path = "tests/shell_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "tests/dispatch_tests.rs"]
mod dispatch_tests;
