//! # Parser
//!
//! Turns one line of input into a [`Command`], reading (never changing) the
//! address the user is on.
//!
//! ```text
//! <action> [<page data>] / <content>
//! bye | help | populate
//! ```
//!
//! Page data is completed from the current address before the command sees it:
//!
//! | typed          | on `/modules/CG1111/files` resolves to |
//! |----------------|----------------------------------------|
//! | (nothing)      | `/modules/CG1111/files`                |
//! | `main`         | `/main`                                |
//! | `modules`      | `/modules/CG1111`                      |
//! | `cg1111`       | `/modules/CG1111/files`                |
//! | `cs2113`       | `/modules/CS2113`                      |
//! | `modules cs2113` | `/modules/CS2113`                    |
//!
//! A lone code otherwise expands to plain `/modules/<CODE>`. Naming the module
//! already open is the one exception: it keeps the current tab, so `cg1111`
//! above stays on `files` instead of reopening `tasks`.

use crate::commands::add::AddCommand;
use crate::commands::export::ExportCommand;
use crate::commands::find::FindCommand;
use crate::commands::help::HelpCommand;
use crate::commands::remove::RemoveCommand;
use crate::commands::remove_batch::RemoveBatchCommand;
use crate::commands::score::ScoreCommand;
use crate::commands::set_date::SetDateCommand;
use crate::commands::set_name::SetNameCommand;
use crate::commands::update::UpdateCommand;
use crate::commands::update_batch::UpdateBatchCommand;
use crate::commands::view::ViewCommand;
use crate::commands::Command;
use crate::error::{BoxError, Result};
use crate::trace::PageAddress;

pub const SEPARATOR: &str = " / ";
pub const INVALID_COMMAND: &str =
    "Please provide a valid command: '<action> <page> / <content>' or 'bye'";

pub fn parse(line: &str, current: &PageAddress) -> Result<Command> {
    let line = line.trim();
    let (head, content) = match line.split_once(SEPARATOR) {
        Some((head, content)) => (head, Some(content.trim())),
        None => (line, None),
    };

    let mut head_tokens = head.split_whitespace();
    let action = head_tokens
        .next()
        .map(str::to_lowercase)
        .ok_or_else(|| invalid(line))?;

    let Some(content) = content else {
        return match action.as_str() {
            "bye" => Ok(Command::Exit),
            "help" => Ok(Command::Help(HelpCommand::general())),
            "populate" => Ok(Command::Populate),
            _ => Err(invalid(line)),
        };
    };

    let page_data: Vec<String> = head_tokens.map(str::to_lowercase).collect();
    let address = expand_page_data(&page_data, current)?;
    tracing::debug!(%action, from = %current, resolved = %address, "page data resolved");

    let command = match action.as_str() {
        "view" => Command::Navigate(ViewCommand::parse(&address, content)?),
        "add" => Command::Add(AddCommand::parse(&address, content)?),
        "remove" => Command::Remove(RemoveCommand::parse(&address, content)?),
        "update" => Command::Update(UpdateCommand::parse(&address, content)?),
        "remove-*" => Command::RemoveBatch(RemoveBatchCommand::parse(&address, content)?),
        "update-*" => Command::UpdateBatch(UpdateBatchCommand::parse(&address, content)?),
        "find" => Command::Find(FindCommand::parse(&address, content)?),
        "export" => Command::Export(ExportCommand::parse(&address, content)?),
        "set-name" => Command::SetName(SetNameCommand::parse(&address, content)?),
        "set-date" => Command::SetDate(SetDateCommand::parse(&address, content)?),
        "score" => Command::Score(ScoreCommand::parse(&address, content)?),
        "help" => Command::Help(HelpCommand::topic(content)),
        "bye" => Command::Exit,
        "populate" => Command::Populate,
        _ => return Err(invalid(line)),
    };
    Ok(command)
}

/// Completes typed page data (already lower-cased) into a full address.
pub fn expand_page_data(tokens: &[String], current: &PageAddress) -> Result<PageAddress> {
    let address = match tokens {
        [] => current.clone(),
        [page] if page == "main" => PageAddress::main(),
        [page] if page == "calendar" => PageAddress::calendar(),
        [page] if page == "modules" => match current.module_code() {
            Some(code) => PageAddress::module(code),
            None => PageAddress::modules(),
        },
        [code] => {
            let code = code.to_uppercase();
            match (current.module_code(), current.tab()) {
                (Some(here), Some(tab)) if here == code => PageAddress::module_tab(&code, tab),
                _ => PageAddress::module(&code),
            }
        }
        [page, code] if page == "modules" => PageAddress::module(code),
        _ => {
            tracing::warn!(?tokens, "unrecognised page data");
            return Err(BoxError::Parse(INVALID_COMMAND.to_string()));
        }
    };
    Ok(address)
}

fn invalid(line: &str) -> BoxError {
    tracing::warn!(line, "invalid command");
    BoxError::Parse(INVALID_COMMAND.to_string())
}
