//! # Command Layer
//!
//! One file per action. Each command is a value produced by [`crate::parser`]
//! that owns its parsed operands and runs against a [`CmdContext`].
//!
//! Commands see the page trace through a shared reference only. A successful
//! `view` returns the new address in [`CmdResult::route`] and the API facade
//! commits it, so no other command can move the user.

use crate::config::CourseboxConfig;
use crate::error::Result;
use crate::model::Kind;
use crate::registry::ModuleRegistry;
use crate::store::DataStore;
use crate::trace::{PageAddress, PageTrace};
use std::path::Path;

pub mod add;
pub mod batch;
pub mod export;
pub mod find;
pub mod help;
pub mod populate;
pub mod remove;
pub mod remove_batch;
pub mod score;
pub mod set_date;
pub mod set_name;
pub mod update;
pub mod update_batch;
pub mod view;

pub const FAREWELL: &str = "Bye! Hope to see you again soon.";

/// Everything a command may touch while it runs.
pub struct CmdContext<'a, S: DataStore> {
    pub registry: &'a mut ModuleRegistry,
    pub store: &'a mut S,
    pub trace: &'a PageTrace,
    pub config: &'a CourseboxConfig,
    pub data_dir: &'a Path,
}

impl<S: DataStore> CmdContext<'_, S> {
    /// Persists one collection of one module.
    pub fn save(&mut self, code: &str, kind: Kind) -> Result<()> {
        self.registry.save_collection(self.store, code, kind)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub messages: Vec<CmdMessage>,
    /// Numbered item lines shown under the messages.
    pub listing: Vec<String>,
    /// Set only by a successful `view`.
    pub route: Option<PageAddress>,
    pub exit: bool,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_listing(mut self, listing: Vec<String>) -> Self {
        self.listing = listing;
        self
    }

    pub fn with_route(mut self, route: PageAddress) -> Self {
        self.route = Some(route);
        self
    }

    pub fn exiting(mut self) -> Self {
        self.exit = true;
        self
    }

    /// Messages and listing as plain lines.
    pub fn lines(&self) -> Vec<String> {
        self.messages
            .iter()
            .flat_map(|m| m.content.lines().map(str::to_string))
            .chain(self.listing.iter().cloned())
            .collect()
    }

    pub fn text(&self) -> String {
        self.lines().join("\n")
    }
}

/// One parsed line of input.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Navigate(view::ViewCommand),
    Add(add::AddCommand),
    Remove(remove::RemoveCommand),
    Update(update::UpdateCommand),
    RemoveBatch(remove_batch::RemoveBatchCommand),
    UpdateBatch(update_batch::UpdateBatchCommand),
    Find(find::FindCommand),
    Export(export::ExportCommand),
    Help(help::HelpCommand),
    SetName(set_name::SetNameCommand),
    SetDate(set_date::SetDateCommand),
    Score(score::ScoreCommand),
    Populate,
    Exit,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Navigate(_) => "view",
            Command::Add(_) => "add",
            Command::Remove(_) => "remove",
            Command::Update(_) => "update",
            Command::RemoveBatch(_) => "remove-*",
            Command::UpdateBatch(_) => "update-*",
            Command::Find(_) => "find",
            Command::Export(_) => "export",
            Command::Help(_) => "help",
            Command::SetName(_) => "set-name",
            Command::SetDate(_) => "set-date",
            Command::Score(_) => "score",
            Command::Populate => "populate",
            Command::Exit => "bye",
        }
    }

    pub fn execute<S: DataStore>(&self, ctx: &mut CmdContext<'_, S>) -> Result<CmdResult> {
        tracing::debug!(command = self.name(), at = %ctx.trace.current(), "executing");
        match self {
            Command::Navigate(cmd) => cmd.run(ctx),
            Command::Add(cmd) => cmd.run(ctx),
            Command::Remove(cmd) => cmd.run(ctx),
            Command::Update(cmd) => cmd.run(ctx),
            Command::RemoveBatch(cmd) => cmd.run(ctx),
            Command::UpdateBatch(cmd) => cmd.run(ctx),
            Command::Find(cmd) => cmd.run(ctx),
            Command::Export(cmd) => cmd.run(ctx),
            Command::Help(cmd) => Ok(cmd.run()),
            Command::SetName(cmd) => cmd.run(ctx),
            Command::SetDate(cmd) => cmd.run(ctx),
            Command::Score(cmd) => cmd.run(ctx),
            Command::Populate => populate::run(ctx),
            Command::Exit => Ok(CmdResult::default()
                .with_message(CmdMessage::info(FAREWELL))
                .exiting()),
        }
    }
}
