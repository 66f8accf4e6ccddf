use crate::commands::batch::INVALID_DONE_VALUE;
use crate::commands::{CmdContext, CmdMessage, CmdResult};
use crate::error::{BoxError, Result};
use crate::index::Position;
use crate::model::Kind;
use crate::store::DataStore;
use crate::trace::PageAddress;

const INVALID_FORMAT: &str =
    "Please use valid update format: update <pageContent> / <task|file> <index> <done status>";
const USE_BATCH: &str =
    "To update multiple items, use: update-* <pageContent> / <type> <i1>,<i2>,... <done status>";

/// `update <page> / <task|file> <index> <done|notdone>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateCommand {
    module_code: Option<String>,
    kind: Kind,
    position: Position,
    done: bool,
}

impl UpdateCommand {
    pub fn parse(address: &PageAddress, content: &str) -> Result<Self> {
        let tokens: Vec<&str> = content.split_whitespace().collect();
        let [kind, index, status] = tokens.as_slice() else {
            return Err(BoxError::Parse(INVALID_FORMAT.to_string()));
        };

        let kind: Kind = kind
            .to_lowercase()
            .parse()
            .map_err(|_| BoxError::Parse(INVALID_FORMAT.to_string()))?;
        if index.contains(',') {
            return Err(BoxError::Parse(USE_BATCH.to_string()));
        }
        let position: Position = index.parse()?;
        let done = match status.to_lowercase().as_str() {
            "done" => true,
            "notdone" => false,
            _ => return Err(BoxError::Validation(INVALID_DONE_VALUE.to_string())),
        };
        if !kind.has_status() {
            return Err(BoxError::Validation(format!(
                "The {} do not have a done status.",
                kind.plural()
            )));
        }

        Ok(Self {
            module_code: address.module_code().map(str::to_string),
            kind,
            position,
            done,
        })
    }

    pub fn run<S: DataStore>(&self, ctx: &mut CmdContext<'_, S>) -> Result<CmdResult> {
        let module = ctx.registry.require(self.module_code.as_deref())?;
        let shown = module.set_done(self.kind, self.position.zero_based(), self.done)?;
        let code = module.code().to_string();
        ctx.save(&code, self.kind)?;
        tracing::info!(module = %code, kind = %self.kind, position = %self.position, done = self.done, "updated item");

        Ok(CmdResult::default()
            .with_message(CmdMessage::success(format!(
                "Noted. I've updated this {}:",
                self.kind
            )))
            .with_message(CmdMessage::info(shown)))
    }
}
