use crate::commands::add::split_marker;
use crate::commands::{CmdContext, CmdMessage, CmdResult};
use crate::error::{BoxError, Result};
use crate::index::Position;
use crate::model::{validate_text, Kind};
use crate::store::DataStore;
use crate::trace::PageAddress;

const USAGE: &str = "set-name <pageContent> / <task|file|grade> <index> to: <new name>";

/// `set-name <page> / <task|file|grade> <index> to: <new name>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetNameCommand {
    module_code: Option<String>,
    kind: Kind,
    position: Position,
    name: String,
}

impl SetNameCommand {
    pub fn parse(address: &PageAddress, content: &str) -> Result<Self> {
        let (target, name) = split_marker(content.trim(), " to: ", USAGE)?;
        let tokens: Vec<&str> = target.split_whitespace().collect();
        let [kind, index] = tokens.as_slice() else {
            return Err(BoxError::Parse(format!("Please use the format: {}", USAGE)));
        };

        let kind = match kind.to_lowercase().parse::<Kind>() {
            Ok(Kind::Note) | Err(_) => {
                return Err(BoxError::Parse(format!("Please use the format: {}", USAGE)))
            }
            Ok(kind) => kind,
        };
        let position: Position = index.parse()?;
        let name = validate_text(kind, name)?;

        Ok(Self {
            module_code: address.module_code().map(str::to_string),
            kind,
            position,
            name,
        })
    }

    pub fn run<S: DataStore>(&self, ctx: &mut CmdContext<'_, S>) -> Result<CmdResult> {
        let module = ctx.registry.require(self.module_code.as_deref())?;
        let shown = module.rename(self.kind, self.position.zero_based(), self.name.clone())?;
        let code = module.code().to_string();
        ctx.save(&code, self.kind)?;
        tracing::info!(module = %code, kind = %self.kind, position = %self.position, "renamed item");

        Ok(CmdResult::default()
            .with_message(CmdMessage::success(format!(
                "Noted. I've renamed this {}:",
                self.kind
            )))
            .with_message(CmdMessage::info(shown)))
    }
}
