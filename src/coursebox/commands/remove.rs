use crate::commands::batch;
use crate::commands::{CmdContext, CmdMessage, CmdResult};
use crate::error::{BoxError, Result};
use crate::index::Position;
use crate::model::Kind;
use crate::registry::ModuleRegistry;
use crate::store::DataStore;
use crate::trace::PageAddress;

const INVALID_FORMAT: &str =
    "Please use valid remove format: remove <pageContent> / <type> <index> or remove / module <code>";
const USE_BATCH: &str =
    "To remove multiple items, use: remove-* <pageContent> / <type> <i1>,<i2>,...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveTarget {
    Item(Kind, Position),
    Module(String),
}

/// `remove <page> / <kind> <index>` or `remove / module <CODE>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveCommand {
    module_code: Option<String>,
    target: RemoveTarget,
}

impl RemoveCommand {
    pub fn parse(address: &PageAddress, content: &str) -> Result<Self> {
        let tokens: Vec<&str> = content.split_whitespace().collect();
        let [kind, operand] = tokens.as_slice() else {
            return Err(BoxError::Parse(INVALID_FORMAT.to_string()));
        };

        let target = if kind.eq_ignore_ascii_case("module") {
            RemoveTarget::Module(operand.to_uppercase())
        } else {
            let kind: Kind = kind
                .to_lowercase()
                .parse()
                .map_err(|_| BoxError::Parse(INVALID_FORMAT.to_string()))?;
            if operand.contains(',') {
                return Err(BoxError::Parse(USE_BATCH.to_string()));
            }
            RemoveTarget::Item(kind, operand.parse()?)
        };

        Ok(Self {
            module_code: address.module_code().map(str::to_string),
            target,
        })
    }

    pub fn target(&self) -> &RemoveTarget {
        &self.target
    }

    pub fn run<S: DataStore>(&self, ctx: &mut CmdContext<'_, S>) -> Result<CmdResult> {
        match &self.target {
            RemoveTarget::Item(kind, position) => self.remove_item(ctx, *kind, *position),
            RemoveTarget::Module(code) => remove_module(ctx, code),
        }
    }

    fn remove_item<S: DataStore>(
        &self,
        ctx: &mut CmdContext<'_, S>,
        kind: Kind,
        position: Position,
    ) -> Result<CmdResult> {
        let module = ctx.registry.require(self.module_code.as_deref())?;
        let removed = module.remove(kind, position.zero_based())?;
        let summary = batch::summary(module, kind);
        let code = module.code().to_string();
        ctx.save(&code, kind)?;
        tracing::info!(module = %code, %kind, %position, "removed item");

        Ok(CmdResult::default()
            .with_message(CmdMessage::success(format!(
                "Noted. I've removed this {}:",
                kind
            )))
            .with_message(CmdMessage::info(removed))
            .with_message(CmdMessage::info(summary)))
    }
}

fn remove_module<S: DataStore>(ctx: &mut CmdContext<'_, S>, code: &str) -> Result<CmdResult> {
    let module = ctx.registry.remove(code)?;
    ctx.registry.save_index(ctx.store)?;
    ModuleRegistry::drop_module_data(ctx.store, module.code())?;
    tracing::info!(module = module.code(), "removed module");

    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Removed module {}: {}",
        module.code(),
        module.name()
    ))))
}
