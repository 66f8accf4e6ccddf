use crate::commands::add::split_marker;
use crate::commands::{CmdContext, CmdMessage, CmdResult};
use crate::error::{BoxError, Result};
use crate::index::Position;
use crate::model::{parse_date, Kind};
use crate::store::DataStore;
use crate::trace::PageAddress;
use chrono::NaiveDateTime;

const USAGE: &str = "set-date <pageContent> / task <index> to: <date> (or to: <start> to <end>)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NewDate {
    Due(NaiveDateTime),
    Span(NaiveDateTime, NaiveDateTime),
}

/// `set-date <page> / task <index> to: <date>` for deadlines and
/// `... to: <start> to <end>` for everything with a span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetDateCommand {
    module_code: Option<String>,
    position: Position,
    date: NewDate,
}

impl SetDateCommand {
    pub fn parse(address: &PageAddress, content: &str) -> Result<Self> {
        let (target, when) = split_marker(content.trim(), " to: ", USAGE)?;
        let tokens: Vec<&str> = target.split_whitespace().collect();
        let [kind, index] = tokens.as_slice() else {
            return Err(BoxError::Parse(format!("Please use the format: {}", USAGE)));
        };
        if kind.to_lowercase().parse::<Kind>().ok() != Some(Kind::Task) {
            return Err(BoxError::Validation("Only tasks have dates.".to_string()));
        }
        let position: Position = index.parse()?;

        let date = match when.split_once(" to ") {
            Some((start, end)) => NewDate::Span(parse_date(start)?, parse_date(end)?),
            None => NewDate::Due(parse_date(when)?),
        };

        Ok(Self {
            module_code: address.module_code().map(str::to_string),
            position,
            date,
        })
    }

    pub fn run<S: DataStore>(&self, ctx: &mut CmdContext<'_, S>) -> Result<CmdResult> {
        let module = ctx.registry.require(self.module_code.as_deref())?;
        let task = module.tasks.get_mut(self.position.zero_based())?;
        match self.date {
            NewDate::Due(due) => task.set_due(due)?,
            NewDate::Span(start, end) => task.set_span(start, end)?,
        }
        let shown = task.to_string();
        let code = module.code().to_string();
        ctx.save(&code, Kind::Task)?;
        tracing::info!(module = %code, position = %self.position, "rescheduled task");

        Ok(CmdResult::default()
            .with_message(CmdMessage::success("Noted. I've changed the date of this task:"))
            .with_message(CmdMessage::info(shown)))
    }
}
