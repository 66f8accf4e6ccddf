use crate::commands::{CmdContext, CmdMessage, CmdResult};
use crate::error::{BoxError, Result};
use crate::index::Position;
use crate::model::{Kind, Score};
use crate::store::DataStore;
use crate::trace::PageAddress;

const USAGE: &str = "Please use the format: score <pageContent> / grade <index> <achieved>/<maximum>";

/// `score <page> / grade <index> <achieved>/<maximum>`
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreCommand {
    module_code: Option<String>,
    position: Position,
    score: Score,
}

impl ScoreCommand {
    pub fn parse(address: &PageAddress, content: &str) -> Result<Self> {
        let tokens: Vec<&str> = content.split_whitespace().collect();
        let [kind, index, score] = tokens.as_slice() else {
            return Err(BoxError::Parse(USAGE.to_string()));
        };
        if kind.to_lowercase() != "grade" {
            return Err(BoxError::Parse(USAGE.to_string()));
        }

        Ok(Self {
            module_code: address.module_code().map(str::to_string),
            position: index.parse()?,
            score: Score::parse(score)?,
        })
    }

    pub fn run<S: DataStore>(&self, ctx: &mut CmdContext<'_, S>) -> Result<CmdResult> {
        let module = ctx.registry.require(self.module_code.as_deref())?;
        let grade = module.grades.get_mut(self.position.zero_based())?;
        grade.set_score(self.score);
        let shown = grade.to_string();
        let code = module.code().to_string();
        ctx.save(&code, Kind::Grade)?;
        tracing::info!(module = %code, position = %self.position, score = %self.score, "scored grade");

        Ok(CmdResult::default()
            .with_message(CmdMessage::success("Noted. I've recorded the score for this grade:"))
            .with_message(CmdMessage::info(shown)))
    }
}
