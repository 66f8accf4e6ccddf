use crate::commands::batch::{self, BatchOp, BatchRequest, INVALID_DONE_VALUE};
use crate::commands::{CmdContext, CmdMessage, CmdResult};
use crate::error::{BoxError, Result};
use crate::store::DataStore;
use crate::trace::PageAddress;

/// `update-* <page> / <task|file> <i1>,<i2>,... <done|notdone>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateBatchCommand {
    module_code: Option<String>,
    request: BatchRequest,
}

impl UpdateBatchCommand {
    pub fn parse(address: &PageAddress, content: &str) -> Result<Self> {
        Ok(Self {
            module_code: address.module_code().map(str::to_string),
            request: BatchRequest::parse(content, BatchOp::Update)?,
        })
    }

    pub fn run<S: DataStore>(&self, ctx: &mut CmdContext<'_, S>) -> Result<CmdResult> {
        let kind = self.request.kind;
        let done = self
            .request
            .done
            .ok_or_else(|| BoxError::Validation(INVALID_DONE_VALUE.to_string()))?;
        let module = ctx.registry.require(self.module_code.as_deref())?;
        let updated = batch::update_at(module, &self.request, done)?;
        let summary = batch::summary(module, kind);
        let code = module.code().to_string();
        ctx.save(&code, kind)?;
        tracing::info!(module = %code, %kind, done, count = updated.len(), "batch update");

        let mut result =
            CmdResult::default().with_message(CmdMessage::success(BatchOp::Update.header(kind)));
        for line in updated {
            result.add_message(CmdMessage::info(line));
        }
        result.add_message(CmdMessage::info(summary));
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use crate::commands::testing::Harness;
    use crate::error::BoxError;
    use crate::model::Kind;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::trace::PageAddress;

    fn harness() -> Harness {
        Harness::new(
            StoreFixture::new()
                .with_module("CG1111", "EPP")
                .with_todos("CG1111", 4)
                .with_lines(
                    "CG1111",
                    Kind::File,
                    &["F | 0 | a.pdf", "F | 0 | b.pdf", "F | 1 | c.pdf"],
                )
                .build(),
        )
        .at(PageAddress::module("CG1111"))
    }

    #[test]
    fn done_lists_ascending() {
        let mut h = harness();
        let result = h.run("update-* / task 4,2 done").unwrap();
        assert_eq!(
            result.lines(),
            vec![
                "Noted. I've updated these tasks:",
                "[T][DONE] Task 2",
                "[T][DONE] Task 4",
                "You currently have 4 tasks in the list.",
            ]
        );
        assert_eq!(h.module("CG1111").len(Kind::Task), 4);
        let reloaded = h.reloaded();
        assert!(reloaded.get("CG1111").unwrap().tasks.get(3).unwrap().done());
    }

    #[test]
    fn notdone_lists_descending() {
        let mut h = harness();
        let result = h.run("update-* / file 1,3 notdone").unwrap();
        assert_eq!(
            result.lines(),
            vec![
                "Noted. I've updated these files:",
                "[NOT DOWNLOADED] c.pdf",
                "[NOT DOWNLOADED] a.pdf",
                "You currently have 3 files in the list.",
            ]
        );
    }

    #[test]
    fn out_of_range_leaves_everything_untouched() {
        let mut h = harness();
        let err = h.run("update-* / task 1,9 done").unwrap_err();
        assert!(matches!(err, BoxError::Index(_)));
        assert!(!h.module("CG1111").tasks.get(0).unwrap().done());
    }
}
