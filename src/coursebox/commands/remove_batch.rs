use crate::commands::batch::{self, BatchOp, BatchRequest};
use crate::commands::{CmdContext, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;
use crate::trace::PageAddress;

/// `remove-* <page> / <kind> <i1>,<i2>,...`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveBatchCommand {
    module_code: Option<String>,
    request: BatchRequest,
}

impl RemoveBatchCommand {
    pub fn parse(address: &PageAddress, content: &str) -> Result<Self> {
        Ok(Self {
            module_code: address.module_code().map(str::to_string),
            request: BatchRequest::parse(content, BatchOp::Remove)?,
        })
    }

    pub fn run<S: DataStore>(&self, ctx: &mut CmdContext<'_, S>) -> Result<CmdResult> {
        let kind = self.request.kind;
        let module = ctx.registry.require(self.module_code.as_deref())?;
        let removed = batch::remove_at(module, &self.request)?;
        let summary = batch::summary(module, kind);
        let code = module.code().to_string();
        ctx.save(&code, kind)?;
        tracing::info!(module = %code, %kind, count = removed.len(), "batch removal");

        let mut result =
            CmdResult::default().with_message(CmdMessage::success(BatchOp::Remove.header(kind)));
        for line in removed {
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
    use crate::model::{Item, Kind};
    use crate::store::memory::fixtures::StoreFixture;
    use crate::trace::{PageAddress, Tab};

    fn harness() -> Harness {
        Harness::new(
            StoreFixture::new()
                .with_module("CG1111", "EPP")
                .with_todos("CG1111", 5)
                .with_lines("CG1111", Kind::Note, &["N | a", "N | b", "N | c"])
                .build(),
        )
        .at(PageAddress::module_tab("CG1111", Tab::Tasks))
    }

    #[test]
    fn removes_and_persists() {
        let mut h = harness();
        let result = h.run("remove-* / task 3,1,2").unwrap();
        assert_eq!(
            result.lines(),
            vec![
                "Noted. I've removed these tasks:",
                "[T][NOT DONE] Task 3",
                "[T][NOT DONE] Task 2",
                "[T][NOT DONE] Task 1",
                "You currently have 2 tasks in the list.",
            ]
        );

        let reloaded = h.reloaded();
        let names: Vec<&str> = reloaded
            .get("CG1111")
            .unwrap()
            .tasks
            .items()
            .iter()
            .map(|t| t.name())
            .collect();
        assert_eq!(names, vec!["Task 4", "Task 5"]);
    }

    #[test]
    fn singular_summary_for_one_remaining() {
        let mut h = harness();
        let result = h.run("remove-* / note 1,3").unwrap();
        assert_eq!(result.lines().last().unwrap(), "You currently have 1 note in the list.");
        assert_eq!(h.module("CG1111").notes.get(0).unwrap().name(), "b");
    }

    #[test]
    fn single_index_is_redirected_without_mutation() {
        let mut h = harness();
        let err = h.run("remove-* / task 2").unwrap_err();
        assert!(matches!(err, BoxError::Parse(_)));
        assert_eq!(h.module("CG1111").len(Kind::Task), 5);
    }

    #[test]
    fn grades_are_not_batch_targets() {
        let mut h = Harness::new(
            StoreFixture::new()
                .with_module("CG1111", "EPP")
                .with_lines(
                    "CG1111",
                    Kind::Grade,
                    &["G | A | 10", "G | B | 20", "G | C | 30"],
                )
                .build(),
        )
        .at(PageAddress::module_tab("CG1111", Tab::Grades));

        let err = h.run("remove-* / grade 1,2").unwrap_err();
        assert!(matches!(err, BoxError::Parse(_)));
        assert_eq!(h.module("CG1111").len(Kind::Grade), 3);
        assert_eq!(h.reloaded().get("CG1111").unwrap().len(Kind::Grade), 3);
    }

    #[test]
    fn needs_a_module() {
        let mut h = harness().at(PageAddress::main());
        let err = h.run("remove-* / task 1,2").unwrap_err();
        assert!(matches!(err, BoxError::Parse(_)));

        let err = h.run("remove-* xx0000 / task 1,2").unwrap_err();
        assert!(matches!(err, BoxError::NotFound(_)));

        h.run("remove-* cg1111 / task 1,2").unwrap();
        assert_eq!(h.module("CG1111").len(Kind::Task), 3);
    }
}
