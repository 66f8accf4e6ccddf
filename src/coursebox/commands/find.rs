use crate::collection::number_lines;
use crate::commands::{CmdContext, CmdMessage, CmdResult};
use crate::error::{BoxError, Result};
use crate::model::Kind;
use crate::store::DataStore;
use crate::trace::PageAddress;

pub const SPECIFY_TAB: &str = "Please specify the tab to search in.";

/// `find <page> / [<kind>] <query>`. Without a kind word the current tab decides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindCommand {
    module_code: Option<String>,
    kind: Kind,
    query: String,
}

impl FindCommand {
    pub fn parse(address: &PageAddress, content: &str) -> Result<Self> {
        let content = content.trim();
        let (first, rest) = content.split_once(' ').unwrap_or((content, ""));

        let (kind, query) = match first.to_lowercase().parse::<Kind>() {
            Ok(kind) => (kind, rest.trim()),
            Err(_) => {
                let tab = address
                    .tab()
                    .ok_or_else(|| BoxError::Parse(SPECIFY_TAB.to_string()))?;
                (tab.kind(), content)
            }
        };
        if query.is_empty() {
            return Err(BoxError::Parse(
                "Please provide a keyword to search for.".to_string(),
            ));
        }

        Ok(Self {
            module_code: address.module_code().map(str::to_string),
            kind,
            query: query.to_string(),
        })
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn run<S: DataStore>(&self, ctx: &mut CmdContext<'_, S>) -> Result<CmdResult> {
        let module = ctx.registry.require(self.module_code.as_deref())?;
        let found = module.search(self.kind, &self.query);
        tracing::debug!(module = module.code(), kind = %self.kind, query = %self.query, hits = found.len(), "search");

        if found.is_empty() {
            return Ok(CmdResult::default().with_message(CmdMessage::warning(format!(
                "There are no {} that contain {} in your module.",
                self.kind.plural(),
                self.query
            ))));
        }
        Ok(CmdResult::default()
            .with_message(CmdMessage::info(format!(
                "Here are the {} that contain {} in your module:",
                self.kind.plural(),
                self.query
            )))
            .with_listing(number_lines(found)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::Harness;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::trace::Tab;

    fn harness() -> Harness {
        Harness::new(
            StoreFixture::new()
                .with_module("CG2222", "Accounting")
                .with_lines(
                    "CG2222",
                    Kind::File,
                    &["F | 0 | Sales Q2.xlsx", "F | 0 | costs.xlsx", "F | 1 | sales Q1.xlsx"],
                )
                .with_lines("CG2222", Kind::Task, &["T | 0 | sales pitch"])
                .build(),
        )
        .at(PageAddress::module_tab("CG2222", Tab::Files))
    }

    #[test]
    fn searches_the_current_tab() {
        let cmd = FindCommand::parse(&PageAddress::module_tab("CG2222", Tab::Files), "sales").unwrap();
        assert_eq!(cmd.kind(), Kind::File);
        assert_eq!(cmd.query(), "sales");

        let mut h = harness();
        let result = h.run("find / sales").unwrap();
        assert_eq!(
            result.messages[0].content,
            "Here are the files that contain sales in your module:"
        );
        assert_eq!(
            result.listing,
            vec!["1. [DOWNLOADED] sales Q1.xlsx", "2. [NOT DOWNLOADED] Sales Q2.xlsx"]
        );
    }

    #[test]
    fn explicit_kind_overrides_tab() {
        let mut h = harness();
        let result = h.run("find / task SALES").unwrap();
        assert_eq!(result.listing, vec!["1. [T][NOT DONE] sales pitch"]);
    }

    #[test]
    fn needs_a_tab_or_kind() {
        let err = FindCommand::parse(&PageAddress::module("CG2222"), "sales").unwrap_err();
        assert_eq!(err.to_string(), SPECIFY_TAB);
        assert!(FindCommand::parse(&PageAddress::module("CG2222"), "file sales").is_ok());
    }

    #[test]
    fn no_matches_is_a_warning() {
        let mut h = harness();
        let result = h.run("find / invoices").unwrap();
        assert!(result.listing.is_empty());
        assert_eq!(result.messages[0].level, crate::commands::MessageLevel::Warning);
    }
}
