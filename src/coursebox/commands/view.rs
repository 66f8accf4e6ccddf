use crate::commands::{CmdContext, CmdMessage, CmdResult};
use crate::error::{BoxError, Result};
use crate::store::DataStore;
use crate::trace::{Page, PageAddress, Tab};

pub const MISSING_PAGE: &str = "Please input the page you want to change to.";
pub const SPECIFY_MODULE: &str = "Please specify module before tab. E.g. 'view / <moduleCode> <tab>'";
pub const INCORRECT_FORMAT: &str = "Please input correct format for view command.";
const MODULE_NOT_FOUND: &str =
    "Sorry, that module or module tab does not exist. These are the current modules:";

/// Navigation target, resolved against the address the line was typed on.
///
/// The tab is kept as typed and checked at execution, after the module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewCommand {
    page: Page,
    module_code: Option<String>,
    tab: Option<String>,
}

impl ViewCommand {
    pub fn parse(address: &PageAddress, content: &str) -> Result<Self> {
        let content = content.to_lowercase();
        let tokens: Vec<&str> = content.split_whitespace().collect();

        let (page, module_code, tab) = match tokens.as_slice() {
            [] => return Err(BoxError::Parse(MISSING_PAGE.to_string())),
            ["main"] => (Page::Main, None, None),
            ["calendar"] => (Page::Calendar, None, None),
            ["modules"] => (Page::Modules, None, None),
            [tab] if Tab::is_tab_name(tab) => {
                let code = address
                    .module_code()
                    .ok_or_else(|| BoxError::Parse(SPECIFY_MODULE.to_string()))?;
                (Page::Modules, Some(code.to_string()), Some(tab.to_string()))
            }
            [code] => (Page::Modules, Some(code.to_string()), Some("tasks".to_string())),
            ["modules", code] => (Page::Modules, Some(code.to_string()), Some("tasks".to_string())),
            [code, tab] if Tab::is_tab_name(tab) => {
                (Page::Modules, Some(code.to_string()), Some(tab.to_string()))
            }
            ["modules", code, tab] => (Page::Modules, Some(code.to_string()), Some(tab.to_string())),
            _ => return Err(BoxError::Parse(INCORRECT_FORMAT.to_string())),
        };

        Ok(Self {
            page,
            module_code: module_code.map(|c| c.to_uppercase()),
            tab,
        })
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn module_code(&self) -> Option<&str> {
        self.module_code.as_deref()
    }

    pub fn tab(&self) -> Option<&str> {
        self.tab.as_deref()
    }

    /// Builds and validates the new address. Nothing is committed here.
    pub fn run<S: DataStore>(&self, ctx: &mut CmdContext<'_, S>) -> Result<CmdResult> {
        let old = ctx.trace.current().route();

        let Some(code) = self.module_code() else {
            let address = PageAddress::at(self.page);
            let listing = if self.page == Page::Modules {
                ctx.registry
                    .modules()
                    .enumerate()
                    .map(|(i, m)| format!("{}. {}: {}", i + 1, m.code(), m.name()))
                    .collect()
            } else {
                Vec::new()
            };
            return Ok(changed(&old, address).with_listing(listing));
        };

        if !ctx.registry.contains(code) {
            let mut message = MODULE_NOT_FOUND.to_string();
            for existing in ctx.registry.codes() {
                message.push('\n');
                message.push_str(&existing);
            }
            tracing::warn!(code, "view of unknown module");
            return Err(BoxError::NotFound(message));
        }

        let module = ctx.registry.get(code)?;
        match self.tab() {
            Some(tab) => {
                let tab: Tab = tab.parse()?;
                let listing = module.numbered(tab.kind());
                Ok(changed(&old, PageAddress::module_tab(code, tab)).with_listing(listing))
            }
            None => Ok(changed(&old, PageAddress::module(code))),
        }
    }
}

fn changed(old: &str, address: PageAddress) -> CmdResult {
    CmdResult::default()
        .with_message(CmdMessage::info(format!(
            "Changed from page {} to {}",
            old,
            address.route()
        )))
        .with_route(address)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::Harness;
    use crate::store::memory::fixtures::StoreFixture;

    fn harness() -> Harness {
        Harness::new(
            StoreFixture::new()
                .with_module("CG1111", "EPP")
                .with_module("CS2113", "SE")
                .with_todos("CG1111", 2)
                .build(),
        )
    }

    #[test]
    fn parses_one_two_and_three_tokens() {
        let here = PageAddress::main();
        let cmd = ViewCommand::parse(&here, "modules cg1111 tasks").unwrap();
        assert_eq!(cmd.page(), Page::Modules);
        assert_eq!(cmd.module_code(), Some("CG1111"));
        assert_eq!(cmd.tab(), Some("tasks"));

        let cmd = ViewCommand::parse(&here, "cs2113").unwrap();
        assert_eq!(cmd.module_code(), Some("CS2113"));
        assert_eq!(cmd.tab(), Some("tasks"));

        let cmd = ViewCommand::parse(&here, "cs2113 notes").unwrap();
        assert_eq!(cmd.tab(), Some("notes"));

        let cmd = ViewCommand::parse(&here, "Calendar").unwrap();
        assert_eq!(cmd.page(), Page::Calendar);
        assert_eq!(cmd.module_code(), None);
    }

    #[test]
    fn bare_tab_needs_a_module_in_context() {
        let err = ViewCommand::parse(&PageAddress::main(), "files").unwrap_err();
        assert_eq!(err.to_string(), SPECIFY_MODULE);

        let cmd = ViewCommand::parse(&PageAddress::module("CG1111"), "files").unwrap();
        assert_eq!(cmd.module_code(), Some("CG1111"));
        assert_eq!(cmd.tab(), Some("files"));
    }

    #[test]
    fn rejects_malformed_content() {
        let here = PageAddress::main();
        assert_eq!(
            ViewCommand::parse(&here, "").unwrap_err().to_string(),
            MISSING_PAGE
        );
        assert_eq!(
            ViewCommand::parse(&here, "cg1111 stuff").unwrap_err().to_string(),
            INCORRECT_FORMAT
        );
        assert_eq!(
            ViewCommand::parse(&here, "a b c d").unwrap_err().to_string(),
            INCORRECT_FORMAT
        );
        assert_eq!(
            ViewCommand::parse(&here, "main cg1111 tasks").unwrap_err().to_string(),
            INCORRECT_FORMAT
        );
    }

    #[test]
    fn navigates_and_lists_the_tab() {
        let mut h = harness();
        let result = h.run("view / cg1111").unwrap();
        assert_eq!(
            result.messages[0].content,
            "Changed from page /main to /modules/CG1111/tasks"
        );
        assert_eq!(result.listing, vec!["1. [T][NOT DONE] Task 1", "2. [T][NOT DONE] Task 2"]);
        assert_eq!(h.trace.current(), &PageAddress::module_tab("CG1111", Tab::Tasks));
    }

    #[test]
    fn bare_tab_stays_in_the_module_just_opened() {
        for tab in Tab::ALL {
            let mut h = harness();
            h.run("view / cg1111 files").unwrap();
            let result = h.run(&format!("view / {}", tab.as_str())).unwrap();
            assert_eq!(
                result.route,
                Some(PageAddress::module_tab("CG1111", tab)),
                "tab {}",
                tab.as_str()
            );
            assert_eq!(
                h.trace.current(),
                &PageAddress::module_tab("CG1111", tab),
                "tab {}",
                tab.as_str()
            );
        }
    }

    #[test]
    fn unknown_module_lists_existing_codes_and_keeps_trace() {
        let mut h = harness().at(PageAddress::calendar());
        let err = h.run("view / modules xx9999").unwrap_err();
        assert!(matches!(err, BoxError::NotFound(_)));
        assert!(err.to_string().ends_with("CG1111\nCS2113"));
        assert_eq!(h.trace.current(), &PageAddress::calendar());
    }

    #[test]
    fn unknown_tab_is_rejected_after_module_check() {
        let mut h = harness();
        let err = h.run("view / modules cg1111 exams").unwrap_err();
        assert!(err.to_string().starts_with("Sorry, that tab does not exist"));
        assert_eq!(h.trace.current(), &PageAddress::main());
    }

    #[test]
    fn modules_page_lists_modules() {
        let mut h = harness();
        let result = h.run("view / modules").unwrap();
        assert_eq!(result.listing, vec!["1. CG1111: EPP", "2. CS2113: SE"]);
        assert_eq!(result.route, Some(PageAddress::modules()));
    }
}
