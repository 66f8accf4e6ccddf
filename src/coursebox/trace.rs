//! # Page Trace
//!
//! The page trace records where the user currently is. The same raw input means
//! different things on different pages, so the parser reads it on every line.
//!
//! An address is one of:
//!
//! ```text
//! /main
//! /calendar
//! /modules
//! /modules/CG1111
//! /modules/CG1111/tasks
//! ```
//!
//! As a stack (innermost first) the last address reads `[tasks, CG1111, modules]`.
//!
//! Constructors only build valid shapes: a module code only exists under
//! `modules`, and a tab only exists under a module. The trace itself is
//! replaced wholesale and never edited token by token, so a failed navigation
//! cannot leave it half-updated.

use crate::error::BoxError;
use crate::model::Kind;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Main,
    Calendar,
    Modules,
}

impl Page {
    pub fn as_str(&self) -> &'static str {
        match self {
            Page::Main => "main",
            Page::Calendar => "calendar",
            Page::Modules => "modules",
        }
    }
}

impl FromStr for Page {
    type Err = BoxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "main" => Ok(Page::Main),
            "calendar" => Ok(Page::Calendar),
            "modules" => Ok(Page::Modules),
            _ => Err(BoxError::NotFound(
                "Sorry, that page does not exist. Please choose 'main', 'calendar', or 'modules'."
                    .to_string(),
            )),
        }
    }
}

/// One of the named sub-views of a module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    Tasks,
    Files,
    Grades,
    Notes,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Tasks, Tab::Files, Tab::Grades, Tab::Notes];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tab::Tasks => "tasks",
            Tab::Files => "files",
            Tab::Grades => "grades",
            Tab::Notes => "notes",
        }
    }

    pub fn kind(&self) -> Kind {
        match self {
            Tab::Tasks => Kind::Task,
            Tab::Files => Kind::File,
            Tab::Grades => Kind::Grade,
            Tab::Notes => Kind::Note,
        }
    }

    pub fn is_tab_name(s: &str) -> bool {
        Tab::ALL.iter().any(|tab| tab.as_str() == s)
    }
}

impl FromStr for Tab {
    type Err = BoxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tab::ALL
            .iter()
            .copied()
            .find(|tab| tab.as_str() == s)
            .ok_or_else(|| {
                BoxError::NotFound(
                    "Sorry, that tab does not exist. Please choose 'tasks', 'files', 'notes' or 'grades'."
                        .to_string(),
                )
            })
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A full navigation address: `{page, module code?, tab?}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageAddress {
    page: Page,
    module_code: Option<String>,
    tab: Option<Tab>,
}

impl PageAddress {
    pub fn main() -> Self {
        Self::at(Page::Main)
    }

    pub fn calendar() -> Self {
        Self::at(Page::Calendar)
    }

    pub fn modules() -> Self {
        Self::at(Page::Modules)
    }

    pub fn at(page: Page) -> Self {
        Self {
            page,
            module_code: None,
            tab: None,
        }
    }

    /// `/modules/<CODE>`. The code is upper-cased.
    pub fn module(code: &str) -> Self {
        Self {
            page: Page::Modules,
            module_code: Some(code.to_uppercase()),
            tab: None,
        }
    }

    /// `/modules/<CODE>/<tab>`. The code is upper-cased.
    pub fn module_tab(code: &str, tab: Tab) -> Self {
        Self {
            tab: Some(tab),
            ..Self::module(code)
        }
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn module_code(&self) -> Option<&str> {
        self.module_code.as_deref()
    }

    pub fn tab(&self) -> Option<Tab> {
        self.tab
    }

    /// Stack view of the address, innermost token first.
    pub fn tokens(&self) -> Vec<String> {
        let mut tokens = Vec::with_capacity(3);
        if let Some(tab) = self.tab {
            tokens.push(tab.as_str().to_string());
        }
        if let Some(code) = &self.module_code {
            tokens.push(code.clone());
        }
        tokens.push(self.page.as_str().to_string());
        tokens
    }

    /// `/`-delimited route consumed by page-switching UIs, e.g. `/modules/CG1111/tasks`.
    pub fn route(&self) -> String {
        let mut route = String::new();
        for token in self.tokens().iter().rev() {
            route.push('/');
            route.push_str(token);
        }
        route
    }
}

impl Default for PageAddress {
    fn default() -> Self {
        Self::main()
    }
}

impl fmt::Display for PageAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.route())
    }
}

/// The session's current position. Replaced wholesale on successful navigation.
#[derive(Debug, Clone, Default)]
pub struct PageTrace {
    current: PageAddress,
}

impl PageTrace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace(&mut self, address: PageAddress) {
        tracing::debug!(from = %self.current, to = %address, "page trace replaced");
        self.current = address;
    }

    pub fn current(&self) -> &PageAddress {
        &self.current
    }

    pub fn tokens(&self) -> Vec<String> {
        self.current.tokens()
    }
}
