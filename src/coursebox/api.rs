//! # API Facade
//!
//! A thin layer between a UI client and the command layer. A client hands
//! over raw input lines; the facade parses them against the current page,
//! runs the command and commits any navigation.
//!
//! `CourseboxApi<S: DataStore>` is generic over the storage backend:
//! - Production: `CourseboxApi<FileStore>`
//! - Testing: `CourseboxApi<InMemoryStore>`
//!
//! Nothing here prints. Results come back as [`CmdResult`] and errors as
//! [`crate::error::BoxError`], which the client renders as it sees fit.

use crate::commands::{CmdContext, CmdResult};
use crate::config::CourseboxConfig;
use crate::error::Result;
use crate::parser;
use crate::registry::ModuleRegistry;
use crate::store::fs::FileStore;
use crate::store::DataStore;
use crate::trace::{PageAddress, PageTrace};
use std::path::{Path, PathBuf};

pub use crate::commands::{CmdMessage, MessageLevel};

pub struct CourseboxApi<S: DataStore> {
    store: S,
    registry: ModuleRegistry,
    trace: PageTrace,
    config: CourseboxConfig,
    data_dir: PathBuf,
}

impl CourseboxApi<FileStore> {
    /// Opens the data directory, reading `config.json` and every stored module.
    pub fn open(data_dir: impl Into<PathBuf>) -> Result<Self> {
        let data_dir = data_dir.into();
        let config = CourseboxConfig::load(&data_dir)?;
        let store = FileStore::new(data_dir.clone());
        Self::new(store, config, data_dir)
    }
}

impl<S: DataStore> CourseboxApi<S> {
    pub fn new(store: S, config: CourseboxConfig, data_dir: PathBuf) -> Result<Self> {
        let registry = ModuleRegistry::load(&store)?;
        tracing::debug!(modules = registry.len(), data_dir = %data_dir.display(), "opened");
        Ok(Self {
            store,
            registry,
            trace: PageTrace::new(),
            config,
            data_dir,
        })
    }

    /// Runs one input line. The page only changes when the command succeeds
    /// and asks to move.
    pub fn execute(&mut self, line: &str) -> Result<CmdResult> {
        let command = match parser::parse(line, self.trace.current()) {
            Ok(command) => command,
            Err(e) => {
                tracing::warn!(input = line, error = %e, "rejected input");
                return Err(e);
            }
        };

        let mut ctx = CmdContext {
            registry: &mut self.registry,
            store: &mut self.store,
            trace: &self.trace,
            config: &self.config,
            data_dir: &self.data_dir,
        };
        let result = command.execute(&mut ctx)?;

        if let Some(route) = &result.route {
            tracing::debug!(from = %self.trace.current(), to = %route, "navigated");
            self.trace.replace(route.clone());
        }
        Ok(result)
    }

    pub fn current_page(&self) -> &PageAddress {
        self.trace.current()
    }

    pub fn registry(&self) -> &ModuleRegistry {
        &self.registry
    }

    pub fn config(&self) -> &CourseboxConfig {
        &self.config
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
