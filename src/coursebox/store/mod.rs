//! # Storage Layer
//!
//! Persistence sits behind the [`DataStore`] trait so commands can be tested
//! against [`memory::InMemoryStore`] and run against [`fs::FileStore`].
//!
//! Stores only move lines of text. Encoding entities into lines and decoding
//! them back is the model's job, so a store never needs to know what a task is.
//!
//! ## Layout
//!
//! For `FileStore`:
//! ```text
//! <data dir>/
//! ├── modules.txt        # one `CODE | name` line per module
//! ├── config.json        # CourseboxConfig
//! └── CG1111/
//!     ├── tasks.txt
//!     ├── files.txt
//!     ├── grades.txt
//!     └── notes.txt
//! ```

use crate::error::Result;
use crate::model::Kind;
use std::fmt;

pub mod fs;
pub mod memory;

/// Identifies one stored list of lines.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DataKey {
    /// The module index.
    Modules,
    /// One collection of one module.
    Collection(String, Kind),
}

impl DataKey {
    pub fn collection(code: &str, kind: Kind) -> Self {
        DataKey::Collection(code.to_uppercase(), kind)
    }
}

impl fmt::Display for DataKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataKey::Modules => f.write_str("modules"),
            DataKey::Collection(code, kind) => write!(f, "{}/{}", code, kind.plural()),
        }
    }
}

/// Line-oriented storage.
pub trait DataStore {
    /// Lines stored under `key`, or an empty list when nothing was saved yet.
    fn load_data(&self, key: &DataKey) -> Result<Vec<String>>;

    /// Replace everything stored under `key`.
    fn save_data(&mut self, key: &DataKey, lines: &[String]) -> Result<()>;

    /// Drop everything stored under `key`. Missing keys are not an error.
    fn remove_data(&mut self, key: &DataKey) -> Result<()>;
}
