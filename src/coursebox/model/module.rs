use super::{FileEntry, Grade, Kind, Note, Task, DELIMITER};
use crate::collection::OrderedCollection;
use crate::error::{BoxError, Result};

/// Runs `$body` with `$c` bound to the collection `$kind` selects.
macro_rules! on_collection {
    (mut $module:expr, $kind:expr, |$c:ident| $body:expr) => {
        match $kind {
            Kind::Task => {
                let $c = &mut $module.tasks;
                $body
            }
            Kind::File => {
                let $c = &mut $module.files;
                $body
            }
            Kind::Grade => {
                let $c = &mut $module.grades;
                $body
            }
            Kind::Note => {
                let $c = &mut $module.notes;
                $body
            }
        }
    };
    ($module:expr, $kind:expr, |$c:ident| $body:expr) => {
        match $kind {
            Kind::Task => {
                let $c = &$module.tasks;
                $body
            }
            Kind::File => {
                let $c = &$module.files;
                $body
            }
            Kind::Grade => {
                let $c = &$module.grades;
                $body
            }
            Kind::Note => {
                let $c = &$module.notes;
                $body
            }
        }
    };
}

/// A course and everything tracked under it.
#[derive(Debug, Clone)]
pub struct Module {
    code: String,
    name: String,
    pub tasks: OrderedCollection<Task>,
    pub files: OrderedCollection<FileEntry>,
    pub grades: OrderedCollection<Grade>,
    pub notes: OrderedCollection<Note>,
}

impl Module {
    /// The code is stored upper-cased.
    pub fn new(code: &str, name: impl Into<String>) -> Self {
        Self {
            code: code.to_uppercase(),
            name: name.into(),
            tasks: OrderedCollection::new(),
            files: OrderedCollection::new(),
            grades: OrderedCollection::new(),
            notes: OrderedCollection::new(),
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// `CG1111 | Engineering Principles and Practice I`
    pub fn index_line(&self) -> String {
        format!("{}{}{}", self.code, DELIMITER, self.name)
    }

    pub fn from_index_line(line: &str) -> Result<Self> {
        match line.split_once(DELIMITER) {
            Some((code, name)) if !code.trim().is_empty() => {
                Ok(Self::new(code.trim(), name.trim()))
            }
            _ => Err(BoxError::Corrupted {
                source_name: "modules".to_string(),
                line: line.to_string(),
            }),
        }
    }

    pub fn len(&self, kind: Kind) -> usize {
        on_collection!(self, kind, |c| c.len())
    }

    pub fn check_index(&self, kind: Kind, index: usize) -> Result<()> {
        on_collection!(self, kind, |c| c.check_index(index))
    }

    /// Numbered display lines for one tab.
    pub fn numbered(&self, kind: Kind) -> Vec<String> {
        on_collection!(self, kind, |c| c.numbered())
    }

    /// Display strings of matching items, in natural order.
    pub fn search(&self, kind: Kind, query: &str) -> Vec<String> {
        on_collection!(self, kind, |c| c
            .search(query)
            .into_iter()
            .map(|item| item.to_string())
            .collect())
    }

    /// Removes one item and returns how it displayed.
    pub fn remove(&mut self, kind: Kind, index: usize) -> Result<String> {
        on_collection!(mut self, kind, |c| c.remove(index).map(|item| item.to_string()))
    }

    pub fn set_done(&mut self, kind: Kind, index: usize, done: bool) -> Result<String> {
        on_collection!(mut self, kind, |c| c
            .update(index, done)
            .map(|item| item.to_string()))
    }

    pub fn rename(&mut self, kind: Kind, index: usize, name: String) -> Result<String> {
        on_collection!(mut self, kind, |c| c
            .rename(index, name)
            .map(|item| item.to_string()))
    }

    pub fn sort(&mut self, kind: Kind) {
        on_collection!(mut self, kind, |c| c.sort())
    }

    pub fn encode(&self, kind: Kind) -> Vec<String> {
        on_collection!(self, kind, |c| c.encode_lines())
    }

    /// Replaces one collection with decoded storage lines.
    pub fn load(&mut self, kind: Kind, lines: &[String]) -> Result<()> {
        match kind {
            Kind::Task => self.tasks = OrderedCollection::decode_lines(lines)?,
            Kind::File => self.files = OrderedCollection::decode_lines(lines)?,
            Kind::Grade => self.grades = OrderedCollection::decode_lines(lines)?,
            Kind::Note => self.notes = OrderedCollection::decode_lines(lines)?,
        }
        Ok(())
    }
}
