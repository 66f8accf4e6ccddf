use super::{corrupted, Item, Kind, DELIMITER};
use crate::error::{BoxError, Result};
use std::cmp::Ordering;
use std::fmt;

const TAG: &str = "N";

/// A free-text line in a module's notepad.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    text: String,
}

impl Note {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl Item for Note {
    const KIND: Kind = Kind::Note;

    fn name(&self) -> &str {
        &self.text
    }

    fn set_name(&mut self, name: String) {
        self.text = name;
    }

    fn set_done(&mut self, _done: bool) -> Result<()> {
        Err(BoxError::Validation(
            "Notes do not have a done status.".to_string(),
        ))
    }

    /// Notes keep insertion order.
    fn natural_cmp(&self, _other: &Self) -> Ordering {
        Ordering::Equal
    }

    fn encode(&self) -> String {
        format!("{}{}{}", TAG, DELIMITER, self.text)
    }

    fn decode(line: &str) -> Result<Self> {
        // Only the tag is split off; the text may contain anything but the delimiter.
        match line.split_once(DELIMITER) {
            Some((TAG, text)) => Ok(Self::new(text.trim())),
            _ => Err(corrupted(Kind::Note, line)),
        }
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
