//! Entity types tracked per module, and the line codec they share.
//!
//! Every entity persists as one pipe-delimited line whose first field is a type
//! tag (`T | 0 | read notes`). Dates are written as `dd/mm/yyyy HH:MM`.

use crate::error::{BoxError, Result};
use chrono::NaiveDateTime;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

pub mod file;
pub mod grade;
pub mod module;
pub mod note;
pub mod task;

pub use file::FileEntry;
pub use grade::{Grade, Score};
pub use module::Module;
pub use note::Note;
pub use task::{Task, TaskKind};

pub const DATE_FORMAT: &str = "%d/%m/%Y %H:%M";
pub(crate) const DELIMITER: &str = " | ";

/// The kind of entity a collection holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Kind {
    Task,
    File,
    Grade,
    Note,
}

impl Kind {
    pub const ALL: [Kind; 4] = [Kind::Task, Kind::File, Kind::Grade, Kind::Note];

    pub fn singular(&self) -> &'static str {
        match self {
            Kind::Task => "task",
            Kind::File => "file",
            Kind::Grade => "grade",
            Kind::Note => "note",
        }
    }

    pub fn plural(&self) -> &'static str {
        match self {
            Kind::Task => "tasks",
            Kind::File => "files",
            Kind::Grade => "grades",
            Kind::Note => "notes",
        }
    }

    /// Tasks can be done, files downloaded. Grades and notes have no such flag.
    pub fn has_status(&self) -> bool {
        matches!(self, Kind::Task | Kind::File)
    }

    /// `"1 task"` / `"3 tasks"`.
    pub fn count(&self, n: usize) -> String {
        if n == 1 {
            format!("{} {}", n, self.singular())
        } else {
            format!("{} {}", n, self.plural())
        }
    }
}

impl FromStr for Kind {
    type Err = BoxError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Kind::ALL
            .iter()
            .copied()
            .find(|kind| kind.singular() == s)
            .ok_or_else(|| BoxError::Parse(format!("Unknown item type '{}'.", s)))
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.singular())
    }
}

/// Behaviour shared by everything an `OrderedCollection` can hold.
pub trait Item: Clone + fmt::Display {
    const KIND: Kind;

    fn name(&self) -> &str;

    fn set_name(&mut self, name: String);

    fn set_done(&mut self, done: bool) -> Result<()>;

    /// Comparator used by `sort` and by search results.
    fn natural_cmp(&self, other: &Self) -> Ordering;

    fn encode(&self) -> String;

    fn decode(line: &str) -> Result<Self>;
}

pub(crate) fn split_fields(line: &str) -> Vec<&str> {
    line.split(DELIMITER).map(str::trim).collect()
}

pub(crate) fn corrupted(kind: Kind, line: &str) -> BoxError {
    BoxError::Corrupted {
        source_name: kind.plural().to_string(),
        line: line.to_string(),
    }
}

pub(crate) fn encode_flag(flag: bool) -> &'static str {
    if flag {
        "1"
    } else {
        "0"
    }
}

pub(crate) fn decode_flag(kind: Kind, line: &str, field: &str) -> Result<bool> {
    match field {
        "1" => Ok(true),
        "0" => Ok(false),
        _ => Err(corrupted(kind, line)),
    }
}

pub fn parse_date(input: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(input.trim(), DATE_FORMAT).map_err(|_| {
        BoxError::Validation(format!(
            "'{}' is not a valid date. Please use the format dd/mm/yyyy HH:MM.",
            input.trim()
        ))
    })
}

pub fn format_date(date: &NaiveDateTime) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Names end up inside pipe-delimited lines, so they may not contain `|`.
pub fn validate_text(kind: Kind, text: &str) -> Result<String> {
    let text = text.trim();
    if text.is_empty() {
        return Err(BoxError::Parse(format!(
            "Please provide a description for the {}.",
            kind
        )));
    }
    if text.contains('|') {
        return Err(BoxError::Validation(
            "Descriptions cannot contain the '|' character.".to_string(),
        ));
    }
    Ok(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_counts_use_singular_for_one() {
        assert_eq!(Kind::Task.count(1), "1 task");
        assert_eq!(Kind::Task.count(0), "0 tasks");
        assert_eq!(Kind::Note.count(4), "4 notes");
    }

    #[test]
    fn parses_kind_tags() {
        assert_eq!("file".parse::<Kind>().unwrap(), Kind::File);
        assert!("files".parse::<Kind>().is_err());
    }

    #[test]
    fn dates_roundtrip_in_display_format() {
        let date = parse_date("01/02/2019 10:00").unwrap();
        assert_eq!(format_date(&date), "01/02/2019 10:00");
        assert!(matches!(
            parse_date("2019-02-01"),
            Err(BoxError::Validation(_))
        ));
    }

    #[test]
    fn rejects_pipes_in_text() {
        assert!(validate_text(Kind::Task, "a | b").is_err());
        assert!(validate_text(Kind::Task, "   ").is_err());
        assert_eq!(validate_text(Kind::Task, " read ").unwrap(), "read");
    }
}
