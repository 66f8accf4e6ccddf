use super::{corrupted, decode_flag, encode_flag, split_fields, Item, Kind, DELIMITER};
use crate::error::Result;
use std::cmp::Ordering;
use std::fmt;

const TAG: &str = "F";

/// A course file the user wants to keep track of. Done means downloaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    name: String,
    downloaded: bool,
}

impl FileEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            downloaded: false,
        }
    }

    pub fn downloaded(&self) -> bool {
        self.downloaded
    }
}

impl Item for FileEntry {
    const KIND: Kind = Kind::File;

    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }

    fn set_done(&mut self, done: bool) -> Result<()> {
        self.downloaded = done;
        Ok(())
    }

    fn natural_cmp(&self, other: &Self) -> Ordering {
        self.name.to_lowercase().cmp(&other.name.to_lowercase())
    }

    fn encode(&self) -> String {
        [TAG, encode_flag(self.downloaded), &self.name].join(DELIMITER)
    }

    fn decode(line: &str) -> Result<Self> {
        match split_fields(line).as_slice() {
            [TAG, flag, name] => Ok(Self {
                name: name.to_string(),
                downloaded: decode_flag(Kind::File, line, flag)?,
            }),
            _ => Err(corrupted(Kind::File, line)),
        }
    }
}

impl fmt::Display for FileEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.downloaded {
            write!(f, "[DOWNLOADED] {}", self.name)
        } else {
            write!(f, "[NOT DOWNLOADED] {}", self.name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BoxError;

    #[test]
    fn display_reflects_download_state() {
        let mut file = FileEntry::new("lecture1.pdf");
        assert_eq!(file.to_string(), "[NOT DOWNLOADED] lecture1.pdf");
        file.set_done(true).unwrap();
        assert_eq!(file.to_string(), "[DOWNLOADED] lecture1.pdf");
    }

    #[test]
    fn roundtrips_through_storage_line() {
        let mut file = FileEntry::new("tutorial 2.pdf");
        file.set_done(true).unwrap();
        let line = file.encode();
        assert_eq!(line, "F | 1 | tutorial 2.pdf");
        assert_eq!(FileEntry::decode(&line).unwrap(), file);
    }

    #[test]
    fn decode_rejects_foreign_lines() {
        assert!(matches!(
            FileEntry::decode("T | 0 | not a file"),
            Err(BoxError::Corrupted { .. })
        ));
    }
}
