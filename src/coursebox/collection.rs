//! Positionally indexed container of one entity kind.
//!
//! Indexes are zero-based here; the one-based numbers users type are converted
//! by [`crate::index`] before they reach a collection. Insertion order is kept
//! until [`OrderedCollection::sort`] is called explicitly.

use crate::error::{BoxError, Result};
use crate::model::Item;

pub const INVALID_INDEX: &str = "Please enter a valid index.";

#[derive(Debug, Clone)]
pub struct OrderedCollection<T: Item> {
    items: Vec<T>,
}

impl<T: Item> Default for OrderedCollection<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Item> OrderedCollection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<T>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn check_index(&self, index: usize) -> Result<()> {
        if index < self.items.len() {
            Ok(())
        } else {
            Err(BoxError::Index(INVALID_INDEX.to_string()))
        }
    }

    pub fn get(&self, index: usize) -> Result<&T> {
        self.items
            .get(index)
            .ok_or_else(|| BoxError::Index(INVALID_INDEX.to_string()))
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        self.items
            .get_mut(index)
            .ok_or_else(|| BoxError::Index(INVALID_INDEX.to_string()))
    }

    /// Appends and returns the new item's zero-based position.
    pub fn add(&mut self, item: T) -> usize {
        self.items.push(item);
        self.items.len() - 1
    }

    /// Removes the item at `index`; later items shift down by one.
    pub fn remove(&mut self, index: usize) -> Result<T> {
        self.check_index(index)?;
        Ok(self.items.remove(index))
    }

    pub fn update(&mut self, index: usize, done: bool) -> Result<&T> {
        let item = self.get_mut(index)?;
        item.set_done(done)?;
        Ok(item)
    }

    pub fn rename(&mut self, index: usize, name: String) -> Result<&T> {
        let item = self.get_mut(index)?;
        item.set_name(name);
        Ok(item)
    }

    /// Case-insensitive substring match on names, in natural order.
    pub fn search(&self, query: &str) -> Vec<&T> {
        let query = query.to_lowercase();
        let mut found: Vec<&T> = self
            .items
            .iter()
            .filter(|item| item.name().to_lowercase().contains(&query))
            .collect();
        found.sort_by(|a, b| a.natural_cmp(b));
        found
    }

    /// Stable sort by the kind's natural comparator.
    pub fn sort(&mut self) {
        self.items.sort_by(|a, b| a.natural_cmp(b));
    }

    /// `1. <item>` lines for display.
    pub fn numbered(&self) -> Vec<String> {
        number_lines(self.items.iter())
    }

    pub fn encode_lines(&self) -> Vec<String> {
        self.items.iter().map(T::encode).collect()
    }

    /// Blank lines are skipped; any other malformed line is a `Corrupted` error.
    pub fn decode_lines(lines: &[String]) -> Result<Self> {
        let items = lines
            .iter()
            .filter(|line| !line.trim().is_empty())
            .map(|line| T::decode(line))
            .collect::<Result<Vec<T>>>()?;
        tracing::trace!(kind = %T::KIND, items = items.len(), "decoded collection");
        Ok(Self { items })
    }
}

pub fn number_lines<D: std::fmt::Display>(items: impl IntoIterator<Item = D>) -> Vec<String> {
    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| format!("{}. {}", i + 1, item))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{parse_date, FileEntry, Note, Task};

    fn files(names: &[&str]) -> OrderedCollection<FileEntry> {
        OrderedCollection::from_items(names.iter().map(|n| FileEntry::new(*n)).collect())
    }

    #[test]
    fn keeps_insertion_order_until_sorted() {
        let mut collection = files(&["b.pdf", "C.pdf", "a.pdf"]);
        assert_eq!(collection.get(0).unwrap().name(), "b.pdf");

        collection.sort();
        let names: Vec<&str> = collection.items().iter().map(|f| f.name()).collect();
        assert_eq!(names, vec!["a.pdf", "b.pdf", "C.pdf"]);
    }

    #[test]
    fn remove_shifts_later_items() {
        let mut collection = files(&["a", "b", "c"]);
        let removed = collection.remove(0).unwrap();
        assert_eq!(removed.name(), "a");
        assert_eq!(collection.get(0).unwrap().name(), "b");
        assert_eq!(collection.len(), 2);
    }

    #[test]
    fn out_of_range_is_an_index_error() {
        let mut collection = files(&["a"]);
        assert!(matches!(collection.get(1), Err(BoxError::Index(_))));
        assert!(matches!(collection.remove(5), Err(BoxError::Index(_))));
        assert!(matches!(collection.update(3, true), Err(BoxError::Index(_))));
        assert_eq!(collection.len(), 1);
    }

    #[test]
    fn update_flips_status_only() {
        let mut collection = files(&["a", "b"]);
        collection.update(1, true).unwrap();
        assert!(collection.get(1).unwrap().downloaded());
        assert_eq!(collection.len(), 2);
    }

    #[test]
    fn notes_reject_status_updates() {
        let mut notes = OrderedCollection::from_items(vec![Note::new("remember")]);
        assert!(matches!(notes.update(0, true), Err(BoxError::Validation(_))));
    }

    #[test]
    fn search_is_case_insensitive_and_sorted() {
        let collection = files(&["Sales Q2.xlsx", "notes.txt", "sales Q1.xlsx"]);
        let found = collection.search("SALES");
        let found: Vec<&str> = found.iter().map(|f| f.name()).collect();
        assert_eq!(found, vec!["sales Q1.xlsx", "Sales Q2.xlsx"]);
    }

    #[test]
    fn numbered_lines_start_at_one() {
        let collection = files(&["a", "b"]);
        assert_eq!(
            collection.numbered(),
            vec!["1. [NOT DOWNLOADED] a", "2. [NOT DOWNLOADED] b"]
        );
    }

    #[test]
    fn lines_roundtrip_and_skip_blanks() {
        let mut tasks = OrderedCollection::new();
        tasks.add(Task::todo("one"));
        tasks.add(Task::deadline("two", parse_date("10/10/2019 23:59").unwrap()));
        let mut lines = tasks.encode_lines();
        lines.push(String::new());

        let decoded = OrderedCollection::<Task>::decode_lines(&lines).unwrap();
        assert_eq!(decoded.items(), tasks.items());
    }
}
