use super::{DataKey, DataStore};
use crate::error::Result;
use std::collections::HashMap;

/// Keeps everything in a map. Nothing survives the process.
#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    data: HashMap<DataKey, Vec<String>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &DataKey) -> bool {
        self.data.contains_key(key)
    }
}

impl DataStore for InMemoryStore {
    fn load_data(&self, key: &DataKey) -> Result<Vec<String>> {
        Ok(self.data.get(key).cloned().unwrap_or_default())
    }

    fn save_data(&mut self, key: &DataKey, lines: &[String]) -> Result<()> {
        self.data.insert(key.clone(), lines.to_vec());
        Ok(())
    }

    fn remove_data(&mut self, key: &DataKey) -> Result<()> {
        self.data.remove(key);
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(test)]
pub mod fixtures {
    use super::*;
    use crate::model::Kind;

    /// Builds a store already holding modules and their stored lines.
    pub struct StoreFixture {
        pub store: InMemoryStore,
        modules: Vec<String>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
                modules: Vec::new(),
            }
        }

        pub fn with_module(mut self, code: &str, name: &str) -> Self {
            self.modules.push(format!("{} | {}", code, name));
            self.store
                .save_data(&DataKey::Modules, &self.modules)
                .unwrap();
            self
        }

        pub fn with_lines(mut self, code: &str, kind: Kind, lines: &[&str]) -> Self {
            let lines: Vec<String> = lines.iter().map(|l| l.to_string()).collect();
            self.store
                .save_data(&DataKey::collection(code, kind), &lines)
                .unwrap();
            self
        }

        /// `count` todos named `Task 1`..`Task <count>`.
        pub fn with_todos(self, code: &str, count: usize) -> Self {
            let lines: Vec<String> = (1..=count).map(|i| format!("T | 0 | Task {}", i)).collect();
            let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
            self.with_lines(code, Kind::Task, &refs)
        }

        pub fn build(self) -> InMemoryStore {
            self.store
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::StoreFixture;
    use super::*;
    use crate::model::Kind;

    #[test]
    fn save_then_load() {
        let mut store = InMemoryStore::new();
        let key = DataKey::collection("CG1111", Kind::Note);
        store.save_data(&key, &["N | hello".to_string()]).unwrap();
        assert_eq!(store.load_data(&key).unwrap(), vec!["N | hello"]);
        store.remove_data(&key).unwrap();
        assert!(!store.contains(&key));
        assert!(store.load_data(&key).unwrap().is_empty());
    }

    #[test]
    fn fixture_seeds_modules_and_todos() {
        let store = StoreFixture::new()
            .with_module("CG1111", "EPP")
            .with_todos("CG1111", 3)
            .build();
        assert_eq!(store.load_data(&DataKey::Modules).unwrap(), vec!["CG1111 | EPP"]);
        let tasks = store
            .load_data(&DataKey::collection("CG1111", Kind::Task))
            .unwrap();
        assert_eq!(tasks.last().unwrap(), "T | 0 | Task 3");
    }
}
