use super::{DataKey, DataStore};
use crate::error::{BoxError, Result};
use std::fs;
use std::path::{Path, PathBuf};

const MODULES_FILENAME: &str = "modules.txt";

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &DataKey) -> PathBuf {
        match key {
            DataKey::Modules => self.root.join(MODULES_FILENAME),
            DataKey::Collection(code, kind) => self
                .root
                .join(code)
                .join(format!("{}.txt", kind.plural())),
        }
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(BoxError::Io)?;
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load_data(&self, key: &DataKey) -> Result<Vec<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&path).map_err(BoxError::Io)?;
        tracing::debug!(%key, path = %path.display(), "loaded data");
        Ok(content.lines().map(str::to_string).collect())
    }

    fn save_data(&mut self, key: &DataKey, lines: &[String]) -> Result<()> {
        let path = self.path_for(key);
        if let Some(parent) = path.parent() {
            self.ensure_dir(parent)?;
        }

        let mut content = lines.join("\n");
        if !content.is_empty() {
            content.push('\n');
        }
        fs::write(&path, content).map_err(BoxError::Io)?;
        tracing::debug!(%key, lines = lines.len(), "saved data");
        Ok(())
    }

    fn remove_data(&mut self, key: &DataKey) -> Result<()> {
        let path = self.path_for(key);
        if path.exists() {
            fs::remove_file(&path).map_err(BoxError::Io)?;
        }

        // A module directory goes away with its last collection file.
        if let DataKey::Collection(code, _) = key {
            let dir = self.root.join(code);
            if dir.is_dir() && fs::read_dir(&dir).map_err(BoxError::Io)?.next().is_none() {
                fs::remove_dir(&dir).map_err(BoxError::Io)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Kind;
    use tempfile::tempdir;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn missing_keys_load_empty() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf());
        assert!(store.load_data(&DataKey::Modules).unwrap().is_empty());
        assert!(store
            .load_data(&DataKey::collection("CG1111", Kind::Task))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn saves_collections_under_module_dirs() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());
        let key = DataKey::collection("cg1111", Kind::File);
        store
            .save_data(&key, &lines(&["F | 0 | a.pdf", "F | 1 | b.pdf"]))
            .unwrap();

        let path = dir.path().join("CG1111").join("files.txt");
        assert!(path.exists());
        assert_eq!(
            fs::read_to_string(path).unwrap(),
            "F | 0 | a.pdf\nF | 1 | b.pdf\n"
        );
        assert_eq!(store.load_data(&key).unwrap().len(), 2);
    }

    #[test]
    fn removing_last_collection_removes_module_dir() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());
        let tasks = DataKey::collection("CS2113", Kind::Task);
        let notes = DataKey::collection("CS2113", Kind::Note);
        store.save_data(&tasks, &lines(&["T | 0 | x"])).unwrap();
        store.save_data(&notes, &lines(&["N | y"])).unwrap();

        store.remove_data(&tasks).unwrap();
        assert!(dir.path().join("CS2113").exists());
        store.remove_data(&notes).unwrap();
        assert!(!dir.path().join("CS2113").exists());

        // Removing again is fine.
        store.remove_data(&notes).unwrap();
    }

    #[test]
    fn saving_empty_list_truncates() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());
        store
            .save_data(&DataKey::Modules, &lines(&["CG1111 | EPP"]))
            .unwrap();
        store.save_data(&DataKey::Modules, &[]).unwrap();
        assert!(store.load_data(&DataKey::Modules).unwrap().is_empty());
    }
}
