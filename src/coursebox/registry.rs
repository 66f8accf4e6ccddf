//! The set of known modules, keyed by upper-cased code.
//!
//! The registry is loaded once per session and written back through the
//! [`DataStore`] after each mutation, one collection at a time.

use crate::error::{BoxError, Result};
use crate::model::{Kind, Module};
use crate::store::{DataKey, DataStore};
use std::collections::BTreeMap;

pub const NO_MODULE: &str = "Please navigate to a module page or specify a module code.";
pub const MODULE_NOT_FOUND: &str = "This module does not exist.";

#[derive(Debug, Clone, Default)]
pub struct ModuleRegistry {
    modules: BTreeMap<String, Module>,
}

impl ModuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the module index and every collection of every listed module.
    pub fn load<S: DataStore>(store: &S) -> Result<Self> {
        let mut registry = Self::new();
        for line in store.load_data(&DataKey::Modules)? {
            if line.trim().is_empty() {
                continue;
            }
            let mut module = Module::from_index_line(&line)?;
            for kind in Kind::ALL {
                let key = DataKey::collection(module.code(), kind);
                let lines = store.load_data(&key)?;
                module.load(kind, &lines).map_err(|e| match e {
                    BoxError::Corrupted { line, .. } => BoxError::Corrupted {
                        source_name: key.to_string(),
                        line,
                    },
                    other => other,
                })?;
            }
            registry.modules.insert(module.code().to_string(), module);
        }
        tracing::debug!(modules = registry.modules.len(), "registry loaded");
        Ok(registry)
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn contains(&self, code: &str) -> bool {
        self.modules.contains_key(&code.to_uppercase())
    }

    pub fn get(&self, code: &str) -> Result<&Module> {
        self.modules
            .get(&code.to_uppercase())
            .ok_or_else(|| BoxError::NotFound(MODULE_NOT_FOUND.to_string()))
    }

    pub fn get_mut(&mut self, code: &str) -> Result<&mut Module> {
        self.modules
            .get_mut(&code.to_uppercase())
            .ok_or_else(|| BoxError::NotFound(MODULE_NOT_FOUND.to_string()))
    }

    /// Resolves the module a command targets; `None` means the user is not on a module page.
    pub fn require(&mut self, code: Option<&str>) -> Result<&mut Module> {
        let code = code.ok_or_else(|| BoxError::Parse(NO_MODULE.to_string()))?;
        self.get_mut(code)
    }

    /// Codes in sorted order.
    pub fn codes(&self) -> Vec<String> {
        self.modules.keys().cloned().collect()
    }

    pub fn modules(&self) -> impl Iterator<Item = &Module> {
        self.modules.values()
    }

    pub fn insert(&mut self, module: Module) -> Result<()> {
        if self.modules.contains_key(module.code()) {
            return Err(BoxError::Validation(format!(
                "The module {} already exists.",
                module.code()
            )));
        }
        self.modules.insert(module.code().to_string(), module);
        Ok(())
    }

    pub fn remove(&mut self, code: &str) -> Result<Module> {
        self.modules
            .remove(&code.to_uppercase())
            .ok_or_else(|| BoxError::NotFound(MODULE_NOT_FOUND.to_string()))
    }

    pub fn save_index<S: DataStore>(&self, store: &mut S) -> Result<()> {
        let lines: Vec<String> = self.modules.values().map(Module::index_line).collect();
        store.save_data(&DataKey::Modules, &lines)
    }

    pub fn save_collection<S: DataStore>(&self, store: &mut S, code: &str, kind: Kind) -> Result<()> {
        let module = self.get(code)?;
        store.save_data(&DataKey::collection(module.code(), kind), &module.encode(kind))
    }

    /// Writes every collection of one module.
    pub fn save_module<S: DataStore>(&self, store: &mut S, code: &str) -> Result<()> {
        for kind in Kind::ALL {
            self.save_collection(store, code, kind)?;
        }
        Ok(())
    }

    /// Removes a module's stored collections. The module index is saved separately.
    pub fn drop_module_data<S: DataStore>(store: &mut S, code: &str) -> Result<()> {
        for kind in Kind::ALL {
            store.remove_data(&DataKey::collection(code, kind))?;
        }
        Ok(())
    }
}
