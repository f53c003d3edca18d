//! Interned kind names and their single-inheritance chain.

use lasso::{Rodeo, Spur};
use rustc_hash::FxHashMap;

#[derive(Debug)]
pub struct KindTable {
    names: Rodeo,
    parents: FxHashMap<Spur, Spur>,
}

impl Default for KindTable {
    fn default() -> Self {
        Self::new()
    }
}

impl KindTable {
    pub fn new() -> Self {
        Self {
            names: Rodeo::new(),
            parents: FxHashMap::default(),
        }
    }

    /// Intern `name`, optionally recording its parent kind.
    pub fn register(&mut self, name: &str, parent: Option<&str>) -> Spur {
        let key = self.names.get_or_intern(name);
        if let Some(parent_name) = parent {
            let parent_key = self.names.get_or_intern(parent_name);
            if parent_key != key {
                self.parents.insert(key, parent_key);
            }
        }
        key
    }

    pub fn intern(&mut self, name: &str) -> Spur {
        self.names.get_or_intern(name)
    }

    pub fn name(&self, key: Spur) -> &str {
        self.names.resolve(&key)
    }

    /// Walk the chain from `key` upwards looking for `kind`.
    pub fn is_kind_of(&self, key: Spur, kind: &str) -> bool {
        let Some(target) = self.names.get(kind) else {
            return false;
        };
        let mut current = Some(key);
        // Bounded by the table size so a cyclic registration cannot spin.
        for _ in 0..=self.parents.len() {
            match current {
                Some(candidate) if candidate == target => return true,
                Some(candidate) => current = self.parents.get(&candidate).copied(),
                None => return false,
            }
        }
        false
    }
}
