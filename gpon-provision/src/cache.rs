use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Last known good block text per serial. Purely a lookup aid for operators,
/// never a source of truth; overwritten whenever a fresh parse succeeds.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockCache {
    entries: HashMap<String, String>,
}

impl BlockCache {
    pub fn get(&self, serial: &str) -> Option<&str> {
        self.entries.get(serial).map(String::as_str)
    }

    /// Insert-or-replace, last writer wins.
    pub fn insert(&mut self, serial: &str, block: &str) {
        self.entries.insert(serial.to_string(), block.to_string());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Load from a JSON file; a missing file yields an empty cache.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read cache file {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("cache file {} is not valid JSON", path.display()))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let raw = serde_json::to_string_pretty(self)?;
        std::fs::write(path, raw)
            .with_context(|| format!("failed to write cache file {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn insert_replaces_previous_entry() {
        let mut cache = BlockCache::default();
        cache.insert("RCMG3A8848C4", "old block");
        cache.insert("RCMG3A8848C4", "new block");
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("RCMG3A8848C4"), Some("new block"));
    }

    #[test]
    fn round_trips_through_json() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("cache.json");

        let mut cache = BlockCache::default();
        cache.insert("AAAA1111", "gpon-onu 1/4/21\nquit");
        cache.save(&path).expect("save");

        let loaded = BlockCache::load(&path).expect("load");
        assert_eq!(loaded, cache);
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempdir().expect("tempdir");
        let cache = BlockCache::load(&dir.path().join("absent.json")).expect("load");
        assert!(cache.is_empty());
    }
}
