use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// One row of the chart constant table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferenceEntry {
    pub id: u32,
    /// One-based chart level (raw record level + 1)
    pub level: u8,
    pub constant: f64,
    pub add_version: u32,
}

impl ReferenceEntry {
    pub fn key(&self) -> (u32, u8) {
        (self.id, self.level)
    }
}

/// Chart constant table in file order, with a (id, level) index.
///
/// When the file holds duplicate keys the earliest row wins.
#[derive(Debug, Clone, Default)]
pub struct ReferenceTable {
    entries: Vec<ReferenceEntry>,
    index: HashMap<(u32, u8), usize>,
}

impl ReferenceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the table from a CSV file with an `id,level,constant,add_version` header
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| Error::load(path, e))?;
        let table = Self::parse(&content)?;
        debug!("Loaded {} reference entries from {:?}", table.len(), path);
        Ok(table)
    }

    /// Parse the table from CSV content
    pub fn parse(content: &str) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(content.as_bytes());

        let mut table = Self::new();
        for entry in reader.deserialize::<ReferenceEntry>() {
            table.push(entry?);
        }

        Ok(table)
    }

    pub fn push(&mut self, entry: ReferenceEntry) {
        let position = self.entries.len();
        self.entries.push(entry);
        if let Entry::Vacant(e) = self.index.entry(entry.key()) {
            e.insert(position);
        }
    }

    /// First entry matching both song id and level
    pub fn find(&self, id: u32, level: u8) -> Option<&ReferenceEntry> {
        self.index.get(&(id, level)).map(|&i| &self.entries[i])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<ReferenceEntry> for ReferenceTable {
    fn from_iter<I: IntoIterator<Item = ReferenceEntry>>(iter: I) -> Self {
        let mut table = Self::new();
        for entry in iter {
            table.push(entry);
        }
        table
    }
}
