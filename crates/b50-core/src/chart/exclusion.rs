use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};

/// Song ids that never contribute to rating
#[derive(Debug, Clone, Default)]
pub struct ExclusionSet {
    ids: HashSet<u32>,
}

impl ExclusionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the set from a file
    /// Format: one song id per line, blank lines ignored
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| Error::load(path, e))?;
        let set = Self::parse(&content)?;
        debug!("Loaded {} excluded songs from {:?}", set.len(), path);
        Ok(set)
    }

    /// Parse the set from string content
    pub fn parse(content: &str) -> Result<Self> {
        let mut ids = HashSet::new();

        for (i, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let id = line.parse::<u32>().map_err(|_| Error::InvalidExclusionLine {
                line: i + 1,
                value: line.to_string(),
            })?;
            ids.insert(id);
        }

        Ok(Self { ids })
    }

    pub fn contains(&self, id: u32) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl FromIterator<u32> for ExclusionSet {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}
