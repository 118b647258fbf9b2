use serde::Serialize;

use crate::score::{ComboStatus, SyncStatus};

/// A rated play
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Score {
    pub id: u32,
    pub level: u8,
    pub constant: f64,
    /// Raw combo status, kept as received
    pub combo: i32,
    /// Raw sync status, kept as received
    pub sync: i32,
    pub ra: u64,
}

impl Score {
    pub fn combo_status(&self) -> Option<ComboStatus> {
        ComboStatus::from_raw(self.combo)
    }

    pub fn sync_status(&self) -> Option<SyncStatus> {
        SyncStatus::from_raw(self.sync)
    }
}

/// Rated plays split by chart version
///
/// `dx` holds charts added in the current version, `sd` everything else.
/// After parsing both pools are sorted by rating, highest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Player {
    pub sd: Vec<Score>,
    pub dx: Vec<Score>,
}

impl Player {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sort both pools by rating, highest first. Ties keep insertion order.
    pub fn sort_pools(&mut self) {
        self.sd.sort_by(|a, b| b.ra.cmp(&a.ra));
        self.dx.sort_by(|a, b| b.ra.cmp(&a.ra));
    }

    pub fn iter(&self) -> impl Iterator<Item = &Score> {
        self.sd.iter().chain(self.dx.iter())
    }

    pub fn len(&self) -> usize {
        self.sd.len() + self.dx.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sd.is_empty() && self.dx.is_empty()
    }
}
