use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::record::ACHIEVEMENT_SCALE;
use crate::error::{Error, Result};

/// A single chart result from `userMusicDetailList`
///
/// Fields not listed here (play counts, dx score, ...) are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRecord {
    /// Song id as sent; may be outside the `u32` range for non-chart entries
    pub music_id: i64,
    /// Zero-based chart level
    pub level: i32,
    pub combo_status: i32,
    pub sync_status: i32,
    /// Achievement percentage times 10000 (1005000 = 100.5%)
    pub achievement: i64,
}

impl RawRecord {
    /// One-based level as used by the reference table
    pub fn chart_level(&self) -> Option<u8> {
        self.level.checked_add(1).and_then(|l| u8::try_from(l).ok())
    }

    pub fn achievement_percent(&self) -> f64 {
        self.achievement as f64 / ACHIEVEMENT_SCALE
    }
}

/// One element of the exported user music array
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MusicDetailGroup {
    #[serde(rename = "userMusicDetailList")]
    pub user_music_detail_list: Vec<RawRecord>,
}

/// Load the record set from a JSON file
pub fn load_records<P: AsRef<Path>>(path: P) -> Result<Vec<MusicDetailGroup>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| Error::load(path, e))?;
    parse_records(&content)
}

/// Parse the record set from JSON content
pub fn parse_records(content: &str) -> Result<Vec<MusicDetailGroup>> {
    Ok(serde_json::from_str(content)?)
}
