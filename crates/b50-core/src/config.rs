//! Runtime configuration and engine constants.
//!
//! - `Config` - locations of the static reference data
//! - `version`, `record`, `caps` - fixed values the rating engine is built around

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

/// Default location of the chart constant table.
pub const DEFAULT_DB_PATH: &str = "data/db.csv";

/// Default location of the excluded song list.
pub const DEFAULT_NG_PATH: &str = "data/ng.txt";

/// Environment variable overriding `DEFAULT_DB_PATH`.
pub const DB_PATH_ENV: &str = "B50_DB_PATH";

/// Environment variable overriding `DEFAULT_NG_PATH`.
pub const NG_PATH_ENV: &str = "B50_NG_PATH";

/// Game version constants.
pub mod version {
    /// Charts whose `add_version` equals this value go to the dx pool.
    pub const CURRENT_VERSION: u32 = 21;
}

/// Raw record decoding constants.
pub mod record {
    /// Music ids at or above this value are not regular charts.
    pub const MUSIC_ID_LIMIT: u32 = 100_000;

    /// Raw achievement is a percentage multiplied by this value.
    pub const ACHIEVEMENT_SCALE: f64 = 10_000.0;
}

/// Aggregation sizes.
pub mod caps {
    /// Scores counted from the sd pool (older versions).
    pub const SD_CAP: usize = 35;

    /// Scores counted from the dx pool (current version).
    pub const DX_CAP: usize = 15;
}

/// Paths to the static reference data loaded once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub db_path: PathBuf,
    pub ng_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            ng_path: PathBuf::from(DEFAULT_NG_PATH),
        }
    }
}

impl Config {
    /// Defaults, overridden by `B50_DB_PATH` / `B50_NG_PATH` when set
    pub fn from_env() -> Self {
        Self::from_vars(env::var_os(DB_PATH_ENV), env::var_os(NG_PATH_ENV))
    }

    /// Build from optional overrides; unset or empty values keep the default
    pub fn from_vars(db_path: Option<OsString>, ng_path: Option<OsString>) -> Self {
        let pick = |value: Option<OsString>, default: &str| {
            value
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(default))
        };

        Self {
            db_path: pick(db_path, DEFAULT_DB_PATH),
            ng_path: pick(ng_path, DEFAULT_NG_PATH),
        }
    }
}
