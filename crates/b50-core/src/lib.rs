//! # b50-core
//!
//! Rating engine for maimai-style play records.
//!
//! This crate provides:
//! - Reference data loading (chart constants table, exclusion list)
//! - The achievement → rating formula
//! - Record parsing into version-partitioned score pools
//! - Best/worst aggregation and summary formatting

pub mod chart;
pub mod config;
pub mod error;
pub mod export;
pub mod play;
pub mod score;

pub use chart::{ExclusionSet, ReferenceEntry, ReferenceTable};
pub use config::Config;
pub use error::{Error, Result};
pub use export::{format_pool_table, format_summary};
pub use play::{
    MusicDetailGroup, ParseStats, Player, Pool, RatingEngine, RatingSums, RawRecord, Score,
    SkipReason, Summary, compute_bad, compute_best, load_records, parse_data, parse_records,
};
pub use score::{ComboStatus, SyncStatus, compute_rating, rank_coefficient};
