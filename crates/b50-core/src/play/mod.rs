//! Play records and the rating pipeline.
//!
//! This module contains:
//! - `RawRecord`, `MusicDetailGroup` - play results as exported by the game server
//! - `RatingEngine` - filters records against the reference data and builds pools
//! - `Score`, `Player` - rated plays split into sd/dx pools
//! - `compute_best`, `compute_bad` - top/bottom aggregation

mod aggregate;
mod engine;
mod player;
mod record;

pub use aggregate::*;
pub use engine::*;
pub use player::*;
pub use record::*;
