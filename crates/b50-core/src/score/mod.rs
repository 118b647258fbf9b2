//! Rating formula and per-play status types.
//!
//! - `compute_rating`, `rank_coefficient` - achievement → rating conversion
//! - `ComboStatus` - combo lamps (FC, FC+, AP, AP+)
//! - `SyncStatus` - sync lamps (FS, FS+, FDX, FDX+, SYNC PLAY)

mod rating;
mod status;

pub use rating::*;
pub use status::*;
