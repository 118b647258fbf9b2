//! Static reference data.
//!
//! This module contains the tables loaded once at startup and read-only afterwards:
//! - `ReferenceEntry`, `ReferenceTable` - chart constants keyed by (song id, level)
//! - `ExclusionSet` - song ids skipped entirely

mod exclusion;
mod reference;

pub use exclusion::*;
pub use reference::*;
