//! Output formatting.
//!
//! - `format_summary` - the six-line `b35`/`bad50` report
//! - `format_pool_table` - per-score listing for diagnostics

mod console;

pub use console::*;
