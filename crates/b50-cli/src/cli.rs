//! CLI argument definitions for b50.
//!
//! Reference data locations come from the environment (`B50_DB_PATH`,
//! `B50_NG_PATH`), not from flags.

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "b50")]
#[command(about = "Best 50 / bad 50 rating calculator", version)]
pub struct Args {
    /// Exported user music detail JSON
    #[arg(value_name = "FILE")]
    pub input: PathBuf,
}
