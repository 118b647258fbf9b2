mod cli;

use anyhow::{Context, Result};
use b50_core::{
    Config, ExclusionSet, RatingEngine, ReferenceTable, Summary, format_pool_table,
    format_summary, load_records,
};
use clap::Parser;
use cli::Args;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr; stdout carries only the summary
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("b50=warn,b50_core=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env();

    let table = ReferenceTable::load(&config.db_path)
        .with_context(|| format!("Failed to load chart table {:?}", config.db_path))?;
    let exclusions = ExclusionSet::load(&config.ng_path)
        .with_context(|| format!("Failed to load exclusion list {:?}", config.ng_path))?;
    info!(
        "Loaded {} charts, {} excluded songs",
        table.len(),
        exclusions.len()
    );

    let groups = load_records(&args.input)
        .with_context(|| format!("Failed to load records {:?}", args.input))?;

    let (player, stats) = RatingEngine::new(&table, &exclusions).parse(&groups);
    info!(
        "Rated {} of {} records (excluded {}, out of range {}, unmatched {})",
        stats.kept,
        stats.total(),
        stats.excluded,
        stats.out_of_range,
        stats.unmatched
    );
    debug!("sd pool:\n{}", format_pool_table(&player.sd));
    debug!("dx pool:\n{}", format_pool_table(&player.dx));

    let summary = Summary::compute(&player);
    print!("{}", format_summary(&summary));

    Ok(())
}
