//! Plain text output for the CLI

use std::fmt::Write as _;

use crate::play::{Score, Summary};

/// Format the rating summary
///
/// Field names and order are fixed; scripts parse this output.
pub fn format_summary(summary: &Summary) -> String {
    let mut output = String::new();

    let rows = [
        ("b35", summary.best.sd),
        ("b15", summary.best.dx),
        ("b50", summary.best.total()),
        ("bad35", summary.bad.sd),
        ("bad15", summary.bad.dx),
        ("bad50", summary.bad.total()),
    ];
    for (label, value) in rows {
        let _ = writeln!(output, "{} {}", label, value);
    }

    output
}

/// Format one pool as an aligned table, one score per line
pub fn format_pool_table(scores: &[Score]) -> String {
    let mut output = String::new();

    for (rank, score) in scores.iter().enumerate() {
        let combo = score
            .combo_status()
            .map(|c| c.short_name())
            .unwrap_or("?");
        let sync = score.sync_status().map(|s| s.short_name()).unwrap_or("?");
        let _ = writeln!(
            output,
            "{:>3}. {:>6} lv{} {:>5.1} {:>4} {:<3} {:<4}",
            rank + 1,
            score.id,
            score.level,
            score.constant,
            score.ra,
            combo,
            sync
        );
    }

    output
}
