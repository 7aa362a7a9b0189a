//! Console reporting for sweep results.
//!
//! Thin consumer of the harness output: prints one block per graph size with
//! a summary line per engine. Two-decimal millisecond formatting.

use crate::bench::SweepRecord;
use crate::stats::StatsSummary;

/// Print a human-readable summary of a full sweep to stdout.
pub fn print_summary(records: &[SweepRecord]) {
    for record in records {
        println!("Graph size: {} nodes", record.size);
        println!("Dijkstra:     {}", format_stats(&record.dijkstra));
        println!("Bellman-Ford: {}", format_stats(&record.bellman_ford));
        println!();
    }
}

fn format_stats(stats: &StatsSummary) -> String {
    format!(
        "Min={:.2}ms, Max={:.2}ms, Avg={:.2}ms, Std={:.2}ms",
        stats.min, stats.max, stats.avg, stats.std
    )
}
