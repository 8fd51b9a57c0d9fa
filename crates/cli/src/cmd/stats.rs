//! Stats command implementation.

use std::path::Path;

use chrono::Utc;
use mdscan_core::tree::TreeStats;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use crate::StatsArgs;
use crate::logging;

/// Stats payload for JSON output.
#[derive(Serialize)]
struct StatsData {
    vault: String,
    generated_at: String,
    #[serde(flatten)]
    stats: TreeStats,
}

/// Row for the terminal summary table.
#[derive(Tabled)]
struct StatRow {
    #[tabled(rename = "Metric")]
    metric: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

/// Run the stats command.
pub fn run(config: Option<&Path>, profile: Option<&str>, args: StatsArgs) {
    let rc = super::load_config(config, profile);
    logging::init(&rc);

    let vault = super::resolve_vault(args.vault, &rc);
    let crawler = super::build_crawler(&vault, &rc);
    let scan = super::crawl_or_exit(&crawler);
    let stats = TreeStats::compute(&scan.forest);

    if args.json {
        let data = StatsData {
            vault: scan.root.display().to_string(),
            generated_at: Utc::now().to_rfc3339(),
            stats,
        };
        println!("{}", serde_json::to_string_pretty(&data).unwrap_or_default());
        return;
    }

    println!("Vault: {}", scan.root.display());

    let rows = vec![
        StatRow { metric: "Notes", value: stats.total_notes.to_string() },
        StatRow { metric: "Roots", value: stats.root_count.to_string() },
        StatRow { metric: "Leaves", value: stats.leaf_count.to_string() },
        StatRow { metric: "Orphans", value: stats.orphan_count.to_string() },
        StatRow { metric: "Max depth", value: stats.max_depth.to_string() },
    ];
    let table = Table::new(&rows).with(Style::rounded()).to_string();
    println!("{}", table);

    if !stats.orphans.is_empty() {
        println!();
        println!("Orphans (no parent, no children):");
        for name in &stats.orphans {
            println!("  {}", name);
        }
    }
}
