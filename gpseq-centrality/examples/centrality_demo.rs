//! Demo: estimate and rank centrality on a synthetic condition series.
//!
//! Usage:
//!   cargo run -p gpseq-centrality --example centrality_demo -- [config.toml]
//!
//! Without a config file all fifteen metrics are computed on one thread.

use std::env;
use std::path::Path;

use gpseq_centrality::CentralityConfig;
use gpseq_core::models::{ConditionRow, ConditionStats, MultiConditionTable};

const N_CONDITIONS: usize = 4;

// Bins further down the list saturate later, i.e. are more central.
fn synthetic_rows() -> Vec<ConditionRow> {
    let mut rows = Vec::new();
    for (i, chrom) in ["chr1", "chr2", "chr3", "chrX"].iter().enumerate() {
        let start = (i as u32) * 1_000_000;
        let key = format!("{}:{}", chrom, start);
        let saturation = 1.0 + i as f64;
        for ci in 0..N_CONDITIONS {
            let t = (ci + 1) as f64;
            let sum = 1000.0 * (1.0 - (-t / saturation).exp());
            let stats = ConditionStats::new(sum, 10.0, 1e6, sum / 10.0, (sum / 10.0).sqrt());
            rows.push(ConditionRow::new(
                key.clone(),
                *chrom,
                start,
                start + 1_000_000,
                ci,
                stats,
            ));
        }
    }
    rows
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let config = match args.get(1) {
        Some(path) => CentralityConfig::try_from(Path::new(path)).expect("Failed to load config"),
        None => CentralityConfig::default(),
    };

    let table = MultiConditionTable::from_rows(synthetic_rows()).expect("Invalid synthetic table");
    println!(
        "Built {} bins over {} conditions",
        table.len(),
        table.n_conditions()
    );

    let (estimates, ranks) = config.run(&table).expect("Estimation failed");

    println!("\n=== estimates ===");
    println!("bin\t{}", estimates.metrics().join("\t"));
    for row in estimates.iter() {
        let values: Vec<String> = row.values.iter().map(|v| format!("{:.4}", v)).collect();
        println!("{}\t{}", row.label(false), values.join("\t"));
    }
    for failure in estimates.failures() {
        println!("failed: {} ({})", failure.key, failure.reason);
    }

    println!("\n=== ranks (peripheral first) ===");
    for (metric, labels) in ranks.iter() {
        println!("{}\t{}", metric, labels.join(" < "));
    }
}
