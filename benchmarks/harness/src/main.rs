//! mcose-bench-harness
//!
//! Run end-to-end benchmarks (generate two random forests -> embed -> isomorphism)
//! and append CSV rows into `benchmarks/reports/bench-<unix>.csv`.
//!
//! Usage examples:
//!   cargo run -p mcose-bench-harness -- --profile configs/profiles/small.toml
//!   cargo run -p mcose-bench-harness -- --profile configs/profiles/medium.toml

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use serde::Deserialize;

use mcose_core::NodeAffinity;
use mcose_dp::{
    maximum_common_ordered_subtree_embedding, maximum_common_ordered_subtree_isomorphism, Strategy,
};
use mcose_gen::random_ordered_forest;

#[derive(Debug, Deserialize)]
struct Profile {
    /// Node count of each generated forest
    n: usize,
    /// Base random seed; the second forest uses `seed + 1`
    seed: u64,
    /// Repetitions of the whole pipeline
    repeats: u32,
    /// DP implementation: "recursive" or "iterative"
    strategy: String,
}

fn parse_flag(name: &str, default: &str) -> String {
    let mut it = std::env::args().skip(1);
    while let Some(k) = it.next() {
        if k == format!("--{name}") {
            return it.next().unwrap_or_else(|| default.to_string());
        }
    }
    default.to_string()
}

fn dur_ms(d: Duration) -> u128 {
    d.as_millis()
}

fn main() -> Result<()> {
    let profile_path = PathBuf::from(parse_flag("profile", "configs/profiles/small.toml"));

    let profile_src = fs::read_to_string(&profile_path)
        .with_context(|| format!("read profile {:?}", profile_path))?;
    let profile: Profile = toml::from_str(&profile_src).context("parse profile toml")?;
    let strategy = Strategy::from_tag(&profile.strategy)
        .map_err(|e| anyhow::anyhow!("{e}"))
        .context("parsing --strategy")?;

    println!(
        "Profile: n={}, seed={}, repeats={}, strategy={}",
        profile.n, profile.seed, profile.repeats, profile.strategy
    );

    fs::create_dir_all("benchmarks/reports").ok();

    let ts = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let csv_path = PathBuf::from(format!("benchmarks/reports/bench-{ts}.csv"));
    let mut csv = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&csv_path)?;
    writeln!(csv, "timestamp,n,seed,repeat,strategy,stage,ms,value")?;

    for rep in 0..profile.repeats {
        let seed1 = profile.seed + u64::from(rep) * 2;
        let seed2 = seed1 + 1;

        let t0 = Instant::now();
        let t1 = random_ordered_forest(profile.n, seed1).context("generating first forest")?;
        let t2 = random_ordered_forest(profile.n, seed2).context("generating second forest")?;
        let t_gen = t0.elapsed();
        writeln!(
            csv,
            "{ts},{},{},{rep},{},gen,{},",
            profile.n,
            profile.seed,
            profile.strategy,
            dur_ms(t_gen)
        )?;

        let t0 = Instant::now();
        let embedding =
            maximum_common_ordered_subtree_embedding(&t1, &t2, &NodeAffinity::Eq, strategy)
                .context("computing embedding")?;
        let t_embed = t0.elapsed();
        writeln!(
            csv,
            "{ts},{},{},{rep},{},embed,{},{}",
            profile.n,
            profile.seed,
            profile.strategy,
            dur_ms(t_embed),
            embedding.value
        )?;

        let t0 = Instant::now();
        let isomorphism =
            maximum_common_ordered_subtree_isomorphism(&t1, &t2, &NodeAffinity::Eq, strategy)
                .context("computing isomorphism")?;
        let t_iso = t0.elapsed();
        writeln!(
            csv,
            "{ts},{},{},{rep},{},isomorphism,{},{}",
            profile.n,
            profile.seed,
            profile.strategy,
            dur_ms(t_iso),
            isomorphism.value
        )?;
    }

    println!("Wrote report → {}", csv_path.display());
    Ok(())
}
