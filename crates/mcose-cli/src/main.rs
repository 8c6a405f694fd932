// crates/mcose-cli/src/main.rs

#![forbid(unsafe_code)]
#![deny(
    rust_2018_idioms,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo
)]

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use mcose_core::{Forest, NodeAffinity};
use mcose_dp::{
    maximum_common_ordered_subtree_embedding, maximum_common_ordered_subtree_isomorphism, Strategy,
};
use mcose_gen::{forest_str, random_ordered_forest};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(
    name = "mcose-cli",
    about = "Maximum common ordered subtree embedding/isomorphism CLI",
    long_about = "Generate random ordered forests and compute their maximum common ordered subtree embedding (MCOSE) or isomorphism (MCOSI).",
    version = env!("CARGO_PKG_VERSION"),
    disable_help_subcommand = true
)]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Generate a uniformly random ordered forest and write it as JSON.
    Generate {
        /// Number of nodes (> 0)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        n: u32,

        /// Random seed
        #[arg(long, default_value_t = 0)]
        seed: u64,

        /// Output path for the forest (JSON)
        #[arg(long, default_value = "forest.json")]
        out: PathBuf,
    },

    /// Pretty-print a forest (JSON) as a box-drawing tree diagram.
    Show {
        /// Input path to a forest (JSON)
        #[arg(long)]
        input: PathBuf,
    },

    /// Compute the maximum common ordered subtree embedding of two forests.
    Embed {
        /// Input path to the first forest (JSON)
        #[arg(long)]
        t1: PathBuf,

        /// Input path to the second forest (JSON)
        #[arg(long)]
        t2: PathBuf,

        /// Node-affinity mode
        #[arg(value_enum, long, default_value_t = AffinityOpt::Eq)]
        affinity: AffinityOpt,

        /// DP implementation
        #[arg(value_enum, long, default_value_t = ImplOpt::Iterative)]
        r#impl: ImplOpt,
    },

    /// Compute the maximum common ordered subtree isomorphism of two forests.
    Isomorphism {
        /// Input path to the first forest (JSON)
        #[arg(long)]
        t1: PathBuf,

        /// Input path to the second forest (JSON)
        #[arg(long)]
        t2: PathBuf,

        /// Node-affinity mode
        #[arg(value_enum, long, default_value_t = AffinityOpt::Eq)]
        affinity: AffinityOpt,

        /// DP implementation
        #[arg(value_enum, long, default_value_t = ImplOpt::Iterative)]
        r#impl: ImplOpt,
    },
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, ValueEnum)]
enum AffinityOpt {
    /// Label equality
    Eq,
    /// Alias for `Eq` (see `mcose_core::affinity`)
    Auto,
    /// Every pair matches
    Always,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, ValueEnum)]
enum ImplOpt {
    Recursive,
    Iterative,
}

impl From<ImplOpt> for Strategy {
    fn from(opt: ImplOpt) -> Self {
        match opt {
            ImplOpt::Recursive => Self::Recursive,
            ImplOpt::Iterative => Self::Iterative,
        }
    }
}

impl From<AffinityOpt> for NodeAffinity<usize> {
    fn from(opt: AffinityOpt) -> Self {
        match opt {
            AffinityOpt::Eq => Self::Eq,
            AffinityOpt::Auto => Self::Auto,
            AffinityOpt::Always => Self::Always,
        }
    }
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    match cli.cmd {
        Cmd::Generate { n, seed, out } => generate(n, seed, out),
        Cmd::Show { input } => show(&input),
        Cmd::Embed {
            t1,
            t2,
            affinity,
            r#impl,
        } => embed(&t1, &t2, affinity, r#impl),
        Cmd::Isomorphism {
            t1,
            t2,
            affinity,
            r#impl,
        } => isomorphism(&t1, &t2, affinity, r#impl),
    }
}

/// Initialize tracing with an env-driven filter (default INFO).
fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = fmt::layer().with_target(false).with_level(true).compact();

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

/// Ensure the parent directory for a file exists.
fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("creating parent directory {}", dir.display()))?;
        }
    }
    Ok(())
}

fn read_forest(path: &Path) -> Result<Forest<usize>> {
    let f = File::open(path).with_context(|| format!("open {}", path.display()))?;
    serde_json::from_reader(f).with_context(|| format!("parse forest JSON from {}", path.display()))
}

fn write_forest(path: &Path, forest: &Forest<usize>) -> Result<()> {
    ensure_parent_dir(path)?;
    let f = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let w = BufWriter::new(f);
    serde_json::to_writer_pretty(w, forest)
        .with_context(|| format!("writing forest JSON to {}", path.display()))
}

fn generate(n: u32, seed: u64, out: PathBuf) -> Result<()> {
    info!(n, seed, "generating random ordered forest");
    let forest = random_ordered_forest(n as usize, seed).context("generating random forest")?;
    write_forest(&out, &forest)?;
    println!("Generated {}-node forest (seed={}) -> {}", n, seed, out.display());
    Ok(())
}

fn show(input: &Path) -> Result<()> {
    let forest = read_forest(input)?;
    print!("{}", forest_str(&forest));
    Ok(())
}

fn embed(t1: &Path, t2: &Path, affinity: AffinityOpt, strategy: ImplOpt) -> Result<()> {
    let f1 = read_forest(t1)?;
    let f2 = read_forest(t2)?;
    let node_affinity: NodeAffinity<usize> = affinity.into();

    info!(t1 = %t1.display(), t2 = %t2.display(), ?affinity, ?strategy, "computing embedding");
    let result = maximum_common_ordered_subtree_embedding(&f1, &f2, &node_affinity, strategy.into())
        .context("computing maximum common ordered subtree embedding")?;

    println!("value: {}", result.value);
    println!("embedding in t1:");
    print!("{}", forest_str(&result.embedding1));
    println!("embedding in t2:");
    print!("{}", forest_str(&result.embedding2));
    Ok(())
}

fn isomorphism(t1: &Path, t2: &Path, affinity: AffinityOpt, strategy: ImplOpt) -> Result<()> {
    let f1 = read_forest(t1)?;
    let f2 = read_forest(t2)?;
    let node_affinity: NodeAffinity<usize> = affinity.into();

    info!(t1 = %t1.display(), t2 = %t2.display(), ?affinity, ?strategy, "computing isomorphism");
    let result =
        maximum_common_ordered_subtree_isomorphism(&f1, &f2, &node_affinity, strategy.into())
            .context("computing maximum common ordered subtree isomorphism")?;

    println!("value: {}", result.value);
    println!("isomorphism in t1:");
    print!("{}", forest_str(&result.embedding1));
    println!("isomorphism in t2:");
    print!("{}", forest_str(&result.embedding2));
    Ok(())
}
