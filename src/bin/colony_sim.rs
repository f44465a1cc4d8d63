//! Colony Simulation binary
//!
//! Seeds a colony of werewolf packs, runs it for a number of seasons and
//! prints what happened.

use std::path::PathBuf;
use std::time::Instant;

use armorica_packs::colony::generation::seed_colony;
use armorica_packs::colony::ColonySummary;
use armorica_packs::core::config::ColonyConfig;
use armorica_packs::core::error::Result;
use clap::Parser;

/// Werewolf colony simulation
#[derive(Parser, Debug)]
#[command(name = "colony_sim")]
#[command(about = "Simulate werewolf packs over a number of seasons")]
struct Args {
    /// Random seed for deterministic runs (overrides the config file)
    #[arg(long)]
    seed: Option<u64>,

    /// Seasons to simulate
    #[arg(long, default_value_t = 48)]
    seasons: u32,

    /// Number of starting packs (overrides the config file)
    #[arg(long)]
    packs: Option<usize>,

    /// Members per starting pack, alphas included (overrides the config file)
    #[arg(long)]
    pack_size: Option<usize>,

    /// TOML file with colony settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the full chronicle as JSON to this path
    #[arg(long)]
    chronicle: Option<PathBuf>,

    /// Print the summary as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "armorica_packs=info".into()),
        )
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => ColonyConfig::load(path)?,
        None => ColonyConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(packs) = args.packs {
        config.starting_packs = packs;
    }
    if let Some(size) = args.pack_size {
        config.starting_pack_size = size;
    }

    tracing::info!(
        "Seeding {} packs of {} (seed {})",
        config.starting_packs,
        config.starting_pack_size,
        config.seed
    );

    let mut colony = seed_colony("Armorica", config)?;

    let start = Instant::now();
    colony.run(args.seasons);
    let summary = ColonySummary::new(&colony, start.elapsed());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{}", summary.summary());
    }

    if let Some(path) = &args.chronicle {
        std::fs::write(path, colony.chronicle().to_json()?)?;
        tracing::info!(
            "Chronicle of {} entries written to {}",
            colony.chronicle().len(),
            path.display()
        );
    }

    Ok(())
}
