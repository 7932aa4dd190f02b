// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Env;
use lockpattern_search::{classify, Catalog, FilterConfig, Pattern};
use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lockpat")]
#[command(about = "Enumerate and classify 3x3 unlock patterns up to symmetry")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Number of threads to use (default: all available cores)
    #[arg(short, long, global = true)]
    threads: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the full catalog and report statistics
    Generate {
        /// Write all records as a JSON array to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Classify a single pattern, e.g. `lockpat classify 1 3 7 9`
    Classify {
        /// Points in drawing order (1-9)
        #[arg(required = true, num_args = 1..)]
        points: Vec<u8>,
    },
    /// Select records matching a filter configuration
    Select {
        /// JSON filter configuration (defaults apply when omitted)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Maximum number of records to print
        #[arg(short, long, default_value = "20")]
        limit: usize,

        /// Seed for random ordering
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Set thread pool size if specified
    if let Some(threads) = cli.threads {
        #[cfg(feature = "parallel")]
        {
            rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build_global()
                .context("failed to set thread pool size")?;
            info!("Using {} threads", threads);
        }
        #[cfg(not(feature = "parallel"))]
        {
            warn!(
                "Thread count {} specified but parallel feature not enabled. Ignoring.",
                threads
            );
        }
    }

    match cli.command {
        Commands::Generate { output } => generate(output),
        Commands::Classify { points } => classify_one(&points),
        Commands::Select {
            config,
            limit,
            seed,
        } => select(config, limit, seed),
    }
}

fn build_catalog() -> Catalog {
    let catalog = Catalog::build();
    for diagnostic in &catalog.diagnostics {
        warn!("{}", diagnostic);
    }
    catalog
}

fn generate(output: Option<PathBuf>) -> Result<()> {
    let catalog = build_catalog();
    for (counter, value) in catalog.statistics.iter() {
        println!("{:<20} {}", counter.as_ref(), value);
    }

    if let Some(path) = output {
        let file = File::create(&path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, &catalog.records)?;
        writer.flush()?;
        info!("Wrote {} records to {}", catalog.len(), path.display());
    }
    Ok(())
}

fn classify_one(points: &[u8]) -> Result<()> {
    let pattern = Pattern::new(points).context("invalid pattern")?;
    let record = classify(&pattern);
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}

fn select(config: Option<PathBuf>, limit: usize, seed: Option<u64>) -> Result<()> {
    let config = match config {
        Some(path) => FilterConfig::load(&path)
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => FilterConfig::default(),
    };
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let catalog = build_catalog();
    let selected = config.apply(&catalog.records, &mut rng);
    info!("{} of {} records match", selected.len(), catalog.len());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for record in selected.iter().take(limit) {
        serde_json::to_writer(&mut out, record)?;
        writeln!(out)?;
    }
    Ok(())
}
