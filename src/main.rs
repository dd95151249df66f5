use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use graphcheck::config::{self, Overrides};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "graphcheck")]
#[command(version)]
#[command(about = "Declarative graph algorithm runner with expected-result validation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build configured graphs, run their algorithms and check expected results
    Run {
        /// Path to the JSON configuration file
        config: PathBuf,

        /// Only run the graph with this id (repeatable; defaults to all)
        #[arg(long = "id", value_name = "ID")]
        ids: Vec<String>,

        /// Override an attribute on every built graph (repeatable)
        #[arg(long = "set", value_name = "KEY=JSON", value_parser = parse_override)]
        overrides: Vec<(String, Value)>,

        /// Log start/finish events around every algorithm run
        #[arg(long)]
        track_performance: bool,
    },
    /// List the graphs in a configuration file
    List {
        /// Path to the JSON configuration file
        config: PathBuf,
    },
    /// Show version information
    Version,
}

/// Parses `KEY=JSON`. Values that are not valid JSON are taken as strings,
/// so `--set algorithm=has_cycle` works without extra quoting.
fn parse_override(s: &str) -> Result<(String, Value), String> {
    let (key, raw) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=JSON, got '{}'", s))?;
    let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
    Ok((key.to_string(), value))
}

fn load(path: &Path) -> Result<config::Config> {
    config::parse_file(path).with_context(|| format!("Failed to load {}", path.display()))
}

fn run_graphs(
    path: &Path,
    ids: &[String],
    overrides: Vec<(String, Value)>,
    track_performance: bool,
) -> Result<ExitCode> {
    let config = load(path)?;

    let mut settings = config.settings;
    settings.track_performance |= track_performance;
    settings.apply();

    let overrides: Overrides = overrides.into_iter().collect();
    let graphs = if ids.is_empty() {
        config.registry.build_all(&overrides)?
    } else {
        config.registry.build_ids(ids, &overrides)?
    };

    let mut failed = 0;
    for graph in &graphs {
        let id = graph.id().unwrap_or("?");
        match graph.run_algorithm() {
            Ok(result) => println!("✅ {}: {}", id, result),
            Err(e) => {
                failed += 1;
                println!("❌ {}: FAILED {}", id, e);
            }
        }
    }

    println!("\n{} passed, {} failed", graphs.len() - failed, failed);
    Ok(if failed == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn list_graphs(path: &Path) -> Result<()> {
    let config = load(path)?;
    for id in config.registry.ids() {
        let graph = config.registry.build(id, &Overrides::new())?;
        let algorithm = graph
            .algorithm()
            .map_or_else(|| "-".to_string(), |a| a.to_string());
        println!("{}  [{}]", graph, algorithm);
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let outcome = match cli.command {
        Some(Commands::Run {
            config,
            ids,
            overrides,
            track_performance,
        }) => run_graphs(&config, &ids, overrides, track_performance),
        Some(Commands::List { config }) => list_graphs(&config).map(|_| ExitCode::SUCCESS),
        Some(Commands::Version) => {
            println!("graphcheck v{}", env!("CARGO_PKG_VERSION"));
            Ok(ExitCode::SUCCESS)
        }
        None => {
            println!("graphcheck - Declarative graph algorithm runner");
            println!("Run 'graphcheck run <CONFIG>' to run configured graphs");
            println!("Run 'graphcheck --help' for more information");
            Ok(ExitCode::SUCCESS)
        }
    };

    outcome.unwrap_or_else(|e| {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    })
}
