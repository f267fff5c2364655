//! # elfcode CLI
//!
//! Simulates the lever room route and exposes its pieces.
//!
//! Usage:
//!   elfcode run [level.json] [--json]
//!   elfcode plan [level.json]
//!   elfcode sums <v0> <v1> <v2> <v3> <v4> <v5>
//!   elfcode lookup <records.json> [--sentinel <value>]
//!
//! Without a level file the built-in room is used (levers 1..=6).
//! Logging follows `RUST_LOG`; `-v` and `-q` override it.

use anyhow::Context;
use clap::{Parser, Subcommand};
use elfcode_script::{
    find_key_for_sentinel, plan, solve, LevelConfig, LevelSimulator, PrefixSums, Record,
    DEFAULT_SENTINEL, LEVER_COUNT,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "elfcode")]
#[command(author, version, about = "elfcode - lever room solver")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Debug logging and extra output
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only print results
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the route in the simulator and invoke the munch
    Run {
        /// Level JSON file (built-in level when omitted)
        level: Option<String>,

        /// Print the trace as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the calls the route would issue for a level
    Plan {
        /// Level JSON file (built-in level when omitted)
        level: Option<String>,
    },
    /// Print the prefix sums of six lever values
    Sums {
        #[arg(num_args = LEVER_COUNT, required = true, allow_negative_numbers = true)]
        values: Vec<i64>,
    },
    /// Find the key whose value matches the sentinel in a JSON array of records
    Lookup {
        /// JSON file holding an array of string-to-string objects
        file: String,

        #[arg(short, long, default_value = DEFAULT_SENTINEL)]
        sentinel: String,
    },
}

fn init_logging(verbose: bool, quiet: bool) {
    let filter = if verbose {
        EnvFilter::new("elfcode=debug,elfcode_script=debug")
    } else if quiet {
        EnvFilter::new("warn")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("elfcode=info,elfcode_script=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load_level(path: Option<&str>) -> anyhow::Result<LevelConfig> {
    match path {
        Some(path) => {
            let level = LevelConfig::from_file(path)?;
            tracing::info!(path, "level loaded");
            Ok(level)
        }
        None => Ok(LevelConfig::default()),
    }
}

fn run_level(path: Option<&str>, json: bool, verbose: bool, quiet: bool) -> anyhow::Result<()> {
    let mut sim = LevelSimulator::new(load_level(path)?)?;

    let result = solve(&mut sim);

    if json {
        println!("{}", serde_json::to_string_pretty(sim.trace())?);
    } else if !quiet {
        println!("--- Trace ({} calls) ---", sim.trace().len());
        for (step, action) in sim.trace().iter().enumerate() {
            println!("  {:3}. {}", step, action);
        }
        println!();
    }

    let report = result?;
    let position = sim.position();
    let outcome = sim.invoke_munch()?;

    if !quiet {
        println!("Sums:     {:?}", report.sums.as_slice());
        println!("Position: ({}, {})", position.x, position.y);
        if verbose {
            println!("Pulls:    {:?}", sim.pulls());
            println!("Records:  {}", sim.level().munch_records.len());
        }
        match &outcome.expected {
            Some(expected) => println!("Munch:    {:?} (expected {:?})", outcome.answer, expected),
            None => println!("Munch:    {:?}", outcome.answer),
        }
    }

    if outcome.is_solved() {
        if !quiet {
            println!("\n=== LEVEL SOLVED ===");
        }
        Ok(())
    } else {
        anyhow::bail!("munch answered {:?}, level not solved", outcome.answer)
    }
}

fn show_plan(path: Option<&str>) -> anyhow::Result<()> {
    let level = load_level(path)?;
    let sums = PrefixSums::from_values(level.levers)?;
    for (step, action) in plan(&sums).iter().enumerate() {
        println!("  {:3}. {}", step, action);
    }
    Ok(())
}

fn show_sums(values: &[i64]) -> anyhow::Result<()> {
    let values: [i64; LEVER_COUNT] = values
        .try_into()
        .map_err(|_| anyhow::anyhow!("expected exactly {} lever values", LEVER_COUNT))?;
    let sums = PrefixSums::from_values(values)?;
    let line: Vec<String> = sums.as_slice().iter().map(i64::to_string).collect();
    println!("{}", line.join(" "));
    Ok(())
}

fn lookup_file(file: &str, sentinel: &str) -> anyhow::Result<()> {
    let content =
        std::fs::read_to_string(file).with_context(|| format!("reading {}", file))?;
    let records: Vec<Record> =
        serde_json::from_str(&content).with_context(|| format!("parsing {}", file))?;
    tracing::debug!(records = records.len(), sentinel, "scanning");
    println!("{}", find_key_for_sentinel(&records, sentinel));
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let result = match &cli.command {
        Commands::Run { level, json } => run_level(level.as_deref(), *json, cli.verbose, cli.quiet),
        Commands::Plan { level } => show_plan(level.as_deref()),
        Commands::Sums { values } => show_sums(values),
        Commands::Lookup { file, sentinel } => lookup_file(file, sentinel),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
