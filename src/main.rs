//! Billiard Sim entry point
//!
//! Collects launch parameters, runs the table until every ball stops and
//! prints the path-length report.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use billiard_sim::launch::random_launches;
use billiard_sim::sim::{Arena, Driver, Snapshot};
use billiard_sim::{LaunchParams, SimConfig, consts, logging, prompt};

/// Friction-damped billiard table simulator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON config file (table, ball and stepping parameters, optional launches)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Launch this many balls with random speeds and angles instead of asking
    #[arg(short, long, value_parser = clap::value_parser!(u64).range((consts::MIN_BALLS as u64)..=(consts::MAX_BALLS as u64)))]
    random: Option<u64>,

    /// Seed for --random
    #[arg(long, default_value_t = 1)]
    seed: u64,

    /// Write JSON-lines snapshots of the table to this file
    #[arg(long)]
    trace: Option<PathBuf>,

    /// Steps between trace snapshots
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    trace_every: u64,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let config = match &args.config {
        Some(path) => SimConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => SimConfig::default(),
    };

    let launches = choose_launches(&args, &config)?;
    let arena = Arena::from_launches(&config, &launches)?;
    log::info!(
        "Starting run: {} balls on a {}x{} table, dt = {}",
        launches.len(),
        config.table_width,
        config.table_height,
        config.dt
    );

    let mut driver = Driver::new(arena, config.dt);
    let mut trace = match &args.trace {
        Some(path) => Some(BufWriter::new(
            File::create(path).with_context(|| format!("failed to create trace {}", path.display()))?,
        )),
        None => None,
    };

    if let Some(out) = trace.as_mut() {
        write_snapshot(out, &driver.snapshot())?;
    }
    let report = driver.run_to_completion(config.max_steps, |d| match trace.as_mut() {
        Some(out) if d.steps() % args.trace_every == 0 || !d.is_running() => {
            write_snapshot(out, &d.snapshot())
        }
        _ => Ok(()),
    });
    if let Some(mut out) = trace {
        out.flush()?;
    }

    let report = report?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        println!("\n{report}");
    }

    Ok(())
}

/// Config launches win, then --random, then interactive prompts
fn choose_launches(args: &Args, config: &SimConfig) -> Result<Vec<LaunchParams>> {
    if !config.balls.is_empty() {
        return Ok(config.balls.clone());
    }
    if let Some(count) = args.random {
        log::info!("Random launches for {} balls (seed {})", count, args.seed);
        return Ok(random_launches(count as usize, args.seed));
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    Ok(prompt::collect_launches(&mut input, &mut output)?)
}

fn write_snapshot(out: &mut impl Write, snapshot: &Snapshot) -> billiard_sim::Result<()> {
    serde_json::to_writer(&mut *out, snapshot)?;
    writeln!(out)?;
    Ok(())
}
