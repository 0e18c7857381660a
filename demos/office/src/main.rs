//! office: one evacuation episode on a synthetic office floor.
//!
//! Usage:
//!
//! ```text
//! office [POLICY] [CONFIG.json]
//!
//!   POLICY       nearest (default) | random | fixed
//!   CONFIG.json  optional EnvConfig overrides; missing fields keep defaults
//! ```
//!
//! Writes `agent_snapshots.csv`, `step_summaries.csv`, and `report.json`
//! to `output/office/`, then runs a small seed sweep for comparison.
//! Set `RUST_LOG=debug` (or `trace`) for per-episode and per-step events.

mod floor_plan;
#[cfg(test)]
mod tests;

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use tracing::info;
use tracing_subscriber::EnvFilter;

use ev_core::{EnvConfig, ExitId};
use ev_env::{EnvBuilder, mean_reward, run_batch, run_episode};
use ev_output::{CsvWriter, EpisodeOutputObserver, EpisodeRecorder};
use ev_policy::{ExitPolicy, FixedExit, NearestExit, RandomExit};

use floor_plan::build_floor_plan;

// ── Constants ─────────────────────────────────────────────────────────────────

const AGENT_COUNT: usize = 5;
const SEED:        u64   = 42;
const OUTPUT_DIR:  &str  = "output/office";
const SWEEP_SEEDS: u64   = 16;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn load_config(path: Option<&str>) -> Result<EnvConfig> {
    let config = match path {
        Some(p) => {
            let file = File::open(p).with_context(|| format!("opening config {p}"))?;
            let value: serde_json::Value = serde_json::from_reader(file)
                .with_context(|| format!("parsing config {p}"))?;
            merge_defaults(demo_defaults(), value)?
        }
        None => demo_defaults(),
    };
    config.validate()?;
    Ok(config)
}

fn demo_defaults() -> EnvConfig {
    EnvConfig { agent_count: AGENT_COUNT, seed: SEED, ..EnvConfig::default() }
}

/// Overlay a partial JSON object on `base`.
fn merge_defaults(base: EnvConfig, overrides: serde_json::Value) -> Result<EnvConfig> {
    let serde_json::Value::Object(overrides) = overrides else {
        bail!("config must be a JSON object");
    };
    let mut base = serde_json::to_value(base)?;
    if let serde_json::Value::Object(fields) = &mut base {
        for (k, v) in overrides {
            if k == "rewards" {
                if let (Some(serde_json::Value::Object(r)), serde_json::Value::Object(v)) =
                    (fields.get_mut("rewards"), v)
                {
                    r.extend(v);
                }
                continue;
            }
            fields.insert(k, v);
        }
    }
    Ok(serde_json::from_value(base)?)
}

fn make_policy(name: &str, seed: u64) -> Result<Box<dyn ExitPolicy>> {
    let policy: Box<dyn ExitPolicy> = match name {
        "nearest" => Box::new(NearestExit),
        "random"  => Box::new(RandomExit::new(seed)),
        "fixed"   => Box::new(FixedExit(ExitId(0))),
        other     => bail!("unknown policy {other:?} (expected nearest, random, or fixed)"),
    };
    Ok(policy)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let policy_name = args.first().map(String::as_str).unwrap_or("nearest");
    let config = load_config(args.get(1).map(String::as_str))?;

    // 1. Floor plan.
    let grid = Arc::new(build_floor_plan());
    info!(
        width = grid.width(),
        height = grid.height(),
        free = grid.free_cell_count(),
        "floor plan ready"
    );

    // 2. Environment.
    let mut env = EnvBuilder::new(Arc::clone(&grid)).config(config.clone()).build()?;
    println!("=== office: building evacuation ===");
    println!(
        "Agents: {}  |  Budget: {} steps  |  Seed: {}  |  Policy: {policy_name}",
        config.agent_count, config.max_steps, config.seed
    );
    println!("Exits ({}):", env.action_count());
    for (i, exit) in env.exits().cells().iter().enumerate() {
        println!("  {i:>2}  {exit}");
    }
    println!();

    // 3. Output.
    std::fs::create_dir_all(OUTPUT_DIR)?;
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut observers = (EpisodeRecorder::new(), EpisodeOutputObserver::new(writer));

    // 4. Run.
    let mut policy = make_policy(policy_name, config.seed)?;
    let t0 = Instant::now();
    let summary = run_episode(&mut env, &mut policy, &mut observers, None)?;
    let elapsed = t0.elapsed();

    let (recorder, mut files) = observers;
    if let Some(e) = files.take_error() {
        eprintln!("output error: {e}");
    }

    let report_path = Path::new(OUTPUT_DIR).join("report.json");
    let out = BufWriter::new(File::create(&report_path)?);
    serde_json::to_writer_pretty(out, recorder.report())?;

    // 5. Summary.
    println!("Episode finished in {:.3} s after {} steps", elapsed.as_secs_f64(), summary.steps.0);
    println!(
        "  escaped {}  |  burned {}  |  still inside {}",
        summary.counts.escaped, summary.counts.burned, summary.counts.evacuating
    );
    println!("  total reward {:.2}", summary.total_reward);
    println!("  {}", if summary.terminated { "everyone resolved" } else { "step budget exhausted" });
    println!("  report: {}", report_path.display());
    println!();

    // 6. Seed sweep.
    let seeds: Vec<u64> = (0..SWEEP_SEEDS).map(|i| config.seed + i).collect();
    let t0 = Instant::now();
    let results = run_batch(Arc::clone(&grid), &config, &seeds, |seed| {
        make_policy(policy_name, seed).unwrap_or_else(|_| Box::new(NearestExit))
    });
    let failed = results.iter().filter(|r| r.is_err()).count();
    println!(
        "Sweep over {} seeds in {:.3} s: mean reward {}, {failed} failed",
        seeds.len(),
        t0.elapsed().as_secs_f64(),
        mean_reward(&results).map_or_else(|| "n/a".to_owned(), |m| format!("{m:.2}")),
    );

    Ok(())
}
