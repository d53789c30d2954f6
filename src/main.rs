use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, warn};

use u_timetable::config::EnvOverrides;
use u_timetable::render::{render_text, section_views};
use u_timetable::scheduler::{
    time_seed, GeneratedTimetable, TimetableGenerator, TimetableKpi, TimetableRequest,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

/// Generate clash-free weekly timetables for parallel sections.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Request file (JSON with `config` and `subjects`)
    request: PathBuf,

    /// Random seed; defaults to $U_TIMETABLE_SEED, then the clock
    #[arg(long)]
    seed: Option<u64>,

    /// Consecutive rejected draws before a subject is given up
    #[arg(long)]
    max_attempts: Option<usize>,

    /// Extra runs with the next seed when random placement gives up
    #[arg(long, default_value_t = 0)]
    retries: u32,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

fn main() -> ExitCode {
    // Initialize logger - defaults to RUST_LOG if set, otherwise INFO
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            for cause in e.chain().skip(1) {
                eprintln!("  caused by: {cause}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let overrides = EnvOverrides::from_env()?;
    let mut request = TimetableRequest::from_json_file(&cli.request)
        .with_context(|| format!("loading request {}", cli.request.display()))?;
    request.config.apply(&overrides);
    if let Some(max_attempts) = cli.max_attempts {
        request.config.max_attempts = max_attempts;
    }

    let base_seed = cli.seed.or(overrides.seed).unwrap_or_else(time_seed);
    let generated = generate_with_retries(base_seed, cli.retries, |seed| {
        TimetableGenerator::new().with_seed(seed).generate(&request)
    })?;

    let kpi = TimetableKpi::calculate(&generated.timetable, &request.subjects);
    info!(
        "seed {}: {} of {} slots booked ({:.0}%), {} draws",
        generated.seed,
        kpi.booked_slots,
        kpi.total_slots,
        kpi.utilization * 100.0,
        generated.report.draws
    );

    match cli.format {
        Format::Text => {
            println!("=== Final Timetables ===\n");
            print!("{}", render_text(&generated.timetable, &request.subjects));
        }
        Format::Json => {
            let views = section_views(&generated.timetable, &request.subjects);
            println!("{}", serde_json::to_string_pretty(&views)?);
        }
    }
    Ok(())
}

/// Calls `generate` with `base_seed`, `base_seed + 1`, ... until it
/// succeeds, fails with a non-retryable error, or `retries` re-runs are
/// used up.
fn generate_with_retries<F>(
    base_seed: u64,
    retries: u32,
    mut generate: F,
) -> Result<GeneratedTimetable>
where
    F: FnMut(u64) -> u_timetable::Result<GeneratedTimetable>,
{
    let mut attempt = 0;
    loop {
        let seed = base_seed.wrapping_add(u64::from(attempt));
        match generate(seed) {
            Ok(generated) => return Ok(generated),
            Err(e) if e.is_retryable() && attempt < retries => {
                warn!("seed {seed} failed ({e}); retrying");
                attempt += 1;
            }
            Err(e) if e.is_retryable() => {
                return Err(e).context(format!("scheduling failed with seed {seed}"))
            }
            Err(e) if e.is_infeasible() => {
                return Err(e).context("request can never fit the grid")
            }
            Err(e) => return Err(e.into()),
        }
    }
}
