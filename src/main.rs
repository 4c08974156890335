use anyhow::{Context, Result};
use chrono::Utc;
use chrono_tz::Tz;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use standup_reels::api_types::decode_joke_batch;
use standup_reels::context::derive_daily_context;
use standup_reels::orchestrator::orchestrate_plans;
use standup_reels::render::render_rundown;

/// Standup Reels - joke-to-video production planner
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to a raw joke JSON document (bare payload or {"jokes": [...]})
    #[arg(short, long)]
    input: String,

    /// Output directory for generated files (default: "out")
    #[arg(short, long, default_value = "out")]
    output_dir: String,

    /// IANA timezone the daily context is derived in
    #[arg(long, default_value = "America/New_York")]
    timezone: String,

    /// Seed for the background theme draw (random when omitted)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_thread_ids(false)
        .with_line_number(true)
        .init();

    info!("Starting standup_reels");

    let args = Args::parse();

    let tz: Tz = args
        .timezone
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid timezone {:?}: {}", args.timezone, e))?;

    let utc_now = Utc::now();
    let local_now = utc_now.with_timezone(&tz);
    let ymd = local_now.format("%Y-%m-%d").to_string();
    info!(
        "Run date - local={}, timezone={}, output_dir={}",
        ymd, tz, args.output_dir
    );

    let body = std::fs::read_to_string(&args.input)
        .with_context(|| format!("Reading joke payload from {}", args.input))?;
    let raw_jokes = decode_joke_batch(&body)?;
    debug!("Decoded raw jokes - count={}", raw_jokes.len());

    let ctx = derive_daily_context(local_now.naive_local());
    debug!(
        "Daily context - vibe={:?}, crowd_energy={:.2}",
        ctx.vibe, ctx.crowd_energy
    );

    let mut rng = match args.seed {
        Some(seed) => {
            debug!("Using seeded theme draw - seed={}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let plans = orchestrate_plans(&raw_jokes, &ctx, utc_now, &mut rng)?;

    let date_dir = std::path::Path::new(&args.output_dir).join(&ymd);
    std::fs::create_dir_all(&date_dir)?;
    debug!("Output directory: {}", date_dir.display());

    std::fs::write(
        date_dir.join("context.json"),
        serde_json::to_vec_pretty(&ctx)?,
    )?;
    debug!("Wrote context.json");

    std::fs::write(
        date_dir.join("plans.full.json"),
        serde_json::to_vec_pretty(&plans)?,
    )?;
    debug!("Wrote plans.full.json");

    std::fs::write(date_dir.join("rundown.md"), render_rundown(&ctx, &plans))?;
    debug!("Wrote rundown.md");

    info!(
        "Pipeline completed successfully - plans={}, directory={}",
        plans.len(),
        date_dir.display()
    );
    Ok(())
}
