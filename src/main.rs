//! Screen a batch of scraped profiles from the command line.
//!
//! Reads a JSON array of raw profile records, screens each one with the
//! configured settings, and prints the results as a JSON array on stdout.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Parser;
use serde::Serialize;
use tracing::info;

use profile_sentinel::config;
use profile_sentinel::detector::RawProfileText;
use profile_sentinel::{DetectorSettings, ProfileDetector, ScreeningResult};

/// Command-line arguments for profile-sentinel
#[derive(Parser, Debug)]
#[command(name = "profile-sentinel")]
#[command(about = "Classify scraped profile summaries as suspicious, verified, or undetermined")]
#[command(version)]
struct Args {
    /// JSON file holding an array of raw profile records
    profiles: PathBuf,

    /// JSON settings file (sensitivity, test mode, custom patterns, ...)
    #[arg(short, long, env = config::SETTINGS_ENV_VAR)]
    settings: Option<PathBuf>,

    /// Reference time for "joined" dates, RFC 3339; defaults to now
    #[arg(long)]
    now: Option<DateTime<Utc>>,
}

#[derive(Serialize)]
struct ProfileReport<'a> {
    name: &'a str,
    #[serde(flatten)]
    result: ScreeningResult,
    notify: bool,
}

fn main() -> Result<()> {
    profile_sentinel::init_tracing();

    let args = Args::parse();

    let settings = match &args.settings {
        Some(path) => DetectorSettings::load(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => DetectorSettings::default(),
    };
    let detector = ProfileDetector::new(settings).context("Failed to configure detector")?;

    let json = std::fs::read_to_string(&args.profiles)
        .with_context(|| format!("Failed to read {}", args.profiles.display()))?;
    let profiles: Vec<RawProfileText> =
        serde_json::from_str(&json).context("Profiles file is not a JSON array of profiles")?;

    let now = args.now.unwrap_or_else(Utc::now);
    info!(
        "{} v{} screening {} profiles",
        config::APP_NAME,
        config::APP_VERSION,
        profiles.len()
    );

    let reports: Vec<ProfileReport<'_>> = profiles
        .iter()
        .map(|raw| {
            let result = detector.screen_raw(raw, now);
            ProfileReport {
                name: raw.name.trim(),
                notify: result.should_notify(detector.settings()),
                result,
            }
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&reports)?);
    Ok(())
}
