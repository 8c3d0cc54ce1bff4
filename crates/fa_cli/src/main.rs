//! fa_cli
//!
//! Runs the possession & event analysis over tracker output and prints a
//! match summary.

mod input;
mod render;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use fa_core::models::{FrameSource, NoFrames, SingleFrame};
use fa_core::MatchAnalyzer;

#[derive(Parser)]
#[command(name = "fa_cli")]
#[command(about = "Possession, pass and interception analysis for football tracking data", long_about = None)]
struct Cli {
    /// Debug-level logging (overrides RUST_LOG)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a tracks JSON file
    Analyze {
        /// Tracks JSON (`{"players": [...], "ball": [...]}`)
        #[arg(long)]
        tracks: PathBuf,

        /// Raw RGB reference frame (frame 0) for team color fitting
        #[arg(long, requires_all = ["width", "height"])]
        frame: Option<PathBuf>,

        /// Reference frame width in pixels
        #[arg(long)]
        width: Option<usize>,

        /// Reference frame height in pixels
        #[arg(long)]
        height: Option<usize>,

        /// YAML configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Preset: strict, lenient or default
        #[arg(long, conflicts_with = "config")]
        profile: Option<String>,

        /// Write the full report as JSON
        #[arg(long)]
        json: Option<PathBuf>,

        /// Write the annotated tracks (team, colors, has_ball) as JSON
        #[arg(long)]
        annotated: Option<PathBuf>,
    },

    /// Print the effective configuration as YAML
    Config {
        /// Preset: strict, lenient or default
        #[arg(long)]
        profile: Option<String>,
    },
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Analyze {
            tracks,
            frame,
            width,
            height,
            config,
            profile,
            json,
            annotated,
        } => {
            let config = input::load_config(config.as_deref(), profile.as_deref())?;
            let mut track_set = input::load_tracks(&tracks)?;

            let reference = match (frame, width, height) {
                (Some(path), Some(w), Some(h)) => Some(input::load_frame(&path, w, h)?),
                _ => None,
            };
            let frames: Box<dyn FrameSource> = match reference {
                Some(frame) => Box::new(SingleFrame::reference(frame)),
                None => Box::new(NoFrames),
            };

            let analyzer = MatchAnalyzer::new(config).context("invalid configuration")?;
            let report = analyzer
                .analyze(&mut track_set, frames.as_ref())
                .with_context(|| format!("analysis of {} failed", tracks.display()))?;

            print!("{}", render::render_text(&report));

            if let Some(path) = json {
                let body = serde_json::to_string_pretty(&report)?;
                std::fs::write(&path, body)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                info!(path = %path.display(), "report written");
            }

            if let Some(path) = annotated {
                let body = serde_json::to_string(&track_set)?;
                std::fs::write(&path, body)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                info!(path = %path.display(), "annotated tracks written");
            }
        }

        Commands::Config { profile } => {
            let config = input::load_config(None, profile.as_deref())?;
            print!("{}", config.to_yaml_string()?);
        }
    }

    Ok(())
}
