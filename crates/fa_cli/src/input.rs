//! Loading tracks, reference frames and configuration from disk.

use std::path::Path;

use anyhow::{Context, Result};

use fa_core::models::{RgbFrame, TrackSet};
use fa_core::AnalysisConfig;

pub fn load_tracks(path: &Path) -> Result<TrackSet> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read tracks {}", path.display()))?;
    let tracks: TrackSet = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse tracks {}", path.display()))?;
    Ok(tracks)
}

/// Raw interleaved RGB bytes, row-major, `width * height * 3` long.
pub fn load_frame(path: &Path, width: usize, height: usize) -> Result<RgbFrame> {
    let data = std::fs::read(path)
        .with_context(|| format!("failed to read frame {}", path.display()))?;
    RgbFrame::new(width, height, data)
        .with_context(|| format!("bad frame {} ({}x{})", path.display(), width, height))
}

/// Config file first, then an explicit preset, then `FA_ANALYSIS_PROFILE`.
pub fn load_config(path: Option<&Path>, profile: Option<&str>) -> Result<AnalysisConfig> {
    match (path, profile) {
        (Some(path), _) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            AnalysisConfig::from_yaml_str(&raw)
                .with_context(|| format!("invalid config {}", path.display()))
        }
        (None, Some(name)) => Ok(AnalysisConfig::from_profile(name)),
        (None, None) => Ok(AnalysisConfig::from_env_or_default()),
    }
}
