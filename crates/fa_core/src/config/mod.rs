//! # Analysis Configuration
//!
//! Every heuristic threshold of the engine lives here as a named value with
//! a documented default, instead of as a literal at the call site.
//!
//! ## Presets
//! - `default()` - thresholds of the reference pipeline
//! - `strict()` - fewer, more confident events (longer debounce, tighter ball radius)
//! - `lenient()` - more events from shaky tracking
//!
//! ## Usage
//! ```rust
//! use fa_core::config::AnalysisConfig;
//!
//! let config = AnalysisConfig::default();
//! assert_eq!(config.events.debounce_frames, 3);
//!
//! let yaml = "possession:\n  max_player_ball_distance: 55.0\n";
//! let tuned = AnalysisConfig::from_yaml_str(yaml).unwrap();
//! assert_eq!(tuned.possession.max_player_ball_distance, 55.0);
//! ```
//!
//! ## Environment Variables
//!
//! - `FA_ANALYSIS_PROFILE`: Select preset (strict, lenient, default)

mod event_config;
mod possession_config;
mod team_config;

pub use event_config::EventConfig;
pub use possession_config::PossessionConfig;
pub use team_config::TeamConfig;

use std::env;

use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, Result};

/// Environment variable selecting a preset.
pub const PROFILE_ENV_VAR: &str = "FA_ANALYSIS_PROFILE";

/// Reporting settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Video frame rate used for `duration_seconds`
    pub fps: f32,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self { fps: 24.0 }
    }
}

/// Full engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AnalysisConfig {
    pub team: TeamConfig,
    pub possession: PossessionConfig,
    pub events: EventConfig,
    pub report: ReportConfig,
}

impl AnalysisConfig {
    /// Fewer, more confident events
    pub fn strict() -> Self {
        let mut cfg = Self::default();
        cfg.possession.max_player_ball_distance = 50.0;
        cfg.events.debounce_frames = 5;
        cfg.events.color_similarity_threshold = 0.4;
        cfg.events.min_pass_distance = 8.0;
        cfg
    }

    /// More events from noisy tracking
    pub fn lenient() -> Self {
        let mut cfg = Self::default();
        cfg.possession.max_player_ball_distance = 90.0;
        cfg.events.debounce_frames = 2;
        cfg.events.color_similarity_threshold = 0.2;
        cfg.events.min_pass_distance = 3.0;
        cfg
    }

    pub fn from_profile(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "strict" => Self::strict(),
            "lenient" => Self::lenient(),
            _ => Self::default(),
        }
    }

    /// Load from environment variable FA_ANALYSIS_PROFILE or use default
    pub fn from_env_or_default() -> Self {
        Self::from_profile(&env::var(PROFILE_ENV_VAR).unwrap_or_default())
    }

    /// Parse and validate a YAML document; missing fields keep defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let cfg: Self = serde_yaml::from_str(yaml)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn to_yaml_string(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: String| -> Result<()> { Err(AnalysisError::InvalidConfig(msg)) };

        if self.team.clustering_restarts == 0 || self.team.clustering_max_iterations == 0 {
            return invalid("clustering restarts and iterations must be positive".into());
        }
        for (player_id, team) in &self.team.team_overrides {
            if !(1..=2).contains(team) {
                return Err(AnalysisError::InvalidTeam {
                    player_id: *player_id,
                    team: *team,
                });
            }
        }

        let p = &self.possession;
        if !(p.max_player_ball_distance > 0.0) {
            return invalid(format!(
                "max_player_ball_distance must be positive, got {}",
                p.max_player_ball_distance
            ));
        }
        if p.field_width <= 0.0 || p.touchline_margin < 0.0 {
            return invalid("field_width must be positive and touchline_margin non-negative".into());
        }

        let e = &self.events;
        if !(0.0..=1.0).contains(&e.color_similarity_threshold) {
            return invalid(format!(
                "color_similarity_threshold must be in [0, 1], got {}",
                e.color_similarity_threshold
            ));
        }
        if e.min_pass_distance < 0.0 || e.min_trajectory_length < 0.0 {
            return invalid("distances must be non-negative".into());
        }
        if e.min_trajectory_samples > e.trajectory_samples {
            return invalid(format!(
                "min_trajectory_samples ({}) exceeds trajectory_samples ({})",
                e.min_trajectory_samples, e.trajectory_samples
            ));
        }
        if e.tolerance_distance_scale <= 0.0 {
            return invalid("tolerance_distance_scale must be positive".into());
        }

        if !(self.report.fps > 0.0) {
            return invalid(format!("fps must be positive, got {}", self.report.fps));
        }
        Ok(())
    }
}

// ========== Tests ==========

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = AnalysisConfig::default();
        assert_eq!(cfg.possession.max_player_ball_distance, 70.0);
        assert_eq!(cfg.events.debounce_frames, 3);
        assert!((cfg.events.color_similarity_threshold - 0.3).abs() < f32::EPSILON);
        assert_eq!(cfg.events.min_pass_distance, 5.0);
        assert!(cfg.team.team_overrides.is_empty());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_strict_is_stricter_than_lenient() {
        let strict = AnalysisConfig::strict();
        let lenient = AnalysisConfig::lenient();

        assert!(strict.events.debounce_frames > lenient.events.debounce_frames);
        assert!(
            strict.possession.max_player_ball_distance
                < lenient.possession.max_player_ball_distance
        );
        assert!(strict.validate().is_ok());
        assert!(lenient.validate().is_ok());
    }

    #[test]
    fn test_profile_names() {
        assert_eq!(AnalysisConfig::from_profile("STRICT"), AnalysisConfig::strict());
        assert_eq!(AnalysisConfig::from_profile("lenient"), AnalysisConfig::lenient());
        assert_eq!(AnalysisConfig::from_profile("nope"), AnalysisConfig::default());
    }

    #[test]
    fn test_tolerance_is_distance_scaled() {
        let e = EventConfig::default();
        // 10 units: ratio 0.2 + 0.1 = 0.3
        assert!((e.trajectory_tolerance(10.0) - 3.0).abs() < 1e-4);
        // 50 units: ratio capped at 0.4
        assert!((e.trajectory_tolerance(50.0) - 20.0).abs() < 1e-4);
    }

    #[test]
    fn test_yaml_partial_override() {
        let yaml = r#"
team:
  team_overrides:
    96: 1
events:
  debounce_frames: 4
"#;
        let cfg = AnalysisConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(cfg.team.team_overrides.get(&96), Some(&1));
        assert_eq!(cfg.events.debounce_frames, 4);
        // Untouched sections keep defaults
        assert_eq!(cfg.possession, PossessionConfig::default());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut cfg = AnalysisConfig::default();
        cfg.events.color_similarity_threshold = 1.5;
        assert!(matches!(cfg.validate(), Err(AnalysisError::InvalidConfig(_))));

        let mut cfg = AnalysisConfig::default();
        cfg.team.team_overrides.insert(96, 3);
        assert!(matches!(
            cfg.validate(),
            Err(AnalysisError::InvalidTeam { player_id: 96, team: 3 })
        ));

        let mut cfg = AnalysisConfig::default();
        cfg.events.min_trajectory_samples = 5;
        assert!(cfg.validate().is_err());

        let mut cfg = AnalysisConfig::default();
        cfg.report.fps = 0.0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_config_serialization() {
        let cfg = AnalysisConfig::strict();
        let json = serde_json::to_string(&cfg).unwrap();
        let parsed: AnalysisConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, cfg);

        let yaml = cfg.to_yaml_string().unwrap();
        assert_eq!(AnalysisConfig::from_yaml_str(&yaml).unwrap(), cfg);
    }
}
