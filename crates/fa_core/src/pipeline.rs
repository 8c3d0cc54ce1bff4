//! # Match Analysis Pipeline
//!
//! Runs every stage over one clip, in order:
//!
//! 1. Fit the team color model on frame 0 (when pixels are available)
//! 2. Annotate `team` / `jersey_color` / `team_color`
//! 3. Assign the ball per frame and build the team-ball-control timeline
//! 4. Detect possession changes, passes and interceptions
//! 5. Aggregate statistics and the pass network
//!
//! Each run owns a fresh `TeamClassifier`, so player IDs from one clip never
//! leak into another.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{debug, info};

use crate::analysis::events::{PossessionEventDetector, PossessionEvents};
use crate::analysis::stats::{MatchStatistics, PassNetworkAnalyzer, PassNetworkReport, StatisticsAggregator};
use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::models::{FrameSource, Rgb, TrackSet};
use crate::possession::{annotate_possession, BallPossessionAssigner};
use crate::team::{annotate_teams, TeamClassifier, TEAM_ONE, TEAM_TWO};

/// Everything the reporting layer needs about one clip.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub total_frames: usize,
    pub duration_seconds: f32,
    /// Distinct player IDs over the clip
    pub players_detected: usize,
    pub ball_detected: bool,
    /// Palette of teams 1 and 2, when a color model was fitted
    pub team_colors: Option<[Rgb; 2]>,
    /// Percent of frames controlled per team
    pub possession: BTreeMap<u8, f32>,
    /// Changes of the controlling team between consecutive frames
    pub team_switches: usize,
    pub events: PossessionEvents,
    pub statistics: MatchStatistics,
    pub pass_network: PassNetworkReport,
}

#[derive(Debug, Clone)]
pub struct MatchAnalyzer {
    config: AnalysisConfig,
}

impl MatchAnalyzer {
    /// Validates `config` up front.
    pub fn new(config: AnalysisConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Annotate `tracks` in place and produce the clip report.
    pub fn analyze(&self, tracks: &mut TrackSet, frames: &dyn FrameSource) -> Result<AnalysisReport> {
        info!(frames = tracks.frame_count(), "analysis started");

        let mut classifier = TeamClassifier::new(self.config.team.clone());
        match (frames.frame(0), tracks.players.first()) {
            (Some(reference), Some(players)) => classifier.initialize(reference, players),
            _ => debug!("no reference frame, relying on upstream team labels"),
        }
        annotate_teams(tracks, frames, &mut classifier)?;

        let assigner = BallPossessionAssigner::new(self.config.possession.clone());
        let control = annotate_possession(tracks, &assigner);

        let events = PossessionEventDetector::new(self.config.events.clone()).detect(tracks);
        let statistics = StatisticsAggregator::new().aggregate(&events, Some(&control));
        let pass_network = PassNetworkAnalyzer::new().analyze(tracks, &events.passes);

        let total_frames = tracks.frame_count();
        let report = AnalysisReport {
            total_frames,
            duration_seconds: total_frames as f32 / self.config.report.fps,
            players_detected: tracks.player_ids().len(),
            ball_detected: tracks.has_ball_detections(),
            team_colors: classifier.team_colors(),
            possession: [TEAM_ONE, TEAM_TWO]
                .into_iter()
                .map(|team| (team, control.possession_percentage(team)))
                .collect(),
            team_switches: control.team_switches(),
            events,
            statistics,
            pass_network,
        };

        info!(
            passes = report.statistics.total_passes,
            interceptions = report.statistics.total_interceptions,
            accuracy = report.statistics.pass_accuracy,
            "analysis complete"
        );
        Ok(report)
    }
}
