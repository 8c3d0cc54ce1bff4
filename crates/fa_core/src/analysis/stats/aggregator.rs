//! # Statistics Aggregator
//!
//! Pure reduction over detector output. Every ratio guards its denominator
//! and reports 0.0 instead of failing.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::pass_matrix::PassMatrix;
use crate::analysis::events::{InterceptionReason, PossessionChangeType, PossessionEvents};
use crate::models::PlayerId;
use crate::possession::TeamBallControl;

/// Match-level counts and ratios.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchStatistics {
    pub total_passes: usize,
    pub total_interceptions: usize,
    /// Passes per team (keys 1 and 2 always present)
    pub team_passes: BTreeMap<u8, usize>,
    /// Passes per sending player
    pub player_passes: BTreeMap<PlayerId, usize>,
    /// passes / (passes + interceptions), 0.0 when both are zero
    pub pass_accuracy: f32,

    pub total_possession_changes: usize,
    pub same_team_changes: usize,
    pub interteam_changes: usize,
    /// Same-team changes per receiving team
    pub team_possession_gains: BTreeMap<u8, usize>,
    /// changes / max(passes + interceptions, 1)
    pub possession_change_rate: f32,

    pub team_based_interceptions: usize,
    pub color_based_interceptions: usize,
    pub trajectory_based_interceptions: usize,
    pub average_color_similarity: f32,

    /// Percent of frames controlled, from the team-ball-control timeline
    pub team_1_possession: f32,
    pub team_2_possession: f32,
    /// Frames where the controlling team differs from the previous frame
    pub ball_possession_changes: usize,

    pub pass_matrix: PassMatrix,
}

impl MatchStatistics {
    pub fn team_pass_count(&self, team: u8) -> usize {
        self.team_passes.get(&team).copied().unwrap_or(0)
    }

    pub fn interceptions_by(&self, reason: InterceptionReason) -> usize {
        match reason {
            InterceptionReason::TeamChange => self.team_based_interceptions,
            InterceptionReason::ColorChange => self.color_based_interceptions,
            InterceptionReason::ImplausibleTrajectory => self.trajectory_based_interceptions,
        }
    }
}

fn ratio(numerator: usize, denominator: usize) -> f32 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f32 / denominator as f32
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StatisticsAggregator;

impl StatisticsAggregator {
    pub fn new() -> Self {
        Self
    }

    /// Reduce detector output (and the control timeline, when available)
    /// into a `MatchStatistics`.
    pub fn aggregate(
        &self,
        events: &PossessionEvents,
        control: Option<&TeamBallControl>,
    ) -> MatchStatistics {
        let mut stats = MatchStatistics {
            total_passes: events.passes.len(),
            total_interceptions: events.interceptions.len(),
            total_possession_changes: events.possession_changes.len(),
            ..Default::default()
        };
        stats.team_passes = BTreeMap::from([(1, 0), (2, 0)]);
        stats.team_possession_gains = BTreeMap::from([(1, 0), (2, 0)]);

        for pass in &events.passes {
            *stats.team_passes.entry(pass.team).or_insert(0) += 1;
            *stats.player_passes.entry(pass.from_player).or_insert(0) += 1;
        }

        for interception in &events.interceptions {
            match interception.interception_reason {
                InterceptionReason::TeamChange => stats.team_based_interceptions += 1,
                InterceptionReason::ColorChange => stats.color_based_interceptions += 1,
                InterceptionReason::ImplausibleTrajectory => {
                    stats.trajectory_based_interceptions += 1
                }
            }
        }

        for change in &events.possession_changes {
            match change.change_type {
                PossessionChangeType::SameTeamPass => {
                    stats.same_team_changes += 1;
                    *stats.team_possession_gains.entry(change.to_team).or_insert(0) += 1;
                }
                PossessionChangeType::Interception => stats.interteam_changes += 1,
            }
        }

        let resolved = stats.total_passes + stats.total_interceptions;
        stats.pass_accuracy = ratio(stats.total_passes, resolved);
        stats.possession_change_rate = ratio(stats.total_possession_changes, resolved.max(1));
        stats.average_color_similarity = if events.possession_changes.is_empty() {
            0.0
        } else {
            events
                .possession_changes
                .iter()
                .map(|c| c.color_similarity)
                .sum::<f32>()
                / events.possession_changes.len() as f32
        };

        if let Some(control) = control {
            stats.team_1_possession = control.possession_percentage(1);
            stats.team_2_possession = control.possession_percentage(2);
            stats.ball_possession_changes = control.team_switches();
        }

        stats.pass_matrix = PassMatrix::from_passes(&events.passes, None);

        debug!(
            passes = stats.total_passes,
            interceptions = stats.total_interceptions,
            accuracy = stats.pass_accuracy,
            "statistics aggregated"
        );
        stats
    }
}
