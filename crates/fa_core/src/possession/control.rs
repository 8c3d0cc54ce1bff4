//! `has_ball` annotation and the per-frame team-ball-control timeline.

use serde::Serialize;
use tracing::{info, warn};

use super::assigner::BallPossessionAssigner;
use crate::error::AnalysisError;
use crate::models::{PlayerId, TrackSet};

/// Which team controls the ball in every frame.
///
/// A frame without a possessor inherits the previous frame's controlling
/// team; frames before the first possessor are `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TeamBallControl {
    pub timeline: Vec<Option<u8>>,
    pub possessors: Vec<Option<PlayerId>>,
}

impl TeamBallControl {
    pub fn frame_count(&self) -> usize {
        self.timeline.len()
    }

    /// Share of frames controlled by `team`, in percent. 0.0 for an empty timeline.
    pub fn possession_percentage(&self, team: u8) -> f32 {
        if self.timeline.is_empty() {
            return 0.0;
        }
        let controlled = self.timeline.iter().filter(|t| **t == Some(team)).count();
        controlled as f32 / self.timeline.len() as f32 * 100.0
    }

    /// Number of frames whose controlling team differs from the previous frame.
    pub fn team_switches(&self) -> usize {
        self.timeline.windows(2).filter(|w| w[0] != w[1]).count()
    }
}

/// Assign the ball in every frame, writing `has_ball` in place.
///
/// Exactly the assigned player is flagged; stale flags from upstream are
/// cleared so no frame ends up with two possessors.
pub fn annotate_possession(
    tracks: &mut TrackSet,
    assigner: &BallPossessionAssigner,
) -> TeamBallControl {
    if tracks.ball.len() != tracks.players.len() {
        let mismatch = AnalysisError::TrackLengthMismatch {
            players: tracks.players.len(),
            ball: tracks.ball.len(),
        };
        warn!(%mismatch, "frames without ball data are treated as no possessor");
    }

    let exclude = assigner.config().exclude_goalkeepers;
    let possessors = assigner.assign_batch(tracks, 0..tracks.frame_count(), exclude);

    let mut timeline = Vec::with_capacity(possessors.len());
    let mut previous: Option<u8> = None;

    for (players, possessor) in tracks.players.iter_mut().zip(&possessors) {
        for (player_id, record) in players.iter_mut() {
            record.has_ball = Some(*player_id) == *possessor;
        }

        let team = possessor
            .and_then(|id| players.get(&id))
            .and_then(|record| record.team);
        let control = team.or(previous);
        timeline.push(control);
        previous = control;
    }

    let control = TeamBallControl {
        timeline,
        possessors,
    };
    info!(
        frames = control.frame_count(),
        assigned = control.possessors.iter().filter(|p| p.is_some()).count(),
        team1_pct = control.possession_percentage(1),
        team2_pct = control.possession_percentage(2),
        "possession annotated"
    );
    control
}
