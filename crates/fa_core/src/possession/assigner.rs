//! # Ball Possession Assigner
//!
//! Greedy nearest-player assignment, one frame at a time.
//!
//! ## Algorithm
//! 1. Reject degenerate ball boxes (zero/negative width or height)
//! 2. Ball point = bbox center; player point = bbox bottom-center (feet)
//! 3. Skip ineligible players (known goalkeepers, touchline margins)
//! 4. Closest player strictly inside `max_player_ball_distance` wins;
//!    equal distances keep the lower player ID
//!
//! No smoothing or hysteresis; frames are independent.

use std::collections::BTreeSet;
use std::ops::Range;

use nalgebra::Vector2;

use crate::config::PossessionConfig;
use crate::models::{BBox, PlayerFrame, PlayerId, PlayerRecord, Point, TrackSet};

fn distance(a: Point, b: Point) -> f32 {
    (Vector2::new(a.0, a.1) - Vector2::new(b.0, b.1)).norm()
}

#[derive(Debug, Clone, Default)]
pub struct BallPossessionAssigner {
    config: PossessionConfig,
}

impl BallPossessionAssigner {
    pub fn new(config: PossessionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PossessionConfig {
        &self.config
    }

    /// Replace the known goalkeeper set. An empty list keeps the current set.
    pub fn set_goalkeeper_ids<I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = PlayerId>,
    {
        let ids: BTreeSet<PlayerId> = ids.into_iter().collect();
        if !ids.is_empty() {
            self.config.goalkeeper_ids = ids;
        }
    }

    /// Whether a player may be credited with the ball when goalkeepers are
    /// excluded.
    pub fn is_eligible(&self, player_id: PlayerId, record: &PlayerRecord) -> bool {
        if self.config.goalkeeper_ids.contains(&player_id) {
            return false;
        }
        let (center_x, _) = record.bbox.center();
        let margin = self.config.touchline_margin;
        center_x >= margin && center_x <= self.config.field_width - margin
    }

    /// Nearest eligible player to the ball, if within range.
    pub fn assign(
        &self,
        players: &PlayerFrame,
        ball_bbox: BBox,
        exclude_goalkeepers: bool,
    ) -> Option<PlayerId> {
        if ball_bbox.is_degenerate() {
            return None;
        }
        let ball = ball_bbox.center();

        let mut best: Option<(PlayerId, f32)> = None;
        for (player_id, record) in players {
            if exclude_goalkeepers && !self.is_eligible(*player_id, record) {
                continue;
            }
            let d = distance(record.bbox.foot_position(), ball);
            let limit = best.map_or(self.config.max_player_ball_distance, |(_, d)| d);
            if d < limit {
                best = Some((*player_id, d));
            }
        }
        best.map(|(player_id, _)| player_id)
    }

    /// Assignment for one frame of `tracks`; missing player or ball data
    /// yields `None`.
    pub fn assign_frame(
        &self,
        tracks: &TrackSet,
        frame: usize,
        exclude_goalkeepers: bool,
    ) -> Option<PlayerId> {
        let players = tracks.players.get(frame)?;
        let ball = tracks.ball_at(frame)?;
        self.assign(players, ball.bbox, exclude_goalkeepers)
    }

    /// Independent per-frame assignment over `frames`, in order.
    pub fn assign_batch(
        &self,
        tracks: &TrackSet,
        frames: Range<usize>,
        exclude_goalkeepers: bool,
    ) -> Vec<Option<PlayerId>> {
        frames
            .map(|f| self.assign_frame(tracks, f, exclude_goalkeepers))
            .collect()
    }
}
