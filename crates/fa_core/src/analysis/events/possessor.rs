//! Possessor snapshots: who holds the ball in a frame, with the data the
//! event detector compares across a possession change.

use serde::{Deserialize, Serialize};

use crate::models::{fallback_jersey_color, PlayerFrame, PlayerId, PlayerRecord, Point, Rgb};

/// The player in possession at one frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PossessorSnapshot {
    pub player_id: PlayerId,
    pub frame: usize,
    pub team: u8,
    /// Pitch-space position, if the view transform produced one
    pub position: Option<Point>,
    pub jersey_color: Rgb,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_color: Option<Rgb>,
}

/// Best available color for a player: jersey, then team palette, then the
/// parity default.
pub fn resolve_jersey_color(player_id: PlayerId, record: &PlayerRecord) -> Rgb {
    record
        .jersey_color
        .or(record.team_color)
        .unwrap_or_else(|| fallback_jersey_color(player_id))
}

impl PossessorSnapshot {
    /// First player flagged `has_ball` in `players` (lowest ID).
    ///
    /// A possessor without a team carries no usable signal and yields `None`.
    pub fn from_frame(frame: usize, players: &PlayerFrame) -> Option<Self> {
        let (player_id, record) = players.iter().find(|(_, p)| p.has_ball)?;
        let team = record.team?;
        Some(Self {
            player_id: *player_id,
            frame,
            team,
            position: record.position_transformed,
            jersey_color: resolve_jersey_color(*player_id, record),
            team_color: record.team_color,
        })
    }
}
