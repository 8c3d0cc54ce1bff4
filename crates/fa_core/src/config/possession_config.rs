use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::models::PlayerId;

/// Ball-to-player assignment settings (image-space pixels)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PossessionConfig {
    /// A player's feet must be closer than this to the ball center
    pub max_player_ball_distance: f32,
    /// Known goalkeeper IDs, skipped when goalkeepers are excluded
    pub goalkeeper_ids: BTreeSet<PlayerId>,
    /// Image width the touchline margin is measured against
    pub field_width: f32,
    /// Players whose bbox center is within this margin of either side are skipped
    pub touchline_margin: f32,
    /// Apply the goalkeeper/touchline eligibility filter
    pub exclude_goalkeepers: bool,
}

impl Default for PossessionConfig {
    fn default() -> Self {
        Self {
            max_player_ball_distance: 70.0,
            goalkeeper_ids: BTreeSet::new(),
            field_width: 1920.0,
            touchline_margin: 150.0,
            exclude_goalkeepers: true,
        }
    }
}
