use serde::{Deserialize, Serialize};

/// Possession-change state machine thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventConfig {
    /// Possessor changes closer than this many frames are tracker jitter
    pub debounce_frames: usize,
    /// Same-team changes below this jersey similarity count as interceptions
    pub color_similarity_threshold: f32,
    /// Changes shorter than this (pitch units) are dropped from pass/interception lists
    pub min_pass_distance: f32,
    /// Frame gaps up to this are accepted without a trajectory check
    pub short_pass_frames: usize,
    /// Intermediate ball positions sampled between sender and receiver
    pub trajectory_samples: usize,
    /// Fewer samples than this means "not enough evidence", accept
    pub min_trajectory_samples: usize,
    /// Sender→receiver distances below this always validate
    pub min_trajectory_length: f32,
    /// Upper bound of the deviation tolerance ratio
    pub max_tolerance_ratio: f32,
    /// Tolerance ratio at zero distance
    pub base_tolerance_ratio: f32,
    /// Distance that adds 1.0 to the tolerance ratio
    pub tolerance_distance_scale: f32,
}

impl Default for EventConfig {
    fn default() -> Self {
        Self {
            debounce_frames: 3,
            color_similarity_threshold: 0.3,
            min_pass_distance: 5.0,
            short_pass_frames: 5,
            trajectory_samples: 4,
            min_trajectory_samples: 3,
            min_trajectory_length: 1.0,
            max_tolerance_ratio: 0.4,
            base_tolerance_ratio: 0.2,
            tolerance_distance_scale: 100.0,
        }
    }
}

impl EventConfig {
    /// Allowed max deviation from the straight pass line for a given length:
    /// `min(max_ratio, base_ratio + length / scale) * length`
    pub fn trajectory_tolerance(&self, length: f32) -> f32 {
        let ratio = (self.base_tolerance_ratio + length / self.tolerance_distance_scale)
            .min(self.max_tolerance_ratio);
        ratio * length
    }
}
