use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{PlayerId, Rgb};
use crate::team::kmeans::KMeansParams;

/// Team classification settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamConfig {
    /// Seed of the clustering RNG
    pub clustering_seed: u64,
    /// Number of k-means restarts; the lowest-inertia run wins
    pub clustering_restarts: usize,
    /// Lloyd iteration cap per restart
    pub clustering_max_iterations: usize,
    /// Hard team assignments that bypass clustering (player_id → team)
    pub team_overrides: BTreeMap<PlayerId, u8>,
    /// Color returned for empty crops
    pub degenerate_crop_color: Rgb,
}

impl Default for TeamConfig {
    fn default() -> Self {
        Self {
            clustering_seed: 0,
            clustering_restarts: 10,
            clustering_max_iterations: 300,
            team_overrides: BTreeMap::new(),
            degenerate_crop_color: [0, 0, 0],
        }
    }
}

impl TeamConfig {
    pub fn kmeans_params(&self) -> KMeansParams {
        KMeansParams {
            seed: self.clustering_seed,
            restarts: self.clustering_restarts,
            max_iterations: self.clustering_max_iterations,
        }
    }
}
