//! # Team Classifier
//!
//! Maps each player ID to one of two teams plus a representative jersey
//! color, with no manual labeling.
//!
//! ## Algorithm
//! 1. `initialize`: extract every player's jersey color from a reference
//!    frame and fit the 2-cluster color model over them
//! 2. `classify`: cached players are a pure lookup; otherwise extract the
//!    color, predict the nearest cluster (team = index + 1) and cache it
//!
//! Jersey extraction crops the bbox, keeps the top half (less shorts, legs
//! and grass), clusters its pixels in two, takes the majority label of the
//! four corners as background and returns the other centroid.

use tracing::{debug, info, warn};

use super::cache::{TeamAssignment, TeamCache};
use super::kmeans::{self, ColorFit, ColorModel, ColorPoint, KMeansParams};
use super::{TEAM_ONE, TEAM_TWO};
use crate::config::TeamConfig;
use crate::error::{AnalysisError, Result};
use crate::models::{clamp_color, BBox, PlayerFrame, PlayerId, Rgb, RgbFrame};

#[derive(Debug, Clone)]
enum TeamModel {
    /// `initialize` not called, or called with no players
    Unfit,
    /// All jerseys had the same color; everyone goes to team 1
    Degenerate,
    Fitted(ColorModel),
}

#[derive(Debug, Clone)]
pub struct TeamClassifier {
    config: TeamConfig,
    params: KMeansParams,
    model: TeamModel,
    team_colors: Option<[Rgb; 2]>,
    cache: TeamCache,
}

impl TeamClassifier {
    /// Classifier with a fresh cache.
    pub fn new(config: TeamConfig) -> Self {
        Self::with_cache(config, TeamCache::new())
    }

    /// Classifier owning `cache` for the duration of one run.
    pub fn with_cache(config: TeamConfig, cache: TeamCache) -> Self {
        let params = config.kmeans_params();
        Self {
            config,
            params,
            model: TeamModel::Unfit,
            team_colors: None,
            cache,
        }
    }

    pub fn is_fitted(&self) -> bool {
        !matches!(self.model, TeamModel::Unfit)
    }

    /// Team palette: index 0 is team 1, index 1 is team 2.
    pub fn team_colors(&self) -> Option<[Rgb; 2]> {
        self.team_colors
    }

    pub fn team_color(&self, team: u8) -> Option<Rgb> {
        match team {
            TEAM_ONE | TEAM_TWO => self.team_colors.map(|c| c[(team - 1) as usize]),
            _ => None,
        }
    }

    pub fn cache(&self) -> &TeamCache {
        &self.cache
    }

    pub fn into_cache(self) -> TeamCache {
        self.cache
    }

    /// Fit the team color model on one frame's players. No-op when `players`
    /// is empty; the model then stays unfit.
    pub fn initialize(&mut self, frame: &RgbFrame, players: &PlayerFrame) {
        if players.is_empty() {
            warn!("no players in reference frame, team color model left unfit");
            return;
        }

        let colors: Vec<ColorPoint> = players
            .values()
            .map(|p| to_point(self.extract_jersey_color(frame, p.bbox)))
            .collect();

        match kmeans::fit(&colors, &self.params) {
            ColorFit::Clustered(fit) => {
                let [c1, c2] = *fit.model.centroids();
                self.team_colors = Some([clamp_color(c1), clamp_color(c2)]);
                self.model = TeamModel::Fitted(fit.model);
                info!(
                    players = colors.len(),
                    team1 = ?self.team_colors.map(|c| c[0]),
                    team2 = ?self.team_colors.map(|c| c[1]),
                    "team color model fitted"
                );
            }
            ColorFit::Uniform(c) => {
                let color = clamp_color(c);
                warn!(
                    players = colors.len(),
                    color = ?color,
                    "all jerseys share one color, assigning every player to team 1"
                );
                self.team_colors = Some([color, color]);
                self.model = TeamModel::Degenerate;
            }
            ColorFit::Empty => {}
        }
    }

    /// Team and jersey color for `player_id`. Cached players are returned
    /// as-is; new players are classified from `frame` and cached.
    pub fn classify(
        &mut self,
        frame: &RgbFrame,
        bbox: BBox,
        player_id: PlayerId,
    ) -> Result<TeamAssignment> {
        if let Some(cached) = self.cache.get(player_id) {
            return Ok(cached);
        }

        let model = match &self.model {
            TeamModel::Unfit => return Err(AnalysisError::ModelNotFitted),
            TeamModel::Degenerate => None,
            TeamModel::Fitted(m) => Some(*m),
        };

        let jersey_color = self.extract_jersey_color(frame, bbox);
        let predicted = match model {
            Some(m) => m.predict(to_point(jersey_color)) as u8 + 1,
            None => TEAM_ONE,
        };
        let team = self.override_for(player_id).unwrap_or(predicted);

        let assignment = self.cache.insert_once(player_id, TeamAssignment { team, jersey_color });
        debug!(player_id, team, color = ?jersey_color, "player classified");
        Ok(assignment)
    }

    /// Cache an upstream-provided label for a player the model never saw.
    pub fn adopt(&mut self, player_id: PlayerId, team: u8, jersey_color: Rgb) -> Result<TeamAssignment> {
        if let Some(cached) = self.cache.get(player_id) {
            return Ok(cached);
        }
        if !matches!(team, TEAM_ONE | TEAM_TWO) {
            return Err(AnalysisError::InvalidTeam { player_id, team });
        }
        let team = self.override_for(player_id).unwrap_or(team);
        Ok(self.cache.insert_once(player_id, TeamAssignment { team, jersey_color }))
    }

    fn override_for(&self, player_id: PlayerId) -> Option<u8> {
        self.config.team_overrides.get(&player_id).copied()
    }

    /// Dominant non-background color in the top half of `bbox`.
    pub fn extract_jersey_color(&self, frame: &RgbFrame, bbox: BBox) -> Rgb {
        let top = frame.crop(bbox).top_half();
        let corners = match top.corner_indices() {
            Some(c) => c,
            None => return self.config.degenerate_crop_color,
        };

        let points: Vec<ColorPoint> = top.pixels.iter().map(|p| to_point(*p)).collect();
        match kmeans::fit(&points, &self.params) {
            ColorFit::Clustered(fit) => {
                let background_votes = corners.iter().filter(|&&i| fit.labels[i] == 1).count();
                // Ties go to cluster 0 as background
                let background = if background_votes > corners.len() / 2 { 1 } else { 0 };
                clamp_color(fit.model.centroid(1 - background))
            }
            ColorFit::Uniform(c) => clamp_color(c),
            ColorFit::Empty => self.config.degenerate_crop_color,
        }
    }
}

fn to_point(color: Rgb) -> ColorPoint {
    [color[0] as f32, color[1] as f32, color[2] as f32]
}
