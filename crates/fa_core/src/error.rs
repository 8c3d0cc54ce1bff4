use thiserror::Error;

use crate::models::PlayerId;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Team color model has not been fitted")]
    ModelNotFitted,

    #[error("Invalid team {team} for player {player_id}")]
    InvalidTeam { player_id: PlayerId, team: u8 },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid frame buffer: expected {expected} bytes, found {found}")]
    InvalidFrame { expected: usize, found: usize },

    #[error("Track length mismatch: {players} player frames, {ball} ball frames")]
    TrackLengthMismatch { players: usize, ball: usize },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl AnalysisError {
    pub fn is_recoverable(&self) -> bool {
        match self {
            AnalysisError::ModelNotFitted => true, // Can fit from another reference frame
            AnalysisError::TrackLengthMismatch { .. } => true,
            AnalysisError::InvalidTeam { .. } => false,
            AnalysisError::InvalidFrame { .. } => false,
            AnalysisError::InvalidConfig(_) => false,
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
