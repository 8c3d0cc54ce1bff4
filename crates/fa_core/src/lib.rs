//! # fa_core - Possession & Event Analysis Engine
//!
//! Derives match-level football analytics from per-frame object tracking
//! data produced by an upstream detector/tracker.
//!
//! ## Features
//! - Unsupervised team classification from jersey colors (2-cluster model)
//! - Per-frame ball-to-player assignment
//! - Possession-change state machine classifying passes and interceptions
//! - Statistics and pass-network aggregation
//!
//! The engine is a single-pass batch computation over fully materialized
//! tracks. It performs no I/O; rendering and orchestration live elsewhere.

// Thresholds and geometry helpers take many scalar parameters
#![allow(clippy::too_many_arguments)]
// Loop style - index loops mirror frame indices
#![allow(clippy::needless_range_loop)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod possession;
pub mod team;

pub use analysis::events::{
    InterceptionEvent, InterceptionReason, PassEvent, PossessionChange, PossessionChangeType,
    PossessionEventDetector, PossessionEvents, PossessorSnapshot,
};
pub use analysis::stats::{
    MatchStatistics, PassMatrix, PassNetworkAnalyzer, PassNetworkReport, StatisticsAggregator,
};
pub use config::AnalysisConfig;
pub use error::{AnalysisError, Result};
pub use models::{BBox, BallRecord, FrameSource, PlayerId, PlayerRecord, Rgb, RgbFrame, TrackSet};
pub use pipeline::{AnalysisReport, MatchAnalyzer};
pub use possession::{BallPossessionAssigner, TeamBallControl};
pub use team::{TeamAssignment, TeamCache, TeamClassifier};
