//! # Possession Module
//!
//! - `assigner` - Stateless per-frame ball → player assignment
//! - `control` - `has_ball` annotation and team-ball-control timeline

pub mod assigner;
pub mod control;

pub use assigner::BallPossessionAssigner;
pub use control::{annotate_possession, TeamBallControl};
