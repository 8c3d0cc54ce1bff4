//! # Team Module
//!
//! Unsupervised team identity from jersey appearance.
//!
//! - `kmeans` - Deterministic 2-cluster color model
//! - `cache` - Owned per-run player → team/color cache
//! - `classifier` - `TeamClassifier` (reference fit + cached per-player lookup)
//! - `annotate` - Team annotation pass over a whole `TrackSet`

pub mod annotate;
pub mod cache;
pub mod classifier;
pub mod kmeans;

pub use annotate::{annotate_teams, TeamAnnotationSummary};
pub use cache::{TeamAssignment, TeamCache};
pub use classifier::TeamClassifier;

pub const TEAM_ONE: u8 = 1;
pub const TEAM_TWO: u8 = 2;
