//! # Analysis Module
//!
//! Event detection and match-level aggregation over annotated tracks.
//!
//! ## Submodules
//! - `events` - Possession changes, passes, interceptions
//! - `stats` - Statistics, pass matrix, pass network

pub mod events;
pub mod stats;
