//! # Statistics
//!
//! - `aggregator` - Counts and ratios over detected events
//! - `pass_matrix` - Sender × receiver pass counts
//! - `pass_network` - Per-team pass graphs over average positions

pub mod aggregator;
pub mod pass_matrix;
pub mod pass_network;

pub use aggregator::{MatchStatistics, StatisticsAggregator};
pub use pass_matrix::{PassMatrix, PassPair};
pub use pass_network::{NetworkStats, PassNetworkAnalyzer, PassNetworkReport, PlayerNode, TeamNetwork};
