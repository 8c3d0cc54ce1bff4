//! # Possession Events
//!
//! - `possessor` - Per-frame possessor snapshots and jersey color resolution
//! - `trajectory` - Ball path plausibility between two possessions
//! - `detector` - Possession-change state machine (passes, interceptions)

pub mod detector;
pub mod possessor;
pub mod trajectory;

pub use detector::{
    InterceptionEvent, InterceptionReason, PassEvent, PossessionChange, PossessionChangeType,
    PossessionEventDetector, PossessionEvents,
};
pub use possessor::{resolve_jersey_color, PossessorSnapshot};
