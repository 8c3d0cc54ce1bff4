//! # Models
//!
//! Per-frame track data shared by every stage of the engine.
//!
//! - `tracks` - Player/ball records and the frame-indexed `TrackSet`
//! - `frame` - RGB pixel buffers and the `FrameSource` seam
//! - `color` - Jersey color helpers (similarity, clamping)

pub mod color;
pub mod frame;
pub mod tracks;

pub use color::{
    clamp_color, color_distance, color_similarity, fallback_jersey_color, Rgb, MAX_COLOR_DISTANCE,
};
pub use frame::{FrameSource, NoFrames, PixelRegion, RgbFrame, SingleFrame};
pub use tracks::{
    BBox, BallFrame, BallRecord, PlayerFrame, PlayerId, PlayerRecord, Point, TrackSet, BALL_KEY,
};
