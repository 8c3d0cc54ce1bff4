//! # Jersey Colors
//!
//! Colors are 3-channel tuples with 0-255 per channel. Similarity is the
//! normalized complement of the Euclidean distance in RGB space:
//!
//! `similarity = 1 - distance / sqrt(3 * 255^2)`

use nalgebra::Vector3;

/// 3-channel color, 0-255 per channel.
pub type Rgb = [u8; 3];

/// Largest possible distance between two colors: sqrt(3 * 255^2).
pub const MAX_COLOR_DISTANCE: f32 = 441.672_96;

fn to_vector(color: Rgb) -> Vector3<f32> {
    Vector3::new(color[0] as f32, color[1] as f32, color[2] as f32)
}

/// Euclidean distance between two colors.
pub fn color_distance(a: Rgb, b: Rgb) -> f32 {
    (to_vector(a) - to_vector(b)).norm()
}

/// Similarity in [0.0, 1.0]; identical colors yield exactly 1.0.
pub fn color_similarity(a: Rgb, b: Rgb) -> f32 {
    if a == b {
        return 1.0;
    }
    (1.0 - color_distance(a, b) / MAX_COLOR_DISTANCE).clamp(0.0, 1.0)
}

/// Deterministic color for a player with no color information at all:
/// red for even IDs, blue for odd IDs.
pub fn fallback_jersey_color(player_id: u32) -> Rgb {
    if player_id % 2 == 0 {
        [255, 0, 0]
    } else {
        [0, 0, 255]
    }
}

/// Truncate a float centroid into a valid color.
pub fn clamp_color(centroid: [f32; 3]) -> Rgb {
    centroid.map(|c| {
        if c.is_nan() {
            0
        } else {
            c.clamp(0.0, 255.0) as u8
        }
    })
}
