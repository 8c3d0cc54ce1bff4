//! # Pass Trajectory Validation
//!
//! A change of possession only counts as a pass when the ball plausibly
//! travelled in a straight line from sender to receiver.
//!
//! ## Algorithm
//! 1. Short flights (`<= short_pass_frames`) are accepted without sampling
//! 2. Sample up to `trajectory_samples` ball pitch positions between the
//!    sender's last frame and the receiver's frame
//! 3. Fewer than `min_trajectory_samples` samples, or missing endpoints:
//!    not enough evidence, accept
//! 4. Accept iff the largest sample deviation from the sender→receiver
//!    segment is within `EventConfig::trajectory_tolerance`

use nalgebra::Vector2;

use crate::config::EventConfig;
use crate::models::{Point, TrackSet};

fn vec2(p: Point) -> Vector2<f32> {
    Vector2::new(p.0, p.1)
}

pub fn distance(a: Point, b: Point) -> f32 {
    (vec2(a) - vec2(b)).norm()
}

/// Distance from `point` to the segment `start`-`end`.
pub fn distance_to_segment(point: Point, start: Point, end: Point) -> f32 {
    let (p, a, b) = (vec2(point), vec2(start), vec2(end));
    let ab = b - a;
    let len_sq = ab.norm_squared();
    if len_sq == 0.0 {
        return (p - a).norm();
    }
    let t = ((p - a).dot(&ab) / len_sq).clamp(0.0, 1.0);
    (p - (a + ab * t)).norm()
}

/// Ball pitch positions at evenly spaced frames in `[from, to)`, at most
/// `max_samples` of them. Frames without a transformed ball position are
/// skipped.
pub fn sample_ball_positions(
    tracks: &TrackSet,
    from: usize,
    to: usize,
    max_samples: usize,
) -> Vec<Point> {
    if to <= from || max_samples == 0 {
        return Vec::new();
    }
    let step = ((to - from) / max_samples).max(1);
    (from..to)
        .step_by(step)
        .take(max_samples)
        .filter_map(|f| tracks.ball_pitch_position(f))
        .collect()
}

/// Whether the ball path between two possessions is consistent with a pass.
pub fn validate_trajectory(
    tracks: &TrackSet,
    config: &EventConfig,
    flight_frames: usize,
    sender: (usize, Option<Point>),
    receiver: (usize, Option<Point>),
) -> bool {
    if flight_frames <= config.short_pass_frames {
        return true;
    }

    let samples = sample_ball_positions(tracks, sender.0, receiver.0, config.trajectory_samples);
    if samples.len() < config.min_trajectory_samples {
        return true;
    }

    let (Some(start), Some(end)) = (sender.1, receiver.1) else {
        return true;
    };
    check_path(&samples, start, end, config)
}

/// Max deviation of `samples` from the `start`-`end` segment against the
/// distance-scaled tolerance.
pub fn check_path(samples: &[Point], start: Point, end: Point, config: &EventConfig) -> bool {
    let length = distance(start, end);
    if samples.is_empty() || length < config.min_trajectory_length {
        return true;
    }
    let max_deviation = samples
        .iter()
        .map(|p| distance_to_segment(*p, start, end))
        .fold(0.0_f32, f32::max);
    max_deviation <= config.trajectory_tolerance(length)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BBox, BallFrame, BallRecord, PlayerFrame, BALL_KEY};

    fn ball_track(positions: &[Option<Point>]) -> TrackSet {
        let ball = positions
            .iter()
            .map(|p| {
                let mut frame = BallFrame::new();
                if let Some(p) = p {
                    frame.insert(
                        BALL_KEY,
                        BallRecord::new(BBox::new(0.0, 0.0, 4.0, 4.0)).with_pitch_position(*p),
                    );
                }
                frame
            })
            .collect();
        TrackSet::new(vec![PlayerFrame::new(); positions.len()], ball)
    }

    #[test]
    fn test_distance_to_segment() {
        assert_eq!(distance_to_segment((5.0, 3.0), (0.0, 0.0), (10.0, 0.0)), 3.0);
        // Beyond the end clamps to the endpoint
        assert_eq!(distance_to_segment((13.0, 4.0), (0.0, 0.0), (10.0, 0.0)), 5.0);
        // Zero-length segment
        assert_eq!(distance_to_segment((3.0, 4.0), (0.0, 0.0), (0.0, 0.0)), 5.0);
    }

    #[test]
    fn test_tolerance_scales_with_length() {
        let config = EventConfig::default();
        // 10 units: ratio 0.3
        assert!((config.trajectory_tolerance(10.0) - 3.0).abs() < 1e-5);
        // 50 units: ratio capped at 0.4
        assert!((config.trajectory_tolerance(50.0) - 20.0).abs() < 1e-5);
    }

    #[test]
    fn test_sampling_spacing() {
        let positions: Vec<Option<Point>> = (0..12).map(|i| Some((i as f32, 0.0))).collect();
        let tracks = ball_track(&positions);
        let samples = sample_ball_positions(&tracks, 0, 10, 4);
        assert_eq!(samples, vec![(0.0, 0.0), (2.0, 0.0), (4.0, 0.0), (6.0, 0.0)]);
        assert!(sample_ball_positions(&tracks, 5, 5, 4).is_empty());
    }

    #[test]
    fn test_straight_path_accepted_detour_rejected() {
        let config = EventConfig::default();
        let straight: Vec<Option<Point>> = (0..11).map(|i| Some((i as f32 * 4.0, 1.0))).collect();
        let tracks = ball_track(&straight);
        assert!(validate_trajectory(
            &tracks,
            &config,
            10,
            (0, Some((0.0, 0.0))),
            (10, Some((40.0, 0.0)))
        ));

        let detour: Vec<Option<Point>> = (0..11).map(|i| Some((i as f32 * 4.0, 60.0))).collect();
        let tracks = ball_track(&detour);
        assert!(!validate_trajectory(
            &tracks,
            &config,
            10,
            (0, Some((0.0, 0.0))),
            (10, Some((40.0, 0.0)))
        ));
    }

    #[test]
    fn test_insufficient_evidence_accepts() {
        let config = EventConfig::default();
        let detour: Vec<Option<Point>> = (0..11).map(|i| Some((i as f32 * 4.0, 60.0))).collect();
        let tracks = ball_track(&detour);

        // Short gap
        assert!(validate_trajectory(&tracks, &config, 5, (0, Some((0.0, 0.0))), (10, Some((40.0, 0.0)))));
        // Missing receiver position
        assert!(validate_trajectory(&tracks, &config, 10, (0, Some((0.0, 0.0))), (10, None)));

        // Ball mostly undetected
        let sparse = ball_track(&[None, None, None, None, None, Some((20.0, 60.0)), None, None, None, None, None]);
        assert!(validate_trajectory(&sparse, &config, 10, (0, Some((0.0, 0.0))), (10, Some((40.0, 0.0)))));
    }
}
