//! # Track Data
//!
//! Frame-indexed player and ball records as produced by the upstream
//! tracker, plus the annotations this engine writes into them
//! (`team`, `jersey_color`, `team_color`, `has_ball`).
//!
//! Players within a frame are kept in a `BTreeMap` so iteration is ordered
//! by player ID.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::color::Rgb;

/// Stable tracker-assigned player ID.
pub type PlayerId = u32;

/// 2D point, image-space pixels or pitch-space units.
pub type Point = (f32, f32);

/// Key of the single ball entry in each ball frame.
pub const BALL_KEY: u32 = 1;

/// Axis-aligned bounding box `(x1, y1, x2, y2)` in image pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f32; 4]", into = "[f32; 4]")]
pub struct BBox {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl BBox {
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn width(&self) -> f32 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> f32 {
        self.y2 - self.y1
    }

    pub fn center(&self) -> Point {
        ((self.x1 + self.x2) / 2.0, (self.y1 + self.y2) / 2.0)
    }

    /// Bottom-center of the box (where a player's feet are).
    pub fn foot_position(&self) -> Point {
        ((self.x1 + self.x2) / 2.0, self.y2)
    }

    /// Zero or negative width/height.
    pub fn is_degenerate(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }
}

impl From<[f32; 4]> for BBox {
    fn from(v: [f32; 4]) -> Self {
        Self::new(v[0], v[1], v[2], v[3])
    }
}

impl From<BBox> for [f32; 4] {
    fn from(b: BBox) -> Self {
        [b.x1, b.y1, b.x2, b.y2]
    }
}

/// One player's detection in one frame.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub bbox: BBox,
    /// Image-space position
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Point>,
    /// Pitch-space position after perspective correction
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position_transformed: Option<Point>,
    /// Team 1 or 2, absent until classified
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jersey_color: Option<Rgb>,
    /// Palette color of the player's team
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_color: Option<Rgb>,
    #[serde(default)]
    pub has_ball: bool,
}

impl PlayerRecord {
    pub fn new(bbox: BBox) -> Self {
        Self {
            bbox,
            ..Default::default()
        }
    }

    pub fn with_pitch_position(mut self, pos: Point) -> Self {
        self.position_transformed = Some(pos);
        self
    }

    pub fn with_team(mut self, team: u8, jersey_color: Rgb) -> Self {
        self.team = Some(team);
        self.jersey_color = Some(jersey_color);
        self
    }
}

/// The ball's detection in one frame.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BallRecord {
    pub bbox: BBox,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position_transformed: Option<Point>,
}

impl BallRecord {
    pub fn new(bbox: BBox) -> Self {
        Self {
            bbox,
            position_transformed: None,
        }
    }

    pub fn with_pitch_position(mut self, pos: Point) -> Self {
        self.position_transformed = Some(pos);
        self
    }
}

pub type PlayerFrame = BTreeMap<PlayerId, PlayerRecord>;

/// Single-entry map under `BALL_KEY`; empty when the ball was not detected.
pub type BallFrame = BTreeMap<u32, BallRecord>;

/// Player and ball tracks for a whole clip, indexed by frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackSet {
    pub players: Vec<PlayerFrame>,
    #[serde(default)]
    pub ball: Vec<BallFrame>,
}

impl TrackSet {
    pub fn new(players: Vec<PlayerFrame>, ball: Vec<BallFrame>) -> Self {
        Self { players, ball }
    }

    /// Number of player frames.
    pub fn frame_count(&self) -> usize {
        self.players.len()
    }

    pub fn player(&self, frame: usize, player_id: PlayerId) -> Option<&PlayerRecord> {
        self.players.get(frame).and_then(|f| f.get(&player_id))
    }

    pub fn ball_at(&self, frame: usize) -> Option<&BallRecord> {
        self.ball.get(frame).and_then(|f| f.get(&BALL_KEY))
    }

    /// Ball pitch-space position at `frame`, if detected and transformed.
    pub fn ball_pitch_position(&self, frame: usize) -> Option<Point> {
        self.ball_at(frame).and_then(|b| b.position_transformed)
    }

    /// Distinct player IDs over all frames.
    pub fn player_ids(&self) -> BTreeSet<PlayerId> {
        self.players
            .iter()
            .flat_map(|frame| frame.keys().copied())
            .collect()
    }

    pub fn has_ball_detections(&self) -> bool {
        self.ball.iter().any(|f| f.contains_key(&BALL_KEY))
    }

    /// Number of players flagged `has_ball` in each frame.
    pub fn possessor_counts(&self) -> Vec<usize> {
        self.players
            .iter()
            .map(|frame| frame.values().filter(|p| p.has_ball).count())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bbox_geometry() {
        let b = BBox::new(100.0, 200.0, 140.0, 300.0);
        assert_eq!(b.width(), 40.0);
        assert_eq!(b.height(), 100.0);
        assert_eq!(b.center(), (120.0, 250.0));
        assert_eq!(b.foot_position(), (120.0, 300.0));
        assert!(!b.is_degenerate());
        assert!(BBox::new(10.0, 10.0, 10.0, 20.0).is_degenerate());
        assert!(BBox::new(10.0, 30.0, 20.0, 20.0).is_degenerate());
    }

    #[test]
    fn test_track_json_shape() {
        let json = r#"{
            "players": [
                {"7": {"bbox": [0, 0, 10, 20], "position_transformed": [3.5, 4.0]}}
            ],
            "ball": [
                {"1": {"bbox": [4, 18, 8, 22]}}
            ]
        }"#;
        let tracks: TrackSet = serde_json::from_str(json).unwrap();
        assert_eq!(tracks.frame_count(), 1);

        let p = tracks.player(0, 7).unwrap();
        assert_eq!(p.bbox, BBox::new(0.0, 0.0, 10.0, 20.0));
        assert_eq!(p.position_transformed, Some((3.5, 4.0)));
        assert_eq!(p.team, None);
        assert!(!p.has_ball);

        assert_eq!(tracks.ball_at(0).unwrap().bbox.center(), (6.0, 20.0));
        assert!(tracks.ball_at(1).is_none());
        assert!(tracks.has_ball_detections());
    }

    #[test]
    fn test_bbox_serializes_as_array() {
        let json = serde_json::to_string(&BBox::new(1.0, 2.0, 3.0, 4.0)).unwrap();
        assert_eq!(json, "[1.0,2.0,3.0,4.0]");
    }

    #[test]
    fn test_player_ids_are_distinct_and_sorted() {
        let mut f0 = PlayerFrame::new();
        f0.insert(9, PlayerRecord::default());
        f0.insert(3, PlayerRecord::default());
        let mut f1 = PlayerFrame::new();
        f1.insert(3, PlayerRecord::default());
        f1.insert(5, PlayerRecord::default());

        let tracks = TrackSet::new(vec![f0, f1], vec![]);
        let ids: Vec<_> = tracks.player_ids().into_iter().collect();
        assert_eq!(ids, vec![3, 5, 9]);
        assert!(!tracks.has_ball_detections());
    }
}
