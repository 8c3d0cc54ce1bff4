//! # Possession Event Detector
//!
//! Single forward pass over frames turning the possessor stream into
//! possession changes, passes and interceptions.
//!
//! ## State machine
//! - `Idle` - nobody has held the ball yet
//! - `Holding` - one player in possession since frame `first.frame`
//! - `Contested` - a different player took over after the holder's
//!   possession lasted `debounce_frames`; confirmed once the newcomer's own
//!   sightings span `debounce_frames`, discarded as jitter if the holder
//!   comes back first
//!
//! Frames without a possessor leave the state untouched. A newcomer still
//! contesting at the end of the stream is confirmed.
//!
//! ## Classification of a confirmed change
//! 1. Different teams: interception (`team_change`)
//! 2. Same team, jersey similarity below the cutoff: interception (`color_change`)
//! 3. Same team, implausible ball path between the sender's last frame and
//!    the receiver's first frame: interception (`implausible_trajectory`)
//! 4. Otherwise: pass
//!
//! Every confirmed change is recorded; passes and interceptions shorter
//! than `min_pass_distance` are dropped.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::possessor::PossessorSnapshot;
use super::trajectory::{distance, validate_trajectory};
use crate::config::EventConfig;
use crate::models::{color_similarity, PlayerId, Rgb, TrackSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PossessionChangeType {
    SameTeamPass,
    Interception,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterceptionReason {
    /// Receiver plays for the other team
    TeamChange,
    /// Same nominal team but visually different jerseys
    ColorChange,
    /// Same team, but the ball could not have travelled sender → receiver
    ImplausibleTrajectory,
}

impl InterceptionReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TeamChange => "team_change",
            Self::ColorChange => "color_change",
            Self::ImplausibleTrajectory => "implausible_trajectory",
        }
    }
}

/// A confirmed change of possessor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PossessionChange {
    pub from_player: PlayerId,
    pub to_player: PlayerId,
    pub from_team: u8,
    pub to_team: u8,
    pub from_jersey_color: Rgb,
    pub to_jersey_color: Rgb,
    /// Frame the receiver was first seen with the ball
    pub frame: usize,
    /// Frames since the sender's possession began
    pub duration: usize,
    pub change_type: PossessionChangeType,
    pub color_similarity: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PassEvent {
    pub from_player: PlayerId,
    pub to_player: PlayerId,
    /// Sender's last frame with the ball
    pub start_frame: usize,
    /// Receiver's first frame with the ball
    pub end_frame: usize,
    pub team: u8,
    pub team_color: Option<Rgb>,
    pub player_color: Rgb,
    pub receiver_color: Rgb,
    /// Pitch-space distance, when both positions are known
    pub distance: Option<f32>,
    pub color_similarity: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterceptionEvent {
    pub from_player: PlayerId,
    pub to_player: PlayerId,
    pub start_frame: usize,
    pub end_frame: usize,
    pub from_team: u8,
    pub to_team: u8,
    /// Receiving team's palette color
    pub team_color: Option<Rgb>,
    pub player_color: Rgb,
    pub receiver_color: Rgb,
    pub distance: Option<f32>,
    pub color_similarity: f32,
    pub interception_reason: InterceptionReason,
}

/// Detector output, each list ordered by frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PossessionEvents {
    pub passes: Vec<PassEvent>,
    pub interceptions: Vec<InterceptionEvent>,
    pub possession_changes: Vec<PossessionChange>,
}

impl PossessionEvents {
    /// Changes that produced neither a pass nor an interception
    /// (below the minimum distance).
    pub fn filtered_changes(&self) -> usize {
        self.possession_changes
            .len()
            .saturating_sub(self.passes.len() + self.interceptions.len())
    }

    pub fn is_empty(&self) -> bool {
        self.possession_changes.is_empty()
    }
}

/// One uninterrupted possession: first and latest sighting.
#[derive(Debug, Clone, Copy)]
struct Holding {
    first: PossessorSnapshot,
    last: PossessorSnapshot,
}

impl Holding {
    fn start(snapshot: PossessorSnapshot) -> Self {
        Self {
            first: snapshot,
            last: snapshot,
        }
    }

    /// Frames from first to latest sighting, both included.
    fn span(&self) -> usize {
        self.last.frame - self.first.frame + 1
    }
}

#[derive(Debug, Clone, Copy)]
enum State {
    Idle,
    Holding(Holding),
    Contested { holder: Holding, candidate: Holding },
}

#[derive(Debug, Clone, Default)]
pub struct PossessionEventDetector {
    config: EventConfig,
}

impl PossessionEventDetector {
    pub fn new(config: EventConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EventConfig {
        &self.config
    }

    /// Run the state machine over every frame of `tracks`.
    ///
    /// Reads `has_ball`, `team`, colors and pitch positions; expects the
    /// track set to be annotated already.
    pub fn detect(&self, tracks: &TrackSet) -> PossessionEvents {
        let mut events = PossessionEvents::default();
        let mut state = State::Idle;

        for (frame, players) in tracks.players.iter().enumerate() {
            let Some(current) = PossessorSnapshot::from_frame(frame, players) else {
                continue;
            };
            state = self.step(tracks, state, current, &mut events);
        }

        if let State::Contested { holder, candidate } = state {
            self.confirm(tracks, &holder, &candidate.first, &mut events);
        }

        info!(
            passes = events.passes.len(),
            interceptions = events.interceptions.len(),
            changes = events.possession_changes.len(),
            "possession events detected"
        );
        events
    }

    fn step(
        &self,
        tracks: &TrackSet,
        state: State,
        current: PossessorSnapshot,
        events: &mut PossessionEvents,
    ) -> State {
        match state {
            State::Idle => State::Holding(Holding::start(current)),
            State::Holding(holder) => self.challenge(tracks, holder, current, events),
            State::Contested {
                holder,
                mut candidate,
            } => {
                if current.player_id == candidate.first.player_id {
                    candidate.last = current;
                    self.settle(tracks, holder, candidate, events)
                } else if current.player_id == holder.first.player_id {
                    debug!(
                        frame = current.frame,
                        player_id = candidate.first.player_id,
                        "possession flicker discarded"
                    );
                    self.challenge(tracks, holder, current, events)
                } else {
                    // A third player: the candidate was jitter, judge the newcomer
                    // against the holder
                    self.challenge(tracks, holder, current, events)
                }
            }
        }
    }

    /// `current` against an established holder.
    fn challenge(
        &self,
        tracks: &TrackSet,
        mut holder: Holding,
        current: PossessorSnapshot,
        events: &mut PossessionEvents,
    ) -> State {
        if current.player_id == holder.first.player_id {
            holder.last = current;
            return State::Holding(holder);
        }
        let frame_gap = current.frame - holder.first.frame;
        if frame_gap < self.config.debounce_frames {
            debug!(
                frame = current.frame,
                frame_gap,
                player_id = current.player_id,
                "possessor change within debounce window"
            );
            return State::Holding(holder);
        }
        self.settle(tracks, holder, Holding::start(current), events)
    }

    /// Confirm `candidate` once its own sightings span the debounce window.
    fn settle(
        &self,
        tracks: &TrackSet,
        holder: Holding,
        candidate: Holding,
        events: &mut PossessionEvents,
    ) -> State {
        if candidate.span() >= self.config.debounce_frames {
            self.confirm(tracks, &holder, &candidate.first, events);
            State::Holding(candidate)
        } else {
            State::Contested { holder, candidate }
        }
    }

    /// Record a confirmed change and derive its pass or interception.
    fn confirm(
        &self,
        tracks: &TrackSet,
        holder: &Holding,
        receiver: &PossessorSnapshot,
        events: &mut PossessionEvents,
    ) {
        let sender = &holder.last;
        let frame_gap = receiver.frame - holder.first.frame;
        let similarity = color_similarity(sender.jersey_color, receiver.jersey_color);

        let reason = if sender.team != receiver.team {
            Some(InterceptionReason::TeamChange)
        } else if similarity < self.config.color_similarity_threshold {
            Some(InterceptionReason::ColorChange)
        } else {
            None
        };

        events.possession_changes.push(PossessionChange {
            from_player: sender.player_id,
            to_player: receiver.player_id,
            from_team: sender.team,
            to_team: receiver.team,
            from_jersey_color: sender.jersey_color,
            to_jersey_color: receiver.jersey_color,
            frame: receiver.frame,
            duration: frame_gap,
            change_type: if reason.is_some() {
                PossessionChangeType::Interception
            } else {
                PossessionChangeType::SameTeamPass
            },
            color_similarity: similarity,
        });

        let pass_distance = match (sender.position, receiver.position) {
            (Some(a), Some(b)) => Some(distance(a, b)),
            _ => None,
        };
        if pass_distance.is_some_and(|d| d < self.config.min_pass_distance) {
            debug!(
                from = sender.player_id,
                to = receiver.player_id,
                frame = receiver.frame,
                "change below minimum pass distance"
            );
            return;
        }

        let plausible = validate_trajectory(
            tracks,
            &self.config,
            receiver.frame - sender.frame,
            (sender.frame, sender.position),
            (receiver.frame, receiver.position),
        );

        let reason = match reason {
            None if plausible => {
                debug!(
                    from = sender.player_id,
                    to = receiver.player_id,
                    frame = receiver.frame,
                    team = receiver.team,
                    "pass"
                );
                events.passes.push(PassEvent {
                    from_player: sender.player_id,
                    to_player: receiver.player_id,
                    start_frame: sender.frame,
                    end_frame: receiver.frame,
                    team: receiver.team,
                    team_color: receiver.team_color,
                    player_color: sender.jersey_color,
                    receiver_color: receiver.jersey_color,
                    distance: pass_distance,
                    color_similarity: similarity,
                });
                return;
            }
            None => InterceptionReason::ImplausibleTrajectory,
            Some(reason) => reason,
        };

        debug!(
            from = sender.player_id,
            to = receiver.player_id,
            frame = receiver.frame,
            reason = reason.as_str(),
            "interception"
        );
        events.interceptions.push(InterceptionEvent {
            from_player: sender.player_id,
            to_player: receiver.player_id,
            start_frame: sender.frame,
            end_frame: receiver.frame,
            from_team: sender.team,
            to_team: receiver.team,
            team_color: receiver.team_color,
            player_color: sender.jersey_color,
            receiver_color: receiver.jersey_color,
            distance: pass_distance,
            color_similarity: similarity,
            interception_reason: reason,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        BBox, BallFrame, BallRecord, PlayerFrame, PlayerRecord, Point, BALL_KEY,
    };

    const RED: Rgb = [220, 30, 30];
    const DARK_RED: Rgb = [190, 20, 25];
    const BLUE: Rgb = [20, 30, 220];
    const CYAN: Rgb = [20, 230, 230];

    /// Possessor for one frame: (player, team, jersey, pitch position)
    type Holder = (PlayerId, u8, Rgb, Option<Point>);

    fn record(team: u8, color: Rgb, pos: Option<Point>, has_ball: bool) -> PlayerRecord {
        PlayerRecord {
            bbox: BBox::new(0.0, 0.0, 10.0, 20.0),
            position_transformed: pos,
            team: Some(team),
            jersey_color: Some(color),
            has_ball,
            ..Default::default()
        }
    }

    /// One frame per entry; every listed holder is the only `has_ball` player.
    fn tracks(seq: &[Option<Holder>]) -> TrackSet {
        let players = seq
            .iter()
            .map(|entry| {
                let mut frame = PlayerFrame::new();
                // A bystander who never has the ball
                frame.insert(99, record(1, RED, None, false));
                if let Some((id, team, color, pos)) = entry {
                    frame.insert(*id, record(*team, *color, *pos, true));
                }
                frame
            })
            .collect();
        TrackSet::new(players, vec![])
    }

    fn with_ball_path(mut tracks: TrackSet, path: impl Fn(usize) -> Point) -> TrackSet {
        tracks.ball = (0..tracks.frame_count())
            .map(|f| {
                let mut frame = BallFrame::new();
                frame.insert(
                    BALL_KEY,
                    BallRecord::new(BBox::new(0.0, 0.0, 4.0, 4.0)).with_pitch_position(path(f)),
                );
                frame
            })
            .collect();
        tracks
    }

    fn detector() -> PossessionEventDetector {
        PossessionEventDetector::new(EventConfig::default())
    }

    fn p(id: PlayerId, team: u8, color: Rgb) -> Option<Holder> {
        Some((id, team, color, None))
    }

    #[test]
    fn test_simple_same_team_pass() {
        let t = tracks(&[p(1, 1, RED), p(1, 1, RED), p(1, 1, RED), p(2, 1, DARK_RED), p(2, 1, DARK_RED)]);
        let events = detector().detect(&t);

        assert_eq!(events.passes.len(), 1);
        assert!(events.interceptions.is_empty());
        assert_eq!(events.possession_changes.len(), 1);

        let pass = &events.passes[0];
        assert_eq!((pass.from_player, pass.to_player), (1, 2));
        assert_eq!(pass.end_frame, 3);
        assert_eq!(pass.start_frame, 2);
        assert_eq!(pass.distance, None);

        let change = &events.possession_changes[0];
        assert_eq!(change.frame, 3);
        assert_eq!(change.duration, 3);
        assert_eq!(change.change_type, PossessionChangeType::SameTeamPass);
        assert!(change.color_similarity > 0.9);
    }

    #[test]
    fn test_single_frame_flicker_is_debounced() {
        let t = tracks(&[p(1, 1, RED), p(1, 1, RED), p(3, 2, BLUE), p(1, 1, RED), p(1, 1, RED)]);
        let events = detector().detect(&t);
        assert!(events.is_empty());
        assert!(events.passes.is_empty());
        assert!(events.interceptions.is_empty());
    }

    #[test]
    fn test_flicker_after_long_possession_is_debounced() {
        let mut seq = vec![p(1, 1, RED); 10];
        seq.push(p(3, 2, BLUE));
        seq.push(p(3, 2, BLUE));
        seq.extend(vec![p(1, 1, RED); 6]);
        let events = detector().detect(&tracks(&seq));
        assert!(events.is_empty());
    }

    #[test]
    fn test_team_change_wins_over_trajectory() {
        let mut seq = vec![Some((1, 1, RED, Some((0.0, 0.0)))); 10];
        seq.extend(vec![Some((5, 2, BLUE, Some((40.0, 0.0)))); 5]);
        // Ball wanders far off the sender → receiver line
        let t = with_ball_path(tracks(&seq), |f| (f as f32 * 3.0, 80.0));
        let events = detector().detect(&t);

        assert!(events.passes.is_empty());
        assert_eq!(events.interceptions.len(), 1);
        let interception = &events.interceptions[0];
        assert_eq!(interception.interception_reason, InterceptionReason::TeamChange);
        assert_eq!((interception.from_team, interception.to_team), (1, 2));
        assert_eq!(interception.end_frame, 10);
        assert_eq!(interception.distance, Some(40.0));
        assert_eq!(
            events.possession_changes[0].change_type,
            PossessionChangeType::Interception
        );
    }

    #[test]
    fn test_same_team_color_change_is_interception() {
        let mut seq = vec![p(1, 1, RED); 4];
        seq.extend(vec![p(2, 1, CYAN); 4]);
        let events = detector().detect(&tracks(&seq));

        assert!(events.passes.is_empty());
        assert_eq!(events.interceptions.len(), 1);
        assert_eq!(
            events.interceptions[0].interception_reason,
            InterceptionReason::ColorChange
        );
        assert!(events.possession_changes[0].color_similarity < 0.3);
    }

    #[test]
    fn test_implausible_path_turns_pass_into_interception() {
        // Ball loose for six frames between the two possessions
        let mut seq = vec![Some((1, 1, RED, Some((0.0, 0.0)))); 4];
        seq.extend(vec![None; 6]);
        seq.extend(vec![Some((2, 1, DARK_RED, Some((40.0, 0.0)))); 4]);
        let t = with_ball_path(tracks(&seq), |f| (f as f32 * 3.0, 80.0));
        let events = detector().detect(&t);

        assert!(events.passes.is_empty());
        assert_eq!(
            events.interceptions[0].interception_reason,
            InterceptionReason::ImplausibleTrajectory
        );
        // Still a same-team change by jersey
        assert_eq!(
            events.possession_changes[0].change_type,
            PossessionChangeType::SameTeamPass
        );

        // Straight ball path: a pass
        let t = with_ball_path(tracks(&seq), |f| (f as f32 * 3.0, 0.5));
        let events = detector().detect(&t);
        assert_eq!(events.passes.len(), 1);
    }

    #[test]
    fn test_minimum_distance_filter_and_partition() {
        let seq = vec![
            Some((1, 1, RED, Some((10.0, 10.0)))),
            Some((1, 1, RED, Some((10.0, 10.0)))),
            Some((1, 1, RED, Some((10.0, 10.0)))),
            // Two units away: recorded as a change only
            Some((2, 1, RED, Some((12.0, 10.0)))),
            Some((2, 1, RED, Some((12.0, 10.0)))),
            Some((2, 1, RED, Some((12.0, 10.0)))),
            Some((3, 1, RED, Some((30.0, 10.0)))),
            Some((3, 1, RED, Some((30.0, 10.0)))),
        ];
        let events = detector().detect(&tracks(&seq));

        assert_eq!(events.possession_changes.len(), 2);
        assert_eq!(events.passes.len(), 1);
        assert_eq!(events.passes[0].from_player, 2);
        assert_eq!(events.filtered_changes(), 1);
        assert_eq!(
            events.passes.len() + events.interceptions.len(),
            events.possession_changes.len() - events.filtered_changes()
        );
    }

    #[test]
    fn test_gaps_do_not_reset_last_possession() {
        let seq = vec![p(1, 1, RED), None, None, None, p(2, 1, RED), None, p(2, 1, RED)];
        let events = detector().detect(&tracks(&seq));
        assert_eq!(events.passes.len(), 1);
        assert_eq!(events.passes[0].start_frame, 0);
        assert_eq!(events.passes[0].end_frame, 4);
        assert_eq!(events.possession_changes[0].duration, 4);
    }

    #[test]
    fn test_third_player_replaces_jittery_candidate() {
        let seq = vec![
            p(1, 1, RED),
            p(1, 1, RED),
            p(1, 1, RED),
            p(2, 1, RED), // candidate, displaced at once
            p(4, 1, RED),
            p(4, 1, RED),
            p(4, 1, RED),
            p(4, 1, RED),
        ];
        let events = detector().detect(&tracks(&seq));
        assert_eq!(events.possession_changes.len(), 1);
        assert_eq!(events.passes[0].from_player, 1);
        assert_eq!(events.passes[0].to_player, 4);
        assert_eq!(events.passes[0].end_frame, 4);
    }

    #[test]
    fn test_flicker_then_loose_ball_is_debounced() {
        let mut seq = vec![p(1, 1, RED); 10];
        seq.push(p(2, 2, BLUE));
        seq.extend(vec![None, None]);
        seq.extend(vec![p(1, 1, RED); 8]);
        let events = detector().detect(&tracks(&seq));
        assert!(events.is_empty());
        assert!(events.interceptions.is_empty());
    }

    #[test]
    fn test_holder_return_discards_candidate_regardless_of_gap() {
        let mut seq = vec![p(1, 1, RED); 4];
        seq.extend(vec![p(2, 2, BLUE); 2]);
        seq.extend(vec![None; 6]);
        seq.extend(vec![p(1, 1, RED); 3]);
        let events = detector().detect(&tracks(&seq));
        assert!(events.is_empty());
    }

    #[test]
    fn test_candidate_sighted_across_gap_is_confirmed() {
        let seq = vec![
            p(1, 1, RED),
            p(1, 1, RED),
            p(1, 1, RED),
            p(2, 1, RED),
            None,
            p(2, 1, RED),
            p(4, 1, RED),
        ];
        let events = detector().detect(&tracks(&seq));
        // Frames 3..=5 span the window, so player 4 challenges player 2
        let pairs: Vec<_> = events
            .possession_changes
            .iter()
            .map(|c| (c.from_player, c.to_player, c.frame))
            .collect();
        assert_eq!(pairs, vec![(1, 2, 3), (2, 4, 6)]);
    }

    #[test]
    fn test_unconfirmed_candidate_at_stream_end_is_recorded() {
        let mut seq = vec![p(1, 1, RED); 5];
        seq.push(p(3, 2, BLUE));
        let events = detector().detect(&tracks(&seq));
        assert_eq!(events.possession_changes.len(), 1);
        assert_eq!(events.possession_changes[0].frame, 5);
        assert_eq!(
            events.interceptions[0].interception_reason,
            InterceptionReason::TeamChange
        );
    }

    #[test]
    fn test_huge_debounce_never_confirms() {
        let config = EventConfig {
            debounce_frames: usize::MAX,
            ..EventConfig::default()
        };
        let mut seq = vec![p(1, 1, RED); 4];
        seq.extend(vec![p(2, 2, BLUE); 4]);
        let events = PossessionEventDetector::new(config).detect(&tracks(&seq));
        assert!(events.is_empty());
    }

    #[test]
    fn test_events_are_ordered_and_forward() {
        let mut seq = Vec::new();
        for (i, id) in [1, 2, 7, 3, 8, 1].iter().enumerate() {
            let team = if *id > 5 { 2 } else { 1 };
            let color = if team == 1 { RED } else { BLUE };
            seq.extend(vec![Some((*id, team, color, Some((i as f32 * 20.0, 0.0)))); 4]);
        }
        let events = detector().detect(&tracks(&seq));

        assert_eq!(events.possession_changes.len(), 5);
        for pass in &events.passes {
            assert!(pass.start_frame < pass.end_frame);
        }
        for interception in &events.interceptions {
            assert!(interception.start_frame < interception.end_frame);
        }
        let frames: Vec<_> = events.possession_changes.iter().map(|c| c.frame).collect();
        assert_eq!(frames, vec![4, 8, 12, 16, 20]);
        assert_eq!(events.passes.len() + events.interceptions.len(), 5);
    }

    #[test]
    fn test_serialized_tags_are_snake_case() {
        let json = serde_json::to_string(&InterceptionReason::ImplausibleTrajectory).unwrap();
        assert_eq!(json, "\"implausible_trajectory\"");
        let json = serde_json::to_string(&PossessionChangeType::SameTeamPass).unwrap();
        assert_eq!(json, "\"same_team_pass\"");
    }

    #[cfg(all(test, feature = "proptest"))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: with a stable holder on both sides, a flicker shorter
            /// than the debounce window never produces a change
            #[test]
            fn prop_short_flicker_never_recorded(
                before in 1usize..20,
                flicker in 1usize..3,
                after in 1usize..20
            ) {
                let mut seq = vec![p(1, 1, RED); before];
                seq.extend(vec![p(2, 2, BLUE); flicker]);
                seq.extend(vec![p(1, 1, RED); after]);
                let events = detector().detect(&tracks(&seq));
                prop_assert!(events.possession_changes.is_empty());
            }

            /// Property: loose-ball frames after a flicker do not let it
            /// through once the holder is back
            #[test]
            fn prop_flicker_followed_by_loose_ball_never_recorded(
                before in 3usize..20,
                flicker in 1usize..3,
                loose in 0usize..10,
                after in 1usize..20
            ) {
                let mut seq = vec![p(1, 1, RED); before];
                seq.extend(vec![p(2, 2, BLUE); flicker]);
                seq.extend(vec![None; loose]);
                seq.extend(vec![p(1, 1, RED); after]);
                let events = detector().detect(&tracks(&seq));
                prop_assert!(events.possession_changes.is_empty());
            }

            /// Property: every event moves forward in time
            #[test]
            fn prop_events_move_forward(ids in proptest::collection::vec(1u32..5, 1..40)) {
                let seq: Vec<_> = ids.iter().map(|id| p(*id, (*id % 2) as u8 + 1, RED)).collect();
                let events = detector().detect(&tracks(&seq));
                for pass in &events.passes {
                    prop_assert!(pass.start_frame < pass.end_frame);
                }
                for interception in &events.interceptions {
                    prop_assert!(interception.start_frame < interception.end_frame);
                }
            }
        }
    }
}
