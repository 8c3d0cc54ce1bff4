//! Writes `team`, `jersey_color` and `team_color` into every player record.
//!
//! Each record resolves its team signal through an explicit three-way
//! branch instead of carrying the previous value forward implicitly:
//! present (cached), recoverable (pixels for this frame, or an upstream
//! label on the record), or absent (left without a team for that frame).
//! Pixels without a fitted model are a precondition error.

use tracing::{debug, info, warn};

use super::cache::TeamAssignment;
use super::classifier::TeamClassifier;
use crate::error::{AnalysisError, Result};
use crate::models::{fallback_jersey_color, FrameSource, PlayerId, PlayerRecord, RgbFrame, TrackSet};

/// Where a record's team comes from.
enum TeamSignal<'a> {
    /// Already in the classifier cache
    Present(TeamAssignment),
    /// Classify from this frame's pixels
    Pixels(&'a RgbFrame),
    /// Adopt the tracker's own label
    Upstream { team: u8 },
    Absent,
}

/// Counts gathered while annotating.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamAnnotationSummary {
    /// Players classified from pixels
    pub classified: usize,
    /// Players whose upstream label was adopted
    pub adopted: usize,
    /// Records left without a team (no cache, pixels or label)
    pub unresolved: usize,
    /// Distinct players per team (index 0 = team 1)
    pub team_sizes: [usize; 2],
}

fn resolve_signal<'a>(
    classifier: &TeamClassifier,
    pixels: Option<&'a RgbFrame>,
    player_id: PlayerId,
    record: &PlayerRecord,
) -> TeamSignal<'a> {
    if let Some(cached) = classifier.cache().get(player_id) {
        return TeamSignal::Present(cached);
    }
    match (pixels, record.team) {
        (Some(frame), _) if classifier.is_fitted() => TeamSignal::Pixels(frame),
        (_, Some(team)) => TeamSignal::Upstream { team },
        _ => TeamSignal::Absent,
    }
}

/// Annotate all frames of `tracks` with team information.
///
/// When the model is fitted and frame 0 has pixels, every player of frame 0
/// is classified first so the reference frame seeds the cache.
pub fn annotate_teams(
    tracks: &mut TrackSet,
    frames: &dyn FrameSource,
    classifier: &mut TeamClassifier,
) -> Result<TeamAnnotationSummary> {
    let mut summary = TeamAnnotationSummary::default();

    if let (Some(reference), Some(first)) = (frames.frame(0), tracks.players.first()) {
        if classifier.is_fitted() {
            for (player_id, record) in first {
                if !classifier.cache().contains(*player_id) {
                    classifier.classify(reference, record.bbox, *player_id)?;
                    summary.classified += 1;
                }
            }
        }
    }

    for (frame_idx, players) in tracks.players.iter_mut().enumerate() {
        let pixels = frames.frame(frame_idx);

        for (player_id, record) in players.iter_mut() {
            let assignment = match resolve_signal(classifier, pixels, *player_id, record) {
                TeamSignal::Present(a) => a,
                TeamSignal::Pixels(frame) => {
                    debug!(player_id, frame = frame_idx, "new player, classifying from pixels");
                    summary.classified += 1;
                    classifier.classify(frame, record.bbox, *player_id)?
                }
                TeamSignal::Upstream { team } => {
                    let color = record
                        .jersey_color
                        .or(record.team_color)
                        .or_else(|| classifier.team_color(team))
                        .unwrap_or_else(|| fallback_jersey_color(*player_id));
                    summary.adopted += 1;
                    classifier.adopt(*player_id, team, color)?
                }
                TeamSignal::Absent if pixels.is_some() => {
                    return Err(AnalysisError::ModelNotFitted);
                }
                TeamSignal::Absent => {
                    debug!(player_id, frame = frame_idx, "no team signal");
                    summary.unresolved += 1;
                    continue;
                }
            };

            record.team = Some(assignment.team);
            record.jersey_color = Some(assignment.jersey_color);
            record.team_color = classifier
                .team_color(assignment.team)
                .or(record.team_color)
                .or(Some(assignment.jersey_color));
        }
    }

    summary.team_sizes = classifier.cache().team_sizes();
    if summary.unresolved > 0 {
        warn!(
            records = summary.unresolved,
            "player records without any team signal left unclassified"
        );
    }
    info!(
        classified = summary.classified,
        adopted = summary.adopted,
        unresolved = summary.unresolved,
        team1 = summary.team_sizes[0],
        team2 = summary.team_sizes[1],
        "team annotation complete"
    );
    Ok(summary)
}
