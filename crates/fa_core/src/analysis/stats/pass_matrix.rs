//! Sender × receiver pass counts, dense and sparse.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::analysis::events::PassEvent;
use crate::models::PlayerId;

/// One directed edge of the pass graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassPair {
    pub from_player: PlayerId,
    pub to_player: PlayerId,
    pub count: u32,
}

/// Pass counts indexed by `(sender, receiver)`.
///
/// `counts[i][j]` is the number of passes from `players[i]` to `players[j]`;
/// `pairs` lists the non-zero entries ordered by `(from, to)`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PassMatrix {
    pub players: Vec<PlayerId>,
    pub counts: Vec<Vec<u32>>,
    pub pairs: Vec<PassPair>,
}

impl PassMatrix {
    /// Build from `passes`, keeping only those of `team` when given.
    pub fn from_passes(passes: &[PassEvent], team: Option<u8>) -> Self {
        let mut edges: BTreeMap<(PlayerId, PlayerId), u32> = BTreeMap::new();
        let mut players = BTreeSet::new();

        for pass in passes.iter().filter(|p| team.map_or(true, |t| p.team == t)) {
            *edges.entry((pass.from_player, pass.to_player)).or_insert(0) += 1;
            players.insert(pass.from_player);
            players.insert(pass.to_player);
        }

        let players: Vec<PlayerId> = players.into_iter().collect();
        let index: BTreeMap<PlayerId, usize> =
            players.iter().enumerate().map(|(i, id)| (*id, i)).collect();

        let mut counts = vec![vec![0u32; players.len()]; players.len()];
        let mut pairs = Vec::with_capacity(edges.len());
        for ((from, to), count) in edges {
            counts[index[&from]][index[&to]] = count;
            pairs.push(PassPair {
                from_player: from,
                to_player: to,
                count,
            });
        }

        Self {
            players,
            counts,
            pairs,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn count(&self, from: PlayerId, to: PlayerId) -> u32 {
        self.pairs
            .iter()
            .find(|p| p.from_player == from && p.to_player == to)
            .map_or(0, |p| p.count)
    }

    pub fn total(&self) -> u32 {
        self.pairs.iter().map(|p| p.count).sum()
    }

    /// The `n` most frequent connections, most frequent first; ties keep
    /// `(from, to)` order.
    pub fn top_pairs(&self, n: usize) -> Vec<PassPair> {
        let mut pairs = self.pairs.clone();
        pairs.sort_by(|a, b| b.count.cmp(&a.count));
        pairs.truncate(n);
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pass(from: PlayerId, to: PlayerId, team: u8) -> PassEvent {
        PassEvent {
            from_player: from,
            to_player: to,
            start_frame: 0,
            end_frame: 1,
            team,
            team_color: None,
            player_color: [0, 0, 0],
            receiver_color: [0, 0, 0],
            distance: None,
            color_similarity: 1.0,
        }
    }

    #[test]
    fn test_dense_and_sparse_agree() {
        let passes = vec![pass(3, 7, 1), pass(3, 7, 1), pass(7, 3, 1), pass(10, 11, 2)];
        let matrix = PassMatrix::from_passes(&passes, None);

        assert_eq!(matrix.players, vec![3, 7, 10, 11]);
        assert_eq!(matrix.counts[0][1], 2);
        assert_eq!(matrix.counts[1][0], 1);
        assert_eq!(matrix.counts[2][3], 1);
        assert_eq!(matrix.count(3, 7), 2);
        assert_eq!(matrix.count(7, 10), 0);
        assert_eq!(matrix.total(), 4);
        assert_eq!(matrix.pairs.len(), 3);
    }

    #[test]
    fn test_team_filter_and_top_pairs() {
        let passes = vec![pass(3, 7, 1), pass(10, 11, 2), pass(11, 10, 2), pass(11, 10, 2)];
        let matrix = PassMatrix::from_passes(&passes, Some(2));

        assert_eq!(matrix.players, vec![10, 11]);
        assert_eq!(matrix.total(), 3);
        let top = matrix.top_pairs(1);
        assert_eq!((top[0].from_player, top[0].to_player, top[0].count), (11, 10, 2));

        assert!(PassMatrix::from_passes(&[], None).is_empty());
    }
}
