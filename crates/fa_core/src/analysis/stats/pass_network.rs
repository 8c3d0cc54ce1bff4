//! # Pass Network
//!
//! Per-team directed pass graphs anchored at each player's average pitch
//! position.
//!
//! ## Algorithm
//! 1. Average `position_transformed` per player over every frame where the
//!    player has both a position and a team (last seen team wins)
//! 2. Count `(sender, receiver)` edges per team, only for passes whose
//!    endpoints both have an average position
//! 3. Per-team summary: totals, most active passer/receiver, most
//!    connected pair, density = connections / (n * (n - 1))
//!
//! Ties in the "most" fields go to the lowest player ID (or pair).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::pass_matrix::PassPair;
use crate::analysis::events::PassEvent;
use crate::models::{PlayerId, Point, TrackSet};
use crate::team::{TEAM_ONE, TEAM_TWO};

/// A player node of the network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerNode {
    pub player_id: PlayerId,
    pub team: u8,
    /// Average pitch-space position
    pub position: Point,
    /// Passes sent that made it into the network
    pub pass_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkStats {
    pub total_passes: u32,
    pub unique_connections: usize,
    pub players_involved: usize,
    /// (player, passes sent)
    pub most_active_passer: Option<(PlayerId, u32)>,
    /// (player, passes received)
    pub most_active_receiver: Option<(PlayerId, u32)>,
    pub most_connected_pair: Option<PassPair>,
    pub network_density: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamNetwork {
    pub team: u8,
    /// Directed edges ordered by `(from, to)`
    pub edges: Vec<PassPair>,
    /// `None` when the team has no edges or no positioned players
    pub stats: Option<NetworkStats>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PassNetworkReport {
    pub players: Vec<PlayerNode>,
    pub teams: Vec<TeamNetwork>,
}

impl PassNetworkReport {
    pub fn team(&self, team: u8) -> Option<&TeamNetwork> {
        self.teams.iter().find(|t| t.team == team)
    }

    pub fn player(&self, player_id: PlayerId) -> Option<&PlayerNode> {
        self.players.iter().find(|p| p.player_id == player_id)
    }
}

/// Highest count, lowest key on ties.
fn most_active(counts: &BTreeMap<PlayerId, u32>) -> Option<(PlayerId, u32)> {
    counts.iter().fold(None, |best, (id, count)| match best {
        Some((_, c)) if c >= *count => best,
        _ => Some((*id, *count)),
    })
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PassNetworkAnalyzer;

impl PassNetworkAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Average pitch position and last seen team of every player.
    pub fn average_positions(&self, tracks: &TrackSet) -> BTreeMap<PlayerId, (Point, u8)> {
        let mut sums: BTreeMap<PlayerId, (f64, f64, usize, u8)> = BTreeMap::new();
        for frame in &tracks.players {
            for (player_id, record) in frame {
                let (Some((x, y)), Some(team)) = (record.position_transformed, record.team) else {
                    continue;
                };
                let entry = sums.entry(*player_id).or_insert((0.0, 0.0, 0, team));
                entry.0 += x as f64;
                entry.1 += y as f64;
                entry.2 += 1;
                entry.3 = team;
            }
        }
        sums.into_iter()
            .map(|(id, (sx, sy, n, team))| {
                let n = n as f64;
                (id, (((sx / n) as f32, (sy / n) as f32), team))
            })
            .collect()
    }

    pub fn analyze(&self, tracks: &TrackSet, passes: &[PassEvent]) -> PassNetworkReport {
        let positions = self.average_positions(tracks);

        let mut edges: BTreeMap<u8, BTreeMap<(PlayerId, PlayerId), u32>> = BTreeMap::new();
        let mut sent: BTreeMap<PlayerId, u32> = BTreeMap::new();
        for pass in passes {
            if !positions.contains_key(&pass.from_player) || !positions.contains_key(&pass.to_player)
            {
                continue;
            }
            *edges
                .entry(pass.team)
                .or_default()
                .entry((pass.from_player, pass.to_player))
                .or_insert(0) += 1;
            *sent.entry(pass.from_player).or_insert(0) += 1;
        }

        let players: Vec<PlayerNode> = positions
            .iter()
            .map(|(id, (position, team))| PlayerNode {
                player_id: *id,
                team: *team,
                position: *position,
                pass_count: sent.get(id).copied().unwrap_or(0),
            })
            .collect();

        let teams = [TEAM_ONE, TEAM_TWO]
            .into_iter()
            .map(|team| {
                let team_edges: Vec<PassPair> = edges
                    .get(&team)
                    .map(|m| {
                        m.iter()
                            .map(|((from, to), count)| PassPair {
                                from_player: *from,
                                to_player: *to,
                                count: *count,
                            })
                            .collect()
                    })
                    .unwrap_or_default();
                let has_players = players.iter().any(|p| p.team == team);
                let stats = if team_edges.is_empty() || !has_players {
                    None
                } else {
                    Some(Self::network_stats(&team_edges))
                };
                TeamNetwork {
                    team,
                    edges: team_edges,
                    stats,
                }
            })
            .collect();

        PassNetworkReport { players, teams }
    }

    fn network_stats(edges: &[PassPair]) -> NetworkStats {
        let mut passer: BTreeMap<PlayerId, u32> = BTreeMap::new();
        let mut receiver: BTreeMap<PlayerId, u32> = BTreeMap::new();
        for edge in edges {
            *passer.entry(edge.from_player).or_insert(0) += edge.count;
            *receiver.entry(edge.to_player).or_insert(0) += edge.count;
        }

        let mut involved: Vec<PlayerId> = edges
            .iter()
            .flat_map(|e| [e.from_player, e.to_player])
            .collect();
        involved.sort_unstable();
        involved.dedup();
        let n = involved.len();

        let most_connected_pair = edges.iter().fold(None::<PassPair>, |best, edge| match best {
            Some(b) if b.count >= edge.count => Some(b),
            _ => Some(*edge),
        });

        NetworkStats {
            total_passes: edges.iter().map(|e| e.count).sum(),
            unique_connections: edges.len(),
            players_involved: n,
            most_active_passer: most_active(&passer),
            most_active_receiver: most_active(&receiver),
            most_connected_pair,
            network_density: if n > 1 {
                edges.len() as f32 / (n * (n - 1)) as f32
            } else {
                0.0
            },
        }
    }
}
