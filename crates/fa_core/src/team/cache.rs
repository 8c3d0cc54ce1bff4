//! Per-run player → team/color cache.
//!
//! One cache belongs to one analysis run. Reusing a cache across unrelated
//! videos would mix up tracker IDs, so `TeamClassifier` takes it by value and
//! hands it back through `into_cache`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{PlayerId, Rgb};

/// A player's team and representative jersey color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamAssignment {
    /// 1 or 2
    pub team: u8,
    pub jersey_color: Rgb,
}

#[derive(Debug, Clone, Default)]
pub struct TeamCache {
    entries: HashMap<PlayerId, TeamAssignment>,
}

impl TeamCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, player_id: PlayerId) -> Option<TeamAssignment> {
        self.entries.get(&player_id).copied()
    }

    pub fn contains(&self, player_id: PlayerId) -> bool {
        self.entries.contains_key(&player_id)
    }

    /// Insert unless already present. Returns the value now cached, which is
    /// the earlier one if the player was seen before.
    pub fn insert_once(&mut self, player_id: PlayerId, assignment: TeamAssignment) -> TeamAssignment {
        *self.entries.entry(player_id).or_insert(assignment)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Players per team.
    pub fn team_sizes(&self) -> [usize; 2] {
        let mut sizes = [0; 2];
        for a in self.entries.values() {
            if (1..=2).contains(&a.team) {
                sizes[(a.team - 1) as usize] += 1;
            }
        }
        sizes
    }
}
