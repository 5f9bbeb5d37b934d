//! Chaser registry — the shared, capacity-limited pool of agents
//! currently classified as actively pursuing the target.
//!
//! Owned by the match context and passed into every agent evaluation.
//! The check-then-act sequence (capacity read, eligibility decision,
//! membership write) happens inside one agent's evaluation, so the
//! capacity invariant holds for any interleaving of agents within a tick.

use std::collections::HashSet;

use tankwar_core::constants::MAX_CHASERS;

/// Set of agent identifiers currently chasing. Size never exceeds the cap.
#[derive(Debug, Default)]
pub struct ChaserRegistry {
    members: HashSet<u32>,
}

impl ChaserRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a new agent may join the pool.
    pub fn has_capacity(&self) -> bool {
        self.members.len() < MAX_CHASERS
    }

    pub fn contains(&self, agent_id: u32) -> bool {
        self.members.contains(&agent_id)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Apply a chase/not-chase classification flip transactionally.
    pub fn update(&mut self, agent_id: u32, was_chasing: bool, now_chasing: bool) {
        if !was_chasing && now_chasing {
            self.members.insert(agent_id);
            debug_assert!(self.members.len() <= MAX_CHASERS);
        } else if was_chasing && !now_chasing {
            self.members.remove(&agent_id);
        }
    }

    /// Cleared at match (re)start.
    pub fn clear(&mut self) {
        self.members.clear();
    }
}
