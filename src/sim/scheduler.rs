//! Pending timed work
//!
//! Delayed gameplay work is plain data: one scheduler owns every pending
//! action. Actions are non-cancelable; wave and chain spawns re-check the
//! game-over flag when dispatched, while despawns fire regardless so removal
//! animations resolve. Countdowns run on unscaled wall time, not the physics
//! time scale.

use serde::{Deserialize, Serialize};

use super::state::{EntityId, ForceBomb};

/// A timed action owned by the scheduler
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ScheduledAction {
    /// Dispatch the next wave of the sequence plan
    SpawnWave,
    /// One delayed spawn of a chain wave
    ChainSpawn { force: ForceBomb },
    /// Remove a sliced entity once its shrink+fade has played out
    Despawn { id: EntityId },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
struct Pending {
    remaining: f32,
    action: ScheduledAction,
}

/// Owner of all pending timed callbacks in a session
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scheduler {
    pending: Vec<Pending>,
}

impl Scheduler {
    /// Schedule `action` to fire after `delay` seconds
    pub fn after(&mut self, delay: f32, action: ScheduledAction) {
        self.pending.push(Pending {
            remaining: delay,
            action,
        });
    }

    /// Advance all countdowns by `dt` and return the actions that came due,
    /// in the order they were scheduled.
    pub fn advance(&mut self, dt: f32) -> Vec<ScheduledAction> {
        for p in &mut self.pending {
            p.remaining -= dt;
        }
        let mut due = Vec::new();
        let mut i = 0;
        while i < self.pending.len() {
            if self.pending[i].remaining <= 0.0 {
                due.push(self.pending.remove(i).action);
            } else {
                i += 1;
            }
        }
        due
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
