//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (entities kept in spawn order)
//! - No rendering or platform dependencies
//!
//! Host-visible side effects (sounds, particle bursts, fuse loop, life
//! indicators) are emitted as [`GameEvent`]s and drained once per frame.

pub mod events;
pub mod rng;
pub mod scheduler;
pub mod sequence;
pub mod slice;
pub mod state;
pub mod tick;
pub mod trajectory;

pub use events::{GameEvent, SoundEffect};
pub use rng::GameRng;
pub use scheduler::{ScheduledAction, Scheduler};
pub use sequence::{SequenceType, build_sequence};
pub use slice::SlicePath;
pub use state::{
    Entity, EntityId, EntityKind, EntityState, ForceBomb, GamePhase, GameState, StageBounds,
};
pub use tick::{
    end_game, spawn, spawn_wave, swoosh_finished, tick, touch_began, touch_cancelled, touch_ended,
    touch_moved,
};
pub use trajectory::{Launch, random_launch};
