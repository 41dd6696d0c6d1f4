//! Game state and core simulation types
//!
//! Everything a session owns lives here: the entity arena, the score/lives
//! ledger, the wave plan and its cursor, the difficulty ramp, and the pending
//! event stream for the host.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::events::GameEvent;
use super::rng::GameRng;
use super::scheduler::{ScheduledAction, Scheduler};
use super::sequence::{SequenceType, build_sequence};
use super::slice::SlicePath;
use crate::consts::*;

/// Stable entity identifier, unique within a session
pub type EntityId = u32;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended; one-way
    GameOver { by_bomb: bool },
}

/// What a launched object is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    /// Slice for a point, lose a life if it falls
    Enemy,
    /// Slicing it ends the game; carries the fuse loop while live
    Bomb,
}

/// Lifecycle of a launched object.
///
/// `Flying` is the live state: hit-testable, integrated under gravity, and
/// swept when it falls past the kill line. The transition to `Fading`
/// happens exactly once, at the moment a slice lands - from then on the
/// object is inert while its shrink+fade plays out, and a scheduled despawn
/// removes it from the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityState {
    Flying,
    Fading,
}

/// A launched object (enemy or bomb) tracked in the arena
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    pub id: EntityId,
    pub kind: EntityKind,
    pub pos: Vec2,
    pub vel: Vec2,
    /// Current rotation angle (radians), integrated from `angular_vel`
    pub spin: f32,
    pub angular_vel: f32,
    pub state: EntityState,
}

impl Entity {
    /// Still in flight: hit-testable and miss-sweepable
    pub fn is_live(&self) -> bool {
        self.state == EntityState::Flying
    }
}

/// Bomb policy for a single spawn, explicit at every call site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ForceBomb {
    /// Guaranteed enemy
    Never,
    /// Guaranteed bomb
    Always,
    /// 1-in-7 bomb odds
    Random,
}

/// Stage dimensions in scene points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StageBounds {
    pub width: f32,
    pub height: f32,
}

impl Default for StageBounds {
    fn default() -> Self {
        Self {
            width: STAGE_WIDTH,
            height: STAGE_HEIGHT,
        }
    }
}

/// Complete session state (deterministic)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Session RNG; a deserialized state re-seeds from `seed`
    #[serde(skip)]
    pub rng: GameRng,
    pub bounds: StageBounds,
    pub phase: GamePhase,
    /// Non-decreasing until game over; +1 per sliced enemy
    pub score: u32,
    pub lives: u32,
    /// The wave plan, generated once; never grows, never reshuffled
    pub sequence: Vec<SequenceType>,
    /// Forward-only cursor into `sequence`
    pub sequence_position: usize,
    /// Delay between an empty stage and the next wave
    pub popup_time: f32,
    /// Total duration over which a chain wave's spawns are spread
    pub chain_delay: f32,
    /// Physics speed multiplier; 0 once the game has ended
    pub time_scale: f32,
    /// Set while a wave is scheduled but not yet dispatched
    pub next_wave_queued: bool,
    /// The arena, in spawn order
    pub entities: Vec<Entity>,
    pub slice: SlicePath,
    /// A swoosh one-shot is playing; cleared by `swoosh_finished`
    pub swoosh_active: bool,
    /// The bomb currently owning the fuse loop, if any
    pub fuse: Option<EntityId>,
    pub scheduler: Scheduler,
    /// Frame tick counter
    pub time_ticks: u64,
    /// Events pending for the host, drained once per frame
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    /// Next entity ID
    next_id: EntityId,
}

impl GameState {
    /// Create a new session with the default stage
    pub fn new(seed: u64) -> Self {
        Self::with_bounds(seed, StageBounds::default())
    }

    /// Create a new session. The wave plan is generated up front and the
    /// opening wave is scheduled, queued flag set, exactly as if the stage
    /// had just been observed empty.
    pub fn with_bounds(seed: u64, bounds: StageBounds) -> Self {
        let mut rng = GameRng::new(seed);
        let sequence = build_sequence(&mut rng);

        let mut scheduler = Scheduler::default();
        scheduler.after(FIRST_WAVE_DELAY, ScheduledAction::SpawnWave);

        Self {
            seed,
            rng,
            bounds,
            phase: GamePhase::Playing,
            score: 0,
            lives: START_LIVES,
            sequence,
            sequence_position: 0,
            popup_time: START_POPUP_TIME,
            chain_delay: START_CHAIN_DELAY,
            time_scale: START_TIME_SCALE,
            next_wave_queued: true,
            entities: Vec::new(),
            slice: SlicePath::default(),
            swoosh_active: false,
            fuse: None,
            scheduler,
            time_ticks: 0,
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> EntityId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    pub fn entity_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.id == id)
    }

    /// Objects still in flight
    pub fn live_entities(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter().filter(|e| e.is_live())
    }

    /// Bombs still in flight (drives the fuse loop)
    pub fn live_bomb_count(&self) -> usize {
        self.live_entities()
            .filter(|e| e.kind == EntityKind::Bomb)
            .count()
    }

    pub fn is_ended(&self) -> bool {
        matches!(self.phase, GamePhase::GameOver { .. })
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Hand the pending events to the host, oldest first
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_starts_clean() {
        let state = GameState::new(12345);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, START_LIVES);
        assert!(state.entities.is_empty());
        assert_eq!(state.sequence_position, 0);
        assert_eq!(state.popup_time, START_POPUP_TIME);
        assert_eq!(state.chain_delay, START_CHAIN_DELAY);
        assert_eq!(state.time_scale, START_TIME_SCALE);
    }

    #[test]
    fn opening_wave_is_queued() {
        let state = GameState::new(1);
        assert!(state.next_wave_queued);
        assert_eq!(state.scheduler.len(), 1);
    }

    #[test]
    fn entity_ids_are_unique_and_monotonic() {
        let mut state = GameState::new(1);
        let a = state.next_entity_id();
        let b = state.next_entity_id();
        assert!(b > a);
    }

    #[test]
    fn drain_events_empties_the_queue() {
        let mut state = GameState::new(1);
        state.push_event(GameEvent::FuseStopped);
        assert_eq!(state.drain_events().len(), 1);
        assert!(state.drain_events().is_empty());
    }
}
