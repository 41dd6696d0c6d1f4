//! Host-facing event stream
//!
//! The sim never touches a speaker or a scene graph. Everything the host has
//! to do in reaction to gameplay - play a one-shot, start or stop the bomb
//! fuse loop, burst particles at a slice, flip a life indicator - arrives as
//! a [`GameEvent`] drained once per frame.

use glam::Vec2;

use super::state::{EntityId, EntityKind};

/// One-shot sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// An enemy was tossed up
    Launch,
    /// An enemy was sliced
    Whack,
    /// A bomb was sliced
    Explosion,
    /// An enemy fell off-screen unsliced
    Wrong,
    /// Swipe feedback, three variants picked at random
    Swoosh1,
    Swoosh2,
    Swoosh3,
}

/// Gameplay events for the host, in the order they occurred
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// A new object entered the stage; place its scene node
    Spawned { id: EntityId, kind: EntityKind },
    /// An object left the arena; remove its scene node
    Despawned { id: EntityId },
    /// Fire-and-forget one-shot
    Sound(SoundEffect),
    /// Start the looping fuse sound for this bomb. At most one fuse loop is
    /// ever live; a `FuseStopped` precedes this if another was playing.
    FuseStarted { id: EntityId },
    /// Stop and release the fuse loop
    FuseStopped,
    /// Enemy sliced at `pos`; run the hit burst and shrink+fade there
    EnemySliced { id: EntityId, pos: Vec2 },
    /// Bomb sliced at `pos`; run the explosion burst and shrink+fade there
    BombSliced { id: EntityId, pos: Vec2 },
    /// Enemy fell past the kill line unsliced
    EnemyMissed { id: EntityId },
    /// Flip life indicator `slot` (0..=2) to its spent visual, with the
    /// brief scale pulse
    LifeSpent { slot: usize },
    /// Bomb death: show all three indicators spent, whatever the ledger says
    AllLivesForfeited,
    /// Terminal transition; halt input and presentation
    GameOver { by_bomb: bool },
}
