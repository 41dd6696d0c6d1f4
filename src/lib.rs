//! Slice Storm - a swipe-to-slice arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, trajectories, slicing, game state)
//!
//! Rendering, audio playback and raw input live in the host. The host feeds
//! touch samples and frame ticks into [`sim::GameState`], drains the
//! [`sim::GameEvent`] stream, and reads entity/path state back for drawing.

pub mod sim;

pub use sim::{GameEvent, GameState, SoundEffect};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz frame tick)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Stage dimensions (scene points)
    pub const STAGE_WIDTH: f32 = 1024.0;
    pub const STAGE_HEIGHT: f32 = 768.0;

    /// Launched objects enter below the visible stage
    pub const SPAWN_Y: f32 = -128.0;
    /// Horizontal spawn inset from either stage edge
    pub const SPAWN_MARGIN: f32 = 64.0;
    /// Objects falling past this line are gone for good
    pub const KILL_Y: f32 = -140.0;

    /// Radius of the circular hit proxy around every launched object
    pub const HIT_RADIUS: f32 = 64.0;

    /// World gravity in m/s^2, pulling launched objects back down
    pub const WORLD_GRAVITY: f32 = -6.0;
    /// Scene points per physics meter
    pub const PIXELS_PER_METER: f32 = 150.0;
    /// Launch velocities are drawn in small integer bands, then scaled
    pub const LAUNCH_SPEED_SCALE: f32 = 40.0;

    /// Starting lives
    pub const START_LIVES: u32 = 3;

    /// Delay before the opening wave
    pub const FIRST_WAVE_DELAY: f32 = 2.0;
    /// Wave cadence: delay between an empty stage and the next wave
    pub const START_POPUP_TIME: f32 = 0.9;
    pub const POPUP_TIME_DECAY: f32 = 0.991;
    pub const POPUP_TIME_FLOOR: f32 = 0.2;
    /// Total duration of a chain wave's five spawns
    pub const START_CHAIN_DELAY: f32 = 3.0;
    pub const CHAIN_DELAY_DECAY: f32 = 0.99;
    pub const CHAIN_DELAY_FLOOR: f32 = 0.6;
    /// Physics speed multiplier, ramped up per wave and frozen at game over
    pub const START_TIME_SCALE: f32 = 0.85;
    pub const TIME_SCALE_GROWTH: f32 = 1.02;

    /// Sliced objects shrink and fade for this long before despawning
    pub const FADE_DURATION: f32 = 0.2;

    /// Maximum touch points kept in the slice path
    pub const MAX_SLICE_POINTS: usize = 12;

    /// Random tail appended to the fixed opening of the wave plan.
    /// Must stay far above any wave count a session can reach.
    pub const SEQUENCE_TAIL_LEN: usize = 1001;
}
