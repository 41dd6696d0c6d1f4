//! Frame tick and touch pipeline
//!
//! Advances the simulation one fixed timestep at a time and turns raw touch
//! samples into slice outcomes. Per frame the order is fixed: timers, then
//! ballistic integration, then the fuse check, then the miss sweep, then the
//! wave trigger. Per touch-move sample: path update, then swoosh gate, then
//! hit resolution.

use glam::Vec2;

use super::events::{GameEvent, SoundEffect};
use super::scheduler::ScheduledAction;
use super::sequence::SequenceType;
use super::state::{Entity, EntityId, EntityKind, EntityState, ForceBomb, GamePhase, GameState};
use super::trajectory;
use crate::consts::*;

/// Advance the game by one frame of `dt` seconds.
pub fn tick(state: &mut GameState, dt: f32) {
    // Timers run on unscaled time. Despawns fire even after game over so
    // shrink+fade removals resolve; spawn actions die against the phase
    // guard inside their dispatch.
    for action in state.scheduler.advance(dt) {
        match action {
            ScheduledAction::SpawnWave => spawn_wave(state),
            ScheduledAction::ChainSpawn { force } => {
                if !state.is_ended() {
                    spawn(state, force);
                }
            }
            ScheduledAction::Despawn { id } => despawn(state, id),
        }
    }

    if state.is_ended() {
        return;
    }
    state.time_ticks += 1;

    // Ballistic integration under the ramped time scale. Only objects in
    // flight move; sliced ones are frozen mid-air while they fade.
    let sdt = dt * state.time_scale;
    let gravity = WORLD_GRAVITY * PIXELS_PER_METER;
    for e in state.entities.iter_mut().filter(|e| e.is_live()) {
        e.vel.y += gravity * sdt;
        e.pos += e.vel * sdt;
        e.spin += e.angular_vel * sdt;
    }

    // The fuse loop dies with the last bomb in flight.
    if state.fuse.is_some() && state.live_bomb_count() == 0 {
        state.fuse = None;
        state.push_event(GameEvent::FuseStopped);
    }

    // Miss sweep: anything that fell past the kill line is gone for good.
    // Enemies cost a life; bombs just despawn.
    let fallen: Vec<(EntityId, EntityKind)> = state
        .entities
        .iter()
        .filter(|e| e.is_live() && e.pos.y < KILL_Y)
        .map(|e| (e.id, e.kind))
        .collect();
    for (id, kind) in fallen {
        if kind == EntityKind::Enemy {
            state.push_event(GameEvent::EnemyMissed { id });
            subtract_life(state);
        }
        despawn(state, id);
    }

    // An empty stage queues the next wave, once.
    if !state.is_ended() && !state.next_wave_queued && state.live_entities().next().is_none() {
        let delay = state.popup_time;
        state.scheduler.after(delay, ScheduledAction::SpawnWave);
        state.next_wave_queued = true;
    }
}

/// Touch-down: start a fresh slice path at `point`.
pub fn touch_began(state: &mut GameState, point: Vec2) {
    if state.is_ended() {
        return;
    }
    state.slice.reset();
    state.slice.append(point);
}

/// Touch-move: grow the path, gate the swoosh, then resolve hits at the
/// sample point.
pub fn touch_moved(state: &mut GameState, point: Vec2) {
    if state.is_ended() {
        return;
    }
    state.slice.append(point);
    play_swoosh(state);
    resolve_slice(state, point);
}

/// Touch-up. The path stays put; the host fades the rendered stroke.
pub fn touch_ended(_state: &mut GameState) {}

/// Touch-cancel is treated identically to touch-up.
pub fn touch_cancelled(state: &mut GameState) {
    touch_ended(state);
}

/// Host callback: the swoosh one-shot finished playing.
pub fn swoosh_finished(state: &mut GameState) {
    state.swoosh_active = false;
}

/// Spawn one object with the given bomb policy.
pub fn spawn(state: &mut GameState, force: ForceBomb) {
    let roll = match force {
        ForceBomb::Never => 1,
        ForceBomb::Always => 0,
        ForceBomb::Random => state.rng.random_int(0, 6),
    };
    let kind = if roll == 0 {
        EntityKind::Bomb
    } else {
        EntityKind::Enemy
    };

    let id = state.next_entity_id();
    if kind == EntityKind::Bomb {
        // Only one fuse loop is ever live; a new bomb takes it over.
        if state.fuse.take().is_some() {
            state.push_event(GameEvent::FuseStopped);
        }
        state.fuse = Some(id);
    }

    let launch = trajectory::random_launch(&mut state.rng, &state.bounds);
    state.entities.push(Entity {
        id,
        kind,
        pos: launch.pos,
        vel: launch.vel,
        spin: 0.0,
        angular_vel: launch.angular_vel,
        state: EntityState::Flying,
    });

    state.push_event(GameEvent::Spawned { id, kind });
    match kind {
        EntityKind::Bomb => state.push_event(GameEvent::FuseStarted { id }),
        EntityKind::Enemy => state.push_event(GameEvent::Sound(SoundEffect::Launch)),
    }
}

/// Dispatch the wave at the sequence cursor and ramp the difficulty.
pub fn spawn_wave(state: &mut GameState) {
    if state.is_ended() {
        return;
    }

    state.popup_time = (state.popup_time * POPUP_TIME_DECAY).max(POPUP_TIME_FLOOR);
    state.chain_delay = (state.chain_delay * CHAIN_DELAY_DECAY).max(CHAIN_DELAY_FLOOR);
    state.time_scale *= TIME_SCALE_GROWTH;

    // The plan is sized to outlast any session; running off it is a bug.
    let Some(&wave) = state.sequence.get(state.sequence_position) else {
        panic!(
            "wave plan exhausted at position {}",
            state.sequence_position
        );
    };
    log::info!(
        "wave {} ({:?}): cadence {:.3}s, chain {:.2}s, speed x{:.2}",
        state.sequence_position,
        wave,
        state.popup_time,
        state.chain_delay,
        state.time_scale
    );

    match wave {
        SequenceType::OneNoBomb => spawn(state, ForceBomb::Never),
        SequenceType::One => spawn(state, ForceBomb::Random),
        SequenceType::TwoWithOneBomb => {
            spawn(state, ForceBomb::Never);
            spawn(state, ForceBomb::Always);
        }
        SequenceType::Two => {
            for _ in 0..2 {
                spawn(state, ForceBomb::Random);
            }
        }
        SequenceType::Three => {
            for _ in 0..3 {
                spawn(state, ForceBomb::Random);
            }
        }
        SequenceType::Four => {
            for _ in 0..4 {
                spawn(state, ForceBomb::Random);
            }
        }
        SequenceType::Chain => chain(state, state.chain_delay / 5.0),
        SequenceType::FastChain => chain(state, state.chain_delay / 10.0),
    }

    state.sequence_position += 1;
    state.next_wave_queued = false;
}

/// End the session. Idempotent; the first call wins.
pub fn end_game(state: &mut GameState, by_bomb: bool) {
    if state.is_ended() {
        return;
    }
    state.phase = GamePhase::GameOver { by_bomb };
    state.time_scale = 0.0;
    if state.fuse.take().is_some() {
        state.push_event(GameEvent::FuseStopped);
    }
    if by_bomb {
        // Cosmetic framing: a bomb death empties the indicator row whatever
        // the ledger still holds.
        state.push_event(GameEvent::AllLivesForfeited);
    }
    state.push_event(GameEvent::GameOver { by_bomb });
    log::info!(
        "game over: score {}, {} waves, by_bomb={}",
        state.score,
        state.sequence_position,
        by_bomb
    );
}

/// One spawned now, four more spread across the chain.
fn chain(state: &mut GameState, spacing: f32) {
    spawn(state, ForceBomb::Random);
    for i in 1..=4 {
        state.scheduler.after(spacing * i as f32, ScheduledAction::ChainSpawn {
            force: ForceBomb::Random,
        });
    }
}

fn play_swoosh(state: &mut GameState) {
    // One swoosh at a time; samples while busy are dropped, not queued.
    if state.swoosh_active {
        return;
    }
    state.swoosh_active = true;
    let sound = match state.rng.random_int(1, 3) {
        1 => SoundEffect::Swoosh1,
        2 => SoundEffect::Swoosh2,
        _ => SoundEffect::Swoosh3,
    };
    state.push_event(GameEvent::Sound(sound));
}

/// Test the sample point against everything in flight and resolve slices.
fn resolve_slice(state: &mut GameState, point: Vec2) {
    let hits: Vec<(EntityId, EntityKind, Vec2)> = state
        .entities
        .iter()
        .filter(|e| e.is_live() && e.pos.distance_squared(point) <= HIT_RADIUS * HIT_RADIUS)
        .map(|e| (e.id, e.kind, e.pos))
        .collect();

    for (id, kind, pos) in hits {
        // The one-way Flying -> Fading flip is the double-hit guard: a
        // fading object can never match again.
        if let Some(e) = state.entity_mut(id) {
            e.state = EntityState::Fading;
        }
        state
            .scheduler
            .after(FADE_DURATION, ScheduledAction::Despawn { id });
        match kind {
            EntityKind::Enemy => {
                state.score += 1;
                state.push_event(GameEvent::EnemySliced { id, pos });
                state.push_event(GameEvent::Sound(SoundEffect::Whack));
            }
            EntityKind::Bomb => {
                state.push_event(GameEvent::BombSliced { id, pos });
                state.push_event(GameEvent::Sound(SoundEffect::Explosion));
                end_game(state, true);
            }
        }
    }
}

fn subtract_life(state: &mut GameState) {
    state.lives = state.lives.saturating_sub(1);
    state.push_event(GameEvent::Sound(SoundEffect::Wrong));
    // Indicators spend left to right: 2 lives left flips slot 0, 0 flips 2.
    let slot = START_LIVES.saturating_sub(1).saturating_sub(state.lives) as usize;
    state.push_event(GameEvent::LifeSpent { slot });
    if state.lives == 0 {
        end_game(state, false);
    }
}

fn despawn(state: &mut GameState, id: EntityId) {
    let before = state.entities.len();
    state.entities.retain(|e| e.id != id);
    if state.entities.len() != before {
        state.push_event(GameEvent::Despawned { id });
    }
}
