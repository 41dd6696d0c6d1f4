//! Slice Storm headless demo
//!
//! Runs a scripted session against the simulation core: an autoplayer swipes
//! through falling enemies (and keeps well clear of bombs) until the run
//! ends, then prints a JSON session summary. Useful for watching the
//! difficulty ramp and for exercising the whole core without a renderer.
//!
//! Usage: `slice-storm [seed] [max-seconds]`

use glam::Vec2;
use serde::Serialize;

use slice_storm::consts::*;
use slice_storm::sim::{self, EntityKind, GameEvent, GamePhase, GameState};

#[derive(Debug, Serialize)]
struct SessionSummary {
    seed: u64,
    score: u32,
    lives: u32,
    waves: usize,
    sliced: u32,
    missed: u32,
    duration_secs: f32,
    ended_by_bomb: Option<bool>,
}

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed: u64 = args
        .next()
        .and_then(|a| a.parse().ok())
        .unwrap_or(0xC0FFEE);
    let max_secs: f32 = args.next().and_then(|a| a.parse().ok()).unwrap_or(120.0);

    log::info!("starting session with seed {seed}");
    let mut state = GameState::new(seed);
    let mut sliced = 0u32;
    let mut missed = 0u32;
    let max_ticks = (max_secs / SIM_DT) as u64;

    // The swoosh one-shot has no audio host here; pretend each finishes
    // within two frames.
    let mut swoosh_frames = 0u8;

    for _ in 0..max_ticks {
        sim::tick(&mut state, SIM_DT);

        if swoosh_frames > 0 {
            swoosh_frames -= 1;
            if swoosh_frames == 0 {
                sim::swoosh_finished(&mut state);
            }
        }

        autoplay(&mut state, &mut swoosh_frames);

        for event in state.drain_events() {
            match event {
                GameEvent::EnemySliced { id, pos } => {
                    sliced += 1;
                    log::debug!("sliced enemy {id} at ({:.0}, {:.0})", pos.x, pos.y);
                }
                GameEvent::EnemyMissed { id } => {
                    missed += 1;
                    log::debug!("missed enemy {id}, {} lives left", state.lives);
                }
                GameEvent::BombSliced { id, .. } => log::warn!("sliced bomb {id}"),
                GameEvent::GameOver { by_bomb } => {
                    log::info!("session over (by_bomb={by_bomb})")
                }
                _ => {}
            }
        }

        if state.is_ended() {
            break;
        }
    }

    let summary = SessionSummary {
        seed,
        score: state.score,
        lives: state.lives,
        waves: state.sequence_position,
        sliced,
        missed,
        duration_secs: state.time_ticks as f32 * SIM_DT,
        ended_by_bomb: match state.phase {
            GamePhase::Playing => None,
            GamePhase::GameOver { by_bomb } => Some(by_bomb),
        },
    };
    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("summary serialization failed: {e}"),
    }
}

/// Swipe through one falling enemy per frame, if a safe one exists.
///
/// Safe means past its apex, on screen, and with no bomb inside the hit
/// radius of the swipe point: a sloppy swipe that clips a bomb ends the run.
fn autoplay(state: &mut GameState, swoosh_frames: &mut u8) {
    if state.is_ended() {
        return;
    }

    let bombs: Vec<Vec2> = state
        .live_entities()
        .filter(|e| e.kind == EntityKind::Bomb)
        .map(|e| e.pos)
        .collect();

    let target = state
        .live_entities()
        .filter(|e| e.kind == EntityKind::Enemy)
        .filter(|e| e.vel.y < 0.0 && e.pos.y > 100.0)
        .filter(|e| {
            bombs
                .iter()
                .all(|b| b.distance_squared(e.pos) > (2.0 * HIT_RADIUS).powi(2))
        })
        .map(|e| e.pos)
        .next();

    if let Some(pos) = target {
        sim::touch_began(state, pos - Vec2::new(HIT_RADIUS, HIT_RADIUS));
        sim::touch_moved(state, pos);
        sim::touch_ended(state);
        if state.swoosh_active && *swoosh_frames == 0 {
            *swoosh_frames = 2;
        }
    }
}
