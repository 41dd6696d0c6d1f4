//! Wave sequencing
//!
//! A session consumes a pre-generated plan of wave patterns: a fixed opening
//! that eases the player in, followed by a long random tail. The plan is
//! append-only and read by a forward-only cursor on the game state; it is
//! sized so no session can run off the end.

use serde::{Deserialize, Serialize};

use super::rng::GameRng;
use crate::consts::SEQUENCE_TAIL_LEN;

/// A wave pattern: how many objects to toss, whether bombs are forced in or
/// out, and whether the spawns are spread over time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SequenceType {
    /// A single object, guaranteed harmless
    OneNoBomb,
    /// A single object, 1-in-7 bomb odds
    One,
    /// Two objects, exactly one of them a bomb
    TwoWithOneBomb,
    Two,
    Three,
    Four,
    /// Five objects spread across the chain delay
    Chain,
    /// Five objects spread across half the chain delay
    FastChain,
}

impl SequenceType {
    /// Patterns eligible for the random tail (everything past the two
    /// single-object warmups).
    const TAIL: [SequenceType; 6] = [
        SequenceType::TwoWithOneBomb,
        SequenceType::Two,
        SequenceType::Three,
        SequenceType::Four,
        SequenceType::Chain,
        SequenceType::FastChain,
    ];
}

/// Generate the session's wave plan: fixed opening, then a uniform random
/// tail over the heavier patterns.
pub fn build_sequence(rng: &mut GameRng) -> Vec<SequenceType> {
    let mut plan = vec![
        SequenceType::OneNoBomb,
        SequenceType::One,
        SequenceType::TwoWithOneBomb,
        SequenceType::Two,
        SequenceType::Three,
        SequenceType::One,
        SequenceType::Chain,
    ];
    plan.reserve(SEQUENCE_TAIL_LEN);
    for _ in 0..SEQUENCE_TAIL_LEN {
        let idx = rng.random_int(0, SequenceType::TAIL.len() as i32 - 1) as usize;
        plan.push(SequenceType::TAIL[idx]);
    }
    plan
}
