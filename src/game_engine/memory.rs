//! Memory-matching session: flip pairs of cards until all 16 are solved.

use std::time::{Duration, Instant};

use rand::Rng;

use crate::game_engine::generator::{self, DECK_SIZE};
use crate::game_engine::models::Symbol;
use crate::game_engine::timer::{TimerKind, TimerQueue};

/// Flat completion reward; move count does not affect it.
pub const COMPLETION_XP: u32 = 50;
/// How long a mismatched pair stays face-up.
const FLIP_BACK_DELAY: Duration = Duration::from_millis(1000);
/// Pause after the final match before completion fires.
const FINISH_DELAY: Duration = Duration::from_millis(800);

/// One play-through of the memory game.
///
/// The deck is shuffled once at construction and immutable afterwards; only
/// the flipped/solved sets and the move counter change.
#[derive(Debug)]
pub struct MemorySession {
    cards: [Symbol; DECK_SIZE],
    flipped: Vec<usize>,
    solved: [bool; DECK_SIZE],
    moves: u32,
    finishing: bool,
}

impl MemorySession {
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        MemorySession {
            cards: generator::memory_deck(rng),
            flipped: Vec::with_capacity(2),
            solved: [false; DECK_SIZE],
            moves: 0,
            finishing: false,
        }
    }

    /// Flip the card at `index` face-up.
    ///
    /// Ignored while a mismatched pair is waiting to flip back, for cards
    /// already face-up or solved, and once the board is complete. When the
    /// flip completes a pair the move counter advances; a match solves both
    /// cards immediately, a mismatch schedules the flip-back delay.
    pub fn flip_card(&mut self, index: usize, now: Instant, timers: &mut TimerQueue) {
        if self.finishing || index >= self.cards.len() {
            return;
        }
        if self.flipped.len() == 2 || self.flipped.contains(&index) || self.solved[index] {
            return;
        }

        self.flipped.push(index);
        if self.flipped.len() < 2 {
            return;
        }

        self.moves += 1;
        let (first, second) = (self.flipped[0], self.flipped[1]);
        if self.cards[first] == self.cards[second] {
            self.solved[first] = true;
            self.solved[second] = true;
            self.flipped.clear();
            if self.solved.iter().all(|&s| s) {
                self.finishing = true;
                timers.schedule(now + FINISH_DELAY, TimerKind::MemoryFinish);
            }
        } else {
            timers.schedule(now + FLIP_BACK_DELAY, TimerKind::MemoryFlipBack);
        }
    }

    /// Handle a fired timer. Returns the completion reward when the session
    /// is over.
    pub fn on_timer(&mut self, kind: TimerKind) -> Option<u32> {
        match kind {
            TimerKind::MemoryFlipBack => {
                self.flipped.clear();
                None
            }
            TimerKind::MemoryFinish => Some(COMPLETION_XP),
            _ => None,
        }
    }

    pub fn cards(&self) -> &[Symbol; DECK_SIZE] {
        &self.cards
    }

    /// Face-up means currently flipped or already solved.
    pub fn is_face_up(&self, index: usize) -> bool {
        self.flipped.contains(&index) || self.solved.get(index).copied().unwrap_or(false)
    }

    pub fn is_solved(&self, index: usize) -> bool {
        self.solved.get(index).copied().unwrap_or(false)
    }

    pub fn flipped_cards(&self) -> &[usize] {
        &self.flipped
    }

    pub fn solved_count(&self) -> usize {
        self.solved.iter().filter(|&&s| s).count()
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }
}
