//! Pattern-sequence recall: watch a growing sequence of pad highlights, then
//! reproduce it. One mistake ends the session.

use std::time::{Duration, Instant};

use rand::Rng;

use crate::game_engine::generator::{self, PAD_COUNT};
use crate::game_engine::timer::{TimerKind, TimerQueue};

/// Reward per fully completed level. A failure anywhere during level N pays
/// for the N-1 levels actually cleared.
pub const XP_PER_LEVEL: u32 = 10;
/// Highlight on-time and off-time during playback.
const STEP_MS: u64 = 500;
/// Pause between clearing a level and the next playback.
const ADVANCE_PAUSE: Duration = Duration::from_millis(1000);

/// One play-through of the pattern game.
#[derive(Debug)]
pub struct PatternSession {
    sequence: Vec<u8>,
    input: Vec<u8>,
    completed_levels: u32,
    playing_back: bool,
    active_pad: Option<u8>,
}

impl PatternSession {
    pub fn new<R: Rng>(rng: &mut R, now: Instant, timers: &mut TimerQueue) -> Self {
        let mut session = PatternSession {
            sequence: generator::extend_pattern(&[], rng),
            input: Vec::new(),
            completed_levels: 0,
            playing_back: true,
            active_pad: None,
        };
        session.schedule_playback(now, timers);
        session
    }

    /// Queue the show/hide timer chain for the whole sequence: step `i`
    /// lights up at `(2i+1) * 500ms` and clears at `(2i+2) * 500ms`.
    fn schedule_playback(&self, now: Instant, timers: &mut TimerQueue) {
        for i in 0..self.sequence.len() {
            let on = Duration::from_millis(STEP_MS * (2 * i as u64 + 1));
            let off = Duration::from_millis(STEP_MS * (2 * i as u64 + 2));
            timers.schedule(now + on, TimerKind::PatternShowStep(i));
            timers.schedule(now + off, TimerKind::PatternHideStep(i));
        }
    }

    /// Handle a fired playback or advance timer.
    pub fn on_timer<R: Rng>(
        &mut self,
        kind: TimerKind,
        at: Instant,
        timers: &mut TimerQueue,
        rng: &mut R,
    ) -> Option<u32> {
        match kind {
            TimerKind::PatternShowStep(i) => {
                self.active_pad = self.sequence.get(i).copied();
            }
            TimerKind::PatternHideStep(i) => {
                self.active_pad = None;
                if i + 1 == self.sequence.len() {
                    self.playing_back = false;
                }
            }
            TimerKind::PatternNextLevel => {
                self.sequence = generator::extend_pattern(&self.sequence, rng);
                self.input.clear();
                self.playing_back = true;
                self.schedule_playback(at, timers);
            }
            _ => {}
        }
        None
    }

    /// Press pad `pad` (0..=3). Each press is checked against the sequence
    /// position it lands on; the first mismatch ends the session with the
    /// reward for the levels completed so far. Ignored during playback and
    /// during the advance pause.
    pub fn press_pad(&mut self, pad: u8, now: Instant, timers: &mut TimerQueue) -> Option<u32> {
        if self.playing_back || pad >= PAD_COUNT {
            return None;
        }

        self.input.push(pad);
        let position = self.input.len() - 1;
        if self.sequence[position] != pad {
            return Some(self.completed_levels * XP_PER_LEVEL);
        }

        if self.input.len() == self.sequence.len() {
            self.completed_levels += 1;
            // Input stays disabled until the next playback has run.
            self.playing_back = true;
            timers.schedule(now + ADVANCE_PAUSE, TimerKind::PatternNextLevel);
        }
        None
    }

    pub fn sequence(&self) -> &[u8] {
        &self.sequence
    }

    /// Level currently being played (1-based).
    pub fn level(&self) -> u32 {
        self.completed_levels + 1
    }

    pub fn completed_levels(&self) -> u32 {
        self.completed_levels
    }

    /// Pad currently highlighted by playback, if any.
    pub fn active_pad(&self) -> Option<u8> {
        self.active_pad
    }

    /// True while playback (or the advance pause) has input disabled.
    pub fn is_playing_back(&self) -> bool {
        self.playing_back
    }
}
