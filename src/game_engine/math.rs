//! Arithmetic speed quiz: answer as many problems as possible before the
//! countdown runs out.

use std::time::{Duration, Instant};

use rand::Rng;

use crate::game_engine::generator;
use crate::game_engine::models::ArithmeticProblem;
use crate::game_engine::timer::{TimerKind, TimerQueue};

/// Reward per correctly answered problem.
pub const XP_PER_CORRECT: u32 = 5;
/// Countdown length in seconds.
pub const ROUND_SECONDS: u32 = 30;
/// Seconds deducted for a wrong answer, floored at zero.
const WRONG_ANSWER_PENALTY: u32 = 2;
const TICK: Duration = Duration::from_secs(1);

/// One timed play-through of the arithmetic game.
#[derive(Debug)]
pub struct MathSession {
    problem: ArithmeticProblem,
    score: u32,
    time_left: u32,
    over: bool,
}

impl MathSession {
    pub fn new<R: Rng>(rng: &mut R, now: Instant, timers: &mut TimerQueue) -> Self {
        timers.schedule(now + TICK, TimerKind::MathTick);
        MathSession {
            problem: generator::arithmetic_problem(rng),
            score: 0,
            time_left: ROUND_SECONDS,
            over: false,
        }
    }

    /// Submit an answer for the current problem.
    ///
    /// A correct answer scores and immediately moves to a fresh problem; a
    /// wrong answer costs time and leaves the same problem up for a retry.
    pub fn answer<R: Rng>(&mut self, value: i32, rng: &mut R) {
        if self.over {
            return;
        }
        if value == self.problem.answer {
            self.score += 1;
            self.problem = generator::arithmetic_problem(rng);
        } else {
            self.time_left = self.time_left.saturating_sub(WRONG_ANSWER_PENALTY);
        }
    }

    /// Advance the countdown by one tick. Returns the completion reward when
    /// the timer is exhausted.
    ///
    /// The wrong-answer penalty can floor the clock at zero, but the session
    /// only ends on the tick that observes it.
    pub fn on_timer(&mut self, kind: TimerKind, at: Instant, timers: &mut TimerQueue) -> Option<u32> {
        if kind != TimerKind::MathTick || self.over {
            return None;
        }
        if self.time_left <= 1 {
            self.time_left = 0;
            self.over = true;
            return Some(self.score * XP_PER_CORRECT);
        }
        self.time_left -= 1;
        timers.schedule(at + TICK, TimerKind::MathTick);
        None
    }

    pub fn problem(&self) -> &ArithmeticProblem {
        &self.problem
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }
}
