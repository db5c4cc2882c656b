//! # brain_garden
//!
//! The engine of a small cognitive-training app: four mini-games, cumulative
//! level/xp/streak stats, and an AI-generated daily quiz.
//!
//! This crate is the UI-agnostic core. Each game is an explicit session state
//! machine driven by value-typed inputs and an explicit clock; a shell renders
//! whatever the accessors expose and feeds inputs back in.
//!
//! ## How it works
//!
//! 1. Create an [`Orchestrator`] with a [`ContentProvider`] (usually
//!    [`GeminiProvider::from_env`]). The daily brain tip starts fetching in
//!    the background immediately.
//! 2. Call [`Orchestrator::start_game`] to begin a session. Player actions go
//!    through [`Orchestrator::handle_input`]; the clock moves through
//!    [`Orchestrator::advance`], which fires any due flip-back, countdown, or
//!    playback timers.
//! 3. When a session completes, its experience reward lands on
//!    [`UserStats`] (level = xp / 100 + 1, streak + 1) and the shell is back
//!    on the dashboard. Cancelling discards the session with no stat change.
//!
//! ## Key features
//!
//! - **Explicit time**: every entry point takes an `Instant`, so tests drive
//!   a 30-second countdown in microseconds.
//! - **Session-scoped timers**: delayed transitions are tagged with a session
//!   generation; a timer left over from a discarded session can never mutate
//!   its successor.
//! - **Fail-soft provider**: transport errors, malformed JSON, and schema
//!   violations degrade to an empty quiz batch or a fallback tip — the game
//!   layer never sees an error.
//!
//! ## Quick start
//!
//! ```rust
//! use std::sync::Arc;
//! use std::time::{Duration, Instant};
//! use brain_garden::{GameInput, GameType, GeminiProvider, Orchestrator, Screen};
//!
//! let mut app = Orchestrator::new(Arc::new(GeminiProvider::from_env()));
//! let start = Instant::now();
//!
//! app.start_game(GameType::Math, start);
//! if let Some(correct) = app.math().map(|m| m.problem().answer) {
//!     app.handle_input(GameInput::AnswerMath(correct), start);
//! }
//!
//! // Let the 30-second countdown run out; the reward lands on the stats.
//! app.advance(start + Duration::from_secs(30));
//! assert_eq!(app.stats().xp, 5);
//! assert_eq!(app.screen(), Screen::Dashboard);
//! ```

pub mod game_engine;
pub mod provider;

// Convenience re-exports so callers can use `brain_garden::Orchestrator`
// directly without reaching into `game_engine::`.
pub use game_engine::{
    ArithmeticProblem, GameInput, GameType, MathSession, MemorySession, Orchestrator,
    PatternSession, QuizQuestion, QuizSession, Screen, Symbol, TipState, UserStats,
};
pub use provider::{ContentProvider, GeminiProvider, ProviderConfig, ProviderError, FALLBACK_TIP};
