//! Core game engine — content generation, session state machines, and the
//! orchestrator that ties them to cumulative stats.
//!
//! ## Module overview
//!
//! | Module         | Purpose |
//! |----------------|---------|
//! | `models`       | All shared types: game catalog, stats, symbols, quiz/problem structs |
//! | `generator`    | Pure `Rng`-generic content generators (problems, decks, sequences) |
//! | `timer`        | Generation-tagged delayed transitions; stale timers never fire |
//! | `memory`       | Memory-matching session state machine |
//! | `math`         | Timed arithmetic session state machine |
//! | `pattern`      | Sequence-recall session state machine |
//! | `quiz`         | Provider-backed daily quiz session state machine |
//! | `orchestrator` | Single-live-session shell: input routing, timers, stats |

pub mod generator;
pub mod math;
pub mod memory;
pub mod models;
pub mod orchestrator;
pub mod pattern;
pub mod quiz;
pub mod timer;

// Re-export the public API surface so callers can use
// `game_engine::Orchestrator` without reaching into sub-modules.
pub use math::MathSession;
pub use memory::MemorySession;
pub use models::{ArithmeticProblem, GameType, QuizQuestion, Symbol, UserStats};
pub use orchestrator::{GameInput, Orchestrator, Screen, TipState};
pub use pattern::PatternSession;
pub use quiz::QuizSession;
pub use timer::{TimerKind, TimerQueue};
