//! App shell: owns the cumulative stats, the active screen, the single live
//! session, and the timer queue, and routes inputs and fired timers to
//! whichever game is running.

use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;
use std::time::Instant;

use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::game_engine::math::MathSession;
use crate::game_engine::memory::MemorySession;
use crate::game_engine::models::{GameType, UserStats};
use crate::game_engine::pattern::PatternSession;
use crate::game_engine::quiz::QuizSession;
use crate::game_engine::timer::TimerQueue;
use crate::provider::ContentProvider;

/// Which screen the shell should render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Dashboard,
    Game(GameType),
}

/// Player inputs, routed to the live session. Inputs aimed at a game that is
/// not running are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    /// Memory: flip the card at this index.
    FlipCard(usize),
    /// Math: submit this value for the current problem.
    AnswerMath(i32),
    /// Pattern: press pad 0..=3.
    PressPad(u8),
    /// Quiz: pick (or change) an option.
    SelectOption(usize),
    /// Quiz: lock in the selection and reveal the answer.
    ConfirmAnswer,
    /// Quiz: advance past a confirmed question.
    NextQuestion,
}

/// The startup brain-tip fetch, fire-and-forget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TipState {
    Loading,
    Ready(String),
}

enum ActiveSession {
    Memory(MemorySession),
    Math(MathSession),
    Pattern(PatternSession),
    Quiz(QuizSession),
}

/// The session orchestrator. Exactly one session is alive at a time; starting
/// a new game discards any prior session and invalidates its pending timers.
pub struct Orchestrator {
    stats: UserStats,
    screen: Screen,
    session: Option<ActiveSession>,
    timers: TimerQueue,
    rng: StdRng,
    provider: Arc<dyn ContentProvider>,
    tip: TipState,
    tip_rx: Option<Receiver<String>>,
}

impl Orchestrator {
    pub fn new(provider: Arc<dyn ContentProvider>) -> Self {
        Self::with_rng(provider, StdRng::from_entropy())
    }

    /// Construct with a caller-supplied RNG; seed it for reproducible games.
    pub fn with_rng(provider: Arc<dyn ContentProvider>, rng: StdRng) -> Self {
        // Kick off the daily tip in the background. If the orchestrator is
        // dropped before it resolves, the send fails and the result is
        // discarded rather than applied to stale state.
        let (tx, rx) = mpsc::channel();
        let tip_provider = Arc::clone(&provider);
        thread::spawn(move || {
            let _ = tx.send(tip_provider.fetch_brain_tip());
        });

        Orchestrator {
            stats: UserStats::new(),
            screen: Screen::Dashboard,
            session: None,
            timers: TimerQueue::new(),
            rng,
            provider,
            tip: TipState::Loading,
            tip_rx: Some(rx),
        }
    }

    /// Start a game, discarding any session already running. Returns whether
    /// a session actually started; [`GameType::Word`] has no game behind it.
    ///
    /// Starting the daily quiz blocks on the one-shot provider fetch; an
    /// empty batch still starts the session, in its cancel-only state.
    pub fn start_game(&mut self, kind: GameType, now: Instant) -> bool {
        self.teardown();
        let session = match kind {
            GameType::Memory => ActiveSession::Memory(MemorySession::new(&mut self.rng)),
            GameType::Math => {
                ActiveSession::Math(MathSession::new(&mut self.rng, now, &mut self.timers))
            }
            GameType::Pattern => {
                ActiveSession::Pattern(PatternSession::new(&mut self.rng, now, &mut self.timers))
            }
            GameType::Daily => {
                ActiveSession::Quiz(QuizSession::new(self.provider.fetch_daily_quiz()))
            }
            GameType::Word => {
                tracing::debug!("word game is declared but not wired up");
                return false;
            }
        };
        self.session = Some(session);
        self.screen = Screen::Game(kind);
        tracing::debug!(game = %kind, "session started");
        true
    }

    /// Abandon the live session and return to the dashboard. No stat change.
    pub fn cancel(&mut self) {
        self.teardown();
    }

    /// Route one player input to the live session.
    pub fn handle_input(&mut self, input: GameInput, now: Instant) {
        let outcome = match (&mut self.session, input) {
            (Some(ActiveSession::Memory(s)), GameInput::FlipCard(index)) => {
                s.flip_card(index, now, &mut self.timers);
                None
            }
            (Some(ActiveSession::Math(s)), GameInput::AnswerMath(value)) => {
                s.answer(value, &mut self.rng);
                None
            }
            (Some(ActiveSession::Pattern(s)), GameInput::PressPad(pad)) => {
                s.press_pad(pad, now, &mut self.timers)
            }
            (Some(ActiveSession::Quiz(s)), GameInput::SelectOption(option)) => {
                s.select_option(option);
                None
            }
            (Some(ActiveSession::Quiz(s)), GameInput::ConfirmAnswer) => {
                s.confirm_answer();
                None
            }
            (Some(ActiveSession::Quiz(s)), GameInput::NextQuestion) => s.next_question(),
            _ => None,
        };
        if let Some(reward) = outcome {
            self.complete_session(reward);
        }
    }

    /// Advance the engine clock: poll the tip fetch and fire every timer due
    /// at `now` into the live session, applying a completion if one results.
    ///
    /// Repeating timers (the math tick) reschedule relative to their own due
    /// time, so a single large jump of `now` still plays out every tick in
    /// between.
    pub fn advance(&mut self, now: Instant) {
        self.poll_tip();
        loop {
            let fired = self.timers.fire_due(now);
            if fired.is_empty() {
                return;
            }
            for (at, kind) in fired {
                let outcome = match &mut self.session {
                    Some(ActiveSession::Memory(s)) => s.on_timer(kind),
                    Some(ActiveSession::Math(s)) => s.on_timer(kind, at, &mut self.timers),
                    Some(ActiveSession::Pattern(s)) => {
                        s.on_timer(kind, at, &mut self.timers, &mut self.rng)
                    }
                    _ => None,
                };
                if let Some(reward) = outcome {
                    self.complete_session(reward);
                    return;
                }
            }
        }
    }

    fn complete_session(&mut self, reward: u32) {
        self.stats.apply_reward(reward, Utc::now());
        tracing::debug!(
            reward,
            xp = self.stats.xp,
            level = self.stats.level,
            "session complete"
        );
        self.teardown();
    }

    fn teardown(&mut self) {
        if self.session.take().is_some() {
            tracing::debug!("session discarded");
        }
        self.timers.bump();
        self.screen = Screen::Dashboard;
    }

    fn poll_tip(&mut self) {
        let Some(rx) = &self.tip_rx else { return };
        match rx.try_recv() {
            Ok(tip) => {
                self.tip = TipState::Ready(tip);
                self.tip_rx = None;
            }
            Err(TryRecvError::Disconnected) => {
                self.tip_rx = None;
            }
            Err(TryRecvError::Empty) => {}
        }
    }

    pub fn stats(&self) -> &UserStats {
        &self.stats
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn tip(&self) -> &TipState {
        &self.tip
    }

    pub fn memory(&self) -> Option<&MemorySession> {
        match &self.session {
            Some(ActiveSession::Memory(s)) => Some(s),
            _ => None,
        }
    }

    pub fn math(&self) -> Option<&MathSession> {
        match &self.session {
            Some(ActiveSession::Math(s)) => Some(s),
            _ => None,
        }
    }

    pub fn pattern(&self) -> Option<&PatternSession> {
        match &self.session {
            Some(ActiveSession::Pattern(s)) => Some(s),
            _ => None,
        }
    }

    pub fn quiz(&self) -> Option<&QuizSession> {
        match &self.session {
            Some(ActiveSession::Quiz(s)) => Some(s),
            _ => None,
        }
    }
}
