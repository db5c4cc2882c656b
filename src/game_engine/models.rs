use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Game selection
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameType {
    Memory,
    Math,
    Pattern,
    /// Declared in the catalog but not wired to a game yet.
    Word,
    Daily,
}

impl fmt::Display for GameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GameType::Memory  => "Memory Match",
            GameType::Math    => "Speed Arithmetic",
            GameType::Pattern => "Pattern Recall",
            GameType::Word    => "Word Play",
            GameType::Daily   => "Daily AI Quiz",
        };
        write!(f, "{}", s)
    }
}

// ---------------------------------------------------------------------------
// Cumulative user statistics
// ---------------------------------------------------------------------------

/// Lifetime progress for the current process. Nothing is persisted.
///
/// Invariant: `level == xp / 100 + 1`, maintained by [`UserStats::apply_reward`],
/// the only mutation point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStats {
    pub level: u32,
    pub xp: u32,
    pub streak: u32,
    pub last_played: Option<DateTime<Utc>>,
}

impl UserStats {
    pub fn new() -> Self {
        UserStats {
            level: 1,
            xp: 0,
            streak: 0,
            last_played: None,
        }
    }

    /// Apply a completed session's experience reward.
    pub fn apply_reward(&mut self, reward: u32, now: DateTime<Utc>) {
        self.xp += reward;
        self.level = self.xp / 100 + 1;
        self.streak += 1;
        self.last_played = Some(now);
    }
}

impl Default for UserStats {
    fn default() -> Self {
        UserStats::new()
    }
}

// ---------------------------------------------------------------------------
// Generated content
// ---------------------------------------------------------------------------

/// A memory-card face. Eight symbols, each appearing twice in a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Symbol {
    Apple,
    Banana,
    Grape,
    Cherry,
    Strawberry,
    Peach,
    Kiwi,
    Pineapple,
}

impl Symbol {
    /// The full catalog in canonical order.
    pub const CATALOG: [Symbol; 8] = [
        Symbol::Apple,
        Symbol::Banana,
        Symbol::Grape,
        Symbol::Cherry,
        Symbol::Strawberry,
        Symbol::Peach,
        Symbol::Kiwi,
        Symbol::Pineapple,
    ];
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let glyph = match self {
            Symbol::Apple      => "🍎",
            Symbol::Banana     => "🍌",
            Symbol::Grape      => "🍇",
            Symbol::Cherry     => "🍒",
            Symbol::Strawberry => "🍓",
            Symbol::Peach      => "🍑",
            Symbol::Kiwi       => "🥝",
            Symbol::Pineapple  => "🍍",
        };
        write!(f, "{}", glyph)
    }
}

/// One round of the arithmetic game: a question like `"7 - 12 = ?"` and four
/// distinct answer options, exactly one of which equals `answer`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArithmeticProblem {
    pub question: String,
    pub answer: i32,
    pub options: Vec<i32>,
}

// ---------------------------------------------------------------------------
// Provider-sourced quiz content
// ---------------------------------------------------------------------------

/// One daily-quiz question as delivered by the content provider.
///
/// Field names follow the provider wire contract (`correctAnswer` etc.);
/// consumed read-only by the quiz session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    /// Index into `options`, in `0..=3`.
    pub correct_answer: usize,
    pub explanation: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn level_tracks_xp_in_hundreds() {
        let mut stats = UserStats::new();
        stats.apply_reward(99, Utc::now());
        assert_eq!(stats.level, 1, "99 xp is still level 1");
        stats.apply_reward(1, Utc::now());
        assert_eq!(stats.level, 2, "100 xp reaches level 2");
        stats.apply_reward(150, Utc::now());
        assert_eq!(stats.level, 3, "250 xp reaches level 3");
    }

    #[test]
    fn every_reward_extends_the_streak_and_stamps_last_played() {
        let mut stats = UserStats::new();
        assert!(stats.last_played.is_none());
        stats.apply_reward(0, Utc::now());
        stats.apply_reward(20, Utc::now());
        assert_eq!(stats.streak, 2, "zero-xp completions still count for the streak");
        assert!(stats.last_played.is_some());
    }
}
