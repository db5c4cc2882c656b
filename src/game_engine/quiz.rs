//! Daily AI quiz: a fixed batch of provider questions answered one at a time,
//! with a confirm step and a revealed explanation.

use crate::game_engine::models::QuizQuestion;

/// Reward per correctly answered question.
pub const XP_PER_CORRECT: u32 = 20;

/// One play-through of the daily quiz.
///
/// Constructed from whatever batch the content provider returned. An empty
/// batch (fetch failure) puts the session in a dead-end state where every
/// input is ignored and cancellation is the only way out — it never proceeds
/// with zero questions.
#[derive(Debug)]
pub struct QuizSession {
    questions: Vec<QuizQuestion>,
    index: usize,
    selected: Option<usize>,
    answered: bool,
    score: u32,
}

impl QuizSession {
    pub fn new(questions: Vec<QuizQuestion>) -> Self {
        QuizSession {
            questions,
            index: 0,
            selected: None,
            answered: false,
            score: 0,
        }
    }

    /// True when the provider returned nothing and only cancellation is left.
    pub fn is_unavailable(&self) -> bool {
        self.questions.is_empty()
    }

    /// Pick an option. Non-committal: the selection can change freely until
    /// it is confirmed.
    pub fn select_option(&mut self, option: usize) {
        if self.is_unavailable() || self.answered {
            return;
        }
        if option < self.questions[self.index].options.len() {
            self.selected = Some(option);
        }
    }

    /// Lock in the current selection and score it. A no-op without a
    /// selection; confirming twice has no further effect.
    pub fn confirm_answer(&mut self) {
        if self.is_unavailable() || self.answered {
            return;
        }
        let Some(selected) = self.selected else {
            return;
        };
        if selected == self.questions[self.index].correct_answer {
            self.score += 1;
        }
        self.answered = true;
    }

    /// Move past a confirmed question. On the last question this completes
    /// the session and returns the reward.
    pub fn next_question(&mut self) -> Option<u32> {
        if self.is_unavailable() || !self.answered {
            return None;
        }
        if self.index + 1 < self.questions.len() {
            self.index += 1;
            self.selected = None;
            self.answered = false;
            None
        } else {
            Some(self.score * XP_PER_CORRECT)
        }
    }

    pub fn current_question(&self) -> Option<&QuizQuestion> {
        self.questions.get(self.index)
    }

    /// 1-based position of the current question.
    pub fn question_number(&self) -> usize {
        self.index + 1
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn selected_option(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_answered(&self) -> bool {
        self.answered
    }

    pub fn score(&self) -> u32 {
        self.score
    }
}
