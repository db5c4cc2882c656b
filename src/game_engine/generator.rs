//! Pure content generators. Everything here is `Rng`-generic and side-effect
//! free; the session state machines consume the output.

use rand::Rng;

use crate::game_engine::models::{ArithmeticProblem, Symbol};

/// Operands are drawn uniformly from `1..=OPERAND_MAX`.
const OPERAND_MAX: i32 = 15;
/// Distractors land within `answer ± DISTRACTOR_WINDOW`.
const DISTRACTOR_WINDOW: i32 = 5;
/// Fallback window once `DISTRACTOR_ATTEMPTS` draws failed to fill the set.
const WIDE_DISTRACTOR_WINDOW: i32 = 15;
/// Draws per window before giving up on randomness for that window.
const DISTRACTOR_ATTEMPTS: u32 = 64;

/// Number of cards in a memory deck: each catalog symbol twice.
pub const DECK_SIZE: usize = Symbol::CATALOG.len() * 2;
/// Pattern steps index one of four pads.
pub const PAD_COUNT: u8 = 4;

/// Generate one arithmetic round: two operands in `1..=15`, `+` or `-` picked
/// uniformly (subtraction may go negative), and four distinct answer options
/// in random order, one of them correct.
///
/// Distractor collection is bounded: after 64 draws in the `±5` window it
/// widens to `±15`, and after 64 more it completes the set with the nearest
/// unused integers. A degenerate RNG therefore cannot loop forever, and any
/// non-degenerate RNG never leaves the `±5` window.
pub fn arithmetic_problem<R: Rng>(rng: &mut R) -> ArithmeticProblem {
    let a = rng.gen_range(1..=OPERAND_MAX);
    let b = rng.gen_range(1..=OPERAND_MAX);
    let (op, answer) = if rng.gen_bool(0.5) {
        ('+', a + b)
    } else {
        ('-', a - b)
    };

    let mut options = vec![answer];
    collect_distractors(rng, answer, DISTRACTOR_WINDOW, &mut options);
    if options.len() < 4 {
        collect_distractors(rng, answer, WIDE_DISTRACTOR_WINDOW, &mut options);
    }
    let mut delta = 1;
    while options.len() < 4 {
        if !options.contains(&(answer + delta)) {
            options.push(answer + delta);
        }
        delta += 1;
    }
    shuffle(rng, &mut options);

    ArithmeticProblem {
        question: format!("{} {} {} = ?", a, op, b),
        answer,
        options,
    }
}

fn collect_distractors<R: Rng>(rng: &mut R, answer: i32, window: i32, options: &mut Vec<i32>) {
    for _ in 0..DISTRACTOR_ATTEMPTS {
        if options.len() == 4 {
            return;
        }
        let candidate = answer + rng.gen_range(-window..=window);
        if !options.contains(&candidate) {
            options.push(candidate);
        }
    }
}

/// Build a shuffled memory deck: each of the 8 symbols exactly twice.
pub fn memory_deck<R: Rng>(rng: &mut R) -> [Symbol; DECK_SIZE] {
    let mut cards = [Symbol::Apple; DECK_SIZE];
    for (i, &symbol) in Symbol::CATALOG.iter().enumerate() {
        cards[i * 2] = symbol;
        cards[i * 2 + 1] = symbol;
    }
    shuffle(rng, &mut cards);
    cards
}

/// Return `sequence` with one uniform step in `0..4` appended. The input is
/// never mutated; callers keep every prior level's sequence as a prefix.
pub fn extend_pattern<R: Rng>(sequence: &[u8], rng: &mut R) -> Vec<u8> {
    let mut next = sequence.to_vec();
    next.push(rng.gen_range(0..PAD_COUNT));
    next
}

// Fisher-Yates shuffle
fn shuffle<T, R: Rng>(rng: &mut R, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}
