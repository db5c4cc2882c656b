//! Session-scoped delayed transitions.
//!
//! Every mid-game delay (flip-back, countdown tick, playback step, level
//! pause) is an explicit queue entry tagged with the generation of the session
//! that scheduled it. Tearing a session down bumps the generation, so an entry
//! left over from a discarded session is dropped at fire time instead of
//! mutating its successor's state.

use std::time::Instant;

/// Every delayed transition a session can schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    /// Turn a mismatched pair face-down again.
    MemoryFlipBack,
    /// Emit the memory game's completion after the final match is shown.
    MemoryFinish,
    /// One second of the arithmetic countdown.
    MathTick,
    /// Highlight step `i` of the pattern playback.
    PatternShowStep(usize),
    /// Clear the highlight for step `i`.
    PatternHideStep(usize),
    /// Start the next pattern level after the advance pause.
    PatternNextLevel,
}

#[derive(Debug)]
struct TimerEntry {
    due: Instant,
    generation: u64,
    kind: TimerKind,
}

/// Pending timers for the single live session.
#[derive(Debug)]
pub struct TimerQueue {
    generation: u64,
    entries: Vec<TimerEntry>,
}

impl TimerQueue {
    pub fn new() -> Self {
        TimerQueue {
            generation: 0,
            entries: Vec::new(),
        }
    }

    /// The generation entries are currently tagged with.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Invalidate every pending entry. Called on session teardown; stale
    /// entries are discarded the next time they come due.
    pub fn bump(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// Schedule `kind` to fire at `due`, tagged with the live generation.
    pub fn schedule(&mut self, due: Instant, kind: TimerKind) {
        self.entries.push(TimerEntry {
            due,
            generation: self.generation,
            kind,
        });
    }

    /// Pop every entry due at `now`, in due order, paired with its due time.
    /// Entries from a dead generation are silently dropped.
    pub fn fire_due(&mut self, now: Instant) -> Vec<(Instant, TimerKind)> {
        let generation = self.generation;
        self.entries.retain(|entry| {
            if entry.generation != generation {
                tracing::trace!(?entry.kind, "dropping stale timer from discarded session");
                return false;
            }
            true
        });

        let mut fired = Vec::new();
        self.entries.retain(|entry| {
            if entry.due <= now {
                fired.push((entry.due, entry.kind));
                false
            } else {
                true
            }
        });
        fired.sort_by_key(|&(due, _)| due);
        fired
    }

    pub fn pending(&self) -> usize {
        self.entries.len()
    }
}

impl Default for TimerQueue {
    fn default() -> Self {
        TimerQueue::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn fires_due_entries_in_due_order() {
        let start = Instant::now();
        let mut queue = TimerQueue::new();
        queue.schedule(start + Duration::from_millis(300), TimerKind::MemoryFinish);
        queue.schedule(start + Duration::from_millis(100), TimerKind::MathTick);
        queue.schedule(start + Duration::from_millis(900), TimerKind::PatternNextLevel);

        let fired = queue.fire_due(start + Duration::from_millis(500));
        let kinds: Vec<_> = fired.iter().map(|&(_, k)| k).collect();
        assert_eq!(kinds, vec![TimerKind::MathTick, TimerKind::MemoryFinish]);
        assert_eq!(queue.pending(), 1, "the 900ms entry is not due yet");
    }

    #[test]
    fn bumping_the_generation_silences_pending_entries() {
        let start = Instant::now();
        let mut queue = TimerQueue::new();
        queue.schedule(start + Duration::from_millis(100), TimerKind::MemoryFlipBack);
        queue.bump();
        queue.schedule(start + Duration::from_millis(100), TimerKind::MathTick);

        let fired = queue.fire_due(start + Duration::from_secs(1));
        let kinds: Vec<_> = fired.iter().map(|&(_, k)| k).collect();
        assert_eq!(
            kinds,
            vec![TimerKind::MathTick],
            "only the live generation's entry may fire"
        );
        assert_eq!(queue.pending(), 0);
    }
}
