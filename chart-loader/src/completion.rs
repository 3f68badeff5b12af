use log::debug;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Told once per finished load, successful or not.
pub trait CompletionSink: Send + Sync {
    fn update_done(&self);
}

/// Counts finished loads against the number the caller started, so a page
/// knows when every chart has settled.
pub struct CompletionTracker {
    expected: usize,
    done: AtomicUsize,
}

impl CompletionTracker {
    pub fn new(expected: usize) -> Self {
        Self {
            expected,
            done: AtomicUsize::new(0),
        }
    }

    pub fn expected(&self) -> usize {
        self.expected
    }

    pub fn done_count(&self) -> usize {
        self.done.load(Ordering::SeqCst)
    }

    pub fn remaining(&self) -> usize {
        self.expected.saturating_sub(self.done_count())
    }

    pub fn is_all_done(&self) -> bool {
        self.done_count() >= self.expected
    }
}

impl CompletionSink for CompletionTracker {
    fn update_done(&self) {
        let done = self.done.fetch_add(1, Ordering::SeqCst) + 1;
        debug!("{} of {} loads done", done, self.expected);
    }
}
