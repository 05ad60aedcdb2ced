//! Progress reporting for bin reduction and ranking.
//!
//! Observers are side channels: they are told when work starts, advances by
//! one unit (a bin, or a metric when ranking) and finishes, and never affect
//! the computed values.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use indicatif::{ProgressBar, ProgressStyle};

use crate::consts::PROGRESS_TEMPLATE;

pub trait ProgressObserver: Sync {
    fn start(&self, _total: u64, _message: &str) {}

    fn advance(&self);

    fn finish(&self) {}
}

/// Observer that reports nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl ProgressObserver for Silent {
    fn advance(&self) {}
}

/// Observer counting units of work, safe to share between worker threads.
#[derive(Debug, Default)]
pub struct ProgressCounter {
    total: AtomicU64,
    ticks: AtomicU64,
    finished: AtomicBool,
}

impl ProgressCounter {
    pub fn new() -> Self {
        ProgressCounter::default()
    }

    /// Units of work announced by the last `start`
    pub fn total(&self) -> u64 {
        self.total.load(Ordering::Relaxed)
    }

    /// Units of work completed so far
    pub fn ticks(&self) -> u64 {
        self.ticks.load(Ordering::Relaxed)
    }

    /// Whether `finish` was called since the last `start`
    pub fn is_finished(&self) -> bool {
        self.finished.load(Ordering::Relaxed)
    }
}

impl ProgressObserver for ProgressCounter {
    fn start(&self, total: u64, _message: &str) {
        self.total.store(total, Ordering::Relaxed);
        self.finished.store(false, Ordering::Relaxed);
    }

    fn advance(&self) {
        self.ticks.fetch_add(1, Ordering::Relaxed);
    }

    fn finish(&self) {
        self.finished.store(true, Ordering::Relaxed);
    }
}

impl ProgressObserver for ProgressBar {
    fn start(&self, total: u64, message: &str) {
        self.set_length(total);
        self.set_position(0);
        self.set_message(message.to_string());
    }

    fn advance(&self) {
        self.inc(1);
    }

    fn finish(&self) {
        ProgressBar::finish(self);
    }
}

///
/// A progress bar styled for bin processing. Draws to stderr.
///
pub fn progress_bar() -> ProgressBar {
    let style = ProgressStyle::default_bar()
        .template(PROGRESS_TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_bar());

    let pb = ProgressBar::new(0);
    pb.set_style(style);
    pb
}
