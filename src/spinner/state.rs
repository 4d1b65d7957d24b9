// src/spinner/state.rs
//! Spinner state shared between the worker and the render thread.

use std::sync::{Arc, Mutex};
use std::time::Instant;

pub struct SpinnerState {
    title: String,
    status: String,
    progress: Option<(usize, usize)>,
    start_time: Instant,
    final_success: Option<bool>,
    activity_tick: usize,
}

#[derive(Debug, Clone)]
pub struct Snapshot {
    pub title: String,
    pub status: String,
    pub progress: Option<(usize, usize)>,
    pub start_time: Instant,
    pub activity_tick: usize,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            title: String::new(),
            status: String::new(),
            progress: None,
            start_time: Instant::now(),
            activity_tick: 0,
        }
    }
}

impl SpinnerState {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            status: "Starting...".to_string(),
            progress: None,
            start_time: Instant::now(),
            final_success: None,
            activity_tick: 0,
        }
    }

    pub fn set_status(&mut self, status: String) {
        self.status = status;
        self.progress = None;
        self.activity_tick += 1;
    }

    pub fn step_progress(&mut self, current: usize, total: usize, status: String) {
        self.progress = Some((current, total));
        self.status = status;
        self.activity_tick += 1;
    }

    pub fn set_finished(&mut self, success: bool) {
        self.final_success = Some(success);
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            title: self.title.clone(),
            status: self.status.clone(),
            progress: self.progress,
            start_time: self.start_time,
            activity_tick: self.activity_tick,
        }
    }

    pub fn completion_info(&self) -> (bool, String, Instant) {
        (
            self.final_success.unwrap_or(false),
            self.title.clone(),
            self.start_time,
        )
    }
}

/// Thread-safe handle to `SpinnerState`.
#[derive(Clone)]
pub struct SharedState {
    inner: Arc<Mutex<SpinnerState>>,
}

impl SharedState {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(SpinnerState::new(title))),
        }
    }

    pub fn modify<F>(&self, f: F)
    where
        F: FnOnce(&mut SpinnerState),
    {
        if let Ok(mut guard) = self.inner.lock() {
            f(&mut guard);
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.inner
            .lock()
            .map(|guard| guard.snapshot())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn completion_info(&self) -> (bool, String, Instant) {
        self.inner
            .lock()
            .map(|guard| guard.completion_info())
            .unwrap_or_else(|_| (false, String::new(), Instant::now()))
    }
}
