// src/spinner/controller.rs
//! Owns the render thread and stops it.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use super::render;
use super::state::SharedState;

pub struct SpinnerController {
    worker: Option<JoinHandle<()>>,
    running: Arc<AtomicBool>,
    state: SharedState,
}

impl SpinnerController {
    /// Spawns the render loop over `state`.
    #[must_use]
    pub fn spawn(state: SharedState) -> Self {
        let running = Arc::new(AtomicBool::new(true));
        let worker = {
            let running = Arc::clone(&running);
            let state = state.clone();
            thread::spawn(move || render::run_loop(&running, &state))
        };
        Self {
            worker: Some(worker),
            running,
            state,
        }
    }

    /// Records the outcome and waits for the final line to be drawn.
    pub fn stop(&mut self, success: bool) {
        self.state.modify(|state| state.set_finished(success));
        self.running.store(false, Ordering::Relaxed);
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

impl Drop for SpinnerController {
    fn drop(&mut self) {
        if self.worker.is_some() {
            self.stop(false);
        }
    }
}
