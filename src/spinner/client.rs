// src/spinner/client.rs
//! Client for sending updates to the spinner.

use super::state::SharedState;

#[derive(Clone)]
pub struct SpinnerClient {
    state: SharedState,
}

impl SpinnerClient {
    #[must_use]
    pub fn new(state: SharedState) -> Self {
        Self { state }
    }

    pub fn set_status(&self, status: impl Into<String>) {
        let s = status.into();
        self.state.modify(|state| state.set_status(s));
    }

    pub fn step_progress(&self, current: usize, total: usize, status: impl Into<String>) {
        let s = status.into();
        self.state.modify(|state| state.step_progress(current, total, s));
    }
}
