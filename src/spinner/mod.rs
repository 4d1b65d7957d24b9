// src/spinner/mod.rs
//! Progress spinner shown while a batch is being "processed".

pub mod client;
pub mod controller;
pub mod render;
pub mod state;

pub use client::SpinnerClient;
pub use controller::SpinnerController;

use state::SharedState;
use std::thread;
use std::time::{Duration, Instant};

/// Upper bound on progress updates per `pace` call.
pub const MAX_PACE_STEPS: usize = 100;

/// Starts the spinner and returns the client (for updates) and controller (for lifecycle).
#[must_use]
pub fn start(title: impl Into<String>) -> (SpinnerClient, SpinnerController) {
    let shared = SharedState::new(title);
    let controller = SpinnerController::spawn(shared.clone());
    (SpinnerClient::new(shared), controller)
}

/// Blocks for `delay`, reporting progress over `records` articles.
///
/// Each step sleeps until its share of a single deadline, so the total wait
/// tracks `delay` however many records there are.
#[allow(clippy::cast_precision_loss)]
pub fn pace(client: &SpinnerClient, delay: Duration, records: usize) {
    let steps = records.clamp(1, MAX_PACE_STEPS);
    let start = Instant::now();
    for i in 1..=steps {
        let target = start + delay.mul_f64(i as f64 / steps as f64);
        thread::sleep(target.saturating_duration_since(Instant::now()));

        let done = records * i / steps;
        client.step_progress(done, records, format!("Analyzing article {done} of {records}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> (SpinnerClient, SharedState) {
        let shared = SharedState::new("test");
        (SpinnerClient::new(shared.clone()), shared)
    }

    #[test]
    fn large_batches_stay_within_delay() {
        let (client, shared) = client();
        let delay = Duration::from_millis(300);
        let started = Instant::now();
        pace(&client, delay, 100_000);
        let elapsed = started.elapsed();
        assert!(elapsed >= delay);
        assert!(elapsed < delay + Duration::from_millis(250), "took {elapsed:?}");
        assert_eq!(shared.snapshot().progress, Some((100_000, 100_000)));
        assert_eq!(shared.snapshot().activity_tick, MAX_PACE_STEPS);
    }

    #[test]
    fn small_batches_step_per_record() {
        let (client, shared) = client();
        pace(&client, Duration::ZERO, 3);
        let snap = shared.snapshot();
        assert_eq!(snap.progress, Some((3, 3)));
        assert_eq!(snap.activity_tick, 3);
        assert_eq!(snap.status, "Analyzing article 3 of 3");
    }

    #[test]
    fn empty_batch_still_finishes() {
        let (client, shared) = client();
        pace(&client, Duration::ZERO, 0);
        assert_eq!(shared.snapshot().progress, Some((0, 0)));
    }
}
