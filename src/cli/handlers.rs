// src/cli/handlers.rs
use std::path::Path;
use std::thread;

use anyhow::{anyhow, Result};
use colored::Colorize;
use tracing::debug;

use crate::cli::args::RunArgs;
use crate::config::Config;
use crate::exit::NewsCheckExit;
use crate::heuristics::Classifier;
use crate::present::export;
use crate::reporting::{self, ClassifyReport, ScoreReport};
use crate::session::Session;
use crate::spinner;
use crate::types::ValidationMessage;

/// Loads `newscheck.toml`, applies command-line overrides and validates.
fn load_config(run: &RunArgs) -> Result<Config> {
    let mut config = Config::load();
    run.apply(&mut config);
    config.validate()?;
    debug!(?config, "effective config");
    Ok(config)
}

/// Uploads `file` into `session`, pacing the simulated processing time.
/// The spinner is only drawn when `interactive` is set.
fn process(session: &mut Session, config: &Config, file: &Path, interactive: bool) {
    if !config.processing.simulate_latency {
        session.upload_file(file, |_| {});
        return;
    }

    if !interactive {
        session.upload_file(file, |n| thread::sleep(config.processing_delay(n)));
        return;
    }

    let (client, mut controller) = spinner::start(format!("newscheck {}", file.display()));
    client.set_status("Reading file");
    session.upload_file(file, |n| {
        spinner::pace(&client, config.processing_delay(n), n);
    });
    controller.stop(!session.has_errors());
}

/// Handles the classify command.
///
/// # Errors
/// Returns error if the config is invalid, JSON output fails, or `detail`
/// names an ID that is not in the batch.
pub fn handle_classify(
    file: &Path,
    page: usize,
    detail: Option<usize>,
    json: bool,
    run: &RunArgs,
) -> Result<NewsCheckExit> {
    let config = load_config(run)?;
    let mut session = Session::new(&config);
    process(&mut session, &config, file, !json);

    if session.has_errors() {
        if json {
            reporting::print_json(&ClassifyReport {
                messages: session.messages(),
                stats: session.stats(),
                window: session.window(),
                results: &[],
            })?;
        } else {
            reporting::print_messages(session.messages());
        }
        return Ok(NewsCheckExit::InvalidInput);
    }

    let mut messages = session.messages().to_vec();
    if page != 1 && !session.go_to_page(page) {
        messages.push(ValidationMessage::warning(format!(
            "Page {page} is out of range (1-{}); showing page 1",
            session.total_pages().max(1)
        )));
    }

    if let Some(id) = detail {
        let batch = session.batch().ok_or_else(|| anyhow!("No results available"))?;
        let item = batch
            .get(id)
            .ok_or_else(|| anyhow!("No result with ID {id} (batch has {} results)", batch.len()))?;
        if json {
            reporting::print_json(item)?;
        } else {
            reporting::print_messages(&messages);
            reporting::print_detail(item);
        }
        return Ok(NewsCheckExit::Success);
    }

    if json {
        reporting::print_json(&ClassifyReport {
            messages: &messages,
            stats: session.stats(),
            window: session.window(),
            results: session.current_items(),
        })?;
    } else {
        reporting::print_messages(&messages);
        reporting::print_stats(&session.stats());
        reporting::print_page(session.current_items(), &session.window());
    }
    Ok(NewsCheckExit::Success)
}

/// Handles the export command.
///
/// # Errors
/// Returns error if the config is invalid or the export file cannot be written.
pub fn handle_export(file: &Path, out: Option<&Path>, run: &RunArgs) -> Result<NewsCheckExit> {
    let config = load_config(run)?;
    let mut session = Session::new(&config);
    process(&mut session, &config, file, true);

    reporting::print_messages(session.messages());
    let Some(batch) = session.batch().filter(|_| !session.has_errors()) else {
        return Ok(NewsCheckExit::InvalidInput);
    };

    let target = export::resolve_target(out, &export::todays_file_name());
    export::write(batch, &target, config.presenter.preview_chars)?;
    println!(
        "{} Exported {} results to {}",
        "✓".green().bold(),
        batch.len(),
        target.display()
    );
    Ok(NewsCheckExit::Success)
}

/// Handles the score command.
///
/// # Errors
/// Returns error if JSON output fails.
pub fn handle_score(text: &[String], json: bool, seed: Option<u64>) -> Result<NewsCheckExit> {
    let text = text.join(" ");
    let mut classifier = Classifier::from_seed(seed);
    let verdict = classifier.classify(&text);

    if json {
        reporting::print_json(&ScoreReport {
            text: &text,
            verdict: &verdict,
            net_score: verdict.breakdown.net_score(),
        })?;
    } else {
        reporting::print_breakdown(verdict.label, verdict.confidence, &verdict.breakdown);
    }
    Ok(NewsCheckExit::Success)
}
