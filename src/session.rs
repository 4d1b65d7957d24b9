// src/session.rs
//! In-memory state for one user: the latest batch, its validation messages
//! and the page being viewed.

use std::path::Path;

use tracing::{info, warn};

use crate::config::Config;
use crate::heuristics::{Classifier, Jitter, SeededJitter};
use crate::ingest::Ingestor;
use crate::present::{BatchStats, PageWindow, Pager};
use crate::types::{Batch, ClassificationResult, ValidationMessage};

pub struct Session<J: Jitter = SeededJitter> {
    ingestor: Ingestor,
    classifier: Classifier<J>,
    pager: Pager,
    batch: Option<Batch>,
    messages: Vec<ValidationMessage>,
    current_page: usize,
}

impl Session<SeededJitter> {
    /// Session whose jitter is seeded from `config.processing.seed`, or from
    /// the OS when no seed is set.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self::with_jitter(config, SeededJitter::from_seed_option(config.processing.seed))
    }
}

impl<J: Jitter> Session<J> {
    #[must_use]
    pub fn with_jitter(config: &Config, jitter: J) -> Self {
        Self {
            ingestor: Ingestor::new(config.ingest.clone()),
            classifier: Classifier::new(jitter),
            pager: Pager::new(config.presenter.page_size),
            batch: None,
            messages: Vec::new(),
            current_page: 1,
        }
    }

    /// Replaces the current batch with the classification of `content`.
    pub fn upload(&mut self, content: &str) -> &[ValidationMessage] {
        self.upload_with_progress(content, |_| {})
    }

    /// Like `upload`, calling `on_ingested` with the record count after a
    /// successful parse and before classification.
    pub fn upload_with_progress<F>(&mut self, content: &str, on_ingested: F) -> &[ValidationMessage]
    where
        F: FnOnce(usize),
    {
        self.reset();

        let ingested = match self.ingestor.ingest(content) {
            Ok(ingested) => ingested,
            Err(e) => {
                warn!(error = %e, "upload rejected");
                self.messages.push(e.to_message());
                return &self.messages;
            }
        };

        if let Some(warning) = ingested.warning() {
            self.messages.push(warning);
        }

        on_ingested(ingested.records.len());
        let batch = self.classifier.classify_batch(ingested.records);
        info!(records = batch.len(), pages = self.total_pages_for(&batch), "batch ready");
        self.batch = Some(batch);
        &self.messages
    }

    /// Reads `path` and uploads its contents.
    pub fn upload_file<F>(&mut self, path: &Path, on_ingested: F) -> &[ValidationMessage]
    where
        F: FnOnce(usize),
    {
        match self.ingestor.read_file(path) {
            Ok(content) => self.upload_with_progress(&content, on_ingested),
            Err(e) => {
                self.reset();
                warn!(path = %path.display(), error = %e, "upload rejected");
                self.messages.push(e.to_message());
                &self.messages
            }
        }
    }

    fn reset(&mut self) {
        self.batch = None;
        self.messages.clear();
        self.current_page = 1;
    }

    #[must_use]
    pub fn batch(&self) -> Option<&Batch> {
        self.batch.as_ref()
    }

    #[must_use]
    pub fn messages(&self) -> &[ValidationMessage] {
        &self.messages
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.messages.iter().any(ValidationMessage::is_error)
    }

    #[must_use]
    pub fn results(&self) -> &[ClassificationResult] {
        self.batch.as_ref().map(Batch::results).unwrap_or_default()
    }

    #[must_use]
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    #[must_use]
    pub fn total_pages(&self) -> usize {
        self.pager.total_pages(self.results().len())
    }

    fn total_pages_for(&self, batch: &Batch) -> usize {
        self.pager.total_pages(batch.len())
    }

    /// Moves to `page`. Out-of-range requests are rejected and leave the
    /// current page unchanged.
    pub fn go_to_page(&mut self, page: usize) -> bool {
        if !self.pager.contains(page, self.results().len()) {
            warn!(page, total = self.total_pages(), "page out of range");
            return false;
        }
        self.current_page = page;
        true
    }

    pub fn next_page(&mut self) -> bool {
        self.go_to_page(self.current_page + 1)
    }

    pub fn previous_page(&mut self) -> bool {
        match self.current_page.checked_sub(1) {
            Some(page) => self.go_to_page(page),
            None => false,
        }
    }

    #[must_use]
    pub fn current_items(&self) -> &[ClassificationResult] {
        self.pager.page(self.results(), self.current_page)
    }

    #[must_use]
    pub fn window(&self) -> PageWindow {
        self.pager.window(self.current_page, self.results().len())
    }

    #[must_use]
    pub fn stats(&self) -> BatchStats {
        self.batch.as_ref().map(BatchStats::compute).unwrap_or_default()
    }
}
