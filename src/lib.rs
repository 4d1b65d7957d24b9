pub mod cli;
pub mod config;
pub mod error;
pub mod exit;
pub mod heuristics;
pub mod ingest;
pub mod logging;
pub mod present;
pub mod reporting;
pub mod session;
pub mod spinner;
pub mod types;
