// src/present/mod.rs
//! Pagination, aggregate statistics and CSV export for a classified batch.

pub mod export;
pub mod pager;
pub mod stats;

pub use pager::{PageWindow, Pager, DEFAULT_PAGE_SIZE};
pub use stats::BatchStats;
