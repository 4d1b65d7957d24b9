//! Console and JSON output.

pub mod console;
pub mod json;
mod shared;

pub use console::{print_breakdown, print_detail, print_messages, print_page, print_stats};
pub use json::{print_json, ClassifyReport, ScoreReport};
