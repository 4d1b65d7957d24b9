//! Console output for classification results.

use colored::{ColoredString, Colorize};

use crate::heuristics::ScoreBreakdown;
use crate::present::export::format_confidence;
use crate::present::{BatchStats, PageWindow};
use crate::reporting::shared::{
    pluralize, share_cells, truncate, PREVIEW_WIDTH, SHARE_BAR_WIDTH, TITLE_WIDTH,
};
use crate::types::{ClassificationResult, ConfidenceTier, Label, Severity, ValidationMessage};

/// Prints validation messages verbatim, errors in red and warnings in yellow.
pub fn print_messages(messages: &[ValidationMessage]) {
    for m in messages {
        let line = format!("{}: {}", m.severity.prefix(), m.message);
        match m.severity {
            Severity::Error => eprintln!("{}", line.red().bold()),
            Severity::Warning => eprintln!("{}", line.yellow()),
        }
    }
}

pub fn print_stats(stats: &BatchStats) {
    println!(
        "{}  {}",
        "Analysis Summary".bold(),
        format!(
            "Processed {} {}",
            stats.total,
            pluralize("article", stats.total)
        )
        .dimmed()
    );
    println!(
        "  {:<12}{:>6}  {}",
        "Real".green(),
        stats.real_count,
        format!("({:.1}%)", stats.real_pct).dimmed()
    );
    println!(
        "  {:<12}{:>6}  {}",
        "Fake".red(),
        stats.fake_count,
        format!("({:.1}%)", stats.fake_pct).dimmed()
    );
    println!("  {:<12}{:>6.1}%", "Confidence", stats.average_pct);

    let real_cells = share_cells(stats.real_count, stats.total, SHARE_BAR_WIDTH);
    let fake_cells = if stats.total == 0 {
        0
    } else {
        SHARE_BAR_WIDTH - real_cells
    };
    println!(
        "  {}{}",
        "█".repeat(real_cells).green(),
        "█".repeat(fake_cells).red()
    );
    println!();
}

/// Prints one page of results followed by the page footer.
pub fn print_page(items: &[ClassificationResult], window: &PageWindow) {
    println!(
        "{}",
        format!(
            "Showing {} to {} of {} articles",
            window.first, window.last, window.total
        )
        .dimmed()
    );
    for item in items {
        print_row(item);
    }
    if window.total_pages > 1 {
        println!(
            "{}",
            format!("Page {} of {}", window.page, window.total_pages).bold()
        );
    }
}

fn print_row(item: &ClassificationResult) {
    println!(
        "  {:>4}  {}  {}",
        format!("#{}", item.id).blue(),
        label_badge(item.label),
        tier_colored(item.tier(), &format_confidence(item.confidence)),
    );
    println!("        {}", truncate(&item.title, TITLE_WIDTH).bold());
    println!("        {}", truncate(&item.body, PREVIEW_WIDTH).dimmed());
}

/// Full view of a single result.
pub fn print_detail(item: &ClassificationResult) {
    println!("{} {}", format!("#{}", item.id).blue(), item.title.bold());
    println!(
        "  {} {}  {}",
        "Prediction:".dimmed(),
        label_badge(item.label),
        tier_colored(item.tier(), &format_confidence(item.confidence)),
    );
    println!(
        "  {} {}  {} {}",
        "Word Count:".dimmed(),
        item.word_count(),
        "Character Count:".dimmed(),
        item.char_count()
    );
    println!();
    println!("{}", item.body);
}

/// Explains how a single text was scored.
pub fn print_breakdown(label: Label, confidence: f64, breakdown: &ScoreBreakdown) {
    println!(
        "{}  {}",
        label_badge(label),
        format_confidence(confidence).bold()
    );
    println!(
        "  {:<12}{:>6.1}",
        "fake score".dimmed(),
        breakdown.fake_score
    );
    println!(
        "  {:<12}{:>6.1}",
        "real score".dimmed(),
        breakdown.real_score
    );
    println!("  {:<12}{:>6}", "words".dimmed(), breakdown.word_count);
    print_hits("fake", &breakdown.fake_hits);
    print_hits("real", &breakdown.real_hits);
    print_hits("sensational", &breakdown.sensational_hits);
    let fired = breakdown.signals.fired();
    if !fired.is_empty() {
        println!("  {} {}", "signals:".dimmed(), fired.join(", "));
    }
}

fn print_hits(name: &str, hits: &[&str]) {
    if hits.is_empty() {
        return;
    }
    println!("  {} {}", format!("{name}:").dimmed(), hits.join(", "));
}

fn label_badge(label: Label) -> ColoredString {
    match label {
        Label::Real => " Real ".black().on_green(),
        Label::Fake => " Fake ".white().on_red(),
    }
}

fn tier_colored(tier: ConfidenceTier, text: &str) -> ColoredString {
    match tier {
        ConfidenceTier::High => text.green(),
        ConfidenceTier::Medium => text.yellow(),
        ConfidenceTier::Low => text.red(),
    }
}
