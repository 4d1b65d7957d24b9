// src/spinner/render.rs
//! Spinner rendering.

use super::state::{SharedState, Snapshot};
use colored::Colorize;
use crossterm::{
    cursor, execute,
    terminal::{self, Clear, ClearType},
};
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

const FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const INTERVAL: u64 = 80;
const BAR_WIDTH: usize = 30;
const LINES: u16 = 2;

pub fn run_loop(running: &Arc<AtomicBool>, state: &SharedState) {
    let mut frame_idx = 0;
    let mut stderr = io::stderr();
    let _ = execute!(stderr, cursor::Hide);

    for _ in 0..LINES {
        let _ = writeln!(stderr);
    }
    let _ = execute!(stderr, cursor::MoveUp(LINES));

    while running.load(Ordering::Relaxed) {
        render_frame(&mut stderr, &state.snapshot(), frame_idx);
        thread::sleep(Duration::from_millis(INTERVAL));
        frame_idx += 1;
    }

    for _ in 0..LINES {
        let _ = execute!(stderr, Clear(ClearType::CurrentLine));
        let _ = writeln!(stderr);
    }
    let _ = execute!(stderr, cursor::MoveUp(LINES), cursor::Show);
    let (success, title, start) = state.completion_info();
    print_final(success, &title, start.elapsed());
}

fn render_frame(out: &mut io::Stderr, snap: &Snapshot, frame_idx: usize) {
    let spinner = FRAMES.get(frame_idx % FRAMES.len()).unwrap_or(&"+");
    let elapsed = snap.start_time.elapsed().as_secs();
    let (term_width, _) = terminal::size().unwrap_or((80, 24));
    let max_w = usize::from(term_width).saturating_sub(1);

    let _ = execute!(out, Clear(ClearType::CurrentLine));
    let _ = writeln!(out, "{} {} ({elapsed}s)", spinner.blue(), snap.title.blue().bold());

    let _ = execute!(out, Clear(ClearType::CurrentLine));
    let _ = writeln!(out, "{}", status_line(snap, max_w));

    let _ = execute!(out, cursor::MoveUp(LINES));
}

fn status_line(snap: &Snapshot, max_w: usize) -> String {
    match snap.progress {
        Some((curr, total)) if total > 0 => {
            let pct = (curr * 100) / total;
            let filled = ((curr * BAR_WIDTH) / total).min(BAR_WIDTH);
            let bar = format!(
                "{}{}",
                "█".repeat(filled).yellow(),
                "░".repeat(BAR_WIDTH - filled).dimmed()
            );
            let status = truncate(&snap.status, max_w.saturating_sub(45).max(10));
            format!("  └─ {bar} {pct:>3}%  {status}")
        }
        _ => {
            let status = truncate(&snap.status, max_w.saturating_sub(8).max(10));
            format!("  └─ {status}")
        }
    }
}

fn truncate(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end = end.saturating_sub(1);
    }
    &s[..end]
}

fn print_final(success: bool, title: &str, duration: Duration) {
    let icon = if success {
        "ok".green().bold()
    } else {
        "err".red().bold()
    };
    let time = format!("({:.1}s)", duration.as_secs_f64()).dimmed();
    eprintln!("{icon} {title} {time}");
}
