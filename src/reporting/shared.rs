pub(crate) const TITLE_WIDTH: usize = 60;
pub(crate) const PREVIEW_WIDTH: usize = 120;
pub(crate) const SHARE_BAR_WIDTH: usize = 40;

/// Cuts `text` to `max` characters, appending `...` when shortened.
pub(crate) fn truncate(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

pub(crate) fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

/// Width of the real share within a bar of `width` cells.
pub(crate) fn share_cells(part: usize, total: usize, width: usize) -> usize {
    if total == 0 {
        return 0;
    }
    ((part * width) + total / 2) / total
}
