use ratatui::text::Span;

use super::theme;
use crate::store::MAX_PROGRESS;

const BAR_FILLED: char = '█';
const BAR_EMPTY: char = '░';

/// Proportional text bar for a 0-100 progress value
///
/// The filled share is rounded to the nearest cell, so 100% always fills
/// the bar and 0% leaves it empty.
pub fn progress_bar(progress: u8, width: u16) -> String {
    let width = usize::from(width);
    let progress = usize::from(progress.min(MAX_PROGRESS));
    let filled = (progress * width + 50) / 100;

    let mut bar = String::with_capacity(width * BAR_FILLED.len_utf8());
    bar.extend(std::iter::repeat_n(BAR_FILLED, filled));
    bar.extend(std::iter::repeat_n(BAR_EMPTY, width - filled));
    bar
}

/// Progress rendered as "<n>%"
pub fn fmt_progress(progress: u8) -> String {
    format!("{}%", progress)
}

/// Bar and label colored by completion
pub fn progress_spans(progress: u8, width: u16) -> Vec<Span<'static>> {
    let color = theme::progress_color(progress >= MAX_PROGRESS);
    vec![
        Span::styled(progress_bar(progress, width), color),
        Span::raw(" "),
        Span::styled(fmt_progress(progress), color),
    ]
}
