//! View model of the games table.
//!
//! `build` turns the visible subsequence into plain rows so the dialog
//! screen only has to lay them out, and tests can check the table without
//! a terminal.

use ratatui::text::Span;
use uuid::Uuid;

use crate::filter::Visible;
use crate::store::GameRecord;
use crate::ui::utils;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyReason {
    /// Nothing has been registered
    NoGames,
    /// Records exist but the filters exclude all of them
    NoMatches,
}

impl EmptyReason {
    pub fn message(self) -> &'static str {
        match self {
            EmptyReason::NoGames => "No games registered yet.",
            EmptyReason::NoMatches => "No games match the current filters.",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameRow {
    /// 1-based rank among the displayed rows
    pub rank: usize,
    pub name: String,
    pub year: String,
    pub platform: String,
    pub genre: String,
    pub progress: u8,
    /// Edit and remove act on this id, never on the row index
    pub id: Uuid,
}

impl GameRow {
    /// Bar and "<n>%" label, green once complete and yellow before
    pub fn progress_spans(&self, width: u16) -> Vec<Span<'static>> {
        utils::progress_spans(self.progress, width)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TableView {
    Empty(EmptyReason),
    Rows(Vec<GameRow>),
}

pub fn build(visible: &Visible<'_>, full: &[GameRecord]) -> TableView {
    if full.is_empty() {
        return TableView::Empty(EmptyReason::NoGames);
    }
    if visible.is_empty() {
        return TableView::Empty(EmptyReason::NoMatches);
    }

    let rows = visible
        .iter()
        .enumerate()
        .map(|(index, record)| GameRow {
            rank: index + 1,
            name: record.name.clone(),
            year: record.year.clone(),
            platform: record.platform.clone(),
            genre: record.genre.clone(),
            progress: record.progress,
            id: record.id,
        })
        .collect();

    TableView::Rows(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::visible;
    use crate::ui::theme;

    fn games() -> Vec<GameRecord> {
        vec![
            GameRecord::new("Zelda", "2017", "Switch", "Adventure", 100),
            GameRecord::new("Halo", "2001", "Xbox", "Shooter", 40),
            GameRecord::new("Zelda II", "1987", "Other", "Adventure", 0),
        ]
    }

    #[test]
    fn test_empty_store_reports_no_games() {
        let full: Vec<GameRecord> = Vec::new();
        let view = build(&visible(&full, "", None), &full);

        assert_eq!(view, TableView::Empty(EmptyReason::NoGames));
        assert_eq!(EmptyReason::NoGames.message(), "No games registered yet.");
    }

    #[test]
    fn test_filters_excluding_everything_report_no_matches() {
        let full = games();
        let view = build(&visible(&full, "mario", None), &full);

        assert_eq!(view, TableView::Empty(EmptyReason::NoMatches));
    }

    #[test]
    fn test_rows_carry_display_rank_and_record_id() {
        let full = games();
        let view = build(&visible(&full, "zelda", None), &full);

        let TableView::Rows(rows) = view else {
            panic!("expected rows");
        };
        assert_eq!(rows.len(), 2);
        assert_eq!((rows[0].rank, rows[0].id), (1, full[0].id));
        // Second displayed row is the third stored record
        assert_eq!((rows[1].rank, rows[1].id), (2, full[2].id));
        assert_eq!(rows[1].name, "Zelda II");
    }

    #[test]
    fn test_row_progress_presentation() {
        let full = games();
        let TableView::Rows(rows) = build(&visible(&full, "", None), &full) else {
            panic!("expected rows");
        };

        let done = rows[0].progress_spans(10);
        assert_eq!(done[2].content, "100%");
        assert_eq!(done[0].style.fg, Some(theme::COLOR_COMPLETE));

        let playing = rows[1].progress_spans(10);
        assert_eq!(playing[0].content, "████░░░░░░");
        assert_eq!(playing[2].content, "40%");
        assert_eq!(playing[2].style.fg, Some(theme::COLOR_IN_PROGRESS));
    }

    #[test]
    fn test_platform_filter_rows() {
        let full = games();
        let TableView::Rows(rows) = build(&visible(&full, "", Some("Xbox")), &full) else {
            panic!("expected rows");
        };

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Halo");
        assert_eq!(rows[0].id, full[1].id);
    }
}
