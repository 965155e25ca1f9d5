//! View modules for each TUI tab plus the dialog overlay.
//!
//! The [`truncate`], [`centered_rect`] and [`cursor_state`] helpers are shared across
//! views.

pub mod delete;
pub mod dialog;
pub mod form;
pub mod review;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::ListState;

/// Truncate a string to a maximum width, appending "..." if truncated.
///
/// Uses character count (not byte length) for correct handling of multi-byte
/// characters.
pub fn truncate(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_width.saturating_sub(3)).collect();
        format!("{truncated}...")
    }
}

/// A rectangle of `percent_x` by `percent_y` of `area`, centred within it.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

/// Selection state for a list of `len` rows with the cursor at `cursor`.
///
/// Nothing is selected when the list is empty.
pub fn cursor_state(cursor: usize, len: usize) -> ListState {
    let selected = (len > 0).then(|| cursor.min(len - 1));
    ListState::default().with_selected(selected)
}

/// Style of the highlighted row in list views.
pub(crate) fn selected_style() -> Style {
    Style::default()
        .bg(Color::DarkGray)
        .add_modifier(Modifier::BOLD)
}
