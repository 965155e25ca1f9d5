//! Review view: one row per incident, Enter opens the read-only detail dialog.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::{Block, Borders, List, ListItem};

use crate::app::AppState;
use crate::views::{cursor_state, selected_style, truncate};

/// Render the review list into the given area.
///
/// Rows read `ID: <id> - <customer>`. The list scrolls to keep the cursor row visible.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let width = area.width.saturating_sub(2) as usize;

    let items: Vec<ListItem> = if state.records.is_empty() {
        vec![ListItem::new("No incidents found.")]
    } else {
        state
            .records
            .iter()
            .map(|r| ListItem::new(truncate(&r.summary(), width)))
            .collect()
    };

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" Incidents "))
        .highlight_style(selected_style());

    let mut list_state = cursor_state(state.review_cursor, state.records.len());
    frame.render_stateful_widget(list, area, &mut list_state);
}
