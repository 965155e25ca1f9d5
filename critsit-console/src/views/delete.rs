//! Delete view: incidents with their customer; Enter asks for confirmation before deleting.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::{Block, Borders, List, ListItem};

use crate::app::AppState;
use crate::views::{cursor_state, selected_style, truncate};

/// Label of one row in the delete list.
pub fn row_label(id: u64, customer: &str) -> String {
    format!("ID: {id} - Customer: {customer}")
}

/// Render the delete list into the given area.
///
/// The list scrolls to keep the cursor row visible.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let width = area.width.saturating_sub(2) as usize;

    let items: Vec<ListItem> = if state.records.is_empty() {
        vec![ListItem::new("No incidents to delete.")]
    } else {
        state
            .records
            .iter()
            .map(|r| ListItem::new(truncate(&row_label(r.id, &r.customer_name), width)))
            .collect()
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Delete Incidents (Enter to delete) "),
        )
        .highlight_style(selected_style());

    let mut list_state = cursor_state(state.delete_cursor, state.records.len());
    frame.render_stateful_widget(list, area, &mut list_state);
}
