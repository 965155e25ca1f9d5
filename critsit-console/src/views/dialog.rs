//! Modal dialog overlay drawn on top of the active tab.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::app::Dialog;
use crate::views::centered_rect;

/// Render `dialog` centred in `area`, clearing whatever is underneath.
pub fn render(frame: &mut Frame, area: Rect, dialog: &Dialog) {
    let (title, body, hint) = match dialog {
        Dialog::Info { title, body } => (title.as_str(), body.clone(), "[Enter] OK"),
        Dialog::ConfirmDelete { id } => (
            "Confirm Delete",
            format!("Are you sure you want to delete this incident?\n\nID: {id}"),
            "[y] Delete   [n] Cancel",
        ),
    };

    let popup = centered_rect(60, 50, area);

    let mut text = Text::raw(body);
    text.push_line(Line::default());
    text.push_line(Line::from(Span::styled(
        hint,
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )));

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {title} ")),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(Clear, popup);
    frame.render_widget(paragraph, popup);
}
