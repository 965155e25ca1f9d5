//! Entry form view: five labelled inputs and a submit hint.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::{AppState, FORM_FIELDS};

/// Render the form into the given area.
///
/// Each input is a bordered box titled with its label. Empty inputs show their
/// placeholder in gray. The focused input has a yellow border and a trailing cursor.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut constraints: Vec<Constraint> =
        FORM_FIELDS.iter().map(|_| Constraint::Length(3)).collect();
    constraints.push(Constraint::Min(1));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (field, chunk) in FORM_FIELDS.iter().zip(chunks.iter()) {
        let focused = *field == state.focus;
        let value = field.value(&state.form);

        let line = if value.is_empty() && !focused {
            Line::from(Span::styled(
                field.placeholder(),
                Style::default().fg(Color::DarkGray),
            ))
        } else if focused {
            Line::from(vec![
                Span::raw(value.to_string()),
                Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
            ])
        } else {
            Line::from(value.to_string())
        };

        let border = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };

        let input = Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title(field.label()),
        );
        frame.render_widget(input, *chunk);
    }

    let hint = Paragraph::new(Line::from(Span::styled(
        " Enter: Submit   Tab/Up/Down: move between fields",
        Style::default().fg(Color::Gray),
    )));
    frame.render_widget(hint, chunks[FORM_FIELDS.len()]);
}
