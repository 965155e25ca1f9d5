//! Terminal initialization, restoration, and render loop.
//!
//! Provides functions to set up the crossterm backend for ratatui, restore the terminal
//! on exit, and the main render function that draws the TUI layout.

use std::io;

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs};

use crate::app::{AppState, TAB_ORDER, Tab};
use crate::views;

/// Terminal type alias using the crossterm backend over stdout.
pub type Term = Terminal<CrosstermBackend<io::Stdout>>;

/// Window title shown in the tab bar.
pub const APP_TITLE: &str = "Critical Situation App";

/// Switch stdout into raw mode on the alternate screen and wrap it in a [`Term`].
///
/// Pair every successful call with [`restore_terminal`], including on panic.
///
/// # Errors
///
/// Returns the underlying `io::Error` if raw mode or the alternate screen is refused.
pub fn init_terminal() -> io::Result<Term> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

/// Hand the terminal back to the shell: leave raw mode and the alternate screen.
///
/// # Errors
///
/// Returns the underlying `io::Error`; the caller can only report it.
pub fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)
}

/// Render the full TUI layout to the terminal.
///
/// Layout:
/// ```text
/// +-- Critical Situation App --[ New Incident ]--[ Review ]--[ Delete ]--+
/// |                                                                       |
/// |                          Main content area                            |
/// |                                                                       |
/// +-----------------------------------------------------------------------+
/// | Status bar                                                            |
/// +-----------------------------------------------------------------------+
/// ```
/// An open dialog is drawn over the content area.
///
/// # Errors
///
/// Returns `io::Error` if drawing fails.
pub fn render<B: Backend>(terminal: &mut Terminal<B>, state: &AppState) -> io::Result<()> {
    terminal.draw(|frame| {
        let size = frame.area();

        // Split into: tabs bar (3 lines), content area, status bar (1 line).
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .split(size);

        render_tabs(frame, chunks[0], state);
        render_content(frame, chunks[1], state);
        render_status_bar(frame, chunks[2], state);

        if let Some(dialog) = &state.dialog {
            views::dialog::render(frame, chunks[1], dialog);
        }
    })?;
    Ok(())
}

/// Render the tab bar at the top of the screen.
fn render_tabs(frame: &mut ratatui::Frame, area: Rect, state: &AppState) {
    let titles: Vec<Line> = TAB_ORDER
        .iter()
        .enumerate()
        .map(|(i, t)| {
            let style = if *t == state.active_tab {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            Line::from(Span::styled(format!("F{} {}", i + 1, t.label()), style))
        })
        .collect();

    let selected = TAB_ORDER
        .iter()
        .position(|&t| t == state.active_tab)
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(selected)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {APP_TITLE} ")),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_widget(tabs, area);
}

/// Render the main content area based on the active tab.
fn render_content(frame: &mut ratatui::Frame, area: Rect, state: &AppState) {
    match state.active_tab {
        Tab::Form => views::form::render(frame, area, state),
        Tab::Review => views::review::render(frame, area, state),
        Tab::Delete => views::delete::render(frame, area, state),
    }
}

/// Render the status bar at the bottom of the screen.
fn render_status_bar(frame: &mut ratatui::Frame, area: Rect, state: &AppState) {
    let text = format!(
        " {} | {} incidents | F1-F3:tab  F4:ITIL  Enter:select  Ctrl+C:quit",
        state.data_path,
        state.records.len(),
    );

    let paragraph = Paragraph::new(Line::from(Span::styled(
        text,
        Style::default().fg(Color::White).bg(Color::DarkGray),
    )));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use critsit::{IncidentFields, IncidentRecord};
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::app::{Action, Dialog};

    // Terminal init/restore are side-effectful (raw mode, alternate screen), so only
    // the render path is exercised, against a test backend.

    fn test_terminal() -> Terminal<TestBackend> {
        Terminal::new(TestBackend::new(80, 30)).expect("test terminal")
    }

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn records() -> Vec<IncidentRecord> {
        vec![
            IncidentRecord::new(
                0,
                IncidentFields {
                    customer_name: "Acme".into(),
                    contact_number: "555-1234".into(),
                    severity_level: "High".into(),
                    problem_statement: "Server down".into(),
                    solution_action_plan: "Restart service".into(),
                },
            ),
            IncidentRecord::new(
                1,
                IncidentFields {
                    customer_name: "Globex".into(),
                    ..IncidentFields::default()
                },
            ),
        ]
    }

    #[test]
    fn render_every_tab_does_not_panic() {
        let mut terminal = test_terminal();
        for tab in &TAB_ORDER {
            let mut state = AppState::new("blog_data.json".into(), records());
            state.active_tab = *tab;
            render(&mut terminal, &state).expect("draw should not fail");
        }
    }

    #[test]
    fn form_shows_title_labels_and_placeholders() {
        let mut terminal = test_terminal();
        let state = AppState::new("blog_data.json".into(), vec![]);
        render(&mut terminal, &state).expect("draw should not fail");

        let screen = screen_text(&terminal);
        assert!(screen.contains(APP_TITLE), "missing title");
        assert!(screen.contains("Customer Name:"), "missing label");
        assert!(screen.contains("Enter Customer Contact"), "missing placeholder");
    }

    #[test]
    fn review_lists_summaries() {
        let mut terminal = test_terminal();
        let mut state = AppState::new("blog_data.json".into(), records());
        state.active_tab = Tab::Review;
        render(&mut terminal, &state).expect("draw should not fail");

        let screen = screen_text(&terminal);
        assert!(screen.contains("ID: 0 - Acme"), "missing first row");
        assert!(screen.contains("ID: 1 - Globex"), "missing second row");
    }

    #[test]
    fn delete_lists_customers() {
        let mut terminal = test_terminal();
        let mut state = AppState::new("blog_data.json".into(), records());
        state.active_tab = Tab::Delete;
        render(&mut terminal, &state).expect("draw should not fail");

        let screen = screen_text(&terminal);
        assert!(screen.contains("ID: 1 - Customer: Globex"), "missing row");
    }

    fn many_records(n: u64) -> Vec<IncidentRecord> {
        (0..n)
            .map(|i| {
                IncidentRecord::new(
                    i,
                    IncidentFields {
                        customer_name: format!("Cust{i}"),
                        ..IncidentFields::default()
                    },
                )
            })
            .collect()
    }

    fn render_with_cursor_on_last(tab: Tab) -> String {
        let mut terminal = test_terminal();
        let mut state = AppState::new("blog_data.json".into(), many_records(40));
        state.apply_action(Action::SwitchTab(tab));
        for _ in 0..39 {
            state.apply_action(Action::CursorDown);
        }
        render(&mut terminal, &state).expect("draw should not fail");
        screen_text(&terminal)
    }

    #[test]
    fn review_scrolls_to_keep_cursor_visible() {
        let screen = render_with_cursor_on_last(Tab::Review);
        assert!(screen.contains("ID: 39 - Cust39"), "selected row not on screen");
        assert!(!screen.contains("ID: 0 - Cust0"), "list did not scroll");
    }

    #[test]
    fn delete_scrolls_to_keep_cursor_visible() {
        let screen = render_with_cursor_on_last(Tab::Delete);
        assert!(
            screen.contains("ID: 39 - Customer: Cust39"),
            "selected row not on screen"
        );
    }

    #[test]
    fn dialogs_render_over_content() {
        let mut terminal = test_terminal();
        let mut state = AppState::new("blog_data.json".into(), records());

        state.dialog = Some(Dialog::info("Success", "Incident saved!"));
        render(&mut terminal, &state).expect("draw should not fail");
        assert!(screen_text(&terminal).contains("Incident saved!"));

        state.active_tab = Tab::Delete;
        state.dialog = Some(Dialog::ConfirmDelete { id: 1 });
        render(&mut terminal, &state).expect("draw should not fail");
        assert!(screen_text(&terminal).contains("Confirm Delete"));
    }

    #[test]
    fn render_survives_tiny_terminal() {
        let mut terminal = Terminal::new(TestBackend::new(10, 5)).expect("test terminal");
        let mut state = AppState::new("blog_data.json".into(), records());
        state.dialog = Some(Dialog::ConfirmDelete { id: 0 });
        render(&mut terminal, &state).expect("draw should not fail");
    }
}
