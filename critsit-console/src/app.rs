//! Application state and input handling for the TUI.
//!
//! Defines the core [`AppState`] struct that holds all mutable UI state, the [`Tab`] and
//! [`FormField`] enums for navigation, the [`Dialog`] overlay, and the [`Action`] enum for
//! user-triggered actions. Key events are mapped to actions via [`handle_key_event`].
//!
//! `AppState` performs no I/O. Actions that need the incident log set a request flag
//! which [`crate::dispatch::handle_requests`] services on the next loop iteration.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use critsit::{IncidentFields, IncidentRecord};

/// Which tab the user is currently viewing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    /// Entry form for a new incident.
    Form,
    /// Read-only list of incidents with a detail dialog.
    Review,
    /// List of incidents with a confirm-to-delete dialog.
    Delete,
}

/// All tabs in display order, used for Tab/Shift-Tab cycling.
pub const TAB_ORDER: [Tab; 3] = [Tab::Form, Tab::Review, Tab::Delete];

impl Tab {
    /// Returns the next tab in the cycle (wraps around).
    fn next(self) -> Tab {
        let idx = TAB_ORDER
            .iter()
            .position(|&t| t == self)
            .unwrap_or_default();
        TAB_ORDER[(idx + 1) % TAB_ORDER.len()]
    }

    /// Returns the previous tab in the cycle (wraps around).
    fn prev(self) -> Tab {
        let idx = TAB_ORDER
            .iter()
            .position(|&t| t == self)
            .unwrap_or_default();
        TAB_ORDER[(idx + TAB_ORDER.len() - 1) % TAB_ORDER.len()]
    }

    /// Returns the tab label for display in the tab bar.
    pub fn label(self) -> &'static str {
        match self {
            Tab::Form => "New Incident",
            Tab::Review => "Review",
            Tab::Delete => "Delete",
        }
    }
}

/// One of the five inputs on the entry form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    CustomerName,
    ContactNumber,
    SeverityLevel,
    ProblemStatement,
    SolutionActionPlan,
}

/// Form inputs in display (and focus) order.
pub const FORM_FIELDS: [FormField; 5] = [
    FormField::CustomerName,
    FormField::ContactNumber,
    FormField::SeverityLevel,
    FormField::ProblemStatement,
    FormField::SolutionActionPlan,
];

impl FormField {
    fn next(self) -> FormField {
        let idx = FORM_FIELDS
            .iter()
            .position(|&f| f == self)
            .unwrap_or_default();
        FORM_FIELDS[(idx + 1) % FORM_FIELDS.len()]
    }

    fn prev(self) -> FormField {
        let idx = FORM_FIELDS
            .iter()
            .position(|&f| f == self)
            .unwrap_or_default();
        FORM_FIELDS[(idx + FORM_FIELDS.len() - 1) % FORM_FIELDS.len()]
    }

    /// Label shown above the input.
    pub fn label(self) -> &'static str {
        match self {
            FormField::CustomerName => "Customer Name:",
            FormField::ContactNumber => "Contact Number:",
            FormField::SeverityLevel => "Severity Level:",
            FormField::ProblemStatement => "Problem Statement:",
            FormField::SolutionActionPlan => "Solution Action Plan:",
        }
    }

    /// Hint shown while the input is empty.
    pub fn placeholder(self) -> &'static str {
        match self {
            FormField::CustomerName => "Enter Customer Name",
            FormField::ContactNumber => "Enter Customer Contact",
            FormField::SeverityLevel => "Enter Severity Level",
            FormField::ProblemStatement => "Enter Problem Statement",
            FormField::SolutionActionPlan => "Enter Solution Action Plan",
        }
    }

    /// The text this input edits.
    pub fn value(self, fields: &IncidentFields) -> &str {
        match self {
            FormField::CustomerName => &fields.customer_name,
            FormField::ContactNumber => &fields.contact_number,
            FormField::SeverityLevel => &fields.severity_level,
            FormField::ProblemStatement => &fields.problem_statement,
            FormField::SolutionActionPlan => &fields.solution_action_plan,
        }
    }

    fn value_mut(self, fields: &mut IncidentFields) -> &mut String {
        match self {
            FormField::CustomerName => &mut fields.customer_name,
            FormField::ContactNumber => &mut fields.contact_number,
            FormField::SeverityLevel => &mut fields.severity_level,
            FormField::ProblemStatement => &mut fields.problem_statement,
            FormField::SolutionActionPlan => &mut fields.solution_action_plan,
        }
    }
}

/// A modal overlay. While one is open it captures all input except Ctrl+C.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dialog {
    /// Informational message dismissed with Enter or Esc.
    Info {
        /// Dialog title.
        title: String,
        /// Dialog body, may span several lines.
        body: String,
    },
    /// Asks whether the incident with `id` should be deleted.
    ConfirmDelete {
        /// Identifier of the incident awaiting confirmation.
        id: u64,
    },
}

impl Dialog {
    /// Convenience constructor for [`Dialog::Info`].
    pub fn info(title: impl Into<String>, body: impl Into<String>) -> Dialog {
        Dialog::Info {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Actions that the UI can trigger in response to input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Quit the application.
    Quit,
    /// Switch to a specific tab.
    SwitchTab(Tab),
    /// Open the ITIL reference page in the browser.
    OpenLink,
    /// Move form focus to the next input.
    FocusNext,
    /// Move form focus to the previous input.
    FocusPrev,
    /// Type a character into the focused input.
    Input(char),
    /// Delete the last character of the focused input.
    Backspace,
    /// Move cursor up in the current list.
    CursorUp,
    /// Move cursor down in the current list.
    CursorDown,
    /// Submit the form, or open the dialog for the selected row.
    Select,
    /// Accept the open dialog.
    Confirm,
    /// Dismiss the open dialog.
    Cancel,
}

/// The full mutable state of the TUI application.
///
/// All rendering reads from this struct; all input handling mutates it.
#[derive(Debug)]
pub struct AppState {
    /// Currently active tab.
    pub active_tab: Tab,
    /// Whether the application should exit.
    pub should_quit: bool,
    /// Data file path for display in the status bar.
    pub data_path: String,
    /// Snapshot of the incident log, refreshed after every mutation.
    pub records: Vec<IncidentRecord>,
    /// Open modal dialog, if any.
    pub dialog: Option<Dialog>,

    // -- Form tab --
    /// Text typed into the form so far.
    pub form: IncidentFields,
    /// Input receiving keystrokes.
    pub focus: FormField,

    // -- Review / Delete tabs --
    /// Selected row on the Review tab.
    pub review_cursor: usize,
    /// Selected row on the Delete tab.
    pub delete_cursor: usize,

    // -- Pending requests, serviced by the dispatcher --
    /// The form should be submitted to the log.
    pub submit_requested: bool,
    /// The incident with this id should be deleted from the log.
    pub delete_requested: Option<u64>,
    /// The ITIL link should be opened.
    pub link_requested: bool,
}

impl AppState {
    /// Create a new `AppState` with default values.
    ///
    /// # Arguments
    ///
    /// * `data_path` - The data file path for status bar display.
    /// * `records` - Initial snapshot of the incident log.
    pub fn new(data_path: String, records: Vec<IncidentRecord>) -> Self {
        Self {
            active_tab: Tab::Form,
            should_quit: false,
            data_path,
            records,
            dialog: None,
            form: IncidentFields::default(),
            focus: FormField::CustomerName,
            review_cursor: 0,
            delete_cursor: 0,
            submit_requested: false,
            delete_requested: None,
            link_requested: false,
        }
    }

    /// Replace the record snapshot, keeping list cursors in bounds.
    pub fn set_records(&mut self, records: Vec<IncidentRecord>) {
        self.records = records;
        let last = self.records.len().saturating_sub(1);
        self.review_cursor = self.review_cursor.min(last);
        self.delete_cursor = self.delete_cursor.min(last);
    }

    /// Take the typed form contents, leaving the form blank with focus on the first input.
    pub fn take_form(&mut self) -> IncidentFields {
        self.focus = FormField::CustomerName;
        std::mem::take(&mut self.form)
    }

    /// Returns a mutable reference to the current tab's cursor, if it has a list.
    fn current_cursor_mut(&mut self) -> Option<&mut usize> {
        match self.active_tab {
            Tab::Form => None,
            Tab::Review => Some(&mut self.review_cursor),
            Tab::Delete => Some(&mut self.delete_cursor),
        }
    }

    /// Apply an [`Action`] to mutate the application state.
    pub fn apply_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::SwitchTab(tab) => self.switch_tab(tab),
            Action::OpenLink => self.link_requested = true,
            Action::FocusNext => self.focus = self.focus.next(),
            Action::FocusPrev => self.focus = self.focus.prev(),
            Action::Input(c) => {
                if self.active_tab == Tab::Form {
                    self.focus.value_mut(&mut self.form).push(c);
                }
            }
            Action::Backspace => {
                if self.active_tab == Tab::Form {
                    self.focus.value_mut(&mut self.form).pop();
                }
            }
            Action::CursorUp => {
                if let Some(cursor) = self.current_cursor_mut() {
                    *cursor = cursor.saturating_sub(1);
                }
            }
            Action::CursorDown => {
                let len = self.records.len();
                if let Some(cursor) = self.current_cursor_mut()
                    && len > 0
                {
                    *cursor = (*cursor + 1).min(len - 1);
                }
            }
            Action::Select => self.select(),
            Action::Confirm => {
                if let Some(Dialog::ConfirmDelete { id }) = self.dialog.take() {
                    self.delete_requested = Some(id);
                }
            }
            Action::Cancel => self.dialog = None,
        }
    }

    /// Switch tabs. The list tabs refuse to open on an empty log and explain why instead.
    fn switch_tab(&mut self, tab: Tab) {
        if self.records.is_empty() {
            match tab {
                Tab::Review => {
                    self.dialog = Some(Dialog::info("No Incidents", "No incidents found."));
                    return;
                }
                Tab::Delete => {
                    self.dialog = Some(Dialog::info("No Incidents", "No incidents to delete."));
                    return;
                }
                Tab::Form => {}
            }
        }
        self.active_tab = tab;
    }

    fn select(&mut self) {
        match self.active_tab {
            Tab::Form => self.submit_requested = true,
            Tab::Review => {
                if let Some(record) = self.records.get(self.review_cursor) {
                    self.dialog = Some(Dialog::info("Incident Details", record.to_string()));
                }
            }
            Tab::Delete => {
                if let Some(record) = self.records.get(self.delete_cursor) {
                    self.dialog = Some(Dialog::ConfirmDelete { id: record.id });
                }
            }
        }
    }
}

/// Map a crossterm [`KeyEvent`] to an [`Action`], if applicable.
///
/// Returns `None` for keys that have no mapped action in the current context.
///
/// # Key Bindings
///
/// | Context         | Key                    | Action                    |
/// |-----------------|------------------------|---------------------------|
/// | anywhere        | `Ctrl+C`               | Quit                      |
/// | confirm dialog  | `y` / `Enter`          | Confirm                   |
/// | confirm dialog  | `n` / `Esc`            | Cancel                    |
/// | info dialog     | `Enter` / `Esc` / `Space` | Cancel (dismiss)       |
/// | no dialog       | `F1`-`F3`              | Switch to tab 1-3         |
/// | no dialog       | `F4`                   | Open ITIL link            |
/// | form            | `Tab` / `Down`         | Next input                |
/// | form            | `Shift+Tab` / `Up`     | Previous input            |
/// | form            | `Enter`                | Submit                    |
/// | form            | `Backspace`            | Delete character          |
/// | form            | `Esc`                  | Quit                      |
/// | form            | any other character    | Type it                   |
/// | lists           | `q` / `Esc`            | Quit                      |
/// | lists           | `1`-`3`                | Switch to tab 1-3         |
/// | lists           | `Tab` / `Shift+Tab`    | Next / previous tab       |
/// | lists           | `j` / `Down`           | Cursor down               |
/// | lists           | `k` / `Up`             | Cursor up                 |
/// | lists           | `Enter`                | Select                    |
/// | lists           | `o`                    | Open ITIL link            |
pub fn handle_key_event(key: KeyEvent, state: &AppState) -> Option<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match &state.dialog {
        Some(Dialog::ConfirmDelete { .. }) => {
            return match key.code {
                KeyCode::Char('y') | KeyCode::Enter => Some(Action::Confirm),
                KeyCode::Char('n') | KeyCode::Esc => Some(Action::Cancel),
                _ => None,
            };
        }
        Some(Dialog::Info { .. }) => {
            return match key.code {
                KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => Some(Action::Cancel),
                _ => None,
            };
        }
        None => {}
    }

    match key.code {
        KeyCode::F(1) => return Some(Action::SwitchTab(Tab::Form)),
        KeyCode::F(2) => return Some(Action::SwitchTab(Tab::Review)),
        KeyCode::F(3) => return Some(Action::SwitchTab(Tab::Delete)),
        KeyCode::F(4) => return Some(Action::OpenLink),
        _ => {}
    }

    match state.active_tab {
        Tab::Form => match key.code {
            KeyCode::Tab | KeyCode::Down => Some(Action::FocusNext),
            KeyCode::BackTab | KeyCode::Up => Some(Action::FocusPrev),
            KeyCode::Enter => Some(Action::Select),
            KeyCode::Backspace => Some(Action::Backspace),
            KeyCode::Esc => Some(Action::Quit),
            KeyCode::Char(c) if !ctrl => Some(Action::Input(c)),
            _ => None,
        },
        Tab::Review | Tab::Delete => match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            KeyCode::Char('1') => Some(Action::SwitchTab(Tab::Form)),
            KeyCode::Char('2') => Some(Action::SwitchTab(Tab::Review)),
            KeyCode::Char('3') => Some(Action::SwitchTab(Tab::Delete)),
            KeyCode::Tab => Some(Action::SwitchTab(state.active_tab.next())),
            KeyCode::BackTab => Some(Action::SwitchTab(state.active_tab.prev())),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::CursorDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::CursorUp),
            KeyCode::Enter => Some(Action::Select),
            KeyCode::Char('o') => Some(Action::OpenLink),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u64, customer: &str) -> IncidentRecord {
        IncidentRecord::new(
            id,
            IncidentFields {
                customer_name: customer.to_string(),
                ..IncidentFields::default()
            },
        )
    }

    fn state_with(records: Vec<IncidentRecord>) -> AppState {
        AppState::new("blog_data.json".into(), records)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    // -- Tab / FormField cycling --

    #[test]
    fn tab_next_and_prev_wrap() {
        assert_eq!(Tab::Form.next(), Tab::Review);
        assert_eq!(Tab::Delete.next(), Tab::Form);
        assert_eq!(Tab::Form.prev(), Tab::Delete);
        assert_eq!(Tab::Review.prev(), Tab::Form);
    }

    #[test]
    fn form_field_focus_wraps() {
        assert_eq!(FormField::SolutionActionPlan.next(), FormField::CustomerName);
        assert_eq!(FormField::CustomerName.prev(), FormField::SolutionActionPlan);
    }

    #[test]
    fn labels_and_placeholders_are_non_empty() {
        for tab in &TAB_ORDER {
            assert!(!tab.label().is_empty());
        }
        for field in &FORM_FIELDS {
            assert!(field.label().ends_with(':'));
            assert!(field.placeholder().starts_with("Enter "));
        }
    }

    // -- AppState construction --

    #[test]
    fn new_app_state_defaults() {
        let state = state_with(vec![]);
        assert_eq!(state.active_tab, Tab::Form);
        assert!(!state.should_quit);
        assert_eq!(state.focus, FormField::CustomerName);
        assert_eq!(state.form, IncidentFields::default());
        assert!(state.dialog.is_none());
        assert!(!state.submit_requested);
        assert!(state.delete_requested.is_none());
        assert!(!state.link_requested);
    }

    // -- Form editing --

    #[test]
    fn typing_fills_focused_field_only() {
        let mut state = state_with(vec![]);
        for c in "Acme".chars() {
            state.apply_action(Action::Input(c));
        }
        state.apply_action(Action::FocusNext);
        for c in "555".chars() {
            state.apply_action(Action::Input(c));
        }
        state.apply_action(Action::Backspace);

        assert_eq!(state.form.customer_name, "Acme");
        assert_eq!(state.form.contact_number, "55");
        assert!(state.form.severity_level.is_empty());
    }

    #[test]
    fn select_on_form_requests_submit() {
        let mut state = state_with(vec![]);
        state.apply_action(Action::Select);
        assert!(state.submit_requested);
    }

    #[test]
    fn take_form_clears_and_refocuses() {
        let mut state = state_with(vec![]);
        state.apply_action(Action::Input('x'));
        state.apply_action(Action::FocusNext);
        let fields = state.take_form();
        assert_eq!(fields.customer_name, "x");
        assert_eq!(state.form, IncidentFields::default());
        assert_eq!(state.focus, FormField::CustomerName);
    }

    // -- Tab switching --

    #[test]
    fn switch_to_review_on_empty_log_shows_dialog_and_stays() {
        let mut state = state_with(vec![]);
        state.apply_action(Action::SwitchTab(Tab::Review));
        assert_eq!(state.active_tab, Tab::Form);
        assert_eq!(
            state.dialog,
            Some(Dialog::info("No Incidents", "No incidents found."))
        );
    }

    #[test]
    fn switch_to_delete_on_empty_log_shows_dialog_and_stays() {
        let mut state = state_with(vec![]);
        state.apply_action(Action::SwitchTab(Tab::Delete));
        assert_eq!(state.active_tab, Tab::Form);
        assert_eq!(
            state.dialog,
            Some(Dialog::info("No Incidents", "No incidents to delete."))
        );
    }

    #[test]
    fn switch_tab_with_records() {
        let mut state = state_with(vec![record(0, "Acme")]);
        state.apply_action(Action::SwitchTab(Tab::Review));
        assert_eq!(state.active_tab, Tab::Review);
        assert!(state.dialog.is_none());
    }

    // -- Review --

    #[test]
    fn select_on_review_opens_detail_dialog() {
        let mut state = state_with(vec![record(0, "a"), record(4, "b")]);
        state.active_tab = Tab::Review;
        state.apply_action(Action::CursorDown);
        state.apply_action(Action::Select);
        match &state.dialog {
            Some(Dialog::Info { title, body }) => {
                assert_eq!(title, "Incident Details");
                assert!(body.starts_with("ID: 4\nCustomer Name: b"), "got: {body}");
            }
            other => panic!("expected detail dialog, got {other:?}"),
        }
    }

    // -- Delete --

    #[test]
    fn delete_flow_confirm_requests_delete() {
        let mut state = state_with(vec![record(0, "a"), record(1, "b")]);
        state.active_tab = Tab::Delete;
        state.apply_action(Action::CursorDown);
        state.apply_action(Action::Select);
        assert_eq!(state.dialog, Some(Dialog::ConfirmDelete { id: 1 }));

        state.apply_action(Action::Confirm);
        assert!(state.dialog.is_none());
        assert_eq!(state.delete_requested, Some(1));
    }

    #[test]
    fn delete_flow_cancel_requests_nothing() {
        let mut state = state_with(vec![record(0, "a")]);
        state.active_tab = Tab::Delete;
        state.apply_action(Action::Select);
        state.apply_action(Action::Cancel);
        assert!(state.dialog.is_none());
        assert!(state.delete_requested.is_none());
    }

    #[test]
    fn confirm_without_confirm_dialog_does_nothing() {
        let mut state = state_with(vec![record(0, "a")]);
        state.dialog = Some(Dialog::info("Success", "Incident saved!"));
        state.apply_action(Action::Confirm);
        assert!(state.delete_requested.is_none());
    }

    // -- Cursor movement --

    #[test]
    fn cursor_moves_within_bounds() {
        let mut state = state_with(vec![record(0, "a"), record(1, "b")]);
        state.active_tab = Tab::Review;
        state.apply_action(Action::CursorUp);
        assert_eq!(state.review_cursor, 0);
        state.apply_action(Action::CursorDown);
        state.apply_action(Action::CursorDown);
        assert_eq!(state.review_cursor, 1);
        assert_eq!(state.delete_cursor, 0);
    }

    #[test]
    fn set_records_clamps_cursors() {
        let mut state = state_with(vec![record(0, "a"), record(1, "b"), record(2, "c")]);
        state.delete_cursor = 2;
        state.review_cursor = 2;
        state.set_records(vec![record(0, "a")]);
        assert_eq!(state.delete_cursor, 0);
        assert_eq!(state.review_cursor, 0);
    }

    // -- Key mapping --

    #[test]
    fn ctrl_c_quits_even_with_dialog_open() {
        let mut state = state_with(vec![]);
        state.dialog = Some(Dialog::ConfirmDelete { id: 0 });
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key_event(ctrl_c, &state), Some(Action::Quit));
    }

    #[test]
    fn characters_on_form_are_input_not_commands() {
        let state = state_with(vec![]);
        assert_eq!(
            handle_key_event(key(KeyCode::Char('q')), &state),
            Some(Action::Input('q'))
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Char('1')), &state),
            Some(Action::Input('1'))
        );
    }

    #[test]
    fn form_navigation_keys() {
        let state = state_with(vec![]);
        assert_eq!(handle_key_event(key(KeyCode::Tab), &state), Some(Action::FocusNext));
        assert_eq!(handle_key_event(key(KeyCode::Up), &state), Some(Action::FocusPrev));
        assert_eq!(handle_key_event(key(KeyCode::Enter), &state), Some(Action::Select));
        assert_eq!(handle_key_event(key(KeyCode::Esc), &state), Some(Action::Quit));
    }

    #[test]
    fn function_keys_switch_tabs_and_open_link() {
        let state = state_with(vec![]);
        assert_eq!(
            handle_key_event(key(KeyCode::F(2)), &state),
            Some(Action::SwitchTab(Tab::Review))
        );
        assert_eq!(handle_key_event(key(KeyCode::F(4)), &state), Some(Action::OpenLink));
    }

    #[test]
    fn list_tab_keys() {
        let mut state = state_with(vec![record(0, "a")]);
        state.active_tab = Tab::Delete;
        assert_eq!(handle_key_event(key(KeyCode::Char('q')), &state), Some(Action::Quit));
        assert_eq!(handle_key_event(key(KeyCode::Char('j')), &state), Some(Action::CursorDown));
        assert_eq!(handle_key_event(key(KeyCode::Char('k')), &state), Some(Action::CursorUp));
        assert_eq!(handle_key_event(key(KeyCode::Char('o')), &state), Some(Action::OpenLink));
        assert_eq!(
            handle_key_event(key(KeyCode::Tab), &state),
            Some(Action::SwitchTab(Tab::Form))
        );
        assert_eq!(handle_key_event(key(KeyCode::Char('x')), &state), None);
    }

    #[test]
    fn confirm_dialog_keys() {
        let mut state = state_with(vec![]);
        state.dialog = Some(Dialog::ConfirmDelete { id: 0 });
        assert_eq!(handle_key_event(key(KeyCode::Char('y')), &state), Some(Action::Confirm));
        assert_eq!(handle_key_event(key(KeyCode::Enter), &state), Some(Action::Confirm));
        assert_eq!(handle_key_event(key(KeyCode::Char('n')), &state), Some(Action::Cancel));
        assert_eq!(handle_key_event(key(KeyCode::Esc), &state), Some(Action::Cancel));
        assert_eq!(handle_key_event(key(KeyCode::F(1)), &state), None);
    }

    #[test]
    fn info_dialog_swallows_typing() {
        let mut state = state_with(vec![]);
        state.dialog = Some(Dialog::info("Success", "Incident saved!"));
        assert_eq!(handle_key_event(key(KeyCode::Char('a')), &state), None);
        assert_eq!(handle_key_event(key(KeyCode::Enter), &state), Some(Action::Cancel));
    }
}
