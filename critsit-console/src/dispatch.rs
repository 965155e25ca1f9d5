//! Services the requests raised by [`AppState`] against the incident log.
//!
//! The event loop calls [`handle_requests`] once per iteration. Each pending request is
//! performed, its flag cleared, and the record snapshot plus any result dialog updated.
//! Nothing here is fatal. Persistence problems are logged by the incident log and the
//! success dialogs fire regardless of the write outcome. A submit the log refuses keeps
//! the form contents and shows an error dialog instead.

use critsit::{ITIL_URL, IncidentLog};

use crate::app::{AppState, Dialog};

/// Perform pending requests using the system browser for links.
pub fn handle_requests(state: &mut AppState, log: &mut IncidentLog) {
    handle_requests_with(state, log, critsit::open_url);
}

/// Perform pending requests, opening links with `open_link`.
pub fn handle_requests_with<F>(state: &mut AppState, log: &mut IncidentLog, open_link: F)
where
    F: FnOnce(&str) -> Result<(), critsit::Error>,
{
    if state.submit_requested {
        state.submit_requested = false;
        match log.submit(state.form.clone()) {
            Ok(record) => {
                tracing::debug!(id = record.id, "Form submitted");
                state.take_form();
                state.set_records(log.records().to_vec());
                state.dialog = Some(Dialog::info("Success", "Incident saved!"));
            }
            Err(e) => {
                tracing::error!(error = %e, "Incident rejected");
                state.dialog = Some(Dialog::info("Error", e.to_string()));
            }
        }
    }

    if let Some(id) = state.delete_requested.take() {
        match log.delete(id) {
            Ok(_) => {
                state.set_records(log.records().to_vec());
                state.dialog = Some(Dialog::info("Success", "Incident deleted!"));
            }
            Err(e) => tracing::warn!(id, error = %e, "Delete requested for unknown incident"),
        }
    }

    if state.link_requested {
        state.link_requested = false;
        if let Err(e) = open_link(ITIL_URL) {
            tracing::error!(url = ITIL_URL, error = %e, "Error opening URL");
        }
    }
}
