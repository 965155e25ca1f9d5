//! critsit interactive TUI console library.
//!
//! This crate provides the core components for the `critsit-console` binary: application
//! state, request dispatch against the incident log, TUI rendering, and view modules.

pub mod app;
pub mod dispatch;
pub mod error;
pub mod tui;
pub mod views;
