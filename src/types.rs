//! Core domain types for critsit.
//!
//! This module defines the incident record as stored on disk, the five free-form fields a
//! user submits, and the default location of the data file.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Data file used when neither `--data` nor `CRITSIT_DATA` is given.
///
/// Relative to the process working directory. The name is kept for compatibility with
/// data files written by earlier releases.
pub const DEFAULT_DATA_FILE: &str = "blog_data.json";

/// The text a user enters for a new incident.
///
/// No field is validated. Empty strings are accepted everywhere, and `severity_level`
/// is free text rather than an enumeration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IncidentFields {
    /// Name of the affected customer.
    pub customer_name: String,
    /// How to reach the customer.
    pub contact_number: String,
    /// Severity as typed by the user (e.g. "High").
    pub severity_level: String,
    /// What went wrong.
    pub problem_statement: String,
    /// What will be done about it.
    pub solution_action_plan: String,
}

/// A persisted incident with its store-assigned identifier.
///
/// Records are immutable once appended. The serialized form is a JSON object with exactly
/// six keys: `ID`, `CustomerName`, `ContactNumber`, `SeverityLevel`, `ProblemStatement`
/// and `SolutionActionPlan`. On read, missing text keys default to the empty string and
/// unknown keys are ignored; `ID` is required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct IncidentRecord {
    /// Store-assigned identifier, unique within the store.
    #[serde(rename = "ID")]
    pub id: u64,
    /// Name of the affected customer.
    #[serde(default)]
    pub customer_name: String,
    /// How to reach the customer.
    #[serde(default)]
    pub contact_number: String,
    /// Severity as typed by the user.
    #[serde(default)]
    pub severity_level: String,
    /// What went wrong.
    #[serde(default)]
    pub problem_statement: String,
    /// What will be done about it.
    #[serde(default)]
    pub solution_action_plan: String,
}

impl IncidentRecord {
    /// Build a record from submitted fields and an assigned identifier.
    pub fn new(id: u64, fields: IncidentFields) -> Self {
        Self {
            id,
            customer_name: fields.customer_name,
            contact_number: fields.contact_number,
            severity_level: fields.severity_level,
            problem_statement: fields.problem_statement,
            solution_action_plan: fields.solution_action_plan,
        }
    }

    /// One-line label used by review listings: `ID: 0 - Acme`.
    pub fn summary(&self) -> String {
        format!("ID: {} - {}", self.id, self.customer_name)
    }
}

/// Multi-line detail block, one labelled line per field.
impl fmt::Display for IncidentRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}\nCustomer Name: {}\nContact Number: {}\nSeverity Level: {}\n\
             Problem Statement: {}\nSolution Action Plan: {}",
            self.id,
            self.customer_name,
            self.contact_number,
            self.severity_level,
            self.problem_statement,
            self.solution_action_plan,
        )
    }
}
