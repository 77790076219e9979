use std::fmt;

#[cfg(feature = "with-serde")]
use serde::{Deserialize, Serialize};

/// Whether a row is about the mail host itself or about one managed domain.
#[cfg_attr(feature = "with-serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    MailHost,
    Domain,
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MailHost => f.write_str("MAIL_HOST"),
            Self::Domain => f.write_str("DOMAIN"),
        }
    }
}

/// Outcome of one assertion, ordered by severity.
#[cfg_attr(feature = "with-serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Status {
    Ok,
    Warning,
    Error,
}

impl Status {
    /// Most severe status of `statuses`, `Ok` when empty.
    pub fn worst<I>(statuses: I) -> Self
    where
        I: IntoIterator<Item = Status>,
    {
        statuses.into_iter().max().unwrap_or(Status::Ok)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// One DNS assertion: what was expected, what was observed, and the verdict.
#[cfg_attr(feature = "with-serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticRow {
    pub scope: Scope,
    pub subject: String,
    pub record_type: String,
    pub expected_values: Vec<String>,
    pub actual_values: Vec<String>,
    pub status: Status,
    pub message: String,
}

impl DiagnosticRow {
    pub fn new(
        scope: Scope,
        subject: impl Into<String>,
        record_type: impl Into<String>,
        expected_values: Vec<String>,
        actual_values: Vec<String>,
        status: Status,
        message: impl Into<String>,
    ) -> Self {
        Self {
            scope,
            subject: subject.into(),
            record_type: record_type.into(),
            expected_values,
            actual_values,
            status,
            message: message.into(),
        }
    }

    /// `[STATUS ] TYPE subject :: message (expected: ..; actual: ..)`
    pub fn summary_line(&self) -> String {
        format!(
            "[{:<7}] {} {} :: {} (expected: {}; actual: {})",
            self.status,
            self.record_type,
            self.subject,
            self.message,
            join_or_dash(&self.expected_values),
            join_or_dash(&self.actual_values),
        )
    }
}

fn join_or_dash(values: &[String]) -> String {
    if values.is_empty() {
        "-".to_string()
    } else {
        values.join(", ")
    }
}

/// Read-only view of a managed domain for the duration of one run.
#[cfg_attr(feature = "with-serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "with-serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainSnapshot {
    pub name: String,
    pub dkim_enabled: bool,
    pub dkim_selector: String,
}

impl DomainSnapshot {
    pub fn new(
        name: impl Into<String>,
        dkim_enabled: bool,
        dkim_selector: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            dkim_enabled,
            dkim_selector: dkim_selector.into(),
        }
    }

    /// Domain without DKIM signing.
    pub fn without_dkim(name: impl Into<String>) -> Self {
        Self::new(name, false, "")
    }
}
