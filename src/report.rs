//! Outcome classification and console reporting.

use crate::github::transport::RawResponse;
use std::io::{self, Write};

/// Status the contents API answers a successful update with.
pub const STATUS_OK: u16 = 200;

/// What the remote said about the update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Updated,
    /// Any non-200 answer: stale sha (409), bad token (401), missing
    /// permission, bad path. The body carries the remote's own reason.
    Rejected { status: u16, body: String },
}

impl Outcome {
    #[must_use]
    pub fn from_response(response: RawResponse) -> Self {
        if response.status == STATUS_OK {
            Outcome::Updated
        } else {
            Outcome::Rejected {
                status: response.status,
                body: response.body,
            }
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Updated)
    }

    /// Process exit code for this outcome.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        if self.is_success() { 0 } else { 1 }
    }
}

/// Print the outcome: a success line, or a failure line followed by the raw
/// response body.
pub fn report(outcome: &Outcome, out: &mut impl Write) -> io::Result<()> {
    match outcome {
        Outcome::Updated => writeln!(out, "File updated successfully!"),
        Outcome::Rejected { status, body } => {
            writeln!(out, "Update failed. Status code: {status}")?;
            writeln!(out, "{body}")
        }
    }
}
