//! Submission error taxonomy shared by every tool screen.
//!
//! Four terminal outcomes exist for a submission attempt. Two are
//! client-side preconditions that never reach the network (`NotSignedIn`,
//! `Validation`); two classify a completed HTTP exchange
//! (`InsufficientCredits`, `RequestFailed`). Classification is a pure
//! function of the status code plus an optional server-supplied message so
//! it can be unit tested without a browser.

use thiserror::Error;

/// Terminal outcome of one tool submission. Displayed inline next to the
/// triggering input; never retried automatically.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolError {
    /// No identity present; the screen supplies its own call-to-action text.
    #[error("{0}")]
    NotSignedIn(String),

    /// Primary field empty/invalid after trimming; no request was issued.
    #[error("{0}")]
    Validation(String),

    /// HTTP 403 from any endpoint, regardless of response body.
    #[error("Insufficient Credits. Please purchase more credits.")]
    InsufficientCredits,

    /// Any other non-2xx status or transport failure. Carries the server's
    /// message when one was present, else the screen's static fallback.
    #[error("{0}")]
    RequestFailed(String),
}

impl ToolError {
    /// True when the sensible next step for the user is buying credits.
    pub fn wants_purchase(&self) -> bool {
        matches!(self, ToolError::InsufficientCredits)
    }
}

/// Maps a non-success HTTP exchange to a `ToolError`.
///
/// 403 always means the credit ledger rejected the debit, whatever the body
/// says. Everything else surfaces the server's message if one was parsed
/// out of the body, falling back to the per-screen static string.
pub fn classify_status(status: u16, server_message: Option<String>, fallback: &str) -> ToolError {
    if status == 403 {
        return ToolError::InsufficientCredits;
    }
    match server_message {
        Some(msg) if !msg.trim().is_empty() => ToolError::RequestFailed(msg),
        _ => ToolError::RequestFailed(fallback.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forbidden_maps_to_insufficient_credits_regardless_of_body() {
        let err = classify_status(403, Some("card declined".into()), "fallback");
        assert_eq!(err, ToolError::InsufficientCredits);
        assert_eq!(
            err.to_string(),
            "Insufficient Credits. Please purchase more credits."
        );
        assert!(err.wants_purchase());
    }

    #[test]
    fn server_message_wins_over_fallback() {
        let err = classify_status(400, Some("Text too long".into()), "Failed to humanize text.");
        assert_eq!(err, ToolError::RequestFailed("Text too long".into()));
    }

    #[test]
    fn blank_server_message_falls_back() {
        let err = classify_status(500, Some("  ".into()), "Failed to check grammar.");
        assert_eq!(err, ToolError::RequestFailed("Failed to check grammar.".into()));
        let err = classify_status(502, None, "Failed to check grammar.");
        assert_eq!(err, ToolError::RequestFailed("Failed to check grammar.".into()));
    }

    #[test]
    fn precondition_errors_render_their_own_text() {
        let err = ToolError::Validation("Please enter text to check".into());
        assert_eq!(err.to_string(), "Please enter text to check");
        assert!(!err.wants_purchase());
    }
}
