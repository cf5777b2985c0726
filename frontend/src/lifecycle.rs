//! The request/response lifecycle every tool screen drives:
//! validate → submit → await → render result or error.
//!
//! One `Lifecycle<T>` per screen instance. Invariants:
//! - `result` and `error` are never simultaneously populated;
//! - while in flight both are cleared;
//! - at most one request is outstanding (`begin` refuses re-entry, which is
//!   what the disabled submit button enforces visually).
//!
//! A submission is terminal: no retry, no cancellation once dispatched, no
//! client-side timeout beyond the transport default.

use common::error::ToolError;

pub struct Lifecycle<T> {
    in_flight: bool,
    result: Option<T>,
    error: Option<ToolError>,
}

impl<T> Default for Lifecycle<T> {
    fn default() -> Self {
        Self::idle()
    }
}

impl<T> Lifecycle<T> {
    pub fn idle() -> Self {
        Lifecycle {
            in_flight: false,
            result: None,
            error: None,
        }
    }

    /// Enters the submitting state, clearing any prior result and error.
    /// Returns `false` (and changes nothing) if a request is already in
    /// flight, so rapid repeated clicks dispatch at most one request.
    pub fn begin(&mut self) -> bool {
        if self.in_flight {
            return false;
        }
        self.in_flight = true;
        self.result = None;
        self.error = None;
        true
    }

    /// Settles the in-flight submission with exactly one of result/error.
    pub fn finish(&mut self, outcome: Result<T, ToolError>) {
        self.in_flight = false;
        match outcome {
            Ok(value) => {
                self.result = Some(value);
                self.error = None;
            }
            Err(err) => {
                self.result = None;
                self.error = Some(err);
            }
        }
    }

    /// Records a precondition failure (`NotSignedIn`/`Validation`) without
    /// ever having entered the submitting state.
    pub fn fail(&mut self, err: ToolError) {
        if self.in_flight {
            return;
        }
        self.result = None;
        self.error = Some(err);
    }

    /// Called on user edits so a stale error doesn't linger next to fresh
    /// input.
    pub fn clear_error(&mut self) {
        if !self.in_flight {
            self.error = None;
        }
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn result(&self) -> Option<&T> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&ToolError> {
        self.error.as_ref()
    }
}

/// Non-empty-after-trim precondition for a screen's primary field. Returns
/// the trimmed text that goes on the wire.
pub fn require_text(input: &str, empty_message: &str) -> Result<String, ToolError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        Err(ToolError::Validation(empty_message.to_string()))
    } else {
        Ok(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_refuses_reentry_while_in_flight() {
        let mut lc: Lifecycle<String> = Lifecycle::idle();
        assert!(lc.begin());
        assert!(!lc.begin());
        assert!(lc.in_flight());
    }

    #[test]
    fn result_and_error_are_mutually_exclusive() {
        let mut lc: Lifecycle<String> = Lifecycle::idle();
        lc.begin();
        lc.finish(Ok("done".into()));
        assert_eq!(lc.result().map(String::as_str), Some("done"));
        assert!(lc.error().is_none());
        assert!(!lc.in_flight());

        lc.begin();
        assert!(lc.result().is_none(), "begin clears the prior result");
        lc.finish(Err(ToolError::InsufficientCredits));
        assert!(lc.result().is_none());
        assert_eq!(lc.error(), Some(&ToolError::InsufficientCredits));
    }

    #[test]
    fn resubmission_after_success_is_independent() {
        let mut lc: Lifecycle<u32> = Lifecycle::idle();
        lc.begin();
        lc.finish(Ok(1));
        assert!(lc.begin(), "a settled lifecycle accepts a fresh submission");
        lc.finish(Ok(2));
        assert_eq!(lc.result(), Some(&2));
    }

    #[test]
    fn fail_records_precondition_without_entering_flight() {
        let mut lc: Lifecycle<u32> = Lifecycle::idle();
        lc.fail(ToolError::Validation("Please enter text to check".into()));
        assert!(!lc.in_flight());
        assert_eq!(
            lc.error(),
            Some(&ToolError::Validation("Please enter text to check".into()))
        );

        lc.clear_error();
        assert!(lc.error().is_none());
    }

    #[test]
    fn fail_is_ignored_mid_flight() {
        let mut lc: Lifecycle<u32> = Lifecycle::idle();
        lc.begin();
        lc.fail(ToolError::Validation("x".into()));
        assert!(lc.error().is_none());
        lc.clear_error();
        assert!(lc.in_flight());
    }

    #[test]
    fn require_text_trims_and_rejects_whitespace() {
        assert_eq!(
            require_text("  Benefits of meditation  ", "m").unwrap(),
            "Benefits of meditation"
        );
        assert_eq!(
            require_text("   \n\t", "Please enter a topic for your article"),
            Err(ToolError::Validation(
                "Please enter a topic for your article".into()
            ))
        );
        assert_eq!(
            require_text("", "Please enter text to check"),
            Err(ToolError::Validation("Please enter text to check".into()))
        );
    }
}
