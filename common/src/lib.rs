//! Shared data model for the ExtraHands client.
//!
//! Everything here is pure and host-testable: the wire payloads exchanged
//! with the backend service, the `success`-envelope response types, the
//! plagiarism report model, the payment plan catalog, and the error
//! taxonomy with its HTTP status classification. No browser types leak
//! into this crate.

pub mod error;
pub mod model;
pub mod requests;
pub mod responses;
