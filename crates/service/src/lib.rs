//! Service layer for intent-embed
//!
//! Drives a batch run: probe the embedding service, embed every pending
//! intent inside one transaction, commit or roll back as a whole.

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]

mod batch_service;
mod error;

pub use batch_service::{BatchReport, BatchState, BatchUpdater, IntentOutcome};
pub use error::BatchError;
