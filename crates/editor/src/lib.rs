//! Editing session for contraction diagrams.
//!
//! [`Session`] owns the operator list, the contraction sequence, the selection
//! cursor and the pending half of an in-progress pair. Every mutation goes
//! through its methods, and each method leaves a human readable status message
//! behind for the status bar.

/// Rejected user input.
pub mod error;
/// Inline single-line prompts for editing content and counts.
pub mod prompt;
/// Session state and editing commands.
pub mod session;

pub use error::EditError;
pub use prompt::{Prompt, PromptKind, PromptOutcome, PromptState};
pub use session::{Direction, PairOutcome, Session};
