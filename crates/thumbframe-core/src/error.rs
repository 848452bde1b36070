//! Error types for the overlay editor.
//!
//! Gesture handling itself never fails: negative sizes and unbounded angles
//! are valid editor states. Errors only arise where untyped input crosses
//! into the editor, such as handle identifiers coming from markup or a
//! config object coming from JavaScript.

use thiserror::Error;

/// Error types for overlay editor boundaries.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EditorError {
    /// The handle identifier is not one of the known corner/side/rotate ids,
    /// or names a handle of the wrong kind.
    #[error("Unknown handle: {0}")]
    UnknownHandle(String),

    /// A configuration value is out of range.
    #[error("Invalid editor config: {0}")]
    InvalidConfig(String),
}
