//! Parse-boundary errors for taskdeck-core.
//!
//! Inside the crate the status and action vocabularies are closed enums
//! matched exhaustively, so an invalid value is unrepresentable. The only
//! place a bad label can appear is when text from a collaborator (CLI
//! arguments, JSON from a listing service) is parsed into those enums.

use thiserror::Error;

/// A textual label fell outside a closed vocabulary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Task status label outside the closed lifecycle enumeration.
    #[error("unknown task status: '{0}'")]
    UnknownTaskStatus(String),

    /// Action key label outside the fixed action vocabulary.
    #[error("unknown action key: '{0}'")]
    UnknownActionKey(String),
}
