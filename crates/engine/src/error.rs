//! The module contains the errors the engine can return.
//!
//! Every round-up pipeline step maps its failure to exactly one variant:
//!
//! - [`Validation`] for a malformed request, before any collaborator runs.
//! - [`AccountNotFound`] when no account matches the requested currency.
//! - [`Upstream`] when a collaborator call fails outright.
//! - [`BusinessRule`] when a collaborator answers but reports failure.
//!
//! [`Validation`]: EngineError::Validation
//! [`AccountNotFound`]: EngineError::AccountNotFound
//! [`Upstream`]: EngineError::Upstream
//! [`BusinessRule`]: EngineError::BusinessRule
use thiserror::Error;

/// Engine custom errors.
///
/// The payload string is the user-facing message for the 4xx variants and a
/// generic step description for the 5xx ones; provider error content never
/// ends up in here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    AccountNotFound(String),
    #[error("{0}")]
    Upstream(String),
    #[error("{0}")]
    BusinessRule(String),
}
