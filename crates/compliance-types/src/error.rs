//! Hard errors raised by the compliance engine.
//!
//! Everything else the engine encounters (missing optional profile
//! fields, unmapped states, unparsable amounts or timelines) is a soft
//! condition resolved by a documented fallback, never an error.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Classification was requested without a business profile.
    #[error("a business profile is required for classification")]
    MissingProfile,

    /// Obligation mapping was requested without a classification.
    #[error("a classification is required for obligation mapping")]
    MissingClassification,
}
