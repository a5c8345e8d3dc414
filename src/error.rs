//! Crate error type
//!
//! The physics core itself is total and never fails; errors come from the
//! collaborators around it (configuration, input collection, layout, I/O).

use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Invalid configuration or launch parameter.
    #[error("invalid parameter: {0}")]
    InvalidParam(String),

    /// The triangular rack cannot be placed on the table.
    #[error("a rack of {count} balls with radius {radius} does not fit on a {width}x{height} table")]
    RackDoesNotFit {
        count: usize,
        radius: f64,
        width: f64,
        height: f64,
    },

    /// Interactive input ended before all parameters were collected.
    #[error("input closed before all parameters were read")]
    InputClosed,

    /// The driver's safety guard ran out before every ball stopped.
    #[error("simulation still running after {steps} steps")]
    StepLimit { steps: u64 },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
