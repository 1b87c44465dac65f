//! Error taxonomy for engine construction and parameter updates.

use thiserror::Error;

/// Errors raised synchronously by engine construction and rate updates.
///
/// There are no transient failure modes — the core performs no I/O — so
/// none of these are retried. A failed call leaves all state unchanged.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    /// A geometry or engine configuration field is out of range.
    #[error("invalid config: {field} = {value} ({reason})")]
    InvalidConfig {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// An angular rate lies outside its control range [0, max].
    #[error("angular rate {name} = {value} outside [0, {max}]")]
    InvalidParameterRange {
        name: &'static str,
        value: f64,
        max: f64,
    },
}
