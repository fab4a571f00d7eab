//! Engine error taxonomy.

use thiserror::Error;

/// Errors raised by the signal engine.
///
/// All variants are raised synchronously at the point of detection and
/// propagate unchanged to the caller. None of them are retried or logged
/// inside the core.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SignalError {
    /// Window length of zero — a caller-side configuration error,
    /// raised before any computation starts.
    #[error("invalid window length {window}: must be >= 1")]
    InvalidWindow { window: usize },

    /// No price data to compute over. Distinct from a fetch failure;
    /// the caller decides whether to abort or retry with a wider range.
    #[error("price series is empty")]
    EmptySeries,

    /// Two series that must be aligned differ in length. This is an
    /// internal invariant violation — a bug upstream — and is fatal at
    /// the point of detection. Never truncate or pad to recover.
    #[error("aligned series length mismatch: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },
}
