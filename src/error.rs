// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types.

use thiserror::Error;

/// Errors surfaced by the pattern catalog.
///
/// Generated patterns satisfy their invariants by construction, so the
/// validation variants only arise from externally supplied input.
#[derive(Debug, Error)]
pub enum PatternError {
    /// A point number outside 1..=9.
    #[error("grid point {0} is outside 1..=9")]
    PointOutOfRange(u8),

    /// Too few or too many points.
    #[error("pattern length {0} is outside 4..=9")]
    InvalidLength(usize),

    /// The same point listed twice.
    #[error("grid point {0} appears more than once")]
    RepeatedPoint(u8),

    /// The generator emitted a different number of patterns than the
    /// closed-form count. Non-fatal: the catalog is still built from what
    /// was emitted.
    #[error("expected {expected} generated patterns, got {actual}")]
    CountMismatch { expected: usize, actual: usize },

    /// A filter configuration could not be parsed.
    #[error("invalid filter configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// A filter configuration could not be read.
    #[error("failed to read filter configuration: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PatternError>;
