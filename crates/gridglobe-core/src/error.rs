//! Error types for geometry construction.

use std::fmt;

/// Errors that can occur while building route geometry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    /// Arc subdivision count is too small for the arrow neighbor lookups.
    TooFewSegments { segments: usize },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewSegments { segments } => {
                write!(f, "arc needs at least 3 segments, got {segments}")
            }
        }
    }
}

impl std::error::Error for GeometryError {}

/// Result type for geometry construction.
pub type GeometryResult<T> = Result<T, GeometryError>;
