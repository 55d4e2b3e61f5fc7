//! Error types for visibility computations.

use thiserror::Error;

/// Errors that can occur when computing visibility.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VisibilityError {
    /// The sight radius is zero, negative or not finite.
    #[error("sight radius must be positive and finite")]
    InvalidRadius,

    /// An input coordinate is NaN or infinite.
    #[error("input contains a non-finite coordinate")]
    NonFiniteInput,

    /// A fan triangulation was requested for too few vertices.
    #[error("triangulation needs at least 3 vertices, got {found}")]
    TooFewVertices {
        /// Number of vertices supplied.
        found: usize,
    },

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),

    /// The sweep produced fewer than 3 distinct vertices.
    #[error("visibility polygon collapsed to {vertices} vertices")]
    Degenerate {
        /// Number of vertices left after coalescing.
        vertices: usize,
    },
}
