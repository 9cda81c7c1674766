/// Convenience result type used across curvepace.
pub type CurvepaceResult<T> = Result<T, CurvepaceError>;

/// Phase of the speed-matching search that gave up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum SearchPhase {
    /// Doubling expansion of the bracket's right edge.
    Bracket,
    /// Binary search inside the bracket.
    Bisection,
}

impl std::fmt::Display for SearchPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bracket => f.write_str("bracket expansion"),
            Self::Bisection => f.write_str("bisection"),
        }
    }
}

/// Top-level error taxonomy used by the crate's APIs.
#[derive(thiserror::Error, Debug)]
pub enum CurvepaceError {
    /// Invalid user-provided configuration or call arguments.
    #[error("validation error: {0}")]
    Validation(String),

    /// The speed-matching search exhausted its iteration budget, or the
    /// bracket degenerated before the tolerance was met.
    #[error(
        "speed search diverged during {phase} after {iterations} iterations \
         (bracket [{bracket_lo}, {bracket_hi}], target {target_speed} px/s)"
    )]
    SearchDiverged {
        /// Phase that gave up.
        phase: SearchPhase,
        /// Iterations spent in that phase.
        iterations: u32,
        /// Left edge of the bracket when the search stopped.
        bracket_lo: f64,
        /// Right edge of the bracket when the search stopped.
        bracket_hi: f64,
        /// Requested speed in pixels per second.
        target_speed: f64,
    },

    /// The post-move marker box left the surface.
    #[error(
        "marker out of bounds: center ({x}, {y}), radius {radius}, \
         surface {width}x{height}"
    )]
    OutOfBounds {
        /// Marker center x after the move.
        x: f64,
        /// Marker center y after the move.
        y: f64,
        /// Marker radius used for the box check.
        radius: f64,
        /// Surface width in pixels.
        width: u32,
        /// Surface height in pixels.
        height: u32,
    },

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from the host or dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CurvepaceError {
    /// Build a [`CurvepaceError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CurvepaceError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
