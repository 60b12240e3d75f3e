// src/errors.rs
//
// Error types for pentavis

/// Result type alias
pub type Result<T> = std::result::Result<T, PentagridError>;

/// pentavis error types
///
/// Degenerate geometry (parallel lines, empty clips) is not an error and is
/// reported through `Option` by the geometry types instead.
#[derive(Debug, thiserror::Error)]
pub enum PentagridError {
    /// A rotation factor sum is not close enough to zero for an edge-to-edge tiling
    #[error("{which} rotation factors sum to {magnitude:e}, expected 0 (tolerance {tolerance:e})")]
    InvalidRotationFactors {
        /// "forward" or "inverse"
        which: &'static str,
        /// Magnitude of the offending sum
        magnitude: f64,
        /// Allowed magnitude
        tolerance: f64,
    },

    /// A direction vector of zero length was supplied
    #[error("direction vector has zero length")]
    ZeroDirection,

    /// Grid index outside 0..5
    #[error("grid index {0} out of range 0..5")]
    GridIndexOutOfRange(usize),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file could not be parsed
    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    /// OSC socket could not be set up
    #[error("OSC error: {0}")]
    Osc(String),
}
