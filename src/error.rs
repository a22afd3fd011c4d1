//! Error type for optimizer entry points.

use thiserror::Error;

/// Errors returned by the runners and the driver.
///
/// Numeric edge cases inside the search (zero demand, oversaturation,
/// out-of-bounds moves) are clamped, never reported here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptimizeError {
    /// A configuration failed its `validate()` check.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The run was started with no demand records.
    #[error("at least one demand record is required")]
    EmptyDemand,
}
