//! Error types shared across the field models, magnets and placements.

use std::fmt;

use thiserror::Error;

use crate::math::R3;

/// Convenience alias used by every fallible operation in the crate.
pub type Result<T, E = MagnetError> = std::result::Result<T, E>;

/// Where a singular evaluation point sits relative to the magnet body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SingularRegion {
    /// Strictly inside the magnet volume.
    Interior,
    /// On a side face, an edge or a corner of the magnet.
    Surface,
}

impl fmt::Display for SingularRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Interior => f.write_str("inside the magnet"),
            Self::Surface => f.write_str("on a side face, edge or corner"),
        }
    }
}

/// Top-level error type for the crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MagnetError {
    /// Raised when a shape is constructed with non-positive or non-finite extents.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),
    /// Raised when a field is requested where the closed form is undefined.
    #[error("field is singular at local point ({:.6e}, {:.6e}, {:.6e}): {region}", .point.x, .point.y, .point.z)]
    Singular {
        /// Offending point in the magnet's local frame (m).
        point: R3,
        /// Classification of the offending point.
        region: SingularRegion,
    },
    /// Raised when an operation is not defined for the magnet's shape.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(&'static str),
    /// Raised when sweep parameters are malformed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// Raised when a dipole is evaluated at its own source point.
    #[error("dipole field evaluated at its source point")]
    AtSource,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn singular_message_names_region() {
        let err = MagnetError::Singular {
            point: R3::new(0.0, 0.0, 1.0e-3),
            region: SingularRegion::Interior,
        };
        let printed = err.to_string();
        assert!(printed.contains("inside the magnet"), "got {printed}");
        assert!(printed.contains("1.000000e-3"), "got {printed}");
    }
}
