//! Magnet geometry.

use crate::errors::{MagnetError, Result};
use crate::math::{R3, Scalar};

/// Geometry of a uniformly magnetized body, magnetized along its local Z axis.
///
/// Extents are validated once at construction and immutable afterwards.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Point dipole. Carries a configured volume (m³) because no extent exists
    /// from which to derive one.
    Point {
        /// Equivalent magnet volume in cubic metres.
        volume: Scalar,
    },
    /// Rectangular prism centred on the origin.
    Prism {
        /// Half edge lengths `(ax, ay, az)` in metres.
        half_extents: R3,
    },
}

impl Shape {
    /// Rectangular prism from full edge lengths in metres.
    pub fn prism(size: R3) -> Result<Self> {
        Self::prism_half_extents(size * 0.5)
    }

    /// Rectangular prism from half edge lengths in metres.
    pub fn prism_half_extents(half_extents: R3) -> Result<Self> {
        if half_extents.iter().all(|a| a.is_finite() && *a > 0.0) {
            Ok(Self::Prism { half_extents })
        } else {
            Err(MagnetError::InvalidGeometry(format!(
                "prism half-extents must be finite and positive, got ({}, {}, {})",
                half_extents.x, half_extents.y, half_extents.z
            )))
        }
    }

    /// Cube with edge length `edge` in metres.
    pub fn cube(edge: Scalar) -> Result<Self> {
        Self::prism(R3::repeat(edge))
    }

    /// Point dipole with an equivalent volume in cubic metres.
    pub fn point(volume: Scalar) -> Result<Self> {
        if volume.is_finite() && volume > 0.0 {
            Ok(Self::Point { volume })
        } else {
            Err(MagnetError::InvalidGeometry(format!(
                "point dipole volume must be finite and positive, got {volume}"
            )))
        }
    }

    /// Half edge lengths, or `None` for a point dipole.
    #[must_use]
    pub const fn half_extents(&self) -> Option<R3> {
        match self {
            Self::Point { .. } => None,
            Self::Prism { half_extents } => Some(*half_extents),
        }
    }

    /// Magnet volume in cubic metres.
    #[must_use]
    pub fn volume(&self) -> Scalar {
        match self {
            Self::Point { volume } => *volume,
            Self::Prism { half_extents } => 8.0 * half_extents.product(),
        }
    }

    /// Centre of the north pole face in local coordinates, `(0, 0, az)`.
    ///
    /// A point dipole has no pole face.
    #[must_use]
    pub fn pole_face_center(&self) -> Option<R3> {
        self.half_extents().map(|a| R3::new(0.0, 0.0, a.z))
    }
}
