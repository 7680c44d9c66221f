//! Shared numerical primitives anchored on `nalgebra`.

use nalgebra::{Rotation2, Vector2, Vector3};

/// Primary scalar type used across the crate.
pub type Scalar = f64;
/// Convenient alias for two-dimensional real vectors (planar world frame).
pub type R2 = Vector2<Scalar>;
/// Convenient alias for three-dimensional real vectors.
pub type R3 = Vector3<Scalar>;

/// Parity sign: `+1` for even `n`, `-1` for odd `n`.
#[inline]
#[must_use]
pub const fn parity(n: u32) -> Scalar {
    if n % 2 == 0 {
        1.0
    } else {
        -1.0
    }
}

/// Rotates a planar vector counter-clockwise by `degrees`.
#[inline]
#[must_use]
pub fn rotate2(vector: &R2, degrees: Scalar) -> R2 {
    Rotation2::new(degrees.to_radians()) * vector
}

/// Rotates `point` counter-clockwise by `degrees` about `centre`.
#[inline]
#[must_use]
pub fn rotate_about(point: &R2, centre: &R2, degrees: Scalar) -> R2 {
    centre + rotate2(&(point - centre), degrees)
}

/// Lifts a point of the sampling plane into a magnet's local frame.
///
/// Plane X maps to the pole axis (local Z), plane Y to local Y, and local X is
/// pinned to zero: the plane passes through the magnet centre.
#[inline]
#[must_use]
pub fn embed_plane(vector: &R2) -> R3 {
    R3::new(0.0, vector.y, vector.x)
}

/// Projects a local-frame vector onto the sampling plane (inverse of [`embed_plane`]).
///
/// Local Z becomes plane X, local Y stays plane Y, local X is discarded.
#[inline]
#[must_use]
pub fn project_plane(vector: &R3) -> R2 {
    R2::new(vector.z, vector.y)
}
