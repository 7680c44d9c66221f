//! Point-dipole limit of a permanent magnet.

use std::f64::consts::PI;

use crate::constants::VACUUM_PERMEABILITY;
use crate::errors::{MagnetError, Result};
use crate::math::{R3, Scalar};

/// Source-point tolerance relative to the cube root of the dipole volume.
pub const AT_SOURCE_TOLERANCE: Scalar = 1.0e-9;

/// Magnetic moment (A·m²) of a body with remanence `Br` (T) and `volume` (m³),
/// aligned with local Z: `m = Br·V/μ0`.
#[inline]
#[must_use]
pub fn dipole_moment(remanence: Scalar, volume: Scalar) -> R3 {
    R3::new(0.0, 0.0, remanence * volume / VACUUM_PERMEABILITY)
}

/// Field strength H (A/m) of a point dipole at `position` in its local frame.
///
/// `H(r) = (3(m·r̂)r̂ − m) / (4π|r|³)` with the moment from [`dipole_moment`].
///
/// The model breaks down at the source point itself. Evaluating within
/// [`AT_SOURCE_TOLERANCE`]`·∛V` of the origin returns [`MagnetError::AtSource`]
/// instead of an infinite or NaN field.
pub fn dipole_field_strength(position: &R3, volume: Scalar, remanence: Scalar) -> Result<R3> {
    let r = position.norm();
    if r <= AT_SOURCE_TOLERANCE * volume.cbrt() {
        return Err(MagnetError::AtSource);
    }

    let m = dipole_moment(remanence, volume);
    let r_hat = position / r;
    let r3 = r * r * r;
    Ok((r_hat * (3.0 * m.dot(&r_hat)) - m) / (4.0 * PI * r3))
}
