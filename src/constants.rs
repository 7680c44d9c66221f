//! Physical constants and unit conversions shared by every model.
//!
//! ## Accuracy
//!
//! The permeability of free space is the classical defined value
//! μ₀ = 4π × 10⁻⁷ H/m. Post-2019 SI measurements differ only in the eleventh
//! significant figure, well below the accuracy of any permanent-magnet model.
//!
//! Unit conversions are exact by definition.

use std::f64::consts::PI;
use std::ops::Mul;

use crate::math::Scalar;

/// Vacuum permeability μ₀ in henries per meter (H/m).
pub const VACUUM_PERMEABILITY: Scalar = 4.0e-7 * PI;

/// Multiply a length in inches by this to obtain metres.
pub const METRES_PER_INCH: Scalar = 0.0254;
/// Multiply a length in metres by this to obtain inches.
pub const INCHES_PER_METRE: Scalar = 1.0 / METRES_PER_INCH;
/// Multiply a flux density in gauss by this to obtain tesla.
pub const TESLA_PER_GAUSS: Scalar = 1.0e-4;
/// Multiply a flux density in tesla by this to obtain gauss.
pub const GAUSS_PER_TESLA: Scalar = 1.0e4;
/// Multiply a flux density in tesla by this to obtain millitesla.
pub const MILLITESLA_PER_TESLA: Scalar = 1.0e3;

/// Converts a field strength H (A/m) into a free-space flux density B (T).
#[inline]
#[must_use]
pub fn h_to_b<V>(h: V) -> V
where
    V: Mul<Scalar, Output = V>,
{
    h * VACUUM_PERMEABILITY
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::math::{R2, R3};

    #[test]
    fn permeability_matches_defined_value() {
        assert_relative_eq!(VACUUM_PERMEABILITY, 1.256_637_061_4e-6, max_relative = 1.0e-10);
    }

    #[test]
    fn unit_conversions_are_reciprocal() {
        assert_relative_eq!(METRES_PER_INCH * INCHES_PER_METRE, 1.0, epsilon = 1.0e-15);
        assert_relative_eq!(TESLA_PER_GAUSS * GAUSS_PER_TESLA, 1.0, epsilon = 1.0e-15);
        assert_relative_eq!(4601.0 * TESLA_PER_GAUSS, 0.4601, epsilon = 1.0e-15);
    }

    #[test]
    fn h_to_b_scales_by_permeability() {
        let h = R3::new(1.0e5, -2.0e4, 3.0);
        assert_relative_eq!(h_to_b(h), h * VACUUM_PERMEABILITY, max_relative = 1.0e-15);

        let b2 = h_to_b(R2::new(1.0 / VACUUM_PERMEABILITY, 0.0));
        assert_relative_eq!(b2.x, 1.0, epsilon = 1.0e-12);
    }
}
