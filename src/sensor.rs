//! Idealized single-axis Hall sensor in the world plane.

use crate::constants::MILLITESLA_PER_TESLA;
use crate::math::{rotate2, R2, Scalar};

/// Linear ratiometric Hall sensor that measures the flux density component
/// normal to its face.
///
/// Sensitivity is in mV/mT, which is numerically equal to V/T.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sensor2 {
    /// Sensor position in world coordinates (m).
    pub position: R2,
    /// Orientation of the sensing axis (degrees). Zero senses along world X.
    pub orientation_deg: Scalar,
    /// Output slope in mV/mT.
    pub sensitivity_mv_per_mt: Scalar,
    /// Output at zero field (V).
    pub quiescent_v: Scalar,
    /// Lower output rail (V).
    pub output_min_v: Scalar,
    /// Upper output rail (V).
    pub output_max_v: Scalar,
    /// Half-width of the linear input range (mT), when specified.
    pub linear_range_mt: Option<Scalar>,
}

impl Sensor2 {
    /// TI DRV5055A1 at 5 V supply: 100 mV/mT, 2.5 V quiescent, ±21 mT linear range.
    #[must_use]
    pub fn drv5055a1() -> Self {
        Self {
            position: R2::zeros(),
            orientation_deg: 0.0,
            sensitivity_mv_per_mt: 100.0,
            quiescent_v: 2.5,
            output_min_v: 0.1,
            output_max_v: 4.9,
            linear_range_mt: Some(21.0),
        }
    }

    /// Same sensor moved to `position` with its axis at `orientation_deg`.
    #[must_use]
    pub fn placed(mut self, position: R2, orientation_deg: Scalar) -> Self {
        self.position = position;
        self.orientation_deg = orientation_deg;
        self
    }

    /// Component of `field` (T) along the sensing axis (T).
    #[must_use]
    pub fn field_component(&self, field: &R2) -> Scalar {
        rotate2(field, -self.orientation_deg).x
    }

    /// Output voltage for a world-frame flux density `field` (T), clamped to the rails.
    ///
    /// Inverted rails resolve to the upper rail rather than panicking.
    #[must_use]
    pub fn output(&self, field: &R2) -> Scalar {
        self.field_component(field)
            .mul_add(self.sensitivity_mv_per_mt, self.quiescent_v)
            .max(self.output_min_v)
            .min(self.output_max_v)
    }

    /// Whether `field` lies inside the linear input range. Always true when no
    /// range is specified.
    #[must_use]
    pub fn is_in_linear_range(&self, field: &R2) -> bool {
        self.linear_range_mt.map_or(true, |range| {
            (self.field_component(field) * MILLITESLA_PER_TESLA).abs() < range
        })
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn quiescent_at_zero_field() {
        let sensor = Sensor2::drv5055a1();
        assert_relative_eq!(sensor.output(&R2::zeros()), 2.5);
        assert!(sensor.is_in_linear_range(&R2::zeros()));
    }

    #[test]
    fn senses_only_its_axis() {
        let sensor = Sensor2::drv5055a1().placed(R2::new(0.03, 0.0), 90.0);
        let field = R2::new(0.5, 0.01);
        assert_relative_eq!(sensor.field_component(&field), 0.01, epsilon = 1.0e-15);
        assert_relative_eq!(sensor.output(&field), 3.5, epsilon = 1.0e-12);
    }

    #[test]
    fn output_clamps_to_rails() {
        let sensor = Sensor2::drv5055a1();
        assert_relative_eq!(sensor.output(&R2::new(0.1, 0.0)), 4.9);
        assert_relative_eq!(sensor.output(&R2::new(-0.1, 0.0)), 0.1);
        assert!(!sensor.is_in_linear_range(&R2::new(0.025, 0.0)));
        assert!(sensor.is_in_linear_range(&R2::new(-0.020, 0.0)));
    }

    #[test]
    fn inverted_rails_do_not_panic() {
        let mut sensor = Sensor2::drv5055a1();
        sensor.output_min_v = 5.0;
        sensor.output_max_v = 0.0;
        assert_relative_eq!(sensor.output(&R2::zeros()), 0.0);

        sensor.output_min_v = Scalar::NAN;
        sensor.output_max_v = 4.9;
        assert_relative_eq!(sensor.output(&R2::zeros()), 2.5);
    }
}
