//! Sweep utilities and the two-magnet angle sensor rig.

use rayon::prelude::*;
use tracing::{debug, instrument, trace};

use crate::constants::{METRES_PER_INCH, TESLA_PER_GAUSS};
use crate::errors::{MagnetError, Result};
use crate::magnet::Magnet;
use crate::math::{rotate2, R2, Scalar};
use crate::placement::{PlacedMagnet2, Placement2};
use crate::sensor::Sensor2;
use crate::shape::Shape;
use crate::superposition::total_world_field;

/// Generates `n` linearly spaced samples in [start, stop].
#[must_use]
pub fn linspace(start: Scalar, stop: Scalar, n: usize) -> Vec<Scalar> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n as Scalar - 1.0);
            (0..n).map(|i| start + step * i as Scalar).collect()
        }
    }
}

/// Angles from `start` towards `stop` in increments of `step` (degrees), both
/// ends included when `stop` falls on the grid. Empty for a non-positive step
/// or any non-finite bound.
#[must_use]
pub fn angle_steps(start: Scalar, stop: Scalar, step: Scalar) -> Vec<Scalar> {
    if !(start.is_finite() && stop.is_finite() && step.is_finite()) || step <= 0.0 || stop < start {
        return Vec::new();
    }
    // Tolerate rounding in (stop - start) / step landing just under an integer
    let intervals = ((stop - start) / step + 1.0e-9).floor() as usize;
    linspace(start, (intervals as Scalar).mul_add(step, start), intervals + 1)
}

/// Geometry and hardware of the two-magnet angle sensor rig.
///
/// Two identical cube magnets sit in the world plane at `magnet_radius_m` from
/// the rotation axis, on radial lines at `±half_angle_deg`. The first points its
/// pole along its radial line, the second is reversed so that opposite poles
/// face the axis. A sensor on an arc of `sensor_radius_m`, facing away from the
/// axis, is stepped across the same angular span.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleSweepConfig {
    /// Cube edge length (m).
    pub magnet_edge_m: Scalar,
    /// Pole-face surface field the magnets are calibrated to (T).
    pub surface_field_t: Scalar,
    /// Distance from the rotation axis to each magnet centre (m).
    pub magnet_radius_m: Scalar,
    /// Distance from the rotation axis to the sensor (m).
    pub sensor_radius_m: Scalar,
    /// Half of the swept angle and of the magnet separation angle (degrees).
    pub half_angle_deg: Scalar,
    /// Sweep increment (degrees).
    pub step_deg: Scalar,
    /// Sensor transfer characteristics.
    pub sensor: Sensor2,
}

impl Default for AngleSweepConfig {
    /// 0.25" N-grade cubes at 4601 G, magnets at 1.8", DRV5055A1 at 1.3",
    /// ±15° in 1° steps.
    fn default() -> Self {
        Self {
            magnet_edge_m: 0.25 * METRES_PER_INCH,
            surface_field_t: 4601.0 * TESLA_PER_GAUSS,
            magnet_radius_m: 1.8 * METRES_PER_INCH,
            sensor_radius_m: 1.3 * METRES_PER_INCH,
            half_angle_deg: 15.0,
            step_deg: 1.0,
            sensor: Sensor2::drv5055a1(),
        }
    }
}

impl AngleSweepConfig {
    /// Rig with the default hardware and the given radii (m) and half-angle (degrees).
    #[must_use]
    pub fn with_geometry(magnet_radius_m: Scalar, sensor_radius_m: Scalar, half_angle_deg: Scalar) -> Self {
        Self {
            magnet_radius_m,
            sensor_radius_m,
            half_angle_deg,
            ..Self::default()
        }
    }

    /// Checks that the sweep is well defined.
    pub fn validate(&self) -> Result<()> {
        if !self.step_deg.is_finite() || self.step_deg <= 0.0 {
            return Err(MagnetError::InvalidConfig(format!(
                "sweep step must be positive, got {}",
                self.step_deg
            )));
        }
        if !self.half_angle_deg.is_finite() || self.half_angle_deg < 0.0 {
            return Err(MagnetError::InvalidConfig(format!(
                "half angle must be non-negative, got {}",
                self.half_angle_deg
            )));
        }
        let (low, high) = (self.sensor.output_min_v, self.sensor.output_max_v);
        if !(low.is_finite() && high.is_finite()) || low > high {
            return Err(MagnetError::InvalidConfig(format!(
                "sensor output rails must be finite with min <= max, got [{low}, {high}]"
            )));
        }
        Ok(())
    }

    /// The two calibrated magnets at their rig positions.
    pub fn magnets(&self) -> Result<[PlacedMagnet2; 2]> {
        let magnet = Magnet::with_surface_field(Shape::cube(self.magnet_edge_m)?, self.surface_field_t)?;
        let radial = R2::new(self.magnet_radius_m, 0.0);
        let half = self.half_angle_deg;
        Ok([
            PlacedMagnet2::new(magnet, Placement2::new(rotate2(&radial, half), half)),
            PlacedMagnet2::new(magnet, Placement2::new(rotate2(&radial, -half), 180.0 - half)),
        ])
    }

    /// Centre-to-centre magnet spacing (m).
    #[must_use]
    pub fn magnet_spacing(&self) -> Scalar {
        2.0 * self.magnet_radius_m * self.half_angle_deg.to_radians().sin()
    }

    /// Sensor angles visited by the sweep (degrees).
    #[must_use]
    pub fn angles(&self) -> Vec<Scalar> {
        angle_steps(-self.half_angle_deg, self.half_angle_deg, self.step_deg)
    }
}

/// One row of an angle sweep.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleReading {
    /// Sensor angle about the rotation axis (degrees).
    pub angle_deg: Scalar,
    /// Flux density along the sensing axis (T).
    pub field_t: Scalar,
    /// Sensor output (V).
    pub output_v: Scalar,
    /// Whether the field is inside the sensor's linear range.
    pub in_linear_range: bool,
}

/// Reads the sensor at `angle_deg` on its arc.
pub fn read_at_angle(config: &AngleSweepConfig, magnets: &[PlacedMagnet2], angle_deg: Scalar) -> Result<AngleReading> {
    let position = rotate2(&R2::new(config.sensor_radius_m, 0.0), angle_deg);
    let sensor = config.sensor.placed(position, angle_deg);
    let field = total_world_field(magnets, &position)?;
    let reading = AngleReading {
        angle_deg,
        field_t: sensor.field_component(&field),
        output_v: sensor.output(&field),
        in_linear_range: sensor.is_in_linear_range(&field),
    };
    trace!(?reading, "sensor read");
    Ok(reading)
}

/// Runs the full angle sweep, evaluating angles in parallel.
#[instrument(level = "debug", skip(config))]
pub fn run_angle_sweep(config: &AngleSweepConfig) -> Result<Vec<AngleReading>> {
    config.validate()?;
    let magnets = config.magnets()?;
    let angles = config.angles();
    debug!(
        steps = angles.len(),
        spacing_m = config.magnet_spacing(),
        remanence = magnets[0].magnet.remanence(),
        "angle sweep"
    );
    angles
        .par_iter()
        .map(|&angle| read_at_angle(config, &magnets, angle))
        .collect()
}
