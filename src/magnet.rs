//! Permanent magnets and remanence calibration.

use tracing::{debug, instrument};

use crate::constants::h_to_b;
use crate::errors::{MagnetError, Result};
use crate::fields::{dipole_field_strength, prism_field_strength, FieldSample};
use crate::math::{R3, Scalar};
use crate::shape::Shape;

/// A rigid permanent magnet: a shape and its remanence.
///
/// The field is exactly linear in remanence, which is the only free material
/// parameter. The surface field is derived from it on demand.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Magnet {
    shape: Shape,
    remanence: Scalar,
}

impl Magnet {
    /// Creates a magnet with remanence `remanence` in tesla.
    #[must_use]
    pub const fn new(shape: Shape, remanence: Scalar) -> Self {
        Self { shape, remanence }
    }

    /// Creates a magnet whose remanence is calibrated to a pole-face surface field (T).
    pub fn with_surface_field(shape: Shape, surface_field: Scalar) -> Result<Self> {
        let mut magnet = Self::new(shape, 1.0);
        magnet.calibrate_surface_field(surface_field)?;
        Ok(magnet)
    }

    /// Magnet geometry.
    #[must_use]
    pub const fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Remanence in tesla.
    #[must_use]
    pub const fn remanence(&self) -> Scalar {
        self.remanence
    }

    /// Overwrites the remanence (T).
    pub fn set_remanence(&mut self, remanence: Scalar) {
        self.remanence = remanence;
    }

    /// Field strength H (A/m) at `position` in the magnet's local frame.
    pub fn field_strength(&self, position: &R3) -> Result<R3> {
        match &self.shape {
            Shape::Prism { half_extents } => {
                prism_field_strength(position, half_extents, self.remanence)
            }
            Shape::Point { volume } => dipole_field_strength(position, *volume, self.remanence),
        }
    }

    /// Flux density B (T) at `position` in the magnet's local frame.
    pub fn flux_density(&self, position: &R3) -> Result<R3> {
        self.field_strength(position).map(h_to_b)
    }

    /// Both H and B at `position` in the magnet's local frame.
    pub fn sample(&self, position: &R3) -> Result<FieldSample> {
        self.field_strength(position).map(FieldSample::from_h)
    }

    /// Axial flux density `Bz` (T) at the centre of the north pole face.
    ///
    /// Fails with [`MagnetError::UnsupportedOperation`] for a point dipole.
    pub fn surface_field(&self) -> Result<Scalar> {
        let face = self.shape.pole_face_center().ok_or(MagnetError::UnsupportedOperation(
            "a point dipole has no pole face to define a surface field",
        ))?;
        Ok(self.flux_density(&face)?.z)
    }

    /// Sets the remanence so that [`Magnet::surface_field`] returns `surface_field` (T).
    ///
    /// Probes the surface field once at unit remanence and scales, which is exact
    /// because the field is linear in remanence.
    #[instrument(level = "debug", skip(self))]
    pub fn calibrate_surface_field(&mut self, surface_field: Scalar) -> Result<()> {
        let probe = Self::new(self.shape, 1.0).surface_field()?;
        self.remanence = surface_field / probe;
        debug!(probe, remanence = self.remanence, "remanence calibrated");
        Ok(())
    }
}

/// Field strength H (A/m) of `magnet` at a local-frame position.
pub fn field_strength(magnet: &Magnet, local_position: &R3) -> Result<R3> {
    magnet.field_strength(local_position)
}

/// Flux density B (T) of `magnet` at a local-frame position.
pub fn flux_density(magnet: &Magnet, local_position: &R3) -> Result<R3> {
    magnet.flux_density(local_position)
}

/// Calibrates `magnet`'s remanence to the requested pole-face surface field (T).
pub fn calibrate_surface_field(magnet: &mut Magnet, surface_field: Scalar) -> Result<()> {
    magnet.calibrate_surface_field(surface_field)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::constants::{TESLA_PER_GAUSS, VACUUM_PERMEABILITY};
    use crate::fields::{direct_sum, CUBE_HALF};

    fn quarter_inch_cube() -> Magnet {
        Magnet::with_surface_field(Shape::cube(2.0 * CUBE_HALF).unwrap(), 4601.0 * TESLA_PER_GAUSS)
            .unwrap()
    }

    #[test]
    fn calibration_recovers_surface_field() {
        let magnet = quarter_inch_cube();
        assert_relative_eq!(magnet.surface_field().unwrap(), 0.4601, max_relative = 1.0e-12);
        assert_relative_eq!(magnet.remanence(), 1.055_503_316_964_695, max_relative = 1.0e-10);
    }

    #[test]
    fn reference_cube_two_widths_from_centre() {
        let magnet = quarter_inch_cube();
        let p = R3::new(0.0, 0.0, 0.0127);
        let b = magnet.flux_density(&p).unwrap();
        let expected = direct_sum(&p, &R3::repeat(CUBE_HALF), magnet.remanence()) * VACUUM_PERMEABILITY;
        assert_relative_eq!(b.z, expected.z, max_relative = 1.0e-9);
        assert_relative_eq!(b.z, 0.020_728_577_964_409, max_relative = 1.0e-6);
    }

    #[test]
    fn negative_surface_field_flips_remanence() {
        let mut magnet = Magnet::new(Shape::prism(R3::new(0.01, 0.004, 0.002)).unwrap(), 1.0);
        magnet.calibrate_surface_field(-0.25).unwrap();
        assert!(magnet.remanence() < 0.0);
        assert_relative_eq!(magnet.surface_field().unwrap(), -0.25, max_relative = 1.0e-12);
    }

    #[test]
    fn point_dipole_has_no_surface_field() {
        let mut magnet = Magnet::new(Shape::point(1.0e-6).unwrap(), 1.2);
        assert!(matches!(magnet.surface_field(), Err(MagnetError::UnsupportedOperation(_))));
        assert!(matches!(
            magnet.calibrate_surface_field(0.5),
            Err(MagnetError::UnsupportedOperation(_))
        ));
        assert_eq!(magnet.remanence(), 1.2);
    }

    #[test]
    fn sample_keeps_b_and_h_consistent() {
        let magnet = quarter_inch_cube();
        let p = R3::new(0.004, -0.002, 0.009);
        let sample = magnet.sample(&p).unwrap();
        assert_relative_eq!(sample.h(), magnet.field_strength(&p).unwrap());
        assert_relative_eq!(sample.b(), magnet.flux_density(&p).unwrap());
    }
}
