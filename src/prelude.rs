//! Convenience re-exports for building magnet layouts and sweeps.

pub use crate::constants::*;
pub use crate::errors::{MagnetError, Result, SingularRegion};
pub use crate::fields::{dipole_field_strength, dipole_moment, prism_field_strength, FieldSample};
pub use crate::magnet::{calibrate_surface_field, field_strength, flux_density, Magnet};
pub use crate::math::{rotate2, rotate_about, R2, R3, Scalar};
pub use crate::placement::{
    world_field, Frame, PlacedMagnet, PlacedMagnet2, PlacedMagnet3, Placement2, Placement3,
};
pub use crate::sensor::Sensor2;
pub use crate::shape::Shape;
pub use crate::superposition::{field_map, field_map_par, total_world_field, total_world_h};
pub use crate::sweep::{
    angle_steps, linspace, read_at_angle, run_angle_sweep, AngleReading, AngleSweepConfig,
};
