#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::all, clippy::cargo, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Physical constants and unit conversions.
pub mod constants;
/// Shared mathematical utilities (vector aliases, planar rotations, embeddings).
pub mod math;
/// Closed-form field models evaluated in a magnet's local frame.
pub mod fields;
/// Magnet geometry.
pub mod shape;
/// Permanent magnets and remanence calibration.
pub mod magnet;
/// Placement of magnets in 2D and 3D world frames.
pub mod placement;
/// Superposition of placed magnets.
pub mod superposition;
/// Idealized Hall sensor model.
pub mod sensor;
/// Sweep builders and the angle sensor rig.
pub mod sweep;
/// Error types shared across the crate.
pub mod errors;

/// Common exports for downstream crates.
pub mod prelude;

pub use errors::{MagnetError, Result, SingularRegion};
pub use magnet::{calibrate_surface_field, field_strength, flux_density, Magnet};
pub use placement::{world_field, Frame, PlacedMagnet, PlacedMagnet2, PlacedMagnet3, Placement2, Placement3};
pub use shape::Shape;
pub use superposition::total_world_field;
