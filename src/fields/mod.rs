//! Closed-form field models of permanent magnets, evaluated in the magnet's local frame.

mod dipole;
mod magnetic;
mod prism;

pub use dipole::{dipole_field_strength, dipole_moment, AT_SOURCE_TOLERANCE};
pub use magnetic::FieldSample;
pub use prism::{prism_field_strength, SINGULAR_TOLERANCE};

#[cfg(test)]
pub(crate) use prism::tests::{direct_sum, CUBE_HALF};
