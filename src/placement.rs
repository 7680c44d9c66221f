//! Placement of magnets in a shared world frame.
//!
//! A placement is pure geometry: it maps world points into a magnet's local frame
//! and local field vectors back into the world frame. Transforms are computed from
//! the current position and orientation on every call, so nothing needs to be
//! invalidated when either changes.

use std::fmt::Debug;
use std::ops::Add;

use nalgebra::{Unit, UnitQuaternion};

use crate::constants::h_to_b;
use crate::errors::Result;
use crate::magnet::Magnet;
use crate::math::{embed_plane, project_plane, rotate2, R2, R3, Scalar};

/// Mapping between a magnet's local 3D frame and a world frame.
pub trait Frame {
    /// World-frame vector type (points and field vectors).
    type Vector: Copy + Debug + PartialEq + Send + Sync + Add<Output = Self::Vector>;

    /// Maps a world point into the magnet's local frame.
    fn to_local(&self, world: &Self::Vector) -> R3;

    /// Maps a local-frame vector quantity (e.g. a field) into the world frame.
    fn to_world(&self, local: &R3) -> Self::Vector;

    /// Additive identity of [`Frame::Vector`].
    fn zero() -> Self::Vector;
}

/// Planar placement: position (m) and orientation (degrees) in the world plane.
///
/// Orientation zero aligns the magnet's pole axis with the world X axis. The
/// world plane cuts the magnet through its centre, see [`embed_plane`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement2 {
    /// Magnet centre in world coordinates (m).
    pub position: R2,
    /// Counter-clockwise orientation of the pole axis (degrees).
    pub orientation_deg: Scalar,
}

impl Placement2 {
    /// Creates a planar placement.
    #[must_use]
    pub const fn new(position: R2, orientation_deg: Scalar) -> Self {
        Self {
            position,
            orientation_deg,
        }
    }
}

impl Frame for Placement2 {
    type Vector = R2;

    fn to_local(&self, world: &R2) -> R3 {
        embed_plane(&rotate2(&(world - self.position), -self.orientation_deg))
    }

    fn to_world(&self, local: &R3) -> R2 {
        rotate2(&project_plane(local), self.orientation_deg)
    }

    fn zero() -> R2 {
        R2::zeros()
    }
}

/// Spatial placement: position (m) and a full 3D orientation.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement3 {
    /// Magnet centre in world coordinates (m).
    pub position: R3,
    /// Rotation taking local axes onto world axes.
    pub orientation: UnitQuaternion<Scalar>,
}

impl Placement3 {
    /// Creates a spatial placement.
    #[must_use]
    pub const fn new(position: R3, orientation: UnitQuaternion<Scalar>) -> Self {
        Self {
            position,
            orientation,
        }
    }

    /// Unrotated placement at `position`.
    #[must_use]
    pub fn identity_at(position: R3) -> Self {
        Self::new(position, UnitQuaternion::identity())
    }

    /// Placement rotated by `angle_deg` about `axis`. A zero axis yields no rotation.
    #[must_use]
    pub fn from_axis_angle_deg(position: R3, axis: &R3, angle_deg: Scalar) -> Self {
        let orientation = Unit::try_new(*axis, Scalar::EPSILON).map_or_else(
            UnitQuaternion::identity,
            |axis| UnitQuaternion::from_axis_angle(&axis, angle_deg.to_radians()),
        );
        Self::new(position, orientation)
    }

    /// Placement from roll, pitch and yaw angles in degrees.
    #[must_use]
    pub fn from_euler_deg(position: R3, roll: Scalar, pitch: Scalar, yaw: Scalar) -> Self {
        Self::new(
            position,
            UnitQuaternion::from_euler_angles(roll.to_radians(), pitch.to_radians(), yaw.to_radians()),
        )
    }
}

impl Frame for Placement3 {
    type Vector = R3;

    fn to_local(&self, world: &R3) -> R3 {
        self.orientation.inverse_transform_vector(&(world - self.position))
    }

    fn to_world(&self, local: &R3) -> R3 {
        self.orientation.transform_vector(local)
    }

    fn zero() -> R3 {
        R3::zeros()
    }
}

/// A magnet bound to a placement.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedMagnet<P> {
    /// The underlying magnet.
    pub magnet: Magnet,
    /// Where and how the magnet sits in the world frame.
    pub placement: P,
}

/// Magnet placed in the world plane.
pub type PlacedMagnet2 = PlacedMagnet<Placement2>;
/// Magnet placed in world space.
pub type PlacedMagnet3 = PlacedMagnet<Placement3>;

impl<P: Frame> PlacedMagnet<P> {
    /// Binds `magnet` to `placement`.
    #[must_use]
    pub const fn new(magnet: Magnet, placement: P) -> Self {
        Self { magnet, placement }
    }

    /// Field strength H (A/m) at a world point, in world coordinates.
    pub fn world_h(&self, world: &P::Vector) -> Result<P::Vector> {
        let local = self.placement.to_local(world);
        let h = self.magnet.field_strength(&local)?;
        Ok(self.placement.to_world(&h))
    }

    /// Flux density B (T) at a world point, in world coordinates.
    pub fn world_field(&self, world: &P::Vector) -> Result<P::Vector> {
        let local = self.placement.to_local(world);
        let b = h_to_b(self.magnet.field_strength(&local)?);
        Ok(self.placement.to_world(&b))
    }
}

impl PlacedMagnet2 {
    /// Copy of this magnet turned by `degrees` about its own centre.
    #[must_use]
    pub fn rotated_by(&self, degrees: Scalar) -> Self {
        let mut rotated = *self;
        rotated.placement.orientation_deg += degrees;
        rotated
    }
}

/// Flux density B (T) of a placed magnet at a world point, in world coordinates.
pub fn world_field<P: Frame>(magnet: &PlacedMagnet<P>, world_position: &P::Vector) -> Result<P::Vector> {
    magnet.world_field(world_position)
}
