//! Superposition of independently placed magnets.
//!
//! Free-space magnetostatics is linear, so the total field is the plain vector sum
//! of every magnet's world-frame contribution. Magnets do not interact: no
//! shielding or mutual demagnetization is modelled.

use rayon::prelude::*;
use tracing::debug;

use crate::errors::Result;
use crate::placement::{Frame, PlacedMagnet};

/// Total field strength H (A/m) of `magnets` at a world point.
///
/// An empty collection yields the zero vector.
pub fn total_world_h<P: Frame>(magnets: &[PlacedMagnet<P>], world_position: &P::Vector) -> Result<P::Vector> {
    magnets
        .iter()
        .try_fold(P::zero(), |sum, m| Ok(sum + m.world_h(world_position)?))
}

/// Total flux density B (T) of `magnets` at a world point.
///
/// An empty collection yields the zero vector.
pub fn total_world_field<P: Frame>(
    magnets: &[PlacedMagnet<P>],
    world_position: &P::Vector,
) -> Result<P::Vector> {
    magnets
        .iter()
        .try_fold(P::zero(), |sum, m| Ok(sum + m.world_field(world_position)?))
}

/// Total flux density at each of `points`, evaluated sequentially.
pub fn field_map<P: Frame>(magnets: &[PlacedMagnet<P>], points: &[P::Vector]) -> Result<Vec<P::Vector>> {
    points.iter().map(|p| total_world_field(magnets, p)).collect()
}

/// Total flux density at each of `points`, evaluated in parallel over points.
///
/// Output order matches `points`. The first failing point aborts the map.
pub fn field_map_par<P>(magnets: &[PlacedMagnet<P>], points: &[P::Vector]) -> Result<Vec<P::Vector>>
where
    P: Frame + Sync,
{
    debug!(magnets = magnets.len(), points = points.len(), "parallel field map");
    points
        .par_iter()
        .map(|p| total_world_field(magnets, p))
        .collect()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::errors::MagnetError;
    use crate::fields::CUBE_HALF;
    use crate::magnet::Magnet;
    use crate::math::{R2, R3};
    use crate::placement::{PlacedMagnet2, PlacedMagnet3, Placement2, Placement3};
    use crate::shape::Shape;
    use crate::sweep::linspace;

    fn pair() -> Vec<PlacedMagnet2> {
        let magnet =
            Magnet::with_surface_field(Shape::cube(2.0 * CUBE_HALF).unwrap(), 0.4601).unwrap();
        vec![
            PlacedMagnet2::new(magnet, Placement2::new(R2::new(0.03, 0.01), 15.0)),
            PlacedMagnet2::new(magnet, Placement2::new(R2::new(0.03, -0.01), 165.0)),
        ]
    }

    #[test]
    fn empty_collection_is_zero() {
        let none: [PlacedMagnet3; 0] = [];
        assert_eq!(total_world_field(&none, &R3::new(1.0, 2.0, 3.0)).unwrap(), R3::zeros());
        let none: [PlacedMagnet2; 0] = [];
        assert_eq!(total_world_h(&none, &R2::new(1.0, 2.0)).unwrap(), R2::zeros());
    }

    #[test]
    fn total_is_sum_of_parts() {
        let magnets = pair();
        let p = R2::new(0.0, 0.004);
        let total = total_world_field(&magnets, &p).unwrap();
        let parts = magnets[0].world_field(&p).unwrap() + magnets[1].world_field(&p).unwrap();
        assert_relative_eq!(total, parts, max_relative = 1.0e-14);
    }

    #[test]
    fn singular_contribution_propagates() {
        let magnets = pair();
        let err = total_world_field(&magnets, &R2::new(0.03, 0.01)).unwrap_err();
        assert!(matches!(err, MagnetError::Singular { .. }));
    }

    #[test]
    fn parallel_map_matches_sequential() {
        let magnets = pair();
        let points: Vec<R2> = linspace(-0.01, 0.015, 64)
            .into_iter()
            .map(|y| R2::new(0.0, y))
            .collect();
        let seq = field_map(&magnets, &points).unwrap();
        let par = field_map_par(&magnets, &points).unwrap();
        assert_eq!(seq, par);
    }

    #[test]
    fn opposed_magnets_cancel_axially_on_midplane() {
        let magnet = Magnet::new(Shape::cube(0.01).unwrap(), 1.2);
        let magnets = [
            PlacedMagnet3::new(magnet, Placement3::identity_at(R3::new(0.0, 0.0, 0.02))),
            PlacedMagnet3::new(
                magnet,
                Placement3::from_axis_angle_deg(R3::new(0.0, 0.0, -0.02), &R3::x(), 180.0),
            ),
        ];
        // Anti-aligned pair: axial components cancel on z = 0, radial components add
        let b = total_world_field(&magnets, &R3::new(0.004, 0.0, 0.0)).unwrap();
        let single = magnets[0].world_field(&R3::new(0.004, 0.0, 0.0)).unwrap();
        assert_relative_eq!(b.x, 2.0 * single.x, max_relative = 1.0e-10);
        assert!(b.z.abs() < 1.0e-12 * single.norm());
    }
}
