//! Closed-form field of a uniformly magnetized rectangular prism.
//!
//! The prism is centred on the origin of its local frame with half edge lengths
//! `(ax, ay, az)` and magnetized along local Z. With `σ(n) = (-1)^n`, corner
//! offsets `X_i = x + ax·σ(i+1)` (likewise `Y_j`, `Z_k`) and
//! `R_ijk = |(X_i, Y_j, Z_k)|`, the field strength is
//!
//! ```text
//! Hx = h0/8π · Σ σ(i+j+k) · ln[(R − Y_j) / (R + Y_j)]
//! Hy = h0/8π · Σ σ(i+j+k) · ln[(R − X_i) / (R + X_i)]
//! Hz = h0/4π · Σ σ(i+j+k+1) · [atan(X_i·Z_k / (R·Y_j)) + atan(Y_j·Z_k / (R·X_i))]
//! ```
//!
//! summed over all eight corners, with `h0 = Br / μ0`.
//!
//! # Commentary
//!
//! Every octant is evaluated with the same sum; no per-octant sign correction is
//! applied. The logarithms are regrouped in pairs that share `ρ² = X_i² + Z_k²`
//! (resp. `Y_j² + Z_k²`), using `(R − u)/(R + u) = ρ²/(R + u)² = (R − u)²/ρ²`.
//! The regrouped form is algebraically identical to the sum above but avoids
//! the cancellation in `R − u` for `u ≫ ρ` and stays finite on the extended
//! edge lines outside the body, where the individual terms diverge and cancel.
//!
//! An arctangent whose denominator vanishes is replaced by its one-sided limit
//! `±π/2` (or `0` for a vanishing numerator). Outside the magnet the resulting
//! jumps cancel between corners, so the limit choice does not affect the sum.
//!
//! Points strictly inside the prism, or on a side face, edge or corner, are
//! rejected with [`MagnetError::Singular`]. Pole faces are evaluated: the axial
//! flux density is continuous across them and the face centre is the surface
//! field reference point.
//!
//! # References
//!
//!   \[1\] "Field of cuboid magnet or rectangular solenoid," e-magnetica.pl.
//!         Available: <https://www.e-magnetica.pl/doku.php/calculator/field_of_cuboid_magnet_or_rectangular_solenoid>
//!
//!   \[2\] AIP Advances, doi: [10.1063/5.0010982](https://doi.org/10.1063/5.0010982).

use std::f64::consts::{FRAC_PI_2, PI};

use crate::constants::VACUUM_PERMEABILITY;
use crate::errors::{MagnetError, Result, SingularRegion};
use crate::math::{parity, R3, Scalar};

/// Singularity tolerance relative to the smallest half-extent.
pub const SINGULAR_TOLERANCE: Scalar = 1.0e-9;

/// Field strength H (A/m) of a rectangular prism at `position` in its local frame.
///
/// # Arguments
///
/// * `position`:     (m) evaluation point, local frame
/// * `half_extents`: (m) half edge lengths `(ax, ay, az)`, all positive
/// * `remanence`:    (T) remanent flux density `Br`
pub fn prism_field_strength(position: &R3, half_extents: &R3, remanence: Scalar) -> Result<R3> {
    let tol = SINGULAR_TOLERANCE * half_extents.min();
    check_outside(position, half_extents, tol)?;

    // Corner offsets, index 0 is the negative face and index 1 the positive one
    let xs = [position.x - half_extents.x, position.x + half_extents.x];
    let ys = [position.y - half_extents.y, position.y + half_extents.y];
    let zs = [position.z - half_extents.z, position.z + half_extents.z];

    let mut radius = [[[0.0; 2]; 2]; 2];
    for i in 0..2 {
        for j in 0..2 {
            for k in 0..2 {
                radius[i][j][k] = xs[i].hypot(ys[j]).hypot(zs[k]); // [m]
            }
        }
    }

    let mut sx = 0.0;
    let mut sy = 0.0;
    let mut sz = 0.0;
    for a in 0..2 {
        for k in 0..2 {
            let sign = parity((a + k) as u32);

            // Hx pairs over j at fixed (i = a, k)
            let rho2 = xs[a].mul_add(xs[a], zs[k] * zs[k]);
            sx += sign * log_ratio_pair(ys, [radius[a][0][k], radius[a][1][k]], rho2);

            // Hy pairs over i at fixed (j = a, k)
            let rho2 = ys[a].mul_add(ys[a], zs[k] * zs[k]);
            sy += sign * log_ratio_pair(xs, [radius[0][a][k], radius[1][a][k]], rho2);
        }
    }
    for i in 0..2 {
        for j in 0..2 {
            for k in 0..2 {
                let r = radius[i][j][k];
                let (x, y, z) = (xs[i], ys[j], zs[k]);
                sz += parity((i + j + k + 1) as u32)
                    * (atan_ratio(x * z, r, y, tol) + atan_ratio(y * z, r, x, tol));
            }
        }
    }

    let h0 = remanence / VACUUM_PERMEABILITY; // [A/m]
    let c_log = h0 / (8.0 * PI);
    let c_atan = h0 / (4.0 * PI);
    Ok(R3::new(c_log * sx, c_log * sy, c_atan * sz))
}

/// `L(u0) − L(u1)` with `L(u) = ln[(R − u)/(R + u)]`, for the two corners
/// that share `ρ²` and differ only in the paired coordinate (`u0 < u1`).
#[inline]
fn log_ratio_pair(u: [Scalar; 2], r: [Scalar; 2], rho2: Scalar) -> Scalar {
    let [u0, u1] = u;
    let [r0, r1] = r;
    if u0 >= 0.0 {
        2.0 * ((r1 + u1) / (r0 + u0)).ln()
    } else if u1 <= 0.0 {
        2.0 * ((r0 - u0) / (r1 - u1)).ln()
    } else {
        2.0 * ((r0 - u0) * (r1 + u1) / rho2).ln()
    }
}

/// `atan(num / (r·den))` with the `den → +0` limit when `|den|` is below `tol`.
#[inline]
fn atan_ratio(num: Scalar, r: Scalar, den: Scalar, tol: Scalar) -> Scalar {
    if den.abs() >= tol {
        (num / (r * den)).atan()
    } else if num.abs() < tol * tol {
        0.0
    } else {
        FRAC_PI_2.copysign(num)
    }
}

fn check_outside(position: &R3, half_extents: &R3, tol: Scalar) -> Result<()> {
    let d = position.abs() - half_extents;
    let region = if d.x < -tol && d.y < -tol && d.z < -tol {
        Some(SingularRegion::Interior)
    } else if (d.x.abs() <= tol && d.y <= tol && d.z <= tol)
        || (d.y.abs() <= tol && d.x <= tol && d.z <= tol)
    {
        Some(SingularRegion::Surface)
    } else {
        None
    };

    match region {
        Some(region) => Err(MagnetError::Singular {
            point: *position,
            region,
        }),
        None => Ok(()),
    }
}
