use crate::constants::h_to_b;
use crate::math::{R3, Scalar};

/// Field sample holding both the field strength H (A/m) and the free-space flux
/// density B (T).
///
/// Only constructible from H, so `b = μ0·h` holds for every sample.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSample {
    h: R3,
    b: R3,
}

impl FieldSample {
    /// Builds a sample from a field strength vector.
    #[must_use]
    pub fn from_h(h: R3) -> Self {
        Self { h, b: h_to_b(h) }
    }

    /// Field strength in A/m.
    #[must_use]
    pub const fn h(&self) -> R3 {
        self.h
    }

    /// Flux density in T.
    #[must_use]
    pub const fn b(&self) -> R3 {
        self.b
    }

    /// Flux density magnitude in T.
    #[must_use]
    pub fn magnitude(&self) -> Scalar {
        self.b.norm()
    }

    /// Unit direction of the field, or the zero vector for a null field.
    #[must_use]
    pub fn direction(&self) -> R3 {
        let magnitude = self.b.norm();
        if magnitude == 0.0 {
            R3::zeros()
        } else {
            self.b / magnitude
        }
    }
}
