use std::f64::consts::PI;

use super::vector::Vec3;

/// Smallest rotation step, in radians.
pub const LIMIT: f64 = PI / 1000.0;

/// Resting orientation: the eye looks straight at the viewer.
pub const CENTER: f64 = (PI - LIMIT) / 2.0;

/// Lowest orientation the eye may roll to, for a given restriction factor.
#[inline]
pub fn restricted_limit(eye_roll_restriction: f64) -> f64 {
    LIMIT * eye_roll_restriction
}

/// Eye-roll orientation used by [`project`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RotationState {
    pub theta: f64,
    pub phi: f64,
}

impl RotationState {
    #[inline]
    pub const fn new(theta: f64, phi: f64) -> Self {
        Self { theta, phi }
    }

    /// Both angles set to the same value.
    #[inline]
    pub const fn uniform(angle: f64) -> Self {
        Self::new(angle, angle)
    }
}

impl Default for RotationState {
    fn default() -> Self {
        Self::uniform(CENTER)
    }
}

/// Rotates `n` by `rotation` and writes the camera-space result into `out`.
///
/// A pure rotation: lengths are preserved. Returns a copy of `out`.
pub fn project(out: &mut Vec3, n: Vec3, rotation: RotationState) -> Vec3 {
    let (st, ct) = rotation.theta.sin_cos();
    let (sp, cp) = rotation.phi.sin_cos();
    let a = n.x * ct + n.y * st;

    *out.set(n.y * ct - n.x * st, cp * n.z - sp * a, cp * a + sp * n.z)
}
