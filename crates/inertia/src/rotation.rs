use std::f64::consts::PI;

use serde::Serialize;

use crate::{Mat3, Tolerances, Vec3};

/// A proper rotation, stored both as a unit axis and an angle in radians and
/// as the equivalent 3x3 matrix.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Rotation {
    pub axis: Vec3,
    pub angle: f64,
    pub matrix: Mat3,
}

/// the skew-symmetric matrix K such that Kv = k × v
fn cross_matrix(k: &Vec3) -> Mat3 {
    nalgebra::matrix![
        0.0, -k.z, k.y;
        k.z, 0.0, -k.x;
        -k.y, k.x, 0.0;
    ]
}

/// return a unit vector perpendicular to `v`, built from the coordinate axis
/// least aligned with `v`
fn perpendicular(v: &Vec3) -> Vec3 {
    let i = v.iamin();
    let mut e = Vec3::zeros();
    e[i] = 1.0;
    v.cross(&e).normalize()
}

impl Rotation {
    pub fn identity() -> Self {
        Self {
            axis: Vec3::z(),
            angle: 0.0,
            matrix: Mat3::identity(),
        }
    }

    /// build the rotation of `angle` radians about the unit vector `axis`
    /// with Rodrigues' formula: R = I + sin(θ)K + (1 - cos(θ))K²
    pub fn from_axis_angle(axis: Vec3, angle: f64) -> Self {
        let k = cross_matrix(&axis);
        let matrix = Mat3::identity()
            + k * angle.sin()
            + k * k * (1.0 - angle.cos());
        Self {
            axis,
            angle,
            matrix,
        }
    }

    /// return the rotation taking the direction of `source` onto the direction
    /// of `target`. When the two are parallel to within `tol.parallel`, the
    /// cross product cannot define an axis: the same direction gives the
    /// identity and the opposite direction gives a half turn about an axis
    /// perpendicular to `source`.
    pub fn between(source: &Vec3, target: &Vec3, tol: &Tolerances) -> Self {
        let s = source.normalize();
        let t = target.normalize();
        let dot = s.dot(&t).clamp(-1.0, 1.0);
        let cross = s.cross(&t);
        let norm = cross.norm();
        if norm < tol.parallel {
            if dot > 0.0 {
                return Self::identity();
            }
            return Self::from_axis_angle(perpendicular(&s), PI);
        }
        Self::from_axis_angle(cross / norm, dot.acos())
    }

    /// rotate `v` by `self`
    pub fn apply(&self, v: &Vec3) -> Vec3 {
        self.matrix * v
    }

    pub fn is_identity(&self) -> bool {
        self.angle == 0.0
    }
}
