use std::{error::Error, fmt::Display, str::FromStr};

use approx::AbsDiffEq;
use serde::{Deserialize, Serialize};

pub use align::{Alignment, align};
pub use eigen::{PrincipalAxes, principal_axes};
pub use rotation::Rotation;
pub use rotor::Rotor;

#[cfg(test)]
mod tests;

mod align;
pub mod eigen;
pub mod rotation;
pub mod rotor;

use nalgebra as na;

pub type Vec3 = na::Vector3<f64>;
pub type Mat3 = na::Matrix3<f64>;

// restrict these to the cartesian axes. arbitrary target vectors would need
// the caller to pick a sign convention for the principal axis
#[derive(
    Debug, Default, PartialEq, Eq, Copy, Clone, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X = 0,
    Y = 1,
    #[default]
    Z = 2,
}

impl Axis {
    /// the unit vector along `self`
    pub fn unit(&self) -> Vec3 {
        let mut ret = Vec3::zeros();
        ret[*self as usize] = 1.0;
        ret
    }
}

impl Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Axis::X => "x",
                Axis::Y => "y",
                Axis::Z => "z",
            }
        )
    }
}

impl FromStr for Axis {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "x" => Ok(Axis::X),
            "y" => Ok(Axis::Y),
            "z" => Ok(Axis::Z),
            _ => Err(format!("unrecognized axis `{s}`, expected x, y, or z")),
        }
    }
}

/// Numerical tolerances used throughout the alignment. These can be loaded
/// from the `[tolerances]` table of a config file; missing fields take their
/// default values.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Tolerances {
    /// threshold on |s × t| below which the source and target axes are
    /// treated as parallel or anti-parallel
    pub parallel: f64,

    /// convergence threshold for the Jacobi eigensolver, relative to the
    /// Frobenius norm of the input matrix
    pub jacobi: f64,

    /// maximum number of Jacobi sweeps before giving up
    pub max_sweeps: usize,

    /// relative tolerance for treating two principal moments as equal
    pub degenerate: f64,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            parallel: 1e-9,
            jacobi: 1e-12,
            max_sweeps: 100,
            degenerate: 1e-9,
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum AlignError {
    /// the point set is empty, has mismatched lengths, or has no positive
    /// total mass
    DegenerateInput(String),
    /// the eigensolver failed to converge within `sweeps` sweeps
    Numerical { sweeps: usize },
}

impl AlignError {
    /// Returns `true` if the align error is [`DegenerateInput`].
    ///
    /// [`DegenerateInput`]: AlignError::DegenerateInput
    #[must_use]
    pub fn is_degenerate_input(&self) -> bool {
        matches!(self, Self::DegenerateInput(..))
    }

    /// Returns `true` if the align error is [`Numerical`].
    ///
    /// [`Numerical`]: AlignError::Numerical
    #[must_use]
    pub fn is_numerical(&self) -> bool {
        matches!(self, Self::Numerical { .. })
    }
}

impl Display for AlignError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlignError::DegenerateInput(msg) => {
                write!(f, "degenerate input: {msg}")
            }
            AlignError::Numerical { sweeps } => write!(
                f,
                "eigensolver failed to converge after {sweeps} sweeps"
            ),
        }
    }
}

impl Error for AlignError {}

/// return Σmᵢpᵢ and Σmᵢ
fn weighted_sum(positions: &[Vec3], masses: &[f64]) -> (Vec3, f64) {
    let mut sum = 0.0;
    let mut com = Vec3::zeros();
    for (p, &w) in positions.iter().zip(masses) {
        sum += w;
        com += w * p;
    }
    (com, sum)
}

/// compute the mass-weighted mean of `positions`. fails if there are no
/// points, if the lengths differ, or if the total mass is not positive
pub fn center_of_mass(
    positions: &[Vec3],
    masses: &[f64],
) -> Result<Vec3, AlignError> {
    if positions.is_empty() {
        return Err(AlignError::DegenerateInput("no points".to_owned()));
    }
    if positions.len() != masses.len() {
        return Err(AlignError::DegenerateInput(format!(
            "{} positions but {} masses",
            positions.len(),
            masses.len()
        )));
    }
    let (com, sum) = weighted_sum(positions, masses);
    if sum <= 0.0 {
        return Err(AlignError::DegenerateInput(format!(
            "total mass is {sum}"
        )));
    }
    Ok(com / sum)
}

/// An ordered set of weighted points. Order is significant: the i-th output
/// position of an alignment corresponds to the i-th input position.
#[derive(Clone, Debug, PartialEq)]
pub struct PointSet {
    positions: Vec<Vec3>,
    masses: Vec<f64>,
}

impl PointSet {
    /// build a `PointSet`, checking that `positions` and `masses` have the
    /// same nonzero length, that every mass is finite and non-negative, and
    /// that the total mass is positive
    pub fn new(
        positions: Vec<Vec3>,
        masses: Vec<f64>,
    ) -> Result<Self, AlignError> {
        if let Some((i, m)) = masses
            .iter()
            .enumerate()
            .find(|(_, m)| !m.is_finite() || **m < 0.0)
        {
            return Err(AlignError::DegenerateInput(format!(
                "invalid mass {m} for point {i}"
            )));
        }
        // catches empty sets, length mismatches, and zero total mass
        center_of_mass(&positions, &masses)?;
        Ok(Self { positions, masses })
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn masses(&self) -> &[f64] {
        &self.masses
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn total_mass(&self) -> f64 {
        self.masses.iter().sum()
    }

    /// compute the center of mass of `self`
    pub fn com(&self) -> Vec3 {
        // `new` already rejected a zero total mass
        let (com, sum) = weighted_sum(&self.positions, &self.masses);
        com / sum
    }

    /// compute the moment of inertia tensor about the origin. call this on a
    /// centered `PointSet` to get the tensor about the center of mass
    pub fn moi(&self) -> Mat3 {
        let mut ret = Mat3::zeros();
        for (p, &w) in self.positions.iter().zip(&self.masses) {
            let (x, y, z) = (p.x, p.y, p.z);
            // diagonal
            ret[(0, 0)] += w * (y * y + z * z);
            ret[(1, 1)] += w * (x * x + z * z);
            ret[(2, 2)] += w * (x * x + y * y);
            // off-diagonal
            ret[(1, 0)] -= w * x * y;
            ret[(2, 0)] -= w * x * z;
            ret[(2, 1)] -= w * y * z;
        }
        ret[(0, 1)] = ret[(1, 0)];
        ret[(0, 2)] = ret[(2, 0)];
        ret[(1, 2)] = ret[(2, 1)];
        ret
    }

    /// translate each of the points in `self` by `vec`
    pub fn translate(&mut self, vec: Vec3) -> &mut Self {
        for p in self.positions.iter_mut() {
            *p += vec;
        }
        self
    }

    /// return a copy of `self` translated so that its center of mass is at
    /// the origin, along with the center of mass that was removed
    pub fn centered(&self) -> (Self, Vec3) {
        let com = self.com();
        let mut ret = self.clone();
        ret.translate(-com);
        (ret, com)
    }

    /// apply the transformation matrix `mat` to the points in `self` and
    /// return the new `PointSet`
    pub fn transform(&self, mat: &Mat3) -> Self {
        Self {
            positions: self.positions.iter().map(|p| mat * p).collect(),
            masses: self.masses.clone(),
        }
    }
}

/// Two `PointSet`s are AbsDiffEq if they have the same masses and each pair
/// of corresponding positions is within `epsilon`
impl AbsDiffEq for PointSet {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        1e-8
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.masses == other.masses
            && self.positions.len() == other.positions.len()
            && self
                .positions
                .iter()
                .zip(&other.positions)
                .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl Display for PointSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let precision = f.precision().unwrap_or(8);
        let width = f.width().unwrap_or(precision + 4);
        writeln!(f)?;
        for (p, m) in self.positions.iter().zip(&self.masses) {
            writeln!(
                f,
                "{:w$.p$}{:w$.p$}{:w$.p$}{:w$.p$}",
                m,
                p.x,
                p.y,
                p.z,
                w = width,
                p = precision,
            )?;
        }
        Ok(())
    }
}

/// build a `PointSet` from `mass x y z` literals, mostly for tests
#[macro_export]
macro_rules! points {
    ($($m:literal $x:literal $y:literal $z:literal)+) => {
	$crate::PointSet::new(
	    vec![$($crate::Vec3::new($x as f64, $y as f64, $z as f64),)*],
	    vec![$($m as f64,)*],
	)
    };
}
