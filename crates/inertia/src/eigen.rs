//! eigendecomposition of small symmetric matrices

use serde::Serialize;

use crate::{AlignError, Mat3, Tolerances, Vec3};

/// the upper-triangle index pairs visited by each Jacobi sweep
const PAIRS: [(usize, usize); 3] = [(0, 1), (0, 2), (1, 2)];

/// The principal moments of inertia in ascending order and the corresponding
/// principal axes as the columns of `axes`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PrincipalAxes {
    pub moments: Vec3,
    pub axes: Mat3,
}

impl PrincipalAxes {
    /// the axis with the smallest moment of inertia
    pub fn principal(&self) -> Vec3 {
        self.axes.column(0).into_owned()
    }
}

/// eigenfactorize the moment of inertia tensor `moi` and return the principal
/// moments and axes, sorted in ascending order by moment
pub fn principal_axes(
    moi: &Mat3,
    tol: &Tolerances,
) -> Result<PrincipalAxes, AlignError> {
    let (vals, vecs) = jacobi(moi, tol)?;
    let (moments, mut axes) = eigen_sort(vals, vecs);
    // sorting can swap two columns, so restore a right-handed frame
    if axes.determinant() < 0.0 {
        let flipped = -axes.column(2);
        axes.set_column(2, &flipped);
    }
    Ok(PrincipalAxes { moments, axes })
}

/// square root of the sum of squares of the off-diagonal elements of `a`
fn off_norm(a: &Mat3) -> f64 {
    PAIRS
        .iter()
        .map(|&(p, q)| 2.0 * a[(p, q)] * a[(p, q)])
        .sum::<f64>()
        .sqrt()
}

/// diagonalize the symmetric matrix `mat` with cyclic Jacobi rotations. the
/// eigenvalues are returned in diagonal order and the eigenvectors as the
/// columns of the second element. since the eigenvector matrix is a product of
/// plane rotations, it is orthonormal with determinant +1.
///
/// Each rotation zeroes the (p, q) element using the update from Numerical
/// Recipes §11.1: with θ = (a_qq - a_pp) / 2a_pq, t = sgn(θ) / (|θ| + √(θ² +
/// 1)), c = 1 / √(t² + 1), and s = tc, A' = PᵀAP.
pub fn jacobi(
    mat: &Mat3,
    tol: &Tolerances,
) -> Result<(Vec3, Mat3), AlignError> {
    let mut a = *mat;
    let mut v = Mat3::identity();
    let scale = a.norm();
    for sweep in 0..=tol.max_sweeps {
        if off_norm(&a) <= tol.jacobi * scale {
            log::trace!("jacobi converged after {sweep} sweeps");
            return Ok((a.diagonal(), v));
        }
        if sweep == tol.max_sweeps {
            break;
        }
        for (p, q) in PAIRS {
            let apq = a[(p, q)];
            if apq == 0.0 {
                continue;
            }
            let theta = (a[(q, q)] - a[(p, p)]) / (2.0 * apq);
            // hypot keeps θ² from overflowing when a_pq is tiny
            let t = theta.signum() / (theta.abs() + theta.hypot(1.0));
            let c = 1.0 / t.hypot(1.0);
            let s = t * c;
            let mut rot = Mat3::identity();
            rot[(p, p)] = c;
            rot[(q, q)] = c;
            rot[(p, q)] = s;
            rot[(q, p)] = -s;
            a = rot.transpose() * a * rot;
            a[(p, q)] = 0.0;
            a[(q, p)] = 0.0;
            v *= rot;
        }
    }
    Err(AlignError::Numerical {
        sweeps: tol.max_sweeps,
    })
}

/// sort the eigenvalues and eigenvectors in ascending order by eigenvalue
pub fn eigen_sort(vals: Vec3, vecs: Mat3) -> (Vec3, Mat3) {
    let mut pairs: Vec<_> = vals.iter().enumerate().collect();
    pairs.sort_by(|(_, a), (_, b)| a.total_cmp(b));
    let mut ret = Mat3::zeros();
    for (i, (p, _)) in pairs.iter().enumerate() {
        ret.set_column(i, &vecs.column(*p));
    }
    (Vec3::from_iterator(pairs.iter().map(|(_, v)| **v)), ret)
}
