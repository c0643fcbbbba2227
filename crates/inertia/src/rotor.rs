use std::fmt::Display;

use serde::Serialize;

use crate::Vec3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Rotor {
    Diatomic,
    Linear,
    SphericalTop,
    OblateSymmTop,
    ProlateSymmTop,
    AsymmTop,
}

impl Rotor {
    /// compute the type of rotor from the `npoints` points and ascending
    /// principal moments of inertia in `moms`. moments are compared to within
    /// `eps` times the largest moment. These tests are taken from the
    /// [Crawford Programming
    /// Projects](https://github.com/CrawfordGroup/ProgrammingProjects/blob/master/Project%2301/hints/step7-solution.md)
    pub fn classify(npoints: usize, moms: &Vec3, eps: f64) -> Self {
        if npoints == 2 {
            return Rotor::Diatomic;
        }
        let eps = eps * moms[2].abs().max(f64::MIN_POSITIVE);
        let close = |a: f64, b: f64| (a - b).abs() < eps;
        if moms[0].abs() < eps && !close(moms[0], moms[2]) {
            Rotor::Linear
        } else if close(moms[0], moms[1]) && close(moms[1], moms[2]) {
            Rotor::SphericalTop
        } else if close(moms[0], moms[1]) {
            Rotor::OblateSymmTop
        } else if close(moms[1], moms[2]) {
            Rotor::ProlateSymmTop
        } else {
            Rotor::AsymmTop
        }
    }

    /// Report whether the smallest moment of inertia is degenerate, meaning
    /// that the principal axis is only defined up to a rotation within the
    /// degenerate subspace
    pub fn has_degenerate_principal_axis(&self) -> bool {
        matches!(self, Rotor::SphericalTop | Rotor::OblateSymmTop)
    }

    /// Returns `true` if the rotor is [`Linear`] or [`Diatomic`].
    ///
    /// [`Linear`]: Rotor::Linear
    /// [`Diatomic`]: Rotor::Diatomic
    #[must_use]
    pub fn is_linear(&self) -> bool {
        matches!(self, Self::Linear | Self::Diatomic)
    }
}

impl Display for Rotor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Rotor::Diatomic => "diatomic",
                Rotor::Linear => "linear",
                Rotor::SphericalTop => "a spherical top",
                Rotor::OblateSymmTop => "an oblate symmetric top",
                Rotor::ProlateSymmTop => "a prolate symmetric top",
                Rotor::AsymmTop => "an asymmetric top",
            }
        )
    }
}
