use serde::Serialize;

use crate::{
    AlignError, Axis, PointSet, PrincipalAxes, Rotation, Rotor, Tolerances,
    Vec3, principal_axes,
};

/// The result of aligning a `PointSet` to a Cartesian axis
#[derive(Clone, Debug, Serialize)]
pub struct Alignment {
    /// the rotated points, in the same order as the input
    #[serde(skip)]
    pub points: PointSet,

    /// the center of mass, which is unchanged by the rotation
    pub com: Vec3,

    /// the principal moments and axes of the input points
    pub principal: PrincipalAxes,

    pub rotor: Rotor,

    pub target: Axis,

    /// the rotation taking the principal axis onto `target`
    pub rotation: Rotation,
}

/// rotate `points` about their center of mass so that the axis with the
/// smallest moment of inertia lies along `target`
pub fn align(
    points: &PointSet,
    target: Axis,
    tol: &Tolerances,
) -> Result<Alignment, AlignError> {
    let (centered, com) = points.centered();
    log::debug!("center of mass = {com:.8}");

    let moi = centered.moi();
    let principal = principal_axes(&moi, tol)?;
    let rotor =
        Rotor::classify(points.len(), &principal.moments, tol.degenerate);
    log::debug!(
        "principal moments = {:.8}, structure is {rotor}",
        principal.moments
    );
    if rotor.has_degenerate_principal_axis() {
        log::warn!(
            "the smallest principal moment is degenerate for {rotor}, \
             the principal axis is arbitrary within the degenerate subspace"
        );
    }

    let rotation =
        Rotation::between(&principal.principal(), &target.unit(), tol);
    if rotation.is_identity() {
        log::info!("principal axis already lies along {target}");
    } else {
        log::info!(
            "rotating by {:.4}° about {:.6} to align with {target}",
            rotation.angle.to_degrees(),
            rotation.axis
        );
    }

    let mut aligned = centered.transform(&rotation.matrix);
    aligned.translate(com);
    log::trace!("aligned points:{aligned:.6}");
    Ok(Alignment {
        points: aligned,
        com,
        principal,
        rotor,
        target,
        rotation,
    })
}
