//! Solve for the corrector weight that brings an assembly onto a target
//! mass and centre of gravity.

use crate::errors::WeightError;
use crate::float_types::Real;
use crate::traits::MassProperties;
use crate::weight::Weight;
use nalgebra::Point3;

/// Find the [`Weight`] that has to be added to `existing` so that the
/// combined result weighs `target_mass` with its centre of gravity at
/// `target_cg`.
///
/// `existing` is anything with mass properties: a single [`Weight`] or a
/// whole [`WeightsCollection`](crate::collection::WeightsCollection).
/// `override_z` forces the Z coordinate of the corrector instead of the
/// solved one, abandoning the moment balance along Z.
///
/// Fails with [`WeightError::TargetMassExceeded`] when `existing` already
/// outweighs the target, and propagates the centre-of-gravity errors of
/// `existing`. When `existing` sits exactly at `target_mass`, zero mass is
/// left for the corrector and no finite position balances the moments; the
/// resulting non-finite coordinates are rejected by [`Weight::new`].
pub fn find_corrector(
    existing: &dyn MassProperties,
    target_mass: Real,
    target_cg: Point3<Real>,
    override_z: Option<Real>,
) -> Result<Weight, WeightError> {
    let total = existing.mass();
    if total > target_mass {
        return Err(WeightError::TargetMassExceeded { total, target: target_mass });
    }
    let cg = existing.center_of_gravity()?;
    let corrector_mass = target_mass - total;

    // Moment balance per axis: existing + corrector must sum to the target.
    let x = (target_cg.x * target_mass - total * cg.x) / corrector_mass;
    let y = (target_cg.y * target_mass - total * cg.y) / corrector_mass;
    let z = match override_z {
        None => (target_cg.z * target_mass - total * cg.z) / corrector_mass,
        Some(forced_z) => forced_z,
    };

    Weight::new(corrector_mass, Point3::new(x, y, z))
}
