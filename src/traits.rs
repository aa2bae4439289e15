use crate::errors::WeightError;
use crate::float_types::{GRAVITY_STANDARD, Real};
use crate::force::Force;
use nalgebra::{Point3, Vector3};
use std::fmt::Debug;
use std::sync::Arc;

/// Shared read-only handle to anything with mass properties. Collections
/// store their members through this alias, so a `Weight` and a whole
/// sub-assembly collection insert the same way.
pub type SharedWeight = Arc<dyn MassProperties>;

/// Mass + centre of gravity
///
/// The one capability the whole crate revolves around: a total mass in
/// kilograms and a centre of gravity in metres. A single [`Weight`](crate::weight::Weight)
/// satisfies it trivially; a [`WeightsCollection`](crate::collection::WeightsCollection)
/// satisfies it as an aggregate over its members, which makes collections
/// nestable inside other collections.
pub trait MassProperties: Debug + Send + Sync {
    /// Total mass [kg].
    fn mass(&self) -> Real;

    /// Centre of gravity, coordinates in [m].
    ///
    /// Aggregates recompute this from their current members on every call;
    /// it is never cached.
    fn center_of_gravity(&self) -> Result<Point3<Real>, WeightError>;

    /// Gravitational force exerted on the mass, applied at the centre of
    /// gravity, in global coordinates.
    fn gravity_force(&self) -> Result<Force, WeightError> {
        Ok(Force::new(
            Vector3::new(0.0, 0.0, -self.mass() * GRAVITY_STANDARD),
            self.center_of_gravity()?,
        ))
    }
}
