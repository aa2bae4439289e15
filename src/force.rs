//! Notion of force across the library.

use crate::float_types::Real;
use nalgebra::{Point3, Vector3};

/// A force vector together with its point of application.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Force {
    /// Force components [N]
    pub vector: Vector3<Real>,
    /// Point of application [m]
    pub point: Point3<Real>,
}

impl Force {
    /// Create a new [`Force`].
    pub const fn new(vector: Vector3<Real>, point: Point3<Real>) -> Self {
        Force { vector, point }
    }

    /// Magnitude of the force [N].
    pub fn magnitude(&self) -> Real {
        self.vector.norm()
    }
}
