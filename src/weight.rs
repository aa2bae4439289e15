//! A punctual mass with a position in 3D space.

use crate::errors::WeightError;
use crate::float_types::Real;
use crate::traits::MassProperties;
use nalgebra::Point3;
use std::fmt::Display;

/// A point mass, canonical kilograms at a position in metres.
///
/// Immutable once constructed; share one across collections through
/// [`SharedWeight`](crate::traits::SharedWeight) instead of cloning it, so
/// identity-based removal keeps working.
#[derive(Debug, Clone, PartialEq)]
pub struct Weight {
    mass: Real,
    position: Point3<Real>,
    name: Option<String>,
}

impl Weight {
    /// Create a new [`Weight`].
    ///
    /// * `mass`     – mass [kg], finite and >= 0
    /// * `position` – centre of gravity [m], finite coordinates
    pub fn new(mass: Real, position: Point3<Real>) -> Result<Self, WeightError> {
        if !mass.is_finite() || mass < 0.0 {
            return Err(WeightError::InvalidMass(mass));
        }
        if !position.coords.iter().all(|coordinate| coordinate.is_finite()) {
            return Err(WeightError::InvalidPosition(position));
        }
        Ok(Weight { mass, position, name: None })
    }

    /// Same as [`Weight::new`] with a diagnostic label attached. The name
    /// plays no role in any computation.
    pub fn named(
        mass: Real,
        position: Point3<Real>,
        name: impl Into<String>,
    ) -> Result<Self, WeightError> {
        let mut weight = Weight::new(mass, position)?;
        weight.name = Some(name.into());
        Ok(weight)
    }

    /// Mass [kg], unchanged for the object's lifetime.
    pub const fn mass(&self) -> Real {
        self.mass
    }

    /// Position / centre of gravity [m], unchanged for the object's lifetime.
    pub fn position(&self) -> Point3<Real> {
        self.position
    }

    /// Diagnostic label, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl Display for Weight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Weight <{}> : {} [kg] @ {} {} {} [m]",
            self.name.as_deref().unwrap_or(""),
            self.mass,
            self.position.x,
            self.position.y,
            self.position.z
        )
    }
}

impl MassProperties for Weight {
    fn mass(&self) -> Real {
        self.mass
    }

    /// A single weight is its own centre of gravity.
    fn center_of_gravity(&self) -> Result<Point3<Real>, WeightError> {
        Ok(self.position)
    }
}
