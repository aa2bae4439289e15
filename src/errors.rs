//! Validation and aggregation errors

use crate::float_types::Real;
use nalgebra::Point3;
use std::fmt::Display;

/// All the possible failures the weights model can report
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WeightError {
    /// (InvalidMass) The mass is negative, NaN or infinite
    InvalidMass(Real),
    /// (InvalidPosition) A position coordinate is NaN or infinite
    InvalidPosition(Point3<Real>),
    /// (WeightNotFound) The member to remove is not in the collection
    WeightNotFound,
    /// (EmptyCollection) A collection with zero members has no centre of gravity
    EmptyCollection,
    /// (UndefinedCentroid) Total mass is zero, the weighted average is 0/0
    UndefinedCentroid,
    /// (TargetMassExceeded) The existing total already exceeds the corrector target
    TargetMassExceeded { total: Real, target: Real },
}

impl Display for WeightError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WeightError::InvalidMass(mass) => write!(f, "(InvalidMass) mass should be a finite value >= 0, got: {}", mass),
            WeightError::InvalidPosition(opoint) => write!(f, "(InvalidPosition) The coordinate ({}) has a NaN or infinite", opoint),
            WeightError::WeightNotFound => write!(f, "(WeightNotFound) The member to remove is not in the collection"),
            WeightError::EmptyCollection => write!(f, "(EmptyCollection) A collection with zero members has no centre of gravity"),
            WeightError::UndefinedCentroid => write!(f, "(UndefinedCentroid) Total mass is zero, the centre of gravity is undefined"),
            WeightError::TargetMassExceeded { total, target } => write!(f, "(TargetMassExceeded) existing total ({:.6}) should not exceed target mass ({:.6})", total, target),
        }
    }
}
