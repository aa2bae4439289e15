//! `WeightsCollection` struct and its implementation of the
//! [`MassProperties`] trait.

use crate::errors::WeightError;
use crate::float_types::Real;
use crate::traits::{MassProperties, SharedWeight};
use crate::weight::Weight;
use nalgebra::{Point3, Vector3};
use std::sync::Arc;

/// An ordered multiset of members, each anything satisfying
/// [`MassProperties`] — single [`Weight`]s or other collections, nested
/// arbitrarily deep.
///
/// Members are shared read-only handles: inserting never copies, the same
/// handle may appear in several collections (a sub-assembly reused in a
/// larger assembly) and may appear in one collection several times, counting
/// each time. Insertion order is preserved for iteration only; the aggregate
/// math is commutative.
///
/// Total mass and centre of gravity are recomputed from the current members
/// on every read, so they can never go stale across `add`/`remove`.
#[derive(Debug, Clone, Default)]
pub struct WeightsCollection {
    members: Vec<SharedWeight>,
}

impl WeightsCollection {
    /// Create an empty collection.
    pub const fn new() -> Self {
        WeightsCollection { members: Vec::new() }
    }

    /// Build a collection from an existing member list, insertion order kept.
    pub fn from_members(members: Vec<SharedWeight>) -> Self {
        WeightsCollection { members }
    }

    /// Append a shared member.
    pub fn add(&mut self, member: SharedWeight) {
        self.members.push(member);
    }

    /// Wrap `weight` in a shared handle, append it, and return the handle —
    /// keep it around if the weight is to be [`remove`](Self::remove)d or
    /// shared with another collection later.
    pub fn add_weight(&mut self, weight: Weight) -> SharedWeight {
        let member: SharedWeight = Arc::new(weight);
        self.members.push(member.clone());
        member
    }

    /// Remove the first member holding the same allocation as `member`.
    ///
    /// Matching is by identity (`Arc::ptr_eq`), not by value: a weight equal
    /// in mass, position and name but held behind a different handle is not
    /// a match.
    pub fn remove(&mut self, member: &SharedWeight) -> Result<(), WeightError> {
        match self.members.iter().position(|m| Arc::ptr_eq(m, member)) {
            Some(index) => {
                self.members.remove(index);
                Ok(())
            },
            None => Err(WeightError::WeightNotFound),
        }
    }

    /// The members making up the collection, in insertion order.
    pub fn members(&self) -> &[SharedWeight] {
        &self.members
    }

    /// Iterate over the members in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, SharedWeight> {
        self.members.iter()
    }

    /// Number of member entries, duplicates counted.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl<'a> IntoIterator for &'a WeightsCollection {
    type Item = &'a SharedWeight;
    type IntoIter = std::slice::Iter<'a, SharedWeight>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl MassProperties for WeightsCollection {
    /// Total mass [kg]: the arithmetic sum over the members; 0 when empty.
    fn mass(&self) -> Real {
        self.members.iter().map(|member| member.mass()).sum()
    }

    /// Mass-weighted average of the member positions, one axis at a time.
    fn center_of_gravity(&self) -> Result<Point3<Real>, WeightError> {
        if self.members.is_empty() {
            return Err(WeightError::EmptyCollection);
        }
        let total = self.mass();
        if total == 0.0 {
            return Err(WeightError::UndefinedCentroid);
        }

        let mut moment = Vector3::zeros();
        for member in &self.members {
            let mass = member.mass();
            // Massless members contribute no moment; skip them rather than
            // requiring a centre of gravity they may not have.
            if mass == 0.0 {
                continue;
            }
            moment += member.center_of_gravity()?.coords * mass;
        }
        Ok(Point3::from(moment / total))
    }
}
