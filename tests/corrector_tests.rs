mod support;

use cogrs::{MassProperties, Weight, WeightError, WeightsCollection, find_corrector};
use nalgebra::Point3;

use crate::support::approx_point;

#[test]
fn corrector_balances_mass_and_moments() {
    let mut weights = WeightsCollection::new();
    weights.add_weight(Weight::new(10.0, Point3::new(10.0, 0.0, -10.0)).unwrap());

    let corrector =
        find_corrector(&weights, 20.0, Point3::new(50.0, 0.0, 0.0), None).unwrap();
    assert_eq!(corrector.mass(), 10.0);
    assert_eq!(corrector.position(), Point3::new(90.0, 0.0, 10.0));

    // Adding the corrector indeed lands the collection on the target.
    weights.add_weight(corrector);
    assert_eq!(weights.mass(), 20.0);
    assert!(approx_point(
        weights.center_of_gravity().unwrap(),
        [50.0, 0.0, 0.0],
        1e-12
    ));
}

#[test]
fn corrector_accepts_a_bare_weight() {
    let w = Weight::new(10.0, Point3::new(10.0, 0.0, -10.0)).unwrap();
    let corrector = find_corrector(&w, 20.0, Point3::new(50.0, 0.0, 0.0), None).unwrap();
    assert_eq!(corrector.mass(), 10.0);
    assert_eq!(corrector.position(), Point3::new(90.0, 0.0, 10.0));
}

#[test]
fn corrector_towards_the_origin() {
    let mut weights = WeightsCollection::new();
    weights.add_weight(Weight::new(10.0, Point3::new(10.0, 0.0, 0.0)).unwrap());

    let corrector = find_corrector(&weights, 20.0, Point3::origin(), None).unwrap();
    assert_eq!(corrector.mass(), 10.0);
    assert_eq!(corrector.position(), Point3::new(-10.0, 0.0, 0.0));

    let mut weights = WeightsCollection::new();
    weights.add_weight(Weight::new(10.0, Point3::origin()).unwrap());

    let corrector = find_corrector(&weights, 20.0, Point3::origin(), None).unwrap();
    assert_eq!(corrector.mass(), 10.0);
    assert_eq!(corrector.position(), Point3::origin());
}

#[test]
fn override_z_forces_the_corrector_height() {
    let mut weights = WeightsCollection::new();
    weights.add_weight(Weight::new(10.0, Point3::new(10.0, 0.0, -10.0)).unwrap());

    let corrector =
        find_corrector(&weights, 20.0, Point3::new(50.0, 0.0, 0.0), Some(2.5)).unwrap();
    assert_eq!(corrector.mass(), 10.0);
    assert_eq!(corrector.position(), Point3::new(90.0, 0.0, 2.5));
}

#[test]
fn target_below_existing_total_is_rejected() {
    let mut weights = WeightsCollection::new();
    weights.add_weight(Weight::new(30.0, Point3::origin()).unwrap());

    let err = find_corrector(&weights, 20.0, Point3::origin(), None).unwrap_err();
    assert!(matches!(err, WeightError::TargetMassExceeded { .. }));
}

#[test]
fn existing_cg_errors_propagate() {
    let weights = WeightsCollection::new();
    let err = find_corrector(&weights, 20.0, Point3::origin(), None).unwrap_err();
    assert_eq!(err, WeightError::EmptyCollection);

    let mut weights = WeightsCollection::new();
    weights.add_weight(Weight::new(0.0, Point3::origin()).unwrap());
    let err = find_corrector(&weights, 20.0, Point3::origin(), None).unwrap_err();
    assert_eq!(err, WeightError::UndefinedCentroid);
}

#[test]
fn zero_corrector_mass_cannot_be_positioned() {
    // Existing total already equals the target: the moment balance divides
    // by a zero corrector mass and no finite position exists.
    let mut weights = WeightsCollection::new();
    weights.add_weight(Weight::new(20.0, Point3::new(1.0, 0.0, 0.0)).unwrap());

    let err = find_corrector(&weights, 20.0, Point3::new(2.0, 0.0, 0.0), None).unwrap_err();
    assert!(matches!(err, WeightError::InvalidPosition(_)));
}
