use approx::assert_relative_eq;

use crate::error::KleinianError;
use crate::group::{inverse_index, GeneratorSet, KleinianGroup};
use crate::ops::{im, re, Complex, Mobius, IDENTITY, ONE, ZERO};


fn pair() -> (Mobius, Mobius) {
    (
        Mobius::new(re(2.0), ONE, ONE, ONE),
        Mobius::new(ONE, im(2.0), Complex::new(1.0, 1.0), re(3.0)),
    )
}

#[test]
fn test_inverse_index_pairs() {
    assert_eq!(inverse_index(0), 2);
    assert_eq!(inverse_index(1), 3);
    assert_eq!(inverse_index(2), 0);
    assert_eq!(inverse_index(3), 1);
}

#[test]
fn test_generator_set_layout() {
    let (a, b) = pair();
    let gens = GeneratorSet::new(a, b).unwrap();

    assert_eq!(*gens.get(0), a);
    assert_eq!(*gens.get(1), b);
    assert_relative_eq!(*gens.get(2), a.inverse().unwrap());
    assert_relative_eq!(*gens.get(3), b.inverse().unwrap());

    for j in 0..4 {
        let product = *gens.get(j) * *gens.get(inverse_index(j));
        assert_relative_eq!(product, IDENTITY, epsilon = 1e-12);
    }
    assert_eq!(gens.iter().count(), 4);
}

#[test]
fn test_singular_seed_rejected() {
    let (a, _) = pair();
    let singular = Mobius::new(ONE, re(2.0), re(2.0), re(4.0));
    assert!(matches!(
        GeneratorSet::new(a, singular),
        Err(KleinianError::InvalidGeneratorConfiguration(_))
    ));
    assert!(matches!(
        GeneratorSet::new(singular, a),
        Err(KleinianError::InvalidGeneratorConfiguration(_))
    ));
}

#[test]
fn test_from_array_checks_pairing() {
    let (a, b) = pair();
    let good = GeneratorSet::new(a, b).unwrap();
    assert_eq!(GeneratorSet::from_array(*good.as_array()).unwrap(), good);

    // 역원 자리를 바꾸면 거부
    let swapped = [a, b, *good.get(3), *good.get(2)];
    assert!(matches!(
        GeneratorSet::from_array(swapped),
        Err(KleinianError::InvalidGeneratorConfiguration(_))
    ));
}

#[test]
fn test_group_composition() {
    let (a, b) = pair();
    let group = KleinianGroup::from_pair(a, b).unwrap();
    assert!(!group.is_schottky());
    assert!(group.circles().is_empty());

    let circle = crate::ops::Circle::new(ZERO, 1.0).unwrap();
    let group = group.with_circles(vec![circle]);
    assert!(group.is_schottky());
    assert_eq!(group.circles(), &[circle]);
    assert_eq!(*group.generators().a(), a);
}
