//! 원 변환 테스트

use approx::assert_relative_eq;
use std::f64::consts::PI;

use crate::error::KleinianError;
use crate::ops::circle::Circle;
use crate::ops::complex::{im, re, Complex, ONE, ZERO};
use crate::ops::mobius::{Mobius, IDENTITY};

#[test]
fn test_identity_keeps_circle() {
    let c = Circle::new(Complex::new(0.3, -1.2), 0.75).unwrap();
    assert_eq!(IDENTITY.apply_circle(&c).unwrap(), c);
}

#[test]
fn test_affine_circle_transform() {
    // z ↦ 2i z + 1
    let m = Mobius::new(im(2.0), ONE, ZERO, ONE);
    let c = Circle::new(re(1.0), 0.5).unwrap();
    let image = m.apply_circle(&c).unwrap();
    assert_relative_eq!(image.center, Complex::new(1.0, 2.0), epsilon = 1e-12);
    assert_relative_eq!(image.radius, 1.0, epsilon = 1e-12);

    // 스칼라 배는 같은 변환
    let scaled = m.scale(3.0).apply_circle(&c).unwrap();
    assert_relative_eq!(scaled.center, image.center, epsilon = 1e-12);
    assert_relative_eq!(scaled.radius, image.radius, epsilon = 1e-12);
}

#[test]
fn test_inversion_circle_transform() {
    // z ↦ 1/z 는 [1, 3] 을 지름으로 하는 원을 [1/3, 1] 을 지름으로 하는 원으로 보낸다
    let flip = Mobius::new(ZERO, ONE, ONE, ZERO);
    let c = Circle::new(re(2.0), 1.0).unwrap();
    let image = flip.apply_circle(&c).unwrap();
    assert_relative_eq!(image.center, re(2.0 / 3.0), epsilon = 1e-12);
    assert_relative_eq!(image.radius, 1.0 / 3.0, epsilon = 1e-12);
}

#[test]
fn test_image_contains_transformed_points() {
    let m = Mobius::new(ONE, im(2.0), Complex::new(1.0, 1.0), re(3.0));
    let c = Circle::new(Complex::new(0.3, 0.2), 0.5).unwrap();
    let image = m.apply_circle(&c).unwrap();

    for i in 0..16 {
        let theta = 2.0 * PI * (i as f64) / 16.0;
        let p = c.center + Complex::new(theta.cos(), theta.sin()) * c.radius;
        let q = m.apply(p).unwrap();
        assert_relative_eq!((q - image.center).norm(), image.radius, epsilon = 1e-9);
    }
}

#[test]
fn test_circle_centered_on_pole() {
    // 극점이 중심이면 새 중심은 M(∞) = a/c
    let m = Mobius::new(re(2.0), ONE, ONE, re(-3.0));
    let c = Circle::new(re(3.0), 0.5).unwrap();
    let image = m.apply_circle(&c).unwrap();
    assert_relative_eq!(image.center, re(2.0), epsilon = 1e-12);

    for i in 0..8 {
        let theta = 2.0 * PI * (i as f64) / 8.0;
        let p = c.center + Complex::new(theta.cos(), theta.sin()) * c.radius;
        let q = m.apply(p).unwrap();
        assert_relative_eq!((q - image.center).norm(), image.radius, epsilon = 1e-9);
    }
}

#[test]
fn test_circle_through_pole_fails() {
    // 원점을 지나는 원의 1/z 상은 직선
    let flip = Mobius::new(ZERO, ONE, ONE, ZERO);
    let c = Circle::new(re(1.0), 1.0).unwrap();
    assert!(matches!(
        flip.apply_circle(&c),
        Err(KleinianError::DivisionByZero { .. })
    ));
}

#[test]
fn test_degenerate_radius_rejected() {
    assert!(matches!(
        Circle::new(ZERO, 0.0),
        Err(KleinianError::DegenerateCircle { .. })
    ));
    assert!(Circle::new(ZERO, -1.0).is_err());
    assert!(Circle::new(ZERO, f64::INFINITY).is_err());
    assert!(Circle::new(ZERO, f64::NAN).is_err());
}
