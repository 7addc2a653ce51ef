//! 복소수 연산 테스트

use approx::assert_relative_eq;
use num_traits::{One, Zero};

use crate::error::KleinianError;
use crate::ops::complex::{im, re, solve_quadratic, Complex, I, ONE, ZERO};

#[test]
fn test_field_arithmetic() {
    let z = Complex::new(1.0, 2.0);
    let w = Complex::new(3.0, -1.0);

    assert_eq!(z + w, Complex::new(4.0, 1.0));
    assert_eq!(z - w, Complex::new(-2.0, 3.0));
    assert_eq!(z * w, Complex::new(5.0, 5.0));
    assert_eq!(z * 2.0, Complex::new(2.0, 4.0));
    assert_eq!(-z, Complex::new(-1.0, -2.0));
    assert_eq!(z.conj(), Complex::new(1.0, -2.0));
    assert_eq!(z.itimes(), Complex::new(-2.0, 1.0));
    assert_eq!(z.itimes(), z * I);
    assert_eq!(z.sqr(), z * z);
    assert_relative_eq!(Complex::new(3.0, 4.0).norm(), 5.0);
}

#[test]
fn test_division_and_inverse() {
    let z = Complex::new(1.0, 2.0);
    let w = Complex::new(3.0, -1.0);

    let q = (z * w).try_div(w).unwrap();
    assert_relative_eq!(q, z, epsilon = 1e-12);

    let inv = z.try_inv().unwrap();
    assert_relative_eq!(z * inv, ONE, epsilon = 1e-12);

    assert_eq!(z.try_div_real(2.0).unwrap(), Complex::new(0.5, 1.0));
}

#[test]
fn test_zero_division_fails() {
    assert!(matches!(
        ZERO.try_inv(),
        Err(KleinianError::DivisionByZero { .. })
    ));
    assert!(matches!(
        ONE.try_div(ZERO),
        Err(KleinianError::DivisionByZero { .. })
    ));
    assert!(matches!(
        ONE.try_div_real(0.0),
        Err(KleinianError::DivisionByZero { .. })
    ));
}

#[test]
fn test_principal_sqrt_branch() {
    assert_eq!(Complex::new(3.0, 4.0).sqrt(), Complex::new(2.0, 1.0));
    assert_eq!(Complex::new(3.0, -4.0).sqrt(), Complex::new(2.0, -1.0));
    // 음의 실수: 허수부 0 은 양수로 본다
    assert_eq!(re(-4.0).sqrt(), im(2.0));
    assert_eq!(Complex::new(-4.0, -0.0).sqrt(), im(2.0));
    assert_eq!(re(9.0).sqrt(), re(3.0));
    assert_eq!(ZERO.sqrt(), ZERO);
}

#[test]
fn test_sqrt_squares_back() {
    let samples = [
        Complex::new(0.3, -2.5),
        Complex::new(-7.0, 0.01),
        Complex::new(1e-3, 1e3),
        Complex::new(-1.87, -0.1),
    ];
    for z in samples {
        let r = z.sqrt();
        assert!(r.re >= 0.0, "주 제곱근의 실수부는 음수가 아니어야 함: {r}");
        assert_relative_eq!(r.sqr(), z, epsilon = 1e-9, max_relative = 1e-9);
    }
}

#[test]
fn test_solve_quadratic_root_order() {
    // z² + 1 = 0
    let roots = solve_quadratic(ONE, ZERO, ONE).unwrap();
    assert_relative_eq!(roots[0], I, epsilon = 1e-12);
    assert_relative_eq!(roots[1], -I, epsilon = 1e-12);

    // z² - 3z + 2 = 0
    let roots = solve_quadratic(ONE, re(-3.0), re(2.0)).unwrap();
    assert_relative_eq!(roots[0], re(2.0), epsilon = 1e-12);
    assert_relative_eq!(roots[1], re(1.0), epsilon = 1e-12);

    assert!(solve_quadratic(ZERO, ONE, ONE).is_err());
}

#[test]
fn test_display() {
    assert_eq!(re(3.0).to_string(), "3");
    assert_eq!(im(2.0).to_string(), "2i");
    assert_eq!(Complex::new(1.0, 2.0).to_string(), "1 + 2i");
    assert_eq!(Complex::new(1.0, -2.0).to_string(), "1 - 2i");
}

#[test]
fn test_num_traits_identities() {
    assert!(Complex::zero().is_zero());
    assert_eq!(Complex::one(), ONE);
    assert!(!I.is_zero());
}
