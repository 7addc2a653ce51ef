use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use approx::{AbsDiffEq, RelativeEq};
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

use crate::error::{KleinianError, Result};

pub const ZERO: Complex = Complex::new(0.0, 0.0);
pub const ONE: Complex = Complex::new(1.0, 0.0);
pub const I: Complex = Complex::new(0.0, 1.0);
pub const TWO: Complex = Complex::new(2.0, 0.0);
pub const TWO_I: Complex = Complex::new(0.0, 2.0);

/// 복소수 x + iy
///
/// 값 타입이며 모든 연산은 새 값을 돌려준다.
/// 나눗셈과 역원은 0 으로 나누는 경우가 있으므로 `Result` 를 반환한다.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

/// 실수부만 있는 복소수
#[inline]
pub const fn re(x: f64) -> Complex {
    Complex::new(x, 0.0)
}

/// 허수부만 있는 복소수
#[inline]
pub const fn im(y: f64) -> Complex {
    Complex::new(0.0, y)
}

impl Complex {
    #[inline]
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    #[inline]
    pub fn scale(self, s: f64) -> Self {
        Self::new(self.re * s, self.im * s)
    }

    /// i 를 곱한다: i(x + iy) = -y + ix
    #[inline]
    pub fn itimes(self) -> Self {
        Self::new(-self.im, self.re)
    }

    #[inline]
    pub fn conj(self) -> Self {
        Self::new(self.re, -self.im)
    }

    #[inline]
    pub fn norm_sqr(self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    /// 유클리드 노름 |z|
    #[inline]
    pub fn norm(self) -> f64 {
        self.norm_sqr().sqrt()
    }

    #[inline]
    pub fn sqr(self) -> Self {
        self * self
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }

    /// 실수로 나누기
    pub fn try_div_real(self, s: f64) -> Result<Self> {
        if s == 0.0 {
            return Err(KleinianError::div_zero("complex divided by real zero"));
        }
        Ok(Self::new(self.re / s, self.im / s))
    }

    /// 곱셈 역원 1/z = conj(z) / |z|²
    pub fn try_inv(self) -> Result<Self> {
        let n2 = self.norm_sqr();
        if n2 == 0.0 {
            return Err(KleinianError::div_zero("inverse of complex zero"));
        }
        Ok(Self::new(self.re / n2, -self.im / n2))
    }

    /// 복소수로 나누기
    pub fn try_div(self, other: Self) -> Result<Self> {
        Ok(self * other.try_inv()?)
    }

    /// 주 제곱근
    ///
    /// nX = sqrt((|z| + x) / 2), nY = sqrt((|z| - x) / 2) 이고 nY 의 부호는 y 를 따른다.
    /// y = 0 (-0.0 포함) 은 양수로 취급한다. 이 분기 규칙에 따라 이차방정식의 근 순서와
    /// 고정점이 결정되므로 바꾸면 안 된다.
    pub fn sqrt(self) -> Self {
        let n = self.norm();
        // 반올림으로 |z| - x 가 살짝 음수가 되는 경우를 0 으로 막는다
        let nx = ((n + self.re) * 0.5).max(0.0).sqrt();
        let ny = ((n - self.re) * 0.5).max(0.0).sqrt();
        let sign = if self.im >= 0.0 { 1.0 } else { -1.0 };
        Self::new(nx, ny * sign)
    }
}

/// 이차방정식 az² + bz + c = 0 의 두 근
///
/// 인덱스 0 은 (-b + sqrt(b² - 4ac)) / 2a, 인덱스 1 은 (-b - sqrt(..)) / 2a.
pub fn solve_quadratic(a: Complex, b: Complex, c: Complex) -> Result<[Complex; 2]> {
    let disc = (b.sqr() - (a * c).scale(4.0)).sqrt();
    let f = a.scale(2.0);
    Ok([(-b + disc).try_div(f)?, (-b - disc).try_div(f)?])
}

impl Add for Complex {
    type Output = Complex;
    #[inline]
    fn add(self, rhs: Complex) -> Complex {
        Complex::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl Sub for Complex {
    type Output = Complex;
    #[inline]
    fn sub(self, rhs: Complex) -> Complex {
        Complex::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl Mul for Complex {
    type Output = Complex;
    #[inline]
    fn mul(self, rhs: Complex) -> Complex {
        Complex::new(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + self.im * rhs.re,
        )
    }
}

impl Mul<f64> for Complex {
    type Output = Complex;
    #[inline]
    fn mul(self, rhs: f64) -> Complex {
        self.scale(rhs)
    }
}

impl Neg for Complex {
    type Output = Complex;
    #[inline]
    fn neg(self) -> Complex {
        Complex::new(-self.re, -self.im)
    }
}

impl Zero for Complex {
    fn zero() -> Self {
        ZERO
    }

    fn is_zero(&self) -> bool {
        self.re == 0.0 && self.im == 0.0
    }
}

impl One for Complex {
    fn one() -> Self {
        ONE
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.im == 0.0 {
            write!(f, "{}", self.re)
        } else if self.re == 0.0 {
            write!(f, "{}i", self.im)
        } else if self.im > 0.0 {
            write!(f, "{} + {}i", self.re, self.im)
        } else {
            write!(f, "{} - {}i", self.re, -self.im)
        }
    }
}

impl AbsDiffEq for Complex {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.re.abs_diff_eq(&other.re, epsilon) && self.im.abs_diff_eq(&other.im, epsilon)
    }
}

impl RelativeEq for Complex {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.re.relative_eq(&other.re, epsilon, max_relative)
            && self.im.relative_eq(&other.im, epsilon, max_relative)
    }
}
