use std::ops::{Add, Mul, Sub};

use approx::{AbsDiffEq, RelativeEq};
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

use super::complex::{Complex, ONE, ZERO};
use crate::error::{KleinianError, Result};

/// 2x2 복소 행렬 [[a, b], [c, d]] 로 표현한 뫼비우스 변환 z ↦ (az + b) / (cz + d)
///
/// 행렬식이 1 일 필요는 없다. 변환은 스칼라 배에 대해 불변이다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Mobius {
    pub a: Complex,
    pub b: Complex,
    pub c: Complex,
    pub d: Complex,
}

pub const IDENTITY: Mobius = Mobius::new(ONE, ZERO, ZERO, ONE);

impl Mobius {
    #[inline]
    pub const fn new(a: Complex, b: Complex, c: Complex, d: Complex) -> Self {
        Self { a, b, c, d }
    }

    #[inline]
    pub fn identity() -> Self {
        IDENTITY
    }

    /// 모든 성분에 실수를 곱한다
    pub fn scale(&self, s: f64) -> Self {
        Self::new(self.a * s, self.b * s, self.c * s, self.d * s)
    }

    /// 모든 성분에 복소수를 곱한다
    pub fn scale_complex(&self, z: Complex) -> Self {
        Self::new(self.a * z, self.b * z, self.c * z, self.d * z)
    }

    #[inline]
    pub fn trace(&self) -> Complex {
        self.a + self.d
    }

    /// ad - bc
    #[inline]
    pub fn det(&self) -> Complex {
        self.a * self.d - self.b * self.c
    }

    /// 수반행렬 / 행렬식
    pub fn inverse(&self) -> Result<Self> {
        let det = self.det();
        if det.is_zero() {
            return Err(KleinianError::div_zero("inverse of singular matrix"));
        }
        let k = det.try_inv()?;
        Ok(Self::new(self.d, -self.b, -self.c, self.a).scale_complex(k))
    }

    /// c = 0 이면 변환은 아핀 z ↦ (a/d) z + b/d 이다
    #[inline]
    pub fn is_affine(&self) -> bool {
        self.c.is_zero()
    }

    pub fn is_finite(&self) -> bool {
        self.a.is_finite() && self.b.is_finite() && self.c.is_finite() && self.d.is_finite()
    }

    /// cz² + (d - a)z - b = 0 의 양의 근 (-(d - a) + sqrt((d - a)² + 4bc)) / 2c
    pub fn fixed_point(&self) -> Result<Complex> {
        if self.is_affine() {
            return Err(KleinianError::UndefinedFixedPoint);
        }
        let dm = self.d - self.a;
        let disc = (dm.sqr() + (self.b * self.c).scale(4.0)).sqrt();
        (-dm + disc).try_div(self.c.scale(2.0))
    }

    /// 점 z 에 변환을 적용한다. 극점 (cz + d = 0) 에서는 에러.
    pub fn apply(&self, z: Complex) -> Result<Complex> {
        let num = self.a * z + self.b;
        let den = self.c * z + self.d;
        if den.is_zero() {
            return Err(KleinianError::div_zero("pole of mobius transform"));
        }
        num.try_div(den)
    }
}

impl Add for Mobius {
    type Output = Mobius;
    fn add(self, m: Mobius) -> Mobius {
        Mobius::new(self.a + m.a, self.b + m.b, self.c + m.c, self.d + m.d)
    }
}

impl Sub for Mobius {
    type Output = Mobius;
    fn sub(self, m: Mobius) -> Mobius {
        Mobius::new(self.a - m.a, self.b - m.b, self.c - m.c, self.d - m.d)
    }
}

/// 행렬 곱. (M · N)(z) = M(N(z)) 이므로 교환법칙은 성립하지 않는다.
impl Mul for Mobius {
    type Output = Mobius;
    fn mul(self, m: Mobius) -> Mobius {
        Mobius::new(
            self.a * m.a + self.b * m.c,
            self.a * m.b + self.b * m.d,
            self.c * m.a + self.d * m.c,
            self.c * m.b + self.d * m.d,
        )
    }
}

impl Mul<Complex> for Mobius {
    type Output = Mobius;
    fn mul(self, z: Complex) -> Mobius {
        self.scale_complex(z)
    }
}

impl Mul<f64> for Mobius {
    type Output = Mobius;
    fn mul(self, s: f64) -> Mobius {
        self.scale(s)
    }
}

impl Zero for Mobius {
    fn zero() -> Self {
        Mobius::new(ZERO, ZERO, ZERO, ZERO)
    }

    fn is_zero(&self) -> bool {
        self.a.is_zero() && self.b.is_zero() && self.c.is_zero() && self.d.is_zero()
    }
}

impl One for Mobius {
    fn one() -> Self {
        IDENTITY
    }
}

impl AbsDiffEq for Mobius {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.a.abs_diff_eq(&other.a, epsilon)
            && self.b.abs_diff_eq(&other.b, epsilon)
            && self.c.abs_diff_eq(&other.c, epsilon)
            && self.d.abs_diff_eq(&other.d, epsilon)
    }
}

impl RelativeEq for Mobius {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.a.relative_eq(&other.a, epsilon, max_relative)
            && self.b.relative_eq(&other.b, epsilon, max_relative)
            && self.c.relative_eq(&other.c, epsilon, max_relative)
            && self.d.relative_eq(&other.d, epsilon, max_relative)
    }
}
