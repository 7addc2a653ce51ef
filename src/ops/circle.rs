use num_traits::Zero;
use serde::{Deserialize, Serialize};

use super::complex::{re, Complex};
use super::mobius::Mobius;
use crate::error::{KleinianError, Result};

/// 중심과 반지름으로 정의한 원. 반지름은 유한한 양수여야 한다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Complex,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Complex, radius: f64) -> Result<Self> {
        if !(radius.is_finite() && radius > 0.0) || !center.is_finite() {
            return Err(KleinianError::DegenerateCircle { radius });
        }
        Ok(Self { center, radius })
    }
}

impl Mobius {
    /// 원을 뫼비우스 변환으로 옮긴다.
    ///
    /// 일반적인 경우 극점 -d/c 의 원에 대한 반전점 z' = P - r² / conj(d/c + P) 가
    /// 새 원의 중심으로 가고, 반지름은 |M(z') - M(P + r)| 이다.
    /// 극점이 원의 중심이면 z' 는 무한원점이고 새 중심은 M(∞) = a/c 이다.
    /// 극점이 원 위에 있으면 상은 직선이므로 `DivisionByZero`.
    /// c = 0 (아핀) 이면 z ↦ (a/d) z + b/d 를 중심과 반지름에 직접 적용한다.
    pub fn apply_circle(&self, circle: &Circle) -> Result<Circle> {
        let (center, radius) = if self.is_affine() {
            if self.d.is_zero() {
                return Err(KleinianError::div_zero("affine circle transform with d = 0"));
            }
            let k = self.a.try_div(self.d)?;
            let t = self.b.try_div(self.d)?;
            (k * circle.center + t, k.norm() * circle.radius)
        } else {
            let den = self.d.try_div(self.c)? + circle.center;
            let at_infinity = self.a.try_div(self.c)?;
            let center = if den.is_zero() {
                at_infinity
            } else {
                let r2 = re(circle.radius * circle.radius);
                let z = circle.center - r2.try_div(den.conj())?;
                if z.is_finite() {
                    self.apply(z)?
                } else {
                    at_infinity
                }
            };
            let edge = self.apply(circle.center + re(circle.radius))?;
            (center, (center - edge).norm())
        };
        Circle::new(center, radius)
    }
}
