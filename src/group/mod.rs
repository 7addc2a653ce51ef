//! # 2-생성원 클라인 군
//!
//! 생성원 두 개와 그 역원을 [g0, g1, g0⁻¹, g1⁻¹] 순서로 묶은 `GeneratorSet` 과,
//! 여기에 (쇼트키 군이라면) 경계 원들을 붙인 `KleinianGroup` 을 제공합니다.
//! 인덱스 j 의 역원은 항상 (j + 2) mod 4 입니다.

pub mod recipes;

use approx::relative_eq;

use crate::error::{KleinianError, Result};
use crate::ops::{Circle, Complex, Mobius};

/// 역원 쌍 검증 허용 오차
const PAIRING_TOLERANCE: f64 = 1e-9;

/// 생성원 인덱스 j 의 역원 인덱스
#[inline]
pub const fn inverse_index(j: usize) -> usize {
    (j + 2) % 4
}

/// [g0, g1, g0⁻¹, g1⁻¹]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneratorSet {
    gens: [Mobius; 4],
}

impl GeneratorSet {
    /// 두 생성원으로부터 역원을 계산해 생성원 집합을 만든다.
    pub fn new(a: Mobius, b: Mobius) -> Result<Self> {
        let a_inv = a
            .inverse()
            .map_err(|_| KleinianError::invalid_gens("first generator is not invertible"))?;
        let b_inv = b
            .inverse()
            .map_err(|_| KleinianError::invalid_gens("second generator is not invertible"))?;
        Ok(Self {
            gens: [a, b, a_inv, b_inv],
        })
    }

    /// 이미 만들어진 4-튜플을 검증해서 받는다. 2, 3 번은 0, 1 번의 역행렬이어야 한다.
    pub fn from_array(gens: [Mobius; 4]) -> Result<Self> {
        let expected = Self::new(gens[0], gens[1])?;
        for j in 2..4 {
            if !relative_eq!(
                gens[j],
                expected.gens[j],
                epsilon = PAIRING_TOLERANCE,
                max_relative = PAIRING_TOLERANCE
            ) {
                return Err(KleinianError::invalid_gens(format!(
                    "generator {} is not the inverse of generator {}",
                    j,
                    inverse_index(j)
                )));
            }
        }
        Ok(Self { gens })
    }

    #[inline]
    pub fn get(&self, j: usize) -> &Mobius {
        &self.gens[j]
    }

    pub fn as_array(&self) -> &[Mobius; 4] {
        &self.gens
    }

    pub fn iter(&self) -> impl Iterator<Item = &Mobius> {
        self.gens.iter()
    }

    pub fn a(&self) -> &Mobius {
        &self.gens[0]
    }

    pub fn b(&self) -> &Mobius {
        &self.gens[1]
    }
}

/// 생성원 집합과 (선택적인) 경계 원들
///
/// 경계 원이 비어 있으면 일반 클라인 군, 있으면 쇼트키 군으로 본다.
/// 원들이 서로 겹치지 않는지는 검사하지 않는다.
#[derive(Debug, Clone, PartialEq)]
pub struct KleinianGroup {
    generators: GeneratorSet,
    circles: Vec<Circle>,
}

impl KleinianGroup {
    pub fn new(generators: GeneratorSet) -> Self {
        Self {
            generators,
            circles: Vec::new(),
        }
    }

    pub fn from_pair(a: Mobius, b: Mobius) -> Result<Self> {
        Ok(Self::new(GeneratorSet::new(a, b)?))
    }

    pub fn with_circles(mut self, circles: Vec<Circle>) -> Self {
        self.circles = circles;
        self
    }

    pub fn generators(&self) -> &GeneratorSet {
        &self.generators
    }

    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }

    pub fn is_schottky(&self) -> bool {
        !self.circles.is_empty()
    }

    /// tr(a)² + tr(b)² + tr(ab)² - tr(a)·tr(b)·tr(ab)
    ///
    /// 마르코프 항등식이 성립하는 (결함이 0 인) 군은 교환자 abAB 가 포물형이다.
    pub fn markov_defect(&self) -> Complex {
        let a = *self.generators.a();
        let b = *self.generators.b();
        let ta = a.trace();
        let tb = b.trace();
        let tab = (a * b).trace();
        ta.sqr() + tb.sqr() + tab.sqr() - ta * tb * tab
    }
}

#[cfg(test)]
mod __test__;
