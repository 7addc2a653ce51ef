//! 크레이트 전역 에러 타입

use thiserror::Error;

/// 수치 연산, 그룹 구성, 탐색 설정에서 발생하는 에러
#[derive(Debug, Clone, PartialEq, Error)]
pub enum KleinianError {
    /// 0으로 나누기 (복소수 역원, 행렬 역행렬, 변환의 극점 등)
    #[error("division by zero: {context}")]
    DivisionByZero { context: &'static str },

    /// c = 0 인 변환은 유한한 고정점이 없다
    #[error("fixed point is undefined for an affine transform (c = 0)")]
    UndefinedFixedPoint,

    #[error("invalid generator configuration: {0}")]
    InvalidGeneratorConfiguration(String),

    /// 반지름이 유한한 양수가 아닌 원
    #[error("degenerate circle with radius {radius}")]
    DegenerateCircle { radius: f64 },

    #[error("unknown recipe: {0}")]
    UnknownRecipe(String),

    #[error("invalid explore config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, KleinianError>;

impl KleinianError {
    pub(crate) fn div_zero(context: &'static str) -> Self {
        KleinianError::DivisionByZero { context }
    }

    pub(crate) fn invalid_gens(msg: impl Into<String>) -> Self {
        KleinianError::InvalidGeneratorConfiguration(msg.into())
    }
}
