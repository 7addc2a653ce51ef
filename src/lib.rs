//! # Kleinian Stone
//!
//! 2-생성원 클라인/쇼트키 군의 극한집합을 계산합니다.
//!
//! * [`ops`] - 복소수, 뫼비우스 변환 행렬, 원 변환
//! * [`group`] - 생성원 집합 [g0, g1, g0⁻¹, g1⁻¹] 과 레시피
//! * [`explore`] - 카오스 게임 샘플러와 되돌림 없는 트리 탐색
//!
//! 결과는 [`explore::Sink`] 로 흘러가며 래스터화나 이미지 저장은 바깥의 몫입니다.

pub mod config;
pub mod error;
pub mod explore;
pub mod group;
pub mod ops;

#[cfg(feature = "python")]
mod bindings;

pub use config::ExploreConfig;
pub use error::{KleinianError, Result};
pub use explore::{
    explore_orbit, explore_tree, Budget, Collector, Emission, LimitTree, OrbitSampler, Outcome,
    Sink,
};
pub use group::{inverse_index, GeneratorSet, KleinianGroup};
pub use ops::{Circle, Complex, Mobius};
