//! # 극한집합 탐색
//!
//! 두 가지 알고리즘으로 군의 극한집합을 근사합니다.
//!
//! * [`OrbitSampler`] - 무작위 생성원을 반복 적용하는 카오스 게임 (점)
//! * [`LimitTree`] - 역원 되돌림을 제거한 케일리 그래프 탐색 (원)
//!
//! 결과는 [`Sink`] 로 흘려보내며, 계산 중 수치가 망가진 점이나 원은 버리고 계속 진행합니다.

pub mod orbit;
pub mod sink;
pub mod tree;

use std::time::{Duration, Instant};

use tracing::{info, warn};

use crate::config::ExploreConfig;
use crate::error::Result;
use crate::group::KleinianGroup;

pub use self::orbit::OrbitSampler;
pub use self::sink::{Collector, Emission, Sink};
pub use self::tree::LimitTree;

/// 협력적 취소를 위한 작업량 한도
///
/// 방출(emit) 개수 한도와 마감 시각을 함께 가진다. 작업 단위 사이에서만 확인한다.
#[derive(Debug, Clone, Copy, Default)]
pub struct Budget {
    max_items: Option<usize>,
    deadline: Option<Instant>,
}

impl Budget {
    pub fn unlimited() -> Self {
        Self::default()
    }

    pub fn with_max_items(mut self, n: usize) -> Self {
        self.max_items = Some(n);
        self
    }

    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    pub fn max_items(&self) -> Option<usize> {
        self.max_items
    }

    /// 개수 한도만 확인한다
    #[inline]
    pub fn has_room(&self, produced: usize) -> bool {
        self.max_items.map_or(true, |max| produced < max)
    }

    pub fn past_deadline(&self) -> bool {
        self.deadline.map_or(false, |deadline| Instant::now() >= deadline)
    }

    /// 지금까지 `produced` 개를 방출했을 때 더 진행할 수 있는지
    pub fn allows(&self, produced: usize) -> bool {
        self.has_room(produced) && !self.past_deadline()
    }

    /// `produced` 개를 이미 쓴 뒤 남은 한도
    pub fn remaining_after(&self, produced: usize) -> Budget {
        Budget {
            max_items: self.max_items.map(|max| max.saturating_sub(produced)),
            deadline: self.deadline,
        }
    }
}

/// 한 번의 탐색 결과 요약
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Outcome {
    /// 싱크로 보낸 개수
    pub emitted: usize,
    /// 수치 문제로 버린 개수
    pub discarded: usize,
    /// 한도나 마감 때문에 중간에 멈췄는지
    pub truncated: bool,
}

impl Outcome {
    pub(crate) fn merge(&mut self, other: Outcome) {
        self.emitted += other.emitted;
        self.discarded += other.discarded;
        self.truncated |= other.truncated;
    }

    pub(crate) fn log(&self, what: &'static str) {
        if self.truncated {
            warn!(
                emitted = self.emitted,
                discarded = self.discarded,
                "{what} truncated by budget"
            );
        } else {
            info!(emitted = self.emitted, discarded = self.discarded, "{what} finished");
        }
    }
}

/// 설정에 따라 카오스 게임을 실행한다. `runs` 개의 독립 실행은 시드 `seed, seed + 1, ...` 를 쓴다.
pub fn explore_orbit(
    group: &KleinianGroup,
    config: &ExploreConfig,
    sink: &mut dyn Sink,
) -> Result<Outcome> {
    config.validate()?;
    let sampler = OrbitSampler::new(group.generators())?;
    let seeds: Vec<u64> = (0..config.runs as u64)
        .map(|i| config.seed.wrapping_add(i))
        .collect();
    Ok(sampler.sample_runs(
        &seeds,
        config.sample_count,
        &config.budget(),
        config.parallel,
        sink,
    ))
}

/// 설정에 따라 극한 트리를 탐색한다.
pub fn explore_tree(
    group: &KleinianGroup,
    config: &ExploreConfig,
    sink: &mut dyn Sink,
) -> Result<Outcome> {
    config.validate()?;
    let tree = LimitTree::new(group);
    let budget = config.budget();
    let outcome = if config.parallel {
        tree.traverse_parallel(config.max_depth, &budget, sink)
    } else {
        tree.traverse(config.max_depth, &budget, sink)
    };
    Ok(outcome)
}

#[cfg(test)]
mod __test__;
