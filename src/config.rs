//! 탐색 설정
//!
//! 코어가 받는 설정은 샘플 개수, 최대 깊이, 시드, 작업량 한도뿐이다.
//! 이미지 크기나 색 같은 렌더링 파라미터는 여기 두지 않는다.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{KleinianError, Result};
use crate::explore::Budget;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExploreConfig {
    /// 카오스 게임 한 실행당 단계 수
    pub sample_count: u64,
    /// 트리 탐색 최대 단어 길이
    pub max_depth: usize,
    pub seed: u64,
    /// 독립 샘플링 실행 수 (시드 seed, seed + 1, ...)
    pub runs: usize,
    /// 방출 개수 한도
    pub max_items: Option<usize>,
    pub deadline_ms: Option<u64>,
    pub parallel: bool,
}

impl Default for ExploreConfig {
    fn default() -> Self {
        Self {
            sample_count: 100_000,
            max_depth: 6,
            seed: 0,
            runs: 1,
            max_items: None,
            deadline_ms: None,
            parallel: false,
        }
    }
}

impl ExploreConfig {
    pub fn validate(&self) -> Result<()> {
        if self.runs == 0 {
            return Err(KleinianError::InvalidConfig(
                "runs must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// 설정으로부터 취소 한도를 만든다. 마감 시각은 호출 시점부터 센다.
    pub fn budget(&self) -> Budget {
        let mut budget = Budget::unlimited();
        if let Some(n) = self.max_items {
            budget = budget.with_max_items(n);
        }
        if let Some(ms) = self.deadline_ms {
            budget = budget.with_timeout(Duration::from_millis(ms));
        }
        budget
    }
}
