use rayon::prelude::*;
use tracing::{debug, warn};

use super::sink::{Emission, Sink};
use super::{Budget, Outcome};
use crate::group::{inverse_index, GeneratorSet, KleinianGroup};
use crate::ops::{Circle, Mobius};

/// 작업 목록의 한 항목: 누적 변환, 마지막으로 적용한 생성원, 남은 깊이
#[derive(Debug, Clone, Copy)]
struct Branch {
    transform: Mobius,
    last: usize,
    remaining: usize,
}

/// 되돌림 없는 케일리 트리 탐색
///
/// 깊이 0 에서는 경계 원을 그대로 방출하고, 이후 길이 1..=max_depth 인 모든 기약 단어 w 에 대해
/// w 로 옮긴 경계 원들을 방출한다. 직전 생성원의 역원은 건너뛰므로 첫 단계는 4 갈래,
/// 그 뒤로는 정확히 3 갈래로 갈라진다. 재귀 대신 명시적 스택을 쓴다.
#[derive(Debug, Clone, Copy)]
pub struct LimitTree<'g> {
    gens: &'g GeneratorSet,
    circles: &'g [Circle],
}

impl<'g> LimitTree<'g> {
    pub fn new(group: &'g KleinianGroup) -> Self {
        Self::from_parts(group.generators(), group.circles())
    }

    pub fn from_parts(gens: &'g GeneratorSet, circles: &'g [Circle]) -> Self {
        Self { gens, circles }
    }

    /// 길이가 `max_depth` 이하인 기약 단어 개수 2·3^d - 1 에 원 개수를 곱한 값.
    /// `usize` 를 넘으면 `None`.
    pub fn expected_count(circle_count: usize, max_depth: usize) -> Option<usize> {
        let depth = u32::try_from(max_depth).ok()?;
        let words = 3usize.checked_pow(depth)?.checked_mul(2)? - 1;
        circle_count.checked_mul(words)
    }

    fn roots(&self, max_depth: usize) -> impl Iterator<Item = Branch> + '_ {
        (0..4).map(move |k| Branch {
            transform: *self.gens.get(k),
            last: k,
            remaining: max_depth - 1,
        })
    }

    /// 항등 변환으로 경계 원을 그대로 방출한다
    fn emit_base(&self, budget: &Budget, sink: &mut dyn Sink, outcome: &mut Outcome) {
        if self.circles.is_empty() {
            warn!("limit tree has no boundary circles to transform");
        }
        for circle in self.circles {
            if !budget.has_room(outcome.emitted) {
                outcome.truncated = true;
                return;
            }
            sink.emit(Emission::Circle(*circle));
            outcome.emitted += 1;
        }
    }

    /// 스택이 빌 때까지 (또는 한도에 닿을 때까지) 가지를 처리한다
    fn drain(
        &self,
        stack: &mut Vec<Branch>,
        budget: &Budget,
        sink: &mut dyn Sink,
        outcome: &mut Outcome,
    ) {
        while let Some(branch) = stack.pop() {
            if !budget.allows(outcome.emitted) {
                outcome.truncated = true;
                return;
            }

            // 성분이 넘치면 이 가지 아래는 모두 쓸모가 없다
            if !branch.transform.is_finite() {
                debug!(
                    last = branch.last,
                    remaining = branch.remaining,
                    "circle discarded: accumulated transform is not finite"
                );
                outcome.discarded += self.circles.len();
                continue;
            }

            for circle in self.circles {
                if !budget.has_room(outcome.emitted) {
                    outcome.truncated = true;
                    return;
                }
                match branch.transform.apply_circle(circle) {
                    Ok(image) => {
                        sink.emit(Emission::Circle(image));
                        outcome.emitted += 1;
                    }
                    Err(e) => {
                        debug!(last = branch.last, error = %e, "circle discarded");
                        outcome.discarded += 1;
                    }
                }
            }

            if branch.remaining == 0 {
                continue;
            }
            let skip = inverse_index(branch.last);
            for k in (0..4).rev().filter(|&k| k != skip) {
                stack.push(Branch {
                    transform: branch.transform * *self.gens.get(k),
                    last: k,
                    remaining: branch.remaining - 1,
                });
            }
        }
    }

    /// 깊이 우선 순차 탐색
    pub fn traverse(&self, max_depth: usize, budget: &Budget, sink: &mut dyn Sink) -> Outcome {
        let mut outcome = Outcome::default();
        self.emit_base(budget, sink, &mut outcome);
        if max_depth > 0 && !outcome.truncated {
            let mut stack: Vec<Branch> = self.roots(max_depth).collect();
            stack.reverse();
            self.drain(&mut stack, budget, sink, &mut outcome);
        }
        outcome.log("limit tree traversal");
        outcome
    }

    /// 최상위 4 갈래를 각자의 버퍼로 병렬 처리한다. 각 가지는 `budget` 을 따로 쓴다.
    pub(crate) fn drain_roots(
        &self,
        max_depth: usize,
        budget: &Budget,
    ) -> Vec<(Vec<Emission>, Outcome)> {
        let branches: Vec<Branch> = self.roots(max_depth).collect();
        branches
            .into_par_iter()
            .map(|root| {
                let mut buffer: Vec<Emission> = Vec::new();
                let mut outcome = Outcome::default();
                let mut stack = vec![root];
                self.drain(&mut stack, budget, &mut buffer, &mut outcome);
                (buffer, outcome)
            })
            .collect()
    }

    /// 최상위 4 갈래를 rayon 으로 나눠 돌린다. 각 가지는 자기 버퍼에 쓰고
    /// 끝난 뒤 가지 순서대로 싱크에 합친다. 결과 다중집합은 `traverse` 와 같다.
    pub fn traverse_parallel(
        &self,
        max_depth: usize,
        budget: &Budget,
        sink: &mut dyn Sink,
    ) -> Outcome {
        let mut total = Outcome::default();
        self.emit_base(budget, sink, &mut total);
        if max_depth == 0 || total.truncated {
            total.log("limit tree traversal");
            return total;
        }

        let results = self.drain_roots(max_depth, &budget.remaining_after(total.emitted));

        for (buffer, outcome) in results {
            for emission in buffer {
                if !budget.has_room(total.emitted) {
                    total.truncated = true;
                    break;
                }
                sink.emit(emission);
                total.emitted += 1;
            }
            total.discarded += outcome.discarded;
            total.truncated |= outcome.truncated;
        }
        total.log("limit tree traversal");
        total
    }
}
