use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use tracing::debug;

use super::sink::{Emission, Sink};
use super::{Budget, Outcome};
use crate::error::Result;
use crate::group::GeneratorSet;
use crate::ops::Complex;

/// 마감 시각은 이 간격마다 확인한다
const DEADLINE_CHECK_INTERVAL: u64 = 4096;

/// [0, 1) 난수로 생성원 인덱스를 고른다. 상한이 나오더라도 3 으로 잘라낸다.
#[inline]
pub fn pick_generator<R: Rng + ?Sized>(rng: &mut R) -> usize {
    let u: f64 = rng.gen();
    ((u * 4.0) as usize).min(3)
}

/// 카오스 게임 (IFS) 점 샘플러
///
/// g0 의 고정점에서 출발해 매 단계 무작위 생성원을 현재 점에 적용하고 결과를 방출한다.
/// 각 점은 바로 앞 점에 의존하므로 한 실행 안에서는 순차적이고,
/// 시드가 다른 실행끼리는 독립이다.
#[derive(Debug, Clone)]
pub struct OrbitSampler {
    gens: GeneratorSet,
    start: Complex,
}

impl OrbitSampler {
    /// g0 가 아핀이면 (c = 0) 시작점을 정할 수 없으므로 `UndefinedFixedPoint`.
    pub fn new(gens: &GeneratorSet) -> Result<Self> {
        let start = gens.a().fixed_point()?;
        Ok(Self { gens: *gens, start })
    }

    pub fn start(&self) -> Complex {
        self.start
    }

    /// 주어진 난수원으로 `count` 단계를 진행한다.
    pub fn sample<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        count: u64,
        budget: &Budget,
        sink: &mut dyn Sink,
    ) -> Outcome {
        let mut outcome = Outcome::default();
        let mut z = self.start;

        for step in 0..count {
            let check_deadline = step % DEADLINE_CHECK_INTERVAL == 0;
            if !budget.has_room(outcome.emitted) || (check_deadline && budget.past_deadline()) {
                outcome.truncated = true;
                break;
            }

            let j = pick_generator(rng);
            match self.gens.get(j).apply(z) {
                Ok(w) if w.is_finite() => {
                    z = w;
                    sink.emit(Emission::Point(w));
                    outcome.emitted += 1;
                }
                Ok(w) => {
                    debug!(
                        step,
                        generator = j,
                        re = w.re,
                        im = w.im,
                        "point discarded: not finite"
                    );
                    outcome.discarded += 1;
                }
                Err(e) => {
                    debug!(step, generator = j, error = %e, "point discarded");
                    outcome.discarded += 1;
                }
            }
        }
        outcome
    }

    /// 시드별 독립 실행. 병렬이면 실행마다 자기 버퍼에 쓰고 끝난 뒤 시드 순서로 합친다.
    ///
    /// 점 개수 한도는 합친 결과 전체에 적용된다.
    pub fn sample_runs(
        &self,
        seeds: &[u64],
        count: u64,
        budget: &Budget,
        parallel: bool,
        sink: &mut dyn Sink,
    ) -> Outcome {
        let mut total = Outcome::default();

        if parallel {
            let runs: Vec<(Vec<Emission>, Outcome)> = seeds
                .par_iter()
                .map(|&seed| {
                    let mut rng = StdRng::seed_from_u64(seed);
                    let mut buffer: Vec<Emission> = Vec::new();
                    let outcome = self.sample(&mut rng, count, budget, &mut buffer);
                    (buffer, outcome)
                })
                .collect();

            for (buffer, outcome) in runs {
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
        } else {
            for &seed in seeds {
                let mut rng = StdRng::seed_from_u64(seed);
                let remaining = budget.remaining_after(total.emitted);
                let outcome = self.sample(&mut rng, count, &remaining, sink);
                total.merge(outcome);
                if outcome.truncated {
                    break;
                }
            }
        }

        total.log("orbit sampling");
        total
    }
}
