//! Indra's Pearls 의 그룹 레시피 모음
//!
//! 각도, 대각합(trace), 복소 파라미터로부터 생성원 행렬 (그리고 쇼트키 군이라면 경계 원)을 만든다.
//! 군의 이산성이나 원들의 분리성은 검증하지 않는다.

use crate::error::{KleinianError, Result};
use crate::ops::{im, re, solve_quadratic, Circle, Complex, Mobius, ONE, TWO, TWO_I, ZERO};

use super::{GeneratorSet, KleinianGroup};

/// 레시피 내부의 산술 실패는 생성원 구성 실패로 보고한다
fn degenerate<T>(what: &'static str, r: Result<T>) -> Result<T> {
    r.map_err(|e| KleinianError::invalid_gens(format!("{what}: {e}")))
}

/// θ 가 0 이나 π/2 의 배수에 이만큼 가까우면 원이 무한히 커지거나 작아진다
const ANGLE_TOLERANCE: f64 = 1e-9;

fn circle(center: Complex, radius: f64) -> Result<Circle> {
    degenerate("boundary circle", Circle::new(center, radius))
}

/// θ-쇼트키 군 (p. 118)
///
/// 중심이 ±sec θ, ±i sec θ 이고 반지름이 |tan θ| 인 네 원을 짝짓는다.
pub fn theta_schottky(t: f64) -> Result<KleinianGroup> {
    let (sin, cos) = t.sin_cos();
    if sin.abs() < ANGLE_TOLERANCE || cos.abs() < ANGLE_TOLERANCE {
        return Err(KleinianError::invalid_gens(format!(
            "theta-Schottky angle {t} is degenerate"
        )));
    }
    let radius = t.tan().abs();
    let offset = 1.0 / cos;
    let k = 1.0 / sin;

    let a = Mobius::new(ONE, re(cos), re(cos), ONE).scale(k);
    let b = Mobius::new(ONE, im(cos), im(-cos), ONE).scale(k);

    let circles = vec![
        circle(re(offset), radius)?,
        circle(re(-offset), radius)?,
        circle(im(offset), radius)?,
        circle(im(-offset), radius)?,
    ];
    Ok(KleinianGroup::new(GeneratorSet::new(a, b)?).with_circles(circles))
}

/// 서로 맞닿는 쇼트키 원 (p. 170)
///
/// * `y` - b 쪽 원의 크기를 정하는 값 (1/y 가 반지름)
/// * `u` - a 의 대각합의 절반, |u| >= 1
/// * `k` - 두 원 쌍의 상대 크기
pub fn kissing_schottky(y: f64, u: f64, k: f64) -> Result<KleinianGroup> {
    let x = (y * y + 1.0).sqrt();
    let v = (u * u - 1.0).sqrt();
    if y == 0.0 || k == 0.0 || !(v.is_finite() && v > 0.0) {
        return Err(KleinianError::invalid_gens(format!(
            "kissing-Schottky parameters (y={y}, u={u}, k={k}) are degenerate"
        )));
    }

    let a = Mobius::new(re(u), im(k * v), im(-v / k), re(u));
    let b = Mobius::new(re(x), re(y), re(y), re(x));

    let r = k / v;
    let big_r = 1.0 / y;
    let circles = vec![
        circle(re(x / y), big_r.abs())?,
        circle(re(-x / y), big_r.abs())?,
        circle(im(k * u / v), r.abs())?,
        circle(im(-k * u / v), r.abs())?,
    ];
    Ok(KleinianGroup::new(GeneratorSet::new(a, b)?).with_circles(circles))
}

/// 아폴로니우스 개스킷 (p. 201)
pub fn apollonian() -> Result<KleinianGroup> {
    let a = Mobius::new(ONE, ZERO, im(-2.0), ONE);
    let b = Mobius::new(Complex::new(1.0, -1.0), ONE, ONE, Complex::new(1.0, 1.0));
    KleinianGroup::from_pair(a, b)
}

/// Maskit 준푹스 군 (p. 259)
pub fn maskit(mu: Complex) -> Result<KleinianGroup> {
    let a = Mobius::new(mu, ONE, ONE, ZERO);
    let b = Mobius::new(ONE, TWO, ZERO, ONE);
    KleinianGroup::from_pair(a, b)
}

/// Riley 군 (p. 259)
pub fn riley(c: Complex) -> Result<KleinianGroup> {
    let a = Mobius::new(ONE, ZERO, c, ONE);
    let b = Mobius::new(ONE, TWO, ZERO, ONE);
    KleinianGroup::from_pair(a, b)
}

/// x² - tA·tB·x + (tA² + tB²) = 0 에서 `sol` 번째 근을 tr(ab) 로 고른다
fn commutator_trace(ta: Complex, tb: Complex, sol: usize) -> Result<Complex> {
    let roots = degenerate(
        "trace quadratic",
        solve_quadratic(ONE, -(ta * tb), ta.sqr() + tb.sqr()),
    )?;
    roots.get(sol).copied().ok_or_else(|| {
        KleinianError::invalid_gens(format!("solution index {sol} must be 0 or 1"))
    })
}

/// Jørgensen 의 포물형 교환자 레시피 (p. 256)
pub fn jorgensen(ta: Complex, tb: Complex, sol: usize) -> Result<KleinianGroup> {
    let tab = commutator_trace(ta, tb, sol)?;
    let tab2 = tab.sqr();

    let build = || -> Result<(Mobius, Mobius)> {
        let ta_over = ta.try_div(tab)?;
        let tb_over = tb.try_div(tab)?;
        let a = Mobius::new(ta - tb_over, ta.try_div(tab2)?, ta, tb_over);
        let b = Mobius::new(tb - ta_over, -tb.try_div(tab2)?, -tb, ta_over);
        Ok((a, b))
    };
    let (a, b) = degenerate("jorgensen", build())?;
    KleinianGroup::from_pair(a, b)
}

/// 할머니 레시피 (p. 229)
///
/// b 와 ab 를 먼저 만들고 a = ab · b⁻¹ 로 구한다.
pub fn grandma(ta: Complex, tb: Complex, sol: usize) -> Result<KleinianGroup> {
    let tab = commutator_trace(ta, tb, sol)?;

    let build = || -> Result<(Mobius, Mobius)> {
        let num = (tab - TWO) * tb;
        let den = tb * tab - ta.scale(2.0) + tab * TWO_I;
        let z0 = num.try_div(den)?;

        let half_tb = tb.scale(0.5);
        let b = Mobius::new(
            (tb - TWO_I).scale(0.5),
            half_tb,
            half_tb,
            (tb + TWO_I).scale(0.5),
        );

        let half_tab = tab.scale(0.5);
        let ab = Mobius::new(
            half_tab,
            (tab - TWO).try_div(z0.scale(2.0))?,
            ((tab + TWO) * z0).scale(0.5),
            half_tab,
        );
        Ok((ab * b.inverse()?, b))
    };
    let (a, b) = degenerate("grandma", build())?;
    KleinianGroup::from_pair(a, b)
}

fn expect_arity(name: &str, params: &[f64], n: usize) -> Result<()> {
    if params.len() != n {
        return Err(KleinianError::invalid_gens(format!(
            "recipe '{name}' takes {n} parameters, got {}",
            params.len()
        )));
    }
    Ok(())
}

fn solution_index(v: f64) -> Result<usize> {
    if v == 0.0 || v == 1.0 {
        Ok(v as usize)
    } else {
        Err(KleinianError::invalid_gens(format!(
            "solution index {v} must be 0 or 1"
        )))
    }
}

/// 이름으로 레시피를 찾는다. 복소 파라미터는 (re, im) 쌍으로, 근 선택 인덱스는 맨 뒤에 둔다.
///
/// | 이름 | 파라미터 |
/// |---|---|
/// | `theta` | t |
/// | `kissing` | y, u, k |
/// | `apollonian` | - |
/// | `maskit` | mu.re, mu.im |
/// | `riley` | c.re, c.im |
/// | `jorgensen` | tA.re, tA.im, tB.re, tB.im, sol |
/// | `grandma` | tA.re, tA.im, tB.re, tB.im, sol |
pub fn recipe_by_name(name: &str, params: &[f64]) -> Result<KleinianGroup> {
    match name {
        "theta" => {
            expect_arity(name, params, 1)?;
            theta_schottky(params[0])
        }
        "kissing" => {
            expect_arity(name, params, 3)?;
            kissing_schottky(params[0], params[1], params[2])
        }
        "apollonian" => {
            expect_arity(name, params, 0)?;
            apollonian()
        }
        "maskit" => {
            expect_arity(name, params, 2)?;
            maskit(Complex::new(params[0], params[1]))
        }
        "riley" => {
            expect_arity(name, params, 2)?;
            riley(Complex::new(params[0], params[1]))
        }
        "jorgensen" | "grandma" => {
            expect_arity(name, params, 5)?;
            let ta = Complex::new(params[0], params[1]);
            let tb = Complex::new(params[2], params[3]);
            let sol = solution_index(params[4])?;
            if name == "jorgensen" {
                jorgensen(ta, tb, sol)
            } else {
                grandma(ta, tb, sol)
            }
        }
        other => Err(KleinianError::UnknownRecipe(other.to_string())),
    }
}
