use numpy::{IntoPyArray, PyArray2};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::config::ExploreConfig;
use crate::error::KleinianError;
use crate::explore::{explore_orbit, explore_tree, Collector};
use crate::group::recipes::recipe_by_name;

fn to_py_err(e: KleinianError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

/// 카오스 게임으로 극한집합의 점을 뽑는다. 반환: [n, 2]
#[pyfunction]
#[pyo3(signature = (recipe, params, count, seed = 0, runs = 1))]
pub fn orbit_points<'py>(
    py: Python<'py>,
    recipe: &str,
    params: Vec<f64>,
    count: u64,
    seed: u64,
    runs: usize,
) -> PyResult<&'py PyArray2<f64>> {
    let group = recipe_by_name(recipe, &params).map_err(to_py_err)?;
    let config = ExploreConfig {
        sample_count: count,
        seed,
        runs,
        parallel: runs > 1,
        ..Default::default()
    };
    let mut collector = Collector::new();
    py.allow_threads(|| explore_orbit(&group, &config, &mut collector))
        .map_err(to_py_err)?;
    Ok(collector.points_array().into_pyarray(py))
}

/// 쇼트키 원 트리를 탐색한다. 반환: [n, 3] (x, y, r)
#[pyfunction]
#[pyo3(signature = (recipe, params, max_depth, parallel = true))]
pub fn limit_circles<'py>(
    py: Python<'py>,
    recipe: &str,
    params: Vec<f64>,
    max_depth: usize,
    parallel: bool,
) -> PyResult<&'py PyArray2<f64>> {
    let group = recipe_by_name(recipe, &params).map_err(to_py_err)?;
    let config = ExploreConfig {
        max_depth,
        parallel,
        ..Default::default()
    };
    let mut collector = Collector::new();
    py.allow_threads(|| explore_tree(&group, &config, &mut collector))
        .map_err(to_py_err)?;
    Ok(collector.circles_array().into_pyarray(py))
}

/// tr(a)² + tr(b)² + tr(ab)² - tr(a)tr(b)tr(ab) 를 (re, im) 로 돌려준다
#[pyfunction]
pub fn markov_defect(recipe: &str, params: Vec<f64>) -> PyResult<(f64, f64)> {
    let group = recipe_by_name(recipe, &params).map_err(to_py_err)?;
    let defect = group.markov_defect();
    Ok((defect.re, defect.im))
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(orbit_points, m)?)?;
    m.add_function(wrap_pyfunction!(limit_circles, m)?)?;
    m.add_function(wrap_pyfunction!(markov_defect, m)?)?;
    Ok(())
}
