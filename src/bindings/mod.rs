mod kleinian;

pub use kleinian::*;

use pyo3::prelude::*;
use pyo3::types::PyModule;
use tracing_subscriber::EnvFilter;

/// Kleinian Stone - limit sets of two-generator Kleinian groups in Rust
#[pymodule]
pub fn kleinian_stone(_py: Python, m: &PyModule) -> PyResult<()> {
    // 호스트가 이미 subscriber 를 설치했다면 그대로 둔다
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();

    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    kleinian::register(m)?;
    Ok(())
}
