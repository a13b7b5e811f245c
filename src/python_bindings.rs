//! Python bindings for bytestats.

use pyo3::prelude::*;

use crate::config::StatsConfig;
use crate::features::ByteStats;

#[pyfunction]
#[pyo3(name = "byte_histogram")]
pub fn byte_histogram_py(data: &[u8]) -> Vec<u64> {
    crate::byte_histogram(data).to_vec()
}

#[pyfunction]
#[pyo3(name = "byte_entropy_histogram")]
pub fn byte_entropy_histogram_py(data: &[u8]) -> PyResult<Vec<u64>> {
    let hist = crate::byte_entropy_histogram_with_config(data, &StatsConfig::default())?;
    Ok(hist.to_vec())
}

/// Returns `(histogram, byte_entropy)` for `data`.
#[pyfunction]
#[pyo3(name = "byte_stats")]
#[pyo3(signature = (data, time_budget_secs=None))]
pub fn byte_stats_py(data: &[u8], time_budget_secs: Option<u64>) -> PyResult<(Vec<u64>, Vec<u64>)> {
    let config = StatsConfig {
        time_budget_secs,
        ..StatsConfig::default()
    };
    let stats = ByteStats::compute_with_config(data, &config)?;
    Ok((stats.histogram, stats.byte_entropy))
}

#[pyfunction]
#[pyo3(name = "init_logging")]
#[pyo3(signature = (json=false))]
pub fn init_logging_py(json: bool) {
    if json {
        crate::logging::init_tracing_json();
    } else {
        crate::logging::init_tracing();
    }
}

/// Register all Python bindings with the module.
pub fn register_python_bindings(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(byte_histogram_py, m)?)?;
    m.add_function(wrap_pyfunction!(byte_entropy_histogram_py, m)?)?;
    m.add_function(wrap_pyfunction!(byte_stats_py, m)?)?;
    m.add_function(wrap_pyfunction!(init_logging_py, m)?)?;
    m.add("WINDOW", crate::WINDOW)?;
    m.add("STEP", crate::STEP)?;
    Ok(())
}
