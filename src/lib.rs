//! Zone-layout validation engine — Rust implementation.
//!
//! Exposes Python-callable functions that accept JSON strings and
//! return JSON strings, so the warehouse server and the layout editor
//! share one set of placement rules.

use pyo3::prelude::*;

pub mod capacity;
pub mod geometry;
pub mod locations;
pub mod types;
pub mod validate;

/// Validate a zone layout.
///
/// Takes a JSON string matching the `LayoutParams` schema and returns
/// a JSON string matching the `LayoutReport` schema.
#[pyfunction]
fn validate_layout_json(params_json: &str) -> PyResult<String> {
    let params: types::LayoutParams = serde_json::from_str(params_json)
        .map_err(|e| {
            PyErr::new::<pyo3::exceptions::PyValueError, _>(format!(
                "Invalid layout_params JSON: {e}"
            ))
        })?;

    let report = validate::validate_layout(&params.grid, &params.items);

    serde_json::to_string(&report).map_err(|e| {
        PyErr::new::<pyo3::exceptions::PyValueError, _>(format!(
            "Failed to serialize layout_report: {e}"
        ))
    })
}

/// Total storage capacity and item count for a list of zone items.
///
/// Takes a JSON array of items and returns a `ZoneSummary` JSON object.
#[pyfunction]
fn zone_summary_json(items_json: &str) -> PyResult<String> {
    let items: Vec<types::Item> = serde_json::from_str(items_json).map_err(|e| {
        PyErr::new::<pyo3::exceptions::PyValueError, _>(format!("Invalid items JSON: {e}"))
    })?;

    let summary = capacity::zone_summary(&items);

    serde_json::to_string(&summary).map_err(|e| {
        PyErr::new::<pyo3::exceptions::PyValueError, _>(format!(
            "Failed to serialize zone_summary: {e}"
        ))
    })
}

/// Zone-layout engine, importable from Python.
#[pymodule]
fn layout_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(validate_layout_json, m)?)?;
    m.add_function(wrap_pyfunction!(zone_summary_json, m)?)?;
    Ok(())
}
