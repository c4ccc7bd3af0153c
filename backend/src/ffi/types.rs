//! Type conversion utilities for FFI boundary
//!
//! Converts between Rust types and PyO3-compatible types (PyBytes, PyDict).

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::{PyBytes, PyDict};

use crate::checkpoint::{CheckpointError, GeneratorSnapshot};

/// Extract a required field from a Python dict with clear error messages.
///
/// # Errors
/// Returns PyValueError if the field is missing; type conversion errors
/// propagate unchanged.
fn extract_required<T>(dict: &Bound<'_, PyDict>, key: &str) -> PyResult<T>
where
    T: for<'py> FromPyObject<'py>,
{
    dict.get_item(key)?
        .ok_or_else(|| PyValueError::new_err(format!("Missing required field '{}'", key)))?
        .extract()
}

/// Convert Python bytes into a 32-byte seed
///
/// # Errors
/// Raises ValueError unless exactly 32 bytes are given
pub fn seed_from_py(bytes: &Bound<'_, PyBytes>) -> PyResult<[u8; 32]> {
    let raw = bytes.as_bytes();
    <[u8; 32]>::try_from(raw).map_err(|_| {
        PyValueError::new_err(format!("Seed must be exactly 32 bytes, got {}", raw.len()))
    })
}

/// Convert a snapshot into `{"state": [s0, s1, s2, s3], "digest": "..."}`
pub fn snapshot_to_py(py: Python<'_>, snapshot: &GeneratorSnapshot) -> PyResult<Py<PyDict>> {
    let dict = PyDict::new_bound(py);
    dict.set_item("state", snapshot.state.to_vec())?;
    dict.set_item("digest", &snapshot.digest)?;
    Ok(dict.unbind())
}

/// Parse a snapshot dict produced by [`snapshot_to_py`]
pub fn parse_snapshot(dict: &Bound<'_, PyDict>) -> PyResult<GeneratorSnapshot> {
    let words: Vec<u64> = extract_required(dict, "state")?;
    let state = <[u64; 4]>::try_from(words.as_slice()).map_err(|_| {
        PyValueError::new_err(format!("State must have 4 words, got {}", words.len()))
    })?;
    let digest: String = extract_required(dict, "digest")?;

    Ok(GeneratorSnapshot { state, digest })
}

/// Map checkpoint failures to ValueError
pub fn checkpoint_error_to_py(err: CheckpointError) -> PyErr {
    PyValueError::new_err(err.to_string())
}
