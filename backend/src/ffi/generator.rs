//! PyO3 wrapper for Xoshiro256
//!
//! This module provides the Python interface to the Rust generator.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::{PyBytes, PyDict};

use super::types::{checkpoint_error_to_py, parse_snapshot, seed_from_py, snapshot_to_py};
use crate::checkpoint::GeneratorSnapshot;
use crate::rng::Xoshiro256;

/// Python wrapper for the Rust generator
///
/// # Example (from Python)
///
/// ```python
/// from xoshiro_core_rs import Generator
///
/// rng = Generator(bytes(range(32)))
/// word = rng.next()
/// unit = rng.double_co()
///
/// worker = rng.copy()
/// worker.jump()
/// ```
#[pyclass(name = "Generator")]
pub struct PyGenerator {
    inner: Xoshiro256,
}

#[pymethods]
impl PyGenerator {
    /// Create a generator from 32 seed bytes, or the fixed default state
    ///
    /// # Errors
    ///
    /// Raises ValueError if the seed is not exactly 32 bytes
    #[new]
    #[pyo3(signature = (seed=None))]
    fn new(seed: Option<&Bound<'_, PyBytes>>) -> PyResult<Self> {
        let inner = match seed {
            Some(bytes) => Xoshiro256::from_seed(seed_from_py(bytes)?),
            None => Xoshiro256::default(),
        };
        Ok(PyGenerator { inner })
    }

    /// Create a generator from an integer seed (SplitMix64 expansion)
    #[staticmethod]
    fn from_int(seed: u64) -> Self {
        PyGenerator {
            inner: Xoshiro256::seed_from_u64(seed),
        }
    }

    /// Replace the state with one derived from 32 seed bytes
    fn seed(&mut self, seed: &Bound<'_, PyBytes>) -> PyResult<()> {
        self.inner.reseed(seed_from_py(seed)?);
        Ok(())
    }

    /// Raw 64-bit output
    fn next(&mut self) -> u64 {
        self.inner.next_u64()
    }

    fn float_co(&mut self) -> f32 {
        self.inner.float_co()
    }

    fn float_cc(&mut self) -> f32 {
        self.inner.float_cc()
    }

    fn double_co(&mut self) -> f64 {
        self.inner.double_co()
    }

    fn double_cc(&mut self) -> f64 {
        self.inner.double_cc()
    }

    /// Uniform integer in [min, max)
    ///
    /// Raises ValueError if min >= max
    fn range(&mut self, min: i64, max: i64) -> PyResult<i64> {
        self.inner
            .range(min, max)
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    /// Advance by 2^128 steps
    fn jump(&mut self) {
        self.inner.jump();
    }

    /// Independent copy with identical state
    fn copy(&self) -> Self {
        PyGenerator { inner: self.inner }
    }

    /// Current state words as a tuple
    fn get_state(&self) -> (u64, u64, u64, u64) {
        let [s0, s1, s2, s3] = self.inner.state();
        (s0, s1, s2, s3)
    }

    /// Snapshot dict for checkpointing
    fn save_state(&self, py: Python<'_>) -> PyResult<Py<PyDict>> {
        snapshot_to_py(py, &GeneratorSnapshot::capture(&self.inner))
    }

    /// Restore from a snapshot dict produced by `save_state`
    ///
    /// Raises ValueError if the digest does not match the state
    fn load_state(&mut self, snapshot: &Bound<'_, PyDict>) -> PyResult<()> {
        let snapshot = parse_snapshot(snapshot)?;
        self.inner = snapshot.restore().map_err(checkpoint_error_to_py)?;
        Ok(())
    }

    fn __repr__(&self) -> String {
        let [s0, s1, s2, s3] = self.inner.state();
        format!("Generator(state=[{:#018x}, {:#018x}, {:#018x}, {:#018x}])", s0, s1, s2, s3)
    }
}
