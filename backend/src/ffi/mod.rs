//! FFI (Foreign Function Interface) module
//!
//! PyO3 bindings for exposing the Rust generator to Python.
//!
//! # Design Principles
//!
//! 1. **Minimal boundary**: Only expose what's needed
//! 2. **Simple types**: Use ints, floats, bytes and dicts at boundary
//! 3. **Validate inputs**: Seed length is checked before crossing boundary
//! 4. **Safe errors**: Convert all Rust errors to Python exceptions
//! 5. **No references**: Python gets copies, never references to Rust state

pub mod generator;
pub mod types;
