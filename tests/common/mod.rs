//! Common test utilities for cpisync scenario tests.
//!
//! This module provides:
//! - `FakeTenant`: in-memory tenant implementing `TenantClient`
//! - `JsonCodec`: archive codec storing a directory as a JSON map
//! - Fixtures: reusable artifact content

pub mod fixtures;

pub use fake::*;
pub use fixtures::*;
