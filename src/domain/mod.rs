//! Domain Layer
//!
//! Pure business logic of the reconciliation core, without I/O.
//!
//! ## Structure
//!
//! - `entities/` - Artifact and package records
//! - `value_objects/` - Immutable value types (ArtifactType, DraftPolicy, Lookup, ...)
//! - `services/` - Filtering, normalization, manifest parsing, deploy monitor
//! - `ports/` - Interface definitions for the tenant, archives, events and sleeping

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
