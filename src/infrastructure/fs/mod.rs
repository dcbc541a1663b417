//! File System Infrastructure
//!
//! - `local` - Directory copy, replacement and listing helpers
//! - `materializer` - Archive unpacking and target directory placement

pub mod local;
mod materializer;

pub use materializer::Materializer;
