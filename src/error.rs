//! Error types for cpisync
//!
//! Uses `thiserror` for library errors. Errors raised by external
//! collaborators (tenant client, archive codec) arrive as `anyhow::Error`
//! and are wrapped without rewording.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for cpisync operations
pub type CpiResult<T> = Result<T, CpiError>;

/// Broad classification of a [`CpiError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad input caught before any remote call
    Configuration,
    /// Tenant client or archive codec failure
    Remote,
    /// Tenant/filesystem state forbids the operation
    State,
    /// Deployment reached a failed terminal state or timed out
    Deployment,
    /// Local I/O or serialization failure
    Io,
}

/// Main error type for cpisync operations
#[derive(Error, Debug)]
pub enum CpiError {
    /// Both include and exclude lists were supplied
    #[error("included and excluded artifact ids are mutually exclusive")]
    ConflictingFilters,

    /// An id in an include/exclude list is not in the package
    #[error("artifact '{id}' does not exist in package '{package_id}'")]
    UnknownArtifactId { id: String, package_id: String },

    /// A configuration value could not be parsed
    #[error("invalid value '{value}' for {key} (expected {expected})")]
    InvalidValue {
        key: String,
        value: String,
        expected: String,
    },

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Tenant client request failed
    #[error(transparent)]
    Remote(#[from] anyhow::Error),

    /// Archive codec failed
    #[error("archive error for {path}: {source}")]
    Archive {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    /// Draft artifact encountered under the `ERROR` draft policy
    #[error("artifact '{id}' in package '{package_id}' is in draft state")]
    DraftArtifact { id: String, package_id: String },

    /// Package is configure-only and must not be synced
    #[error("package '{id}' is read-only and cannot be synced")]
    ReadOnlyPackage { id: String },

    /// Package does not exist on the tenant
    #[error("package '{id}' does not exist on the tenant")]
    PackageNotFound { id: String },

    /// Designtime artifact has no active version to deploy
    #[error("designtime artifact '{id}' has no active version")]
    NoActiveVersion { id: String },

    /// Local directory does not look like an artifact
    #[error("invalid artifact directory {path}: {reason}")]
    InvalidArtifactDirectory { path: PathBuf, reason: String },

    /// Deployment ended in an error status
    #[error("deployment of '{id}' failed with status {status}: {detail}")]
    DeployFailed {
        id: String,
        status: String,
        detail: String,
    },

    /// Deployment did not finish within the check budget
    #[error("deployment of '{id}' exceeded max checks ({checks}), last status {status}")]
    DeployTimedOut {
        id: String,
        status: String,
        checks: u32,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CpiError {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ConflictingFilters
            | Self::UnknownArtifactId { .. }
            | Self::InvalidValue { .. }
            | Self::InvalidConfig { .. } => ErrorKind::Configuration,
            Self::Remote(_) | Self::Archive { .. } => ErrorKind::Remote,
            Self::DraftArtifact { .. }
            | Self::ReadOnlyPackage { .. }
            | Self::PackageNotFound { .. }
            | Self::NoActiveVersion { .. }
            | Self::InvalidArtifactDirectory { .. } => ErrorKind::State,
            Self::DeployFailed { .. } | Self::DeployTimedOut { .. } => ErrorKind::Deployment,
            Self::Io(_) | Self::Json(_) => ErrorKind::Io,
        }
    }

    pub(crate) fn invalid_value(key: &str, value: &str, expected: &str) -> Self {
        Self::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            expected: expected.to_string(),
        }
    }
}
