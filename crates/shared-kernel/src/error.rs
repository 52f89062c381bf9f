// crates/shared-kernel/src/error.rs
use std::{
    collections::TryReserveError,
    path::{Path, PathBuf},
};

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum LsError {
    #[error(transparent)]
    Infrastructure(#[from] InfrastructureError),

    #[error(transparent)]
    Application(#[from] ApplicationError),

    #[error(transparent)]
    Presentation(#[from] PresentationError),
}

impl LsError {
    /// Process exit status for this failure. Usage errors get 2, everything else 1.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Presentation(_) => 2,
            Self::Infrastructure(_) | Self::Application(_) => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, LsError>;

/// Application-layer errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("cannot allocate buffer for {requested} entries: {source}")]
    Allocation {
        requested: usize,
        #[source]
        source: TryReserveError,
    },
}

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("cannot access directory '{path}': {source}")]
    DirectoryAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot access '{path}': {source}")]
    MetadataAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl InfrastructureError {
    /// Path of the filesystem object the failure refers to.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::DirectoryAccess { path, .. } | Self::MetadataAccess { path, .. } => path,
        }
    }
}

pub type InfraResult<T> = std::result::Result<T, InfrastructureError>;

/// Presentation-layer errors.
#[derive(Debug, Error)]
pub enum PresentationError {
    #[error("invalid option: {message}")]
    InvalidOption { message: String },
}

pub type PresentationResult<T> = std::result::Result<T, PresentationError>;
