//! Errors surfaced by the binary

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use dq_core::{IndexError, LayoutError};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("cannot read layout {}: {source}", path.display())]
    LayoutFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid layout JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid layout: {0}")]
    Layout(#[from] LayoutError),

    #[error(transparent)]
    Index(#[from] IndexError),
}
