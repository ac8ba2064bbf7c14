use std::path::PathBuf;
use thiserror::Error;

/// Failure to bring the catalog up. The session stays inert when this happens.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Catalog unreachable at {path}: {source}")]
    Unreachable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed catalog: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Duplicate plant id: {0}")]
    DuplicateId(u32),
}

#[derive(Error, Debug)]
pub enum FinderError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Render error: {0}")]
    Render(#[from] minijinja::Error),
}

pub type Result<T> = std::result::Result<T, FinderError>;
