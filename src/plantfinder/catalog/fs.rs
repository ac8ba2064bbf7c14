use super::{Catalog, CatalogSource};
use crate::error::LoadError;
use std::fs;
use std::path::{Path, PathBuf};

/// Reads the catalog document from a JSON file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for FileSource {
    fn load(&self) -> Result<Catalog, LoadError> {
        let content = fs::read_to_string(&self.path).map_err(|source| LoadError::Unreachable {
            path: self.path.clone(),
            source,
        })?;
        let catalog = Catalog::from_json(&content)?;
        tracing::debug!(
            path = %self.path.display(),
            plants = catalog.items().len(),
            categories = catalog.categories().len(),
            "catalog loaded"
        );
        Ok(catalog)
    }
}
