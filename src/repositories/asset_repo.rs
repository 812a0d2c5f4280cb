use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Static front-end files served next to the search API.
#[derive(Debug, Clone)]
pub struct AssetRepo {
    root: PathBuf,
}

impl AssetRepo {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Reads `name` from the web root. `None` when the file does not exist.
    pub async fn read(&self, name: &str) -> Result<Option<Vec<u8>>> {
        let path = self.root.join(name);
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err).with_context(|| format!("Failed to read asset {}", path.display())),
        }
    }
}
