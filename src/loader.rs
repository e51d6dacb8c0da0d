//! Model Loader
//!
//! Archive read, payload parse and model construction in one call. Each load
//! builds an independent model; nothing is shared between loads.

use crate::archive::ModelArchive;
use crate::config::LoaderConfig;
use crate::error::Result;
use crate::format::parse_payload;
use crate::vector::Word2VecModel;
use std::path::Path;
use std::time::Instant;
use tracing::info;

/// Loads Word2Vec bundles
#[derive(Debug, Clone, Default)]
pub struct Word2VecLoader {
    config: LoaderConfig,
}

impl Word2VecLoader {
    /// Create a loader with the given configuration
    pub fn new(config: LoaderConfig) -> Self {
        Self { config }
    }

    /// Get configuration
    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Read and parse the bundle at `path`
    pub fn load(&self, path: impl AsRef<Path>) -> Result<Word2VecModel> {
        let path = path.as_ref();
        let start = Instant::now();

        let payload = {
            let mut archive = ModelArchive::open(path)?;
            archive.read_payload(&self.config)?
        };

        let store = parse_payload(&payload)?;

        info!(
            path = %path.display(),
            tokens = store.len(),
            dim = store.dimensionality(),
            elapsed = ?start.elapsed(),
            "Loaded word2vec model"
        );

        Ok(Word2VecModel::new(store))
    }
}

/// Load the bundle at `path` with the default configuration
pub fn load(path: impl AsRef<Path>) -> Result<Word2VecModel> {
    Word2VecLoader::default().load(path)
}
