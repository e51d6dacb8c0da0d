//! WORDVEC - Word2Vec Model Loader
//!
//! Loads a word embedding model from a packaged zip bundle and answers two
//! questions about it: the average vector of a tokenized sentence, and the
//! cosine similarity of two tokens.
//!
//! ```no_run
//! let model = wordvec::load("/tmp/word2vec-model.zip")?;
//! let sentence = model.transform(&["scala", "scala"])?;
//! let similarity = model.distance("scala", "java")?;
//! # Ok::<(), wordvec::WordVecError>(())
//! ```

pub mod archive;
pub mod config;
pub mod error;
pub mod format;
pub mod loader;
pub mod vector;

#[cfg(test)]
pub(crate) mod test_support;

pub use archive::ModelArchive;
pub use config::LoaderConfig;
pub use error::{Result, WordVecError};
pub use loader::{load, Word2VecLoader};
pub use vector::{VectorStore, VectorStoreBuilder, Word2VecModel};
