//! Model Record
//!
//! Serde mirror of the bundle's `model.json`:
//!
//! ```text
//! {
//!   "attributes": {
//!     "words":        { "string": [...], "type": "list" },
//!     "indices":      { "long":   [...], "type": "list" },
//!     "word_vectors": { "double": [...], "type": "list" }
//!   },
//!   "op": "word2vec"
//! }
//! ```

use serde::{Deserialize, Serialize};

/// Top-level payload record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelRecord {
    pub attributes: Attributes,
    /// Operation name, informational only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub op: Option<String>,
}

/// The three parallel arrays
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attributes {
    pub words: Words,
    pub indices: Indices,
    pub word_vectors: WordVectors,
}

/// Vocabulary, in cursor order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Words {
    #[serde(rename = "string")]
    pub tokens: Vec<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// Block index of each token's vector
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Indices {
    #[serde(rename = "long")]
    pub cursors: Vec<i64>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// All vectors, flattened block after block
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordVectors {
    #[serde(rename = "double")]
    pub values: Vec<f64>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}
