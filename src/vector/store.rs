//! Vector Store
//!
//! Immutable token -> vector and token -> norm tables. The builder is the
//! only way to populate one; once built the store has no mutating methods.

use super::similarity::l2_norm;
use crate::error::{Result, WordVecError};
use hashbrown::HashMap;

/// Read-only embedding table for one loaded model
#[derive(Debug, Clone)]
pub struct VectorStore {
    vectors: HashMap<String, Vec<f64>>,
    norms: HashMap<String, f64>,
    dimension: usize,
}

impl VectorStore {
    /// Vector for `token`
    pub fn vector(&self, token: &str) -> Option<&[f64]> {
        self.vectors.get(token).map(Vec::as_slice)
    }

    /// Precomputed Euclidean norm for `token`
    pub fn norm(&self, token: &str) -> Option<f64> {
        self.norms.get(token).copied()
    }

    /// Length of every vector in the store
    pub fn dimensionality(&self) -> usize {
        self.dimension
    }

    /// Check if `token` is in the vocabulary
    pub fn contains(&self, token: &str) -> bool {
        self.vectors.contains_key(token)
    }

    /// Vocabulary size
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// All tokens, in no particular order
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.vectors.keys().map(String::as_str)
    }

    /// Token, vector and norm triples, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f64], f64)> {
        self.vectors.iter().map(move |(token, vector)| {
            let norm = self.norms.get(token).copied().unwrap_or_default();
            (token.as_str(), vector.as_slice(), norm)
        })
    }
}

/// Write path for a `VectorStore`
#[derive(Debug)]
pub struct VectorStoreBuilder {
    vectors: HashMap<String, Vec<f64>>,
    norms: HashMap<String, f64>,
    dimension: usize,
}

impl VectorStoreBuilder {
    /// Create a builder for vectors of length `dimension`
    pub fn new(dimension: usize) -> Self {
        Self::with_capacity(dimension, 0)
    }

    /// Create a builder sized for `capacity` tokens
    pub fn with_capacity(dimension: usize, capacity: usize) -> Self {
        Self {
            vectors: HashMap::with_capacity(capacity),
            norms: HashMap::with_capacity(capacity),
            dimension,
        }
    }

    /// Insert a token's vector, computing its norm.
    ///
    /// Returns true if the token was already present; the new vector replaces it.
    pub fn insert(&mut self, token: impl Into<String>, vector: Vec<f64>) -> Result<bool> {
        if vector.len() != self.dimension {
            return Err(WordVecError::malformed(format!(
                "Dimension mismatch: expected {}, got {}",
                self.dimension,
                vector.len()
            )));
        }

        let token = token.into();
        let norm = l2_norm(&vector);
        if !norm.is_finite() {
            return Err(WordVecError::malformed(format!(
                "vector for token '{}' has a non-finite norm",
                token
            )));
        }

        self.norms.insert(token.clone(), norm);
        Ok(self.vectors.insert(token, vector).is_some())
    }

    /// Finish building
    pub fn build(self) -> VectorStore {
        VectorStore {
            vectors: self.vectors,
            norms: self.norms,
            dimension: self.dimension,
        }
    }
}
