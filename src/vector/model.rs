//! Word2Vec Model
//!
//! Sentence averaging and token similarity over a shared, immutable
//! `VectorStore`. Cloning a model is cheap and every method takes `&self`,
//! so one loaded model can serve any number of threads without locking.

use super::similarity::{add_assign, cosine_with_norms, scale};
use super::store::VectorStore;
use crate::error::{Result, WordVecError};
use std::sync::Arc;

/// A loaded word embedding model
#[derive(Debug, Clone)]
pub struct Word2VecModel {
    store: Arc<VectorStore>,
}

impl Word2VecModel {
    /// Wrap a built store
    pub fn new(store: VectorStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Underlying lookup table
    pub fn store(&self) -> &VectorStore {
        &self.store
    }

    /// Vector length
    pub fn dimensionality(&self) -> usize {
        self.store.dimensionality()
    }

    /// Vocabulary size
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Check if the vocabulary is empty
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Average the vectors of a tokenized sentence.
    ///
    /// Tokens missing from the vocabulary add nothing, but the sum is still
    /// divided by the full sentence length, so `["scala", "unknown"]` yields
    /// half of `scala`'s vector.
    pub fn transform<S: AsRef<str>>(&self, sentence: &[S]) -> Result<Vec<f64>> {
        if sentence.is_empty() {
            return Err(WordVecError::EmptyInput);
        }

        let mut sum = vec![0.0; self.store.dimensionality()];
        for token in sentence {
            if let Some(vector) = self.store.vector(token.as_ref()) {
                add_assign(&mut sum, vector);
            }
        }

        scale(&mut sum, 1.0 / sentence.len() as f64);
        Ok(sum)
    }

    /// Cosine similarity between two tokens.
    ///
    /// Lookups run in the order vector(a), vector(b), norm(a), norm(b) and the
    /// first miss is reported. The result is not clamped to [-1, 1].
    pub fn distance(&self, token_a: &str, token_b: &str) -> Result<f64> {
        let vector_a = self.lookup_vector(token_a)?;
        let vector_b = self.lookup_vector(token_b)?;
        let norm_a = self.lookup_norm(token_a)?;
        let norm_b = self.lookup_norm(token_b)?;

        if !norm_a.is_normal() {
            return Err(WordVecError::DegenerateVector(token_a.to_string()));
        }
        if !norm_b.is_normal() {
            return Err(WordVecError::DegenerateVector(token_b.to_string()));
        }

        Ok(cosine_with_norms(vector_a, vector_b, norm_a, norm_b))
    }

    /// Transform many sentences, spread over scoped worker threads.
    ///
    /// Results come back in input order, one per sentence.
    pub fn transform_batch<T, S>(&self, sentences: &[T]) -> Vec<Result<Vec<f64>>>
    where
        T: AsRef<[S]> + Sync,
        S: AsRef<str>,
    {
        let workers = num_cpus::get().max(1);
        if workers == 1 || sentences.len() < 2 {
            return sentences.iter().map(|s| self.transform(s.as_ref())).collect();
        }

        let chunk_size = sentences.len().div_ceil(workers);

        crossbeam::thread::scope(|scope| {
            let handles: Vec<_> = sentences
                .chunks(chunk_size)
                .map(|chunk| {
                    scope.spawn(move |_| {
                        chunk
                            .iter()
                            .map(|s| self.transform(s.as_ref()))
                            .collect::<Vec<_>>()
                    })
                })
                .collect();

            handles
                .into_iter()
                .flat_map(|handle| {
                    handle
                        .join()
                        .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
                })
                .collect()
        })
        .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
    }

    /// The `k` tokens most similar to `token`, best first.
    ///
    /// The query token and zero-length vectors are skipped.
    pub fn most_similar(&self, token: &str, k: usize) -> Result<Vec<(String, f64)>> {
        let query = self.lookup_vector(token)?;
        let query_norm = self.lookup_norm(token)?;
        if !query_norm.is_normal() {
            return Err(WordVecError::DegenerateVector(token.to_string()));
        }

        let mut results: Vec<(String, f64)> = self
            .store
            .iter()
            .filter(|(other, _, norm)| *other != token && norm.is_normal())
            .map(|(other, vector, norm)| {
                let sim = cosine_with_norms(query, vector, query_norm, norm);
                (other.to_string(), sim)
            })
            .collect();

        // Sort by similarity (descending)
        results.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        results.truncate(k);
        Ok(results)
    }

    fn lookup_vector(&self, token: &str) -> Result<&[f64]> {
        self.store
            .vector(token)
            .ok_or_else(|| WordVecError::TokenNotFound(token.to_string()))
    }

    fn lookup_norm(&self, token: &str) -> Result<f64> {
        self.store
            .norm(token)
            .ok_or_else(|| WordVecError::TokenNotFound(token.to_string()))
    }
}
