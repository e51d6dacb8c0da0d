//! Model Record Parser
//!
//! Vectors are stored as one flat array of `N * dim` values. Each token's
//! cursor names the block holding its vector, so the table is rebuilt by
//! cursor value, never by position.

use super::record::ModelRecord;
use crate::error::{Result, WordVecError};
use crate::vector::{VectorStore, VectorStoreBuilder};
use tracing::warn;

/// Derive vector length from the cursor and flattened array lengths
pub fn dimensionality(cursor_count: usize, value_count: usize) -> Result<usize> {
    if cursor_count == 0 {
        return Err(WordVecError::malformed("model has no cursors"));
    }
    if value_count % cursor_count != 0 {
        return Err(WordVecError::malformed(format!(
            "{} vector values do not divide evenly into {} blocks",
            value_count, cursor_count
        )));
    }
    Ok(value_count / cursor_count)
}

/// Decode raw payload bytes into a vector store
pub fn parse_payload(payload: &[u8]) -> Result<VectorStore> {
    let record: ModelRecord = serde_json::from_slice(payload)?;
    parse_record(&record)
}

/// Rebuild the token table from a decoded record
pub fn parse_record(record: &ModelRecord) -> Result<VectorStore> {
    let tokens = &record.attributes.words.tokens;
    let cursors = &record.attributes.indices.cursors;
    let values = &record.attributes.word_vectors.values;

    let dim = dimensionality(cursors.len(), values.len())?;

    if tokens.len() != cursors.len() {
        return Err(WordVecError::malformed(format!(
            "{} tokens but {} cursors",
            tokens.len(),
            cursors.len()
        )));
    }

    let mut builder = VectorStoreBuilder::with_capacity(dim, tokens.len());

    for (token, &cursor) in tokens.iter().zip(cursors) {
        let range = block_range(cursor, dim, values.len()).ok_or_else(|| {
            WordVecError::malformed(format!(
                "cursor {} for token '{}' is outside {} vector values",
                cursor,
                token,
                values.len()
            ))
        })?;

        let replaced = builder.insert(token.as_str(), values[range].to_vec())?;
        if replaced {
            warn!(token = %token, "Duplicate token in model, keeping the later vector");
        }
    }

    Ok(builder.build())
}

/// `cursor*dim .. cursor*dim + dim`, if it lies inside `len` values
fn block_range(cursor: i64, dim: usize, len: usize) -> Option<std::ops::Range<usize>> {
    let block = usize::try_from(cursor).ok()?;
    let start = block.checked_mul(dim)?;
    let end = start.checked_add(dim)?;
    (end <= len).then_some(start..end)
}
