//! Vector Module
//!
//! Embedding table storage and the operations built on it.

mod model;
mod similarity;
mod store;

pub use model::Word2VecModel;
pub use similarity::{add_assign, cosine_with_norms, dot_product, l2_norm, scale};
pub use store::{VectorStore, VectorStoreBuilder};
