//! Format Module
//!
//! Decodes the model record stored in a bundle and rebuilds the vector table.

mod parser;
mod record;

pub use parser::{dimensionality, parse_payload, parse_record};
pub use record::{Attributes, Indices, ModelRecord, WordVectors, Words};
