//! Archive Module
//!
//! Opens packaged model bundles and pulls out the serialized payload entry.

mod reader;

pub use reader::{read_payload, ModelArchive};
