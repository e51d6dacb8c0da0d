//! Fixtures shared by the unit tests: model records and zip bundles on disk.

use serde_json::json;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Build a model record in the bundle's JSON layout
pub fn model_json(tokens: &[&str], cursors: &[i64], vectors: &[f64]) -> String {
    json!({
        "attributes": {
            "words": { "string": tokens, "type": "list" },
            "indices": { "long": cursors, "type": "list" },
            "word_vectors": { "double": vectors, "type": "list" }
        },
        "op": "word2vec"
    })
    .to_string()
}

/// The three-token model used across tests; "scala" is [1, 2, 3]
pub fn sample_model_json() -> String {
    model_json(
        &["scala", "rust", "zero"],
        &[0, 1, 2],
        &[1.0, 2.0, 3.0, 2.0, 4.0, 6.5, 0.0, 0.0, 0.0],
    )
}

/// Write a zip archive with the given entries into `dir`
pub fn write_archive(dir: &Path, file_name: &str, entries: &[(&str, &[u8])]) -> PathBuf {
    let path = dir.join(file_name);
    let file = File::create(&path).unwrap();
    let mut writer = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);

    for (name, content) in entries {
        writer.start_file(*name, options).unwrap();
        writer.write_all(content).unwrap();
    }

    writer.finish().unwrap();
    path
}

/// Write a bundle laid out like an exported pipeline, with the model in `root/`
pub fn write_bundle(dir: &Path, model: &str) -> PathBuf {
    write_archive(
        dir,
        "word2vec-model.zip",
        &[
            ("bundle.json", br#"{"name":"word2vec"}"#.as_slice()),
            ("root/model.json", model.as_bytes()),
        ],
    )
}
