//! Model Archive Reader
//!
//! Random-access view over a zip bundle. The payload is located by a
//! substring match on entry names and read fully into memory.

use crate::config::LoaderConfig;
use crate::error::{Result, WordVecError};
use bytes::Bytes;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use tracing::debug;
use zip::ZipArchive;

/// An opened model bundle
pub struct ModelArchive {
    path: PathBuf,
    archive: ZipArchive<BufReader<File>>,
}

impl ModelArchive {
    /// Open a bundle for random access
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| WordVecError::archive_open(path, e))?;
        let archive = ZipArchive::new(BufReader::new(file))
            .map_err(|e| WordVecError::archive_open(path, e))?;

        Ok(Self {
            path: path.to_path_buf(),
            archive,
        })
    }

    /// Path the bundle was opened from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of entries in the bundle
    pub fn len(&self) -> usize {
        self.archive.len()
    }

    /// Check if the bundle has no entries
    pub fn is_empty(&self) -> bool {
        self.archive.is_empty()
    }

    /// Entry names in archive order
    pub fn entry_names(&mut self) -> Result<Vec<String>> {
        let mut names = Vec::with_capacity(self.archive.len());
        for i in 0..self.archive.len() {
            let entry = self
                .archive
                .by_index(i)
                .map_err(|e| WordVecError::archive_open(&self.path, e))?;
            names.push(entry.name().to_string());
        }
        Ok(names)
    }

    /// Read the first entry whose name contains `config.payload_name`
    pub fn read_payload(&mut self, config: &LoaderConfig) -> Result<Bytes> {
        for i in 0..self.archive.len() {
            let mut entry = self
                .archive
                .by_index(i)
                .map_err(|e| WordVecError::archive_open(&self.path, e))?;

            debug!(entry = %entry.name(), "Inspecting archive entry");

            if entry.is_dir() || !entry.name().contains(config.payload_name.as_str()) {
                continue;
            }

            let size = entry.size();
            if size > config.max_payload_bytes {
                return Err(WordVecError::PayloadTooLarge {
                    name: entry.name().to_string(),
                    size,
                    limit: config.max_payload_bytes,
                });
            }

            let mut content = Vec::with_capacity(size as usize);
            entry
                .read_to_end(&mut content)
                .map_err(|e| WordVecError::archive_open(&self.path, e))?;

            debug!(entry = %entry.name(), bytes = content.len(), "Read model payload");
            return Ok(Bytes::from(content));
        }

        Err(WordVecError::PayloadNotFound {
            path: self.path.clone(),
            pattern: config.payload_name.clone(),
        })
    }
}

/// Open `path`, read its payload entry, and close the archive
pub fn read_payload(path: impl AsRef<Path>, config: &LoaderConfig) -> Result<Bytes> {
    let mut archive = ModelArchive::open(path)?;
    archive.read_payload(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{sample_model_json, write_archive, write_bundle};
    use tempfile::tempdir;

    #[test]
    fn test_read_payload_by_substring() {
        let dir = tempdir().unwrap();
        let model = sample_model_json();
        let path = write_bundle(dir.path(), &model);

        let payload = read_payload(&path, &LoaderConfig::default()).unwrap();
        assert_eq!(payload.as_ref(), model.as_bytes());
    }

    #[test]
    fn test_entry_names_in_order() {
        let dir = tempdir().unwrap();
        let path = write_bundle(dir.path(), "{}");

        let mut archive = ModelArchive::open(&path).unwrap();
        assert_eq!(archive.len(), 2);
        assert_eq!(archive.path(), path.as_path());
        assert_eq!(archive.entry_names().unwrap(), vec!["bundle.json", "root/model.json"]);
    }

    #[test]
    fn test_first_matching_entry_wins() {
        let dir = tempdir().unwrap();
        let path = write_archive(
            dir.path(),
            "two.zip",
            &[
                ("a/model.json", b"first".as_slice()),
                ("b/model.json", b"second".as_slice()),
            ],
        );

        let payload = read_payload(&path, &LoaderConfig::default()).unwrap();
        assert_eq!(payload.as_ref(), b"first");
    }

    #[test]
    fn test_missing_archive() {
        let err = read_payload("/nonexistent/path.zip", &LoaderConfig::default()).unwrap_err();
        assert!(matches!(err, WordVecError::ArchiveOpen { .. }));
    }

    #[test]
    fn test_not_a_zip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("garbage.zip");
        std::fs::write(&path, b"this is not a zip archive").unwrap();

        let err = read_payload(&path, &LoaderConfig::default()).unwrap_err();
        assert!(matches!(err, WordVecError::ArchiveOpen { .. }));
    }

    #[test]
    fn test_payload_not_found() {
        let dir = tempdir().unwrap();
        let path = write_archive(dir.path(), "other.zip", &[("bundle.json", b"{}".as_slice())]);

        let err = read_payload(&path, &LoaderConfig::default()).unwrap_err();
        match err {
            WordVecError::PayloadNotFound { pattern, .. } => assert_eq!(pattern, "model.json"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_payload_too_large() {
        let dir = tempdir().unwrap();
        let path = write_bundle(dir.path(), &sample_model_json());
        let config = LoaderConfig::default().with_max_payload_bytes(8);

        let err = read_payload(&path, &config).unwrap_err();
        assert!(matches!(err, WordVecError::PayloadTooLarge { limit: 8, .. }));
    }

    #[test]
    fn test_custom_payload_name() {
        let dir = tempdir().unwrap();
        let path = write_bundle(dir.path(), "{}");
        let config = LoaderConfig::default().with_payload_name("bundle");

        let payload = read_payload(&path, &config).unwrap();
        assert_eq!(payload.as_ref(), br#"{"name":"word2vec"}"#);
    }
}
