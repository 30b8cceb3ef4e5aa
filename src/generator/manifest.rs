use crate::error::{DroneScoreError, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

const MANIFEST_SUFFIX: &str = ".manifest.json";

/// Records how a dataset file was produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunManifest {
    pub version: String,
    pub generated_at: String,
    pub seed: u64,
    pub samples: usize,
    pub noise_std_dev: f64,
    pub sha256: String,
}

impl RunManifest {
    pub fn new(seed: u64, samples: usize, noise_std_dev: f64, sha256: String) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: Utc::now().to_rfc3339(),
            seed,
            samples,
            noise_std_dev,
            sha256,
        }
    }
}

/// `data/rating.csv` -> `data/rating.csv.manifest.json`
pub fn manifest_path(dataset: &Path) -> PathBuf {
    let mut name = dataset
        .file_name()
        .map(OsString::from)
        .unwrap_or_default();
    name.push(MANIFEST_SUFFIX);
    dataset.with_file_name(name)
}

pub fn write_manifest(dataset: &Path, manifest: &RunManifest) -> Result<PathBuf> {
    let out_path = manifest_path(dataset);
    let json = serde_json::to_string_pretty(manifest)?;
    fs::write(&out_path, json).map_err(DroneScoreError::Io)?;
    Ok(out_path)
}

pub fn read_manifest(dataset: &Path) -> Result<Option<RunManifest>> {
    let path = manifest_path(dataset);
    if !path.exists() {
        return Ok(None);
    }
    let raw = fs::read_to_string(&path).map_err(DroneScoreError::Io)?;
    Ok(Some(serde_json::from_str(&raw)?))
}

pub fn sha256_file(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(DroneScoreError::Io)?;
    Ok(sha256_hex(&bytes))
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    format!("{digest:x}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn manifest_path_appends_suffix_to_file_name() {
        assert_eq!(
            manifest_path(Path::new("out/rating.csv")),
            PathBuf::from("out/rating.csv.manifest.json")
        );
    }

    #[test]
    fn manifest_written_next_to_dataset_reads_back() {
        let tmp = TempDir::new().expect("temp dir should create");
        let dataset = tmp.path().join("rating.csv");
        fs::write(&dataset, "score\n1.0\n").expect("dataset should write");

        let digest = sha256_file(&dataset).expect("digest should compute");
        let manifest = RunManifest::new(42, 1, 3.0, digest.clone());
        let path = write_manifest(&dataset, &manifest).expect("manifest should write");

        assert!(path.exists());
        let loaded = read_manifest(&dataset)
            .expect("manifest should read")
            .expect("manifest should exist");
        assert_eq!(loaded, manifest);
        assert_eq!(loaded.sha256.len(), 64);
    }

    #[test]
    fn read_manifest_is_none_without_sidecar() {
        let tmp = TempDir::new().expect("temp dir should create");
        let missing = read_manifest(&tmp.path().join("absent.csv")).expect("read should not fail");
        assert!(missing.is_none());
    }

    #[test]
    fn sha256_of_known_bytes() {
        assert_eq!(
            sha256_hex(b"abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }
}
