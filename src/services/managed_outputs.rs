//! Manifest of emitted files, used to detect local modifications.
//!
//! `weft sync` records a sha256 of every file it writes. On the next sync,
//! a hash mismatch against the file on disk means the user edited the
//! emitted output, and the write is refused without `--force`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::domain::AppError;
use crate::ports::ProjectStore;

/// Manifest file name, stored at the project root next to `weft.toml`.
pub const MANIFEST_FILE: &str = ".weft-managed.toml";

const MANIFEST_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManagedOutputsManifest {
    pub schema_version: u32,
    pub files: Vec<ManagedOutputEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManagedOutputEntry {
    pub path: String,
    pub sha256: String,
}

impl ManagedOutputsManifest {
    pub fn from_map(map: BTreeMap<String, String>) -> Self {
        let files =
            map.into_iter().map(|(path, sha256)| ManagedOutputEntry { path, sha256 }).collect();
        Self { schema_version: MANIFEST_SCHEMA_VERSION, files }
    }

    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.files.iter().map(|entry| (entry.path.clone(), entry.sha256.clone())).collect()
    }
}

pub fn load_manifest(store: &impl ProjectStore) -> Result<Option<ManagedOutputsManifest>, AppError> {
    if !store.file_exists(MANIFEST_FILE) {
        return Ok(None);
    }

    let content = store.read_file(MANIFEST_FILE)?;
    let manifest: ManagedOutputsManifest = toml::from_str(&content).map_err(|err| {
        AppError::config_error(format!("Failed to parse {}: {}", MANIFEST_FILE, err))
    })?;

    if manifest.schema_version != MANIFEST_SCHEMA_VERSION {
        return Err(AppError::config_error(format!(
            "Unsupported managed outputs schema version: {} (expected {})",
            manifest.schema_version, MANIFEST_SCHEMA_VERSION
        )));
    }

    Ok(Some(manifest))
}

pub fn write_manifest(
    store: &impl ProjectStore,
    manifest: &ManagedOutputsManifest,
) -> Result<(), AppError> {
    let content = toml::to_string_pretty(manifest)?;
    store.write_file(MANIFEST_FILE, &content)
}

/// Recorded hash for an emitted file, if any.
pub fn recorded_hash(store: &impl ProjectStore, path: &str) -> Result<Option<String>, AppError> {
    Ok(load_manifest(store)?.and_then(|manifest| manifest.to_map().get(path).cloned()))
}

/// Record the hash of freshly emitted content.
pub fn record(store: &impl ProjectStore, path: &str, content: &str) -> Result<(), AppError> {
    let mut map = load_manifest(store)?.map(|manifest| manifest.to_map()).unwrap_or_default();
    map.insert(path.to_string(), hash_content(content));
    write_manifest(store, &ManagedOutputsManifest::from_map(map))
}

pub fn hash_content(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    let digest = hasher.finalize();
    digest.iter().map(|byte| format!("{:02x}", byte)).collect()
}
