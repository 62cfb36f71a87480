use crate::constants::MANIFEST_VERSION;
use crate::error::Result;
use crate::marker::store::MarkerStore;
use crate::marker::types::Marker;
use egui::pos2;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerEntry {
    pub x: f32,
    pub y: f32,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkerManifest {
    pub name: String,
    pub version: String,
    pub markers: Vec<MarkerEntry>,
    pub created_at: String,
}

impl From<&Marker> for MarkerEntry {
    fn from(marker: &Marker) -> Self {
        Self {
            x: marker.position.x,
            y: marker.position.y,
            label: marker.label.clone(),
        }
    }
}

pub fn new_manifest(name: String) -> MarkerManifest {
    MarkerManifest {
        name,
        version: MANIFEST_VERSION.to_string(),
        markers: Vec::new(),
        created_at: chrono::Utc::now().to_rfc3339(),
    }
}

/// Snapshots every marker in the store, permanent and ephemeral alike;
/// loading a manifest seeds them all back as permanent markers.
pub fn manifest_from_store(name: String, store: &MarkerStore) -> MarkerManifest {
    let mut manifest = new_manifest(name);
    manifest.markers = store.list().iter().map(MarkerEntry::from).collect();
    manifest
}

pub fn save_manifest(manifest: &MarkerManifest, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(manifest)
        .map_err(|e| crate::error::MapError::SerializationError(e.to_string()))?;

    fs::write(path, json).map_err(|e| crate::error::MapError::FileWriteError(e.to_string()))?;

    Ok(())
}

pub fn load_manifest(path: &Path) -> Result<MarkerManifest> {
    let json = fs::read_to_string(path)
        .map_err(|e| crate::error::MapError::FileReadError(e.to_string()))?;

    let manifest: MarkerManifest = serde_json::from_str(&json)
        .map_err(|e| crate::error::MapError::SerializationError(e.to_string()))?;

    Ok(manifest)
}

/// Returns how many entries were seeded. All entries are validated up
/// front; a manifest with any empty label leaves the store untouched.
pub fn seed_store(store: &mut MarkerStore, manifest: &MarkerManifest) -> Result<usize> {
    if manifest
        .markers
        .iter()
        .any(|entry| entry.label.trim().is_empty())
    {
        return Err(crate::error::MapError::InvalidLabel);
    }

    for entry in &manifest.markers {
        store.add_permanent(pos2(entry.x, entry.y), entry.label.clone())?;
    }
    Ok(manifest.markers.len())
}

/// Clipboard form of a single placement, pasteable into a manifest's
/// marker list.
pub fn entry_snippet(entry: &MarkerEntry) -> String {
    format!(
        "{{ \"x\": {:.0}, \"y\": {:.0}, \"label\": \"{}\" }}",
        entry.x, entry.y, entry.label
    )
}
