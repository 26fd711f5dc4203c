use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{IconsetError, Result};
use crate::models::{ImageEntry, Info, Manifest, RasterResult};

pub const MANIFEST_FILE: &str = "Contents.json";
const IDIOM_MAC: &str = "mac";

impl Manifest {
    /// One entry per result, in the order given. Only produced renditions carry a filename.
    pub fn from_results(results: &[RasterResult]) -> Self {
        let images = results
            .iter()
            .map(|r| ImageEntry {
                filename: r.filename().map(str::to_string),
                idiom: IDIOM_MAC.to_string(),
                scale: r.spec.scale_label(),
                size: r.spec.size_label(),
            })
            .collect();
        Manifest {
            images,
            info: Info::default(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Writes `Contents.json` into `dir`, replacing any previous manifest.
pub fn write_manifest(dir: &Path, results: &[RasterResult]) -> Result<PathBuf> {
    let path = dir.join(MANIFEST_FILE);
    let json = Manifest::from_results(results).to_json()?;
    fs::write(&path, json).map_err(|source| IconsetError::WriteManifest {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}
