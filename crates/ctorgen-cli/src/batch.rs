//! Batch command implementation

use crate::manifest::{self, Manifest};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Generate every type of a manifest; returns the written paths in manifest order.
///
/// Relative paths in the manifest are resolved against its directory, which
/// is also where sources are located for entries without a `source`.
/// `GOFILE` is ignored: it names a single file, and a manifest lists types
/// from the whole package.
pub fn generate_all(manifest_path: &Path) -> Result<Vec<PathBuf>> {
    let manifest = Manifest::from_file(manifest_path)?;
    manifest
        .validate()
        .with_context(|| format!("Invalid manifest: {}", manifest_path.display()))?;

    let base_dir = manifest_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let requests = manifest.requests(base_dir)?;
    debug!(types = requests.len(), base_dir = %base_dir.display(), "Running batch");

    requests
        .iter()
        .map(|request| {
            request
                .execute_with(base_dir, None)
                .with_context(|| format!("Failed to generate {}", request.config.type_name))
        })
        .collect()
}

/// Batch command implementation
pub fn run(manifest_path: Option<String>) -> Result<()> {
    let path = manifest::manifest_path(manifest_path);

    for output in generate_all(&path)? {
        println!("Generated constructor code in {}", output.display());
    }

    Ok(())
}
