//! Supplier file discovery.
//!
//! Walks `<root>/<namespace>/emi_loot_suppliers/<folder>/**/*.json` for every
//! category folder and reads each file as raw JSON.

use std::fs::DirEntry;
use std::io;
use std::path::{Path, PathBuf};

use loot_core::{Category, ResourceId};
use serde_json::Value;
use tracing::{debug, error, warn};
use walkdir::WalkDir;

use crate::loaders::{LoadResult, read_file};
use crate::parser::infer_category;

/// Folder under each namespace that holds supplier definitions.
pub const SUPPLIER_FOLDER: &str = "emi_loot_suppliers";

/// A supplier file read from disk but not yet parsed.
#[derive(Clone, Debug)]
pub struct DiscoveredFile {
    /// `namespace:emi_loot_suppliers/<folder>/<relative path>`.
    pub location: String,
    pub path: PathBuf,
    pub json: Value,
}

impl DiscoveredFile {
    /// Category implied by the folder the file was found in.
    pub fn category_hint(&self) -> Option<Category> {
        infer_category(&self.location)
    }

    /// File stem, used as a short label in logs.
    pub fn name(&self) -> &str {
        self.path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or(&self.location)
    }
}

/// Scans a data root for supplier definition files.
pub struct SupplierDiscovery {
    root: PathBuf,
}

impl SupplierDiscovery {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Reads every supplier file under the root, sorted by location.
    ///
    /// Files that cannot be read or are not valid JSON are logged and
    /// skipped. A missing root yields an empty list.
    ///
    /// # Errors
    ///
    /// Fails only when the root exists but cannot be listed.
    pub fn discover(&self) -> LoadResult<Vec<DiscoveredFile>> {
        if !self.root.is_dir() {
            warn!(
                target: "loot::discovery",
                root = %self.root.display(),
                "Data root does not exist; no supplier files discovered"
            );
            return Ok(Vec::new());
        }

        let namespaces = std::fs::read_dir(&self.root).map_err(|e| {
            anyhow::anyhow!("Failed to list data root {}: {}", self.root.display(), e)
        })?;

        let mut files = Vec::new();
        for entry in namespaces {
            let Some((namespace, namespace_path)) = namespace_dir(entry) else {
                continue;
            };

            let supplier_dir = namespace_path.join(SUPPLIER_FOLDER);
            for (folder, _) in Category::FOLDERS {
                let folder_dir = supplier_dir.join(folder);
                if folder_dir.is_dir() {
                    self.scan_folder(&namespace, folder, &folder_dir, &mut files);
                }
            }
        }

        files.sort_by(|a, b| a.location.cmp(&b.location));
        debug!(
            target: "loot::discovery",
            root = %self.root.display(),
            count = files.len(),
            "Discovered supplier files"
        );
        Ok(files)
    }

    fn scan_folder(
        &self,
        namespace: &str,
        folder: &str,
        folder_dir: &Path,
        files: &mut Vec<DiscoveredFile>,
    ) {
        for entry in WalkDir::new(folder_dir).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(error) => {
                    error!(
                        target: "loot::discovery",
                        error = %error,
                        "Failed to walk supplier folder"
                    );
                    continue;
                }
            };
            let path = entry.path();
            if !entry.file_type().is_file()
                || path.extension().and_then(|ext| ext.to_str()) != Some("json")
            {
                continue;
            }

            let relative = path
                .strip_prefix(folder_dir)
                .unwrap_or(path)
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");
            let location = format!("{namespace}:{SUPPLIER_FOLDER}/{folder}/{relative}");

            match read_json(path) {
                Ok(json) => files.push(DiscoveredFile {
                    location,
                    path: path.to_path_buf(),
                    json,
                }),
                Err(error) => {
                    error!(
                        target: "loot::discovery",
                        location = %location,
                        error = %error,
                        "Skipping unreadable supplier file"
                    );
                }
            }
        }
    }
}

/// Namespace name and path of a data-root entry, or `None` when the entry is
/// not a usable namespace directory. Unreadable entries are logged and skipped.
fn namespace_dir(entry: io::Result<DirEntry>) -> Option<(String, PathBuf)> {
    let entry = match entry.and_then(|entry| entry.file_type().map(|kind| (entry, kind))) {
        Ok((entry, kind)) if kind.is_dir() => entry,
        Ok(_) => return None,
        Err(error) => {
            error!(
                target: "loot::discovery",
                error = %error,
                "Skipping unreadable data root entry"
            );
            return None;
        }
    };

    let namespace = entry.file_name().to_string_lossy().into_owned();
    if ResourceId::new(namespace.as_str(), SUPPLIER_FOLDER).is_err() {
        debug!(
            target: "loot::discovery",
            namespace = %namespace,
            "Skipping directory with invalid namespace name"
        );
        return None;
    }
    Some((namespace, entry.path()))
}

fn read_json(path: &Path) -> LoadResult<Value> {
    let content = read_file(path)?;
    serde_json::from_str(&content)
        .map_err(|e| anyhow::anyhow!("Failed to parse supplier JSON {}: {}", path.display(), e))
}
