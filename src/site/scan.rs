//! Site directory discovery and scanning.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{KitlistError, Result};

use super::package::InstalledPackage;

/// One-shot interpreter query: site-packages directories plus the user site,
/// printed as a JSON array so the answer survives odd path characters.
const PY_SITE_DIRS: &str =
    "import site, json; print(json.dumps(site.getsitepackages() + [site.getusersitepackages()]))";

/// Ask the Python interpreter for its site directories.
///
/// Runs `<python> -c` once; duplicates are removed while preserving the
/// interpreter's reported order, since that order decides which install wins.
pub fn discover_site_dirs(python: &str) -> Result<Vec<PathBuf>> {
    let output = Command::new(python)
        .arg("-c")
        .arg(PY_SITE_DIRS)
        .output()
        .map_err(|e| KitlistError::InterpreterQuery {
            python: python.to_string(),
            message: e.to_string(),
        })?;

    if !output.status.success() {
        return Err(KitlistError::InterpreterQuery {
            python: python.to_string(),
            message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let listed: Vec<String> =
        serde_json::from_str(stdout.trim()).map_err(|e| KitlistError::InterpreterQuery {
            python: python.to_string(),
            message: format!("unexpected site listing: {}", e),
        })?;

    let mut seen = Vec::new();
    for dir in listed {
        let path = PathBuf::from(dir);
        if !seen.contains(&path) {
            seen.push(path);
        }
    }
    tracing::debug!("discovered {} site dirs via {}", seen.len(), python);
    Ok(seen)
}

/// Enumerate installed packages across site directories.
///
/// Returns a map from canonical key to package. The first directory to
/// provide a key wins, matching interpreter path-resolution order; an
/// unreadable directory is logged and skipped.
pub fn scan_sites(dirs: &[PathBuf]) -> HashMap<String, InstalledPackage> {
    let mut installed = HashMap::new();
    for dir in dirs {
        for package in scan_dir(dir) {
            installed.entry(package.key.clone()).or_insert(package);
        }
    }
    installed
}

fn scan_dir(dir: &Path) -> Vec<InstalledPackage> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::debug!("skipping unreadable site dir {}: {}", dir.display(), e);
            return Vec::new();
        }
    };

    let mut packages = Vec::new();
    for entry in entries.flatten() {
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            continue;
        };
        if let Some(package) = InstalledPackage::from_metadata_entry(name) {
            packages.push(package);
        }
    }
    tracing::debug!("{}: {} packages", dir.display(), packages.len());
    packages
}
