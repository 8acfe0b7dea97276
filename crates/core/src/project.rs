//! Project model: root discovery, manifest access, candidate listing.
//!
//! A fiorigen invocation runs against the root of a SAPUI5 webapp project.
//! The marker is `webapp/manifest.json`; its `sap.app.id` is the namespace
//! every generated artifact is qualified with.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};

/// A discovered SAPUI5 project: root directory, parsed manifest, namespace.
#[derive(Debug)]
pub struct Project {
    root: PathBuf,
    manifest: serde_json::Value,
    namespace: String,
}

impl Project {
    /// Load the project at `root`.
    ///
    /// Fails with [`Error::Configuration`] when the marker file is missing,
    /// unreadable, invalid JSON, or has no `sap.app.id`.
    pub fn discover(root: &Path) -> Result<Self> {
        let manifest_path = root.join("webapp/manifest.json");
        if !manifest_path.exists() {
            return Err(Error::Configuration(format!(
                "webapp/manifest.json not found under '{}'",
                root.display()
            )));
        }

        let content = std::fs::read_to_string(&manifest_path)?;
        let manifest: serde_json::Value = serde_json::from_str(&content)
            .map_err(|e| Error::Configuration(format!("webapp/manifest.json is invalid: {e}")))?;

        let namespace = manifest
            .get("sap.app")
            .and_then(|v| v.get("id"))
            .and_then(|v| v.as_str())
            .ok_or_else(|| {
                Error::Configuration("webapp/manifest.json has no sap.app.id".to_string())
            })?
            .to_string();

        debug!(root = %root.display(), namespace, "project discovered");
        Ok(Project { root: root.to_path_buf(), manifest, namespace })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// App namespace (`sap.app.id`).
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn webapp_dir(&self) -> PathBuf {
        self.root.join("webapp")
    }

    pub fn controller_dir(&self) -> PathBuf {
        self.webapp_dir().join("controller")
    }

    pub fn view_dir(&self) -> PathBuf {
        self.webapp_dir().join("view")
    }

    pub fn fragments_dir(&self) -> PathBuf {
        self.view_dir().join("fragments")
    }

    pub fn manifest(&self) -> &serde_json::Value {
        &self.manifest
    }

    pub fn manifest_mut(&mut self) -> &mut serde_json::Value {
        &mut self.manifest
    }

    /// Write the manifest back, pretty-printed with a trailing newline.
    pub fn save_manifest(&self) -> Result<()> {
        let path = self.root.join("webapp/manifest.json");
        let output = serde_json::to_string_pretty(&self.manifest)
            .map_err(|e| Error::Configuration(format!("could not serialize manifest: {e}")))?;
        std::fs::write(&path, format!("{output}\n"))?;
        Ok(())
    }

    /// List candidate controller files (`webapp/controller/*.js`), sorted by
    /// name. [`Error::NotFound`] when there are none.
    pub fn controller_files(&self) -> Result<Vec<String>> {
        let dir = self.controller_dir();
        let mut files = Vec::new();
        if dir.is_dir() {
            for entry in std::fs::read_dir(&dir)?.flatten() {
                let name = entry.file_name();
                let name = name.to_string_lossy();
                if name.ends_with(".js") && entry.path().is_file() {
                    files.push(name.to_string());
                }
            }
        }
        if files.is_empty() {
            return Err(Error::NotFound("no controller files found in webapp/controller".into()));
        }
        files.sort();
        Ok(files)
    }

    /// Relative display form for a path under the project root.
    pub fn rel(&self, path: &Path) -> String {
        path.strip_prefix(&self.root).unwrap_or(path).display().to_string()
    }
}
