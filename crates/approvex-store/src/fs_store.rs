//! Filesystem-backed approved reference store
//!
//! Approved references live under a root directory as
//! `<name>.approved.json`; the latest divergent output for a comparison
//! is written next to its reference as `<name>.received.json` so it can
//! be reviewed and promoted.

#![allow(clippy::result_large_err)]

use crate::atomic::atomic_write;
use crate::errors::{invalid_name, io_error, reference_corrupt, Result};
use approvex_core::ReferenceSource;
use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

const APPROVED_SUFFIX: &str = ".approved.json";
const RECEIVED_SUFFIX: &str = ".received.json";

/// Filesystem-backed reference store
pub struct FsReferenceStore {
    root: PathBuf,
}

impl FsReferenceStore {
    /// Create a store rooted at the given approvals directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory holding reference files
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the approved reference for `name`
    pub fn approved_path(&self, name: &str) -> Result<PathBuf> {
        self.resolve(name, APPROVED_SUFFIX)
    }

    /// Path of the received file for `name`
    pub fn received_path(&self, name: &str) -> Result<PathBuf> {
        self.resolve(name, RECEIVED_SUFFIX)
    }

    /// Register canonical text as the approved reference for `name`
    pub fn write_approved(&self, name: &str, content: &[u8]) -> Result<PathBuf> {
        let path = self.approved_path(name)?;
        atomic_write(&path, content)?;
        tracing::debug!(
            component = module_path!(),
            name,
            path = %path.display(),
            "approved reference written"
        );
        Ok(path)
    }

    /// Write the latest divergent canonical text next to the reference
    pub fn write_received(&self, name: &str, content: &[u8]) -> Result<PathBuf> {
        let path = self.received_path(name)?;
        atomic_write(&path, content)?;
        tracing::debug!(
            component = module_path!(),
            name,
            path = %path.display(),
            "received file written"
        );
        Ok(path)
    }

    /// Delete a stale received file, if one exists
    pub fn remove_received(&self, name: &str) -> Result<()> {
        let path = self.received_path(name)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(io_error("remove_received", e)),
        }
    }

    fn resolve(&self, name: &str, suffix: &str) -> Result<PathBuf> {
        validate_name(name)?;
        Ok(self.root.join(format!("{}{}", name, suffix)))
    }
}

/// Comparison names become file names under the approvals root.
/// Subdirectory separators are allowed; escaping the root is not.
fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(invalid_name(name, "comparison name is empty"));
    }
    let escapes = Path::new(name).components().any(|c| {
        matches!(
            c,
            Component::ParentDir | Component::RootDir | Component::Prefix(_)
        )
    });
    if escapes {
        return Err(invalid_name(
            name,
            "comparison name must stay under the approvals root",
        ));
    }
    Ok(())
}

impl ReferenceSource for FsReferenceStore {
    fn load_reference(&self, name: &str) -> Result<Option<Vec<u8>>> {
        let path = self.approved_path(name)?;
        let content = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(io_error("load_reference", e)),
        };

        // Canonical text is always UTF-8 JSON lines
        if std::str::from_utf8(&content).is_err() {
            return Err(reference_corrupt(
                name,
                "approved reference is not valid UTF-8",
            ));
        }

        tracing::debug!(
            component = module_path!(),
            name,
            bytes = content.len(),
            "approved reference loaded"
        );
        Ok(Some(content))
    }
}
