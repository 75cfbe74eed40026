//! Managed photo storage.
//!
//! Picked images arrive as transient URIs (camera captures, library picks)
//! that may vanish once the picker is done with them. Every note photo is
//! copied into the managed directory first, and the note row only ever
//! references the managed copy.

use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

use url::Url;

use crate::error::{Error, Result};
use crate::models::now_millis;

mod fs;

pub use fs::{FileSystem, LocalFileSystem};

pub const DEFAULT_EXTENSION: &str = ".jpg";

pub struct PhotoManager<F = LocalFileSystem> {
    root: PathBuf,
    fs: F,
}

impl PhotoManager<LocalFileSystem> {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_fs(root, LocalFileSystem)
    }
}

impl<F: FileSystem> PhotoManager<F> {
    pub fn with_fs(root: impl Into<PathBuf>, fs: F) -> Self {
        Self {
            root: root.into().components().collect(),
            fs,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn fs(&self) -> &F {
        &self.fs
    }

    /// Whether `uri` points inside the managed directory.
    pub fn is_managed(&self, uri: &str) -> bool {
        self.managed_path(uri).is_some()
    }

    /// Plain path of a managed file behind `uri`. Anything that climbs out
    /// with `..` or names the root itself is not managed.
    fn managed_path(&self, uri: &str) -> Option<PathBuf> {
        let path: PathBuf = source_path(uri).ok()?.components().collect();
        let rest = path.strip_prefix(&self.root).ok()?;
        let mut parts = rest.components().peekable();
        parts.peek()?;
        if parts.all(|c| matches!(c, Component::Normal(_))) {
            Some(path)
        } else {
            None
        }
    }

    /// Whether two URIs name the same local file, however they are spelled.
    pub fn same_image(&self, a: &str, b: &str) -> bool {
        match (source_path(a), source_path(b)) {
            (Ok(a), Ok(b)) => a.components().eq(b.components()),
            _ => a == b,
        }
    }

    /// Copy `source_uri` into the managed directory as `desired_name`.
    pub fn persist_new_image(&self, source_uri: &str, desired_name: &str) -> Result<String> {
        if Path::new(desired_name).file_name() != Some(OsStr::new(desired_name)) {
            return Err(Error::Validation(format!(
                "Invalid photo file name: {}",
                desired_name
            )));
        }

        let source = source_path(source_uri)?;
        self.fs
            .create_dir_all(&self.root)
            .map_err(|e| Error::io(&self.root, e))?;

        let dest = self.root.join(desired_name);
        self.fs
            .copy(&source, &dest)
            .map_err(|e| Error::io(&source, e))?;

        tracing::debug!(source = %source.display(), dest = %dest.display(), "Copied photo into managed storage.");
        Ok(dest.to_string_lossy().into_owned())
    }

    /// Point a note at `new_source_uri`, copying it in when it is not already
    /// managed and dropping the note's previous managed photo. Managed
    /// sources come back as a plain path, never as the caller's URI.
    pub fn replace_image(
        &self,
        new_source_uri: &str,
        id_prefix: &str,
        previous_path: Option<&str>,
    ) -> Result<String> {
        if let Some(path) = self.managed_path(new_source_uri) {
            return Ok(path.to_string_lossy().into_owned());
        }

        let name = format!(
            "{}-{}{}",
            id_prefix,
            now_millis(),
            extension_from_uri(new_source_uri)
        );
        let dest = self.persist_new_image(new_source_uri, &name)?;

        if let Some(previous) = previous_path {
            if !self.same_image(previous, new_source_uri) && !self.same_image(previous, &dest) {
                self.release_image(previous);
            }
        }

        Ok(dest)
    }

    /// Best-effort removal of a managed photo. Paths outside the managed
    /// directory are left alone. Returns whether the file was removed.
    pub fn release_image(&self, path: &str) -> bool {
        if !self.is_managed(path) {
            tracing::debug!(path, "Not releasing unmanaged photo.");
            return false;
        }

        let Some(file) = self.managed_path(path) else {
            return false;
        };
        match self.fs.remove(&file) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(error = %err, path, "Failed to remove stale photo.");
                false
            }
        }
    }
}

/// File name for a new note's photo: the note id plus the source extension.
pub fn managed_file_name(note_id: &str, source_uri: &str) -> String {
    format!("{}{}", note_id, extension_from_uri(source_uri))
}

/// Extension of the last path segment, including the dot. Query strings
/// and fragments are ignored; `.jpg` when the segment has no dot.
pub fn extension_from_uri(uri: &str) -> &str {
    let clean = uri.split(&['?', '#'][..]).next().unwrap_or(uri);
    let segment = clean.rsplit('/').next().unwrap_or(clean);
    match segment.rfind('.') {
        Some(idx) => &segment[idx..],
        None => DEFAULT_EXTENSION,
    }
}

/// Local path behind a `file://` URL or bare path.
fn source_path(uri: &str) -> Result<PathBuf> {
    if !uri.contains("://") {
        if uri.is_empty() {
            return Err(Error::UnsupportedSource(uri.to_string()));
        }
        return Ok(PathBuf::from(uri));
    }

    let url = Url::parse(uri).map_err(|_| Error::UnsupportedSource(uri.to_string()))?;
    if url.scheme() != "file" {
        return Err(Error::UnsupportedSource(uri.to_string()));
    }
    url.to_file_path()
        .map_err(|_| Error::UnsupportedSource(uri.to_string()))
}
