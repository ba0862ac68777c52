//! Persisting rendered documents.

use anyhow::{bail, Context};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

/// Destination for finished documents.
pub trait OutputSink {
    /// Stores `document` under `name` and reports where it went.
    fn write(&mut self, name: &str, document: &str) -> anyhow::Result<PathBuf>;

    /// Stores a batch of `(name, document)` pairs.
    ///
    /// The default writes them one at a time; sinks that can stage output
    /// override it to store all or nothing.
    fn write_all(&mut self, documents: &[(&str, &str)]) -> anyhow::Result<Vec<PathBuf>> {
        documents
            .iter()
            .map(|(name, document)| self.write(name, document))
            .collect()
    }
}

/// Writes documents as files into one directory, creating it on first use.
///
/// A batch is staged as temporary files inside the directory and only moved
/// into place once every document has been staged. On failure, files and
/// directories created by the batch are removed again.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn stage_and_commit(&self, documents: &[(&str, &str)]) -> anyhow::Result<Vec<PathBuf>> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("cannot create {}", self.dir.display()))?;

        let mut staged = Vec::with_capacity(documents.len());
        for (name, document) in documents {
            let path = self.dir.join(name);
            if path.is_dir() {
                bail!("cannot write {}: it is a directory", path.display());
            }
            let mut file = NamedTempFile::new_in(&self.dir)
                .with_context(|| format!("cannot stage {}", path.display()))?;
            file.write_all(document.as_bytes())
                .with_context(|| format!("cannot stage {}", path.display()))?;
            let existed = path.exists();
            staged.push((file, path, existed, document.len()));
        }

        // Temp files still in `staged` are deleted when it drops.
        let mut committed: Vec<(PathBuf, bool)> = Vec::with_capacity(staged.len());
        for (file, path, existed, len) in staged {
            if let Err(err) = file.persist(&path) {
                for (done, existed) in &committed {
                    if !existed {
                        let _ = fs::remove_file(done);
                    }
                }
                return Err(err.error).with_context(|| format!("cannot write {}", path.display()));
            }
            debug!("Wrote {} bytes to {}", len, path.display());
            committed.push((path, existed));
        }

        Ok(committed.into_iter().map(|(path, _)| path).collect())
    }
}

/// Outermost missing directory on the way to `dir`, if any.
fn first_missing_ancestor(dir: &Path) -> Option<PathBuf> {
    let mut missing = None;
    for ancestor in dir.ancestors() {
        if ancestor.as_os_str().is_empty() || ancestor.exists() {
            break;
        }
        missing = Some(ancestor.to_path_buf());
    }
    missing
}

impl OutputSink for DirectorySink {
    fn write(&mut self, name: &str, document: &str) -> anyhow::Result<PathBuf> {
        self.write_all(&[(name, document)])?
            .pop()
            .context("no document was written")
    }

    fn write_all(&mut self, documents: &[(&str, &str)]) -> anyhow::Result<Vec<PathBuf>> {
        let created = first_missing_ancestor(&self.dir);
        let result = self.stage_and_commit(documents);
        if result.is_err() {
            if let Some(root) = created {
                if let Err(err) = fs::remove_dir_all(&root) {
                    warn!("Cannot clean up {}: {}", root.display(), err);
                }
            }
        }
        result
    }
}
