//! Per-job temporary workspace lifecycle.
//!
//! Each conversion job stages its input and output inside a freshly
//! created, exclusively-owned directory. The directory must never outlive
//! the request: callers invoke [`Workspace::cleanup`] on every normal exit
//! path, and `Drop` removes the directory if cleanup never ran (panic or
//! cancelled request future).

use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::document::DocumentKind;
use crate::error::ConvertError;

/// Exclusively-owned temporary directory for one conversion job.
#[derive(Debug)]
pub struct Workspace {
    dir: PathBuf,
    cleaned: bool,
}

impl Workspace {
    /// Create a uniquely-named workspace directory under `work_root`.
    pub async fn create(work_root: &Path) -> Result<Self, ConvertError> {
        let dir = work_root.join(format!("job-{}", Uuid::new_v4().simple()));
        tokio::fs::create_dir_all(&dir).await?;
        Ok(Self {
            dir,
            cleaned: false,
        })
    }

    /// The workspace directory path.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path the uploaded bytes are staged at: `input.<ext>`.
    pub fn input_path(&self, kind: DocumentKind) -> PathBuf {
        self.dir.join(format!("input.{}", kind.extension()))
    }

    /// Path the engine is expected to write: `input.pdf`.
    pub fn output_path(&self) -> PathBuf {
        self.dir.join("input.pdf")
    }

    /// Remove the workspace directory and everything in it.
    ///
    /// Failure is logged and swallowed so it never masks the job's
    /// primary outcome.
    pub async fn cleanup(mut self) {
        self.cleaned = true;
        if let Err(e) = tokio::fs::remove_dir_all(&self.dir).await {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(
                    dir = %self.dir.display(),
                    error = %e,
                    "Failed to remove workspace"
                );
            }
        }
    }
}

impl Drop for Workspace {
    fn drop(&mut self) {
        if self.cleaned {
            return;
        }
        if let Err(e) = std::fs::remove_dir_all(&self.dir) {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(
                    dir = %self.dir.display(),
                    error = %e,
                    "Failed to remove workspace on drop"
                );
            }
        }
    }
}
