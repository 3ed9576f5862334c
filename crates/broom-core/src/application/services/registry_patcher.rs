//! Registry Patcher - idempotent entry insertion on disk.
//!
//! Wraps the pure [`InsertionRequest::apply`] with one read and at most one
//! write per file. A file that does not exist yet starts from its skeleton.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, instrument, warn};

use crate::{
    application::ports::Filesystem,
    domain::{InsertionRequest, PatchOutcome},
    error::BroomResult,
};

pub struct RegistryPatcher {
    filesystem: Arc<dyn Filesystem>,
}

impl RegistryPatcher {
    pub fn new(filesystem: Arc<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Ensure one entry is present in the file at `path`.
    pub fn ensure_entry(
        &self,
        path: &Path,
        skeleton: &str,
        request: &InsertionRequest,
    ) -> BroomResult<PatchOutcome> {
        let outcomes = self.ensure_entries(path, skeleton, std::slice::from_ref(request))?;
        Ok(outcomes
            .into_iter()
            .next()
            .unwrap_or(PatchOutcome::AlreadyPresent))
    }

    /// Ensure several entries with a single read and a single write.
    ///
    /// Outcomes are returned in request order.
    pub fn ensure_entries(
        &self,
        path: &Path,
        skeleton: &str,
        requests: &[InsertionRequest],
    ) -> BroomResult<Vec<PatchOutcome>> {
        self.patch(path, Some(skeleton), requests, true)
            .map(|outcomes| outcomes.unwrap_or_default())
    }

    /// What [`ensure_entries`](Self::ensure_entries) would do, without writing.
    pub fn preview_entries(
        &self,
        path: &Path,
        skeleton: &str,
        requests: &[InsertionRequest],
    ) -> BroomResult<Vec<PatchOutcome>> {
        self.patch(path, Some(skeleton), requests, false)
            .map(|outcomes| outcomes.unwrap_or_default())
    }

    /// Patch a file that must already exist. Returns `None` when it does not.
    pub fn patch_existing(
        &self,
        path: &Path,
        requests: &[InsertionRequest],
        write: bool,
    ) -> BroomResult<Option<Vec<PatchOutcome>>> {
        self.patch(path, None, requests, write)
    }

    /// Write `skeleton` when the file is missing. Returns whether it was created.
    pub fn ensure_skeleton(&self, path: &Path, skeleton: &str, write: bool) -> BroomResult<bool> {
        if self.filesystem.exists(path) {
            return Ok(false);
        }
        if write {
            self.write(path, skeleton)?;
        }
        Ok(true)
    }

    #[instrument(skip_all, fields(path = %path.display(), entries = requests.len()))]
    fn patch(
        &self,
        path: &Path,
        skeleton: Option<&str>,
        requests: &[InsertionRequest],
        write: bool,
    ) -> BroomResult<Option<Vec<PatchOutcome>>> {
        let (created, mut content) = if self.filesystem.exists(path) {
            (false, self.filesystem.read_to_string(path)?)
        } else {
            match skeleton {
                Some(skeleton) => (true, skeleton.to_string()),
                None => return Ok(None),
            }
        };

        let mut outcomes = Vec::with_capacity(requests.len());
        let mut changed = created;

        for request in requests {
            let (outcome, patched) = request.apply(&content);
            match outcome {
                PatchOutcome::Inserted => {
                    changed = true;
                    content = patched;
                }
                PatchOutcome::ContainerNotFound => {
                    warn!(
                        path = %path.display(),
                        entry = request.insertion().trim(),
                        "Insertion point not found, entry not added"
                    );
                }
                PatchOutcome::AlreadyPresent | PatchOutcome::Created => {
                    debug!(entry = request.insertion().trim(), "Entry already present");
                }
            }
            outcomes.push(if created && outcome == PatchOutcome::Inserted {
                PatchOutcome::Created
            } else {
                outcome
            });
        }

        if changed && write {
            self.write(path, &content)?;
        }

        Ok(Some(outcomes))
    }

    fn write(&self, path: &Path, content: &str) -> BroomResult<()> {
        if let Some(parent) = path.parent() {
            self.filesystem.create_dir_all(parent)?;
        }
        self.filesystem.write_file(path, content)
    }
}
