//! Materializes a [`GenerationPlan`] under the write policy.

use tracing::{debug, info};

use crate::{
    application::{ports::Filesystem, report::GenerationReport},
    domain::{GenerationPlan, WritePolicy},
    error::BroomResult,
};

/// Per-invocation switches for generation commands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Overwrite generated files that already exist.
    pub force: bool,
    /// Plan and report, but do not touch the disk.
    pub dry_run: bool,
}

impl GenerateOptions {
    pub fn force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

pub(crate) struct FileWriter<'a> {
    filesystem: &'a dyn Filesystem,
    options: GenerateOptions,
}

impl<'a> FileWriter<'a> {
    pub(crate) fn new(filesystem: &'a dyn Filesystem, options: GenerateOptions) -> Self {
        Self {
            filesystem,
            options,
        }
    }

    /// Existing files are skipped unless forced or the file's policy is
    /// [`WritePolicy::Replace`]. Directories are created with their parents.
    pub(crate) fn write(&self, plan: &GenerationPlan, report: &mut GenerationReport) -> BroomResult<()> {
        plan.validate()?;

        for dir in plan.directories() {
            if !self.options.dry_run {
                self.filesystem.create_dir_all(&plan.absolute(dir))?;
            }
            report.directories.push(dir.clone());
        }

        for file in plan.files() {
            let path = plan.absolute(&file.path);
            let exists = self.filesystem.exists(&path);

            if exists && file.policy == WritePolicy::KeepExisting && !self.options.force {
                debug!(path = %file.path.display(), "File exists, skipping");
                report.skipped.push(file.path.clone());
                continue;
            }

            if !self.options.dry_run {
                if let Some(parent) = path.parent() {
                    self.filesystem.create_dir_all(parent)?;
                }
                self.filesystem.write_file(&path, &file.content)?;
            }

            if exists {
                info!(path = %file.path.display(), "Overwrote file");
                report.overwritten.push(file.path.clone());
            } else {
                debug!(path = %file.path.display(), "Created file");
                report.created.push(file.path.clone());
            }
        }

        Ok(())
    }
}
