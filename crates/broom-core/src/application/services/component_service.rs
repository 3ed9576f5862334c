//! Component Service - drops reusable widgets, themes and utilities into
//! the core folders.

use std::path::Path;
use std::sync::Arc;

use tracing::{info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::Filesystem,
        report::GenerationReport,
        services::writer::{FileWriter, GenerateOptions},
    },
    domain::{ComponentCategory, GenerationPlan, Layout, RenderContext, WritePolicy},
    error::BroomResult,
};

pub struct ComponentService {
    filesystem: Arc<dyn Filesystem>,
    layout: Layout,
}

impl ComponentService {
    pub fn new(filesystem: Arc<dyn Filesystem>, layout: Layout) -> Self {
        Self { filesystem, layout }
    }

    #[instrument(skip_all, fields(category = %category, option = option))]
    pub fn generate(
        &self,
        workspace: &Path,
        category: ComponentCategory,
        option: &str,
        options: GenerateOptions,
    ) -> BroomResult<GenerationReport> {
        let files = category.files(option)?;

        if !self.filesystem.is_dir(workspace) {
            return Err(ApplicationError::WorkspaceNotFound {
                path: workspace.to_path_buf(),
            }
            .into());
        }

        // Components do not live in a state folder.
        let dir = self.layout.resolve(category.location(), "");
        let ctx = RenderContext::new();

        let mut plan = GenerationPlan::new(workspace).with_directory(&dir);
        for file in files {
            plan.add_file(
                dir.join(file.file_name),
                ctx.render(file.body),
                WritePolicy::KeepExisting,
            );
        }

        let mut report = GenerationReport::new(options.dry_run);
        FileWriter::new(self.filesystem.as_ref(), options).write(&plan, &mut report)?;

        info!(files = report.files_written(), "Components generated");
        Ok(report)
    }
}
