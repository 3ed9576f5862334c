//! Scaffold Service - main application orchestrator.
//!
//! One service interprets any [`Strategy`] descriptor:
//! 1. Create the layered directory tree
//! 2. Patch the package manifest
//! 3. Write project files and registry skeletons
//! 4. Write feature files and add the feature to every registry
//!
//! Every step is idempotent; re-running never drops registry entries.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::Filesystem,
        report::{GenerationReport, RegistryPatch},
        services::{
            registry_patcher::RegistryPatcher,
            writer::{FileWriter, GenerateOptions},
        },
    },
    domain::{
        FeatureName, FileTemplate, GenerationPlan, InsertionRequest, Layout, MANIFEST_FILE,
        ManifestStatus, PatchOutcome, RegistryTemplate, RenderContext, Strategy, manifest,
    },
    error::BroomResult,
};

/// Feature generated by project initialization.
pub const DEFAULT_FEATURE: &str = "home";

pub struct ScaffoldService {
    filesystem: Arc<dyn Filesystem>,
    patcher: RegistryPatcher,
    layout: Layout,
    strategy: &'static Strategy,
}

impl ScaffoldService {
    pub fn new(filesystem: Arc<dyn Filesystem>, layout: Layout, strategy: &'static Strategy) -> Self {
        Self {
            patcher: RegistryPatcher::new(Arc::clone(&filesystem)),
            filesystem,
            layout,
            strategy,
        }
    }

    pub fn strategy(&self) -> &'static Strategy {
        self.strategy
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Initialize a Flutter project: structure, manifest, project files,
    /// registries and the default feature.
    #[instrument(
        skip_all,
        fields(strategy = self.strategy.name, workspace = %workspace.display())
    )]
    pub fn initialize_project(
        &self,
        workspace: &Path,
        options: GenerateOptions,
    ) -> BroomResult<GenerationReport> {
        self.ensure_workspace(workspace)?;
        info!("Initializing {} project", self.strategy.name);

        let mut report = GenerationReport::new(options.dry_run);
        report.merge(self.create_structure(workspace, options)?);
        report.merge(self.update_dependencies(workspace, options)?);

        let ctx = self.strategy.context(RenderContext::new());
        let plan = self.plan_files(workspace, self.strategy.project_files, &ctx);
        FileWriter::new(self.filesystem.as_ref(), options).write(&plan, &mut report)?;

        for registry in self.strategy.registries {
            let relative = self.registry_path(registry);
            let skeleton = ctx.render(registry.skeleton);
            if self
                .patcher
                .ensure_skeleton(&workspace.join(&relative), &skeleton, !options.dry_run)?
            {
                report.created.push(relative);
            }
        }

        let home = FeatureName::parse(DEFAULT_FEATURE)?;
        report.merge(self.generate_feature(workspace, &home, options)?);

        info!(files = report.files_written(), "Project initialized");
        Ok(report)
    }

    /// Generate one feature and register it in every registry file.
    #[instrument(
        skip_all,
        fields(strategy = self.strategy.name, feature = %name)
    )]
    pub fn generate_feature(
        &self,
        workspace: &Path,
        name: &FeatureName,
        options: GenerateOptions,
    ) -> BroomResult<GenerationReport> {
        self.ensure_workspace(workspace)?;

        let ctx = self.strategy.context(RenderContext::for_feature(name));
        let mut report = GenerationReport::new(options.dry_run);

        let plan = self.plan_files(workspace, self.strategy.feature_files, &ctx);
        FileWriter::new(self.filesystem.as_ref(), options).write(&plan, &mut report)?;

        for registry in self.strategy.registries {
            self.register(workspace, registry, &ctx, options, &mut report)?;
        }

        info!(files = report.files_written(), "Feature generated");
        Ok(report)
    }

    /// Add the strategy's packages to `pubspec.yaml`.
    #[instrument(skip_all, fields(strategy = self.strategy.name))]
    pub fn update_dependencies(
        &self,
        workspace: &Path,
        options: GenerateOptions,
    ) -> BroomResult<GenerationReport> {
        self.ensure_workspace(workspace)?;

        let mut report = GenerationReport::new(options.dry_run);
        let path = workspace.join(MANIFEST_FILE);

        if !self.filesystem.exists(&path) {
            warn!(path = %path.display(), "Package manifest not found");
            report.warn(format!(
                "{MANIFEST_FILE} not found in {}; dependencies were not added",
                workspace.display()
            ));
            report.manifest = Some(ManifestStatus::Missing);
            return Ok(report);
        }

        let content = self.filesystem.read_to_string(&path)?;
        let missing = manifest::missing_dependencies(&content, self.strategy.dependencies);
        if missing.is_empty() {
            info!("Dependencies already up to date");
            report.manifest = Some(ManifestStatus::UpToDate);
            return Ok(report);
        }

        let names: Vec<String> = missing.iter().map(|dep| dep.name.to_string()).collect();
        let request = manifest::insertion_request(&missing)?;
        let outcomes = self
            .patcher
            .patch_existing(&path, &[request], !options.dry_run)?;

        let status = match outcomes.as_deref() {
            Some([PatchOutcome::Inserted]) => {
                info!(added = ?names, "Dependencies added");
                ManifestStatus::Updated(names)
            }
            Some(_) => {
                report.warn(format!(
                    "{MANIFEST_FILE} has no top-level 'dependencies:' section; add {} manually",
                    names.join(", ")
                ));
                ManifestStatus::SectionNotFound
            }
            None => {
                report.warn(format!("{MANIFEST_FILE} disappeared before it could be patched"));
                ManifestStatus::Missing
            }
        };

        report.manifest = Some(status);
        Ok(report)
    }

    /// Create the layered directory tree. Existing directories are untouched.
    pub fn create_structure(
        &self,
        workspace: &Path,
        options: GenerateOptions,
    ) -> BroomResult<GenerationReport> {
        self.ensure_workspace(workspace)?;

        let mut plan = GenerationPlan::new(workspace);
        for dir in self.layout.directory_plan(self.strategy.state_dir) {
            plan.add_directory(dir);
        }

        let mut report = GenerationReport::new(options.dry_run);
        FileWriter::new(self.filesystem.as_ref(), options).write(&plan, &mut report)?;
        Ok(report)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn ensure_workspace(&self, workspace: &Path) -> BroomResult<()> {
        if self.filesystem.is_dir(workspace) {
            Ok(())
        } else {
            Err(ApplicationError::WorkspaceNotFound {
                path: workspace.to_path_buf(),
            }
            .into())
        }
    }

    fn plan_files(
        &self,
        workspace: &Path,
        templates: &[FileTemplate],
        ctx: &RenderContext,
    ) -> GenerationPlan {
        let mut plan = GenerationPlan::new(workspace);
        for template in templates {
            plan.add_file(
                template.relative_path(&self.layout, self.strategy.state_dir, ctx),
                ctx.render(template.body),
                template.policy,
            );
        }
        plan
    }

    fn registry_path(&self, registry: &RegistryTemplate) -> PathBuf {
        self.layout
            .resolve(registry.location, self.strategy.state_dir)
            .join(registry.file_name)
    }

    fn register(
        &self,
        workspace: &Path,
        registry: &RegistryTemplate,
        ctx: &RenderContext,
        options: GenerateOptions,
        report: &mut GenerationReport,
    ) -> BroomResult<()> {
        let relative = self.registry_path(registry);
        let path = workspace.join(&relative);
        let skeleton = ctx.render(registry.skeleton);

        let requests = registry
            .entries
            .iter()
            .map(|entry| entry.request(ctx))
            .collect::<Result<Vec<InsertionRequest>, _>>()?;

        let outcomes = if options.dry_run {
            self.patcher.preview_entries(&path, &skeleton, &requests)?
        } else {
            self.patcher.ensure_entries(&path, &skeleton, &requests)?
        };

        for (request, outcome) in requests.iter().zip(outcomes) {
            let entry = request.insertion().trim().to_string();
            if outcome == PatchOutcome::ContainerNotFound {
                report.warn(format!(
                    "Could not find where to add '{entry}' in {}",
                    relative.display()
                ));
            }
            report.registries.push(RegistryPatch {
                path: relative.clone(),
                entry,
                outcome,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockFilesystem;
    use crate::domain::strategy::{PROVIDER, RIVERPOD};
    use crate::error::BroomError;

    #[test]
    fn missing_workspace_aborts_before_any_io() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().return_const(false);
        fs.expect_exists().never();
        fs.expect_create_dir_all().never();
        fs.expect_write_file().never();

        let service = ScaffoldService::new(Arc::new(fs), Layout::default(), &PROVIDER);
        let err = service
            .initialize_project(Path::new("/missing"), GenerateOptions::default())
            .unwrap_err();

        assert!(matches!(
            err,
            BroomError::Application(ApplicationError::WorkspaceNotFound { .. })
        ));
    }

    #[test]
    fn missing_manifest_is_a_warning() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().return_const(true);
        fs.expect_exists().return_const(false);

        let service = ScaffoldService::new(Arc::new(fs), Layout::default(), &RIVERPOD);
        let report = service
            .update_dependencies(Path::new("/ws"), GenerateOptions::default())
            .unwrap();

        assert_eq!(report.manifest, Some(ManifestStatus::Missing));
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("pubspec.yaml"));
    }

    #[test]
    fn declared_dependencies_are_not_rewritten() {
        let manifest = "name: app\ndependencies:\n  flutter:\n    sdk: flutter\n  provider: ^6.1.2\n  flutter_easyloading: ^3.0.5\n  dio: ^5.7.0\n  pretty_dio_logger: ^1.4.0\n";

        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().return_const(true);
        fs.expect_exists().return_const(true);
        fs.expect_read_to_string()
            .returning(move |_| Ok(manifest.to_string()));
        fs.expect_write_file().never();

        let service = ScaffoldService::new(Arc::new(fs), Layout::default(), &PROVIDER);
        let report = service
            .update_dependencies(Path::new("/ws"), GenerateOptions::default())
            .unwrap();

        assert_eq!(report.manifest, Some(ManifestStatus::UpToDate));
    }

    #[test]
    fn structure_dry_run_lists_the_state_folder() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().return_const(true);
        fs.expect_create_dir_all().never();

        let service = ScaffoldService::new(Arc::new(fs), Layout::default(), &RIVERPOD);
        let report = service
            .create_structure(Path::new("/ws"), GenerateOptions::default().dry_run(true))
            .unwrap();

        assert!(
            report
                .directories
                .contains(&PathBuf::from("lib/presentation/riverpod"))
        );
    }
}
