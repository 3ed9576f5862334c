//! `pubspec.yaml` dependency checks.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::{
    error::DomainError,
    registry::{InsertionRequest, PatternLocator},
};

/// File name of the package manifest, relative to the workspace root.
pub const MANIFEST_FILE: &str = "pubspec.yaml";

/// The top-level `dependencies:` line, optionally followed by a comment.
/// New entries go right below it.
const DEPENDENCIES_SECTION: &str =
    r"(?m)(?P<open>^dependencies:[ \t]*(?:#[^\r\n]*)?(?:\r?\n|\z))(?P<body>)(?P<close>)";

/// A package the generated code imports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Dependency {
    pub name: &'static str,
    pub version: &'static str,
}

impl Dependency {
    pub const fn new(name: &'static str, version: &'static str) -> Self {
        Self { name, version }
    }

    /// The manifest line for this dependency, indented under `dependencies:`.
    pub fn line(&self) -> String {
        format!("  {}: {}", self.name, self.version)
    }

    /// A dependency is declared when some non-comment line starts with
    /// `name:` once trimmed.
    pub fn is_declared(&self, manifest: &str) -> bool {
        manifest
            .lines()
            .map(str::trim_start)
            .filter(|line| !line.starts_with('#'))
            .any(|line| {
                line.strip_prefix(self.name)
                    .is_some_and(|rest| rest.starts_with(':'))
            })
    }
}

/// Outcome of a manifest update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "added", rename_all = "snake_case")]
pub enum ManifestStatus {
    /// Every required dependency was already declared; nothing was written.
    UpToDate,
    /// These dependencies were added.
    Updated(Vec<String>),
    /// The workspace has no manifest.
    Missing,
    /// The manifest has no top-level `dependencies:` section.
    SectionNotFound,
}

/// Required dependencies not yet declared in `manifest`, in declaration order.
pub fn missing_dependencies<'a>(manifest: &str, required: &'a [Dependency]) -> Vec<&'a Dependency> {
    required
        .iter()
        .filter(|dep| !dep.is_declared(manifest))
        .collect()
}

/// A single insertion that adds every `missing` dependency as one block.
///
/// The request has no sentinel: [`missing_dependencies`] already decided
/// what is absent, and a commented-out line must not count as declared.
pub fn insertion_request(missing: &[&Dependency]) -> Result<InsertionRequest, DomainError> {
    let block = missing
        .iter()
        .map(|dep| dep.line())
        .collect::<Vec<_>>()
        .join("\n");

    let locator = PatternLocator::new(DEPENDENCIES_SECTION)?;
    Ok(InsertionRequest::new("", block, Arc::new(locator)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::registry::PatchOutcome;

    const REQUIRED: &[Dependency] = &[
        Dependency::new("provider", "^6.1.2"),
        Dependency::new("dio", "^5.7.0"),
    ];

    const PUBSPEC: &str = "name: demo\n\ndependencies:\n  flutter:\n    sdk: flutter\n\ndev_dependencies:\n  flutter_test:\n    sdk: flutter\n";

    #[test]
    fn all_missing_from_fresh_manifest() {
        let missing = missing_dependencies(PUBSPEC, REQUIRED);
        assert_eq!(missing.len(), 2);
    }

    #[test]
    fn declared_dependency_is_not_missing() {
        let manifest = PUBSPEC.replace("  flutter:\n", "  flutter:\n  dio: ^5.0.0\n");
        let missing = missing_dependencies(&manifest, REQUIRED);
        assert_eq!(missing, vec![&REQUIRED[0]]);
    }

    #[test]
    fn commented_dependency_does_not_count() {
        let manifest = PUBSPEC.replace("  flutter:\n", "  flutter:\n  # provider: ^6.0.0\n");
        assert!(!REQUIRED[0].is_declared(&manifest));
    }

    #[test]
    fn name_must_match_whole_key() {
        let manifest = "dependencies:\n  flutter_riverpod: ^2.5.0\n";
        assert!(!REQUIRED[0].is_declared(manifest));
        assert!(Dependency::new("flutter_riverpod", "^2.5.0").is_declared(manifest));
    }

    #[test]
    fn block_lands_under_dependencies() {
        let missing = missing_dependencies(PUBSPEC, REQUIRED);
        let request = insertion_request(&missing).unwrap();

        let (outcome, patched) = request.apply(PUBSPEC);

        assert_eq!(outcome, PatchOutcome::Inserted);
        assert!(patched.contains(
            "dependencies:\n  provider: ^6.1.2\n  dio: ^5.7.0\n  flutter:\n    sdk: flutter\n"
        ));
        assert!(missing_dependencies(&patched, REQUIRED).is_empty());
    }

    #[test]
    fn commented_dependency_is_still_inserted() {
        let manifest = PUBSPEC.replace("  flutter:\n", "  flutter:\n  # provider: ^6.1.2\n");
        let missing = missing_dependencies(&manifest, &REQUIRED[..1]);
        let (outcome, patched) = insertion_request(&missing).unwrap().apply(&manifest);

        assert_eq!(outcome, PatchOutcome::Inserted);
        assert!(REQUIRED[0].is_declared(&patched));
        assert!(patched.contains("  # provider: ^6.1.2\n"));
    }

    #[test]
    fn section_with_trailing_comment() {
        let manifest = "name: demo\ndependencies: # runtime\n  flutter:\n    sdk: flutter\n";
        let (outcome, patched) = insertion_request(&[&REQUIRED[0]]).unwrap().apply(manifest);

        assert_eq!(outcome, PatchOutcome::Inserted);
        assert!(patched.contains("dependencies: # runtime\n  provider: ^6.1.2\n  flutter:"));
    }

    #[test]
    fn section_at_end_of_file() {
        let manifest = "name: demo\ndependencies:";
        let (outcome, patched) = insertion_request(&[&REQUIRED[0]]).unwrap().apply(manifest);

        assert_eq!(outcome, PatchOutcome::Inserted);
        assert_eq!(patched, "name: demo\ndependencies:\n  provider: ^6.1.2\n");
    }

    #[test]
    fn dev_dependencies_is_not_the_section() {
        let manifest = "name: demo\ndev_dependencies:\n  test: any\n";
        let request = insertion_request(&[&REQUIRED[0]]).unwrap();
        assert_eq!(request.apply(manifest).0, PatchOutcome::ContainerNotFound);
    }
}
