//! End-to-end workflows through the plugin host on real adapters.

use std::path::Path;
use std::sync::Arc;

use broom_adapters::{LocalFilesystem, MemoryFilesystem};
use broom_core::prelude::*;
use tempfile::TempDir;

const WORKSPACE: &str = "/ws";

const PUBSPEC: &str = "name: demo\n\nenvironment:\n  sdk: '>=3.0.0 <4.0.0'\n\ndependencies:\n  flutter:\n    sdk: flutter\n\ndev_dependencies:\n  flutter_test:\n    sdk: flutter\n";

fn workspace() -> MemoryFilesystem {
    MemoryFilesystem::new()
        .with_file(Path::new(WORKSPACE).join("pubspec.yaml"), PUBSPEC)
        .unwrap()
}

fn host(fs: &MemoryFilesystem) -> PluginHost {
    PluginHost::start(builtin_registry(Arc::new(fs.clone()), &Layout::default())).unwrap()
}

fn read(fs: &MemoryFilesystem, relative: &str) -> String {
    fs.read_file(Path::new(WORKSPACE).join(relative))
        .unwrap_or_else(|| panic!("{relative} was not written"))
}

#[test]
fn provider_feature_is_registered_exactly_once() {
    let fs = workspace();
    let host = host(&fs);
    let invocation = Invocation::new()
        .in_workspace(WORKSPACE)
        .with_feature_name("user_profile");

    host.execute("provider.initialize", &Invocation::new().in_workspace(WORKSPACE))
        .unwrap();
    host.execute("provider.feature", &invocation).unwrap();
    let second = host.execute("provider.feature", &invocation).unwrap();

    let routes = read(&fs, "lib/presentation/routes/app_routes.dart");
    assert_eq!(
        routes
            .matches("static const String userProfile = '/user_profile';")
            .count(),
        1
    );

    let map = read(&fs, "lib/presentation/routes/app_routes_provider.dart");
    assert_eq!(map.matches("UserProfilePage()").count(), 1);
    assert_eq!(
        map.matches("import '../pages/user_profile/user_profile_page.dart';")
            .count(),
        1
    );

    let providers = read(&fs, "lib/presentation/routes/app_providers.dart");
    assert_eq!(
        providers
            .matches("ChangeNotifierProvider(create: (_) => UserProfileProvider()),")
            .count(),
        1
    );
    assert!(providers.contains("HomeProvider()"));

    assert!(
        second
            .generation
            .registries
            .iter()
            .all(|patch| patch.outcome == PatchOutcome::AlreadyPresent)
    );
    assert_eq!(second.generation.skipped.len(), 3);

    let page = read(&fs, "lib/presentation/pages/user_profile/user_profile_page.dart");
    assert!(page.contains("class UserProfilePage"));
}

#[test]
fn initialize_twice_is_stable() {
    let fs = workspace();
    let host = host(&fs);
    let init = Invocation::new().in_workspace(WORKSPACE);

    let first = host.execute("riverpod.initialize", &init).unwrap();
    let after_first = fs.snapshot();
    let second = host.execute("riverpod.initialize", &init).unwrap();

    assert_eq!(after_first, fs.snapshot());
    assert!(matches!(
        first.generation.manifest,
        Some(ManifestStatus::Updated(_))
    ));
    assert_eq!(second.generation.manifest, Some(ManifestStatus::UpToDate));

    for dir in [
        "lib/core/base",
        "lib/core/mahas/input",
        "lib/data/datasource/local/repository",
        "lib/presentation/riverpod",
        "lib/presentation/widgets",
    ] {
        assert!(fs.is_dir(&Path::new(WORKSPACE).join(dir)), "{dir}");
    }

    let pubspec = read(&fs, "pubspec.yaml");
    assert_eq!(pubspec.matches("flutter_riverpod: ^2.5.0").count(), 1);
    assert!(pubspec.contains("dependencies:\n  flutter_riverpod: ^2.5.0\n"));
    assert!(pubspec.contains("    sdk: flutter\n\ndev_dependencies:"));
    assert!(pubspec.contains("  http: ^1.2.2\n"));
    assert!(read(&fs, "lib/data/datasource/network/db/http_service.dart").contains("class HttpService"));
}

#[test]
fn reinitialize_keeps_existing_features() {
    let fs = workspace();
    let host = host(&fs);
    let init = Invocation::new().in_workspace(WORKSPACE);

    host.execute("provider.initialize", &init).unwrap();
    host.execute(
        "provider.feature",
        &Invocation::new().in_workspace(WORKSPACE).with_feature_name("cart"),
    )
    .unwrap();
    host.execute("provider.initialize", &init).unwrap();

    let routes = read(&fs, "lib/presentation/routes/app_routes.dart");
    assert!(routes.contains("static const String cart = '/cart';"));
    assert!(routes.contains("static const String home = '/home';"));
}

#[test]
fn missing_manifest_warns_and_continues() {
    let fs = MemoryFilesystem::new().with_dir(WORKSPACE).unwrap();
    let host = host(&fs);

    let report = host
        .execute("provider.initialize", &Invocation::new().in_workspace(WORKSPACE))
        .unwrap();

    assert_eq!(report.generation.manifest, Some(ManifestStatus::Missing));
    assert_eq!(report.warnings().count(), 1);
    assert!(fs.read_file("/ws/lib/main.dart").is_some());
}

#[test]
fn commented_out_dependency_is_added() {
    let pubspec = PUBSPEC.replace(
        "    sdk: flutter\n\ndev",
        "    sdk: flutter\n  # provider: ^6.1.2\n  flutter_easyloading: ^3.0.5\n  dio: ^5.7.0\n  pretty_dio_logger: ^1.4.0\n\ndev",
    );
    let fs = MemoryFilesystem::new()
        .with_file(Path::new(WORKSPACE).join("pubspec.yaml"), &pubspec)
        .unwrap();
    let host = host(&fs);

    let report = host
        .execute("provider.dependencies", &Invocation::new().in_workspace(WORKSPACE))
        .unwrap();

    assert_eq!(
        report.generation.manifest,
        Some(ManifestStatus::Updated(vec!["provider".into()]))
    );
    let manifest = read(&fs, "pubspec.yaml");
    assert!(manifest.contains("dependencies:\n  provider: ^6.1.2\n  flutter:"));
    assert_eq!(manifest.matches("dio: ^5.7.0").count(), 1);
}

#[test]
fn dry_run_touches_nothing() {
    let fs = workspace();
    let before = fs.snapshot();
    let host = host(&fs);

    let report = host
        .execute(
            "riverpod.initialize",
            &Invocation::new()
                .in_workspace(WORKSPACE)
                .with_options(GenerateOptions::default().dry_run(true)),
        )
        .unwrap();

    assert!(report.generation.dry_run);
    assert!(report.generation.files_written() > 0);
    assert!(report.summary().starts_with("Dry run"));
    assert_eq!(before, fs.snapshot());
}

#[test]
fn hand_edited_registry_reports_a_warning() {
    let fs = workspace()
        .with_file(
            "/ws/lib/presentation/routes/app_routes.dart",
            "// routes were moved\n",
        )
        .unwrap();
    let host = host(&fs);

    let report = host
        .execute(
            "riverpod.feature",
            &Invocation::new().in_workspace(WORKSPACE).with_feature_name("cart"),
        )
        .unwrap();

    assert!(
        report
            .generation
            .registries
            .iter()
            .any(|patch| patch.outcome == PatchOutcome::ContainerNotFound)
    );
    assert!(report.warnings().any(|w| w.contains("app_routes.dart")));
    assert_eq!(
        read(&fs, "lib/presentation/routes/app_routes.dart"),
        "// routes were moved\n"
    );
}

#[test]
fn components_respect_force() {
    let fs = workspace();
    let host = host(&fs);
    let widget = Invocation::new().in_workspace(WORKSPACE).with_option("button");
    let path = "/ws/lib/core/mahas/widget/custom_button.dart";

    host.execute("components.widget", &widget).unwrap();
    fs.write_file(Path::new(path), "// edited").unwrap();

    host.execute("components.widget", &widget).unwrap();
    assert_eq!(fs.read_file(path).as_deref(), Some("// edited"));

    let forced = widget.with_options(GenerateOptions::default().force(true));
    let report = host.execute("components.widget", &forced).unwrap();
    assert_eq!(report.generation.overwritten.len(), 1);
    assert_ne!(fs.read_file(path).as_deref(), Some("// edited"));
}

#[test]
fn local_filesystem_round() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("pubspec.yaml"), PUBSPEC).unwrap();

    let registry = builtin_registry(Arc::new(LocalFilesystem::new()), &Layout::default());
    let host = PluginHost::start(registry).unwrap();

    host.execute("provider.initialize", &Invocation::new().in_workspace(dir.path()))
        .unwrap();

    let main = std::fs::read_to_string(dir.path().join("lib/main.dart")).unwrap();
    assert!(main.contains("MultiProvider"));
    assert!(dir.path().join("lib/presentation/providers/home_provider.dart").is_file());
    assert!(dir.path().join("lib/core/helper/dialog_helper.dart").is_file());
}

#[test]
fn unknown_workspace_is_not_found() {
    let fs = MemoryFilesystem::new();
    let host = host(&fs);

    let err = host
        .execute("provider.dependencies", &Invocation::new().in_workspace("/nowhere"))
        .unwrap_err();

    assert_eq!(err.category(), ErrorCategory::NotFound);
}
