//! End-to-end tests for the `scaffold` command.

mod common;
use common::prelude::*;

#[test]
fn test_scaffold_links_module_into_build() {
    let fixture = TestFixture::new().with_manifest(manifests::MODULE);

    fixture
        .command()
        .arg("scaffold")
        .assert()
        .success()
        .stdout(predicate::str::contains("[LINK]"))
        .stdout(predicate::str::contains("Development build ready"));

    let link = fixture.path().join("build/modules/custom/test_module");
    let target = std::fs::read_link(&link).unwrap();
    assert_eq!(target, std::path::PathBuf::from("../../.."));
    assert!(link.join("composer.json").exists());
}

#[test]
fn test_scaffold_links_theme_into_themes_custom() {
    let fixture = TestFixture::new().with_manifest(manifests::THEME);

    fixture.command().arg("scaffold").assert().success();

    let link = fixture.path().join("build/themes/custom/test_theme");
    assert!(link.symlink_metadata().unwrap().file_type().is_symlink());
}

#[test]
fn test_scaffold_writes_development_files() {
    let fixture = TestFixture::new().with_manifest(manifests::MODULE);

    fixture.command().arg("scaffold").assert().success();

    fixture
        .child("build/sites/default/drushrc.php")
        .assert(predicate::str::contains("$options['root'] = 'build';"));
    fixture
        .child("build/sites/default/settings.local.php")
        .assert(predicate::str::contains("development.services.yml"));
    fixture
        .child("build/sites/development.services.yml")
        .assert(predicate::path::exists());
}

#[test]
fn test_scaffold_registers_manifest() {
    let fixture = TestFixture::new().with_manifest(manifests::MODULE);

    fixture
        .command()
        .arg("scaffold")
        .assert()
        .success()
        .stdout(predicate::str::contains("[MANIFEST]"));

    let manifest: serde_json::Value =
        serde_json::from_str(&fixture.read("composer.json")).unwrap();
    assert_eq!(
        manifest["extra"]["drupal-component-scaffold"]["build-root"],
        "build"
    );
    assert_eq!(
        manifest["extra"]["installer-paths"]["build/core"][0],
        "type:drupal-core"
    );
    assert_eq!(
        manifest["scripts"]["post-install-cmd"],
        serde_json::json!([
            "DrupalComposer\\DrupalScaffold\\Plugin::scaffold",
            "drupal-component-scaffold event post-install-cmd"
        ])
    );
    assert_eq!(
        manifest["scripts"]["pre-autoload-dump"],
        serde_json::json!(["drupal-component-scaffold event pre-autoload-dump"])
    );
    // Unrelated keys survive in their original position.
    assert_eq!(
        manifest["scripts"]["drupal-scaffold"],
        "DrupalComposer\\DrupalScaffold\\Plugin::scaffold"
    );
}

#[test]
fn test_scaffold_is_idempotent() {
    let fixture = TestFixture::new()
        .with_manifest(manifests::MODULE)
        .with_default_settings("build");

    fixture.command().arg("scaffold").assert().success();
    let manifest_after_first = fixture.read("composer.json");
    let settings_after_first = fixture.read("build/sites/default/default.settings.php");

    fixture
        .command()
        .arg("scaffold")
        .assert()
        .success()
        .stdout(predicate::str::contains("[SKIP]"))
        .stdout(predicate::str::contains("[MANIFEST]").not());

    assert_eq!(fixture.read("composer.json"), manifest_after_first);
    assert_eq!(
        fixture.read("build/sites/default/default.settings.php"),
        settings_after_first
    );
}

#[test]
fn test_scaffold_appends_ignore_rule_once() {
    let fixture = TestFixture::new()
        .with_manifest(manifests::MODULE)
        .with_default_settings("build");

    fixture.command().arg("scaffold").assert().success();
    fixture.command().arg("scaffold").assert().success();

    let settings = fixture.read("build/sites/default/default.settings.php");
    let rule = "$settings['file_scan_ignore_directories'][] = 'build';";
    assert_eq!(settings.matches(rule).count(), 1);
    assert!(settings.starts_with("<?php\n\n$databases = [];\n"));
}

#[test]
fn test_scaffold_without_default_settings_still_succeeds() {
    let fixture = TestFixture::new().with_manifest(manifests::MODULE);

    fixture
        .command()
        .arg("scaffold")
        .assert()
        .success()
        .stdout(predicate::str::contains("ignore rule not added"));

    fixture
        .child("build/sites/default/default.settings.php")
        .assert(predicate::path::missing());
}

#[test]
fn test_scaffold_leaves_existing_directory_at_link_path() {
    let fixture = TestFixture::new()
        .with_manifest(manifests::MODULE)
        .with_file("build/modules/custom/test_module/keep.txt", "local work");

    fixture
        .command()
        .arg("scaffold")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));

    fixture
        .child("build/modules/custom/test_module/keep.txt")
        .assert("local work");
}

#[test]
fn test_scaffold_honors_build_root_flag() {
    let fixture = TestFixture::new().with_manifest(manifests::MODULE);

    fixture
        .command()
        .args(["scaffold", "--build-root", "web"])
        .assert()
        .success();

    fixture
        .child("web/sites/default/drushrc.php")
        .assert(predicate::str::contains("$options['root'] = 'web';"));
    assert!(fixture.path().join("web/modules/custom/test_module").exists());
}

#[test]
fn test_scaffold_honors_build_root_env() {
    let fixture = TestFixture::new().with_manifest(manifests::MODULE);

    fixture
        .command()
        .env("DRUPAL_COMPONENT_SCAFFOLD_BUILD_ROOT", "site")
        .arg("scaffold")
        .assert()
        .success();

    assert!(fixture.path().join("site/modules/custom/test_module").exists());
}

#[test]
fn test_scaffold_uses_templates_dir() {
    let fixture = TestFixture::new()
        .with_manifest(manifests::MODULE)
        .with_file("templates/drushrc.php", "<?php // ${PROJECT_NAME}\n")
        .with_file("templates/settings.local.php", "<?php\n")
        .with_file("templates/development.services.yml", "parameters: {}\n");

    fixture
        .command()
        .args(["scaffold", "--templates-dir", "templates"])
        .assert()
        .success();

    fixture
        .child("build/sites/default/drushrc.php")
        .assert("<?php // test_module\n");
}

#[test]
fn test_scaffold_quiet_prints_nothing() {
    let fixture = TestFixture::new().with_manifest(manifests::MODULE);

    fixture
        .command()
        .args(["scaffold", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_scaffold_docroot_from_installer_paths() {
    let fixture = TestFixture::new().with_manifest(manifests::MODULE_WITH_DOCROOT);

    fixture.command().arg("scaffold").assert().success();

    let link = fixture.path().join("docroot/modules/custom/test_module");
    assert!(link.symlink_metadata().unwrap().file_type().is_symlink());

    let manifest: serde_json::Value =
        serde_json::from_str(&fixture.read("composer.json")).unwrap();
    assert_eq!(
        manifest["extra"]["drupal-component-scaffold"]["build-root"],
        "docroot"
    );
}
