//! End-to-end tests for the `event` command that Composer script hooks call.

mod common;
use common::prelude::*;

#[test]
fn test_event_unknown_name() {
    let fixture = TestFixture::new().with_manifest(manifests::MODULE);

    fixture
        .command()
        .args(["event", "post-create-project-cmd"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Unknown script event"))
        .stderr(predicate::str::contains("post-install-cmd"));
}

#[test]
fn test_event_pre_autoload_dump_only_prepares_manifest() {
    let fixture = TestFixture::new().with_manifest(manifests::MODULE);

    fixture
        .command()
        .args(["event", "pre-autoload-dump"])
        .assert()
        .success();

    fixture
        .child("composer.json")
        .assert(predicate::str::contains("installer-paths"));
    fixture.child("build").assert(predicate::path::missing());
}

#[test]
fn test_event_post_install_without_installer_paths_fails() {
    let fixture = TestFixture::new().with_manifest(manifests::MODULE);

    fixture
        .command()
        .args(["event", "post-install-cmd"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Installer path for Drupal core not found"))
        .stderr(predicate::str::contains("hint:"));

    fixture.child("build").assert(predicate::path::missing());
}

#[test]
fn test_event_post_install_after_init_builds() {
    let fixture = TestFixture::new().with_manifest(manifests::MODULE);

    fixture.command().arg("init").assert().success();
    fixture
        .command()
        .args(["event", "post-install-cmd"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[LINK]"));

    assert!(fixture
        .path()
        .join("build/modules/custom/test_module")
        .symlink_metadata()
        .is_ok());
}

#[test]
fn test_event_post_update_uses_core_installer_path() {
    let fixture = TestFixture::new().with_manifest(manifests::MODULE_WITH_DOCROOT);

    fixture
        .command()
        .args(["event", "post-update-cmd"])
        .assert()
        .success();

    fixture
        .child("docroot/sites/default/drushrc.php")
        .assert(predicate::str::contains("docroot"));
}

#[test]
fn test_event_package_events_are_ignored() {
    let fixture = TestFixture::new().with_manifest(manifests::MODULE);

    for event in ["post-package-install", "post-package-update"] {
        fixture
            .command()
            .args(["event", event])
            .assert()
            .success()
            .stdout(predicate::str::is_empty());
    }
    fixture.child("composer.json").assert(manifests::MODULE);
}
