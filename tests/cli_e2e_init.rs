//! End-to-end tests for the `init` command.

mod common;
use common::prelude::*;

#[test]
fn test_init_registers_without_building() {
    let fixture = TestFixture::new().with_manifest(manifests::MODULE);

    fixture
        .command()
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Registered scaffolding in"));

    fixture
        .child("composer.json")
        .assert(predicate::str::contains("drupal-component-scaffold event post-update-cmd"));
    fixture.child("build").assert(predicate::path::missing());
}

#[test]
fn test_init_twice_reports_registered() {
    let fixture = TestFixture::new().with_manifest(manifests::MODULE);

    fixture.command().arg("init").assert().success();
    let first = fixture.read("composer.json");

    fixture
        .command()
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("is already registered"));
    assert_eq!(fixture.read("composer.json"), first);
}

#[test]
fn test_init_writes_four_space_indent() {
    let fixture = TestFixture::new().with_manifest(manifests::THEME);

    fixture.command().arg("init").assert().success();

    let content = fixture.read("composer.json");
    assert!(content.contains("\n    \"name\": \"drupal/test_theme\""));
    assert!(content.ends_with("}\n"));
}

#[test]
fn test_init_with_custom_manifest_path() {
    let fixture = TestFixture::new().with_file("component/composer.json", manifests::MODULE);

    fixture
        .command()
        .args(["init", "--manifest", "component/composer.json"])
        .assert()
        .success();

    fixture
        .child("component/composer.json")
        .assert(predicate::str::contains("installer-paths"));
}
