//! Library-level scaffolding tests.

use std::fs;

use claude_setup::scaffold::{ProjectRequest, ScaffoldError, create};
use pretty_assertions::assert_eq as pretty_assert_eq;

use crate::{files_under, manifest_files};

#[test]
fn test_creates_exactly_the_manifest() {
    let base = tempfile::tempdir().expect("create temp dir");
    let request = ProjectRequest::builder()
        .name("demo")
        .base_path(base.path())
        .build();

    create(&request).expect("create project");

    let target = base.path().join("demo");
    pretty_assert_eq!(files_under(&target), manifest_files());
    assert!(target.join(".claude/agents/mvp-planner.md").is_file());
    assert!(target.join("docs/01-scope.md").is_file());
    assert!(target.join(".gitignore").is_file());

    let claude_md = fs::read_to_string(target.join("CLAUDE.md")).expect("read CLAUDE.md");
    assert!(claude_md.contains("demo"), "got: {claude_md}");
}

#[test]
fn test_project_name_is_literal() {
    let base = tempfile::tempdir().expect("create temp dir");
    let name = "My_Odd-Name42";
    let request = ProjectRequest::builder()
        .name(name)
        .base_path(base.path())
        .build();

    create(&request).expect("create project");

    let target = base.path().join(name);
    let playbook = fs::read_to_string(target.join("PLAYBOOK.md")).expect("read PLAYBOOK.md");
    assert!(playbook.starts_with("# My_Odd-Name42 Playbook"), "got: {playbook}");
    assert!(playbook.contains("cd My_Odd-Name42"), "got: {playbook}");

    let settings = fs::read_to_string(target.join(".claude/settings.json")).expect("read settings");
    let settings = serde_json::from_str::<serde_json::Value>(&settings).expect("parse settings");
    pretty_assert_eq!(settings["project_settings"]["name"], name);
}

#[test]
fn test_missing_base_path_is_created() {
    let base = tempfile::tempdir().expect("create temp dir");
    let nested = base.path().join("projects/dev");
    let request = ProjectRequest::builder()
        .name("demo")
        .base_path(&nested)
        .build();

    create(&request).expect("create project");
    pretty_assert_eq!(files_under(&nested.join("demo")), manifest_files());
}

#[test]
fn test_existing_target_is_untouched() {
    let base = tempfile::tempdir().expect("create temp dir");
    let target = base.path().join("demo");
    fs::create_dir(&target).expect("create target");
    fs::write(target.join("CLAUDE.md"), "mine").expect("write existing file");

    let request = ProjectRequest::builder()
        .name("demo")
        .base_path(base.path())
        .build();
    let err = create(&request).expect_err("existing target should fail");

    assert!(
        matches!(&err, ScaffoldError::AlreadyExists { path } if *path == target),
        "unexpected error: {err:?}"
    );
    pretty_assert_eq!(files_under(&target), vec!["CLAUDE.md".to_string()]);
    pretty_assert_eq!(
        fs::read_to_string(target.join("CLAUDE.md")).expect("read CLAUDE.md"),
        "mine"
    );
}

#[test]
fn test_existing_file_at_target_is_refused() {
    let base = tempfile::tempdir().expect("create temp dir");
    fs::write(base.path().join("demo"), "not a directory").expect("write file");

    let request = ProjectRequest::builder()
        .name("demo")
        .base_path(base.path())
        .build();
    let err = create(&request).expect_err("existing file should fail");
    assert!(
        matches!(err, ScaffoldError::AlreadyExists { .. }),
        "unexpected error: {err:?}"
    );
}

#[test]
fn test_second_run_refuses_and_keeps_contents() {
    let base = tempfile::tempdir().expect("create temp dir");
    let request = ProjectRequest::builder()
        .name("demo")
        .base_path(base.path())
        .build();
    create(&request).expect("first run");

    let target = base.path().join("demo");
    let readme_path = target.join("README.md");
    fs::write(&readme_path, "edited").expect("edit README.md");
    let before = files_under(&target);

    let err = create(&request).expect_err("second run should fail");
    assert!(
        matches!(err, ScaffoldError::AlreadyExists { .. }),
        "unexpected error: {err:?}"
    );
    pretty_assert_eq!(files_under(&target), before);
    pretty_assert_eq!(
        fs::read_to_string(&readme_path).expect("read README.md"),
        "edited"
    );
}

#[test]
fn test_invalid_name_touches_nothing() {
    let base = tempfile::tempdir().expect("create temp dir");
    let missing = base.path().join("not-created");

    for name in ["", "../escape", "a/b", ".."] {
        let request = ProjectRequest::builder()
            .name(name)
            .base_path(&missing)
            .build();
        let err = create(&request).expect_err("invalid name should fail");
        assert!(
            matches!(err, ScaffoldError::InvalidName { .. }),
            "unexpected error for {name:?}: {err:?}"
        );
    }

    assert!(!missing.exists(), "base path should not be created");
    assert!(files_under(base.path()).is_empty());
}

#[cfg(unix)]
#[test]
fn test_unwritable_base_reports_path() {
    use std::os::unix::fs::PermissionsExt;

    let base = tempfile::tempdir().expect("create temp dir");
    let locked = base.path().join("locked");
    fs::create_dir(&locked).expect("create locked dir");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o555)).expect("lock dir");

    // Privileged users can write regardless of permissions.
    if fs::write(locked.join("probe"), "").is_ok() {
        return;
    }

    let request = ProjectRequest::builder()
        .name("demo")
        .base_path(&locked)
        .build();
    let err = create(&request).expect_err("locked base should fail");
    assert!(
        matches!(&err, ScaffoldError::Write { path, .. } if *path == locked.join("demo")),
        "unexpected error: {err:?}"
    );

    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).expect("unlock dir");
}
