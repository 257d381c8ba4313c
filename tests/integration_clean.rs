// outbase: Build Output Relocation Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for the clean command path.
//!
//! Drives `run_clean_command` end to end against real temporary
//! directories, the way `outbase clean` runs in a build tree.

use outbase::clean::{CleanOptions, CleanTarget, clean_targets};
use outbase::cli::clean::CleanArgs;
use outbase::cmd::clean::run_clean_command;
use outbase::config::Config;
use std::path::Path;
use tempfile::TempDir;
use tokio_util::sync::CancellationToken;

/// Sets up a project directory with a populated relocated build root.
///
/// Returns the temp dir guard and the project directory; the build root
/// resolves to `<temp>/build` with `base = "../../build"`.
fn project_fixture() -> (TempDir, std::path::PathBuf) {
    let temp = tempfile::tempdir().unwrap();
    let project = temp.path().join("myapp/android");
    std::fs::create_dir_all(&project).unwrap();

    let build = temp.path().join("build");
    for module in ["app", "feature_login"] {
        let dir = build.join(module).join("intermediates");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("output.bin"), "artifact").unwrap();
    }

    (temp, project)
}

fn config_for(project: &Path) -> Config {
    let toml = format!(
        r#"
[project]
dir = "{}"
modules = ["app", "feature_login"]
"#,
        project.display()
    );
    Config::parse(&toml).unwrap()
}

#[tokio::test]
async fn clean_removes_whole_build_root() {
    let (temp, project) = project_fixture();
    let config = config_for(&project);

    let args = CleanArgs::default();
    run_clean_command(&args, &config, false).await.unwrap();

    assert!(!temp.path().join("build").exists());
    assert!(project.exists());
}

#[tokio::test]
async fn clean_twice_is_not_an_error() {
    let (_temp, project) = project_fixture();
    let config = config_for(&project);

    let args = CleanArgs::default();
    run_clean_command(&args, &config, false).await.unwrap();
    // Second run: the build root is already gone
    run_clean_command(&args, &config, false).await.unwrap();
}

#[tokio::test]
async fn clean_selected_modules_only() {
    let (temp, project) = project_fixture();
    let config = config_for(&project);

    let args = CleanArgs {
        force: false,
        modules: vec!["feature_*".to_string()],
    };
    run_clean_command(&args, &config, false).await.unwrap();

    let build = temp.path().join("build");
    assert!(build.join("app").exists());
    assert!(!build.join("feature_login").exists());
}

#[tokio::test]
async fn clean_dry_run_keeps_everything() {
    let (temp, project) = project_fixture();
    let config = config_for(&project);

    let args = CleanArgs::default();
    run_clean_command(&args, &config, true).await.unwrap();

    assert!(temp.path().join("build/app/intermediates/output.bin").exists());
}

#[tokio::test]
async fn clean_respects_config_dry_flag() {
    let (temp, project) = project_fixture();
    let mut config = config_for(&project);
    config.global.dry = true;

    let args = CleanArgs::default();
    run_clean_command(&args, &config, false).await.unwrap();

    assert!(temp.path().join("build").exists());
}

#[tokio::test]
async fn clean_refuses_vcs_controlled_build_root() {
    let (temp, project) = project_fixture();
    let config = config_for(&project);
    std::fs::create_dir(temp.path().join("build/.git")).unwrap();

    let args = CleanArgs::default();
    assert!(run_clean_command(&args, &config, false).await.is_err());
    assert!(temp.path().join("build").exists());

    let forced = CleanArgs {
        force: true,
        modules: Vec::new(),
    };
    run_clean_command(&forced, &config, false).await.unwrap();
    assert!(!temp.path().join("build").exists());
}

#[tokio::test]
async fn clean_targets_never_touch_other_paths() {
    let temp = tempfile::tempdir().unwrap();
    let project = temp.path().join("project");
    let build = temp.path().join("build");
    let bystander = temp.path().join("sources");
    std::fs::create_dir_all(&project).unwrap();
    std::fs::create_dir_all(&build).unwrap();
    std::fs::create_dir_all(&bystander).unwrap();
    std::fs::write(bystander.join("keep.txt"), "keep").unwrap();

    let targets = [CleanTarget::new("build", &build)];
    clean_targets(
        &targets,
        &project,
        &CleanOptions::default(),
        &CancellationToken::new(),
    )
    .await
    .unwrap();

    assert!(!build.exists());
    assert!(bystander.join("keep.txt").exists());
}
