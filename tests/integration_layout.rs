// outbase: Build Output Relocation Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for build layout resolution.
//!
//! Exercises the resolver through the configuration layer, the way the
//! `resolve` and `clean` commands reach it.

use outbase::config::Config;
use outbase::layout::{BuildLayout, normalize_lexically};
use std::path::Path;

fn layout_for(toml: &str) -> BuildLayout {
    let config = Config::parse(toml).unwrap();
    BuildLayout::from_config(&config).unwrap()
}

#[test]
fn layout_every_module_under_root_output() {
    let layout = layout_for(
        r#"
[project]
dir = "/work/shop/android"
modules = ["app", "catalog", "checkout"]

[layout]
base = "../../build"
"#,
    );

    assert_eq!(layout.root_output(), Path::new("/work/build"));
    for module in layout.modules() {
        assert!(module.output().starts_with(layout.root_output()));
        assert_eq!(module.output(), layout.root_output().join(module.name()));
    }
}

#[test]
fn layout_root_matches_lexical_normalization() {
    // Given P = "../../build" and project location X, root_output must be
    // normalize(X/../../build).
    let project = Path::new("/home/dev/apps/myapp/android");
    let layout = layout_for(
        r#"
[project]
dir = "/home/dev/apps/myapp/android"
"#,
    );

    assert_eq!(
        layout.root_output(),
        normalize_lexically(&project.join("../../build"))
    );
    assert_eq!(layout.root_output(), Path::new("/home/dev/apps/build"));
}

#[test]
fn layout_project_name_derived_from_dir() {
    let layout = layout_for(
        r#"
[project]
dir = "/work/shop/android"
"#,
    );
    assert_eq!(layout.project_name(), "android");

    let named = layout_for(
        r#"
[project]
name = "shop"
dir = "/work/shop/android"
"#,
    );
    assert_eq!(named.project_name(), "shop");
}

#[test]
fn layout_primary_module_first() {
    let layout = layout_for(
        r#"
[project]
dir = "/work/android"
modules = ["catalog", "app", "checkout"]
"#,
    );

    // "app" is implicitly primary when declared
    let names: Vec<&str> = layout.modules().iter().map(|m| m.name()).collect();
    assert_eq!(names, ["app", "catalog", "checkout"]);
}

#[test]
fn layout_explicit_primary_respected() {
    let layout = layout_for(
        r#"
[project]
dir = "/work/android"
modules = ["catalog", "app"]
primary = "catalog"
"#,
    );
    let names: Vec<&str> = layout.modules().iter().map(|m| m.name()).collect();
    assert_eq!(names, ["catalog", "app"]);
}

#[test]
fn layout_unknown_primary_fails() {
    let config = Config::parse(
        r#"
[project]
dir = "/work/android"
modules = ["core"]
primary = "app"
"#,
    )
    .unwrap();
    assert!(BuildLayout::from_config(&config).is_err());
}

#[test]
fn layout_plugin_versions_do_not_affect_paths() {
    let base_toml = r#"
[project]
dir = "/work/android"
modules = ["app", "core"]
"#;
    let pinned_toml = r#"
[project]
dir = "/work/android"
modules = ["app", "core"]

[[plugins]]
id = "com.android.application"
version = "99.0.0"
"#;

    let a = layout_for(base_toml);
    let b = layout_for(pinned_toml);

    assert_eq!(a.root_output(), b.root_output());
    for (ma, mb) in a.modules().iter().zip(b.modules()) {
        assert_eq!(ma.output(), mb.output());
    }
}

#[test]
fn layout_select_with_globs() {
    let layout = layout_for(
        r#"
[project]
dir = "/work/android"
modules = ["app", "feature_login", "feature_cart", "core"]
"#,
    );

    let selected = layout.select(&["feature_*".to_string()]).unwrap();
    let names: Vec<&str> = selected.iter().map(|m| m.name()).collect();
    assert_eq!(names, ["feature_login", "feature_cart"]);

    // Unmatched patterns warn but do not fail
    let none = layout.select(&["missing_*".to_string()]).unwrap();
    assert!(none.is_empty());

    // Invalid globs do fail
    assert!(layout.select(&["feature[".to_string()]).is_err());
}

#[test]
fn layout_relative_project_dir_absolutized() {
    // A relative project dir resolves against the current directory, so
    // from_config always hands the resolver an absolute path.
    let layout = layout_for(
        r#"
[project]
dir = "."
"#,
    );
    assert!(layout.project_dir().is_absolute());
    assert!(layout.root_output().is_absolute());
}
