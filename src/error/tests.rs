// outbase: Build Output Relocation Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{ConfigError, LayoutError, OutbaseError, OutbaseResult};

#[test]
fn test_config_error_display() {
    let err = ConfigError::MissingKey {
        section: "project".to_string(),
        key: "dir".to_string(),
    };
    insta::assert_snapshot!(
        err.to_string(),
        @"missing required config key 'dir' in section '[project]'"
    );
}

#[test]
fn test_version_conflict_display() {
    let err = ConfigError::VersionConflict {
        id: "com.android.application".to_string(),
        first: "8.11.1".to_string(),
        second: "8.1.0".to_string(),
    };
    insta::assert_snapshot!(
        err.to_string(),
        @"version conflict for plugin 'com.android.application': '8.11.1' vs '8.1.0'"
    );
}

#[test]
fn test_layout_error_display() {
    let err = LayoutError::InvalidModuleName {
        name: "../escape".to_string(),
    };
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid module name '../escape': must be a single plain path component"
    );
}

#[test]
fn test_outbase_error_size() {
    // OutbaseError should be reasonably small
    // Box<str> variants (Bailed, Other) are 16 bytes (fat pointer: ptr + len)
    // With discriminant + alignment = 24 bytes
    let size = std::mem::size_of::<OutbaseError>();
    assert!(size <= 24, "OutbaseError is {size} bytes, expected <= 24");
}

#[test]
fn test_outbase_result_size() {
    // Result<(), OutbaseError> should be reasonably small
    let size = std::mem::size_of::<OutbaseResult<()>>();
    assert!(size <= 24, "OutbaseResult<()> is {size} bytes, expected <= 24");
}
