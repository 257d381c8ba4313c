// outbase: Build Output Relocation Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command handlers for outbase.
//!
//! ```text
//! resolve  prints the resolved layout (text or JSON)
//! clean    deletes the build root / module outputs
//! check    probes repositories, prints plugin pins
//! config   options + files reporting
//! ```

pub mod check;
pub mod clean;
pub mod config;
pub mod resolve;
