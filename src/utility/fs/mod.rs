// outbase: Build Output Relocation Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Filesystem utilities with parallel traversal.
//!
//! ```text
//! walk:  parallel_walk()               ignore::WalkParallel (multi-core)
//!        parallel_walk_with_callback() streaming, no collection
//!        WalkOptions                   max_depth, hidden, gitignore
//! ```

pub mod walk;
