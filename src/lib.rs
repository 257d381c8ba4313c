// outbase: Build Output Relocation Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |          resolve / clean / check
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |   TOML, layered settings  |
//!              '-----+----------+------+---'
//!                    |          |      |
//!                    v          v      v
//!                 layout      clean   net
//!               resolver   remove/du  HTTP probes
//!
//!   +-----------------------------------------+
//!   |  foundation   error, logging, utility   |
//!   +-----------------------------------------+
//! ```

pub mod clean;
pub mod cli;
pub mod cmd;
pub mod config;
pub mod error;
pub mod layout;
pub mod logging;
pub mod net;
pub mod utility;
