// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

#![warn(missing_docs)]
//! This crate provides owned, length-bounded byte strings and a logger which
//! prefixes each line with a tab and forwards at most a fixed number of lines
//! to a caller-supplied callback.

/// Owned, length-bounded byte strings.
pub mod buffer;
pub use buffer::*;

/// Types common to buffers and loggers.
pub mod common;
pub use common::*;

#[cfg(feature = "log")]
/// Line-limited, tab-prefixing logging.
pub mod log;
#[cfg(feature = "log")]
pub use log::*;

/// Helpers used with `serde` serialization and deserialization.
pub mod serde_utils;
pub use serde_utils::*;
