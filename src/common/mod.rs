// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

/// Configuration loaded from toml.
#[cfg(feature = "toml")]
mod config;
/// An enum that encapsulates a variety of error types.
mod error;

#[cfg(feature = "toml")]
pub use self::config::{Config, ConfigBuilder};
pub use self::error::Error;
