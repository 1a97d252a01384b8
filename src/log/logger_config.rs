// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

use super::{DEFAULT_MAX_PRINT_LINES, DEFAULT_TAB};
use crate::serde_utils::is_default;
use serde::{Deserialize, Serialize};

/// Logger settings, typically the `[logger]` table of a toml config.
///
/// # Example
///
/// ```toml
/// [logger]
/// tab = "    "
/// max_print_lines = 20
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Prefix of every line, repeated once per nesting level.
    pub tab: String,
    /// Lines emitted before the logger goes quiet.
    pub max_print_lines: usize,
    /// Echo emitted lines to stdout.
    #[serde(skip_serializing_if = "is_default")]
    pub debug: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            tab: DEFAULT_TAB.to_string(),
            max_print_lines: DEFAULT_MAX_PRINT_LINES,
            debug: false,
        }
    }
}
