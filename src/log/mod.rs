// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: AGPL-3.0-or-later

/// Callbacks receiving formatted lines.
mod emit;
/// Line-limited, tab-prefixing logger.
mod logger;
/// Serializable logger settings.
mod logger_config;

pub use self::emit::{emit_fn, Emit, EmitFn};
pub use self::logger::{Logger, LoggerBuilder};
pub use self::logger_config::LoggerConfig;

/// Tab used when none is given.
pub const DEFAULT_TAB: &str = "  ";

/// Line limit used when none is given.
pub const DEFAULT_MAX_PRINT_LINES: usize = 100;
