// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: AGPL-3.0-or-later

/// Helpers for skipping default values.
mod defaults;

/// Visitor pattern.
mod visitors;

pub use self::defaults::*;
pub use self::visitors::*;
