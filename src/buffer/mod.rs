// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: AGPL-3.0-or-later

/// Owned, length-bounded byte strings.
mod byte_str;
mod tests;

pub use self::byte_str::Str;
