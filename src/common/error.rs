// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::fmt::{Display, Formatter};

#[derive(Debug)]
/// An enum that encapsulates the errors raised by buffers and loggers.
///
/// # Example
///
/// Error::InvalidArgument(format!("{length}: longer than content"))
pub enum Error {
    /// Storage for a buffer could not be obtained.
    Allocation {
        /// Number of bytes that were requested.
        requested: usize,
    },
    /// An argument was absent or inconsistent.
    InvalidArgument(String),
    /// String error.
    String(String),
}

impl Error {
    /// Returns `true` if this is an allocation failure.
    pub fn is_allocation(&self) -> bool {
        matches!(self, Error::Allocation { .. })
    }

    /// Returns `true` if this is an invalid argument.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument(_))
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            Error::Allocation { requested } => {
                Display::fmt(&format!("cannot allocate {requested} bytes"), f)
            }
            Error::InvalidArgument(s) => Display::fmt(&format!("invalid argument: {s}"), f),
            Error::String(s) => Display::fmt(&s, f),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::String(format!("io: {e}"))
    }
}
