// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::common::Error;
use std::borrow::Cow;
use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// An owned byte string with an explicit length.
///
/// The length is the number of bytes held; content need not be UTF-8 and is
/// displayed lossily.  Every constructor that allocates is fallible and
/// reports [`Error::Allocation`] instead of aborting.
#[derive(Clone, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Str {
    data: Vec<u8>,
}
crate::serde_bytes_str!(Str);

/// Reserve exactly `requested` bytes.
fn reserve(requested: usize) -> Result<Vec<u8>, Error> {
    let mut data = Vec::new();
    data.try_reserve_exact(requested)
        .map_err(|_| Error::Allocation { requested })?;
    Ok(data)
}

impl Str {
    /// Returns an empty string.  Never allocates.
    pub const fn empty() -> Self {
        Self { data: Vec::new() }
    }

    /// Copies `content` into a new string of the same length.
    pub fn new(content: impl AsRef<[u8]>) -> Result<Self, Error> {
        let content = content.as_ref();
        Self::with_length(content, content.len())
    }

    /// Copies the first `length` bytes of `content` into a new string of
    /// exactly `length` bytes.
    ///
    /// Fails with [`Error::InvalidArgument`] if `content` is shorter than
    /// `length`.
    pub fn with_length(content: &[u8], length: usize) -> Result<Self, Error> {
        let Some(content) = content.get(..length) else {
            return Err(Error::InvalidArgument(format!(
                "length {length} exceeds content of {} bytes",
                content.len()
            )));
        };
        let mut data = reserve(length)?;
        data.extend_from_slice(content);
        Ok(Self { data })
    }

    /// Returns the number of bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if there are no bytes.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the content.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Returns the content, consuming the string.
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Returns the content as UTF-8, replacing invalid sequences.
    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.data)
    }

    /// Returns a new string holding `self` followed by `other`.
    /// Neither input is modified.
    pub fn concat(&self, other: &Str) -> Result<Str, Error> {
        self.concat_bytes(&other.data)
    }

    /// Returns a new string holding `self` followed by `other`.
    pub fn concat_bytes(&self, other: &[u8]) -> Result<Str, Error> {
        Self::from_parts(&[self.data.as_slice(), other])
    }

    /// Returns a new string holding `parts` back to back, allocated once.
    pub fn from_parts(parts: &[&[u8]]) -> Result<Str, Error> {
        let requested = parts
            .iter()
            .try_fold(0usize, |total, part| total.checked_add(part.len()))
            .ok_or(Error::Allocation { requested: usize::MAX })?;
        let mut data = reserve(requested)?;
        for part in parts {
            data.extend_from_slice(part);
        }
        Ok(Self { data })
    }

    /// Returns a new string holding `n` copies of `self`.
    pub fn repeat(&self, n: usize) -> Result<Str, Error> {
        let requested = self
            .len()
            .checked_mul(n)
            .ok_or(Error::Allocation { requested: usize::MAX })?;
        let mut data = reserve(requested)?;
        for _ in 0..n {
            data.extend_from_slice(&self.data);
        }
        Ok(Self { data })
    }

    /// Splits on `\n`.  Like `split`, a trailing newline yields a trailing
    /// empty piece and an empty string yields one empty piece.
    pub fn lines(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.data.split(|byte| *byte == b'\n')
    }

    /// Shortens the string to `length` bytes.  Has no effect if it is
    /// already shorter.
    pub fn truncate(&mut self, length: usize) {
        self.data.truncate(length);
    }

    /// Frees the storage, leaving an empty string.  Calling it again is a
    /// no-op.
    pub fn release(&mut self) {
        self.data = Vec::new();
    }
}

impl AsRef<[u8]> for Str {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl Debug for Str {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        Debug::fmt(&self.to_string_lossy(), f)
    }
}

impl Display for Str {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        Display::fmt(&self.to_string_lossy(), f)
    }
}

impl From<Vec<u8>> for Str {
    /// Takes ownership of `data` without copying.
    fn from(data: Vec<u8>) -> Self {
        Self { data }
    }
}

impl FromStr for Str {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Str {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl TryFrom<&[u8]> for Str {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::new(bytes)
    }
}

impl PartialEq<str> for Str {
    fn eq(&self, other: &str) -> bool {
        self.data == other.as_bytes()
    }
}

impl PartialEq<&str> for Str {
    fn eq(&self, other: &&str) -> bool {
        self.data == other.as_bytes()
    }
}

impl PartialEq<[u8]> for Str {
    fn eq(&self, other: &[u8]) -> bool {
        self.data == other
    }
}
