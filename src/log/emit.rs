// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::buffer::Str;
use crate::common::Error;

/// Receives each formatted line from a [`Logger`](super::Logger).
///
/// Implemented for closures `FnMut(Str) -> Result<(), E>`, for infallible
/// closures wrapped with [`emit_fn`], and for `Vec<Str>`, which collects lines
/// in memory.
pub trait Emit {
    /// Returned by [`Emit::emit`] and passed through the logger unchanged.
    /// Allocation failures while building a line are converted into it.
    type Error: From<Error>;

    /// Consumes one line.
    fn emit(&mut self, line: Str) -> Result<(), Self::Error>;
}

impl<F, E> Emit for F
where
    F: FnMut(Str) -> Result<(), E>,
    E: From<Error>,
{
    type Error = E;

    fn emit(&mut self, line: Str) -> Result<(), E> {
        self(line)
    }
}

/// An infallible closure, see [`emit_fn`].
pub struct EmitFn<F>(F);

/// Wraps a closure that cannot fail.
///
/// # Example
///
/// `Logger::new(emit_fn(|line| println!("{line}")), tab, 100)`
pub fn emit_fn<F: FnMut(Str)>(f: F) -> EmitFn<F> {
    EmitFn(f)
}

impl<F: FnMut(Str)> Emit for EmitFn<F> {
    type Error = Error;

    fn emit(&mut self, line: Str) -> Result<(), Error> {
        (self.0)(line);
        Ok(())
    }
}

impl Emit for Vec<Str> {
    type Error = Error;

    fn emit(&mut self, line: Str) -> Result<(), Error> {
        self.try_reserve(1).map_err(|_| Error::Allocation {
            requested: std::mem::size_of::<Str>(),
        })?;
        self.push(line);
        Ok(())
    }
}
