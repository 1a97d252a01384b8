// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::{Emit, LoggerConfig, DEFAULT_MAX_PRINT_LINES, DEFAULT_TAB};
use crate::buffer::Str;
use crate::common::Error;

/// Forwards tab-prefixed lines to an [`Emit`] callback, at most
/// `max_print_lines` of them over its lifetime.  Further calls are silently
/// dropped.
pub struct Logger<E> {
    emit: E,
    tab: Str,
    /// One copy of `tab` per level of nesting; empty at depth 0.
    indent: Str,
    depth: usize,
    max_print_lines: usize,
    printed_lines: usize,
    debug: bool,
    truncation_noticed: bool,
}

impl<E: Emit> Logger<E> {
    /// Creates a logger which owns `tab`.  Does not call `emit`.
    pub fn new(emit: E, tab: Str, max_print_lines: usize) -> Self {
        Self {
            emit,
            tab,
            indent: Str::empty(),
            depth: 0,
            max_print_lines,
            printed_lines: 0,
            debug: false,
            truncation_noticed: false,
        }
    }

    /// Creates a logger builder.
    pub fn builder() -> LoggerBuilder<E> {
        LoggerBuilder {
            emit: None,
            tab: None,
            max_print_lines: DEFAULT_MAX_PRINT_LINES,
            debug: false,
            error: None,
        }
    }

    /// Emits `message` prefixed by the indentation, unless the line limit has
    /// been reached, in which case nothing happens.
    ///
    /// An error from the callback is returned as is.  The line still counts
    /// toward the limit.
    pub fn log(&mut self, message: impl AsRef<[u8]>) -> Result<(), E::Error> {
        if self.is_exhausted() {
            if self.debug && !self.truncation_noticed {
                println!("(truncated after {} lines)", self.max_print_lines);
                self.truncation_noticed = true;
            }
            return Ok(());
        }
        let line = Str::from_parts(&[
            self.tab.as_bytes(),
            self.indent.as_bytes(),
            message.as_ref(),
        ])?;
        if self.debug {
            println!("{line}");
        }
        self.printed_lines += 1;
        self.emit.emit(line)
    }

    /// Logs each `\n` separated piece of `message` as its own line.  Each
    /// piece counts toward the limit, so a message may be cut short.
    pub fn log_lines(&mut self, message: impl AsRef<[u8]>) -> Result<(), E::Error> {
        for piece in message.as_ref().split(|byte| *byte == b'\n') {
            if self.is_exhausted() {
                break;
            }
            self.log(piece)?;
        }
        Ok(())
    }

    /// Nests subsequent lines one tab deeper.
    pub fn indent(&mut self) -> Result<(), Error> {
        self.indent = self.indent.concat(&self.tab)?;
        self.depth += 1;
        Ok(())
    }

    /// Undoes one [`Logger::indent`].  Does nothing at depth 0.
    pub fn dedent(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
            let length = self.indent.len().saturating_sub(self.tab.len());
            self.indent.truncate(length);
        }
    }

    /// Calls `f` with lines nested one tab deeper, then restores the depth.
    pub fn with_indent<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> Result<R, Error> {
        self.indent()?;
        let result = f(self);
        self.dedent();
        Ok(result)
    }

    /// Frees the tab and indentation.  The callback is kept.
    pub fn release(&mut self) {
        self.tab.release();
        self.indent.release();
        self.depth = 0;
    }

    /// Returns `true` once `max_print_lines` lines have been emitted.
    pub fn is_exhausted(&self) -> bool {
        self.printed_lines >= self.max_print_lines
    }

    /// Returns how many more lines will be emitted.
    pub fn remaining(&self) -> usize {
        self.max_print_lines.saturating_sub(self.printed_lines)
    }

    /// Returns the number of lines emitted so far.
    pub fn printed_lines(&self) -> usize {
        self.printed_lines
    }

    /// Returns the line limit.
    pub fn max_print_lines(&self) -> usize {
        self.max_print_lines
    }

    /// Returns the tab.
    pub fn tab(&self) -> &Str {
        &self.tab
    }

    /// Returns the nesting depth.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Returns `true` if lines are echoed to stdout.
    pub fn debug(&self) -> bool {
        self.debug
    }

    /// Echo emitted lines to stdout.
    pub fn set_debug(&mut self, debug: bool) {
        self.debug = debug;
    }

    /// Returns the callback.
    pub fn emitter(&self) -> &E {
        &self.emit
    }

    /// Returns the callback.
    pub fn emitter_mut(&mut self) -> &mut E {
        &mut self.emit
    }

    /// Returns the callback, consuming the logger.
    pub fn into_emitter(self) -> E {
        self.emit
    }
}

/// Builds a [`Logger`], recording the first error until [`LoggerBuilder::build`].
pub struct LoggerBuilder<E> {
    emit: Option<E>,
    tab: Option<Str>,
    max_print_lines: usize,
    debug: bool,
    error: Option<Error>,
}

impl<E: Emit> LoggerBuilder<E> {
    /// Fails with [`Error::InvalidArgument`] if no callback was set.
    pub fn build(self) -> Result<Logger<E>, Error> {
        if let Some(error) = self.error {
            return Err(error);
        }
        let Some(emit) = self.emit else {
            return Err(Error::InvalidArgument("emit callback not set".to_string()));
        };
        let tab = match self.tab {
            Some(tab) => tab,
            None => Str::new(DEFAULT_TAB)?,
        };
        let mut logger = Logger::new(emit, tab, self.max_print_lines);
        logger.debug = self.debug;
        Ok(logger)
    }

    /// Sets the callback.
    pub fn emit(mut self, emit: E) -> Self {
        self.emit = Some(emit);
        self
    }

    /// Sets the tab.  Defaults to two spaces.
    pub fn tab(mut self, tab: Str) -> Self {
        self.tab = Some(tab);
        self
    }

    /// Sets the tab from a string slice.
    pub fn tab_str(mut self, tab: &str) -> Self {
        match Str::new(tab) {
            Ok(tab) => self.tab = Some(tab),
            Err(e) => {
                self.error.get_or_insert(e);
            }
        }
        self
    }

    /// Sets the line limit.  Defaults to 100.
    pub fn max_print_lines(mut self, max_print_lines: usize) -> Self {
        self.max_print_lines = max_print_lines;
        self
    }

    /// Echo emitted lines to stdout.
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Applies tab, line limit and debug from `config`.
    pub fn config(self, config: &LoggerConfig) -> Self {
        self.tab_str(&config.tab)
            .max_print_lines(config.max_print_lines)
            .debug(config.debug)
    }
}
