//! Structured log record for a [`CodedError`](crate::CodedError).
//!
//! [`InternalLog`] borrows from the error it describes and cannot outlive
//! it. Rendered messages may embed caller-supplied values, so the record is
//! meant to be written out immediately, not kept:
//!
//! ```rust
//! use coded_errors::definitions::{default_factory, pvc::INVALID_ARRAY_INDEX};
//! use coded_errors::args;
//!
//! let factory = default_factory().unwrap();
//! let err = factory.create(&INVALID_ARRAY_INDEX, args!["(foo)"]);
//!
//! let mut line = String::new();
//! err.with_internal_log(|log| log.write_to(&mut line)).unwrap();
//! assert!(line.starts_with("[71001] type='pvc::InvalidArrayIndexException'"));
//! ```

use crate::{CodedError, ErrorType};
use std::borrow::Cow;
use std::fmt;

/// Maximum length for any individual field in formatted output
const MAX_FIELD_OUTPUT_LEN: usize = 1024;

/// Truncation indicator appended to truncated strings
const TRUNCATION_INDICATOR: &str = "...[TRUNCATED]";

/// Borrowed view of one error in a chain.
#[derive(Debug, Clone, Copy)]
pub struct InternalLog<'a> {
    pub code: u64,
    pub error_type: &'static ErrorType,
    pub message: &'a str,
    pub cause_code: Option<u64>,
    /// Errors beneath this one in the cause chain.
    pub depth: usize,
}

impl<'a> InternalLog<'a> {
    pub(crate) fn new(error: &'a CodedError) -> Self {
        Self {
            code: error.code(),
            error_type: error.error_type(),
            message: error.message(),
            cause_code: error.cause().map(CodedError::code),
            depth: error.depth(),
        }
    }

    /// Format for human-readable logs in trusted debug contexts.
    ///
    /// Only available with BOTH the `trusted_debug` feature AND debug
    /// assertions; it materializes the message into a `String`.
    #[cfg(all(feature = "trusted_debug", debug_assertions))]
    pub fn format_for_trusted_debug(&self) -> String {
        let mut output = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_to(&mut output);
        output
    }

    /// Write the record without allocating for fields under the limit.
    ///
    /// Format: `[code] type='ns::Name' message='...' cause=code depth=n`.
    pub fn write_to(&self, f: &mut impl fmt::Write) -> fmt::Result {
        write!(
            f,
            "[{}] type='{}' message='{}'",
            self.code,
            self.error_type,
            truncate_with_indicator(self.message)
        )?;

        if let Some(cause) = self.cause_code {
            write!(f, " cause={cause}")?;
        }

        if self.depth > 0 {
            write!(f, " depth={}", self.depth)?;
        }

        Ok(())
    }

    #[inline]
    pub const fn code(&self) -> u64 {
        self.code
    }

    #[inline]
    pub const fn error_type(&self) -> &'static ErrorType {
        self.error_type
    }

    #[inline]
    pub const fn message(&self) -> &str {
        self.message
    }

    #[inline]
    pub const fn cause_code(&self) -> Option<u64> {
        self.cause_code
    }
}

/// Cut `s` to at most `MAX_FIELD_OUTPUT_LEN` bytes, marking the cut.
///
/// Returns a Cow<str> to avoid allocation when no truncation is needed.
fn truncate_with_indicator(s: &str) -> Cow<'_, str> {
    if s.len() <= MAX_FIELD_OUTPUT_LEN {
        return Cow::Borrowed(s);
    }

    let max_content_len = MAX_FIELD_OUTPUT_LEN.saturating_sub(TRUNCATION_INDICATOR.len());

    // Last char boundary at or before the limit
    let mut idx = max_content_len;
    while idx > 0 && !s.is_char_boundary(idx) {
        idx -= 1;
    }

    if idx == 0 {
        return Cow::Borrowed(TRUNCATION_INDICATOR);
    }

    let mut result = String::with_capacity(idx + TRUNCATION_INDICATOR.len());
    result.push_str(&s[..idx]);
    result.push_str(TRUNCATION_INDICATOR);
    Cow::Owned(result)
}
