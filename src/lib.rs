//! # Coded Errors
//!
//! Structured errors with stable numeric codes and templated messages.
//!
//! ## Design
//!
//! 1. **Every error kind is a static descriptor** ([`ErrorType`]) declared
//!    once, with its namespace and constructor parameter names
//! 2. **Codes are composed, not hand-numbered**: a namespace prefix from the
//!    [`PrefixTable`] followed by the library's local code
//! 3. **Messages come from templates** owned by the library's
//!    [`ErrorDataProvider`], with `${name}` placeholders bound to arguments
//! 4. **Packaging defects are loud**: a missing provider, entry or prefix is
//!    a [`ConfigError`], never a silently wrong code
//!
//! ## Quick Start
//!
//! ```rust
//! use coded_errors::{args, definitions};
//! use coded_errors::definitions::pvc::{INVALID_ARRAY_INDEX, PREG_MATCH_FAILURE};
//!
//! let factory = definitions::default_factory().unwrap();
//!
//! let cause = factory.create(&INVALID_ARRAY_INDEX, args!["(foo)"]);
//! assert_eq!(cause.code(), 71001);
//! assert_eq!(cause.message(), "Invalid array index (foo).");
//!
//! let err = factory.create(&PREG_MATCH_FAILURE, args!["/x/", "abc", cause]);
//! assert_eq!(err.to_string(), "[71006] preg_match failed: regex=/x/; subject=abc;");
//! assert_eq!(err.root_cause().code(), 71001);
//! ```
//!
//! ## Defining a library
//!
//! A library is a namespace, a set of error types declared with
//! [`define_error_types!`], and one provider. The provider is registered in
//! a [`ProviderRegistry`]; the namespace gets a prefix in the
//! [`PrefixTable`]. See [`definitions`] for two complete libraries.
//!
//! ## Features
//!
//! - `trusted_debug`: `InternalLog::format_for_trusted_debug` (debug builds only)

#![warn(clippy::all)]

use std::fmt;
use std::result;
use zeroize::Zeroize;

pub mod binder;
pub mod codes;
pub mod composer;
pub mod convenience;
pub mod definitions;
pub mod error;
pub mod factory;
pub mod identity;
pub mod locator;
pub mod logging;
pub mod prefixes;
pub mod provider;
pub mod registry;
pub mod template;

pub use binder::{ArgValue, Binding, TemplateArgs};
pub use codes::{ErrorType, TypeKey};
pub use composer::{CodeComposer, LocalCodeWidth};
pub use error::ConfigError;
pub use factory::ErrorFactory;
pub use identity::{ErrorTypeIdentity, SourceParser, SynParser, TypeIdentityResolver};
pub use locator::{CachingLocator, DataSourceLocator, DirectoryLocator, TypeCatalog};
pub use logging::InternalLog;
pub use prefixes::{PrefixTable, PrefixTableBuilder};
pub use provider::{ErrorDataEntry, ErrorDataProvider, StaticDataProvider};
pub use registry::ProviderRegistry;

/// Result of fallible configuration and construction.
pub type Result<T> = result::Result<T, ConfigError>;

// ============================================================================
// Coded Error
// ============================================================================

/// An error instance: type, composed code, rendered message, optional cause.
///
/// Built once by an [`ErrorFactory`] and immutable afterwards. The cause
/// forms a singly-linked chain walked by [`chain`](Self::chain).
///
/// The message can embed caller-supplied values and is zeroized on drop.
#[must_use = "errors should be handled or logged"]
#[derive(Clone, PartialEq)]
pub struct CodedError {
    error_type: &'static ErrorType,
    code: u64,
    message: String,
    cause: Option<Box<CodedError>>,
}

impl CodedError {
    pub(crate) fn from_parts(
        error_type: &'static ErrorType,
        code: u64,
        message: String,
        cause: Option<CodedError>,
    ) -> Self {
        Self {
            error_type,
            code,
            message,
            cause: cause.map(Box::new),
        }
    }

    #[inline]
    pub const fn code(&self) -> u64 {
        self.code
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    pub const fn error_type(&self) -> &'static ErrorType {
        self.error_type
    }

    /// Whether this error was built for `error_type`.
    #[inline]
    pub fn is(&self, error_type: &ErrorType) -> bool {
        self.error_type.key() == error_type.key()
    }

    #[inline]
    pub fn cause(&self) -> Option<&CodedError> {
        self.cause.as_deref()
    }

    /// This error followed by each cause, outermost first.
    pub fn chain(&self) -> impl Iterator<Item = &CodedError> {
        std::iter::successors(Some(self), |err| err.cause())
    }

    /// The innermost error of the chain (`self` when there is no cause).
    pub fn root_cause(&self) -> &CodedError {
        self.chain().last().unwrap_or(self)
    }

    /// Number of errors beneath this one.
    pub fn depth(&self) -> usize {
        self.chain().count() - 1
    }

    /// Messages of the whole chain, outermost first, joined by ` → `.
    pub fn external_summary(&self) -> String {
        self.chain()
            .map(CodedError::message)
            .collect::<Vec<_>>()
            .join(" → ")
    }

    /// Borrowed structured record of this error.
    ///
    /// ```rust
    /// # use coded_errors::{args, definitions};
    /// # let factory = definitions::default_factory().unwrap();
    /// let err = factory.create(&definitions::pvc::INVALID_FILENAME, args!["a?b"]);
    /// let log = err.internal_log();
    /// assert_eq!(log.code(), 71004);
    /// ```
    #[inline]
    pub fn internal_log(&self) -> InternalLog<'_> {
        InternalLog::new(self)
    }

    /// Callback-style access that keeps the record from escaping.
    #[inline]
    pub fn with_internal_log<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&InternalLog<'_>) -> R,
    {
        let log = self.internal_log();
        f(&log)
    }
}

impl Drop for CodedError {
    fn drop(&mut self) {
        self.message.zeroize();
    }
}

impl fmt::Debug for CodedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CodedError")
            .field("type", &format_args!("{}", self.error_type))
            .field("code", &self.code)
            .field("message", &"<REDACTED>")
            .field("cause", &self.cause.as_ref().map(|cause| cause.code))
            .finish()
    }
}

impl fmt::Display for CodedError {
    /// `[{code}] {message}`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for CodedError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause as &(dyn std::error::Error + 'static))
    }
}
