//! Code composition: `prefix ++ local_code`.
//!
//! Codes are built by **string concatenation** of the namespace prefix and
//! the local code, then parsed back as an integer. Prefix `"3"` with local
//! code `5` is `35`, not `8`.
//!
//! # Width
//!
//! With [`LocalCodeWidth::Natural`] the local code is written without
//! padding. That keeps short codes short but is not collision-free on its
//! own: prefix `"1"` + `23` and prefix `"12"` + `3` are both `123`. Either
//! audit the registry ([`ProviderRegistry::audit`](crate::ProviderRegistry::audit))
//! or switch to [`LocalCodeWidth::Fixed`], which zero-pads every local code
//! to the same number of digits.

use crate::{ConfigError, PrefixTable, Result};
use std::sync::Arc;

/// How local codes are rendered before concatenation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LocalCodeWidth {
    /// Decimal digits as-is.
    #[default]
    Natural,
    /// Left-pad with zeros to exactly this many digits.
    Fixed(u8),
}

/// Combines prefixes and local codes into full error codes.
#[derive(Debug, Clone)]
pub struct CodeComposer {
    prefixes: Arc<PrefixTable>,
    width: LocalCodeWidth,
}

impl CodeComposer {
    pub fn new(prefixes: Arc<PrefixTable>) -> Self {
        Self {
            prefixes,
            width: LocalCodeWidth::Natural,
        }
    }

    #[must_use]
    pub fn with_width(mut self, width: LocalCodeWidth) -> Self {
        self.width = width;
        self
    }

    #[inline]
    pub fn prefixes(&self) -> &PrefixTable {
        &self.prefixes
    }

    #[inline]
    pub fn width(&self) -> LocalCodeWidth {
        self.width
    }

    /// Compose the full code for a local code in `namespace`.
    ///
    /// # Errors
    ///
    /// - `MissingNamespacePrefix` if the namespace has no prefix
    /// - `LocalCodeOutOfRange` if a fixed width is too narrow for the code
    /// - `CodeOverflow` if the concatenation does not fit in `u64`
    pub fn compose(&self, namespace: &str, local_code: u32) -> Result<u64> {
        let prefix = self.prefixes.lookup(namespace)?;
        let local = self.local_digits(namespace, local_code)?;

        let mut digits = String::with_capacity(prefix.len() + local.len());
        digits.push_str(prefix);
        digits.push_str(&local);

        digits.parse::<u64>().map_err(|_| ConfigError::CodeOverflow {
            prefix: prefix.to_owned(),
            local_code,
        })
    }

    fn local_digits(&self, namespace: &str, local_code: u32) -> Result<String> {
        match self.width {
            LocalCodeWidth::Natural => Ok(local_code.to_string()),
            LocalCodeWidth::Fixed(width) => {
                let digits = format!("{:0width$}", local_code, width = usize::from(width));
                if digits.len() > usize::from(width) {
                    return Err(ConfigError::LocalCodeOutOfRange {
                        namespace: namespace.to_owned(),
                        code: local_code,
                        width,
                    });
                }
                Ok(digits)
            }
        }
    }
}
