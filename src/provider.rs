//! Error data providers: local codes and message templates per library.
//!
//! Each error library ships exactly one provider. It answers, for every
//! error type the library declares, the type's local code and its message
//! template. Providers are found by a [`DataSourceLocator`](crate::DataSourceLocator),
//! never constructed by the code that raises errors.
//!
//! [`StaticDataProvider`] covers the common case of two fixed tables built
//! once at construction:
//!
//! ```rust
//! use coded_errors::{define_error_types, ErrorDataProvider, StaticDataProvider};
//!
//! define_error_types! {
//!     "inventory" => {
//!         STOCK_DEPLETED = StockDepletedException(sku),
//!     }
//! }
//!
//! let provider = StaticDataProvider::builder("inventory", "InventoryErrorData")
//!     .entry(&STOCK_DEPLETED, 12, "SKU ${sku} is out of stock.")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(provider.local_code(&STOCK_DEPLETED).unwrap(), 12);
//! assert_eq!(provider.variable_count("SKU ${sku} is out of stock."), 1);
//! ```

use crate::identity::ErrorTypeIdentity;
use crate::{template, ConfigError, ErrorType, Result, TypeKey};
use std::borrow::Cow;
use std::collections::HashMap;

/// The capability every library's data object implements.
pub trait ErrorDataProvider: Send + Sync {
    /// Declared identity of the provider type itself.
    fn identity(&self) -> ErrorTypeIdentity;

    /// Local code of `error_type`, always greater than zero.
    ///
    /// # Errors
    ///
    /// `UnregisteredErrorType` if this provider does not cover the type.
    fn local_code(&self, error_type: &ErrorType) -> Result<u32>;

    /// Message template of `error_type`.
    ///
    /// # Errors
    ///
    /// `UnregisteredErrorType` if this provider does not cover the type.
    fn message_template(&self, error_type: &ErrorType) -> Result<&str>;

    /// Distinct `${...}` placeholders in `template`.
    fn variable_count(&self, template: &str) -> usize {
        template::variable_count(template)
    }

    /// Every error type this provider covers.
    fn error_types(&self) -> Vec<&'static ErrorType>;
}

/// One row of a provider table.
#[derive(Debug, Clone, Copy)]
pub struct ErrorDataEntry {
    pub error_type: &'static ErrorType,
    pub local_code: u32,
    pub template: &'static str,
}

impl ErrorDataEntry {
    pub const fn new(error_type: &'static ErrorType, local_code: u32, template: &'static str) -> Self {
        Self {
            error_type,
            local_code,
            template,
        }
    }
}

#[derive(Debug)]
struct Row {
    error_type: &'static ErrorType,
    local_code: u32,
    template: Cow<'static, str>,
}

/// Provider backed by two fixed tables.
#[derive(Debug)]
pub struct StaticDataProvider {
    identity: ErrorTypeIdentity,
    rows: HashMap<TypeKey, Row>,
    order: Vec<TypeKey>,
}

impl StaticDataProvider {
    pub fn builder(namespace: impl Into<String>, name: impl Into<String>) -> StaticDataProviderBuilder {
        StaticDataProviderBuilder {
            identity: ErrorTypeIdentity::new(namespace, name),
            rows: Vec::new(),
        }
    }

    /// Build from a `static` table.
    ///
    /// # Errors
    ///
    /// Same as [`StaticDataProviderBuilder::build`].
    pub fn from_entries(identity: ErrorTypeIdentity, entries: &[ErrorDataEntry]) -> Result<Self> {
        entries
            .iter()
            .fold(
                StaticDataProviderBuilder {
                    identity,
                    rows: Vec::with_capacity(entries.len()),
                },
                |builder, entry| builder.entry(entry.error_type, entry.local_code, entry.template),
            )
            .build()
    }

    fn row(&self, error_type: &ErrorType) -> Result<&Row> {
        self.rows
            .get(&error_type.key())
            .ok_or_else(|| ConfigError::UnregisteredErrorType {
                error_type: error_type.qualified_name(),
            })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl ErrorDataProvider for StaticDataProvider {
    fn identity(&self) -> ErrorTypeIdentity {
        self.identity.clone()
    }

    fn local_code(&self, error_type: &ErrorType) -> Result<u32> {
        self.row(error_type).map(|row| row.local_code)
    }

    fn message_template(&self, error_type: &ErrorType) -> Result<&str> {
        self.row(error_type).map(|row| row.template.as_ref())
    }

    fn error_types(&self) -> Vec<&'static ErrorType> {
        self.order
            .iter()
            .filter_map(|key| self.rows.get(key))
            .map(|row| row.error_type)
            .collect()
    }
}

/// Collects rows; validation happens in [`build`](Self::build).
#[derive(Debug)]
pub struct StaticDataProviderBuilder {
    identity: ErrorTypeIdentity,
    rows: Vec<Row>,
}

impl StaticDataProviderBuilder {
    #[must_use]
    pub fn entry(
        mut self,
        error_type: &'static ErrorType,
        local_code: u32,
        template: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.rows.push(Row {
            error_type,
            local_code,
            template: template.into(),
        });
        self
    }

    /// # Errors
    ///
    /// - `ZeroLocalCode` if a row uses the reserved code 0
    /// - `DuplicateErrorType` if a type appears twice
    pub fn build(self) -> Result<StaticDataProvider> {
        let mut rows = HashMap::with_capacity(self.rows.len());
        let mut order = Vec::with_capacity(self.rows.len());

        for row in self.rows {
            if row.local_code == 0 {
                return Err(ConfigError::ZeroLocalCode {
                    error_type: row.error_type.qualified_name(),
                });
            }
            let key = row.error_type.key();
            if rows.contains_key(&key) {
                return Err(ConfigError::DuplicateErrorType {
                    error_type: row.error_type.qualified_name(),
                });
            }
            order.push(key);
            rows.insert(key, row);
        }

        Ok(StaticDataProvider {
            identity: self.identity,
            rows,
            order,
        })
    }
}
