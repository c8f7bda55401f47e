//! Error type identity - the static descriptor behind every coded error.
//!
//! An [`ErrorType`] names one error kind: the namespace (library) that owns
//! it, its type name, the ordered names of its constructor parameters, and
//! the source file that declared it. Nothing numeric lives here; local codes
//! and message templates belong to the library's
//! [`ErrorDataProvider`](crate::ErrorDataProvider), and prefixes belong to the
//! [`PrefixTable`](crate::PrefixTable).
//!
//! # Governance
//!
//! Descriptors are frozen at compile time. They are declared as `static`
//! items through [`define_error_types!`](crate::define_error_types) and used
//! by `&'static` reference only:
//!
//! ```rust
//! use coded_errors::{define_error_types, ErrorType};
//!
//! define_error_types! {
//!     "inventory" => {
//!         STOCK_DEPLETED = StockDepletedException(sku, warehouse),
//!     }
//! }
//!
//! fn describe(ty: &'static ErrorType) -> String {
//!     ty.qualified_name()
//! }
//!
//! assert_eq!(describe(&STOCK_DEPLETED), "inventory::StockDepletedException");
//! assert_eq!(STOCK_DEPLETED.params(), &["sku", "warehouse"]);
//! ```
//!
//! # Parameter Names
//!
//! `params` is the declared constructor signature. The binder zips these
//! names, in order, against the positional arguments handed to the factory,
//! so the Nth parameter must carry the same identifier as the template's
//! Nth placeholder. The contract is a naming convention; nothing checks it.

use std::fmt;

// ============================================================================
// Type Key (Hashable Identity)
// ============================================================================

/// Copyable identity of an [`ErrorType`], used as a map key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeKey {
    namespace: &'static str,
    name: &'static str,
}

impl TypeKey {
    #[inline]
    pub const fn namespace(self) -> &'static str {
        self.namespace
    }

    #[inline]
    pub const fn name(self) -> &'static str {
        self.name
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.namespace, self.name)
    }
}

// ============================================================================
// Error Type (Primary Identity Type)
// ============================================================================

/// Static descriptor for one error kind.
///
/// # Construction
///
/// `const_new` asserts that the name and namespace are non-empty. In a
/// `static` initializer a violation is a compile error.
///
/// # No-Clone Semantics
///
/// Like the namespaces it is scoped to, a descriptor is identity: it is not
/// `Clone`, and every consumer holds `&'static ErrorType`.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct ErrorType {
    namespace: &'static str,
    name: &'static str,
    params: &'static [&'static str],
    source_file: &'static str,
}

impl ErrorType {
    /// Create a descriptor. Prefer [`define_error_types!`](crate::define_error_types),
    /// which fills in `source_file` with `file!()`.
    ///
    /// # Panics
    ///
    /// Panics (at compile time in const contexts) if `namespace` or `name`
    /// is empty.
    #[inline]
    pub const fn const_new(
        namespace: &'static str,
        name: &'static str,
        params: &'static [&'static str],
        source_file: &'static str,
    ) -> Self {
        assert!(!namespace.is_empty(), "Error type namespace must not be empty");
        assert!(!name.is_empty(), "Error type name must not be empty");

        Self {
            namespace,
            name,
            params,
            source_file,
        }
    }

    /// Owning namespace, the key into the prefix table.
    #[inline]
    pub const fn namespace(&self) -> &'static str {
        self.namespace
    }

    /// Declared type name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Declared constructor parameter names, in order.
    #[inline]
    pub const fn params(&self) -> &'static [&'static str] {
        self.params
    }

    /// Source file the descriptor was declared in, relative to the package root.
    #[inline]
    pub const fn source_file(&self) -> &'static str {
        self.source_file
    }

    #[inline]
    pub const fn key(&self) -> TypeKey {
        TypeKey {
            namespace: self.namespace,
            name: self.name,
        }
    }

    /// `namespace::name`.
    pub fn qualified_name(&self) -> String {
        self.key().to_string()
    }
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.key(), f)
    }
}

// ============================================================================
// Tests
// ============================================================================
