//! Namespace prefix table.
//!
//! Maps each namespace that owns error types to a short numeric prefix. The
//! table is built and validated once, then shared read-only (typically as
//! `Arc<PrefixTable>`) with the [`CodeComposer`](crate::CodeComposer).
//!
//! A lookup miss is a configuration defect, never a runtime fallback.
//!
//! ```rust
//! use coded_errors::PrefixTable;
//!
//! let table = PrefixTable::builder()
//!     .prefix("stock", "1")
//!     .prefix("pvc", "7")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(table.lookup("pvc").unwrap(), "7");
//! assert!(table.lookup("unknown").is_err());
//! ```

use crate::{ConfigError, Result};
use std::collections::HashMap;

/// Immutable namespace-to-prefix mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefixTable {
    entries: HashMap<String, String>,
}

impl PrefixTable {
    pub fn builder() -> PrefixTableBuilder {
        PrefixTableBuilder::default()
    }

    /// Build a table from `(namespace, prefix)` pairs.
    ///
    /// # Errors
    ///
    /// Same as [`PrefixTableBuilder::build`].
    pub fn from_pairs<I, N, P>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (N, P)>,
        N: Into<String>,
        P: Into<String>,
    {
        pairs
            .into_iter()
            .fold(Self::builder(), |builder, (namespace, prefix)| {
                builder.prefix(namespace, prefix)
            })
            .build()
    }

    /// Prefix digits for `namespace`.
    ///
    /// # Errors
    ///
    /// `MissingNamespacePrefix` when the namespace has no entry.
    pub fn lookup(&self, namespace: &str) -> Result<&str> {
        self.entries
            .get(namespace)
            .map(String::as_str)
            .ok_or_else(|| ConfigError::MissingNamespacePrefix {
                namespace: namespace.to_owned(),
            })
    }

    #[inline]
    pub fn contains(&self, namespace: &str) -> bool {
        self.entries.contains_key(namespace)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(namespace, prefix)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, p)| (n.as_str(), p.as_str()))
    }
}

/// Collects prefixes; validation happens in [`build`](Self::build).
#[derive(Debug, Default)]
pub struct PrefixTableBuilder {
    pending: Vec<(String, String)>,
}

impl PrefixTableBuilder {
    #[must_use]
    pub fn prefix(mut self, namespace: impl Into<String>, prefix: impl Into<String>) -> Self {
        self.pending.push((namespace.into(), prefix.into()));
        self
    }

    /// Validate and freeze the table.
    ///
    /// # Errors
    ///
    /// - `InvalidPrefix` if a prefix is empty, has non-digits, or starts with `0`
    ///   (a leading zero would vanish when the composed code is parsed)
    /// - `DuplicateNamespace` if a namespace appears twice
    pub fn build(self) -> Result<PrefixTable> {
        let mut entries = HashMap::with_capacity(self.pending.len());

        for (namespace, prefix) in self.pending {
            if !is_valid_prefix(&prefix) {
                return Err(ConfigError::InvalidPrefix { namespace, prefix });
            }
            if entries.contains_key(&namespace) {
                return Err(ConfigError::DuplicateNamespace { namespace });
            }
            entries.insert(namespace, prefix);
        }

        Ok(PrefixTable { entries })
    }
}

fn is_valid_prefix(prefix: &str) -> bool {
    !prefix.is_empty() && !prefix.starts_with('0') && prefix.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_hits_and_misses() {
        let table = PrefixTable::from_pairs([("stock", "1"), ("pvc", "7")]).unwrap();

        assert_eq!(table.lookup("stock").unwrap(), "1");
        assert_eq!(table.len(), 2);
        assert!(matches!(
            table.lookup("nope"),
            Err(ConfigError::MissingNamespacePrefix { namespace }) if namespace == "nope"
        ));
    }

    #[test]
    fn rejects_non_numeric_prefix() {
        let result = PrefixTable::builder().prefix("a", "1x").build();
        assert!(matches!(result, Err(ConfigError::InvalidPrefix { .. })));
    }

    #[test]
    fn rejects_empty_and_leading_zero_prefixes() {
        assert!(PrefixTable::builder().prefix("a", "").build().is_err());
        assert!(PrefixTable::builder().prefix("a", "07").build().is_err());
    }

    #[test]
    fn rejects_duplicate_namespace() {
        let result = PrefixTable::from_pairs([("a", "1"), ("a", "2")]);
        assert_eq!(
            result,
            Err(ConfigError::DuplicateNamespace {
                namespace: "a".into()
            })
        );
    }

    #[test]
    fn multi_digit_prefixes_are_allowed() {
        let table = PrefixTable::from_pairs([("wide", "1203")]).unwrap();
        assert_eq!(table.lookup("wide").unwrap(), "1203");
        assert!(table.contains("wide"));
        assert!(!table.is_empty());
    }
}
