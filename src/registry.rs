//! Init-time provider registration.
//!
//! The registry is the primary way to find providers: each error library
//! registers its provider once at startup and every type the provider
//! covers becomes locatable by key, with no filesystem access.
//!
//! It also serves as the [`TypeCatalog`] for a
//! [`DirectoryLocator`](crate::DirectoryLocator), answering which declared
//! type names are providers.

use crate::composer::CodeComposer;
use crate::identity::ErrorTypeIdentity;
use crate::locator::{DataSourceLocator, TypeCatalog};
use crate::provider::ErrorDataProvider;
use crate::{ConfigError, ErrorType, Result, TypeKey};
use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Providers keyed by the error types they cover.
#[derive(Default)]
pub struct ProviderRegistry {
    providers: Vec<Arc<dyn ErrorDataProvider>>,
    by_type: HashMap<TypeKey, usize>,
    source_root: Option<PathBuf>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a provider for every type it covers.
    ///
    /// A type already claimed by an earlier provider stays with that
    /// provider.
    pub fn register(&mut self, provider: Arc<dyn ErrorDataProvider>) {
        let index = self.providers.len();
        let identity = provider.identity();

        for error_type in provider.error_types() {
            let key = error_type.key();
            if self.by_type.contains_key(&key) {
                tracing::warn!(
                    error_type = %key,
                    provider = %identity,
                    "error type already registered, keeping the first provider"
                );
                continue;
            }
            self.by_type.insert(key, index);
        }

        tracing::debug!(provider = %identity, "registered error data provider");
        self.providers.push(provider);
    }

    #[must_use]
    pub fn with_provider(mut self, provider: impl ErrorDataProvider + 'static) -> Self {
        self.register(Arc::new(provider));
        self
    }

    /// Directory that recorded `file!()` paths are relative to, usually
    /// `env!("CARGO_MANIFEST_DIR")` of the crate declaring the types.
    #[must_use]
    pub fn with_source_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.source_root = Some(root.into());
        self
    }

    pub fn providers(&self) -> &[Arc<dyn ErrorDataProvider>] {
        &self.providers
    }

    /// Number of registered error types.
    #[inline]
    pub fn len(&self) -> usize {
        self.by_type.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.by_type.is_empty()
    }

    /// Compose every registered code and check the result is usable.
    ///
    /// # Errors
    ///
    /// The first defect found: a namespace without a prefix, a code that
    /// cannot be composed, or two types sharing one code.
    pub fn audit(&self, composer: &CodeComposer) -> Result<()> {
        let mut seen: HashMap<u64, TypeKey> = HashMap::with_capacity(self.by_type.len());

        // Sorted so the reported pair does not depend on hash order.
        let mut keys: Vec<_> = self.by_type.iter().collect();
        keys.sort_by_key(|(key, _)| **key);

        for (key, &index) in keys {
            let provider = &self.providers[index];
            let Some(error_type) = provider.error_types().into_iter().find(|ty| ty.key() == *key) else {
                continue;
            };
            let code = composer.compose(key.namespace(), provider.local_code(error_type)?)?;

            if let Some(first) = seen.insert(code, *key) {
                return Err(ConfigError::CodeCollision {
                    code,
                    first: first.to_string(),
                    second: key.to_string(),
                });
            }
        }

        tracing::debug!(types = seen.len(), "error code audit passed");
        Ok(())
    }
}

impl DataSourceLocator for ProviderRegistry {
    /// The provider that claimed the type, else the first provider of the
    /// type's namespace, which then reports the type as unregistered.
    fn locate(&self, error_type: &ErrorType) -> Option<Arc<dyn ErrorDataProvider>> {
        if let Some(&index) = self.by_type.get(&error_type.key()) {
            return Some(Arc::clone(&self.providers[index]));
        }

        self.providers
            .iter()
            .find(|provider| provider.identity().namespace() == error_type.namespace())
            .map(Arc::clone)
    }
}

impl TypeCatalog for ProviderRegistry {
    fn source_path(&self, error_type: &ErrorType) -> Option<PathBuf> {
        let file = error_type.source_file();
        Some(match &self.source_root {
            Some(root) => root.join(file),
            None => PathBuf::from(file),
        })
    }

    fn provider_for(&self, identity: &ErrorTypeIdentity) -> Option<Arc<dyn ErrorDataProvider>> {
        self.providers
            .iter()
            .find(|provider| identity.matches(&provider.identity()))
            .map(Arc::clone)
    }
}

impl fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let identities: Vec<_> = self.providers.iter().map(|p| p.identity()).collect();
        f.debug_struct("ProviderRegistry")
            .field("providers", &identities)
            .field("types", &self.by_type.len())
            .field("source_root", &self.source_root)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::define_error_types;
    use crate::prefixes::PrefixTable;
    use crate::provider::StaticDataProvider;

    define_error_types! {
        "left" => {
            LEFT_ONE = LeftOne(),
            LEFT_TWO = LeftTwo(),
        }
        "right" => {
            RIGHT_ONE = RightOne(),
        }
    }

    fn left() -> StaticDataProvider {
        StaticDataProvider::builder("left", "LeftErrorData")
            .entry(&LEFT_ONE, 23, "one")
            .entry(&LEFT_TWO, 24, "two")
            .build()
            .unwrap()
    }

    fn right(code: u32) -> StaticDataProvider {
        StaticDataProvider::builder("right", "RightErrorData")
            .entry(&RIGHT_ONE, code, "one")
            .build()
            .unwrap()
    }

    fn composer(pairs: &[(&str, &str)]) -> CodeComposer {
        CodeComposer::new(Arc::new(PrefixTable::from_pairs(pairs.iter().copied()).unwrap()))
    }

    #[test]
    fn locates_registered_types() {
        let registry = ProviderRegistry::new().with_provider(left()).with_provider(right(1));

        assert_eq!(registry.len(), 3);
        let provider = registry.locate(&RIGHT_ONE).unwrap();
        assert_eq!(provider.identity().name(), "RightErrorData");
        assert_eq!(registry.locate(&LEFT_TWO).unwrap().local_code(&LEFT_TWO).unwrap(), 24);
    }

    #[test]
    fn unknown_namespace_is_none() {
        let registry = ProviderRegistry::new().with_provider(left());
        assert!(registry.locate(&RIGHT_ONE).is_none());
    }

    #[test]
    fn unclaimed_type_falls_back_to_its_library() {
        let partial = StaticDataProvider::builder("left", "LeftErrorData")
            .entry(&LEFT_ONE, 23, "one")
            .build()
            .unwrap();
        let registry = ProviderRegistry::new().with_provider(partial);

        let provider = registry.locate(&LEFT_TWO).expect("library provider");
        assert_eq!(
            provider.local_code(&LEFT_TWO),
            Err(ConfigError::UnregisteredErrorType {
                error_type: "left::LeftTwo".into()
            })
        );
    }

    #[test]
    fn first_registration_wins() {
        let shadow = StaticDataProvider::builder("left", "ShadowErrorData")
            .entry(&LEFT_ONE, 99, "shadow")
            .build()
            .unwrap();
        let registry = ProviderRegistry::new().with_provider(left()).with_provider(shadow);

        assert_eq!(registry.locate(&LEFT_ONE).unwrap().local_code(&LEFT_ONE).unwrap(), 23);
        assert_eq!(registry.providers().len(), 2);
    }

    #[test]
    fn catalog_matches_provider_identity() {
        let registry = ProviderRegistry::new().with_provider(left());

        assert!(registry.provider_for(&ErrorTypeIdentity::new("", "LeftErrorData")).is_some());
        assert!(registry.provider_for(&ErrorTypeIdentity::new("left", "LeftErrorData")).is_some());
        assert!(registry.provider_for(&ErrorTypeIdentity::new("", "LeftOne")).is_none());
    }

    #[test]
    fn source_path_respects_root() {
        let registry = ProviderRegistry::new().with_source_root("/pkg");
        let path = registry.source_path(&LEFT_ONE).unwrap();
        assert!(path.starts_with("/pkg"));
        assert!(path.ends_with(LEFT_ONE.source_file()));
    }

    #[test]
    fn audit_passes_for_distinct_codes() {
        let registry = ProviderRegistry::new().with_provider(left()).with_provider(right(5));
        assert!(registry.audit(&composer(&[("left", "1"), ("right", "2")])).is_ok());
    }

    #[test]
    fn audit_reports_collisions() {
        // "1" ++ 23 and "12" ++ 3 are both 123.
        let registry = ProviderRegistry::new().with_provider(left()).with_provider(right(3));
        let result = registry.audit(&composer(&[("left", "1"), ("right", "12")]));

        assert_eq!(
            result,
            Err(ConfigError::CodeCollision {
                code: 123,
                first: "left::LeftOne".into(),
                second: "right::RightOne".into(),
            })
        );
    }

    #[test]
    fn audit_reports_missing_prefix() {
        let registry = ProviderRegistry::new().with_provider(left());
        assert!(matches!(
            registry.audit(&composer(&[("right", "2")])),
            Err(ConfigError::MissingNamespacePrefix { .. })
        ));
    }
}
