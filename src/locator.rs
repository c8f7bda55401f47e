//! Data-source location: error type → the provider that knows its data.
//!
//! Three pieces:
//!
//! - [`DataSourceLocator`], the seam the factory depends on.
//! - [`DirectoryLocator`] scans the directory holding the error type's
//!   declaring source file. Every file there is parsed, its first declared
//!   type resolved, and the [`TypeCatalog`] asked whether that type is a
//!   data provider. First match wins.
//! - [`CachingLocator`] memoizes any locator per error type.
//!
//! The scan expects one directory per error library, holding the error-type
//! declarations and exactly one provider source:
//!
//! ```text
//! src/definitions/pvc/
//!     data.rs    <- first declared type is the provider (PvcErrorData)
//!     mod.rs
//!     types.rs   <- define_error_types! { "pvc" => { ... } }
//! ```

use crate::identity::{ErrorTypeIdentity, SourceParser, SynParser, TypeIdentityResolver};
use crate::provider::ErrorDataProvider;
use crate::{ErrorType, TypeKey};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

// ============================================================================
// Traits
// ============================================================================

/// Finds the data provider for an error type.
pub trait DataSourceLocator: Send + Sync {
    /// `None` when no provider covers the type's library.
    fn locate(&self, error_type: &ErrorType) -> Option<Arc<dyn ErrorDataProvider>>;
}

impl<L: DataSourceLocator + ?Sized> DataSourceLocator for Arc<L> {
    fn locate(&self, error_type: &ErrorType) -> Option<Arc<dyn ErrorDataProvider>> {
        (**self).locate(error_type)
    }
}

/// What the directory scan needs to know about types it cannot reflect on.
pub trait TypeCatalog: Send + Sync {
    /// Where the declaring source file of `error_type` lives on disk.
    ///
    /// The default takes the recorded `file!()` path as-is, which is
    /// relative to the directory the crate was compiled from.
    fn source_path(&self, error_type: &ErrorType) -> Option<PathBuf> {
        Some(PathBuf::from(error_type.source_file()))
    }

    /// The provider instance for a declared type, if that type is one.
    fn provider_for(&self, identity: &ErrorTypeIdentity) -> Option<Arc<dyn ErrorDataProvider>>;
}

impl<C: TypeCatalog + ?Sized> TypeCatalog for Arc<C> {
    fn source_path(&self, error_type: &ErrorType) -> Option<PathBuf> {
        (**self).source_path(error_type)
    }

    fn provider_for(&self, identity: &ErrorTypeIdentity) -> Option<Arc<dyn ErrorDataProvider>> {
        (**self).provider_for(identity)
    }
}

// ============================================================================
// Directory Scan
// ============================================================================

/// Finds providers by scanning sibling source files.
#[derive(Debug)]
pub struct DirectoryLocator<C, P = SynParser> {
    catalog: C,
    resolver: TypeIdentityResolver<P>,
}

impl<C: TypeCatalog> DirectoryLocator<C, SynParser> {
    pub fn new(catalog: C) -> Self {
        Self {
            catalog,
            resolver: TypeIdentityResolver::default(),
        }
    }
}

impl<C: TypeCatalog, P: SourceParser> DirectoryLocator<C, P> {
    pub fn with_parser(catalog: C, parser: P) -> Self {
        Self {
            catalog,
            resolver: TypeIdentityResolver::new(parser),
        }
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    fn scan(&self, dir: &Path) -> Option<Arc<dyn ErrorDataProvider>> {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(err) => {
                tracing::debug!(dir = %dir.display(), error = %err, "cannot list error library directory");
                return None;
            }
        };

        // read_dir order is platform-defined; sort so the first match is stable.
        let mut files: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_ok_and(|ty| ty.is_file()))
            .map(|entry| entry.path())
            .collect();
        files.sort();

        for file in files {
            let Ok(source) = fs::read_to_string(&file) else {
                tracing::trace!(file = %file.display(), "skipping unreadable file");
                continue;
            };

            let identity = self.resolver.resolve(&source);
            if !identity.is_found() {
                continue;
            }

            if let Some(provider) = self.catalog.provider_for(&identity) {
                tracing::debug!(
                    file = %file.display(),
                    provider = %identity,
                    "located error data provider"
                );
                return Some(provider);
            }
        }

        None
    }
}

impl<C: TypeCatalog, P: SourceParser> DataSourceLocator for DirectoryLocator<C, P> {
    fn locate(&self, error_type: &ErrorType) -> Option<Arc<dyn ErrorDataProvider>> {
        let path = self.catalog.source_path(error_type)?;
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        self.scan(dir)
    }
}

// ============================================================================
// Memoization
// ============================================================================

/// Remembers every successful lookup of the wrapped locator.
///
/// The cache only grows. Misses are not cached, so a library registered
/// later is still found. The lock is never held while the inner locator
/// runs: two threads racing on the same type may both compute, and the
/// first insert wins.
pub struct CachingLocator<L> {
    inner: L,
    cache: RwLock<HashMap<TypeKey, Arc<dyn ErrorDataProvider>>>,
}

impl<L: DataSourceLocator> CachingLocator<L> {
    pub fn new(inner: L) -> Self {
        Self {
            inner,
            cache: RwLock::new(HashMap::new()),
        }
    }

    pub fn inner(&self) -> &L {
        &self.inner
    }

    /// Number of cached types.
    pub fn cached(&self) -> usize {
        self.read_cache().len()
    }

    #[inline]
    fn read_cache(&self) -> RwLockReadGuard<'_, HashMap<TypeKey, Arc<dyn ErrorDataProvider>>> {
        match self.cache.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    #[inline]
    fn write_cache(&self) -> RwLockWriteGuard<'_, HashMap<TypeKey, Arc<dyn ErrorDataProvider>>> {
        match self.cache.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl<L: DataSourceLocator> DataSourceLocator for CachingLocator<L> {
    fn locate(&self, error_type: &ErrorType) -> Option<Arc<dyn ErrorDataProvider>> {
        let key = error_type.key();
        if let Some(hit) = self.read_cache().get(&key) {
            return Some(Arc::clone(hit));
        }

        let found = self.inner.locate(error_type)?;
        let mut cache = self.write_cache();
        Some(Arc::clone(cache.entry(key).or_insert(found)))
    }
}

impl<L: std::fmt::Debug> std::fmt::Debug for CachingLocator<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cached = match self.cache.read() {
            Ok(guard) => guard.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        };
        f.debug_struct("CachingLocator")
            .field("inner", &self.inner)
            .field("cached", &cached)
            .finish()
    }
}
