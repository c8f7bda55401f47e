//! Bundled error libraries and the default wiring.
//!
//! # Taxonomy & Governance
//!
//! Each library owns one namespace and one code prefix:
//!
//! | namespace | prefix | local codes | provider           |
//! |-----------|--------|-------------|--------------------|
//! | `stock`   | `1`    | 1-12        | [`StockErrorData`](stock::StockErrorData) |
//! | `pvc`     | `7`    | 1001-1007   | [`PvcErrorData`](pvc::PvcErrorData)       |
//!
//! Local code ranges are enforced by the `tests` module at the bottom of
//! this file, and [`default_factory`] audits the composed codes for
//! collisions before handing the factory out.

use crate::composer::CodeComposer;
use crate::locator::{CachingLocator, DirectoryLocator};
use crate::prefixes::PrefixTable;
use crate::registry::ProviderRegistry;
use crate::{ErrorFactory, Result};
use std::sync::Arc;

pub mod pvc;
pub mod stock;

/// Local code range constants per library.
/// Checked for consistency in `tests` module.
pub mod ranges {
    pub const STOCK_START: u32 = 1;    pub const STOCK_END: u32 = 12;
    pub const PVC_START:   u32 = 1001; pub const PVC_END:   u32 = 1007;
}

pub const STOCK_PREFIX: &str = "1";
pub const PVC_PREFIX: &str = "7";

/// Prefix table covering the bundled libraries.
///
/// # Errors
///
/// Only if a bundled prefix is invalid.
pub fn default_prefixes() -> Result<PrefixTable> {
    PrefixTable::builder()
        .prefix("stock", STOCK_PREFIX)
        .prefix("pvc", PVC_PREFIX)
        .build()
}

/// Registry with both bundled providers, rooted at this package for
/// source scanning.
///
/// # Errors
///
/// Only if a bundled provider table is malformed.
pub fn default_registry() -> Result<ProviderRegistry> {
    Ok(ProviderRegistry::new()
        .with_provider(stock::StockErrorData::new()?)
        .with_provider(pvc::PvcErrorData::new()?)
        .with_source_root(env!("CARGO_MANIFEST_DIR")))
}

/// Factory over the default registry and prefixes, audited for collisions.
///
/// # Errors
///
/// Any packaging defect in the bundled libraries.
pub fn default_factory() -> Result<ErrorFactory> {
    let composer = CodeComposer::new(Arc::new(default_prefixes()?));
    let registry = default_registry()?;
    registry.audit(&composer)?;
    Ok(ErrorFactory::new(registry, composer))
}

/// Factory that finds providers by scanning each library's source
/// directory, caching every hit.
///
/// Needs the package sources on disk at `CARGO_MANIFEST_DIR`.
///
/// # Errors
///
/// Same as [`default_factory`].
pub fn scanning_factory() -> Result<ErrorFactory> {
    let composer = CodeComposer::new(Arc::new(default_prefixes()?));
    let registry = default_registry()?;
    registry.audit(&composer)?;
    let locator = CachingLocator::new(DirectoryLocator::new(Arc::new(registry)));
    Ok(ErrorFactory::new(locator, composer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::ErrorDataProvider;

    #[test]
    fn enforce_local_code_ranges() {
        let stock = stock::StockErrorData::new().unwrap();
        for ty in stock.error_types() {
            let code = stock.local_code(ty).unwrap();
            assert!((ranges::STOCK_START..=ranges::STOCK_END).contains(&code), "{ty}: {code}");
        }

        let pvc = pvc::PvcErrorData::new().unwrap();
        for ty in pvc.error_types() {
            let code = pvc.local_code(ty).unwrap();
            assert!((ranges::PVC_START..=ranges::PVC_END).contains(&code), "{ty}: {code}");
        }
    }

    #[test]
    fn every_declared_type_is_registered() {
        let registry = default_registry().unwrap();
        assert_eq!(registry.len(), 12 + 7);
    }

    #[test]
    fn bundled_codes_do_not_collide() {
        let composer = CodeComposer::new(Arc::new(default_prefixes().unwrap()));
        default_registry().unwrap().audit(&composer).unwrap();
    }

    #[test]
    fn bundled_templates_name_declared_params() {
        let pvc = pvc::PvcErrorData::new().unwrap();
        for ty in pvc.error_types() {
            let template = pvc.message_template(ty).unwrap();
            let names: Vec<_> = crate::template::placeholders(template).collect();
            assert_eq!(names, ty.params(), "{ty}");
        }
    }
}
