//! End-to-end construction through the bundled libraries.

use coded_errors::definitions::{self, pvc, stock};
use coded_errors::{
    args, ArgValue, CachingLocator, CodeComposer, CodedError, ConfigError, DataSourceLocator,
    DirectoryLocator, ErrorFactory, PrefixTable, ProviderRegistry, TemplateArgs, define_error_types,
};
use std::error::Error;
use std::sync::Arc;

define_error_types! {
    "pvc" => {
        /// Declared in the pvc namespace but missing from its provider.
        UNLISTED = UnlistedException(detail),
    }
    "orphan" => {
        ORPHANED = OrphanedException(),
    }
}

/// `RUST_LOG=coded_errors=trace cargo test` shows the pipeline's events.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn factory() -> ErrorFactory {
    init_tracing();
    definitions::default_factory().expect("bundled libraries are well formed")
}

// ============================================================================
// Code and Message
// ============================================================================

#[test]
fn invalid_array_index_end_to_end() {
    let err = factory().create(&pvc::INVALID_ARRAY_INDEX, args!["(foo)"]);

    assert_eq!(err.code(), 71001);
    assert_eq!(err.message(), "Invalid array index (foo).");
    assert_eq!(err.to_string(), "[71001] Invalid array index (foo).");
    assert!(err.cause().is_none());
}

#[test]
fn two_variables_and_trailing_null() {
    let err = factory().create(
        &pvc::PREG_MATCH_FAILURE,
        args!["some bad regex", "some subject", ArgValue::Null],
    );

    assert_eq!(err.code(), 71006);
    assert_eq!(err.message(), "preg_match failed: regex=some bad regex; subject=some subject;");
    assert!(err.cause().is_none());
}

#[test]
fn three_variables() {
    let err = factory().create(
        &pvc::PREG_REPLACE_FAILURE,
        args!["some bad regex", "some subject", "some replacement"],
    );

    assert_eq!(err.code(), 71007);
    assert_eq!(
        err.message(),
        "preg_replace failed: regex=some bad regex; subject=some subject; replacement=some replacement"
    );
}

#[test]
fn boolean_argument_renders_as_word() {
    let err = factory().create(&pvc::INVALID_ARRAY_VALUE, args![true]);
    assert!(err.message().contains("true"));
}

#[test]
fn compound_argument_renders_as_type_token() {
    let lookup = std::collections::HashMap::<String, u8>::new();
    let err = factory().create(&pvc::INVALID_ARRAY_VALUE, args![ArgValue::opaque(&lookup)]);
    assert_eq!(err.message(), "Invalid array value HashMap.");
}

#[test]
fn missing_argument_leaves_placeholder() {
    let err = factory().create(&pvc::PREG_MATCH_FAILURE, args!["only regex"]);
    assert_eq!(err.message(), "preg_match failed: regex=only regex; subject=${subject};");
}

#[test]
fn every_stock_kind_has_code_and_message() {
    let factory = factory();
    let kinds = [
        &stock::LOGIC,
        &stock::DOMAIN,
        &stock::INVALID_ARGUMENT,
        &stock::LENGTH,
        &stock::BAD_FUNCTION_CALL,
        &stock::BAD_METHOD_CALL,
        &stock::RUNTIME,
        &stock::RANGE,
        &stock::OVERFLOW,
        &stock::UNDERFLOW,
        &stock::OUT_OF_BOUNDS,
        &stock::UNEXPECTED_VALUE,
    ];

    for kind in kinds {
        let err = factory.create(kind, args![]);
        assert!(err.code() > 0, "{kind}");
        assert!(err.code().to_string().starts_with(definitions::STOCK_PREFIX));
        assert!(!err.message().is_empty(), "{kind}");
    }
}

// ============================================================================
// Causes
// ============================================================================

#[test]
fn three_level_chain() {
    let factory = factory();
    let c = factory.create(&pvc::INVALID_FILENAME, args!["a?b"]);
    let b = factory.create(&pvc::INVALID_ATTRIBUTE_NAME, args!["owner", c]);
    let a = factory.create(&pvc::INVALID_ARRAY_INDEX, args![7, b]);

    let codes: Vec<_> = a.chain().map(CodedError::code).collect();
    assert_eq!(codes, [71001, 71003, 71004]);
    assert_eq!(a.root_cause().message(), "filename a?b is not valid.");
    assert_eq!(
        a.external_summary(),
        "Invalid array index 7. → Attribute owner does not exist or is not directly accessible. → filename a?b is not valid."
    );

    let source = a.source().expect("b");
    assert!(source.to_string().starts_with("[71003]"));
}

#[test]
fn cause_slot_only_accepts_errors() {
    let err = factory().create(&pvc::INVALID_ARRAY_INDEX, args![1, "not an error"]);
    assert!(err.cause().is_none());
}

#[test]
fn named_arguments_with_cause() {
    let factory = factory();
    let cause = factory.create(&stock::UNEXPECTED_VALUE, args![]);
    let err = factory.create_with(
        &pvc::PREG_MATCH_FAILURE,
        TemplateArgs::new()
            .with("subject", "abc")
            .with("regex", "/[a-/")
            .caused_by(cause),
    );

    assert_eq!(err.message(), "preg_match failed: regex=/[a-/; subject=abc;");
    assert_eq!(err.cause().map(CodedError::code), Some(112));
}

// ============================================================================
// Local Code Override
// ============================================================================

#[test]
fn zero_local_code_falls_back_to_provider() {
    let err = factory().create_with_local_code(&stock::DOMAIN, 0, args![]);
    assert_eq!(err.code(), 12);
}

#[test]
fn explicit_local_code_replaces_provider_code() {
    let err = factory().create_with_local_code(&stock::DOMAIN, 900, args![]);
    assert_eq!(err.code(), 1900);
    assert_eq!(err.message(), "Value is outside its valid domain.");
}

// ============================================================================
// Configuration Defects
// ============================================================================

#[test]
fn unregistered_type_is_reported() {
    let result = factory().try_create(&UNLISTED, args!["x"]);
    assert_eq!(
        result,
        Err(ConfigError::UnregisteredErrorType {
            error_type: "pvc::UnlistedException".into()
        })
    );
}

#[test]
#[should_panic(expected = "is not registered")]
fn unregistered_type_panics_in_create() {
    let _ = factory().create(&UNLISTED, args!["x"]);
}

#[test]
fn library_without_provider_is_reported() {
    let result = factory().try_create(&ORPHANED, args![]);
    assert!(matches!(result, Err(ConfigError::DataSourceNotFound { .. })));
}

#[test]
fn namespace_without_prefix_is_reported() {
    let prefixes = PrefixTable::from_pairs([("stock", "1")]).unwrap();
    let factory = ErrorFactory::new(
        definitions::default_registry().unwrap(),
        CodeComposer::new(Arc::new(prefixes)),
    );

    let result = factory.try_create(&pvc::INVALID_FILENAME, args!["f"]);
    assert_eq!(
        result,
        Err(ConfigError::MissingNamespacePrefix {
            namespace: "pvc".into()
        })
    );
    assert_eq!(
        result.unwrap_err().to_public(),
        "Invalid error code configuration"
    );
}

// ============================================================================
// Source Scanning
// ============================================================================

#[test]
fn scanning_locator_finds_bundled_providers() {
    init_tracing();
    let registry = Arc::new(definitions::default_registry().unwrap());
    let locator = DirectoryLocator::new(Arc::clone(&registry));

    let pvc_provider = locator.locate(&pvc::INVALID_ARRAY_INDEX).expect("pvc provider");
    assert_eq!(pvc_provider.identity().name(), "PvcErrorData");

    let stock_provider = locator.locate(&stock::RANGE).expect("stock provider");
    assert_eq!(stock_provider.identity().name(), "StockErrorData");
}

#[test]
fn scanning_factory_matches_registry_factory() {
    let scanning = definitions::scanning_factory().unwrap();
    let registered = factory();

    let a = scanning.create(&pvc::INVALID_ARRAY_INDEX, args!["(foo)"]);
    let b = registered.create(&pvc::INVALID_ARRAY_INDEX, args!["(foo)"]);
    assert_eq!(a, b);
}

#[test]
fn caching_locator_reuses_scan_results() {
    let registry = Arc::new(definitions::default_registry().unwrap());
    let locator = CachingLocator::new(DirectoryLocator::new(registry));

    let first = locator.locate(&pvc::INVALID_VERSION).unwrap();
    let second = locator.locate(&pvc::INVALID_VERSION).unwrap();
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(locator.cached(), 1);
}

#[test]
fn scanning_ignores_types_declared_outside_a_library() {
    // This file's directory holds no provider.
    let registry = ProviderRegistry::new().with_source_root(env!("CARGO_MANIFEST_DIR"));
    let locator = DirectoryLocator::new(registry);
    assert!(locator.locate(&ORPHANED).is_none());
}
