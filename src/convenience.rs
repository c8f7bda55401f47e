//! Declaration and argument macros.
//!
//! # Declaring error types
//!
//! [`define_error_types!`](crate::define_error_types) expands each entry to a
//! `pub static` [`ErrorType`](crate::ErrorType). The namespace is a string
//! literal, the type name and parameter names are identifiers, and the
//! declaring file is recorded with `file!()` so a
//! [`DirectoryLocator`](crate::DirectoryLocator) can find sibling sources.
//!
//! ```rust
//! use coded_errors::define_error_types;
//!
//! define_error_types! {
//!     "billing" => {
//!         /// Card declined by the processor.
//!         CARD_DECLINED = CardDeclinedException(last_four, reason),
//!         LEDGER_LOCKED = LedgerLockedException(),
//!     }
//!     "shipping" => {
//!         NO_CARRIER = NoCarrierException(region),
//!     }
//! }
//!
//! assert_eq!(CARD_DECLINED.params(), &["last_four", "reason"]);
//! assert_eq!(NO_CARRIER.namespace(), "shipping");
//! ```
//!
//! # Passing arguments
//!
//! [`args!`](crate::args) converts each expression with
//! `ArgValue::from`, so strings, integers, booleans, errors and `None` mix
//! freely:
//!
//! ```rust
//! use coded_errors::{args, ArgValue};
//!
//! let values = args!["regex", 42, true, ()];
//! assert_eq!(values[1], ArgValue::Int(42));
//! assert_eq!(values[3], ArgValue::Null);
//! ```

// ============================================================================
// Error Type Declaration
// ============================================================================

/// Declare `pub static` error type descriptors grouped by namespace.
#[macro_export]
macro_rules! define_error_types {
    ($(
        $namespace:literal => {
            $(
                $(#[$meta:meta])*
                $static_name:ident = $type_name:ident ( $($param:ident),* $(,)? )
            ),* $(,)?
        }
    )+) => {
        $($(
            $(#[$meta])*
            pub static $static_name: $crate::ErrorType = $crate::ErrorType::const_new(
                $namespace,
                stringify!($type_name),
                &[$(stringify!($param)),*],
                file!(),
            );
        )*)+
    };
}

// ============================================================================
// Arguments
// ============================================================================

/// Build a positional argument list, converting every element to `ArgValue`.
#[macro_export]
macro_rules! args {
    () => {
        ::std::vec::Vec::<$crate::ArgValue>::new()
    };
    ($($value:expr),+ $(,)?) => {
        ::std::vec![$($crate::ArgValue::from($value)),+]
    };
}

// ============================================================================
// Tests
// ============================================================================
