//! The `stock` library: general-purpose error kinds without parameters.
//!
//! Every stock type is raised with no message variables; the only
//! meaningful argument is an optional cause:
//!
//! ```rust
//! use coded_errors::{args, definitions};
//! use coded_errors::definitions::stock::{OUT_OF_BOUNDS, RUNTIME};
//!
//! let factory = definitions::default_factory().unwrap();
//! let inner = factory.create(&OUT_OF_BOUNDS, args![]);
//! let outer = factory.create(&RUNTIME, args![inner]);
//!
//! assert_eq!(outer.code(), 17);
//! assert_eq!(outer.cause().map(|c| c.code()), Some(111));
//! ```

mod data;
mod types;

pub use data::StockErrorData;
pub use types::*;
