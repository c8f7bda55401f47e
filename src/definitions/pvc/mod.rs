//! The `pvc` library: validation and regex failures, local codes 1001-1007.

mod data;
mod types;

pub use data::PvcErrorData;
pub use types::*;
