//! Provider for the `stock` library: local codes and messages.

use super::types::*;
use crate::identity::ErrorTypeIdentity;
use crate::provider::{ErrorDataEntry, ErrorDataProvider, StaticDataProvider};
use crate::{ErrorType, Result};

/// Local codes and message templates of the `stock` library.
#[derive(Debug)]
pub struct StockErrorData(StaticDataProvider);

static ENTRIES: [ErrorDataEntry; 12] = [
    ErrorDataEntry::new(&LOGIC, 1, "Logic error."),
    ErrorDataEntry::new(&DOMAIN, 2, "Value is outside its valid domain."),
    ErrorDataEntry::new(&INVALID_ARGUMENT, 3, "Invalid argument."),
    ErrorDataEntry::new(&LENGTH, 4, "Invalid length."),
    ErrorDataEntry::new(&BAD_FUNCTION_CALL, 5, "Bad function call."),
    ErrorDataEntry::new(&BAD_METHOD_CALL, 6, "Bad method call."),
    ErrorDataEntry::new(&RUNTIME, 7, "Runtime error."),
    ErrorDataEntry::new(&RANGE, 8, "Value out of range."),
    ErrorDataEntry::new(&OVERFLOW, 9, "Container is full."),
    ErrorDataEntry::new(&UNDERFLOW, 10, "Container is empty."),
    ErrorDataEntry::new(&OUT_OF_BOUNDS, 11, "Index out of bounds."),
    ErrorDataEntry::new(&UNEXPECTED_VALUE, 12, "Unexpected value."),
];

impl StockErrorData {
    /// # Errors
    ///
    /// Only if the table above is malformed.
    pub fn new() -> Result<Self> {
        StaticDataProvider::from_entries(ErrorTypeIdentity::new("stock", "StockErrorData"), &ENTRIES)
            .map(Self)
    }
}

impl ErrorDataProvider for StockErrorData {
    fn identity(&self) -> ErrorTypeIdentity {
        self.0.identity()
    }

    fn local_code(&self, error_type: &ErrorType) -> Result<u32> {
        self.0.local_code(error_type)
    }

    fn message_template(&self, error_type: &ErrorType) -> Result<&str> {
        self.0.message_template(error_type)
    }

    fn error_types(&self) -> Vec<&'static ErrorType> {
        self.0.error_types()
    }
}
