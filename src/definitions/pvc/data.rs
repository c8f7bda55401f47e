//! Provider for the `pvc` library: local codes and message templates.

use super::types::*;
use crate::identity::ErrorTypeIdentity;
use crate::provider::{ErrorDataEntry, ErrorDataProvider, StaticDataProvider};
use crate::{ErrorType, Result};

/// Local codes and message templates of the `pvc` library.
#[derive(Debug)]
pub struct PvcErrorData(StaticDataProvider);

static ENTRIES: [ErrorDataEntry; 7] = [
    ErrorDataEntry::new(&INVALID_ARRAY_INDEX, 1001, "Invalid array index ${index}."),
    ErrorDataEntry::new(&INVALID_ARRAY_VALUE, 1002, "Invalid array value ${value}."),
    ErrorDataEntry::new(
        &INVALID_ATTRIBUTE_NAME,
        1003,
        "Attribute ${attribute_name} does not exist or is not directly accessible.",
    ),
    ErrorDataEntry::new(&INVALID_FILENAME, 1004, "filename ${filename} is not valid."),
    ErrorDataEntry::new(&INVALID_VERSION, 1005, "Invalid version - must be at least ${min_version}"),
    ErrorDataEntry::new(
        &PREG_MATCH_FAILURE,
        1006,
        "preg_match failed: regex=${regex}; subject=${subject};",
    ),
    ErrorDataEntry::new(
        &PREG_REPLACE_FAILURE,
        1007,
        "preg_replace failed: regex=${regex}; subject=${subject}; replacement=${replacement}",
    ),
];

impl PvcErrorData {
    /// # Errors
    ///
    /// Only if the table above is malformed.
    pub fn new() -> Result<Self> {
        StaticDataProvider::from_entries(ErrorTypeIdentity::new("pvc", "PvcErrorData"), &ENTRIES).map(Self)
    }
}

impl ErrorDataProvider for PvcErrorData {
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
