//! Error types of the `pvc` library.

use crate::define_error_types;

// -----------------------------------------------------------------------------
// PVC (1001-1007) - Input validation and regex helpers
// -----------------------------------------------------------------------------
define_error_types! {
    "pvc" => {
        INVALID_ARRAY_INDEX = InvalidArrayIndexException(index),
        INVALID_ARRAY_VALUE = InvalidArrayValueException(value),
        INVALID_ATTRIBUTE_NAME = InvalidAttributeNameException(attribute_name),
        INVALID_FILENAME = InvalidFilenameException(filename),
        INVALID_VERSION = InvalidVersionException(min_version),
        /// `regex` failed to match or did not compile.
        PREG_MATCH_FAILURE = PregMatchFailureException(regex, subject),
        PREG_REPLACE_FAILURE = PregReplaceFailureException(regex, subject, replacement),
    }
}
