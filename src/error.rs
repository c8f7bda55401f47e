//! Configuration errors raised while constructing a [`CodedError`](crate::CodedError).
//!
//! Every variant here signals a packaging defect in an error library, not a
//! recoverable runtime condition: a type missing from its provider, a library
//! without a provider, or a namespace without a prefix. The fallible factory
//! methods return them; the infallible ones panic with them.

use thiserror::Error;

/// Defects detected while locating data or composing a code.
///
/// **WARNING**: the `Display` output names namespaces and error types. For
/// untrusted boundaries use [`ConfigError::to_public`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The provider owning the library has no entry for this type.
    #[error("error type {error_type} is not registered with its data provider")]
    UnregisteredErrorType { error_type: String },

    /// No data provider could be located for this type.
    #[error("no error data provider found for {error_type}")]
    DataSourceNotFound { error_type: String },

    /// The prefix table has no entry for the namespace.
    #[error("no code prefix configured for namespace '{namespace}'")]
    MissingNamespacePrefix { namespace: String },

    /// A prefix is empty, contains non-digits, or starts with zero.
    #[error("invalid code prefix '{prefix}' for namespace '{namespace}'")]
    InvalidPrefix { namespace: String, prefix: String },

    /// The same namespace was given two prefixes.
    #[error("namespace '{namespace}' has more than one code prefix")]
    DuplicateNamespace { namespace: String },

    /// A provider entry uses the reserved local code 0.
    #[error("error type {error_type} uses reserved local code 0")]
    ZeroLocalCode { error_type: String },

    /// A provider lists the same type twice.
    #[error("error type {error_type} is listed twice by its data provider")]
    DuplicateErrorType { error_type: String },

    /// A local code has more digits than the configured fixed width.
    #[error("local code {code} in namespace '{namespace}' exceeds {width} digits")]
    LocalCodeOutOfRange {
        namespace: String,
        code: u32,
        width: u8,
    },

    /// `prefix ++ local_code` does not fit in a `u64`.
    #[error("composed code {prefix}{local_code} overflows")]
    CodeOverflow { prefix: String, local_code: u32 },

    /// Two error types compose to the same numeric code.
    #[error("error code {code} is shared by {first} and {second}")]
    CodeCollision {
        code: u64,
        first: String,
        second: String,
    },
}

impl ConfigError {
    /// Generic message that names no namespace, prefix or type.
    pub fn to_public(&self) -> &'static str {
        match self {
            Self::UnregisteredErrorType { .. }
            | Self::DataSourceNotFound { .. }
            | Self::ZeroLocalCode { .. }
            | Self::DuplicateErrorType { .. } => "Invalid error library packaging",
            Self::MissingNamespacePrefix { .. }
            | Self::InvalidPrefix { .. }
            | Self::DuplicateNamespace { .. } => "Invalid error code configuration",
            Self::LocalCodeOutOfRange { .. }
            | Self::CodeOverflow { .. }
            | Self::CodeCollision { .. } => "Invalid error code format",
        }
    }
}
