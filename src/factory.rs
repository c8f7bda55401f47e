//! Error factory: the one place a [`CodedError`] is assembled.
//!
//! Every construction runs the same pipeline:
//!
//! 1. locate the provider for the error type
//! 2. read its template and local code
//! 3. compose the full code from the namespace prefix
//! 4. bind the arguments to the template's placeholders
//! 5. render the message
//!
//! # Fallible vs. panicking
//!
//! Each `try_*` method returns the [`ConfigError`](crate::ConfigError) that
//! stopped the pipeline. The plain methods panic with it instead: a failure
//! there means an error library is mispackaged, and raising an error must
//! not itself need error handling at every call site. The split mirrors
//! `ErrorType::const_new`, which panics where a checked constructor would
//! return `Err`.

use crate::binder::{self, ArgValue, Binding, TemplateArgs};
use crate::composer::CodeComposer;
use crate::locator::DataSourceLocator;
use crate::provider::ErrorDataProvider;
use crate::{template, CodedError, ConfigError, ErrorType, Result};
use std::fmt;
use std::sync::Arc;

/// Builds [`CodedError`]s from error types and arguments.
pub struct ErrorFactory {
    locator: Box<dyn DataSourceLocator>,
    composer: CodeComposer,
}

impl ErrorFactory {
    pub fn new(locator: impl DataSourceLocator + 'static, composer: CodeComposer) -> Self {
        Self {
            locator: Box::new(locator),
            composer,
        }
    }

    #[inline]
    pub fn composer(&self) -> &CodeComposer {
        &self.composer
    }

    #[inline]
    pub fn locator(&self) -> &dyn DataSourceLocator {
        self.locator.as_ref()
    }

    /// Construct from positional arguments.
    ///
    /// # Errors
    ///
    /// - `DataSourceNotFound` if no provider covers the type's library
    /// - `UnregisteredErrorType` if the provider has no entry for the type
    /// - any composition error from [`CodeComposer::compose`]
    #[tracing::instrument(level = "debug", skip_all, fields(error_type = %error_type))]
    pub fn try_create(&self, error_type: &'static ErrorType, args: Vec<ArgValue>) -> Result<CodedError> {
        self.assemble(error_type, 0, |params, var_count| binder::bind(params, args, var_count))
    }

    /// Infallible [`try_create`](Self::try_create).
    ///
    /// # Panics
    ///
    /// Panics with the configuration error if the pipeline fails.
    pub fn create(&self, error_type: &'static ErrorType, args: Vec<ArgValue>) -> CodedError {
        unwrap_config(self.try_create(error_type, args))
    }

    /// Construct from arguments keyed by placeholder name.
    ///
    /// # Errors
    ///
    /// Same as [`try_create`](Self::try_create).
    #[tracing::instrument(level = "debug", skip_all, fields(error_type = %error_type))]
    pub fn try_create_with(&self, error_type: &'static ErrorType, args: TemplateArgs) -> Result<CodedError> {
        self.assemble(error_type, 0, |_, _| binder::bind_named(args))
    }

    /// Infallible [`try_create_with`](Self::try_create_with).
    ///
    /// # Panics
    ///
    /// Panics with the configuration error if the pipeline fails.
    pub fn create_with(&self, error_type: &'static ErrorType, args: TemplateArgs) -> CodedError {
        unwrap_config(self.try_create_with(error_type, args))
    }

    /// Construct with an explicit local code.
    ///
    /// A `local_code` of 0 means "no override" and uses the provider's code.
    /// The template still comes from the provider, so the type must be
    /// registered either way.
    ///
    /// # Errors
    ///
    /// Same as [`try_create`](Self::try_create).
    #[tracing::instrument(level = "debug", skip_all, fields(error_type = %error_type, local_code = local_code))]
    pub fn try_create_with_local_code(
        &self,
        error_type: &'static ErrorType,
        local_code: u32,
        args: Vec<ArgValue>,
    ) -> Result<CodedError> {
        self.assemble(error_type, local_code, |params, var_count| {
            binder::bind(params, args, var_count)
        })
    }

    /// Infallible [`try_create_with_local_code`](Self::try_create_with_local_code).
    ///
    /// # Panics
    ///
    /// Panics with the configuration error if the pipeline fails.
    pub fn create_with_local_code(
        &self,
        error_type: &'static ErrorType,
        local_code: u32,
        args: Vec<ArgValue>,
    ) -> CodedError {
        unwrap_config(self.try_create_with_local_code(error_type, local_code, args))
    }

    fn provider(&self, error_type: &ErrorType) -> Result<Arc<dyn ErrorDataProvider>> {
        self.locator
            .locate(error_type)
            .ok_or_else(|| ConfigError::DataSourceNotFound {
                error_type: error_type.qualified_name(),
            })
    }

    fn assemble(
        &self,
        error_type: &'static ErrorType,
        local_code: u32,
        bind: impl FnOnce(&[&str], usize) -> Binding,
    ) -> Result<CodedError> {
        let provider = self.provider(error_type)?;
        let template = provider.message_template(error_type)?;

        let local_code = match local_code {
            0 => provider.local_code(error_type)?,
            explicit => explicit,
        };
        let code = self.composer.compose(error_type.namespace(), local_code)?;

        let var_count = provider.variable_count(template);
        let binding = bind(error_type.params(), var_count);
        let message = template::render(template, &binding.substitutions);

        tracing::debug!(code, has_cause = binding.cause.is_some(), "error constructed");
        Ok(CodedError::from_parts(error_type, code, message, binding.cause))
    }
}

fn unwrap_config(result: Result<CodedError>) -> CodedError {
    match result {
        Ok(err) => err,
        Err(config) => panic!("error library misconfigured: {config}"),
    }
}

impl fmt::Debug for ErrorFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorFactory")
            .field("composer", &self.composer)
            .finish_non_exhaustive()
    }
}
