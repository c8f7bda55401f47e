//! Parameter binding: argument values → template substitutions + cause.
//!
//! Two entry points:
//!
//! - [`bind`] is positional. The declared parameter names of the error type
//!   are zipped, in order, with the supplied arguments; the argument right
//!   after the message variables may be the cause.
//! - [`bind_named`] takes a [`TemplateArgs`] request whose values are already
//!   keyed by placeholder name, so nothing depends on argument order.
//!
//! # Sanitization
//!
//! Only scalar values reach a message verbatim:
//!
//! | value          | rendered as                      |
//! |----------------|----------------------------------|
//! | string         | unchanged                        |
//! | integer        | decimal text                     |
//! | boolean        | `true` / `false`                 |
//! | anything else  | its type-name token              |
//!
//! A float renders as `float`, a list as `array`, a coded error as its type
//! name, an opaque value as its short Rust type name. Compound values never
//! leak into messages.

use crate::template::SubstitutionMap;
use crate::CodedError;
use std::borrow::Cow;

// ============================================================================
// Argument Values
// ============================================================================

/// One constructor-style argument handed to the factory.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
    Str(String),
    Int(i64),
    Bool(bool),
    Float(f64),
    List(Vec<ArgValue>),
    /// An error, eligible to become the cause.
    Error(Box<CodedError>),
    /// A value only known by its type name.
    Opaque(&'static str),
    /// Absent value; in the cause slot it means "no cause".
    Null,
}

impl ArgValue {
    /// Wrap any value as an opaque argument carrying only its type name.
    ///
    /// ```rust
    /// use coded_errors::ArgValue;
    ///
    /// let map = std::collections::HashMap::<u8, u8>::new();
    /// assert_eq!(ArgValue::opaque(&map), ArgValue::Opaque("HashMap"));
    /// ```
    pub fn opaque<T: ?Sized>(_value: &T) -> Self {
        Self::Opaque(short_type_name(std::any::type_name::<T>()))
    }

    /// Token used in place of a non-scalar value.
    pub fn type_token(&self) -> &'static str {
        match self {
            Self::Str(_) => "string",
            Self::Int(_) => "integer",
            Self::Bool(_) => "boolean",
            Self::Float(_) => "float",
            Self::List(_) => "array",
            Self::Error(err) => err.error_type().name(),
            Self::Opaque(name) => *name,
            Self::Null => "null",
        }
    }

    /// Text this value contributes to a rendered message.
    pub fn sanitize(&self) -> Cow<'_, str> {
        match self {
            Self::Str(s) => Cow::Borrowed(s.as_str()),
            Self::Int(i) => Cow::Owned(i.to_string()),
            Self::Bool(b) => Cow::Borrowed(if *b { "true" } else { "false" }),
            other => Cow::Borrowed(other.type_token()),
        }
    }
}

/// `alloc::collections::BTreeMap<u8, String>` → `BTreeMap`.
fn short_type_name(full: &'static str) -> &'static str {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

impl From<&str> for ArgValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for ArgValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&String> for ArgValue {
    fn from(value: &String) -> Self {
        Self::Str(value.clone())
    }
}

impl From<Cow<'_, str>> for ArgValue {
    fn from(value: Cow<'_, str>) -> Self {
        Self::Str(value.into_owned())
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),+) => {
        $(
            impl From<$ty> for ArgValue {
                fn from(value: $ty) -> Self {
                    Self::Int(i64::from(value))
                }
            }
        )+
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

macro_rules! impl_from_wide_int {
    ($($ty:ty),+) => {
        $(
            impl From<$ty> for ArgValue {
                /// Values beyond `i64` keep their digits as a string.
                fn from(value: $ty) -> Self {
                    i64::try_from(value).map_or_else(|_| Self::Str(value.to_string()), Self::Int)
                }
            }
        )+
    };
}

impl_from_wide_int!(u64, usize, isize, i128, u128);

impl From<bool> for ArgValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f32> for ArgValue {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<f64> for ArgValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<CodedError> for ArgValue {
    fn from(value: CodedError) -> Self {
        Self::Error(Box::new(value))
    }
}

impl From<Option<CodedError>> for ArgValue {
    fn from(value: Option<CodedError>) -> Self {
        value.map_or(Self::Null, Self::from)
    }
}

impl From<()> for ArgValue {
    fn from(_: ()) -> Self {
        Self::Null
    }
}

impl<T: Into<ArgValue>> From<Vec<T>> for ArgValue {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

// ============================================================================
// Binding
// ============================================================================

/// Result of binding arguments to a template.
#[derive(Debug, Default)]
pub struct Binding {
    pub substitutions: SubstitutionMap,
    pub cause: Option<CodedError>,
}

/// Positional binding.
///
/// Consumes `var_count` arguments as message variables, paired with the
/// first `var_count` entries of `param_names`. The next argument becomes the
/// cause if it is an error; a null there means no cause; any other value
/// there is dropped, as is every argument after it.
///
/// A missing argument or parameter name leaves its placeholder unbound.
pub fn bind(param_names: &[&str], args: Vec<ArgValue>, var_count: usize) -> Binding {
    let mut args = args.into_iter();
    let mut substitutions = SubstitutionMap::with_capacity(var_count);

    for index in 0..var_count {
        let value = args.next();
        if let (Some(name), Some(value)) = (param_names.get(index), value) {
            substitutions.insert(name, value.sanitize());
        }
    }

    let cause = match args.next() {
        Some(ArgValue::Error(err)) => Some(*err),
        Some(ArgValue::Null) | None => None,
        Some(other) => {
            tracing::trace!(token = other.type_token(), "discarding non-error argument in cause position");
            None
        }
    };

    let extra = args.count();
    if extra > 0 {
        tracing::trace!(extra, "discarding trailing arguments");
    }

    Binding {
        substitutions,
        cause,
    }
}

/// Named-argument request for [`bind_named`].
///
/// ```rust
/// use coded_errors::TemplateArgs;
///
/// let args = TemplateArgs::new()
///     .with("regex", "/[a-/")
///     .with("subject", "abc");
/// assert_eq!(args.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemplateArgs {
    values: Vec<(Cow<'static, str>, ArgValue)>,
    cause: Option<CodedError>,
}

impl TemplateArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a value to the placeholder `name`.
    #[must_use]
    pub fn with(mut self, name: impl Into<Cow<'static, str>>, value: impl Into<ArgValue>) -> Self {
        self.values.push((name.into(), value.into()));
        self
    }

    #[must_use]
    pub fn caused_by(mut self, cause: CodedError) -> Self {
        self.cause = Some(cause);
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Bind by placeholder name. Names absent from the template are harmless.
pub fn bind_named(args: TemplateArgs) -> Binding {
    let mut substitutions = SubstitutionMap::with_capacity(args.values.len());
    for (name, value) in &args.values {
        substitutions.insert(name, value.sanitize());
    }

    Binding {
        substitutions,
        cause: args.cause,
    }
}
