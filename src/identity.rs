//! Type identity resolution from source text.
//!
//! Given the text of one source unit, find the first declared type and the
//! namespace enclosing it. Parsing is delegated to a [`SourceParser`], which
//! turns text into a small walkable [`SyntaxNode`] tree; [`SynParser`] is
//! the default and reads Rust source through `syn`.
//!
//! Only the **first** type declaration counts. The walk stops as soon as it
//! is found, so later declarations in the same unit are never seen.
//! Unparseable or type-less input is not an error: the resolver returns an
//! identity with an empty name.
//!
//! ```rust
//! use coded_errors::identity::TypeIdentityResolver;
//!
//! let resolver = TypeIdentityResolver::default();
//! let identity = resolver.resolve("mod pvc { pub struct PvcErrorData; pub struct Later; }");
//!
//! assert_eq!(identity.name(), "PvcErrorData");
//! assert_eq!(identity.namespace(), "pvc");
//! assert!(!resolver.resolve("fn main() {}").is_found());
//! ```

use std::fmt;
use std::ops::ControlFlow;

// ============================================================================
// Identity
// ============================================================================

/// Declared type name plus enclosing namespace; empty name means "not found".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ErrorTypeIdentity {
    name: String,
    namespace: String,
}

impl ErrorTypeIdentity {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    #[inline]
    pub fn is_found(&self) -> bool {
        !self.name.is_empty()
    }

    /// `namespace::name`, or just `name` without a namespace.
    pub fn qualified_name(&self) -> String {
        self.to_string()
    }

    /// Same name, and the namespaces agree wherever both are known.
    ///
    /// A source file that is itself a module declares no namespace, so an
    /// empty namespace on either side matches any namespace.
    pub fn matches(&self, other: &ErrorTypeIdentity) -> bool {
        self.is_found()
            && self.name == other.name
            && (self.namespace.is_empty()
                || other.namespace.is_empty()
                || self.namespace == other.namespace)
    }
}

impl fmt::Display for ErrorTypeIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.namespace.is_empty() {
            f.write_str(&self.name)
        } else {
            write!(f, "{}::{}", self.namespace, self.name)
        }
    }
}

// ============================================================================
// Syntax Tree Boundary
// ============================================================================

/// The parts of a syntax tree the resolver cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxNode {
    Namespace {
        name: String,
        children: Vec<SyntaxNode>,
    },
    TypeDecl {
        name: String,
    },
    Other,
}

/// Source text → syntax tree. `None` means the text did not parse.
pub trait SourceParser: Send + Sync {
    fn parse(&self, source: &str) -> Option<Vec<SyntaxNode>>;
}

/// Rust source parser backed by `syn`.
///
/// Inline `mod` blocks are namespaces; `struct`, `enum` and `union` items
/// are type declarations. Out-of-line `mod foo;` declarations have no body
/// to walk and count as [`SyntaxNode::Other`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SynParser;

impl SourceParser for SynParser {
    fn parse(&self, source: &str) -> Option<Vec<SyntaxNode>> {
        let file = syn::parse_file(source).ok()?;
        Some(file.items.iter().map(convert_item).collect())
    }
}

fn convert_item(item: &syn::Item) -> SyntaxNode {
    match item {
        syn::Item::Mod(module) => match &module.content {
            Some((_, items)) => SyntaxNode::Namespace {
                name: module.ident.to_string(),
                children: items.iter().map(convert_item).collect(),
            },
            None => SyntaxNode::Other,
        },
        syn::Item::Struct(item) => SyntaxNode::TypeDecl {
            name: item.ident.to_string(),
        },
        syn::Item::Enum(item) => SyntaxNode::TypeDecl {
            name: item.ident.to_string(),
        },
        syn::Item::Union(item) => SyntaxNode::TypeDecl {
            name: item.ident.to_string(),
        },
        _ => SyntaxNode::Other,
    }
}

// ============================================================================
// Resolver
// ============================================================================

/// Finds the first declared type in a source unit.
#[derive(Debug, Clone)]
pub struct TypeIdentityResolver<P = SynParser> {
    parser: P,
}

impl Default for TypeIdentityResolver<SynParser> {
    fn default() -> Self {
        Self { parser: SynParser }
    }
}

impl<P: SourceParser> TypeIdentityResolver<P> {
    pub fn new(parser: P) -> Self {
        Self { parser }
    }

    pub fn resolve(&self, source: &str) -> ErrorTypeIdentity {
        let Some(nodes) = self.parser.parse(source) else {
            return ErrorTypeIdentity::default();
        };

        let mut scope = Vec::new();
        match walk(&nodes, &mut scope) {
            ControlFlow::Break(identity) => identity,
            ControlFlow::Continue(()) => ErrorTypeIdentity::default(),
        }
    }
}

/// Depth-first, source order; breaks on the first type declaration.
fn walk<'a>(nodes: &'a [SyntaxNode], scope: &mut Vec<&'a str>) -> ControlFlow<ErrorTypeIdentity> {
    for node in nodes {
        match node {
            SyntaxNode::Namespace { name, children } => {
                scope.push(name);
                walk(children, scope)?;
                scope.pop();
            }
            SyntaxNode::TypeDecl { name } => {
                return ControlFlow::Break(ErrorTypeIdentity::new(scope.join("::"), name.as_str()));
            }
            SyntaxNode::Other => {}
        }
    }
    ControlFlow::Continue(())
}
