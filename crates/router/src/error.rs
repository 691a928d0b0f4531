//! Error types produced by the router.
//!
//! Two families exist:
//! - [`RouteError`] is returned at request time when no handler resolves, it carries the
//!   HTTP status the caller should respond with.
//! - [`PatternError`] and [`BuildError`] are returned at registration time when a route
//!   definition can not be compiled.

use http::StatusCode;
use thiserror::Error;

/// A routing failure for a single request.
///
/// Both variants are harmless to the router itself; they only terminate the current request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RouteError {
    /// the path did not reach a resource handler
    #[error("That route was not found.")]
    NotFound,

    /// the path did not match the given HTTP method
    #[error("That method is not supported.")]
    BadMethod,
}

impl RouteError {
    /// The HTTP status a response for this error should carry.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::BadMethod => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    /// The human readable message of this error.
    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            Self::NotFound => "That route was not found.",
            Self::BadMethod => "That method is not supported.",
        }
    }
}

/// A path segment expression that can not be compiled into a matcher.
#[derive(Debug, Error)]
pub enum PatternError {
    #[error("invalid pattern '{template}': {source}")]
    InvalidRegex {
        template: String,
        #[source]
        source: regex::Error,
    },

    #[error("unknown placeholder type '{kind}' in pattern '{template}'")]
    UnknownPlaceholder { template: String, kind: String },
}

impl PatternError {
    pub fn invalid_regex<S: ToString>(template: S, source: regex::Error) -> Self {
        Self::InvalidRegex { template: template.to_string(), source }
    }

    pub fn unknown_placeholder<S: ToString, K: ToString>(template: S, kind: K) -> Self {
        Self::UnknownPlaceholder { template: template.to_string(), kind: kind.to_string() }
    }

    /// The raw segment template that failed to compile.
    #[must_use]
    pub fn template(&self) -> &str {
        match self {
            Self::InvalidRegex { template, .. } | Self::UnknownPlaceholder { template, .. } => template,
        }
    }
}

/// One rejected route definition collected by [`crate::RouterBuilder::build`].
#[derive(Debug, Error)]
#[error("invalid route '{method} {path}': {source}")]
pub struct RouteFailure {
    method: String,
    path: String,
    #[source]
    source: PatternError,
}

impl RouteFailure {
    pub(crate) fn new(method: String, path: String, source: PatternError) -> Self {
        Self { method, path, source }
    }

    #[must_use]
    pub fn method(&self) -> &str {
        &self.method
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub fn pattern_error(&self) -> &PatternError {
        &self.source
    }
}

/// Every route definition rejected while building a router.
#[derive(Debug, Error)]
#[error("{} route definition(s) rejected, first: {}", .failures.len(), .failures[0])]
pub struct BuildError {
    failures: Vec<RouteFailure>,
}

impl BuildError {
    /// `failures` must not be empty
    pub(crate) fn new(failures: Vec<RouteFailure>) -> Self {
        debug_assert!(!failures.is_empty());
        Self { failures }
    }

    #[must_use]
    pub fn failures(&self) -> &[RouteFailure] {
        &self.failures
    }
}
