//! Route registration and lookup.
//!
//! [`TrieRouter`] takes full routes, an HTTP method followed by a path, and inserts them in a
//! trie whose segments are either literals or [path segment expressions](crate::pattern).
//!
//! Some sample routes:
//!
//! ```text
//! GET /api/users/@{word:name}
//! GET /api/users/{uint:id}/*
//! POST /api/users/{uint:id}/profile
//! DELETE /api/users/{date:from}/to/{date:to}
//! GET /api/cities/{geo:location}
//! PUT /api/investments/\${float:dollars}/fund
//! GET /api/todos/month/{re:([0][1-9]|[1][0-2])}
//! ```
//!
//! # Precedence
//!
//! At every level the pattern children are tried before the literal ones. A broad pattern
//! registered at the same position as a literal shadows it: with `GET /x/{word:v}` and
//! `GET /x/fixed`, a request for `/x/fixed` resolves to the `{word:v}` route.

use crate::cache::RegexCache;
use crate::error::{BuildError, PatternError, RouteError, RouteFailure};
use crate::params::PathValues;
use crate::pattern;
use crate::trie::{MatchContext, Node, Segments};
use http::header::InvalidHeaderValue;
use http::{HeaderValue, Method};
use tracing::{debug, trace, warn};

const HEAD: &str = "HEAD";
const GET: &str = "GET";

/// A routing engine: registers routes and finds the handler of a request.
pub trait Router<H> {
    /// Registers `handler` for `method` and `path`, replacing the handler of an identical route.
    ///
    /// # Errors
    /// Returns a [`PatternError`] when a segment of `path` does not compile; the router is
    /// left unchanged then.
    fn add_route(&mut self, method: &str, path: &str, handler: H) -> Result<(), PatternError>;

    /// Finds the handler of `method` and `path`, storing the captured path values in `values`.
    ///
    /// # Errors
    /// Returns [`RouteError::BadMethod`] when the method or the first path segment does not
    /// resolve, [`RouteError::NotFound`] for any other miss.
    fn find_handler(&self, method: &str, path: &str, values: Option<&mut PathValues>) -> Result<&H, RouteError>;

    /// Returns a comma separated list of the methods that resolve `path`, suitable for an
    /// `Allow` header.
    fn path_methods(&self, path: &str) -> String;
}

/// The default [`Router`], a trie that can store regular expressions.
#[derive(Debug)]
pub struct TrieRouter<H> {
    root: Node<H>,
    cache: RegexCache,
    /// distinct registered methods, in first seen order
    methods: Vec<String>,
}

impl<H> Default for TrieRouter<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> TrieRouter<H> {
    #[must_use]
    pub fn new() -> Self {
        Self { root: Node::root(), cache: RegexCache::new(), methods: Vec::new() }
    }

    /// Creates a new router builder
    #[must_use]
    pub fn builder() -> RouterBuilder<H> {
        RouterBuilder::new()
    }

    /// Breaks `method + path` into segments and inserts them in the trie.
    ///
    /// Every pattern segment is compiled before the trie is touched.
    ///
    /// # Errors
    /// Returns the [`PatternError`] of the first segment that does not compile.
    pub fn add_route(&mut self, method: &str, path: &str, handler: H) -> Result<(), PatternError> {
        let segments = Segments::new(method, path);
        let matchers = segments
            .iter()
            .map(|segment| {
                if pattern::is_pattern(segment) { self.cache.get_or_compile(segment).map(Some) } else { Ok(None) }
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut node = &mut self.root;
        for (segment, matcher) in segments.iter().zip(matchers) {
            node = node.child_or_insert(segment, matcher);
        }

        if node.set_handler(handler).is_some() {
            debug!(method, path, "route handler replaced");
        } else {
            debug!(method, path, "route registered");
        }

        if !self.methods.iter().any(|m| m == method) {
            self.methods.push(method.to_owned());
        }
        Ok(())
    }

    /// Finds the handler that matches the requested route.
    ///
    /// `HEAD` requests resolve against the `GET` routes.
    ///
    /// # Errors
    /// Returns [`RouteError::BadMethod`] when the method or the first path segment does not
    /// resolve, [`RouteError::NotFound`] for any other miss, including a route prefix that has
    /// no handler of its own.
    pub fn find_handler(&self, method: &str, path: &str, values: Option<&mut PathValues>) -> Result<&H, RouteError> {
        let method = if method == HEAD { GET } else { method };

        self.lookup(method, path, values)
            .and_then(|node| node.handler().ok_or(RouteError::NotFound))
            .inspect_err(|e| trace!(method, path, error = %e, "route lookup failed"))
    }

    /// Lists the methods that resolve `path`.
    ///
    /// `HEAD` always comes first, followed by the matching methods in registration order. This
    /// only lists the methods, it says nothing about whether they are allowed.
    pub fn path_methods(&self, path: &str) -> String {
        let mut methods = String::from(HEAD);
        for method in &self.methods {
            if self.lookup(method, path, None).is_ok_and(|node| node.handler().is_some()) {
                methods.push_str(", ");
                methods.push_str(method);
            }
        }
        methods
    }

    /// Same as [`TrieRouter::path_methods`], as an `Allow` header value.
    ///
    /// # Errors
    /// Fails only if a registered method is not a valid header value.
    pub fn allow_header(&self, path: &str) -> Result<HeaderValue, InvalidHeaderValue> {
        HeaderValue::try_from(self.path_methods(path))
    }

    /// The distinct registered methods, in first seen order.
    #[must_use]
    pub fn methods(&self) -> &[String] {
        &self.methods
    }

    /// The compiled matchers shared by the routes of this router.
    #[must_use]
    pub fn cache(&self) -> &RegexCache {
        &self.cache
    }

    /// Every registered route as `METHOD /path`, depth first in insertion order.
    #[must_use]
    pub fn routes(&self) -> Vec<String> {
        fn collect<H>(node: &Node<H>, prefix: &str, routes: &mut Vec<String>) {
            for child in node.children() {
                let route = if prefix.is_empty() {
                    child.key().to_owned()
                } else {
                    format!("{prefix}/{}", child.key())
                };
                if child.handler().is_some() {
                    routes.push(match route.split_once('/') {
                        Some((method, path)) => format!("{method} /{path}"),
                        None => format!("{route} /"),
                    });
                }
                collect(child, &route, routes);
            }
        }

        let mut routes = Vec::new();
        collect(&self.root, "", &mut routes);
        routes
    }

    fn lookup(&self, method: &str, path: &str, values: Option<&mut PathValues>) -> Result<&Node<H>, RouteError> {
        let segments = Segments::new(method, path);
        let mut context = MatchContext::new(segments.len(), values);

        let mut node = &self.root;
        for (i, segment) in segments.iter().enumerate() {
            node = match node.match_segment(segment, &mut context) {
                Some(next) => next,
                None if i <= 1 => return Err(RouteError::BadMethod),
                None => return Err(RouteError::NotFound),
            };
        }
        Ok(node)
    }
}

impl<H> Router<H> for TrieRouter<H> {
    fn add_route(&mut self, method: &str, path: &str, handler: H) -> Result<(), PatternError> {
        TrieRouter::add_route(self, method, path, handler)
    }

    fn find_handler(&self, method: &str, path: &str, values: Option<&mut PathValues>) -> Result<&H, RouteError> {
        TrieRouter::find_handler(self, method, path, values)
    }

    fn path_methods(&self, path: &str) -> String {
        TrieRouter::path_methods(self, path)
    }
}

/// Collects route definitions and builds a [`TrieRouter`] from them.
///
/// ```
/// use micro_router::TrieRouter;
///
/// let router = TrieRouter::builder()
///     .get("/api/users/{uint:id}", "get_user")
///     .put("/api/users/{uint:id}", "update_user")
///     .build()
///     .unwrap();
///
/// assert_eq!(router.find_handler("PUT", "/api/users/7", None), Ok(&"update_user"));
/// ```
#[derive(Debug)]
pub struct RouterBuilder<H> {
    routes: Vec<RouteDefinition<H>>,
}

#[derive(Debug)]
struct RouteDefinition<H> {
    method: String,
    path: String,
    handler: H,
}

macro_rules! method_route {
    ($method:ident, $upper_case_method:ident) => {
        pub fn $method(self, path: impl Into<String>, handler: H) -> Self {
            self.route(Method::$upper_case_method, path, handler)
        }
    };
}

impl<H> RouterBuilder<H> {
    fn new() -> Self {
        Self { routes: Vec::new() }
    }

    pub fn route(mut self, method: impl AsRef<str>, path: impl Into<String>, handler: H) -> Self {
        self.routes.push(RouteDefinition { method: method.as_ref().to_owned(), path: path.into(), handler });
        self
    }

    method_route!(get, GET);
    method_route!(post, POST);
    method_route!(put, PUT);
    method_route!(delete, DELETE);
    method_route!(patch, PATCH);
    method_route!(options, OPTIONS);
    method_route!(connect, CONNECT);
    method_route!(trace, TRACE);

    /// Registers every route in definition order.
    ///
    /// # Errors
    /// Returns a [`BuildError`] listing every definition that failed to compile.
    pub fn build(self) -> Result<TrieRouter<H>, BuildError> {
        let mut router = TrieRouter::new();
        let mut failures = Vec::new();

        for RouteDefinition { method, path, handler } in self.routes {
            if let Err(e) = router.add_route(&method, &path, handler) {
                warn!(method = %method, path = %path, cause = %e, "route definition rejected");
                failures.push(RouteFailure::new(method, path, e));
            }
        }

        if failures.is_empty() { Ok(router) } else { Err(BuildError::new(failures)) }
    }
}
