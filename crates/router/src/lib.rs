//! A trie based router that matches path segments with typed regular expressions.
//!
//! Routes are full keys made of an HTTP method and a path. Each `/` delimited segment of the
//! path is either a literal or a path segment expression (PSE) such as `{uint:id}`, which is
//! compiled into an anchored regexp and captures its value when a request matches.
//!
//! # Lifecycle
//!
//! Routes are registered first, through [`TrieRouter::add_route`] or a [`RouterBuilder`],
//! then the router is only read: [`TrieRouter::find_handler`] and
//! [`TrieRouter::path_methods`] take `&self` and may run on any number of threads. To
//! replace the routes of a running service, build a new router and publish it through a
//! [`SharedRouter`].
//!
//! # Example
//!
//! ```
//! use micro_router::{PathValues, RouteError, TrieRouter};
//!
//! let router = TrieRouter::builder()
//!     .get("/api/users/{uint:id}", "get_user")
//!     .get("/api/users/@{word:name}", "get_user_by_name")
//!     .build()
//!     .unwrap();
//!
//! let mut values = PathValues::new();
//! let handler = router.find_handler("GET", "/api/users/42", Some(&mut values)).unwrap();
//! assert_eq!(*handler, "get_user");
//! assert_eq!(values.get("id"), Some("42"));
//!
//! assert_eq!(router.find_handler("GET", "/api/users/abc", None), Err(RouteError::NotFound));
//! assert_eq!(router.find_handler("POST", "/api/users/42", None), Err(RouteError::BadMethod));
//! assert_eq!(router.path_methods("/api/users/42"), "HEAD, GET");
//! ```

mod cache;
mod error;
mod params;
mod router;
mod shared;
mod trie;

pub mod pattern;

pub use cache::RegexCache;
pub use error::{BuildError, PatternError, RouteError, RouteFailure};
pub use params::PathValues;
pub use router::{Router, RouterBuilder, TrieRouter};
pub use shared::SharedRouter;
