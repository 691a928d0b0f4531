//! Publishing a router while requests are being served.
//!
//! A [`TrieRouter`] is mutated without locks while it is built, so it must not be shared
//! before registration ends. [`SharedRouter`] holds the published router behind an
//! [`ArcSwap`]: readers take a snapshot, and a replacement is built off to the side and
//! swapped in as a whole, so no reader ever observes a partially built trie.

use crate::error::BuildError;
use crate::router::{RouterBuilder, TrieRouter};
use arc_swap::{ArcSwap, Guard};
use std::sync::Arc;
use tracing::info;

#[derive(Debug)]
pub struct SharedRouter<H> {
    current: ArcSwap<TrieRouter<H>>,
}

impl<H> SharedRouter<H> {
    pub fn new(router: TrieRouter<H>) -> Self {
        Self { current: ArcSwap::from_pointee(router) }
    }

    /// Returns a snapshot of the published router.
    ///
    /// The snapshot stays valid, and unchanged, across later publications.
    pub fn load(&self) -> Guard<Arc<TrieRouter<H>>> {
        self.current.load()
    }

    /// Same as [`SharedRouter::load`], as an owned reference that may be held for long.
    pub fn load_full(&self) -> Arc<TrieRouter<H>> {
        self.current.load_full()
    }

    /// Publishes `router`, replacing the current one.
    pub fn store(&self, router: TrieRouter<H>) {
        let routes = router.routes().len();
        self.current.store(Arc::new(router));
        info!(routes, "router published");
    }

    /// Builds a new router and publishes it only if every route definition was accepted.
    ///
    /// # Errors
    /// Returns the [`BuildError`] of the builder; the current router stays published then.
    pub fn rebuild(&self, builder: RouterBuilder<H>) -> Result<(), BuildError> {
        let router = builder.build()?;
        self.store(router);
        Ok(())
    }
}

impl<H> From<TrieRouter<H>> for SharedRouter<H> {
    fn from(router: TrieRouter<H>) -> Self {
        Self::new(router)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RouteError;
    use std::thread;

    #[test]
    fn test_snapshot_survives_publish() {
        let shared = SharedRouter::new(TrieRouter::builder().get("/v1/ping", "v1").build().unwrap());
        let before = shared.load_full();

        shared.rebuild(TrieRouter::builder().get("/v2/ping", "v2")).unwrap();

        assert_eq!(before.find_handler("GET", "/v1/ping", None), Ok(&"v1"));
        assert_eq!(shared.load().find_handler("GET", "/v2/ping", None), Ok(&"v2"));
        assert_eq!(shared.load().find_handler("GET", "/v1/ping", None), Err(RouteError::BadMethod));
    }

    #[test]
    fn test_failed_rebuild_keeps_current() {
        let shared: SharedRouter<&str> = TrieRouter::builder().get("/ping", "ping").build().unwrap().into();

        let error = shared.rebuild(TrieRouter::builder().get("/bad/{re:(}", "bad")).unwrap_err();
        assert_eq!(error.failures().len(), 1);
        assert_eq!(shared.load().find_handler("GET", "/ping", None), Ok(&"ping"));
    }

    #[test]
    fn test_concurrent_readers() {
        let shared = Arc::new(SharedRouter::new(
            TrieRouter::builder().get("/api/users/{uint:id}", 1_u32).build().unwrap(),
        ));

        let readers = (0..4)
            .map(|_| {
                let shared = Arc::clone(&shared);
                thread::spawn(move || {
                    for id in 0..100 {
                        let handler = *shared.load().find_handler("GET", &format!("/api/users/{id}"), None).unwrap();
                        assert!(handler == 1 || handler == 2);
                    }
                })
            })
            .collect::<Vec<_>>();

        shared.store(TrieRouter::builder().get("/api/users/{uint:id}", 2).build().unwrap());

        for reader in readers {
            reader.join().unwrap();
        }
        assert_eq!(shared.load().find_handler("GET", "/api/users/1", None), Ok(&2));
    }
}
