//! The route trie.
//!
//! Given the following route and handler:
//!
//! ```text
//! "GET /api/users/111" -> get_user
//! ```
//!
//! - the path segments are `["GET", "api", "users", "111"]`
//! - the root has depth 0, `"GET"` has depth 1 and `"111"` has depth 4
//! - if `"111"` were a pattern, `"users"` would count one pattern child
//! - the `"111"` node holds `get_user`

use crate::params::PathValues;
use regex::{Captures, Regex};
use std::borrow::Cow;
use std::collections::HashMap;
use std::iter;
use triomphe::Arc;

#[derive(Debug)]
pub(crate) struct Node<H> {
    key: String,
    matcher: Option<Arc<Regex>>,
    handler: Option<H>,
    depth: usize,
    children: Vec<Node<H>>,
    /// key -> position in `children`
    index: HashMap<String, usize>,
    /// positions of the pattern children in `children`, in insertion order
    patterns: Vec<usize>,
}

impl<H> Node<H> {
    pub(crate) fn root() -> Self {
        Self::new(String::new(), None, 0)
    }

    fn new(key: String, matcher: Option<Arc<Regex>>, depth: usize) -> Self {
        Self {
            key,
            matcher,
            handler: None,
            depth,
            children: Vec::new(),
            index: HashMap::new(),
            patterns: Vec::new(),
        }
    }

    pub(crate) fn key(&self) -> &str {
        &self.key
    }

    #[cfg(test)]
    pub(crate) fn depth(&self) -> usize {
        self.depth
    }

    pub(crate) fn handler(&self) -> Option<&H> {
        self.handler.as_ref()
    }

    /// Binds `handler` to this node, returning the handler it replaces.
    pub(crate) fn set_handler(&mut self, handler: H) -> Option<H> {
        self.handler.replace(handler)
    }

    pub(crate) fn children(&self) -> &[Node<H>] {
        &self.children
    }

    #[cfg(test)]
    pub(crate) fn pattern_count(&self) -> usize {
        self.patterns.len()
    }

    pub(crate) fn find_child(&self, key: &str) -> Option<&Node<H>> {
        self.index.get(key).map(|&position| &self.children[position])
    }

    /// Returns the child keyed by `key`, creating it with `matcher` if absent.
    pub(crate) fn child_or_insert(&mut self, key: &str, matcher: Option<Arc<Regex>>) -> &mut Node<H> {
        let position = match self.index.get(key) {
            Some(&position) => position,
            None => {
                let position = self.children.len();
                if matcher.is_some() {
                    self.patterns.push(position);
                }
                self.children.push(Node::new(key.to_owned(), matcher, self.depth + 1));
                self.index.insert(key.to_owned(), position);
                position
            }
        };
        &mut self.children[position]
    }

    /// Resolves one path segment against the children of this node.
    ///
    /// Pattern children are tried first, in insertion order, and the first whose matcher spans
    /// the whole segment wins. A pattern child with no children of its own is skipped while
    /// the path still has segments below its depth. The exact key lookup is the fallback.
    pub(crate) fn match_segment(&self, segment: &str, context: &mut MatchContext<'_>) -> Option<&Node<H>> {
        if self.patterns.is_empty() {
            return self.find_child(segment);
        }

        for &position in &self.patterns {
            let child = &self.children[position];
            if context.segments > child.depth && child.children.is_empty() {
                continue;
            }
            let Some(matcher) = child.matcher.as_deref() else {
                continue;
            };

            if context.wants_values() {
                if let Some(captures) = matcher.captures(segment) {
                    context.record(matcher, &captures);
                    return Some(child);
                }
            } else if matcher.is_match(segment) {
                return Some(child);
            }
        }

        self.find_child(segment)
    }
}

/// Per lookup state threaded through the traversal.
#[derive(Debug)]
pub(crate) struct MatchContext<'v> {
    /// number of segments of the whole route key
    segments: usize,
    /// capture groups seen so far, across segments
    captured: usize,
    values: Option<&'v mut PathValues>,
}

impl<'v> MatchContext<'v> {
    pub(crate) fn new(segments: usize, values: Option<&'v mut PathValues>) -> Self {
        Self { segments, captured: 0, values }
    }

    fn wants_values(&self) -> bool {
        self.values.is_some()
    }

    fn record(&mut self, matcher: &Regex, captures: &Captures<'_>) {
        let Some(values) = self.values.as_deref_mut() else {
            return;
        };

        for (group, name) in captures.iter().zip(matcher.capture_names()).skip(1) {
            self.captured += 1;
            let Some(group) = group else {
                continue;
            };
            values.set(format!("_{}", self.captured), group.as_str());
            if let Some(name) = name {
                values.add(name, group.as_str());
            }
        }
    }
}

/// A route key split into its segments; the first segment carries the method.
#[derive(Debug)]
pub(crate) struct Segments<'a> {
    head: Cow<'a, str>,
    tail: Vec<&'a str>,
}

impl<'a> Segments<'a> {
    /// Splits `method + path`, with trailing slashes removed, on `/`.
    pub(crate) fn new(method: &'a str, path: &'a str) -> Self {
        let mut parts = path.trim_end_matches('/').split('/');
        let head = match parts.next() {
            Some("") | None => Cow::Borrowed(method),
            Some(first) => Cow::Owned(format!("{method}{first}")),
        };
        Self { head, tail: parts.collect() }
    }

    pub(crate) fn len(&self) -> usize {
        self.tail.len() + 1
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &str> {
        iter::once(self.head.as_ref()).chain(self.tail.iter().copied())
    }
}
