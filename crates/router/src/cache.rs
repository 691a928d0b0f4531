use crate::error::PatternError;
use crate::pattern;
use regex::Regex;
use std::collections::HashMap;
use triomphe::Arc;

/// Compiled segment matchers keyed by their raw template text.
///
/// Every route that uses an identical template shares one compiled regexp. Entries are
/// never evicted; the cache lives as long as the router that owns it.
#[derive(Debug, Default)]
pub struct RegexCache {
    compiled: HashMap<String, Arc<Regex>>,
}

impl RegexCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the matcher of `template`, compiling it on first use.
    ///
    /// # Errors
    /// Returns the [`PatternError`] of a template that does not compile; nothing is cached then.
    pub fn get_or_compile(&mut self, template: &str) -> Result<Arc<Regex>, PatternError> {
        if let Some(matcher) = self.compiled.get(template) {
            return Ok(Arc::clone(matcher));
        }

        let matcher = Arc::new(pattern::compile(template)?);
        self.compiled.insert(template.to_owned(), Arc::clone(&matcher));
        Ok(matcher)
    }

    #[must_use]
    pub fn get(&self, template: &str) -> Option<&Regex> {
        self.compiled.get(template).map(|matcher| &**matcher)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.compiled.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.compiled.is_empty()
    }
}
