//! Per-language pattern tables and the registry that maps tags to them
//!
//! A [`LanguageProfile`] is an ordered list of rules. The order is part of
//! the contract: each rule only wraps text no earlier rule has claimed.
//! Tags are matched exactly; an unregistered tag paints nothing beyond the
//! escaping.

pub mod java;
pub mod markup;

use super::rule::Rule;
use std::collections::HashMap;

/// Ordered pattern table for one language family
#[derive(Debug, Clone)]
pub struct LanguageProfile {
    pub name: String,
    pub tags: Vec<String>,
    pub rules: Vec<Rule>,
}

impl LanguageProfile {
    pub fn new(name: impl Into<String>, tags: &[&str], rules: Vec<Rule>) -> Self {
        LanguageProfile {
            name: name.into(),
            tags: tags.iter().map(|tag| tag.to_string()).collect(),
            rules,
        }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }
}

/// Registry of language profiles, looked up by tag
#[derive(Debug, Clone, Default)]
pub struct LanguageRegistry {
    profiles: Vec<LanguageProfile>,
    by_tag: HashMap<String, usize>,
}

impl LanguageRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a profile under all of its tags
    ///
    /// Tags already claimed by an earlier profile are taken over.
    pub fn register(&mut self, profile: LanguageProfile) {
        let idx = self.profiles.len();
        for tag in &profile.tags {
            self.by_tag.insert(tag.clone(), idx);
        }
        self.profiles.push(profile);
    }

    /// Get the profile registered for `tag`
    pub fn get(&self, tag: &str) -> Option<&LanguageProfile> {
        self.by_tag.get(tag).map(|&idx| &self.profiles[idx])
    }

    /// Check if a tag is registered
    pub fn has(&self, tag: &str) -> bool {
        self.by_tag.contains_key(tag)
    }

    /// List all registered tags (sorted)
    pub fn list_tags(&self) -> Vec<&str> {
        let mut tags: Vec<_> = self.by_tag.keys().map(String::as_str).collect();
        tags.sort();
        tags
    }

    /// Create a registry with the Java/Groovy and XML/HTML tables
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(java::profile());
        registry.register(markup::profile());
        registry
    }
}
