//! Declarative pass rules
//!
//! A rule is one row of a language's pattern table: a name, a regex, and
//! which parts of each match get wrapped in which category. Most rules wrap
//! the whole match; markup rules wrap individual capture groups so the
//! surrounding punctuation (`&lt;`, `=`) stays outside the wrap.

use super::category::Category;
use regex::Regex;
use std::fmt;

/// Predicate deciding that a match must be left unwrapped
pub type SkipFn = fn(&str) -> bool;

#[derive(Clone)]
pub struct Rule {
    name: &'static str,
    pattern: Regex,
    wraps: Vec<(usize, Category)>,
    skip: Option<SkipFn>,
}

impl Rule {
    /// Compile `pattern` into a rule wrapping the whole match as `category`
    pub fn new(
        name: &'static str,
        pattern: &str,
        category: Category,
    ) -> Result<Self, regex::Error> {
        Ok(Self::whole(name, Regex::new(pattern)?, category))
    }

    /// Rule wrapping the whole match
    pub fn whole(name: &'static str, pattern: Regex, category: Category) -> Self {
        Rule {
            name,
            pattern,
            wraps: vec![(0, category)],
            skip: None,
        }
    }

    /// Rule wrapping selected capture groups, each in its own category
    pub fn groups(name: &'static str, pattern: Regex, wraps: &[(usize, Category)]) -> Self {
        Rule {
            name,
            pattern,
            wraps: wraps.to_vec(),
            skip: None,
        }
    }

    /// Leave matches for which `skip` returns true unwrapped
    pub fn skip_when(mut self, skip: SkipFn) -> Self {
        self.skip = Some(skip);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    pub fn wraps(&self) -> &[(usize, Category)] {
        &self.wraps
    }

    pub fn should_skip(&self, matched: &str) -> bool {
        self.skip.is_some_and(|skip| skip(matched))
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("pattern", &self.pattern.as_str())
            .field("wraps", &self.wraps)
            .field("skip", &self.skip.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_invalid_pattern() {
        assert!(Rule::new("broken", "(unclosed", Category::String).is_err());
    }

    #[test]
    fn test_whole_rule_wraps_group_zero() {
        let rule = Rule::new("numbers", "[0-9]+", Category::Number).unwrap();
        assert_eq!(rule.wraps(), &[(0, Category::Number)]);
        assert!(!rule.should_skip("42"));
    }

    #[test]
    fn test_skip_predicate() {
        let rule = Rule::new("words", "[a-z]+", Category::Keyword)
            .unwrap()
            .skip_when(|word| word == "skip");
        assert!(rule.should_skip("skip"));
        assert!(!rule.should_skip("keep"));
    }
}
