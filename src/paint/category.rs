//! Token categories
//!
//! A category is the semantic label a wrapped span carries. It ends up as
//! the second CSS class of the wrap (`<span class="token keyword">`), so the
//! string form is part of the output contract.

use serde::Serialize;
use std::fmt;

/// Named class of token a pass can wrap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Comment,
    String,
    Keyword,
    Number,
    Annotation,
    ClassName,
    Tag,
    AttrName,
}

impl Category {
    /// All categories, in declaration order
    pub const ALL: [Category; 8] = [
        Category::Comment,
        Category::String,
        Category::Keyword,
        Category::Number,
        Category::Annotation,
        Category::ClassName,
        Category::Tag,
        Category::AttrName,
    ];

    /// The class name used in rendered markup
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Comment => "comment",
            Category::String => "string",
            Category::Keyword => "keyword",
            Category::Number => "number",
            Category::Annotation => "annotation",
            Category::ClassName => "class-name",
            Category::Tag => "tag",
            Category::AttrName => "attr-name",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_names_are_kebab_case() {
        assert_eq!(Category::ClassName.as_str(), "class-name");
        assert_eq!(Category::AttrName.to_string(), "attr-name");
        assert_eq!(Category::Comment.to_string(), "comment");
    }

    #[test]
    fn test_serializes_like_display() {
        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category));
        }
    }
}
