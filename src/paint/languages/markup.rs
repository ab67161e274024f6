//! XML and HTML
//!
//! Pass order: comments, tag names, attribute pairs. The patterns run on
//! escaped text, so they look for `&lt;`, `&gt;` and `&quot;` rather than
//! the raw characters.

use crate::paint::category::Category;
use crate::paint::languages::LanguageProfile;
use crate::paint::rule::Rule;
use once_cell::sync::Lazy;
use regex::Regex;

static COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)&lt;!--.*?--&gt;").unwrap());

static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"(&lt;/?)([a-zA-Z][a-zA-Z0-9-]*)").unwrap());

static ATTRIBUTE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([a-zA-Z_-][a-zA-Z0-9_-]*)=(&quot;[^\r\n]*?&quot;)").unwrap());

pub fn profile() -> LanguageProfile {
    LanguageProfile::new(
        "markup",
        &["xml", "html"],
        vec![
            Rule::whole("comments", COMMENT.clone(), Category::Comment),
            Rule::groups("tags", TAG.clone(), &[(2, Category::Tag)]),
            Rule::groups(
                "attributes",
                ATTRIBUTE.clone(),
                &[(1, Category::AttrName), (2, Category::String)],
            ),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pass_order() {
        let names: Vec<_> = profile().rules().iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["comments", "tags", "attributes"]);
    }

    #[test]
    fn test_tag_pattern_captures_name_only() {
        let caps = TAG.captures("&lt;/beans&gt;").unwrap();
        assert_eq!(&caps[1], "&lt;/");
        assert_eq!(&caps[2], "beans");
    }

    #[test]
    fn test_tag_pattern_ignores_declarations() {
        assert!(TAG.find("&lt;!-- x --&gt;").is_none());
        assert!(TAG.find("&lt;?xml").is_none());
    }

    #[test]
    fn test_attribute_value_is_lazy() {
        let caps = ATTRIBUTE
            .captures("id=&quot;a&quot; class=&quot;b&quot;")
            .unwrap();
        assert_eq!(&caps[1], "id");
        assert_eq!(&caps[2], "&quot;a&quot;");
    }
}
