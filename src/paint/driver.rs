//! Pass driver
//!
//! Escapes the source once, looks up the rule table for the language tag
//! and folds the overlap-aware wrapper over the buffer, one pass per rule.

use super::buffer::{PaintBuffer, RenderOptions};
use super::languages::LanguageRegistry;
use super::wrapper::wrap_pass;

/// Paints source text using the profiles of a [`LanguageRegistry`]
#[derive(Debug, Clone)]
pub struct Painter {
    registry: LanguageRegistry,
    options: RenderOptions,
}

impl Painter {
    /// Create a painter with the built-in languages
    pub fn new() -> Self {
        Self::with_registry(LanguageRegistry::with_defaults())
    }

    /// Create a painter with a custom registry
    pub fn with_registry(registry: LanguageRegistry) -> Self {
        Painter {
            registry,
            options: RenderOptions::default(),
        }
    }

    /// Use `options` when rendering through [`Painter::paint`]
    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    pub fn registry(&self) -> &LanguageRegistry {
        &self.registry
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Escape `source` and run every pass registered for `language`
    pub fn paint_buffer(&self, source: &str, language: &str) -> PaintBuffer {
        let buffer = PaintBuffer::from_source(source);

        let Some(profile) = self.registry.get(language) else {
            tracing::debug!(language, len = source.len(), "no profile, escaping only");
            return buffer;
        };

        let painted = profile
            .rules()
            .iter()
            .enumerate()
            .fold(buffer, |buffer, (pass, rule)| wrap_pass(buffer, rule, pass));

        tracing::debug!(
            language,
            profile = %profile.name,
            len = source.len(),
            spans = painted.spans().len(),
            "painted"
        );
        painted
    }

    /// Paint `source` and render it as markup
    pub fn paint(&self, source: &str, language: &str) -> String {
        self.paint_buffer(source, language).render(&self.options)
    }
}

impl Default for Painter {
    fn default() -> Self {
        Self::new()
    }
}
