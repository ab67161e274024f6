//! Output formats for painted buffers
//!
//! - `html`: the escaped text with `<span>` wraps
//! - `json` / `yaml`: the escaped text plus the span list
//! - `plain`: the original, unescaped text

pub mod registry;

pub use registry::{FormatError, FormatRegistry, Formatter};

use crate::paint::{unescape, PaintBuffer, RenderOptions};

pub struct HtmlFormatter;

impl Formatter for HtmlFormatter {
    fn name(&self) -> &str {
        "html"
    }

    fn serialize(
        &self,
        buffer: &PaintBuffer,
        options: &RenderOptions,
    ) -> Result<String, FormatError> {
        Ok(buffer.render(options))
    }

    fn description(&self) -> &str {
        "Escaped text with <span> wraps"
    }
}

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(
        &self,
        buffer: &PaintBuffer,
        _options: &RenderOptions,
    ) -> Result<String, FormatError> {
        serde_json::to_string_pretty(buffer)
            .map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "Escaped text and spans as JSON"
    }
}

pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn serialize(
        &self,
        buffer: &PaintBuffer,
        _options: &RenderOptions,
    ) -> Result<String, FormatError> {
        serde_yaml::to_string(buffer).map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "Escaped text and spans as YAML"
    }
}

pub struct PlainFormatter;

impl Formatter for PlainFormatter {
    fn name(&self) -> &str {
        "plain"
    }

    fn serialize(
        &self,
        buffer: &PaintBuffer,
        _options: &RenderOptions,
    ) -> Result<String, FormatError> {
        Ok(unescape(buffer.text()))
    }

    fn description(&self) -> &str {
        "Unmarked source text"
    }
}
