//! # codepaint
//!
//! A tag-aware token painter: escapes a code snippet and wraps comments,
//! strings, keywords, numbers, annotations, class names, tag names and
//! attribute names in `<span class="token CATEGORY">` markup, one ordered
//! pattern pass at a time, without ever wrapping inside an earlier wrap.
//!
//! The core lives in [`paint`]; [`formats`] serializes painted buffers and
//! [`settings`] holds the CLI's layered configuration.

pub mod formats;
pub mod paint;
pub mod settings;

pub use paint::{paint, paint_block, plain_text, strip_markup, PaintBuffer, Painter};
