//! GLR Template
//!
//! Reads report templates, finds their placeholders and fills them in.
//!
//! A template is a DOCX package. Its body paragraphs and table-cell
//! paragraphs may contain placeholders written as `[NAME]` or `{{NAME}}`.
//!
//! ```text
//! DOCX bytes → TemplateDocument ─┬─> discover_placeholders → PlaceholderSet
//!                                └─> render(mapping)       → RenderedDocument
//! ```
//!
//! Substitution works on each paragraph's full text, so a placeholder split
//! across differently formatted runs is still found. A changed paragraph
//! keeps the formatting of its first run; unchanged paragraphs are written
//! back untouched.

#![warn(missing_docs)]

mod document;
mod error;
mod package;
mod placeholders;
mod render;
mod xml;

pub use document::{ContainerLocation, TemplateDocument, TextContainer};
pub use error::TemplateError;
pub use package::minimal_docx;
pub use placeholders::{discover_placeholders, placeholders_in_text};
pub use render::{render, substitute, RenderedDocument, DOCX_MEDIA_TYPE, OUTPUT_FILE_NAME};
