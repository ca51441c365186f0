//! Rendering module for converting documents to output formats.

mod html;
mod json;
mod options;
mod result;
mod text;
pub mod visitor;

pub use html::{escape_html, is_ltr, to_html, to_html_with_stats, HtmlRenderer};
pub use json::{from_json, to_json, JsonFormat};
pub use options::RenderOptions;
pub use result::{RenderResult, RenderStats};
pub use text::{list_marker, to_text, to_text_with};
pub use visitor::{BlockVisitor, CompositeVisitor, VisitorAction};
