//! Template placeholders, section templates and resolution.
//!
//! # Example
//!
//! ```
//! use tavnit::gender::Gender;
//! use tavnit::template::{ResolutionContext, TemplateResolver};
//!
//! let resolver = TemplateResolver::default();
//! let ctx = ResolutionContext::new(Gender::Female).with_value("name", "רחל");
//! let text = resolver.resolve("{{name}} {{gender:הוא|היא|הם}} היורש", &ctx);
//! assert_eq!(text, "רחל היא היורשת");
//! ```

mod library;
mod placeholder;
mod resolver;
mod section;

pub use library::TemplateLibrary;
pub use placeholder::{
    is_identifier, parse, resolve_inline, substitute, variables, InlineForms, Placeholder, Segment,
};
pub use resolver::{ResolutionContext, TemplateResolver};
pub use section::{FieldType, SectionTemplate, TemplateField};
