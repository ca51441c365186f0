//! Template validation harness.
//!
//! Every template is resolved for every gender against a synthetic value
//! map. A template fails only when a declared variable survives resolution;
//! everything else is reported as a warning.

mod diagnostic;
mod harness;
mod hygiene;
mod report;

pub use diagnostic::{Diagnostic, Severity};
pub use harness::{validate_library, ValidationOptions, Validator};
pub use hygiene::{legacy_markers, stale_placeholders};
pub use report::{TemplateReport, ValidationReport};
