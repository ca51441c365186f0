//! # tavnit
//!
//! Structured legal document templates with Hebrew grammatical gender
//! agreement.
//!
//! Clause templates carry `{{variable}}` placeholders, inline gender forms
//! (`{{gender:הוא|היא|הם}}`) and per-slot overrides (`{{@heir:היורש}}`).
//! Resolution rewrites every lexicon word to the subject's gender, picks the
//! right inline form and fills in variables. Resolved text flows into a
//! block-based document that renders to right-to-left HTML.
//!
//! ## Quick Start
//!
//! ```
//! use tavnit::{resolve, substitute, Gender};
//! use std::collections::HashMap;
//!
//! assert_eq!(resolve("המנוח עשה צוואה", Gender::Female), "המנוחה עשתה צוואה");
//!
//! let values = HashMap::from([("name".to_string(), "דוד".to_string())]);
//! assert_eq!(substitute("שלום {{name}}", &values), "שלום דוד");
//! ```
//!
//! ## Features
//!
//! - **Gender agreement**: longest-match, word-bounded lexicon rewrite
//! - **Versioned lexicon**: copy-on-write registry safe for concurrent readers
//! - **Block model**: headings, paragraphs, tables, nested lists, signatures
//! - **Rendering**: HTML, plain text, JSON
//! - **Validation**: every template against every gender, in parallel

pub mod error;
pub mod gender;
pub mod model;
pub mod render;
pub mod template;
pub mod validate;

// Re-export commonly used types
pub use error::{Error, Result};
pub use gender::{Gender, GenderEngine, GenderedEntry, Lexicon, LexiconRegistry};
pub use model::{
    Alignment, BlockContent, BlockKind, BlockMetadata, ContentBlock, DocumentStructure, ListContent,
    ListItem, Metadata, NumberingStyle, PageSettings, TableCell, TableContent, TableRow, TextStyle,
};
pub use render::{JsonFormat, RenderOptions, RenderResult};
pub use template::{ResolutionContext, SectionTemplate, TemplateField, TemplateLibrary, TemplateResolver};
pub use validate::{ValidationOptions, ValidationReport};

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Rewrite lexicon words in `text` to `gender` using the built-in lexicon.
///
/// # Example
///
/// ```
/// use tavnit::{resolve, Gender};
///
/// assert_eq!(resolve("הוא חתם", Gender::Plural), "הם חתמו");
/// ```
pub fn resolve(text: &str, gender: Gender) -> String {
    GenderEngine::hebrew().resolve(text, gender)
}

/// Replace `{{name}}` tokens with values; missing names stay literal.
pub fn substitute(template: &str, values: &HashMap<String, String>) -> String {
    template::substitute(template, values)
}

/// Render a document to HTML with the built-in lexicon.
///
/// # Example
///
/// ```
/// use tavnit::{render_html, ContentBlock, DocumentStructure, Gender, ResolutionContext};
///
/// let doc = DocumentStructure::new().with_block(ContentBlock::paragraph("המנוח {{name}}"));
/// let ctx = ResolutionContext::new(Gender::Female).with_value("name", "רחל");
/// let html = render_html(&doc, &ctx)?;
/// assert!(html.contains("המנוחה רחל"));
/// # Ok::<(), tavnit::Error>(())
/// ```
pub fn render_html(doc: &DocumentStructure, ctx: &ResolutionContext) -> Result<String> {
    render::to_html(doc, ctx, &RenderOptions::default())
}

/// Validate a template library with default options.
pub fn validate_library(library: &TemplateLibrary) -> ValidationReport {
    validate::validate_library(library, &ValidationOptions::default())
}

/// Load a document from a JSON file.
pub fn load_document<P: AsRef<Path>>(path: P) -> Result<DocumentStructure> {
    let json = std::fs::read_to_string(path)?;
    render::from_json(&json)
}

/// Builder tying a lexicon, a template library and a resolution context.
///
/// # Example
///
/// ```
/// use tavnit::{Gender, Tavnit};
///
/// let tavnit = Tavnit::new()
///     .with_gender(Gender::Female)
///     .with_override("heir", Gender::Female)
///     .with_value("heir_name", "רחל")
///     .with_value("share", "מחצית");
/// let text = tavnit.resolve_section("will_heir_share")?;
/// assert_eq!(text, "היורשת רחל תקבל מחצית מהעיזבון.");
/// # Ok::<(), tavnit::Error>(())
/// ```
pub struct Tavnit {
    registry: Arc<LexiconRegistry>,
    library: TemplateLibrary,
    context: ResolutionContext,
    render_options: RenderOptions,
    validation_options: ValidationOptions,
}

impl Tavnit {
    /// Create a builder with the built-in lexicon and library.
    pub fn new() -> Self {
        Self {
            registry: Arc::new(LexiconRegistry::hebrew()),
            library: TemplateLibrary::builtin(),
            context: ResolutionContext::default(),
            render_options: RenderOptions::default(),
            validation_options: ValidationOptions::default(),
        }
    }

    /// Share an existing lexicon registry.
    pub fn with_registry(mut self, registry: Arc<LexiconRegistry>) -> Self {
        self.registry = registry;
        self
    }

    /// Merge lexicon entries from a JSON file into the registry.
    pub fn with_lexicon_file<P: AsRef<Path>>(self, path: P) -> Result<Self> {
        let extra = Lexicon::from_path(path)?;
        self.registry.merge(&extra)?;
        Ok(self)
    }

    /// Add one lexicon entry.
    pub fn with_entry(self, lemma: impl AsRef<str>, entry: GenderedEntry) -> Result<Self> {
        self.registry.add_entry(lemma, entry)?;
        Ok(self)
    }

    /// Replace the template library.
    pub fn with_library(mut self, library: TemplateLibrary) -> Self {
        self.library = library;
        self
    }

    /// Load the template library from a JSON file.
    pub fn with_library_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        self.library = TemplateLibrary::from_path(path)?;
        Ok(self)
    }

    /// Set the subject gender.
    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.context.gender = gender;
        self
    }

    /// Set a variable value.
    pub fn with_value(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.values.insert(name.into(), value.into());
        self
    }

    /// Set all variable values.
    pub fn with_values(mut self, values: HashMap<String, String>) -> Self {
        self.context.values = values;
        self
    }

    /// Bind an override tag to a gender.
    pub fn with_override(mut self, tag: impl Into<String>, gender: Gender) -> Self {
        self.context.overrides.insert(tag.into(), gender);
        self
    }

    /// Set render options.
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render_options = options;
        self
    }

    /// Set validation options.
    pub fn with_validation_options(mut self, options: ValidationOptions) -> Self {
        self.validation_options = options;
        self
    }

    /// The lexicon registry.
    pub fn registry(&self) -> &Arc<LexiconRegistry> {
        &self.registry
    }

    /// The template library.
    pub fn library(&self) -> &TemplateLibrary {
        &self.library
    }

    /// The resolution context.
    pub fn context(&self) -> &ResolutionContext {
        &self.context
    }

    /// A resolver over the registry's current lexicon.
    pub fn resolver(&self) -> TemplateResolver {
        TemplateResolver::from_registry(&self.registry)
    }

    /// Resolve template text with the configured context.
    pub fn resolve(&self, text: &str) -> String {
        self.resolver().resolve(text, &self.context)
    }

    /// Resolve a library template by id.
    pub fn resolve_section(&self, id: &str) -> Result<String> {
        let section = self.library.require(id)?;
        Ok(self.resolver().resolve_section(section, &self.context))
    }

    /// Build a document from library templates, one paragraph per id.
    pub fn compose<S: AsRef<str>>(&self, title: &str, ids: &[S]) -> Result<TavnitDocument<'_>> {
        let mut document = DocumentStructure::with_title(title);
        document.push(ContentBlock::heading(1, title)?);
        for id in ids {
            let section = self.library.require(id.as_ref())?;
            document.push(ContentBlock::heading(2, section.title.as_str())?);
            document.push(ContentBlock::paragraph(section.body.as_str()));
        }
        Ok(self.document(document))
    }

    /// Load a document from a JSON file.
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<TavnitDocument<'_>> {
        Ok(self.document(load_document(path)?))
    }

    /// Wrap an existing document.
    pub fn document(&self, document: DocumentStructure) -> TavnitDocument<'_> {
        TavnitDocument {
            document,
            tavnit: self,
        }
    }

    /// Validate the library.
    pub fn validate(&self) -> ValidationReport {
        validate::Validator::new(self.validation_options.clone())
            .with_resolver(self.resolver())
            .validate(&self.library)
    }
}

impl Default for Tavnit {
    fn default() -> Self {
        Self::new()
    }
}

/// A document bound to a [`Tavnit`] configuration.
pub struct TavnitDocument<'a> {
    /// The document
    pub document: DocumentStructure,
    tavnit: &'a Tavnit,
}

impl TavnitDocument<'_> {
    /// Convert to HTML.
    pub fn to_html(&self) -> Result<String> {
        render::HtmlRenderer::new(self.tavnit.render_options.clone())
            .with_resolver(self.tavnit.resolver())
            .render(&self.document, &self.tavnit.context)
    }

    /// Convert to HTML with statistics.
    pub fn to_html_with_stats(&self) -> Result<RenderResult> {
        render::HtmlRenderer::new(self.tavnit.render_options.clone())
            .with_resolver(self.tavnit.resolver())
            .render_with_stats(&self.document, &self.tavnit.context)
    }

    /// Convert to plain text.
    pub fn to_text(&self) -> Result<String> {
        render::to_text_with(
            &self.tavnit.resolver(),
            &self.document,
            &self.tavnit.context,
            &self.tavnit.render_options,
        )
    }

    /// Convert to JSON (unresolved).
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, format)
    }

    /// Get the document.
    pub fn document(&self) -> &DocumentStructure {
        &self.document
    }
}
