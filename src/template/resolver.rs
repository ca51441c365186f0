//! Full template resolution: gender agreement, then variables.

use super::placeholder::{parse, Placeholder, Segment};
use super::SectionTemplate;
use crate::gender::{Gender, GenderEngine, Glue, LexiconRegistry};
use std::collections::HashMap;

/// Inputs for resolving one template.
#[derive(Debug, Clone, Default)]
pub struct ResolutionContext {
    /// Subject gender for whole-text agreement and inline forms
    pub gender: Gender,

    /// Variable values
    pub values: HashMap<String, String>,

    /// Gender per override tag
    pub overrides: HashMap<String, Gender>,
}

impl ResolutionContext {
    /// Create a context for `gender` with no values.
    pub fn new(gender: Gender) -> Self {
        Self {
            gender,
            ..Default::default()
        }
    }

    /// Add a variable value and return self.
    pub fn with_value(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    /// Replace all variable values and return self.
    pub fn with_values(mut self, values: HashMap<String, String>) -> Self {
        self.values = values;
        self
    }

    /// Bind an override tag to a gender and return self.
    pub fn with_override(mut self, tag: impl Into<String>, gender: Gender) -> Self {
        self.overrides.insert(tag.into(), gender);
        self
    }
}

/// Resolves templates into finished text.
///
/// Within one pass over the parsed template, text runs get the lexicon
/// rewrite, inline and override placeholders get their gendered form, and
/// variables get their values. Values are inserted verbatim and are never
/// seen by the lexicon.
#[derive(Debug, Clone, Default)]
pub struct TemplateResolver {
    engine: GenderEngine,
}

impl TemplateResolver {
    /// Create a resolver over an engine.
    pub fn new(engine: GenderEngine) -> Self {
        Self { engine }
    }

    /// Create a resolver over the registry's current lexicon.
    pub fn from_registry(registry: &LexiconRegistry) -> Self {
        Self::new(GenderEngine::from_registry(registry))
    }

    /// The underlying gender engine.
    pub fn engine(&self) -> &GenderEngine {
        &self.engine
    }

    /// Resolve a template string.
    pub fn resolve(&self, template: &str, ctx: &ResolutionContext) -> String {
        let mut out = String::with_capacity(template.len());

        let segments = parse(template);
        for (k, segment) in segments.iter().enumerate() {
            match segment {
                Segment::Text(text) => {
                    self.engine
                        .rewrite_into(text, ctx.gender, Glue::around(&segments, k), &mut out)
                }
                Segment::Placeholder { placeholder, raw } => match placeholder {
                    Placeholder::InlineForms(forms) => out.push_str(forms.select(ctx.gender)),
                    Placeholder::Override { tag, word } => {
                        match self.engine.resolve_override(tag, word, &ctx.overrides) {
                            Some(form) => out.push_str(&form),
                            None => out.push_str(raw),
                        }
                    }
                    Placeholder::Variable(name) => {
                        out.push_str(ctx.values.get(name).map(String::as_str).unwrap_or(*raw))
                    }
                },
            }
        }

        out
    }

    /// Resolve a section template's body.
    pub fn resolve_section(&self, section: &SectionTemplate, ctx: &ResolutionContext) -> String {
        self.resolve(&section.body, ctx)
    }
}
