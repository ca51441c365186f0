//! Runs every template through resolution for every gender.

use super::hygiene::{legacy_markers, stale_placeholders};
use super::{Diagnostic, TemplateReport, ValidationReport};
use crate::gender::Gender;
use crate::template::{
    parse, Placeholder, ResolutionContext, Segment, SectionTemplate, TemplateLibrary,
    TemplateResolver,
};
use log::{debug, warn};
use rayon::prelude::*;
use std::collections::HashMap;

/// Options for a validation run.
#[derive(Debug, Clone)]
pub struct ValidationOptions {
    /// Genders to resolve each template for
    pub genders: Vec<Gender>,

    /// Report ad-hoc gender suffixes
    pub detect_legacy: bool,

    /// Report placeholder-like text outside the grammar
    pub detect_stale: bool,

    /// Values to resolve with; `None` uses a synthetic value per declared variable
    pub values: Option<HashMap<String, String>>,

    /// Validate templates in parallel
    pub parallel: bool,
}

impl ValidationOptions {
    /// Create options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the genders checked.
    pub fn with_genders(mut self, genders: impl IntoIterator<Item = Gender>) -> Self {
        self.genders = genders.into_iter().collect();
        self
    }

    /// Enable or disable legacy marker detection.
    pub fn with_legacy_detection(mut self, detect: bool) -> Self {
        self.detect_legacy = detect;
        self
    }

    /// Enable or disable stale placeholder detection.
    pub fn with_stale_detection(mut self, detect: bool) -> Self {
        self.detect_stale = detect;
        self
    }

    /// Resolve with a supplied value map instead of synthetic values.
    pub fn with_values(mut self, values: HashMap<String, String>) -> Self {
        self.values = Some(values);
        self
    }

    /// Enable or disable parallel validation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            genders: Gender::ALL.to_vec(),
            detect_legacy: true,
            detect_stale: true,
            values: None,
            parallel: true,
        }
    }
}

/// Validate a library with the built-in lexicon.
pub fn validate_library(library: &TemplateLibrary, options: &ValidationOptions) -> ValidationReport {
    Validator::new(options.clone()).validate(library)
}

/// Template validator.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    options: ValidationOptions,
    resolver: TemplateResolver,
}

impl Validator {
    /// Create a validator over the built-in lexicon.
    pub fn new(options: ValidationOptions) -> Self {
        Self {
            options,
            resolver: TemplateResolver::default(),
        }
    }

    /// Use a specific resolver (e.g. one over a custom lexicon).
    pub fn with_resolver(mut self, resolver: TemplateResolver) -> Self {
        self.resolver = resolver;
        self
    }

    /// Validate every template in a library.
    pub fn validate(&self, library: &TemplateLibrary) -> ValidationReport {
        self.validate_all(library.templates())
    }

    /// Validate a slice of templates. Report order follows input order.
    pub fn validate_all(&self, templates: &[SectionTemplate]) -> ValidationReport {
        debug!(
            "validating {} templates for {} genders",
            templates.len(),
            self.options.genders.len()
        );

        let reports: Vec<TemplateReport> = if self.options.parallel {
            templates
                .par_iter()
                .map(|t| self.validate_template(t))
                .collect()
        } else {
            templates.iter().map(|t| self.validate_template(t)).collect()
        };

        let report = ValidationReport::from_templates(reports);
        if !report.is_success() {
            warn!("{} of {} templates failed validation", report.failed, report.total);
        }
        report
    }

    /// Validate a single template.
    pub fn validate_template(&self, template: &SectionTemplate) -> TemplateReport {
        let mut diagnostics = Vec::new();
        let used = template.used_variables();

        for name in &template.variables {
            if !used.contains(name) {
                diagnostics.push(Diagnostic::DeclaredButUnused { name: name.clone() });
            }
        }
        for name in &used {
            if !template.variables.contains(name) {
                diagnostics.push(Diagnostic::UsedButUndeclared { name: name.clone() });
            }
        }

        let overrides = override_words(&template.body);
        let values = self.values_for(template);

        for (tag, word) in &overrides {
            if self.resolver.engine().inflect(word, Gender::Male).is_none() {
                diagnostics.push(Diagnostic::UnknownOverrideLemma {
                    tag: tag.clone(),
                    word: word.clone(),
                });
            }
        }

        for &gender in &self.options.genders {
            let mut ctx = ResolutionContext::new(gender).with_values(values.clone());
            for (tag, _) in &overrides {
                ctx.overrides.insert(tag.clone(), gender);
            }

            let output = self.resolver.resolve_section(template, &ctx);
            for name in unresolved_declared(&output, &template.variables) {
                diagnostics.push(Diagnostic::UnresolvedVariable { gender, name });
            }
        }

        if self.options.detect_legacy {
            diagnostics.extend(
                legacy_markers(&template.body)
                    .into_iter()
                    .map(|text| Diagnostic::LegacyGenderMarker { text }),
            );
        }
        if self.options.detect_stale {
            diagnostics.extend(
                stale_placeholders(&template.body)
                    .into_iter()
                    .map(|text| Diagnostic::StalePlaceholder { text }),
            );
        }

        TemplateReport::new(&template.id, &template.title, diagnostics)
    }

    fn values_for(&self, template: &SectionTemplate) -> HashMap<String, String> {
        match self.options.values {
            Some(ref values) => values.clone(),
            None => template
                .variables
                .iter()
                .map(|name| (name.clone(), format!("[{}]", name)))
                .collect(),
        }
    }
}

/// Distinct `(tag, word)` overrides in first-use order.
fn override_words(body: &str) -> Vec<(String, String)> {
    let mut found: Vec<(String, String)> = Vec::new();
    for segment in parse(body) {
        if let Segment::Placeholder {
            placeholder: Placeholder::Override { tag, word },
            ..
        } = segment
        {
            if !found.iter().any(|(t, w)| *t == tag && *w == word) {
                found.push((tag, word));
            }
        }
    }
    found
}

/// Declared names still present as `{{name}}` in resolved output.
fn unresolved_declared(output: &str, declared: &[String]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for segment in parse(output) {
        if let Segment::Placeholder {
            placeholder: Placeholder::Variable(name),
            ..
        } = segment
        {
            if declared.contains(&name) && !names.contains(&name) {
                names.push(name);
            }
        }
    }
    // declared names outside the identifier grammar never parse as variables
    for name in declared {
        if !names.contains(name) && output.contains(&format!("{{{{{}}}}}", name)) {
            names.push(name.clone());
        }
    }
    names
}
