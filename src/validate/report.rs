//! Aggregate validation report.

use super::{Diagnostic, Severity};
use crate::error::{Error, Result};
use crate::render::JsonFormat;
use serde::{Deserialize, Serialize};

/// Validation outcome for one template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateReport {
    /// Template id
    pub id: String,

    /// Template title
    pub title: String,

    /// True when no error-severity diagnostic was found
    pub passed: bool,

    /// Diagnostics in discovery order
    pub diagnostics: Vec<Diagnostic>,
}

impl TemplateReport {
    /// Create a report; `passed` is derived from the diagnostics.
    pub fn new(id: impl Into<String>, title: impl Into<String>, diagnostics: Vec<Diagnostic>) -> Self {
        let passed = !diagnostics.iter().any(Diagnostic::is_error);
        Self {
            id: id.into(),
            title: title.into(),
            passed,
            diagnostics,
        }
    }

    /// Diagnostics of one severity.
    pub fn with_severity(&self, severity: Severity) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(move |d| d.severity() == severity)
    }

    /// Count diagnostics with a given code.
    pub fn count_code(&self, code: &str) -> usize {
        self.diagnostics.iter().filter(|d| d.code() == code).count()
    }
}

/// Report over a whole library.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Templates checked
    pub total: usize,

    /// Templates that passed
    pub passed: usize,

    /// Templates that failed
    pub failed: usize,

    /// Error-severity diagnostics across all templates
    pub error_count: usize,

    /// Warning-severity diagnostics across all templates
    pub warning_count: usize,

    /// Per-template results, in library order
    pub templates: Vec<TemplateReport>,
}

impl ValidationReport {
    /// Build a report from per-template results.
    pub fn from_templates(templates: Vec<TemplateReport>) -> Self {
        let passed = templates.iter().filter(|t| t.passed).count();
        let (errors, warnings) = templates
            .iter()
            .flat_map(|t| &t.diagnostics)
            .fold((0, 0), |(e, w), d| match d.severity() {
                Severity::Error => (e + 1, w),
                Severity::Warning => (e, w + 1),
            });

        Self {
            total: templates.len(),
            passed,
            failed: templates.len() - passed,
            error_count: errors,
            warning_count: warnings,
            templates,
        }
    }

    /// Check if every template passed.
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    /// Result for one template.
    pub fn template(&self, id: &str) -> Option<&TemplateReport> {
        self.templates.iter().find(|t| t.id == id)
    }

    /// Serialize as JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        let result = match format {
            JsonFormat::Pretty => serde_json::to_string_pretty(self),
            JsonFormat::Compact => serde_json::to_string(self),
        };
        result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
    }

    /// Human-readable summary.
    pub fn to_text(&self) -> String {
        let mut out = String::new();

        for template in &self.templates {
            let status = if template.passed { "PASS" } else { "FAIL" };
            out.push_str(&format!("[{}] {} ({})\n", status, template.id, template.title));
            for diagnostic in &template.diagnostics {
                out.push_str(&format!("    {}: {}\n", diagnostic.severity(), diagnostic));
            }
        }

        out.push_str(&format!(
            "\n{} templates: {} passed, {} failed ({} errors, {} warnings)\n",
            self.total, self.passed, self.failed, self.error_count, self.warning_count
        ));
        out
    }
}
