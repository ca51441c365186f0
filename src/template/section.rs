//! Section templates and form field descriptors.

use super::placeholder::variables;
use serde::{Deserialize, Serialize};

/// A parameterized legal clause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionTemplate {
    /// Unique identifier
    pub id: String,

    /// Display title
    pub title: String,

    /// Clause category (e.g. "will", "rental")
    pub category: String,

    /// Raw body with placeholders
    pub body: String,

    /// Declared variable names
    #[serde(default)]
    pub variables: Vec<String>,

    /// Document types this clause applies to; empty means any
    #[serde(default)]
    pub document_types: Vec<String>,

    /// Form fields collecting the variable values
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<TemplateField>,
}

impl SectionTemplate {
    /// Create a template with no declared variables.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        category: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            category: category.into(),
            body: body.into(),
            variables: Vec::new(),
            document_types: Vec::new(),
            fields: Vec::new(),
        }
    }

    /// Set declared variables and return self.
    pub fn with_variables<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.variables = names.into_iter().map(Into::into).collect();
        self
    }

    /// Set applicable document types and return self.
    pub fn with_document_types<S: Into<String>>(
        mut self,
        types: impl IntoIterator<Item = S>,
    ) -> Self {
        self.document_types = types.into_iter().map(Into::into).collect();
        self
    }

    /// Add a form field and return self.
    pub fn with_field(mut self, field: TemplateField) -> Self {
        self.fields.push(field);
        self
    }

    /// Variables actually referenced in the body, in first-use order.
    pub fn used_variables(&self) -> Vec<String> {
        variables(&self.body)
    }

    /// Check whether the clause applies to a document type.
    pub fn applies_to(&self, document_type: &str) -> bool {
        self.document_types.is_empty() || self.document_types.iter().any(|t| t == document_type)
    }
}

/// Input type of a form field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Single-line text
    #[default]
    Text,
    /// Multi-line text
    Textarea,
    /// Calendar date
    Date,
    /// Number
    Number,
    /// One of `options`
    Select,
    /// Grammatical gender choice
    Gender,
}

/// Descriptor supplied by the external form builder for one variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateField {
    /// Variable name this field fills
    pub id: String,

    /// Display label
    pub label: String,

    /// Input type
    #[serde(default, rename = "type")]
    pub field_type: FieldType,

    /// Whether a value is required
    #[serde(default)]
    pub required: bool,

    /// Choices for `Select` fields
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
}

impl TemplateField {
    /// Create a required text field.
    pub fn text(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            field_type: FieldType::Text,
            required: true,
            options: Vec::new(),
        }
    }

    /// Create a required select field.
    pub fn select<S: Into<String>>(
        id: impl Into<String>,
        label: impl Into<String>,
        options: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            field_type: FieldType::Select,
            required: true,
            options: options.into_iter().map(Into::into).collect(),
        }
    }

    /// Set the field type and return self.
    pub fn with_type(mut self, field_type: FieldType) -> Self {
        self.field_type = field_type;
        self
    }

    /// Mark the field optional and return self.
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_used_variables() {
        let section = SectionTemplate::new("t", "t", "c", "{{a}} {{gender:x|y|z}} {{b}}");
        assert_eq!(section.used_variables(), vec!["a", "b"]);
    }

    #[test]
    fn test_applies_to() {
        let any = SectionTemplate::new("t", "t", "c", "");
        assert!(any.applies_to("will"));

        let will = any.clone().with_document_types(["will"]);
        assert!(will.applies_to("will"));
        assert!(!will.applies_to("rental"));
    }

    #[test]
    fn test_field_json_uses_type_key() {
        let field = TemplateField::text("name", "שם").with_type(FieldType::Date);
        let json = serde_json::to_string(&field).unwrap();
        assert!(json.contains("\"type\":\"date\""));
    }

    #[test]
    fn test_section_deserialize_defaults() {
        let section: SectionTemplate = serde_json::from_str(
            r#"{"id":"x","title":"X","category":"will","body":"שלום"}"#,
        )
        .unwrap();
        assert!(section.variables.is_empty());
        assert!(section.fields.is_empty());
    }
}
