//! Section template library.
//!
//! The library is data. Callers may load their own from JSON and pass it
//! anywhere a [`TemplateLibrary`] is expected; the built-in set is only a
//! starting point.

use super::{SectionTemplate, TemplateField};
use crate::error::{Error, Result};
use log::debug;
use std::path::Path;

/// An ordered collection of section templates.
#[derive(Debug, Clone, Default)]
pub struct TemplateLibrary {
    templates: Vec<SectionTemplate>,
}

impl TemplateLibrary {
    /// Create an empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a library from templates.
    pub fn from_templates(templates: Vec<SectionTemplate>) -> Self {
        Self { templates }
    }

    /// Load a library from a JSON array of templates.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let templates: Vec<SectionTemplate> = serde_json::from_str(json)?;
        debug!("loaded {} section templates", templates.len());
        Ok(Self::from_templates(templates))
    }

    /// Load a library from a JSON file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Serialize the library as a JSON array.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.templates)?)
    }

    /// Add a template (replacing one with the same id).
    pub fn add(&mut self, template: SectionTemplate) {
        match self.templates.iter_mut().find(|t| t.id == template.id) {
            Some(existing) => *existing = template,
            None => self.templates.push(template),
        }
    }

    /// Get a template by id.
    pub fn get(&self, id: &str) -> Option<&SectionTemplate> {
        self.templates.iter().find(|t| t.id == id)
    }

    /// Get a template by id or fail.
    pub fn require(&self, id: &str) -> Result<&SectionTemplate> {
        self.get(id)
            .ok_or_else(|| Error::TemplateNotFound(id.to_string()))
    }

    /// Templates in a category.
    pub fn by_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a SectionTemplate> {
        self.templates.iter().filter(move |t| t.category == category)
    }

    /// Templates applicable to a document type.
    pub fn for_document_type<'a>(
        &'a self,
        document_type: &'a str,
    ) -> impl Iterator<Item = &'a SectionTemplate> {
        self.templates
            .iter()
            .filter(move |t| t.applies_to(document_type))
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for template in &self.templates {
            if !categories.contains(&template.category.as_str()) {
                categories.push(&template.category);
            }
        }
        categories
    }

    /// All templates.
    pub fn templates(&self) -> &[SectionTemplate] {
        &self.templates
    }

    /// Iterate over templates.
    pub fn iter(&self) -> impl Iterator<Item = &SectionTemplate> {
        self.templates.iter()
    }

    /// Number of templates.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Check if the library is empty.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// The built-in Hebrew clause set.
    pub fn builtin() -> Self {
        let templates = vec![
            SectionTemplate::new(
                "will_opening",
                "פתיחת צוואה",
                "will",
                "{{testator_name}}, ת\"ז {{testator_id}}, מרחוב {{testator_address}} \
                 (להלן: \"המצווה\"), מצהיר כי הוא עושה צוואה זו בהיותו בדעה צלולה, \
                 מרצונו הטוב והחופשי וללא כל השפעה בלתי הוגנת.",
            )
            .with_variables(["testator_name", "testator_id", "testator_address"])
            .with_document_types(["will"])
            .with_field(TemplateField::text("testator_name", "שם המצווה"))
            .with_field(TemplateField::text("testator_id", "מספר זהות"))
            .with_field(TemplateField::text("testator_address", "כתובת")),
            SectionTemplate::new(
                "will_revocation",
                "ביטול צוואות קודמות",
                "will",
                "המצווה מבטל בזאת כל צוואה קודמת שנעשתה על ידו, וכל הוראה בצוואה \
                 קודמת בטלה ומבוטלת.",
            )
            .with_document_types(["will"]),
            SectionTemplate::new(
                "will_heirs",
                "הורשת הרכוש",
                "will",
                "המצווה מוריש את כל רכושו, לרבות מקרקעין, כספים וזכויות מכל סוג, \
                 ל{{heir_name}}, ת\"ז {{heir_id}}, {{heir_relation}} {{gender:שלו|שלה|שלהם}}.",
            )
            .with_variables(["heir_name", "heir_id", "heir_relation"])
            .with_document_types(["will"])
            .with_field(TemplateField::text("heir_name", "שם היורש"))
            .with_field(TemplateField::text("heir_id", "מספר זהות היורש"))
            .with_field(TemplateField::select(
                "heir_relation",
                "קרבה",
                ["בנו", "בתו", "בן זוגו", "אחיו"],
            )),
            SectionTemplate::new(
                "will_heir_share",
                "חלקו של יורש",
                "will",
                "{{@heir:היורש}} {{heir_name}} {{@heir:יקבל}} {{share}} מהעיזבון.",
            )
            .with_variables(["heir_name", "share"])
            .with_document_types(["will"]),
            SectionTemplate::new(
                "will_executor",
                "מינוי מנהל עיזבון",
                "will",
                "המצווה ממנה את {{executor_name}} ל{{@executor:מנהל}} עיזבונו, \
                 ו{{@executor:הוא}} {{@executor:יהיה}} {{@executor:רשאי}} לפעול בשם \
                 העיזבון לביצוע הוראות צוואה זו.",
            )
            .with_variables(["executor_name"])
            .with_document_types(["will"]),
            SectionTemplate::new(
                "poa_grant",
                "מתן ייפוי כוח",
                "power_of_attorney",
                "{{principal_name}}, ת\"ז {{principal_id}} (להלן: \"המייפה\"), מייפה \
                 בזאת את כוחו של {{attorney_name}} לפעול בשמו בכל הנוגע ל{{poa_scope}}.",
            )
            .with_variables(["principal_name", "principal_id", "attorney_name", "poa_scope"])
            .with_document_types(["power_of_attorney"]),
            SectionTemplate::new(
                "poa_revocation",
                "ביטול ייפוי כוח",
                "power_of_attorney",
                "המייפה רשאי לבטל את ייפוי הכוח בכל עת בהודעה בכתב, והביטול ייכנס \
                 לתוקף במועד מסירת ההודעה.",
            )
            .with_document_types(["power_of_attorney"]),
            SectionTemplate::new(
                "rental_parties",
                "צדדים להסכם שכירות",
                "rental",
                "הסכם זה נערך ונחתם ביום {{signing_date}} בין {{landlord_name}} \
                 (להלן: \"{{@landlord:המשכיר}}\") לבין {{tenant_name}} \
                 (להלן: \"{{@tenant:השוכר}}\").",
            )
            .with_variables(["signing_date", "landlord_name", "tenant_name"])
            .with_document_types(["rental"]),
            SectionTemplate::new(
                "rental_payment",
                "דמי שכירות",
                "rental",
                "{{@tenant:השוכר}} {{@tenant:מתחייב}} לשלם ל{{@landlord:משכיר}} דמי \
                 שכירות חודשיים בסך {{monthly_rent}} ש\"ח, עד ה-{{payment_day}} בכל חודש.",
            )
            .with_variables(["monthly_rent", "payment_day"])
            .with_document_types(["rental"]),
            SectionTemplate::new(
                "employment_duties",
                "חובות העובד",
                "employment",
                "העובד מתחייב לבצע את תפקידו כ{{position}} במסירות ובנאמנות, ולפעול \
                 בהתאם להוראות {{@employer:המעסיק}} כפי שיינתנו מעת לעת.",
            )
            .with_variables(["position"])
            .with_document_types(["employment"]),
            SectionTemplate::new(
                "signature",
                "חתימה",
                "general",
                "ולראיה {{gender:בא|באה|באו|באה}} {{party_name}} על החתום ביום {{signing_date}}:",
            )
            .with_variables(["party_name", "signing_date"]),
        ];

        Self::from_templates(templates)
    }
}
