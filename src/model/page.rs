//! Page layout settings.

use serde::{Deserialize, Serialize};

/// Page layout for a document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageSettings {
    /// Paper size
    pub size: PageSize,

    /// Page orientation
    pub orientation: Orientation,

    /// Page margins in millimeters
    pub margins: Margins,

    /// Running header text
    pub header: Option<String>,

    /// Running footer text
    pub footer: Option<String>,
}

impl PageSettings {
    /// Create A4 portrait settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set size and return self.
    pub fn with_size(mut self, size: PageSize) -> Self {
        self.size = size;
        self
    }

    /// Set orientation and return self.
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Set margins and return self.
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    /// Set header text and return self.
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    /// Set footer text and return self.
    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    /// Page (width, height) in millimeters after orientation.
    pub fn dimensions_mm(&self) -> (f32, f32) {
        let (w, h) = self.size.dimensions_mm();
        match self.orientation {
            Orientation::Portrait => (w, h),
            Orientation::Landscape => (h, w),
        }
    }
}

/// Paper size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageSize {
    /// 210 x 297 mm
    #[default]
    A4,
    /// 8.5 x 11 inches
    Letter,
    /// 8.5 x 14 inches
    Legal,
    /// Custom portrait size in millimeters
    Custom {
        /// Width in millimeters
        width: f32,
        /// Height in millimeters
        height: f32,
    },
}

impl PageSize {
    /// Portrait (width, height) in millimeters.
    pub fn dimensions_mm(&self) -> (f32, f32) {
        match *self {
            PageSize::A4 => (210.0, 297.0),
            PageSize::Letter => (215.9, 279.4),
            PageSize::Legal => (215.9, 355.6),
            PageSize::Custom { width, height } => (width, height),
        }
    }

    /// Short name for markup attributes.
    pub fn name(&self) -> &'static str {
        match self {
            PageSize::A4 => "A4",
            PageSize::Letter => "letter",
            PageSize::Legal => "legal",
            PageSize::Custom { .. } => "custom",
        }
    }
}

/// Page orientation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Taller than wide
    #[default]
    Portrait,
    /// Wider than tall
    Landscape,
}

impl Orientation {
    /// Name for markup attributes.
    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Portrait => "portrait",
            Orientation::Landscape => "landscape",
        }
    }
}

/// Page margins in millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    /// Top margin
    pub top: f32,
    /// Right margin
    pub right: f32,
    /// Bottom margin
    pub bottom: f32,
    /// Left margin
    pub left: f32,
}

impl Margins {
    /// Same margin on all sides.
    pub fn uniform(mm: f32) -> Self {
        Self {
            top: mm,
            right: mm,
            bottom: mm,
            left: mm,
        }
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 25.0,
            right: 20.0,
            bottom: 25.0,
            left: 20.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landscape_swaps_dimensions() {
        let settings = PageSettings::new().with_orientation(Orientation::Landscape);
        assert_eq!(settings.dimensions_mm(), (297.0, 210.0));
    }

    #[test]
    fn test_custom_size_json() {
        let size = PageSize::Custom {
            width: 100.0,
            height: 150.0,
        };
        let json = serde_json::to_string(&size).unwrap();
        let back: PageSize = serde_json::from_str(&json).unwrap();
        assert_eq!(back.dimensions_mm(), (100.0, 150.0));
        assert_eq!(serde_json::to_string(&PageSize::A4).unwrap(), "\"a4\"");
    }

    #[test]
    fn test_settings_deserialize_defaults() {
        let settings: PageSettings = serde_json::from_str(r#"{"footer":"עמוד"}"#).unwrap();
        assert_eq!(settings.size, PageSize::A4);
        assert_eq!(settings.margins, Margins::default());
        assert_eq!(settings.footer.as_deref(), Some("עמוד"));
    }
}
