//! List types and numbering.

use serde::{Deserialize, Serialize};

/// A list with optionally nested items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListContent {
    /// Top-level items
    pub items: Vec<ListItem>,

    /// Numbering style for ordered lists
    #[serde(default)]
    pub numbering: NumberingStyle,

    /// First number of the sequence; renderers treat 0 as 1
    #[serde(default = "default_start")]
    pub start: u32,
}

fn default_start() -> u32 {
    1
}

impl ListContent {
    /// Create a list from items.
    pub fn new(items: Vec<ListItem>) -> Self {
        Self {
            items,
            numbering: NumberingStyle::default(),
            start: 1,
        }
    }

    /// Create a flat list from text values.
    pub fn from_strings<S: Into<String>>(values: impl IntoIterator<Item = S>) -> Self {
        Self::new(values.into_iter().map(ListItem::new).collect())
    }

    /// Set numbering style and return self.
    pub fn with_numbering(mut self, numbering: NumberingStyle) -> Self {
        self.numbering = numbering;
        self
    }

    /// Set the first number and return self.
    pub fn with_start(mut self, start: u32) -> Self {
        self.start = start.max(1);
        self
    }

    /// Total number of items at every depth.
    pub fn item_count(&self) -> usize {
        self.items.iter().map(ListItem::count).sum()
    }

    /// Maximum nesting depth (a flat list has depth 1).
    pub fn depth(&self) -> usize {
        self.items.iter().map(ListItem::depth).max().unwrap_or(0)
    }

    /// Check if the list has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// A list item with optional children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    /// Item text
    pub text: String,

    /// Nested items
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ListItem>,
}

impl ListItem {
    /// Create an item with no children.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            children: Vec::new(),
        }
    }

    /// Add a child and return self.
    pub fn with_child(mut self, child: ListItem) -> Self {
        self.children.push(child);
        self
    }

    /// Set children and return self.
    pub fn with_children(mut self, children: Vec<ListItem>) -> Self {
        self.children = children;
        self
    }

    fn count(&self) -> usize {
        1 + self.children.iter().map(ListItem::count).sum::<usize>()
    }

    fn depth(&self) -> usize {
        1 + self.children.iter().map(ListItem::depth).max().unwrap_or(0)
    }
}

/// Numbering style for ordered lists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberingStyle {
    /// 1, 2, 3
    #[default]
    Decimal,
    /// א, ב, ג
    Hebrew,
    /// i, ii, iii
    LowerRoman,
    /// I, II, III
    UpperRoman,
    /// a, b, c
    LowerAlpha,
    /// A, B, C
    UpperAlpha,
}

impl NumberingStyle {
    /// Format `n` (1-based) in this style, without punctuation.
    pub fn format(&self, n: u32) -> String {
        match self {
            NumberingStyle::Decimal => n.to_string(),
            NumberingStyle::Hebrew => to_hebrew_numeral(n),
            NumberingStyle::LowerRoman => to_roman(n).to_lowercase(),
            NumberingStyle::UpperRoman => to_roman(n),
            NumberingStyle::LowerAlpha => to_alpha(n, b'a'),
            NumberingStyle::UpperAlpha => to_alpha(n, b'A'),
        }
    }

    /// CSS `list-style-type` value.
    pub fn as_css(&self) -> &'static str {
        match self {
            NumberingStyle::Decimal => "decimal",
            NumberingStyle::Hebrew => "hebrew",
            NumberingStyle::LowerRoman => "lower-roman",
            NumberingStyle::UpperRoman => "upper-roman",
            NumberingStyle::LowerAlpha => "lower-alpha",
            NumberingStyle::UpperAlpha => "upper-alpha",
        }
    }
}

/// Number of the item at `index` in a sequence beginning at `start`.
///
/// A start of 0 counts as 1; the result saturates at `u32::MAX`.
pub fn item_number(start: u32, index: usize) -> u32 {
    let offset = u32::try_from(index).unwrap_or(u32::MAX);
    start.max(1).saturating_add(offset)
}

/// Convert a number to Roman numerals (1..=3999).
pub fn to_roman(mut num: u32) -> String {
    const NUMERALS: [(u32, &str); 13] = [
        (1000, "M"),
        (900, "CM"),
        (500, "D"),
        (400, "CD"),
        (100, "C"),
        (90, "XC"),
        (50, "L"),
        (40, "XL"),
        (10, "X"),
        (9, "IX"),
        (5, "V"),
        (4, "IV"),
        (1, "I"),
    ];

    if num == 0 || num > 3999 {
        return num.to_string();
    }

    let mut result = String::new();
    for &(value, numeral) in NUMERALS.iter() {
        while num >= value {
            result.push_str(numeral);
            num -= value;
        }
    }
    result
}

/// Convert a number to Hebrew gematria numerals (1..=999).
///
/// 15 and 16 are written ט״ו and ט״ז. Multi-letter numerals carry a
/// gershayim before the last letter, single letters a geresh.
pub fn to_hebrew_numeral(num: u32) -> String {
    const HUNDREDS: [&str; 10] = ["", "ק", "ר", "ש", "ת", "תק", "תר", "תש", "תת", "תתק"];
    const TENS: [char; 10] = ['\0', 'י', 'כ', 'ל', 'מ', 'נ', 'ס', 'ע', 'פ', 'צ'];
    const ONES: [char; 10] = ['\0', 'א', 'ב', 'ג', 'ד', 'ה', 'ו', 'ז', 'ח', 'ט'];

    if num == 0 || num > 999 {
        return num.to_string();
    }

    let mut letters: Vec<char> = HUNDREDS[(num / 100) as usize].chars().collect();
    match num % 100 {
        15 => letters.extend(['ט', 'ו']),
        16 => letters.extend(['ט', 'ז']),
        rest => {
            if rest >= 10 {
                letters.push(TENS[(rest / 10) as usize]);
            }
            if rest % 10 > 0 {
                letters.push(ONES[(rest % 10) as usize]);
            }
        }
    }

    let mut result = String::new();
    if letters.len() == 1 {
        result.push(letters[0]);
        result.push('׳');
    } else {
        for (i, c) in letters.iter().enumerate() {
            if i + 1 == letters.len() {
                result.push('״');
            }
            result.push(*c);
        }
    }
    result
}

fn to_alpha(num: u32, base: u8) -> String {
    // bijective base-26: 27 -> "aa"
    let mut n = num;
    let mut chars = Vec::new();
    while n > 0 {
        n -= 1;
        chars.push((base + (n % 26) as u8) as char);
        n /= 26;
    }
    chars.iter().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_roman() {
        assert_eq!(to_roman(1), "I");
        assert_eq!(to_roman(4), "IV");
        assert_eq!(to_roman(9), "IX");
        assert_eq!(to_roman(14), "XIV");
        assert_eq!(to_roman(2024), "MMXXIV");
        assert_eq!(to_roman(u32::MAX), u32::MAX.to_string());
    }

    #[test]
    fn test_hebrew_numerals() {
        assert_eq!(to_hebrew_numeral(1), "א׳");
        assert_eq!(to_hebrew_numeral(10), "י׳");
        assert_eq!(to_hebrew_numeral(11), "י״א");
        assert_eq!(to_hebrew_numeral(15), "ט״ו");
        assert_eq!(to_hebrew_numeral(16), "ט״ז");
        assert_eq!(to_hebrew_numeral(42), "מ״ב");
        assert_eq!(to_hebrew_numeral(115), "קט״ו");
        assert_eq!(to_hebrew_numeral(500), "ת״ק");
        assert_eq!(to_hebrew_numeral(1000), "1000");
    }

    #[test]
    fn test_item_number_saturates() {
        assert_eq!(item_number(1, 0), 1);
        assert_eq!(item_number(0, 2), 3);
        assert_eq!(item_number(u32::MAX, 1), u32::MAX);
        assert_eq!(item_number(5, usize::MAX), u32::MAX);
    }

    #[test]
    fn test_alpha() {
        assert_eq!(NumberingStyle::LowerAlpha.format(1), "a");
        assert_eq!(NumberingStyle::UpperAlpha.format(26), "Z");
        assert_eq!(NumberingStyle::LowerAlpha.format(27), "aa");
    }

    #[test]
    fn test_item_count_and_depth() {
        let list = ListContent::new(vec![
            ListItem::new("א").with_child(ListItem::new("א1").with_child(ListItem::new("א1א"))),
            ListItem::new("ב"),
        ]);
        assert_eq!(list.item_count(), 4);
        assert_eq!(list.depth(), 3);
    }

    #[test]
    fn test_deserialize_defaults() {
        let list: ListContent = serde_json::from_str(r#"{"items":[{"text":"x"}]}"#).unwrap();
        assert_eq!(list.start, 1);
        assert_eq!(list.numbering, NumberingStyle::Decimal);
        assert!(list.items[0].children.is_empty());
    }
}
