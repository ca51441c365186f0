//! Document block model.
//!
//! A [`DocumentStructure`] owns an ordered sequence of [`ContentBlock`]s.
//! Block content is a tagged union checked against the block kind when the
//! block is built, so a table block can never carry plain text and a table
//! can never be empty.

mod block;
mod document;
mod list;
mod page;
mod style;
mod table;

pub use block::{BlockContent, BlockKind, ContentBlock};
pub use document::{DocumentStructure, Metadata};
pub use list::{item_number, to_hebrew_numeral, to_roman, ListContent, ListItem, NumberingStyle};
pub use page::{Margins, Orientation, PageSettings, PageSize};
pub use style::{Alignment, BlockDefaults, BlockMetadata, DefaultStyles, TextStyle};
pub use table::{TableCell, TableContent, TableRow, VerticalAlignment};
