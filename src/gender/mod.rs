//! Grammatical gender agreement for Hebrew text.
//!
//! The [`Lexicon`] maps a lemma (masculine singular) to its four forms. The
//! [`GenderEngine`] rewrites every whole-word occurrence of a lemma, with or
//! without the attached definite article, to the form for a target
//! [`Gender`].
//!
//! # Example
//!
//! ```
//! use tavnit::gender::{Gender, GenderEngine};
//!
//! let engine = GenderEngine::hebrew();
//! assert_eq!(
//!     engine.resolve("המנוח עשה צוואה", Gender::Female),
//!     "המנוחה עשתה צוואה"
//! );
//! ```

mod engine;
mod entry;
mod hebrew;
mod lexicon;
pub mod tokenizer;

pub use engine::{GenderEngine, ARTICLE};
pub(crate) use engine::Glue;
pub use entry::{Gender, GenderedEntry};
pub use lexicon::{Lexicon, LexiconRegistry};
