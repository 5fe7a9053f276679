//! Morphological oracle contract and the inflectable forms built on top of it.

pub mod analyzer;
pub mod error;
pub mod form;
pub mod lexicon;

pub use analyzer::{choose_parse, choose_parse_containing, Analyzer, Parse};
pub use error::MorphError;
pub use form::{MorphForm, ParseLike, PhrasalForm, SimpleForm};
pub use lexicon::{archive, LexiconAnalyzer};
