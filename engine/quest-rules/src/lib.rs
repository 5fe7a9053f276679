//! Lexical rules behind question selection: curated word tables, affix
//! stripping, verb classes and time-expression patterns.

pub mod affix;
pub mod classify;
pub mod pattern;
pub mod tables;
pub mod time;

pub use affix::cut_affixes;
pub use classify::{is_present_or_non_past, VerbClassifier};
pub use pattern::Node;
pub use tables::RuleTables;
pub use time::{is_time_construction, time_patterns};
