//! Comprehension questions from dependency-parsed Russian sentences.
//!
//! ```no_run
//! use quest_generator::QuestionGenerator;
//! use quest_graph::SentenceGraph;
//! use quest_morph::LexiconAnalyzer;
//! use quest_rules::RuleTables;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let analyzer = LexiconAnalyzer::load("fixtures/lexicon.json")?;
//! let generator = QuestionGenerator::new(&analyzer, RuleTables::default())?;
//! let graph = SentenceGraph::from_json(&std::fs::read_to_string("fixtures/sentences/vanya.json")?)?;
//! for question in generator.ask(&graph) {
//!     println!("{}", question);
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod generator;
pub mod question;
mod render;
mod select;

pub use error::QuestionError;
pub use generator::{Failure, Generation, QuestionGenerator, RenderedQuestion, Report};
pub use question::{Question, QuestionType, QuestionWord, QuestionWords};
