//! Dependency graph of a parsed sentence and its JSON wire format.

pub mod error;
pub mod graph;
pub mod relation;
pub mod wire;

pub use error::GraphError;
pub use graph::{Analysis, Link, SentenceGraph, Token};
pub use relation::Relation;
pub use wire::{MorphWire, SentenceWire, SyntWire};
