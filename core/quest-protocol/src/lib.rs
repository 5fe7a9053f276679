#![cfg_attr(not(test), no_std)] // Tests link std for proptest

extern crate alloc;

// Enable std if the feature is active (for tools)
#[cfg(all(feature = "std", not(test)))]
extern crate std;

pub mod ids;
pub mod krasoteevo;
pub mod morphology;
pub mod tag_parser;

// Re-export core types for convenience
pub use ids::{LexemeId, TokenId};
pub use morphology::*;
pub use tag_parser::TagError;

pub mod model;
pub use model::*;
