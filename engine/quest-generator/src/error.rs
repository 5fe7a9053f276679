use quest_morph::MorphError;
use quest_protocol::Tag;
use thiserror::Error;

use crate::question::QuestionType;

#[derive(Debug, Error)]
pub enum QuestionError {
    #[error(transparent)]
    Morph(#[from] MorphError),

    /// The renderer has no phrasing for this kind of question on this kind of word.
    /// Indicates a gap in the rules rather than bad input.
    #[error("no {kind} question can be phrased for `{word}` ({tag})")]
    UnhandledRendering {
        kind: QuestionType,
        word: String,
        tag: Tag,
    },
}
