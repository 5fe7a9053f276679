use quest_protocol::{Grammemes, LexemeId, Tag, TagError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MorphError {
    /// The analyzer has no parse of `word` with exactly this tag and normal form.
    #[error("no parse of `{word}` matches tag `{tag}` with normal form `{normal_form}`")]
    NoMatchingParse {
        word: String,
        tag: Tag,
        normal_form: String,
    },

    #[error("cannot inflect `{word}` ({tag}) to `{required}`")]
    InflectionFailure {
        word: String,
        tag: Tag,
        required: Grammemes,
    },

    #[error("no normal form known for `{word}`")]
    NoNormalForm { word: String },

    #[error("bad tag on lexicon form `{word}`: {source}")]
    UnknownTag { word: String, source: TagError },

    #[error("lexeme id {id} appears more than once in the lexicon")]
    DuplicateLexeme { id: LexemeId },

    #[error("invalid lexicon archive: {0}")]
    Archive(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
