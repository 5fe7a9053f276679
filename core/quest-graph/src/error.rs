use quest_protocol::TagError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("malformed sentence JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{tokens} tokens but {morphs} morph lists")]
    MismatchedMorphs { tokens: usize, morphs: usize },

    #[error("link {head} -> {dependent} points outside a sentence of {len} tokens")]
    LinkOutOfRange {
        head: usize,
        dependent: usize,
        len: usize,
    },

    #[error("bad tag on token `{token}`: {source}")]
    Tag { token: String, source: TagError },
}
