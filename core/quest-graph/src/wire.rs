//! JSON shape produced by the syntax parsing service.
//!
//! ```json
//! {"sentence": "Ваня идёт гулять.",
//!  "tokens": ["Ваня", "идёт", "гулять", "."],
//!  "morphs": [[{"word": "ваня", "lexem": "ваня", "tags": "OpencorporaTag('NOUN,anim,masc,Name sing,nomn')"}], ...],
//!  "synts": [[1, 0, "предик", "идёт", "ваня"], {"head": 1, "dependent": 2, "type": "обст"}]}
//! ```

use std::fmt;

use serde::de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, Deserialize)]
pub struct SentenceWire {
    pub sentence: String,
    pub tokens: Vec<String>,
    /// Homonym analyses per token; empty for punctuation.
    pub morphs: Vec<Vec<MorphWire>>,
    pub synts: Vec<SyntWire>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MorphWire {
    pub word: String,
    #[serde(alias = "lemma", alias = "lexeme")]
    pub lexem: String,
    #[serde(alias = "tag")]
    pub tags: String,
}

/// One dependency link. Accepts `[head, dependent, type, ...]` (trailing elements are
/// ignored) and `{"head": .., "dependent": .., "type": ..}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntWire {
    pub head: usize,
    pub dependent: usize,
    pub relation: String,
}

#[derive(Deserialize)]
struct SyntObject {
    head: usize,
    dependent: usize,
    #[serde(rename = "type")]
    relation: String,
}

struct SyntVisitor;

impl<'de> Visitor<'de> for SyntVisitor {
    type Value = SyntWire;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a [head, dependent, type] array or a {head, dependent, type} object")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<SyntWire, A::Error> {
        let head = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(0, &self))?;
        let dependent = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(1, &self))?;
        let relation = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(2, &self))?;
        // The service appends the head and dependent word forms.
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(SyntWire { head, dependent, relation })
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<SyntWire, A::Error> {
        let object = SyntObject::deserialize(de::value::MapAccessDeserializer::new(map))?;
        Ok(SyntWire {
            head: object.head,
            dependent: object.dependent,
            relation: object.relation,
        })
    }
}

impl<'de> Deserialize<'de> for SyntWire {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(SyntVisitor)
    }
}
