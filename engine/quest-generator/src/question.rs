use std::borrow::Cow;
use std::fmt;

use quest_morph::{choose_parse_containing, Analyzer, MorphError, MorphForm, ParseLike, SimpleForm};
use quest_protocol::{Grammemes, Tag, TokenId};
use serde::Serialize;

/// Kinds of question, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuestionType {
    Which = 0,
    Who = 1,
    HowMany = 2,
    Where = 3,
    When = 4,
    WhereFrom = 5,
    WhereTo = 6,
    How = 7,
    Why = 8,
}

impl QuestionType {
    pub const ALL: [QuestionType; 9] = [
        QuestionType::Which,
        QuestionType::Who,
        QuestionType::HowMany,
        QuestionType::Where,
        QuestionType::When,
        QuestionType::WhereFrom,
        QuestionType::WhereTo,
        QuestionType::How,
        QuestionType::Why,
    ];

    /// Interrogative word in its dictionary form.
    pub fn word(self) -> &'static str {
        match self {
            QuestionType::Which => "какой",
            QuestionType::Who => "кто",
            QuestionType::HowMany => "сколько",
            QuestionType::Where => "где",
            QuestionType::When => "когда",
            QuestionType::WhereFrom => "откуда",
            QuestionType::WhereTo => "куда",
            QuestionType::How => "как",
            QuestionType::Why => "почему",
        }
    }

    /// Grammemes the analyzer parse of [`word`](Self::word) must carry.
    pub fn tag(self) -> &'static str {
        match self {
            QuestionType::Which => "ADJF,Apro masc,sing,nomn",
            QuestionType::Who => "NPRO,masc sing,nomn",
            QuestionType::HowMany => "ADVB",
            _ => "ADVB,Ques",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            QuestionType::Which => "WHICH",
            QuestionType::Who => "WHO",
            QuestionType::HowMany => "HOW_MANY",
            QuestionType::Where => "WHERE",
            QuestionType::When => "WHEN",
            QuestionType::WhereFrom => "WHERE_FROM",
            QuestionType::WhereTo => "WHERE_TO",
            QuestionType::How => "HOW",
            QuestionType::Why => "WHY",
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An interrogative word bound to its analyzer parse.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionWord<'a> {
    kind: QuestionType,
    form: SimpleForm<'a>,
}

impl<'a> QuestionWord<'a> {
    pub fn resolve(kind: QuestionType, analyzer: &'a dyn Analyzer) -> Result<Self, MorphError> {
        let tag: Tag = kind.tag().parse().map_err(|source| MorphError::UnknownTag {
            word: kind.word().to_string(),
            source,
        })?;
        let parse = choose_parse_containing(analyzer, kind.word(), &tag, None)?;
        Ok(Self {
            kind,
            form: SimpleForm::new(parse, analyzer),
        })
    }

    pub fn kind(&self) -> QuestionType {
        self.kind
    }
}

impl ParseLike for QuestionWord<'_> {
    fn word(&self) -> Cow<'_, str> {
        self.form.word()
    }

    fn normal_form(&self) -> Cow<'_, str> {
        self.form.normal_form()
    }

    fn tag(&self) -> &Tag {
        self.form.tag()
    }

    fn inflect(&self, required: Grammemes) -> Result<Self, MorphError> {
        Ok(Self {
            kind: self.kind,
            form: self.form.inflect(required)?,
        })
    }

    fn normalized(&self) -> Result<Self, MorphError> {
        Ok(Self {
            kind: self.kind,
            form: self.form.normalized()?,
        })
    }
}

/// Every question word, resolved once against one analyzer and read-only afterwards.
#[derive(Debug, Clone)]
pub struct QuestionWords<'a> {
    words: Vec<QuestionWord<'a>>,
}

impl<'a> QuestionWords<'a> {
    pub fn initialize(analyzer: &'a dyn Analyzer) -> Result<Self, MorphError> {
        let words = QuestionType::ALL
            .iter()
            .map(|&kind| QuestionWord::resolve(kind, analyzer))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { words })
    }

    pub fn get(&self, kind: QuestionType) -> &QuestionWord<'a> {
        &self.words[kind as usize]
    }
}

/// A question about one word of the sentence, ready to be rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct Question<'a> {
    pub kind: QuestionType,
    /// The form the question is phrased with; may differ from the sentence's own form
    /// (first person becomes second person).
    pub target: MorphForm<'a>,
    pub vertex: TokenId,
}

#[cfg(test)]
mod tests {
    use super::*;
    use quest_morph::LexiconAnalyzer;

    const LEXICON: &str = include_str!("../../../fixtures/lexicon.json");

    #[test]
    fn test_all_is_in_discriminant_order() {
        for (i, kind) in QuestionType::ALL.iter().enumerate() {
            assert_eq!(*kind as usize, i);
        }
    }

    #[test]
    fn test_initialize_resolves_every_word() {
        let analyzer = LexiconAnalyzer::from_json(LEXICON).unwrap();
        let words = QuestionWords::initialize(&analyzer).unwrap();
        for kind in QuestionType::ALL {
            let word = words.get(kind);
            assert_eq!(word.kind(), kind);
            assert_eq!(word.word(), kind.word());
        }
    }

    #[test]
    fn test_which_agrees() {
        let analyzer = LexiconAnalyzer::from_json(LEXICON).unwrap();
        let words = QuestionWords::initialize(&analyzer).unwrap();
        let which = words.get(QuestionType::Which);
        assert_eq!(which.inflect(Grammemes::FEMN).unwrap().word(), "какая");
        assert_eq!(which.inflect(Grammemes::NEUT).unwrap().word(), "какое");
        assert_eq!(which.inflect(Grammemes::PLUR).unwrap().word(), "какие");
        assert_eq!(words.get(QuestionType::Who).inflect(Grammemes::GENT).unwrap().word(), "кого");
    }

    #[test]
    fn test_missing_word_fails_initialization() {
        let analyzer = LexiconAnalyzer::from_json(r#"{"version":1,"lexemes":[]}"#).unwrap();
        let err = QuestionWords::initialize(&analyzer).unwrap_err();
        assert!(matches!(err, MorphError::NoMatchingParse { .. }));
    }

    #[test]
    fn test_serialized_name() {
        assert_eq!(serde_json::to_string(&QuestionType::WhereFrom).unwrap(), "\"WHERE_FROM\"");
        assert_eq!(QuestionType::HowMany.to_string(), "HOW_MANY");
    }
}
