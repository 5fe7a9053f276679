//! Inflectable word forms: single analyzed words and modal + infinitive phrases.

use std::borrow::Cow;
use std::fmt;

use quest_protocol::{Grammemes, Tag};

use crate::analyzer::{choose_parse, Analyzer, Parse};
use crate::error::MorphError;

/// The capability every form offers to the question engine.
pub trait ParseLike {
    fn word(&self) -> Cow<'_, str>;

    fn normal_form(&self) -> Cow<'_, str>;

    fn tag(&self) -> &Tag;

    /// Form carrying all of `required`. Fails with [`MorphError::InflectionFailure`].
    fn inflect(&self, required: Grammemes) -> Result<Self, MorphError>
    where
        Self: Sized;

    /// Dictionary form.
    fn normalized(&self) -> Result<Self, MorphError>
    where
        Self: Sized;
}

/// One analyzer parse together with the analyzer that can inflect it.
#[derive(Clone)]
pub struct SimpleForm<'a> {
    parse: Parse,
    analyzer: &'a dyn Analyzer,
}

impl<'a> SimpleForm<'a> {
    pub fn new(parse: Parse, analyzer: &'a dyn Analyzer) -> Self {
        Self { parse, analyzer }
    }

    /// Resolves a `(word, normal form, tag)` triple to the analyzer's exact parse.
    pub fn resolve(
        analyzer: &'a dyn Analyzer,
        word: &str,
        normal_form: &str,
        tag: &Tag,
    ) -> Result<Self, MorphError> {
        let parse = choose_parse(analyzer, word, tag, Some(normal_form))?;
        Ok(Self::new(parse, analyzer))
    }

    pub fn parse(&self) -> &Parse {
        &self.parse
    }

    pub fn analyzer(&self) -> &'a dyn Analyzer {
        self.analyzer
    }
}

impl fmt::Debug for SimpleForm<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SimpleForm").field(&self.parse).finish()
    }
}

impl PartialEq for SimpleForm<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.parse == other.parse
    }
}

impl ParseLike for SimpleForm<'_> {
    fn word(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.parse.word)
    }

    fn normal_form(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.parse.normal_form)
    }

    fn tag(&self) -> &Tag {
        &self.parse.tag
    }

    fn inflect(&self, required: Grammemes) -> Result<Self, MorphError> {
        self.analyzer
            .inflect(&self.parse, required)
            .map(|parse| Self::new(parse, self.analyzer))
            .ok_or_else(|| MorphError::InflectionFailure {
                word: self.parse.word.clone(),
                tag: self.parse.tag,
                required,
            })
    }

    fn normalized(&self) -> Result<Self, MorphError> {
        self.analyzer
            .normalized(&self.parse)
            .map(|parse| Self::new(parse, self.analyzer))
            .ok_or_else(|| MorphError::NoNormalForm {
                word: self.parse.word.clone(),
            })
    }
}

/// A modal or auxiliary verb fused with its dependent infinitive ("хочу спать").
/// Inflection only touches the modal part.
#[derive(Debug, Clone, PartialEq)]
pub struct PhrasalForm<'a> {
    pub modal: Box<MorphForm<'a>>,
    pub infinitive: Box<MorphForm<'a>>,
}

impl ParseLike for PhrasalForm<'_> {
    fn word(&self) -> Cow<'_, str> {
        Cow::Owned(format!("{} {}", self.modal.word(), self.infinitive.word()))
    }

    fn normal_form(&self) -> Cow<'_, str> {
        Cow::Owned(format!("{} {}", self.modal.normal_form(), self.infinitive.word()))
    }

    fn tag(&self) -> &Tag {
        self.modal.tag()
    }

    fn inflect(&self, required: Grammemes) -> Result<Self, MorphError> {
        Ok(Self {
            modal: Box::new(self.modal.inflect(required)?),
            infinitive: self.infinitive.clone(),
        })
    }

    fn normalized(&self) -> Result<Self, MorphError> {
        Ok(Self {
            modal: Box::new(self.modal.normalized()?),
            infinitive: self.infinitive.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MorphForm<'a> {
    Simple(SimpleForm<'a>),
    Phrasal(PhrasalForm<'a>),
}

impl<'a> MorphForm<'a> {
    pub fn phrasal(modal: MorphForm<'a>, infinitive: MorphForm<'a>) -> Self {
        MorphForm::Phrasal(PhrasalForm {
            modal: Box::new(modal),
            infinitive: Box::new(infinitive),
        })
    }

    pub fn is_phrasal(&self) -> bool {
        matches!(self, MorphForm::Phrasal(_))
    }
}

impl<'a> From<SimpleForm<'a>> for MorphForm<'a> {
    fn from(form: SimpleForm<'a>) -> Self {
        MorphForm::Simple(form)
    }
}

impl ParseLike for MorphForm<'_> {
    fn word(&self) -> Cow<'_, str> {
        match self {
            MorphForm::Simple(f) => f.word(),
            MorphForm::Phrasal(f) => f.word(),
        }
    }

    fn normal_form(&self) -> Cow<'_, str> {
        match self {
            MorphForm::Simple(f) => f.normal_form(),
            MorphForm::Phrasal(f) => f.normal_form(),
        }
    }

    fn tag(&self) -> &Tag {
        match self {
            MorphForm::Simple(f) => f.tag(),
            MorphForm::Phrasal(f) => f.tag(),
        }
    }

    fn inflect(&self, required: Grammemes) -> Result<Self, MorphError> {
        Ok(match self {
            MorphForm::Simple(f) => MorphForm::Simple(f.inflect(required)?),
            MorphForm::Phrasal(f) => MorphForm::Phrasal(f.inflect(required)?),
        })
    }

    fn normalized(&self) -> Result<Self, MorphError> {
        Ok(match self {
            MorphForm::Simple(f) => MorphForm::Simple(f.normalized()?),
            MorphForm::Phrasal(f) => MorphForm::Phrasal(f.normalized()?),
        })
    }
}
