//! Surface strings for selected questions, with the question word agreeing with its
//! target.

use quest_morph::ParseLike;
use quest_protocol::{Grammemes, PartOfSpeech, Tag};

use crate::error::QuestionError;
use crate::generator::QuestionGenerator;
use crate::question::{Question, QuestionType};

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Gender the WHICH word takes for a singular noun; masculine when the noun has none
/// or is common gender.
fn agreement_gender(tag: &Tag) -> Grammemes {
    tag.gender()
        .filter(|g| *g != Grammemes::MS_F)
        .unwrap_or(Grammemes::MASC)
}

fn when_phrase(tag: &Tag) -> Option<&'static str> {
    if tag.has(Grammemes::PAST | Grammemes::IMPF) {
        Some("Когда это происходило?")
    } else if tag.has(Grammemes::PAST | Grammemes::PERF) {
        Some("Когда это произошло?")
    } else if tag.has(Grammemes::FUTR | Grammemes::PERF) {
        Some("Когда это произойдёт?")
    } else {
        None
    }
}

impl<'a> QuestionGenerator<'a> {
    pub fn render(&self, question: &Question<'_>) -> Result<String, QuestionError> {
        let target = &question.target;
        let tag = *target.tag();

        let text = match question.kind {
            QuestionType::Which if tag.is(PartOfSpeech::Noun) => {
                let agreement = if tag.has(Grammemes::PLUR) {
                    Grammemes::PLUR
                } else {
                    agreement_gender(&tag)
                };
                let which = self.words.get(QuestionType::Which).inflect(agreement)?;
                let word = target.inflect(Grammemes::NOMN)?;
                Some(format!("{} {}?", capitalize(&which.word()), word.word()))
            }
            QuestionType::HowMany if tag.is(PartOfSpeech::Noun) => {
                let how_many = self.words.get(QuestionType::HowMany);
                let word = target.inflect(Grammemes::GENT)?;
                Some(format!("{} {}?", capitalize(&how_many.word()), word.word()))
            }
            QuestionType::WhereFrom
            | QuestionType::WhereTo
            | QuestionType::Where
            | QuestionType::How
                if tag.is_verb_like() =>
            {
                let word = self.words.get(question.kind);
                Some(format!("{} {}?", capitalize(&word.word()), target.word()))
            }
            QuestionType::When if tag.is_verb_like() => when_phrase(&tag).map(str::to_string),
            QuestionType::Who if tag.is(PartOfSpeech::Numr) => {
                let who = self.words.get(QuestionType::Who).inflect(Grammemes::GENT)?;
                Some(format!("{} {}?", capitalize(&who.word()), target.word()))
            }
            _ => None,
        };

        text.ok_or_else(|| QuestionError::UnhandledRendering {
            kind: question.kind,
            word: target.word().into_owned(),
            tag,
        })
    }
}
