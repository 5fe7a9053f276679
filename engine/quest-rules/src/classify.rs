//! Lexical classes of verbs that shape which questions a predicate admits.

use std::collections::BTreeSet;

use quest_morph::{Analyzer, MorphForm, ParseLike};
use quest_protocol::{Grammemes, Tag};

use crate::affix::cut_affixes;
use crate::RuleTables;

pub struct VerbClassifier<'a> {
    analyzer: &'a dyn Analyzer,
    tables: &'a RuleTables,
}

impl<'a> VerbClassifier<'a> {
    pub fn new(analyzer: &'a dyn Analyzer, tables: &'a RuleTables) -> Self {
        Self { analyzer, tables }
    }

    /// Verbs of motion, including prefixed ones ("прибежать", "отвести").
    /// A phrasal form qualifies when either of its parts does.
    pub fn is_movement_verb(&self, form: &MorphForm<'_>) -> bool {
        self.belongs(form, &self.tables.movement_verbs)
    }

    pub fn is_feeling_verb(&self, form: &MorphForm<'_>) -> bool {
        self.belongs(form, &self.tables.feeling_verbs)
    }

    fn belongs(&self, form: &MorphForm<'_>, class: &BTreeSet<String>) -> bool {
        match form {
            MorphForm::Phrasal(phrasal) => {
                self.belongs(&phrasal.modal, class) || self.belongs(&phrasal.infinitive, class)
            }
            MorphForm::Simple(simple) => {
                let normal_form = simple.normal_form().to_lowercase();
                class.contains(&normal_form)
                    || class.contains(&cut_affixes(&normal_form, self.analyzer, self.tables))
            }
        }
    }
}

/// Present tense, or the imperfective future ("буду делать").
pub fn is_present_or_non_past(tag: &Tag) -> bool {
    tag.has(Grammemes::PRES) || tag.has(Grammemes::FUTR | Grammemes::IMPF)
}
