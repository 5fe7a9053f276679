//! Which questions a word admits, decided from its tag and its dependents.

use std::collections::BTreeSet;

use log::debug;
use quest_graph::{Analysis, Relation, SentenceGraph, Token};
use quest_morph::{MorphError, MorphForm, ParseLike, SimpleForm};
use quest_protocol::{Grammemes, PartOfSpeech, TokenId};
use quest_rules::{is_present_or_non_past, VerbClassifier};

use crate::error::QuestionError;
use crate::generator::QuestionGenerator;
use crate::question::{Question, QuestionType};

const COLLECTIVE_NUMERALS: &[&str] = &["двое", "трое"];

fn primary(graph: &SentenceGraph, vertex: TokenId) -> Option<&Analysis> {
    graph.token(vertex).and_then(Token::primary)
}

impl<'a> QuestionGenerator<'a> {
    /// Questions about the word at `vertex`. Punctuation and words of other parts of
    /// speech yield none.
    pub fn select(
        &self,
        graph: &SentenceGraph,
        vertex: TokenId,
    ) -> Result<Vec<Question<'a>>, QuestionError> {
        let Some(analysis) = primary(graph, vertex) else {
            return Ok(Vec::new());
        };

        if analysis.tag.is(PartOfSpeech::Noun) {
            self.noun(graph, vertex, analysis)
        } else if analysis.tag.is_verb_like() {
            self.verb(graph, vertex, analysis)
        } else if analysis.tag.is(PartOfSpeech::Numr) {
            self.numeral(vertex, analysis)
        } else {
            Ok(Vec::new())
        }
    }

    fn resolve(&self, analysis: &Analysis) -> Result<MorphForm<'a>, MorphError> {
        SimpleForm::resolve(self.analyzer, &analysis.word, &analysis.normal_form, &analysis.tag)
            .map(MorphForm::from)
    }

    fn ask_about(
        kinds: BTreeSet<QuestionType>,
        target: MorphForm<'a>,
        vertex: TokenId,
    ) -> Vec<Question<'a>> {
        if !kinds.is_empty() {
            debug!("{} `{}`: {:?}", vertex, target.word(), kinds);
        }
        kinds
            .into_iter()
            .map(|kind| Question {
                kind,
                target: target.clone(),
                vertex,
            })
            .collect()
    }

    fn noun(
        &self,
        graph: &SentenceGraph,
        vertex: TokenId,
        analysis: &Analysis,
    ) -> Result<Vec<Question<'a>>, QuestionError> {
        let target = self.resolve(analysis)?;
        let mut kinds = BTreeSet::from([QuestionType::Which]);

        let counted = graph
            .children(vertex)
            .iter()
            .any(|link| *link.relation == Relation::Quantity);
        if analysis.tag.number() == Some(Grammemes::PLUR) && !counted {
            kinds.insert(QuestionType::HowMany);
        }
        Ok(Self::ask_about(kinds, target, vertex))
    }

    fn numeral(
        &self,
        vertex: TokenId,
        analysis: &Analysis,
    ) -> Result<Vec<Question<'a>>, QuestionError> {
        let normal_form = analysis.normal_form.to_lowercase();
        if !COLLECTIVE_NUMERALS.contains(&normal_form.as_str()) && !normal_form.ends_with('о') {
            return Ok(Vec::new());
        }
        let target = self.resolve(analysis)?;
        Ok(Self::ask_about(BTreeSet::from([QuestionType::Who]), target, vertex))
    }

    fn verb(
        &self,
        graph: &SentenceGraph,
        vertex: TokenId,
        analysis: &Analysis,
    ) -> Result<Vec<Question<'a>>, QuestionError> {
        let mut kinds = BTreeSet::from([
            QuestionType::How,
            QuestionType::When,
            QuestionType::Where,
            QuestionType::WhereTo,
            QuestionType::WhereFrom,
        ]);
        let links = graph.children(vertex);

        let mut target = self.resolve(analysis)?;
        let infinitive = links.iter().find_map(|link| {
            primary(graph, link.child)
                .filter(|child| child.tag.is(PartOfSpeech::Infn))
                .map(|child| (link.child, child))
        });
        if let Some((_, child)) = infinitive {
            target = MorphForm::phrasal(target, self.resolve(child)?);
        }
        let merged = infinitive.map(|(id, _)| id);

        let classifier = VerbClassifier::new(self.analyzer, &self.tables);
        if is_present_or_non_past(target.tag()) {
            kinds.remove(&QuestionType::When);
        }
        if classifier.is_movement_verb(&target) {
            kinds.remove(&QuestionType::Where);
            kinds.remove(&QuestionType::How);
        } else if classifier.is_feeling_verb(&target) {
            kinds.remove(&QuestionType::WhereFrom);
            kinds.remove(&QuestionType::WhereTo);
            kinds.remove(&QuestionType::Where);
        } else {
            kinds.remove(&QuestionType::WhereFrom);
            kinds.remove(&QuestionType::WhereTo);
        }

        let adjuncts = links
            .iter()
            .filter(|link| *link.relation == Relation::Adverbial && Some(link.child) != merged);
        for link in adjuncts {
            let Some(child) = primary(graph, link.child) else {
                continue;
            };
            if self.tables.time_adverbs.contains(&child.normal_form.to_lowercase()) {
                kinds.remove(&QuestionType::When);
            } else if child.tag.is(PartOfSpeech::Advb) {
                kinds.remove(&QuestionType::How);
            } else {
                // Some other adjunct: assume it already answers every circumstance.
                for kind in [
                    QuestionType::WhereFrom,
                    QuestionType::WhereTo,
                    QuestionType::Where,
                    QuestionType::When,
                    QuestionType::Why,
                ] {
                    kinds.remove(&kind);
                }
            }
        }

        if kinds.is_empty() {
            return Ok(Vec::new());
        }
        // Questions address the reader: "иду" is asked about as "идёшь".
        if target.tag().has(Grammemes::PER1) {
            target = target.inflect(Grammemes::PER2)?;
        }
        Ok(Self::ask_about(kinds, target, vertex))
    }
}
