use log::{debug, warn};
use quest_graph::SentenceGraph;
use quest_morph::{Analyzer, MorphError};
use quest_protocol::TokenId;
use quest_rules::RuleTables;
use serde::Serialize;

use crate::error::QuestionError;
use crate::question::{Question, QuestionType, QuestionWords};

/// A word that could not be asked about, or a question that could not be phrased.
#[derive(Debug)]
pub struct Failure {
    pub vertex: TokenId,
    pub token: String,
    pub error: QuestionError,
}

/// Selected questions for one sentence, in token order.
#[derive(Debug, Default)]
pub struct Generation<'a> {
    pub questions: Vec<Question<'a>>,
    pub failures: Vec<Failure>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedQuestion {
    pub vertex: TokenId,
    pub token: String,
    #[serde(rename = "question_type")]
    pub kind: QuestionType,
    pub text: String,
}

/// Rendered questions for one sentence, in token order.
#[derive(Debug, Default)]
pub struct Report {
    pub questions: Vec<RenderedQuestion>,
    pub failures: Vec<Failure>,
}

/// Turns parsed sentences into questions. Holds the question words resolved against
/// `analyzer`; build one per analyzer and reuse it across sentences.
pub struct QuestionGenerator<'a> {
    pub(crate) analyzer: &'a dyn Analyzer,
    pub(crate) words: QuestionWords<'a>,
    pub(crate) tables: RuleTables,
}

impl<'a> QuestionGenerator<'a> {
    pub fn new(analyzer: &'a dyn Analyzer, tables: RuleTables) -> Result<Self, MorphError> {
        let words = QuestionWords::initialize(analyzer)?;
        Ok(Self {
            analyzer,
            words,
            tables,
        })
    }

    pub fn tables(&self) -> &RuleTables {
        &self.tables
    }

    pub fn words(&self) -> &QuestionWords<'a> {
        &self.words
    }

    /// Selects questions for every word. A word that fails is recorded and skipped.
    pub fn questions(&self, graph: &SentenceGraph) -> Generation<'a> {
        let mut generation = Generation::default();
        for (vertex, token) in graph.words() {
            match self.select(graph, vertex) {
                Ok(questions) => generation.questions.extend(questions),
                Err(error) => {
                    warn!("Skipping `{}` ({}): {}", token.text, vertex, error);
                    generation.failures.push(Failure {
                        vertex,
                        token: token.text.clone(),
                        error,
                    });
                }
            }
        }
        generation
    }

    /// Selects and renders. Questions that cannot be phrased join the failures.
    pub fn generate(&self, graph: &SentenceGraph) -> Report {
        let Generation {
            questions,
            mut failures,
        } = self.questions(graph);

        let mut rendered = Vec::with_capacity(questions.len());
        for question in &questions {
            let token = graph
                .token(question.vertex)
                .map(|t| t.text.clone())
                .unwrap_or_default();
            match self.render(question) {
                Ok(text) => rendered.push(RenderedQuestion {
                    vertex: question.vertex,
                    token,
                    kind: question.kind,
                    text,
                }),
                Err(error) => {
                    warn!("Cannot phrase {} about `{}`: {}", question.kind, token, error);
                    failures.push(Failure {
                        vertex: question.vertex,
                        token,
                        error,
                    });
                }
            }
        }

        debug!(
            "`{}`: {} questions, {} failures",
            graph.sentence(),
            rendered.len(),
            failures.len()
        );
        Report {
            questions: rendered,
            failures,
        }
    }

    /// Rendered question strings for `graph`.
    pub fn ask(&self, graph: &SentenceGraph) -> Vec<String> {
        self.generate(graph)
            .questions
            .into_iter()
            .map(|q| q.text)
            .collect()
    }
}
