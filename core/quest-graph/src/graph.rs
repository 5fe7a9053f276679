use log::debug;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use quest_protocol::{krasoteevo, Tag, TagError, TokenId};

use crate::error::GraphError;
use crate::relation::Relation;
use crate::wire::SentenceWire;

/// One morphological analysis as delivered with the sentence.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub word: String,
    pub normal_form: String,
    pub tag: Tag,
}

impl Analysis {
    pub fn new(word: impl Into<String>, normal_form: impl Into<String>, tag: Tag) -> Self {
        Self {
            word: word.into(),
            normal_form: normal_form.into(),
            tag,
        }
    }
}

/// A sentence token. Punctuation carries no analyses.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub text: String,
    pub is_word: bool,
    /// Candidate analyses, most likely first.
    pub analyses: Vec<Analysis>,
}

impl Token {
    pub fn primary(&self) -> Option<&Analysis> {
        self.analyses.first()
    }
}

/// Outgoing dependency of a token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link<'g> {
    pub relation: &'g Relation,
    pub child: TokenId,
}

/// Dependency graph of one sentence. Token ids are positions in the sentence.
#[derive(Debug, Clone, Default)]
pub struct SentenceGraph {
    sentence: String,
    graph: DiGraph<Token, Relation>,
}

impl SentenceGraph {
    pub fn new(sentence: impl Into<String>) -> Self {
        Self {
            sentence: sentence.into(),
            graph: DiGraph::new(),
        }
    }

    pub fn from_json(input: &str) -> Result<Self, GraphError> {
        let wire: SentenceWire = serde_json::from_str(input)?;
        Self::from_wire(wire)
    }

    pub fn from_wire(wire: SentenceWire) -> Result<Self, GraphError> {
        if wire.tokens.len() != wire.morphs.len() {
            return Err(GraphError::MismatchedMorphs {
                tokens: wire.tokens.len(),
                morphs: wire.morphs.len(),
            });
        }

        let mut graph = SentenceGraph::new(wire.sentence);
        for (text, morphs) in wire.tokens.into_iter().zip(wire.morphs) {
            let analyses = morphs
                .into_iter()
                .map(|m| -> Result<Analysis, GraphError> {
                    let tag = wire_tag(&m.tags).map_err(|source| GraphError::Tag {
                        token: text.clone(),
                        source,
                    })?;
                    Ok(Analysis::new(m.word, m.lexem, tag))
                })
                .collect::<Result<Vec<_>, _>>()?;
            graph.add_token(text, analyses);
        }

        let len = graph.len();
        for link in wire.synts {
            // Checked before narrowing so a huge index cannot wrap onto a real token.
            if link.head >= len || link.dependent >= len {
                return Err(GraphError::LinkOutOfRange {
                    head: link.head,
                    dependent: link.dependent,
                    len,
                });
            }
            graph.add_link(
                TokenId::new(link.head as u32),
                TokenId::new(link.dependent as u32),
                Relation::from_label(&link.relation),
            )?;
        }

        debug!(
            "Sentence graph for {:?}: {} tokens, {} links",
            graph.sentence,
            graph.len(),
            graph.graph.edge_count()
        );
        Ok(graph)
    }

    /// Appends a token; it is a word exactly when it has analyses.
    pub fn add_token(&mut self, text: impl Into<String>, analyses: Vec<Analysis>) -> TokenId {
        let is_word = !analyses.is_empty();
        let index = self.graph.add_node(Token {
            text: text.into(),
            is_word,
            analyses,
        });
        TokenId::new(index.index() as u32)
    }

    pub fn add_link(
        &mut self,
        head: TokenId,
        dependent: TokenId,
        relation: Relation,
    ) -> Result<(), GraphError> {
        let len = self.len();
        if head.index() >= len || dependent.index() >= len {
            return Err(GraphError::LinkOutOfRange {
                head: head.index(),
                dependent: dependent.index(),
                len,
            });
        }
        self.graph.add_edge(node(head), node(dependent), relation);
        Ok(())
    }

    pub fn sentence(&self) -> &str {
        &self.sentence
    }

    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    pub fn token(&self, id: TokenId) -> Option<&Token> {
        self.graph.node_weight(node(id))
    }

    pub fn tokens(&self) -> impl Iterator<Item = (TokenId, &Token)> + '_ {
        self.graph
            .node_indices()
            .map(move |i| (TokenId::new(i.index() as u32), &self.graph[i]))
    }

    /// Tokens that are words, in sentence order.
    pub fn words(&self) -> impl Iterator<Item = (TokenId, &Token)> + '_ {
        self.tokens().filter(|(_, t)| t.is_word)
    }

    /// Outgoing links of `id` in the order they were added.
    pub fn children(&self, id: TokenId) -> Vec<Link<'_>> {
        if id.index() >= self.len() {
            return Vec::new();
        }
        // petgraph walks adjacency newest first
        let mut edges: Vec<_> = self
            .graph
            .edges_directed(node(id), Direction::Outgoing)
            .collect();
        edges.sort_by_key(|e| e.id());
        edges
            .into_iter()
            .map(|e| Link {
                relation: e.weight(),
                child: TokenId::new(e.target().index() as u32),
            })
            .collect()
    }
}

fn node(id: TokenId) -> NodeIndex {
    NodeIndex::new(id.index())
}

/// OpenCorpora tags are expected; a tag with no recognizable part of speech is retried
/// as the service's native notation.
fn wire_tag(raw: &str) -> Result<Tag, TagError> {
    let tag: Tag = raw.parse()?;
    if tag.pos.is_none() {
        let native = krasoteevo::from_native(raw)?;
        if native.pos.is_some() {
            return Ok(native);
        }
    }
    Ok(tag)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quest_protocol::{Grammemes, PartOfSpeech};

    const VANYA: &str = r#"{"sentence": "Ваня идёт гулять.", "tokens": ["Ваня", "идёт", "гулять", "."],
        "morphs": [
            [{"word": "ваня", "lexem": "ваня", "tags": "OpencorporaTag('NOUN,anim,masc,Name sing,nomn')"}],
            [{"word": "идёт", "lexem": "идти", "tags": "OpencorporaTag('VERB,impf,intr sing,3per,pres,indc')"}],
            [{"word": "гулять", "lexem": "гулять", "tags": "OpencorporaTag('INFN,impf,intr')"}],
            []],
        "synts": [[1, 0, "предик", "идёт", "ваня"], [1, 2, "обст", "идёт", "гулять"]]}"#;

    #[test]
    fn test_wire_to_graph() {
        let graph = SentenceGraph::from_json(VANYA).unwrap();
        assert_eq!(graph.sentence(), "Ваня идёт гулять.");
        assert_eq!(graph.len(), 4);
        assert_eq!(graph.words().count(), 3);

        let dot = graph.token(TokenId(3)).unwrap();
        assert!(!dot.is_word);
        assert!(dot.primary().is_none());

        let verb = graph.token(TokenId(1)).unwrap().primary().unwrap();
        assert_eq!(verb.normal_form, "идти");
        assert!(verb.tag.is(PartOfSpeech::Verb));
        assert!(verb.tag.has(Grammemes::PRES));
    }

    #[test]
    fn test_children_keep_source_order() {
        let graph = SentenceGraph::from_json(VANYA).unwrap();
        let children = graph.children(TokenId(1));
        assert_eq!(children.len(), 2);
        assert_eq!(children[0].child, TokenId(0));
        assert_eq!(*children[0].relation, Relation::Predicate);
        assert_eq!(children[1].child, TokenId(2));
        assert_eq!(*children[1].relation, Relation::Adverbial);
        assert!(graph.children(TokenId(0)).is_empty());
        assert!(graph.children(TokenId(42)).is_empty());
    }

    #[test]
    fn test_native_tags_are_converted() {
        let json = r#"{"sentence": "Ушёл.", "tokens": ["Ушёл", "."],
            "morphs": [[{"word": "ушёл", "lexem": "уйти", "tags": "V СОВ ИЗЬЯВ ПРОШ ЕД МУЖ"}], []],
            "synts": []}"#;
        let graph = SentenceGraph::from_json(json).unwrap();
        let tag = graph.token(TokenId(0)).unwrap().primary().unwrap().tag;
        assert!(tag.is(PartOfSpeech::Verb));
        assert!(tag.has(Grammemes::PAST | Grammemes::PERF));
    }

    #[test]
    fn test_out_of_range_link() {
        let json = r#"{"sentence": "Да.", "tokens": ["Да", "."],
            "morphs": [[{"word": "да", "lexem": "да", "tags": "PRCL"}], []],
            "synts": [[0, 5, "огранич"]]}"#;
        let err = SentenceGraph::from_json(json).unwrap_err();
        assert!(matches!(err, GraphError::LinkOutOfRange { dependent: 5, len: 2, .. }));
    }

    #[test]
    fn test_link_beyond_u32_is_rejected() {
        let json = r#"{"sentence": "Да.", "tokens": ["Да", "."],
            "morphs": [[{"word": "да", "lexem": "да", "tags": "PRCL"}], []],
            "synts": [[0, 4294967297, "огранич"]]}"#;
        let err = SentenceGraph::from_json(json).unwrap_err();
        assert!(matches!(
            err,
            GraphError::LinkOutOfRange { head: 0, dependent: 4294967297, len: 2 }
        ));
    }

    #[test]
    fn test_mismatched_morphs() {
        let json = r#"{"sentence": "Да.", "tokens": ["Да", "."], "morphs": [[]], "synts": []}"#;
        let err = SentenceGraph::from_json(json).unwrap_err();
        assert!(matches!(err, GraphError::MismatchedMorphs { tokens: 2, morphs: 1 }));
    }
}
