//! Declarative subtree patterns over the sentence graph.

use quest_graph::{SentenceGraph, Token};
use quest_protocol::{Tag, TokenId};

/// A vertex constraint plus constraints on some of its children.
///
/// Word lists compare against lowercase normal forms. Children are matched greedily:
/// each child pattern claims the first unclaimed dependent it accepts, and extra
/// dependents are allowed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Node {
    grammemes: Option<Tag>,
    white_list: Option<Vec<String>>,
    black_list: Option<Vec<String>>,
    children: Vec<Node>,
}

fn lowercase<I, S>(words: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    words.into_iter().map(|w| w.as_ref().to_lowercase()).collect()
}

impl Node {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grammemes(mut self, query: Tag) -> Self {
        self.grammemes = Some(query);
        self
    }

    pub fn white_list<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.white_list = Some(lowercase(words));
        self
    }

    pub fn black_list<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.black_list = Some(lowercase(words));
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn matches(&self, graph: &SentenceGraph, vertex: TokenId) -> bool {
        let Some(analysis) = graph.token(vertex).and_then(Token::primary) else {
            return false;
        };
        if let Some(query) = &self.grammemes {
            if !analysis.tag.satisfies(query) {
                return false;
            }
        }

        let normal_form = analysis.normal_form.to_lowercase();
        if let Some(words) = &self.white_list {
            if !words.contains(&normal_form) {
                return false;
            }
        }
        if let Some(words) = &self.black_list {
            if words.contains(&normal_form) {
                return false;
            }
        }

        let mut free: Vec<TokenId> = graph.children(vertex).iter().map(|l| l.child).collect();
        for pattern in &self.children {
            match free.iter().position(|&child| pattern.matches(graph, child)) {
                Some(i) => {
                    free.remove(i);
                }
                None => return false,
            }
        }
        true
    }
}
