//! Prepositional phrases that denote a point or span in time ("в следующем месяце",
//! "за час", "перед сном").

use log::trace;
use quest_graph::SentenceGraph;
use quest_protocol::{PartOfSpeech, Tag, TokenId};

use crate::pattern::Node;
use crate::RuleTables;

const RELATIVE_MARKERS: &[&str] = &["следующий", "текущий", "прошлый", "прошедший", "этот"];
const DAILY_EVENTS: &[&str] = &["сон", "ужин", "обед"];

fn preposition<const N: usize>(words: [&str; N]) -> Node {
    Node::new().grammemes(Tag::of(PartOfSpeech::Prep)).white_list(words)
}

/// Every time pattern, rooted at the preposition.
pub fn time_patterns(tables: &RuleTables) -> Vec<Node> {
    let units = || Node::new().white_list(&tables.time_units);
    vec![
        preposition(["в", "на"])
            .children([units().children([Node::new().white_list(RELATIVE_MARKERS)])]),
        preposition(["в"]).children([Node::new().white_list(&tables.months)]),
        preposition(["к", "ко"])
            .children([Node::new().grammemes(Tag::of(PartOfSpeech::Numr)), units()]),
        preposition(["за"]).children([units()]),
        preposition(["перед"]).children([Node::new().white_list(DAILY_EVENTS)]),
        preposition(["до"]).children([Node::new().white_list(["наш"]), Node::new().white_list(["эра"])]),
    ]
}

pub fn is_time_construction(graph: &SentenceGraph, vertex: TokenId, tables: &RuleTables) -> bool {
    let found = time_patterns(tables).iter().any(|p| p.matches(graph, vertex));
    if found {
        trace!("Token {} opens a time construction", vertex);
    }
    found
}
