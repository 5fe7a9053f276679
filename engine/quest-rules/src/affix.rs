//! Reduction of a verb normal form to its lexical stem: reflexive particles
//! are cut until none is left, then known prefixes are peeled while the rest is
//! still a word. The result is a fixed point: cutting it again changes nothing.

use log::trace;
use quest_morph::Analyzer;

use crate::RuleTables;

pub fn cut_affixes(word: &str, analyzer: &dyn Analyzer, tables: &RuleTables) -> String {
    let mut stem = word;
    while let Some(rest) = cut_postfix(stem, &tables.postfixes) {
        stem = rest;
    }

    while let Some(rest) = cut_prefix(stem, analyzer, &tables.prefixes) {
        trace!("{} -> {}", stem, rest);
        stem = rest;
    }
    stem.to_string()
}

fn cut_postfix<'w>(word: &'w str, postfixes: &[String]) -> Option<&'w str> {
    postfixes
        .iter()
        .filter(|postfix| !postfix.is_empty())
        .find_map(|postfix| word.strip_suffix(postfix.as_str()))
}

fn cut_prefix<'w>(word: &'w str, analyzer: &dyn Analyzer, prefixes: &[String]) -> Option<&'w str> {
    prefixes
        .iter()
        .filter_map(|prefix| word.strip_prefix(prefix.as_str()))
        .find(|rest| !rest.is_empty() && analyzer.word_is_known(rest))
}
