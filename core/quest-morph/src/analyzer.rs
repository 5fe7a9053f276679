use quest_protocol::{Grammemes, LexemeId, Tag};

use crate::error::MorphError;

/// One analysis of a word form as returned by an [`Analyzer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parse {
    pub word: String,
    pub normal_form: String,
    pub tag: Tag,
    /// Paradigm handle, only meaningful to the analyzer that produced the parse.
    pub lexeme: LexemeId,
}

/// The morphological oracle. Lookups are synchronous and side-effect free.
pub trait Analyzer {
    /// All analyses of `word`, most likely first.
    fn parse(&self, word: &str) -> Vec<Parse>;

    fn word_is_known(&self, word: &str) -> bool {
        !self.parse(word).is_empty()
    }

    /// Form of the same paradigm carrying every grammeme in `required`.
    fn inflect(&self, parse: &Parse, required: Grammemes) -> Option<Parse>;

    /// Dictionary form of the paradigm.
    fn normalized(&self, parse: &Parse) -> Option<Parse>;
}

/// Selects the analysis of `word` whose tag equals `tag` and whose normal form is
/// `normal_form` (or `word` itself when not given).
pub fn choose_parse(
    analyzer: &dyn Analyzer,
    word: &str,
    tag: &Tag,
    normal_form: Option<&str>,
) -> Result<Parse, MorphError> {
    choose_by(analyzer, word, tag, normal_form, |candidate, tag| candidate == tag)
}

/// Like [`choose_parse`], but the candidate tag only has to contain `tag`.
/// Used for fixed words whose full dictionary tag carries extra lexical marks.
pub fn choose_parse_containing(
    analyzer: &dyn Analyzer,
    word: &str,
    tag: &Tag,
    normal_form: Option<&str>,
) -> Result<Parse, MorphError> {
    choose_by(analyzer, word, tag, normal_form, |candidate, tag| candidate.satisfies(tag))
}

fn choose_by(
    analyzer: &dyn Analyzer,
    word: &str,
    tag: &Tag,
    normal_form: Option<&str>,
    accept: impl Fn(&Tag, &Tag) -> bool,
) -> Result<Parse, MorphError> {
    let normal_form = normal_form.unwrap_or(word).to_lowercase();
    analyzer
        .parse(word)
        .into_iter()
        .find(|p| accept(&p.tag, tag) && p.normal_form == normal_form)
        .ok_or_else(|| MorphError::NoMatchingParse {
            word: word.to_string(),
            tag: *tag,
            normal_form,
        })
}
