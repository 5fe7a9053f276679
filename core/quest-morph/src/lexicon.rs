use std::cmp::Reverse;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use log::{debug, warn};
use quest_protocol::{Grammemes, LexemeId, Lexicon, Tag};
use rkyv::AlignedVec;

use crate::analyzer::{Analyzer, Parse};
use crate::error::MorphError;

#[derive(Debug, Clone)]
struct Form {
    word: String,
    tag: Tag,
}

#[derive(Debug, Clone)]
struct Lexeme {
    id: LexemeId,
    forms: Vec<Form>,
}

/// In-memory dictionary analyzer over a [`Lexicon`].
///
/// Lookup is case-insensitive. Homonyms come back in lexicon order.
#[derive(Debug, Default)]
pub struct LexiconAnalyzer {
    lexemes: Vec<Lexeme>,
    by_id: HashMap<LexemeId, usize>,
    // lowercase word -> (lexeme position, form position)
    index: HashMap<String, Vec<(usize, usize)>>,
}

impl LexiconAnalyzer {
    pub fn new(lexicon: &Lexicon) -> Result<Self, MorphError> {
        let mut analyzer = Self::default();

        for entry in &lexicon.lexemes {
            let forms = entry
                .forms
                .iter()
                .map(|f| -> Result<Form, MorphError> {
                    let tag = f.tag.parse::<Tag>().map_err(|source| MorphError::UnknownTag {
                        word: f.word.clone(),
                        source,
                    })?;
                    Ok(Form { word: f.word.to_lowercase(), tag })
                })
                .collect::<Result<Vec<_>, _>>()?;

            if forms.is_empty() {
                warn!("Lexeme {} has no forms, skipping", entry.id);
                continue;
            }

            let pos = analyzer.lexemes.len();
            // Parses carry the lexeme id back into `inflect`, so it must name one paradigm.
            if analyzer.by_id.insert(entry.id, pos).is_some() {
                return Err(MorphError::DuplicateLexeme { id: entry.id });
            }
            for (i, form) in forms.iter().enumerate() {
                analyzer.index.entry(form.word.clone()).or_default().push((pos, i));
            }
            analyzer.lexemes.push(Lexeme { id: entry.id, forms });
        }

        debug!(
            "Lexicon v{} loaded: {} lexemes, {} distinct forms",
            lexicon.version,
            analyzer.lexemes.len(),
            analyzer.index.len()
        );
        Ok(analyzer)
    }

    pub fn from_json(input: &str) -> Result<Self, MorphError> {
        let lexicon: Lexicon = serde_json::from_str(input)?;
        Self::new(&lexicon)
    }

    /// Loads a lexicon produced by [`archive`].
    pub fn from_archive(bytes: &[u8]) -> Result<Self, MorphError> {
        // The archive root must be aligned; a plain Vec<u8> from disk is not guaranteed to be.
        let mut aligned = AlignedVec::with_capacity(bytes.len());
        aligned.extend_from_slice(bytes);
        let lexicon: Lexicon =
            rkyv::from_bytes(&aligned).map_err(|e| MorphError::Archive(e.to_string()))?;
        Self::new(&lexicon)
    }

    /// Reads `.rkyv` archives as binary and anything else as JSON.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, MorphError> {
        let path = path.as_ref();
        if path.extension().map_or(false, |ext| ext == "rkyv") {
            Self::from_archive(&fs::read(path)?)
        } else {
            Self::from_json(&fs::read_to_string(path)?)
        }
    }

    pub fn len(&self) -> usize {
        self.lexemes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lexemes.is_empty()
    }

    fn to_parse(&self, lexeme: &Lexeme, form: &Form) -> Parse {
        Parse {
            word: form.word.clone(),
            normal_form: lexeme.forms[0].word.clone(),
            tag: form.tag,
            lexeme: lexeme.id,
        }
    }

    fn lexeme(&self, id: LexemeId) -> Option<&Lexeme> {
        self.by_id.get(&id).map(|&pos| &self.lexemes[pos])
    }
}

impl Analyzer for LexiconAnalyzer {
    fn parse(&self, word: &str) -> Vec<Parse> {
        self.index
            .get(&word.to_lowercase())
            .map(|hits| {
                hits.iter()
                    .map(|&(l, f)| {
                        let lexeme = &self.lexemes[l];
                        self.to_parse(lexeme, &lexeme.forms[f])
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    fn word_is_known(&self, word: &str) -> bool {
        self.index.contains_key(&word.to_lowercase())
    }

    fn inflect(&self, parse: &Parse, required: Grammemes) -> Option<Parse> {
        let lexeme = self.lexeme(parse.lexeme)?;
        // Among forms carrying `required`, keep as much of the source tag as possible.
        // Ties go to the earlier form.
        lexeme
            .forms
            .iter()
            .filter(|f| f.tag.has(required))
            .min_by_key(|f| Reverse(f.tag.similarity(&parse.tag)))
            .map(|f| self.to_parse(lexeme, f))
    }

    fn normalized(&self, parse: &Parse) -> Option<Parse> {
        let lexeme = self.lexeme(parse.lexeme)?;
        Some(self.to_parse(lexeme, &lexeme.forms[0]))
    }
}

/// Serializes a lexicon to the rkyv archive format read by [`LexiconAnalyzer::from_archive`].
pub fn archive(lexicon: &Lexicon) -> Result<Vec<u8>, MorphError> {
    let bytes = rkyv::to_bytes::<_, 1024>(lexicon).map_err(|e| MorphError::Archive(e.to_string()))?;
    Ok(bytes.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use quest_protocol::{FormEntry, LexemeEntry, PartOfSpeech};

    fn form(word: &str, tag: &str) -> FormEntry {
        FormEntry { word: word.to_string(), tag: tag.to_string() }
    }

    fn which_lexicon() -> Lexicon {
        Lexicon {
            version: 1,
            lexemes: vec![LexemeEntry {
                id: LexemeId(1),
                forms: vec![
                    form("какой", "ADJF,Apro masc,sing,nomn"),
                    form("какого", "ADJF,Apro masc,sing,gent"),
                    form("какая", "ADJF,Apro femn,sing,nomn"),
                    form("какой", "ADJF,Apro femn,sing,gent"),
                    form("какое", "ADJF,Apro neut,sing,nomn"),
                    form("какие", "ADJF,Apro plur,nomn"),
                    form("каких", "ADJF,Apro plur,gent"),
                ],
            }],
        }
    }

    fn beast_lexeme(id: u32) -> LexemeEntry {
        LexemeEntry {
            id: LexemeId(id),
            forms: vec![
                form("зверь", "NOUN,anim,masc sing,nomn"),
                form("зверя", "NOUN,anim,masc sing,gent"),
                form("звери", "NOUN,anim,masc plur,nomn"),
                form("зверей", "NOUN,anim,masc plur,gent"),
            ],
        }
    }

    fn mother_lexeme(id: u32) -> LexemeEntry {
        LexemeEntry {
            id: LexemeId(id),
            forms: vec![
                form("мама", "NOUN,anim,femn sing,nomn"),
                form("мамы", "NOUN,anim,femn sing,gent"),
                form("мамы", "NOUN,anim,femn plur,nomn"),
                form("мам", "NOUN,anim,femn plur,gent"),
            ],
        }
    }

    #[test]
    fn test_homonyms_in_lexicon_order() {
        let analyzer = LexiconAnalyzer::new(&which_lexicon()).unwrap();
        let parses = analyzer.parse("Какой");
        assert_eq!(parses.len(), 2);
        assert!(parses[0].tag.has(Grammemes::MASC | Grammemes::NOMN));
        assert!(parses[1].tag.has(Grammemes::FEMN | Grammemes::GENT));
        assert!(parses.iter().all(|p| p.normal_form == "какой"));
    }

    #[test]
    fn test_inflect_keeps_case_when_changing_gender() {
        let analyzer = LexiconAnalyzer::new(&which_lexicon()).unwrap();
        let masc = analyzer.parse("какой").remove(0);
        let femn = analyzer.inflect(&masc, Grammemes::FEMN).unwrap();
        assert_eq!(femn.word, "какая");
        let plur = analyzer.inflect(&masc, Grammemes::PLUR).unwrap();
        assert_eq!(plur.word, "какие");
    }

    #[test]
    fn test_inflect_missing_form() {
        let analyzer = LexiconAnalyzer::new(&which_lexicon()).unwrap();
        let masc = analyzer.parse("какой").remove(0);
        assert!(analyzer.inflect(&masc, Grammemes::ABLT).is_none());
    }

    #[test]
    fn test_normalized_is_first_form() {
        let analyzer = LexiconAnalyzer::new(&which_lexicon()).unwrap();
        let plur = analyzer.parse("каких").remove(0);
        let normal = analyzer.normalized(&plur).unwrap();
        assert_eq!(normal.word, "какой");
        assert!(normal.tag.is(PartOfSpeech::Adjf));
    }

    #[test]
    fn test_archive_round_trip() {
        let bytes = archive(&which_lexicon()).unwrap();
        let analyzer = LexiconAnalyzer::from_archive(&bytes).unwrap();
        assert_eq!(analyzer.len(), 1);
        assert!(analyzer.word_is_known("каких"));
        assert!(!analyzer.word_is_known("чьих"));
    }

    #[test]
    fn test_duplicate_lexeme_id_is_rejected() {
        let lexicon = Lexicon { version: 1, lexemes: vec![beast_lexeme(1), mother_lexeme(1)] };
        let err = LexiconAnalyzer::new(&lexicon).unwrap_err();
        assert!(matches!(err, MorphError::DuplicateLexeme { id: LexemeId(1) }));
    }

    #[test]
    fn test_inflect_stays_in_own_paradigm() {
        let lexicon = Lexicon { version: 1, lexemes: vec![beast_lexeme(1), mother_lexeme(2)] };
        let analyzer = LexiconAnalyzer::new(&lexicon).unwrap();
        let beast = analyzer.parse("зверь").remove(0);
        let plural = analyzer.inflect(&beast, Grammemes::PLUR | Grammemes::GENT).unwrap();
        assert_eq!(plural.word, "зверей");
        assert_eq!(analyzer.normalized(&plural).unwrap().word, "зверь");
    }

    #[test]
    fn test_bad_tag_is_reported() {
        let lexicon = Lexicon {
            version: 1,
            lexemes: vec![LexemeEntry { id: LexemeId(1), forms: vec![form("где", "ADVB;Ques")] }],
        };
        let err = LexiconAnalyzer::new(&lexicon).unwrap_err();
        assert!(matches!(err, MorphError::UnknownTag { .. }));
    }

    fn required() -> impl Strategy<Value = Grammemes> {
        proptest::sample::select(vec![
            Grammemes::empty(),
            Grammemes::MASC,
            Grammemes::FEMN,
            Grammemes::PLUR,
            Grammemes::GENT,
            Grammemes::NOMN,
            Grammemes::ABLT,
            Grammemes::PLUR | Grammemes::GENT,
            Grammemes::FEMN | Grammemes::GENT,
            Grammemes::SING | Grammemes::NOMN,
        ])
    }

    proptest! {
        #[test]
        fn test_inflection_carries_required_grammemes(
            word in proptest::sample::select(vec![
                "какой", "какого", "какая", "какие", "каких",
                "зверь", "зверя", "звери", "зверей", "мама", "мамы", "мам",
            ]),
            required in required(),
        ) {
            let mut lexicon = which_lexicon();
            lexicon.lexemes.push(beast_lexeme(2));
            lexicon.lexemes.push(mother_lexeme(3));
            let analyzer = LexiconAnalyzer::new(&lexicon).unwrap();

            for parse in analyzer.parse(word) {
                let entry = lexicon.lexemes.iter().find(|l| l.id == parse.lexeme).unwrap();
                let producible = entry
                    .forms
                    .iter()
                    .any(|f| f.tag.parse::<Tag>().unwrap().has(required));

                match analyzer.inflect(&parse, required) {
                    Some(inflected) => {
                        prop_assert!(inflected.tag.has(required));
                        prop_assert_eq!(inflected.lexeme, parse.lexeme);
                        prop_assert_eq!(&inflected.normal_form, &parse.normal_form);
                    }
                    None => prop_assert!(!producible),
                }
            }
        }
    }
}
