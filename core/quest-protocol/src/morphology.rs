use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

use bitflags::bitflags;
use log::debug;

use crate::tag_parser::{tag_symbols, TagError};

/// Part of speech in the OpenCorpora tag set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[repr(u8)]
pub enum PartOfSpeech {
    Noun = 0,
    /// Full adjective
    Adjf = 1,
    /// Short adjective
    Adjs = 2,
    /// Comparative
    Comp = 3,
    Verb = 4,
    /// Infinitive
    Infn = 5,
    /// Full participle
    Prtf = 6,
    /// Short participle
    Prts = 7,
    /// Gerund (деепричастие)
    Grnd = 8,
    Numr = 9,
    Advb = 10,
    /// Pronoun-noun
    Npro = 11,
    /// Predicative
    Pred = 12,
    Prep = 13,
    Conj = 14,
    Prcl = 15,
    Intj = 16,
}

const POS_NAMES: [(PartOfSpeech, &str); 17] = [
    (PartOfSpeech::Noun, "NOUN"),
    (PartOfSpeech::Adjf, "ADJF"),
    (PartOfSpeech::Adjs, "ADJS"),
    (PartOfSpeech::Comp, "COMP"),
    (PartOfSpeech::Verb, "VERB"),
    (PartOfSpeech::Infn, "INFN"),
    (PartOfSpeech::Prtf, "PRTF"),
    (PartOfSpeech::Prts, "PRTS"),
    (PartOfSpeech::Grnd, "GRND"),
    (PartOfSpeech::Numr, "NUMR"),
    (PartOfSpeech::Advb, "ADVB"),
    (PartOfSpeech::Npro, "NPRO"),
    (PartOfSpeech::Pred, "PRED"),
    (PartOfSpeech::Prep, "PREP"),
    (PartOfSpeech::Conj, "CONJ"),
    (PartOfSpeech::Prcl, "PRCL"),
    (PartOfSpeech::Intj, "INTJ"),
];

impl PartOfSpeech {
    pub fn name(self) -> &'static str {
        POS_NAMES[self as usize].1
    }

    pub fn from_name(name: &str) -> Option<Self> {
        POS_NAMES.iter().find(|(_, n)| *n == name).map(|(pos, _)| *pos)
    }

    /// Finite verbs, gerunds and participles: everything that takes verbal questions.
    pub fn is_verb_like(self) -> bool {
        matches!(self, Self::Verb | Self::Grnd | Self::Prtf | Self::Prts)
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

bitflags! {
    /// Grammeme set of one word form. Part of speech is kept apart in [`Tag`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
    pub struct Grammemes: u64 {
        // Animacy
        const ANIM = 1 << 0;
        const INAN = 1 << 1;

        // Gender
        const MASC = 1 << 2;
        const FEMN = 1 << 3;
        const NEUT = 1 << 4;
        const MS_F = 1 << 5;

        // Number
        const SING = 1 << 6;
        const PLUR = 1 << 7;
        const SGTM = 1 << 8;
        const PLTM = 1 << 9;
        const FIXD = 1 << 10;

        // Case
        const NOMN = 1 << 11;
        const GENT = 1 << 12;
        const DATV = 1 << 13;
        const ACCS = 1 << 14;
        const ABLT = 1 << 15;
        const LOCT = 1 << 16;
        const VOCT = 1 << 17;
        const GEN2 = 1 << 18;
        const ACC2 = 1 << 19;
        const LOC2 = 1 << 20;

        // Aspect, transitivity
        const PERF = 1 << 21;
        const IMPF = 1 << 22;
        const TRAN = 1 << 23;
        const INTR = 1 << 24;

        // Tense
        const PRES = 1 << 25;
        const PAST = 1 << 26;
        const FUTR = 1 << 27;

        // Person
        const PER1 = 1 << 28;
        const PER2 = 1 << 29;
        const PER3 = 1 << 30;

        // Mood, involvement, voice
        const INDC = 1 << 31;
        const IMPR = 1 << 32;
        const INCL = 1 << 33;
        const EXCL = 1 << 34;
        const ACTV = 1 << 35;
        const PSSV = 1 << 36;

        // Lexical marks
        const APRO = 1 << 37;
        const QUES = 1 << 38;
        const NAME = 1 << 39;
        const SURN = 1 << 40;
        const PATR = 1 << 41;
        const GEOX = 1 << 42;
        const ORGN = 1 << 43;
        const ABBR = 1 << 44;
        const INFR = 1 << 45;
        const SLNG = 1 << 46;
        const ARCH = 1 << 47;
        const LITR = 1 << 48;
        const ERRO = 1 << 49;
        const DIST = 1 << 50;
        const DMNS = 1 << 51;
        const PRNT = 1 << 52;
        const ANUM = 1 << 53;
        const POSS = 1 << 54;
        const COLL = 1 << 55;
        const SUPR = 1 << 56;
        const CMP2 = 1 << 57;
        const IMPE = 1 << 58;
        const QUAL = 1 << 59;
        const SUBX = 1 << 60;
        const ANPH = 1 << 61;
        const V_EY = 1 << 62;
        const V_OY = 1 << 63;
    }
}

const GRAMMEME_NAMES: [(Grammemes, &str); 64] = [
    (Grammemes::ANIM, "anim"),
    (Grammemes::INAN, "inan"),
    (Grammemes::MASC, "masc"),
    (Grammemes::FEMN, "femn"),
    (Grammemes::NEUT, "neut"),
    (Grammemes::MS_F, "ms-f"),
    (Grammemes::SING, "sing"),
    (Grammemes::PLUR, "plur"),
    (Grammemes::SGTM, "Sgtm"),
    (Grammemes::PLTM, "Pltm"),
    (Grammemes::FIXD, "Fixd"),
    (Grammemes::NOMN, "nomn"),
    (Grammemes::GENT, "gent"),
    (Grammemes::DATV, "datv"),
    (Grammemes::ACCS, "accs"),
    (Grammemes::ABLT, "ablt"),
    (Grammemes::LOCT, "loct"),
    (Grammemes::VOCT, "voct"),
    (Grammemes::GEN2, "gen2"),
    (Grammemes::ACC2, "acc2"),
    (Grammemes::LOC2, "loc2"),
    (Grammemes::PERF, "perf"),
    (Grammemes::IMPF, "impf"),
    (Grammemes::TRAN, "tran"),
    (Grammemes::INTR, "intr"),
    (Grammemes::PRES, "pres"),
    (Grammemes::PAST, "past"),
    (Grammemes::FUTR, "futr"),
    (Grammemes::PER1, "1per"),
    (Grammemes::PER2, "2per"),
    (Grammemes::PER3, "3per"),
    (Grammemes::INDC, "indc"),
    (Grammemes::IMPR, "impr"),
    (Grammemes::INCL, "incl"),
    (Grammemes::EXCL, "excl"),
    (Grammemes::ACTV, "actv"),
    (Grammemes::PSSV, "pssv"),
    (Grammemes::APRO, "Apro"),
    (Grammemes::QUES, "Ques"),
    (Grammemes::NAME, "Name"),
    (Grammemes::SURN, "Surn"),
    (Grammemes::PATR, "Patr"),
    (Grammemes::GEOX, "Geox"),
    (Grammemes::ORGN, "Orgn"),
    (Grammemes::ABBR, "Abbr"),
    (Grammemes::INFR, "Infr"),
    (Grammemes::SLNG, "Slng"),
    (Grammemes::ARCH, "Arch"),
    (Grammemes::LITR, "Litr"),
    (Grammemes::ERRO, "Erro"),
    (Grammemes::DIST, "Dist"),
    (Grammemes::DMNS, "Dmns"),
    (Grammemes::PRNT, "Prnt"),
    (Grammemes::ANUM, "Anum"),
    (Grammemes::POSS, "Poss"),
    (Grammemes::COLL, "Coll"),
    (Grammemes::SUPR, "Supr"),
    (Grammemes::CMP2, "Cmp2"),
    (Grammemes::IMPE, "Impe"),
    (Grammemes::QUAL, "Qual"),
    (Grammemes::SUBX, "Subx"),
    (Grammemes::ANPH, "Anph"),
    (Grammemes::V_EY, "V-ey"),
    (Grammemes::V_OY, "V-oy"),
];

// Category masks
impl Grammemes {
    pub const GENDER: Self = Self::MASC.union(Self::FEMN).union(Self::NEUT).union(Self::MS_F);
    pub const NUMBER: Self = Self::SING.union(Self::PLUR);
    pub const CASE: Self = Self::NOMN
        .union(Self::GENT)
        .union(Self::DATV)
        .union(Self::ACCS)
        .union(Self::ABLT)
        .union(Self::LOCT)
        .union(Self::VOCT)
        .union(Self::GEN2)
        .union(Self::ACC2)
        .union(Self::LOC2);
    pub const ASPECT: Self = Self::PERF.union(Self::IMPF);
    pub const TENSE: Self = Self::PRES.union(Self::PAST).union(Self::FUTR);
    pub const PERSON: Self = Self::PER1.union(Self::PER2).union(Self::PER3);

    pub fn from_name(name: &str) -> Option<Self> {
        GRAMMEME_NAMES
            .iter()
            .find(|(_, n)| *n == name)
            .map(|(g, _)| *g)
    }

    /// OpenCorpora name of a single grammeme. `None` for empty or composite sets.
    pub fn name(self) -> Option<&'static str> {
        GRAMMEME_NAMES
            .iter()
            .find(|(g, _)| *g == self)
            .map(|(_, n)| *n)
    }

    /// The single grammeme of `category` present in `self`, if exactly one is.
    pub fn pick(self, category: Self) -> Option<Self> {
        let picked = self.intersection(category);
        if picked.bits().count_ones() == 1 {
            Some(picked)
        } else {
            None
        }
    }
}

impl fmt::Display for Grammemes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (g, name) in GRAMMEME_NAMES.iter() {
            if self.contains(*g) {
                if !first {
                    f.write_str(",")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}

impl FromStr for Grammemes {
    type Err = TagError;

    /// Parses `"plur,nomn"` style lists. Every symbol must be a known grammeme.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut grammemes = Grammemes::empty();
        for symbol in tag_symbols(s)? {
            let g = Grammemes::from_name(symbol)
                .ok_or_else(|| TagError::UnknownGrammeme(symbol.into()))?;
            grammemes.insert(g);
        }
        Ok(grammemes)
    }
}

/// Full tag of a word form: part of speech plus grammemes.
///
/// A `Tag` also serves as a membership query: `tag.satisfies(&query)` holds when the
/// query's part of speech (if any) matches and all its grammemes are present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Tag {
    pub pos: Option<PartOfSpeech>,
    pub grammemes: Grammemes,
}

impl Tag {
    pub const fn new(pos: Option<PartOfSpeech>, grammemes: Grammemes) -> Self {
        Self { pos, grammemes }
    }

    pub const fn of(pos: PartOfSpeech) -> Self {
        Self {
            pos: Some(pos),
            grammemes: Grammemes::empty(),
        }
    }

    pub fn is(&self, pos: PartOfSpeech) -> bool {
        self.pos == Some(pos)
    }

    /// All of `grammemes` are present.
    pub fn has(&self, grammemes: Grammemes) -> bool {
        self.grammemes.contains(grammemes)
    }

    pub fn satisfies(&self, query: &Tag) -> bool {
        query.pos.map_or(true, |pos| self.is(pos)) && self.has(query.grammemes)
    }

    pub fn is_verb_like(&self) -> bool {
        self.pos.map_or(false, PartOfSpeech::is_verb_like)
    }

    pub fn gender(&self) -> Option<Grammemes> {
        self.grammemes.pick(Grammemes::GENDER)
    }

    pub fn number(&self) -> Option<Grammemes> {
        self.grammemes.pick(Grammemes::NUMBER)
    }

    pub fn case(&self) -> Option<Grammemes> {
        self.grammemes.pick(Grammemes::CASE)
    }

    /// Grammemes shared with `other`, plus one for a matching part of speech.
    pub fn similarity(&self, other: &Tag) -> u32 {
        let shared = self.grammemes.intersection(other.grammemes).bits().count_ones();
        shared + u32::from(self.pos.is_some() && self.pos == other.pos)
    }

    /// Builds a tag from already split symbols. Unknown symbols (rare OpenCorpora marks such
    /// as `Init` or `V-be`) are skipped and logged, and only the first part of speech counts.
    pub fn from_symbols<'s>(symbols: impl IntoIterator<Item = &'s str>) -> Self {
        let mut tag = Tag::default();
        for symbol in symbols {
            if let Some(pos) = PartOfSpeech::from_name(symbol) {
                if tag.pos.is_none() {
                    tag.pos = Some(pos);
                }
            } else if let Some(g) = Grammemes::from_name(symbol) {
                tag.grammemes.insert(g);
            } else {
                debug!("Skipping tag symbol {:?} outside the grammeme set", symbol);
            }
        }
        tag
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.pos {
            Some(pos) if self.grammemes.is_empty() => write!(f, "{}", pos),
            Some(pos) => write!(f, "{},{}", pos, self.grammemes),
            None => write!(f, "{}", self.grammemes),
        }
    }
}

impl FromStr for Tag {
    type Err = TagError;

    /// Accepts `NOUN,anim,masc sing,nomn` as well as the
    /// `OpencorporaTag('NOUN,anim,masc sing,nomn')` wrapper. An empty string is an
    /// empty tag.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Ok(Tag::default());
        }
        Ok(Tag::from_symbols(tag_symbols(s)?))
    }
}
