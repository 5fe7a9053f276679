//! Conversion from the syntax service's native tag vocabulary to OpenCorpora tags.

use alloc::vec::Vec;

use crate::morphology::Tag;
use crate::tag_parser::{tag_symbols, TagError};

const NATIVE_TO_OPENCORPORA: [(&str, &str); 34] = [
    ("V", "VERB"),
    ("ADV", "ADVB"),
    ("PR", "PREP"),
    ("PART", "PRCL"),
    ("CONJ", "CONJ"),
    ("ПРИЧ", "PRTF"),
    ("ДЕЕПР", "GRND"),
    ("ИНФ", "INFN"),
    ("A", "ADJF"),
    ("A-КР", "ADJS"),
    ("INTJ", "INTJ"),
    ("S", "NPRO"),
    ("ЕД", "sing"),
    ("МН", "plur"),
    ("МУЖ", "masc"),
    ("ЖЕН", "femn"),
    ("СР", "neut"),
    ("ИМ", "nomn"),
    ("РОД", "gent"),
    ("ВИН", "accs"),
    ("ДАТ", "datv"),
    ("ТВОР", "ablt"),
    ("ПР", "loct"),
    ("ОД", "anim"),
    ("НЕОД", "inan"),
    ("ИЗЬЯВ", "indc"),
    ("СОВ", "perf"),
    ("НЕСОВ", "impf"),
    ("ПРОШ", "past"),
    ("НАСТ", "pres"),
    ("БУД", "futr"),
    ("1-Л", "1per"),
    ("2-Л", "2per"),
    ("3-Л", "3per"),
];

fn translate(symbol: &str) -> Option<&'static str> {
    NATIVE_TO_OPENCORPORA
        .iter()
        .find(|(native, _)| *native == symbol)
        .map(|(_, oc)| *oc)
}

/// Converts a space separated native tag (e.g. `V СОВ ИЗЬЯВ ПРОШ ЕД МУЖ`) to a [`Tag`].
///
/// Participles, gerunds and infinitives are marked `V` as well; that mark is dropped
/// so their own part of speech wins. `A` together with `КР` is a short adjective.
/// Symbols without an OpenCorpora counterpart are ignored.
pub fn from_native(raw: &str) -> Result<Tag, TagError> {
    let mut symbols: Vec<&str> = tag_symbols(raw)?;

    let has = |symbols: &[&str], s: &str| symbols.iter().any(|x| *x == s);
    if has(&symbols, "ПРИЧ") || has(&symbols, "ДЕЕПР") || has(&symbols, "ИНФ") {
        symbols.retain(|s| *s != "V");
    }
    if has(&symbols, "A") && has(&symbols, "КР") {
        symbols.retain(|s| *s != "A");
        symbols.push("A-КР");
    }

    Ok(Tag::from_symbols(symbols.into_iter().filter_map(translate)))
}
