use std::fmt;
use std::str::FromStr;

/// Syntactic relation label on a dependency edge. The label set is open; labels
/// outside the known table are kept verbatim in [`Relation::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Relation {
    Predicate,
    Adverbial,
    Quantity,
    FirstComplement,
    SecondComplement,
    Attribute,
    Prepositional,
    Coordination,
    CoordinatingConjunction,
    Restrictive,
    Agent,
    ImproperAgent,
    Copula,
    Apposition,
    Attributive,
    InfinitiveConjunction,
    Other(String),
}

static LABELS: [(Relation, &str); 16] = [
    (Relation::Predicate, "предик"),
    (Relation::Adverbial, "обст"),
    (Relation::Quantity, "количест"),
    (Relation::FirstComplement, "1-компл"),
    (Relation::SecondComplement, "2-компл"),
    (Relation::Attribute, "опред"),
    (Relation::Prepositional, "предл"),
    (Relation::Coordination, "сочин"),
    (Relation::CoordinatingConjunction, "соч-союзн"),
    (Relation::Restrictive, "огранич"),
    (Relation::Agent, "агент"),
    (Relation::ImproperAgent, "несобст-агент"),
    (Relation::Copula, "присвяз"),
    (Relation::Apposition, "аппоз"),
    (Relation::Attributive, "атриб"),
    (Relation::InfinitiveConjunction, "инф-союзн"),
];

impl Relation {
    pub fn from_label(label: &str) -> Self {
        LABELS
            .iter()
            .find(|(_, l)| *l == label)
            .map(|(r, _)| r.clone())
            .unwrap_or_else(|| Relation::Other(label.to_string()))
    }

    pub fn label(&self) -> &str {
        match self {
            Relation::Other(label) => label,
            known => LABELS
                .iter()
                .find(|(r, _)| r == known)
                .map(|(_, l)| *l)
                .unwrap_or_default(),
        }
    }
}

impl FromStr for Relation {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Relation::from_label(s))
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
