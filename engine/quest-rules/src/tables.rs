//! Curated word lists driving the rules. Every list can be overridden from a
//! configuration file; fields left out keep the built-in values.

use std::collections::BTreeSet;

use serde::Deserialize;

pub const MOVEMENT_VERBS: &[&str] = &[
    "бегать", "бежать", "брести", "бродить", "везти", "вести", "водить", "возить", "гнать",
    "гнаться", "гонять", "гоняться", "ездить", "ехать", "идти", "йти", "катать", "кататься",
    "катить", "катиться", "лазать", "лазить", "лезть", "летать", "лететь", "нести", "нестись",
    "носить", "носиться", "плавать", "плыть", "ползать", "ползти", "таскать", "тащить", "ходить",
];

pub const FEELING_VERBS: &[&str] = &[
    "блаженствовать", "боготворить", "бояться", "брезговать", "веселиться", "взбудоражиться",
    "взволновать", "влюблять", "возбуждаться", "возмущать", "возненавидеть", "восторгаться",
    "восхищаться", "всполошиться", "гневить", "горевать", "грустить", "дивиться", "докучать",
    "досадовать", "досаждать", "жалеть", "загореться", "злить", "злиться", "злорадствовать",
    "изводить", "измучиться", "изнемогать", "изнывать", "изумляться", "интересоваться",
    "испугаться", "конфузить", "конфузиться", "кручиниться", "ласкать", "ликовать", "любить",
    "любоваться", "маяться", "млеть", "мущаться", "невзлюбить", "недолюбливать", "недоумевать",
    "нежить", "ненавидеть", "нервничать", "нравиться", "оберегать", "обидеться", "обижаться",
    "обнимать", "ободриться", "обожать", "обозлиться", "огорчать", "огорчаться", "ожесточить",
    "оживиться", "озлобить", "омрачать", "опасаться", "опечалить", "опечалиться", "опешить",
    "опротиветь", "осмелеть", "осмелиться", "остерегаться", "осудить", "оторопеть", "очаровать",
    "очароваться", "переживать", "печалить", "печалиться", "пленять", "повеселеть", "покорять",
    "поразиться", "почитать", "презирать", "приголубить", "пугаться", "радоваться", "развеяться",
    "раздражать", "разъяриться", "располагать", "рассвирепеть", "рассердиться", "расстроить",
    "расстроиться", "расхрабриться", "расшевелиться", "робеть", "сердить", "сердиться",
    "сетовать", "сжалиться", "симпатизировать", "скучать", "смелеть", "смущать", "соболезновать",
    "сожалеть", "сокрушаться", "сопереживать", "сострадать", "сочувствовать", "стесняться",
    "страдать", "стыдиться", "терзаться", "томить", "томиться", "торжествовать", "тосковать",
    "трепетать", "трусить", "тушеваться", "тяготиться", "уважать", "увлекаться", "удивляться",
    "удручать", "унижать", "усовестить", "успокоиться", "устыдить", "устыдиться", "утешиться",
    "уязвить", "хандрить", "чествовать", "чтить",
];

/// Adverbs that already answer "when?".
pub const TIME_ADVERBS: &[&str] = &["послезавтра", "завтра", "сегодня", "вчера", "позавчера"];

/// Derivational prefixes, tried in this order.
pub const PREFIXES: &[&str] = &[
    "без", "бес", "в", "вз", "взо", "вне", "внутри", "во", "воз", "возо", "вос", "вс", "вы", "до",
    "еже", "за", "зако", "из", "изо", "ис", "испод", "к", "кое", "меж", "междо", "между", "на",
    "над", "надо", "наи", "не", "недо", "ни", "низ", "низо", "нис", "о", "об", "обез", "обес",
    "обо", "около", "от", "ото", "па", "пере", "по", "под", "подо", "поза", "после", "пра", "пре",
    "пред", "преди", "предо", "при", "про", "противо", "раз", "разо", "рас", "роз", "рос", "с",
    "сверх", "со", "среди", "су", "тре", "у", "через", "черес", "чрез", "чрес",
];

/// Reflexive particles.
pub const POSTFIXES: &[&str] = &["ся", "сь"];

pub const MONTHS: &[&str] = &[
    "январь", "февраль", "март", "апрель", "май", "июнь", "июль", "август", "сентябрь",
    "октябрь", "ноябрь", "декабрь",
];

pub const TIME_UNITS: &[&str] = &[
    "секунда", "минута", "час", "день", "неделя", "декада", "месяц", "год", "десятилетие",
    "столетие", "век", "тысячелетие",
];

fn set(words: &[&str]) -> BTreeSet<String> {
    words.iter().map(|w| w.to_string()).collect()
}

fn list(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

fn default_movement_verbs() -> BTreeSet<String> {
    set(MOVEMENT_VERBS)
}

fn default_feeling_verbs() -> BTreeSet<String> {
    set(FEELING_VERBS)
}

fn default_time_adverbs() -> BTreeSet<String> {
    set(TIME_ADVERBS)
}

fn default_prefixes() -> Vec<String> {
    list(PREFIXES)
}

fn default_postfixes() -> Vec<String> {
    list(POSTFIXES)
}

fn default_months() -> BTreeSet<String> {
    set(MONTHS)
}

fn default_time_units() -> BTreeSet<String> {
    set(TIME_UNITS)
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct RuleTables {
    #[serde(default = "default_movement_verbs")]
    pub movement_verbs: BTreeSet<String>,
    #[serde(default = "default_feeling_verbs")]
    pub feeling_verbs: BTreeSet<String>,
    #[serde(default = "default_time_adverbs")]
    pub time_adverbs: BTreeSet<String>,
    #[serde(default = "default_prefixes")]
    pub prefixes: Vec<String>,
    #[serde(default = "default_postfixes")]
    pub postfixes: Vec<String>,
    #[serde(default = "default_months")]
    pub months: BTreeSet<String>,
    #[serde(default = "default_time_units")]
    pub time_units: BTreeSet<String>,
}

impl Default for RuleTables {
    fn default() -> Self {
        Self {
            movement_verbs: default_movement_verbs(),
            feeling_verbs: default_feeling_verbs(),
            time_adverbs: default_time_adverbs(),
            prefixes: default_prefixes(),
            postfixes: default_postfixes(),
            months: default_months(),
            time_units: default_time_units(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_sizes() {
        let tables = RuleTables::default();
        assert_eq!(tables.movement_verbs.len(), 36);
        // "восхищаться" is listed once
        assert_eq!(tables.feeling_verbs.len(), FEELING_VERBS.len());
        assert_eq!(tables.prefixes.first().map(String::as_str), Some("без"));
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let tables: RuleTables = toml::from_str(
            r#"
            time_adverbs = ["завтра", "ночью"]
            "#,
        )
        .unwrap();
        assert!(tables.time_adverbs.contains("ночью"));
        assert!(!tables.time_adverbs.contains("вчера"));
        assert_eq!(tables.movement_verbs, RuleTables::default().movement_verbs);
        assert_eq!(tables.prefixes, default_prefixes());
    }
}
