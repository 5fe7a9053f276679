use quest_generator::{QuestionError, QuestionGenerator, QuestionType};
use quest_graph::SentenceGraph;
use quest_morph::{LexiconAnalyzer, MorphError};
use quest_protocol::TokenId;
use quest_rules::RuleTables;

const LEXICON: &str = include_str!("../../../fixtures/lexicon.json");
const VANYA: &str = include_str!("../../../fixtures/sentences/vanya.json");
const ZVERI: &str = include_str!("../../../fixtures/sentences/zveri.json");
const GADGET: &str = include_str!("../../../fixtures/sentences/gadget.json");
const SLEEP: &str = include_str!("../../../fixtures/sentences/sleep.json");
const RUNNERS: &str = include_str!("../../../fixtures/sentences/runners.json");

fn ask(sentence: &str) -> Vec<String> {
    let analyzer = LexiconAnalyzer::from_json(LEXICON).unwrap();
    let generator = QuestionGenerator::new(&analyzer, RuleTables::default()).unwrap();
    let graph = SentenceGraph::from_json(sentence).unwrap();
    generator.ask(&graph)
}

#[test]
fn test_movement_verb_with_infinitive() {
    assert_eq!(
        ask(VANYA),
        ["Какой ваня?", "Откуда идёт гулять?", "Куда идёт гулять?"]
    );
}

#[test]
fn test_coordinated_clauses() {
    assert_eq!(
        ask(ZVERI),
        [
            "Какая маша?",
            "Какой петя?",
            "Когда это происходило?",
            "Как любили?",
            "Какие звери?",
            "Сколько зверей?",
            "Какая мама?",
            "Какой зоопарк?",
        ]
    );
}

#[test]
fn test_participle_gerund_and_adjuncts() {
    assert_eq!(
        ask(GADGET),
        [
            "Какой школьник?",
            "Как высадил?",
            "Где заряженный?",
            "Когда это произошло?",
            "Как заряженный?",
            "Какой гаджет?",
            "Где потратив?",
            "Когда это произошло?",
            "Как потратив?",
            "Какое время?",
            "Какие игры?",
            "Сколько игр?",
        ]
    );
}

#[test]
fn test_first_person_is_asked_in_second() {
    assert_eq!(ask(SLEEP), ["Где хочешь спать?", "Как хочешь спать?"]);
}

#[test]
fn test_prefixed_movement_verb_and_collective_numeral() {
    assert_eq!(
        ask(RUNNERS),
        [
            "Когда это произошло?",
            "Откуда прибежали?",
            "Куда прибежали?",
            "Кого двое?",
        ]
    );
}

#[test]
fn test_report_records() {
    let analyzer = LexiconAnalyzer::from_json(LEXICON).unwrap();
    let generator = QuestionGenerator::new(&analyzer, RuleTables::default()).unwrap();
    let graph = SentenceGraph::from_json(VANYA).unwrap();
    let report = generator.generate(&graph);

    assert!(report.failures.is_empty());
    let kinds: Vec<_> = report.questions.iter().map(|q| (q.vertex, q.kind)).collect();
    assert_eq!(
        kinds,
        [
            (TokenId::new(0), QuestionType::Which),
            (TokenId::new(1), QuestionType::WhereFrom),
            (TokenId::new(1), QuestionType::WhereTo),
        ]
    );
    assert_eq!(report.questions[1].token, "идёт");
}

#[test]
fn test_unknown_word_does_not_stop_the_sentence() {
    let sentence = r#"{"sentence": "Ваня видит жирафа.", "tokens": ["Ваня", "видит", "жирафа", "."],
        "morphs": [
            [{"word": "ваня", "lexem": "ваня", "tags": "NOUN,anim,masc,Name sing,nomn"}],
            [{"word": "видит", "lexem": "видеть", "tags": "VERB,impf,tran sing,3per,pres,indc"}],
            [{"word": "жирафа", "lexem": "жираф", "tags": "NOUN,anim,masc sing,accs"}],
            []],
        "synts": [[1, 0, "предик"], [1, 2, "1-компл"]]}"#;
    let analyzer = LexiconAnalyzer::from_json(LEXICON).unwrap();
    let generator = QuestionGenerator::new(&analyzer, RuleTables::default()).unwrap();
    let graph = SentenceGraph::from_json(sentence).unwrap();
    let report = generator.generate(&graph);

    assert_eq!(report.questions.len(), 1);
    assert_eq!(report.questions[0].text, "Какой ваня?");
    assert_eq!(report.failures.len(), 2);
    assert_eq!(report.failures[0].token, "видит");
    assert!(matches!(
        report.failures[1].error,
        QuestionError::Morph(MorphError::NoMatchingParse { .. })
    ));
}

#[test]
fn test_past_movement_verb() {
    let sentence = r#"{"sentence": "Петя шёл.", "tokens": ["Петя", "шёл", "."],
        "morphs": [
            [{"word": "петя", "lexem": "петя", "tags": "NOUN,anim,masc,Name sing,nomn"}],
            [{"word": "шёл", "lexem": "идти", "tags": "VERB,impf,intr masc,sing,past,indc"}],
            []],
        "synts": [[1, 0, "предик"]]}"#;
    let analyzer = LexiconAnalyzer::from_json(LEXICON).unwrap();
    let generator = QuestionGenerator::new(&analyzer, RuleTables::default()).unwrap();
    let graph = SentenceGraph::from_json(sentence).unwrap();
    assert_eq!(
        generator.ask(&graph),
        ["Какой петя?", "Когда это происходило?", "Откуда шёл?", "Куда шёл?"]
    );
}

#[test]
fn test_custom_time_adverbs() {
    let tables = RuleTables {
        time_adverbs: ["быстро".to_string()].into_iter().collect(),
        ..RuleTables::default()
    };
    let sentence = r#"{"sentence": "Петя быстро шёл.", "tokens": ["Петя", "быстро", "шёл", "."],
        "morphs": [
            [{"word": "петя", "lexem": "петя", "tags": "NOUN,anim,masc,Name sing,nomn"}],
            [{"word": "быстро", "lexem": "быстро", "tags": "ADVB"}],
            [{"word": "шёл", "lexem": "идти", "tags": "VERB,impf,intr masc,sing,past,indc"}],
            []],
        "synts": [[2, 0, "предик"], [2, 1, "обст"]]}"#;
    let analyzer = LexiconAnalyzer::from_json(LEXICON).unwrap();
    let generator = QuestionGenerator::new(&analyzer, tables).unwrap();
    let graph = SentenceGraph::from_json(sentence).unwrap();
    assert_eq!(generator.ask(&graph), ["Какой петя?", "Откуда шёл?", "Куда шёл?"]);
}

#[test]
fn test_unphrasable_question_is_reported() {
    // The imperative has no tense, so WHEN survives selection but has no phrasing.
    let sentence = r#"{"sentence": "Сделай!", "tokens": ["Сделай", "!"],
        "morphs": [[{"word": "сделай", "lexem": "сделать", "tags": "VERB,perf,tran sing,impr,excl"}], []],
        "synts": []}"#;
    let analyzer = LexiconAnalyzer::from_json(LEXICON).unwrap();
    let generator = QuestionGenerator::new(&analyzer, RuleTables::default()).unwrap();
    let graph = SentenceGraph::from_json(sentence).unwrap();
    let report = generator.generate(&graph);

    let texts: Vec<_> = report.questions.iter().map(|q| q.text.as_str()).collect();
    assert_eq!(texts, ["Где сделай?", "Как сделай?"]);
    assert_eq!(report.failures.len(), 1);
    assert!(matches!(
        report.failures[0].error,
        QuestionError::UnhandledRendering { kind: QuestionType::When, .. }
    ));
}
