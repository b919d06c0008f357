//! End-to-end tests for the realiser.
//!
//! These build trees through the public API (and the JSON description
//! format), realize them, and check the text, exercising the lexicon, the
//! tree operations and every realization stage together.

use std::sync::Arc;

use akh_realiser::error::{LexiconError, RealiserError, SpecError};
use akh_realiser::features::{
    DiscourseFunction, Form, Gender, InterrogativeType, Number, Person, Tense,
};
use akh_realiser::lexicon::{BasicLexicon, Lexicon};
use akh_realiser::realiser::{OutputMode, Realiser, RealiserConfig};
use akh_realiser::spec::SpecTree;
use akh_realiser::spec::desc::Node;

fn english() -> (SpecTree, Realiser) {
    let tree = SpecTree::new(Arc::new(BasicLexicon::english()));
    let realiser = Realiser::for_tree(&tree);
    (tree, realiser)
}

#[test]
fn simple_sentence_and_tenses() {
    let (mut t, r) = english();
    let ball = t.noun_phrase_with("the", "ball");
    let c = t.clause("John", "kick", ball).unwrap();
    assert_eq!(r.realise(&t, c), "John kicks the ball.");

    t.set_tense(c, Tense::Past).unwrap();
    assert_eq!(r.realise(&t, c), "John kicked the ball.");

    t.set_tense(c, Tense::Future).unwrap();
    t.set_progressive(c, true).unwrap();
    assert_eq!(r.realise(&t, c), "John will be kicking the ball.");
}

#[test]
fn realising_twice_gives_the_same_text() {
    let (mut t, r) = english();
    let ball = t.noun_phrase_with("the", "ball");
    let c = t.clause("John", "kick", ball).unwrap();
    t.set_passive(c, true).unwrap();
    t.set_interrogative(c, InterrogativeType::What, Some(DiscourseFunction::Object))
        .unwrap();
    let first = r.realise(&t, c);
    assert_eq!(first, "What is kicked by John?");
    assert_eq!(first, r.realise(&t, c));
    assert_eq!(first, r.realise(&t, c));
}

#[test]
fn plural_indefinite() {
    let (mut t, r) = english();
    let cat = t.noun_phrase_with("a", "cat");
    t.set_number(cat, Number::Plural).unwrap();
    assert_eq!(r.realise(&t, cat), "some cats");
}

#[test]
fn article_before_vowel() {
    let (mut t, r) = english();
    let apple = t.noun_phrase_with("a", "apple");
    assert_eq!(r.realise(&t, apple), "an apple");
}

#[test]
fn coordination_and_agreement() {
    let (mut t, r) = english();
    let pears = t.noun_phrase("pear");
    let apples = t.noun_phrase("apple");
    let oranges = t.noun_phrase("orange");
    for np in [pears, apples, oranges] {
        t.set_plural(np, true).unwrap();
    }
    let fruit = t.coordinate([pears, apples, oranges]).unwrap();
    assert_eq!(r.realise(&t, fruit), "pears, apples and oranges");

    let either = t.coordinate_with("or", ["John", "Mary"]).unwrap();
    let c = t.intransitive(either, "run").unwrap();
    assert_eq!(r.realise(&t, c), "John or Mary runs.");
    t.set_conjunction(either, "and").unwrap();
    assert_eq!(r.realise(&t, c), "John and Mary run.");
}

#[test]
fn mixed_coordination_fails_fast() {
    let (mut t, _) = english();
    let np = t.noun_phrase("dog");
    let vp = t.verb_phrase("bark");
    let err = t.coordinate([np, vp]).unwrap_err();
    assert!(matches!(
        err,
        RealiserError::Spec(SpecError::MixedCoordination { .. })
    ));
}

#[test]
fn passive_voice() {
    let (mut t, r) = english();
    let ball = t.noun_phrase_with("the", "ball");
    let c = t.clause("John", "kick", ball).unwrap();
    t.set_passive(c, true).unwrap();
    t.set_tense(c, Tense::Past).unwrap();
    assert_eq!(r.realise(&t, c), "The ball was kicked by John.");
}

#[test]
fn modal_negation_fuses_cannot() {
    let (mut t, r) = english();
    let c = t.intransitive("John", "eat").unwrap();
    t.set_modal(c, Some("can")).unwrap();
    t.set_negated(c, true).unwrap();
    assert_eq!(r.realise(&t, c), "John cannot eat.");
    let r = r.fuse_cannot(false);
    assert_eq!(r.realise(&t, c), "John can not eat.");
}

#[test]
fn wh_subject_question() {
    let (mut t, r) = english();
    let ball = t.noun_phrase_with("the", "ball");
    let c = t.clause("John", "kick", ball).unwrap();
    t.set_tense(c, Tense::Past).unwrap();
    t.set_interrogative(c, InterrogativeType::Who, Some(DiscourseFunction::Subject))
        .unwrap();
    assert_eq!(r.realise(&t, c), "Who kicked the ball?");
}

#[test]
fn invalid_wh_argument_is_rejected() {
    let (mut t, _) = english();
    let c = t.intransitive("John", "sleep").unwrap();
    let err = t
        .set_interrogative(c, InterrogativeType::What, Some(DiscourseFunction::Complement))
        .unwrap_err();
    assert!(matches!(
        err,
        RealiserError::Spec(SpecError::InvalidWhArgument { .. })
    ));
}

#[test]
fn pronouns_follow_voice() {
    let (mut t, r) = english();
    let she = t.personal_pronoun(Person::Third, Number::Singular, Gender::Feminine);
    let they = t.personal_pronoun(Person::Third, Number::Plural, Gender::Neuter);
    let c = t.clause(she, "see", they).unwrap();
    assert_eq!(r.realise(&t, c), "She sees them.");
    t.set_passive(c, true).unwrap();
    assert_eq!(r.realise(&t, c), "They are seen by her.");
}

#[test]
fn embedded_clause_is_not_capitalized() {
    let (mut t, r) = english();
    let ball = t.noun_phrase_with("the", "ball");
    let inner = t.clause("John", "kick", ball).unwrap();
    let outer = t.clause("Mary", "say", inner).unwrap();
    assert_eq!(r.realise(&t, outer), "Mary says that John kicks the ball.");
}

#[test]
fn clause_status_follows_where_the_clause_is() {
    let (mut t, r) = english();
    let ball = t.noun_phrase_with("the", "ball");
    let inner = t.clause("John", "kick", ball).unwrap();
    t.set_interrogative(inner, InterrogativeType::YesNo, None)
        .unwrap();
    assert_eq!(r.realise(&t, inner), "Does John kick the ball?");

    let outer = t.clause("Mary", "wonder", inner).unwrap();
    assert_eq!(
        r.realise(&t, outer),
        "Mary wonders whether John kicks the ball."
    );

    t.detach(inner).unwrap();
    assert_eq!(r.realise(&t, inner), "Does John kick the ball?");

    t.add_object(outer, inner).unwrap();
    let p = t.paragraph([inner]).unwrap();
    let d = t.document(None, [p]).unwrap();
    assert_eq!(r.realise(&t, d), "Does John kick the ball?");
}

#[test]
fn infinitive_complement() {
    let (mut t, r) = english();
    let inner = t.intransitive("John", "leave").unwrap();
    t.set_form(inner, Form::Infinitive).unwrap();
    let outer = t.clause("Mary", "want", inner).unwrap();
    assert_eq!(r.realise(&t, outer), "Mary wants to leave.");
}

#[test]
fn document_output() {
    let (mut t, r) = english();
    let a = t.intransitive("John", "sleep").unwrap();
    let b = t.intransitive("Mary", "eat").unwrap();
    let p1 = t.paragraph([a]).unwrap();
    let p2 = t.paragraph([b]).unwrap();
    let d = t.document(Some("Evening"), [p1, p2]).unwrap();
    assert_eq!(r.realise(&t, d), "Evening\n\nJohn sleeps.\n\nMary eats.");

    let html = r.clone().output(OutputMode::Html);
    assert_eq!(
        html.realise(&t, d),
        "<h1>Evening</h1>\n<p>John sleeps.</p>\n<p>Mary eats.</p>"
    );
}

#[test]
fn realise_as_document_leaves_tree_alone() {
    let (mut t, r) = english();
    let c = t.intransitive("the dog", "bark").unwrap();
    let before = t.len();
    assert_eq!(r.realise_as_document(&t, c), "The dog barks.");
    assert_eq!(t.len(), before);
    assert_eq!(t.parent(c), None);
}

#[test]
fn promotion_wraps_in_units() {
    let (mut t, r) = english();
    let c = t.intransitive("the dog", "bark").unwrap();
    let doc = t.promote(c, akh_realiser::spec::DocLevel::Document).unwrap();
    assert_eq!(t.level(doc), Some(akh_realiser::spec::DocLevel::Document));
    assert_eq!(r.realise(&t, doc), "The dog barks.");
}

#[test]
fn config_file_is_loaded() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("realiser.toml");
    std::fs::write(&path, "contract_negation = true\nline_length = 0\n").unwrap();
    let config = RealiserConfig::load(&path).unwrap();
    assert!(config.contract_negation);
    assert_eq!(config.line_length, 0);

    let (mut t, r) = english();
    let r = r.with_config(config);
    let c = t.intransitive("John", "sleep").unwrap();
    t.set_negated(c, true).unwrap();
    assert_eq!(r.realise(&t, c), "John doesn't sleep.");
}

#[test]
fn missing_config_file_is_an_error() {
    let dir = tempfile::TempDir::new().unwrap();
    assert!(RealiserConfig::load(dir.path().join("absent.toml")).is_err());
}

#[test]
fn lexicon_extension_from_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("extra.toml");
    std::fs::write(
        &path,
        "[[entry]]\nbase = \"octopus\"\ncategory = \"noun\"\nplural = \"octopodes\"\n",
    )
    .unwrap();

    let lexicon = Arc::new(BasicLexicon::english());
    assert_eq!(lexicon.load_file(&path).unwrap(), 1);
    assert!(
        lexicon
            .lookup(akh_realiser::features::Category::Noun, "octopus")
            .is_some()
    );

    let mut t = SpecTree::new(lexicon.clone());
    let r = Realiser::for_tree(&t);
    let np = t.noun_phrase_with("the", "octopus");
    t.set_plural(np, true).unwrap();
    assert_eq!(r.realise(&t, np), "the octopodes");
}

#[test]
fn malformed_lexicon_file_is_reported() {
    let lexicon = BasicLexicon::english();
    let err = lexicon.extend_from_toml("[[entry]]\nbase = 3\n").unwrap_err();
    assert!(matches!(err, LexiconError::Parse { .. }));
}

#[test]
fn json_description_round_trip_to_text() {
    let json = r#"{
        "type": "clause",
        "subjects": ["John"],
        "verb": "kick",
        "objects": [{ "type": "noun", "specifier": "the", "head": "ball" }],
        "features": [{ "tense": "past" }, { "passive": true }]
    }"#;
    let (mut t, r) = english();
    let root = Node::from_json(json).unwrap().build(&mut t).unwrap();
    assert_eq!(r.realise(&t, root), "The ball was kicked by John.");
}

#[test]
fn json_document_description() {
    let json = r#"{
        "type": "document",
        "title": "Notes",
        "children": [
            { "type": "paragraph", "children": [
                { "type": "clause", "subjects": ["Mary"], "verb": "swim",
                  "features": [{ "modal": "can" }],
                  "interrogative": "yes_no" }
            ]}
        ]
    }"#;
    let (mut t, r) = english();
    let root = Node::from_json(json).unwrap().build(&mut t).unwrap();
    assert_eq!(r.realise(&t, root), "Notes\n\nCan Mary swim?");
}
