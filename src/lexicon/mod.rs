//! The lexicon/morphology collaborator.
//!
//! The realiser only talks to word data through the narrow [`Lexicon`]
//! trait: look an entry up, lazily create one on a miss, apply a named
//! morphological rule, inflect a verb, and find a pronoun by features.
//! [`BasicLexicon`] is the in-process English implementation.
//!
//! ```
//! use akh_realiser::lexicon::{BasicLexicon, Lexicon, MorphRule};
//! use akh_realiser::features::Category;
//!
//! let lexicon = BasicLexicon::english();
//! let mouse = lexicon.get_or_create(Category::Noun, "mouse");
//! assert_eq!(lexicon.apply_rule(MorphRule::Plural, &mouse).as_deref(), Some("mice"));
//! ```

pub mod basic;
pub mod closed;
pub mod load;
pub mod morph;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::features::{Agreement, Case, Category, Gender, Number, Person, Tense};

pub use basic::BasicLexicon;

/// A named morphological transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MorphRule {
    Plural,
    Comparative,
    Superlative,
    Present3s,
    Past,
    PastParticiple,
    PresentParticiple,
}

impl MorphRule {
    pub const ALL: [MorphRule; 7] = [
        MorphRule::Plural,
        MorphRule::Comparative,
        MorphRule::Superlative,
        MorphRule::Present3s,
        MorphRule::Past,
        MorphRule::PastParticiple,
        MorphRule::PresentParticiple,
    ];

    /// Whether this rule can inflect a word of the given category.
    pub fn applies_to(self, category: Category) -> bool {
        match self {
            MorphRule::Plural => category == Category::Noun,
            MorphRule::Comparative | MorphRule::Superlative => category.takes_degree(),
            MorphRule::Present3s
            | MorphRule::Past
            | MorphRule::PastParticiple
            | MorphRule::PresentParticiple => category == Category::Verb,
        }
    }

    /// Parse a rule from its snake_case name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|rule| rule.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            MorphRule::Plural => "plural",
            MorphRule::Comparative => "comparative",
            MorphRule::Superlative => "superlative",
            MorphRule::Present3s => "present3s",
            MorphRule::Past => "past",
            MorphRule::PastParticiple => "past_participle",
            MorphRule::PresentParticiple => "present_participle",
        }
    }
}

impl std::fmt::Display for MorphRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Grammatical features of a pronoun form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PronounFeatures {
    pub person: Person,
    pub number: Number,
    pub gender: Gender,
    pub case: Case,
    /// Non-referential pronoun ("there", dummy "it"); never re-cased.
    pub expletive: bool,
}

/// Determiner data needed for number switching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeterminerFeatures {
    /// The form used when the noun phrase becomes plural ("a" → "some").
    pub plural: Option<String>,
    /// The indefinite singular article, subject to a/an allomorphy.
    pub indefinite: bool,
}

/// A lexical entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    pub base: String,
    pub category: Category,
    /// Irregular forms overriding the regular rules.
    #[serde(default)]
    pub irregular: BTreeMap<MorphRule, String>,
    #[serde(default)]
    pub pronoun: Option<PronounFeatures>,
    #[serde(default)]
    pub determiner: Option<DeterminerFeatures>,
    /// Proper nouns never take a plural inflection.
    #[serde(default)]
    pub proper: bool,
}

impl WordEntry {
    pub fn new(base: impl Into<String>, category: Category) -> Self {
        Self {
            base: base.into(),
            category,
            irregular: BTreeMap::new(),
            pronoun: None,
            determiner: None,
            proper: false,
        }
    }

    pub fn with_irregular(mut self, rule: MorphRule, form: impl Into<String>) -> Self {
        self.irregular.insert(rule, form.into());
        self
    }

    pub fn is_expletive(&self) -> bool {
        self.pronoun.is_some_and(|p| p.expletive)
    }

    pub fn is_indefinite_article(&self) -> bool {
        self.determiner.as_ref().is_some_and(|d| d.indefinite)
    }

    /// Lowercased base form, the key entries are stored under.
    pub fn key(&self) -> String {
        self.base.to_lowercase()
    }
}

/// The narrow interface the realiser consumes.
///
/// Implementations may cache lazily created entries; all such mutation
/// goes through `&self` so a lexicon can be shared behind an `Arc`.
pub trait Lexicon: Send + Sync {
    /// Find an existing entry.
    fn lookup(&self, category: Category, base: &str) -> Option<WordEntry>;

    /// Find an entry, creating (and possibly caching) a regular one on a miss.
    fn get_or_create(&self, category: Category, base: &str) -> WordEntry;

    /// Apply a named transform. `None` when the rule does not apply to the
    /// entry's category.
    fn apply_rule(&self, rule: MorphRule, entry: &WordEntry) -> Option<String>;

    /// Find the pronoun form with the given features.
    fn find_pronoun(
        &self,
        person: Person,
        number: Number,
        gender: Gender,
        case: Case,
    ) -> Option<WordEntry>;

    /// Fully inflected verb form for a finite verb.
    fn verb_form(&self, base: &str, tense: Tense, person: Person, number: Number) -> String {
        let agreement = Agreement::new(person, number);
        if let Some(form) = morph::be_form(base, tense, agreement) {
            return form;
        }
        let entry = self.get_or_create(Category::Verb, base);
        match tense {
            Tense::Future => format!("will {}", entry.base),
            Tense::Past => self
                .apply_rule(MorphRule::Past, &entry)
                .unwrap_or_else(|| entry.base.clone()),
            Tense::Present => {
                if person == Person::Third && number == Number::Singular {
                    self.apply_rule(MorphRule::Present3s, &entry)
                        .unwrap_or_else(|| entry.base.clone())
                } else {
                    entry.base.clone()
                }
            }
        }
    }

    /// Convenience: the determiner entry for `word`, if it is one.
    fn determiner(&self, word: &str) -> Option<WordEntry> {
        self.lookup(Category::Determiner, word)
    }

    /// Convenience: the pronoun entry for `word`, if it is one.
    fn pronoun(&self, word: &str) -> Option<WordEntry> {
        self.lookup(Category::Pronoun, word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rules_are_category_bound() {
        assert!(MorphRule::Plural.applies_to(Category::Noun));
        assert!(!MorphRule::Plural.applies_to(Category::Verb));
        assert!(MorphRule::Comparative.applies_to(Category::Adverb));
        assert!(MorphRule::Past.applies_to(Category::Verb));
        assert!(!MorphRule::Superlative.applies_to(Category::Noun));
    }

    #[test]
    fn rule_names_round_trip() {
        for rule in MorphRule::ALL {
            assert_eq!(MorphRule::from_name(rule.name()), Some(rule));
        }
        assert_eq!(MorphRule::from_name("dual"), None);
    }

    #[test]
    fn default_verb_form_uses_rules() {
        let lexicon = BasicLexicon::english();
        assert_eq!(
            lexicon.verb_form("kick", Tense::Present, Person::Third, Number::Singular),
            "kicks"
        );
        assert_eq!(
            lexicon.verb_form("kick", Tense::Present, Person::First, Number::Plural),
            "kick"
        );
        assert_eq!(
            lexicon.verb_form("eat", Tense::Past, Person::Third, Number::Singular),
            "ate"
        );
        assert_eq!(
            lexicon.verb_form("be", Tense::Present, Person::First, Number::Singular),
            "am"
        );
        assert_eq!(
            lexicon.verb_form("go", Tense::Future, Person::Third, Number::Singular),
            "will go"
        );
    }
}
