//! In-process English lexicon.
//!
//! Entries live in a `DashMap` keyed by (category, lowercased form), so the
//! lexicon can be shared behind an `Arc` and still cache entries it creates
//! on a lookup miss. Closed classes are seeded at construction; open-class
//! words are created lazily with regular morphology.

use dashmap::DashMap;

use crate::error::FeatureError;
use crate::features::{Case, Category, Gender, Number, Person};

use super::closed;
use super::morph;
use super::{Lexicon, MorphRule, WordEntry};

type Key = (Category, String);

/// Thread-safe English lexicon with lazily created open-class entries.
pub struct BasicLexicon {
    entries: DashMap<Key, WordEntry>,
    /// The pronoun paradigm in table order, for feature-based lookup.
    paradigm: Vec<WordEntry>,
}

impl BasicLexicon {
    /// An empty lexicon: no closed classes, every word regular.
    pub fn empty() -> Self {
        Self {
            entries: DashMap::new(),
            paradigm: Vec::new(),
        }
    }

    /// The default English lexicon with pronouns, determiners, modals,
    /// conjunctions and complementisers.
    pub fn english() -> Self {
        let lexicon = Self {
            entries: DashMap::new(),
            paradigm: closed::pronoun_entries(),
        };
        for entry in &lexicon.paradigm {
            // First row per form wins: nominative before accusative.
            lexicon
                .entries
                .entry((Category::Pronoun, entry.key()))
                .or_insert_with(|| entry.clone());
        }
        for (form, entry) in closed::determiner_entries() {
            lexicon
                .entries
                .insert((Category::Determiner, form.to_string()), entry);
        }
        for (words, category) in [
            (closed::MODALS, Category::Modal),
            (closed::CONJUNCTIONS, Category::Conjunction),
            (closed::COMPLEMENTISERS, Category::Complementiser),
        ] {
            for entry in closed::simple_entries(words, category) {
                lexicon.insert(entry);
            }
        }
        lexicon
    }

    /// Insert or replace an entry.
    pub fn insert(&self, entry: WordEntry) {
        self.entries.insert((entry.category, entry.key()), entry);
    }

    /// Record an irregular form for `base`, creating the entry if needed.
    ///
    /// Fails if the rule cannot apply to the category.
    pub fn add_irregular(
        &self,
        category: Category,
        base: &str,
        rule: MorphRule,
        form: &str,
    ) -> Result<(), FeatureError> {
        if !rule.applies_to(category) {
            return Err(FeatureError::IncompatibleInflection { rule, category });
        }
        let key = (category, base.to_lowercase());
        self.entries
            .entry(key)
            .or_insert_with(|| WordEntry::new(base, category))
            .irregular
            .insert(rule, form.to_string());
        Ok(())
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the lexicon stores no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `word` is a known modal auxiliary.
    pub fn is_modal(&self, word: &str) -> bool {
        self.entries
            .contains_key(&(Category::Modal, word.to_lowercase()))
    }
}

impl Default for BasicLexicon {
    fn default() -> Self {
        Self::english()
    }
}

impl Lexicon for BasicLexicon {
    fn lookup(&self, category: Category, base: &str) -> Option<WordEntry> {
        self.entries
            .get(&(category, base.to_lowercase()))
            .map(|r| r.value().clone())
    }

    fn get_or_create(&self, category: Category, base: &str) -> WordEntry {
        let key = (category, base.to_lowercase());
        if let Some(entry) = self.entries.get(&key) {
            return entry.value().clone();
        }
        tracing::debug!(%category, base, "creating lexicon entry on lookup miss");
        self.entries
            .entry(key)
            .or_insert_with(|| WordEntry::new(base, category))
            .value()
            .clone()
    }

    fn apply_rule(&self, rule: MorphRule, entry: &WordEntry) -> Option<String> {
        if !rule.applies_to(entry.category) {
            return None;
        }
        if rule == MorphRule::Plural && entry.proper {
            return Some(entry.base.clone());
        }
        if let Some(form) = entry.irregular.get(&rule) {
            return Some(form.clone());
        }
        // The stored entry may carry irregular forms the caller's copy lacks.
        if let Some(stored) = self.entries.get(&(entry.category, entry.key())) {
            if let Some(form) = stored.irregular.get(&rule) {
                return Some(form.clone());
            }
        }
        Some(morph::inflect(&entry.base, rule))
    }

    fn find_pronoun(
        &self,
        person: Person,
        number: Number,
        gender: Gender,
        case: Case,
    ) -> Option<WordEntry> {
        let gendered = person == Person::Third && number == Number::Singular;
        self.paradigm
            .iter()
            .find(|entry| {
                entry.pronoun.is_some_and(|p| {
                    !p.expletive
                        && p.person == person
                        && p.number == number
                        && p.case == case
                        && (!gendered || p.gender == gender)
                })
            })
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_classes_are_seeded() {
        let lex = BasicLexicon::english();
        assert!(lex.lookup(Category::Determiner, "the").is_some());
        assert!(lex.lookup(Category::Pronoun, "him").is_some());
        assert!(lex.is_modal("can"));
        assert!(!lex.is_modal("kick"));
        assert!(lex.lookup(Category::Noun, "dog").is_none());
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let lex = BasicLexicon::english();
        let i = lex.lookup(Category::Pronoun, "i").unwrap();
        assert_eq!(i.base, "I");
        let the = lex.lookup(Category::Determiner, "The").unwrap();
        assert_eq!(the.base, "the");
    }

    #[test]
    fn miss_creates_and_caches() {
        let lex = BasicLexicon::empty();
        assert!(lex.is_empty());
        let dog = lex.get_or_create(Category::Noun, "dog");
        assert_eq!(dog.base, "dog");
        assert_eq!(lex.len(), 1);
        lex.get_or_create(Category::Noun, "dog");
        assert_eq!(lex.len(), 1);
        // Same base, other category: a separate entry.
        lex.get_or_create(Category::Verb, "dog");
        assert_eq!(lex.len(), 2);
    }

    #[test]
    fn irregular_forms_override_rules() {
        let lex = BasicLexicon::english();
        lex.add_irregular(Category::Noun, "octopus", MorphRule::Plural, "octopodes")
            .unwrap();
        let entry = WordEntry::new("octopus", Category::Noun);
        assert_eq!(
            lex.apply_rule(MorphRule::Plural, &entry).as_deref(),
            Some("octopodes")
        );
    }

    #[test]
    fn incompatible_inflection_is_rejected() {
        let lex = BasicLexicon::english();
        let err = lex
            .add_irregular(Category::Verb, "run", MorphRule::Plural, "runs")
            .unwrap_err();
        assert!(matches!(err, FeatureError::IncompatibleInflection { .. }));
    }

    #[test]
    fn rule_on_wrong_category_is_none() {
        let lex = BasicLexicon::english();
        let dog = lex.get_or_create(Category::Noun, "dog");
        assert_eq!(lex.apply_rule(MorphRule::Past, &dog), None);
    }

    #[test]
    fn proper_nouns_do_not_pluralize() {
        let lex = BasicLexicon::english();
        let mut john = WordEntry::new("John", Category::Noun);
        john.proper = true;
        assert_eq!(lex.apply_rule(MorphRule::Plural, &john).as_deref(), Some("John"));
    }

    #[test]
    fn pronoun_by_features() {
        let lex = BasicLexicon::english();
        let him = lex
            .find_pronoun(Person::Third, Number::Singular, Gender::Masculine, Case::Accusative)
            .unwrap();
        assert_eq!(him.base, "him");
        let they = lex
            .find_pronoun(Person::Third, Number::Plural, Gender::Feminine, Case::Nominative)
            .unwrap();
        assert_eq!(they.base, "they");
        let mine = lex
            .find_pronoun(Person::First, Number::Singular, Gender::Neuter, Case::Possessive)
            .unwrap();
        assert_eq!(mine.base, "mine");
    }

    #[test]
    fn empty_lexicon_has_no_pronouns() {
        let lex = BasicLexicon::empty();
        assert!(
            lex.find_pronoun(Person::First, Number::Singular, Gender::Neuter, Case::Nominative)
                .is_none()
        );
    }
}
