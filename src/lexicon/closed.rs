//! Closed-class word tables: the pronoun paradigm, determiners, modals.

use crate::features::{Case, Category, Gender, Number, Person};

use super::{DeterminerFeatures, PronounFeatures, WordEntry};

use Case::{Accusative as Acc, Genitive as Gen, Nominative as Nom, Possessive as Poss};
use Gender::{Feminine as F, Masculine as M, Neuter as N};
use Number::{Plural as Pl, Singular as Sg};
use Person::{First, Second, Third};

/// (form, person, number, gender, case)
///
/// Order matters: lookups by form return the first row, so the nominative
/// rows come first.
pub const PRONOUNS: &[(&str, Person, Number, Gender, Case)] = &[
    ("I", First, Sg, N, Nom),
    ("me", First, Sg, N, Acc),
    ("my", First, Sg, N, Gen),
    ("mine", First, Sg, N, Poss),
    ("you", Second, Sg, N, Nom),
    ("you", Second, Sg, N, Acc),
    ("your", Second, Sg, N, Gen),
    ("yours", Second, Sg, N, Poss),
    ("you", Second, Pl, N, Nom),
    ("you", Second, Pl, N, Acc),
    ("your", Second, Pl, N, Gen),
    ("yours", Second, Pl, N, Poss),
    ("he", Third, Sg, M, Nom),
    ("him", Third, Sg, M, Acc),
    ("his", Third, Sg, M, Gen),
    ("his", Third, Sg, M, Poss),
    ("she", Third, Sg, F, Nom),
    ("her", Third, Sg, F, Acc),
    ("her", Third, Sg, F, Gen),
    ("hers", Third, Sg, F, Poss),
    ("it", Third, Sg, N, Nom),
    ("it", Third, Sg, N, Acc),
    ("its", Third, Sg, N, Gen),
    ("its", Third, Sg, N, Poss),
    ("we", First, Pl, N, Nom),
    ("us", First, Pl, N, Acc),
    ("our", First, Pl, N, Gen),
    ("ours", First, Pl, N, Poss),
    ("they", Third, Pl, N, Nom),
    ("them", Third, Pl, N, Acc),
    ("their", Third, Pl, N, Gen),
    ("theirs", Third, Pl, N, Poss),
];

/// Non-referential pronouns.
pub const EXPLETIVES: &[&str] = &["there"];

/// (determiner, plural partner, indefinite article)
pub const DETERMINERS: &[(&str, Option<&str>, bool)] = &[
    ("a", Some("some"), true),
    ("an", Some("some"), true),
    ("the", None, false),
    ("this", Some("these"), false),
    ("that", Some("those"), false),
    ("these", None, false),
    ("those", None, false),
    ("some", None, false),
    ("any", None, false),
    ("no", None, false),
    ("every", None, false),
    ("each", None, false),
    ("all", None, false),
    ("both", None, false),
    ("either", None, false),
    ("neither", None, false),
    ("many", None, false),
    ("few", None, false),
    ("several", None, false),
    ("much", None, false),
    ("another", None, false),
];

pub const MODALS: &[&str] = &[
    "can", "could", "may", "might", "must", "shall", "should", "will", "would",
];

pub const CONJUNCTIONS: &[&str] = &["and", "or", "but", "nor", "yet"];

pub const COMPLEMENTISERS: &[&str] = &["that", "whether", "if", "because", "although", "while"];

pub fn pronoun_entries() -> Vec<WordEntry> {
    let mut entries: Vec<WordEntry> = PRONOUNS
        .iter()
        .map(|&(form, person, number, gender, case)| WordEntry {
            pronoun: Some(PronounFeatures {
                person,
                number,
                gender,
                case,
                expletive: false,
            }),
            ..WordEntry::new(form, Category::Pronoun)
        })
        .collect();
    entries.extend(EXPLETIVES.iter().map(|&form| expletive(form)));
    entries
}

/// A non-referential pronoun entry ("there", dummy "it").
pub fn expletive(form: &str) -> WordEntry {
    WordEntry {
        pronoun: Some(PronounFeatures {
            person: Third,
            number: Sg,
            gender: N,
            case: Nom,
            expletive: true,
        }),
        ..WordEntry::new(form, Category::Pronoun)
    }
}

/// Determiner entries keyed by their written form.
///
/// "an" is stored under its own key but its entry has base "a": both go
/// through the same allomorphy at realization time.
pub fn determiner_entries() -> Vec<(&'static str, WordEntry)> {
    DETERMINERS
        .iter()
        .map(|&(form, plural, indefinite)| {
            let base = if form == "an" { "a" } else { form };
            let entry = WordEntry {
                determiner: Some(DeterminerFeatures {
                    plural: plural.map(str::to_string),
                    indefinite,
                }),
                ..WordEntry::new(base, Category::Determiner)
            };
            (form, entry)
        })
        .collect()
}

pub fn simple_entries(words: &[&str], category: Category) -> Vec<WordEntry> {
    words
        .iter()
        .map(|&w| WordEntry::new(w, category))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paradigm_is_complete() {
        for person in [First, Second, Third] {
            for number in [Sg, Pl] {
                for case in [Nom, Acc, Gen, Poss] {
                    assert!(
                        PRONOUNS
                            .iter()
                            .any(|&(_, p, n, _, c)| p == person && n == number && c == case),
                        "missing {person:?} {number:?} {case:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn an_is_stored_as_a() {
        let entries = determiner_entries();
        let (_, an) = entries.iter().find(|(form, _)| *form == "an").unwrap();
        assert_eq!(an.base, "a");
        assert!(an.is_indefinite_article());
        assert_eq!(an.determiner.as_ref().unwrap().plural.as_deref(), Some("some"));
    }

    #[test]
    fn expletive_there() {
        let there = expletive("there");
        assert!(there.is_expletive());
        assert_eq!(there.category, Category::Pronoun);
    }
}
