//! Turning loose arguments into constituents.
//!
//! Attaching operations accept either an existing node or a raw string.
//! Strings naming a personal or possessive pronoun become pronominal noun
//! phrases, a determiner pronoun ("my", "their") becomes a headless noun
//! phrase with that specifier, "there" becomes an expletive noun phrase, and everything else
//! is wrapped as opaque canned text.

use crate::features::{Case, Category};
use crate::lexicon::{Lexicon, WordEntry, closed};

use super::noun::{NounPhrase, Specifier};
use super::phrase::{Headed, PhraseKind};
use super::{SpecId, SpecTree};

/// An argument to an attaching operation: a node already in the tree, or
/// text still to be coerced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Constituent {
    Id(SpecId),
    Text(String),
}

impl From<SpecId> for Constituent {
    fn from(id: SpecId) -> Self {
        Constituent::Id(id)
    }
}

impl From<&str> for Constituent {
    fn from(text: &str) -> Self {
        Constituent::Text(text.to_string())
    }
}

impl From<String> for Constituent {
    fn from(text: String) -> Self {
        Constituent::Text(text)
    }
}

impl From<&String> for Constituent {
    fn from(text: &String) -> Self {
        Constituent::Text(text.clone())
    }
}

impl SpecTree {
    /// Resolve a constituent to a node, allocating one for text.
    pub fn coerce(&mut self, constituent: impl Into<Constituent>) -> SpecId {
        match constituent.into() {
            Constituent::Id(id) => id,
            Constituent::Text(text) => self.coerce_text(&text),
        }
    }

    fn coerce_text(&mut self, text: &str) -> SpecId {
        let word = text.trim();
        if closed::EXPLETIVES.iter().any(|e| e.eq_ignore_ascii_case(word)) {
            return self.expletive(word);
        }
        if let Some(entry) = self.lexicon.pronoun(word).filter(|e| !e.is_expletive()) {
            if let Some(p) = entry.pronoun.filter(|p| p.case == Case::Genitive) {
                // A bare determiner pronoun is kept as written: "my", not "mine".
                let mut np = NounPhrase::new(None);
                np.person = p.person;
                np.number = p.number;
                np.gender = p.gender;
                np.specifier = Some(Specifier::Pronoun(entry));
                return self.alloc_phrase(PhraseKind::Noun(np));
            }
            return self.alloc_pronominal(&entry);
        }
        self.canned(text)
    }

    /// A pronominal noun phrase carrying the features of a pronoun entry.
    /// The surface form is recomputed from those features and the function
    /// the phrase ends up filling.
    pub(crate) fn alloc_pronominal(&mut self, entry: &WordEntry) -> SpecId {
        let mut np = NounPhrase::new(None);
        np.pronominal = true;
        if let Some(p) = entry.pronoun {
            np.person = p.person;
            np.number = p.number;
            np.gender = p.gender;
            np.possessive = matches!(p.case, Case::Genitive | Case::Possessive);
        }
        self.alloc_phrase(PhraseKind::Noun(np))
    }

    /// Opaque text, realized verbatim.
    pub fn canned(&mut self, text: &str) -> SpecId {
        self.alloc_phrase(PhraseKind::Canned(text.to_string()))
    }

    /// Resolve specifier text: a known determiner, else a possessive
    /// determiner pronoun, else canned text attached as a phrase.
    pub(crate) fn resolve_specifier(&mut self, text: &str) -> Specifier {
        let word = text.trim();
        if let Some(entry) = self.lexicon.determiner(word) {
            return Specifier::Determiner(entry);
        }
        if let Some(genitive) = self.genitive_of(word) {
            return Specifier::Pronoun(genitive);
        }
        tracing::debug!(specifier = word, "unknown specifier, wrapping as canned text");
        Specifier::Phrase(self.canned(word))
    }

    /// The genitive pronoun entry if `word` is one. Forms shared between
    /// cases ("her") are stored under their first case, so the check goes
    /// through the paradigm.
    fn genitive_of(&self, word: &str) -> Option<WordEntry> {
        let p = self.lexicon.pronoun(word)?.pronoun?;
        if p.expletive {
            return None;
        }
        self.lexicon
            .find_pronoun(p.person, p.number, p.gender, Case::Genitive)
            .filter(|g| g.base.eq_ignore_ascii_case(word))
    }

    /// Head entry for a word of the given category, created on a miss.
    pub(crate) fn head_entry(&self, category: Category, base: &str) -> Option<WordEntry> {
        let base = base.trim();
        if base.is_empty() {
            None
        } else {
            Some(self.lexicon.get_or_create(category, base))
        }
    }

    pub(crate) fn headed(&self, category: Category, base: &str) -> Headed {
        Headed::new(self.head_entry(category, base))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::{Gender, Number, Person};
    use crate::spec::tests::tree;

    #[test]
    fn plain_text_becomes_canned() {
        let mut t = tree();
        let id = t.coerce("in the morning");
        assert!(matches!(
            &t.phrase(id).unwrap().kind,
            PhraseKind::Canned(s) if s == "in the morning"
        ));
    }

    #[test]
    fn pronoun_text_becomes_pronominal_noun_phrase() {
        let mut t = tree();
        let id = t.coerce("she");
        let np = t.phrase(id).unwrap().as_noun().unwrap();
        assert!(np.pronominal);
        assert_eq!(np.person, Person::Third);
        assert_eq!(np.number, Number::Singular);
        assert_eq!(np.gender, Gender::Feminine);
        assert!(!np.possessive);

        let id = t.coerce("theirs");
        let np = t.phrase(id).unwrap().as_noun().unwrap();
        assert!(np.possessive);
        assert_eq!(np.number, Number::Plural);
    }

    #[test]
    fn determiner_pronoun_text_is_kept_as_written() {
        let mut t = tree();
        let id = t.coerce("their");
        let np = t.phrase(id).unwrap().as_noun().unwrap();
        assert!(!np.pronominal);
        assert_eq!(np.number, Number::Plural);
        assert!(matches!(&np.specifier, Some(Specifier::Pronoun(e)) if e.base == "their"));

        let id = t.coerce("her");
        assert!(t.phrase(id).unwrap().as_noun().unwrap().pronominal);
    }

    #[test]
    fn there_becomes_expletive() {
        let mut t = tree();
        let id = t.coerce("there");
        let np = t.phrase(id).unwrap().as_noun().unwrap();
        assert!(np.is_expletive());
    }

    #[test]
    fn existing_ids_pass_through() {
        let mut t = tree();
        let np = t.noun_phrase("dog");
        assert_eq!(t.coerce(np), np);
    }

    #[test]
    fn specifier_resolution_order() {
        let mut t = tree();
        assert!(matches!(t.resolve_specifier("the"), Specifier::Determiner(_)));
        assert!(matches!(t.resolve_specifier("his"), Specifier::Pronoun(_)));
        assert!(matches!(t.resolve_specifier("her"), Specifier::Pronoun(_)));
        assert!(matches!(t.resolve_specifier("him"), Specifier::Phrase(_)));
        assert!(matches!(t.resolve_specifier("John's"), Specifier::Phrase(_)));
    }
}
