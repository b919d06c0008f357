//! Noun phrases and their specifiers.

use crate::error::RealiseResult;
use crate::features::{Agreement, Category, DiscourseFunction, Gender, Number, Person};
use crate::lexicon::{WordEntry, closed};

use super::coerce::Constituent;
use super::phrase::{Headed, PhraseKind};
use super::{SpecId, SpecTree};

/// What fills the determiner slot of a noun phrase. The variants are
/// mutually exclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Specifier {
    /// A determiner word ("the", "a", "these").
    Determiner(WordEntry),
    /// A possessive determiner pronoun ("his", "their").
    Pronoun(WordEntry),
    /// A possessive phrase ("John's") or other constituent.
    Phrase(SpecId),
}

impl Specifier {
    /// The plural partner of a determiner specifier, if it has one.
    fn plural_partner(&self) -> Option<&str> {
        match self {
            Specifier::Determiner(entry) => entry.determiner.as_ref()?.plural.as_deref(),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct NounPhrase {
    pub headed: Headed,
    pub specifier: Option<Specifier>,
    pub person: Person,
    pub number: Number,
    pub gender: Gender,
    /// Realize a pronoun instead of head and specifier.
    pub pronominal: bool,
    /// Explicitly assigned pronoun, realized verbatim.
    pub pronoun: Option<WordEntry>,
    pub possessive: bool,
    /// Agree as plural even when the head is singular ("the committee are").
    pub plural_agreement: bool,
    /// Head is an acronym: never capitalized by sentence orthography.
    pub acronym: bool,
}

impl NounPhrase {
    pub fn new(head: Option<WordEntry>) -> Self {
        Self {
            headed: Headed::new(head),
            ..Default::default()
        }
    }

    /// Person and number a verb agreeing with this phrase takes.
    pub fn agreement(&self) -> Agreement {
        let number = if self.plural_agreement {
            Number::Plural
        } else {
            self.number
        };
        Agreement::new(self.person, number)
    }

    pub fn is_expletive(&self) -> bool {
        self.pronominal && self.pronoun.as_ref().is_some_and(WordEntry::is_expletive)
    }
}

impl SpecTree {
    /// A bare noun phrase headed by `noun`.
    pub fn noun_phrase(&mut self, noun: &str) -> SpecId {
        let np = NounPhrase {
            headed: self.headed(Category::Noun, noun),
            ..Default::default()
        };
        self.alloc_phrase(PhraseKind::Noun(np))
    }

    /// A noun phrase with a specifier: `noun_phrase_with("the", "ball")`.
    pub fn noun_phrase_with(&mut self, specifier: &str, noun: &str) -> SpecId {
        let specifier = self.resolve_specifier(specifier);
        let np = NounPhrase {
            headed: self.headed(Category::Noun, noun),
            specifier: Some(specifier.clone()),
            ..Default::default()
        };
        let id = self.alloc_phrase(PhraseKind::Noun(np));
        if let Specifier::Phrase(child) = specifier {
            self.link(id, child, DiscourseFunction::Specifier);
        }
        id
    }

    /// A pronominal noun phrase with the given features. The surface form
    /// follows the function the phrase fills.
    pub fn personal_pronoun(&mut self, person: Person, number: Number, gender: Gender) -> SpecId {
        let np = NounPhrase {
            person,
            number,
            gender,
            pronominal: true,
            ..Default::default()
        };
        self.alloc_phrase(PhraseKind::Noun(np))
    }

    /// A noun phrase realized as exactly `word`, whatever its function.
    pub fn pronoun(&mut self, word: &str) -> SpecId {
        let entry = self.lexicon.get_or_create(Category::Pronoun, word);
        let mut np = NounPhrase::new(None);
        np.pronominal = true;
        if let Some(p) = entry.pronoun {
            np.person = p.person;
            np.number = p.number;
            np.gender = p.gender;
        }
        np.pronoun = Some(entry);
        self.alloc_phrase(PhraseKind::Noun(np))
    }

    /// A non-referential subject ("there", dummy "it").
    pub fn expletive(&mut self, word: &str) -> SpecId {
        let mut np = NounPhrase::new(None);
        np.pronominal = true;
        np.pronoun = Some(closed::expletive(&word.to_lowercase()));
        self.alloc_phrase(PhraseKind::Noun(np))
    }

    pub(crate) fn noun_mut(&mut self, id: SpecId, operation: &'static str) -> RealiseResult<&mut NounPhrase> {
        let err = self.wrong_kind(id, operation);
        match &mut self.phrase_mut(id, operation)?.kind {
            PhraseKind::Noun(np) => Ok(np),
            _ => Err(err.into()),
        }
    }

    /// Set the specifier of a noun phrase or coordinate noun phrase.
    ///
    /// Text resolves to a determiner, a possessive pronoun or canned text.
    /// On a plural phrase a determiner with a plural partner is switched
    /// immediately ("a" → "some").
    pub fn set_specifier(&mut self, id: SpecId, specifier: impl Into<Constituent>) -> RealiseResult<()> {
        let specifier = match specifier.into() {
            Constituent::Text(text) => self.resolve_specifier(&text),
            Constituent::Id(child) => Specifier::Phrase(child),
        };
        self.clear_specifier(id)?;
        if let Specifier::Phrase(child) = specifier {
            self.attach(id, child, DiscourseFunction::Specifier)?;
        }
        let plural = self.is_plural_noun(id);
        let specifier = if plural {
            self.pluralize_specifier(specifier)
        } else {
            specifier
        };
        let err = self.wrong_kind(id, "specifier");
        match &mut self.phrase_mut(id, "specifier")?.kind {
            PhraseKind::Noun(np) => np.specifier = Some(specifier),
            PhraseKind::Coordinate(co) if co.category == Category::Noun => {
                co.specifier = Some(specifier)
            }
            _ => return Err(err.into()),
        }
        Ok(())
    }

    /// Remove the specifier, detaching a phrase specifier.
    pub fn clear_specifier(&mut self, id: SpecId) -> RealiseResult<()> {
        let err = self.wrong_kind(id, "specifier");
        let old = match &mut self.phrase_mut(id, "specifier")?.kind {
            PhraseKind::Noun(np) => np.specifier.take(),
            PhraseKind::Coordinate(co) if co.category == Category::Noun => co.specifier.take(),
            _ => return Err(err.into()),
        };
        if let Some(Specifier::Phrase(child)) = old {
            self.orphan(child)?;
        }
        Ok(())
    }

    fn is_plural_noun(&self, id: SpecId) -> bool {
        self.phrase(id)
            .and_then(|p| p.as_noun())
            .is_some_and(|np| np.number.is_plural())
    }

    /// Swap a determiner for its plural partner, if it has one.
    pub(crate) fn pluralize_specifier(&self, specifier: Specifier) -> Specifier {
        let partner = specifier
            .plural_partner()
            .and_then(|partner| self.lexicon.determiner(partner));
        match partner {
            Some(entry) => Specifier::Determiner(entry),
            None => specifier,
        }
    }

    /// Assign an explicit pronoun. The phrase becomes pronominal and the
    /// pronoun is realized verbatim.
    pub fn set_pronoun(&mut self, id: SpecId, word: &str) -> RealiseResult<()> {
        let entry = self.lexicon.get_or_create(Category::Pronoun, word);
        let np = self.noun_mut(id, "pronoun")?;
        if let Some(p) = entry.pronoun {
            np.person = p.person;
            np.number = p.number;
            np.gender = p.gender;
        }
        np.pronominal = true;
        np.pronoun = Some(entry);
        Ok(())
    }

    pub fn set_acronym(&mut self, id: SpecId, acronym: bool) -> RealiseResult<()> {
        self.noun_mut(id, "acronym")?.acronym = acronym;
        Ok(())
    }

    pub fn set_plural_agreement(&mut self, id: SpecId, plural: bool) -> RealiseResult<()> {
        self.noun_mut(id, "plural agreement")?.plural_agreement = plural;
        Ok(())
    }

    /// Mark the head as a proper noun: it keeps its form in the plural.
    pub fn set_proper(&mut self, id: SpecId, proper: bool) -> RealiseResult<()> {
        let np = self.noun_mut(id, "proper noun")?;
        if let Some(head) = np.headed.head.as_mut() {
            head.proper = proper;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{RealiserError, SpecError};
    use crate::spec::tests::tree;

    fn np(t: &SpecTree, id: SpecId) -> &NounPhrase {
        t.phrase(id).unwrap().as_noun().unwrap()
    }

    #[test]
    fn specifier_is_resolved_against_determiners() {
        let mut t = tree();
        let id = t.noun_phrase_with("the", "ball");
        let spec = np(&t, id).specifier.clone().unwrap();
        assert!(matches!(spec, Specifier::Determiner(e) if e.base == "the"));
        assert_eq!(np(&t, id).headed.base(), "ball");
    }

    #[test]
    fn phrase_specifier_is_attached_as_specifier() {
        let mut t = tree();
        let john = t.noun_phrase("John");
        let dog = t.noun_phrase("dog");
        t.set_specifier(dog, john).unwrap();
        assert_eq!(t.parent(john), Some(dog));
        assert_eq!(t.function(john), Some(DiscourseFunction::Specifier));

        t.set_specifier(dog, "the").unwrap();
        assert_eq!(t.parent(john), None);
        assert!(t.children(dog).is_empty());
    }

    #[test]
    fn specifier_on_verb_phrase_is_wrong_kind() {
        let mut t = tree();
        let vp = t.verb_phrase("run");
        let err = t.set_specifier(vp, "the").unwrap_err();
        assert!(matches!(err, RealiserError::Spec(SpecError::WrongKind { .. })));
    }

    #[test]
    fn plural_phrase_switches_new_specifier() {
        let mut t = tree();
        let id = t.noun_phrase("cat");
        t.set_plural(id, true).unwrap();
        t.set_specifier(id, "this").unwrap();
        let spec = np(&t, id).specifier.clone().unwrap();
        assert!(matches!(spec, Specifier::Determiner(e) if e.base == "these"));
    }

    #[test]
    fn explicit_pronoun_copies_features() {
        let mut t = tree();
        let id = t.noun_phrase("woman");
        t.set_pronoun(id, "she").unwrap();
        let n = np(&t, id);
        assert!(n.pronominal);
        assert_eq!(n.gender, Gender::Feminine);
        assert_eq!(n.pronoun.as_ref().unwrap().base, "she");
    }

    #[test]
    fn plural_agreement_override() {
        let mut t = tree();
        let id = t.noun_phrase_with("the", "committee");
        assert_eq!(np(&t, id).agreement(), Agreement::third_singular());
        t.set_plural_agreement(id, true).unwrap();
        assert_eq!(np(&t, id).agreement(), Agreement::third_plural());
    }

    #[test]
    fn expletive_phrase() {
        let mut t = tree();
        let id = t.expletive("There");
        assert!(np(&t, id).is_expletive());
        assert_eq!(np(&t, id).pronoun.as_ref().unwrap().base, "there");
    }
}
