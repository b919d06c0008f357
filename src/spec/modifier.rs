//! Prepositional, adjective and adverb phrases.

use crate::error::RealiseResult;
use crate::features::{Category, Degree, DiscourseFunction};

use super::coerce::Constituent;
use super::phrase::{Headed, PhraseKind, Slot};
use super::{SpecId, SpecTree};

#[derive(Debug, Clone, Default)]
pub struct PrepPhrase {
    pub headed: Headed,
}

impl PrepPhrase {
    /// The prepositional object, if any.
    pub fn object(&self) -> Option<SpecId> {
        self.headed.complements.first().copied()
    }
}

#[derive(Debug, Clone, Default)]
pub struct AdjectivePhrase {
    pub headed: Headed,
    pub degree: Degree,
}

#[derive(Debug, Clone, Default)]
pub struct AdverbPhrase {
    pub headed: Headed,
    pub degree: Degree,
}

impl SpecTree {
    /// A prepositional phrase: `prep_phrase("in", "the park")`.
    pub fn prep_phrase(&mut self, preposition: &str, object: impl Into<Constituent>) -> RealiseResult<SpecId> {
        let pp = PrepPhrase {
            headed: self.headed(Category::Preposition, preposition),
        };
        let id = self.alloc_phrase(PhraseKind::Preposition(pp));
        let object = self.coerce(object);
        self.add_to_slot(id, object, Slot::Complement, DiscourseFunction::PrepObject)?;
        Ok(id)
    }

    /// A prepositional phrase with no object yet.
    pub fn preposition(&mut self, preposition: &str) -> SpecId {
        let pp = PrepPhrase {
            headed: self.headed(Category::Preposition, preposition),
        };
        self.alloc_phrase(PhraseKind::Preposition(pp))
    }

    pub fn adjective_phrase(&mut self, adjective: &str) -> SpecId {
        let ap = AdjectivePhrase {
            headed: self.headed(Category::Adjective, adjective),
            degree: Degree::Positive,
        };
        self.alloc_phrase(PhraseKind::Adjective(ap))
    }

    pub fn adverb_phrase(&mut self, adverb: &str) -> SpecId {
        let ap = AdverbPhrase {
            headed: self.headed(Category::Adverb, adverb),
            degree: Degree::Positive,
        };
        self.alloc_phrase(PhraseKind::Adverb(ap))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::tests::tree;

    #[test]
    fn prep_phrase_object_is_prep_object() {
        let mut t = tree();
        let park = t.noun_phrase_with("the", "park");
        let pp = t.prep_phrase("in", park).unwrap();
        assert_eq!(t.parent(park), Some(pp));
        assert_eq!(t.function(park), Some(DiscourseFunction::PrepObject));
        let p = t.phrase(pp).unwrap();
        assert_eq!(p.category(), Category::Preposition);
        match &p.kind {
            PhraseKind::Preposition(pp) => assert_eq!(pp.object(), Some(park)),
            other => panic!("expected a prepositional phrase, got {other:?}"),
        }
    }

    #[test]
    fn modifier_categories() {
        let mut t = tree();
        let adj = t.adjective_phrase("quick");
        let adv = t.adverb_phrase("quickly");
        assert_eq!(t.category(adj), Some(Category::Adjective));
        assert_eq!(t.category(adv), Some(Category::Adverb));
    }
}
