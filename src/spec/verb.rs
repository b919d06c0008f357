//! Verb phrases.

use crate::error::RealiseResult;
use crate::features::{Category, Form, Number, Person, Tense};

use super::phrase::{Headed, PhraseKind};
use super::{SpecId, SpecTree};

/// A verb with its complements and the features that drive the verb group.
///
/// The auxiliary stack ("will have been eaten") is not stored: it is built
/// from these features on every realization.
#[derive(Debug, Clone, Default)]
pub struct VerbPhrase {
    pub headed: Headed,
    pub tense: Tense,
    pub form: Form,
    /// Modal auxiliary ("can", "must"). Takes precedence over future tense.
    pub modal: Option<String>,
    pub perfect: bool,
    pub progressive: bool,
    pub passive: bool,
    pub negated: bool,
    /// Agreement used when no clause subject supplies one.
    pub person: Person,
    pub number: Number,
    /// Phrasal verb particle ("up" in "pick up").
    pub particle: Option<String>,
}

impl VerbPhrase {
    pub fn new(headed: Headed) -> Self {
        Self {
            headed,
            ..Default::default()
        }
    }

    /// Whether the head is the copula.
    pub fn is_copula(&self) -> bool {
        self.headed.base().eq_ignore_ascii_case("be")
    }
}

impl SpecTree {
    /// A verb phrase headed by `verb`. An empty string leaves the head unset.
    pub fn verb_phrase(&mut self, verb: &str) -> SpecId {
        let vp = VerbPhrase::new(self.headed(Category::Verb, verb));
        self.alloc_phrase(PhraseKind::Verb(vp))
    }

    pub(crate) fn verb_mut(&mut self, id: SpecId, operation: &'static str) -> RealiseResult<&mut VerbPhrase> {
        let err = self.wrong_kind(id, operation);
        match &mut self.phrase_mut(id, operation)?.kind {
            PhraseKind::Verb(vp) => Ok(vp),
            _ => Err(err.into()),
        }
    }

    /// Set the particle of a verb phrase, or of a clause's verb phrase.
    pub fn set_particle(&mut self, id: SpecId, particle: &str) -> RealiseResult<()> {
        let target = self.verb_target(id);
        let particle = particle.trim();
        self.verb_mut(target, "particle")?.particle =
            (!particle.is_empty()).then(|| particle.to_string());
        Ok(())
    }

    /// The verb phrase that verb-level operations on `id` act on: the
    /// clause's verb phrase for a clause, `id` itself otherwise.
    pub(crate) fn verb_target(&self, id: SpecId) -> SpecId {
        self.phrase(id)
            .and_then(|p| p.as_clause())
            .and_then(|c| c.verb_phrase)
            .unwrap_or(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{RealiserError, SpecError};
    use crate::spec::tests::tree;

    #[test]
    fn defaults() {
        let mut t = tree();
        let id = t.verb_phrase("kick");
        let vp = t.phrase(id).unwrap().as_verb().unwrap();
        assert_eq!(vp.tense, Tense::Present);
        assert_eq!(vp.form, Form::Normal);
        assert!(vp.modal.is_none());
        assert!(!vp.passive && !vp.negated);
        assert_eq!(vp.headed.base(), "kick");
        assert!(!vp.is_copula());
    }

    #[test]
    fn particle_on_clause_reaches_verb_phrase() {
        let mut t = tree();
        let clause = t.clause("John", "pick", "the ball").unwrap();
        t.set_particle(clause, "up").unwrap();
        let vp = t.verb_phrase_of(clause).unwrap();
        let verb = t.phrase(vp).unwrap().as_verb().unwrap();
        assert_eq!(verb.particle.as_deref(), Some("up"));
    }

    #[test]
    fn particle_on_noun_phrase_is_wrong_kind() {
        let mut t = tree();
        let np = t.noun_phrase("dog");
        let err = t.set_particle(np, "up").unwrap_err();
        assert!(matches!(err, RealiserError::Spec(SpecError::WrongKind { .. })));
    }

    #[test]
    fn empty_verb_has_no_head() {
        let mut t = tree();
        let id = t.verb_phrase("");
        assert!(t.phrase(id).unwrap().headed().unwrap().head.is_none());
    }
}
