//! Feature assignment.
//!
//! [`SpecTree::set_feature`] is the single entry point: it checks the
//! feature against the target's kind, forwards clause features to the verb
//! phrase, and percolates coordinate features to every conjunct.

use crate::error::{FeatureError, RealiseResult};
use crate::features::{Category, Degree, Feature, FeatureKind, Form, Gender, Number, Person, Tense};

use super::phrase::PhraseKind;
use super::{SpecId, SpecTree};

/// Whether a phrase of `category` admits the feature.
fn admits(category: Category, feature: &Feature) -> bool {
    match feature.kind() {
        FeatureKind::Tense
        | FeatureKind::Form
        | FeatureKind::Passive
        | FeatureKind::Perfect
        | FeatureKind::Progressive
        | FeatureKind::Negated
        | FeatureKind::Modal => matches!(category, Category::Verb | Category::Clause),
        FeatureKind::Number | FeatureKind::Person => {
            matches!(category, Category::Noun | Category::Verb | Category::Clause)
        }
        FeatureKind::Gender | FeatureKind::Possessive | FeatureKind::Pronominal => {
            category == Category::Noun
        }
        FeatureKind::Degree => category.takes_degree(),
    }
}

impl SpecTree {
    /// Assign a grammatical feature.
    ///
    /// Fails with [`FeatureError::NotApplicable`] when the target does not
    /// carry the feature (tense on a noun phrase, degree on a verb phrase).
    pub fn set_feature(&mut self, id: SpecId, feature: Feature) -> RealiseResult<()> {
        let (category, kind_name, is_clause, is_coordinate) = {
            let phrase = self
                .node(id)?
                .as_phrase()
                .ok_or_else(|| self.wrong_kind(id, "feature assignment"))?;
            (
                phrase.category(),
                phrase.kind_name(),
                matches!(phrase.kind, PhraseKind::Clause(_)),
                matches!(phrase.kind, PhraseKind::Coordinate(_)),
            )
        };
        if !admits(category, &feature) {
            return Err(FeatureError::NotApplicable {
                feature: feature.kind(),
                target: kind_name,
            }
            .into());
        }

        if is_coordinate {
            let children = {
                let co = self.coordinate_mut(id, "feature assignment")?;
                co.store(feature.clone());
                co.children.clone()
            };
            for child in children {
                // Canned conjuncts carry no features.
                if self.category(child) == Some(Category::Canned) {
                    continue;
                }
                self.set_feature(child, feature.clone())?;
            }
            return Ok(());
        }

        if is_clause {
            return match self.verb_phrase_of(id) {
                Some(vp) => self.set_feature(vp, feature),
                None => Ok(()),
            };
        }

        let plural_switch = matches!(feature, Feature::Number(Number::Plural));
        let phrase = self.phrase_mut(id, "feature assignment")?;
        match (&mut phrase.kind, feature) {
            (PhraseKind::Verb(vp), feature) => match feature {
                Feature::Tense(t) => vp.tense = t,
                Feature::Form(f) => vp.form = f,
                Feature::Passive(b) => vp.passive = b,
                Feature::Perfect(b) => vp.perfect = b,
                Feature::Progressive(b) => vp.progressive = b,
                Feature::Negated(b) => vp.negated = b,
                Feature::Modal(m) => {
                    vp.modal = m.map(|m| m.trim().to_lowercase()).filter(|m| !m.is_empty())
                }
                Feature::Number(n) => vp.number = n,
                Feature::Person(p) => vp.person = p,
                _ => {}
            },
            (PhraseKind::Noun(np), feature) => match feature {
                Feature::Number(n) => np.number = n,
                Feature::Person(p) => np.person = p,
                Feature::Gender(g) => np.gender = g,
                Feature::Possessive(b) => np.possessive = b,
                Feature::Pronominal(b) => np.pronominal = b,
                _ => {}
            },
            (PhraseKind::Adjective(ap), Feature::Degree(d)) => ap.degree = d,
            (PhraseKind::Adverb(ap), Feature::Degree(d)) => ap.degree = d,
            _ => {}
        }

        if plural_switch {
            self.switch_specifier_to_plural(id);
        }
        Ok(())
    }

    /// "a cat" → "some cats", "this cat" → "these cats".
    fn switch_specifier_to_plural(&mut self, id: SpecId) {
        let Some(current) = self
            .phrase(id)
            .and_then(|p| p.as_noun())
            .and_then(|np| np.specifier.clone())
        else {
            return;
        };
        let switched = self.pluralize_specifier(current);
        if let Ok(np) = self.noun_mut(id, "number") {
            np.specifier = Some(switched);
        }
    }

    pub fn set_tense(&mut self, id: SpecId, tense: Tense) -> RealiseResult<()> {
        self.set_feature(id, Feature::Tense(tense))
    }

    pub fn set_form(&mut self, id: SpecId, form: Form) -> RealiseResult<()> {
        self.set_feature(id, Feature::Form(form))
    }

    pub fn set_passive(&mut self, id: SpecId, passive: bool) -> RealiseResult<()> {
        self.set_feature(id, Feature::Passive(passive))
    }

    pub fn set_perfect(&mut self, id: SpecId, perfect: bool) -> RealiseResult<()> {
        self.set_feature(id, Feature::Perfect(perfect))
    }

    pub fn set_progressive(&mut self, id: SpecId, progressive: bool) -> RealiseResult<()> {
        self.set_feature(id, Feature::Progressive(progressive))
    }

    pub fn set_negated(&mut self, id: SpecId, negated: bool) -> RealiseResult<()> {
        self.set_feature(id, Feature::Negated(negated))
    }

    pub fn set_modal(&mut self, id: SpecId, modal: Option<&str>) -> RealiseResult<()> {
        self.set_feature(id, Feature::Modal(modal.map(str::to_string)))
    }

    pub fn set_number(&mut self, id: SpecId, number: Number) -> RealiseResult<()> {
        self.set_feature(id, Feature::Number(number))
    }

    pub fn set_plural(&mut self, id: SpecId, plural: bool) -> RealiseResult<()> {
        let number = if plural { Number::Plural } else { Number::Singular };
        self.set_number(id, number)
    }

    pub fn set_person(&mut self, id: SpecId, person: Person) -> RealiseResult<()> {
        self.set_feature(id, Feature::Person(person))
    }

    pub fn set_gender(&mut self, id: SpecId, gender: Gender) -> RealiseResult<()> {
        self.set_feature(id, Feature::Gender(gender))
    }

    pub fn set_degree(&mut self, id: SpecId, degree: Degree) -> RealiseResult<()> {
        self.set_feature(id, Feature::Degree(degree))
    }

    pub fn set_possessive(&mut self, id: SpecId, possessive: bool) -> RealiseResult<()> {
        self.set_feature(id, Feature::Possessive(possessive))
    }

    pub fn set_pronominal(&mut self, id: SpecId, pronominal: bool) -> RealiseResult<()> {
        self.set_feature(id, Feature::Pronominal(pronominal))
    }
}
