//! Clause realization: surface subjects, passive raising, questions,
//! clause forms and subordination.

use crate::features::{
    Agreement, Case, ClauseStatus, DiscourseFunction, Feature, FeatureKind, Form, WhArgument,
};
use crate::spec::{Clause, PhraseKind, Slot, SpecId, VerbPhrase};

use super::text;
use super::verb::{VerbParts, VerbPlan};
use super::{Ctx, Walk};

/// The complements the passive promotes to subject.
#[derive(Debug, Default)]
struct Raised {
    /// Complements of the verb phrase that are no longer realized there.
    complements: Vec<SpecId>,
    /// What is realized in subject position (a prepositional indirect
    /// object contributes its own object).
    surface: Vec<SpecId>,
    /// Function of the promoted complements.
    function: Option<DiscourseFunction>,
}

impl<'a> Walk<'a> {
    pub(crate) fn clause(&self, id: SpecId, cl: &'a Clause) -> String {
        let vp_id = cl.verb_phrase;
        let vp = vp_id
            .and_then(|v| self.tree.phrase(v))
            .filter(|p| !p.elided)
            .and_then(|p| p.as_verb());
        let coordinated = vp_id
            .and_then(|v| self.tree.phrase(v))
            .is_some_and(|p| p.as_coordinate().is_some());
        let form = vp.map(|v| v.form).unwrap_or_else(|| self.coordinated_form(vp_id));
        let passive = vp.is_some_and(|v| v.passive);
        let embedded = self.tree.clause_status(id) == ClauseStatus::Subordinate;
        let question = cl.interrogative;
        let wh_word = question.and_then(|q| q.kind.wh_word());
        let argument = question.and_then(|q| q.argument).filter(|_| wh_word.is_some());

        let mut subjects: Vec<SpecId> = cl.subjects.clone();
        let mut raised = match (passive, vp_id) {
            (true, Some(v)) => self.raise(v),
            _ => Raised::default(),
        };
        let mut plan = VerbPlan::default();
        if passive && !raised.surface.is_empty() {
            plan.agent = std::mem::take(&mut subjects);
            plan.excluded = raised.complements.clone();
        }

        // The WH word takes subject position: no inversion.
        let mut wh_subject = false;
        match argument {
            Some(WhArgument::Subject) if passive && !raised.surface.is_empty() => {
                plan.agent.clear();
                plan.strand_agent = true;
            }
            Some(WhArgument::Subject) => {
                subjects.clear();
                wh_subject = true;
            }
            Some(arg) if passive && raised.function == Some(arg.function()) => {
                raised.surface.clear();
                wh_subject = true;
            }
            Some(arg) => plan.questioned = Some(arg.function()),
            None => {}
        }

        let agreement = if wh_subject {
            Some(Agreement::third_singular())
        } else if !raised.surface.is_empty() {
            Some(self.tree.subjects_agreement(&raised.surface))
        } else if let Some(existential) = vp.and_then(|v| self.existential_agreement(&subjects, vp_id, v)) {
            Some(existential)
        } else if !subjects.is_empty() {
            Some(self.tree.subjects_agreement(&subjects))
        } else {
            None
        };
        plan.agreement = agreement;

        let mut subject_ctx = Ctx::default();
        let mut front_modifiers = cl.front_modifiers.clone();
        match form {
            Form::Imperative => {
                subjects.clear();
                raised.surface.clear();
            }
            Form::Gerund => {
                if !cl.suppress_genitive_in_gerund {
                    subject_ctx.possessive = true;
                }
            }
            Form::Infinitive => {
                subjects.clear();
                raised.surface.clear();
                plan.trailing = std::mem::take(&mut front_modifiers);
            }
            _ => {}
        }

        plan.invert = question.is_some()
            && !embedded
            && !wh_subject
            && form == Form::Normal
            && !coordinated;

        let mut parts: Vec<String> = Vec::new();
        if embedded && !cl.suppress_complementiser && !matches!(form, Form::Gerund | Form::Infinitive) {
            match question {
                Some(q) if q.kind.wh_word().is_some() => {}
                Some(_) => parts.push("whether".to_string()),
                None => parts.push(cl.complementiser.clone()),
            }
        }
        if let Some(cue) = cl.cue_phrase {
            let cue = self.phrase(cue, Ctx::default());
            if !cue.is_empty() {
                parts.push(text::join([cue.as_str(), ","]));
            }
        }
        parts.extend(self.each(&front_modifiers, Ctx::default()));
        if let Some(wh) = wh_word {
            parts.push(wh.to_string());
        }

        let verb = match (vp, vp_id) {
            (Some(v), Some(v_id)) => self.verb_parts(v_id, v, &plan),
            (None, Some(v_id)) => VerbParts {
                fronted: None,
                rest: self.phrase(
                    v_id,
                    Ctx {
                        agreement: plan.agreement,
                        ..Ctx::default()
                    },
                ),
            },
            (_, None) => VerbParts::default(),
        };
        if let Some(aux) = verb.fronted {
            parts.push(aux);
        }

        let surface = if raised.surface.is_empty() {
            self.each(&subjects, subject_ctx)
        } else {
            let raised_ctx = Ctx {
                case: Some(Case::Nominative),
                ..subject_ctx
            };
            self.each(&raised.surface, raised_ctx)
        };
        if !surface.is_empty() {
            parts.push(text::conjoin(&surface, "and"));
        }
        parts.push(verb.rest);
        text::join(&parts)
    }

    /// Passive raising: the direct objects if there are any, else the
    /// indirect objects, a prepositional one unwrapped to its object.
    fn raise(&self, vp: SpecId) -> Raised {
        let complements = self.tree.slot(vp, Slot::Complement);
        let with = |function: DiscourseFunction| -> Vec<SpecId> {
            complements
                .iter()
                .copied()
                .filter(|&c| self.tree.function(c) == Some(function))
                .collect()
        };
        let objects = with(DiscourseFunction::Object);
        if !objects.is_empty() {
            return Raised {
                surface: objects.clone(),
                complements: objects,
                function: Some(DiscourseFunction::Object),
            };
        }
        let indirect = with(DiscourseFunction::IndirectObject);
        if indirect.is_empty() {
            return Raised::default();
        }
        let surface = indirect
            .iter()
            .filter_map(|&c| match self.tree.phrase(c).map(|p| &p.kind) {
                Some(PhraseKind::Preposition(pp)) => pp.object(),
                Some(_) => Some(c),
                None => None,
            })
            .collect();
        Raised {
            complements: indirect,
            surface,
            function: Some(DiscourseFunction::IndirectObject),
        }
    }

    /// "there is a cat" / "there are cats": with an expletive subject and
    /// the copula the verb agrees with the objects and predicatives.
    fn existential_agreement(
        &self,
        subjects: &[SpecId],
        vp_id: Option<SpecId>,
        vp: &VerbPhrase,
    ) -> Option<Agreement> {
        let [subject] = subjects else {
            return None;
        };
        let expletive = self
            .tree
            .phrase(*subject)
            .and_then(|p| p.as_noun())
            .is_some_and(|np| np.is_expletive());
        if !expletive || !vp.is_copula() {
            return None;
        }
        let controllers: Vec<SpecId> = self
            .tree
            .slot(vp_id?, Slot::Complement)
            .into_iter()
            .filter(|&c| {
                matches!(
                    self.tree.function(c),
                    Some(DiscourseFunction::Object | DiscourseFunction::PredicativeComplement)
                )
            })
            .collect();
        Some(match controllers.as_slice() {
            [] => Agreement::third_singular(),
            [one] => self.tree.agreement(*one),
            many => self.tree.subjects_agreement(many),
        })
    }

    /// Form shared by a coordinated verb phrase, if one was set on it.
    fn coordinated_form(&self, vp_id: Option<SpecId>) -> Form {
        vp_id
            .and_then(|v| self.tree.phrase(v))
            .and_then(|p| p.as_coordinate())
            .and_then(|co| match co.feature(FeatureKind::Form) {
                Some(Feature::Form(form)) => Some(*form),
                _ => None,
            })
            .unwrap_or_default()
    }
}
