//! Verb phrase realization: the verb group and the complement sequence.
//!
//! The verb group is built from the head outwards on a stack. Each layer
//! (passive, progressive, perfect, modal, negation) pushes the form the
//! current front word takes under it and replaces the front with its own
//! auxiliary. The stack is then read back in reverse behind the inflected
//! front word:
//!
//! ```text
//! eat, passive      push "eaten"  front "be"
//!      perfect      push "been"   front "have"
//!      modal "can"  push "have"   front "can"
//!      negated      push "not"
//! => can not have been eaten
//! ```

use crate::features::{Agreement, Category, DiscourseFunction, Form, Tense};
use crate::lexicon::MorphRule;
use crate::spec::{PhraseKind, Slot, SpecId, VerbPhrase};

use super::text;
use super::{Ctx, Walk};

/// What an enclosing clause asks of its verb phrase.
#[derive(Debug, Default)]
pub(crate) struct VerbPlan {
    /// Agreement of the surface subject. Falls back to the phrase's own
    /// person and number.
    pub agreement: Option<Agreement>,
    /// Complements realized elsewhere (raised to subject by the passive).
    pub excluded: Vec<SpecId>,
    /// Complements with this function are replaced by a WH word. A
    /// prepositional one leaves its preposition stranded.
    pub questioned: Option<DiscourseFunction>,
    /// Subject-auxiliary inversion: the first word of the group is handed
    /// back separately and do-support is added when no auxiliary exists.
    pub invert: bool,
    /// Logical subjects realized as the passive agent ("by John").
    pub agent: Vec<SpecId>,
    /// The agent itself is questioned: only "by" remains.
    pub strand_agent: bool,
    /// Constituents placed after the postmodifiers.
    pub trailing: Vec<SpecId>,
}

/// A realized verb phrase split for inversion.
#[derive(Debug, Default)]
pub(crate) struct VerbParts {
    pub fronted: Option<String>,
    pub rest: String,
}

const AGENT_PREPOSITION: &str = "by";

impl<'a> Walk<'a> {
    /// A verb phrase on its own, or as a conjunct of a coordinated verb
    /// phrase.
    pub(crate) fn verb_phrase(&self, id: SpecId, vp: &VerbPhrase, ctx: Ctx<'a>) -> String {
        let plan = VerbPlan {
            agreement: ctx.agreement,
            ..VerbPlan::default()
        };
        let parts = self.verb_parts(id, vp, &plan);
        text::join(parts.fronted.iter().chain(std::iter::once(&parts.rest)))
    }

    pub(crate) fn verb_parts(&self, id: SpecId, vp: &VerbPhrase, plan: &VerbPlan) -> VerbParts {
        let agreement = plan
            .agreement
            .unwrap_or_else(|| Agreement::new(vp.person, vp.number));
        let mut group = self.verb_group(vp, agreement, plan.invert);
        let fronted = if plan.invert && !group.is_empty() {
            Some(group.remove(0))
        } else {
            None
        };

        let ctx = Ctx::default();
        let mut parts = self.each(&self.tree.ordered(id, Slot::Premodifier), ctx);
        parts.push(text::join(&group));
        if let Some(particle) = &vp.particle {
            parts.push(particle.clone());
        }
        parts.extend(self.complements(id, plan));
        if plan.strand_agent {
            parts.push(AGENT_PREPOSITION.to_string());
        } else if !plan.agent.is_empty() {
            let agent_ctx = Ctx {
                case: Some(crate::features::Case::Accusative),
                ..Ctx::default()
            };
            let agents = self.each(&plan.agent, agent_ctx);
            if !agents.is_empty() {
                parts.push(AGENT_PREPOSITION.to_string());
                parts.push(text::conjoin(&agents, "and"));
            }
        }
        parts.extend(self.each(&self.tree.ordered(id, Slot::Postmodifier), ctx));
        parts.extend(self.each(&plan.trailing, ctx));

        let mut rest = text::join(&parts);
        if let Some(headed) = self.tree.phrase(id).and_then(|p| p.headed()) {
            self.append_attributive(&mut rest, headed);
        }
        VerbParts { fronted, rest }
    }

    /// Complements in surface order: bare indirect objects, objects,
    /// predicatives, other complements, prepositional indirect objects
    /// ("gives Mary the book", "gives the book to Mary").
    fn complements(&self, id: SpecId, plan: &VerbPlan) -> Vec<String> {
        let mut bare_indirect = Vec::new();
        let mut objects = Vec::new();
        let mut predicatives = Vec::new();
        let mut others = Vec::new();
        let mut prep_indirect = Vec::new();

        for c in self.tree.ordered(id, Slot::Complement) {
            if plan.excluded.contains(&c) {
                continue;
            }
            let Some(phrase) = self.tree.phrase(c) else {
                continue;
            };
            let prepositional = phrase.category() == Category::Preposition;
            let text = if plan.questioned == Some(phrase.function) {
                match &phrase.kind {
                    PhraseKind::Preposition(pp) if !phrase.elided => pp.headed.base().to_string(),
                    _ => continue,
                }
            } else {
                self.phrase(c, Ctx::default())
            };
            if text.is_empty() {
                continue;
            }
            match phrase.function {
                DiscourseFunction::IndirectObject if prepositional => prep_indirect.push(text),
                DiscourseFunction::IndirectObject => bare_indirect.push(text),
                DiscourseFunction::Object => objects.push(text),
                DiscourseFunction::PredicativeComplement => predicatives.push(text),
                _ => others.push(text),
            }
        }

        let mut out = bare_indirect;
        out.extend(objects);
        out.extend(predicatives);
        out.extend(others);
        out.extend(prep_indirect);
        out
    }

    /// The surface words of the verb group, front word first.
    ///
    /// `needs_auxiliary` adds do-support when the group would otherwise
    /// start with a lexical verb, so that the first word can be inverted.
    pub(crate) fn verb_group(&self, vp: &VerbPhrase, agreement: Agreement, needs_auxiliary: bool) -> Vec<String> {
        let head = vp.headed.base();
        if head.is_empty() && vp.modal.is_none() {
            tracing::debug!("verb phrase without a head realises no verb group");
            return Vec::new();
        }

        let form = vp.form;
        let finite = form == Form::Normal;
        let copula = vp.is_copula();
        let modal = if finite {
            vp.modal
                .clone()
                .or_else(|| (vp.tense == Tense::Future).then(|| "will".to_string()))
        } else {
            None
        };

        let mut stack: Vec<String> = Vec::new();
        let mut front = head.to_string();
        let mut auxiliary = false;
        // The front word is a modal or the infinitive marker: never inflected.
        let mut fixed_front = false;
        let mut leading_not = false;

        if vp.passive {
            stack.push(self.verb_rule(&front, MorphRule::PastParticiple));
            front = "be".to_string();
            auxiliary = true;
        }
        if vp.progressive {
            stack.push(self.verb_rule(&front, MorphRule::PresentParticiple));
            front = "be".to_string();
            auxiliary = true;
        }
        if vp.perfect || (vp.tense == Tense::Past && vp.modal.is_some() && finite) {
            stack.push(self.verb_rule(&front, MorphRule::PastParticiple));
            front = "have".to_string();
            auxiliary = true;
        }
        if let Some(modal) = modal {
            stack.push(front);
            front = modal;
            auxiliary = true;
            fixed_front = true;
        } else if form == Form::Infinitive {
            stack.push(front);
            front = "to".to_string();
            auxiliary = true;
            fixed_front = true;
        }

        if vp.negated {
            match form {
                Form::Normal if auxiliary || copula => stack.push("not".to_string()),
                Form::Normal | Form::Imperative => {
                    stack.push(front);
                    stack.push("not".to_string());
                    front = "do".to_string();
                    auxiliary = true;
                }
                Form::Infinitive => stack.push("not".to_string()),
                Form::Gerund | Form::BareInfinitive | Form::PastParticiple | Form::PresentParticiple => {
                    leading_not = true
                }
            }
        }

        if needs_auxiliary && finite && !auxiliary && !copula {
            stack.push(front);
            front = "do".to_string();
        }

        let first = match form {
            Form::Normal if fixed_front => front,
            Form::Normal => {
                let tense = if vp.tense == Tense::Past {
                    Tense::Past
                } else {
                    Tense::Present
                };
                self.lexicon
                    .verb_form(&front, tense, agreement.person, agreement.number)
            }
            Form::Infinitive | Form::BareInfinitive | Form::Imperative => front,
            Form::Gerund | Form::PresentParticiple => self.verb_rule(&front, MorphRule::PresentParticiple),
            Form::PastParticiple => self.verb_rule(&front, MorphRule::PastParticiple),
        };

        let mut words = Vec::with_capacity(stack.len() + 2);
        if leading_not {
            words.push("not".to_string());
        }
        words.push(first);
        words.extend(stack.into_iter().rev());
        words.retain(|w| !w.is_empty());
        self.contract(&mut words, needs_auxiliary);
        tracing::trace!(group = ?words, ?form, tense = ?vp.tense, "built verb group");
        words
    }

    /// Inflect a verb base with one rule, creating the entry on a miss.
    fn verb_rule(&self, base: &str, rule: MorphRule) -> String {
        if base.is_empty() {
            return String::new();
        }
        let entry = self.lexicon.get_or_create(Category::Verb, base);
        self.lexicon
            .apply_rule(rule, &entry)
            .unwrap_or_else(|| entry.base.clone())
    }

    /// Apply the negation contraction policy to an auxiliary + "not" pair.
    /// "cannot" is not fused when the auxiliary is about to be inverted.
    fn contract(&self, words: &mut Vec<String>, inverted: bool) {
        let Some(i) = words.windows(2).position(|w| w[1] == "not") else {
            return;
        };
        if self.config.contract_negation {
            if let Some(short) = negative_contraction(&words[i]) {
                words[i] = short.to_string();
                words.remove(i + 1);
                return;
            }
        }
        if self.config.fuse_cannot && !inverted && words[i].eq_ignore_ascii_case("can") {
            words[i] = "cannot".to_string();
            words.remove(i + 1);
        }
    }
}

/// The "n't" form of an auxiliary, where English has one.
fn negative_contraction(auxiliary: &str) -> Option<&'static str> {
    let short = match auxiliary.to_lowercase().as_str() {
        "do" => "don't",
        "does" => "doesn't",
        "did" => "didn't",
        "is" => "isn't",
        "are" => "aren't",
        "was" => "wasn't",
        "were" => "weren't",
        "have" => "haven't",
        "has" => "hasn't",
        "had" => "hadn't",
        "will" => "won't",
        "would" => "wouldn't",
        "can" => "can't",
        "could" => "couldn't",
        "should" => "shouldn't",
        "must" => "mustn't",
        "might" => "mightn't",
        "shall" => "shan't",
        _ => return None,
    };
    Some(short)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::features::{Number, Person};
    use crate::lexicon::BasicLexicon;
    use crate::realiser::Realiser;
    use crate::spec::SpecTree;

    fn setup() -> (SpecTree, Realiser) {
        let tree = SpecTree::new(Arc::new(BasicLexicon::english()));
        let realiser = Realiser::for_tree(&tree);
        (tree, realiser)
    }

    fn vp(t: &mut SpecTree, verb: &str) -> SpecId {
        t.verb_phrase(verb)
    }

    #[test]
    fn tenses() {
        let (mut t, r) = setup();
        let v = vp(&mut t, "eat");
        assert_eq!(r.realise(&t, v), "eats");
        t.set_tense(v, Tense::Past).unwrap();
        assert_eq!(r.realise(&t, v), "ate");
        t.set_tense(v, Tense::Future).unwrap();
        assert_eq!(r.realise(&t, v), "will eat");
    }

    #[test]
    fn full_auxiliary_stack() {
        let (mut t, r) = setup();
        let v = vp(&mut t, "eat");
        t.set_tense(v, Tense::Future).unwrap();
        t.set_perfect(v, true).unwrap();
        t.set_progressive(v, true).unwrap();
        assert_eq!(r.realise(&t, v), "will have been eating");
        t.set_progressive(v, false).unwrap();
        t.set_passive(v, true).unwrap();
        assert_eq!(r.realise(&t, v), "will have been eaten");
    }

    #[test]
    fn modal_with_negation() {
        let (mut t, r) = setup();
        let v = vp(&mut t, "eat");
        t.set_modal(v, Some("can")).unwrap();
        t.set_negated(v, true).unwrap();
        assert_eq!(r.realise(&t, v), "cannot eat");
        let r = r.fuse_cannot(false);
        assert_eq!(r.realise(&t, v), "can not eat");
        let r = r.contract_negation(true);
        assert_eq!(r.realise(&t, v), "can't eat");
    }

    #[test]
    fn past_modal_takes_perfect() {
        let (mut t, r) = setup();
        let v = vp(&mut t, "leave");
        t.set_modal(v, Some("must")).unwrap();
        t.set_tense(v, Tense::Past).unwrap();
        assert_eq!(r.realise(&t, v), "must have left");
    }

    #[test]
    fn do_support_for_negation() {
        let (mut t, r) = setup();
        let v = vp(&mut t, "kick");
        t.set_negated(v, true).unwrap();
        assert_eq!(r.realise(&t, v), "does not kick");
        t.set_tense(v, Tense::Past).unwrap();
        assert_eq!(r.realise(&t, v), "did not kick");
        let r = r.contract_negation(true);
        assert_eq!(r.realise(&t, v), "didn't kick");
    }

    #[test]
    fn copula_negates_without_do() {
        let (mut t, r) = setup();
        let v = vp(&mut t, "be");
        t.set_negated(v, true).unwrap();
        assert_eq!(r.realise(&t, v), "is not");
        t.set_person(v, Person::First).unwrap();
        assert_eq!(r.realise(&t, v), "am not");
    }

    #[test]
    fn non_finite_forms() {
        let (mut t, r) = setup();
        let v = vp(&mut t, "eat");
        t.set_form(v, Form::Infinitive).unwrap();
        assert_eq!(r.realise(&t, v), "to eat");
        t.set_negated(v, true).unwrap();
        assert_eq!(r.realise(&t, v), "to not eat");
        t.set_form(v, Form::Gerund).unwrap();
        assert_eq!(r.realise(&t, v), "not eating");
        t.set_negated(v, false).unwrap();
        t.set_perfect(v, true).unwrap();
        assert_eq!(r.realise(&t, v), "having eaten");
        t.set_perfect(v, false).unwrap();
        t.set_form(v, Form::PastParticiple).unwrap();
        assert_eq!(r.realise(&t, v), "eaten");
    }

    #[test]
    fn imperative_negation_uses_do_even_with_be() {
        let (mut t, r) = setup();
        let v = vp(&mut t, "be");
        t.add_complement_as(v, "late", DiscourseFunction::PredicativeComplement).unwrap();
        t.set_form(v, Form::Imperative).unwrap();
        assert_eq!(r.realise(&t, v), "be late");
        t.set_negated(v, true).unwrap();
        assert_eq!(r.realise(&t, v), "do not be late");
    }

    #[test]
    fn agreement_from_phrase_features() {
        let (mut t, r) = setup();
        let v = vp(&mut t, "kick");
        t.set_number(v, Number::Plural).unwrap();
        assert_eq!(r.realise(&t, v), "kick");
    }

    #[test]
    fn particle_follows_the_group() {
        let (mut t, r) = setup();
        let v = vp(&mut t, "pick");
        t.set_particle(v, "up").unwrap();
        t.add_complement(v, "the ball").unwrap();
        t.set_tense(v, Tense::Past).unwrap();
        assert_eq!(r.realise(&t, v), "picked up the ball");
    }

    #[test]
    fn complements_are_ordered_by_function() {
        let (mut t, r) = setup();
        let v = vp(&mut t, "give");
        t.add_complement_as(v, "the book", DiscourseFunction::Object).unwrap();
        t.add_complement_as(v, "Mary", DiscourseFunction::IndirectObject).unwrap();
        assert_eq!(r.realise(&t, v), "gives Mary the book");

        let w = vp(&mut t, "give");
        let to_mary = t.prep_phrase("to", "Mary").unwrap();
        t.add_complement_as(w, to_mary, DiscourseFunction::IndirectObject).unwrap();
        t.add_complement_as(w, "the book", DiscourseFunction::Object).unwrap();
        assert_eq!(r.realise(&t, w), "gives the book to Mary");
    }

    #[test]
    fn premodifiers_precede_the_group() {
        let (mut t, r) = setup();
        let v = vp(&mut t, "run");
        t.add_premodifier(v, "quickly").unwrap();
        t.set_tense(v, Tense::Past).unwrap();
        assert_eq!(r.realise(&t, v), "quickly ran");
    }

    #[test]
    fn contractions_table() {
        assert_eq!(negative_contraction("will"), Some("won't"));
        assert_eq!(negative_contraction("Does"), Some("doesn't"));
        assert_eq!(negative_contraction("am"), None);
    }
}
