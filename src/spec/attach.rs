//! Filling the modifier and complement lists of headed phrases.
//!
//! `add_*` appends; `set_*` clears the list (detaching its members) and
//! then appends. A failing call leaves the tree as it was. The attaching call, never the child, decides the child's
//! parent and discourse function.
//!
//! On a clause, premodifiers, complements and postmodifiers go to its verb
//! phrase.

use crate::error::{RealiseResult, SpecError};
use crate::features::{Category, DiscourseFunction};

use super::coerce::Constituent;
use super::phrase::{PhraseKind, Slot};
use super::{SpecId, SpecTree};

impl SpecTree {
    pub fn add_premodifier(&mut self, parent: SpecId, child: impl Into<Constituent>) -> RealiseResult<()> {
        self.fill_slot(parent, child.into(), Slot::Premodifier, DiscourseFunction::Premodifier, false)
    }

    pub fn set_premodifier(&mut self, parent: SpecId, child: impl Into<Constituent>) -> RealiseResult<()> {
        self.fill_slot(parent, child.into(), Slot::Premodifier, DiscourseFunction::Premodifier, true)
    }

    /// Add a complement with the function its parent implies: object in a
    /// verb phrase, prepositional object in a prepositional phrase, plain
    /// complement elsewhere.
    pub fn add_complement(&mut self, parent: SpecId, child: impl Into<Constituent>) -> RealiseResult<()> {
        let function = self.complement_function(parent);
        self.fill_slot(parent, child.into(), Slot::Complement, function, false)
    }

    pub fn set_complement(&mut self, parent: SpecId, child: impl Into<Constituent>) -> RealiseResult<()> {
        let function = self.complement_function(parent);
        self.fill_slot(parent, child.into(), Slot::Complement, function, true)
    }

    /// Add a complement with an explicit function (object, indirect object,
    /// predicative complement, prepositional object or plain complement).
    pub fn add_complement_as(
        &mut self,
        parent: SpecId,
        child: impl Into<Constituent>,
        function: DiscourseFunction,
    ) -> RealiseResult<()> {
        if !matches!(
            function,
            DiscourseFunction::Object
                | DiscourseFunction::IndirectObject
                | DiscourseFunction::PredicativeComplement
                | DiscourseFunction::PrepObject
                | DiscourseFunction::Complement
        ) {
            return Err(SpecError::WrongKind {
                operation: "complement attachment",
                actual: format!("{function} function"),
            }
            .into());
        }
        self.fill_slot(parent, child.into(), Slot::Complement, function, false)
    }

    pub fn add_postmodifier(&mut self, parent: SpecId, child: impl Into<Constituent>) -> RealiseResult<()> {
        self.fill_slot(parent, child.into(), Slot::Postmodifier, DiscourseFunction::Postmodifier, false)
    }

    pub fn set_postmodifier(&mut self, parent: SpecId, child: impl Into<Constituent>) -> RealiseResult<()> {
        self.fill_slot(parent, child.into(), Slot::Postmodifier, DiscourseFunction::Postmodifier, true)
    }

    /// Add an appositive postmodifier, set off by a comma ("John, the baker").
    pub fn add_attributive(&mut self, parent: SpecId, child: impl Into<Constituent>) -> RealiseResult<()> {
        self.fill_slot(
            parent,
            child.into(),
            Slot::Attributive,
            DiscourseFunction::AttributivePostmodifier,
            false,
        )
    }

    fn complement_function(&self, parent: SpecId) -> DiscourseFunction {
        match self.phrase(self.verb_target(parent)).map(|p| &p.kind) {
            Some(PhraseKind::Verb(_)) => DiscourseFunction::Object,
            Some(PhraseKind::Preposition(_)) => DiscourseFunction::PrepObject,
            _ => DiscourseFunction::Complement,
        }
    }

    /// Check, clear when replacing, coerce, append. Nothing is allocated
    /// or cleared unless the append will go through.
    fn fill_slot(
        &mut self,
        parent: SpecId,
        child: Constituent,
        slot: Slot,
        function: DiscourseFunction,
        replace: bool,
    ) -> RealiseResult<()> {
        let target = self.slot_target(parent)?;
        if let Constituent::Id(id) = &child {
            self.node(*id)?;
            if self.is_ancestor(*id, target) {
                return Err(SpecError::Cycle {
                    parent: target.get(),
                    child: id.get(),
                }
                .into());
            }
        }
        if replace {
            self.clear_slot(parent, slot)?;
        }
        let child = self.coerce(child);
        self.add_to_slot(parent, child, slot, function)
    }

    /// The phrase whose lists a modifier of `parent` goes into: `parent`
    /// itself, or a clause's verb phrase. Must be headed.
    fn slot_target(&self, parent: SpecId) -> RealiseResult<SpecId> {
        let target = self.verb_target(parent);
        match self.phrase(target).and_then(|p| p.headed()) {
            Some(_) => Ok(target),
            None => Err(self.wrong_kind(target, "modifier attachment").into()),
        }
    }

    /// Append `child` to a list of `parent`, which must be a headed phrase
    /// or a clause.
    pub(crate) fn add_to_slot(
        &mut self,
        parent: SpecId,
        child: SpecId,
        slot: Slot,
        function: DiscourseFunction,
    ) -> RealiseResult<()> {
        let target = self.slot_target(parent)?;
        self.attach(target, child, function)?;
        let err = self.wrong_kind(target, "modifier attachment");
        let headed = self
            .phrase_mut(target, "modifier attachment")?
            .headed_mut()
            .ok_or(err)?;
        headed.slot_mut(slot).push(child);
        Ok(())
    }

    /// Detach every member of one list.
    pub fn clear_slot(&mut self, parent: SpecId, slot: Slot) -> RealiseResult<()> {
        let target = self.slot_target(parent)?;
        let members = self
            .phrase(target)
            .and_then(|p| p.headed())
            .map(|h| h.slot(slot).clone())
            .unwrap_or_default();
        for child in members {
            self.detach(child)?;
        }
        Ok(())
    }

    /// Replace the head word of a headed phrase.
    pub fn set_head(&mut self, id: SpecId, base: &str) -> RealiseResult<()> {
        let target = self.verb_target(id);
        let category = match self.category(target) {
            Some(c) if c.is_phrasal_head() => c,
            _ => return Err(self.wrong_kind(target, "head assignment").into()),
        };
        let head = self.head_entry(category, base);
        let err = self.wrong_kind(target, "head assignment");
        let headed = self
            .phrase_mut(target, "head assignment")?
            .headed_mut()
            .ok_or(err)?;
        headed.head = head;
        Ok(())
    }

    /// Members of one list of a headed phrase (or of a clause's verb phrase).
    pub fn slot(&self, id: SpecId, slot: Slot) -> Vec<SpecId> {
        self.phrase(self.verb_target(id))
            .and_then(|p| p.headed())
            .map(|h| h.slot(slot).clone())
            .unwrap_or_default()
    }

    /// Whether `id` is a noun phrase, possibly coordinated.
    pub fn is_nominal(&self, id: SpecId) -> bool {
        self.category(id) == Some(Category::Noun)
    }
}
