//! Clauses: subjects, a verb phrase, and clause-level features.

use crate::error::{RealiseResult, SpecError};
use crate::features::{Category, ClauseStatus, DiscourseFunction, InterrogativeType, WhArgument};

use super::coerce::Constituent;
use super::phrase::{PhraseKind, Slot};
use super::verb::VerbPhrase;
use super::{SpecId, SpecTree};

/// A question: its kind and, for WH questions, the argument the WH word
/// stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interrogative {
    pub kind: InterrogativeType,
    pub argument: Option<WhArgument>,
}

impl Interrogative {
    /// Whether the WH word replaces the logical subject.
    pub fn questions_subject(&self) -> bool {
        self.argument == Some(WhArgument::Subject)
    }
}

#[derive(Debug, Clone)]
pub struct Clause {
    pub subjects: Vec<SpecId>,
    pub front_modifiers: Vec<SpecId>,
    pub cue_phrase: Option<SpecId>,
    /// Verb-level features set on the clause are forwarded here.
    pub verb_phrase: Option<SpecId>,
    /// Explicit status. A clause inside another phrase is subordinate
    /// regardless; see [`SpecTree::clause_status`].
    pub status: ClauseStatus,
    pub interrogative: Option<Interrogative>,
    /// Introduces the clause when subordinate.
    pub complementiser: String,
    pub suppress_complementiser: bool,
    /// Overrides the default sentence terminator.
    pub terminator: Option<char>,
    /// Keep a gerund clause's subject in its plain form.
    pub suppress_genitive_in_gerund: bool,
}

impl Default for Clause {
    fn default() -> Self {
        Self {
            subjects: Vec::new(),
            front_modifiers: Vec::new(),
            cue_phrase: None,
            verb_phrase: None,
            status: ClauseStatus::Matrix,
            interrogative: None,
            complementiser: "that".to_string(),
            suppress_complementiser: false,
            terminator: None,
            suppress_genitive_in_gerund: false,
        }
    }
}

impl SpecTree {
    /// An empty clause with an unheaded verb phrase.
    pub fn new_clause(&mut self) -> SpecId {
        let id = self.alloc_phrase(PhraseKind::Clause(Clause::default()));
        let vp = self.alloc_phrase(PhraseKind::Verb(VerbPhrase::default()));
        self.link(id, vp, DiscourseFunction::Null);
        if let Ok(clause) = self.clause_mut(id, "verb phrase") {
            clause.verb_phrase = Some(vp);
        }
        id
    }

    /// Subject, verb and object in one call: `clause("John", "kick", ball)`.
    pub fn clause(
        &mut self,
        subject: impl Into<Constituent>,
        verb: impl Into<Constituent>,
        object: impl Into<Constituent>,
    ) -> RealiseResult<SpecId> {
        let id = self.intransitive(subject, verb)?;
        self.add_object(id, object)?;
        Ok(id)
    }

    /// Subject and verb: `intransitive("the dog", "sleep")`.
    pub fn intransitive(
        &mut self,
        subject: impl Into<Constituent>,
        verb: impl Into<Constituent>,
    ) -> RealiseResult<SpecId> {
        let id = self.new_clause();
        self.add_subject(id, subject)?;
        self.set_verb(id, verb)?;
        Ok(id)
    }

    pub(crate) fn clause_mut(&mut self, id: SpecId, operation: &'static str) -> RealiseResult<&mut Clause> {
        let err = self.wrong_kind(id, operation);
        match &mut self.phrase_mut(id, operation)?.kind {
            PhraseKind::Clause(clause) => Ok(clause),
            _ => Err(err.into()),
        }
    }

    /// The clause's verb phrase.
    pub fn verb_phrase_of(&self, clause: SpecId) -> Option<SpecId> {
        self.phrase(clause)?.as_clause()?.verb_phrase
    }

    /// Set the verb. Text replaces the head of the current verb phrase and
    /// keeps its features; a node replaces the verb phrase itself.
    pub fn set_verb(&mut self, clause: SpecId, verb: impl Into<Constituent>) -> RealiseResult<()> {
        self.clause_mut(clause, "verb")?;
        match verb.into() {
            Constituent::Text(text) => self.set_head(clause, &text),
            Constituent::Id(vp) => {
                if !self.phrase(vp).is_some_and(|p| p.category() == Category::Verb) {
                    return Err(self.wrong_kind(vp, "verb").into());
                }
                if let Some(old) = self.verb_phrase_of(clause) {
                    self.detach(old)?;
                }
                self.attach(clause, vp, DiscourseFunction::Null)?;
                self.clause_mut(clause, "verb")?.verb_phrase = Some(vp);
                Ok(())
            }
        }
    }

    pub fn add_subject(&mut self, clause: SpecId, subject: impl Into<Constituent>) -> RealiseResult<()> {
        self.clause_mut(clause, "subject")?;
        let subject = self.coerce(subject);
        self.attach(clause, subject, DiscourseFunction::Subject)?;
        self.clause_mut(clause, "subject")?.subjects.push(subject);
        Ok(())
    }

    pub fn set_subject(&mut self, clause: SpecId, subject: impl Into<Constituent>) -> RealiseResult<()> {
        let old = std::mem::take(&mut self.clause_mut(clause, "subject")?.subjects);
        for id in old {
            self.orphan(id)?;
        }
        self.add_subject(clause, subject)
    }

    pub fn add_object(&mut self, clause: SpecId, object: impl Into<Constituent>) -> RealiseResult<()> {
        self.clause_mut(clause, "object")?;
        self.add_complement_as(clause, object, DiscourseFunction::Object)
    }

    pub fn add_indirect_object(&mut self, clause: SpecId, object: impl Into<Constituent>) -> RealiseResult<()> {
        self.clause_mut(clause, "indirect object")?;
        self.add_complement_as(clause, object, DiscourseFunction::IndirectObject)
    }

    /// A predicative complement ("happy" in "John is happy").
    pub fn add_predicative(&mut self, clause: SpecId, complement: impl Into<Constituent>) -> RealiseResult<()> {
        self.add_complement_as(clause, complement, DiscourseFunction::PredicativeComplement)
    }

    /// A modifier realized after the verb phrase.
    pub fn add_modifier(&mut self, clause: SpecId, modifier: impl Into<Constituent>) -> RealiseResult<()> {
        self.clause_mut(clause, "modifier")?;
        self.add_postmodifier(clause, modifier)
    }

    pub fn add_front_modifier(&mut self, clause: SpecId, modifier: impl Into<Constituent>) -> RealiseResult<()> {
        self.clause_mut(clause, "front modifier")?;
        let modifier = self.coerce(modifier);
        self.attach(clause, modifier, DiscourseFunction::FrontModifier)?;
        self.clause_mut(clause, "front modifier")?.front_modifiers.push(modifier);
        Ok(())
    }

    /// A discourse connective opening the clause ("however").
    pub fn set_cue_phrase(&mut self, clause: SpecId, cue: impl Into<Constituent>) -> RealiseResult<()> {
        if let Some(old) = self.clause_mut(clause, "cue phrase")?.cue_phrase.take() {
            self.orphan(old)?;
        }
        let cue = self.coerce(cue);
        self.attach(clause, cue, DiscourseFunction::CuePhrase)?;
        self.clause_mut(clause, "cue phrase")?.cue_phrase = Some(cue);
        Ok(())
    }

    /// Make the clause a question.
    ///
    /// `argument` names what a WH word stands for and must be the subject,
    /// object or indirect object. Adverbial questions and yes/no questions
    /// take no argument; "who"/"what" without one default to the object.
    pub fn set_interrogative(
        &mut self,
        clause: SpecId,
        kind: InterrogativeType,
        argument: Option<DiscourseFunction>,
    ) -> RealiseResult<()> {
        let argument = match argument {
            Some(function) => Some(
                WhArgument::try_from(function)
                    .map_err(|function| SpecError::InvalidWhArgument { function })?,
            ),
            None if kind.is_argument_question() => Some(WhArgument::Object),
            None => None,
        };
        let argument = if kind.wh_word().is_none() { None } else { argument };
        self.clause_mut(clause, "interrogative")?.interrogative = Some(Interrogative { kind, argument });
        Ok(())
    }

    pub fn clear_interrogative(&mut self, clause: SpecId) -> RealiseResult<()> {
        self.clause_mut(clause, "interrogative")?.interrogative = None;
        Ok(())
    }

    /// `Subordinate` forces embedded realization even at the root; `Matrix`
    /// leaves it to the clause's position.
    pub fn set_status(&mut self, clause: SpecId, status: ClauseStatus) -> RealiseResult<()> {
        self.clause_mut(clause, "clause status")?.status = status;
        Ok(())
    }

    /// Effective status of a clause: subordinate when set so explicitly, or
    /// when it is a constituent of another phrase, looking through
    /// coordinations. A clause with no parent, or directly in a sentence,
    /// paragraph or document, is a matrix clause.
    pub fn clause_status(&self, clause: SpecId) -> ClauseStatus {
        let explicit = self
            .phrase(clause)
            .and_then(|p| p.as_clause())
            .map(|c| c.status)
            .unwrap_or_default();
        if explicit == ClauseStatus::Subordinate {
            return explicit;
        }
        let mut at = clause;
        while let Some(parent) = self.parent(at) {
            match self.phrase(parent).map(|p| &p.kind) {
                Some(PhraseKind::Coordinate(_)) => at = parent,
                Some(_) => return ClauseStatus::Subordinate,
                None => break,
            }
        }
        ClauseStatus::Matrix
    }

    pub fn set_complementiser(&mut self, clause: SpecId, word: &str) -> RealiseResult<()> {
        self.clause_mut(clause, "complementiser")?.complementiser = word.trim().to_string();
        Ok(())
    }

    pub fn suppress_complementiser(&mut self, clause: SpecId, suppress: bool) -> RealiseResult<()> {
        self.clause_mut(clause, "complementiser")?.suppress_complementiser = suppress;
        Ok(())
    }

    pub fn set_terminator(&mut self, clause: SpecId, terminator: char) -> RealiseResult<()> {
        self.clause_mut(clause, "terminator")?.terminator = Some(terminator);
        Ok(())
    }

    pub fn suppress_genitive_in_gerund(&mut self, clause: SpecId, suppress: bool) -> RealiseResult<()> {
        self.clause_mut(clause, "gerund subject")?.suppress_genitive_in_gerund = suppress;
        Ok(())
    }

    /// Objects of the clause's verb phrase, in order.
    pub fn objects(&self, clause: SpecId) -> Vec<SpecId> {
        self.slot(clause, Slot::Complement)
            .into_iter()
            .filter(|&c| self.function(c) == Some(DiscourseFunction::Object))
            .collect()
    }
}
