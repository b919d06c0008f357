//! The phrase sum type and the headed-phrase skeleton shared by every
//! lexically headed kind.

use crate::features::{Category, DiscourseFunction};
use crate::lexicon::WordEntry;

use super::SpecId;
use super::clause::Clause;
use super::coord::Coordinate;
use super::modifier::{AdjectivePhrase, AdverbPhrase, PrepPhrase};
use super::noun::{NounPhrase, Specifier};
use super::order::Orderings;
use super::verb::VerbPhrase;

/// The four constituent lists of a headed phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Premodifier,
    Complement,
    Postmodifier,
    Attributive,
}

/// A lexical head plus its modifier and complement lists.
///
/// Every entry of every list is a child constituent whose parent is the
/// phrase owning this `Headed`.
#[derive(Debug, Clone, Default)]
pub struct Headed {
    pub head: Option<WordEntry>,
    pub premodifiers: Vec<SpecId>,
    pub complements: Vec<SpecId>,
    pub postmodifiers: Vec<SpecId>,
    /// Appositive-style postmodifiers, set off by commas.
    pub attributive: Vec<SpecId>,
    pub order: Orderings,
}

impl Headed {
    pub fn new(head: Option<WordEntry>) -> Self {
        Self {
            head,
            ..Default::default()
        }
    }

    pub fn slot(&self, slot: Slot) -> &Vec<SpecId> {
        match slot {
            Slot::Premodifier => &self.premodifiers,
            Slot::Complement => &self.complements,
            Slot::Postmodifier => &self.postmodifiers,
            Slot::Attributive => &self.attributive,
        }
    }

    pub fn slot_mut(&mut self, slot: Slot) -> &mut Vec<SpecId> {
        match slot {
            Slot::Premodifier => &mut self.premodifiers,
            Slot::Complement => &mut self.complements,
            Slot::Postmodifier => &mut self.postmodifiers,
            Slot::Attributive => &mut self.attributive,
        }
    }

    pub fn children(&self) -> impl Iterator<Item = SpecId> + '_ {
        self.premodifiers
            .iter()
            .chain(&self.complements)
            .chain(&self.postmodifiers)
            .chain(&self.attributive)
            .copied()
    }

    pub(crate) fn remove(&mut self, child: SpecId) {
        for list in [
            &mut self.premodifiers,
            &mut self.complements,
            &mut self.postmodifiers,
            &mut self.attributive,
        ] {
            list.retain(|&c| c != child);
        }
    }

    /// The head's base form, or "" when the head is missing.
    pub fn base(&self) -> &str {
        self.head.as_ref().map_or("", |h| h.base.as_str())
    }
}

/// Every kind of syntactic constituent.
#[derive(Debug, Clone)]
pub enum PhraseKind {
    Noun(NounPhrase),
    Verb(VerbPhrase),
    Preposition(PrepPhrase),
    Adjective(AdjectivePhrase),
    Adverb(AdverbPhrase),
    Clause(Clause),
    /// Opaque canned text, realized verbatim.
    Canned(String),
    Coordinate(Coordinate),
}

/// A constituent: its kind plus the properties every phrase has.
#[derive(Debug, Clone)]
pub struct Phrase {
    /// Role inside the parent; written only by the attaching operation.
    pub function: DiscourseFunction,
    /// An elided phrase realizes as empty text whatever its features.
    pub elided: bool,
    pub kind: PhraseKind,
}

impl Phrase {
    pub fn new(kind: PhraseKind) -> Self {
        Self {
            function: DiscourseFunction::Null,
            elided: false,
            kind,
        }
    }

    /// The syntactic category. A coordinate phrase reports the category of
    /// its conjuncts so it can stand wherever one of them could.
    pub fn category(&self) -> Category {
        match &self.kind {
            PhraseKind::Noun(_) => Category::Noun,
            PhraseKind::Verb(_) => Category::Verb,
            PhraseKind::Preposition(_) => Category::Preposition,
            PhraseKind::Adjective(_) => Category::Adjective,
            PhraseKind::Adverb(_) => Category::Adverb,
            PhraseKind::Clause(_) => Category::Clause,
            PhraseKind::Canned(_) => Category::Canned,
            PhraseKind::Coordinate(c) => c.category,
        }
    }

    /// Human-readable kind, used in error messages.
    pub fn kind_name(&self) -> String {
        match &self.kind {
            PhraseKind::Noun(_) => "noun phrase".into(),
            PhraseKind::Verb(_) => "verb phrase".into(),
            PhraseKind::Preposition(_) => "prepositional phrase".into(),
            PhraseKind::Adjective(_) => "adjective phrase".into(),
            PhraseKind::Adverb(_) => "adverb phrase".into(),
            PhraseKind::Clause(_) => "clause".into(),
            PhraseKind::Canned(_) => "canned text".into(),
            PhraseKind::Coordinate(c) => format!("coordinate {}", c.category),
        }
    }

    pub fn headed(&self) -> Option<&Headed> {
        match &self.kind {
            PhraseKind::Noun(np) => Some(&np.headed),
            PhraseKind::Verb(vp) => Some(&vp.headed),
            PhraseKind::Preposition(pp) => Some(&pp.headed),
            PhraseKind::Adjective(ap) => Some(&ap.headed),
            PhraseKind::Adverb(ap) => Some(&ap.headed),
            PhraseKind::Clause(_) | PhraseKind::Canned(_) | PhraseKind::Coordinate(_) => None,
        }
    }

    pub fn headed_mut(&mut self) -> Option<&mut Headed> {
        match &mut self.kind {
            PhraseKind::Noun(np) => Some(&mut np.headed),
            PhraseKind::Verb(vp) => Some(&mut vp.headed),
            PhraseKind::Preposition(pp) => Some(&mut pp.headed),
            PhraseKind::Adjective(ap) => Some(&mut ap.headed),
            PhraseKind::Adverb(ap) => Some(&mut ap.headed),
            PhraseKind::Clause(_) | PhraseKind::Canned(_) | PhraseKind::Coordinate(_) => None,
        }
    }

    /// Every direct child constituent, in no particular order.
    pub fn children(&self) -> Vec<SpecId> {
        let mut out: Vec<SpecId> = self.headed().map(|h| h.children().collect()).unwrap_or_default();
        match &self.kind {
            PhraseKind::Noun(np) => {
                if let Some(Specifier::Phrase(id)) = &np.specifier {
                    out.push(*id);
                }
            }
            PhraseKind::Clause(cl) => {
                out.extend(&cl.subjects);
                out.extend(&cl.front_modifiers);
                out.extend(cl.cue_phrase);
                out.extend(cl.verb_phrase);
            }
            PhraseKind::Coordinate(co) => {
                out.extend(&co.children);
                if let Some(Specifier::Phrase(id)) = &co.specifier {
                    out.push(*id);
                }
            }
            _ => {}
        }
        out
    }

    /// Unlink `child` from every slot of this phrase.
    pub(crate) fn remove_child(&mut self, child: SpecId) {
        if let Some(headed) = self.headed_mut() {
            headed.remove(child);
        }
        match &mut self.kind {
            PhraseKind::Noun(np) => {
                if np.specifier == Some(Specifier::Phrase(child)) {
                    np.specifier = None;
                }
            }
            PhraseKind::Clause(cl) => {
                cl.subjects.retain(|&c| c != child);
                cl.front_modifiers.retain(|&c| c != child);
                if cl.cue_phrase == Some(child) {
                    cl.cue_phrase = None;
                }
                if cl.verb_phrase == Some(child) {
                    cl.verb_phrase = None;
                }
            }
            PhraseKind::Coordinate(co) => {
                co.children.retain(|&c| c != child);
                if co.specifier == Some(Specifier::Phrase(child)) {
                    co.specifier = None;
                }
            }
            _ => {}
        }
    }

    pub fn as_noun(&self) -> Option<&NounPhrase> {
        match &self.kind {
            PhraseKind::Noun(np) => Some(np),
            _ => None,
        }
    }

    pub fn as_verb(&self) -> Option<&VerbPhrase> {
        match &self.kind {
            PhraseKind::Verb(vp) => Some(vp),
            _ => None,
        }
    }

    pub fn as_clause(&self) -> Option<&Clause> {
        match &self.kind {
            PhraseKind::Clause(cl) => Some(cl),
            _ => None,
        }
    }

    pub fn as_coordinate(&self) -> Option<&Coordinate> {
        match &self.kind {
            PhraseKind::Coordinate(co) => Some(co),
            _ => None,
        }
    }
}
