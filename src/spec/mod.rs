//! The phrase-specification tree.
//!
//! Constituents live in an arena owned by a [`SpecTree`] and refer to each
//! other through [`SpecId`] handles. A child's parent link is a plain
//! handle, so the parent ↔ child cycle never takes part in ownership.
//!
//! The tree is built and mutated through `SpecTree` methods only: every
//! attaching operation sets the child's parent link and discourse function
//! itself, so parentage always matches where the child actually sits.
//!
//! ```
//! use std::sync::Arc;
//! use akh_realiser::lexicon::BasicLexicon;
//! use akh_realiser::spec::SpecTree;
//!
//! let mut tree = SpecTree::new(Arc::new(BasicLexicon::english()));
//! let ball = tree.noun_phrase_with("the", "ball");
//! let clause = tree.clause("John", "kick", ball).unwrap();
//! assert_eq!(tree.parent(ball), tree.verb_phrase_of(clause));
//! ```

pub mod attach;
pub mod clause;
pub mod coerce;
pub mod coord;
pub mod desc;
pub mod document;
pub mod feature;
pub mod modifier;
pub mod noun;
pub mod order;
pub mod phrase;
pub mod verb;

use std::num::NonZeroU32;
use std::sync::Arc;

use crate::error::{RealiseResult, SpecError};
use crate::features::{Category, DiscourseFunction};
use crate::lexicon::Lexicon;

pub use clause::{Clause, Interrogative};
pub use coerce::Constituent;
pub use coord::Coordinate;
pub use document::DocLevel;
pub use modifier::{AdjectivePhrase, AdverbPhrase, PrepPhrase};
pub use noun::{NounPhrase, Specifier};
pub use order::{Order, Orderings};
pub use phrase::{Headed, Phrase, PhraseKind, Slot};
pub use verb::VerbPhrase;

/// Handle of a node in a [`SpecTree`].
///
/// Uses `NonZeroU32` so that `Option<SpecId>` is the same size as `SpecId`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct SpecId(NonZeroU32);

impl SpecId {
    /// Create a `SpecId` from a raw value. Returns `None` if `raw` is zero.
    pub fn new(raw: u32) -> Option<Self> {
        NonZeroU32::new(raw).map(SpecId)
    }

    /// Get the underlying value.
    pub fn get(self) -> u32 {
        self.0.get()
    }

    fn index(self) -> usize {
        self.0.get() as usize - 1
    }
}

impl std::fmt::Display for SpecId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "spec:{}", self.0)
    }
}

/// Payload of a tree node: a phrase, or a document unit grouping phrases.
#[derive(Debug, Clone)]
pub enum SpecBody {
    Phrase(Phrase),
    Sentence(Vec<SpecId>),
    Paragraph(Vec<SpecId>),
    Document {
        title: Option<String>,
        children: Vec<SpecId>,
    },
}

/// A node of the tree.
#[derive(Debug, Clone)]
pub struct Spec {
    /// Non-owning back-reference, maintained by the attaching operation.
    pub parent: Option<SpecId>,
    pub body: SpecBody,
}

impl Spec {
    pub fn children(&self) -> Vec<SpecId> {
        match &self.body {
            SpecBody::Phrase(p) => p.children(),
            SpecBody::Sentence(c) | SpecBody::Paragraph(c) => c.clone(),
            SpecBody::Document { children, .. } => children.clone(),
        }
    }

    pub fn as_phrase(&self) -> Option<&Phrase> {
        match &self.body {
            SpecBody::Phrase(p) => Some(p),
            _ => None,
        }
    }

    fn describe(&self) -> String {
        match &self.body {
            SpecBody::Phrase(p) => p.kind_name(),
            SpecBody::Sentence(_) => "sentence".into(),
            SpecBody::Paragraph(_) => "paragraph".into(),
            SpecBody::Document { .. } => "document".into(),
        }
    }
}

/// Arena owning every constituent of one or more phrase trees.
pub struct SpecTree {
    nodes: Vec<Spec>,
    lexicon: Arc<dyn Lexicon>,
}

impl SpecTree {
    /// Create an empty tree whose word lookups go through `lexicon`.
    pub fn new(lexicon: Arc<dyn Lexicon>) -> Self {
        Self {
            nodes: Vec::new(),
            lexicon,
        }
    }

    /// The lexicon used to resolve heads, determiners and pronouns.
    pub fn lexicon(&self) -> &Arc<dyn Lexicon> {
        &self.lexicon
    }

    /// Number of nodes in the arena.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub(crate) fn alloc(&mut self, body: SpecBody) -> SpecId {
        self.nodes.push(Spec { parent: None, body });
        // The arena never holds u32::MAX nodes in practice; saturate rather than wrap.
        let raw = u32::try_from(self.nodes.len()).unwrap_or(u32::MAX);
        SpecId(NonZeroU32::MIN.saturating_add(raw - 1))
    }

    pub(crate) fn alloc_phrase(&mut self, kind: PhraseKind) -> SpecId {
        self.alloc(SpecBody::Phrase(Phrase::new(kind)))
    }

    /// Look up a node.
    pub fn get(&self, id: SpecId) -> Option<&Spec> {
        self.nodes.get(id.index())
    }

    pub(crate) fn node(&self, id: SpecId) -> RealiseResult<&Spec> {
        self.nodes
            .get(id.index())
            .ok_or_else(|| SpecError::UnknownId { id: id.get() }.into())
    }

    pub(crate) fn node_mut(&mut self, id: SpecId) -> RealiseResult<&mut Spec> {
        self.nodes
            .get_mut(id.index())
            .ok_or_else(|| SpecError::UnknownId { id: id.get() }.into())
    }

    /// The phrase stored at `id`, if the node is a phrase.
    pub fn phrase(&self, id: SpecId) -> Option<&Phrase> {
        self.get(id).and_then(Spec::as_phrase)
    }

    pub(crate) fn phrase_mut(&mut self, id: SpecId, operation: &'static str) -> RealiseResult<&mut Phrase> {
        let node = self.node_mut(id)?;
        let actual = node.describe();
        match &mut node.body {
            SpecBody::Phrase(p) => Ok(p),
            _ => Err(SpecError::WrongKind { operation, actual }.into()),
        }
    }

    pub(crate) fn wrong_kind(&self, id: SpecId, operation: &'static str) -> SpecError {
        SpecError::WrongKind {
            operation,
            actual: self
                .get(id)
                .map_or_else(|| "missing".to_string(), Spec::describe),
        }
    }

    /// The parent of `id`, if attached.
    pub fn parent(&self, id: SpecId) -> Option<SpecId> {
        self.get(id).and_then(|n| n.parent)
    }

    /// Direct children of `id`.
    pub fn children(&self, id: SpecId) -> Vec<SpecId> {
        self.get(id).map(Spec::children).unwrap_or_default()
    }

    /// Category of the phrase at `id`.
    pub fn category(&self, id: SpecId) -> Option<Category> {
        self.phrase(id).map(Phrase::category)
    }

    /// Discourse function of the phrase at `id`.
    pub fn function(&self, id: SpecId) -> Option<DiscourseFunction> {
        self.phrase(id).map(|p| p.function)
    }

    /// Whether `ancestor` is `id` or lies on the path from `id` to its root.
    pub fn is_ancestor(&self, ancestor: SpecId, id: SpecId) -> bool {
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            if current == ancestor {
                return true;
            }
            cursor = self.parent(current);
        }
        false
    }

    /// Link `child` under `parent` with the given function.
    ///
    /// Detaches the child from any previous parent first. The caller then
    /// records the child in the right slot of the parent. Whether a clause is
    /// subordinate follows from where it ends up, see
    /// [`SpecTree::clause_status`].
    pub(crate) fn attach(
        &mut self,
        parent: SpecId,
        child: SpecId,
        function: DiscourseFunction,
    ) -> RealiseResult<()> {
        self.node(parent)?;
        self.node(child)?;
        if self.is_ancestor(child, parent) {
            return Err(SpecError::Cycle {
                parent: parent.get(),
                child: child.get(),
            }
            .into());
        }
        self.detach(child)?;
        let node = self.node_mut(child)?;
        node.parent = Some(parent);
        if let SpecBody::Phrase(p) = &mut node.body {
            p.function = function;
        }
        self.propagate_function(child, function);
        Ok(())
    }

    /// Link a freshly allocated child that no other node refers to yet.
    pub(crate) fn link(&mut self, parent: SpecId, child: SpecId, function: DiscourseFunction) {
        if let Some(node) = self.nodes.get_mut(child.index()) {
            node.parent = Some(parent);
            if let SpecBody::Phrase(p) = &mut node.body {
                p.function = function;
            }
        }
    }

    /// Remove `child` from its parent, if any. The child keeps its subtree.
    pub fn detach(&mut self, child: SpecId) -> RealiseResult<()> {
        let Some(old) = self.node(child)?.parent else {
            return Ok(());
        };
        match &mut self.node_mut(old)?.body {
            SpecBody::Phrase(p) => p.remove_child(child),
            SpecBody::Sentence(c) | SpecBody::Paragraph(c) => c.retain(|&x| x != child),
            SpecBody::Document { children, .. } => children.retain(|&x| x != child),
        }
        self.orphan(child)
    }

    /// Clear a child's parent link and function after its parent dropped it.
    pub(crate) fn orphan(&mut self, child: SpecId) -> RealiseResult<()> {
        let node = self.node_mut(child)?;
        node.parent = None;
        if let SpecBody::Phrase(p) = &mut node.body {
            p.function = DiscourseFunction::Null;
        }
        Ok(())
    }

    /// Mark a phrase as elided: it realizes as empty text.
    pub fn set_elided(&mut self, id: SpecId, elided: bool) -> RealiseResult<()> {
        self.phrase_mut(id, "elision")?.elided = elided;
        Ok(())
    }

    /// Count of nodes in the subtree rooted at `id`, including `id`.
    pub fn subtree_size(&self, id: SpecId) -> usize {
        1 + self
            .children(id)
            .into_iter()
            .map(|c| self.subtree_size(c))
            .sum::<usize>()
    }
}

impl std::fmt::Debug for SpecTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpecTree")
            .field("nodes", &self.nodes)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::error::RealiserError;
    use crate::lexicon::BasicLexicon;

    pub(crate) fn tree() -> SpecTree {
        SpecTree::new(Arc::new(BasicLexicon::english()))
    }

    #[test]
    fn ids_are_one_based() {
        let mut t = tree();
        let a = t.canned("a");
        let b = t.canned("b");
        assert_eq!(a.get(), 1);
        assert_eq!(b.get(), 2);
        assert_eq!(t.len(), 2);
        assert_eq!(a.to_string(), "spec:1");
    }

    #[test]
    fn attaching_sets_parent_and_function() {
        let mut t = tree();
        let np = t.noun_phrase("dog");
        let adj = t.adjective_phrase("big");
        t.add_premodifier(np, adj).unwrap();
        assert_eq!(t.parent(adj), Some(np));
        assert_eq!(t.function(adj), Some(DiscourseFunction::Premodifier));
    }

    #[test]
    fn reattaching_moves_the_child() {
        let mut t = tree();
        let dog = t.noun_phrase("dog");
        let cat = t.noun_phrase("cat");
        let adj = t.adjective_phrase("big");
        t.add_premodifier(dog, adj).unwrap();
        t.add_premodifier(cat, adj).unwrap();
        assert_eq!(t.parent(adj), Some(cat));
        assert!(t.children(dog).is_empty());
        assert_eq!(t.children(cat), vec![adj]);
    }

    #[test]
    fn cycles_are_rejected() {
        let mut t = tree();
        let outer = t.noun_phrase("house");
        let inner = t.prep_phrase("of", "cards").unwrap();
        t.add_postmodifier(outer, inner).unwrap();
        let err = t.add_complement(inner, outer).unwrap_err();
        assert!(matches!(err, RealiserError::Spec(SpecError::Cycle { .. })));
        let err = t.add_premodifier(outer, outer).unwrap_err();
        assert!(matches!(err, RealiserError::Spec(SpecError::Cycle { .. })));
    }

    #[test]
    fn unknown_ids_are_rejected() {
        let mut t = tree();
        let np = t.noun_phrase("dog");
        let bogus = SpecId::new(99).unwrap();
        assert!(t.add_premodifier(np, bogus).is_err());
        assert!(t.get(bogus).is_none());
    }

    #[test]
    fn detach_clears_function() {
        let mut t = tree();
        let np = t.noun_phrase("dog");
        let pp = t.prep_phrase("in", "the park").unwrap();
        t.add_postmodifier(np, pp).unwrap();
        t.detach(pp).unwrap();
        assert_eq!(t.parent(pp), None);
        assert_eq!(t.function(pp), Some(DiscourseFunction::Null));
        assert!(t.children(np).is_empty());
    }

    #[test]
    fn subtree_size_counts_descendants() {
        let mut t = tree();
        let np = t.noun_phrase("dog");
        let adj = t.adjective_phrase("big");
        let pp = t.prep_phrase("in", "the park").unwrap();
        t.add_premodifier(np, adj).unwrap();
        t.add_postmodifier(np, pp).unwrap();
        // np, adj, pp, and the canned object of pp
        assert_eq!(t.subtree_size(np), 4);
    }
}
