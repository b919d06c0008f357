//! Optional orderings for the constituent lists of a headed phrase.
//!
//! Lists keep insertion order unless an ordering is configured; the sort
//! happens on a copy at realization time, so the stored order never
//! changes.

use std::cmp::Ordering;

use crate::error::RealiseResult;
use crate::features::Category;

use super::phrase::Slot;
use super::{SpecId, SpecTree};

/// Compares two constituents of the same list.
pub type Order = fn(&SpecTree, SpecId, SpecId) -> Ordering;

#[derive(Debug, Clone, Copy, Default)]
pub struct Orderings {
    pub premodifiers: Option<Order>,
    pub complements: Option<Order>,
    pub postmodifiers: Option<Order>,
}

impl Orderings {
    pub fn get(&self, slot: Slot) -> Option<Order> {
        match slot {
            Slot::Premodifier => self.premodifiers,
            Slot::Complement => self.complements,
            Slot::Postmodifier => self.postmodifiers,
            Slot::Attributive => None,
        }
    }

    pub fn set(&mut self, slot: Slot, order: Option<Order>) {
        match slot {
            Slot::Premodifier => self.premodifiers = order,
            Slot::Complement => self.complements = order,
            Slot::Postmodifier => self.postmodifiers = order,
            Slot::Attributive => {}
        }
    }
}

fn category_rank(category: Option<Category>) -> u8 {
    match category {
        Some(Category::Adverb) => 0,
        Some(Category::Adjective) => 1,
        Some(Category::Noun) => 2,
        _ => 3,
    }
}

/// Adverbs before adjectives before nouns before anything else
/// ("very old stone wall"). Stable, so equal ranks keep insertion order.
pub fn by_category(tree: &SpecTree, a: SpecId, b: SpecId) -> Ordering {
    category_rank(tree.category(a)).cmp(&category_rank(tree.category(b)))
}

/// Smaller constituents first.
pub fn by_length(tree: &SpecTree, a: SpecId, b: SpecId) -> Ordering {
    tree.subtree_size(a).cmp(&tree.subtree_size(b))
}

impl SpecTree {
    /// Configure (or clear) the ordering of one list of a headed phrase.
    pub fn set_ordering(&mut self, id: SpecId, slot: Slot, order: Option<Order>) -> RealiseResult<()> {
        let target = self.verb_target(id);
        let err = self.wrong_kind(target, "ordering");
        let headed = self
            .phrase_mut(target, "ordering")?
            .headed_mut()
            .ok_or(err)?;
        headed.order.set(slot, order);
        Ok(())
    }

    /// Members of one list in realization order.
    pub fn ordered(&self, id: SpecId, slot: Slot) -> Vec<SpecId> {
        let Some(headed) = self.phrase(id).and_then(|p| p.headed()) else {
            return Vec::new();
        };
        let mut members = headed.slot(slot).clone();
        if let Some(order) = headed.order.get(slot) {
            members.sort_by(|&a, &b| order(self, a, b));
        }
        members
    }

    /// Sort a subset of a list with that list's ordering.
    pub(crate) fn sort_with(&self, id: SpecId, slot: Slot, members: &mut [SpecId]) {
        let order = self
            .phrase(id)
            .and_then(|p| p.headed())
            .and_then(|h| h.order.get(slot));
        if let Some(order) = order {
            members.sort_by(|&a, &b| order(self, a, b));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::tests::tree;

    #[test]
    fn insertion_order_by_default() {
        let mut t = tree();
        let np = t.noun_phrase("wall");
        let stone = t.noun_phrase("stone");
        let old = t.adjective_phrase("old");
        t.add_premodifier(np, stone).unwrap();
        t.add_premodifier(np, old).unwrap();
        assert_eq!(t.ordered(np, Slot::Premodifier), vec![stone, old]);
    }

    #[test]
    fn category_ordering() {
        let mut t = tree();
        let np = t.noun_phrase("wall");
        let stone = t.noun_phrase("stone");
        let old = t.adjective_phrase("old");
        let very = t.adverb_phrase("very");
        for m in [stone, old, very] {
            t.add_premodifier(np, m).unwrap();
        }
        t.set_ordering(np, Slot::Premodifier, Some(by_category)).unwrap();
        assert_eq!(t.ordered(np, Slot::Premodifier), vec![very, old, stone]);
        // Stored order is untouched.
        assert_eq!(t.slot(np, Slot::Premodifier), vec![stone, old, very]);
    }

    #[test]
    fn length_ordering() {
        let mut t = tree();
        let vp = t.verb_phrase("walk");
        let long = t.prep_phrase("along", "the river").unwrap();
        let short = t.adverb_phrase("slowly");
        t.add_postmodifier(vp, long).unwrap();
        t.add_postmodifier(vp, short).unwrap();
        t.set_ordering(vp, Slot::Postmodifier, Some(by_length)).unwrap();
        assert_eq!(t.ordered(vp, Slot::Postmodifier), vec![short, long]);
    }
}
