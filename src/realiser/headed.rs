//! The generic headed-phrase skeleton:
//! premodifiers, head, complements, postmodifiers, attributive elements.

use crate::features::Degree;
use crate::lexicon::MorphRule;
use crate::spec::{Headed, Slot, SpecId};

use super::text;
use super::{Ctx, Walk};

impl<'a> Walk<'a> {
    /// Realize a headed phrase around an already inflected head.
    pub(crate) fn headed(&self, id: SpecId, headed: &Headed, head: String) -> String {
        let ctx = Ctx::default();
        let mut parts = self.each(&self.tree.ordered(id, Slot::Premodifier), ctx);
        parts.push(head);
        parts.extend(self.each(&self.tree.ordered(id, Slot::Complement), ctx));
        parts.extend(self.each(&self.tree.ordered(id, Slot::Postmodifier), ctx));
        let mut out = text::join(&parts);
        self.append_attributive(&mut out, headed);
        out
    }

    /// Attributive elements follow the phrase, each set off by a comma.
    pub(crate) fn append_attributive(&self, out: &mut String, headed: &Headed) {
        for item in self.each(&headed.attributive, Ctx::default()) {
            if !out.is_empty() {
                out.push(',');
            }
            text::append(out, &item);
        }
    }

    /// The head of an adjective or adverb phrase in the requested degree.
    pub(crate) fn graded(&self, headed: &Headed, degree: Degree) -> String {
        let Some(entry) = headed.head.as_ref() else {
            return String::new();
        };
        let rule = match degree {
            Degree::Positive => return entry.base.clone(),
            Degree::Comparative => MorphRule::Comparative,
            Degree::Superlative => MorphRule::Superlative,
        };
        self.lexicon
            .apply_rule(rule, entry)
            .unwrap_or_else(|| entry.base.clone())
    }
}
