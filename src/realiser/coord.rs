//! Coordinate phrases: conjoined lists and specifier scope.

use crate::features::Category;
use crate::spec::{Coordinate, SpecId};

use super::text;
use super::{Ctx, Walk};

impl<'a> Walk<'a> {
    pub(crate) fn coordinate(&self, co: &'a Coordinate, ctx: Ctx<'a>) -> String {
        let conjuncts = ctx.nested();
        let Some(specifier) = co.specifier.as_ref().filter(|_| co.category == Category::Noun) else {
            let items = self.each(&co.children, Ctx { possessive: ctx.possessive, case: ctx.case, ..conjuncts });
            return text::conjoin(&items, &co.conjunction);
        };

        if self.any_pronominal(&co.children) {
            // "the he and boy" is not English: narrow the specifier to the
            // conjuncts that can carry it.
            let items: Vec<String> = co
                .children
                .iter()
                .map(|&c| {
                    let inherited = if self.is_pronominal(c) { None } else { Some(specifier) };
                    self.phrase(
                        c,
                        Ctx {
                            specifier: inherited,
                            possessive: ctx.possessive,
                            case: ctx.case,
                            ..conjuncts
                        },
                    )
                })
                .filter(|s| !s.is_empty())
                .collect();
            return text::conjoin(&items, &co.conjunction);
        }

        let items = self.each(
            &co.children,
            Ctx {
                suppress_specifier: true,
                possessive: ctx.possessive,
                case: ctx.case,
                ..conjuncts
            },
        );
        let list = text::conjoin(&items, &co.conjunction);
        if list.is_empty() {
            return list;
        }
        let spec = self.specifier(specifier, &list);
        text::join([spec, list])
    }

    fn is_pronominal(&self, id: SpecId) -> bool {
        self.tree
            .phrase(id)
            .and_then(|p| p.as_noun())
            .is_some_and(|np| np.pronominal)
    }

    fn any_pronominal(&self, ids: &[SpecId]) -> bool {
        ids.iter().any(|&c| self.is_pronominal(c))
    }
}
