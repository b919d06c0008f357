//! Noun phrase realization: specifier, pronominalization, plural heads,
//! possessive marking, a/an allomorphy.

use crate::features::{Case, DiscourseFunction, Number};
use crate::lexicon::{MorphRule, morph};
use crate::spec::{NounPhrase, Slot, SpecId, Specifier};

use super::text;
use super::{Ctx, Walk};

impl<'a> Walk<'a> {
    pub(crate) fn noun_phrase(
        &self,
        id: SpecId,
        np: &'a NounPhrase,
        function: DiscourseFunction,
        ctx: Ctx<'a>,
    ) -> String {
        if np.pronominal {
            return self.pronoun(np, function, ctx);
        }

        let inner = Ctx::default();
        let mut rest = self.each(&self.tree.ordered(id, Slot::Premodifier), inner);
        rest.push(self.noun_head(np));
        rest.extend(self.each(&self.tree.ordered(id, Slot::Complement), inner));
        let mut rest = text::join(&rest);
        if np.possessive || ctx.possessive {
            rest = text::add_clitic(&rest, np.number.is_plural());
        }
        let post = self.each(&self.tree.ordered(id, Slot::Postmodifier), inner);
        let rest = text::join(std::iter::once(rest).chain(post));

        let specifier = if ctx.suppress_specifier {
            None
        } else {
            np.specifier.as_ref().or(ctx.specifier)
        };
        let mut out = match specifier {
            Some(spec) => {
                let spec_text = self.specifier(spec, &rest);
                text::join([spec_text, rest])
            }
            None => rest,
        };
        self.append_attributive(&mut out, &np.headed);
        out
    }

    /// The head noun, pluralized when the phrase is plural.
    fn noun_head(&self, np: &NounPhrase) -> String {
        let Some(entry) = np.headed.head.as_ref() else {
            return String::new();
        };
        if np.number == Number::Plural {
            self.lexicon
                .apply_rule(MorphRule::Plural, entry)
                .unwrap_or_else(|| entry.base.clone())
        } else {
            entry.base.clone()
        }
    }

    /// Surface form of a specifier. The indefinite article is chosen by the
    /// text that follows it, known only now.
    pub(crate) fn specifier(&self, specifier: &Specifier, following: &str) -> String {
        match specifier {
            Specifier::Determiner(entry) if entry.is_indefinite_article() => {
                morph::indefinite_article(following).to_string()
            }
            Specifier::Determiner(entry) | Specifier::Pronoun(entry) => entry.base.clone(),
            Specifier::Phrase(id) => self.phrase(
                *id,
                Ctx {
                    possessive: true,
                    ..Ctx::default()
                },
            ),
        }
    }

    fn pronoun(&self, np: &NounPhrase, function: DiscourseFunction, ctx: Ctx<'a>) -> String {
        if let Some(entry) = &np.pronoun {
            return entry.base.clone();
        }
        let case = if ctx.possessive || function == DiscourseFunction::Specifier {
            Case::Genitive
        } else if np.possessive {
            Case::Possessive
        } else if let Some(case) = ctx.case {
            case
        } else {
            function.case()
        };
        match self.lexicon.find_pronoun(np.person, np.number, np.gender, case) {
            Some(entry) => entry.base,
            None => {
                tracing::warn!(
                    person = ?np.person,
                    number = ?np.number,
                    gender = ?np.gender,
                    case = ?case,
                    "no pronoun with these features, falling back"
                );
                if np.number.is_plural() { "they" } else { "it" }.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::features::{Gender, Number, Person};
    use crate::lexicon::BasicLexicon;
    use crate::realiser::Realiser;
    use crate::spec::SpecTree;

    fn setup() -> (SpecTree, Realiser) {
        let tree = SpecTree::new(Arc::new(BasicLexicon::english()));
        let realiser = Realiser::for_tree(&tree);
        (tree, realiser)
    }

    #[test]
    fn article_allomorphy() {
        let (mut t, r) = setup();
        let apple = t.noun_phrase_with("a", "apple");
        assert_eq!(r.realise(&t, apple), "an apple");
        let pear = t.noun_phrase_with("a", "pear");
        assert_eq!(r.realise(&t, pear), "a pear");
        // Chosen by what actually follows, premodifiers included.
        let old_pear = t.noun_phrase_with("a", "pear");
        t.add_premodifier(old_pear, "old").unwrap();
        assert_eq!(r.realise(&t, old_pear), "an old pear");
        let big_apple = t.noun_phrase_with("an", "apple");
        t.add_premodifier(big_apple, "big").unwrap();
        assert_eq!(r.realise(&t, big_apple), "a big apple");
    }

    #[test]
    fn plural_switches_determiners() {
        let (mut t, r) = setup();
        let cat = t.noun_phrase_with("a", "cat");
        t.set_plural(cat, true).unwrap();
        assert_eq!(r.realise(&t, cat), "some cats");
        let book = t.noun_phrase_with("this", "book");
        t.set_plural(book, true).unwrap();
        assert_eq!(r.realise(&t, book), "these books");
        let mouse = t.noun_phrase_with("the", "mouse");
        t.set_plural(mouse, true).unwrap();
        assert_eq!(r.realise(&t, mouse), "the mice");
    }

    #[test]
    fn proper_nouns_keep_their_form() {
        let (mut t, r) = setup();
        let np = t.noun_phrase("Kennedy");
        t.set_proper(np, true).unwrap();
        t.set_plural(np, true).unwrap();
        assert_eq!(r.realise(&t, np), "Kennedy");
    }

    #[test]
    fn possessive_clitic() {
        let (mut t, r) = setup();
        let boy = t.noun_phrase_with("the", "boy");
        t.set_possessive(boy, true).unwrap();
        assert_eq!(r.realise(&t, boy), "the boy's");
        t.set_plural(boy, true).unwrap();
        assert_eq!(r.realise(&t, boy), "the boys'");
    }

    #[test]
    fn possessive_phrase_as_specifier() {
        let (mut t, r) = setup();
        let john = t.noun_phrase("John");
        let dog = t.noun_phrase("dog");
        t.set_specifier(dog, john).unwrap();
        assert_eq!(r.realise(&t, dog), "John's dog");
    }

    #[test]
    fn possessive_pronoun_specifier() {
        let (mut t, r) = setup();
        let dog = t.noun_phrase_with("her", "dog");
        assert_eq!(r.realise(&t, dog), "her dog");
        let he = t.personal_pronoun(Person::Third, Number::Singular, Gender::Masculine);
        let cat = t.noun_phrase("cat");
        t.set_specifier(cat, he).unwrap();
        assert_eq!(r.realise(&t, cat), "his cat");
    }

    #[test]
    fn pronoun_text_keeps_its_form() {
        let (mut t, r) = setup();
        let dog = t.noun_phrase("dog");
        t.add_premodifier(dog, "my").unwrap();
        assert_eq!(r.realise(&t, dog), "my dog");
        let c = t.clause("John", "like", "mine").unwrap();
        assert_eq!(r.realise(&t, c), "John likes mine.");
    }

    #[test]
    fn pronoun_case_follows_function() {
        let (mut t, r) = setup();
        let she = t.personal_pronoun(Person::Third, Number::Singular, Gender::Feminine);
        let c = t.intransitive(she, "sleep").unwrap();
        assert_eq!(r.realise(&t, c), "She sleeps.");

        let they = t.personal_pronoun(Person::Third, Number::Plural, Gender::Neuter);
        let c = t.clause("John", "see", they).unwrap();
        assert_eq!(r.realise(&t, c), "John sees them.");
    }

    #[test]
    fn coerced_pronoun_is_re_cased() {
        let (mut t, r) = setup();
        let c = t.clause("I", "see", "he").unwrap();
        assert_eq!(r.realise(&t, c), "I see him.");
    }

    #[test]
    fn explicit_pronoun_is_verbatim() {
        let (mut t, r) = setup();
        let np = t.pronoun("whoever");
        let c = t.clause("John", "thank", np).unwrap();
        assert_eq!(r.realise(&t, c), "John thanks whoever.");
    }

    #[test]
    fn independent_possessive_pronoun() {
        let (mut t, r) = setup();
        let mine = t.personal_pronoun(Person::First, Number::Singular, Gender::Neuter);
        t.set_possessive(mine, true).unwrap();
        let c = t.intransitive("the book", "be").unwrap();
        t.add_predicative(c, mine).unwrap();
        assert_eq!(r.realise(&t, c), "The book is mine.");
    }

    #[test]
    fn postmodifiers_follow_the_head() {
        let (mut t, r) = setup();
        let np = t.noun_phrase_with("the", "house");
        let pp = t.prep_phrase("on", "the hill").unwrap();
        t.add_postmodifier(np, pp).unwrap();
        assert_eq!(r.realise(&t, np), "the house on the hill");
    }
}
