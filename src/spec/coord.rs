//! Coordination: "X, Y and Z" as one constituent.
//!
//! A coordinate phrase reports the category of its conjuncts and can stand
//! wherever one of them could. Shared features set on it are stored and
//! pushed down to every conjunct; a conjunct can still be overridden
//! afterwards.

use crate::error::{RealiseResult, SpecError};
use crate::features::{Agreement, Category, DiscourseFunction, Feature, FeatureKind, Number, Person};

use super::coerce::Constituent;
use super::noun::Specifier;
use super::phrase::PhraseKind;
use super::{SpecBody, SpecId, SpecTree};

#[derive(Debug, Clone)]
pub struct Coordinate {
    /// Category of the conjuncts. Canned text fits any coordination, so a
    /// coordination holding only canned text takes the category of the
    /// first other conjunct added to it.
    pub category: Category,
    pub children: Vec<SpecId>,
    pub conjunction: String,
    /// Shared features, one per kind, in assignment order.
    pub features: Vec<Feature>,
    /// Specifier with scope over every conjunct ("the cat and dog").
    pub specifier: Option<Specifier>,
}

impl Coordinate {
    pub fn new(category: Category, conjunction: &str) -> Self {
        Self {
            category,
            children: Vec::new(),
            conjunction: conjunction.to_string(),
            features: Vec::new(),
            specifier: None,
        }
    }

    /// Store a shared feature, replacing one of the same kind.
    pub(crate) fn store(&mut self, feature: Feature) {
        let kind = feature.kind();
        self.features.retain(|f| f.kind() != kind);
        self.features.push(feature);
    }

    pub fn feature(&self, kind: FeatureKind) -> Option<&Feature> {
        self.features.iter().find(|f| f.kind() == kind)
    }

    pub fn is_disjunction(&self) -> bool {
        self.conjunction.eq_ignore_ascii_case("or") || self.conjunction.eq_ignore_ascii_case("nor")
    }
}

impl SpecTree {
    /// Coordinate the given constituents with "and".
    pub fn coordinate<I, C>(&mut self, children: I) -> RealiseResult<SpecId>
    where
        I: IntoIterator<Item = C>,
        C: Into<Constituent>,
    {
        self.coordinate_with("and", children)
    }

    /// Coordinate the given constituents with `conjunction`.
    pub fn coordinate_with<I, C>(&mut self, conjunction: &str, children: I) -> RealiseResult<SpecId>
    where
        I: IntoIterator<Item = C>,
        C: Into<Constituent>,
    {
        let id = self.alloc_phrase(PhraseKind::Coordinate(Coordinate::new(
            Category::Canned,
            conjunction,
        )));
        for child in children {
            self.add_coordinate(id, child)?;
        }
        Ok(id)
    }

    /// Append a conjunct. Fails if its category differs from the
    /// coordination's.
    pub fn add_coordinate(&mut self, coordinate: SpecId, child: impl Into<Constituent>) -> RealiseResult<()> {
        let expected = self.coordinate_ref(coordinate)?.category;
        let child = self.coerce(child);
        let actual = self
            .category(child)
            .ok_or_else(|| self.wrong_kind(child, "coordination"))?;
        let category = match (expected, actual) {
            (e, a) if e == a => e,
            (Category::Canned, a) => a,
            (e, Category::Canned) => e,
            (expected, actual) => {
                return Err(SpecError::MixedCoordination { expected, actual }.into());
            }
        };
        let function = self.function(coordinate).unwrap_or_default();
        self.attach(coordinate, child, function)?;
        let shared = {
            let co = self.coordinate_mut(coordinate, "coordination")?;
            co.category = category;
            co.children.push(child);
            co.features.clone()
        };
        for feature in shared {
            // Stored features were accepted for this category already.
            if let Err(err) = self.set_feature(child, feature) {
                tracing::debug!(%err, "shared feature does not apply to new conjunct");
            }
        }
        Ok(())
    }

    pub fn set_conjunction(&mut self, coordinate: SpecId, conjunction: &str) -> RealiseResult<()> {
        self.coordinate_mut(coordinate, "conjunction")?.conjunction = conjunction.trim().to_string();
        Ok(())
    }

    fn coordinate_ref(&self, id: SpecId) -> RealiseResult<&Coordinate> {
        match self.node(id)?.as_phrase().map(|p| &p.kind) {
            Some(PhraseKind::Coordinate(co)) => Ok(co),
            _ => Err(self.wrong_kind(id, "coordination").into()),
        }
    }

    pub(crate) fn coordinate_mut(&mut self, id: SpecId, operation: &'static str) -> RealiseResult<&mut Coordinate> {
        let err = self.wrong_kind(id, operation);
        match &mut self.phrase_mut(id, operation)?.kind {
            PhraseKind::Coordinate(co) => Ok(co),
            _ => Err(err.into()),
        }
    }

    /// Conjuncts of a coordinate phrase (empty for anything else).
    pub fn conjuncts(&self, id: SpecId) -> &[SpecId] {
        match self.phrase(id).map(|p| &p.kind) {
            Some(PhraseKind::Coordinate(co)) => &co.children,
            _ => &[],
        }
    }

    /// The person and number a verb agreeing with `id` takes.
    ///
    /// One conjunct passes its agreement through. Several conjuncts joined
    /// by anything but "or"/"nor" are plural; joined by "or" they are plural
    /// only when some conjunct is plural on its own. Person is the lowest
    /// among the conjuncts (first before second before third).
    pub fn agreement(&self, id: SpecId) -> Agreement {
        let Some(phrase) = self.phrase(id) else {
            return Agreement::third_singular();
        };
        match &phrase.kind {
            PhraseKind::Noun(np) => np.agreement(),
            PhraseKind::Coordinate(co) => {
                let parts: Vec<Agreement> = co
                    .children
                    .iter()
                    .filter(|&&c| !self.phrase(c).is_some_and(|p| p.elided))
                    .map(|&c| self.agreement(c))
                    .collect();
                match parts.as_slice() {
                    [] => Agreement::third_singular(),
                    [one] => *one,
                    many => {
                        let person = many.iter().map(|a| a.person).min().unwrap_or(Person::Third);
                        let plural = !co.is_disjunction() || many.iter().any(|a| a.number.is_plural());
                        Agreement::new(person, if plural { Number::Plural } else { Number::Singular })
                    }
                }
            }
            _ => Agreement::third_singular(),
        }
    }

    /// Agreement of a list of subjects, which behaves like an "and"
    /// coordination of its members.
    pub fn subjects_agreement(&self, subjects: &[SpecId]) -> Agreement {
        match subjects {
            [] => Agreement::third_singular(),
            [one] => self.agreement(*one),
            many => {
                let person = many
                    .iter()
                    .map(|&s| self.agreement(s).person)
                    .min()
                    .unwrap_or(Person::Third);
                Agreement::new(person, Number::Plural)
            }
        }
    }

    /// Give every conjunct the coordination's function, as it realizes in
    /// that role.
    pub(crate) fn propagate_function(&mut self, id: SpecId, function: DiscourseFunction) {
        let children = self.conjuncts(id).to_vec();
        for child in children {
            if let Ok(node) = self.node_mut(child) {
                if let SpecBody::Phrase(p) = &mut node.body {
                    p.function = function;
                }
            }
            self.propagate_function(child, function);
        }
    }
}
