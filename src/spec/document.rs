//! Document units: sentences, paragraphs and documents.
//!
//! Units live in the same arena as phrases. They group children without
//! changing their discourse function; orthography and layout are applied
//! by the realiser once per unit boundary.

use crate::error::{RealiseResult, SpecError};
use crate::features::DiscourseFunction;

use super::coerce::Constituent;
use super::{SpecBody, SpecId, SpecTree};

/// How coarse a node is. Promotion only moves upwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DocLevel {
    Phrase,
    Sentence,
    Paragraph,
    Document,
}

impl std::fmt::Display for DocLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DocLevel::Phrase => "phrase",
            DocLevel::Sentence => "sentence",
            DocLevel::Paragraph => "paragraph",
            DocLevel::Document => "document",
        };
        f.write_str(name)
    }
}

impl SpecBody {
    pub fn level(&self) -> DocLevel {
        match self {
            SpecBody::Phrase(_) => DocLevel::Phrase,
            SpecBody::Sentence(_) => DocLevel::Sentence,
            SpecBody::Paragraph(_) => DocLevel::Paragraph,
            SpecBody::Document { .. } => DocLevel::Document,
        }
    }
}

impl SpecTree {
    /// The document level of `id`.
    pub fn level(&self, id: SpecId) -> Option<DocLevel> {
        self.get(id).map(|n| n.body.level())
    }

    pub fn sentence<I, C>(&mut self, children: I) -> RealiseResult<SpecId>
    where
        I: IntoIterator<Item = C>,
        C: Into<Constituent>,
    {
        let id = self.alloc(SpecBody::Sentence(Vec::new()));
        for child in children {
            self.add_to_unit(id, child)?;
        }
        Ok(id)
    }

    pub fn paragraph<I, C>(&mut self, children: I) -> RealiseResult<SpecId>
    where
        I: IntoIterator<Item = C>,
        C: Into<Constituent>,
    {
        let id = self.alloc(SpecBody::Paragraph(Vec::new()));
        for child in children {
            self.add_to_unit(id, child)?;
        }
        Ok(id)
    }

    pub fn document<I, C>(&mut self, title: Option<&str>, children: I) -> RealiseResult<SpecId>
    where
        I: IntoIterator<Item = C>,
        C: Into<Constituent>,
    {
        let id = self.alloc(SpecBody::Document {
            title: title.map(str::to_string),
            children: Vec::new(),
        });
        for child in children {
            self.add_to_unit(id, child)?;
        }
        Ok(id)
    }

    /// Append a child to a sentence, paragraph or document. The child must
    /// be of a finer level than the unit.
    pub fn add_to_unit(&mut self, unit: SpecId, child: impl Into<Constituent>) -> RealiseResult<()> {
        let child = self.coerce(child);
        let (unit_level, child_level) = match (self.level(unit), self.level(child)) {
            (Some(u), Some(c)) => (u, c),
            (None, _) => return Err(SpecError::UnknownId { id: unit.get() }.into()),
            (_, None) => return Err(SpecError::UnknownId { id: child.get() }.into()),
        };
        if unit_level == DocLevel::Phrase {
            return Err(self.wrong_kind(unit, "document unit").into());
        }
        if child_level >= unit_level {
            return Err(SpecError::BadPromotion {
                from: child_level.to_string(),
                to: unit_level.to_string(),
            }
            .into());
        }
        let function = self.function(child).unwrap_or(DiscourseFunction::Null);
        self.attach(unit, child, function)?;
        match &mut self.node_mut(unit)?.body {
            SpecBody::Sentence(c) | SpecBody::Paragraph(c) => c.push(child),
            SpecBody::Document { children, .. } => children.push(child),
            SpecBody::Phrase(_) => {}
        }
        Ok(())
    }

    /// Wrap `id` in the units between its level and `level`, returning the
    /// outermost one. Returns `id` itself when it is already at `level`.
    pub fn promote(&mut self, id: SpecId, level: DocLevel) -> RealiseResult<SpecId> {
        let current = self
            .level(id)
            .ok_or(SpecError::UnknownId { id: id.get() })?;
        if current > level {
            return Err(SpecError::BadPromotion {
                from: current.to_string(),
                to: level.to_string(),
            }
            .into());
        }
        let mut top = id;
        let mut at = current;
        while at < level {
            top = match at {
                DocLevel::Phrase => self.sentence([top])?,
                DocLevel::Sentence => self.paragraph([top])?,
                DocLevel::Paragraph => self.document(None, [top])?,
                DocLevel::Document => top,
            };
            at = match at {
                DocLevel::Phrase => DocLevel::Sentence,
                DocLevel::Sentence => DocLevel::Paragraph,
                DocLevel::Paragraph | DocLevel::Document => DocLevel::Document,
            };
        }
        Ok(top)
    }

    pub fn set_title(&mut self, document: SpecId, title: Option<&str>) -> RealiseResult<()> {
        let err = self.wrong_kind(document, "title");
        match &mut self.node_mut(document)?.body {
            SpecBody::Document { title: t, .. } => {
                *t = title.map(str::to_string);
                Ok(())
            }
            _ => Err(err.into()),
        }
    }
}
