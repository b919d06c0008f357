//! Document units: sentence orthography, paragraph layout, documents.
//!
//! Orthography is applied here and nowhere else, once per unit boundary,
//! so clauses nested inside other phrases never get a capital letter or a
//! terminator of their own.

use crate::features::ClauseStatus;
use crate::lexicon::morph;
use crate::spec::{Clause, DocLevel, PhraseKind, Slot, SpecBody, SpecId};

use super::text;
use super::{Ctx, OutputMode, Walk};

impl<'a> Walk<'a> {
    /// Realize `children` as one sentence: capitalized and terminated.
    pub(crate) fn sentence_text(&self, children: &[SpecId]) -> String {
        let body = text::join(self.each(children, Ctx::default()));
        let body = body.trim();
        if body.is_empty() {
            return String::new();
        }
        let body = match children.first() {
            Some(&first) if self.leads_with_acronym(first) => body.to_string(),
            _ => morph::capitalize(body),
        };
        let clause = children.iter().find_map(|&c| self.first_clause(c));
        let terminator = match clause {
            Some((id, cl)) => cl.terminator.unwrap_or(
                if cl.interrogative.is_some() && self.tree.clause_status(id) == ClauseStatus::Matrix {
                    '?'
                } else {
                    '.'
                },
            ),
            None => '.',
        };
        text::absorb(&body, terminator)
    }

    /// Realize a sentence, paragraph or document with its layout.
    pub(crate) fn unit(&self, id: SpecId) -> String {
        let Some(node) = self.tree.get(id) else {
            return String::new();
        };
        match &node.body {
            SpecBody::Phrase(_) => self.phrase(id, Ctx::default()),
            SpecBody::Sentence(children) => {
                let sentence = self.sentence_text(children);
                match self.config.output {
                    OutputMode::PlainText => sentence,
                    OutputMode::Html => text::escape_html(&sentence),
                }
            }
            SpecBody::Paragraph(children) => self.layout_paragraph(&self.paragraph_text(children)),
            SpecBody::Document { title, children } => {
                let mut paragraphs = Vec::new();
                let mut loose: Vec<SpecId> = Vec::new();
                for &child in children {
                    match self.tree.get(child).map(|n| &n.body) {
                        Some(SpecBody::Paragraph(sentences)) => {
                            if !loose.is_empty() {
                                paragraphs.push(self.paragraph_text(&loose));
                                loose.clear();
                            }
                            paragraphs.push(self.paragraph_text(sentences));
                        }
                        Some(_) => loose.push(child),
                        None => {}
                    }
                }
                if !loose.is_empty() {
                    paragraphs.push(self.paragraph_text(&loose));
                }
                self.layout_document(title.as_deref(), &paragraphs)
            }
        }
    }

    /// Realize `id` with every unit above it supplied, without touching
    /// the tree.
    pub(crate) fn as_document(&self, id: SpecId) -> String {
        match self.tree.level(id) {
            None => String::new(),
            Some(DocLevel::Document) => self.unit(id),
            Some(DocLevel::Paragraph) => {
                let children = self.tree.children(id);
                self.layout_document(None, &[self.paragraph_text(&children)])
            }
            Some(DocLevel::Phrase | DocLevel::Sentence) => {
                self.layout_document(None, &[self.paragraph_text(&[id])])
            }
        }
    }

    /// Sentences of a paragraph, unlaid. A phrase standing directly in a
    /// paragraph is a sentence of its own.
    fn paragraph_text(&self, children: &[SpecId]) -> String {
        let sentences = children.iter().map(|&c| match self.tree.get(c).map(|n| &n.body) {
            Some(SpecBody::Sentence(words)) => self.sentence_text(words),
            Some(SpecBody::Phrase(_)) => self.sentence_text(&[c]),
            Some(_) => self.unit(c),
            None => String::new(),
        });
        text::join(sentences)
    }

    fn layout_paragraph(&self, paragraph: &str) -> String {
        match self.config.output {
            OutputMode::PlainText => text::pour(paragraph, self.config.line_length),
            OutputMode::Html if paragraph.is_empty() => String::new(),
            OutputMode::Html => format!("<p>{}</p>", text::escape_html(paragraph)),
        }
    }

    fn layout_document(&self, title: Option<&str>, paragraphs: &[String]) -> String {
        let body: Vec<String> = paragraphs
            .iter()
            .filter(|p| !p.is_empty())
            .map(|p| self.layout_paragraph(p))
            .collect();
        let title = title.map(str::trim).filter(|t| !t.is_empty());
        match self.config.output {
            OutputMode::PlainText => {
                let body = body.join(&self.config.paragraph_separator);
                match title {
                    Some(title) if body.is_empty() => title.to_string(),
                    Some(title) => format!("{title}\n\n{body}"),
                    None => body,
                }
            }
            OutputMode::Html => {
                let mut parts = Vec::with_capacity(body.len() + 1);
                if let Some(title) = title {
                    parts.push(format!("<h1>{}</h1>", text::escape_html(title)));
                }
                parts.extend(body);
                parts.join("\n")
            }
        }
    }

    /// The first clause at or under `id`, looking through coordinations.
    fn first_clause(&self, id: SpecId) -> Option<(SpecId, &'a Clause)> {
        match &self.tree.phrase(id)?.kind {
            PhraseKind::Clause(cl) => Some((id, cl)),
            PhraseKind::Coordinate(co) => co.children.iter().find_map(|&c| self.first_clause(c)),
            _ => None,
        }
    }

    /// Whether the text realized for `id` starts with an acronym noun
    /// that must keep its case ("eBay", "iPhone").
    fn leads_with_acronym(&self, id: SpecId) -> bool {
        let Some(phrase) = self.tree.phrase(id) else {
            return false;
        };
        match &phrase.kind {
            PhraseKind::Noun(np) => {
                np.acronym
                    && !np.pronominal
                    && np.specifier.is_none()
                    && np.headed.slot(Slot::Premodifier).is_empty()
            }
            PhraseKind::Clause(cl) => {
                cl.cue_phrase.is_none()
                    && cl.front_modifiers.is_empty()
                    && cl.interrogative.is_none()
                    && self.tree.clause_status(id) == ClauseStatus::Matrix
                    && cl.subjects.first().is_some_and(|&s| self.leads_with_acronym(s))
            }
            PhraseKind::Coordinate(co) => {
                co.specifier.is_none() && co.children.first().is_some_and(|&c| self.leads_with_acronym(c))
            }
            _ => false,
        }
    }
}
