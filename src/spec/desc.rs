//! A serde description of a phrase tree.
//!
//! Applications that produce trees outside Rust (or store them) describe
//! them in JSON and build them into a [`SpecTree`]. A bare string anywhere a
//! node is expected is coerced exactly like a string argument to the
//! builder API.
//!
//! ## Example JSON
//!
//! ```json
//! {
//!   "type": "clause",
//!   "subjects": ["John"],
//!   "verb": "kick",
//!   "objects": [{ "type": "noun", "specifier": "the", "head": "ball" }],
//!   "features": [{ "tense": "past" }, { "passive": true }]
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{RealiseResult, SpecError};
use crate::features::{Category, DiscourseFunction, Feature, InterrogativeType};

use super::coerce::Constituent;
use super::{SpecId, SpecTree};

/// A node: plain text, or a structured phrase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    Text(String),
    Phrase(Box<PhraseDesc>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PhraseDesc {
    Noun(NounDesc),
    Verb(VerbDesc),
    Preposition(HeadedDesc),
    Adjective(HeadedDesc),
    Adverb(HeadedDesc),
    Clause(ClauseDesc),
    Canned {
        text: String,
    },
    Coordinate(CoordinateDesc),
    Sentence {
        #[serde(default)]
        children: Vec<Node>,
    },
    Paragraph {
        #[serde(default)]
        children: Vec<Node>,
    },
    Document {
        #[serde(default)]
        title: Option<String>,
        #[serde(default)]
        children: Vec<Node>,
    },
}

/// Fields shared by every headed phrase.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadedDesc {
    pub head: Option<String>,
    pub premodifiers: Vec<Node>,
    pub complements: Vec<Node>,
    pub postmodifiers: Vec<Node>,
    pub attributive: Vec<Node>,
    pub features: Vec<Feature>,
    pub elided: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NounDesc {
    #[serde(flatten)]
    pub headed: HeadedDesc,
    pub specifier: Option<Node>,
    pub pronoun: Option<String>,
    pub acronym: bool,
    pub proper: bool,
    pub plural_agreement: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerbDesc {
    #[serde(flatten)]
    pub headed: HeadedDesc,
    pub particle: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClauseDesc {
    pub subjects: Vec<Node>,
    pub verb: Option<Node>,
    pub objects: Vec<Node>,
    pub indirect_objects: Vec<Node>,
    pub predicatives: Vec<Node>,
    pub front_modifiers: Vec<Node>,
    pub premodifiers: Vec<Node>,
    pub modifiers: Vec<Node>,
    pub cue_phrase: Option<Node>,
    pub features: Vec<Feature>,
    pub interrogative: Option<InterrogativeType>,
    /// What a WH word stands for: subject, object or indirect_object.
    pub wh_argument: Option<DiscourseFunction>,
    pub complementiser: Option<String>,
    pub suppress_complementiser: bool,
    pub terminator: Option<char>,
    pub elided: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoordinateDesc {
    pub conjunction: Option<String>,
    pub children: Vec<Node>,
    pub features: Vec<Feature>,
    pub specifier: Option<Node>,
}

impl Node {
    /// Parse a description from JSON.
    pub fn from_json(source: &str) -> Result<Self, SpecError> {
        serde_json::from_str(source).map_err(|source| SpecError::InvalidDescription { source })
    }

    /// Build into `tree`. Text stays text until an attaching call coerces it.
    fn constituent(&self, tree: &mut SpecTree) -> RealiseResult<Constituent> {
        match self {
            Node::Text(text) => Ok(Constituent::Text(text.clone())),
            Node::Phrase(desc) => desc.build(tree).map(Constituent::Id),
        }
    }

    /// Build the node as a root, coercing text.
    pub fn build(&self, tree: &mut SpecTree) -> RealiseResult<SpecId> {
        let constituent = self.constituent(tree)?;
        Ok(tree.coerce(constituent))
    }
}

fn head_text(head: &Option<String>, category: Category) -> RealiseResult<Option<&str>> {
    match head.as_deref() {
        Some(h) if h.trim().is_empty() => Err(SpecError::EmptyHead { category }.into()),
        other => Ok(other),
    }
}

impl HeadedDesc {
    fn fill(&self, tree: &mut SpecTree, id: SpecId) -> RealiseResult<()> {
        for node in &self.premodifiers {
            let c = node.constituent(tree)?;
            tree.add_premodifier(id, c)?;
        }
        for node in &self.complements {
            let c = node.constituent(tree)?;
            tree.add_complement(id, c)?;
        }
        for node in &self.postmodifiers {
            let c = node.constituent(tree)?;
            tree.add_postmodifier(id, c)?;
        }
        for node in &self.attributive {
            let c = node.constituent(tree)?;
            tree.add_attributive(id, c)?;
        }
        for feature in &self.features {
            tree.set_feature(id, feature.clone())?;
        }
        if self.elided {
            tree.set_elided(id, true)?;
        }
        Ok(())
    }
}

impl PhraseDesc {
    pub fn from_json(source: &str) -> Result<Self, SpecError> {
        serde_json::from_str(source).map_err(|source| SpecError::InvalidDescription { source })
    }

    /// Build the described phrase into `tree` and return its root.
    pub fn build(&self, tree: &mut SpecTree) -> RealiseResult<SpecId> {
        match self {
            PhraseDesc::Noun(desc) => {
                let head = head_text(&desc.headed.head, Category::Noun)?.unwrap_or("");
                let id = tree.noun_phrase(head);
                if let Some(spec) = &desc.specifier {
                    let c = spec.constituent(tree)?;
                    tree.set_specifier(id, c)?;
                }
                desc.headed.fill(tree, id)?;
                if let Some(pronoun) = &desc.pronoun {
                    tree.set_pronoun(id, pronoun)?;
                }
                if desc.acronym {
                    tree.set_acronym(id, true)?;
                }
                if desc.proper {
                    tree.set_proper(id, true)?;
                }
                if desc.plural_agreement {
                    tree.set_plural_agreement(id, true)?;
                }
                Ok(id)
            }
            PhraseDesc::Verb(desc) => {
                let head = head_text(&desc.headed.head, Category::Verb)?.unwrap_or("");
                let id = tree.verb_phrase(head);
                desc.headed.fill(tree, id)?;
                if let Some(particle) = &desc.particle {
                    tree.set_particle(id, particle)?;
                }
                Ok(id)
            }
            PhraseDesc::Preposition(desc) => {
                let head = head_text(&desc.head, Category::Preposition)?.unwrap_or("");
                let id = tree.preposition(head);
                desc.fill(tree, id)?;
                Ok(id)
            }
            PhraseDesc::Adjective(desc) => {
                let head = head_text(&desc.head, Category::Adjective)?.unwrap_or("");
                let id = tree.adjective_phrase(head);
                desc.fill(tree, id)?;
                Ok(id)
            }
            PhraseDesc::Adverb(desc) => {
                let head = head_text(&desc.head, Category::Adverb)?.unwrap_or("");
                let id = tree.adverb_phrase(head);
                desc.fill(tree, id)?;
                Ok(id)
            }
            PhraseDesc::Clause(desc) => desc.build(tree),
            PhraseDesc::Canned { text } => Ok(tree.canned(text)),
            PhraseDesc::Coordinate(desc) => {
                let conjunction = desc.conjunction.as_deref().unwrap_or("and");
                let mut children = Vec::with_capacity(desc.children.len());
                for child in &desc.children {
                    children.push(child.constituent(tree)?);
                }
                let id = tree.coordinate_with(conjunction, children)?;
                if let Some(spec) = &desc.specifier {
                    let c = spec.constituent(tree)?;
                    tree.set_specifier(id, c)?;
                }
                for feature in &desc.features {
                    tree.set_feature(id, feature.clone())?;
                }
                Ok(id)
            }
            PhraseDesc::Sentence { children } => {
                let children = build_all(children, tree)?;
                tree.sentence(children)
            }
            PhraseDesc::Paragraph { children } => {
                let children = build_all(children, tree)?;
                tree.paragraph(children)
            }
            PhraseDesc::Document { title, children } => {
                let children = build_all(children, tree)?;
                tree.document(title.as_deref(), children)
            }
        }
    }
}

fn build_all(nodes: &[Node], tree: &mut SpecTree) -> RealiseResult<Vec<Constituent>> {
    nodes.iter().map(|n| n.constituent(tree)).collect()
}

impl ClauseDesc {
    fn build(&self, tree: &mut SpecTree) -> RealiseResult<SpecId> {
        let id = tree.new_clause();
        for node in &self.subjects {
            let c = node.constituent(tree)?;
            tree.add_subject(id, c)?;
        }
        if let Some(verb) = &self.verb {
            let c = verb.constituent(tree)?;
            tree.set_verb(id, c)?;
        }
        for node in &self.objects {
            let c = node.constituent(tree)?;
            tree.add_object(id, c)?;
        }
        for node in &self.indirect_objects {
            let c = node.constituent(tree)?;
            tree.add_indirect_object(id, c)?;
        }
        for node in &self.predicatives {
            let c = node.constituent(tree)?;
            tree.add_predicative(id, c)?;
        }
        for node in &self.front_modifiers {
            let c = node.constituent(tree)?;
            tree.add_front_modifier(id, c)?;
        }
        for node in &self.premodifiers {
            let c = node.constituent(tree)?;
            tree.add_premodifier(id, c)?;
        }
        for node in &self.modifiers {
            let c = node.constituent(tree)?;
            tree.add_modifier(id, c)?;
        }
        if let Some(cue) = &self.cue_phrase {
            let c = cue.constituent(tree)?;
            tree.set_cue_phrase(id, c)?;
        }
        for feature in &self.features {
            tree.set_feature(id, feature.clone())?;
        }
        if let Some(kind) = self.interrogative {
            tree.set_interrogative(id, kind, self.wh_argument)?;
        }
        if let Some(word) = &self.complementiser {
            tree.set_complementiser(id, word)?;
        }
        if self.suppress_complementiser {
            tree.suppress_complementiser(id, true)?;
        }
        if let Some(terminator) = self.terminator {
            tree.set_terminator(id, terminator)?;
        }
        if self.elided {
            tree.set_elided(id, true)?;
        }
        Ok(id)
    }
}
