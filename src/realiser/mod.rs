//! The realiser: walks a [`SpecTree`] and emits text.
//!
//! Realization is a pure function of the tree. Everything computed along
//! the way (the verb group, the surface subjects, agreement, raised
//! arguments) lives in locals of one call, so realizing the same tree twice
//! gives the same string. Missing data never fails a realization: a
//! constituent without a head or a lexicon miss degrades to empty or
//! synthesized text and is logged.
//!
//! ```
//! use std::sync::Arc;
//! use akh_realiser::lexicon::BasicLexicon;
//! use akh_realiser::realiser::Realiser;
//! use akh_realiser::spec::SpecTree;
//!
//! let mut tree = SpecTree::new(Arc::new(BasicLexicon::english()));
//! let ball = tree.noun_phrase_with("the", "ball");
//! let clause = tree.clause("John", "kick", ball).unwrap();
//! let realiser = Realiser::for_tree(&tree);
//! assert_eq!(realiser.realise(&tree, clause), "John kicks the ball.");
//! ```

mod clause;
mod coord;
mod document;
mod headed;
mod noun;
pub mod text;
mod verb;

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::features::{Agreement, Case};
use crate::lexicon::Lexicon;
use crate::spec::{PhraseKind, SpecBody, SpecId, SpecTree, Specifier};

/// Plain text or HTML markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputMode {
    #[default]
    PlainText,
    Html,
}

/// Realiser configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RealiserConfig {
    /// Paragraph pouring width in characters. 0 disables pouring.
    pub line_length: usize,
    pub output: OutputMode,
    /// Write "can not" as "cannot".
    pub fuse_cannot: bool,
    /// Contract auxiliary + "not" ("does not" → "doesn't").
    pub contract_negation: bool,
    /// Text placed between paragraphs of a plain-text document.
    pub paragraph_separator: String,
}

impl Default for RealiserConfig {
    fn default() -> Self {
        Self {
            line_length: 70,
            output: OutputMode::PlainText,
            fuse_cannot: true,
            contract_negation: false,
            paragraph_separator: "\n\n".to_string(),
        }
    }
}

impl RealiserConfig {
    /// Parse a TOML configuration. Missing keys keep their defaults.
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        toml::from_str(source).map_err(|source| ConfigError::Parse { source })
    }

    /// Read and parse a TOML configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&source)
    }
}

/// Turns phrase trees into text.
///
/// Holds the shared lexicon and the output configuration; the trees
/// themselves are passed per call, so one realiser serves many trees.
#[derive(Clone)]
pub struct Realiser {
    lexicon: Arc<dyn Lexicon>,
    config: RealiserConfig,
}

impl Realiser {
    pub fn new(lexicon: Arc<dyn Lexicon>) -> Self {
        Self {
            lexicon,
            config: RealiserConfig::default(),
        }
    }

    /// A realiser sharing the lexicon `tree` was built with.
    pub fn for_tree(tree: &SpecTree) -> Self {
        Self::new(Arc::clone(tree.lexicon()))
    }

    pub fn with_config(mut self, config: RealiserConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &RealiserConfig {
        &self.config
    }

    pub fn line_length(mut self, width: usize) -> Self {
        self.config.line_length = width;
        self
    }

    pub fn output(mut self, mode: OutputMode) -> Self {
        self.config.output = mode;
        self
    }

    pub fn fuse_cannot(mut self, fuse: bool) -> Self {
        self.config.fuse_cannot = fuse;
        self
    }

    pub fn contract_negation(mut self, contract: bool) -> Self {
        self.config.contract_negation = contract;
        self
    }

    /// Realize the constituent or document unit `id`.
    ///
    /// A root clause gets sentence orthography (capital letter and
    /// terminator); any other phrase is returned as bare text.
    pub fn realise(&self, tree: &SpecTree, id: SpecId) -> String {
        let walk = self.walk(tree);
        let text = match tree.level(id) {
            None => {
                tracing::debug!(%id, "realising an unknown id as empty text");
                String::new()
            }
            Some(crate::spec::DocLevel::Phrase) => {
                let text = if walk.is_root_clause(id) {
                    walk.sentence_text(&[id])
                } else {
                    walk.phrase(id, Ctx::default())
                };
                match self.config.output {
                    OutputMode::PlainText => text,
                    OutputMode::Html => text::escape_html(&text),
                }
            }
            Some(_) => walk.unit(id),
        };
        tracing::trace!(%id, chars = text.len(), "realised");
        text
    }

    /// Realize `id` as a whole document: a phrase is treated as the only
    /// sentence of the only paragraph, and so on up. The tree is not
    /// modified.
    pub fn realise_as_document(&self, tree: &SpecTree, id: SpecId) -> String {
        self.walk(tree).as_document(id)
    }

    fn walk<'a>(&'a self, tree: &'a SpecTree) -> Walk<'a> {
        Walk {
            tree,
            lexicon: self.lexicon.as_ref(),
            config: &self.config,
        }
    }
}

impl std::fmt::Debug for Realiser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Realiser")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Transient state handed down the tree during one realization.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Ctx<'a> {
    /// Case forced on pronouns: nominative for passive-raised arguments,
    /// accusative for the passive agent.
    pub case: Option<Case>,
    /// Realize a noun phrase in its possessive form (gerund subjects,
    /// possessive specifiers).
    pub possessive: bool,
    /// A coordinate noun phrase realizes the specifier once for all
    /// conjuncts.
    pub suppress_specifier: bool,
    /// Specifier inherited from a coordination, used by conjuncts that
    /// have none of their own.
    pub specifier: Option<&'a Specifier>,
    /// Agreement imposed by an enclosing clause on its verb phrase.
    pub agreement: Option<Agreement>,
}

impl<'a> Ctx<'a> {
    /// The context a child constituent starts from: only agreement flows
    /// into nested phrases.
    pub fn nested(self) -> Self {
        Ctx {
            agreement: self.agreement,
            ..Ctx::default()
        }
    }
}

/// One realization pass over a tree.
pub(crate) struct Walk<'a> {
    pub tree: &'a SpecTree,
    pub lexicon: &'a dyn Lexicon,
    pub config: &'a RealiserConfig,
}

impl<'a> Walk<'a> {
    /// Realize a phrase (not a document unit).
    pub fn phrase(&self, id: SpecId, ctx: Ctx<'a>) -> String {
        let Some(phrase) = self.tree.phrase(id) else {
            return match self.tree.get(id).map(|n| &n.body) {
                Some(SpecBody::Sentence(children)) => self.sentence_text(children),
                Some(_) => self.unit(id),
                None => String::new(),
            };
        };
        if phrase.elided {
            return String::new();
        }
        match &phrase.kind {
            PhraseKind::Noun(np) => self.noun_phrase(id, np, phrase.function, ctx),
            PhraseKind::Verb(vp) => self.verb_phrase(id, vp, ctx),
            PhraseKind::Preposition(pp) => self.headed(id, &pp.headed, pp.headed.base().to_string()),
            PhraseKind::Adjective(ap) => {
                let head = self.graded(&ap.headed, ap.degree);
                self.headed(id, &ap.headed, head)
            }
            PhraseKind::Adverb(ap) => {
                let head = self.graded(&ap.headed, ap.degree);
                self.headed(id, &ap.headed, head)
            }
            PhraseKind::Clause(cl) => self.clause(id, cl),
            PhraseKind::Canned(text) => text.trim().to_string(),
            PhraseKind::Coordinate(co) => self.coordinate(co, ctx),
        }
    }

    /// Realize each member of a list, dropping empty results.
    pub fn each(&self, ids: &[SpecId], ctx: Ctx<'a>) -> Vec<String> {
        ids.iter()
            .map(|&id| self.phrase(id, ctx))
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// Whether `id` is a clause realized as a sentence of its own: one that
    /// is not embedded in another phrase or already inside a sentence unit.
    pub fn is_root_clause(&self, id: SpecId) -> bool {
        let is_clause = self
            .tree
            .category(id)
            .is_some_and(|c| c == crate::features::Category::Clause);
        if !is_clause {
            return false;
        }
        match self.tree.parent(id).and_then(|p| self.tree.get(p)) {
            None => true,
            Some(parent) => matches!(
                parent.body,
                SpecBody::Paragraph(_) | SpecBody::Document { .. }
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::{Form, InterrogativeType, Number, Tense};
    use crate::lexicon::BasicLexicon;
    use crate::spec::DocLevel;

    fn setup() -> (SpecTree, Realiser) {
        let tree = SpecTree::new(Arc::new(BasicLexicon::english()));
        let realiser = Realiser::for_tree(&tree);
        (tree, realiser)
    }

    #[test]
    fn config_defaults() {
        let config = RealiserConfig::default();
        assert_eq!(config.line_length, 70);
        assert_eq!(config.output, OutputMode::PlainText);
        assert!(config.fuse_cannot);
        assert!(!config.contract_negation);
    }

    #[test]
    fn config_from_toml_keeps_missing_defaults() {
        let config = RealiserConfig::from_toml("line_length = 40\noutput = \"html\"\n").unwrap();
        assert_eq!(config.line_length, 40);
        assert_eq!(config.output, OutputMode::Html);
        assert!(config.fuse_cannot);
        assert_eq!(config.paragraph_separator, "\n\n");
    }

    #[test]
    fn malformed_config_is_an_error() {
        let err = RealiserConfig::from_toml("line_length = \"wide\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn root_clause_gets_orthography() {
        let (mut t, r) = setup();
        let ball = t.noun_phrase_with("the", "ball");
        let c = t.clause("John", "kick", ball).unwrap();
        assert_eq!(r.realise(&t, c), "John kicks the ball.");
    }

    #[test]
    fn plain_phrase_has_no_orthography() {
        let (mut t, r) = setup();
        let np = t.noun_phrase_with("the", "dog");
        assert_eq!(r.realise(&t, np), "the dog");
    }

    #[test]
    fn realisation_is_idempotent() {
        let (mut t, r) = setup();
        let ball = t.noun_phrase_with("the", "ball");
        let c = t.clause("John", "kick", ball).unwrap();
        t.set_passive(c, true).unwrap();
        t.set_tense(c, Tense::Past).unwrap();
        t.set_interrogative(c, InterrogativeType::Why, None).unwrap();
        let first = r.realise(&t, c);
        let second = r.realise(&t, c);
        assert_eq!(first, second);
        assert_eq!(first, "Why was the ball kicked by John?");
    }

    #[test]
    fn elided_phrase_is_empty() {
        let (mut t, r) = setup();
        let np = t.noun_phrase_with("the", "dog");
        t.set_elided(np, true).unwrap();
        assert_eq!(r.realise(&t, np), "");
    }

    #[test]
    fn html_escapes_phrase_text() {
        let (mut t, r) = setup();
        let r = r.output(OutputMode::Html);
        let c = t.canned("salt & pepper");
        assert_eq!(r.realise(&t, c), "salt &amp; pepper");
    }

    #[test]
    fn document_of_a_phrase() {
        let (mut t, r) = setup();
        let c = t.intransitive("the dog", "sleep").unwrap();
        t.set_form(c, Form::Normal).unwrap();
        assert_eq!(r.realise_as_document(&t, c), "The dog sleeps.");
        // Nothing was promoted in the tree.
        assert_eq!(t.parent(c), None);
        assert_eq!(t.level(c), Some(DocLevel::Phrase));
    }

    #[test]
    fn plural_noun_phrase() {
        let (mut t, r) = setup();
        let np = t.noun_phrase_with("a", "cat");
        t.set_number(np, Number::Plural).unwrap();
        assert_eq!(r.realise(&t, np), "some cats");
    }
}
