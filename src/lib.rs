// thiserror's #[error("...{field}...")] format strings reference struct fields,
// but the compiler doesn't see through the derive macro and reports false positives.
#![allow(unused_assignments)]

//! # akh-realiser
//!
//! A grammatical realization engine: it turns trees of feature-annotated
//! phrase specifications into punctuated English prose.
//!
//! ## Architecture
//!
//! - **Phrase trees** (`spec`): An arena of noun, verb, prepositional,
//!   adjective, adverb, clause, coordinate and canned phrases, plus
//!   sentence/paragraph/document units
//! - **Features** (`features`): Tense, form, voice, aspect, number, person,
//!   gender, degree and discourse functions as typed enums
//! - **Lexicon** (`lexicon`): Word entries, closed-class paradigms and
//!   rule-based inflection with irregular overrides, extensible from TOML
//! - **Realiser** (`realiser`): A pure walk over the tree that composes verb
//!   groups, agreement, questions and coordination, then applies spacing,
//!   punctuation and orthography once per document unit
//!
//! ## Library usage
//!
//! ```
//! use std::sync::Arc;
//! use akh_realiser::features::Tense;
//! use akh_realiser::lexicon::BasicLexicon;
//! use akh_realiser::realiser::Realiser;
//! use akh_realiser::spec::SpecTree;
//!
//! let mut tree = SpecTree::new(Arc::new(BasicLexicon::english()));
//! let ball = tree.noun_phrase_with("the", "ball");
//! let clause = tree.clause("John", "kick", ball).unwrap();
//! tree.set_tense(clause, Tense::Past).unwrap();
//! tree.set_passive(clause, true).unwrap();
//!
//! let realiser = Realiser::for_tree(&tree);
//! assert_eq!(realiser.realise(&tree, clause), "The ball was kicked by John.");
//! ```

pub mod error;
pub mod features;
pub mod lexicon;
pub mod realiser;
pub mod spec;
