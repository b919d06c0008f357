//! Rich diagnostic error types for the realiser.
//!
//! Each subsystem defines its own error type with miette `#[diagnostic]` derives,
//! providing error codes and help text. Only construction-time misuse and
//! collaborator failures are errors: realization itself never fails, it
//! degrades to best-effort text.

use miette::Diagnostic;
use thiserror::Error;

use crate::features::{Category, DiscourseFunction, FeatureKind};
use crate::lexicon::MorphRule;

/// Top-level error type.
///
/// Each variant wraps a subsystem-specific error, preserving the full diagnostic
/// chain through to the caller.
#[derive(Debug, Error, Diagnostic)]
pub enum RealiserError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Spec(#[from] SpecError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Feature(#[from] FeatureError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Lexicon(#[from] LexiconError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),
}

// ---------------------------------------------------------------------------
// Structural misuse
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum SpecError {
    #[error("cannot coordinate a {actual} with a {expected} coordination")]
    #[diagnostic(
        code(akh::spec::mixed_coordination),
        help(
            "All conjuncts of a coordinate phrase must share one category. \
             Build separate coordinations, or wrap the odd constituent in a \
             phrase of the right category first."
        )
    )]
    MixedCoordination { expected: Category, actual: Category },

    #[error("a WH-question cannot stand for the {function}")]
    #[diagnostic(
        code(akh::spec::invalid_wh_argument),
        help(
            "Only the subject, object or indirect object can be questioned. \
             For adverbial questions (where, when, why, how) pass no argument."
        )
    )]
    InvalidWhArgument { function: DiscourseFunction },

    #[error("unknown constituent id {id}")]
    #[diagnostic(
        code(akh::spec::unknown_id),
        help("The id was not produced by this tree. Ids are only valid in the tree that created them.")
    )]
    UnknownId { id: u32 },

    #[error("{operation} is not supported on a {actual} constituent")]
    #[diagnostic(
        code(akh::spec::wrong_kind),
        help("The operation expects a different kind of phrase. Check which constituent id was passed.")
    )]
    WrongKind {
        operation: &'static str,
        actual: String,
    },

    #[error("attaching {child} under {parent} would create a cycle")]
    #[diagnostic(
        code(akh::spec::cycle),
        help("A constituent cannot be attached to itself or to one of its own descendants.")
    )]
    Cycle { parent: u32, child: u32 },

    #[error("cannot promote a {from} to a {to}")]
    #[diagnostic(
        code(akh::spec::bad_promotion),
        help("Promotion only moves a constituent to a coarser document unit (phrase → sentence → paragraph → document).")
    )]
    BadPromotion { from: String, to: String },

    #[error("a {category} phrase needs a head word, got an empty string")]
    #[diagnostic(
        code(akh::spec::empty_head),
        help("Pass a non-empty base form, or build a canned-text phrase instead.")
    )]
    EmptyHead { category: Category },

    #[error("malformed phrase description")]
    #[diagnostic(
        code(akh::spec::invalid_description),
        help(
            "A description is JSON: a string, or an object with a \"type\" of noun, verb, \
             preposition, adjective, adverb, clause, canned, coordinate, sentence, \
             paragraph or document."
        )
    )]
    InvalidDescription {
        #[source]
        source: serde_json::Error,
    },
}

// ---------------------------------------------------------------------------
// Invalid feature combinations
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum FeatureError {
    #[error("the {feature} feature does not apply to a {target} constituent")]
    #[diagnostic(
        code(akh::feature::not_applicable),
        help(
            "Verb-group features (tense, form, voice, aspect, negation, modal) belong on \
             verb phrases and clauses; gender, possessive and pronominal on noun phrases; \
             degree on adjective and adverb phrases."
        )
    )]
    NotApplicable {
        feature: FeatureKind,
        target: String,
    },

    #[error("inflection {rule} cannot apply to a {category}")]
    #[diagnostic(
        code(akh::feature::incompatible_inflection),
        help(
            "Plural applies to nouns; comparative and superlative to adjectives and \
             adverbs; the four verb inflections to verbs."
        )
    )]
    IncompatibleInflection { rule: MorphRule, category: Category },
}

// ---------------------------------------------------------------------------
// Collaborator failures
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum LexiconError {
    #[error("failed to read lexicon file {path}")]
    #[diagnostic(
        code(akh::lexicon::io),
        help("Check that the file exists and is readable.")
    )]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed lexicon data")]
    #[diagnostic(
        code(akh::lexicon::parse),
        help(
            "Lexicon extensions are TOML files with [[entry]] tables carrying \
             `base`, `category` and optional irregular forms."
        )
    )]
    Parse {
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid lexicon entry \"{base}\": {message}")]
    #[diagnostic(
        code(akh::lexicon::invalid_entry),
        help("Every entry needs a non-empty base form and a valid category.")
    )]
    InvalidEntry { base: String, message: String },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Feature(#[from] FeatureError),
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("malformed realiser configuration")]
    #[diagnostic(
        code(akh::config::parse),
        help("The configuration is TOML with keys line_length, output, fuse_cannot, contract_negation and paragraph_separator.")
    )]
    Parse {
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to read configuration file {path}")]
    #[diagnostic(code(akh::config::io), help("Check that the file exists and is readable."))]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience result type.
pub type RealiseResult<T> = std::result::Result<T, RealiserError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_errors_convert_to_top_level() {
        let err: RealiserError = SpecError::UnknownId { id: 7 }.into();
        assert!(matches!(err, RealiserError::Spec(SpecError::UnknownId { id: 7 })));
        assert_eq!(err.to_string(), "unknown constituent id 7");
    }

    #[test]
    fn diagnostic_codes_are_namespaced() {
        let err = SpecError::MixedCoordination {
            expected: Category::Noun,
            actual: Category::Verb,
        };
        let code = err.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("akh::spec::mixed_coordination"));
        assert_eq!(
            err.to_string(),
            "cannot coordinate a verb with a noun coordination"
        );
    }

    #[test]
    fn feature_error_message() {
        let err = FeatureError::NotApplicable {
            feature: FeatureKind::Tense,
            target: "noun phrase".into(),
        };
        assert_eq!(
            err.to_string(),
            "the tense feature does not apply to a noun phrase constituent"
        );
    }
}
