//! Lexicon extensions loaded from TOML.
//!
//! ## Example TOML
//!
//! ```toml
//! [[entry]]
//! base = "octopus"
//! category = "noun"
//! plural = "octopodes"
//!
//! [[entry]]
//! base = "Akh"
//! category = "noun"
//! proper = true
//!
//! [[entry]]
//! base = "strive"
//! category = "verb"
//! past = "strove"
//! past_participle = "striven"
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::LexiconError;
use crate::features::Category;

use super::{BasicLexicon, MorphRule, WordEntry};

#[derive(Debug, Deserialize)]
struct LexiconFile {
    #[serde(default)]
    entry: Vec<EntryDef>,
}

#[derive(Debug, Deserialize)]
struct EntryDef {
    base: String,
    category: Category,
    #[serde(default)]
    proper: bool,
    plural: Option<String>,
    comparative: Option<String>,
    superlative: Option<String>,
    present3s: Option<String>,
    past: Option<String>,
    past_participle: Option<String>,
    present_participle: Option<String>,
}

impl EntryDef {
    fn forms(&self) -> impl Iterator<Item = (MorphRule, &str)> {
        [
            (MorphRule::Plural, &self.plural),
            (MorphRule::Comparative, &self.comparative),
            (MorphRule::Superlative, &self.superlative),
            (MorphRule::Present3s, &self.present3s),
            (MorphRule::Past, &self.past),
            (MorphRule::PastParticiple, &self.past_participle),
            (MorphRule::PresentParticiple, &self.present_participle),
        ]
        .into_iter()
        .filter_map(|(rule, form)| form.as_deref().map(|f| (rule, f)))
    }
}

impl BasicLexicon {
    /// Add the entries of a TOML lexicon extension. Returns how many
    /// entries were added.
    pub fn extend_from_toml(&self, source: &str) -> Result<usize, LexiconError> {
        let file: LexiconFile =
            toml::from_str(source).map_err(|source| LexiconError::Parse { source })?;

        for def in &file.entry {
            if def.base.trim().is_empty() {
                return Err(LexiconError::InvalidEntry {
                    base: def.base.clone(),
                    message: "empty base form".into(),
                });
            }
            if def.proper && def.category != Category::Noun {
                return Err(LexiconError::InvalidEntry {
                    base: def.base.clone(),
                    message: format!("only nouns can be proper, not a {}", def.category),
                });
            }
            let mut entry = WordEntry::new(def.base.trim(), def.category);
            entry.proper = def.proper;
            self.insert(entry);
            for (rule, form) in def.forms() {
                self.add_irregular(def.category, def.base.trim(), rule, form)?;
            }
        }

        tracing::debug!(entries = file.entry.len(), "extended lexicon");
        Ok(file.entry.len())
    }

    /// Read and apply a TOML lexicon extension file.
    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<usize, LexiconError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| LexiconError::Io {
            path: path.display().to_string(),
            source,
        })?;
        self.extend_from_toml(&source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::Lexicon;

    const SAMPLE: &str = r#"
[[entry]]
base = "octopus"
category = "noun"
plural = "octopodes"

[[entry]]
base = "Akh"
category = "noun"
proper = true

[[entry]]
base = "strive"
category = "verb"
past = "strove"
past_participle = "striven"
"#;

    #[test]
    fn loads_entries_and_forms() {
        let lex = BasicLexicon::english();
        assert_eq!(lex.extend_from_toml(SAMPLE).unwrap(), 3);

        let octopus = lex.lookup(Category::Noun, "octopus").unwrap();
        assert_eq!(
            lex.apply_rule(MorphRule::Plural, &octopus).as_deref(),
            Some("octopodes")
        );
        let strive = lex.lookup(Category::Verb, "strive").unwrap();
        assert_eq!(
            lex.apply_rule(MorphRule::PastParticiple, &strive).as_deref(),
            Some("striven")
        );
        assert!(lex.lookup(Category::Noun, "akh").unwrap().proper);
    }

    #[test]
    fn syntax_errors_are_wrapped() {
        let lex = BasicLexicon::english();
        let err = lex.extend_from_toml("[[entry]\nbase = ").unwrap_err();
        assert!(matches!(err, LexiconError::Parse { .. }));
    }

    #[test]
    fn incompatible_form_is_rejected() {
        let lex = BasicLexicon::english();
        let err = lex
            .extend_from_toml("[[entry]]\nbase = \"run\"\ncategory = \"verb\"\nplural = \"runs\"\n")
            .unwrap_err();
        assert!(matches!(err, LexiconError::Feature(_)));
    }

    #[test]
    fn proper_verbs_are_rejected() {
        let lex = BasicLexicon::english();
        let err = lex
            .extend_from_toml("[[entry]]\nbase = \"go\"\ncategory = \"verb\"\nproper = true\n")
            .unwrap_err();
        assert!(matches!(err, LexiconError::InvalidEntry { .. }));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let lex = BasicLexicon::english();
        let err = lex.load_file("/nonexistent/lexicon.toml").unwrap_err();
        assert!(matches!(err, LexiconError::Io { .. }));
    }
}
