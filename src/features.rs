//! Grammatical features carried by phrases and word entries.
//!
//! Every feature is a closed enum so realization can match exhaustively.
//! The [`Feature`] value is the unit of feature assignment on a
//! [`SpecTree`](crate::spec::SpecTree): it is what coordinate phrases
//! percolate to their conjuncts.

use serde::{Deserialize, Serialize};

/// Syntactic category of a word entry or a phrase.
///
/// A headed phrase has the category of its head's word class; a coordinate
/// phrase has the category of its conjuncts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Preposition,
    Determiner,
    Pronoun,
    Conjunction,
    Complementiser,
    Modal,
    /// A full clause (subject + verb phrase).
    Clause,
    /// Opaque canned text.
    Canned,
}

impl Category {
    /// Whether a phrase of this category can head a [`HeadedPhrase`](crate::spec::Headed).
    pub fn is_phrasal_head(self) -> bool {
        matches!(
            self,
            Category::Noun
                | Category::Verb
                | Category::Adjective
                | Category::Adverb
                | Category::Preposition
        )
    }

    /// Whether words of this category inflect for degree.
    pub fn takes_degree(self) -> bool {
        matches!(self, Category::Adjective | Category::Adverb)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Category::Noun => "noun",
            Category::Verb => "verb",
            Category::Adjective => "adjective",
            Category::Adverb => "adverb",
            Category::Preposition => "preposition",
            Category::Determiner => "determiner",
            Category::Pronoun => "pronoun",
            Category::Conjunction => "conjunction",
            Category::Complementiser => "complementiser",
            Category::Modal => "modal",
            Category::Clause => "clause",
            Category::Canned => "canned text",
        };
        f.write_str(name)
    }
}

/// The grammatical role a constituent plays inside its parent.
///
/// Assigned by whichever operation attaches the constituent; a child never
/// sets its own function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscourseFunction {
    Subject,
    Object,
    IndirectObject,
    Premodifier,
    Postmodifier,
    AttributivePostmodifier,
    FrontModifier,
    CuePhrase,
    PrepObject,
    PredicativeComplement,
    /// Any complement that is not an object, indirect object or predicative.
    Complement,
    Specifier,
    #[default]
    Null,
}

impl DiscourseFunction {
    /// Case a pronoun takes when it fills this function.
    pub fn case(self) -> Case {
        match self {
            DiscourseFunction::Subject => Case::Nominative,
            DiscourseFunction::Specifier => Case::Genitive,
            _ => Case::Accusative,
        }
    }
}

impl std::fmt::Display for DiscourseFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DiscourseFunction::Subject => "subject",
            DiscourseFunction::Object => "object",
            DiscourseFunction::IndirectObject => "indirect object",
            DiscourseFunction::Premodifier => "premodifier",
            DiscourseFunction::Postmodifier => "postmodifier",
            DiscourseFunction::AttributivePostmodifier => "attributive postmodifier",
            DiscourseFunction::FrontModifier => "front modifier",
            DiscourseFunction::CuePhrase => "cue phrase",
            DiscourseFunction::PrepObject => "prepositional object",
            DiscourseFunction::PredicativeComplement => "predicative complement",
            DiscourseFunction::Complement => "complement",
            DiscourseFunction::Specifier => "specifier",
            DiscourseFunction::Null => "none",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tense {
    Past,
    #[default]
    Present,
    Future,
}

/// Morphosyntactic shape of a verb phrase or clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Form {
    #[default]
    Normal,
    Gerund,
    Infinitive,
    BareInfinitive,
    Imperative,
    PastParticiple,
    PresentParticiple,
}

impl Form {
    /// Whether the front of the verb group inflects for tense and agreement.
    pub fn is_finite(self) -> bool {
        matches!(self, Form::Normal)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Person {
    First,
    Second,
    #[default]
    Third,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Number {
    #[default]
    Singular,
    Plural,
}

impl Number {
    pub fn is_plural(self) -> bool {
        self == Number::Plural
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Masculine,
    Feminine,
    #[default]
    Neuter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Case {
    Nominative,
    Accusative,
    /// Possessive determiner form ("my", "their").
    Genitive,
    /// Independent possessive form ("mine", "theirs").
    Possessive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Degree {
    #[default]
    Positive,
    Comparative,
    Superlative,
}

/// Whether a clause is a root clause or embedded inside another constituent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClauseStatus {
    #[default]
    Matrix,
    Subordinate,
}

/// The kind of question a clause asks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterrogativeType {
    YesNo,
    Who,
    What,
    Where,
    When,
    Why,
    How,
}

impl InterrogativeType {
    /// The fronted question word, if any.
    pub fn wh_word(self) -> Option<&'static str> {
        match self {
            InterrogativeType::YesNo => None,
            InterrogativeType::Who => Some("who"),
            InterrogativeType::What => Some("what"),
            InterrogativeType::Where => Some("where"),
            InterrogativeType::When => Some("when"),
            InterrogativeType::Why => Some("why"),
            InterrogativeType::How => Some("how"),
        }
    }

    /// Whether this question word replaces a nominal argument.
    pub fn is_argument_question(self) -> bool {
        matches!(self, InterrogativeType::Who | InterrogativeType::What)
    }
}

/// The logical argument a WH-word stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WhArgument {
    Subject,
    Object,
    IndirectObject,
}

impl WhArgument {
    pub fn function(self) -> DiscourseFunction {
        match self {
            WhArgument::Subject => DiscourseFunction::Subject,
            WhArgument::Object => DiscourseFunction::Object,
            WhArgument::IndirectObject => DiscourseFunction::IndirectObject,
        }
    }
}

impl TryFrom<DiscourseFunction> for WhArgument {
    type Error = DiscourseFunction;

    fn try_from(function: DiscourseFunction) -> Result<Self, Self::Error> {
        match function {
            DiscourseFunction::Subject => Ok(WhArgument::Subject),
            DiscourseFunction::Object => Ok(WhArgument::Object),
            DiscourseFunction::IndirectObject => Ok(WhArgument::IndirectObject),
            other => Err(other),
        }
    }
}

/// A single feature assignment.
///
/// Verb-group features (tense through modal) are accepted by verb phrases,
/// clauses (which forward them to their verb phrase) and coordinate phrases
/// (which store them and percolate them to every conjunct).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    Tense(Tense),
    Form(Form),
    Passive(bool),
    Perfect(bool),
    Progressive(bool),
    Negated(bool),
    Modal(Option<String>),
    Number(Number),
    Person(Person),
    Gender(Gender),
    Degree(Degree),
    Possessive(bool),
    Pronominal(bool),
}

/// Discriminant of a [`Feature`], used for error reporting and lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureKind {
    Tense,
    Form,
    Passive,
    Perfect,
    Progressive,
    Negated,
    Modal,
    Number,
    Person,
    Gender,
    Degree,
    Possessive,
    Pronominal,
}

impl Feature {
    pub fn kind(&self) -> FeatureKind {
        match self {
            Feature::Tense(_) => FeatureKind::Tense,
            Feature::Form(_) => FeatureKind::Form,
            Feature::Passive(_) => FeatureKind::Passive,
            Feature::Perfect(_) => FeatureKind::Perfect,
            Feature::Progressive(_) => FeatureKind::Progressive,
            Feature::Negated(_) => FeatureKind::Negated,
            Feature::Modal(_) => FeatureKind::Modal,
            Feature::Number(_) => FeatureKind::Number,
            Feature::Person(_) => FeatureKind::Person,
            Feature::Gender(_) => FeatureKind::Gender,
            Feature::Degree(_) => FeatureKind::Degree,
            Feature::Possessive(_) => FeatureKind::Possessive,
            Feature::Pronominal(_) => FeatureKind::Pronominal,
        }
    }

    /// Whether the feature belongs to the verb group.
    pub fn is_verbal(&self) -> bool {
        matches!(
            self.kind(),
            FeatureKind::Tense
                | FeatureKind::Form
                | FeatureKind::Passive
                | FeatureKind::Perfect
                | FeatureKind::Progressive
                | FeatureKind::Negated
                | FeatureKind::Modal
        )
    }
}

impl std::fmt::Display for FeatureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FeatureKind::Tense => "tense",
            FeatureKind::Form => "form",
            FeatureKind::Passive => "passive",
            FeatureKind::Perfect => "perfect",
            FeatureKind::Progressive => "progressive",
            FeatureKind::Negated => "negated",
            FeatureKind::Modal => "modal",
            FeatureKind::Number => "number",
            FeatureKind::Person => "person",
            FeatureKind::Gender => "gender",
            FeatureKind::Degree => "degree",
            FeatureKind::Possessive => "possessive",
            FeatureKind::Pronominal => "pronominal",
        };
        f.write_str(name)
    }
}

/// Person and number a verb agrees with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Agreement {
    pub person: Person,
    pub number: Number,
}

impl Agreement {
    pub fn new(person: Person, number: Number) -> Self {
        Self { person, number }
    }

    pub fn third_singular() -> Self {
        Self::default()
    }

    pub fn third_plural() -> Self {
        Self::new(Person::Third, Number::Plural)
    }
}
