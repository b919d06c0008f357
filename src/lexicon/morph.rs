//! English inflectional morphology.
//!
//! Regular forms come from ordered pattern-action rules: the first rule
//! whose pattern matches the base form strips a number of trailing
//! characters and appends a suffix. Irregular forms come from exception
//! lists consulted before the rules.

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use super::MorphRule;
use crate::features::{Agreement, Number, Person, Tense};

/// One pattern-action rule.
struct SuffixRule {
    pattern: Regex,
    /// Trailing characters removed before appending.
    strip: usize,
    append: Suffix,
}

enum Suffix {
    Literal(&'static str),
    /// Repeat the final consonant, then append ("stop" → "stopped").
    Double(&'static str),
    /// Periphrastic degree ("more beautiful").
    Before(&'static str),
}

impl SuffixRule {
    fn new(pattern: &str, strip: usize, append: Suffix) -> Self {
        Self {
            // Patterns are compile-time literals.
            pattern: Regex::new(pattern).expect("morphology pattern must compile"),
            strip,
            append,
        }
    }

    fn apply(&self, word: &str) -> String {
        let keep = word.chars().count().saturating_sub(self.strip);
        let stem: String = word.chars().take(keep).collect();
        match self.append {
            Suffix::Literal(suffix) => format!("{stem}{suffix}"),
            Suffix::Double(suffix) => match stem.chars().last() {
                Some(last) => format!("{stem}{last}{suffix}"),
                None => format!("{stem}{suffix}"),
            },
            Suffix::Before(word_before) => format!("{word_before} {stem}"),
        }
    }
}

use Suffix::{Before, Double, Literal};

// One-syllable consonant-vowel-consonant: the final consonant doubles.
const CVC: &str = r"(?i)^[^aeiou]*[aeiou][bdfglmnprtv]$";

fn rule_table() -> &'static HashMap<MorphRule, Vec<SuffixRule>> {
    static RULES: OnceLock<HashMap<MorphRule, Vec<SuffixRule>>> = OnceLock::new();
    RULES.get_or_init(|| {
        let mut table = HashMap::new();
        table.insert(
            MorphRule::Plural,
            vec![
                SuffixRule::new(r"(?i)[^aeiou]y$", 1, Literal("ies")),
                SuffixRule::new(r"(?i)(s|x|z|ch|sh)$", 0, Literal("es")),
                SuffixRule::new(r"(?i)[^aeiou]o$", 0, Literal("es")),
                SuffixRule::new(r"(?i)[lr]f$", 1, Literal("ves")),
                SuffixRule::new(r"(?i)[^f]fe$", 2, Literal("ves")),
                SuffixRule::new(r".$", 0, Literal("s")),
            ],
        );
        let degree = |comparative: bool| {
            let (er, more) = if comparative {
                ("er", "more")
            } else {
                ("est", "most")
            };
            vec![
                // Adverbs in -ly and long adjectives are periphrastic.
                SuffixRule::new(r"(?i)^.{3,}ly$", 0, Before(more)),
                SuffixRule::new(r"(?i)(ful|ous|ive|ing|ed|less|ant|ent|al|ic|ern|ish)$", 0, Before(more)),
                SuffixRule::new(r"(?i)([aeiouy][^aeiouy]*){3,}$", 0, Before(more)),
                SuffixRule::new(r"(?i)[^aeiou]y$", 1, Literal(if comparative { "ier" } else { "iest" })),
                SuffixRule::new(r"(?i)e$", 0, Literal(if comparative { "r" } else { "st" })),
                SuffixRule::new(CVC, 0, Double(er)),
                SuffixRule::new(r".$", 0, Literal(er)),
            ]
        };
        table.insert(MorphRule::Comparative, degree(true));
        table.insert(MorphRule::Superlative, degree(false));
        table.insert(
            MorphRule::Present3s,
            vec![
                SuffixRule::new(r"(?i)[^aeiou]y$", 1, Literal("ies")),
                SuffixRule::new(r"(?i)(s|x|z|ch|sh|o)$", 0, Literal("es")),
                SuffixRule::new(r".$", 0, Literal("s")),
            ],
        );
        let past = || {
            vec![
                SuffixRule::new(r"(?i)e$", 0, Literal("d")),
                SuffixRule::new(r"(?i)[^aeiou]y$", 1, Literal("ied")),
                SuffixRule::new(CVC, 0, Double("ed")),
                SuffixRule::new(r".$", 0, Literal("ed")),
            ]
        };
        table.insert(MorphRule::Past, past());
        table.insert(MorphRule::PastParticiple, past());
        table.insert(
            MorphRule::PresentParticiple,
            vec![
                SuffixRule::new(r"(?i)ie$", 2, Literal("ying")),
                SuffixRule::new(r"(?i)(ee|ye|oe)$", 0, Literal("ing")),
                SuffixRule::new(r"(?i)[^aeiou]e$", 1, Literal("ing")),
                SuffixRule::new(CVC, 0, Double("ing")),
                SuffixRule::new(r".$", 0, Literal("ing")),
            ],
        );
        table
    })
}

// ---------------------------------------------------------------------------
// Exception lists
// ---------------------------------------------------------------------------

const IRREGULAR_PLURALS: &[(&str, &str)] = &[
    ("child", "children"),
    ("man", "men"),
    ("woman", "women"),
    ("person", "people"),
    ("mouse", "mice"),
    ("louse", "lice"),
    ("goose", "geese"),
    ("tooth", "teeth"),
    ("foot", "feet"),
    ("ox", "oxen"),
    ("datum", "data"),
    ("index", "indices"),
    ("vertex", "vertices"),
    ("matrix", "matrices"),
    ("criterion", "criteria"),
    ("phenomenon", "phenomena"),
    ("analysis", "analyses"),
    ("crisis", "crises"),
    ("thesis", "theses"),
    ("cactus", "cacti"),
    ("fungus", "fungi"),
    ("sheep", "sheep"),
    ("fish", "fish"),
    ("deer", "deer"),
    ("series", "series"),
    ("species", "species"),
    ("aircraft", "aircraft"),
    ("photo", "photos"),
    ("piano", "pianos"),
    ("memo", "memos"),
    ("logo", "logos"),
    ("kilo", "kilos"),
    ("solo", "solos"),
    ("safe", "safes"),
    ("cafe", "cafes"),
    ("roof", "roofs"),
    ("chef", "chefs"),
    ("belief", "beliefs"),
    ("chief", "chiefs"),
];

const IRREGULAR_DEGREES: &[(&str, &str, &str)] = &[
    ("good", "better", "best"),
    ("well", "better", "best"),
    ("bad", "worse", "worst"),
    ("badly", "worse", "worst"),
    ("far", "farther", "farthest"),
    ("little", "less", "least"),
    ("many", "more", "most"),
    ("much", "more", "most"),
    ("simple", "simpler", "simplest"),
    ("quiet", "quieter", "quietest"),
    ("clever", "cleverer", "cleverest"),
    ("narrow", "narrower", "narrowest"),
    ("early", "earlier", "earliest"),
    ("fast", "faster", "fastest"),
    ("hard", "harder", "hardest"),
    ("late", "later", "latest"),
    ("soon", "sooner", "soonest"),
];

/// (base, past, past participle)
const IRREGULAR_VERBS: &[(&str, &str, &str)] = &[
    ("be", "was", "been"),
    ("have", "had", "had"),
    ("do", "did", "done"),
    ("go", "went", "gone"),
    ("eat", "ate", "eaten"),
    ("see", "saw", "seen"),
    ("give", "gave", "given"),
    ("take", "took", "taken"),
    ("make", "made", "made"),
    ("come", "came", "come"),
    ("know", "knew", "known"),
    ("get", "got", "got"),
    ("find", "found", "found"),
    ("think", "thought", "thought"),
    ("tell", "told", "told"),
    ("say", "said", "said"),
    ("become", "became", "become"),
    ("leave", "left", "left"),
    ("feel", "felt", "felt"),
    ("bring", "brought", "brought"),
    ("begin", "began", "begun"),
    ("keep", "kept", "kept"),
    ("hold", "held", "held"),
    ("write", "wrote", "written"),
    ("stand", "stood", "stood"),
    ("hear", "heard", "heard"),
    ("let", "let", "let"),
    ("mean", "meant", "meant"),
    ("set", "set", "set"),
    ("meet", "met", "met"),
    ("run", "ran", "run"),
    ("pay", "paid", "paid"),
    ("sit", "sat", "sat"),
    ("speak", "spoke", "spoken"),
    ("lie", "lay", "lain"),
    ("lead", "led", "led"),
    ("read", "read", "read"),
    ("grow", "grew", "grown"),
    ("lose", "lost", "lost"),
    ("fall", "fell", "fallen"),
    ("send", "sent", "sent"),
    ("build", "built", "built"),
    ("understand", "understood", "understood"),
    ("draw", "drew", "drawn"),
    ("break", "broke", "broken"),
    ("spend", "spent", "spent"),
    ("cut", "cut", "cut"),
    ("rise", "rose", "risen"),
    ("drive", "drove", "driven"),
    ("buy", "bought", "bought"),
    ("wear", "wore", "worn"),
    ("choose", "chose", "chosen"),
    ("throw", "threw", "thrown"),
    ("catch", "caught", "caught"),
    ("fly", "flew", "flown"),
    ("sing", "sang", "sung"),
    ("swim", "swam", "swum"),
    ("sleep", "slept", "slept"),
    ("win", "won", "won"),
    ("teach", "taught", "taught"),
    ("fight", "fought", "fought"),
    ("forget", "forgot", "forgotten"),
    ("forgive", "forgave", "forgiven"),
    ("hit", "hit", "hit"),
    ("put", "put", "put"),
    ("ride", "rode", "ridden"),
    ("sell", "sold", "sold"),
    ("shake", "shook", "shaken"),
    ("shoot", "shot", "shot"),
    ("shut", "shut", "shut"),
    ("steal", "stole", "stolen"),
    ("bite", "bit", "bitten"),
    ("blow", "blew", "blown"),
    ("dig", "dug", "dug"),
    ("drink", "drank", "drunk"),
    ("feed", "fed", "fed"),
    ("freeze", "froze", "frozen"),
    ("hang", "hung", "hung"),
    ("hide", "hid", "hidden"),
    ("hurt", "hurt", "hurt"),
    ("lay", "laid", "laid"),
    ("ring", "rang", "rung"),
    ("seek", "sought", "sought"),
    ("sink", "sank", "sunk"),
    ("spin", "spun", "spun"),
    ("spread", "spread", "spread"),
    ("swear", "swore", "sworn"),
    ("sweep", "swept", "swept"),
    ("tear", "tore", "torn"),
    ("wake", "woke", "woken"),
    ("stick", "stuck", "stuck"),
    ("strike", "struck", "struck"),
    ("cost", "cost", "cost"),
    ("quit", "quit", "quit"),
    ("bet", "bet", "bet"),
    ("bend", "bent", "bent"),
    ("lend", "lent", "lent"),
    ("light", "lit", "lit"),
    ("slide", "slid", "slid"),
    ("bear", "bore", "borne"),
    ("beat", "beat", "beaten"),
    ("bleed", "bled", "bled"),
    ("deal", "dealt", "dealt"),
    ("forbid", "forbade", "forbidden"),
    ("kneel", "knelt", "knelt"),
    ("show", "showed", "shown"),
    ("sew", "sewed", "sewn"),
    ("weep", "wept", "wept"),
    ("wind", "wound", "wound"),
    // Regular in spelling but the doubling heuristic would misfire.
    ("visit", "visited", "visited"),
    ("open", "opened", "opened"),
    ("happen", "happened", "happened"),
    ("listen", "listened", "listened"),
    ("offer", "offered", "offered"),
    ("enter", "entered", "entered"),
];

const IRREGULAR_PARTICIPLES: &[(&str, &str)] = &[
    ("be", "being"),
    ("visit", "visiting"),
    ("open", "opening"),
    ("happen", "happening"),
    ("listen", "listening"),
    ("offer", "offering"),
    ("enter", "entering"),
];

const IRREGULAR_PRESENT: &[(&str, &str)] = &[("be", "is"), ("have", "has")];

fn exception(rule: MorphRule, base: &str) -> Option<&'static str> {
    let lower = base.to_lowercase();
    let lower = lower.as_str();
    match rule {
        MorphRule::Plural => IRREGULAR_PLURALS
            .iter()
            .find(|(b, _)| *b == lower)
            .map(|(_, p)| *p),
        MorphRule::Comparative => IRREGULAR_DEGREES
            .iter()
            .find(|(b, _, _)| *b == lower)
            .map(|(_, c, _)| *c),
        MorphRule::Superlative => IRREGULAR_DEGREES
            .iter()
            .find(|(b, _, _)| *b == lower)
            .map(|(_, _, s)| *s),
        MorphRule::Present3s => IRREGULAR_PRESENT
            .iter()
            .find(|(b, _)| *b == lower)
            .map(|(_, f)| *f),
        MorphRule::Past => IRREGULAR_VERBS
            .iter()
            .find(|(b, _, _)| *b == lower)
            .map(|(_, p, _)| *p),
        MorphRule::PastParticiple => IRREGULAR_VERBS
            .iter()
            .find(|(b, _, _)| *b == lower)
            .map(|(_, _, pp)| *pp),
        MorphRule::PresentParticiple => IRREGULAR_PARTICIPLES
            .iter()
            .find(|(b, _)| *b == lower)
            .map(|(_, f)| *f),
    }
}

/// Inflect `base` with the regular rules, after consulting the built-in
/// exception lists. The case of the first letter is preserved.
pub fn inflect(base: &str, rule: MorphRule) -> String {
    if base.is_empty() {
        return String::new();
    }
    if let Some(form) = exception(rule, base) {
        return format_case(base, form);
    }
    // Multi-word bases ("ice cream") inflect their last word.
    if let Some((head, last)) = base.rsplit_once(' ') {
        if matches!(rule, MorphRule::Plural) {
            return format!("{head} {}", inflect(last, rule));
        }
    }
    let rules = &rule_table()[&rule];
    rules
        .iter()
        .find(|r| r.pattern.is_match(base))
        .map(|r| r.apply(base))
        .unwrap_or_else(|| base.to_string())
}

/// Forms of the copula, which has more agreement distinctions than any
/// other verb. Returns `None` for every other base.
pub fn be_form(base: &str, tense: Tense, agreement: Agreement) -> Option<String> {
    if !base.eq_ignore_ascii_case("be") {
        return None;
    }
    let singular = agreement.number == Number::Singular;
    let form = match tense {
        Tense::Present => match (agreement.person, singular) {
            (Person::First, true) => "am",
            (Person::Third, true) => "is",
            _ => "are",
        },
        Tense::Past => match (agreement.person, singular) {
            (Person::First, true) | (Person::Third, true) => "was",
            _ => "were",
        },
        Tense::Future => "will be",
    };
    Some(form.to_string())
}

/// Capitalize the first letter of a string.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => {
            let upper: String = c.to_uppercase().collect();
            upper + chars.as_str()
        }
    }
}

/// Preserve the case style of the original word in the replacement.
fn format_case(original: &str, replacement: &str) -> String {
    if original.chars().next().is_some_and(|c| c.is_uppercase()) {
        capitalize(replacement)
    } else {
        replacement.to_string()
    }
}

/// Letters whose spoken name starts with a vowel sound ("an FBI agent").
const VOWEL_SOUND_LETTERS: &[char] = &['A', 'E', 'F', 'H', 'I', 'L', 'M', 'N', 'O', 'R', 'S', 'X'];

/// Choose "a" or "an" for the text that follows the article.
///
/// Heuristic: acronyms go by the name of their first letter, "honest"/"hour"
/// style words take "an", "uni-"/"use"/"one" style words take "a", and
/// otherwise a leading vowel letter decides. Accents are stripped first.
pub fn indefinite_article(following: &str) -> &'static str {
    let word: String = following
        .trim_start()
        .split(|c: char| c.is_whitespace() || c == '-')
        .next()
        .unwrap_or("")
        .nfd()
        .filter(|c| c.is_ascii())
        .collect();
    let Some(first) = word.chars().next() else {
        return "a";
    };

    let letters: Vec<char> = word.chars().filter(|c| c.is_alphabetic()).collect();
    let is_acronym = letters.len() >= 2 && letters.iter().all(|c| c.is_uppercase());
    if is_acronym || (letters.len() == 1 && first.is_uppercase()) {
        return if VOWEL_SOUND_LETTERS.contains(&first) {
            "an"
        } else {
            "a"
        };
    }

    let lower = word.to_lowercase();
    if ["honest", "hour", "heir", "honor", "honour"]
        .iter()
        .any(|p| lower.starts_with(p))
    {
        return "an";
    }
    if ["uni", "use", "usu", "uti", "eu", "ewe", "one", "once", "ure"]
        .iter()
        .any(|p| lower.starts_with(p))
    {
        return "a";
    }
    if first.is_ascii_digit() {
        // "an 8", "an 11", "an 18"
        return if lower.starts_with('8') || lower == "11" || lower == "18" {
            "an"
        } else {
            "a"
        };
    }
    match lower.chars().next() {
        Some('a' | 'e' | 'i' | 'o' | 'u') => "an",
        _ => "a",
    }
}
