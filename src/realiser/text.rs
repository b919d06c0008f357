//! Textual assembly: spacing, punctuation absorption, list conjunction,
//! paragraph pouring.

/// No space is inserted after these.
const NO_TRAILING_SPACE: &[char] = &['(', '[', '{', '"', '\u{201c}'];

/// No space is inserted before these.
const NO_LEADING_SPACE: &[char] = &[')', ']', '}', ',', '.', ';', ':', '!', '?', '\'', '\u{201d}'];

/// Punctuation marks from weakest to strongest.
const STRENGTH: &str = ",;:-.!?";

fn strength(mark: char) -> Option<usize> {
    STRENGTH.find(mark)
}

/// Append `piece` to `buf`, inserting a single space unless one side
/// already supplies the separation. Empty pieces are skipped.
pub fn append(buf: &mut String, piece: &str) {
    if piece.is_empty() {
        return;
    }
    let needs_space = match (buf.chars().last(), piece.chars().next()) {
        (None, _) => false,
        (Some(left), Some(right)) => {
            !left.is_whitespace()
                && !NO_TRAILING_SPACE.contains(&left)
                && !right.is_whitespace()
                && !NO_LEADING_SPACE.contains(&right)
        }
        (Some(_), None) => false,
    };
    if needs_space {
        buf.push(' ');
    }
    buf.push_str(piece);
}

/// Join fragments with the spacing rules of [`append`].
pub fn join<I, S>(pieces: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for piece in pieces {
        append(&mut out, piece.as_ref());
    }
    out
}

/// Append a punctuation mark, keeping only the stronger mark when the text
/// already ends in punctuation ("Mr." + "." stays "Mr.", "x," + "." → "x.").
pub fn absorb(text: &str, mark: char) -> String {
    let trimmed = text.trim_end();
    let Some(last) = trimmed.chars().last() else {
        return mark.to_string();
    };
    match (strength(last), strength(mark)) {
        (Some(existing), Some(new)) => {
            if new > existing {
                let mut out = trimmed[..trimmed.len() - last.len_utf8()].to_string();
                out.push(mark);
                out
            } else {
                trimmed.to_string()
            }
        }
        _ => format!("{trimmed}{mark}"),
    }
}

/// Realize a list with a conjunction: "a", "a and b", "a, b and c".
///
/// The separator becomes ";" for the whole list when any item already
/// contains a comma or semicolon.
pub fn conjoin(items: &[String], conjunction: &str) -> String {
    let items: Vec<&str> = items
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();
    let separator = if items.iter().any(|s| s.contains(',') || s.contains(';')) {
        ";"
    } else {
        ","
    };
    match items.as_slice() {
        [] => String::new(),
        [one] => (*one).to_string(),
        [a, b] => join([*a, conjunction, *b]),
        [rest @ .., last] => {
            let mut out = String::new();
            for (i, item) in rest.iter().enumerate() {
                append(&mut out, item);
                if i + 1 < rest.len() {
                    out.push_str(separator);
                }
            }
            append(&mut out, conjunction);
            append(&mut out, last);
            out
        }
    }
}

/// Wrap text to `width` columns by breaking at the nearest preceding
/// whitespace. Words longer than the width get a line to themselves.
/// A width of zero disables wrapping.
pub fn pour(text: &str, width: usize) -> String {
    if width == 0 {
        return text.to_string();
    }
    let mut out = String::with_capacity(text.len());
    let mut line_len = 0;
    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if line_len > 0 && line_len + 1 + word_len > width {
            out.push('\n');
            line_len = 0;
        } else if line_len > 0 {
            out.push(' ');
            line_len += 1;
        }
        out.push_str(word);
        line_len += word_len;
    }
    out
}

/// Escape text for HTML element content.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Possessive clitic: "'" after a plural ending in s, "'s" otherwise.
pub fn add_clitic(text: &str, plural: bool) -> String {
    if text.is_empty() {
        return text.to_string();
    }
    if plural && text.ends_with(['s', 'S']) {
        format!("{text}'")
    } else {
        format!("{text}'s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing() {
        assert_eq!(join(["the", "dog"]), "the dog");
        assert_eq!(join(["the", "", "dog"]), "the dog");
        assert_eq!(join(["(", "aside", ")"]), "(aside)");
        assert_eq!(join(["John", ",", "however"]), "John, however");
        assert_eq!(join(["John", "'s"]), "John's");
        assert_eq!(join(["end ", "start"]), "end start");
    }

    #[test]
    fn punctuation_absorption() {
        assert_eq!(absorb("he left", '.'), "he left.");
        assert_eq!(absorb("Mr.", '.'), "Mr.");
        assert_eq!(absorb("the list,", '.'), "the list.");
        assert_eq!(absorb("really?", '.'), "really?");
        assert_eq!(absorb("wait;", '!'), "wait!");
        assert_eq!(absorb("", '.'), ".");
    }

    #[test]
    fn conjoined_lists() {
        let s = |v: &[&str]| v.iter().map(|x| x.to_string()).collect::<Vec<_>>();
        assert_eq!(conjoin(&s(&[]), "and"), "");
        assert_eq!(conjoin(&s(&["pears"]), "and"), "pears");
        assert_eq!(conjoin(&s(&["pears", "apples"]), "and"), "pears and apples");
        assert_eq!(
            conjoin(&s(&["pears", "apples", "oranges"]), "and"),
            "pears, apples and oranges"
        );
        assert_eq!(conjoin(&s(&["tea", "", "coffee"]), "or"), "tea or coffee");
    }

    #[test]
    fn semicolons_when_items_have_commas() {
        let items: Vec<String> = ["Paris, France", "Rome, Italy", "Bern"]
            .iter()
            .map(|x| x.to_string())
            .collect();
        assert_eq!(
            conjoin(&items, "and"),
            "Paris, France; Rome, Italy and Bern"
        );
    }

    #[test]
    fn pouring() {
        let text = "the quick brown fox jumps over the lazy dog";
        assert_eq!(pour(text, 15), "the quick brown\nfox jumps over\nthe lazy dog");
        assert_eq!(pour(text, 0), text);
        assert_eq!(pour("supercalifragilistic is long", 5), "supercalifragilistic\nis\nlong");
    }

    #[test]
    fn html_escaping() {
        assert_eq!(escape_html("a < b & \"c\""), "a &lt; b &amp; &quot;c&quot;");
    }

    #[test]
    fn clitics() {
        assert_eq!(add_clitic("the boy", false), "the boy's");
        assert_eq!(add_clitic("the boys", true), "the boys'");
        assert_eq!(add_clitic("the children", true), "the children's");
        assert_eq!(add_clitic("James", false), "James's");
    }
}
