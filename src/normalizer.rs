//! Room name cleanup. Parenthetical spans are protected with positional
//! placeholders so bed-configuration details like "(2 Queen Beds)" survive
//! punctuation stripping, then restored verbatim at the end.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static PARENTHETICAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(([^)]*)\)").unwrap());
static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]").unwrap());
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static NUMBER_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(one|two|three|four|five|six|seven|eight|nine|ten)\b").unwrap());

pub fn normalize(raw: &str) -> String {
    let lowered = raw.to_lowercase();

    // Swap each parenthetical span for a placeholder before stripping.
    // Padding with spaces also separates "suite(king bed)" style names.
    let mut protected: Vec<String> = Vec::new();
    let masked = PARENTHETICAL
        .replace_all(&lowered, |caps: &Captures| {
            protected.push(caps[1].to_string());
            format!(" __paren{}__ ", protected.len() - 1)
        })
        .into_owned();

    let stripped = NON_WORD.replace_all(&masked, "");
    let numbered = NUMBER_WORD.replace_all(&stripped, |caps: &Captures| spelled_to_digit(&caps[1]));
    let collapsed = WHITESPACE.replace_all(numbered.trim(), " ").into_owned();

    restore_parentheticals(collapsed, &protected)
}

/// Extracts the content of every parenthetical span of an already-normalized
/// name. Used by the bed extractor, which treats parenthetical bed details
/// as authoritative.
pub fn parenthetical_spans(name: &str) -> Vec<String> {
    PARENTHETICAL
        .captures_iter(name)
        .map(|caps| caps[1].to_string())
        .collect()
}

fn spelled_to_digit(word: &str) -> String {
    let digit = match word {
        "one" => "1",
        "two" => "2",
        "three" => "3",
        "four" => "4",
        "five" => "5",
        "six" => "6",
        "seven" => "7",
        "eight" => "8",
        "nine" => "9",
        "ten" => "10",
        other => other,
    };
    digit.to_string()
}

fn restore_parentheticals(mut name: String, protected: &[String]) -> String {
    for (index, content) in protected.iter().enumerate() {
        let placeholder = format!("__paren{index}__");
        name = name.replace(&placeholder, &format!("({content})"));
    }
    name
}
