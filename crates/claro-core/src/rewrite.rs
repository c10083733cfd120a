//! "Easy read" sentence rewriting.
//!
//! A fixed, ordered table of case-insensitive substitutions is folded over
//! the input to produce a simplified variant; two further variants split
//! `, which` clauses and apply contractions. Candidates are deduplicated
//! case-insensitively and capped. Deterministic pure function, no state.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::defaults::REWRITE_MAX_CANDIDATES;
use crate::text::collapse_whitespace;

/// Ordered substitution table. The order is observable: an earlier rule may
/// rewrite a prefix a later rule would have matched ("assist" fires before
/// "assistance" can, leaving "helpance"), so entries must not be reordered.
static SIMPLIFICATIONS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        (r"utilise|utilize", "use"),
        (r"commence", "start"),
        (r"approximately", "about"),
        (r"assist", "help"),
        (r"inform", "tell"),
        (r"individuals?", "people"),
        (r"purchase", "buy"),
        (r"terminate", "end"),
        (r"prior to", "before"),
        (r"subsequent to", "after"),
        (r"requirement", "need"),
        (r"mandatory", "required"),
        (r"endeavour", "try"),
        (r"obtain", "get"),
        (r"attempt", "try"),
        (r"proceed", "go"),
        (r"assistance", "help"),
        (r"commencing", "starting"),
        (r"\bshall\b", "must"),
        (r"\bfailure to\b", "not"),
        (r"\butilisation\b", "use"),
    ]
    .into_iter()
    .map(|(pattern, replacement)| {
        let re = Regex::new(&format!("(?i){}", pattern)).expect("substitution pattern is valid");
        (re, replacement)
    })
    .collect()
});

static CLAUSE_SPLIT: Lazy<Regex> =
    Lazy::new(|| Regex::new("(?i), which").expect("clause pattern is valid"));

static THEY_ARE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bthey are\b").expect("contraction pattern is valid"));

static DOES_NOT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bdoes not\b").expect("contraction pattern is valid"));

/// Fold the substitution table over `sentence` and collapse whitespace.
fn simplify(sentence: &str) -> String {
    let result = SIMPLIFICATIONS
        .iter()
        .fold(sentence.to_string(), |acc, (pattern, replacement)| {
            pattern.replace_all(&acc, *replacement).into_owned()
        });
    collapse_whitespace(&result)
}

/// Append a parenthetical listing the keep terms not present in `text`
/// (case-insensitive substring match). Terms are trimmed before checking;
/// blank terms are ignored.
fn ensure_keep_terms(text: &str, keep_terms: &[String]) -> String {
    if keep_terms.is_empty() {
        return text.to_string();
    }

    let lower = text.to_lowercase();
    let missing: Vec<&str> = keep_terms
        .iter()
        .map(|term| term.trim())
        .filter(|term| !term.is_empty())
        .filter(|term| !lower.contains(&term.to_lowercase()))
        .collect();

    if missing.is_empty() {
        return text.to_string();
    }
    format!("{} ({} stay the same.)", text, missing.join(", "))
}

/// Insert keyed on the lowercased candidate. A repeated key replaces the
/// stored value but keeps its first-insertion position, so candidates that
/// differ only by case collapse to one and the last casing wins.
fn insert_candidate(candidates: &mut Vec<(String, String)>, value: String) {
    let key = value.to_lowercase();
    if let Some(entry) = candidates.iter_mut().find(|(k, _)| *k == key) {
        entry.1 = value;
    } else {
        candidates.push((key, value));
    }
}

/// Produce up to five distinct rewrite candidates for `sentence`.
///
/// Three variants are built: the simplified sentence, a "shorter" form
/// where `, which` clauses are split into new sentences before
/// simplification, and a "plain" form of the original with contractions
/// applied. Each gets the keep-term suffix independently, which can leave
/// near-duplicates differing only in the suffix; that is intentional.
/// Degenerate input that yields no candidates falls back to the original
/// sentence.
pub fn rewrite(sentence: &str, keep_terms: &[String]) -> Vec<String> {
    let keep_list: Vec<String> = keep_terms
        .iter()
        .filter(|term| !term.trim().is_empty())
        .cloned()
        .collect();

    let simplified = simplify(sentence);
    let shorter = simplify(&CLAUSE_SPLIT.replace_all(sentence, ". This"));
    let plain = {
        let collapsed = collapse_whitespace(sentence);
        let contracted = THEY_ARE.replace_all(&collapsed, "they're");
        DOES_NOT.replace_all(&contracted, "doesn't").into_owned()
    };

    let mut candidates: Vec<(String, String)> = Vec::new();
    for variant in [simplified, shorter, plain] {
        insert_candidate(&mut candidates, ensure_keep_terms(&variant, &keep_list));
    }

    if candidates.is_empty() {
        insert_candidate(&mut candidates, ensure_keep_terms(sentence, &keep_list));
    }

    candidates
        .into_iter()
        .map(|(_, value)| value)
        .take(REWRITE_MAX_CANDIDATES)
        .collect()
}
