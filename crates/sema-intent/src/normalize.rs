//! Text normalization — lower-casing, trimming, and spelling correction.
//!
//! The correction table mirrors the cleanup applied when the classifier was
//! trained, so inference-time input lands in the same distribution. Each
//! entry is a whole-word, case-insensitive substitution; partial matches
//! inside longer words are left alone.

use std::sync::LazyLock;

use regex::RegexBuilder;

/// Known misspellings and their corrections, applied in order.
///
/// All patterns are disjoint words, so application order does not affect
/// the result.
const SPELLING_FIXES: &[(&str, &str)] = &[
    ("calender", "calendar"),
    ("calandar", "calendar"),
    ("tommorow", "tomorrow"),
    ("tommorrow", "tomorrow"),
    ("tomorow", "tomorrow"),
    ("tommorw", "tomorrow"),
    ("meating", "meeting"),
    ("meetting", "meeting"),
    ("shedule", "schedule"),
    ("schedual", "schedule"),
    ("alrm", "alarm"),
    ("alaram", "alarm"),
    ("massala", "masala"),
    ("panir", "paneer"),
];

static CORRECTIONS: LazyLock<Vec<(regex::Regex, &'static str)>> = LazyLock::new(|| {
    SPELLING_FIXES
        .iter()
        .map(|&(pattern, replacement)| {
            let re = RegexBuilder::new(&format!(r"\b{}\b", regex::escape(pattern)))
                .case_insensitive(true)
                .build()
                .expect("spelling patterns are static and valid");
            (re, replacement)
        })
        .collect()
});

/// Normalize raw input text: lower-case, trim surrounding whitespace, then
/// rewrite known misspellings as whole words.
///
/// Empty input yields empty output; there are no error conditions.
pub fn clean_text(input: &str) -> String {
    let mut cleaned = input.to_lowercase().trim().to_string();
    for (re, replacement) in CORRECTIONS.iter() {
        cleaned = re.replace_all(&cleaned, *replacement).into_owned();
    }
    cleaned
}
