// ABOUTME: Text counting primitives for readability scoring.
// ABOUTME: Counts characters, letters, words, sentences, and syllables using US-English heuristics.

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches one sentence-like segment: a run of non-terminators followed by
/// any trailing terminator punctuation.
static SENTENCE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^.!?]+[.!?]*").unwrap());

/// Counts non-whitespace characters.
pub fn char_count(text: &str) -> usize {
    text.chars().filter(|c| !c.is_whitespace()).count()
}

/// Counts alphanumeric characters only (no spaces, no punctuation).
pub fn letter_count(text: &str) -> usize {
    text.chars().filter(|c| c.is_alphanumeric()).count()
}

/// Counts word tokens with punctuation excluded.
///
/// A token is a whitespace-separated run; it counts if anything
/// alphanumeric survives after stripping punctuation.
pub fn lexicon_count(text: &str) -> usize {
    words(text).count()
}

/// Iterates over cleaned word tokens: whitespace-split, with leading and
/// trailing punctuation trimmed. Empty tokens are dropped.
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
        .map(|t| t.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|t| !t.is_empty())
}

/// Counts sentences.
///
/// Text is segmented on `.`, `!`, and `?` runs; segments with fewer than
/// two alphanumeric characters are treated as stray punctuation and do not
/// count. Non-empty text always counts as at least one sentence.
pub fn sentence_count(text: &str) -> usize {
    if text.trim().is_empty() {
        return 0;
    }
    let count = SENTENCE_RE
        .find_iter(text)
        .filter(|m| m.as_str().chars().filter(|c| c.is_alphanumeric()).count() >= 2)
        .count();
    count.max(1)
}

/// Estimates syllables in a single word using a vowel-group heuristic.
///
/// Rules: each maximal run of vowels (a, e, i, o, u, y) is one syllable;
/// a trailing silent "e" is subtracted unless the word ends in a
/// consonant + "le" (as in "table"); every word has at least one syllable.
pub fn syllable_count(word: &str) -> usize {
    let w: String = word
        .chars()
        .filter(|c| c.is_alphabetic())
        .collect::<String>()
        .to_lowercase();
    if w.is_empty() {
        return 0;
    }

    let is_vowel = |c: char| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
    let chars: Vec<char> = w.chars().collect();

    let mut groups = 0;
    let mut prev_vowel = false;
    for &c in &chars {
        let v = is_vowel(c);
        if v && !prev_vowel {
            groups += 1;
        }
        prev_vowel = v;
    }

    // Silent final "e": "cake" is one syllable, but "table" keeps its
    // consonant-le syllable and "the" stays at one.
    if groups > 1 && chars.ends_with(&['e']) {
        let keeps_le = chars.len() >= 3
            && chars[chars.len() - 2] == 'l'
            && !is_vowel(chars[chars.len() - 3]);
        if !keeps_le {
            groups -= 1;
        }
    }

    groups.max(1)
}

/// Counts syllables across all words in the text.
pub fn total_syllables(text: &str) -> usize {
    words(text).map(syllable_count).sum()
}

/// Counts words with three or more syllables.
pub fn polysyllable_count(text: &str) -> usize {
    words(text).filter(|w| syllable_count(w) >= 3).count()
}
