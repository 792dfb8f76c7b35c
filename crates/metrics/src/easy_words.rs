// ABOUTME: Familiar-word list and difficult-word counting for the Dale-Chall formula.
// ABOUTME: Carries an abridged US-English Dale-Chall easy-word list keyed by lowercase form.

use std::collections::HashSet;

use once_cell::sync::Lazy;

use crate::counts::{syllable_count, words};

/// Abridged Dale-Chall familiar-word list (US English), lowercase.
/// Plural/inflected forms are matched by a simple suffix fallback in
/// `is_easy_word` rather than being listed individually.
static EASY_WORD_LIST: &[&str] = &[
    "a", "able", "about", "above", "across", "act", "add", "afraid", "after", "afternoon",
    "again", "against", "age", "ago", "air", "all", "almost", "alone", "along", "already",
    "also", "always", "am", "among", "an", "and", "angry", "animal", "another", "answer",
    "any", "anyone", "anything", "apple", "are", "arm", "around", "as", "ask", "asleep",
    "at", "ate", "away", "baby", "back", "bad", "ball", "be", "bean", "bear",
    "beat", "beautiful", "became", "because", "become", "bed", "been", "before", "began", "begin",
    "behind", "being", "believe", "bell", "belong", "below", "beside", "best", "better", "between",
    "big", "bird", "bit", "black", "blue", "boat", "body", "book", "both", "bottom",
    "box", "boy", "bread", "break", "bright", "bring", "brother", "brought", "brown", "build",
    "busy", "but", "buy", "by", "call", "came", "can", "car", "care", "carry",
    "case", "cat", "catch", "cause", "center", "certain", "chair", "chance", "change", "child",
    "children", "city", "class", "clean", "clear", "close", "cold", "color", "come", "cook",
    "cool", "corner", "could", "count", "country", "course", "cover", "cross", "cry", "cut",
    "dark", "day", "dead", "dear", "deep", "did", "die", "different", "dinner", "do",
    "does", "dog", "done", "door", "down", "draw", "dress", "drink", "drive", "drop",
    "dry", "during", "each", "ear", "early", "earth", "easy", "eat", "egg", "eight",
    "either", "else", "end", "enough", "even", "evening", "ever", "every", "everyone", "everything",
    "eye", "face", "fact", "fall", "family", "far", "farm", "fast", "father", "feel",
    "feet", "fell", "felt", "few", "field", "find", "fine", "finish", "fire", "first",
    "fish", "five", "floor", "fly", "follow", "food", "foot", "for", "found", "four",
    "free", "fresh", "friend", "from", "front", "full", "fun", "funny", "game", "garden",
    "gave", "get", "girl", "give", "glad", "glass", "go", "goes", "going", "gold",
    "gone", "good", "got", "grass", "gray", "great", "green", "grew", "ground", "grow",
    "had", "hair", "half", "hand", "happy", "hard", "has", "hat", "have", "he",
    "head", "hear", "heard", "heart", "heavy", "held", "hello", "help", "her", "here",
    "herself", "high", "hill", "him", "himself", "his", "hold", "home", "hope", "horse",
    "hot", "hour", "house", "how", "hundred", "hungry", "hurry", "hurt", "i", "ice",
    "if", "in", "inside", "into", "is", "it", "its", "just", "keep", "kept",
    "kind", "knew", "know", "land", "large", "last", "late", "laugh", "lay", "learn",
    "leave", "left", "leg", "let", "letter", "life", "light", "like", "line", "listen",
    "little", "live", "long", "look", "lost", "lot", "loud", "love", "low", "made",
    "make", "man", "many", "may", "me", "mean", "men", "met", "middle", "might",
    "mile", "milk", "mind", "mine", "minute", "miss", "money", "month", "moon", "more",
    "morning", "most", "mother", "mountain", "mouth", "move", "much", "music", "must", "my",
    "name", "near", "need", "never", "new", "next", "nice", "night", "nine", "no",
    "nobody", "noise", "none", "noon", "nor", "not", "nothing", "now", "number", "of",
    "off", "often", "old", "on", "once", "one", "only", "open", "or", "other",
    "our", "out", "outside", "over", "own", "page", "paper", "part", "party", "pass",
    "past", "pay", "people", "person", "pick", "picture", "piece", "place", "plain", "plan",
    "play", "please", "point", "poor", "pretty", "pull", "push", "put", "quick", "quiet",
    "quite", "rain", "ran", "reach", "read", "ready", "real", "red", "remember", "rest",
    "ride", "right", "ring", "river", "road", "rock", "room", "round", "run", "said",
    "same", "sat", "saw", "say", "school", "sea", "season", "seat", "second", "see",
    "seem", "seen", "send", "sent", "set", "seven", "several", "shall", "she", "ship",
    "short", "should", "show", "side", "sight", "simple", "since", "sing", "sister", "sit",
    "six", "sleep", "slow", "small", "smile", "snow", "so", "soft", "some", "someone",
    "something", "song", "soon", "sound", "speak", "spring", "stand", "start", "stay", "step",
    "still", "stood", "stop", "story", "street", "strong", "such", "summer", "sun", "sure",
    "table", "take", "talk", "tall", "teach", "teacher", "tell", "ten", "than", "thank",
    "that", "the", "their", "them", "then", "there", "these", "they", "thing", "think",
    "third", "this", "those", "though", "thought", "three", "through", "time", "to", "today",
    "together", "told", "too", "took", "top", "touch", "toward", "town", "tree", "tried",
    "true", "try", "turn", "two", "under", "until", "up", "upon", "us", "use",
    "very", "voice", "wait", "walk", "want", "warm", "was", "watch", "water", "way",
    "we", "wear", "week", "well", "went", "were", "wet", "what", "when", "where",
    "which", "while", "white", "who", "whole", "why", "wide", "will", "wind", "window",
    "winter", "wish", "with", "without", "woman", "women", "wonder", "word", "work", "world",
    "would", "write", "wrong", "year", "yellow", "yes", "yet", "you", "young", "your",
];

static EASY_WORDS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| EASY_WORD_LIST.iter().copied().collect());

/// Returns true if the word is on the familiar-word list.
/// Regular plurals and "-ed"/"-ing" inflections of listed words also match.
pub fn is_easy_word(word: &str) -> bool {
    let w = word.to_lowercase();
    if EASY_WORDS.contains(w.as_str()) {
        return true;
    }
    for suffix in ["s", "es", "ed", "ing"] {
        if let Some(stem) = w.strip_suffix(suffix) {
            if EASY_WORDS.contains(stem) {
                return true;
            }
        }
    }
    false
}

/// Counts difficult words: two or more syllables and not on the
/// familiar-word list.
pub fn difficult_word_count(text: &str) -> usize {
    words(text)
        .filter(|w| syllable_count(w) >= 2 && !is_easy_word(w))
        .count()
}
