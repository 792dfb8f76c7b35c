// ABOUTME: The standard readability formulas computed over a whole document.
// ABOUTME: Each formula returns a two-decimal result, with 0.0 as the degenerate-input sentinel.

use crate::counts::{
    char_count, letter_count, lexicon_count, polysyllable_count, sentence_count, syllable_count,
    total_syllables, words,
};
use crate::easy_words::difficult_word_count;

/// Rounds to two decimal places.
fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Average sentence length in words, or 0.0 for empty input.
fn avg_sentence_length(text: &str) -> f64 {
    let sentences = sentence_count(text);
    if sentences == 0 {
        return 0.0;
    }
    lexicon_count(text) as f64 / sentences as f64
}

/// Average syllables per word, or 0.0 for empty input.
fn avg_syllables_per_word(text: &str) -> f64 {
    let words = lexicon_count(text);
    if words == 0 {
        return 0.0;
    }
    total_syllables(text) as f64 / words as f64
}

/// Flesch Reading Ease: 206.835 - 1.015*ASL - 84.6*ASW.
/// Higher is easier; standard prose lands between 0 and 100.
pub fn flesch_reading_ease(text: &str) -> f64 {
    if lexicon_count(text) == 0 {
        return 0.0;
    }
    round2(206.835 - 1.015 * avg_sentence_length(text) - 84.6 * avg_syllables_per_word(text))
}

/// Flesch-Kincaid Grade Level: 0.39*ASL + 11.8*ASW - 15.59.
pub fn flesch_kincaid_grade(text: &str) -> f64 {
    if lexicon_count(text) == 0 {
        return 0.0;
    }
    round2(0.39 * avg_sentence_length(text) + 11.8 * avg_syllables_per_word(text) - 15.59)
}

/// Gunning Fog index: 0.4*(ASL + 100*polysyllables/words).
pub fn gunning_fog(text: &str) -> f64 {
    let words = lexicon_count(text);
    if words == 0 {
        return 0.0;
    }
    let pct_hard = 100.0 * polysyllable_count(text) as f64 / words as f64;
    round2(0.4 * (avg_sentence_length(text) + pct_hard))
}

/// SMOG index: 1.043*sqrt(polysyllables*30/sentences) + 3.1291.
/// The formula is only defined for 3+ sentences; shorter input yields 0.0.
pub fn smog_index(text: &str) -> f64 {
    let sentences = sentence_count(text);
    if sentences < 3 {
        return 0.0;
    }
    let poly = polysyllable_count(text) as f64;
    round2(1.043 * (poly * 30.0 / sentences as f64).sqrt() + 3.1291)
}

/// Automated Readability Index: 4.71*(chars/words) + 0.5*(words/sentences) - 21.43.
pub fn automated_readability_index(text: &str) -> f64 {
    let words = lexicon_count(text);
    let sentences = sentence_count(text);
    if words == 0 || sentences == 0 {
        return 0.0;
    }
    let chars_per_word = char_count(text) as f64 / words as f64;
    let words_per_sentence = words as f64 / sentences as f64;
    round2(4.71 * chars_per_word + 0.5 * words_per_sentence - 21.43)
}

/// Coleman-Liau index: 0.058*L - 0.296*S - 15.8, with L letters per
/// 100 words and S sentences per 100 words.
pub fn coleman_liau_index(text: &str) -> f64 {
    let words = lexicon_count(text);
    if words == 0 {
        return 0.0;
    }
    let l = letter_count(text) as f64 / words as f64 * 100.0;
    let s = sentence_count(text) as f64 / words as f64 * 100.0;
    round2(0.058 * l - 0.296 * s - 15.8)
}

/// Linsear Write formula, computed over the first 100 words.
///
/// Easy words (one or two syllables) score 1, hard words (three or more)
/// score 3; the sum is divided by the sentence count of the sample. A
/// provisional score of 20 or less is reduced by 2 before halving.
pub fn linsear_write_formula(text: &str) -> f64 {
    let sample: Vec<&str> = text.split_whitespace().take(100).collect();
    if sample.is_empty() {
        return 0.0;
    }
    let sample_text = sample.join(" ");
    if lexicon_count(&sample_text) == 0 {
        return 0.0;
    }

    let mut points = 0.0;
    for w in words(&sample_text) {
        if syllable_count(w) >= 3 {
            points += 3.0;
        } else {
            points += 1.0;
        }
    }

    let sentences = sentence_count(&sample_text);
    if sentences == 0 {
        return 0.0;
    }
    let mut score = points / sentences as f64;
    if score <= 20.0 {
        score -= 2.0;
    }
    round2(score / 2.0)
}

/// Dale-Chall readability score: 0.1579*(pct difficult) + 0.0496*ASL,
/// plus an adjustment of 3.6365 when difficult words exceed 5%.
pub fn dale_chall_readability_score(text: &str) -> f64 {
    let words = lexicon_count(text);
    if words == 0 {
        return 0.0;
    }
    let pct_difficult = 100.0 * difficult_word_count(text) as f64 / words as f64;
    let mut score = 0.1579 * pct_difficult + 0.0496 * avg_sentence_length(text);
    if pct_difficult > 5.0 {
        score += 3.6365;
    }
    round2(score)
}

/// Consensus grade level across all of the formulas above, as a number.
///
/// Each grade-level formula votes for the floor and ceiling of its
/// estimate; Flesch Reading Ease and Dale-Chall vote through their
/// published grade bands. The most common vote wins, lowest on ties.
pub fn text_standard(text: &str) -> f64 {
    if lexicon_count(text) == 0 {
        return 0.0;
    }

    let mut votes: Vec<i64> = Vec::new();
    let mut vote_range = |score: f64| {
        votes.push(score.floor() as i64);
        votes.push(score.ceil() as i64);
    };

    vote_range(flesch_kincaid_grade(text));
    vote_range(gunning_fog(text));
    let smog = smog_index(text);
    if smog > 0.0 {
        vote_range(smog);
    }
    vote_range(automated_readability_index(text));
    vote_range(coleman_liau_index(text));
    vote_range(linsear_write_formula(text));

    // Flesch Reading Ease bands map to grade levels.
    let fre = flesch_reading_ease(text);
    if fre >= 90.0 {
        votes.push(5);
    } else if fre >= 80.0 {
        votes.push(6);
    } else if fre >= 70.0 {
        votes.push(7);
    } else if fre >= 60.0 {
        votes.push(8);
        votes.push(9);
    } else if fre >= 50.0 {
        votes.push(10);
    } else if fre >= 40.0 {
        votes.push(11);
    } else if fre >= 30.0 {
        votes.push(12);
    } else {
        votes.push(13);
    }

    // Dale-Chall bands.
    let dc = dale_chall_readability_score(text);
    if dc <= 4.9 {
        votes.push(4);
    } else if dc <= 5.9 {
        votes.push(5);
        votes.push(6);
    } else if dc <= 6.9 {
        votes.push(7);
        votes.push(8);
    } else if dc <= 7.9 {
        votes.push(9);
        votes.push(10);
    } else if dc <= 8.9 {
        votes.push(11);
        votes.push(12);
    } else {
        votes.push(13);
    }

    // Mode; lowest grade wins ties.
    let mut best_grade = 0i64;
    let mut best_count = 0usize;
    let mut sorted = votes.clone();
    sorted.sort_unstable();
    sorted.dedup();
    for grade in sorted {
        let count = votes.iter().filter(|&&v| v == grade).count();
        if count > best_count {
            best_count = count;
            best_grade = grade;
        }
    }

    best_grade.max(0) as f64
}
