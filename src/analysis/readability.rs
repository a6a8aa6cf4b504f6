//! Flesch reading ease and basic text metrics

use unicode_segmentation::UnicodeSegmentation;

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

pub fn sentence_count(text: &str) -> usize {
    // unicode_sentences overflows on empty input
    if text.trim().is_empty() {
        return 0;
    }
    text.unicode_sentences()
        .filter(|s| !s.trim().is_empty())
        .count()
}

/// Flesch reading ease: 206.835 - 1.015 * (words/sentences)
/// - 84.6 * (syllables/words). Higher means easier to read.
/// Empty or whitespace-only text scores 0.
pub fn flesch_reading_ease(text: &str) -> f64 {
    let words: Vec<&str> = text.unicode_words().collect();
    let sentences = sentence_count(text);
    if words.is_empty() || sentences == 0 {
        return 0.0;
    }

    let syllables: usize = words.iter().map(|w| syllable_count(w)).sum();
    let words_per_sentence = words.len() as f64 / sentences as f64;
    let syllables_per_word = syllables as f64 / words.len() as f64;

    206.835 - 1.015 * words_per_sentence - 84.6 * syllables_per_word
}

/// Vowel-group heuristic: count vowel runs, discount a trailing silent 'e',
/// floor at one syllable per word.
fn syllable_count(word: &str) -> usize {
    let lower = word.to_lowercase();
    let chars: Vec<char> = lower.chars().collect();

    let mut count = 0;
    let mut prev_vowel = false;
    for &c in &chars {
        let vowel = matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
        if vowel && !prev_vowel {
            count += 1;
        }
        prev_vowel = vowel;
    }

    if count > 1 && lower.ends_with('e') && !lower.ends_with("le") {
        count -= 1;
    }

    count.max(1)
}
