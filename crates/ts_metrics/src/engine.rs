use ts_core::TextMetrics;
use crate::lexicon::Lexicon;
use crate::tokenize;

/// Additive guard for the polarity and subjectivity ratios.
pub const EPSILON: f64 = 1e-5;

/// Fog index scaling factor.
const FOG_FACTOR: f64 = 0.4;

/// Words with more vowel letters than this count as complex.
const COMPLEX_VOWEL_THRESHOLD: usize = 2;

const PERSONAL_PRONOUNS: [&str; 6] = ["i", "we", "me", "us", "my", "our"];

/// Computes readability and sentiment metrics for article text.
///
/// The engine is a pure function of its input and its lexicon, so one
/// instance can be shared across concurrent workers.
#[derive(Debug, Clone, Default)]
pub struct MetricsEngine {
    lexicon: Lexicon,
}

impl MetricsEngine {
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn compute_metrics(&self, text: &str) -> TextMetrics {
        let sentence_count = tokenize::sentences(text).len();
        let cleaned_words: Vec<String> = tokenize::words(text)
            .into_iter()
            .filter(|w| tokenize::is_alphabetic_word(w))
            .map(|w| w.to_lowercase())
            .collect();
        let word_count = cleaned_words.len();

        let positive_score = cleaned_words
            .iter()
            .filter(|w| self.lexicon.is_positive(w))
            .count();
        let negative_score = cleaned_words
            .iter()
            .filter(|w| self.lexicon.is_negative(w))
            .count();

        let polarity_score = (positive_score as f64 - negative_score as f64)
            / ((positive_score + negative_score) as f64 + EPSILON);
        let subjectivity_score =
            (positive_score + negative_score) as f64 / (word_count as f64 + EPSILON);

        let avg_sentence_length = ratio_or_zero(word_count as f64, sentence_count);

        let vowel_counts: Vec<usize> = cleaned_words
            .iter()
            .map(|w| tokenize::vowel_count(w))
            .collect();
        let total_syllables: usize = vowel_counts.iter().sum();
        let syllable_per_word = ratio_or_zero(total_syllables as f64, word_count);

        let complex_word_count = vowel_counts
            .iter()
            .filter(|&&count| count > COMPLEX_VOWEL_THRESHOLD)
            .count();
        let percentage_complex_words =
            ratio_or_zero(complex_word_count as f64, word_count) * 100.0;
        let fog_index = FOG_FACTOR * (avg_sentence_length + percentage_complex_words);

        let total_chars: usize = cleaned_words.iter().map(|w| w.chars().count()).sum();
        let avg_word_length = ratio_or_zero(total_chars as f64, word_count);

        let personal_pronouns = cleaned_words
            .iter()
            .filter(|w| PERSONAL_PRONOUNS.contains(&w.as_str()))
            .count();

        TextMetrics {
            positive_score,
            negative_score,
            polarity_score,
            subjectivity_score,
            avg_sentence_length,
            percentage_complex_words,
            fog_index,
            complex_word_count,
            word_count,
            syllable_per_word,
            personal_pronouns,
            avg_word_length,
        }
    }
}

/// Division that yields exactly zero for an empty denominator.
fn ratio_or_zero(numerator: f64, denominator: usize) -> f64 {
    if denominator > 0 {
        numerator / denominator as f64
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_finite(m: &TextMetrics) -> bool {
        [
            m.polarity_score,
            m.subjectivity_score,
            m.avg_sentence_length,
            m.percentage_complex_words,
            m.fog_index,
            m.syllable_per_word,
            m.avg_word_length,
        ]
        .iter()
        .all(|v| v.is_finite())
    }

    #[test]
    fn test_repeated_positive_word() {
        let metrics = MetricsEngine::default().compute_metrics("Good good good.");
        assert_eq!(metrics.word_count, 3);
        assert_eq!(metrics.positive_score, 3);
        assert_eq!(metrics.negative_score, 0);
        assert_eq!(metrics.polarity_score, 3.0 / (3.0 + EPSILON));
        assert_eq!(metrics.subjectivity_score, 3.0 / (3.0 + EPSILON));
        assert_eq!(metrics.avg_sentence_length, 3.0);
        assert_eq!(metrics.complex_word_count, 0);
        assert_eq!(metrics.syllable_per_word, 2.0);
        assert_eq!(metrics.avg_word_length, 4.0);
        assert!(metrics.polarity_score > 0.9999 && metrics.polarity_score < 1.0);
    }

    #[test]
    fn test_empty_text() {
        let metrics = MetricsEngine::default().compute_metrics("");
        assert_eq!(metrics, TextMetrics::default());
        assert!(all_finite(&metrics));
    }

    #[test]
    fn test_text_without_words() {
        let metrics = MetricsEngine::default().compute_metrics("123 456... !!! 7.5%");
        assert_eq!(metrics.word_count, 0);
        assert_eq!(metrics.polarity_score, 0.0);
        assert_eq!(metrics.subjectivity_score, 0.0);
        assert_eq!(metrics.avg_sentence_length, 0.0);
        assert_eq!(metrics.syllable_per_word, 0.0);
        assert_eq!(metrics.percentage_complex_words, 0.0);
        assert_eq!(metrics.fog_index, 0.0);
        assert_eq!(metrics.avg_word_length, 0.0);
    }

    #[test]
    fn test_single_complex_word() {
        let metrics = MetricsEngine::default().compute_metrics("breakthrough");
        assert_eq!(metrics.word_count, 1);
        assert_eq!(metrics.complex_word_count, 1);
        assert_eq!(metrics.percentage_complex_words, 100.0);
        assert_eq!(metrics.syllable_per_word, 4.0);
        assert_eq!(metrics.avg_word_length, 12.0);
        assert_eq!(metrics.fog_index, 0.4 * (1.0 + 100.0));
    }

    #[test]
    fn test_mixed_sentiment_and_pronouns() {
        let text = "I think our results are good. We were wrong before, but my team is excellent!";
        let metrics = MetricsEngine::default().compute_metrics(text);
        assert_eq!(metrics.word_count, 15);
        assert_eq!(metrics.positive_score, 2);
        assert_eq!(metrics.negative_score, 1);
        assert_eq!(metrics.personal_pronouns, 4);
        assert_eq!(metrics.avg_sentence_length, 7.5);
        assert_eq!(metrics.polarity_score, 1.0 / (3.0 + EPSILON));
    }

    #[test]
    fn test_contractions_and_numbers_are_not_words() {
        let metrics = MetricsEngine::default().compute_metrics("I don't own 3 cars.");
        // i, do, own, cars
        assert_eq!(metrics.word_count, 4);
        assert_eq!(metrics.personal_pronouns, 1);
    }

    #[test]
    fn test_abbreviations_do_not_split_sentences() {
        let engine = MetricsEngine::default();

        let metrics = engine.compute_metrics("Mr. Smith went to Washington. He liked it.");
        assert_eq!(metrics.word_count, 7);
        assert_eq!(metrics.avg_sentence_length, 3.5);

        let metrics = engine.compute_metrics("The U.S. Army said so. Dr. Jones agreed.");
        assert_eq!(metrics.word_count, 6);
        assert_eq!(metrics.avg_sentence_length, 3.0);
    }

    #[test]
    fn test_wrapped_lines_form_one_sentence() {
        let metrics =
            MetricsEngine::default().compute_metrics("This report was written\nacross two lines.");
        assert_eq!(metrics.word_count, 7);
        assert_eq!(metrics.avg_sentence_length, 7.0);
    }

    #[test]
    fn test_fused_forms_count_as_two_words() {
        let metrics = MetricsEngine::default().compute_metrics("I cannot go.");
        assert_eq!(metrics.word_count, 4);
        assert_eq!(metrics.personal_pronouns, 1);
    }

    #[test]
    fn test_pronouns_case_insensitive() {
        let metrics = MetricsEngine::default().compute_metrics("WE told Me about US and My plans.");
        assert_eq!(metrics.personal_pronouns, 4);
    }

    #[test]
    fn test_bounds_hold() {
        let engine = MetricsEngine::default();
        let texts = [
            "",
            "a",
            "Extraordinary circumstances necessitate unprecedented measures.",
            "The cat sat. The dog ran. Everybody was quite astonished by the commotion!",
            "¡Qué día tan bueno! Ça va? Straße und Fluß.",
        ];
        for text in texts {
            let m = engine.compute_metrics(text);
            assert!(m.complex_word_count <= m.word_count, "{}", text);
            assert!((0.0..=100.0).contains(&m.percentage_complex_words), "{}", text);
            assert!(all_finite(&m), "{}", text);
        }
    }

    #[test]
    fn test_idempotent() {
        let engine = MetricsEngine::default();
        let text = "Markets had a great week, though analysts were wrong about bonds.";
        assert_eq!(engine.compute_metrics(text), engine.compute_metrics(text));
    }

    #[test]
    fn test_adding_positive_word_is_monotonic() {
        let engine = MetricsEngine::default();
        let before = engine.compute_metrics("The outcome was good but the process was bad.");
        let after = engine.compute_metrics("The outcome was good but the process was bad. good");
        assert_eq!(after.positive_score, before.positive_score + 1);
        assert_eq!(after.negative_score, before.negative_score);
        assert!(after.polarity_score >= before.polarity_score);
    }

    #[test]
    fn test_custom_lexicon() {
        let lexicon = Lexicon::new(["bullish"], ["bearish"]).unwrap();
        let engine = MetricsEngine::new(lexicon);
        let metrics = engine.compute_metrics("Traders stayed bullish, not bearish. Good.");
        assert_eq!(metrics.positive_score, 1);
        assert_eq!(metrics.negative_score, 1);
        assert_eq!(metrics.polarity_score, 0.0);
    }
}
