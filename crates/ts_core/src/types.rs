use serde::{Deserialize, Serialize};

/// One row of the input sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlEntry {
    pub url_id: String,
    pub url: String,
}

impl UrlEntry {
    pub fn new(url_id: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            url_id: url_id.into(),
            url: url.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchedArticle {
    pub url: String,
    pub title: String,
    pub text: String,
}

/// The twelve numeric readability and sentiment fields computed for one article.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextMetrics {
    #[serde(rename = "Positive_score")]
    pub positive_score: usize,
    #[serde(rename = "Negative_score")]
    pub negative_score: usize,
    #[serde(rename = "Polarity_score")]
    pub polarity_score: f64,
    #[serde(rename = "Subjectivity_score")]
    pub subjectivity_score: f64,
    #[serde(rename = "Avg_sentence_length")]
    pub avg_sentence_length: f64,
    #[serde(rename = "Percentage_complex_words")]
    pub percentage_complex_words: f64,
    #[serde(rename = "Fog_index")]
    pub fog_index: f64,
    pub complex_word_count: usize,
    pub word_count: usize,
    #[serde(rename = "Syllable_per_word")]
    pub syllable_per_word: f64,
    #[serde(rename = "Personal_pronouns")]
    pub personal_pronouns: usize,
    #[serde(rename = "Avg_word_length")]
    pub avg_word_length: f64,
}

/// Report columns, in output order.
pub const REPORT_COLUMNS: [&str; 14] = [
    "URL_ID",
    "Title",
    "Positive_score",
    "Negative_score",
    "Polarity_score",
    "Subjectivity_score",
    "Avg_sentence_length",
    "Percentage_complex_words",
    "Fog_index",
    "complex_word_count",
    "word_count",
    "Syllable_per_word",
    "Personal_pronouns",
    "Avg_word_length",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsRecord {
    #[serde(rename = "URL_ID")]
    pub url_id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(flatten)]
    pub metrics: TextMetrics,
}

impl MetricsRecord {
    pub fn new(url_id: impl Into<String>, title: impl Into<String>, metrics: TextMetrics) -> Self {
        Self {
            url_id: url_id.into(),
            title: title.into(),
            metrics,
        }
    }

    /// Renders the record as a row matching [`REPORT_COLUMNS`].
    pub fn to_row(&self) -> Vec<String> {
        let m = &self.metrics;
        vec![
            self.url_id.clone(),
            self.title.clone(),
            m.positive_score.to_string(),
            m.negative_score.to_string(),
            m.polarity_score.to_string(),
            m.subjectivity_score.to_string(),
            m.avg_sentence_length.to_string(),
            m.percentage_complex_words.to_string(),
            m.fog_index.to_string(),
            m.complex_word_count.to_string(),
            m.word_count.to_string(),
            m.syllable_per_word.to_string(),
            m.personal_pronouns.to_string(),
            m.avg_word_length.to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_matches_columns() {
        let record = MetricsRecord::new("42", "A title", TextMetrics::default());
        let row = record.to_row();
        assert_eq!(row.len(), REPORT_COLUMNS.len());
        assert_eq!(row[0], "42");
        assert_eq!(row[1], "A title");
        assert_eq!(row[10], "0");
    }

    #[test]
    fn test_json_keys_follow_report_columns() {
        let record = MetricsRecord::new("7", "Title", TextMetrics::default());
        let value = serde_json::to_value(&record).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), REPORT_COLUMNS.len());
        for column in REPORT_COLUMNS {
            assert!(object.contains_key(column), "missing key {}", column);
        }
    }
}
