use std::collections::HashSet;
use std::fs;
use std::path::Path;
use ts_core::{Error, Result};
use tracing::info;

const POSITIVE_WORDS: [&str; 7] = [
    "good",
    "great",
    "positive",
    "excellent",
    "fortunate",
    "correct",
    "superior",
];

const NEGATIVE_WORDS: [&str; 6] = [
    "bad",
    "poor",
    "negative",
    "wrong",
    "inferior",
    "unfortunate",
];

/// Positive and negative sentiment word sets.
///
/// Words are stored lowercase and the two sets never overlap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    positive: HashSet<String>,
    negative: HashSet<String>,
}

impl Lexicon {
    pub fn new<P, N, S, T>(positive: P, negative: N) -> Result<Self>
    where
        P: IntoIterator<Item = S>,
        N: IntoIterator<Item = T>,
        S: AsRef<str>,
        T: AsRef<str>,
    {
        let positive = normalize(positive);
        let negative = normalize(negative);

        let mut overlap: Vec<&String> = positive.intersection(&negative).collect();
        if !overlap.is_empty() {
            overlap.sort();
            return Err(Error::InvalidLexicon(format!(
                "words listed as both positive and negative: {}",
                overlap.iter().map(|w| w.as_str()).collect::<Vec<_>>().join(", ")
            )));
        }

        Ok(Self { positive, negative })
    }

    /// Loads one word per line from each file. Blank lines and `#` comments are skipped.
    pub fn from_files(positive_path: &Path, negative_path: &Path) -> Result<Self> {
        let positive = read_word_list(positive_path)?;
        let negative = read_word_list(negative_path)?;
        let lexicon = Self::new(positive, negative)?;
        info!(
            "📖 Loaded lexicon: {} positive, {} negative words",
            lexicon.positive.len(),
            lexicon.negative.len()
        );
        Ok(lexicon)
    }

    pub fn is_positive(&self, word: &str) -> bool {
        self.positive.contains(word)
    }

    pub fn is_negative(&self, word: &str) -> bool {
        self.negative.contains(word)
    }

    pub fn positive_len(&self) -> usize {
        self.positive.len()
    }

    pub fn negative_len(&self) -> usize {
        self.negative.len()
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            positive: normalize(POSITIVE_WORDS),
            negative: normalize(NEGATIVE_WORDS),
        }
    }
}

fn normalize<I, S>(words: I) -> HashSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    words
        .into_iter()
        .map(|w| w.as_ref().trim().to_lowercase())
        .filter(|w| !w.is_empty())
        .collect()
}

fn read_word_list(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|e| {
        Error::InvalidLexicon(format!("Failed to read {}: {}", path.display(), e))
    })?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_lexicon() {
        let lexicon = Lexicon::default();
        assert_eq!(lexicon.positive_len(), 7);
        assert_eq!(lexicon.negative_len(), 6);
        assert!(lexicon.is_positive("superior"));
        assert!(lexicon.is_negative("unfortunate"));
        assert!(!lexicon.is_positive("bad"));
    }

    #[test]
    fn test_new_normalizes_and_dedups() {
        let lexicon = Lexicon::new(["Happy", "happy ", ""], ["SAD"]).unwrap();
        assert_eq!(lexicon.positive_len(), 1);
        assert!(lexicon.is_positive("happy"));
        assert!(lexicon.is_negative("sad"));
    }

    #[test]
    fn test_new_rejects_overlap() {
        let err = Lexicon::new(["fine", "okay"], ["Fine"]).unwrap_err();
        assert!(matches!(err, Error::InvalidLexicon(msg) if msg.contains("fine")));
    }

    #[test]
    fn test_from_files() {
        let mut positive = NamedTempFile::new().unwrap();
        writeln!(positive, "# positive words\nbright\n\nsunny").unwrap();
        let mut negative = NamedTempFile::new().unwrap();
        writeln!(negative, "gloomy").unwrap();

        let lexicon = Lexicon::from_files(positive.path(), negative.path()).unwrap();
        assert_eq!(lexicon.positive_len(), 2);
        assert!(lexicon.is_positive("sunny"));
        assert!(lexicon.is_negative("gloomy"));
    }

    #[test]
    fn test_from_missing_file() {
        let negative = NamedTempFile::new().unwrap();
        let result = Lexicon::from_files(Path::new("/nonexistent/positive.txt"), negative.path());
        assert!(matches!(result, Err(Error::InvalidLexicon(_))));
    }
}
