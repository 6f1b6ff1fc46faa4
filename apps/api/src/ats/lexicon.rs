//! Stopword lexicon. Built once at startup, then shared read-only by every request.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

/// NLTK's English stopword list.
pub const ENGLISH_STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

/// Where the active stopword set was loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexiconSource {
    Builtin,
    File(PathBuf),
}

impl LexiconSource {
    pub fn label(&self) -> &'static str {
        match self {
            LexiconSource::Builtin => "builtin",
            LexiconSource::File(_) => "file",
        }
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            LexiconSource::Builtin => None,
            LexiconSource::File(path) => Some(path.as_path()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Lexicon {
    stopwords: HashSet<String>,
    source: LexiconSource,
}

impl Lexicon {
    pub fn builtin() -> Self {
        Self {
            stopwords: ENGLISH_STOPWORDS.iter().map(|w| w.to_string()).collect(),
            source: LexiconSource::Builtin,
        }
    }

    /// Startup initialization. A configured stopword file replaces the built-in list;
    /// if it cannot be read or holds no words, the failure is logged and the
    /// built-in list is used instead. Never fails.
    pub fn load(stopwords_path: Option<&Path>) -> Self {
        let Some(path) = stopwords_path else {
            let lexicon = Self::builtin();
            info!("Using built-in English stopwords ({} words)", lexicon.len());
            return lexicon;
        };

        match std::fs::read_to_string(path) {
            Ok(contents) => {
                let stopwords = parse_stopwords(&contents);
                if stopwords.is_empty() {
                    warn!(
                        "Stopword file {} contains no words; falling back to built-in list",
                        path.display()
                    );
                    return Self::builtin();
                }
                info!(
                    "Loaded {} stopwords from {}",
                    stopwords.len(),
                    path.display()
                );
                Self {
                    stopwords,
                    source: LexiconSource::File(path.to_path_buf()),
                }
            }
            Err(e) => {
                warn!(
                    "Error loading stopwords from {}: {e}; falling back to built-in list",
                    path.display()
                );
                Self::builtin()
            }
        }
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }

    pub fn source(&self) -> &LexiconSource {
        &self.source
    }
}

/// One word per line; blank lines and `#` comments are skipped.
fn parse_stopwords(contents: &str) -> HashSet<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_list_has_nltk_size() {
        let lexicon = Lexicon::builtin();
        assert_eq!(lexicon.len(), 179);
        assert!(!lexicon.is_empty());
        assert_eq!(lexicon.source(), &LexiconSource::Builtin);
    }

    #[test]
    fn test_builtin_contains_common_words() {
        let lexicon = Lexicon::builtin();
        for word in ["the", "and", "with", "for", "a", "not", "can"] {
            assert!(lexicon.is_stopword(word), "{word} should be a stopword");
        }
        assert!(!lexicon.is_stopword("python"));
    }

    #[test]
    fn test_load_without_path_is_builtin() {
        assert_eq!(Lexicon::load(None).source(), &LexiconSource::Builtin);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# custom list\nThe\n\n  and  \nsynergy").unwrap();

        let lexicon = Lexicon::load(Some(file.path()));
        assert_eq!(lexicon.len(), 3);
        assert!(lexicon.is_stopword("the"));
        assert!(lexicon.is_stopword("and"));
        assert!(lexicon.is_stopword("synergy"));
        assert!(!lexicon.is_stopword("with"));
        assert_eq!(
            lexicon.source(),
            &LexiconSource::File(file.path().to_path_buf())
        );
    }

    #[test]
    fn test_missing_file_falls_back_to_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let lexicon = Lexicon::load(Some(&dir.path().join("absent.txt")));
        assert_eq!(lexicon.source(), &LexiconSource::Builtin);
        assert_eq!(lexicon.len(), 179);
    }

    #[test]
    fn test_comment_only_file_falls_back_to_builtin() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# nothing here").unwrap();
        assert_eq!(
            Lexicon::load(Some(file.path())).source(),
            &LexiconSource::Builtin
        );
    }

    #[test]
    fn test_source_label_and_path() {
        let file = LexiconSource::File("/etc/stop.txt".into());
        assert_eq!(file.label(), "file");
        assert_eq!(file.path(), Some(Path::new("/etc/stop.txt")));
        assert_eq!(LexiconSource::Builtin.label(), "builtin");
        assert_eq!(LexiconSource::Builtin.path(), None);
    }
}
