use std::collections::HashMap;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, info};

use crate::error::{Error, Result};

/// `<word><single space><transcription>`, neither side empty or containing whitespace.
static ENTRY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\S+) (\S+)$").unwrap());

/// Pronunciation dictionary: word -> phonetic transcription.
///
/// Built once from a flat file and only read afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    entries: HashMap<String, String>,
}

impl Dictionary {
    /// Reads and parses a dictionary file.
    ///
    /// Any line that is not exactly two space-separated fields aborts the load
    /// with [`Error::MalformedEntry`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = crate::read_text(path)?;
        let dict = Self::parse(&text, path)?;

        info!(
            "Loaded {} dictionary entries from {}",
            dict.len(),
            path.display()
        );

        Ok(dict)
    }

    /// Parses dictionary text. `source` is only used in error reports.
    pub fn parse(text: &str, source: &Path) -> Result<Self> {
        let mut entries = HashMap::new();

        for (idx, raw) in text.lines().enumerate() {
            let caps = ENTRY_RE
                .captures(raw.trim_end())
                .ok_or_else(|| Error::MalformedEntry {
                    path: source.to_path_buf(),
                    line_no: idx + 1,
                    line: raw.to_string(),
                })?;

            let word = &caps[1];
            let transcription = &caps[2];

            // last write wins
            if let Some(previous) = entries.insert(word.to_string(), transcription.to_string()) {
                debug!(
                    word,
                    previous = %previous,
                    transcription,
                    line_no = idx + 1,
                    "duplicate dictionary entry overrides earlier one"
                );
            }
        }

        Ok(Dictionary { entries })
    }

    pub fn get(&self, word: &str) -> Option<&str> {
        self.entries.get(word).map(String::as_str)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<W, T> FromIterator<(W, T)> for Dictionary
where
    W: Into<String>,
    T: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (W, T)>>(iter: I) -> Self {
        Dictionary {
            entries: iter
                .into_iter()
                .map(|(w, t)| (w.into(), t.into()))
                .collect(),
        }
    }
}
