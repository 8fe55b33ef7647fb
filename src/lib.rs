use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;

use encoding_rs::UTF_8;
use tracing::{debug, info};

mod dictionary;
mod error;

pub use dictionary::Dictionary;
pub use error::{Error, Result};

/// Counters for one annotation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub lines_read: usize,
    pub lines_translated: usize,
    pub lines_dropped: usize,
}

pub struct Translator {
    dict: Dictionary,
}

impl Translator {
    pub fn new(dict: Dictionary) -> Self {
        Translator { dict }
    }

    pub fn load(dict_path: impl AsRef<Path>) -> Result<Self> {
        Ok(Translator::new(Dictionary::load(dict_path)?))
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dict
    }

    pub fn translate_line(&self, line: &str) -> Option<String> {
        translate_line(line, &self.dict)
    }

    /// Lazily yields the annotation of every fully translatable line of
    /// `text`, in order. Lines with an unknown word are skipped.
    pub fn translate_lines<'a>(
        &'a self,
        text: &'a str,
    ) -> impl Iterator<Item = String> + 'a {
        text.lines().filter_map(move |line| self.translate_line(line))
    }

    /// Annotates the input file and writes one line per success to `out`.
    ///
    /// The whole input is read before anything is written.
    pub fn annotate_file<W: Write>(
        &self,
        input_path: impl AsRef<Path>,
        out: &mut W,
    ) -> Result<RunStats> {
        let input_path = input_path.as_ref();
        let text = read_text(input_path)?;
        let stats = self.annotate(&text, out)?;

        info!(
            "Annotated {}: {} lines read, {} translated, {} dropped",
            input_path.display(),
            stats.lines_read,
            stats.lines_translated,
            stats.lines_dropped
        );

        Ok(stats)
    }

    pub fn annotate<W: Write>(&self, text: &str, out: &mut W) -> Result<RunStats> {
        let mut stats = RunStats::default();

        for line in text.lines() {
            stats.lines_read += 1;
            match self.translate_line(line) {
                Some(annotated) => {
                    writeln!(out, "{}", annotated).map_err(Error::Output)?;
                    stats.lines_translated += 1;
                }
                None => stats.lines_dropped += 1,
            }
        }

        out.flush().map_err(Error::Output)?;
        Ok(stats)
    }
}

/// Replaces every word of `line` with its transcription.
///
/// Returns `original<TAB>transcriptions` when every space-separated word is in
/// `dict`, `None` as soon as one is missing. Trailing whitespace is stripped
/// from the line before splitting and from the echoed original.
pub fn translate_line(line: &str, dict: &Dictionary) -> Option<String> {
    let line = line.trim_end();
    let mut out = String::with_capacity(line.len() * 2 + 1);
    out.push_str(line);
    out.push('\t');

    for (i, word) in line.split(' ').enumerate() {
        let Some(transcription) = dict.get(word) else {
            debug!(word, "dropping line with unknown word");
            return None;
        };
        if i > 0 {
            out.push(' ');
        }
        out.push_str(transcription);
    }

    let trimmed = out.trim_end().len();
    out.truncate(trimmed);
    Some(out)
}

/// Loads `dict_path` once and annotates `input_path` into `out`.
pub fn run<W: Write>(
    dict_path: impl AsRef<Path>,
    input_path: impl AsRef<Path>,
    out: &mut W,
) -> Result<RunStats> {
    Translator::load(dict_path)?.annotate_file(input_path, out)
}

/// Reads a whole file and decodes it as strict UTF-8.
pub fn read_text(path: &Path) -> Result<String> {
    let io_err = |source| Error::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(io_err)?;
    let mut reader = BufReader::new(file);
    let mut buffer = Vec::new();
    reader.read_to_end(&mut buffer).map_err(io_err)?;

    match UTF_8.decode_without_bom_handling_and_without_replacement(&buffer) {
        Some(text) => Ok(text.into_owned()),
        None => Err(Error::Encoding {
            path: path.to_path_buf(),
        }),
    }
}
