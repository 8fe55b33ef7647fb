use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cannot read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not valid UTF-8", .path.display())]
    Encoding { path: PathBuf },

    /// A dictionary line that is not exactly `<word> <transcription>`.
    #[error("{}:{line_no}: malformed dictionary entry {line:?} (expected \"<word> <transcription>\")", .path.display())]
    MalformedEntry {
        path: PathBuf,
        line_no: usize,
        line: String,
    },

    #[error("failed to write output: {0}")]
    Output(#[source] std::io::Error),
}
