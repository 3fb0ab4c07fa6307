use std::io;

#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("expected {expected} header lines, but the file has only {found}")]
    MissingHeader { expected: usize, found: usize },
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
