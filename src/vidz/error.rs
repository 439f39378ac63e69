use thiserror::Error;

#[derive(Error, Debug)]
pub enum VidzError {
    #[error("Catalog error on line {line}: {reason}")]
    Catalog { line: usize, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, VidzError>;
