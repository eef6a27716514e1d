use thiserror::Error;

#[derive(Error, Debug)]
pub enum GridError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("empty grid")]
    Empty,

    #[error("invalid field {field:?} at line {line}, column {column}")]
    Field {
        line: usize,
        column: usize,
        field: String,
    },

    #[error("ragged row at line {line}: expected {expected} fields, got {got}")]
    Ragged {
        line: usize,
        expected: usize,
        got: usize,
    },
}
