use thiserror::Error;

#[derive(Debug, Error)]
pub enum DiaryError {
    #[error("io failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not serialize entries: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("malformed entry date {date:?}: {source}")]
    DateParse {
        date: String,
        source: chrono::ParseError,
    },
    #[error("invalid image filename {0:?}")]
    InvalidFilename(String),
}

pub type DiaryResult<T> = Result<T, DiaryError>;
