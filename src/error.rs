
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PayrollError {
    #[error("I/O error: {0}")]
    Io(String),
    #[error("unexpected end of input")]
    EndOfInput,
}

pub type Result<T> = std::result::Result<T, PayrollError>;

// Helper conversions
impl From<std::io::Error> for PayrollError {
    fn from(e: std::io::Error) -> Self { Self::Io(e.to_string()) }
}
