use std::io;

use thiserror::Error;

use crate::cli::ParseError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Terminal error: {0}")]
    Terminal(#[from] io::Error),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

pub type Result<T> = std::result::Result<T, Error>;
