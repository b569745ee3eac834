//! Errors that can reach `main`. Reading never fails (a broken input stream just ends the text),
//! so the only thing that can go wrong is writing the answer.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
  #[error("Failed to write the answer: {0}")]
  Output(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
