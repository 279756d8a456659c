use thiserror::Error;

use crate::state::DbError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Db(#[from] DbError),
    #[error("Console IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Input closed before the session ended")]
    InputClosed,
}

pub type AppResult<T> = Result<T, AppError>;
