use std::io;

use folio_error::FolioError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Couldn't retrieve home directory!")]
    HomeDirNotFound,

    #[error("Couldn't create data directory: {0}")]
    DataDirCreationError(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error(transparent)]
    IoError(#[from] io::Error),

    #[error(transparent)]
    FolioError(#[from] FolioError),
}
