use std::path::{Path, PathBuf};

use home::home_dir;

use folio_remote::client::DEFAULT_BASE_URL;
use folio_remote::ApiClient;
use folio_storage::file_port::FilePort;
use folio_storage::FOLIO_FOLDER;

use crate::error::AppError;

/// Resolve the data root: explicit override or `~/.folio`, created on
/// first use.
pub fn provide_root(root_dir: &Option<PathBuf>) -> Result<PathBuf, AppError> {
    let root = match root_dir {
        Some(path) => path.clone(),
        None => home_dir()
            .ok_or(AppError::HomeDirNotFound)?
            .join(FOLIO_FOLDER),
    };
    if !root.exists() {
        std::fs::create_dir_all(&root)
            .map_err(|err| AppError::DataDirCreationError(err.to_string()))?;
    }
    Ok(root)
}

pub fn provide_port(root: &Path) -> Result<FilePort, AppError> {
    Ok(FilePort::new("folio", root)?)
}

/// Remote API client: base URL from `FOLIO_API_URL`, bearer token from
/// the data root or `FOLIO_TOKEN`.
pub fn provide_api(root: &Path) -> Result<ApiClient, AppError> {
    let base = std::env::var("FOLIO_API_URL")
        .unwrap_or_else(|_| DEFAULT_BASE_URL.to_owned());
    let token = ApiClient::load_token(root);
    Ok(ApiClient::new(&base, token.as_deref())?)
}
