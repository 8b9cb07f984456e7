use std::path::Path;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde::de::DeserializeOwned;
use url::Url;

use folio_error::{FolioError, Result};

/// API base used when `FOLIO_API_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/api/v1";

/// File under the data root holding the bearer token.
pub const TOKEN_FILE: &str = "token";

/// Shared HTTP plumbing: base URL plus the bearer token attached as a
/// default header to every request.
pub struct ApiClient {
    http: reqwest::Client,
    base: Url,
}

impl ApiClient {
    pub fn new(base: &str, token: Option<&str>) -> Result<Self> {
        let base = Url::parse(base)?;
        let mut headers = HeaderMap::new();
        if let Some(token) = token {
            let value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|err| FolioError::Other(err.to_string()))?;
            headers.insert(AUTHORIZATION, value);
        }
        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;
        Ok(Self { http, base })
    }

    /// Read the bearer token from `<root>/token`, falling back to the
    /// `FOLIO_TOKEN` environment variable. `None` means unauthenticated.
    pub fn load_token(root: &Path) -> Option<String> {
        if let Ok(raw) = std::fs::read_to_string(root.join(TOKEN_FILE)) {
            let token = raw.trim().to_owned();
            if !token.is_empty() {
                return Some(token);
            }
        }
        std::env::var("FOLIO_TOKEN")
            .ok()
            .filter(|token| !token.is_empty())
    }

    pub(crate) fn endpoint(&self, path: &str) -> Result<Url> {
        let joined = format!(
            "{}/{}",
            self.base.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        Ok(Url::parse(&joined)?)
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }
}

/// Log and wrap a failed remote operation under its name. Errors are
/// terminal for the in-flight action; nothing is retried.
pub(crate) fn op_err(
    operation: &str,
    err: impl std::fmt::Display,
) -> FolioError {
    log::error!("remote operation `{}` failed: {}", operation, err);
    FolioError::Network(operation.to_owned(), err.to_string())
}

/// Decode a response body that is either the record itself or an
/// envelope with the record under `data`.
pub(crate) fn decode_record<T: DeserializeOwned>(
    value: serde_json::Value,
) -> Result<T> {
    // Prefer the envelope payload: lenient records with defaulted fields
    // would otherwise "decode" from the envelope object itself.
    if let Some(inner) = value.get("data") {
        if let Ok(record) = serde_json::from_value(inner.clone()) {
            return Ok(record);
        }
    }
    Ok(serde_json::from_value(value)?)
}

/// Same envelope handling for list responses.
pub(crate) fn decode_list<T: DeserializeOwned>(
    value: serde_json::Value,
) -> Result<Vec<T>> {
    match value {
        serde_json::Value::Array(_) => Ok(serde_json::from_value(value)?),
        serde_json::Value::Object(ref map) => match map.get("data") {
            Some(inner) => Ok(serde_json::from_value(inner.clone())?),
            None => Err(FolioError::Parse),
        },
        _ => Err(FolioError::Parse),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempdir::TempDir;

    use super::{ApiClient, TOKEN_FILE};

    #[test]
    fn test_token_file_is_trimmed() {
        let temp_dir =
            TempDir::new("tmp").expect("Failed to create temporary directory");
        let mut file =
            std::fs::File::create(temp_dir.path().join(TOKEN_FILE)).unwrap();
        writeln!(file, "  secret-token  ").unwrap();

        assert_eq!(
            ApiClient::load_token(temp_dir.path()).as_deref(),
            Some("secret-token")
        );
    }

    #[test]
    fn test_endpoint_joins_without_doubled_slashes() {
        let client =
            ApiClient::new("http://localhost:3000/api/v1/", None).unwrap();
        let url = client.endpoint("/project/get-all-projects").unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:3000/api/v1/project/get-all-projects"
        );
    }

    #[test]
    fn test_bad_base_url_is_rejected() {
        assert!(ApiClient::new("not a url", None).is_err());
    }
}
