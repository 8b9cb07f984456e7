use folio_content::profile::Profile;
use folio_error::Result;

use crate::client::{decode_record, op_err, ApiClient};

/// Client for the remote `/profile` endpoints: a full-record GET/PUT
/// pair, no partial updates.
pub struct ProfileClient {
    api: ApiClient,
}

impl ProfileClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn fetch(&self) -> Result<Profile> {
        let url = self.api.endpoint("profile")?;
        let value = self
            .api
            .http()
            .get(url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|err| op_err("get-profile", err))?
            .json::<serde_json::Value>()
            .await
            .map_err(|err| op_err("get-profile", err))?;
        decode_record(value)
    }

    /// Replace the remote profile with `profile` wholesale.
    pub async fn push(&self, profile: &Profile) -> Result<()> {
        let url = self.api.endpoint("profile")?;
        self.api
            .http()
            .put(url)
            .json(profile)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|err| op_err("update-profile", err))?;
        Ok(())
    }
}
