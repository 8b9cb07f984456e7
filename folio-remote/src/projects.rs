use std::path::{Path, PathBuf};

use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};

use folio_error::{FolioError, Result};

use crate::client::{decode_list, decode_record, op_err, ApiClient};

/// A server-owned project record as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub github_link: String,
    #[serde(default)]
    pub live_link: String,
    #[serde(default)]
    pub cover_image: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub features: Vec<String>,
}

/// Draft for `create-project`: text fields plus local file attachments.
#[derive(Debug, Clone, Default)]
pub struct ProjectDraft {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub github_link: String,
    pub live_link: String,
    pub category: String,
    pub features: Vec<String>,
    pub cover_image: Option<PathBuf>,
    pub images: Vec<PathBuf>,
}

/// Partial update for `update-project/{id}`; `None` fields stay untouched
/// on the server.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technologies: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<String>>,
}

impl ProjectPatch {
    pub fn is_empty(&self) -> bool {
        serde_json::to_value(self)
            .map(|value| {
                value
                    .as_object()
                    .map(|map| map.is_empty())
                    .unwrap_or(true)
            })
            .unwrap_or(true)
    }
}

/// REST-backed variant of the collection CRUD cycle. The decoded list is
/// cached and invalidated by every mutation, so the next read reflects
/// the write; it is never patched locally on top of a failed call.
pub struct ProjectsClient {
    api: ApiClient,
    cached: Option<Vec<Project>>,
}

impl ProjectsClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api, cached: None }
    }

    /// Fetch the remote collection, served from cache until invalidated.
    pub async fn list(&mut self) -> Result<&[Project]> {
        if self.cached.is_none() {
            let url = self.api.endpoint("project/get-all-projects")?;
            let value = self
                .api
                .http()
                .get(url)
                .send()
                .await
                .and_then(|response| response.error_for_status())
                .map_err(|err| op_err("get-all-projects", err))?
                .json::<serde_json::Value>()
                .await
                .map_err(|err| op_err("get-all-projects", err))?;
            self.cached = Some(decode_list(value)?);
        }
        Ok(self.cached.as_deref().unwrap_or(&[]))
    }

    /// Create a project. Empty title or description is refused before any
    /// request is made.
    pub async fn create(&mut self, draft: ProjectDraft) -> Result<Project> {
        if draft.title.trim().is_empty()
            || draft.description.trim().is_empty()
        {
            return Err(FolioError::Validation(
                "title and description".to_owned(),
            ));
        }

        let form = build_form(&draft).await?;
        let url = self.api.endpoint("project/create-project")?;
        let value = self
            .api
            .http()
            .post(url)
            .multipart(form)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|err| op_err("create-project", err))?
            .json::<serde_json::Value>()
            .await
            .map_err(|err| op_err("create-project", err))?;

        self.cached = None;
        decode_record(value)
    }

    /// Send a partial patch; only the set fields change on the server.
    pub async fn update(
        &mut self,
        id: &str,
        patch: &ProjectPatch,
    ) -> Result<Project> {
        let url = self
            .api
            .endpoint(&format!("project/update-project/{}", id))?;
        let value = self
            .api
            .http()
            .patch(url)
            .json(patch)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|err| op_err("update-project", err))?
            .json::<serde_json::Value>()
            .await
            .map_err(|err| op_err("update-project", err))?;

        self.cached = None;
        decode_record(value)
    }

    /// Remove the project with `id`.
    pub async fn delete(&mut self, id: &str) -> Result<()> {
        let url = self
            .api
            .endpoint(&format!("project/delete-project/{}", id))?;
        self.api
            .http()
            .delete(url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|err| op_err("delete-project", err))?;

        self.cached = None;
        Ok(())
    }
}

async fn build_form(draft: &ProjectDraft) -> Result<Form> {
    let mut form = Form::new()
        .text("title", draft.title.clone())
        .text("subtitle", draft.subtitle.clone())
        .text("description", draft.description.clone())
        .text("githubLink", draft.github_link.clone())
        .text("liveLink", draft.live_link.clone())
        .text("category", draft.category.clone());

    for tech in &draft.technologies {
        form = form.text("technologies", tech.clone());
    }
    for feature in &draft.features {
        form = form.text("features", feature.clone());
    }

    if let Some(path) = &draft.cover_image {
        form = form.part("coverImage", file_part(path).await?);
    }
    for path in &draft.images {
        form = form.part("images", file_part(path).await?);
    }
    Ok(form)
}

async fn file_part(path: &Path) -> Result<Part> {
    let bytes = tokio::fs::read(path).await?;
    let mime = mime_guess::from_path(path).first_or_octet_stream();
    let name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("attachment")
        .to_owned();
    Part::bytes(bytes)
        .file_name(name)
        .mime_str(mime.as_ref())
        .map_err(|err| FolioError::Other(err.to_string()))
}

#[cfg(test)]
mod tests {
    use folio_error::FolioError;
    use serde_json::json;

    use crate::client::{decode_list, ApiClient};

    use super::{Project, ProjectDraft, ProjectPatch, ProjectsClient};

    fn client() -> ProjectsClient {
        // Unroutable base: any attempted request would fail loudly.
        let api = ApiClient::new("http://127.0.0.1:9/api/v1", None).unwrap();
        ProjectsClient::new(api)
    }

    #[tokio::test]
    async fn test_create_with_empty_title_is_refused_before_network() {
        let mut projects = client();
        let draft = ProjectDraft {
            description: "has a description".to_owned(),
            ..Default::default()
        };
        match projects.create(draft).await {
            Err(FolioError::Validation(_)) => {}
            other => panic!("expected validation refusal, got {:?}", other.map(|p| p.id)),
        }
    }

    #[tokio::test]
    async fn test_create_with_empty_description_is_refused_before_network() {
        let mut projects = client();
        let draft = ProjectDraft {
            title: "has a title".to_owned(),
            ..Default::default()
        };
        assert!(matches!(
            projects.create(draft).await,
            Err(FolioError::Validation(_))
        ));
    }

    #[test]
    fn test_patch_omits_unset_fields() {
        let patch = ProjectPatch {
            title: Some("New title".to_owned()),
            ..Default::default()
        };
        let value = serde_json::to_value(&patch).unwrap();
        let map = value.as_object().unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map["title"], "New title");
        assert!(!patch.is_empty());
    }

    #[test]
    fn test_empty_patch_is_detected() {
        assert!(ProjectPatch::default().is_empty());
    }

    #[test]
    fn test_list_decodes_bare_array_and_envelope() {
        let record = json!({
            "_id": "p1",
            "title": "Site",
            "description": "A site",
        });

        let bare: Vec<Project> =
            decode_list(json!([record.clone()])).unwrap();
        assert_eq!(bare[0].id, "p1");

        let envelope: Vec<Project> =
            decode_list(json!({ "data": [record] })).unwrap();
        assert_eq!(envelope[0].title, "Site");
        assert!(envelope[0].technologies.is_empty());
    }
}
