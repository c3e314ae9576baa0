//! Repository, branch, commit, collaborator and contents endpoints

use super::models::{
    Branch, Collaborator, Commit, Contents, Contributor, FileCommit, Invitation, Languages,
    Repository,
};
use super::{repo_path, ApiRequest, GitHubClient};
use crate::error::Result;
use serde::Serialize;
use serde_json::Value;

/// Body of `POST /user/repos`
#[derive(Debug, Default, Serialize)]
pub struct CreateRepository {
    /// Repository name
    pub name: String,
    /// Short description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Create a private repository
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private: Option<bool>,
}

/// Body of `PATCH /repos/{owner}/{repo}`
#[derive(Debug, Default, Serialize)]
pub struct UpdateRepository {
    /// New name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Project homepage URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
    /// Change visibility
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private: Option<bool>,
    /// New default branch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_branch: Option<String>,
}

/// Body of `PUT /repos/{owner}/{repo}/contents/{path}`
#[derive(Debug, Default, Serialize)]
pub struct CreateOrUpdateFile {
    /// Commit message
    pub message: String,
    /// Base64 encoded file content
    pub content: String,
    /// Target branch; the default branch when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    /// Blob SHA of the file being replaced
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha: Option<String>,
}

#[derive(Serialize)]
struct Fork<'a> {
    organization: &'a str,
}

#[derive(Serialize)]
struct CollaboratorPermission<'a> {
    permission: &'a str,
}

impl GitHubClient {
    /// `GET /users/{user}/repos`
    pub async fn list_user_repositories(&self, user: &str) -> Result<Vec<Repository>> {
        self.fetch(ApiRequest::get(["users", user, "repos"])).await
    }

    /// `GET /user/repos`
    pub async fn list_my_repositories(&self) -> Result<Vec<Repository>> {
        self.fetch(ApiRequest::get(["user", "repos"])).await
    }

    /// `GET /repos/{owner}/{repo}`, returned verbatim
    pub async fn get_repository(&self, owner: &str, repo: &str) -> Result<Value> {
        self.send(ApiRequest::get(repo_path(owner, repo, &[]))).await
    }

    /// `POST /user/repos`
    pub async fn create_repository(&self, body: &CreateRepository) -> Result<Repository> {
        self.fetch(ApiRequest::post(["user", "repos"]).with_json(body)?)
            .await
    }

    /// `PATCH /repos/{owner}/{repo}`
    pub async fn update_repository(
        &self,
        owner: &str,
        repo: &str,
        body: &UpdateRepository,
    ) -> Result<Repository> {
        self.fetch(ApiRequest::patch(repo_path(owner, repo, &[])).with_json(body)?)
            .await
    }

    /// `DELETE /repos/{owner}/{repo}`
    pub async fn delete_repository(&self, owner: &str, repo: &str) -> Result<()> {
        self.execute(ApiRequest::delete(repo_path(owner, repo, &[])))
            .await
    }

    /// `POST /repos/{owner}/{repo}/forks`
    pub async fn fork_repository(
        &self,
        owner: &str,
        repo: &str,
        organization: Option<&str>,
    ) -> Result<Repository> {
        let mut request = ApiRequest::post(repo_path(owner, repo, &["forks"]));
        if let Some(organization) = organization {
            request = request.with_json(&Fork { organization })?;
        }
        self.fetch(request).await
    }

    /// `GET /repos/{owner}/{repo}/branches`
    pub async fn list_branches(&self, owner: &str, repo: &str) -> Result<Vec<Branch>> {
        self.fetch(ApiRequest::get(repo_path(owner, repo, &["branches"])))
            .await
    }

    /// `GET /repos/{owner}/{repo}/commits`
    pub async fn list_commits(
        &self,
        owner: &str,
        repo: &str,
        sha: Option<&str>,
        path: Option<&str>,
    ) -> Result<Vec<Commit>> {
        let request = ApiRequest::get(repo_path(owner, repo, &["commits"]))
            .with_optional_query("sha", sha)
            .with_optional_query("path", path);
        self.fetch(request).await
    }

    /// `GET /repos/{owner}/{repo}/languages`
    pub async fn list_languages(&self, owner: &str, repo: &str) -> Result<Languages> {
        self.fetch(ApiRequest::get(repo_path(owner, repo, &["languages"])))
            .await
    }

    /// `GET /repos/{owner}/{repo}/contributors`
    pub async fn list_contributors(&self, owner: &str, repo: &str) -> Result<Vec<Contributor>> {
        let value = self
            .send(ApiRequest::get(repo_path(owner, repo, &["contributors"])))
            .await?;
        // Repositories without history answer 204 with no body.
        if value.is_null() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_value(value)?)
    }

    /// `GET /repos/{owner}/{repo}/collaborators`
    pub async fn list_collaborators(&self, owner: &str, repo: &str) -> Result<Vec<Collaborator>> {
        self.fetch(ApiRequest::get(repo_path(owner, repo, &["collaborators"])))
            .await
    }

    /// `PUT /repos/{owner}/{repo}/collaborators/{username}`
    ///
    /// Returns the invitation, or `None` when the user already collaborates.
    pub async fn add_collaborator(
        &self,
        owner: &str,
        repo: &str,
        username: &str,
        permission: Option<&str>,
    ) -> Result<Option<Invitation>> {
        let mut request = ApiRequest::put(repo_path(owner, repo, &["collaborators", username]));
        if let Some(permission) = permission {
            request = request.with_json(&CollaboratorPermission { permission })?;
        }

        let value = self.send(request).await?;
        if value.is_null() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_value(value)?))
    }

    /// `DELETE /repos/{owner}/{repo}/collaborators/{username}`
    pub async fn remove_collaborator(&self, owner: &str, repo: &str, username: &str) -> Result<()> {
        self.execute(ApiRequest::delete(repo_path(
            owner,
            repo,
            &["collaborators", username],
        )))
        .await
    }

    /// `GET /repos/{owner}/{repo}/contents/{path}`
    pub async fn get_contents(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        git_ref: Option<&str>,
    ) -> Result<Contents> {
        let request = ApiRequest::get(repo_path(owner, repo, &["contents"]))
            .with_path(path)
            .with_optional_query("ref", git_ref);
        self.fetch(request).await
    }

    /// `PUT /repos/{owner}/{repo}/contents/{path}`
    pub async fn create_or_update_file(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        body: &CreateOrUpdateFile,
    ) -> Result<FileCommit> {
        let request = ApiRequest::put(repo_path(owner, repo, &["contents"]))
            .with_path(path)
            .with_json(body)?;
        self.fetch(request).await
    }
}

#[cfg(test)]
mod tests {
    use crate::github::mock::MockTransport;
    use crate::github::CreateRepository;
    use reqwest::Method;
    use serde_json::json;

    #[tokio::test]
    async fn test_create_repository_omits_absent_fields() {
        let transport = MockTransport::new();
        transport.respond_with(json!({"name": "demo", "html_url": "https://github.com/me/demo"}));

        let body = CreateRepository {
            name: "demo".to_string(),
            ..Default::default()
        };
        let repo = transport.client().create_repository(&body).await.unwrap();
        assert_eq!(repo.name, "demo");

        let request = transport.single_request();
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.path(), "/user/repos");
        assert_eq!(request.body, Some(json!({"name": "demo"})));
    }

    #[tokio::test]
    async fn test_get_contents_splits_path_and_adds_ref() {
        let transport = MockTransport::new();
        transport.respond_with(json!([]));

        transport
            .client()
            .get_contents("octo", "hello", "/src/lib.rs", Some("main"))
            .await
            .unwrap();

        let request = transport.single_request();
        assert_eq!(request.segments, vec!["repos", "octo", "hello", "contents", "src", "lib.rs"]);
        assert_eq!(request.query, vec![("ref".to_string(), "main".to_string())]);
    }

    #[tokio::test]
    async fn test_add_collaborator_existing_member_returns_none() {
        let transport = MockTransport::new();
        transport.respond_with(serde_json::Value::Null);

        let invitation = transport
            .client()
            .add_collaborator("octo", "hello", "mona", None)
            .await
            .unwrap();
        assert!(invitation.is_none());
        assert!(transport.single_request().body.is_none());
    }

    #[tokio::test]
    async fn test_list_contributors_empty_repository() {
        let transport = MockTransport::new();
        transport.respond_with(serde_json::Value::Null);

        let contributors = transport
            .client()
            .list_contributors("octo", "empty")
            .await
            .unwrap();
        assert!(contributors.is_empty());
    }
}
