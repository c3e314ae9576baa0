//! Response models for the GitHub REST API
//!
//! Only the fields the tools actually render are modelled. Everything else
//! in GitHub's payloads is ignored on deserialization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A GitHub account (user, bot or organization)
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct User {
    /// Account handle
    pub login: String,
    /// Display name, if public
    #[serde(default)]
    pub name: Option<String>,
    /// Public email, if any
    #[serde(default)]
    pub email: Option<String>,
    /// Profile page
    #[serde(default)]
    pub html_url: Option<String>,
}

/// A repository
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Repository {
    /// Repository name without owner
    pub name: String,
    /// `owner/name`
    #[serde(default)]
    pub full_name: String,
    /// Web page of the repository
    #[serde(default)]
    pub html_url: String,
    /// Short description
    #[serde(default)]
    pub description: Option<String>,
    /// Whether the repository is private
    #[serde(default)]
    pub private: bool,
}

/// A branch
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Branch {
    /// Branch name
    pub name: String,
}

/// A commit as returned by the commit listing
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Commit {
    /// Full commit SHA
    pub sha: String,
    /// Message and other git data
    pub commit: CommitDetail,
}

/// The git-level part of a commit
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct CommitDetail {
    /// Full commit message
    #[serde(default)]
    pub message: String,
}

/// A repository contributor
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Contributor {
    /// Missing for anonymous contributors
    #[serde(default)]
    pub login: Option<String>,
    /// Name recorded for anonymous contributors
    #[serde(default)]
    pub name: Option<String>,
    /// Number of commits
    #[serde(default)]
    pub contributions: u64,
}

/// Byte counts per language
pub type Languages = BTreeMap<String, u64>;

/// Permissions a collaborator holds on a repository
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
pub struct Permissions {
    /// Full administrative access
    #[serde(default)]
    pub admin: bool,
    /// Manage the repository without destructive actions
    #[serde(default)]
    pub maintain: bool,
    /// Write access
    #[serde(default)]
    pub push: bool,
    /// Manage issues and pull requests
    #[serde(default)]
    pub triage: bool,
    /// Read access
    #[serde(default)]
    pub pull: bool,
}

impl Permissions {
    /// The highest permission held
    pub fn highest(&self) -> &'static str {
        if self.admin {
            "admin"
        } else if self.maintain {
            "maintain"
        } else if self.push {
            "push"
        } else if self.triage {
            "triage"
        } else if self.pull {
            "pull"
        } else {
            "none"
        }
    }
}

/// A repository collaborator
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Collaborator {
    /// Account handle
    pub login: String,
    /// Role reported by GitHub, e.g. `write`
    #[serde(default)]
    pub role_name: Option<String>,
    /// Permission flags, used when no role is reported
    #[serde(default)]
    pub permissions: Option<Permissions>,
}

/// An invitation created when adding a collaborator
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Invitation {
    /// Invitation id
    pub id: u64,
    /// Permission offered
    #[serde(default)]
    pub permissions: Option<String>,
}

/// A file or directory entry from the contents API
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ContentEntry {
    /// `file`, `dir`, `symlink` or `submodule`
    #[serde(rename = "type")]
    pub kind: String,
    /// Entry name
    pub name: String,
    /// Path from the repository root
    pub path: String,
    /// Blob SHA, required when replacing the file
    #[serde(default)]
    pub sha: String,
    /// Size in bytes
    #[serde(default)]
    pub size: u64,
    /// Encoded file content; absent in directory listings
    #[serde(default)]
    pub content: Option<String>,
    /// Encoding of `content`, normally `base64`
    #[serde(default)]
    pub encoding: Option<String>,
    /// Web page of the entry
    #[serde(default)]
    pub html_url: Option<String>,
}

/// The contents API returns a single entry for files and a list for directories
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(untagged)]
pub enum Contents {
    /// Listing of a directory
    Directory(Vec<ContentEntry>),
    /// A single file, symlink or submodule
    File(Box<ContentEntry>),
}

/// Result of creating or updating a file
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct FileCommit {
    /// The file as written
    #[serde(default)]
    pub content: Option<ContentEntry>,
    /// Commit that wrote the file
    pub commit: CommitRef,
}

/// A bare commit reference
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct CommitRef {
    /// Commit SHA
    pub sha: String,
    /// Web page of the commit
    #[serde(default)]
    pub html_url: Option<String>,
}

/// A label
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Label {
    /// Label name
    pub name: String,
    /// Hex color without `#`
    #[serde(default)]
    pub color: String,
    /// Short description
    #[serde(default)]
    pub description: Option<String>,
}

/// An issue (pull requests also appear in issue listings)
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Issue {
    /// Issue number within the repository
    pub number: u64,
    /// Issue title
    pub title: String,
    /// `open` or `closed`
    #[serde(default)]
    pub state: String,
    /// Web page of the issue
    #[serde(default)]
    pub html_url: String,
    /// Markdown body
    #[serde(default)]
    pub body: Option<String>,
    /// Author
    #[serde(default)]
    pub user: Option<User>,
    /// Applied labels
    #[serde(default)]
    pub labels: Vec<Label>,
    /// Assigned users
    #[serde(default)]
    pub assignees: Vec<User>,
    /// Number of comments
    #[serde(default)]
    pub comments: u64,
    /// Creation time
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// A comment on an issue or pull request
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Comment {
    /// Comment id
    pub id: u64,
    /// Author
    #[serde(default)]
    pub user: Option<User>,
    /// Markdown body
    #[serde(default)]
    pub body: Option<String>,
    /// Web page of the comment
    #[serde(default)]
    pub html_url: String,
}

/// A milestone
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Milestone {
    /// Milestone number within the repository
    pub number: u64,
    /// Milestone title
    pub title: String,
    /// `open` or `closed`
    #[serde(default)]
    pub state: String,
    /// Web page of the milestone
    #[serde(default)]
    pub html_url: String,
    /// Open issues in the milestone
    #[serde(default)]
    pub open_issues: u64,
    /// Closed issues in the milestone
    #[serde(default)]
    pub closed_issues: u64,
    /// Due date
    #[serde(default)]
    pub due_on: Option<DateTime<Utc>>,
}

/// One side of a pull request
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct PullRequestRef {
    /// Branch name
    #[serde(rename = "ref")]
    pub ref_name: String,
    /// Tip commit SHA
    #[serde(default)]
    pub sha: String,
}

/// A pull request
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct PullRequest {
    /// Pull request number within the repository
    pub number: u64,
    /// Pull request title
    pub title: String,
    /// `open` or `closed`
    #[serde(default)]
    pub state: String,
    /// Web page of the pull request
    #[serde(default)]
    pub html_url: String,
    /// Markdown description
    #[serde(default)]
    pub body: Option<String>,
    /// Author
    #[serde(default)]
    pub user: Option<User>,
    /// Whether it is a draft
    #[serde(default)]
    pub draft: Option<bool>,
    /// Whether it has been merged
    #[serde(default)]
    pub merged: Option<bool>,
    /// Whether it merges cleanly; unknown while GitHub computes it
    #[serde(default)]
    pub mergeable: Option<bool>,
    /// Source branch
    #[serde(default)]
    pub head: Option<PullRequestRef>,
    /// Target branch
    #[serde(default)]
    pub base: Option<PullRequestRef>,
}

/// Outcome of a merge request
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct MergeResult {
    /// Whether the merge happened
    pub merged: bool,
    /// Message from GitHub describing the outcome
    #[serde(default)]
    pub message: String,
    /// SHA of the merge commit
    #[serde(default)]
    pub sha: Option<String>,
}

/// A file changed by a pull request
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct PullRequestFile {
    /// Path of the changed file
    pub filename: String,
    /// `added`, `modified`, `removed`, `renamed` and so on
    #[serde(default)]
    pub status: String,
    /// Lines added
    #[serde(default)]
    pub additions: u64,
    /// Lines removed
    #[serde(default)]
    pub deletions: u64,
}

/// A pull request review
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Review {
    /// Review id
    pub id: u64,
    /// Reviewer
    #[serde(default)]
    pub user: Option<User>,
    /// `APPROVED`, `CHANGES_REQUESTED`, `COMMENTED` or `PENDING`
    #[serde(default)]
    pub state: String,
    /// Review comment
    #[serde(default)]
    pub body: Option<String>,
    /// Web page of the review
    #[serde(default)]
    pub html_url: String,
}

/// A release
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Release {
    /// Release id
    pub id: u64,
    /// Tag the release points at
    pub tag_name: String,
    /// Release title
    #[serde(default)]
    pub name: Option<String>,
    /// Web page of the release
    #[serde(default)]
    pub html_url: String,
    /// Release notes
    #[serde(default)]
    pub body: Option<String>,
    /// Whether it is an unpublished draft
    #[serde(default)]
    pub draft: bool,
    /// Whether it is marked as a prerelease
    #[serde(default)]
    pub prerelease: bool,
    /// Account that created the release
    #[serde(default)]
    pub author: Option<User>,
    /// Publication time; absent for drafts
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
}

/// Delivery settings of a webhook
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
pub struct HookConfig {
    /// URL that receives the payloads
    #[serde(default)]
    pub url: Option<String>,
    /// `json` or `form`
    #[serde(default)]
    pub content_type: Option<String>,
}

/// A repository webhook
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Hook {
    /// Hook id
    pub id: u64,
    /// Always `web` for repository hooks
    #[serde(default)]
    pub name: String,
    /// Whether deliveries are sent
    #[serde(default)]
    pub active: bool,
    /// Events that trigger the hook
    #[serde(default)]
    pub events: Vec<String>,
    /// Delivery settings
    #[serde(default)]
    pub config: HookConfig,
}

/// What a notification thread is about
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct NotificationSubject {
    /// Title of the issue, pull request or release
    pub title: String,
    /// `Issue`, `PullRequest`, `Release` and so on
    #[serde(rename = "type", default)]
    pub kind: String,
}

/// Repository summary embedded in notifications and search results
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct RepositoryRef {
    /// `owner/name`
    pub full_name: String,
}

/// A notification thread
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Notification {
    /// Thread id
    pub id: String,
    /// Whether the thread is unread
    #[serde(default)]
    pub unread: bool,
    /// Why the user was notified, e.g. `mention`
    #[serde(default)]
    pub reason: String,
    /// What the thread is about
    pub subject: NotificationSubject,
    /// Repository the thread belongs to
    pub repository: RepositoryRef,
}

/// A GitHub Actions workflow
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Workflow {
    /// Workflow id
    pub id: u64,
    /// Workflow name
    pub name: String,
    /// Path of the workflow file
    #[serde(default)]
    pub path: String,
    /// `active`, `disabled_manually` and so on
    #[serde(default)]
    pub state: String,
}

/// Paged list of workflows
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct WorkflowList {
    /// Total number of workflows
    #[serde(default)]
    pub total_count: u64,
    /// Workflows on this page
    #[serde(default)]
    pub workflows: Vec<Workflow>,
}

/// A single run of a workflow
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct WorkflowRun {
    /// Run id
    pub id: u64,
    /// Workflow name at the time of the run
    #[serde(default)]
    pub name: Option<String>,
    /// Sequential run number of the workflow
    #[serde(default)]
    pub run_number: u64,
    /// `queued`, `in_progress`, `completed` and so on
    #[serde(default)]
    pub status: Option<String>,
    /// Outcome once completed, e.g. `success`
    #[serde(default)]
    pub conclusion: Option<String>,
    /// Branch the run was triggered for
    #[serde(default)]
    pub head_branch: Option<String>,
    /// Web page of the run
    #[serde(default)]
    pub html_url: String,
}

/// Paged list of workflow runs
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct WorkflowRunList {
    /// Total number of runs
    #[serde(default)]
    pub total_count: u64,
    /// Runs on this page
    #[serde(default)]
    pub workflow_runs: Vec<WorkflowRun>,
}

/// Envelope of every search endpoint
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct SearchResults<T> {
    /// Total number of matches
    #[serde(default)]
    pub total_count: u64,
    /// Whether the search timed out before finishing
    #[serde(default)]
    pub incomplete_results: bool,
    /// Matches on this page
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

/// An issue or pull request found by search
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct IssueSearchItem {
    /// Issue or pull request number
    pub number: u64,
    /// Title
    pub title: String,
    /// API URL of the repository
    #[serde(default)]
    pub repository_url: String,
    /// Web page of the issue
    #[serde(default)]
    pub html_url: String,
}

impl IssueSearchItem {
    /// `owner/repo` derived from the API repository URL
    pub fn repository_name(&self) -> String {
        let mut parts = self.repository_url.rsplit('/');
        match (parts.next(), parts.next()) {
            (Some(repo), Some(owner)) if !repo.is_empty() => format!("{owner}/{repo}"),
            _ => self.repository_url.clone(),
        }
    }
}

/// A code search hit
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct CodeSearchItem {
    /// File name
    pub name: String,
    /// Path from the repository root
    pub path: String,
    /// Repository containing the file
    pub repository: RepositoryRef,
    /// Web page of the file
    #[serde(default)]
    pub html_url: String,
}

/// Quota for one API resource
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct RateLimitBucket {
    /// Requests allowed per window
    pub limit: u64,
    /// Requests left in the current window
    pub remaining: u64,
    /// Requests made in the current window
    #[serde(default)]
    pub used: u64,
    /// Unix timestamp when the window resets
    pub reset: i64,
}

/// Response of the rate limit endpoint
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct RateLimit {
    /// Quota per resource, e.g. `core` or `search`
    pub resources: BTreeMap<String, RateLimitBucket>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_contents_untagged_file_and_directory() {
        let file: Contents = serde_json::from_value(json!({
            "type": "file", "name": "a.txt", "path": "a.txt", "content": "aGk=", "encoding": "base64"
        }))
        .unwrap();
        assert!(matches!(file, Contents::File(entry) if entry.name == "a.txt"));

        let dir: Contents = serde_json::from_value(json!([
            {"type": "dir", "name": "src", "path": "src"}
        ]))
        .unwrap();
        assert!(matches!(dir, Contents::Directory(entries) if entries.len() == 1));
    }

    #[test]
    fn test_issue_search_item_repository_name() {
        let item = IssueSearchItem {
            number: 7,
            title: "t".to_string(),
            repository_url: "https://api.github.com/repos/octo/hello".to_string(),
            html_url: String::new(),
        };
        assert_eq!(item.repository_name(), "octo/hello");
    }

    #[test]
    fn test_permissions_highest() {
        let permissions = Permissions {
            push: true,
            pull: true,
            ..Default::default()
        };
        assert_eq!(permissions.highest(), "push");
        assert_eq!(Permissions::default().highest(), "none");
    }

    #[test]
    fn test_minimal_issue_deserializes() {
        let issue: Issue = serde_json::from_value(json!({"number": 1, "title": "x"})).unwrap();
        assert_eq!(issue.number, 1);
        assert!(issue.labels.is_empty());
    }
}
