//! Repository metadata payload.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// The fields of a `GET /repos/{owner}/{repo}` response that the scorer and
/// renderers consume. Every other field in the response is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RepositoryPayload {
    /// Repository name as reported by the API.
    pub name: String,

    /// Short description; `null` for repositories without one.
    #[serde(default)]
    pub description: Option<String>,

    /// Number of stars.
    pub stargazers_count: u64,

    /// Number of forks.
    pub forks_count: u64,

    /// Number of watchers.
    pub watchers_count: u64,

    /// Creation time.
    pub created_at: DateTime<Utc>,

    /// Last time the repository object changed.
    pub updated_at: DateTime<Utc>,

    /// Last push; `null` for repositories that were never pushed to.
    #[serde(default)]
    pub pushed_at: Option<DateTime<Utc>>,

    /// Topics in API order.
    #[serde(default)]
    pub topics: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignores_unknown_fields() {
        let json = r#"{
            "id": 1296269,
            "name": "Hello-World",
            "full_name": "octocat/Hello-World",
            "owner": { "login": "octocat" },
            "description": "This your first repo!",
            "forks_count": 9,
            "stargazers_count": 80,
            "watchers_count": 80,
            "topics": ["octocat", "atom", "electron", "api"],
            "pushed_at": "2011-01-26T19:06:43Z",
            "created_at": "2011-01-26T19:01:12Z",
            "updated_at": "2011-01-26T19:14:43Z",
            "permissions": { "admin": false, "push": false, "pull": true }
        }"#;

        let payload: RepositoryPayload = serde_json::from_str(json).unwrap();

        assert_eq!(payload.name, "Hello-World");
        assert_eq!(payload.description.as_deref(), Some("This your first repo!"));
        assert_eq!(payload.stargazers_count, 80);
        assert_eq!(payload.forks_count, 9);
        assert_eq!(payload.topics.unwrap().len(), 4);
        assert_eq!(payload.created_at.to_rfc3339(), "2011-01-26T19:01:12+00:00");
    }

    #[test]
    fn tolerates_null_and_missing_optionals() {
        let json = r#"{
            "name": "empty",
            "description": null,
            "forks_count": 0,
            "stargazers_count": 0,
            "watchers_count": 0,
            "pushed_at": null,
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-01T00:00:00Z"
        }"#;

        let payload: RepositoryPayload = serde_json::from_str(json).unwrap();

        assert!(payload.description.is_none());
        assert!(payload.pushed_at.is_none());
        assert!(payload.topics.is_none());
    }

    #[test]
    fn rejects_missing_counts() {
        let json = r#"{ "name": "broken", "created_at": "2024-01-01T00:00:00Z" }"#;
        assert!(serde_json::from_str::<RepositoryPayload>(json).is_err());
    }
}
