//! REST client that creates the parsed issues, one by one.

use crate::parser::IssueSpec;
use std::time::Duration;
use wall_core::config::IssuesConfig;
use wall_core::{Result, WallError};

/// Outcome of a bulk-creation run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CreateSummary {
    pub created: usize,
    pub failed: usize,
}

#[derive(Debug)]
pub struct IssueClient {
    client: reqwest::Client,
    api_base: String,
    owner: String,
    repo: String,
    token: Option<String>,
    delay: Duration,
}

impl IssueClient {
    pub fn new(config: &IssuesConfig) -> Result<Self> {
        if config.owner.is_empty() || config.repo.is_empty() {
            return Err(WallError::Config(
                "issues.owner and issues.repo must be set".into(),
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("hackwall/0.1")
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()?;

        Ok(Self {
            client,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            owner: config.owner.clone(),
            repo: config.repo.clone(),
            token: config.resolve_token(),
            delay: Duration::from_millis(config.delay_ms),
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/repos/{}/{}/issues",
            self.api_base, self.owner, self.repo
        )
    }

    /// Create one issue. Returns its number.
    pub async fn create(&self, issue: &IssueSpec) -> Result<u64> {
        let mut request = self
            .client
            .post(self.endpoint())
            .header("Accept", "application/vnd.github+json")
            .json(&serde_json::json!({
                "title": issue.title,
                "body": issue.body,
                "labels": issue.labels,
            }));
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(WallError::IssueCreate {
                title: issue.title.clone(),
                message: format!("HTTP {}: {}", status.as_u16(), detail),
            });
        }

        let body: serde_json::Value = response.json().await?;
        Ok(body["number"].as_u64().unwrap_or(0))
    }

    /// Create every issue, pausing between calls so the API isn't
    /// hammered. A failed creation is logged and the run continues.
    pub async fn create_all(&self, issues: &[IssueSpec]) -> CreateSummary {
        let mut summary = CreateSummary::default();

        for (i, issue) in issues.iter().enumerate() {
            tracing::info!("Creating: {}", issue.title);
            match self.create(issue).await {
                Ok(number) => {
                    tracing::info!("Created #{} - {}", number, issue.title);
                    summary.created += 1;
                }
                Err(e) => {
                    tracing::error!("Failed to create '{}': {}", issue.title, e);
                    summary.failed += 1;
                }
            }

            if i + 1 < issues.len() {
                tokio::time::sleep(self.delay).await;
            }
        }

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> IssuesConfig {
        IssuesConfig {
            owner: "octocat".into(),
            repo: "wall".into(),
            ..IssuesConfig::default()
        }
    }

    #[test]
    fn test_new_requires_owner_and_repo() {
        let err = IssueClient::new(&IssuesConfig::default()).unwrap_err();
        assert!(matches!(err, WallError::Config(_)));
    }

    #[test]
    fn test_endpoint_shape() {
        let client = IssueClient::new(&config()).unwrap();
        assert_eq!(
            client.endpoint(),
            "https://api.github.com/repos/octocat/wall/issues"
        );
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let mut cfg = config();
        cfg.api_base = "https://git.example.com/api/v3/".into();
        let client = IssueClient::new(&cfg).unwrap();
        assert_eq!(
            client.endpoint(),
            "https://git.example.com/api/v3/repos/octocat/wall/issues"
        );
    }

    #[tokio::test]
    async fn test_create_all_empty_list() {
        let client = IssueClient::new(&config()).unwrap();
        let summary = client.create_all(&[]).await;
        assert_eq!(summary, CreateSummary::default());
    }
}
