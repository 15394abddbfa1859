// src/source/gitlab.rs

use super::TimelogSource;
use super::wire::GraphQlResponse;
use crate::errors::{AppError, AppResult};
use crate::models::TimelogPage;
use reqwest::blocking::Client;
use serde_json::json;
use std::time::Duration;
use tracing::{debug, error};

pub const DEFAULT_API_URL: &str = "https://gitlab.fhnw.ch/api/graphql";

/// Group timelogs, one page (at most 100 nodes) per call.
pub const TIMELOG_QUERY: &str = r#"
query ($team: ID!, $cursor: String!) {
  group(fullPath: $team) {
    timelogs(after: $cursor) {
      nodes {
        issue {
          title
          labels {
            nodes {
              title
            }
          }
        }
        user {
          username
        }
        spentAt
        timeSpent
      }
      pageInfo {
        endCursor
        hasNextPage
      }
    }
  }
}
"#;

/// Blocking GraphQL client for the GitLab timelog API.
pub struct GitlabClient {
    client: Client,
    url: String,
    token: String,
}

impl GitlabClient {
    pub fn new(url: &str, token: &str, timeout: Duration) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("timereport/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::SourceUnavailable(format!("cannot build HTTP client: {e}")))?;

        Ok(Self {
            client,
            url: url.to_string(),
            token: token.to_string(),
        })
    }
}

impl TimelogSource for GitlabClient {
    fn fetch_page(&self, namespace: &str, cursor: &str) -> AppResult<TimelogPage> {
        let payload = json!({
            "query": TIMELOG_QUERY,
            "variables": { "team": namespace, "cursor": cursor },
        });

        debug!(url = %self.url, namespace, cursor, "POST timelog query");

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.token)
            .json(&payload)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            error!(%status, "timelog query rejected");
            return Err(AppError::SourceUnavailable(format!(
                "unexpected status code returned: {status}"
            )));
        }

        let body = response.text()?;
        parse_response(&body, namespace)
    }
}

/// Decode a GraphQL response body into a timelog page.
pub fn parse_response(body: &str, namespace: &str) -> AppResult<TimelogPage> {
    let response: GraphQlResponse = serde_json::from_str(body).map_err(|e| {
        let preview: String = body.chars().take(200).collect();
        debug!(%preview, "undecodable timelog response");
        AppError::SourceDataError(format!("cannot parse timelog response: {e}"))
    })?;

    response.into_page(namespace)
}
