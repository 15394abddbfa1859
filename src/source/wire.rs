// GraphQL response shapes for the group timelog query.

use crate::errors::{AppError, AppResult};
use crate::models::{PageInfo, RawTimelogEntry, TimelogPage};
use chrono::{DateTime, FixedOffset};
use serde::Deserialize;
use tracing::warn;

#[derive(Debug, Deserialize)]
pub(crate) struct GraphQlResponse {
    pub data: Option<ResponseData>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GraphQlError {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ResponseData {
    pub group: Option<GroupNode>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GroupNode {
    pub timelogs: TimelogConnection,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TimelogConnection {
    #[serde(default)]
    pub nodes: Vec<TimelogNode>,
    pub page_info: WirePageInfo,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WirePageInfo {
    pub end_cursor: Option<String>,
    pub has_next_page: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TimelogNode {
    pub issue: Option<IssueNode>,
    pub user: UserNode,
    pub spent_at: DateTime<FixedOffset>,
    pub time_spent: i64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct IssueNode {
    pub title: String,
    pub labels: Option<LabelConnection>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LabelConnection {
    #[serde(default)]
    pub nodes: Vec<LabelNode>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LabelNode {
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UserNode {
    pub username: String,
}

impl From<TimelogNode> for RawTimelogEntry {
    fn from(node: TimelogNode) -> Self {
        let (issue, labels) = match node.issue {
            Some(issue) => {
                let labels: Vec<String> = issue
                    .labels
                    .map(|c| c.nodes.into_iter().map(|l| l.title).collect())
                    .unwrap_or_default();
                (issue.title, labels)
            }
            None => (String::new(), Vec::new()),
        };

        RawTimelogEntry {
            user: node.user.username,
            issue,
            labels,
            spent_at: node.spent_at,
            time_spent: node.time_spent,
        }
    }
}

impl GraphQlResponse {
    /// Unwrap the timelog page for `namespace`.
    ///
    /// A missing group means the namespace is unknown or not visible with the
    /// supplied token.
    pub fn into_page(self, namespace: &str) -> AppResult<TimelogPage> {
        let messages = self.error_messages();
        let group = self.data.and_then(|d| d.group);

        let Some(group) = group else {
            let detail = messages.map(|m| format!(" ({m})")).unwrap_or_default();
            return Err(AppError::SourceDataError(format!(
                "no result for group '{namespace}'{detail}"
            )));
        };

        // Partial results: keep the data, surface the errors.
        if let Some(messages) = messages {
            warn!(group = namespace, errors = %messages, "GraphQL response carried errors");
        }

        let connection = group.timelogs;

        Ok(TimelogPage {
            entries: connection.nodes.into_iter().map(RawTimelogEntry::from).collect(),
            page_info: PageInfo {
                end_cursor: connection.page_info.end_cursor,
                has_next_page: connection.page_info.has_next_page,
            },
        })
    }

    /// The `errors[].message` values joined with `"; "`, if any.
    fn error_messages(&self) -> Option<String> {
        if self.errors.is_empty() {
            return None;
        }
        let msgs: Vec<&str> = self.errors.iter().map(|e| e.message.as_str()).collect();
        Some(msgs.join("; "))
    }
}
