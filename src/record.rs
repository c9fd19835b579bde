/// Event records as they appear in a session transcript.
///
/// Records are produced upstream and are read-only here. The serialized
/// form uses `category`/`subkind`/`payload`/`timestamp`, and also accepts the
/// message-stream spelling (`type`/`say`/`text`/`ts`) so raw UI message logs
/// load without conversion.
use serde::{Deserialize, Serialize};

/// Top-level kind of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Informational message emitted by the assistant.
    #[serde(alias = "say")]
    Note,
    /// Message that waits on the user.
    #[serde(alias = "ask")]
    Prompt,
    #[serde(other)]
    Other,
}

/// Secondary discriminator. Only the two usage-carrying kinds are named;
/// everything else collapses into `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Subkind {
    #[serde(alias = "api_req_started")]
    RequestStarted,
    #[serde(alias = "deleted_api_reqs")]
    DeletedRequestsSummary,
    #[default]
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    #[serde(alias = "type")]
    pub category: Category,
    #[serde(default, alias = "say")]
    pub subkind: Subkind,
    #[serde(default, alias = "text", skip_serializing_if = "Option::is_none")]
    pub payload: Option<String>,
    /// Milliseconds since the epoch.
    #[serde(default, alias = "ts")]
    pub timestamp: u64,
}

impl EventRecord {
    pub fn new(category: Category, subkind: Subkind, payload: Option<&str>, timestamp: u64) -> Self {
        Self {
            category,
            subkind,
            payload: payload.map(str::to_string),
            timestamp,
        }
    }

    /// Shorthand for a `note` record carrying a payload.
    pub fn note(subkind: Subkind, payload: &str, timestamp: u64) -> Self {
        Self::new(Category::Note, subkind, Some(payload), timestamp)
    }

    /// The payload, if present and non-empty.
    pub fn payload(&self) -> Option<&str> {
        self.payload.as_deref().filter(|p| !p.is_empty())
    }

    /// True for records whose payload feeds the usage totals: a note that
    /// is either a request start or a summary of deleted requests.
    pub fn carries_usage(&self) -> bool {
        self.category == Category::Note
            && matches!(
                self.subkind,
                Subkind::RequestStarted | Subkind::DeletedRequestsSummary
            )
    }
}
