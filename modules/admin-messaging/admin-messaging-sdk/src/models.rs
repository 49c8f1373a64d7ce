use serde::{Deserialize, Serialize};

/// Body of `POST /api/admin/messages`.
///
/// Missing fields take their defaults; a missing subject is reported by
/// validation rather than by deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SendMessageRequest {
    pub subject: String,
    pub body_html: Option<String>,
    pub body_text: Option<String>,
    /// Specific users to address.
    pub user_ids: Vec<String>,
    /// Direct email addresses.
    pub emails: Vec<String>,
    /// Blind-copy addresses.
    pub bcc: Vec<String>,
    /// Broadcast to every user in the directory, replacing `user_ids`.
    pub all_users: bool,
    /// Optional topic label attached as message metadata.
    pub topic: Option<String>,
    /// Count recipients without delivering.
    pub dry_run: bool,
    pub max_recipients: Option<usize>,
}

/// A single resolved message address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recipient {
    User(String),
    Email(String),
    Bcc(String),
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_false(b: &bool) -> bool {
    !*b
}

/// Result of a send, as returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendOutcome {
    pub success: bool,
    /// Backend message id; absent for dry runs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Number of recipients, blind copies included.
    pub recipients: usize,
    #[serde(default, skip_serializing_if = "is_false")]
    pub dry_run: bool,
}

impl SendOutcome {
    #[must_use]
    pub fn sent(id: Option<String>, recipients: usize) -> Self {
        Self {
            success: true,
            id,
            recipients,
            dry_run: false,
        }
    }

    #[must_use]
    pub fn dry_run(recipients: usize) -> Self {
        Self {
            success: true,
            id: None,
            recipients,
            dry_run: true,
        }
    }
}
