use admin_messaging_sdk::Recipient;

/// A validated message ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMessage {
    pub subject: String,
    /// HTML body if one was given, otherwise the text body.
    pub content: String,
    pub html: bool,
    pub recipients: Vec<Recipient>,
    pub topic: Option<String>,
}
