//! Contact message record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{Email, MessageId};

/// A message submitted through the public contact form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: MessageId,
    pub created_at: DateTime<Utc>,
    pub name: String,
    pub email: Email,
    pub message: String,
}

impl ContactMessage {
    /// Maximum stored length of the sender name.
    pub const MAX_NAME: usize = 120;

    /// Maximum stored length of the message body.
    pub const MAX_MESSAGE: usize = 2000;
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_shape() {
        let msg = ContactMessage {
            id: MessageId::new("msg_1"),
            created_at: "2026-01-05T10:00:00Z".parse().unwrap(),
            name: "Amal".to_owned(),
            email: Email::parse("amal@example.com").unwrap(),
            message: "Do you deliver to Jounieh?".to_owned(),
        };
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["createdAt"], "2026-01-05T10:00:00Z");
        assert_eq!(json["email"], "amal@example.com");
    }
}
