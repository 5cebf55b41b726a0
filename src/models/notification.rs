use serde::{Deserialize, Serialize};

/// Represents a notification shown to the user
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// Unique identifier for the notification
    #[serde(rename = "_id")]
    pub id: String,
    /// Notification message text
    pub message: String,
    /// Timestamp when the notification was created
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_decodes_wire_shape() {
        let json = r#"{"_id": "notif-1", "message": "Your order is on its way", "createdAt": "2024-03-01T12:00:00Z"}"#;
        let notification: Notification = serde_json::from_str(json).unwrap();
        assert_eq!(notification.message, "Your order is on its way");
    }
}
