use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Contact form submission from the showroom app
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// A stored message, with the id and timestamp the database assigned
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredMessage {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}
