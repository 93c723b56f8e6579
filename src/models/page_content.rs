use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Editable copy for a marketing page, keyed by its slug.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PageContent {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub page: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub content: String,
    pub background_url: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}
