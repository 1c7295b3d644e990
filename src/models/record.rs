use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Tracking information of a single visit.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub timestamp: DateTime<Utc>,
    pub url: String, // Path and query string as received
    pub user: String,
    pub ip: String,         // Empty when the client address could not be resolved
    pub user_agent: String, // Raw User-Agent header, possibly empty
}

impl Record {
    pub fn new(url: String, user: String, ip: String, user_agent: String) -> Self {
        Self {
            id: ObjectId::new(),
            timestamp: Utc::now(),
            url,
            user,
            ip,
            user_agent,
        }
    }
}
