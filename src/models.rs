//! Resources returned by the API.
//!
//! These types are deserialized straight from the API responses and serialized again when the
//! user asks for JSON output, so the field names follow the API's snake_case naming.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A database in an organization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Database {
    pub name: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<Region>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Region a database is deployed to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub slug: String,
    #[serde(default)]
    pub display_name: String,
}

/// A branch of a database.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branch {
    pub name: String,
    #[serde(default)]
    pub parent_branch: String,
    #[serde(default)]
    pub ready: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Point-in-time capture of a branch's schema.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaSnapshot {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Format a timestamp for table output.
pub fn display_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_database_without_optional_fields() {
        let database: Database = serde_json::from_str(
            r#"{"name":"foo","created_at":"2021-01-14T10:19:23.000Z","updated_at":"2021-01-14T10:19:23.000Z","type":"database"}"#,
        )
        .unwrap();

        assert_eq!(database.name, "foo");
        assert_eq!(database.notes, "");
        assert_eq!(database.region, None);
    }

    #[test]
    fn test_deserialize_branch() {
        let branch: Branch = serde_json::from_str(
            r#"{"name":"dev","parent_branch":"main","ready":true,"created_at":"2021-01-14T10:19:23.000Z","updated_at":"2021-01-15T10:19:23.000Z"}"#,
        )
        .unwrap();

        assert_eq!(branch.name, "dev");
        assert_eq!(branch.parent_branch, "main");
        assert!(branch.ready);
    }

    #[test]
    fn test_display_timestamp() {
        let timestamp: DateTime<Utc> = "2021-01-14T10:19:23Z".parse().unwrap();
        assert_eq!(display_timestamp(&timestamp), "2021-01-14 10:19:23 UTC");
    }
}
