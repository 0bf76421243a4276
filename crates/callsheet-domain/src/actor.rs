//! Actor module - the persisted outcome of a successful submission

use std::fmt;

/// Unique identifier for an actor record, backed by a UUIDv7
///
/// UUIDv7 values sort chronologically, so identifiers generated later
/// compare greater than identifiers generated earlier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ActorId(u128);

impl ActorId {
    /// Generate a new UUIDv7-based ActorId
    ///
    /// # Examples
    ///
    /// ```
    /// use callsheet_domain::ActorId;
    ///
    /// let id = ActorId::new();
    /// assert!(id.value() > 0);
    /// ```
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().as_u128())
    }

    /// Create an ActorId from a raw u128 value
    ///
    /// Used by the storage layer when reading rows back.
    pub fn from_value(value: u128) -> Self {
        Self(value)
    }

    /// Parse an ActorId from its hyphenated UUID form
    ///
    /// # Examples
    ///
    /// ```
    /// use callsheet_domain::ActorId;
    ///
    /// let id = ActorId::new();
    /// let parsed = ActorId::from_string(&id.to_string()).unwrap();
    /// assert_eq!(id, parsed);
    /// ```
    pub fn from_string(s: &str) -> Result<Self, String> {
        uuid::Uuid::parse_str(s)
            .map(|u| Self(u.as_u128()))
            .map_err(|e| format!("Invalid actor id: {}", e))
    }

    /// Get the raw u128 value
    pub fn value(&self) -> u128 {
        self.0
    }
}

impl Default for ActorId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", uuid::Uuid::from_u128(self.0))
    }
}

/// Fields required to create an actor record
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewActor {
    /// Submitter email; unique across all records
    pub email: String,

    /// Original free-text description
    pub description: String,

    /// First name (required, non-empty)
    pub first_name: String,

    /// Last name (required, non-empty)
    pub last_name: String,

    /// Address (required, non-empty)
    pub address: String,

    /// Height, free form
    pub height: Option<String>,

    /// Weight, e.g. "150 Pounds"
    pub weight: Option<String>,

    /// Gender, free form
    pub gender: Option<String>,

    /// Age in years
    pub age: Option<u32>,
}

/// A persisted actor record
///
/// Records are immutable once created; there is no update or delete path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActorRecord {
    /// Internal identifier
    pub id: ActorId,

    /// Submitter email
    pub email: String,

    /// Original free-text description
    pub description: String,

    /// First name
    pub first_name: String,

    /// Last name
    pub last_name: String,

    /// Address
    pub address: String,

    /// Height
    pub height: Option<String>,

    /// Weight
    pub weight: Option<String>,

    /// Gender
    pub gender: Option<String>,

    /// Age in years
    pub age: Option<u32>,

    /// Creation time in milliseconds since the Unix epoch
    pub created_at: u64,
}

impl ActorRecord {
    /// Build a record from its creation fields
    pub fn from_new(id: ActorId, actor: NewActor, created_at: u64) -> Self {
        Self {
            id,
            email: actor.email,
            description: actor.description,
            first_name: actor.first_name,
            last_name: actor.last_name,
            address: actor.address,
            height: actor.height,
            weight: actor.weight,
            gender: actor.gender,
            age: actor.age,
            created_at,
        }
    }

    /// Project the record down to the columns shown in the list view
    pub fn summary(&self) -> ActorSummary {
        ActorSummary {
            first_name: self.first_name.clone(),
            address: self.address.clone(),
            gender: self.gender.clone(),
            height: self.height.clone(),
        }
    }
}

/// List-view projection of an actor record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActorSummary {
    /// First name
    pub first_name: String,

    /// Address
    pub address: String,

    /// Gender, if known
    pub gender: Option<String>,

    /// Height, if known
    pub height: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actor_id_ordering() {
        let id1 = ActorId::from_value(1000);
        let id2 = ActorId::from_value(2000);

        assert!(id1 < id2);
    }

    #[test]
    fn test_actor_id_chronological() {
        let id1 = ActorId::new();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let id2 = ActorId::new();

        assert!(id1 < id2, "Earlier UUIDv7 should sort before later UUIDv7");
    }

    #[test]
    fn test_actor_id_invalid_string() {
        assert!(ActorId::from_string("not-a-valid-uuid").is_err());
        assert!(ActorId::from_string("").is_err());
    }

    #[test]
    fn test_record_summary_projection() {
        let actor = NewActor {
            email: "jane@example.com".to_string(),
            description: "Jane from Los Angeles".to_string(),
            first_name: "Jane".to_string(),
            last_name: "Smith".to_string(),
            address: "Los Angeles".to_string(),
            height: Some("5 feet".to_string()),
            gender: Some("Female".to_string()),
            ..Default::default()
        };
        let record = ActorRecord::from_new(ActorId::new(), actor, 42);

        let summary = record.summary();
        assert_eq!(summary.first_name, "Jane");
        assert_eq!(summary.address, "Los Angeles");
        assert_eq!(summary.gender.as_deref(), Some("Female"));
        assert_eq!(summary.height.as_deref(), Some("5 feet"));
        assert_eq!(record.created_at, 42);
    }
}
