//! Unique entity identifier.

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// Message carried by [`DomainError::InvalidId`] when an identifier is malformed.
pub const INVALID_ID_MESSAGE: &str = "ID must be a valid UUID";

/// Identifier of an entity.
///
/// Holds the identifier in string form. Every constructor either generates a fresh
/// UUIDv4 or checks that the input parses as a UUID, so an instance is always valid.
/// There are no setters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UniqueEntityId {
    id: String,
}

impl UniqueEntityId {
    /// Generate a new random (v4) identifier.
    pub fn new() -> Self {
        Self::from_uuid(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self {
            id: uuid.to_string(),
        }
    }

    /// Accept an existing identifier, rejecting anything that is not a UUID.
    pub fn parse(value: impl Into<String>) -> DomainResult<Self> {
        let id = value.into();
        Self::validate(&id)?;
        Ok(Self { id })
    }

    fn validate(id: &str) -> DomainResult<()> {
        Uuid::parse_str(id)
            .map(|_| ())
            .map_err(|_| DomainError::invalid_id(INVALID_ID_MESSAGE))
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn into_string(self) -> String {
        self.id
    }
}

impl Default for UniqueEntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl ValueObject for UniqueEntityId {
    fn fields(&self) -> Vec<(&'static str, Value)> {
        vec![("id", Value::from(self.id.as_str()))]
    }
}

crate::value_object_display!(UniqueEntityId);

impl From<Uuid> for UniqueEntityId {
    fn from(value: Uuid) -> Self {
        Self::from_uuid(value)
    }
}

impl From<UniqueEntityId> for String {
    fn from(value: UniqueEntityId) -> Self {
        value.id
    }
}

impl TryFrom<String> for UniqueEntityId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<&str> for UniqueEntityId {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl FromStr for UniqueEntityId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
