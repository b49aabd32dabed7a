//! Entity trait: identity + continuity across state changes.

use serde_json::{Map, Value};

use crate::error::DomainResult;
use crate::id::UniqueEntityId;

/// Domain object whose equality is its identifier, not its attributes.
///
/// Implementors keep their fields private, expose read accessors, and only change
/// state through explicit domain operations that run [`Entity::validate`] first.
pub trait Entity {
    /// Raw input accepted at construction.
    type Props;

    /// Construction hook: reject props that break the entity's rules.
    fn validate(props: &Self::Props) -> DomainResult<()>;

    fn unique_entity_id(&self) -> &UniqueEntityId;

    /// Declared attributes in declaration order, without the identifier.
    fn attributes(&self) -> Map<String, Value>;

    /// Shorthand for the identifier's value.
    fn id(&self) -> &str {
        self.unique_entity_id().id()
    }

    /// Flat mapping of `id` followed by every declared attribute.
    fn to_dict(&self) -> Map<String, Value> {
        let mut dict = Map::new();
        dict.insert("id".to_string(), Value::from(self.id()));
        for (key, value) in self.attributes() {
            if key != "id" {
                dict.insert(key, value);
            }
        }
        dict
    }

    fn same_identity_as(&self, other: &Self) -> bool
    where
        Self: Sized,
    {
        self.unique_entity_id() == other.unique_entity_id()
    }
}

/// Implement `PartialEq`, `Eq` and `Hash` for an [`Entity`] by identifier only.
#[macro_export]
macro_rules! entity_identity {
    ($t:ty) => {
        impl ::core::cmp::PartialEq for $t {
            fn eq(&self, other: &Self) -> bool {
                $crate::entity::Entity::same_identity_as(self, other)
            }
        }

        impl ::core::cmp::Eq for $t {}

        impl ::core::hash::Hash for $t {
            fn hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
                ::core::hash::Hash::hash($crate::entity::Entity::unique_entity_id(self), state);
            }
        }
    };
}
