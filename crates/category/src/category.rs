use chrono::{DateTime, SecondsFormat, Utc};
use serde::Deserialize;
use serde_json::{Map, Value};

use catalog_core::{DomainResult, Entity, UniqueEntityId};

use crate::validator::{validate_description, validate_is_active, validate_name};

/// Raw input for [`Category::create`].
///
/// Attribute values stay untyped until validation so that a host can hand over
/// whatever it received. Deserializing from a JSON object fills the same defaults
/// as [`CategoryProps::new`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CategoryProps {
    #[serde(default, rename = "id")]
    pub unique_entity_id: Option<UniqueEntityId>,
    #[serde(default)]
    pub name: Value,
    #[serde(default)]
    pub description: Value,
    #[serde(default = "default_is_active")]
    pub is_active: Value,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

fn default_is_active() -> Value {
    Value::Bool(true)
}

impl CategoryProps {
    pub fn new(name: impl Into<Value>) -> Self {
        Self {
            unique_entity_id: None,
            name: name.into(),
            description: Value::Null,
            is_active: default_is_active(),
            created_at: None,
        }
    }

    pub fn with_id(mut self, id: UniqueEntityId) -> Self {
        self.unique_entity_id = Some(id);
        self
    }

    pub fn with_description(mut self, description: impl Into<Value>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_is_active(mut self, is_active: impl Into<Value>) -> Self {
        self.is_active = is_active.into();
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }
}

/// Aggregate root: Category.
///
/// Equality and hashing go by identifier (see [`catalog_core::entity_identity!`]).
#[derive(Debug, Clone)]
pub struct Category {
    unique_entity_id: UniqueEntityId,
    name: String,
    description: Option<String>,
    is_active: bool,
    created_at: DateTime<Utc>,
}

catalog_core::entity_identity!(Category);

impl Category {
    /// Validate `props` and build a category from them.
    ///
    /// Missing id and timestamp are generated; a null `is_active` counts as `true`.
    pub fn create(props: CategoryProps) -> DomainResult<Self> {
        Self::validate(&props)
            .inspect_err(|err| tracing::debug!(error = %err, "category rejected"))?;

        let category = Self {
            unique_entity_id: props.unique_entity_id.unwrap_or_default(),
            name: into_text(props.name).unwrap_or_default(),
            description: into_text(props.description),
            is_active: props.is_active.as_bool().unwrap_or(true),
            created_at: props.created_at.unwrap_or_else(Utc::now),
        };
        tracing::debug!(category_id = %category.unique_entity_id, "category created");
        Ok(category)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Replace name and description. Nothing changes unless both pass validation.
    pub fn update(
        &mut self,
        name: impl Into<Value>,
        description: impl Into<Value>,
    ) -> DomainResult<()> {
        let name = name.into();
        let description = description.into();
        validate_name(&name)
            .and_then(|()| validate_description(&description))
            .inspect_err(|err| {
                tracing::debug!(category_id = %self.unique_entity_id, error = %err, "category update rejected")
            })?;

        self.name = into_text(name).unwrap_or_default();
        self.description = into_text(description);
        tracing::debug!(category_id = %self.unique_entity_id, "category updated");
        Ok(())
    }

    pub fn activate(&mut self) {
        self.is_active = true;
        tracing::debug!(category_id = %self.unique_entity_id, "category activated");
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
        tracing::debug!(category_id = %self.unique_entity_id, "category deactivated");
    }
}

impl Entity for Category {
    type Props = CategoryProps;

    fn validate(props: &Self::Props) -> DomainResult<()> {
        validate_name(&props.name)?;
        validate_description(&props.description)?;
        validate_is_active(&props.is_active)
    }

    fn unique_entity_id(&self) -> &UniqueEntityId {
        &self.unique_entity_id
    }

    fn attributes(&self) -> Map<String, Value> {
        let mut attributes = Map::new();
        attributes.insert("name".to_string(), Value::from(self.name.as_str()));
        attributes.insert("description".to_string(), Value::from(self.description.clone()));
        attributes.insert("is_active".to_string(), Value::Bool(self.is_active));
        attributes.insert(
            "created_at".to_string(),
            Value::from(self.created_at.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
        );
        attributes
    }
}

fn into_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::DomainError;
    use chrono::Duration;
    use serde_json::json;

    fn movie() -> Category {
        Category::create(CategoryProps::new("Movie")).unwrap()
    }

    #[test]
    fn create_with_mandatory_params_applies_defaults() {
        let before = Utc::now();
        let category = Category::create(CategoryProps::new("Category")).unwrap();
        let after = Utc::now();

        assert_eq!(category.name(), "Category");
        assert_eq!(category.description(), None);
        assert!(category.is_active());
        assert!(category.created_at() >= before && category.created_at() <= after);
    }

    #[test]
    fn create_with_every_param() {
        let created_at = Utc::now() - Duration::days(3);
        let id = UniqueEntityId::new();
        let category = Category::create(
            CategoryProps::new("Category")
                .with_id(id.clone())
                .with_description("some description")
                .with_is_active(false)
                .with_created_at(created_at),
        )
        .unwrap();

        assert_eq!(category.unique_entity_id(), &id);
        assert_eq!(category.name(), "Category");
        assert_eq!(category.description(), Some("some description"));
        assert!(!category.is_active());
        assert_eq!(category.created_at(), created_at);
    }

    #[test]
    fn create_treats_null_is_active_as_active() {
        let category =
            Category::create(CategoryProps::new("Category").with_is_active(Value::Null)).unwrap();
        assert!(category.is_active());
    }

    #[test]
    fn create_propagates_validation_error_unmodified() {
        let err = Category::create(CategoryProps::new("Category").with_is_active(5)).unwrap_err();
        assert_eq!(err, DomainError::validation(r#"The "is_active" must be a boolean."#));
    }

    #[test]
    fn update_replaces_name_and_description_only() {
        let mut category = movie();
        category.deactivate();
        let id = category.unique_entity_id().clone();
        let created_at = category.created_at();

        category.update("Documentary", "Some Description").unwrap();

        assert_eq!(category.name(), "Documentary");
        assert_eq!(category.description(), Some("Some Description"));
        assert!(!category.is_active());
        assert_eq!(category.unique_entity_id(), &id);
        assert_eq!(category.created_at(), created_at);
    }

    #[test]
    fn failed_update_leaves_state_untouched() {
        let mut category = Category::create(
            CategoryProps::new("Movie").with_description("kept"),
        )
        .unwrap();

        let err = category.update("Documentary", 5).unwrap_err();
        assert_eq!(err.message(), r#"The "description" must be a string."#);
        assert_eq!(category.name(), "Movie");
        assert_eq!(category.description(), Some("kept"));
    }

    #[test]
    fn activate_and_deactivate() {
        let mut category =
            Category::create(CategoryProps::new("Movie").with_is_active(false)).unwrap();
        category.activate();
        assert!(category.is_active());

        category.deactivate();
        assert!(!category.is_active());
    }

    #[test]
    fn to_dict_lists_id_then_attributes() {
        let created_at = "2024-01-02T03:04:05Z".parse::<DateTime<Utc>>().unwrap();
        let id = UniqueEntityId::parse("08976216-4179-40bd-ba77-d357c95b9bba").unwrap();
        let category = Category::create(
            CategoryProps::new("Movie")
                .with_id(id)
                .with_created_at(created_at),
        )
        .unwrap();

        let dict = category.to_dict();
        let keys: Vec<_> = dict.keys().map(String::as_str).collect();
        assert_eq!(keys, ["id", "name", "description", "is_active", "created_at"]);
        assert_eq!(
            Value::Object(dict),
            json!({
                "id": "08976216-4179-40bd-ba77-d357c95b9bba",
                "name": "Movie",
                "description": null,
                "is_active": true,
                "created_at": "2024-01-02T03:04:05Z",
            })
        );
    }

    #[test]
    fn props_deserialize_with_defaults() {
        let props: CategoryProps = serde_json::from_value(json!({ "name": "Movie" })).unwrap();
        assert_eq!(props, CategoryProps::new("Movie"));

        let props: CategoryProps = serde_json::from_value(json!({
            "id": "08976216-4179-40bd-ba77-d357c95b9bba",
            "name": 5,
            "is_active": false,
        }))
        .unwrap();
        assert_eq!(props.name, json!(5));
        assert_eq!(props.is_active, json!(false));
        assert_eq!(
            props.unique_entity_id.as_ref().map(UniqueEntityId::id),
            Some("08976216-4179-40bd-ba77-d357c95b9bba")
        );
    }

    #[test]
    fn props_reject_malformed_id() {
        let err = serde_json::from_value::<CategoryProps>(json!({ "id": "nope", "name": "Movie" }))
            .unwrap_err();
        assert!(err.to_string().contains("ID must be a valid UUID"));
    }

    #[test]
    fn equality_is_by_identity() {
        let a = movie();
        let b = movie();
        assert_ne!(a, b);

        let mut same = a.clone();
        same.update("Renamed", Value::Null).unwrap();
        assert_eq!(a, same);
    }
}
