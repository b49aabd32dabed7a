//! Category field rules, shared by the aggregate and by [`CategoryValidator`].

use catalog_core::{DomainResult, ErrorFields, ValidationSlots, ValidatorFields, ValidatorRules};
use serde_json::{Map, Value};

use crate::category::CategoryProps;

/// Longest accepted category name, in characters.
pub const NAME_MAX_LENGTH: usize = 255;

pub(crate) fn validate_name(name: &Value) -> DomainResult<()> {
    ValidatorRules::values(name, "name")
        .required()?
        .string()?
        .max_length(NAME_MAX_LENGTH)?;
    Ok(())
}

pub(crate) fn validate_description(description: &Value) -> DomainResult<()> {
    ValidatorRules::values(description, "description").string()?;
    Ok(())
}

pub(crate) fn validate_is_active(is_active: &Value) -> DomainResult<()> {
    ValidatorRules::values(is_active, "is_active").boolean()?;
    Ok(())
}

/// Validates category input attribute by attribute, collecting the first failure
/// of each one instead of stopping at the first bad attribute.
#[derive(Debug, Clone)]
pub struct CategoryValidator {
    props: CategoryProps,
    slots: ValidationSlots,
}

impl CategoryValidator {
    pub fn new(props: CategoryProps) -> Self {
        Self {
            props,
            slots: ValidationSlots::default(),
        }
    }
}

impl ValidatorFields for CategoryValidator {
    fn slots(&self) -> &ValidationSlots {
        &self.slots
    }

    fn slots_mut(&mut self) -> &mut ValidationSlots {
        &mut self.slots
    }

    fn validate(&mut self) -> bool {
        let is_active = match &self.props.is_active {
            Value::Null => Value::Bool(true),
            other => other.clone(),
        };
        let checks: [(&str, &Value, DomainResult<()>); 3] = [
            ("name", &self.props.name, validate_name(&self.props.name)),
            (
                "description",
                &self.props.description,
                validate_description(&self.props.description),
            ),
            ("is_active", &is_active, validate_is_active(&is_active)),
        ];

        let mut errors = ErrorFields::new();
        let mut validated_data = Map::new();
        for (attribute, value, outcome) in checks {
            match outcome {
                Ok(()) => {
                    validated_data.insert(attribute.to_string(), value.clone());
                }
                Err(err) => {
                    tracing::debug!(attribute, error = %err, "category attribute rejected");
                    errors
                        .entry(attribute.to_string())
                        .or_default()
                        .push(err.message().to_string());
                }
            }
        }

        self.slots.settle(errors, validated_data)
    }
}
