//! Field validation: a fluent per-attribute rule chain and the `ValidatorFields`
//! capability for validators that report every failing attribute at once.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::error::{DomainError, DomainResult};

/// Fluent rules over a single named attribute.
///
/// Every rule returns the chain unchanged on success, so rules compose with `?`:
///
/// ```
/// use catalog_core::ValidatorRules;
/// use serde_json::json;
///
/// let name = json!("Movie");
/// ValidatorRules::values(&name, "name").required()?.string()?.max_length(255)?;
/// # Ok::<(), catalog_core::DomainError>(())
/// ```
///
/// The first failing rule returns [`DomainError::Validation`]; nothing is aggregated.
/// Only `required` rejects null; the other rules let null through.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatorRules<'a> {
    value: &'a Value,
    attribute: &'a str,
}

impl<'a> ValidatorRules<'a> {
    pub fn values(value: &'a Value, attribute: &'a str) -> Self {
        Self { value, attribute }
    }

    pub fn value(&self) -> &'a Value {
        self.value
    }

    pub fn attribute(&self) -> &'a str {
        self.attribute
    }

    /// Rejects null and the empty string. `0` and `false` are present values.
    pub fn required(self) -> DomainResult<Self> {
        let missing = match self.value {
            Value::Null => true,
            Value::String(s) => s.is_empty(),
            _ => false,
        };
        if missing {
            return Err(self.fail("is required."));
        }
        Ok(self)
    }

    pub fn string(self) -> DomainResult<Self> {
        if !self.value.is_null() && !self.value.is_string() {
            return Err(self.fail("must be a string."));
        }
        Ok(self)
    }

    /// Rejects values longer than `max_length`. Strings are measured in characters,
    /// arrays and objects by their number of entries; other values have no length.
    pub fn max_length(self, max_length: usize) -> DomainResult<Self> {
        let length = match self.value {
            Value::String(s) => Some(s.chars().count()),
            Value::Array(items) => Some(items.len()),
            Value::Object(entries) => Some(entries.len()),
            _ => None,
        };
        if length.is_some_and(|len| len > max_length) {
            return Err(self.fail(&format!("must be less than {max_length} characters.")));
        }
        Ok(self)
    }

    /// Accepts only literal `true`/`false` (or null); no truthiness coercion.
    pub fn boolean(self) -> DomainResult<Self> {
        if !self.value.is_null() && !self.value.is_boolean() {
            return Err(self.fail("must be a boolean."));
        }
        Ok(self)
    }

    fn fail(&self, rule: &str) -> DomainError {
        DomainError::validation(format!("The \"{}\" {}", self.attribute, rule))
    }
}

/// Attribute name -> messages for every attribute that failed.
pub type ErrorFields = BTreeMap<String, Vec<String>>;

/// The two slots a [`ValidatorFields`] implementor carries. Both start unset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationSlots {
    pub errors: Option<ErrorFields>,
    pub validated_data: Option<Map<String, Value>>,
}

impl ValidationSlots {
    /// Store the outcome of a validation pass and report whether it succeeded.
    ///
    /// `validated_data` is only kept when there are no errors.
    pub fn settle(&mut self, errors: ErrorFields, validated_data: Map<String, Value>) -> bool {
        let valid = errors.is_empty();
        self.validated_data = valid.then_some(validated_data);
        self.errors = Some(errors);
        valid
    }
}

/// Capability of validating a whole set of fields.
///
/// Implementors must provide `validate` and expose their [`ValidationSlots`];
/// a type that skips `validate` does not compile:
///
/// ```compile_fail
/// use catalog_core::validation::{ValidationSlots, ValidatorFields};
///
/// struct NoValidate {
///     slots: ValidationSlots,
/// }
///
/// impl ValidatorFields for NoValidate {
///     fn slots(&self) -> &ValidationSlots {
///         &self.slots
///     }
///
///     fn slots_mut(&mut self) -> &mut ValidationSlots {
///         &mut self.slots
///     }
/// }
/// ```
pub trait ValidatorFields {
    fn slots(&self) -> &ValidationSlots;

    fn slots_mut(&mut self) -> &mut ValidationSlots;

    /// Validate the held input, filling `errors` and `validated_data`.
    fn validate(&mut self) -> bool;

    fn errors(&self) -> Option<&ErrorFields> {
        self.slots().errors.as_ref()
    }

    fn validated_data(&self) -> Option<&Map<String, Value>> {
        self.slots().validated_data.as_ref()
    }
}
