//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are defined entirely
//! by their attribute values. Two value objects with the same values are considered equal.

use serde_json::Value;

/// Immutable data holder compared by its field values.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: No identity (two value objects with same values are equal)
/// - **Entity**: Has identity (two entities with same ID are the same entity)
///
/// Implementors derive `PartialEq`, `Eq` and `Hash` so comparison and hashing are
/// structural. Equality for entities lives in [`crate::entity`] and never goes
/// through this trait.
///
/// ## Canonical string form
///
/// [`ValueObject::fields`] lists the named fields in declaration order. A single-field
/// value object renders as the bare field value; anything wider renders as an ordered
/// `{"name": value, ...}` mapping. Use [`value_object_display!`](crate::value_object_display)
/// to back `Display` with that form.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// struct Money {
///     amount: i64,
///     currency: String,
/// }
///
/// impl ValueObject for Money {
///     fn fields(&self) -> Vec<(&'static str, Value)> {
///         vec![("amount", self.amount.into()), ("currency", self.currency.clone().into())]
///     }
/// }
/// value_object_display!(Money);
///
/// // {"amount": 100, "currency": "USD"}
/// ```
pub trait ValueObject: Clone + Eq + core::hash::Hash + core::fmt::Debug {
    /// Named fields, in declaration order.
    fn fields(&self) -> Vec<(&'static str, Value)>;

    fn to_canonical_string(&self) -> String {
        let fields = self.fields();
        match fields.as_slice() {
            [(_, value)] => render_bare(value),
            _ => {
                let body = fields
                    .iter()
                    .map(|(name, value)| format!("{}: {}", Value::from(*name), value))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("{{{body}}}")
            }
        }
    }
}

fn render_bare(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Implement `Display` for a [`ValueObject`] using its canonical string form.
#[macro_export]
macro_rules! value_object_display {
    ($t:ty) => {
        impl ::core::fmt::Display for $t {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&$crate::value_object::ValueObject::to_canonical_string(self))
            }
        }
    };
}
