//! `catalog-core` — seedwork shared by every catalog domain module.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! identifiers, value objects, field validation and the entity contract.

pub mod entity;
pub mod error;
pub mod id;
pub mod validation;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::UniqueEntityId;
pub use validation::{ErrorFields, ValidationSlots, ValidatorFields, ValidatorRules};
pub use value_object::ValueObject;
