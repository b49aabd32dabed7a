//! Category domain module.
//!
//! This crate contains the Category aggregate and its field rules, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod category;
pub mod validator;

pub use category::{Category, CategoryProps};
pub use validator::{CategoryValidator, NAME_MAX_LENGTH};
