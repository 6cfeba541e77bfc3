//! Error handling for the Durak engine.

pub mod domain;

pub use domain::{DomainError, ValidationKind};
