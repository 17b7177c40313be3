#![forbid(unsafe_code)]

pub mod common;
pub mod contact;
pub mod group;
pub mod save;

pub use common::{ContractViolation, SchemaVersion, Validate};
