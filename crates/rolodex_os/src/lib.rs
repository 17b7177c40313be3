#![forbid(unsafe_code)]

pub mod editor;
pub mod permissions;
pub mod service;

pub use service::{ContactsService, ServiceError};
