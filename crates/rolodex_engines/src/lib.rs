#![forbid(unsafe_code)]

pub mod aggregate;
pub mod avatar;
pub mod classify;
pub mod encode;
pub mod labels;
