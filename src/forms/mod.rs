//! Form definitions backing the console routes.

pub mod accounts;
pub mod content;
pub mod plans;
pub mod support;
pub mod types;
