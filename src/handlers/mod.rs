//! HTTP handlers for account CRUD and service metadata.

pub mod account;
pub mod meta;
