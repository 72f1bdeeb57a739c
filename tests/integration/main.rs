//! Integration tests for MetaBlog
//!
//! Requests go through the full router: auth gate, handlers, in-memory
//! store. The `database` suite runs against PostgreSQL and is ignored
//! unless asked for.

#[path = "../common/mod.rs"]
mod common;

mod config_test;
