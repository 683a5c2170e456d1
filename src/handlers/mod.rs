//! HTTP handlers for the entity catalogue, pool search and the service-level endpoints.

pub mod common;
pub mod entity;
pub mod search;
