//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` maps resources to endpoints over a `transport`, `storage` persists
//! the bearer token, `auth` drives the token lifecycle, `error` decodes and
//! normalizes backend failures, and `types` defines the wire schema.

pub mod api;
pub mod auth;
pub mod error;
pub mod storage;
pub mod transport;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;
