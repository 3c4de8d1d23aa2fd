//! Networking modules for the backend REST contract.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` is the wire layer, `session` owns the auth lifecycle on top of
//! it, `api` exposes typed endpoints, and `types` defines the shared
//! payload schema.

pub mod api;
pub mod http;
pub mod session;
#[cfg(test)]
pub(crate) mod stub;
pub mod types;
