//! Core data types for the Porter publishing tool.
//!
//! This crate defines the types that describe a publishable project:
//! the `Porter.toml` manifest, Maven coordinates, and credential
//! resolution from the environment.
//!
//! This crate is intentionally free of async code and network I/O.

pub mod coordinate;
pub mod credentials;
pub mod manifest;
