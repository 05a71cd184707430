//! gitlab-mr - merge request helpers for GitLab
//!
//! This library wraps two GitLab project API calls: creating a merge request
//! between two branches, and checking whether one branch is already included
//! in another through the repository compare endpoint.
//!
//! # Architecture
//!
//! - [`config`] reads the project URL and access token once, at startup
//! - [`platform`] holds the HTTP service behind the [`platform::ProjectService`] trait
//! - [`merge`] builds requests and interprets responses against that trait
//!
//! Operations never exit the process; all outcomes are returned so the caller
//! decides how to report them. State is passed explicitly (no globals).

pub mod config;
pub mod error;
pub mod merge;
pub mod platform;
pub mod types;

pub use config::ServiceConfig;
pub use error::{Error, Result};
pub use types::*;
