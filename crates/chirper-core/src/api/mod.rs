//! REST API client module for the chirper backend.
//!
//! This module provides the `ApiClient` for the login and registration
//! endpoints. Both return an api key that later requests send in the
//! `api-key` header.

pub mod client;
pub mod error;

pub use client::{ApiClient, API_KEY_HEADER};
pub use error::ApiError;
