//! Data models exchanged with the chirper backend.
//!
//! - `Credentials`, `RegistrationRequest`: request bodies for sign-in and sign-up
//! - `ApiKeyResponse`: the token issued by both endpoints
//! - `ErrorResponse`: the backend's error body
//! - `UserProfile`: the profile behind an api key

pub mod auth;
pub mod user;

pub use auth::{ApiKeyResponse, Credentials, ErrorResponse, RegistrationRequest};
pub use user::{UserMeResponse, UserProfile, UserSummary};
