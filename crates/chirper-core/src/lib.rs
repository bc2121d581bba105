//! Core library for chirper.
//!
//! Provides the sign-in and sign-up handlers together with what they
//! run against: the backend API client, session storage for the issued
//! api key, and a page model for form inputs and panels.

pub mod api;
pub mod auth;
pub mod config;
pub mod handlers;
pub mod models;
pub mod ui;

pub use api::{ApiClient, ApiError};
pub use auth::{FileStorage, MemoryStorage, Session, SessionStorage, API_KEY_STORAGE_KEY};
pub use config::Config;
pub use handlers::{HandlerError, Outcome, SignInHandler, SignUpHandler};
pub use ui::{Display, Document, MemoryDocument};
