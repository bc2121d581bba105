//! Sign-in and sign-up form handlers.
//!
//! Each handler reads its form inputs from a [`Document`](crate::ui::Document),
//! posts them to the backend when the email and password are filled in,
//! stores the returned api key in the session and hides the form panel.
//! A failed request leaves both the session and the page untouched.

pub mod error;
pub mod sign_in;
pub mod sign_up;

use anyhow::Result;

use crate::ui::Document;

pub use error::HandlerError;
pub use sign_in::SignInHandler;
pub use sign_up::SignUpHandler;

/// What a handler invocation did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A required field was empty; nothing was sent.
    Skipped,
    /// The backend issued this api key and it is now stored.
    Authenticated(String),
}

impl Outcome {
    pub fn token(&self) -> Option<&str> {
        match self {
            Outcome::Authenticated(token) => Some(token),
            Outcome::Skipped => None,
        }
    }
}

fn read_input<D: Document>(document: &D, id: &str) -> Result<String> {
    document
        .input_value(id)
        .ok_or_else(|| anyhow::Error::from(HandlerError::MissingElement(id.to_string())))
}
