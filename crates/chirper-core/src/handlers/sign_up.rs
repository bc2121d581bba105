use anyhow::Result;
use tracing::{debug, info};

use super::{read_input, Outcome};
use crate::api::ApiClient;
use crate::auth::{Session, SessionStorage};
use crate::models::RegistrationRequest;
use crate::ui::{elements, Display, Document};

/// Submits the sign-up form.
pub struct SignUpHandler<S> {
    client: ApiClient,
    session: Session<S>,
}

impl<S: SessionStorage> SignUpHandler<S> {
    pub fn new(client: ApiClient, session: Session<S>) -> Self {
        Self { client, session }
    }

    /// Read `email_reg`, `psw_reg` and `psw2`, register, then store the api
    /// key and hide `id02`.
    ///
    /// Only the email and password gate submission; the repeat is sent as
    /// typed and checked by the backend.
    pub async fn handle<D: Document>(&self, document: &mut D) -> Result<Outcome> {
        let email = read_input(document, elements::REGISTER_EMAIL)?;
        let password = read_input(document, elements::REGISTER_PASSWORD)?;

        if email.is_empty() || password.is_empty() {
            debug!("Sign-up form incomplete, not submitting");
            return Ok(Outcome::Skipped);
        }

        let password_repeat = read_input(document, elements::REGISTER_PASSWORD_REPEAT)?;

        let request = RegistrationRequest {
            email,
            password,
            password_repeat,
        };
        let response = self.client.register(&request).await?;

        self.session.store_token(&response.apikey)?;
        document.set_display(elements::SIGN_UP_PANEL, Display::None)?;
        info!("Registered and signed in");

        Ok(Outcome::Authenticated(response.apikey))
    }
}
