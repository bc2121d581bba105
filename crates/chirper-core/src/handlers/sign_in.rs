use anyhow::Result;
use tracing::{debug, info};

use super::{read_input, Outcome};
use crate::api::ApiClient;
use crate::auth::{Session, SessionStorage};
use crate::models::Credentials;
use crate::ui::{elements, Display, Document};

/// Submits the sign-in form.
pub struct SignInHandler<S> {
    client: ApiClient,
    session: Session<S>,
}

impl<S: SessionStorage> SignInHandler<S> {
    pub fn new(client: ApiClient, session: Session<S>) -> Self {
        Self { client, session }
    }

    /// Read `email` and `psw`, log in, then store the api key and hide `id01`.
    ///
    /// The panel is only hidden once the key is stored.
    pub async fn handle<D: Document>(&self, document: &mut D) -> Result<Outcome> {
        let email = read_input(document, elements::EMAIL)?;
        let password = read_input(document, elements::PASSWORD)?;

        if email.is_empty() || password.is_empty() {
            debug!("Sign-in form incomplete, not submitting");
            return Ok(Outcome::Skipped);
        }

        let response = self.client.login(&Credentials { email, password }).await?;

        self.session.store_token(&response.apikey)?;
        document.set_display(elements::SIGN_IN_PANEL, Display::None)?;
        info!("Signed in");

        Ok(Outcome::Authenticated(response.apikey))
    }
}
