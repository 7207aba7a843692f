use std::fmt::Display;

use actix_session::Session;
use base64::{engine::general_purpose::STANDARD, Engine};
use rand::{rngs::OsRng, RngCore};

use super::models::RenderMode;

pub const CSRF_TOKEN_KEY: &str = "token";
pub const CSRF_TOKEN_BYTES: usize = 32;

/// Storage of the CSRF token inside a session.
pub trait TokenStore {
    type Error: Display;

    fn token(&self) -> Result<Option<String>, Self::Error>;
    fn set_token(&self, token: &str) -> Result<(), Self::Error>;
}

impl TokenStore for Session {
    type Error = actix_web::Error;

    fn token(&self) -> Result<Option<String>, Self::Error> {
        Ok(self.get::<String>(CSRF_TOKEN_KEY)?)
    }

    fn set_token(&self, token: &str) -> Result<(), Self::Error> {
        Ok(self.insert(CSRF_TOKEN_KEY, token)?)
    }
}

pub fn generate_token() -> String {
    let mut bytes = [0u8; CSRF_TOKEN_BYTES];
    OsRng.fill_bytes(&mut bytes);
    STANDARD.encode(bytes)
}

/// Returns the session's CSRF token, creating and storing one the first time.
pub fn ensure_csrf_token<S: TokenStore>(session: &S) -> Result<String, S::Error> {
    if let Some(token) = session.token()?.filter(|token| !token.is_empty()) {
        return Ok(token);
    }

    let token = generate_token();
    session.set_token(&token)?;
    log::debug!("Generated new CSRF token for session");
    Ok(token)
}

/// Visitors that are not logged in may see the index page, unless they asked for the login form.
/// Any other page needs a login.
pub fn resolve_render_mode(
    authenticated: bool,
    is_index_page: bool,
    login_requested: bool,
) -> RenderMode {
    if !authenticated && (!is_index_page || login_requested) {
        RenderMode::LoginOnly
    } else {
        RenderMode::Full
    }
}
