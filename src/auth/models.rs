use actix_identity::Identity;
use serde::{Deserialize, Serialize};

use crate::utils::env::{adminaddress, sessionlifetime};

use super::utils::{auth_required, authenticated_as};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub enum LoginMethod {
    WalletSignature { v: u8, r: [u8; 32], s: [u8; 32] },
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Login {
    pub login_method: LoginMethod,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AuthStatus {
    pub authenticated: bool,
    pub auth_required: bool,
}

#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Lowercase hex wallet address without `0x`, empty when no login is required.
    pub admin: String,
    /// Seconds a session stays valid.
    pub session_lifetime: i64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        AuthConfig {
            admin: adminaddress(),
            session_lifetime: sessionlifetime(),
        }
    }
}

impl AuthConfig {
    pub fn auth_required(&self) -> bool {
        auth_required(&self.admin)
    }

    pub fn is_authenticated(&self, user: Option<&Identity>) -> bool {
        authenticated_as(user, &self.admin)
    }
}
