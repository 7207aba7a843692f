use actix_identity::Identity;
use actix_web::{get, post, web, HttpMessage, HttpRequest, HttpResponse, Responder};
use ethsign::Signature;

use crate::utils::{error::ResponseError, keccak::hash_message};

use super::{
    models::{AuthConfig, AuthStatus, Login, LoginMethod},
    utils::{admin_identity, LOGIN_MESSAGE},
};

#[get("/status")]
async fn status(user: Option<Identity>, config: web::Data<AuthConfig>) -> impl Responder {
    HttpResponse::Ok().json(AuthStatus {
        authenticated: config.is_authenticated(user.as_ref()),
        auth_required: config.auth_required(),
    })
}

#[post("/login")]
async fn login(
    login: web::Json<Login>,
    config: web::Data<AuthConfig>,
    request: HttpRequest,
) -> impl Responder {
    let address: String;
    match login.login_method {
        LoginMethod::WalletSignature { v, r, s } => {
            let message_bytes = hash_message(LOGIN_MESSAGE);
            match (Signature { v, r, s }).recover(&message_bytes) {
                Ok(pubkey) => {
                    address = hex::encode(pubkey.address());
                }
                Err(e) => {
                    return ResponseError::bad_request(format!(
                        "Signature address recovery failed: {}",
                        e
                    ));
                }
            }
        }
    }

    if config.auth_required() && address != config.admin {
        log::warn!("Rejected login attempt from {}", address);
        return ResponseError::unauthorized(format!("{} is not allowed to log in", address));
    }

    let user = admin_identity(&address);
    if let Err(e) = Identity::login(&request.extensions(), user.clone()) {
        return ResponseError::internal(format!("Could not log in user {}: {}", user, e));
    }

    log::info!("Logged in {}", user);
    HttpResponse::Ok().finish()
}

#[post("/logout")]
async fn logout(user: Identity) -> impl Responder {
    user.logout();
    HttpResponse::Ok()
}
