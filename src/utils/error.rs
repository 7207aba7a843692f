use std::fmt::Display;

use actix_web::HttpResponse;
use serde::{Deserialize, Serialize};

/// JSON body of every failed request: `{"error": "..."}`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ResponseError {
    pub error: String,
}

impl ResponseError {
    pub fn new(error: impl Display) -> Self {
        Self {
            error: error.to_string(),
        }
    }

    pub fn bad_request(error: impl Display) -> HttpResponse {
        HttpResponse::BadRequest().json(Self::new(error))
    }

    pub fn unauthorized(error: impl Display) -> HttpResponse {
        HttpResponse::Unauthorized().json(Self::new(error))
    }

    pub fn internal(error: impl Display) -> HttpResponse {
        log::error!("{}", error);
        HttpResponse::InternalServerError().json(Self::new(error))
    }
}
