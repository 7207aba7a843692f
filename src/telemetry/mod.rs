use actix_web::web::ServiceConfig;

pub mod handlers;
pub mod models;
pub mod source;
pub mod reader;

pub fn scope() -> String {
    "/telemetry".to_string()
}

pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(handlers::status);
}
