use actix_web::web::ServiceConfig;

pub mod handlers;
pub mod models;

pub fn scope() -> String {
    "/header".to_string()
}

pub fn configure(cfg: &mut ServiceConfig) {
    cfg.service(handlers::page_header);
}
