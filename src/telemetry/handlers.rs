use actix_web::{get, web, HttpResponse, Responder};

use crate::{config::load_config, utils::env::setupvars};

use super::{
    models::{StatusResponse, TemperatureQuery},
    reader::TelemetryReader,
};

#[get("/status")]
async fn status(
    reader: web::Data<TelemetryReader>,
    query: web::Query<TemperatureQuery>,
) -> impl Responder {
    let config = load_config(&setupvars());
    let response: StatusResponse = reader.host_status(&config, &query).into();
    HttpResponse::Ok().json(response)
}
