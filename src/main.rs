use actix_cors::Cors;
use actix_identity::IdentityMiddleware;
use actix_session::{config::PersistentSession, storage::CookieSessionStore, SessionMiddleware};
use actix_web::{
    cookie::{time::Duration, Key},
    web, App, HttpServer,
};
use auth::models::AuthConfig;
use telemetry::{reader::TelemetryReader, source::OsSource};
use utils::env::{
    adminaddress, cpuinfo, daemon, disabletimer, hostname, hwmon, meminfo, pihole, port,
    sessionlifetime, setupvars, thermalzone,
};

mod auth;
mod config;
mod header;
mod session;
mod telemetry;
mod utils;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();

    // Log env for debugging
    log::info!("Using env:");
    log::info!("HOSTNAME {}", hostname());
    log::info!("PORT {}", port());
    log::info!("SETUPVARS {}", setupvars().display());
    log::info!("THERMALZONE {}", thermalzone().display());
    log::info!("HWMON {}", hwmon().display());
    log::info!("MEMINFO {}", meminfo().display());
    log::info!("CPUINFO {}", cpuinfo().display());
    log::info!("DISABLETIMER {}", disabletimer().display());
    log::info!("DAEMON {}", daemon());
    log::info!("PIHOLE {}", pihole());
    log::info!("ADMINADDRESS {}", adminaddress());
    log::info!("SESSIONLIFETIME {}", sessionlifetime());

    // Sessions do not survive a restart
    let secret_key = Key::generate();
    let auth_config = web::Data::new(AuthConfig::default());
    let session_ttl = Duration::seconds(auth_config.session_lifetime);
    let reader = web::Data::new(TelemetryReader::new(OsSource::default()));

    // Start server
    HttpServer::new(move || {
        App::new()
            .wrap(IdentityMiddleware::default())
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                    .cookie_secure(false)
                    .session_lifecycle(PersistentSession::default().session_ttl(session_ttl))
                    .build(),
            )
            .wrap(Cors::permissive())
            .app_data(auth_config.clone())
            .app_data(reader.clone())
            .service(web::scope(&auth::scope()).configure(auth::configure))
            .service(web::scope(&header::scope()).configure(header::configure))
            .service(web::scope(&telemetry::scope()).configure(telemetry::configure))
    })
    .bind(format!("{}:{}", hostname(), port()))?
    .run()
    .await
}
