use actix_identity::Identity;
use actix_session::Session;
use actix_web::{get, web, HttpResponse, Responder};

use crate::{
    auth::models::AuthConfig,
    config::{load_config, read_disable_timer, resolve_boxed_layout},
    session::gate::{ensure_csrf_token, resolve_render_mode},
    telemetry::reader::TelemetryReader,
    utils::{
        env::{disabletimer, setupvars},
        error::ResponseError,
    },
};

use super::models::{HeaderQuery, PageHeader, INDEX_PAGE};

#[get("/{page}")]
async fn page_header(
    path: web::Path<String>,
    query: web::Query<HeaderQuery>,
    user: Option<Identity>,
    session: Session,
    auth: web::Data<AuthConfig>,
    reader: web::Data<TelemetryReader>,
) -> impl Responder {
    let page = path.into_inner();
    let token = match ensure_csrf_token(&session) {
        Ok(token) => token,
        Err(e) => {
            return ResponseError::internal(format!(
                "Could not store CSRF token in session: {}",
                e
            ));
        }
    };

    let authenticated = auth.is_authenticated(user.as_ref());
    let render_mode = resolve_render_mode(
        authenticated,
        page == INDEX_PAGE,
        query.login_requested(),
    );
    log::debug!(
        "Rendering {} as {:?} (authenticated: {})",
        page,
        render_mode,
        authenticated
    );

    let config = load_config(&setupvars());
    let status = reader.host_status(&config, &query.temperature());

    HttpResponse::Ok().json(PageHeader {
        page,
        render_mode,
        authenticated,
        token: authenticated.then_some(token),
        session_lifetime: (authenticated && auth.auth_required()).then_some(auth.session_lifetime),
        boxed_layout: resolve_boxed_layout(&config, &query.layout()),
        disable_timer: read_disable_timer(&disabletimer()),
        status: status.into(),
    })
}

#[cfg(test)]
mod tests {
    use actix_identity::IdentityMiddleware;
    use actix_session::{storage::CookieSessionStore, SessionMiddleware};
    use actix_web::{
        cookie::{Cookie, Key},
        dev::ServiceResponse,
        http::StatusCode,
        test, App, HttpMessage, HttpRequest,
    };

    use super::*;
    use crate::{
        auth::utils::admin_identity, session::models::RenderMode,
        telemetry::reader::tests::FakeSource,
    };

    const ADMIN: &str = "52908400098527886e0f7030069857d2e4169ee7";

    async fn log_in_as(request: HttpRequest, path: web::Path<String>) -> HttpResponse {
        match Identity::login(&request.extensions(), path.into_inner()) {
            Ok(_) => HttpResponse::Ok().finish(),
            Err(e) => ResponseError::internal(e),
        }
    }

    macro_rules! header_app {
        ($admin:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(TelemetryReader::new(FakeSource {
                        nproc: Some("4".to_string()),
                        pid: 1,
                        ..Default::default()
                    })))
                    .app_data(web::Data::new(AuthConfig {
                        admin: $admin.to_string(),
                        session_lifetime: 1440,
                    }))
                    .wrap(IdentityMiddleware::default())
                    .wrap(SessionMiddleware::new(
                        CookieSessionStore::default(),
                        Key::generate(),
                    ))
                    .route("/login-as/{user}", web::post().to(log_in_as))
                    .service(
                        web::scope(&crate::header::scope()).configure(crate::header::configure),
                    ),
            )
            .await
        };
    }

    fn first_cookie(response: &ServiceResponse) -> Cookie<'static> {
        response
            .response()
            .cookies()
            .next()
            .map(|cookie| cookie.into_owned())
            .unwrap()
    }

    macro_rules! session_cookie {
        ($app:expr, $user:expr) => {{
            let request = test::TestRequest::post()
                .uri(&format!("/login-as/{}", $user))
                .to_request();
            let response = test::call_service($app, request).await;
            assert_eq!(response.status(), StatusCode::OK);
            first_cookie(&response)
        }};
    }

    #[actix_web::test]
    async fn anonymous_visitor_gets_login_form_on_other_pages() {
        let app = header_app!(ADMIN);
        let request = test::TestRequest::get().uri("/header/settings").to_request();
        let response: PageHeader = test::call_and_read_body_json(&app, request).await;

        assert_eq!(response.page, "settings");
        assert!(!response.authenticated);
        assert_eq!(response.render_mode, RenderMode::LoginOnly);
        assert_eq!(response.token, None);
        assert_eq!(response.session_lifetime, None);
    }

    #[actix_web::test]
    async fn anonymous_visitor_sees_reduced_index() {
        let app = header_app!(ADMIN);
        let request = test::TestRequest::get().uri("/header/index").to_request();
        let response: PageHeader = test::call_and_read_body_json(&app, request).await;
        assert_eq!(response.render_mode, RenderMode::Full);
        assert_eq!(response.token, None);

        let request = test::TestRequest::get().uri("/header/index?login").to_request();
        let response: PageHeader = test::call_and_read_body_json(&app, request).await;
        assert_eq!(response.render_mode, RenderMode::LoginOnly);
        assert_eq!(response.token, None);
    }

    #[actix_web::test]
    async fn admin_gets_token_and_session_lifetime() {
        let app = header_app!(ADMIN);
        let cookie = session_cookie!(&app, admin_identity(ADMIN));

        let request = test::TestRequest::get()
            .uri("/header/settings?login")
            .cookie(cookie)
            .to_request();
        let response: PageHeader = test::call_and_read_body_json(&app, request).await;

        assert!(response.authenticated);
        assert_eq!(response.render_mode, RenderMode::Full);
        assert!(response.token.is_some_and(|token| !token.is_empty()));
        assert_eq!(response.session_lifetime, Some(1440));
    }

    #[actix_web::test]
    async fn other_identity_is_not_authenticated() {
        let app = header_app!(ADMIN);
        let cookie = session_cookie!(&app, admin_identity("0000000000000000000000000000000000000001"));

        let request = test::TestRequest::get()
            .uri("/header/settings")
            .cookie(cookie)
            .to_request();
        let response: PageHeader = test::call_and_read_body_json(&app, request).await;

        assert!(!response.authenticated);
        assert_eq!(response.render_mode, RenderMode::LoginOnly);
        assert_eq!(response.token, None);
    }

    #[actix_web::test]
    async fn open_dashboard_token_is_stable_across_requests() {
        let app = header_app!("");

        let request = test::TestRequest::get().uri("/header/settings").to_request();
        let response = test::call_service(&app, request).await;
        let cookie = first_cookie(&response);
        let first: PageHeader = test::read_body_json(response).await;

        let request = test::TestRequest::get()
            .uri("/header/settings")
            .cookie(cookie)
            .to_request();
        let second: PageHeader = test::call_and_read_body_json(&app, request).await;

        assert!(first.authenticated);
        assert_eq!(first.render_mode, RenderMode::Full);
        assert!(first.token.is_some());
        assert_eq!(first.token, second.token);
        assert_eq!(first.session_lifetime, None);
    }

    #[actix_web::test]
    async fn invalid_limit_override_keeps_default() {
        let app = header_app!("");
        let request = test::TestRequest::get()
            .uri("/header/index?temperature_limit=hot&tempunit=X")
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::OK);

        let header: PageHeader = test::read_body_json(response).await;
        assert_eq!(header.status.status.temperature_limit_celsius, 60.0);
    }

    #[actix_web::test]
    async fn layout_override_from_settings_page() {
        let app = header_app!("");
        let request = test::TestRequest::get()
            .uri("/header/settings?field=webUI")
            .to_request();
        let response: PageHeader = test::call_and_read_body_json(&app, request).await;
        assert!(!response.boxed_layout);
        assert_eq!(response.status.status.cpu_core_count, 4);
    }
}
