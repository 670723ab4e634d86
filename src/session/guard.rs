//! Middleware that gates session-scoped routes on the presence of a session cookie.

use axum::{
    Json,
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::extract::CookieJar;
use serde_json::json;

use super::cookie::get_session_id_from_cookies;

/// Middleware function that checks for a session cookie.
///
/// If the cookie is absent the request is rejected with a 401 before any
/// handler logic runs. Otherwise the [SessionId](crate::SessionId) is placed
/// into the request extensions and the request executed normally.
///
/// **Note**: Route handlers can use the function argument
/// `Extension(session_id): Extension<SessionId>` to receive the session ID.
pub async fn session_guard(jar: CookieJar, mut request: Request, next: Next) -> Response {
    let Some(session_id) = get_session_id_from_cookies(&jar) else {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "a session cookie is required" })),
        )
            .into_response();
    };

    request.extensions_mut().insert(session_id);

    next.run(request).await
}

#[cfg(test)]
mod session_guard_tests {
    use axum::{Extension, Router, http::StatusCode, middleware, routing::get};
    use axum_extra::extract::cookie::Cookie;
    use axum_test::TestServer;

    use crate::session::{SessionId, cookie::COOKIE_SESSION};

    use super::session_guard;

    const TEST_GUARDED_ROUTE: &str = "/guarded";

    async fn test_handler(Extension(session_id): Extension<SessionId>) -> String {
        session_id.as_str().to_owned()
    }

    fn get_test_server() -> TestServer {
        let app = Router::new()
            .route(TEST_GUARDED_ROUTE, get(test_handler))
            .layer(middleware::from_fn(session_guard));

        TestServer::new(app)
    }

    #[tokio::test]
    async fn get_guarded_route_with_session_cookie() {
        let server = get_test_server();

        let response = server
            .get(TEST_GUARDED_ROUTE)
            .add_cookie(Cookie::new(COOKIE_SESSION, "test-session-token"))
            .await;

        response.assert_status_ok();
        assert_eq!(response.text(), "test-session-token");
    }

    #[tokio::test]
    async fn get_guarded_route_without_cookie_is_unauthorized() {
        let server = get_test_server();

        let response = server.get(TEST_GUARDED_ROUTE).await;

        response.assert_status(StatusCode::UNAUTHORIZED);
    }
}
