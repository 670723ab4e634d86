//! Defines functions for carrying the session token in a cookie.

use axum_extra::extract::{
    CookieJar,
    cookie::{Cookie, SameSite},
};
use time::Duration;

use super::SessionId;

pub(crate) const COOKIE_SESSION: &str = "sessionId";
/// How long a session cookie stays valid on the client.
pub(crate) const SESSION_COOKIE_DURATION: Duration = Duration::days(7);

/// Add the session cookie to the cookie jar.
///
/// The cookie is scoped to the whole API path and expires after
/// [SESSION_COOKIE_DURATION].
///
/// Returns the cookie jar with the cookie added.
pub(crate) fn set_session_cookie(jar: CookieJar, session_id: &SessionId) -> CookieJar {
    jar.add(
        Cookie::build((COOKIE_SESSION, session_id.as_str().to_owned()))
            .path("/")
            .max_age(SESSION_COOKIE_DURATION)
            .http_only(true)
            .same_site(SameSite::Lax),
    )
}

/// Read the session token from the cookie jar, if the client sent one.
///
/// The token is not validated beyond presence: possession is the whole
/// authentication model.
pub(crate) fn get_session_id_from_cookies(jar: &CookieJar) -> Option<SessionId> {
    jar.get(COOKIE_SESSION)
        .map(|cookie| SessionId::from(cookie.value_trimmed().to_owned()))
}

#[cfg(test)]
mod cookie_tests {
    use axum_extra::extract::{CookieJar, cookie::SameSite};
    use time::Duration;

    use crate::session::SessionId;

    use super::{
        COOKIE_SESSION, SESSION_COOKIE_DURATION, get_session_id_from_cookies, set_session_cookie,
    };

    #[test]
    fn can_set_and_read_session_cookie() {
        let session_id = SessionId::mint();

        let jar = set_session_cookie(CookieJar::new(), &session_id);

        let got = get_session_id_from_cookies(&jar);
        assert_eq!(got, Some(session_id));
    }

    #[test]
    fn session_cookie_covers_whole_api_for_seven_days() {
        let jar = set_session_cookie(CookieJar::new(), &SessionId::mint());
        let cookie = jar.get(COOKIE_SESSION).unwrap();

        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.max_age(), Some(SESSION_COOKIE_DURATION));
        assert_eq!(cookie.max_age(), Some(Duration::days(7)));
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
    }

    #[test]
    fn read_returns_none_without_cookie() {
        let jar = CookieJar::new();

        assert_eq!(get_session_id_from_cookies(&jar), None);
    }
}
