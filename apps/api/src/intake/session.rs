//! Session cookie assignment for the upload flow.
//!
//! The session id only labels stored documents. It does not gate reads —
//! the synthesis path reads the most recent document overall (see DESIGN.md).

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use uuid::Uuid;

pub const SESSION_COOKIE: &str = "aii_session";

/// Reads the session id from the jar, minting a new one when absent or
/// unparseable. Returns the id and whether it was newly created.
pub fn resolve_session(jar: &CookieJar) -> (Uuid, bool) {
    match jar
        .get(SESSION_COOKIE)
        .and_then(|c| Uuid::parse_str(c.value()).ok())
    {
        Some(id) => (id, false),
        None => (Uuid::new_v4(), true),
    }
}

/// Builds the Set-Cookie value for a newly minted session.
/// TTL comes from config (SESSION_TTL_SECS); the 300 s default is known to
/// be tight for a full wizard run and is meant to be tuned, not hardcoded.
pub fn session_cookie(session_id: Uuid, ttl_secs: u64) -> Cookie<'static> {
    let mut cookie = Cookie::new(SESSION_COOKIE, session_id.to_string());
    cookie.set_http_only(true);
    cookie.set_secure(true);
    cookie.set_same_site(SameSite::Lax);
    cookie.set_path("/");
    cookie.set_max_age(time::Duration::seconds(ttl_secs as i64));
    cookie
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_session_mints_new_id_on_empty_jar() {
        let jar = CookieJar::new();
        let (id, is_new) = resolve_session(&jar);
        assert!(is_new);
        assert_ne!(id, Uuid::nil());
    }

    #[test]
    fn test_resolve_session_reuses_existing_id() {
        let existing = Uuid::new_v4();
        let jar = CookieJar::new().add(Cookie::new(SESSION_COOKIE, existing.to_string()));
        let (id, is_new) = resolve_session(&jar);
        assert!(!is_new);
        assert_eq!(id, existing);
    }

    #[test]
    fn test_resolve_session_replaces_garbage_value() {
        let jar = CookieJar::new().add(Cookie::new(SESSION_COOKIE, "not-a-uuid"));
        let (_, is_new) = resolve_session(&jar);
        assert!(is_new);
    }

    #[test]
    fn test_session_cookie_attributes() {
        let id = Uuid::new_v4();
        let cookie = session_cookie(id, 300);
        assert_eq!(cookie.name(), SESSION_COOKIE);
        assert_eq!(cookie.value(), id.to_string());
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.max_age(), Some(time::Duration::seconds(300)));
    }
}
