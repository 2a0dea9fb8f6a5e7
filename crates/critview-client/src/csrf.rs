//! Anti-forgery token sourcing.
//!
//! The criteria endpoint expects a CSRF token header whose value lives in a
//! portal cookie. Token retrieval is an external collaborator, modeled as a
//! trait so the client can be wired to a cookie store, a fixed token, or
//! nothing at all.

use critview_core::defaults;

/// Source of the anti-forgery token sent with criteria requests.
pub trait CsrfTokenProvider: Send + Sync {
    /// Current token value; `None` omits the header entirely.
    fn token(&self) -> Option<String>;
}

/// Fixed token, for tests and tooling.
pub struct StaticCsrf(String);

impl StaticCsrf {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

impl CsrfTokenProvider for StaticCsrf {
    fn token(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

/// No token available; requests go out without the header.
pub struct NoCsrf;

impl CsrfTokenProvider for NoCsrf {
    fn token(&self) -> Option<String> {
        None
    }
}

/// Extracts the token from a `Cookie`-header-formatted string
/// (`name=value; name2=value2`), the shape the portal's cookie helper reads.
pub struct CookieCsrf {
    cookies: String,
    name: String,
}

impl CookieCsrf {
    /// Look for the portal's default cookie name.
    pub fn new(cookies: impl Into<String>) -> Self {
        Self {
            cookies: cookies.into(),
            name: defaults::CSRF_COOKIE_NAME.to_string(),
        }
    }

    /// Look for a custom cookie name.
    pub fn with_name(cookies: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            cookies: cookies.into(),
            name: name.into(),
        }
    }
}

impl CsrfTokenProvider for CookieCsrf {
    fn token(&self) -> Option<String> {
        self.cookies
            .split(';')
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == self.name)
            .map(|(_, value)| value.to_string())
            .filter(|value| !value.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_csrf() {
        assert_eq!(StaticCsrf::new("tok").token(), Some("tok".to_string()));
    }

    #[test]
    fn test_no_csrf() {
        assert_eq!(NoCsrf.token(), None);
    }

    #[test]
    fn test_cookie_csrf_finds_token() {
        let csrf = CookieCsrf::new("sessionid=xyz; csrftoken=abc123; theme=dark");
        assert_eq!(csrf.token(), Some("abc123".to_string()));
    }

    #[test]
    fn test_cookie_csrf_single_cookie() {
        let csrf = CookieCsrf::new("csrftoken=abc123");
        assert_eq!(csrf.token(), Some("abc123".to_string()));
    }

    #[test]
    fn test_cookie_csrf_missing_token() {
        let csrf = CookieCsrf::new("sessionid=xyz; theme=dark");
        assert_eq!(csrf.token(), None);
    }

    #[test]
    fn test_cookie_csrf_empty_value() {
        let csrf = CookieCsrf::new("csrftoken=");
        assert_eq!(csrf.token(), None);
    }

    #[test]
    fn test_cookie_csrf_custom_name() {
        let csrf = CookieCsrf::with_name("xsrf=t1; csrftoken=t2", "xsrf");
        assert_eq!(csrf.token(), Some("t1".to_string()));
    }

    #[test]
    fn test_cookie_csrf_does_not_match_prefix() {
        let csrf = CookieCsrf::new("csrftoken2=zzz");
        assert_eq!(csrf.token(), None);
    }
}
