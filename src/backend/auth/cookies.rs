//! Identity cookie construction.
//!
//! The token travels in an HTTP-only `token` cookie. In production the
//! cookie is `Secure; SameSite=None` so a separately hosted client can send
//! it cross-site; elsewhere it is `SameSite=Strict` without `Secure`.

use axum_extra::extract::cookie::{Cookie, SameSite};

use crate::shared::config::Environment;

/// Name of the cookie carrying the identity token
pub const TOKEN_COOKIE: &str = "token";

/// Cookie attributes derived from the deployment environment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CookiePolicy {
    secure: bool,
    same_site: SameSite,
}

impl CookiePolicy {
    pub fn for_environment(environment: Environment) -> Self {
        if environment.is_production() {
            Self {
                secure: true,
                same_site: SameSite::None,
            }
        } else {
            Self {
                secure: false,
                same_site: SameSite::Strict,
            }
        }
    }

    /// Cookie carrying a freshly issued token
    pub fn token_cookie(&self, token: String) -> Cookie<'static> {
        Cookie::build((TOKEN_COOKIE, token))
            .http_only(true)
            .secure(self.secure)
            .same_site(self.same_site)
            .path("/")
            .build()
    }

    /// Expired, empty `token` cookie; attributes match the issued cookie
    /// so browsers drop it
    pub fn removal_cookie(&self) -> Cookie<'static> {
        let mut cookie = self.token_cookie(String::new());
        cookie.make_removal();
        cookie
    }
}
