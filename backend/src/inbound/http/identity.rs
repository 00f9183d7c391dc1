//! Anonymous identity resolution from the owner cookie.
//!
//! [`Identity`] is an extractor so handlers receive a resolved owner token
//! without touching cookie plumbing. Resolution cannot fail: a present,
//! non-empty cookie value is reused as-is; anything else mints a fresh
//! token and marks the identity as fresh so the response sets the cookie
//! exactly once.

use actix_web::cookie::time::Duration;
use actix_web::cookie::{Cookie, SameSite};
use actix_web::{dev::Payload, FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};

use crate::domain::OwnerToken;

/// Cookie carrying the owner token.
pub const OWNER_COOKIE: &str = "owner_id";

/// Two-year lifetime, matching the long-lived anonymous identity contract.
const OWNER_COOKIE_MAX_AGE: Duration = Duration::days(2 * 365);

/// Resolved caller identity for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    token: OwnerToken,
    fresh: bool,
}

impl Identity {
    fn resolve(req: &HttpRequest) -> Self {
        match req.cookie(OWNER_COOKIE).map(|c| OwnerToken::new(c.value())) {
            Some(Ok(token)) => Self {
                token,
                fresh: false,
            },
            // Absent or blank cookie: mint a new identity.
            _ => Self {
                token: OwnerToken::mint(),
                fresh: true,
            },
        }
    }

    /// The owner token scoping all repository calls for this request.
    #[must_use]
    pub fn token(&self) -> &OwnerToken {
        &self.token
    }

    /// Whether this identity was minted for the current request.
    #[must_use]
    pub fn is_fresh(&self) -> bool {
        self.fresh
    }

    /// Cookie to attach to the response.
    ///
    /// Present only for freshly minted identities; a returning cookie must
    /// not be re-set.
    #[must_use]
    pub fn issue_cookie(&self) -> Option<Cookie<'static>> {
        self.fresh.then(|| {
            Cookie::build(OWNER_COOKIE, self.token.as_str().to_owned())
                .path("/")
                .max_age(OWNER_COOKIE_MAX_AGE)
                .http_only(true)
                .same_site(SameSite::Lax)
                .finish()
        })
    }
}

impl FromRequest for Identity {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Ok(Self::resolve(req)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App, HttpResponse};

    async fn echo(identity: Identity) -> HttpResponse {
        let mut builder = HttpResponse::Ok();
        if let Some(cookie) = identity.issue_cookie() {
            builder.cookie(cookie);
        }
        builder.body(identity.token().as_str().to_owned())
    }

    fn identity_app() -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new().route("/", web::get().to(echo))
    }

    #[actix_web::test]
    async fn missing_cookie_mints_token_and_sets_cookie() {
        let app = test::init_service(identity_app()).await;

        let res = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert_eq!(res.status(), StatusCode::OK);

        let cookie = res
            .response()
            .cookies()
            .find(|c| c.name() == OWNER_COOKIE)
            .expect("owner cookie set");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.max_age(), Some(OWNER_COOKIE_MAX_AGE));

        let token = cookie.value().to_owned();
        let body = test::read_body(res).await;
        assert_eq!(body, token.as_bytes());
    }

    #[actix_web::test]
    async fn present_cookie_is_reused_and_not_reset() {
        let app = test::init_service(identity_app()).await;
        let cookie = Cookie::new(OWNER_COOKIE, "existing-token");

        let res = test::call_service(
            &app,
            test::TestRequest::get().uri("/").cookie(cookie).to_request(),
        )
        .await;

        assert!(res
            .response()
            .cookies()
            .all(|c| c.name() != OWNER_COOKIE));
        let body = test::read_body(res).await;
        assert_eq!(body, "existing-token".as_bytes());
    }

    #[actix_web::test]
    async fn blank_cookie_value_is_treated_as_absent() {
        let app = test::init_service(identity_app()).await;
        let cookie = Cookie::new(OWNER_COOKIE, "");

        let res = test::call_service(
            &app,
            test::TestRequest::get().uri("/").cookie(cookie).to_request(),
        )
        .await;

        let issued = res
            .response()
            .cookies()
            .find(|c| c.name() == OWNER_COOKIE)
            .expect("fresh cookie issued");
        assert!(!issued.value().is_empty());
    }
}
