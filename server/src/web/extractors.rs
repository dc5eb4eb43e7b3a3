// server/src/web/extractors.rs

use actix_web::{FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};
use tracing::warn;

use crate::errors::ApiError;

/// Identity forwarded by the authentication layer fronting this API.
///
/// That layer verifies credentials and passes the verified identity along as
/// `X-User-Email` / `X-User-Role` headers; this service trusts them. Handlers
/// that take this extractor refuse anonymous requests with 401.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
  pub email: String,
  pub role: String,
}

impl AuthenticatedUser {
  pub fn is_admin(&self) -> bool {
    self.role.eq_ignore_ascii_case("admin")
  }
}

impl FromRequest for AuthenticatedUser {
  type Error = ApiError; // Use your app's error type
  type Future = Ready<Result<Self, Self::Error>>;

  fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
    let header = |name: &str| {
      req
        .headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
    };

    let role = header("X-User-Role").unwrap_or_else(|| "customer".to_string());
    match header("X-User-Email") {
      Some(email) => ready(Ok(AuthenticatedUser { email, role })),
      None => {
        warn!("AuthenticatedUser extractor: Missing or empty X-User-Email header.");
        ready(Err(ApiError::Auth(
          "User authentication required. Missing X-User-Email header.".to_string(),
        )))
      }
    }
  }
}

/// An [`AuthenticatedUser`] that is guaranteed to carry the `admin` role.
/// Handlers that take this extractor answer 403 to everyone else.
#[derive(Debug, Clone)]
pub struct AdminUser(pub AuthenticatedUser);

impl AdminUser {
  pub fn email(&self) -> &str {
    &self.0.email
  }
}

impl FromRequest for AdminUser {
  type Error = ApiError;
  type Future = Ready<Result<Self, Self::Error>>;

  fn from_request(req: &HttpRequest, payload: &mut actix_web::dev::Payload) -> Self::Future {
    match AuthenticatedUser::from_request(req, payload).into_inner() {
      Ok(user) if user.is_admin() => ready(Ok(AdminUser(user))),
      Ok(user) => {
        warn!(user = %user.email, role = %user.role, "Admin capability required.");
        ready(Err(ApiError::Forbidden(
          "Administrator role required.".to_string(),
        )))
      }
      Err(e) => ready(Err(e)),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use actix_web::test::TestRequest;

  #[actix_web::test]
  async fn extracts_identity_from_headers() {
    let req = TestRequest::default()
      .insert_header(("X-User-Email", "ada@example.com"))
      .insert_header(("X-User-Role", "Admin"))
      .to_http_request();

    let user = AuthenticatedUser::extract(&req).await.unwrap();
    assert_eq!(user.email, "ada@example.com");
    assert!(user.is_admin());
  }

  #[actix_web::test]
  async fn missing_email_is_unauthorized() {
    let req = TestRequest::default().to_http_request();
    let err = AuthenticatedUser::extract(&req).await.unwrap_err();
    assert!(matches!(err, ApiError::Auth(_)));
  }

  #[actix_web::test]
  async fn role_defaults_to_customer_and_is_not_admin() {
    let req = TestRequest::default()
      .insert_header(("X-User-Email", "ada@example.com"))
      .to_http_request();

    let user = AuthenticatedUser::extract(&req).await.unwrap();
    assert_eq!(user.role, "customer");

    let err = AdminUser::extract(&req).await.unwrap_err();
    assert!(matches!(err, ApiError::Forbidden(_)));
  }
}
