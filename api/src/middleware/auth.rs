//! Bearer credential extraction
//!
//! Verification is not done here: the raw credential is handed to the
//! access service, which resolves it to an identity and decides what the
//! caller may do. Routes take a [`BearerToken`] argument and pass
//! `as_deref()` through.

use actix_web::{dev::Payload, http::header::AUTHORIZATION, Error, FromRequest, HttpRequest};
use std::future::{ready, Ready};

/// The credential from an `Authorization: Bearer <token>` header, if any
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BearerToken(Option<String>);

impl BearerToken {
    pub fn new(token: Option<String>) -> Self {
        Self(token)
    }

    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }

    pub fn is_present(&self) -> bool {
        self.0.is_some()
    }
}

impl FromRequest for BearerToken {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    /// Never fails; an absent or non-bearer header yields an empty token
    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Ok(BearerToken(extract_bearer_token(req))))
    }
}

/// Extracts Bearer token from Authorization header
pub fn extract_bearer_token(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_extracts_bearer_credential() {
        let req = TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer abc.def.ghi"))
            .to_http_request();
        assert_eq!(extract_bearer_token(&req).as_deref(), Some("abc.def.ghi"));
    }

    #[test]
    fn test_ignores_other_schemes() {
        let req = TestRequest::default()
            .insert_header((AUTHORIZATION, "Basic YWxpY2U6c2VjcmV0"))
            .to_http_request();
        assert_eq!(extract_bearer_token(&req), None);

        let req = TestRequest::default().to_http_request();
        assert_eq!(extract_bearer_token(&req), None);
    }

    #[test]
    fn test_empty_bearer_is_absent() {
        let req = TestRequest::default()
            .insert_header((AUTHORIZATION, "Bearer "))
            .to_http_request();
        assert!(!BearerToken::new(extract_bearer_token(&req)).is_present());
    }
}
