//! Session model: claims issued by the external auth service.

use std::future::{Ready, ready};

use actix_identity::Identity;
use actix_web::dev::Payload;
use actix_web::error::ErrorUnauthorized;
use actix_web::{FromRequest, HttpRequest, web};
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};

use crate::models::config::ServerConfig;

/// Claims carried in the auth service's session JWT.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// Account id at the auth service.
    pub sub: String,
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub roles: Vec<String>,
    pub exp: usize,
    /// Raw token as issued; forwarded to the backend as the session cookie.
    #[serde(skip)]
    pub token: String,
}

impl AuthenticatedUser {
    /// Decodes and verifies a session token with the shared secret.
    pub fn from_token(token: &str, secret: &str) -> Option<Self> {
        let key = DecodingKey::from_secret(secret.as_bytes());
        let data =
            decode::<AuthenticatedUser>(token, &key, &Validation::new(Algorithm::HS256)).ok()?;
        let mut user = data.claims;
        user.token = token.to_string();
        Some(user)
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let user = Identity::from_request(req, payload)
            .into_inner()
            .ok()
            .and_then(|identity| identity.id().ok())
            .and_then(|token| {
                let config = req.app_data::<web::Data<ServerConfig>>()?;
                AuthenticatedUser::from_token(&token, &config.secret)
            });

        ready(user.ok_or_else(|| ErrorUnauthorized("Unauthorized")))
    }
}
