//! Identity issued by the external auth service.
//!
//! The application never manages credentials itself. The auth service sets a
//! signed JWT which is kept in the identity cookie; handlers only consume the
//! user id for audit columns.

use std::future::{Ready, ready};

use actix_identity::Identity;
use actix_web::dev::Payload;
use actix_web::error::{ErrorInternalServerError, ErrorUnauthorized};
use actix_web::{FromRequest, HttpRequest, web};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::models::config::ServerConfig;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// User id assigned by the auth service.
    pub sub: String,
    pub email: String,
    pub name: String,
    /// Expiration timestamp (seconds since epoch).
    pub exp: usize,
}

impl AuthenticatedUser {
    pub fn to_jwt(&self, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
        encode(
            &Header::default(),
            self,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
    }

    pub fn from_jwt(token: &str, secret: &str) -> Result<Self, jsonwebtoken::errors::Error> {
        let data = decode::<AuthenticatedUser>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::new(Algorithm::HS256),
        )?;
        Ok(data.claims)
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let identity = Identity::from_request(req, payload).into_inner();
        let config = req.app_data::<web::Data<ServerConfig>>().cloned();

        ready((|| {
            let identity = identity.map_err(|_| ErrorUnauthorized("Not authenticated"))?;
            let token = identity
                .id()
                .map_err(|_| ErrorUnauthorized("Not authenticated"))?;
            let config = config.ok_or_else(|| ErrorInternalServerError("Missing server config"))?;
            AuthenticatedUser::from_jwt(&token, &config.secret)
                .map_err(|_| ErrorUnauthorized("Not authenticated"))
        })())
    }
}
