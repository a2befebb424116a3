//! Bearer-token authentication.
//!
//! The middleware resolves `Authorization: Bearer <token>` against the
//! configured token table and stores the resulting `Caller` in request
//! extensions. It never rejects on its own: handlers that need a caller
//! extract `Caller`, which answers 401 when none was resolved, and then
//! check the role with `Caller::require`.

use std::rc::Rc;
use std::sync::Arc;

use actix_web::dev::{forward_ready, Payload, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{HeaderMap, AUTHORIZATION};
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use futures::future::{ok, ready, LocalBoxFuture, Ready};
use tracing::debug;

use outlook_core::config::{AccessToken, ServerConfig};
use outlook_core::types::access::{role_allows, GatedAction, Role};

use crate::errors::AppError;

/// Authenticated caller stored in request extensions.
#[derive(Debug, Clone, PartialEq)]
pub struct Caller {
    pub user: String,
    pub role: Role,
}

impl Caller {
    /// 403 unless the caller's role grants `action`.
    pub fn require(&self, action: GatedAction) -> Result<(), AppError> {
        if role_allows(self.role, action) {
            Ok(())
        } else {
            Err(AppError::Forbidden {
                role: self.role,
                action,
            })
        }
    }
}

impl From<&AccessToken> for Caller {
    fn from(entry: &AccessToken) -> Self {
        Self {
            user: entry.user.clone(),
            role: entry.role,
        }
    }
}

impl FromRequest for Caller {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(
            req.extensions()
                .get::<Caller>()
                .cloned()
                .ok_or(AppError::Unauthenticated),
        )
    }
}

/// Authentication middleware
pub struct AuthMiddleware {
    server: Arc<ServerConfig>,
}

impl AuthMiddleware {
    pub fn new(server: Arc<ServerConfig>) -> Self {
        Self { server }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(AuthMiddlewareService {
            service: Rc::new(service),
            server: Arc::clone(&self.server),
        })
    }
}

pub struct AuthMiddlewareService<S> {
    service: Rc<S>,
    server: Arc<ServerConfig>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let caller = match bearer_token(req.headers()) {
            Some(token) => {
                let found = self.server.lookup_token(token).map(Caller::from);
                if found.is_none() {
                    debug!(path = %req.path(), "unknown bearer token");
                }
                found
            }
            None => None,
        };
        if let Some(caller) = caller {
            req.extensions_mut().insert(caller);
        }

        let service = Rc::clone(&self.service);
        Box::pin(async move { service.call(req).await })
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
}
