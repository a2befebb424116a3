//! Access log. One line per answered request, carrying the matched route,
//! the record id when the route has one, and the caller resolved by
//! `AuthMiddleware`. Wrap this outside `AuthMiddleware` so the caller is
//! already in request extensions when the response comes back.

use std::rc::Rc;
use std::time::Instant;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{Error, HttpMessage};
use futures::future::{ok, LocalBoxFuture, Ready};
use tracing::{error, info, warn};

use outlook_core::types::access::Role;
use outlook_core::RecordId;

use super::auth::Caller;

/// What the access log records for one answered request.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestSummary {
    pub method: String,
    /// Matched route pattern, or the raw path when nothing matched.
    pub route: String,
    pub record_id: Option<RecordId>,
    pub user: Option<String>,
    pub role: Option<Role>,
    pub status: u16,
    pub duration_ms: u64,
}

impl RequestSummary {
    pub fn from_response<B>(res: &ServiceResponse<B>, duration_ms: u64) -> Self {
        let req = res.request();
        let caller = req.extensions().get::<Caller>().cloned();
        Self {
            method: req.method().to_string(),
            route: req.match_pattern().unwrap_or_else(|| req.path().to_string()),
            record_id: req.match_info().get("id").and_then(|id| id.parse().ok()),
            user: caller.as_ref().map(|c| c.user.clone()),
            role: caller.map(|c| c.role),
            status: res.status().as_u16(),
            duration_ms,
        }
    }

    fn emit(&self) {
        let user = self.user.as_deref().unwrap_or("-");
        let role = self.role.map_or("-", |r| r.as_str());
        let record_id = self.record_id;
        let (method, route, status, duration_ms) =
            (&self.method, &self.route, self.status, self.duration_ms);
        match status {
            500..=u16::MAX => error!(%method, %route, record_id, user, role, status, duration_ms, "request failed"),
            400..=499 => warn!(%method, %route, record_id, user, role, status, duration_ms, "request rejected"),
            _ => info!(%method, %route, record_id, user, role, status, duration_ms, "request served"),
        }
    }
}

pub struct LoggingMiddleware;

impl<S, B> Transform<S, ServiceRequest> for LoggingMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = LoggingMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(LoggingMiddlewareService {
            service: Rc::new(service),
        })
    }
}

pub struct LoggingMiddlewareService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for LoggingMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let start = Instant::now();
        // Only needed if the inner service fails before producing a response.
        let fallback = (req.method().to_string(), req.path().to_string());

        Box::pin(async move {
            let result = service.call(req).await;
            let duration_ms = start.elapsed().as_millis() as u64;
            match &result {
                Ok(res) => RequestSummary::from_response(res, duration_ms).emit(),
                Err(e) => {
                    let (method, path) = fallback;
                    error!(%method, %path, error = %e, duration_ms, "request errored before a response");
                }
            }
            result
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;
    use actix_web::HttpResponse;

    #[test]
    fn summary_carries_caller_and_record_id() {
        let req = TestRequest::delete()
            .uri("/api/students/7")
            .param("id", "7")
            .to_http_request();
        req.extensions_mut().insert(Caller {
            user: "registrar".to_string(),
            role: Role::Staff,
        });
        let res = ServiceResponse::new(req, HttpResponse::NoContent().finish());

        let summary = RequestSummary::from_response(&res, 3);
        assert_eq!(summary.method, "DELETE");
        assert_eq!(summary.route, "/api/students/7");
        assert_eq!(summary.record_id, Some(7));
        assert_eq!(summary.user.as_deref(), Some("registrar"));
        assert_eq!(summary.role, Some(Role::Staff));
        assert_eq!(summary.status, 204);
        assert_eq!(summary.duration_ms, 3);
    }

    #[test]
    fn anonymous_request_has_no_caller() {
        let req = TestRequest::get().uri("/health").to_http_request();
        let res = ServiceResponse::new(req, HttpResponse::Unauthorized().finish());

        let summary = RequestSummary::from_response(&res, 0);
        assert_eq!(summary.user, None);
        assert_eq!(summary.role, None);
        assert_eq!(summary.record_id, None);
        assert_eq!(summary.status, 401);
    }
}
