use actix_web::{
    body::BoxBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error,
};
use futures_util::future::{ok, LocalBoxFuture, Ready};
use std::{
    rc::Rc,
    task::{Context, Poll},
};

use crate::utils::client_ip::client_ip;

/// Logs method, path, matched operation, query string and caller address
/// before every endpoint invocation. Observation only: the request is
/// always forwarded untouched.
pub struct RequestLog;

impl<S> Transform<S, ServiceRequest> for RequestLog
where
    S: Service<ServiceRequest, Response = ServiceResponse<BoxBody>, Error = Error> + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type InitError = ();
    type Transform = RequestLogService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(RequestLogService {
            service: Rc::new(service),
        })
    }
}

pub struct RequestLogService<S> {
    service: Rc<S>,
}

impl<S> Service<ServiceRequest> for RequestLogService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<BoxBody>, Error = Error> + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        let ip = client_ip(&req);
        let operation = req
            .match_name()
            .map(str::to_string)
            .or_else(|| req.match_pattern())
            .unwrap_or_else(|| "-".to_string());

        tracing::info!(
            method = %req.method(),
            path = %req.path(),
            operation = %operation,
            query = %req.query_string(),
            ip = %ip,
            "request"
        );

        Box::pin(async move { service.call(req).await })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, web, App, HttpResponse};

    #[actix_rt::test]
    async fn request_passes_through_unchanged() {
        let app = test::init_service(
            App::new().wrap(RequestLog).route(
                "/ping",
                web::get().to(|| async { HttpResponse::Ok().body("pong") }),
            ),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/ping?debug=1")
            .insert_header(("x-forwarded-for", "203.0.113.9"))
            .to_request();
        let body = test::call_and_read_body(&app, req).await;

        assert_eq!(body, "pong");
    }
}
