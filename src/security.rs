/// Security header middleware.
///
/// Attaches a fixed header set to every outgoing response, success and
/// error alike. Handler errors are rendered into responses before they
/// reach this middleware, so the headers land on 4xx/5xx bodies too.

use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header::{HeaderName, HeaderValue},
    Error,
};
use futures::future::LocalBoxFuture;

/// Header names must be lowercase for `HeaderName::from_static`.
pub const SECURITY_HEADERS: [(&str, &str); 6] = [
    ("x-frame-options", "DENY"),
    ("x-content-type-options", "nosniff"),
    ("referrer-policy", "strict-origin-when-cross-origin"),
    ("permissions-policy", "camera=(), microphone=(), geolocation=()"),
    ("cross-origin-opener-policy", "same-origin"),
    ("cross-origin-resource-policy", "same-origin"),
];

pub struct SecurityHeaders;

impl<S, B> Transform<S, ServiceRequest> for SecurityHeaders
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = SecurityHeadersService<S>;
    type Future = std::future::Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        std::future::ready(Ok(SecurityHeadersService { service }))
    }
}

pub struct SecurityHeadersService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for SecurityHeadersService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let fut = self.service.call(req);

        Box::pin(async move {
            let mut res = fut.await?;

            let headers = res.headers_mut();
            for (name, value) in SECURITY_HEADERS {
                // insert overwrites, so reapplication stays idempotent
                headers.insert(
                    HeaderName::from_static(name),
                    HeaderValue::from_static(value),
                );
            }

            Ok(res)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, web, App, HttpResponse};

    #[::core::prelude::v1::test]
    fn header_set_is_complete() {
        let names: Vec<_> = SECURITY_HEADERS.iter().map(|(name, _)| *name).collect();

        assert!(names.contains(&"x-frame-options"));
        assert!(names.contains(&"x-content-type-options"));
        assert!(names.contains(&"referrer-policy"));
        assert!(names.contains(&"permissions-policy"));
        assert!(names.contains(&"cross-origin-opener-policy"));
        assert!(names.contains(&"cross-origin-resource-policy"));
    }

    #[::core::prelude::v1::test]
    fn header_values_parse_as_static() {
        for (name, value) in SECURITY_HEADERS {
            let _ = HeaderName::from_static(name);
            let _ = HeaderValue::from_static(value);
        }
    }

    #[actix_web::test]
    async fn headers_attached_to_plain_response() {
        let app = test::init_service(
            App::new()
                .wrap(SecurityHeaders)
                .route("/", web::get().to(|| async { HttpResponse::Ok().finish() })),
        )
        .await;

        let res = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;

        assert_eq!(
            res.headers().get("x-frame-options").unwrap(),
            HeaderValue::from_static("DENY")
        );
        assert_eq!(
            res.headers().get("cross-origin-resource-policy").unwrap(),
            HeaderValue::from_static("same-origin")
        );
    }
}
