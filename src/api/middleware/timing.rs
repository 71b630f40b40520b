//! HTTP timing middleware
//!
//! 记录每个请求的耗时与状态码，按端点类别分组输出到 tracing。

use actix_service::{Service, Transform};
use actix_web::{
    Error,
    dev::{ServiceRequest, ServiceResponse},
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::rc::Rc;
use std::time::Instant;
use tracing::{debug, warn};

/// 超过该耗时的请求以 warn 级别记录
const SLOW_REQUEST_MS: u128 = 500;

/// HTTP timing middleware factory
#[derive(Clone)]
pub struct TimingMiddleware {
    api_prefix: Rc<str>,
    health_prefix: Rc<str>,
}

impl TimingMiddleware {
    pub fn new(api_prefix: &str, health_prefix: &str) -> Self {
        Self {
            api_prefix: Rc::from(api_prefix),
            health_prefix: Rc::from(health_prefix),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for TimingMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = TimingService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(TimingService {
            service: Rc::new(service),
            api_prefix: self.api_prefix.clone(),
            health_prefix: self.health_prefix.clone(),
        }))
    }
}

pub struct TimingService<S> {
    service: Rc<S>,
    api_prefix: Rc<str>,
    health_prefix: Rc<str>,
}

impl<S, B> Service<ServiceRequest> for TimingService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        let start = Instant::now();
        let method = req.method().clone();
        let endpoint = classify_endpoint(req.path(), &self.api_prefix, &self.health_prefix);

        Box::pin(async move {
            let result = srv.call(req).await;

            let elapsed = start.elapsed();
            let status = match &result {
                Ok(response) => response.status().as_u16(),
                Err(_) => 500,
            };

            if elapsed.as_millis() >= SLOW_REQUEST_MS {
                warn!(
                    "Slow request: {} {} -> {} in {:?}",
                    method, endpoint, status, elapsed
                );
            } else {
                debug!("{} {} -> {} in {:?}", method, endpoint, status, elapsed);
            }

            result
        })
    }
}

/// Classify request path into endpoint category
pub fn classify_endpoint(path: &str, api_prefix: &str, health_prefix: &str) -> &'static str {
    if path.starts_with(api_prefix) {
        "api"
    } else if path.starts_with(health_prefix) {
        "health"
    } else {
        "other"
    }
}
