use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Instant;

use http::{HeaderValue, Request, Response};
use tower::{Layer, Service};
use tracing::{info, warn};

use crate::metrics::generate_request_id;

/// Response header carrying the request correlation id.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// A Tower layer that logs HTTP requests and responses.
#[derive(Clone, Copy)]
pub struct HttpLoggingLayer;

impl<S> Layer<S> for HttpLoggingLayer {
    type Service = HttpLoggingService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        HttpLoggingService { inner }
    }
}

/// A Tower service that logs HTTP requests and stamps each response with
/// an `x-request-id` header.
#[derive(Clone)]
pub struct HttpLoggingService<S> {
    inner: S,
}

impl<S, ReqBody, ResBody> Service<Request<ReqBody>> for HttpLoggingService<S>
where
    S: Service<Request<ReqBody>, Response = Response<ResBody>> + Clone + Send + 'static,
    S::Future: Send,
    ReqBody: Send + 'static,
    ResBody: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<ReqBody>) -> Self::Future {
        let start = Instant::now();
        let method = req.method().clone();
        let path = req.uri().path().to_string();
        let request_id = generate_request_id();

        info!(
            http.method = %method,
            http.path = %path,
            request_id = %request_id,
            "HTTP request started"
        );

        // The clone may not be ready; call the instance that was polled.
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);
        Box::pin(async move {
            let mut result = inner.call(req).await;
            let duration_ms = start.elapsed().as_millis();

            match &mut result {
                Ok(response) => {
                    if let Ok(value) = HeaderValue::from_str(&request_id) {
                        response.headers_mut().insert(REQUEST_ID_HEADER, value);
                    }
                    info!(
                        http.method = %method,
                        http.path = %path,
                        http.status = %response.status().as_u16(),
                        request_id = %request_id,
                        duration_ms = %duration_ms,
                        "HTTP request completed"
                    );
                }
                Err(_) => {
                    warn!(
                        http.method = %method,
                        http.path = %path,
                        request_id = %request_id,
                        duration_ms = %duration_ms,
                        "HTTP request failed"
                    );
                }
            }

            result
        })
    }
}
