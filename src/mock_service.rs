//! Mock tower service answering kube API requests with canned responses

use bytes::Bytes;
use futures::future::{BoxFuture, FutureExt};
use http::{Method, Request, Response, StatusCode};
use http_body_util::Full;
use kube::client::Body as KubeBody;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use tower::Service;

const APPLICATIONS_PREFIX: &str = "/apis/app.k8s.io/v1beta1";

/// Mock HTTP service serving fixed GET responses by path
#[derive(Clone, Default)]
pub struct MockService {
    routes: Arc<HashMap<String, (StatusCode, Value)>>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockService {
    pub fn new() -> Self {
        Self::default()
    }

    fn route(mut self, path: String, status: StatusCode, body: Value) -> Self {
        Arc::make_mut(&mut self.routes).insert(path, (status, body));
        self
    }

    /// Serve `app` at its namespaced GET path
    pub fn with_application(self, namespace: &str, name: &str, app: Value) -> Self {
        self.route(
            format!("{APPLICATIONS_PREFIX}/namespaces/{namespace}/applications/{name}"),
            StatusCode::OK,
            app,
        )
    }

    /// Fail the namespaced GET of `name` with a Kubernetes `Status` body
    pub fn with_application_error(self, namespace: &str, name: &str, status: StatusCode) -> Self {
        self.route(
            format!("{APPLICATIONS_PREFIX}/namespaces/{namespace}/applications/{name}"),
            status,
            Self::status_body(status, &format!("applications \"{name}\" request failed")),
        )
    }

    /// Serve a list in `namespace`, or cluster-wide when `None`
    pub fn with_application_list(self, namespace: Option<&str>, items: Vec<Value>) -> Self {
        let body = json!({
            "apiVersion": "app.k8s.io/v1beta1",
            "kind": "ApplicationList",
            "metadata": { "resourceVersion": "1" },
            "items": items,
        });
        self.route(Self::list_path(namespace), StatusCode::OK, body)
    }

    pub fn with_application_list_error(self, namespace: Option<&str>, status: StatusCode) -> Self {
        let body = Self::status_body(status, "applications list request failed");
        self.route(Self::list_path(namespace), status, body)
    }

    /// Paths requested so far, in order
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }

    pub fn into_client(self) -> kube::Client {
        kube::Client::new(self, "default")
    }

    fn list_path(namespace: Option<&str>) -> String {
        match namespace {
            Some(ns) => format!("{APPLICATIONS_PREFIX}/namespaces/{ns}/applications"),
            None => format!("{APPLICATIONS_PREFIX}/applications"),
        }
    }

    fn status_body(status: StatusCode, message: &str) -> Value {
        json!({
            "kind": "Status",
            "apiVersion": "v1",
            "status": "Failure",
            "message": message,
            "reason": status.canonical_reason().unwrap_or_default().replace(' ', ""),
            "code": status.as_u16()
        })
    }

    fn handle_request(&self, req: Request<KubeBody>) -> Response<Full<Bytes>> {
        let path = req.uri().path().to_string();
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(path.clone());
        }

        if req.method() != Method::GET {
            return Self::response(
                StatusCode::METHOD_NOT_ALLOWED,
                &Self::status_body(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed"),
            );
        }

        match self.routes.get(&path) {
            Some((status, body)) => Self::response(*status, body),
            None => Self::response(
                StatusCode::NOT_FOUND,
                &Self::status_body(StatusCode::NOT_FOUND, &format!("{path} not found")),
            ),
        }
    }

    fn response(status: StatusCode, body: &Value) -> Response<Full<Bytes>> {
        let mut response = Response::new(Full::new(Bytes::from(body.to_string())));
        *response.status_mut() = status;
        response.headers_mut().insert(
            http::header::CONTENT_TYPE,
            http::HeaderValue::from_static("application/json"),
        );
        response
    }
}

impl Service<Request<KubeBody>> for MockService {
    type Response = Response<Full<Bytes>>;
    type Error = Box<dyn std::error::Error + Send + Sync>;
    type Future = BoxFuture<'static, std::result::Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<std::result::Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<KubeBody>) -> Self::Future {
        let response = self.handle_request(req);
        async move { Ok(response) }.boxed()
    }
}
