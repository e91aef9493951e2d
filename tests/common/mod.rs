//! Local HTTP stub standing in for the translator service

#![allow(dead_code)]

use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::{HeaderMap, Method, Response, StatusCode, Uri};
use axum::Router;
use std::sync::{Arc, Mutex};

use language_translator::{LanguageTranslator, TranslatorConfig};

/// Path prefix the stub serves under, mirroring the real service
pub const API_PREFIX: &str = "/language-translator/api/v2";

/// What the stub saw for one request
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn body_text(&self) -> String {
        String::from_utf8(self.body.clone()).expect("request body is not utf-8")
    }
}

#[derive(Clone)]
struct StubState {
    status: StatusCode,
    headers: Vec<(String, String)>,
    body: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// Answers every request with one canned response and records it
pub struct StubServer {
    pub url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl StubServer {
    pub async fn start(status: u16, headers: &[(&str, &str)], body: impl Into<String>) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = StubState {
            status: StatusCode::from_u16(status).unwrap(),
            headers: headers
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            body: body.into(),
            requests: requests.clone(),
        };

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = Router::new().fallback(record).with_state(state);
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            url: format!("http://{}{}", addr, API_PREFIX),
            requests,
        }
    }

    /// Stub answering with a JSON body and `Content-Type: application/json`
    pub async fn json(status: u16, body: &serde_json::Value) -> Self {
        Self::start(status, &[("Content-Type", "application/json")], body.to_string()).await
    }

    /// Client authenticated as `username`/`password` pointed at this stub
    pub fn client(&self) -> LanguageTranslator {
        self.client_with(TranslatorConfig::with_credentials("username", "password"))
    }

    pub fn client_with(&self, config: TranslatorConfig) -> LanguageTranslator {
        LanguageTranslator::new(config.with_url(self.url.clone())).unwrap()
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// The only request received so far
    pub fn single_request(&self) -> RecordedRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request, got {:?}", requests);
        requests.into_iter().next().unwrap()
    }
}

async fn record(
    State(state): State<StubState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response<Body> {
    state.requests.lock().unwrap().push(RecordedRequest {
        method,
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        headers,
        body: body.to_vec(),
    });

    let mut builder = Response::builder().status(state.status);
    for (name, value) in &state.headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder.body(Body::from(state.body.clone())).unwrap()
}

/// Headers every authenticated JSON call must carry
pub fn assert_standard_headers(request: &RecordedRequest) {
    assert_eq!(request.header("Accept"), Some("application/json"));
    assert_eq!(
        request.header("Authorization"),
        Some("Basic dXNlcm5hbWU6cGFzc3dvcmQ=")
    );
}
