#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, Response},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use findit_api::{app, config::AppConfig, AppState};

const BOUNDARY: &str = "test-boundary-7MA4YWxkTrZu0gW";

/// Harness spinning up the full router over fresh in-memory stores and a
/// throwaway upload directory.
pub struct TestApp {
    router: Router,
    pub state: AppState,
    _upload_root: tempfile::TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_config(AppConfig::default()).await
    }

    pub async fn with_config(mut cfg: AppConfig) -> Self {
        let tmp = tempfile::tempdir().expect("failed to create temp dir");
        cfg.upload_dir = tmp
            .path()
            .join("uploads")
            .to_string_lossy()
            .into_owned();

        let state = AppState::new(cfg);
        state.uploads.ensure_dir().await.expect("upload dir");

        Self {
            router: app(state.clone()),
            state,
            _upload_root: tmp,
        }
    }

    /// Fire a request with an optional JSON body.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        json: Option<Value>,
    ) -> Response<Body> {
        let mut builder = Request::builder().method(method).uri(path);
        let body = match json {
            Some(value) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(value.to_string())
            }
            None => Body::empty(),
        };

        self.router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap()
    }

    /// Fire a multipart/form-data POST with text fields and an optional
    /// `image` file part.
    pub async fn multipart(
        &self,
        path: &str,
        fields: &[(&str, &str)],
        file: Option<(&str, &[u8])>,
    ) -> Response<Body> {
        let mut body: Vec<u8> = Vec::new();
        for (name, value) in fields {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
                )
                .as_bytes(),
            );
        }
        if let Some((filename, bytes)) = file {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"image\"; filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
                )
                .as_bytes(),
            );
            body.extend_from_slice(bytes);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

        let request = Request::builder()
            .method(Method::POST)
            .uri(path)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap();

        self.router.clone().oneshot(request).await.unwrap()
    }

    /// Decode a response body as JSON.
    pub async fn json(response: Response<Body>) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }
}
