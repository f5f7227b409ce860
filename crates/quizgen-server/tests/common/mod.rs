//! Shared fixtures for the HTTP tests.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::body::{to_bytes, Body};
use axum::extract::ConnectInfo;
use axum::http::{header, Request, Response};
use axum::Router;
use futures::future::BoxFuture;
use serde_json::Value;

use quizgen_core::mock::mock_questions;
use quizgen_core::models::question::Question;
use quizgen_llm::error::LlmError;
use quizgen_llm::generator::QuestionGenerator;
use quizgen_pdf::error::PdfError;
use quizgen_pdf::extract::TextExtractor;
use quizgen_server::middleware::rate_limit::RateLimiter;
use quizgen_server::state::AppState;

pub const BOUNDARY: &str = "quizgen-test-boundary";

/// Generator that records its inputs and answers with mock questions.
#[derive(Default)]
pub struct StubGenerator {
    pub calls: AtomicUsize,
    pub last: Mutex<Option<(String, usize)>>,
    pub fail: bool,
}

impl StubGenerator {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl QuestionGenerator for StubGenerator {
    fn generate<'a>(
        &'a self,
        text: &'a str,
        count: usize,
    ) -> BoxFuture<'a, Result<Vec<Question>, LlmError>> {
        Box::pin(async move {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last.lock().unwrap() = Some((text.to_string(), count));
            if self.fail {
                return Err(LlmError::EmptyResponse);
            }
            Ok(mock_questions(count))
        })
    }
}

/// Extractor returning canned text, or an error when `text` is `None`.
///
/// With `echo` set it returns the uploaded bytes as text instead.
#[derive(Default)]
pub struct StubExtractor {
    pub text: Option<String>,
    pub echo: bool,
    pub seen: Mutex<Vec<Vec<u8>>>,
}

impl StubExtractor {
    pub fn returning(text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self::default()
    }

    pub fn echo() -> Self {
        Self {
            echo: true,
            ..Self::default()
        }
    }
}

impl TextExtractor for StubExtractor {
    fn extract(&self, bytes: Vec<u8>) -> BoxFuture<'_, Result<String, PdfError>> {
        Box::pin(async move {
            if self.echo {
                return Ok(String::from_utf8_lossy(&bytes).into_owned());
            }
            self.seen.lock().unwrap().push(bytes);
            self.text
                .clone()
                .ok_or_else(|| PdfError::Extraction("unreadable document".to_string()))
        })
    }
}

pub struct TestApp {
    pub router: Router,
    pub generator: Arc<StubGenerator>,
    pub extractor: Arc<StubExtractor>,
    pub upload_dir: tempfile::TempDir,
    pub public_dir: tempfile::TempDir,
}

pub struct Options {
    pub generator: StubGenerator,
    pub extractor: StubExtractor,
    pub max_upload_bytes: usize,
    pub limiter: RateLimiter,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            generator: StubGenerator::default(),
            extractor: StubExtractor::returning("Cells divide by mitosis."),
            max_upload_bytes: 1024 * 1024,
            limiter: RateLimiter::default(),
        }
    }
}

pub fn app() -> TestApp {
    app_with(Options::default())
}

pub fn app_with(options: Options) -> TestApp {
    let upload_dir = tempfile::tempdir().unwrap();
    let public_dir = tempfile::tempdir().unwrap();
    std::fs::write(
        public_dir.path().join("index.html"),
        "<h1>PDF Question Generator</h1>",
    )
    .unwrap();

    let generator = Arc::new(options.generator);
    let extractor = Arc::new(options.extractor);

    let state = AppState {
        generator: generator.clone(),
        extractor: extractor.clone(),
        upload_dir: upload_dir.path().join("uploads"),
        max_upload_bytes: options.max_upload_bytes,
        limiter: options.limiter,
    };

    TestApp {
        router: quizgen_server::router(state, public_dir.path()),
        generator,
        extractor,
        upload_dir,
        public_dir,
    }
}

/// Multipart part for the request builder.
pub enum Part<'a> {
    File {
        name: &'a str,
        filename: &'a str,
        content_type: &'a str,
        data: &'a [u8],
    },
    Text {
        name: &'a str,
        value: &'a str,
    },
}

pub fn multipart_body(parts: &[Part<'_>]) -> Vec<u8> {
    let mut body = Vec::new();

    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match part {
            Part::File {
                name,
                filename,
                content_type,
                data,
            } => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\n\
                         Content-Type: {content_type}\r\n\r\n"
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(data);
            }
            Part::Text { name, value } => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}")
                        .as_bytes(),
                );
            }
        }
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

pub fn upload_request(parts: &[Part<'_>]) -> Request<Body> {
    upload_request_from(parts, "203.0.113.7:50000")
}

pub fn upload_request_from(parts: &[Part<'_>], peer: &str) -> Request<Body> {
    let mut req = Request::post("/api/upload")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(multipart_body(parts)))
        .unwrap();
    let peer: SocketAddr = peer.parse().unwrap();
    req.extensions_mut().insert(ConnectInfo(peer));
    req
}

pub fn pdf_part(data: &[u8]) -> Part<'_> {
    Part::File {
        name: "pdf",
        filename: "notes.pdf",
        content_type: "application/pdf",
        data,
    }
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub fn files_in(dir: &Path) -> usize {
    match std::fs::read_dir(dir) {
        Ok(entries) => entries.count(),
        Err(_) => 0,
    }
}
