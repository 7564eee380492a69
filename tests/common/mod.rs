//! Shared helpers for the HTTP integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use mindwell::content::Catalog;
use mindwell::i18n::Locale;
use mindwell::referral::{
    ApplyOutcome, MemoryReferralStore, ReferralError, ReferralStats, ReferralStore,
};
use mindwell::server::{create_app, AppState};
use serde_json::Value;
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;
use tracing::subscriber::DefaultGuard;

/// Store returning fixed answers and counting calls.
pub struct StubStore {
    pub code: String,
    pub outcome: ApplyOutcome,
    pub stats: ReferralStats,
    pub calls: AtomicUsize,
}

impl StubStore {
    pub fn new(outcome: ApplyOutcome) -> Self {
        let mut stats = ReferralStats::empty("u1");
        stats.referral_code = Some("STUB2345".to_string());
        stats.total_referrals = 3;
        stats.reward_points = 300;
        Self {
            code: "STUB2345".to_string(),
            outcome,
            stats,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ReferralStore for StubStore {
    async fn assign_referral_code(&self, _user_id: &str) -> Result<String, ReferralError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.code.clone())
    }

    async fn apply_referral_code(
        &self,
        _user_id: &str,
        _code: &str,
    ) -> Result<ApplyOutcome, ReferralError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.outcome)
    }

    async fn get_referral_stats(&self, _user_id: &str) -> Result<ReferralStats, ReferralError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.stats.clone())
    }
}

/// Store whose every call fails with the given message.
pub struct FailingStore(pub String);

#[async_trait]
impl ReferralStore for FailingStore {
    async fn assign_referral_code(&self, _user_id: &str) -> Result<String, ReferralError> {
        Err(ReferralError::Storage(self.0.clone()))
    }

    async fn apply_referral_code(
        &self,
        _user_id: &str,
        _code: &str,
    ) -> Result<ApplyOutcome, ReferralError> {
        Err(ReferralError::Storage(self.0.clone()))
    }

    async fn get_referral_stats(&self, _user_id: &str) -> Result<ReferralStats, ReferralError> {
        Err(ReferralError::Storage(self.0.clone()))
    }
}

pub fn app_with(store: Arc<dyn ReferralStore>) -> Router {
    create_app(AppState::new(store, Catalog::get(), Locale::Ko))
}

pub fn memory_app() -> Router {
    app_with(Arc::new(MemoryReferralStore::new(100)))
}

pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.expect("request should complete");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    post_raw(app, uri, body.to_string()).await
}

pub async fn post_raw(app: &Router, uri: &str, body: String) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

/// Collects formatted log lines written while its guard is held.
#[derive(Clone, Default)]
pub struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl LogCapture {
    /// Installs a subscriber for the current thread. `#[tokio::test]` runs
    /// handlers on that same thread, so their events land here.
    pub fn install() -> (Self, DefaultGuard) {
        let capture = LogCapture::default();
        let writer = capture.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .without_time()
            .with_max_level(tracing::Level::ERROR)
            .finish();
        let guard = tracing::subscriber::set_default(subscriber);
        (capture, guard)
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
