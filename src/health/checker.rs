// src/health/checker.rs
use crate::health::Status;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde_json::Value;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::debug;
use url::Url;

/// Raw answer from the backend's health endpoint.
#[derive(Debug, Clone)]
pub struct HealthReport {
    pub status_code: u16,
    pub body: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("Backend unreachable: {0}")]
    Unreachable(String),

    #[error("Malformed health response: {0}")]
    Malformed(String),
}

/// Why a probe ended `Offline`. Never shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OfflineReason {
    Unreachable,
    Unhealthy,
    Malformed,
}

impl OfflineReason {
    pub fn as_str(self) -> &'static str {
        match self {
            OfflineReason::Unreachable => "unreachable",
            OfflineReason::Unhealthy => "unhealthy",
            OfflineReason::Malformed => "malformed",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProbeOutcome {
    pub status: Status,
    pub reason: Option<OfflineReason>,
    pub checked_at: DateTime<Utc>,
    pub elapsed: Duration,
}

impl ProbeOutcome {
    pub fn from_result(result: &Result<HealthReport, ProbeError>, elapsed: Duration) -> Self {
        let (status, reason) = classify(result);
        Self {
            status,
            reason,
            checked_at: Utc::now(),
            elapsed,
        }
    }
}

#[async_trait]
pub trait HealthSource: Send + Sync {
    async fn fetch(&self, url: &Url) -> Result<HealthReport, ProbeError>;

    fn name(&self) -> &'static str;
}

/// `reqwest` backed source. No request timeout is configured: a backend
/// that never answers keeps the probe pending.
#[derive(Debug, Clone)]
pub struct HttpHealthSource {
    client: Client,
}

impl HttpHealthSource {
    pub fn new() -> reqwest::Result<Self> {
        let client = Client::builder().build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HealthSource for HttpHealthSource {
    async fn fetch(&self, url: &Url) -> Result<HealthReport, ProbeError> {
        let response = self
            .client
            .get(url.as_str())
            .send()
            .await
            .map_err(|e| ProbeError::Unreachable(e.to_string()))?;

        let status_code = response.status().as_u16();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ProbeError::Unreachable(e.to_string()))?;

        let body = serde_json::from_slice(&bytes)
            .map_err(|e| ProbeError::Malformed(e.to_string()))?;

        Ok(HealthReport { status_code, body })
    }

    fn name(&self) -> &'static str {
        "http"
    }
}

/// Map a fetch result onto a terminal status. The HTTP status code is
/// ignored; only the body's `ok` field decides.
pub fn classify(result: &Result<HealthReport, ProbeError>) -> (Status, Option<OfflineReason>) {
    match result {
        Ok(report) => match &report.body {
            Value::Object(fields) => {
                if fields.get("ok").map_or(false, is_truthy) {
                    (Status::Online, None)
                } else {
                    (Status::Offline, Some(OfflineReason::Unhealthy))
                }
            }
            _ => (Status::Offline, Some(OfflineReason::Malformed)),
        },
        Err(ProbeError::Unreachable(_)) => (Status::Offline, Some(OfflineReason::Unreachable)),
        Err(ProbeError::Malformed(_)) => (Status::Offline, Some(OfflineReason::Malformed)),
    }
}

/// Loose truthiness for the `ok` flag, so `1` or `"yes"` count as healthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(false, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// One configured health endpoint plus the source used to reach it.
pub struct HealthProbe {
    url: Url,
    source: Arc<dyn HealthSource>,
}

impl HealthProbe {
    pub fn new(url: Url, source: Arc<dyn HealthSource>) -> Self {
        Self { url, source }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Issue the request and classify it. Failures are folded into the
    /// outcome and never returned as errors.
    pub async fn check(&self, probe_id: &str) -> ProbeOutcome {
        let start = Instant::now();
        let result = self.source.fetch(&self.url).await;
        let outcome = ProbeOutcome::from_result(&result, start.elapsed());

        match &result {
            Ok(report) => debug!(
                probe_id,
                source = self.source.name(),
                url = %self.url,
                status_code = report.status_code,
                status = outcome.status.as_str(),
                "Health probe answered"
            ),
            Err(e) => debug!(
                probe_id,
                source = self.source.name(),
                url = %self.url,
                error = %e,
                "Health probe failed"
            ),
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn report(body: Value) -> Result<HealthReport, ProbeError> {
        Ok(HealthReport {
            status_code: 200,
            body,
        })
    }

    #[test]
    fn test_ok_true_is_online() {
        assert_eq!(classify(&report(json!({"ok": true}))), (Status::Online, None));
        assert_eq!(
            classify(&report(json!({"ok": true, "service": "ai-code-review-bot"}))),
            (Status::Online, None)
        );
    }

    #[test]
    fn test_ok_false_or_missing_is_unhealthy() {
        let unhealthy = (Status::Offline, Some(OfflineReason::Unhealthy));
        assert_eq!(classify(&report(json!({"ok": false}))), unhealthy);
        assert_eq!(classify(&report(json!({"status": "healthy"}))), unhealthy);
        assert_eq!(classify(&report(json!({"ok": null}))), unhealthy);
    }

    #[test]
    fn test_status_code_does_not_matter() {
        let result = Ok(HealthReport {
            status_code: 503,
            body: json!({"ok": true}),
        });
        assert_eq!(classify(&result).0, Status::Online);
    }

    #[test]
    fn test_errors_and_non_objects_are_offline() {
        assert_eq!(
            classify(&Err(ProbeError::Unreachable("connection refused".into()))),
            (Status::Offline, Some(OfflineReason::Unreachable))
        );
        assert_eq!(
            classify(&Err(ProbeError::Malformed("expected value".into()))),
            (Status::Offline, Some(OfflineReason::Malformed))
        );
        assert_eq!(
            classify(&report(Value::Null)),
            (Status::Offline, Some(OfflineReason::Malformed))
        );
        assert_eq!(classify(&report(json!([true]))).0, Status::Offline);
    }

    #[test]
    fn test_truthiness() {
        assert!(is_truthy(&json!(1)));
        assert!(is_truthy(&json!(-0.5)));
        assert!(is_truthy(&json!("yes")));
        assert!(is_truthy(&json!([])));
        assert!(is_truthy(&json!({})));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(0.0)));
        assert!(!is_truthy(&json!("")));
        assert!(!is_truthy(&Value::Null));
    }

    proptest! {
        #[test]
        fn prop_bool_flag_decides(ok in any::<bool>(), extra in "[a-z]{1,8}") {
            let key = format!("x_{}", extra);
            let (status, _) = classify(&report(json!({"ok": ok, key: "x"})));
            prop_assert_eq!(status == Status::Online, ok);
        }

        #[test]
        fn prop_string_flag_online_iff_non_empty(ok in ".{0,12}") {
            let (status, _) = classify(&report(json!({"ok": ok.clone()})));
            prop_assert_eq!(status == Status::Online, !ok.is_empty());
        }

        #[test]
        fn prop_never_checking(code in 100u16..600, key in "[a-z]{1,6}", n in any::<i64>()) {
            let result = Ok(HealthReport { status_code: code, body: json!({key: n}) });
            prop_assert!(classify(&result).0.is_terminal());
        }
    }
}
