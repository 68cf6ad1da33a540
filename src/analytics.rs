//! Fire-and-forget page analytics. Nothing here can fail the page: sink
//! errors are logged and dropped.

use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyticsEvent {
    pub category: String,
    pub action: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hit {
    PageView { page: String },
    Event(AnalyticsEvent),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyticsError {
    #[error("analytics is not loaded")]
    Unavailable,
    #[error("analytics call failed: {0}")]
    Rejected(String),
}

pub trait AnalyticsSink: Send + Sync {
    fn send(&self, hit: &Hit) -> Result<(), AnalyticsError>;
}

/// Writes hits to the log; used during server rendering and when no
/// measurement id is configured.
pub struct LogSink;

impl AnalyticsSink for LogSink {
    fn send(&self, hit: &Hit) -> Result<(), AnalyticsError> {
        match hit {
            Hit::PageView { page } => log::debug!("pageview {page}"),
            Hit::Event(e) => log::debug!(
                "event {}/{} {}",
                e.category,
                e.action,
                e.label.as_deref().unwrap_or("-")
            ),
        }
        Ok(())
    }
}

#[derive(Clone)]
pub struct Analytics {
    sink: Arc<dyn AnalyticsSink>,
}

impl Analytics {
    pub fn new(sink: impl AnalyticsSink + 'static) -> Self {
        Self {
            sink: Arc::new(sink),
        }
    }

    fn dispatch(&self, hit: Hit) {
        if let Err(e) = self.sink.send(&hit) {
            log::debug!("dropped analytics hit {hit:?}: {e}");
        }
    }

    pub fn page_view(&self, page: &str) {
        self.dispatch(Hit::PageView {
            page: page.to_string(),
        });
    }

    pub fn event(&self, category: &str, action: &str, label: Option<&str>) {
        self.dispatch(Hit::Event(AnalyticsEvent {
            category: category.to_string(),
            action: action.to_string(),
            label: label.map(str::to_string),
        }));
    }

    pub fn exception(&self, description: &str, fatal: bool) {
        let label = if fatal { "Fatal" } else { "Non-Fatal" };
        self.event("Exception", description, Some(label));
    }
}

impl Default for Analytics {
    fn default() -> Self {
        Self::new(LogSink)
    }
}

#[cfg(feature = "hydrate")]
pub use gtag::GtagSink;

#[cfg(feature = "hydrate")]
mod gtag {
    use wasm_bindgen::prelude::*;

    use super::{AnalyticsError, AnalyticsSink, Hit};

    #[wasm_bindgen]
    extern "C" {
        #[wasm_bindgen(catch, js_name = gtag)]
        fn gtag(command: &str, target: &str, params: &JsValue) -> Result<(), JsValue>;

        #[wasm_bindgen(catch, js_namespace = JSON, js_name = parse)]
        fn json_parse(text: &str) -> Result<JsValue, JsValue>;
    }

    #[derive(serde::Serialize)]
    struct PageViewParams<'a> {
        page_path: &'a str,
        send_to: &'a str,
    }

    #[derive(serde::Serialize)]
    struct EventParams<'a> {
        event_category: &'a str,
        #[serde(skip_serializing_if = "Option::is_none")]
        event_label: Option<&'a str>,
        send_to: &'a str,
    }

    /// Forwards hits to the global `gtag` function installed by the page shell.
    pub struct GtagSink {
        measurement_id: String,
    }

    impl GtagSink {
        pub fn new(measurement_id: impl Into<String>) -> Self {
            Self {
                measurement_id: measurement_id.into(),
            }
        }

        fn params(value: &impl serde::Serialize) -> Result<JsValue, AnalyticsError> {
            let text = serde_json::to_string(value)
                .map_err(|e| AnalyticsError::Rejected(e.to_string()))?;
            json_parse(&text).map_err(|e| AnalyticsError::Rejected(format!("{e:?}")))
        }
    }

    impl AnalyticsSink for GtagSink {
        fn send(&self, hit: &Hit) -> Result<(), AnalyticsError> {
            let send_to = self.measurement_id.as_str();
            let (name, params) = match hit {
                Hit::PageView { page } => (
                    "page_view",
                    Self::params(&PageViewParams {
                        page_path: page,
                        send_to,
                    })?,
                ),
                Hit::Event(e) => (
                    e.action.as_str(),
                    Self::params(&EventParams {
                        event_category: &e.category,
                        event_label: e.label.as_deref(),
                        send_to,
                    })?,
                ),
            };
            // a missing `gtag` (blocked script) throws a ReferenceError
            gtag("event", name, &params).map_err(|_| AnalyticsError::Unavailable)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    #[derive(Default)]
    struct Recording(Mutex<Vec<Hit>>);

    impl AnalyticsSink for Arc<Recording> {
        fn send(&self, hit: &Hit) -> Result<(), AnalyticsError> {
            self.0.lock().expect("recording lock").push(hit.clone());
            Ok(())
        }
    }

    struct Failing;

    impl AnalyticsSink for Failing {
        fn send(&self, _hit: &Hit) -> Result<(), AnalyticsError> {
            Err(AnalyticsError::Unavailable)
        }
    }

    #[test]
    fn test_hits_reach_sink() {
        let recording = Arc::new(Recording::default());
        let analytics = Analytics::new(recording.clone());
        analytics.page_view("/");
        analytics.event("Language", "change", Some("uz"));
        analytics.exception("hydration failed", true);

        let hits = recording.0.lock().expect("recording lock");
        assert_eq!(
            hits[0],
            Hit::PageView {
                page: "/".to_string()
            }
        );
        assert_eq!(
            hits[1],
            Hit::Event(AnalyticsEvent {
                category: "Language".to_string(),
                action: "change".to_string(),
                label: Some("uz".to_string()),
            })
        );
        assert_eq!(
            hits[2],
            Hit::Event(AnalyticsEvent {
                category: "Exception".to_string(),
                action: "hydration failed".to_string(),
                label: Some("Fatal".to_string()),
            })
        );
    }

    #[test]
    fn test_sink_failures_are_swallowed() {
        let analytics = Analytics::new(Failing);
        analytics.page_view("/");
        analytics.event("Theme", "toggle", None);
        analytics.exception("boom", false);
    }

    #[test]
    fn test_event_serialization_skips_missing_label() {
        let event = AnalyticsEvent {
            category: "Theme".to_string(),
            action: "toggle".to_string(),
            label: None,
        };
        assert_eq!(
            serde_json::to_string(&event).expect("serialize event"),
            r#"{"category":"Theme","action":"toggle"}"#
        );
    }

    #[test]
    fn test_log_sink_accepts_everything() {
        let hit = Hit::PageView {
            page: "/".to_string(),
        };
        assert_eq!(LogSink.send(&hit), Ok(()));
        Analytics::default().event("Projects", "view_code", Some("api"));
    }
}
