use metrics_exporter_prometheus::PrometheusHandle;
use probate_docs::config::DocumentConfig;
use probate_docs::format::StyleProfile;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

/// Shared by every request. Generation itself is stateless; the state only
/// carries configuration and the metrics handle.
#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) documents: Arc<DocumentConfig>,
    pub(crate) style: Arc<StyleProfile>,
}

impl AppState {
    pub(crate) fn new(metrics: PrometheusHandle, documents: DocumentConfig) -> Self {
        let style = StyleProfile::from(&documents);
        Self {
            readiness: Arc::new(AtomicBool::new(false)),
            metrics: Arc::new(metrics),
            documents: Arc::new(documents),
            style: Arc::new(style),
        }
    }
}
