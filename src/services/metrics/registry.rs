use prometheus::{CounterVec, Encoder, HistogramOpts, HistogramVec, Opts, Registry, TextEncoder};
use std::sync::Arc;

const NAMESPACE: &str = "law_office";

/// Metrics registry for the website backend. One instance per app, so tests
/// can build as many apps as they like without clashing registrations.
pub struct MetricsRegistry {
    registry: Registry,

    // HTTP Metrics
    pub http_requests_total: CounterVec,
    pub http_request_duration_seconds: HistogramVec,

    // Admin Metrics
    pub admin_logins_total: CounterVec,
    pub password_resets_total: CounterVec,

    // Content Metrics
    pub contact_messages_created_total: CounterVec,
}

impl MetricsRegistry {
    pub fn new() -> Result<Arc<Self>, prometheus::Error> {
        let registry = Registry::new();

        let http_requests_total = CounterVec::new(
            Opts::new("http_requests_total", "Total HTTP requests").namespace(NAMESPACE),
            &["method", "endpoint", "status"],
        )?;
        registry.register(Box::new(http_requests_total.clone()))?;

        let http_request_duration_seconds = HistogramVec::new(
            HistogramOpts::new("http_request_duration_seconds", "HTTP request duration")
                .namespace(NAMESPACE)
                .buckets(vec![0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5]),
            &["method", "endpoint"],
        )?;
        registry.register(Box::new(http_request_duration_seconds.clone()))?;

        let admin_logins_total = CounterVec::new(
            Opts::new("admin_logins_total", "Admin login attempts by outcome").namespace(NAMESPACE),
            &["outcome"],
        )?;
        registry.register(Box::new(admin_logins_total.clone()))?;

        let password_resets_total = CounterVec::new(
            Opts::new("password_resets_total", "Password reset flow events by stage")
                .namespace(NAMESPACE),
            &["stage"],
        )?;
        registry.register(Box::new(password_resets_total.clone()))?;

        let contact_messages_created_total = CounterVec::new(
            Opts::new("contact_messages_created_total", "Contact form submissions by urgency")
                .namespace(NAMESPACE),
            &["urgency"],
        )?;
        registry.register(Box::new(contact_messages_created_total.clone()))?;

        Ok(Arc::new(Self {
            registry,
            http_requests_total,
            http_request_duration_seconds,
            admin_logins_total,
            password_resets_total,
            contact_messages_created_total,
        }))
    }

    pub fn record_login(&self, success: bool) {
        let outcome = if success { "success" } else { "failure" };
        self.admin_logins_total.with_label_values(&[outcome]).inc();
    }

    /// `stage` is one of `requested`, `issued`, `completed`, `rejected`.
    pub fn record_password_reset(&self, stage: &str) {
        self.password_resets_total.with_label_values(&[stage]).inc();
    }

    pub fn record_contact_message(&self, urgency: &str) {
        self.contact_messages_created_total
            .with_label_values(&[urgency])
            .inc();
    }

    /// Prometheus text exposition of everything registered.
    pub fn export(&self) -> Result<String, prometheus::Error> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}
