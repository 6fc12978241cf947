// src/metrics/collector.rs
use crate::health::{OfflineReason, Status};
use anyhow::Result;
use prometheus::{
    Encoder, HistogramOpts, HistogramVec, IntCounter, IntCounterVec, IntGauge, Opts, Registry,
    TextEncoder,
};
use std::sync::Arc;
use std::time::Duration;

pub struct MetricsRegistry {
    registry: Registry,
    collector: Arc<MetricsCollector>,
}

impl MetricsRegistry {
    pub fn new() -> Result<Self> {
        let registry = Registry::new();
        let collector = Arc::new(MetricsCollector::new(&registry)?);

        Ok(Self {
            registry,
            collector,
        })
    }

    pub fn collector(&self) -> Arc<MetricsCollector> {
        self.collector.clone()
    }

    pub fn gather(&self) -> Result<String> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}

pub struct MetricsCollector {
    pub probes_total: IntCounterVec,
    pub probe_duration_seconds: HistogramVec,
    pub probes_discarded_total: IntCounter,
    pub probes_in_flight: IntGauge,
}

impl MetricsCollector {
    pub fn new(registry: &Registry) -> Result<Self> {
        let probes_total = IntCounterVec::new(
            Opts::new("status_probe_total", "Settled health probes"),
            &["status", "reason"],
        )?;
        registry.register(Box::new(probes_total.clone()))?;

        let probe_duration_seconds = HistogramVec::new(
            HistogramOpts::new(
                "status_probe_duration_seconds",
                "Health probe round-trip in seconds",
            ),
            &["status"],
        )?;
        registry.register(Box::new(probe_duration_seconds.clone()))?;

        let probes_discarded_total = IntCounter::new(
            "status_probe_discarded_total",
            "Probe completions ignored because the indicator was torn down",
        )?;
        registry.register(Box::new(probes_discarded_total.clone()))?;

        let probes_in_flight =
            IntGauge::new("status_probes_in_flight", "Probes awaiting a response")?;
        registry.register(Box::new(probes_in_flight.clone()))?;

        Ok(Self {
            probes_total,
            probe_duration_seconds,
            probes_discarded_total,
            probes_in_flight,
        })
    }

    pub fn record_probe(&self, status: Status, reason: Option<OfflineReason>, duration: Duration) {
        let reason = reason.map_or("none", OfflineReason::as_str);
        self.probes_total
            .with_label_values(&[status.as_str(), reason])
            .inc();

        self.probe_duration_seconds
            .with_label_values(&[status.as_str()])
            .observe(duration.as_secs_f64());
    }

    pub fn record_discarded(&self) {
        self.probes_discarded_total.inc();
    }

    pub fn probe_started(&self) {
        self.probes_in_flight.inc();
    }

    pub fn probe_finished(&self) {
        self.probes_in_flight.dec();
    }
}
