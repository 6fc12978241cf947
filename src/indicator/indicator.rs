// src/indicator/indicator.rs
use super::slot::StatusSlot;
use crate::config::ApiConfig;
use crate::health::{HealthProbe, HealthSource, Status};
use crate::metrics::MetricsCollector;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info};
use uuid::Uuid;

/// Backend status shown on the landing page.
///
/// Mounting sets `Checking` and spawns exactly one probe. The probe's
/// result is applied once; after `teardown` (or drop) it is ignored.
/// Must be mounted from inside a tokio runtime.
pub struct StatusIndicator {
    probe_id: String,
    slot: Arc<StatusSlot>,
    shutdown_tx: watch::Sender<bool>,
    shutdown_rx: watch::Receiver<bool>,
}

impl StatusIndicator {
    pub fn mount(
        api: &ApiConfig,
        source: Arc<dyn HealthSource>,
        metrics: Option<Arc<MetricsCollector>>,
    ) -> Self {
        let probe = HealthProbe::new(api.health_url(), source);
        Self::mount_probe(Arc::new(probe), metrics)
    }

    pub fn mount_probe(probe: Arc<HealthProbe>, metrics: Option<Arc<MetricsCollector>>) -> Self {
        let probe_id = Uuid::new_v4().to_string();
        let slot = Arc::new(StatusSlot::new());
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        debug!(probe_id = %probe_id, url = %probe.url(), "Mounting status indicator");

        // The task only holds a weak handle: a dropped indicator releases
        // the slot even while the request is still pending.
        let weak_slot = Arc::downgrade(&slot);
        let mut task_shutdown_rx = shutdown_rx.clone();
        let task_probe_id = probe_id.clone();

        if let Some(metrics) = &metrics {
            metrics.probe_started();
        }

        tokio::spawn(async move {
            // A ready completion always goes through the guard, even when
            // teardown has already been signalled.
            tokio::select! {
                biased;

                outcome = probe.check(&task_probe_id) => {
                    let applied = weak_slot
                        .upgrade()
                        .map_or(false, |slot| slot.settle(outcome.status));

                    if applied {
                        info!(
                            probe_id = %task_probe_id,
                            status = outcome.status.as_str(),
                            checked_at = %outcome.checked_at.to_rfc3339(),
                            elapsed_ms = outcome.elapsed.as_millis() as u64,
                            "Backend status settled"
                        );
                        if let Some(metrics) = &metrics {
                            metrics.record_probe(outcome.status, outcome.reason, outcome.elapsed);
                        }
                    } else {
                        debug!(probe_id = %task_probe_id, "Late probe result discarded");
                        if let Some(metrics) = &metrics {
                            metrics.record_discarded();
                        }
                    }
                }
                _ = task_shutdown_rx.wait_for(|down| *down) => {
                    debug!(probe_id = %task_probe_id, "Probe abandoned on teardown");
                    if let Some(metrics) = &metrics {
                        metrics.record_discarded();
                    }
                }
            }

            if let Some(metrics) = &metrics {
                metrics.probe_finished();
            }
        });

        Self {
            probe_id,
            slot,
            shutdown_tx,
            shutdown_rx,
        }
    }

    pub fn probe_id(&self) -> &str {
        &self.probe_id
    }

    pub fn status(&self) -> Status {
        self.slot.get()
    }

    pub fn label(&self) -> &'static str {
        self.status().label()
    }

    pub fn is_mounted(&self) -> bool {
        self.slot.is_mounted()
    }

    /// Receiver for re-rendering when the status changes.
    pub fn subscribe(&self) -> watch::Receiver<Status> {
        self.slot.subscribe()
    }

    /// Wait until the probe settles or the indicator is torn down, and
    /// return the status at that point. Pending forever if the backend
    /// never answers.
    pub async fn settled(&self) -> Status {
        let mut status_rx = self.slot.subscribe();
        let mut shutdown_rx = self.shutdown_rx.clone();

        tokio::select! {
            settled = status_rx.wait_for(|s| s.is_terminal()) => {
                if let Ok(status) = settled {
                    return *status;
                }
            }
            _ = shutdown_rx.wait_for(|down| *down) => {}
        }

        self.status()
    }

    /// End the display lifetime. Idempotent.
    pub fn teardown(&self) {
        if self.slot.unmount() {
            let _ = self.shutdown_tx.send(true);
            debug!(
                probe_id = %self.probe_id,
                status = self.status().as_str(),
                "Status indicator torn down"
            );
        }
    }
}

impl Drop for StatusIndicator {
    fn drop(&mut self) {
        self.teardown();
    }
}
