// src/indicator/slot.rs
use crate::health::Status;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::watch;

/// The single status value owned by a mounted indicator.
///
/// Both settling and unmounting run inside the watch channel's write
/// lock, so a completion can never land after `unmount` returns.
#[derive(Debug)]
pub(crate) struct StatusSlot {
    tx: watch::Sender<Status>,
    mounted: AtomicBool,
}

impl StatusSlot {
    pub(crate) fn new() -> Self {
        let (tx, _) = watch::channel(Status::Checking);
        Self {
            tx,
            mounted: AtomicBool::new(true),
        }
    }

    pub(crate) fn get(&self) -> Status {
        *self.tx.borrow()
    }

    pub(crate) fn subscribe(&self) -> watch::Receiver<Status> {
        self.tx.subscribe()
    }

    pub(crate) fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::Acquire)
    }

    /// Apply a terminal status. Returns false if the slot was unmounted
    /// or already settled.
    pub(crate) fn settle(&self, next: Status) -> bool {
        self.tx.send_if_modified(|status| {
            self.mounted.load(Ordering::Acquire) && status.transition(next)
        })
    }

    /// Returns true on the first call only.
    pub(crate) fn unmount(&self) -> bool {
        let mut was_mounted = false;
        self.tx.send_if_modified(|_| {
            was_mounted = self.mounted.swap(false, Ordering::AcqRel);
            false
        });
        was_mounted
    }
}
