//! Reader/import coordination
//!
//! Readers register before touching the catalog and deregister afterwards.
//! A bulk import waits until no reader is mid-flight, then runs alone; new
//! readers arriving while an import is pending wait for it to finish, so a
//! read never observes a half-applied import.

use parking_lot::Mutex;
use std::sync::Arc;
use tokio::sync::Notify;
use tracing::debug;

#[derive(Debug, Default)]
struct GateState {
    readers: usize,
    pending_imports: usize,
    importing: bool,
}

/// Reader-count / writer-barrier gate around catalog reads and imports
#[derive(Debug, Default)]
pub struct ImportGate {
    state: Mutex<GateState>,
    changed: Notify,
}

impl ImportGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a reader, waiting out any pending or running import
    pub async fn before_read(&self) {
        loop {
            let notified = self.changed.notified();
            tokio::pin!(notified);
            notified.as_mut().enable();

            {
                let mut state = self.state.lock();
                if !state.importing && state.pending_imports == 0 {
                    state.readers += 1;
                    return;
                }
            }

            notified.await;
        }
    }

    /// Deregister a reader
    pub fn after_read(&self) {
        let mut state = self.state.lock();
        state.readers = state.readers.saturating_sub(1);
        if state.readers == 0 {
            self.changed.notify_waiters();
        }
    }

    /// Block new readers, wait for in-flight ones, then take the gate
    ///
    /// Dropping the future before the gate is taken withdraws the pending
    /// import, so readers held back by it resume.
    pub async fn start_import(&self) {
        self.state.lock().pending_imports += 1;
        let mut pending = PendingImport {
            gate: self,
            armed: true,
        };

        loop {
            let notified = self.changed.notified();
            tokio::pin!(notified);
            notified.as_mut().enable();

            {
                let mut state = self.state.lock();
                if state.readers == 0 && !state.importing {
                    state.pending_imports -= 1;
                    state.importing = true;
                    pending.armed = false;
                    debug!("Import gate closed");
                    return;
                }
            }

            notified.await;
        }
    }

    /// Release the gate and let readers resume
    pub fn finish_import(&self) {
        let mut state = self.state.lock();
        state.importing = false;
        debug!("Import gate opened");
        self.changed.notify_waiters();
    }

    /// Register a reader for the lifetime of the returned guard
    pub async fn read(self: &Arc<Self>) -> ReadGuard {
        self.before_read().await;
        ReadGuard {
            gate: Arc::clone(self),
        }
    }

    /// Hold the import barrier for the lifetime of the returned guard
    pub async fn import(self: &Arc<Self>) -> ImportGuard {
        self.start_import().await;
        ImportGuard {
            gate: Arc::clone(self),
        }
    }

    /// Readers currently registered
    pub fn active_readers(&self) -> usize {
        self.state.lock().readers
    }

    pub fn is_importing(&self) -> bool {
        self.state.lock().importing
    }
}

/// Withdraws a pending import whose `start_import` future was dropped
struct PendingImport<'g> {
    gate: &'g ImportGate,
    armed: bool,
}

impl Drop for PendingImport<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        let mut state = self.gate.state.lock();
        state.pending_imports = state.pending_imports.saturating_sub(1);
        drop(state);
        debug!("Pending import cancelled");
        self.gate.changed.notify_waiters();
    }
}

/// Calls [`ImportGate::after_read`] on drop
#[derive(Debug)]
pub struct ReadGuard {
    gate: Arc<ImportGate>,
}

impl Drop for ReadGuard {
    fn drop(&mut self) {
        self.gate.after_read();
    }
}

/// Calls [`ImportGate::finish_import`] on drop
#[derive(Debug)]
pub struct ImportGuard {
    gate: Arc<ImportGate>,
}

impl Drop for ImportGuard {
    fn drop(&mut self) {
        self.gate.finish_import();
    }
}
