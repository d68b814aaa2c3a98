//! Shutdown coordination
//!
//! A `Shutdown` handle is set once from the termination hook (Ctrl+C or
//! SIGTERM) and observed by the publish and subscribe loops. Waiting on it
//! wakes immediately, so a loop sleeping between samples stops right away.

use crate::error::HelloResult;
use std::sync::Arc;
use tokio::sync::watch;

#[derive(Debug, Clone)]
pub struct Shutdown {
    tx: Arc<watch::Sender<bool>>,
    rx: watch::Receiver<bool>,
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, rx) = watch::channel(false);
        Self { tx: Arc::new(tx), rx }
    }

    /// Request shutdown; every clone observes it
    pub fn trigger(&self) {
        self.tx.send_replace(true);
    }

    pub fn is_requested(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolves once shutdown has been requested
    pub async fn wait(&self) {
        let mut rx = self.rx.clone();
        // The sender lives in `self`, so the channel cannot close under us
        let _ = rx.wait_for(|requested| *requested).await;
    }

    /// Route SIGINT and SIGTERM to this handle.
    ///
    /// Can only be installed once per process; a second call returns an error.
    pub fn install_signal_handler(&self) -> HelloResult<()> {
        let handle = self.clone();
        ctrlc::set_handler(move || {
            println!("preparing to shut down...");
            handle.trigger();
        })?;
        Ok(())
    }
}
