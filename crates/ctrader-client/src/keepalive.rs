use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::{debug, warn};

use crate::error::Result;

/// Background heartbeat emitter.
///
/// Calls `beat` once per interval until stopped. Stopping wakes the worker
/// immediately and waits for it to exit.
pub struct Keepalive {
    shutdown: Option<Sender<()>>,
    worker: Option<JoinHandle<()>>,
}

impl Keepalive {
    /// Spawn the worker. `beat` returns `false` to end the loop on its own.
    pub fn spawn<F>(interval: Duration, mut beat: F) -> Result<Self>
    where
        F: FnMut() -> bool + Send + 'static,
    {
        let (shutdown, signal) = mpsc::channel::<()>();
        let worker = thread::Builder::new()
            .name("ctrader-keepalive".to_string())
            .spawn(move || loop {
                match signal.recv_timeout(interval) {
                    Err(RecvTimeoutError::Timeout) => {
                        if !beat() {
                            debug!("keepalive loop ended by heartbeat sender");
                            return;
                        }
                    }
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => return,
                }
            })
            .map_err(ctrader_transport::TransportError::Io)?;

        Ok(Self {
            shutdown: Some(shutdown),
            worker: Some(worker),
        })
    }

    /// Wake the worker and wait for it to exit.
    pub fn stop(mut self) {
        self.shutdown_and_join();
    }

    fn shutdown_and_join(&mut self) {
        drop(self.shutdown.take());
        if let Some(worker) = self.worker.take() {
            if worker.thread().id() == thread::current().id() {
                return;
            }
            if worker.join().is_err() {
                warn!("keepalive worker panicked");
            }
        }
    }
}

impl Drop for Keepalive {
    fn drop(&mut self) {
        self.shutdown_and_join();
    }
}
