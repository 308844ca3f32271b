//! Reconnect state machine.
//!
//! A transport failure is queued on a single-consumer channel. One worker
//! thread drains it and restarts the client, retrying with a fixed backoff
//! until a stop/start pair succeeds. Failures are tagged with the connection
//! generation that produced them so reports from a replaced connection are
//! ignored.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::{Arc, Mutex, MutexGuard, Weak};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use ctrader_transport::TransportError;
use tracing::{debug, error, info, warn};

use crate::error::Result;

/// Lifecycle state of a client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConnectionState {
    Stopped,
    Starting,
    Running,
    Stopping,
    /// A recovery attempt failed; waiting before the next one.
    RetryBackoff,
}

impl ConnectionState {
    pub fn as_str(self) -> &'static str {
        match self {
            ConnectionState::Stopped => "stopped",
            ConnectionState::Starting => "starting",
            ConnectionState::Running => "running",
            ConnectionState::Stopping => "stopping",
            ConnectionState::RetryBackoff => "retry_backoff",
        }
    }
}

impl fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the recovery worker drives.
pub(crate) trait Lifecycle: Send + Sync + 'static {
    /// Stop then start, as one attempt.
    fn restart(self: &Arc<Self>) -> Result<()>;
    /// Generation of the current connection.
    fn generation(&self) -> u64;
    /// The user asked the client to stay stopped.
    fn is_user_stopped(&self) -> bool;
    fn set_state(&self, state: ConnectionState);
}

pub(crate) enum RecoveryEvent {
    Failed {
        generation: u64,
        error: TransportError,
    },
    Shutdown,
}

enum Outcome {
    Settled,
    Shutdown,
}

pub(crate) struct Recovery {
    backoff: Duration,
    pending: Arc<AtomicBool>,
    events: Mutex<Option<Sender<RecoveryEvent>>>,
    worker: Mutex<Option<JoinHandle<()>>>,
}

impl Recovery {
    pub fn new(backoff: Duration) -> Self {
        Self {
            backoff,
            pending: Arc::new(AtomicBool::new(false)),
            events: Mutex::new(None),
            worker: Mutex::new(None),
        }
    }

    /// Spawn the worker unless it is already running.
    pub fn ensure_worker<L: Lifecycle>(&self, target: Weak<L>) -> Result<()> {
        let mut worker = lock(&self.worker);
        if worker.is_some() {
            return Ok(());
        }
        let (tx, rx) = mpsc::channel();
        let pending = Arc::clone(&self.pending);
        let backoff = self.backoff;
        let handle = thread::Builder::new()
            .name("ctrader-recovery".to_string())
            .spawn(move || run(target, rx, pending, backoff))
            .map_err(TransportError::Io)?;
        *lock(&self.events) = Some(tx);
        *worker = Some(handle);
        Ok(())
    }

    /// Queue a failure of connection `generation`.
    ///
    /// Returns `false` when a failure of the current connection is already
    /// queued or being handled, or when no worker is running.
    pub fn report(&self, generation: u64, error: TransportError) -> bool {
        if self.pending.swap(true, Ordering::SeqCst) {
            debug!(error = %error, generation, "recovery already pending, coalescing");
            return false;
        }
        let events = lock(&self.events);
        let queued = events
            .as_ref()
            .is_some_and(|tx| tx.send(RecoveryEvent::Failed { generation, error }).is_ok());
        if !queued {
            self.pending.store(false, Ordering::SeqCst);
        }
        queued
    }

    /// Allow the next failure to be queued. Called before a new connection
    /// opens, so its failures are never coalesced into an older one.
    pub fn rearm(&self) {
        self.pending.store(false, Ordering::SeqCst);
    }

    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::SeqCst)
    }

    /// Stop the worker and wait for it.
    pub fn shutdown(&self) {
        if let Some(tx) = lock(&self.events).take() {
            let _ = tx.send(RecoveryEvent::Shutdown);
        }
        let worker = lock(&self.worker).take();
        if let Some(worker) = worker {
            if worker.thread().id() == thread::current().id() {
                return;
            }
            if worker.join().is_err() {
                warn!("recovery worker panicked");
            }
        }
    }
}

fn run<L: Lifecycle>(
    target: Weak<L>,
    events: Receiver<RecoveryEvent>,
    pending: Arc<AtomicBool>,
    backoff: Duration,
) {
    while let Ok(event) = events.recv() {
        let (generation, cause) = match event {
            RecoveryEvent::Failed { generation, error } => (generation, error),
            RecoveryEvent::Shutdown => return,
        };
        let Some(target) = target.upgrade() else {
            return;
        };
        if target.is_user_stopped() {
            debug!(error = %cause, "ignoring transport failure on stopped client");
            pending.store(false, Ordering::SeqCst);
            continue;
        }
        if generation != target.generation() {
            debug!(error = %cause, generation, "ignoring failure of replaced connection");
            pending.store(false, Ordering::SeqCst);
            continue;
        }

        warn!(error = %cause, generation, "transport failed, restarting client");
        if let Outcome::Shutdown = recover(&target, &events, backoff) {
            return;
        }
    }
}

fn recover<L: Lifecycle>(
    target: &Arc<L>,
    events: &Receiver<RecoveryEvent>,
    backoff: Duration,
) -> Outcome {
    let mut attempt: u32 = 0;
    loop {
        if target.is_user_stopped() {
            info!("recovery abandoned, client stopped");
            return Outcome::Settled;
        }
        attempt = attempt.saturating_add(1);
        match target.restart() {
            Ok(()) => {
                info!(attempt, "client recovered");
                return Outcome::Settled;
            }
            Err(err) => {
                error!(attempt, error = %err, ?backoff, "recovery attempt failed");
                target.set_state(ConnectionState::RetryBackoff);
            }
        }

        match events.recv_timeout(backoff) {
            Err(RecvTimeoutError::Timeout) => {}
            Ok(RecoveryEvent::Failed { error, generation }) => {
                debug!(error = %error, generation, "transport failure during recovery");
            }
            Ok(RecoveryEvent::Shutdown) | Err(RecvTimeoutError::Disconnected) => {
                return Outcome::Shutdown;
            }
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::atomic::{AtomicU64, AtomicUsize};
    use std::time::Instant;

    use super::*;
    use crate::error::ClientError;

    struct Fake {
        recovery: Recovery,
        gate: Mutex<()>,
        failures_left: AtomicUsize,
        restarts: AtomicUsize,
        generation: AtomicU64,
        user_stopped: AtomicBool,
        states: Mutex<Vec<ConnectionState>>,
    }

    impl Fake {
        fn new(failures: usize) -> Arc<Self> {
            Self::with_backoff(failures, Duration::from_millis(10))
        }

        fn with_backoff(failures: usize, backoff: Duration) -> Arc<Self> {
            let fake = Arc::new(Self {
                recovery: Recovery::new(backoff),
                gate: Mutex::new(()),
                failures_left: AtomicUsize::new(failures),
                restarts: AtomicUsize::new(0),
                generation: AtomicU64::new(1),
                user_stopped: AtomicBool::new(false),
                states: Mutex::new(Vec::new()),
            });
            fake.recovery
                .ensure_worker(Arc::downgrade(&fake))
                .expect("worker should spawn");
            fake
        }

        fn wait_for_restarts(&self, n: usize) {
            let deadline = Instant::now() + Duration::from_secs(2);
            while self.restarts.load(Ordering::SeqCst) < n {
                assert!(Instant::now() < deadline, "restart did not happen");
                thread::sleep(Duration::from_millis(2));
            }
        }
    }

    impl Lifecycle for Fake {
        fn restart(self: &Arc<Self>) -> Result<()> {
            let _gate = self.gate.lock().unwrap();
            self.restarts.fetch_add(1, Ordering::SeqCst);
            let left = self.failures_left.load(Ordering::SeqCst);
            if left > 0 {
                self.failures_left.store(left - 1, Ordering::SeqCst);
                return Err(ClientError::NotRunning);
            }
            self.generation.fetch_add(1, Ordering::SeqCst);
            self.recovery.rearm();
            self.set_state(ConnectionState::Running);
            Ok(())
        }

        fn generation(&self) -> u64 {
            self.generation.load(Ordering::SeqCst)
        }

        fn is_user_stopped(&self) -> bool {
            self.user_stopped.load(Ordering::SeqCst)
        }

        fn set_state(&self, state: ConnectionState) {
            self.states.lock().unwrap().push(state);
        }
    }

    fn broken() -> TransportError {
        TransportError::Io(io::Error::new(io::ErrorKind::BrokenPipe, "broken"))
    }

    #[test]
    fn retries_until_restart_succeeds() {
        let fake = Fake::new(3);
        assert!(fake.recovery.report(1, broken()));
        fake.wait_for_restarts(4);

        let deadline = Instant::now() + Duration::from_secs(2);
        while fake.states.lock().unwrap().last() != Some(&ConnectionState::Running) {
            assert!(Instant::now() < deadline, "client did not settle");
            thread::sleep(Duration::from_millis(2));
        }
        let states = fake.states.lock().unwrap().clone();
        assert_eq!(
            states
                .iter()
                .filter(|s| **s == ConnectionState::RetryBackoff)
                .count(),
            3
        );
        fake.recovery.shutdown();
    }

    #[test]
    fn concurrent_reports_coalesce() {
        let fake = Fake::new(0);
        let gate = fake.gate.lock().unwrap();
        assert!(fake.recovery.report(1, broken()));
        assert!(!fake.recovery.report(1, broken()));
        assert!(!fake.recovery.report(1, broken()));
        drop(gate);

        fake.wait_for_restarts(1);
        thread::sleep(Duration::from_millis(30));
        assert_eq!(fake.restarts.load(Ordering::SeqCst), 1);
        fake.recovery.shutdown();
    }

    #[test]
    fn stale_generation_is_ignored() {
        let fake = Fake::new(0);
        assert!(fake.recovery.report(0, broken()));
        thread::sleep(Duration::from_millis(30));
        assert_eq!(fake.restarts.load(Ordering::SeqCst), 0);
        assert!(!fake.recovery.is_pending());
        fake.recovery.shutdown();
    }

    #[test]
    fn user_stop_suppresses_recovery() {
        let fake = Fake::new(0);
        fake.user_stopped.store(true, Ordering::SeqCst);
        assert!(fake.recovery.report(1, broken()));
        thread::sleep(Duration::from_millis(30));
        assert_eq!(fake.restarts.load(Ordering::SeqCst), 0);
        assert!(!fake.recovery.is_pending());
        fake.recovery.shutdown();
    }

    #[test]
    fn shutdown_interrupts_backoff() {
        let fake = Fake::with_backoff(usize::MAX, Duration::from_secs(60));
        assert!(fake.recovery.report(1, broken()));
        fake.wait_for_restarts(1);

        let started = Instant::now();
        fake.recovery.shutdown();
        assert!(started.elapsed() < Duration::from_secs(5));
    }

    #[test]
    fn report_without_worker_is_rejected() {
        let recovery = Recovery::new(Duration::from_millis(10));
        assert!(!recovery.report(1, broken()));
        assert!(!recovery.is_pending());
    }

    #[test]
    fn state_names() {
        assert_eq!(ConnectionState::RetryBackoff.to_string(), "retry_backoff");
        assert_eq!(ConnectionState::Running.as_str(), "running");
    }
}
