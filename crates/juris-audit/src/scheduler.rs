use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Polling granularity for the stop flag between scheduled runs.
const TICK: Duration = Duration::from_millis(50);

/// Periodic audit driver.
///
/// Runs the supplied job on a background thread at a fixed interval. The
/// returned handle is the disposer: dropping it or calling
/// [`SchedulerHandle::dispose`] prevents future runs. An in-flight run is
/// never aborted — runs are synchronous and do not block on I/O.
pub struct AuditScheduler;

impl AuditScheduler {
    pub fn start<F>(interval: Duration, mut job: F) -> SchedulerHandle
    where
        F: FnMut() + Send + 'static,
    {
        let stop = Arc::new(AtomicBool::new(false));
        let stop_flag = Arc::clone(&stop);

        let thread = thread::spawn(move || {
            tracing::info!(interval_ms = interval.as_millis() as u64, "audit scheduler started");
            let mut next_run = Instant::now() + interval;
            loop {
                if stop_flag.load(Ordering::SeqCst) {
                    break;
                }
                if Instant::now() >= next_run {
                    job();
                    next_run = Instant::now() + interval;
                } else {
                    thread::sleep(TICK.min(interval));
                }
            }
            tracing::info!("audit scheduler stopped");
        });

        SchedulerHandle {
            stop,
            thread: Some(thread),
        }
    }
}

/// Disposer for a running [`AuditScheduler`].
pub struct SchedulerHandle {
    stop: Arc<AtomicBool>,
    thread: Option<JoinHandle<()>>,
}

impl SchedulerHandle {
    /// Stop future scheduled runs and wait for the scheduler thread to
    /// finish. Idempotent.
    pub fn dispose(&mut self) {
        self.stop.store(true, Ordering::SeqCst);
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }

    pub fn is_disposed(&self) -> bool {
        self.thread.is_none()
    }
}

impl Drop for SchedulerHandle {
    fn drop(&mut self) {
        self.dispose();
    }
}
