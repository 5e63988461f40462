//! Worker pool that drains the host queue.
//!
//! A fixed number of tokio tasks share one queue of pending targets and
//! one fan-in channel for finished outcomes. Dequeue is a single atomic
//! `pop_front` under a mutex, so a target is consumed exactly once and a
//! worker that finds the queue empty simply exits; there is no
//! check-then-pop window. Outcomes travel by ownership transfer over the
//! channel, never through shared mutable state.

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::ensure;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, error};

use probr_common::config::ProbeConfig;
use probr_common::outcome::ProbeOutcome;
use probr_common::target::Target;

use crate::probe::Prober;
use crate::retry;

/// Invoked by workers with the running count of completed targets.
pub type ProgressFn = Box<dyn Fn(usize) + Send + Sync>;

/// Probes every target and returns one outcome per target.
///
/// Blocks (in the async sense) until the queue is fully drained and all
/// workers have been joined. The pool size is `config.workers`, capped
/// at the target count; order of the returned outcomes is unspecified.
pub async fn run_scan(
    prober: Arc<dyn Prober>,
    config: &ProbeConfig,
    targets: Vec<Target>,
    on_progress: Option<ProgressFn>,
) -> anyhow::Result<Vec<ProbeOutcome>> {
    let total: usize = targets.len();
    if total == 0 {
        return Ok(Vec::new());
    }

    let queue: Arc<Mutex<VecDeque<Target>>> = Arc::new(Mutex::new(VecDeque::from(targets)));
    let (tx, mut rx) = mpsc::unbounded_channel::<ProbeOutcome>();
    let completed: Arc<AtomicUsize> = Arc::new(AtomicUsize::new(0));
    let callback: Option<Arc<ProgressFn>> = on_progress.map(Arc::new);

    let pool_size: usize = config.workers.clamp(1, total);
    debug!(workers = pool_size, hosts = total, "starting scan");

    let mut handles: Vec<JoinHandle<()>> = Vec::with_capacity(pool_size);
    for _ in 0..pool_size {
        let queue = queue.clone();
        let tx = tx.clone();
        let prober = prober.clone();
        let config = config.clone();
        let completed = completed.clone();
        let callback = callback.clone();

        handles.push(tokio::spawn(async move {
            loop {
                // Lock only for the pop; never held across an await.
                let next: Option<Target> = queue.lock().unwrap().pop_front();
                let Some(target) = next else {
                    break;
                };

                let outcome: ProbeOutcome =
                    retry::check_host(prober.as_ref(), &config, &target).await;
                let _ = tx.send(outcome);

                let done: usize = completed.fetch_add(1, Ordering::SeqCst) + 1;
                if let Some(callback) = &callback {
                    callback(done);
                }
            }
        }));
    }

    // Workers hold the remaining senders; dropping ours lets recv()
    // terminate once the last worker exits.
    drop(tx);

    let mut outcomes: Vec<ProbeOutcome> = Vec::with_capacity(total);
    while let Some(outcome) = rx.recv().await {
        outcomes.push(outcome);
    }

    for handle in handles {
        if let Err(err) = handle.await {
            error!("worker task failed: {err}");
        }
    }

    ensure!(
        outcomes.len() == total,
        "scan incomplete: {} of {} hosts produced an outcome",
        outcomes.len(),
        total
    );
    Ok(outcomes)
}
