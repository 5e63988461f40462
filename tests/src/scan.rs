//! End-to-end engine tests: queue, retry policy, and aggregation
//! running together against a scripted prober.

use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use probr_common::outcome::{ProbeOutcome, ScanReport};
use probr_common::target::Target;
use probr_core::scheduler::{self, ProgressFn};

use crate::util::{Attempt, ScriptedProber, fast_config, targets_from_lines};

#[tokio::test]
async fn good_bad_and_blank_lines_partition_correctly() {
    let prober: Arc<ScriptedProber> = Arc::new(
        ScriptedProber::new().script("good.test", vec![Attempt::Status(200)]),
    );
    // "bad.test" has no script, so every attempt fails.
    let targets: Vec<Target> = targets_from_lines(&["good.test", "bad.test", ""]);
    assert_eq!(targets.len(), 2, "blank line must not become a target");

    let outcomes: Vec<ProbeOutcome> =
        scheduler::run_scan(prober.clone(), &fast_config(2, 3), targets, None)
            .await
            .unwrap();

    let report: ScanReport = ScanReport::from_outcomes(outcomes);
    assert_eq!(report.total(), 2);
    assert_eq!(report.working, vec![ProbeOutcome::new("good.test", 200)]);
    assert_eq!(report.nonworking, vec!["bad.test".to_string()]);

    assert_eq!(prober.attempts_for("good.test"), 1);
    assert_eq!(prober.attempts_for("bad.test"), 3);
}

#[tokio::test]
async fn success_on_second_attempt_stops_the_chain() {
    let prober: Arc<ScriptedProber> = Arc::new(ScriptedProber::new().script(
        "moved.test",
        vec![Attempt::Status(0), Attempt::Status(301), Attempt::Status(500)],
    ));

    let outcomes: Vec<ProbeOutcome> = scheduler::run_scan(
        prober.clone(),
        &fast_config(1, 3),
        targets_from_lines(&["moved.test"]),
        None,
    )
    .await
    .unwrap();

    assert_eq!(outcomes, vec![ProbeOutcome::new("moved.test", 301)]);
    assert_eq!(prober.attempts_for("moved.test"), 2);
}

#[tokio::test]
async fn hanging_attempt_is_cancelled_and_retried() {
    let prober: Arc<ScriptedProber> = Arc::new(ScriptedProber::new().script(
        "slow.test",
        vec![Attempt::Hang, Attempt::Status(204)],
    ));

    let outcomes: Vec<ProbeOutcome> = scheduler::run_scan(
        prober.clone(),
        &fast_config(1, 3),
        targets_from_lines(&["slow.test"]),
        None,
    )
    .await
    .unwrap();

    assert_eq!(outcomes, vec![ProbeOutcome::new("slow.test", 204)]);
    assert_eq!(prober.attempts_for("slow.test"), 2);
}

#[tokio::test]
async fn no_host_is_dropped_or_duplicated() {
    let lines: Vec<String> = (0..120).map(|i| format!("host{i}.test")).collect();
    let line_refs: Vec<&str> = lines.iter().map(String::as_str).collect();

    let mut prober: ScriptedProber = ScriptedProber::new();
    for (i, host) in lines.iter().enumerate() {
        if i % 2 == 0 {
            prober = prober.script(host, vec![Attempt::Status(200)]);
        }
    }

    let outcomes: Vec<ProbeOutcome> = scheduler::run_scan(
        Arc::new(prober),
        &fast_config(16, 1),
        targets_from_lines(&line_refs),
        None,
    )
    .await
    .unwrap();

    assert_eq!(outcomes.len(), 120);
    let unique: HashSet<&str> = outcomes.iter().map(|o| o.host.as_str()).collect();
    assert_eq!(unique.len(), 120, "each host must appear exactly once");

    let report: ScanReport = ScanReport::from_outcomes(outcomes);
    assert_eq!(report.working_count(), 60);
    assert_eq!(report.nonworking_count(), 60);
}

/// The same input must produce the same multiset of outcomes whether one
/// worker or two hundred drain the queue.
#[tokio::test]
async fn concurrency_level_does_not_change_outcomes() {
    let lines: Vec<String> = (0..60).map(|i| format!("host{i}.test")).collect();
    let line_refs: Vec<&str> = lines.iter().map(String::as_str).collect();

    let build_prober = || {
        let mut prober: ScriptedProber = ScriptedProber::new();
        for (i, host) in lines.iter().enumerate() {
            let status: u16 = match i % 3 {
                0 => 200,
                1 => 404,
                _ => 0,
            };
            prober = prober.script(host, vec![Attempt::Status(status)]);
        }
        Arc::new(prober)
    };

    let mut serial: Vec<ProbeOutcome> = scheduler::run_scan(
        build_prober(),
        &fast_config(1, 1),
        targets_from_lines(&line_refs),
        None,
    )
    .await
    .unwrap();

    let mut parallel: Vec<ProbeOutcome> = scheduler::run_scan(
        build_prober(),
        &fast_config(200, 1),
        targets_from_lines(&line_refs),
        None,
    )
    .await
    .unwrap();

    let sort_key = |o: &ProbeOutcome| (o.host.clone(), o.status);
    serial.sort_by_key(sort_key);
    parallel.sort_by_key(sort_key);
    assert_eq!(serial, parallel);
}

#[tokio::test]
async fn progress_counts_every_completed_host() {
    let max_seen: Arc<AtomicUsize> = Arc::new(AtomicUsize::new(0));
    let ticks: Arc<AtomicUsize> = Arc::new(AtomicUsize::new(0));
    let max_ref = max_seen.clone();
    let ticks_ref = ticks.clone();
    let on_progress: ProgressFn = Box::new(move |done| {
        max_ref.fetch_max(done, Ordering::SeqCst);
        ticks_ref.fetch_add(1, Ordering::SeqCst);
    });

    let lines: Vec<String> = (0..25).map(|i| format!("host{i}.test")).collect();
    let line_refs: Vec<&str> = lines.iter().map(String::as_str).collect();

    scheduler::run_scan(
        Arc::new(ScriptedProber::new()),
        &fast_config(8, 1),
        targets_from_lines(&line_refs),
        Some(on_progress),
    )
    .await
    .unwrap();

    assert_eq!(max_seen.load(Ordering::SeqCst), 25);
    assert_eq!(ticks.load(Ordering::SeqCst), 25);
}
