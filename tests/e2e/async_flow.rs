//! Async outcome E2E tests: sequencing and short-circuiting across awaits.

use reasoned::prelude::*;
use reasoned::{AsyncLazyOutcome, reduce_async, reduce_lazy_async, transform_async};
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
struct Journal(Arc<Mutex<Vec<String>>>);

impl Journal {
    fn record(&self, entry: impl Into<String>) {
        if let Ok(mut entries) = self.0.lock() {
            entries.push(entry.into());
        }
    }

    fn entries(&self) -> Vec<String> {
        self.0.lock().map(|entries| entries.clone()).unwrap_or_default()
    }
}

async fn fetch_quota(journal: Journal, tenant: &'static str) -> Outcome<u32> {
    tokio::task::yield_now().await;
    journal.record(format!("fetch {tenant}"));
    match tenant {
        "acme" => Outcome::succeed_with(100, "quota loaded"),
        "free" => Outcome::succeed(0),
        _ => Outcome::fail(format!("tenant {tenant} unknown")),
    }
}

#[tokio::test]
async fn chained_async_stages_run_in_order() {
    let journal = Journal::default();

    let remaining = fetch_quota(journal.clone(), "acme")
        .map_outcome(|quota| quota.saturating_sub(40))
        .flat_map_outcome_async(|left| {
            let journal = journal.clone();
            async move {
                journal.record("reserve");
                Outcome::succeed_when(left > 0, "reserved", "quota exhausted").map(|()| left)
            }
        })
        .await;
    assert_eq!(remaining.value(), Some(&60));
    assert_eq!(journal.entries(), vec!["fetch acme", "reserve"]);

    let exhausted = fetch_quota(journal.clone(), "free")
        .filter_outcome(|quota| *quota > 0, |_| Error::new("quota exhausted"))
        .flat_map_wrap_outcome(Outcome::succeed, "cannot start job")
        .await;
    assert_eq!(
        exhausted.error().map(Error::print),
        Some("cannot start job → quota exhausted".to_string())
    );
}

#[tokio::test]
async fn failure_skips_downstream_futures() {
    let journal = Journal::default();

    let outcome = fetch_quota(journal.clone(), "ghost")
        .flat_map_outcome_async(|quota| {
            let journal = journal.clone();
            async move {
                journal.record("never");
                Outcome::succeed(quota)
            }
        })
        .await;
    assert_eq!(
        outcome.error().map(Reason::message),
        Some("tenant ghost unknown")
    );
    assert_eq!(journal.entries(), vec!["fetch ghost"]);

    let fallback = fetch_quota(journal.clone(), "ghost")
        .await
        .otherwise_with_async(|_| fetch_quota(journal.clone(), "free"))
        .await;
    assert_eq!(fallback.value(), Some(&0));
}

#[tokio::test]
async fn async_sequences_stop_at_first_failure() {
    let journal = Journal::default();

    let tenants = ["acme", "ghost", "free"];
    let reduced = reduce_async(
        tenants
            .into_iter()
            .map(|tenant| fetch_quota(journal.clone(), tenant).map_outcome(|_| ())),
    )
    .await;
    assert!(reduced.is_failure());
    assert_eq!(journal.entries(), vec!["fetch acme", "fetch ghost"]);

    let quotas =
        transform_async(["acme", "free"], |tenant| fetch_quota(journal.clone(), tenant)).await;
    assert_eq!(quotas.value(), Some(&vec![100, 0]));

    let gates = [
        AsyncLazyOutcome::new(|| async { true }, "schema ok", "schema invalid"),
        AsyncLazyOutcome::new(|| async { false }, "lock ok", "lock held"),
    ];
    let gated = reduce_lazy_async(&gates).await;
    assert_eq!(gated.error().map(Reason::message), Some("lock held"));
}
