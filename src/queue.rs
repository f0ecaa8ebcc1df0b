//! Task registry and the single-surface solver worker.
//!
//! Every queued captcha funnels through one worker loop, because there is
//! one human and one solving surface: tasks are presented strictly in
//! creation order, while each outcome fans out independently to whichever
//! pollers happen to be waiting on it.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{mpsc, watch, RwLock};
use tracing::{error, info};
use uuid::Uuid;

use crate::api::types::CaptchaTask;
use crate::solver::{CaptchaSolution, SolveError, Solver};

/// Outcome of one solve computation.
pub type SolveOutcome = Result<CaptchaSolution, SolveError>;

/// Live binding between a task id and its solve computation.
///
/// Cheap to clone; every clone is an independent waiter on the same outcome.
/// The computation progresses whether or not anyone is waiting.
#[derive(Clone)]
pub struct PendingSolve {
    outcome: watch::Receiver<Option<SolveOutcome>>,
}

impl PendingSolve {
    /// Suspend until the bound solve computation finishes.
    ///
    /// Resolves to [`SolveError::Cancelled`] if the worker is torn down
    /// before an outcome is ever published, so waiters never hang on a dead
    /// solver.
    pub async fn wait(&mut self) -> SolveOutcome {
        loop {
            if let Some(outcome) = self.outcome.borrow_and_update().clone() {
                return outcome;
            }
            if self.outcome.changed().await.is_err() {
                // Sender gone; the worker may still have published first.
                if let Some(outcome) = self.outcome.borrow().clone() {
                    return outcome;
                }
                return Err(SolveError::Cancelled("solver shut down".to_string()));
            }
        }
    }
}

struct QueuedSolve {
    task_id: String,
    task: CaptchaTask,
    callback_url: Option<String>,
    publish: watch::Sender<Option<SolveOutcome>>,
}

/// Registry of in-flight solves, keyed by opaque task id.
///
/// The id map is the only shared mutable state in the bridge; inserts and
/// removals go through the write lock, so an id either exists or it does
/// not — never anything in between.
pub struct TaskQueue {
    tasks: RwLock<HashMap<String, PendingSolve>>,
    submit: mpsc::UnboundedSender<QueuedSolve>,
}

impl TaskQueue {
    /// Build a queue and spawn its worker loop over `solver`.
    pub fn new(solver: Arc<dyn Solver>) -> Self {
        let (submit, jobs) = mpsc::unbounded_channel();
        tokio::spawn(run_worker(solver, jobs));
        Self {
            tasks: RwLock::new(HashMap::new()),
            submit,
        }
    }

    /// Register `task` and hand it to the solver worker.
    ///
    /// Returns the new task id immediately; the solve progresses in the
    /// background regardless of whether anyone ever polls for it. Id
    /// generation retries until the candidate is free among live ids.
    pub async fn enqueue(&self, task: CaptchaTask, callback_url: Option<String>) -> String {
        let (publish, outcome) = watch::channel(None);

        let task_id = {
            let mut tasks = self.tasks.write().await;
            let task_id = loop {
                let candidate = Uuid::new_v4().to_string();
                if !tasks.contains_key(&candidate) {
                    break candidate;
                }
            };
            tasks.insert(task_id.clone(), PendingSolve { outcome });
            task_id
        };

        let job = QueuedSolve {
            task_id: task_id.clone(),
            task,
            callback_url,
            publish,
        };
        if self.submit.send(job).is_err() {
            // Dropping the job drops its publish side, which resolves any
            // waiter to Cancelled.
            error!(task_id = %task_id, "solver worker is gone, task will never complete");
        }

        task_id
    }

    /// Look up the live computation bound to `task_id`.
    pub async fn lookup(&self, task_id: &str) -> Option<PendingSolve> {
        self.tasks.read().await.get(task_id).cloned()
    }

    /// Remove `task_id` from the registry.
    ///
    /// Returns `true` for exactly one caller per id; racing pollers use this
    /// to decide who delivers the result.
    pub async fn consume(&self, task_id: &str) -> bool {
        self.tasks.write().await.remove(task_id).is_some()
    }
}

/// Pull jobs in FIFO order and run them against the solver one at a time.
async fn run_worker(solver: Arc<dyn Solver>, mut jobs: mpsc::UnboundedReceiver<QueuedSolve>) {
    while let Some(job) = jobs.recv().await {
        info!(task_id = %job.task_id, task_type = job.task.type_name(), "presenting task");
        let outcome = solver.solve(job.task).await;
        match &outcome {
            Ok(_) => info!(task_id = %job.task_id, "done"),
            Err(e) => info!(task_id = %job.task_id, "done with error: {}", e),
        }
        // TODO deliver the outcome to callbackUrl instead of only logging it
        if job.callback_url.is_some() {
            error!(task_id = %job.task_id, "callbackUrl not supported");
        }
        let _ = job.publish.send(Some(outcome));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::RecaptchaV2TaskProxyless;
    use async_trait::async_trait;
    use serde_json::json;
    use tokio::sync::oneshot;

    fn test_task(url: &str) -> CaptchaTask {
        CaptchaTask::RecaptchaV2TaskProxyless(RecaptchaV2TaskProxyless {
            website_url: url.to_string(),
            website_key: "test-key".to_string(),
            website_s_token: None,
            recaptcha_data_s_value: None,
            is_invisible: None,
        })
    }

    /// Forwards each presented task to the test body, which picks the outcome.
    struct ScriptedSolver {
        calls: mpsc::UnboundedSender<(CaptchaTask, oneshot::Sender<SolveOutcome>)>,
    }

    #[async_trait]
    impl Solver for ScriptedSolver {
        async fn solve(&self, task: CaptchaTask) -> SolveOutcome {
            let (tx, rx) = oneshot::channel();
            if self.calls.send((task, tx)).is_err() {
                return Err(SolveError::Cancelled("test harness gone".to_string()));
            }
            rx.await
                .unwrap_or_else(|_| Err(SolveError::Cancelled("test harness gone".to_string())))
        }
    }

    fn scripted_queue() -> (
        TaskQueue,
        mpsc::UnboundedReceiver<(CaptchaTask, oneshot::Sender<SolveOutcome>)>,
    ) {
        let (calls, presented) = mpsc::unbounded_channel();
        let queue = TaskQueue::new(Arc::new(ScriptedSolver { calls }));
        (queue, presented)
    }

    #[tokio::test]
    async fn enqueued_tasks_get_distinct_live_ids() {
        let (queue, _presented) = scripted_queue();

        let t1 = queue.enqueue(test_task("https://one.test/"), None).await;
        let t2 = queue.enqueue(test_task("https://two.test/"), None).await;

        assert_ne!(t1, t2);
        assert!(queue.lookup(&t1).await.is_some());
        assert!(queue.lookup(&t2).await.is_some());
        assert!(queue.lookup("not-an-id").await.is_none());
    }

    #[tokio::test]
    async fn tasks_are_presented_in_creation_order() {
        let (queue, mut presented) = scripted_queue();

        queue.enqueue(test_task("https://one.test/"), None).await;
        queue.enqueue(test_task("https://two.test/"), None).await;
        queue.enqueue(test_task("https://three.test/"), None).await;

        for expected in ["https://one.test/", "https://two.test/", "https://three.test/"] {
            let (task, respond) = presented.recv().await.unwrap();
            assert_eq!(task.website_url(), expected);
            respond.send(Ok(json!({"token": expected}))).unwrap();
        }
    }

    #[tokio::test]
    async fn outcome_reaches_every_waiter() {
        let (queue, mut presented) = scripted_queue();
        let id = queue.enqueue(test_task("https://one.test/"), None).await;

        let mut waiter_a = queue.lookup(&id).await.unwrap();
        let mut waiter_b = queue.lookup(&id).await.unwrap();

        let (_, respond) = presented.recv().await.unwrap();
        respond.send(Ok(json!({"token": "abc"}))).unwrap();

        assert_eq!(waiter_a.wait().await.unwrap(), json!({"token": "abc"}));
        assert_eq!(waiter_b.wait().await.unwrap(), json!({"token": "abc"}));
    }

    #[tokio::test]
    async fn second_task_resolves_after_first_without_being_polled_first() {
        let (queue, mut presented) = scripted_queue();
        let t1 = queue.enqueue(test_task("https://one.test/"), None).await;
        let t2 = queue.enqueue(test_task("https://two.test/"), None).await;

        let (_, respond1) = presented.recv().await.unwrap();
        respond1.send(Ok(json!({"token": "first"}))).unwrap();
        let (_, respond2) = presented.recv().await.unwrap();
        respond2.send(Ok(json!({"token": "second"}))).unwrap();

        // Retrieve out of creation order.
        let mut p2 = queue.lookup(&t2).await.unwrap();
        assert_eq!(p2.wait().await.unwrap(), json!({"token": "second"}));
        assert!(queue.consume(&t2).await);

        let mut p1 = queue.lookup(&t1).await.unwrap();
        assert_eq!(p1.wait().await.unwrap(), json!({"token": "first"}));
        assert!(queue.consume(&t1).await);

        assert!(queue.lookup(&t1).await.is_none());
        assert!(queue.lookup(&t2).await.is_none());
    }

    #[tokio::test]
    async fn consume_succeeds_exactly_once() {
        let (queue, _presented) = scripted_queue();
        let id = queue.enqueue(test_task("https://one.test/"), None).await;

        assert!(queue.consume(&id).await);
        assert!(!queue.consume(&id).await);
        assert!(queue.lookup(&id).await.is_none());
    }

    #[tokio::test]
    async fn solver_failure_propagates_to_waiters() {
        let (queue, mut presented) = scripted_queue();
        let id = queue.enqueue(test_task("https://one.test/"), None).await;

        let (_, respond) = presented.recv().await.unwrap();
        respond
            .send(Err(SolveError::WidgetFailed("blank frame".to_string())))
            .unwrap();

        let mut pending = queue.lookup(&id).await.unwrap();
        match pending.wait().await {
            Err(SolveError::WidgetFailed(_)) => {}
            other => panic!("expected WidgetFailed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn torn_down_surface_cancels_instead_of_hanging() {
        let (queue, presented) = scripted_queue();
        let id = queue.enqueue(test_task("https://one.test/"), None).await;

        // Closing the presentation channel makes the scripted solver fail
        // the in-flight task, like a human closing the solving window.
        drop(presented);

        let mut pending = queue.lookup(&id).await.unwrap();
        match pending.wait().await {
            Err(SolveError::Cancelled(_)) => {}
            other => panic!("expected Cancelled, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn dropped_publisher_resolves_wait_to_cancelled() {
        let (publish, outcome) = watch::channel(None);
        let mut pending = PendingSolve { outcome };
        drop(publish);

        match pending.wait().await {
            Err(SolveError::Cancelled(_)) => {}
            other => panic!("expected Cancelled, got {:?}", other),
        }
    }
}
