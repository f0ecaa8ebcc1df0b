//! Terminal-prompt solver.
//!
//! Stand-in for a real solving surface: prints what needs solving and reads
//! the response token from stdin, one line per task.

use async_trait::async_trait;
use serde_json::json;
use tracing::info;

use super::{CaptchaSolution, SolveError, Solver};
use crate::api::types::CaptchaTask;

pub struct ManualSolver;

#[async_trait]
impl Solver for ManualSolver {
    async fn solve(&self, task: CaptchaTask) -> Result<CaptchaSolution, SolveError> {
        info!(
            task_type = task.type_name(),
            url = task.website_url(),
            site_key = task.website_key(),
            "waiting for operator input"
        );
        println!(
            "solve {} for {} (site key {}), then paste the response token (empty line = give up):",
            task.type_name(),
            task.website_url(),
            task.website_key()
        );

        let line = tokio::task::spawn_blocking(|| {
            let mut line = String::new();
            std::io::stdin().read_line(&mut line).map(|read| (read, line))
        })
        .await
        .map_err(|e| SolveError::Cancelled(e.to_string()))?
        .map_err(|e| SolveError::Cancelled(e.to_string()))?;

        let (read, line) = line;
        if read == 0 {
            return Err(SolveError::Cancelled("stdin closed".to_string()));
        }
        let token = line.trim();
        if token.is_empty() {
            return Err(SolveError::Unsolvable(
                "operator skipped the task".to_string(),
            ));
        }
        Ok(json!({ "gRecaptchaResponse": token }))
    }
}
