//! The solver boundary.
//!
//! The bridge needs exactly one capability from the solving side: an async
//! operation turning a [`CaptchaTask`] into an opaque solution payload or a
//! failure. Everything about presenting the widget to a human lives behind
//! this trait.

use async_trait::async_trait;
use thiserror::Error;

use crate::api::types::CaptchaTask;

mod manual;

pub use manual::ManualSolver;

/// Opaque success payload, returned verbatim to the caller.
pub type CaptchaSolution = serde_json::Value;

/// Failure outcomes of a solve attempt.
///
/// `Clone` because one outcome may fan out to several waiting pollers.
#[derive(Debug, Clone, Error)]
pub enum SolveError {
    /// The solving surface was closed or torn down before a solution arrived.
    #[error("solve cancelled: {0}")]
    Cancelled(String),

    /// The captcha widget could not be loaded on the solving surface.
    #[error("widget failed to load: {0}")]
    WidgetFailed(String),

    /// The human gave up on this captcha.
    #[error("captcha unsolvable: {0}")]
    Unsolvable(String),
}

/// A capability that solves captchas.
///
/// The queue worker drives implementations strictly sequentially; they never
/// see two concurrent `solve` calls.
#[async_trait]
pub trait Solver: Send + Sync {
    async fn solve(&self, task: CaptchaTask) -> Result<CaptchaSolution, SolveError>;
}
