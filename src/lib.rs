//! # decaptcha
//!
//! Human-in-the-loop CAPTCHA bridge.
//!
//! Automated callers submit CAPTCHA tasks over an anti-captcha.com-compatible
//! HTTP API; a human operator solves them one at a time on a single solving
//! surface; callers collect results by long-polling `getTaskResult`.
//!
//! ## Task Flow
//! 1. `POST /createTask` registers a task and immediately returns a task id
//! 2. The solver worker presents queued tasks to the human in creation order
//! 3. `POST /getTaskResult` holds the connection open, writing a whitespace
//!    keep-alive byte whenever an interval passes without the solve
//!    finishing, then streams the terminal result object
//!
//! ## Modules
//! - `api`: HTTP endpoints and the anti-captcha wire protocol
//! - `queue`: task registry and the single-surface solver worker
//! - `solver`: the `Solver` trait and the terminal-prompt demo solver

pub mod api;
pub mod config;
pub mod queue;
pub mod solver;

pub use config::Config;
pub use queue::TaskQueue;
pub use solver::{CaptchaSolution, SolveError, Solver};
