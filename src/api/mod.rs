//! HTTP API speaking the anti-captcha.com wire protocol.
//!
//! ## Endpoints
//!
//! - `POST /createTask` - Register a captcha task, get a task id back
//! - `POST /getTaskResult` - Long-poll for the result bound to a task id
//!
//! Both bodies are JSON. `getTaskResult` for a known id answers over a
//! chunked stream, padding the wait with single-byte keep-alives so
//! intermediaries do not drop the connection before the human gets around
//! to the captcha.

pub mod errors;
mod routes;
pub mod types;

pub use routes::{serve, AppState};
pub use types::*;
