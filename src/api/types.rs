//! Wire request and response types.
//!
//! Field names and shapes follow the anti-captcha.com task schemas. The
//! bridge never interprets task payloads beyond deserialization; semantic
//! validity is the solver's concern.

use serde::{Deserialize, Serialize};

/// Body of `POST /createTask`.
///
/// Unknown extra fields are ignored; callers drift and the protocol
/// tolerates it.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTaskBody {
    pub task: CaptchaTask,

    #[serde(rename = "callbackUrl")]
    pub callback_url: Option<String>,
}

/// Body of `POST /getTaskResult`.
#[derive(Debug, Clone, Deserialize)]
pub struct GetTaskResultBody {
    #[serde(rename = "taskId")]
    pub task_id: String,
}

/// Successful `createTask` response.
#[derive(Debug, Clone, Serialize)]
pub struct CreateTaskResponse {
    #[serde(rename = "errorId")]
    pub error_id: u32,

    #[serde(rename = "taskId")]
    pub task_id: String,
}

/// Terminal object of a successful `getTaskResult` stream.
#[derive(Debug, Clone, Serialize)]
pub struct ReadyResponse {
    #[serde(rename = "errorId")]
    pub error_id: u32,

    pub status: &'static str,

    pub solution: serde_json::Value,
}

/// One captcha task, discriminated by its `type` tag.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CaptchaTask {
    HCaptchaTaskProxyless(HCaptchaTaskProxyless),
    HCaptchaTask(HCaptchaTask),
    RecaptchaV2TaskProxyless(RecaptchaV2TaskProxyless),
    RecaptchaV2Task(RecaptchaV2Task),
}

impl CaptchaTask {
    /// The `type` tag as it appears on the wire.
    pub fn type_name(&self) -> &'static str {
        match self {
            CaptchaTask::HCaptchaTaskProxyless(_) => "HCaptchaTaskProxyless",
            CaptchaTask::HCaptchaTask(_) => "HCaptchaTask",
            CaptchaTask::RecaptchaV2TaskProxyless(_) => "RecaptchaV2TaskProxyless",
            CaptchaTask::RecaptchaV2Task(_) => "RecaptchaV2Task",
        }
    }

    pub fn website_url(&self) -> &str {
        match self {
            CaptchaTask::HCaptchaTaskProxyless(t) => &t.website_url,
            CaptchaTask::HCaptchaTask(t) => &t.website_url,
            CaptchaTask::RecaptchaV2TaskProxyless(t) => &t.website_url,
            CaptchaTask::RecaptchaV2Task(t) => &t.website_url,
        }
    }

    pub fn website_key(&self) -> &str {
        match self {
            CaptchaTask::HCaptchaTaskProxyless(t) => &t.website_key,
            CaptchaTask::HCaptchaTask(t) => &t.website_key,
            CaptchaTask::RecaptchaV2TaskProxyless(t) => &t.website_key,
            CaptchaTask::RecaptchaV2Task(t) => &t.website_key,
        }
    }
}

/// hCaptcha solved from the bridge's own network vantage point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HCaptchaTaskProxyless {
    #[serde(rename = "websiteURL")]
    pub website_url: String,

    #[serde(rename = "websiteKey")]
    pub website_key: String,
}

/// hCaptcha solved through the caller's proxy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HCaptchaTask {
    #[serde(rename = "websiteURL")]
    pub website_url: String,

    #[serde(rename = "websiteKey")]
    pub website_key: String,

    #[serde(rename = "proxyType")]
    pub proxy_type: ProxyType,

    #[serde(rename = "proxyAddress")]
    pub proxy_address: String,

    #[serde(rename = "proxyPort")]
    pub proxy_port: u16,

    #[serde(rename = "userAgent")]
    pub user_agent: String,

    #[serde(rename = "proxyLogin", skip_serializing_if = "Option::is_none")]
    pub proxy_login: Option<String>,

    #[serde(rename = "proxyPassword", skip_serializing_if = "Option::is_none")]
    pub proxy_password: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cookies: Option<String>,
}

/// reCAPTCHA v2 solved from the bridge's own network vantage point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecaptchaV2TaskProxyless {
    #[serde(rename = "websiteURL")]
    pub website_url: String,

    #[serde(rename = "websiteKey")]
    pub website_key: String,

    #[serde(rename = "websiteSToken", skip_serializing_if = "Option::is_none")]
    pub website_s_token: Option<String>,

    #[serde(
        rename = "recaptchaDataSValue",
        skip_serializing_if = "Option::is_none"
    )]
    pub recaptcha_data_s_value: Option<String>,

    #[serde(rename = "isInvisible", skip_serializing_if = "Option::is_none")]
    pub is_invisible: Option<bool>,
}

/// reCAPTCHA v2 solved through the caller's proxy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecaptchaV2Task {
    #[serde(rename = "websiteURL")]
    pub website_url: String,

    #[serde(rename = "websiteKey")]
    pub website_key: String,

    #[serde(rename = "proxyType")]
    pub proxy_type: ProxyType,

    #[serde(rename = "proxyAddress")]
    pub proxy_address: String,

    #[serde(rename = "proxyPort")]
    pub proxy_port: u16,

    #[serde(rename = "userAgent")]
    pub user_agent: String,

    #[serde(rename = "proxyLogin", skip_serializing_if = "Option::is_none")]
    pub proxy_login: Option<String>,

    #[serde(rename = "proxyPassword", skip_serializing_if = "Option::is_none")]
    pub proxy_password: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cookies: Option<String>,

    #[serde(rename = "websiteSToken", skip_serializing_if = "Option::is_none")]
    pub website_s_token: Option<String>,

    #[serde(
        rename = "recaptchaDataSValue",
        skip_serializing_if = "Option::is_none"
    )]
    pub recaptcha_data_s_value: Option<String>,

    #[serde(rename = "isInvisible", skip_serializing_if = "Option::is_none")]
    pub is_invisible: Option<bool>,
}

/// Proxy protocol accepted in proxied task shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProxyType {
    Http,
    Https,
    Socks4,
    Socks5,
}
