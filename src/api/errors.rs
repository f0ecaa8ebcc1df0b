//! The anti-captcha.com error-code table.
//!
//! Numeric ids and code strings are part of the wire contract and are
//! reproduced verbatim, typos included. The bridge itself only ever emits a
//! handful of these; the rest exist for protocol compatibility.

use serde::Serialize;

use crate::solver::SolveError;

/// One `{errorId, errorCode, errorDescription}` wire envelope.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ErrorEnvelope {
    #[serde(rename = "errorId")]
    pub error_id: u32,

    #[serde(rename = "errorCode")]
    pub error_code: &'static str,

    #[serde(rename = "errorDescription")]
    pub error_description: &'static str,
}

const fn envelope(
    error_id: u32,
    error_code: &'static str,
    error_description: &'static str,
) -> ErrorEnvelope {
    ErrorEnvelope {
        error_id,
        error_code,
        error_description,
    }
}

/// Map a solve failure to the envelope a poller receives.
pub fn solve_error_envelope(err: &SolveError) -> ErrorEnvelope {
    match err {
        SolveError::WidgetFailed(_) => ERROR_FAILED_LOADING_WIDGET,
        SolveError::Cancelled(_) | SolveError::Unsolvable(_) => ERROR_CAPTCHA_UNSOLVABLE,
    }
}

pub const ERROR_KEY_DOES_NOT_EXIST: ErrorEnvelope = envelope(
    1,
    "ERROR_KEY_DOES_NOT_EXIST",
    "Account authorization key not found in the system",
);

pub const ERROR_NO_SLOT_AVAILABLE: ErrorEnvelope = envelope(
    2,
    "ERROR_NO_SLOT_AVAILABLE",
    "No idle captcha workers are available at the moment, please try a bit later or try increasing your maximum bid here",
);

pub const ERROR_ZERO_CAPTCHA_FILESIZE: ErrorEnvelope = envelope(
    3,
    "ERROR_ZERO_CAPTCHA_FILESIZE",
    "The size of the captcha you are uploading is less than 100 bytes.",
);

pub const ERROR_TOO_BIG_CAPTCHA_FILESIZE: ErrorEnvelope = envelope(
    4,
    "ERROR_TOO_BIG_CAPTCHA_FILESIZE",
    "The size of the captcha you are uploading is more than 500,000 bytes.",
);

pub const ERROR_ZERO_BALANCE: ErrorEnvelope = envelope(
    10,
    "ERROR_ZERO_BALANCE",
    "Account has zeo or negative balance",
);

pub const ERROR_IP_NOT_ALLOWED: ErrorEnvelope = envelope(
    11,
    "ERROR_IP_NOT_ALLOWED",
    "Request with current account key is not allowed from your IP. Please refer to IP list section located here",
);

pub const ERROR_CAPTCHA_UNSOLVABLE: ErrorEnvelope = envelope(
    12,
    "ERROR_CAPTCHA_UNSOLVABLE",
    "Captcha could not be solved by 5 different workers",
);

pub const ERROR_BAD_DUPLICATES: ErrorEnvelope = envelope(
    13,
    "ERROR_BAD_DUPLICATES",
    "100% recognition feature did not work due to lack of amount of guess attempts",
);

pub const ERROR_NO_SUCH_METHOD: ErrorEnvelope = envelope(
    14,
    "ERROR_NO_SUCH_METHOD",
    "Request to API made with method which does not exist",
);

pub const ERROR_IMAGE_TYPE_NOT_SUPPORTED: ErrorEnvelope = envelope(
    15,
    "ERROR_IMAGE_TYPE_NOT_SUPPORTED",
    "Could not determine captcha file type by its exif header or image type is not supported. The only allowed formats are JPG, GIF, PNG",
);

pub const ERROR_NO_SUCH_CAPCHA_ID: ErrorEnvelope = envelope(
    16,
    "ERROR_NO_SUCH_CAPCHA_ID",
    "Captcha you are requesting does not exist in your current captchas list or has been expired.\nCaptchas are removed from API after 5 minutes after upload.\nReports for incorrect captchas accepted within 60 seconds after task completion by a worker.",
);

pub const ERROR_EMPTY_COMMENT: ErrorEnvelope = envelope(
    20,
    "ERROR_EMPTY_COMMENT",
    "\"comment\" property is required for this request",
);

pub const ERROR_IP_BLOCKED: ErrorEnvelope = envelope(
    21,
    "ERROR_IP_BLOCKED",
    "Your IP is blocked due to API inproper use. Check the reason at https://anti-captcha.com/panel/tools/ipsearch",
);

pub const ERROR_TASK_ABSENT: ErrorEnvelope = envelope(
    22,
    "ERROR_TASK_ABSENT",
    "Task property is empty or not set in createTask method. Please refer to API v2 documentation.",
);

pub const ERROR_TASK_NOT_SUPPORTED: ErrorEnvelope = envelope(
    23,
    "ERROR_TASK_NOT_SUPPORTED",
    "Task type is not supported or inproperly printed. Please check \"type\" parameter in task object.",
);

pub const ERROR_INCORRECT_SESSION_DATA: ErrorEnvelope = envelope(
    24,
    "ERROR_INCORRECT_SESSION_DATA",
    "Some of the required values for successive user emulation are missing.",
);

pub const ERROR_PROXY_CONNECT_REFUSED: ErrorEnvelope = envelope(
    25,
    "ERROR_PROXY_CONNECT_REFUSED",
    "Could not connect to proxy related to the task, connection refused",
);

pub const ERROR_PROXY_CONNECT_TIMEOUT: ErrorEnvelope = envelope(
    26,
    "ERROR_PROXY_CONNECT_TIMEOUT",
    "Could not connect to proxy related to the task, connection timeout",
);

pub const ERROR_PROXY_READ_TIMEOUT: ErrorEnvelope = envelope(
    27,
    "ERROR_PROXY_READ_TIMEOUT",
    "Connection to proxy for task has timed out",
);

pub const ERROR_PROXY_BANNED: ErrorEnvelope = envelope(
    28,
    "ERROR_PROXY_BANNED",
    "Proxy IP is banned by target service",
);

pub const ERROR_PROXY_TRANSPARENT: ErrorEnvelope = envelope(
    29,
    "ERROR_PROXY_TRANSPARENT",
    "Task denied at proxy checking state. Proxy must be non-transparent to hide our server IP.",
);

pub const ERROR_RECAPTCHA_TIMEOUT: ErrorEnvelope = envelope(
    30,
    "ERROR_RECAPTCHA_TIMEOUT",
    "Recaptcha task timeout, probably due to slow proxy server or Google server",
);

pub const ERROR_RECAPTCHA_INVALID_SITEKEY: ErrorEnvelope = envelope(
    31,
    "ERROR_RECAPTCHA_INVALID_SITEKEY",
    "Recaptcha server reported that site key is invalid",
);

pub const ERROR_RECAPTCHA_INVALID_DOMAIN: ErrorEnvelope = envelope(
    32,
    "ERROR_RECAPTCHA_INVALID_DOMAIN",
    "Recaptcha server reported that domain for this site key is invalid",
);

pub const ERROR_RECAPTCHA_OLD_BROWSER: ErrorEnvelope = envelope(
    33,
    "ERROR_RECAPTCHA_OLD_BROWSER",
    "Recaptcha server reported that browser user-agent is not compatible with their javascript",
);

pub const ERROR_TOKEN_EXPIRED: ErrorEnvelope = envelope(
    34,
    "ERROR_TOKEN_EXPIRED",
    "Captcha provider server reported that additional variable token has been expired. Please try again with new token.",
);

pub const ERROR_PROXY_HAS_NO_IMAGE_SUPPORT: ErrorEnvelope = envelope(
    35,
    "ERROR_PROXY_HAS_NO_IMAGE_SUPPORT",
    "Proxy does not support transfer of image data from Google servers",
);

pub const ERROR_PROXY_INCOMPATIBLE_HTTP_VERSION: ErrorEnvelope = envelope(
    36,
    "ERROR_PROXY_INCOMPATIBLE_HTTP_VERSION",
    "Proxy does not support long GET requests with length about 2000 bytes and does not support SSL connections",
);

pub const ERROR_FACTORY_SERVER_API_CONNECTION_FAILED: ErrorEnvelope = envelope(
    37,
    "ERROR_FACTORY_SERVER_API_CONNECTION_FAILED",
    "Could not connect to Factory Server API within 5 seconds",
);

pub const ERROR_FACTORY_SERVER_BAD_JSON: ErrorEnvelope = envelope(
    38,
    "ERROR_FACTORY_SERVER_BAD_JSON",
    "Incorrect Factory Server JSON response, something is broken",
);

pub const ERROR_FACTORY_SERVER_ERRORID_MISSING: ErrorEnvelope = envelope(
    39,
    "ERROR_FACTORY_SERVER_ERRORID_MISSING",
    "Factory Server API did not send any errorId",
);

pub const ERROR_FACTORY_SERVER_ERRORID_NOT_ZERO: ErrorEnvelope = envelope(
    40,
    "ERROR_FACTORY_SERVER_ERRORID_NOT_ZERO",
    "Factory Server API reported errorId != 0, check this error",
);

pub const ERROR_FACTORY_MISSING_PROPERTY: ErrorEnvelope = envelope(
    41,
    "ERROR_FACTORY_MISSING_PROPERTY",
    "Some of the required property values are missing in Factory form specifications. Customer must send all required values.",
);

pub const ERROR_FACTORY_PROPERTY_INCORRECT_FORMAT: ErrorEnvelope = envelope(
    42,
    "ERROR_FACTORY_PROPERTY_INCORRECT_FORMAT",
    "Expected other type of property value in Factory form structure. Customer must send specified value type.",
);

pub const ERROR_FACTORY_ACCESS_DENIED: ErrorEnvelope = envelope(
    43,
    "ERROR_FACTORY_ACCESS_DENIED",
    "Factory control belong to another account, check your account key.",
);

pub const ERROR_FACTORY_SERVER_OPERATION_FAILED: ErrorEnvelope = envelope(
    44,
    "ERROR_FACTORY_SERVER_OPERATION_FAILED",
    "Factory Server general error code",
);

pub const ERROR_FACTORY_PLATFORM_OPERATION_FAILED: ErrorEnvelope = envelope(
    45,
    "ERROR_FACTORY_PLATFORM_OPERATION_FAILED",
    "Factory Platform general error code.",
);

pub const ERROR_FACTORY_PROTOCOL_BROKEN: ErrorEnvelope = envelope(
    46,
    "ERROR_FACTORY_PROTOCOL_BROKEN",
    "Factory task lifetime protocol broken during task workflow.",
);

pub const ERROR_FACTORY_TASK_NOT_FOUND: ErrorEnvelope = envelope(
    47,
    "ERROR_FACTORY_TASK_NOT_FOUND",
    "Task not found or not available for this operation",
);

pub const ERROR_FACTORY_IS_SANDBOXED: ErrorEnvelope = envelope(
    48,
    "ERROR_FACTORY_IS_SANDBOXED",
    "Factory is sandboxed, creating tasks is possible only by Factory owner. Switch it to production mode to make it available for other customers.",
);

pub const ERROR_PROXY_NOT_AUTHORISED: ErrorEnvelope = envelope(
    49,
    "ERROR_PROXY_NOT_AUTHORISED",
    "Proxy login and password are incorrect",
);

pub const ERROR_FUNCAPTCHA_NOT_ALLOWED: ErrorEnvelope = envelope(
    50,
    "ERROR_FUNCAPTCHA_NOT_ALLOWED",
    "Customer did not enable Funcaptcha Proxyless tasks in Customers Area - API Settings.\nAll customers must read terms, pass mini test and sign/accept the form before being able to use this feature.",
);

pub const ERROR_INVISIBLE_RECAPTCHA: ErrorEnvelope = envelope(
    51,
    "ERROR_INVISIBLE_RECAPTCHA",
    "Recaptcha was attempted to be solved as usual one, instead of invisible mode. Basically you don't need to do anything when this error occurs, just continue sending tasks with this domain. Our system will self-learn to solve recaptchas from this sitekey in invisible mode.",
);

pub const ERROR_FAILED_LOADING_WIDGET: ErrorEnvelope = envelope(
    52,
    "ERROR_FAILED_LOADING_WIDGET",
    "Could not load captcha provider widget in worker browser. Please try sending new task.",
);

pub const ERROR_VISIBLE_RECAPTCHA: ErrorEnvelope = envelope(
    53,
    "ERROR_VISIBLE_RECAPTCHA",
    "Visible (v2) recaptcha was attempted to solved as invisible (v2)",
);

pub const ERROR_ALL_WORKERS_FILTERED: ErrorEnvelope = envelope(
    54,
    "ERROR_ALL_WORKERS_FILTERED",
    "No workers left which were not filtered by reportIncorrectRecaptcha method.",
);

pub const ERROR_ACCOUNT_SUSPENDED: ErrorEnvelope = envelope(
    55,
    "ERROR_ACCOUNT_SUSPENDED",
    "System suspended your account for a reason. Contact support for details.",
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_serializes_with_wire_field_names() {
        let json = serde_json::to_string(&ERROR_NO_SUCH_CAPCHA_ID).unwrap();
        assert!(json.starts_with(r#"{"errorId":16,"errorCode":"ERROR_NO_SUCH_CAPCHA_ID""#));
        assert!(json.contains("errorDescription"));
    }

    #[test]
    fn solve_failures_map_to_distinct_envelopes() {
        let widget = solve_error_envelope(&SolveError::WidgetFailed("x".to_string()));
        assert_eq!(widget.error_id, ERROR_FAILED_LOADING_WIDGET.error_id);

        let cancelled = solve_error_envelope(&SolveError::Cancelled("x".to_string()));
        assert_eq!(cancelled.error_id, ERROR_CAPTCHA_UNSOLVABLE.error_id);
    }
}
