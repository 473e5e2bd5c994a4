use thiserror::Error;

#[derive(Debug, Error)]
pub enum SdkError {
    #[error("invalid endpoint {0:?}: {1}")]
    Endpoint(String, url::ParseError),

    #[error("building request: {0}")]
    Request(String),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("service error {status} {error_code}: {error_msg} (request id: {request_id})")]
    Service {
        status: u16,
        error_code: String,
        error_msg: String,
        request_id: String,
    },
}

impl SdkError {
    /// Builds a service error from a non-2xx response body.
    ///
    /// The services disagree on the error shape: ECS sends
    /// `{"error": {"code", "message"}}`, VPC sends `{"code", "message"}`, and
    /// newer APIs send `{"error_code", "error_msg"}`.
    pub fn from_response_body(status: u16, request_id: String, body: &str) -> Self {
        let value: serde_json::Value = serde_json::from_str(body).unwrap_or_default();
        let pick = |keys: &[&str]| -> Option<String> {
            keys.iter().find_map(|key| {
                value
                    .get(key)
                    .or_else(|| value.get("error").and_then(|e| e.get(key)))
                    .and_then(|v| v.as_str())
                    .map(ToOwned::to_owned)
            })
        };

        SdkError::Service {
            status,
            error_code: pick(&["error_code", "code"]).unwrap_or_default(),
            error_msg: pick(&["error_msg", "message"]).unwrap_or_else(|| body.to_owned()),
            request_id,
        }
    }
}
