use std::time::Duration;

use reqwest::{header::HeaderMap, Client};
use tracing::{debug, warn};
use url::Url;

use super::{HttpRequest, RequestDef, SdkError, SdkResponse};

const AUTH_TOKEN_HEADER: &str = "X-Auth-Token";
const PROJECT_ID_HEADER: &str = "X-Project-Id";
const REQUEST_ID_HEADER: &str = "X-Request-Id";

/// Regional endpoint of a service, e.g. `https://ecs.cn-north-4.myhuaweicloud.com`.
pub fn regional_endpoint(service: &str, region: &str) -> String {
    format!("https://{service}.{region}.myhuaweicloud.com")
}

#[derive(Debug, Clone)]
pub struct HttpConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub ignore_ssl_verification: bool,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(120),
            connect_timeout: Duration::from_secs(60),
            ignore_ssl_verification: false,
        }
    }
}

/// Token credentials scoped to a project.
#[derive(Clone)]
pub struct Credentials {
    pub project_id: String,
    pub auth_token: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("project_id", &self.project_id)
            .field("auth_token", &"<redacted>")
            .finish()
    }
}

/// Sends request models to one service endpoint.
#[derive(Debug, Clone)]
pub struct HcClient {
    endpoint: Url,
    credentials: Credentials,
    http_client: Client,
}

impl HcClient {
    pub fn new(endpoint: &str, credentials: Credentials, config: HttpConfig) -> Result<Self, SdkError> {
        let endpoint = Url::parse(endpoint).map_err(|e| SdkError::Endpoint(endpoint.to_owned(), e))?;
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .danger_accept_invalid_certs(config.ignore_ssl_verification)
            .build()?;

        Ok(Self {
            endpoint,
            credentials,
            http_client,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub async fn execute<R: RequestDef>(&self, request: &R) -> Result<R::Response, SdkError> {
        let http_request = HttpRequest::from_def(request, &self.credentials)?;
        let url = http_request.url(&self.endpoint)?;
        debug!("{} {}", http_request.method, url);

        let mut builder = self
            .http_client
            .request(http_request.method.clone(), url)
            .header(AUTH_TOKEN_HEADER, &self.credentials.auth_token)
            .header(PROJECT_ID_HEADER, &self.credentials.project_id);
        if let Some(body) = &http_request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let request_id = request_id(response.headers());
        let text = response.text().await?;

        if !status.is_success() {
            warn!("{} {} failed with {status}", http_request.method, http_request.path());
            return Err(SdkError::from_response_body(status.as_u16(), request_id, &text));
        }

        // Deletes and actions answer with an empty body.
        let text = if text.trim().is_empty() { "{}" } else { text.as_str() };
        let mut decoded: R::Response = serde_json::from_str(text)?;
        decoded.set_http_status_code(status.as_u16());
        Ok(decoded)
    }
}

fn request_id(headers: &HeaderMap) -> String {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_owned()
}
