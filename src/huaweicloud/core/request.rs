use reqwest::Method;
use serde::{de::DeserializeOwned, Serialize};
use url::Url;

use super::{Credentials, SdkError};

/// Placeholder filled from [`Credentials::project_id`].
pub const PROJECT_ID_PARAM: &str = "project_id";

/// A response model. The status code is not part of the body and is filled in
/// after decoding.
pub trait SdkResponse: DeserializeOwned {
    fn set_http_status_code(&mut self, code: u16);
}

/// How a request model maps onto an HTTP call.
pub trait RequestDef {
    type Response: SdkResponse;

    fn method(&self) -> Method;

    /// Path template, e.g. `/v1/{project_id}/cloudservers/{server_id}`.
    fn path(&self) -> &'static str;

    fn path_params(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }

    fn query_params(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }

    fn body(&self) -> Result<Option<serde_json::Value>, serde_json::Error> {
        Ok(None)
    }
}

/// Serializes an optional body model.
pub fn json_body<T: Serialize>(body: &Option<T>) -> Result<Option<serde_json::Value>, serde_json::Error> {
    body.as_ref().map(serde_json::to_value).transpose()
}

/// Appends `(name, value)` to `params` when `value` is set.
pub fn push_query<T: ToString>(params: &mut Vec<(&'static str, String)>, name: &'static str, value: &Option<T>) {
    if let Some(value) = value {
        params.push((name, value.to_string()));
    }
}

/// Appends one `(name, item)` pair per list entry.
pub fn push_query_list<T: ToString>(
    params: &mut Vec<(&'static str, String)>,
    name: &'static str,
    values: &Option<Vec<T>>,
) {
    for value in values.iter().flatten() {
        params.push((name, value.to_string()));
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub segments: Vec<String>,
    pub query: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
}

impl HttpRequest {
    pub fn from_def<R: RequestDef>(def: &R, credentials: &Credentials) -> Result<Self, SdkError> {
        let mut params = def.path_params();
        params.push((PROJECT_ID_PARAM, credentials.project_id.clone()));

        let segments = def
            .path()
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(|segment| {
                let Some(name) = segment.strip_prefix('{').and_then(|s| s.strip_suffix('}')) else {
                    return Ok(segment.to_owned());
                };
                match params.iter().find(|(param, _)| *param == name) {
                    Some((_, value)) if !value.is_empty() => Ok(value.clone()),
                    _ => Err(SdkError::Request(format!(
                        "missing path parameter {name:?} for {}",
                        def.path()
                    ))),
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        let query = def
            .query_params()
            .into_iter()
            .map(|(name, value)| (name.to_owned(), value))
            .collect();

        Ok(Self {
            method: def.method(),
            segments,
            query,
            body: def.body()?,
        })
    }

    /// The interpolated path, unencoded.
    pub fn path(&self) -> String {
        let mut path = String::new();
        for segment in &self.segments {
            path.push('/');
            path.push_str(segment);
        }
        path
    }

    /// Resolves this request against `endpoint`, percent-encoding path
    /// segments and query values.
    pub fn url(&self, endpoint: &Url) -> Result<Url, SdkError> {
        let mut url = endpoint.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| SdkError::Request(format!("{endpoint} cannot be a base URL")))?;
            path.pop_if_empty();
            path.extend(&self.segments);
        }
        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&self.query);
        }
        Ok(url)
    }
}
