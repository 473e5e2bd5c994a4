use serde::{Deserialize, Serialize};

use super::CpuOptions;
use crate::huaweicloud::core::{json_display, sdk_response};

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ResizeServerExtendParam {
    /// `"true"` pays yearly/monthly orders automatically.
    #[serde(rename = "isAutoPay", skip_serializing_if = "Option::is_none")]
    pub is_auto_pay: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ResizePrePaidServerOption {
    #[serde(rename = "flavorRef")]
    pub flavor_ref: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dedicated_host_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extendparam: Option<ResizeServerExtendParam>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu_options: Option<CpuOptions>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ResizeServerRequestBody {
    pub resize: ResizePrePaidServerOption,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ResizeServerRequest {
    pub server_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<ResizeServerRequestBody>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ResizeServerResponse {
    /// Set for prepaid servers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    #[serde(skip)]
    pub http_status_code: u16,
}

json_display!(
    ResizeServerExtendParam,
    ResizePrePaidServerOption,
    ResizeServerRequestBody,
    ResizeServerRequest,
    ResizeServerResponse,
);

sdk_response!(ResizeServerResponse);
