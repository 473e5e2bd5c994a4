//! Batch server actions on `POST /v1/{project_id}/cloudservers/action` and
//! batch deletion.

use serde::{Deserialize, Serialize};

use crate::huaweicloud::core::{json_display, sdk_enum, sdk_response};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerId {
    pub id: String,
}

impl ServerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct BatchStartServersOption {
    pub servers: Vec<ServerId>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct BatchStartServersRequestBody {
    #[serde(rename = "os-start")]
    pub os_start: BatchStartServersOption,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct BatchStartServersRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<BatchStartServersRequestBody>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct BatchStartServersResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    #[serde(skip)]
    pub http_status_code: u16,
}

sdk_enum! {
    /// How servers are stopped.
    pub struct BatchStopServersOptionType {
        SOFT = "SOFT",
        HARD = "HARD",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct BatchStopServersOption {
    pub servers: Vec<ServerId>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<BatchStopServersOptionType>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct BatchStopServersRequestBody {
    #[serde(rename = "os-stop")]
    pub os_stop: BatchStopServersOption,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct BatchStopServersRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<BatchStopServersRequestBody>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct BatchStopServersResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    #[serde(skip)]
    pub http_status_code: u16,
}

sdk_enum! {
    /// How servers are rebooted.
    pub struct BatchRebootSeversOptionType {
        SOFT = "SOFT",
        HARD = "HARD",
    }
}

// The API really spells it "Severs".
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct BatchRebootSeversOption {
    pub servers: Vec<ServerId>,
    #[serde(rename = "type")]
    pub r#type: BatchRebootSeversOptionType,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct BatchRebootServersRequestBody {
    pub reboot: BatchRebootSeversOption,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct BatchRebootServersRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<BatchRebootServersRequestBody>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct BatchRebootServersResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    #[serde(skip)]
    pub http_status_code: u16,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DeleteServersRequestBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_publicip: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_volume: Option<bool>,
    pub servers: Vec<ServerId>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DeleteServersRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<DeleteServersRequestBody>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DeleteServersResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    #[serde(skip)]
    pub http_status_code: u16,
}

json_display!(
    ServerId,
    BatchStartServersOption,
    BatchStartServersRequestBody,
    BatchStartServersRequest,
    BatchStartServersResponse,
    BatchStopServersOption,
    BatchStopServersRequestBody,
    BatchStopServersRequest,
    BatchStopServersResponse,
    BatchRebootSeversOption,
    BatchRebootServersRequestBody,
    BatchRebootServersRequest,
    BatchRebootServersResponse,
    DeleteServersRequestBody,
    DeleteServersRequest,
    DeleteServersResponse,
);

sdk_response!(
    BatchStartServersResponse,
    BatchStopServersResponse,
    BatchRebootServersResponse,
    DeleteServersResponse,
);
