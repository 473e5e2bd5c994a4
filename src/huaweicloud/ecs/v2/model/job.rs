use serde::{Deserialize, Serialize};

use crate::huaweicloud::core::{json_display, sdk_enum, sdk_response};

sdk_enum! {
    pub struct ShowJobResponseStatus {
        SUCCESS = "SUCCESS",
        RUNNING = "RUNNING",
        FAIL = "FAIL",
        INIT = "INIT",
    }
}

sdk_enum! {
    pub struct SubJobStatus {
        SUCCESS = "SUCCESS",
        RUNNING = "RUNNING",
        FAIL = "FAIL",
        INIT = "INIT",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SubJobEntities {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nic_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errorcode_message: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SubJob {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<SubJobStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entities: Option<SubJobEntities>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub begin_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fail_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct JobEntities {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_jobs_total: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_jobs: Option<Vec<SubJob>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ShowJobRequest {
    pub job_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ShowJobResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub begin_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entities: Option<JobEntities>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fail_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ShowJobResponseStatus>,
    #[serde(skip)]
    pub http_status_code: u16,
}

impl ShowJobResponse {
    /// Whether the job reached `SUCCESS` or `FAIL`.
    pub fn is_finished(&self) -> bool {
        matches!(
            &self.status,
            Some(status) if *status == ShowJobResponseStatus::SUCCESS || *status == ShowJobResponseStatus::FAIL
        )
    }
}

json_display!(SubJobEntities, SubJob, JobEntities, ShowJobRequest, ShowJobResponse);

sdk_response!(ShowJobResponse);
