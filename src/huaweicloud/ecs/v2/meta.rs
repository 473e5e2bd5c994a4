//! HTTP mapping of every ECS request model.

use reqwest::Method;

use super::model::*;
use crate::huaweicloud::core::request::{json_body, push_query};
use crate::huaweicloud::core::RequestDef;

const ACTION_PATH: &str = "/v1/{project_id}/cloudservers/action";

impl RequestDef for ListServersDetailsRequest {
    type Response = ListServersDetailsResponse;

    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> &'static str {
        "/v1/{project_id}/cloudservers/detail"
    }

    fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        push_query(&mut params, "enterprise_project_id", &self.enterprise_project_id);
        push_query(&mut params, "flavor", &self.flavor);
        push_query(&mut params, "ip", &self.ip);
        push_query(&mut params, "limit", &self.limit);
        push_query(&mut params, "name", &self.name);
        push_query(&mut params, "not-tags", &self.not_tags);
        push_query(&mut params, "offset", &self.offset);
        push_query(&mut params, "reservation_id", &self.reservation_id);
        push_query(&mut params, "status", &self.status);
        push_query(&mut params, "tags", &self.tags);
        push_query(&mut params, "ip_eq", &self.ip_eq);
        push_query(&mut params, "server_id", &self.server_id);
        params
    }
}

impl RequestDef for ShowServerRequest {
    type Response = ShowServerResponse;

    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> &'static str {
        "/v1/{project_id}/cloudservers/{server_id}"
    }

    fn path_params(&self) -> Vec<(&'static str, String)> {
        vec![("server_id", self.server_id.clone())]
    }
}

impl RequestDef for BatchStartServersRequest {
    type Response = BatchStartServersResponse;

    fn method(&self) -> Method {
        Method::POST
    }

    fn path(&self) -> &'static str {
        ACTION_PATH
    }

    fn body(&self) -> Result<Option<serde_json::Value>, serde_json::Error> {
        json_body(&self.body)
    }
}

impl RequestDef for BatchStopServersRequest {
    type Response = BatchStopServersResponse;

    fn method(&self) -> Method {
        Method::POST
    }

    fn path(&self) -> &'static str {
        ACTION_PATH
    }

    fn body(&self) -> Result<Option<serde_json::Value>, serde_json::Error> {
        json_body(&self.body)
    }
}

impl RequestDef for BatchRebootServersRequest {
    type Response = BatchRebootServersResponse;

    fn method(&self) -> Method {
        Method::POST
    }

    fn path(&self) -> &'static str {
        ACTION_PATH
    }

    fn body(&self) -> Result<Option<serde_json::Value>, serde_json::Error> {
        json_body(&self.body)
    }
}

impl RequestDef for DeleteServersRequest {
    type Response = DeleteServersResponse;

    fn method(&self) -> Method {
        Method::POST
    }

    fn path(&self) -> &'static str {
        "/v1/{project_id}/cloudservers/delete"
    }

    fn body(&self) -> Result<Option<serde_json::Value>, serde_json::Error> {
        json_body(&self.body)
    }
}

impl RequestDef for ResizeServerRequest {
    type Response = ResizeServerResponse;

    fn method(&self) -> Method {
        Method::POST
    }

    fn path(&self) -> &'static str {
        "/v1.1/{project_id}/cloudservers/{server_id}/resize"
    }

    fn path_params(&self) -> Vec<(&'static str, String)> {
        vec![("server_id", self.server_id.clone())]
    }

    fn body(&self) -> Result<Option<serde_json::Value>, serde_json::Error> {
        json_body(&self.body)
    }
}

impl RequestDef for ListFlavorsRequest {
    type Response = ListFlavorsResponse;

    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> &'static str {
        "/v1/{project_id}/cloudservers/flavors"
    }

    fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        push_query(&mut params, "availability_zone", &self.availability_zone);
        params
    }
}

impl RequestDef for ShowJobRequest {
    type Response = ShowJobResponse;

    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> &'static str {
        "/v1/{project_id}/jobs/{job_id}"
    }

    fn path_params(&self) -> Vec<(&'static str, String)> {
        vec![("job_id", self.job_id.clone())]
    }
}
