use serde::{Deserialize, Serialize};

use crate::huaweicloud::core::{json_display, sdk_enum, sdk_response};

sdk_enum! {
    pub struct VpcStatus {
        CREATING = "CREATING",
        OK = "OK",
        ERROR = "ERROR",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Route {
    pub destination: String,
    pub nexthop: String,
}

/*
{
    "id": "99d9d709-8478-4b46-9f3f-2206b1023fd3",
    "name": "vpc",
    "description": "test",
    "cidr": "192.168.0.0/16",
    "status": "CREATING",
    "enterprise_project_id": "0aad99bc-f5f6-4f78-8404-c598d76b0ed2",
    "routes": [],
    "enable_shared_snat": false
}
 */
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Vpc {
    pub id: String,
    pub name: String,
    pub cidr: String,
    pub description: String,
    pub status: VpcStatus,
    pub routes: Vec<Route>,
    pub enable_shared_snat: bool,
    pub enterprise_project_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CreateVpcOption {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cidr: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enterprise_project_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CreateVpcRequestBody {
    pub vpc: CreateVpcOption,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CreateVpcRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<CreateVpcRequestBody>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CreateVpcResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc: Option<Vpc>,
    #[serde(skip)]
    pub http_status_code: u16,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ShowVpcRequest {
    pub vpc_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ShowVpcResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc: Option<Vpc>,
    #[serde(skip)]
    pub http_status_code: u16,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct UpdateVpcOption {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cidr: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routes: Option<Vec<Route>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_shared_snat: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct UpdateVpcRequestBody {
    pub vpc: UpdateVpcOption,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct UpdateVpcRequest {
    pub vpc_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<UpdateVpcRequestBody>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct UpdateVpcResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc: Option<Vpc>,
    #[serde(skip)]
    pub http_status_code: u16,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ListVpcsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enterprise_project_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ListVpcsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpcs: Option<Vec<Vpc>>,
    #[serde(skip)]
    pub http_status_code: u16,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DeleteVpcRequest {
    pub vpc_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DeleteVpcResponse {
    #[serde(skip)]
    pub http_status_code: u16,
}

json_display!(
    Route,
    Vpc,
    CreateVpcOption,
    CreateVpcRequestBody,
    CreateVpcRequest,
    CreateVpcResponse,
    ShowVpcRequest,
    ShowVpcResponse,
    UpdateVpcOption,
    UpdateVpcRequestBody,
    UpdateVpcRequest,
    UpdateVpcResponse,
    ListVpcsRequest,
    ListVpcsResponse,
    DeleteVpcRequest,
    DeleteVpcResponse,
);

sdk_response!(CreateVpcResponse, ShowVpcResponse, UpdateVpcResponse, ListVpcsResponse, DeleteVpcResponse);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::huaweicloud::core::testing::{assert_round_trip, wire_values};

    #[test]
    fn test_vpc_round_trip() {
        let response: CreateVpcResponse = serde_json::from_str(
            r#"{"vpc": {
                "id": "99d9d709-8478-4b46-9f3f-2206b1023fd3",
                "name": "vpc",
                "description": "test",
                "cidr": "192.168.0.0/16",
                "status": "CREATING",
                "enterprise_project_id": "0aad99bc-f5f6-4f78-8404-c598d76b0ed2",
                "routes": [{"destination": "0.0.0.0/0", "nexthop": "192.168.0.5"}],
                "enable_shared_snat": false
            }}"#,
        )
        .unwrap();

        let vpc = response.vpc.clone().unwrap();
        assert_eq!(vpc.status, VpcStatus::CREATING);
        assert_eq!(vpc.routes[0].nexthop, "192.168.0.5");

        let decoded: CreateVpcResponse = serde_json::from_str(&serde_json::to_string(&response).unwrap()).unwrap();
        assert_eq!(decoded.vpc, response.vpc);
    }

    #[test]
    fn test_update_only_sends_set_fields() {
        let body = UpdateVpcRequestBody {
            vpc: UpdateVpcOption {
                name: Some("vpc-renamed".into()),
                routes: Some(vec![]),
                ..Default::default()
            },
        };
        assert_eq!(
            body.to_string(),
            r#"UpdateVpcRequestBody {"vpc":{"name":"vpc-renamed","routes":[]}}"#
        );
    }


    #[test]
    fn test_enum_wire_values() {
        assert_eq!(wire_values(VpcStatus::values()), ["CREATING", "OK", "ERROR"]);
    }

    #[test]
    fn test_request_round_trip() {
        for request in [
            CreateVpcRequest::default(),
            CreateVpcRequest {
                body: Some(CreateVpcRequestBody {
                    vpc: CreateVpcOption {
                        cidr: Some("192.168.0.0/16".into()),
                        name: Some("vpc".into()),
                        ..Default::default()
                    },
                }),
            },
        ] {
            assert_round_trip(&request);
        }

        for request in [
            UpdateVpcRequest {
                vpc_id: "99d9d709-8478-4b46-9f3f-2206b1023fd3".into(),
                body: None,
            },
            UpdateVpcRequest {
                vpc_id: "99d9d709-8478-4b46-9f3f-2206b1023fd3".into(),
                body: Some(UpdateVpcRequestBody {
                    vpc: UpdateVpcOption {
                        routes: Some(vec![Route {
                            destination: "0.0.0.0/0".into(),
                            nexthop: "192.168.0.5".into(),
                        }]),
                        enable_shared_snat: Some(true),
                        ..Default::default()
                    },
                }),
            },
        ] {
            assert_round_trip(&request);
        }

        assert_round_trip(&ListVpcsRequest::default());
        assert_round_trip(&ListVpcsRequest {
            limit: Some(10),
            enterprise_project_id: Some("0".into()),
            ..Default::default()
        });
        assert_round_trip(&ShowVpcRequest {
            vpc_id: "99d9d709-8478-4b46-9f3f-2206b1023fd3".into(),
        });
    }

    #[test]
    fn test_response_round_trip() {
        let vpc = Vpc {
            id: "99d9d709-8478-4b46-9f3f-2206b1023fd3".into(),
            name: "vpc".into(),
            cidr: "192.168.0.0/16".into(),
            status: VpcStatus::OK,
            created_at: Some("2022-12-15T02:25:11".into()),
            ..Default::default()
        };
        for response in [
            ShowVpcResponse::default(),
            ShowVpcResponse {
                vpc: Some(vpc.clone()),
                http_status_code: 0,
            },
        ] {
            assert_round_trip(&response);
        }
        assert_round_trip(&UpdateVpcResponse {
            vpc: Some(vpc.clone()),
            http_status_code: 0,
        });
        for response in [
            ListVpcsResponse::default(),
            ListVpcsResponse {
                vpcs: Some(vec![vpc, Vpc::default()]),
                http_status_code: 0,
            },
        ] {
            assert_round_trip(&response);
        }
        assert_round_trip(&DeleteVpcResponse::default());
    }
}
