use serde::{Deserialize, Serialize};

use crate::huaweicloud::core::{json_display, sdk_enum, sdk_response};

sdk_enum! {
    pub struct VpcPeeringStatus {
        PENDING_ACCEPTANCE = "PENDING_ACCEPTANCE",
        REJECTED = "REJECTED",
        EXPIRED = "EXPIRED",
        DELETED = "DELETED",
        ACTIVE = "ACTIVE",
    }
}

/// One end of a peering connection.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct VpcInfo {
    pub vpc_id: String,
    /// Only needed when the peer VPC belongs to another tenant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,
}

/*
{
    "name": "test",
    "id": "22b76469-08e3-4937-8c1d-7aad34892be1",
    "request_vpc_info": {"vpc_id": "9daeac7c-a98f-430f-8e38-67f9c044e299", "tenant_id": "f65e9ebc-ed1c-4b22-9a2f-0b4e2a7f9c70"},
    "accept_vpc_info": {"vpc_id": "f583c072-0bb8-4e19-afb2-afb7c1693be5", "tenant_id": "f65e9ebc-ed1c-4b22-9a2f-0b4e2a7f9c70"},
    "status": "ACTIVE",
    "created_at": "2020-09-09T06:49:03",
    "updated_at": "2020-09-09T06:49:03",
    "description": "test"
}
 */
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct VpcPeering {
    pub id: String,
    pub name: String,
    pub status: VpcPeeringStatus,
    pub request_vpc_info: VpcInfo,
    pub accept_vpc_info: VpcInfo,
    pub description: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CreateVpcPeeringOption {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub request_vpc_info: VpcInfo,
    pub accept_vpc_info: VpcInfo,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CreateVpcPeeringRequestBody {
    pub peering: CreateVpcPeeringOption,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CreateVpcPeeringRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<CreateVpcPeeringRequestBody>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CreateVpcPeeringResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peering: Option<VpcPeering>,
    #[serde(skip)]
    pub http_status_code: u16,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AcceptVpcPeeringRequest {
    pub peering_id: String,
}

/// Accept and reject answer with the peering itself, flattened.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AcceptVpcPeeringResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<VpcPeeringStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_vpc_info: Option<VpcInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accept_vpc_info: Option<VpcInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(skip)]
    pub http_status_code: u16,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RejectVpcPeeringRequest {
    pub peering_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RejectVpcPeeringResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<VpcPeeringStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_vpc_info: Option<VpcInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accept_vpc_info: Option<VpcInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(skip)]
    pub http_status_code: u16,
}

json_display!(
    VpcInfo,
    VpcPeering,
    CreateVpcPeeringOption,
    CreateVpcPeeringRequestBody,
    CreateVpcPeeringRequest,
    CreateVpcPeeringResponse,
    AcceptVpcPeeringRequest,
    AcceptVpcPeeringResponse,
    RejectVpcPeeringRequest,
    RejectVpcPeeringResponse,
);

sdk_response!(CreateVpcPeeringResponse, AcceptVpcPeeringResponse, RejectVpcPeeringResponse);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::huaweicloud::core::testing::{assert_round_trip, wire_values};

    #[test]
    fn test_create_peering_body() {
        let body = CreateVpcPeeringRequestBody {
            peering: CreateVpcPeeringOption {
                name: "test".into(),
                request_vpc_info: VpcInfo {
                    vpc_id: "9daeac7c-a98f-430f-8e38-67f9c044e299".into(),
                    tenant_id: None,
                },
                accept_vpc_info: VpcInfo {
                    vpc_id: "f583c072-0bb8-4e19-afb2-afb7c1693be5".into(),
                    tenant_id: Some("f65e9ebc".into()),
                },
                ..Default::default()
            },
        };
        assert_eq!(
            body.to_string(),
            r#"CreateVpcPeeringRequestBody {"peering":{"name":"test","request_vpc_info":{"vpc_id":"9daeac7c-a98f-430f-8e38-67f9c044e299"},"accept_vpc_info":{"vpc_id":"f583c072-0bb8-4e19-afb2-afb7c1693be5","tenant_id":"f65e9ebc"}}}"#
        );
    }

    #[test]
    fn test_accept_response_is_flat() {
        let response: AcceptVpcPeeringResponse = serde_json::from_str(
            r#"{
                "name": "test",
                "id": "22b76469-08e3-4937-8c1d-7aad34892be1",
                "request_vpc_info": {"vpc_id": "9daeac7c-a98f-430f-8e38-67f9c044e299", "tenant_id": "f65e9ebc"},
                "accept_vpc_info": {"vpc_id": "f583c072-0bb8-4e19-afb2-afb7c1693be5", "tenant_id": "f65e9ebc"},
                "status": "ACTIVE",
                "created_at": "2020-09-09T06:49:03",
                "updated_at": "2020-09-09T06:49:03",
                "description": "test"
            }"#,
        )
        .unwrap();
        assert_eq!(response.status, Some(VpcPeeringStatus::ACTIVE));
        assert_eq!(response.accept_vpc_info.unwrap().vpc_id, "f583c072-0bb8-4e19-afb2-afb7c1693be5");
    }


    #[test]
    fn test_enum_wire_values() {
        assert_eq!(
            wire_values(VpcPeeringStatus::values()),
            ["PENDING_ACCEPTANCE", "REJECTED", "EXPIRED", "DELETED", "ACTIVE"]
        );
    }

    #[test]
    fn test_round_trip() {
        let request_vpc = VpcInfo {
            vpc_id: "9daeac7c-a98f-430f-8e38-67f9c044e299".into(),
            tenant_id: None,
        };
        let accept_vpc = VpcInfo {
            vpc_id: "f583c072-0bb8-4e19-afb2-afb7c1693be5".into(),
            tenant_id: Some("f65e9ebc".into()),
        };

        for request in [
            CreateVpcPeeringRequest::default(),
            CreateVpcPeeringRequest {
                body: Some(CreateVpcPeeringRequestBody {
                    peering: CreateVpcPeeringOption {
                        name: "test".into(),
                        description: Some("peer".into()),
                        request_vpc_info: request_vpc.clone(),
                        accept_vpc_info: accept_vpc.clone(),
                    },
                }),
            },
        ] {
            assert_round_trip(&request);
        }

        for response in [
            CreateVpcPeeringResponse::default(),
            CreateVpcPeeringResponse {
                peering: Some(VpcPeering {
                    id: "22b76469-08e3-4937-8c1d-7aad34892be1".into(),
                    name: "test".into(),
                    status: VpcPeeringStatus::PENDING_ACCEPTANCE,
                    request_vpc_info: request_vpc.clone(),
                    accept_vpc_info: accept_vpc.clone(),
                    ..Default::default()
                }),
                http_status_code: 0,
            },
        ] {
            assert_round_trip(&response);
        }

        for response in [
            AcceptVpcPeeringResponse::default(),
            AcceptVpcPeeringResponse {
                id: Some("22b76469-08e3-4937-8c1d-7aad34892be1".into()),
                status: Some(VpcPeeringStatus::ACTIVE),
                accept_vpc_info: Some(accept_vpc.clone()),
                ..Default::default()
            },
        ] {
            assert_round_trip(&response);
        }

        for response in [
            RejectVpcPeeringResponse::default(),
            RejectVpcPeeringResponse {
                id: Some("22b76469-08e3-4937-8c1d-7aad34892be1".into()),
                status: Some(VpcPeeringStatus::REJECTED),
                request_vpc_info: Some(request_vpc),
                ..Default::default()
            },
        ] {
            assert_round_trip(&response);
        }

        assert_round_trip(&AcceptVpcPeeringRequest {
            peering_id: "22b76469-08e3-4937-8c1d-7aad34892be1".into(),
        });
        assert_round_trip(&RejectVpcPeeringRequest {
            peering_id: "22b76469-08e3-4937-8c1d-7aad34892be1".into(),
        });
    }
}
