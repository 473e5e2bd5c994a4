use serde::{Deserialize, Serialize};

use crate::huaweicloud::core::{json_display, sdk_enum, sdk_response};

sdk_enum! {
    pub struct CreateVpcRouteOptionType {
        PEERING = "peering",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct VpcRoute {
    pub id: String,
    pub destination: String,
    pub nexthop: String,
    pub r#type: String,
    pub vpc_id: String,
    pub tenant_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CreateVpcRouteOption {
    pub destination: String,
    /// ID of the peering connection the traffic is sent through.
    pub nexthop: String,
    pub r#type: CreateVpcRouteOptionType,
    pub vpc_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CreateVpcRouteRequestBody {
    pub route: CreateVpcRouteOption,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CreateVpcRouteRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<CreateVpcRouteRequestBody>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CreateVpcRouteResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<VpcRoute>,
    #[serde(skip)]
    pub http_status_code: u16,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ListVpcRoutesRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ListVpcRoutesResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routes: Option<Vec<VpcRoute>>,
    #[serde(skip)]
    pub http_status_code: u16,
}

json_display!(
    VpcRoute,
    CreateVpcRouteOption,
    CreateVpcRouteRequestBody,
    CreateVpcRouteRequest,
    CreateVpcRouteResponse,
    ListVpcRoutesRequest,
    ListVpcRoutesResponse,
);

sdk_response!(CreateVpcRouteResponse, ListVpcRoutesResponse);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::huaweicloud::core::testing::{assert_round_trip, wire_values};

    #[test]
    fn test_create_route_body() {
        let body = CreateVpcRouteRequestBody {
            route: CreateVpcRouteOption {
                destination: "192.168.200.0/24".into(),
                nexthop: "60c809cb-6731-45d0-ace8-3bf5626421a9".into(),
                r#type: CreateVpcRouteOptionType::PEERING,
                vpc_id: "3d42a0d4-a980-4613-ae76-a2cddecff054".into(),
            },
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["route"]["type"], "peering");

        let response: ListVpcRoutesResponse = serde_json::from_str(
            r#"{"routes": [{
                "destination": "192.168.200.0/24",
                "id": "3d42a0d4-a980-4613-ae76-a2cddecff054",
                "nexthop": "60c809cb-6731-45d0-ace8-3bf5626421a9",
                "tenant_id": "6fbe9263116a4b68818cf1edce16bc4f",
                "type": "peering",
                "vpc_id": "ab78be2d-782f-42a5-aa72-35879f6890ff"
            }]}"#,
        )
        .unwrap();
        let routes = response.routes.unwrap();
        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].r#type, CreateVpcRouteOptionType::PEERING.value());
    }


    #[test]
    fn test_enum_wire_values() {
        assert_eq!(wire_values(CreateVpcRouteOptionType::values()), ["peering"]);
    }

    #[test]
    fn test_round_trip() {
        for request in [
            CreateVpcRouteRequest::default(),
            CreateVpcRouteRequest {
                body: Some(CreateVpcRouteRequestBody {
                    route: CreateVpcRouteOption {
                        destination: "192.168.200.0/24".into(),
                        nexthop: "60c809cb-6731-45d0-ace8-3bf5626421a9".into(),
                        r#type: CreateVpcRouteOptionType::PEERING,
                        vpc_id: "3d42a0d4-a980-4613-ae76-a2cddecff054".into(),
                    },
                }),
            },
        ] {
            assert_round_trip(&request);
        }

        let route = VpcRoute {
            id: "3d42a0d4-a980-4613-ae76-a2cddecff054".into(),
            destination: "192.168.200.0/24".into(),
            nexthop: "60c809cb-6731-45d0-ace8-3bf5626421a9".into(),
            r#type: "peering".into(),
            vpc_id: "ab78be2d-782f-42a5-aa72-35879f6890ff".into(),
            tenant_id: "6fbe9263116a4b68818cf1edce16bc4f".into(),
        };
        for response in [
            CreateVpcRouteResponse::default(),
            CreateVpcRouteResponse {
                route: Some(route.clone()),
                http_status_code: 0,
            },
        ] {
            assert_round_trip(&response);
        }
        for response in [
            ListVpcRoutesResponse::default(),
            ListVpcRoutesResponse {
                routes: Some(vec![route, VpcRoute::default()]),
                http_status_code: 0,
            },
        ] {
            assert_round_trip(&response);
        }

        for request in [
            ListVpcRoutesRequest::default(),
            ListVpcRoutesRequest {
                r#type: Some("peering".into()),
                vpc_id: Some("ab78be2d-782f-42a5-aa72-35879f6890ff".into()),
                ..Default::default()
            },
        ] {
            assert_round_trip(&request);
        }
    }
}
