use serde::{Deserialize, Serialize};

use crate::huaweicloud::core::serde_lossy::null_as_default;
use crate::huaweicloud::core::{json_display, sdk_enum, sdk_response};

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SecurityGroupRule {
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    pub security_group_id: String,
    /// `ingress` or `egress`.
    pub direction: String,
    pub ethertype: String,
    #[serde(deserialize_with = "null_as_default")]
    pub protocol: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port_range_min: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port_range_max: Option<i32>,
    #[serde(deserialize_with = "null_as_default")]
    pub remote_ip_prefix: String,
    #[serde(deserialize_with = "null_as_default")]
    pub remote_group_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub remote_address_group_id: String,
    pub tenant_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SecurityGroup {
    pub name: String,
    pub description: String,
    pub id: String,
    pub vpc_id: String,
    pub enterprise_project_id: String,
    pub security_group_rules: Vec<SecurityGroupRule>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CreateSecurityGroupOption {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enterprise_project_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CreateSecurityGroupRequestBody {
    pub security_group: CreateSecurityGroupOption,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CreateSecurityGroupRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<CreateSecurityGroupRequestBody>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CreateSecurityGroupResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_group: Option<SecurityGroup>,
    #[serde(skip)]
    pub http_status_code: u16,
}

sdk_enum! {
    pub struct CreateSecurityGroupRuleOptionDirection {
        INGRESS = "ingress",
        EGRESS = "egress",
    }
}

sdk_enum! {
    pub struct CreateSecurityGroupRuleOptionEthertype {
        IPV4 = "IPv4",
        IPV6 = "IPv6",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CreateSecurityGroupRuleOption {
    pub security_group_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub direction: CreateSecurityGroupRuleOptionDirection,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ethertype: Option<CreateSecurityGroupRuleOptionEthertype>,
    /// `tcp`, `udp`, `icmp`, `icmpv6` or an IP protocol number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port_range_min: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port_range_max: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_ip_prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_address_group_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CreateSecurityGroupRuleRequestBody {
    pub security_group_rule: CreateSecurityGroupRuleOption,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CreateSecurityGroupRuleRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<CreateSecurityGroupRuleRequestBody>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CreateSecurityGroupRuleResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_group_rule: Option<SecurityGroupRule>,
    #[serde(skip)]
    pub http_status_code: u16,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ListSecurityGroupsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enterprise_project_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ListSecurityGroupsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_groups: Option<Vec<SecurityGroup>>,
    #[serde(skip)]
    pub http_status_code: u16,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DeleteSecurityGroupRuleRequest {
    pub security_group_rule_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DeleteSecurityGroupRuleResponse {
    #[serde(skip)]
    pub http_status_code: u16,
}

json_display!(
    SecurityGroupRule,
    SecurityGroup,
    CreateSecurityGroupOption,
    CreateSecurityGroupRequestBody,
    CreateSecurityGroupRequest,
    CreateSecurityGroupResponse,
    CreateSecurityGroupRuleOption,
    CreateSecurityGroupRuleRequestBody,
    CreateSecurityGroupRuleRequest,
    CreateSecurityGroupRuleResponse,
    ListSecurityGroupsRequest,
    ListSecurityGroupsResponse,
    DeleteSecurityGroupRuleRequest,
    DeleteSecurityGroupRuleResponse,
);

sdk_response!(
    CreateSecurityGroupResponse,
    CreateSecurityGroupRuleResponse,
    ListSecurityGroupsResponse,
    DeleteSecurityGroupRuleResponse,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::huaweicloud::core::testing::{assert_round_trip, wire_values};

    #[test]
    fn test_rule_option_wire_values() {
        let option = CreateSecurityGroupRuleOption {
            security_group_id: "16b6e77a-08fa-42c7-aa8b-106c048884e6".into(),
            direction: CreateSecurityGroupRuleOptionDirection::INGRESS,
            ethertype: Some(CreateSecurityGroupRuleOptionEthertype::IPV4),
            protocol: Some("tcp".into()),
            port_range_min: Some(22),
            port_range_max: Some(22),
            remote_ip_prefix: Some("0.0.0.0/0".into()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_string(&option).unwrap(),
            r#"{"security_group_id":"16b6e77a-08fa-42c7-aa8b-106c048884e6","direction":"ingress","ethertype":"IPv4","protocol":"tcp","port_range_min":22,"port_range_max":22,"remote_ip_prefix":"0.0.0.0/0"}"#
        );
    }

    #[test]
    fn test_enum_wire_values() {
        let test_vectors = [
            (wire_values(CreateSecurityGroupRuleOptionDirection::values()), vec!["ingress", "egress"]),
            (wire_values(CreateSecurityGroupRuleOptionEthertype::values()), vec!["IPv4", "IPv6"]),
        ];
        for (actual, expected) in test_vectors {
            assert_eq!(actual, expected);
        }
    }

    #[test]
    fn test_group_with_rules() {
        let response: ListSecurityGroupsResponse = serde_json::from_str(
            r#"{"security_groups": [{
                "id": "16b6e77a-08fa-42c7-aa8b-106c048884e6",
                "name": "qq",
                "description": "",
                "vpc_id": "3ec3b33f-ac1c-4630-ad1c-7dba1ed79d85",
                "enterprise_project_id": "0",
                "security_group_rules": [{
                    "direction": "egress",
                    "ethertype": "IPv6",
                    "id": "369e6499-b2cb-4126-972a-97e589692c62",
                    "description": "",
                    "security_group_id": "16b6e77a-08fa-42c7-aa8b-106c048884e6",
                    "remote_group_id": null,
                    "remote_ip_prefix": "",
                    "protocol": "",
                    "port_range_max": null,
                    "port_range_min": null,
                    "tenant_id": "060576782980d5762f9ec014dd2f1148"
                }]
            }]}"#,
        )
        .unwrap();

        let groups = response.security_groups.unwrap();
        let rule = &groups[0].security_group_rules[0];
        assert_eq!(rule.direction, "egress");
        assert_eq!(rule.remote_group_id, "");
        assert_eq!(rule.port_range_max, None);
        assert_eq!(rule.remote_address_group_id, "");
    }


    #[test]
    fn test_round_trip() {
        for request in [
            CreateSecurityGroupRequest::default(),
            CreateSecurityGroupRequest {
                body: Some(CreateSecurityGroupRequestBody {
                    security_group: CreateSecurityGroupOption {
                        name: "qq".into(),
                        vpc_id: None,
                        enterprise_project_id: Some("0".into()),
                    },
                }),
            },
        ] {
            assert_round_trip(&request);
        }

        for request in [
            CreateSecurityGroupRuleRequest::default(),
            CreateSecurityGroupRuleRequest {
                body: Some(CreateSecurityGroupRuleRequestBody {
                    security_group_rule: CreateSecurityGroupRuleOption {
                        security_group_id: "16b6e77a-08fa-42c7-aa8b-106c048884e6".into(),
                        direction: CreateSecurityGroupRuleOptionDirection::EGRESS,
                        ethertype: Some(CreateSecurityGroupRuleOptionEthertype::IPV6),
                        remote_group_id: Some("8b9f7d3e-2c1a-4e5f-9a8b-7c6d5e4f3a2b".into()),
                        ..Default::default()
                    },
                }),
            },
        ] {
            assert_round_trip(&request);
        }

        let rule = SecurityGroupRule {
            id: "369e6499-b2cb-4126-972a-97e589692c62".into(),
            security_group_id: "16b6e77a-08fa-42c7-aa8b-106c048884e6".into(),
            direction: "ingress".into(),
            ethertype: "IPv4".into(),
            protocol: "tcp".into(),
            port_range_min: Some(80),
            port_range_max: Some(443),
            ..Default::default()
        };
        for response in [
            CreateSecurityGroupRuleResponse::default(),
            CreateSecurityGroupRuleResponse {
                security_group_rule: Some(rule.clone()),
                http_status_code: 0,
            },
        ] {
            assert_round_trip(&response);
        }

        let group = SecurityGroup {
            name: "qq".into(),
            id: "16b6e77a-08fa-42c7-aa8b-106c048884e6".into(),
            security_group_rules: vec![rule, SecurityGroupRule::default()],
            ..Default::default()
        };
        assert_round_trip(&CreateSecurityGroupResponse {
            security_group: Some(group.clone()),
            http_status_code: 0,
        });
        for response in [
            ListSecurityGroupsResponse::default(),
            ListSecurityGroupsResponse {
                security_groups: Some(vec![group, SecurityGroup::default()]),
                http_status_code: 0,
            },
        ] {
            assert_round_trip(&response);
        }

        assert_round_trip(&ListSecurityGroupsRequest {
            limit: Some(10),
            vpc_id: Some("3ec3b33f-ac1c-4630-ad1c-7dba1ed79d85".into()),
            ..Default::default()
        });
    }
}
