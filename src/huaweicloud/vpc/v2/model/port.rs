use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::huaweicloud::core::{json_display, sdk_enum, sdk_response};

sdk_enum! {
    pub struct PortStatus {
        ACTIVE = "ACTIVE",
        BUILD = "BUILD",
        DOWN = "DOWN",
    }
}

sdk_enum! {
    pub struct PortDeviceOwner {
        NETWORKDHCP = "network:dhcp",
        NETWORKVIP_PORT = "network:VIP_PORT",
        NETWORKROUTER_INTERFACE_DISTRIBUTED = "network:router_interface_distributed",
        NETWORKROUTER_CENTRALIZED_SNAT = "network:router_centralized_snat",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct FixedIp {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AllowedAddressPair {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mac_address: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct BindingVifDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_interface: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port_filter: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ovs_hybrid_plug: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DnsAssignMent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fqdn: Option<String>,
}

/*
{
    "id": "d00f9c13-e9c0-4e2a-9a51-d6a6c5e0b2a1",
    "name": "",
    "status": "ACTIVE",
    "admin_state_up": true,
    "fixed_ips": [
        {"subnet_id": "70bd7ba8-8bbe-4b22-8c2b-4f4e3a5d7d5c", "ip_address": "192.168.0.130"}
    ],
    "mac_address": "fa:16:3e:3c:4a:b1",
    "network_id": "70bd7ba8-8bbe-4b22-8c2b-4f4e3a5d7d5c",
    "tenant_id": "060576782980d5762f9ec014dd2f1148",
    "device_id": "b0a9d2b4-2cae-4b66-a6ba-6af70f3bd7f8",
    "device_owner": "compute:cn-north-4a",
    "security_groups": ["16b6e77a-08fa-42c7-aa8b-106c048884e6"],
    "extra_dhcp_opts": [],
    "allowed_address_pairs": [],
    "binding:vnic_type": "normal",
    "binding:vif_details": {"primary_interface": true},
    "binding:profile": {},
    "port_security_enabled": true,
    "dns_assignment": [],
    "dns_name": ""
}
 */
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Port {
    pub id: String,
    pub name: String,
    pub network_id: String,
    pub admin_state_up: bool,
    pub mac_address: String,
    pub fixed_ips: Vec<FixedIp>,
    pub device_id: String,
    /// One of [`PortDeviceOwner`] for system ports, `compute:<az>` for
    /// server NICs.
    pub device_owner: PortDeviceOwner,
    pub tenant_id: String,
    pub status: PortStatus,
    pub security_groups: Vec<String>,
    pub allowed_address_pairs: Vec<AllowedAddressPair>,
    pub extra_dhcp_opts: Vec<super::ExtraDhcpOption>,
    #[serde(rename = "binding:vif_details")]
    pub binding_vif_details: BindingVifDetails,
    #[serde(rename = "binding:profile")]
    pub binding_profile: serde_json::Value,
    #[serde(rename = "binding:vnic_type")]
    pub binding_vnic_type: String,
    #[serde(rename = "binding:host_id", skip_serializing_if = "Option::is_none")]
    pub binding_host_id: Option<String>,
    pub dns_assignment: Vec<DnsAssignMent>,
    pub dns_name: String,
    pub port_security_enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<String>,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub tags: HashMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ListPortsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_state_up: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mac_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_owner: Option<PortDeviceOwner>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PortStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
    /// Sent as `fixed_ips=ip_address=<ip>` or `fixed_ips=subnet_id=<id>`, one
    /// pair per entry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_ips: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enterprise_project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_groups: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ListPortsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ports: Option<Vec<Port>>,
    #[serde(skip)]
    pub http_status_code: u16,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ShowPortRequest {
    pub port_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ShowPortResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<Port>,
    #[serde(skip)]
    pub http_status_code: u16,
}

json_display!(
    FixedIp,
    AllowedAddressPair,
    BindingVifDetails,
    DnsAssignMent,
    Port,
    ListPortsRequest,
    ListPortsResponse,
    ShowPortRequest,
    ShowPortResponse,
);

sdk_response!(ListPortsResponse, ShowPortResponse);
