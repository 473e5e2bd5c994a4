use serde::{Deserialize, Serialize};

use crate::huaweicloud::core::{json_display, sdk_enum, sdk_response};

sdk_enum! {
    pub struct SubnetStatus {
        ACTIVE = "ACTIVE",
        UNKNOWN = "UNKNOWN",
        ERROR = "ERROR",
    }
}

sdk_enum! {
    pub struct ExtraDhcpOptionOptName {
        NTP = "ntp",
        ADDRESSTIME = "addresstime",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ExtraDhcpOption {
    pub opt_name: ExtraDhcpOptionOptName,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opt_value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Subnet {
    pub id: String,
    pub name: String,
    pub description: String,
    pub cidr: String,
    pub gateway_ip: String,
    pub ipv6_enable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cidr_v6: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway_ip_v6: Option<String>,
    pub dhcp_enable: bool,
    pub primary_dns: String,
    pub secondary_dns: String,
    #[serde(rename = "dnsList")]
    pub dns_list: Vec<String>,
    pub availability_zone: String,
    pub vpc_id: String,
    pub status: SubnetStatus,
    pub neutron_network_id: String,
    pub neutron_subnet_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub neutron_subnet_id_v6: Option<String>,
    pub extra_dhcp_opts: Vec<ExtraDhcpOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CreateSubnetOption {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub cidr: String,
    pub vpc_id: String,
    pub gateway_ip: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipv6_enable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dhcp_enable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_dns: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_dns: Option<String>,
    #[serde(rename = "dnsList", skip_serializing_if = "Option::is_none")]
    pub dns_list: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_zone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_dhcp_opts: Option<Vec<ExtraDhcpOption>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CreateSubnetRequestBody {
    pub subnet: CreateSubnetOption,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CreateSubnetRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<CreateSubnetRequestBody>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CreateSubnetResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet: Option<Subnet>,
    #[serde(skip)]
    pub http_status_code: u16,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ShowSubnetRequest {
    pub subnet_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ShowSubnetResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet: Option<Subnet>,
    #[serde(skip)]
    pub http_status_code: u16,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ListSubnetsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ListSubnetsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnets: Option<Vec<Subnet>>,
    #[serde(skip)]
    pub http_status_code: u16,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DeleteSubnetRequest {
    pub vpc_id: String,
    pub subnet_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DeleteSubnetResponse {
    #[serde(skip)]
    pub http_status_code: u16,
}

json_display!(
    ExtraDhcpOption,
    Subnet,
    CreateSubnetOption,
    CreateSubnetRequestBody,
    CreateSubnetRequest,
    CreateSubnetResponse,
    ShowSubnetRequest,
    ShowSubnetResponse,
    ListSubnetsRequest,
    ListSubnetsResponse,
    DeleteSubnetRequest,
    DeleteSubnetResponse,
);

sdk_response!(CreateSubnetResponse, ShowSubnetResponse, ListSubnetsResponse, DeleteSubnetResponse);
