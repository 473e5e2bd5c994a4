use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::huaweicloud::core::serde_lossy::deserialize_sparse_map;
use crate::huaweicloud::core::{json_display, sdk_enum, sdk_response};

/*
"addresses": {
    "68269e6e-4a27-441b-8029-35373ad50bd9": [
        {
            "addr": "192.168.0.3",
            "version": "4",
            "OS-EXT-IPS-MAC:mac_addr": "fa:16:3e:1b:35:78",
            "OS-EXT-IPS:type": "fixed",
            "OS-EXT-IPS:port_id": "4db0b4a5-6b32-4b29-8c9c-8a1c3d2fd3dd"
        }
    ]
},
 */
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerAddress {
    /// IP version, `4` or `6`.
    pub version: String,
    pub addr: String,
    #[serde(rename = "OS-EXT-IPS:type", skip_serializing_if = "Option::is_none")]
    pub os_ext_ips_type: Option<ServerAddressOsExtIpsType>,
    #[serde(rename = "OS-EXT-IPS-MAC:mac_addr", skip_serializing_if = "Option::is_none")]
    pub os_ext_ips_mac_mac_addr: Option<String>,
    #[serde(rename = "OS-EXT-IPS:port_id", skip_serializing_if = "Option::is_none")]
    pub os_ext_ips_port_id: Option<String>,
}

sdk_enum! {
    pub struct ServerAddressOsExtIpsType {
        FIXED = "fixed",
        FLOATING = "floating",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerFlavor {
    pub id: String,
    pub name: String,
    pub disk: String,
    pub vcpus: String,
    /// Memory in MiB.
    pub ram: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpus: Option<Vec<GpuInfo>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asic_accelerators: Option<Vec<AsicAcceleratorInfo>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GpuInfo {
    pub name: String,
    pub count: i32,
    pub memory_mb: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AsicAcceleratorInfo {
    pub name: String,
    pub count: i32,
    pub memory_mb: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerImage {
    pub id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerSecurityGroup {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerExtendVolumeAttachment {
    pub id: String,
    pub delete_on_termination: String,
    #[serde(rename = "bootIndex", skip_serializing_if = "Option::is_none")]
    pub boot_index: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerFault {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerSchedulerHints {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenancy: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dedicated_host_id: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerSystemTag {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CpuOptions {
    #[serde(rename = "hw:cpu_threads", skip_serializing_if = "Option::is_none")]
    pub hw_cpu_threads: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Hypervisor {
    pub hypervisor_type: String,
    pub csd_hypervisor: String,
}

/// A cloud server as returned by the detail and list APIs.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerDetail {
    pub status: String,
    pub updated: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_terminate_time: Option<String>,
    #[serde(rename = "hostId")]
    pub host_id: String,
    #[serde(rename = "OS-EXT-SRV-ATTR:host")]
    pub os_ext_srv_attr_host: String,
    pub addresses: HashMap<String, Vec<ServerAddress>>,
    pub key_name: String,
    pub image: ServerImage,
    #[serde(rename = "OS-EXT-STS:task_state", skip_serializing_if = "Option::is_none")]
    pub os_ext_sts_task_state: Option<String>,
    #[serde(rename = "OS-EXT-STS:vm_state")]
    pub os_ext_sts_vm_state: String,
    #[serde(rename = "OS-EXT-SRV-ATTR:instance_name")]
    pub os_ext_srv_attr_instance_name: String,
    #[serde(rename = "OS-EXT-SRV-ATTR:hypervisor_hostname")]
    pub os_ext_srv_attr_hypervisor_hostname: String,
    pub flavor: ServerFlavor,
    pub id: String,
    pub security_groups: Vec<ServerSecurityGroup>,
    #[serde(rename = "OS-EXT-AZ:availability_zone")]
    pub os_ext_az_availability_zone: String,
    pub user_id: String,
    pub name: String,
    pub created: String,
    pub tenant_id: String,
    #[serde(rename = "OS-DCF:diskConfig", skip_serializing_if = "Option::is_none")]
    pub os_dcf_disk_config: Option<String>,
    #[serde(rename = "accessIPv4", skip_serializing_if = "Option::is_none")]
    pub access_ipv4: Option<String>,
    #[serde(rename = "accessIPv6", skip_serializing_if = "Option::is_none")]
    pub access_ipv6: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fault: Option<ServerFault>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<i32>,
    #[serde(rename = "OS-EXT-STS:power_state")]
    pub os_ext_sts_power_state: i32,
    pub config_drive: String,
    #[serde(deserialize_with = "deserialize_sparse_map")]
    pub metadata: HashMap<String, String>,
    #[serde(rename = "OS-SRV-USG:launched_at")]
    pub os_srv_usg_launched_at: String,
    #[serde(rename = "OS-SRV-USG:terminated_at")]
    pub os_srv_usg_terminated_at: String,
    #[serde(rename = "os-extended-volumes:volumes_attached")]
    pub os_extended_volumes_volumes_attached: Vec<ServerExtendVolumeAttachment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub host_status: String,
    #[serde(rename = "OS-EXT-SRV-ATTR:hostname")]
    pub os_ext_srv_attr_hostname: String,
    #[serde(rename = "OS-EXT-SRV-ATTR:reservation_id", skip_serializing_if = "Option::is_none")]
    pub os_ext_srv_attr_reservation_id: Option<String>,
    #[serde(rename = "OS-EXT-SRV-ATTR:launch_index", skip_serializing_if = "Option::is_none")]
    pub os_ext_srv_attr_launch_index: Option<i32>,
    #[serde(rename = "OS-EXT-SRV-ATTR:kernel_id", skip_serializing_if = "Option::is_none")]
    pub os_ext_srv_attr_kernel_id: Option<String>,
    #[serde(rename = "OS-EXT-SRV-ATTR:ramdisk_id", skip_serializing_if = "Option::is_none")]
    pub os_ext_srv_attr_ramdisk_id: Option<String>,
    #[serde(rename = "OS-EXT-SRV-ATTR:root_device_name", skip_serializing_if = "Option::is_none")]
    pub os_ext_srv_attr_root_device_name: Option<String>,
    #[serde(rename = "OS-EXT-SRV-ATTR:user_data", skip_serializing_if = "Option::is_none")]
    pub os_ext_srv_attr_user_data: Option<String>,
    pub locked: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(rename = "os:scheduler_hints", skip_serializing_if = "Option::is_none")]
    pub os_scheduler_hints: Option<ServerSchedulerHints>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enterprise_project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sys_tags: Option<Vec<ServerSystemTag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu_options: Option<CpuOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hypervisor: Option<Hypervisor>,
}

/// Query for `GET /v1/{project_id}/cloudservers/detail`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ListServersDetailsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enterprise_project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flavor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "not-tags", skip_serializing_if = "Option::is_none")]
    pub not_tags: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reservation_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_eq: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ListServersDetailsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub servers: Option<Vec<ServerDetail>>,
    #[serde(skip)]
    pub http_status_code: u16,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ShowServerRequest {
    pub server_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ShowServerResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<ServerDetail>,
    #[serde(skip)]
    pub http_status_code: u16,
}

json_display!(
    ServerAddress,
    ServerFlavor,
    GpuInfo,
    AsicAcceleratorInfo,
    ServerImage,
    ServerSecurityGroup,
    ServerExtendVolumeAttachment,
    ServerFault,
    ServerSchedulerHints,
    ServerSystemTag,
    CpuOptions,
    Hypervisor,
    ServerDetail,
    ListServersDetailsRequest,
    ListServersDetailsResponse,
    ShowServerRequest,
    ShowServerResponse,
);

sdk_response!(ListServersDetailsResponse, ShowServerResponse);
