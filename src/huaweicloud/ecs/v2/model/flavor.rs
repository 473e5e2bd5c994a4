use serde::{Deserialize, Serialize};

use crate::huaweicloud::core::{json_display, sdk_response};

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct FlavorLink {
    pub rel: String,
    pub href: String,
    #[serde(rename = "type")]
    pub r#type: String,
}

/// Scheduling and performance hints attached to a flavor.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct FlavorExtraSpec {
    #[serde(rename = "ecs:performancetype", skip_serializing_if = "Option::is_none")]
    pub ecs_performancetype: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    #[serde(rename = "ecs:generation", skip_serializing_if = "Option::is_none")]
    pub ecs_generation: Option<String>,
    #[serde(rename = "ecs:virtualization_env_types", skip_serializing_if = "Option::is_none")]
    pub ecs_virtualization_env_types: Option<String>,
    #[serde(rename = "pci_passthrough:enable_gpu", skip_serializing_if = "Option::is_none")]
    pub pci_passthrough_enable_gpu: Option<String>,
    #[serde(rename = "pci_passthrough:gpu_specs", skip_serializing_if = "Option::is_none")]
    pub pci_passthrough_gpu_specs: Option<String>,
    #[serde(rename = "cond:operation:status", skip_serializing_if = "Option::is_none")]
    pub cond_operation_status: Option<String>,
    #[serde(rename = "cond:operation:az", skip_serializing_if = "Option::is_none")]
    pub cond_operation_az: Option<String>,
    #[serde(rename = "quota:max_rate", skip_serializing_if = "Option::is_none")]
    pub quota_max_rate: Option<String>,
    #[serde(rename = "quota:min_rate", skip_serializing_if = "Option::is_none")]
    pub quota_min_rate: Option<String>,
    #[serde(rename = "quota:max_pps", skip_serializing_if = "Option::is_none")]
    pub quota_max_pps: Option<String>,
    #[serde(rename = "cond:operation:charge:stop", skip_serializing_if = "Option::is_none")]
    pub cond_operation_charge_stop: Option<String>,
    #[serde(rename = "cond:spot:operation:az", skip_serializing_if = "Option::is_none")]
    pub cond_spot_operation_az: Option<String>,
    #[serde(rename = "cond:spot:operation:status", skip_serializing_if = "Option::is_none")]
    pub cond_spot_operation_status: Option<String>,
}

/*
{
    "id": "c3.15xlarge.2",
    "name": "c3.15xlarge.2",
    "vcpus": "60",
    "ram": 131072,
    "disk": "0",
    "swap": "",
    "links": [],
    "OS-FLV-EXT-DATA:ephemeral": 0,
    "rxtx_factor": 1,
    "OS-FLV-DISABLED:disabled": false,
    "rxtx_quota": null,
    "rxtx_cap": null,
    "os-flavor-access:is_public": true,
    "os_extra_specs": {
        "ecs:virtualization_env_types": "CloudCompute",
        "ecs:generation": "c3",
        "ecs:performancetype": "computingv3",
        "resource_type": "IOoptimizedC3_2"
    }
}
 */
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Flavor {
    pub id: String,
    pub name: String,
    pub vcpus: String,
    /// Memory in MiB.
    pub ram: i32,
    pub disk: String,
    pub swap: String,
    #[serde(rename = "OS-FLV-EXT-DATA:ephemeral")]
    pub os_flv_ext_data_ephemeral: i32,
    #[serde(rename = "OS-FLV-DISABLED:disabled")]
    pub os_flv_disabled_disabled: bool,
    pub rxtx_factor: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rxtx_quota: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rxtx_cap: Option<String>,
    #[serde(rename = "os-flavor-access:is_public")]
    pub os_flavor_access_is_public: bool,
    pub links: Vec<FlavorLink>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub os_extra_specs: Option<FlavorExtraSpec>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ListFlavorsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_zone: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ListFlavorsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flavors: Option<Vec<Flavor>>,
    #[serde(skip)]
    pub http_status_code: u16,
}

json_display!(FlavorLink, FlavorExtraSpec, Flavor, ListFlavorsRequest, ListFlavorsResponse);

sdk_response!(ListFlavorsResponse);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::huaweicloud::core::testing::{assert_round_trip};

    #[test]
    fn test_flavor_list() {
        let response: ListFlavorsResponse = serde_json::from_str(
            r#"{"flavors": [{
                "id": "c3.15xlarge.2",
                "name": "c3.15xlarge.2",
                "vcpus": "60",
                "ram": 131072,
                "disk": "0",
                "swap": "",
                "links": [],
                "OS-FLV-EXT-DATA:ephemeral": 0,
                "rxtx_factor": 1,
                "OS-FLV-DISABLED:disabled": false,
                "rxtx_quota": null,
                "rxtx_cap": null,
                "os-flavor-access:is_public": true,
                "os_extra_specs": {
                    "ecs:virtualization_env_types": "CloudCompute",
                    "ecs:generation": "c3",
                    "ecs:performancetype": "computingv3",
                    "resource_type": "IOoptimizedC3_2",
                    "cond:operation:status": "normal"
                }
            }]}"#,
        )
        .unwrap();

        let flavors = response.flavors.unwrap();
        assert_eq!(flavors.len(), 1);
        let flavor = &flavors[0];
        assert_eq!(flavor.ram, 131072);
        assert!(flavor.os_flavor_access_is_public);
        assert_eq!(flavor.rxtx_quota, None);

        let specs = flavor.os_extra_specs.as_ref().unwrap();
        assert_eq!(specs.ecs_generation.as_deref(), Some("c3"));
        assert_eq!(specs.cond_operation_status.as_deref(), Some("normal"));

        let value = serde_json::to_value(flavor).unwrap();
        assert_eq!(value["os_extra_specs"]["ecs:performancetype"], "computingv3");
        assert!(value["os_extra_specs"].get("quota:max_rate").is_none());
    }


    #[test]
    fn test_round_trip() {
        let flavor = Flavor {
            id: "s6.small.1".into(),
            name: "s6.small.1".into(),
            vcpus: "1".into(),
            ram: 1024,
            disk: "0".into(),
            rxtx_factor: 1.0,
            rxtx_cap: Some("1000".into()),
            links: vec![FlavorLink {
                rel: "self".into(),
                href: "https://ecs.cn-north-4.myhuaweicloud.com/v1/flavors/s6.small.1".into(),
                r#type: String::new(),
            }],
            os_extra_specs: Some(FlavorExtraSpec {
                ecs_performancetype: Some("normal".into()),
                quota_max_pps: Some("100000".into()),
                ..Default::default()
            }),
            ..Default::default()
        };

        for response in [
            ListFlavorsResponse::default(),
            ListFlavorsResponse {
                flavors: Some(vec![]),
                http_status_code: 0,
            },
            ListFlavorsResponse {
                flavors: Some(vec![flavor, Flavor::default()]),
                http_status_code: 0,
            },
        ] {
            assert_round_trip(&response);
        }

        for request in [
            ListFlavorsRequest::default(),
            ListFlavorsRequest {
                availability_zone: Some("cn-north-4a".into()),
            },
        ] {
            assert_round_trip(&request);
        }
    }
}
