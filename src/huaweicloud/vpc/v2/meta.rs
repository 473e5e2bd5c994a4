//! HTTP mapping of every VPC request model.

use reqwest::Method;

use super::model::*;
use crate::huaweicloud::core::request::{json_body, push_query, push_query_list};
use crate::huaweicloud::core::RequestDef;

const VPCS_PATH: &str = "/v1/{project_id}/vpcs";
const VPC_PATH: &str = "/v1/{project_id}/vpcs/{vpc_id}";
const SUBNETS_PATH: &str = "/v1/{project_id}/subnets";
const SECURITY_GROUP_RULES_PATH: &str = "/v1/{project_id}/security-group-rules";
const PEERINGS_PATH: &str = "/v2.0/vpc/peerings";
const ROUTES_PATH: &str = "/v2.0/vpc/routes";

impl RequestDef for CreateVpcRequest {
    type Response = CreateVpcResponse;

    fn method(&self) -> Method {
        Method::POST
    }

    fn path(&self) -> &'static str {
        VPCS_PATH
    }

    fn body(&self) -> Result<Option<serde_json::Value>, serde_json::Error> {
        json_body(&self.body)
    }
}

impl RequestDef for ShowVpcRequest {
    type Response = ShowVpcResponse;

    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> &'static str {
        VPC_PATH
    }

    fn path_params(&self) -> Vec<(&'static str, String)> {
        vec![("vpc_id", self.vpc_id.clone())]
    }
}

impl RequestDef for UpdateVpcRequest {
    type Response = UpdateVpcResponse;

    fn method(&self) -> Method {
        Method::PUT
    }

    fn path(&self) -> &'static str {
        VPC_PATH
    }

    fn path_params(&self) -> Vec<(&'static str, String)> {
        vec![("vpc_id", self.vpc_id.clone())]
    }

    fn body(&self) -> Result<Option<serde_json::Value>, serde_json::Error> {
        json_body(&self.body)
    }
}

impl RequestDef for ListVpcsRequest {
    type Response = ListVpcsResponse;

    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> &'static str {
        VPCS_PATH
    }

    fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        push_query(&mut params, "limit", &self.limit);
        push_query(&mut params, "marker", &self.marker);
        push_query(&mut params, "id", &self.id);
        push_query(&mut params, "enterprise_project_id", &self.enterprise_project_id);
        params
    }
}

impl RequestDef for DeleteVpcRequest {
    type Response = DeleteVpcResponse;

    fn method(&self) -> Method {
        Method::DELETE
    }

    fn path(&self) -> &'static str {
        VPC_PATH
    }

    fn path_params(&self) -> Vec<(&'static str, String)> {
        vec![("vpc_id", self.vpc_id.clone())]
    }
}

impl RequestDef for CreateSubnetRequest {
    type Response = CreateSubnetResponse;

    fn method(&self) -> Method {
        Method::POST
    }

    fn path(&self) -> &'static str {
        SUBNETS_PATH
    }

    fn body(&self) -> Result<Option<serde_json::Value>, serde_json::Error> {
        json_body(&self.body)
    }
}

impl RequestDef for ShowSubnetRequest {
    type Response = ShowSubnetResponse;

    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> &'static str {
        "/v1/{project_id}/subnets/{subnet_id}"
    }

    fn path_params(&self) -> Vec<(&'static str, String)> {
        vec![("subnet_id", self.subnet_id.clone())]
    }
}

impl RequestDef for ListSubnetsRequest {
    type Response = ListSubnetsResponse;

    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> &'static str {
        SUBNETS_PATH
    }

    fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        push_query(&mut params, "limit", &self.limit);
        push_query(&mut params, "marker", &self.marker);
        push_query(&mut params, "vpc_id", &self.vpc_id);
        params
    }
}

impl RequestDef for DeleteSubnetRequest {
    type Response = DeleteSubnetResponse;

    fn method(&self) -> Method {
        Method::DELETE
    }

    fn path(&self) -> &'static str {
        "/v1/{project_id}/vpcs/{vpc_id}/subnets/{subnet_id}"
    }

    fn path_params(&self) -> Vec<(&'static str, String)> {
        vec![("vpc_id", self.vpc_id.clone()), ("subnet_id", self.subnet_id.clone())]
    }
}

impl RequestDef for CreateSecurityGroupRequest {
    type Response = CreateSecurityGroupResponse;

    fn method(&self) -> Method {
        Method::POST
    }

    fn path(&self) -> &'static str {
        "/v1/{project_id}/security-groups"
    }

    fn body(&self) -> Result<Option<serde_json::Value>, serde_json::Error> {
        json_body(&self.body)
    }
}

impl RequestDef for ListSecurityGroupsRequest {
    type Response = ListSecurityGroupsResponse;

    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> &'static str {
        "/v1/{project_id}/security-groups"
    }

    fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        push_query(&mut params, "limit", &self.limit);
        push_query(&mut params, "marker", &self.marker);
        push_query(&mut params, "vpc_id", &self.vpc_id);
        push_query(&mut params, "enterprise_project_id", &self.enterprise_project_id);
        params
    }
}

impl RequestDef for CreateSecurityGroupRuleRequest {
    type Response = CreateSecurityGroupRuleResponse;

    fn method(&self) -> Method {
        Method::POST
    }

    fn path(&self) -> &'static str {
        SECURITY_GROUP_RULES_PATH
    }

    fn body(&self) -> Result<Option<serde_json::Value>, serde_json::Error> {
        json_body(&self.body)
    }
}

impl RequestDef for DeleteSecurityGroupRuleRequest {
    type Response = DeleteSecurityGroupRuleResponse;

    fn method(&self) -> Method {
        Method::DELETE
    }

    fn path(&self) -> &'static str {
        "/v1/{project_id}/security-group-rules/{security_group_rule_id}"
    }

    fn path_params(&self) -> Vec<(&'static str, String)> {
        vec![("security_group_rule_id", self.security_group_rule_id.clone())]
    }
}

impl RequestDef for ListPortsRequest {
    type Response = ListPortsResponse;

    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> &'static str {
        "/v1/{project_id}/ports"
    }

    fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        push_query(&mut params, "name", &self.name);
        push_query(&mut params, "id", &self.id);
        push_query(&mut params, "limit", &self.limit);
        push_query(&mut params, "admin_state_up", &self.admin_state_up);
        push_query(&mut params, "network_id", &self.network_id);
        push_query(&mut params, "mac_address", &self.mac_address);
        push_query(&mut params, "device_id", &self.device_id);
        push_query(&mut params, "device_owner", &self.device_owner);
        push_query(&mut params, "status", &self.status);
        push_query(&mut params, "marker", &self.marker);
        push_query_list(&mut params, "fixed_ips", &self.fixed_ips);
        push_query(&mut params, "enterprise_project_id", &self.enterprise_project_id);
        push_query_list(&mut params, "security_groups", &self.security_groups);
        params
    }
}

impl RequestDef for ShowPortRequest {
    type Response = ShowPortResponse;

    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> &'static str {
        "/v1/{project_id}/ports/{port_id}"
    }

    fn path_params(&self) -> Vec<(&'static str, String)> {
        vec![("port_id", self.port_id.clone())]
    }
}

impl RequestDef for CreateVpcPeeringRequest {
    type Response = CreateVpcPeeringResponse;

    fn method(&self) -> Method {
        Method::POST
    }

    fn path(&self) -> &'static str {
        PEERINGS_PATH
    }

    fn body(&self) -> Result<Option<serde_json::Value>, serde_json::Error> {
        json_body(&self.body)
    }
}

impl RequestDef for AcceptVpcPeeringRequest {
    type Response = AcceptVpcPeeringResponse;

    fn method(&self) -> Method {
        Method::PUT
    }

    fn path(&self) -> &'static str {
        "/v2.0/vpc/peerings/{peering_id}/accept"
    }

    fn path_params(&self) -> Vec<(&'static str, String)> {
        vec![("peering_id", self.peering_id.clone())]
    }
}

impl RequestDef for RejectVpcPeeringRequest {
    type Response = RejectVpcPeeringResponse;

    fn method(&self) -> Method {
        Method::PUT
    }

    fn path(&self) -> &'static str {
        "/v2.0/vpc/peerings/{peering_id}/reject"
    }

    fn path_params(&self) -> Vec<(&'static str, String)> {
        vec![("peering_id", self.peering_id.clone())]
    }
}

impl RequestDef for CreateVpcRouteRequest {
    type Response = CreateVpcRouteResponse;

    fn method(&self) -> Method {
        Method::POST
    }

    fn path(&self) -> &'static str {
        ROUTES_PATH
    }

    fn body(&self) -> Result<Option<serde_json::Value>, serde_json::Error> {
        json_body(&self.body)
    }
}

impl RequestDef for ListVpcRoutesRequest {
    type Response = ListVpcRoutesResponse;

    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> &'static str {
        ROUTES_PATH
    }

    fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        push_query(&mut params, "limit", &self.limit);
        push_query(&mut params, "marker", &self.marker);
        push_query(&mut params, "id", &self.id);
        push_query(&mut params, "type", &self.r#type);
        push_query(&mut params, "vpc_id", &self.vpc_id);
        push_query(&mut params, "destination", &self.destination);
        push_query(&mut params, "tenant_id", &self.tenant_id);
        params
    }
}
