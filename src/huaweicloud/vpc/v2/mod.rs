//! VPC API v2.

mod meta;
pub mod model;

use model::*;

use crate::huaweicloud::core::{regional_endpoint, Credentials, HcClient, HttpConfig, SdkError};

pub struct VpcClient {
    client: HcClient,
}

impl VpcClient {
    pub fn new(client: HcClient) -> Self {
        Self { client }
    }

    pub fn for_region(region: &str, credentials: Credentials, config: HttpConfig) -> Result<Self, SdkError> {
        HcClient::new(&regional_endpoint("vpc", region), credentials, config).map(Self::new)
    }

    pub async fn create_vpc(&self, request: &CreateVpcRequest) -> Result<CreateVpcResponse, SdkError> {
        self.client.execute(request).await
    }

    pub async fn show_vpc(&self, request: &ShowVpcRequest) -> Result<ShowVpcResponse, SdkError> {
        self.client.execute(request).await
    }

    pub async fn update_vpc(&self, request: &UpdateVpcRequest) -> Result<UpdateVpcResponse, SdkError> {
        self.client.execute(request).await
    }

    pub async fn list_vpcs(&self, request: &ListVpcsRequest) -> Result<ListVpcsResponse, SdkError> {
        self.client.execute(request).await
    }

    pub async fn delete_vpc(&self, request: &DeleteVpcRequest) -> Result<DeleteVpcResponse, SdkError> {
        self.client.execute(request).await
    }

    pub async fn create_subnet(&self, request: &CreateSubnetRequest) -> Result<CreateSubnetResponse, SdkError> {
        self.client.execute(request).await
    }

    pub async fn show_subnet(&self, request: &ShowSubnetRequest) -> Result<ShowSubnetResponse, SdkError> {
        self.client.execute(request).await
    }

    pub async fn list_subnets(&self, request: &ListSubnetsRequest) -> Result<ListSubnetsResponse, SdkError> {
        self.client.execute(request).await
    }

    pub async fn delete_subnet(&self, request: &DeleteSubnetRequest) -> Result<DeleteSubnetResponse, SdkError> {
        self.client.execute(request).await
    }

    pub async fn create_security_group(
        &self,
        request: &CreateSecurityGroupRequest,
    ) -> Result<CreateSecurityGroupResponse, SdkError> {
        self.client.execute(request).await
    }

    pub async fn list_security_groups(
        &self,
        request: &ListSecurityGroupsRequest,
    ) -> Result<ListSecurityGroupsResponse, SdkError> {
        self.client.execute(request).await
    }

    pub async fn create_security_group_rule(
        &self,
        request: &CreateSecurityGroupRuleRequest,
    ) -> Result<CreateSecurityGroupRuleResponse, SdkError> {
        self.client.execute(request).await
    }

    pub async fn delete_security_group_rule(
        &self,
        request: &DeleteSecurityGroupRuleRequest,
    ) -> Result<DeleteSecurityGroupRuleResponse, SdkError> {
        self.client.execute(request).await
    }

    pub async fn list_ports(&self, request: &ListPortsRequest) -> Result<ListPortsResponse, SdkError> {
        self.client.execute(request).await
    }

    pub async fn show_port(&self, request: &ShowPortRequest) -> Result<ShowPortResponse, SdkError> {
        self.client.execute(request).await
    }

    pub async fn create_vpc_peering(
        &self,
        request: &CreateVpcPeeringRequest,
    ) -> Result<CreateVpcPeeringResponse, SdkError> {
        self.client.execute(request).await
    }

    pub async fn accept_vpc_peering(
        &self,
        request: &AcceptVpcPeeringRequest,
    ) -> Result<AcceptVpcPeeringResponse, SdkError> {
        self.client.execute(request).await
    }

    pub async fn reject_vpc_peering(
        &self,
        request: &RejectVpcPeeringRequest,
    ) -> Result<RejectVpcPeeringResponse, SdkError> {
        self.client.execute(request).await
    }

    pub async fn create_vpc_route(&self, request: &CreateVpcRouteRequest) -> Result<CreateVpcRouteResponse, SdkError> {
        self.client.execute(request).await
    }

    pub async fn list_vpc_routes(&self, request: &ListVpcRoutesRequest) -> Result<ListVpcRoutesResponse, SdkError> {
        self.client.execute(request).await
    }
}
