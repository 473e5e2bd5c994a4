//! ECS API v2.

mod meta;
pub mod model;

use model::*;

use crate::huaweicloud::core::{regional_endpoint, Credentials, HcClient, HttpConfig, SdkError};

pub struct EcsClient {
    client: HcClient,
}

impl EcsClient {
    pub fn new(client: HcClient) -> Self {
        Self { client }
    }

    pub fn for_region(region: &str, credentials: Credentials, config: HttpConfig) -> Result<Self, SdkError> {
        HcClient::new(&regional_endpoint("ecs", region), credentials, config).map(Self::new)
    }

    pub async fn list_servers_details(
        &self,
        request: &ListServersDetailsRequest,
    ) -> Result<ListServersDetailsResponse, SdkError> {
        self.client.execute(request).await
    }

    pub async fn show_server(&self, request: &ShowServerRequest) -> Result<ShowServerResponse, SdkError> {
        self.client.execute(request).await
    }

    pub async fn batch_start_servers(
        &self,
        request: &BatchStartServersRequest,
    ) -> Result<BatchStartServersResponse, SdkError> {
        self.client.execute(request).await
    }

    pub async fn batch_stop_servers(
        &self,
        request: &BatchStopServersRequest,
    ) -> Result<BatchStopServersResponse, SdkError> {
        self.client.execute(request).await
    }

    pub async fn batch_reboot_servers(
        &self,
        request: &BatchRebootServersRequest,
    ) -> Result<BatchRebootServersResponse, SdkError> {
        self.client.execute(request).await
    }

    pub async fn delete_servers(&self, request: &DeleteServersRequest) -> Result<DeleteServersResponse, SdkError> {
        self.client.execute(request).await
    }

    pub async fn resize_server(&self, request: &ResizeServerRequest) -> Result<ResizeServerResponse, SdkError> {
        self.client.execute(request).await
    }

    pub async fn list_flavors(&self, request: &ListFlavorsRequest) -> Result<ListFlavorsResponse, SdkError> {
        self.client.execute(request).await
    }

    pub async fn show_job(&self, request: &ShowJobRequest) -> Result<ShowJobResponse, SdkError> {
        self.client.execute(request).await
    }
}
