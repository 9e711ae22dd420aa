use std::time::Duration;

use reqwest::Client;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{policies::ExponentialBackoff, RetryTransientMiddleware};
use reqwest_tracing::TracingMiddleware;
use serde::de::DeserializeOwned;
use shipment_core::{Shipment, ShipmentId};
use snafu::ResultExt;

use crate::{
    error::{DecodeSnafu, FailedRequestSnafu, RequestSnafu, Result},
    models::{
        CreateShipment, CreateShipmentRequest, ShipmentsFilter, ShipmentsResponse,
        UpdateShipmentRequest,
    },
};

/// Typed client for the shipment tracking API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: ClientWithMiddleware,
    base_url: String,
}

#[derive(Debug)]
pub struct ApiClientBuilder {
    base_url: String,
    client: reqwest::ClientBuilder,
    max_retries: u32,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::builder(base_url).build()
    }

    pub fn builder(base_url: impl Into<String>) -> ApiClientBuilder {
        ApiClientBuilder {
            base_url: base_url.into(),
            client: reqwest::ClientBuilder::new(),
            max_retries: 3,
        }
    }

    fn new_with(base_url: String, inner: Client, max_retries: u32) -> Self {
        let client = ClientBuilder::new(inner)
            .with(TracingMiddleware::default())
            .with(RetryTransientMiddleware::new_with_policy(
                ExponentialBackoff::builder().build_with_max_retries(max_retries),
            ))
            .build();

        Self {
            client,
            base_url: base_url.trim_end_matches('/').into(),
        }
    }

    pub async fn shipments(&self, filter: &ShipmentsFilter) -> Result<ShipmentsResponse> {
        let response = self
            .client
            .get(self.url("/shipments"))
            .query(filter)
            .send()
            .await
            .context(RequestSnafu)?;

        Self::json(response).await
    }

    pub async fn shipment(&self, id: ShipmentId) -> Result<Shipment> {
        let response = self
            .client
            .get(self.url(&format!("/shipments/{id}")))
            .send()
            .await
            .context(RequestSnafu)?;

        Self::json(response).await
    }

    /// Creates a shipment, estimating the arrival time when the caller did
    /// not supply one.
    pub async fn create_shipment(&self, shipment: CreateShipment) -> Result<Shipment> {
        let request = CreateShipmentRequest::from(shipment);

        let response = self
            .client
            .post(self.url("/shipments"))
            .json(&request)
            .send()
            .await
            .context(RequestSnafu)?;

        Self::json(response).await
    }

    pub async fn update_shipment(
        &self,
        id: ShipmentId,
        update: &UpdateShipmentRequest,
    ) -> Result<Shipment> {
        let response = self
            .client
            .put(self.url(&format!("/shipments/{id}")))
            .json(update)
            .send()
            .await
            .context(RequestSnafu)?;

        Self::json(response).await
    }

    pub async fn delete_shipment(&self, id: ShipmentId) -> Result<()> {
        let response = self
            .client
            .delete(self.url(&format!("/shipments/{id}")))
            .send()
            .await
            .context(RequestSnafu)?;

        Self::ensure_success(response).await?;

        Ok(())
    }

    fn url(&self, path: &str) -> String {
        format!("{}/v1.0{path}", self.base_url)
    }

    async fn json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let response = Self::ensure_success(response).await?;
        response.json().await.context(DecodeSnafu)
    }

    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response> {
        if response.status().is_success() {
            return Ok(response);
        }

        let url = response.url().to_string();
        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        FailedRequestSnafu { url, status, body }.fail()
    }
}

impl ApiClientBuilder {
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.client = self.client.timeout(timeout);
        self
    }

    pub fn max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn build(self) -> ApiClient {
        let inner = self.client.build().unwrap();
        ApiClient::new_with(self.base_url, inner, self.max_retries)
    }
}
