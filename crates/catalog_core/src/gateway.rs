use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use shared::{
    domain::{ContactInfo, Product},
    error::{CatalogError, Resource},
    protocol::CategoriesResponse,
};
use tracing::{debug, warn};
use url::Url;

use crate::config::{api_base_url, Settings};

#[async_trait]
pub trait CatalogGateway: Send + Sync {
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError>;
    async fn fetch_categories(&self) -> Result<Vec<String>, CatalogError>;
    async fn fetch_contact_info(&self) -> Result<ContactInfo, CatalogError>;
}

pub struct HttpCatalogGateway {
    http: Client,
    api_base: Url,
}

impl HttpCatalogGateway {
    pub fn new(api_base: Url, request_timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .timeout(request_timeout)
            .build()
            .context("failed to build catalog http client")?;
        Ok(Self { http, api_base })
    }

    pub fn from_settings(settings: &Settings, origin: &Url) -> Result<Self> {
        let api_base = api_base_url(settings, origin)?;
        Self::new(api_base, settings.request_timeout())
    }

    pub fn api_base(&self) -> &Url {
        &self.api_base
    }

    pub fn endpoint(&self, resource: Resource) -> Result<Url, CatalogError> {
        self.api_base
            .join(resource.path())
            .map_err(|err| CatalogError::network(resource, format!("invalid endpoint url: {err}")))
    }

    async fn get_json<T: DeserializeOwned>(&self, resource: Resource) -> Result<T, CatalogError> {
        let url = self.endpoint(resource)?;
        debug!(%url, "catalog: requesting {resource}");

        let body = self
            .http
            .get(url)
            .send()
            .await
            .and_then(|res| res.error_for_status())
            .map_err(|err| CatalogError::network(resource, err.to_string()))?
            .bytes()
            .await
            .map_err(|err| CatalogError::network(resource, err.to_string()))?;

        serde_json::from_slice(&body).map_err(|err| CatalogError::decode(resource, err.to_string()))
    }
}

fn log_failure(err: &CatalogError) {
    warn!("catalog: gateway request failed: {err}");
}

#[async_trait]
impl CatalogGateway for HttpCatalogGateway {
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        self.get_json(Resource::Products)
            .await
            .inspect_err(log_failure)
    }

    async fn fetch_categories(&self) -> Result<Vec<String>, CatalogError> {
        self.get_json::<CategoriesResponse>(Resource::Categories)
            .await
            .map(|body| body.categories)
            .inspect_err(log_failure)
    }

    async fn fetch_contact_info(&self) -> Result<ContactInfo, CatalogError> {
        self.get_json(Resource::ContactInfo)
            .await
            .inspect_err(log_failure)
    }
}

#[cfg(test)]
#[path = "tests/gateway_tests.rs"]
mod tests;
