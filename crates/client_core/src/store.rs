//! Remote address store seam and its HTTP implementation.

use async_trait::async_trait;
use reqwest::{Client, Response};
use shared::{
    domain::{AddressId, AddressRecord, PostalCode},
    error::ApiError,
    protocol::{AddressListResponse, CreateAddressRequest, UpdateAddressRequest, ADDRESSES_PATH},
};
use tracing::{debug, warn};

use crate::error::StoreError;

#[async_trait]
pub trait AddressStore: Send + Sync {
    async fn list(&self) -> Result<Vec<AddressRecord>, StoreError>;
    async fn create(&self, postal_code: &PostalCode) -> Result<(), StoreError>;
    async fn update(
        &self,
        id: AddressId,
        request: &UpdateAddressRequest,
    ) -> Result<(), StoreError>;
    async fn delete(&self, id: AddressId) -> Result<(), StoreError>;
}

pub struct HttpAddressStore {
    http: Client,
    base_url: String,
}

impl HttpAddressStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(http: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}/{ADDRESSES_PATH}", self.base_url)
    }

    fn item_url(&self, id: AddressId) -> String {
        format!("{}/{ADDRESSES_PATH}/{}", self.base_url, id.0)
    }
}

async fn ensure_success(response: Response, operation: &'static str) -> Result<Response, StoreError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = ApiError::message_from_body(&body);
    warn!(
        operation,
        status = status.as_u16(),
        store_message = message.as_deref().unwrap_or_default(),
        "address store rejected request"
    );
    Err(StoreError::Rejected {
        status: status.as_u16(),
        message,
    })
}

#[async_trait]
impl AddressStore for HttpAddressStore {
    async fn list(&self) -> Result<Vec<AddressRecord>, StoreError> {
        debug!(url = %self.collection_url(), "address store: list");
        let response = self.http.get(self.collection_url()).send().await?;
        let body: AddressListResponse = ensure_success(response, "list").await?.json().await?;
        Ok(body.into_records())
    }

    async fn create(&self, postal_code: &PostalCode) -> Result<(), StoreError> {
        debug!(postal_code = postal_code.as_str(), "address store: create");
        let response = self
            .http
            .post(self.collection_url())
            .json(&CreateAddressRequest::new(postal_code))
            .send()
            .await?;
        let response = ensure_success(response, "create").await?;
        // The created record is optional in the reply; the caller re-lists anyway.
        if let Ok(created) = response.json::<AddressRecord>().await {
            debug!(id = created.id.0, "address store: created");
        }
        Ok(())
    }

    async fn update(
        &self,
        id: AddressId,
        request: &UpdateAddressRequest,
    ) -> Result<(), StoreError> {
        debug!(id = id.0, "address store: update");
        let response = self
            .http
            .put(self.item_url(id))
            .json(request)
            .send()
            .await?;
        ensure_success(response, "update").await?;
        Ok(())
    }

    async fn delete(&self, id: AddressId) -> Result<(), StoreError> {
        debug!(id = id.0, "address store: delete");
        let response = self.http.delete(self.item_url(id)).send().await?;
        ensure_success(response, "delete").await?;
        Ok(())
    }
}
