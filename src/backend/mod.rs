//! HTTP access to the json-server style REST backend.

pub mod query;

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::{
    config::AppConfig,
    error::{AppError, AppResult},
};

pub use query::ListQuery;

/// Shared handle for all backend calls. Cloning is cheap; the underlying
/// reqwest client is reference-counted.
#[derive(Debug, Clone)]
pub struct Backend {
    client: Client,
    base_url: String,
}

impl Backend {
    pub fn new(config: &AppConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, collection: &str) -> String {
        format!("{}/{}", self.base_url, collection.trim_matches('/'))
    }

    fn item_url(&self, collection: &str, id: Uuid) -> String {
        format!("{}/{}", self.url(collection), id)
    }

    /// GET a collection, optionally filtered/paginated via `ListQuery`.
    pub async fn fetch_all<T: DeserializeOwned>(
        &self,
        collection: &str,
        query: &ListQuery,
    ) -> AppResult<Vec<T>> {
        let response = self
            .client
            .get(self.url(collection))
            .query(query.as_pairs())
            .send()
            .await?;
        Self::decode(response).await
    }

    /// GET a single record by id.
    pub async fn fetch_one<T: DeserializeOwned>(
        &self,
        collection: &str,
        id: Uuid,
    ) -> AppResult<T> {
        let response = self.client.get(self.item_url(collection, id)).send().await?;
        Self::decode(response).await
    }

    /// POST a new record; the response is the stored record.
    pub async fn create<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        collection: &str,
        body: &B,
    ) -> AppResult<T> {
        let response = self
            .client
            .post(self.url(collection))
            .json(body)
            .send()
            .await?;
        Self::decode(response).await
    }

    /// PUT a full replacement of the record.
    pub async fn replace<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        collection: &str,
        id: Uuid,
        body: &B,
    ) -> AppResult<T> {
        let response = self
            .client
            .put(self.item_url(collection, id))
            .json(body)
            .send()
            .await?;
        Self::decode(response).await
    }

    /// PATCH a partial update; the response is the full updated record.
    pub async fn patch<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        collection: &str,
        id: Uuid,
        body: &B,
    ) -> AppResult<T> {
        let response = self
            .client
            .patch(self.item_url(collection, id))
            .json(body)
            .send()
            .await?;
        Self::decode(response).await
    }

    pub async fn delete(&self, collection: &str, id: Uuid) -> AppResult<()> {
        let response = self
            .client
            .delete(self.item_url(collection, id))
            .send()
            .await?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(AppError::NotFound);
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(AppError::Backend {
                status: status.as_u16(),
                message,
            });
        }
        Ok(())
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> AppResult<T> {
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(AppError::NotFound);
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(AppError::Backend {
                status: status.as_u16(),
                message,
            });
        }
        response.json().await.map_err(Into::into)
    }
}
