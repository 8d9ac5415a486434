//! HTTP client for a remote document collection.

use crate::record_store::RecordStore;
use crate::{Document, RemoteResult, RemoteStoreError};

use std::panic::Location;

use async_trait::async_trait;
use error_location::ErrorLocation;
use log::info;
use reqwest::{Client as ReqwestClient, Method, StatusCode};
use serde::Deserialize;
use serde_json::Value;

#[derive(Deserialize)]
struct ListResponse {
    #[serde(default)]
    documents: Vec<Document>,
}

#[derive(Deserialize)]
struct CreateResponse {
    id: String,
}

/// One named collection on the remote document store.
///
/// Documents are independently addressable by their server-generated
/// id; the server assigns `createdAt` on create and lists documents
/// newest-first.
pub struct RemoteCollection {
    base_url: String,
    collection: String,
    client: ReqwestClient,
}

impl RemoteCollection {
    pub fn new(base_url: &str, collection: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            collection: collection.to_string(),
            client: ReqwestClient::new(),
        }
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }

    fn request(&self, method: Method, suffix: &str) -> reqwest::RequestBuilder {
        let url = format!(
            "{}/collections/{}/documents{}",
            self.base_url, self.collection, suffix
        );
        self.client.request(method, &url)
    }

    /// Map a non-success response into the remote error taxonomy.
    #[track_caller]
    fn status_error(id: Option<&str>, status: StatusCode, body: String) -> RemoteStoreError {
        let location = ErrorLocation::from(Location::caller());
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => RemoteStoreError::Permission {
                status: status.as_u16(),
                location,
            },
            StatusCode::NOT_FOUND => RemoteStoreError::NotFound {
                id: id.unwrap_or("<none>").to_string(),
                location,
            },
            _ => RemoteStoreError::UnexpectedStatus {
                status: status.as_u16(),
                body,
                location,
            },
        }
    }

    async fn check(id: Option<&str>, response: reqwest::Response) -> RemoteResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(Self::status_error(id, status, body))
    }
}

#[async_trait]
impl RecordStore for RemoteCollection {
    async fn create(&self, fields: Value) -> RemoteResult<String> {
        let mut payload = fields;
        if let Some(map) = payload.as_object_mut() {
            // Server timestamp is authoritative; a client clock is not.
            map.remove("createdAt");
        }

        let response = self.request(Method::POST, "").json(&payload).send().await?;
        let response = Self::check(None, response).await?;

        let created: CreateResponse = response
            .json()
            .await
            .map_err(|e| RemoteStoreError::decode(e.to_string()))?;

        info!("created document {}/{}", self.collection, created.id);
        Ok(created.id)
    }

    async fn read(&self, id: &str) -> RemoteResult<Option<Document>> {
        let response = self
            .request(Method::GET, &format!("/{id}"))
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let response = Self::check(Some(id), response).await?;
        let document: Document = response
            .json()
            .await
            .map_err(|e| RemoteStoreError::decode(e.to_string()))?;

        Ok(Some(document))
    }

    async fn update(&self, id: &str, fields: Value) -> RemoteResult<()> {
        let response = self
            .request(Method::PATCH, &format!("/{id}"))
            .json(&fields)
            .send()
            .await?;

        Self::check(Some(id), response).await?;
        info!("updated document {}/{}", self.collection, id);
        Ok(())
    }

    async fn delete(&self, id: &str) -> RemoteResult<()> {
        let response = self
            .request(Method::DELETE, &format!("/{id}"))
            .send()
            .await?;

        // Deleting an absent document is a success.
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(());
        }

        Self::check(Some(id), response).await?;
        info!("deleted document {}/{}", self.collection, id);
        Ok(())
    }

    async fn list_all(&self) -> RemoteResult<Vec<Document>> {
        let response = self
            .request(Method::GET, "?orderBy=createdAt&direction=desc")
            .send()
            .await?;

        let response = Self::check(None, response).await?;
        let list: ListResponse = response
            .json()
            .await
            .map_err(|e| RemoteStoreError::decode(e.to_string()))?;

        info!(
            "listed {} documents from {}",
            list.documents.len(),
            self.collection
        );
        Ok(list.documents)
    }
}
