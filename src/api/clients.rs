//! Client endpoints (`/cliente`).

use reqwest::Method;

use super::ApiClient;
use crate::errors::ApiError;
use crate::models::{Client, ClientPayload, ClientType};

const RESOURCE: &str = "cliente";

impl ApiClient {
    /// GET /cliente[?type=T] - List clients, optionally filtered by type.
    pub async fn list_clients(&self, filter: Option<ClientType>) -> Result<Vec<Client>, ApiError> {
        let mut url = self.endpoint(&[RESOURCE])?;
        if let Some(tipo) = filter {
            url.query_pairs_mut()
                .append_pair("type", &tipo.code().to_string());
        }
        self.get_json(url).await
    }

    /// POST /cliente - Create a client.
    pub async fn create_client(&self, payload: &ClientPayload) -> Result<(), ApiError> {
        let url = self.endpoint(&[RESOURCE])?;
        self.send_json(Method::POST, url, payload).await
    }

    /// PUT /cliente/:id - Update a client.
    pub async fn update_client(&self, id: &str, payload: &ClientPayload) -> Result<(), ApiError> {
        let url = self.endpoint(&[RESOURCE, id])?;
        self.send_json(Method::PUT, url, payload).await
    }

    /// DELETE /cliente/:id - Deactivate a client.
    pub async fn deactivate_client(&self, id: &str) -> Result<(), ApiError> {
        let url = self.endpoint(&[RESOURCE, id])?;
        self.delete(url).await
    }
}
