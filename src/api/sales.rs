//! Sale endpoints (`/venta`).

use chrono::NaiveDate;
use reqwest::Method;

use super::ApiClient;
use crate::errors::ApiError;
use crate::models::{Sale, SalePayload};

const RESOURCE: &str = "venta";

impl ApiClient {
    /// POST /venta - Register a sale.
    pub async fn register_sale(&self, payload: &SalePayload) -> Result<(), ApiError> {
        let url = self.endpoint(&[RESOURCE])?;
        self.send_json(Method::POST, url, payload).await
    }

    /// GET /venta/cliente/:clienteId/fecha/:fecha - Sales of one client on one day.
    pub async fn sales_by_client_and_date(
        &self,
        cliente_id: &str,
        fecha: NaiveDate,
    ) -> Result<Vec<Sale>, ApiError> {
        let fecha = fecha.format("%Y-%m-%d").to_string();
        let url = self.endpoint(&[RESOURCE, "cliente", cliente_id, "fecha", &fecha])?;
        self.get_json(url).await
    }
}
