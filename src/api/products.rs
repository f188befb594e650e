//! Product endpoints (`/producto`).

use reqwest::Method;

use super::ApiClient;
use crate::errors::ApiError;
use crate::models::{PriceUpdate, Product, ProductPayload, SoldCount, StockIncrement, WeeklySold};

const RESOURCE: &str = "producto";

impl ApiClient {
    /// GET /producto[?disponible=true] - List products.
    pub async fn list_products(&self, available_only: bool) -> Result<Vec<Product>, ApiError> {
        let mut url = self.endpoint(&[RESOURCE])?;
        if available_only {
            url.query_pairs_mut().append_pair("disponible", "true");
        }
        self.get_json(url).await
    }

    /// GET /producto/sold/estaSemana - Items sold this week.
    pub async fn weekly_sold(&self) -> Result<WeeklySold, ApiError> {
        let url = self.endpoint(&[RESOURCE, "sold", "estaSemana"])?;
        self.get_json(url).await
    }

    /// GET /producto/vendidos/añoActual - Items sold this year.
    pub async fn sold_this_year(&self) -> Result<SoldCount, ApiError> {
        let url = self.endpoint(&[RESOURCE, "vendidos", "añoActual"])?;
        self.get_json(url).await
    }

    /// POST /producto - Create a product.
    pub async fn create_product(&self, payload: &ProductPayload) -> Result<(), ApiError> {
        let url = self.endpoint(&[RESOURCE])?;
        self.send_json(Method::POST, url, payload).await
    }

    /// PUT /producto/:id - Replace a product's fields.
    pub async fn update_product(&self, id: &str, payload: &ProductPayload) -> Result<(), ApiError> {
        let url = self.endpoint(&[RESOURCE, id])?;
        self.send_json(Method::PUT, url, payload).await
    }

    /// PUT /producto/:id - Change only the price.
    pub async fn update_price(&self, id: &str, price: f64) -> Result<(), ApiError> {
        let url = self.endpoint(&[RESOURCE, id])?;
        self.send_json(Method::PUT, url, &PriceUpdate { price }).await
    }

    /// PUT /producto/:id/stock - Increment stock.
    pub async fn add_stock(&self, id: &str, amount: i64) -> Result<(), ApiError> {
        let url = self.endpoint(&[RESOURCE, id, "stock"])?;
        self.send_json(Method::PUT, url, &StockIncrement { amount })
            .await
    }

    /// DELETE /producto/:id - Disable a product.
    pub async fn disable_product(&self, id: &str) -> Result<(), ApiError> {
        let url = self.endpoint(&[RESOURCE, id])?;
        self.delete(url).await
    }
}
