//! Product model matching the backend `/producto` resource.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{lenient_f64, lenient_i64, null_as_default, required, EntityId};
use crate::ApiError;

/// A product record as listed by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: EntityId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub price: f64,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub stock: i64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} ${:.2} (stock {})",
            self.id, self.name, self.price, self.stock
        )
    }
}

/// Request body for creating or fully updating a product.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductPayload {
    pub name: String,
    pub price: f64,
    pub stock: i64,
}

/// Partial update carrying only the price.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceUpdate {
    pub price: f64,
}

/// Stock increment body for `PUT /producto/{id}/stock`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockIncrement {
    pub amount: i64,
}

/// Items sold this week. The backend owns the shape of each entry.
pub type WeeklySold = Vec<Value>;

/// Number of items sold in the current year.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct SoldCount {
    #[serde(default, deserialize_with = "lenient_i64")]
    pub count: i64,
}

/// Unsaved product form state. Numeric fields hold raw form text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductDraft {
    pub id: String,
    pub name: String,
    pub price: String,
    pub stock: String,
}

impl ProductDraft {
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            price: product.price.to_string(),
            stock: product.stock.to_string(),
        }
    }

    pub fn target_id(&self) -> Option<&str> {
        Some(self.id.trim()).filter(|id| !id.is_empty())
    }

    /// Validate the draft and build the request body.
    pub fn to_payload(&self) -> Result<ProductPayload, ApiError> {
        let name = required(&self.name, "Name")?;
        let price = parse_price(&self.price)?;
        let stock = parse_stock(&self.stock)?;

        Ok(ProductPayload {
            name: name.to_string(),
            price,
            stock,
        })
    }
}

/// Parse a decimal price. Empty, non-numeric, non-finite and negative input is rejected.
pub fn parse_price(input: &str) -> Result<f64, ApiError> {
    let price: f64 = required(input, "Price")?
        .parse()
        .map_err(|_| ApiError::input("Price must be a number"))?;
    if !price.is_finite() {
        return Err(ApiError::input("Price must be a number"));
    }
    if price < 0.0 {
        return Err(ApiError::input("Price cannot be negative"));
    }
    Ok(price)
}

/// Parse a whole, non-negative stock count.
pub fn parse_stock(input: &str) -> Result<i64, ApiError> {
    let stock: i64 = required(input, "Stock")?
        .parse()
        .map_err(|_| ApiError::input("Stock must be a whole number"))?;
    if stock < 0 {
        return Err(ApiError::input("Stock cannot be negative"));
    }
    Ok(stock)
}

/// Parse a stock increment. Any non-zero whole number is accepted.
pub fn parse_amount(input: &str) -> Result<i64, ApiError> {
    let amount: i64 = required(input, "Amount")?
        .parse()
        .map_err(|_| ApiError::input("Amount must be a whole number"))?;
    if amount == 0 {
        return Err(ApiError::input("Amount cannot be zero"));
    }
    Ok(amount)
}
