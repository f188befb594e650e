//! Sale model matching the backend `/venta` resource.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{null_as_default, required, EntityId};
use crate::ApiError;

/// Quantity used when a line item's `cantidad` is missing or malformed.
pub const DEFAULT_QUANTITY: i64 = 0;
/// Price used when a line item's `precio` is missing or malformed.
pub const DEFAULT_PRICE: f64 = 1.0;

/// One product line of a sale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SaleLine {
    pub id: Value,
    pub cantidad: i64,
    pub precio: f64,
}

/// Request body for `POST /venta`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalePayload {
    #[serde(rename = "clienteId")]
    pub cliente_id: String,
    pub productos: Vec<SaleLine>,
}

/// A sale as returned by the query endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    #[serde(rename = "clienteId", default, skip_serializing_if = "Option::is_none")]
    pub cliente_id: Option<EntityId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fecha: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub productos: Vec<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl fmt::Display for Sale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.id {
            Some(id) => write!(f, "#{}", id)?,
            None => f.write_str("#?")?,
        }
        if let Some(fecha) = &self.fecha {
            write!(f, " {}", fecha)?;
        }
        write!(f, " ({} items)", self.productos.len())
    }
}

/// Unsaved sale registration form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SaleDraft {
    pub cliente_id: String,
    /// Free-form JSON array of `{id, cantidad, precio}` objects
    pub productos: String,
    pub fecha: String,
}

impl SaleDraft {
    /// Validate the draft and build the request body.
    pub fn to_payload(&self) -> Result<SalePayload, ApiError> {
        let cliente_id = required(&self.cliente_id, "Client id")?;
        let productos = parse_sale_lines(&self.productos)?;

        Ok(SalePayload {
            cliente_id: cliente_id.to_string(),
            productos,
        })
    }

    /// Clear the client and line items after a successful registration.
    /// The date is kept.
    pub fn reset_after_registration(&mut self) {
        self.cliente_id.clear();
        self.productos.clear();
    }
}

/// Parse the line-item text field.
///
/// The text must be a JSON array of objects, each carrying an `id`. Quantity
/// and price are coerced from numbers or numeric strings and fall back to
/// [`DEFAULT_QUANTITY`] and [`DEFAULT_PRICE`].
pub fn parse_sale_lines(text: &str) -> Result<Vec<SaleLine>, ApiError> {
    let value: Value = serde_json::from_str(text.trim())
        .map_err(|e| ApiError::input(format!("Line items are not valid JSON: {}", e)))?;

    let Value::Array(items) = value else {
        return Err(ApiError::input("Line items must be a JSON array"));
    };

    items
        .into_iter()
        .map(|item| {
            let Value::Object(mut fields) = item else {
                return Err(ApiError::input("Each line item must be an object"));
            };
            let id = match fields.remove("id") {
                Some(id) if !id.is_null() => id,
                _ => return Err(ApiError::input("Each line item needs an id")),
            };
            Ok(SaleLine {
                id,
                cantidad: coerce_quantity(fields.get("cantidad")),
                precio: coerce_price(fields.get("precio")),
            })
        })
        .collect()
}

fn coerce_quantity(value: Option<&Value>) -> i64 {
    match value {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    }
    .unwrap_or(DEFAULT_QUANTITY)
}

fn coerce_price(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    }
    .filter(|f: &f64| f.is_finite())
    .unwrap_or(DEFAULT_PRICE)
}

/// Query form for sales by client and exact date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SaleQuery {
    pub cliente_id: String,
    pub fecha: String,
}

impl SaleQuery {
    /// Validate both fields, returning the trimmed client id and the date.
    pub fn validate(&self) -> Result<(&str, NaiveDate), ApiError> {
        let cliente_id = self.cliente_id.trim();
        let fecha = self.fecha.trim();
        if cliente_id.is_empty() || fecha.is_empty() {
            return Err(ApiError::input("Client id and date are required"));
        }
        let date = NaiveDate::parse_from_str(fecha, "%Y-%m-%d")
            .map_err(|_| ApiError::input("Date must be formatted as YYYY-MM-DD"))?;
        Ok((cliente_id, date))
    }
}
