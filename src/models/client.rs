//! Client model matching the backend `/cliente` resource.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{null_as_default, required, EntityId};
use crate::ApiError;

/// Client category. Codes other than 1 and 2 mean the client is inactive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "TipoRepr", into = "i64")]
pub enum ClientType {
    Normal,
    Premium,
    Inactive(i64),
}

impl ClientType {
    pub fn code(&self) -> i64 {
        match self {
            ClientType::Normal => 1,
            ClientType::Premium => 2,
            ClientType::Inactive(code) => *code,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ClientType::Normal => "normal",
            ClientType::Premium => "premium",
            ClientType::Inactive(_) => "inactive",
        }
    }

    /// Parse a label (`normal`, `premium`, `inactive`) or a numeric code.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "normal" => Some(ClientType::Normal),
            "premium" => Some(ClientType::Premium),
            "inactive" => Some(ClientType::Inactive(0)),
            _ => s.parse::<i64>().ok().map(ClientType::from),
        }
    }
}

impl Default for ClientType {
    fn default() -> Self {
        ClientType::Inactive(0)
    }
}

impl From<i64> for ClientType {
    fn from(code: i64) -> Self {
        match code {
            1 => ClientType::Normal,
            2 => ClientType::Premium,
            other => ClientType::Inactive(other),
        }
    }
}

impl From<ClientType> for i64 {
    fn from(t: ClientType) -> Self {
        t.code()
    }
}

impl fmt::Display for ClientType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TipoRepr {
    Code(i64),
    Text(String),
    Other(Value),
}

impl From<TipoRepr> for ClientType {
    fn from(repr: TipoRepr) -> Self {
        match repr {
            TipoRepr::Code(code) => code.into(),
            TipoRepr::Text(s) => s
                .trim()
                .parse::<i64>()
                .map(ClientType::from)
                .unwrap_or_default(),
            TipoRepr::Other(_) => ClientType::default(),
        }
    }
}

/// A client record as listed by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: EntityId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub nombre: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ciudad: String,
    #[serde(default)]
    pub tipo: ClientType,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl fmt::Display for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} ({}) [{}]",
            self.id, self.nombre, self.ciudad, self.tipo
        )
    }
}

/// Request body for creating or updating a client.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientPayload {
    pub nombre: String,
    pub ciudad: String,
    pub tipo: i64,
}

/// Unsaved client form state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientDraft {
    /// Empty while creating; the edited client's id while updating
    pub id: String,
    pub nombre: String,
    pub ciudad: String,
    pub tipo: String,
}

impl Default for ClientDraft {
    fn default() -> Self {
        Self {
            id: String::new(),
            nombre: String::new(),
            ciudad: String::new(),
            tipo: ClientType::Normal.code().to_string(),
        }
    }
}

impl ClientDraft {
    /// Draft prefilled from a listed client (update mode).
    pub fn from_client(client: &Client) -> Self {
        Self {
            id: client.id.to_string(),
            nombre: client.nombre.clone(),
            ciudad: client.ciudad.clone(),
            tipo: client.tipo.code().to_string(),
        }
    }

    /// Identifier of the client being edited, `None` in create mode.
    pub fn target_id(&self) -> Option<&str> {
        Some(self.id.trim()).filter(|id| !id.is_empty())
    }

    /// Validate the draft and build the request body.
    pub fn to_payload(&self) -> Result<ClientPayload, ApiError> {
        let nombre = required(&self.nombre, "Name")?;
        let ciudad = required(&self.ciudad, "City")?;
        let tipo = ClientType::parse(required(&self.tipo, "Type")?)
            .ok_or_else(|| ApiError::input("Type must be a number"))?;

        Ok(ClientPayload {
            nombre: nombre.to_string(),
            ciudad: ciudad.to_string(),
            tipo: tipo.code(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unknown_type_is_inactive() {
        assert_eq!(ClientType::from(1), ClientType::Normal);
        assert_eq!(ClientType::from(2), ClientType::Premium);
        assert_eq!(ClientType::from(0).label(), "inactive");
        assert_eq!(ClientType::from(7).label(), "inactive");
        assert_eq!(ClientType::from(7).code(), 7);
    }

    #[test]
    fn test_client_deserializes_with_passthrough_fields() {
        let client: Client = serde_json::from_value(json!({
            "id": 42,
            "nombre": "Ana",
            "ciudad": "Lima",
            "tipo": "2",
            "activo": true
        }))
        .unwrap();

        assert_eq!(client.id, EntityId::Number(42));
        assert_eq!(client.tipo, ClientType::Premium);
        assert_eq!(client.extra.get("activo"), Some(&json!(true)));

        let back = serde_json::to_value(&client).unwrap();
        assert_eq!(back["tipo"], json!(2));
        assert_eq!(back["activo"], json!(true));
    }

    #[test]
    fn test_draft_payload_coerces_type() {
        let draft = ClientDraft {
            id: "42".to_string(),
            nombre: " Ana ".to_string(),
            ciudad: "Lima".to_string(),
            tipo: "2".to_string(),
        };
        assert_eq!(draft.target_id(), Some("42"));
        assert_eq!(
            draft.to_payload().unwrap(),
            ClientPayload {
                nombre: "Ana".to_string(),
                ciudad: "Lima".to_string(),
                tipo: 2,
            }
        );
    }

    #[test]
    fn test_draft_rejects_missing_fields() {
        let mut draft = ClientDraft::default();
        assert!(draft.target_id().is_none());
        assert!(draft.to_payload().unwrap_err().is_input());

        draft.nombre = "Ana".to_string();
        draft.ciudad = "Lima".to_string();
        draft.tipo = "gold".to_string();
        assert_eq!(
            draft.to_payload().unwrap_err().to_string(),
            "Type must be a number"
        );
    }

    #[test]
    fn test_parse_labels() {
        assert_eq!(ClientType::parse("Premium"), Some(ClientType::Premium));
        assert_eq!(ClientType::parse("1"), Some(ClientType::Normal));
        assert_eq!(ClientType::parse("inactive"), Some(ClientType::Inactive(0)));
        assert_eq!(ClientType::parse("vip"), None);
    }
}
