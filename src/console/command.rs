//! Console command parsing.

use crate::models::ClientType;

/// A parsed console command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Quit,
    ListClients(Option<ClientType>),
    NewClient,
    EditClient(String),
    DeactivateClient(String),
    ListProducts { available_only: bool },
    NewProduct,
    EditProduct(String),
    DisableProduct(String),
    ProductPrice(String),
    ProductStock(String),
    Stats,
    NewSale,
    QuerySales {
        cliente_id: String,
        fecha: Option<String>,
    },
}

impl Command {
    /// Parse one input line. Returns `Ok(None)` for a blank line.
    pub fn parse(line: &str) -> Result<Option<Command>, String> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some((&head, rest)) = words.split_first() else {
            return Ok(None);
        };

        let command = match (head.to_ascii_lowercase().as_str(), rest) {
            ("help" | "?", []) => Command::Help,
            ("quit" | "exit", []) => Command::Quit,

            ("clients", []) | ("clients", ["all"]) => Command::ListClients(None),
            ("clients", [filter]) => Command::ListClients(Some(
                ClientType::parse(filter)
                    .ok_or_else(|| format!("Unknown client type: {}", filter))?,
            )),
            ("client", ["new"]) => Command::NewClient,
            ("client", ["edit", id]) => Command::EditClient(id.to_string()),
            ("client", ["delete", id]) => Command::DeactivateClient(id.to_string()),

            ("products", []) | ("products", ["all"]) => Command::ListProducts {
                available_only: false,
            },
            ("products", ["available"]) => Command::ListProducts {
                available_only: true,
            },
            ("product", ["new"]) => Command::NewProduct,
            ("product", ["edit", id]) => Command::EditProduct(id.to_string()),
            ("product", ["delete", id]) => Command::DisableProduct(id.to_string()),
            ("product", ["price", id]) => Command::ProductPrice(id.to_string()),
            ("product", ["stock", id]) => Command::ProductStock(id.to_string()),

            ("stats", []) => Command::Stats,
            ("sale", ["new"]) => Command::NewSale,
            ("sales", [cliente_id]) => Command::QuerySales {
                cliente_id: cliente_id.to_string(),
                fecha: None,
            },
            ("sales", [cliente_id, fecha]) => Command::QuerySales {
                cliente_id: cliente_id.to_string(),
                fecha: Some(fecha.to_string()),
            },

            _ => return Err(format!("Unknown command: {} (type `help`)", line.trim())),
        };
        Ok(Some(command))
    }
}

pub const HELP: &str = "\
Commands:
  clients [all|normal|premium|inactive]   list clients
  client new | edit <id> | delete <id>    create, edit or deactivate a client
  products [all|available]                list products
  product new | edit <id> | delete <id>   create, edit or disable a product
  product price <id> | stock <id>         change price or add stock
  stats                                   weekly and yearly sales figures
  sale new                                register a sale
  sales <clientId> [YYYY-MM-DD]           sales of a client on a date
  help | quit";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("   ").unwrap(), None);
        assert_eq!(Command::parse("help").unwrap(), Some(Command::Help));
        assert_eq!(
            Command::parse("clients premium").unwrap(),
            Some(Command::ListClients(Some(ClientType::Premium)))
        );
        assert_eq!(
            Command::parse("clients").unwrap(),
            Some(Command::ListClients(None))
        );
        assert_eq!(
            Command::parse("product price 12").unwrap(),
            Some(Command::ProductPrice("12".to_string()))
        );
        assert_eq!(
            Command::parse("products available").unwrap(),
            Some(Command::ListProducts {
                available_only: true
            })
        );
        assert_eq!(
            Command::parse("sales 7 2024-05-01").unwrap(),
            Some(Command::QuerySales {
                cliente_id: "7".to_string(),
                fecha: Some("2024-05-01".to_string()),
            })
        );
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!(Command::parse("clients gold").is_err());
        assert!(Command::parse("client edit").is_err());
        assert!(Command::parse("dance").is_err());
    }
}
