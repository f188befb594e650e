//! Interactive line console driving the three screens.
//!
//! Forms are filled one field at a time. An empty answer keeps the field's
//! current value; end of input abandons the form without submitting.

mod command;

pub use command::{Command, HELP};

use std::fmt::Write as _;
use std::io;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::api::ApiClient;
use crate::screens::{ClientsScreen, Outcome, ProductsScreen, SalesScreen};

pub struct Console<R, W> {
    api: ApiClient,
    clients: ClientsScreen,
    products: ProductsScreen,
    sales: SalesScreen,
    input: R,
    output: W,
}

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(api: ApiClient, input: R, output: W) -> Self {
        Self {
            api,
            clients: ClientsScreen::new(),
            products: ProductsScreen::new(),
            sales: SalesScreen::new(),
            input,
            output,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Read and execute commands until `quit` or end of input.
    pub async fn run(&mut self) -> io::Result<()> {
        let banner = format!("Storefront console ({}). Type `help`.", self.api.base_url());
        self.say(&banner).await?;

        loop {
            let Some(line) = self.prompt("> ").await? else {
                break;
            };
            match Command::parse(&line) {
                Ok(Some(Command::Quit)) => break,
                Ok(Some(command)) => self.execute(command).await?,
                Ok(None) => {}
                Err(message) => self.say(&message).await?,
            }
        }

        self.output.flush().await
    }

    pub async fn execute(&mut self, command: Command) -> io::Result<()> {
        tracing::debug!(?command, "Executing console command");

        match command {
            Command::Help => self.say(HELP).await,
            Command::Quit => Ok(()),

            Command::ListClients(filter) => {
                self.clients.set_filter(&self.api, filter).await;
                self.show_clients().await
            }
            Command::NewClient => {
                self.clients.cancel_edit();
                self.client_form().await
            }
            Command::EditClient(id) => {
                if !self.clients.edit(&id) {
                    return self.say(&format!("Client {} is not listed", id)).await;
                }
                self.client_form().await
            }
            Command::DeactivateClient(id) => {
                self.clients.deactivate(&self.api, &id).await;
                self.show_clients().await
            }

            Command::ListProducts { available_only } => {
                self.products
                    .set_available_only(&self.api, available_only)
                    .await;
                self.show_products().await
            }
            Command::NewProduct => {
                self.products.cancel_edit();
                self.product_form().await
            }
            Command::EditProduct(id) => {
                if !self.products.edit(&id) {
                    return self.say(&format!("Product {} is not listed", id)).await;
                }
                self.product_form().await
            }
            Command::DisableProduct(id) => {
                self.products.disable(&self.api, &id).await;
                self.show_products().await
            }
            Command::ProductPrice(id) => {
                let value = self.prompt("New price: ").await?;
                let outcome = self
                    .products
                    .update_price(&self.api, &id, value.as_deref())
                    .await;
                self.after_prompt(outcome).await
            }
            Command::ProductStock(id) => {
                let value = self.prompt("Amount to add: ").await?;
                let outcome = self
                    .products
                    .add_stock(&self.api, &id, value.as_deref())
                    .await;
                self.after_prompt(outcome).await
            }

            Command::Stats => {
                self.products.load_stats(&self.api).await;
                self.show_stats().await
            }
            Command::NewSale => self.sale_form().await,
            Command::QuerySales { cliente_id, fecha } => {
                self.sales.query.cliente_id = cliente_id;
                self.sales.query.fecha = fecha.unwrap_or_else(|| self.sales.draft.fecha.clone());
                self.sales.search(&self.api).await;
                self.show_sales().await
            }
        }
    }

    async fn client_form(&mut self) -> io::Result<()> {
        let mut draft = self.clients.draft.clone();
        let filled = self.field("Name", &mut draft.nombre).await?
            && self.field("City", &mut draft.ciudad).await?
            && self.field("Type (1 normal, 2 premium)", &mut draft.tipo).await?;
        if !filled {
            return Ok(());
        }

        self.clients.draft = draft;
        self.clients.submit(&self.api).await;
        self.show_clients().await
    }

    async fn product_form(&mut self) -> io::Result<()> {
        let mut draft = self.products.draft.clone();
        let filled = self.field("Name", &mut draft.name).await?
            && self.field("Price", &mut draft.price).await?
            && self.field("Stock", &mut draft.stock).await?;
        if !filled {
            return Ok(());
        }

        self.products.draft = draft;
        self.products.submit(&self.api).await;
        self.show_products().await
    }

    async fn sale_form(&mut self) -> io::Result<()> {
        let mut draft = self.sales.draft.clone();
        let filled = self.field("Client id", &mut draft.cliente_id).await?
            && self
                .field("Items (JSON [{id, cantidad, precio}])", &mut draft.productos)
                .await?
            && self.field("Date (YYYY-MM-DD)", &mut draft.fecha).await?;
        if !filled {
            return Ok(());
        }

        self.sales.draft = draft;
        self.sales.register(&self.api).await;
        self.show_sales().await
    }

    /// Prompt for one form field. Returns `false` at end of input.
    async fn field(&mut self, label: &str, value: &mut String) -> io::Result<bool> {
        let prompt = if value.is_empty() {
            format!("{}: ", label)
        } else {
            format!("{} [{}]: ", label, value)
        };
        match self.prompt(&prompt).await? {
            Some(answer) => {
                if !answer.trim().is_empty() {
                    *value = answer.trim().to_string();
                }
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn after_prompt(&mut self, outcome: Outcome) -> io::Result<()> {
        if outcome == Outcome::Skipped {
            return self.say("No change.").await;
        }
        self.show_products().await
    }

    async fn show_clients(&mut self) -> io::Result<()> {
        let mut text = String::new();
        if let Some(error) = self.clients.error() {
            let _ = writeln!(text, "error: {}", error);
        }
        for client in self.clients.clients() {
            let _ = writeln!(text, "  {}", client);
        }
        let _ = write!(text, "{} client(s)", self.clients.clients().len());
        self.say(&text).await
    }

    async fn show_products(&mut self) -> io::Result<()> {
        let mut text = String::new();
        if let Some(error) = self.products.error() {
            let _ = writeln!(text, "error: {}", error);
        }
        for product in self.products.products() {
            let _ = writeln!(text, "  {}", product);
        }
        let _ = write!(text, "{} product(s)", self.products.products().len());
        self.say(&text).await
    }

    async fn show_stats(&mut self) -> io::Result<()> {
        let mut text = String::new();
        if let Some(error) = self.products.stats_error() {
            let _ = writeln!(text, "error: {}", error);
        }
        let _ = writeln!(text, "Sold this week:");
        for item in self.products.weekly_sold() {
            let _ = writeln!(text, "  {}", item);
        }
        match self.products.sold_this_year() {
            Some(count) => {
                let _ = write!(text, "Sold this year: {}", count);
            }
            None => {
                let _ = write!(text, "Sold this year: -");
            }
        }
        self.say(&text).await
    }

    async fn show_sales(&mut self) -> io::Result<()> {
        let mut text = String::new();
        if let Some(error) = self.sales.error() {
            let _ = writeln!(text, "error: {}", error);
        }
        if let Some(notice) = self.sales.notice() {
            let _ = writeln!(text, "{}", notice);
        }
        for sale in self.sales.results() {
            let _ = writeln!(text, "  {}", sale);
        }
        let _ = write!(text, "{} sale(s)", self.sales.results().len());
        self.say(&text).await
    }

    /// Write a prompt and read one line. `None` at end of input.
    async fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.output.write_all(prompt.as_bytes()).await?;
        self.output.flush().await?;

        let mut line = String::new();
        if self.input.read_line(&mut line).await? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    async fn say(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.write_all(b"\n").await
    }
}
