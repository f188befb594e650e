//! Product list/editor screen with sales statistics.

use crate::api::ApiClient;
use crate::errors::ApiError;
use crate::models::{parse_amount, parse_price, Product, ProductDraft, WeeklySold};

use super::{log_failure, user_message, ListState, Outcome, Phase};

pub const PRODUCTS_LOAD_FAILED: &str = "Could not load products";
pub const PRODUCT_SAVE_FAILED: &str = "Could not save product";
pub const PRODUCT_DISABLE_FAILED: &str = "Could not disable product";
pub const PRODUCT_PRICE_FAILED: &str = "Could not update price";
pub const PRODUCT_STOCK_FAILED: &str = "Could not update stock";
pub const STATS_LOAD_FAILED: &str = "Could not load sales statistics";

#[derive(Debug, Default)]
pub struct ProductsScreen {
    state: ListState<Product>,
    available_only: bool,
    weekly_sold: WeeklySold,
    sold_this_year: Option<i64>,
    stats_error: Option<String>,
    pub draft: ProductDraft,
}

impl ProductsScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn products(&self) -> &[Product] {
        self.state.items()
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error()
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn available_only(&self) -> bool {
        self.available_only
    }

    pub fn weekly_sold(&self) -> &WeeklySold {
        &self.weekly_sold
    }

    pub fn sold_this_year(&self) -> Option<i64> {
        self.sold_this_year
    }

    pub fn stats_error(&self) -> Option<&str> {
        self.stats_error.as_deref()
    }

    /// Fetch the product list with the active availability filter.
    pub async fn load(&mut self, api: &ApiClient) -> Outcome {
        self.state.begin();
        let result = api.list_products(self.available_only).await;
        self.state.reconcile(result, PRODUCTS_LOAD_FAILED)
    }

    pub async fn set_available_only(&mut self, api: &ApiClient, available_only: bool) -> Outcome {
        self.available_only = available_only;
        self.load(api).await
    }

    /// Fetch the weekly summary and the yearly count. The product list is not touched.
    pub async fn load_stats(&mut self, api: &ApiClient) -> Outcome {
        self.stats_error = None;

        let weekly = api.weekly_sold().await;
        let yearly = api.sold_this_year().await;

        let mut failure: Option<ApiError> = None;
        match weekly {
            Ok(items) => self.weekly_sold = items,
            Err(e) => {
                self.weekly_sold.clear();
                failure = Some(e);
            }
        }
        match yearly {
            Ok(count) => self.sold_this_year = Some(count.count),
            Err(e) => {
                self.sold_this_year = None;
                if failure.is_none() {
                    failure = Some(e);
                }
            }
        }

        match failure {
            Some(e) => {
                log_failure(&e, STATS_LOAD_FAILED);
                self.stats_error = Some(user_message(&e, STATS_LOAD_FAILED));
                Outcome::Failed
            }
            None => Outcome::Completed,
        }
    }

    /// Start editing a listed product. Returns `false` when no such product is listed.
    pub fn edit(&mut self, id: &str) -> bool {
        match self.state.items().iter().find(|p| p.id.to_string() == id) {
            Some(product) => {
                self.draft = ProductDraft::from_product(product);
                true
            }
            None => false,
        }
    }

    pub fn cancel_edit(&mut self) {
        self.draft = ProductDraft::default();
    }

    /// Create or fully update from the draft.
    pub async fn submit(&mut self, api: &ApiClient) -> Outcome {
        self.state.begin();

        let payload = match self.draft.to_payload() {
            Ok(payload) => payload,
            Err(e) => return self.state.fail(&e, PRODUCT_SAVE_FAILED),
        };
        let result = match self.draft.target_id() {
            Some(id) => api.update_product(id, &payload).await,
            None => api.create_product(&payload).await,
        };
        if let Err(e) = result {
            return self.state.fail(&e, PRODUCT_SAVE_FAILED);
        }

        tracing::info!(id = ?self.draft.target_id(), name = %payload.name, "Product saved");
        self.draft = ProductDraft::default();
        self.load(api).await
    }

    pub async fn disable(&mut self, api: &ApiClient, id: &str) -> Outcome {
        self.state.begin();
        if let Err(e) = api.disable_product(id).await {
            return self.state.fail(&e, PRODUCT_DISABLE_FAILED);
        }

        tracing::info!(id, "Product disabled");
        self.load(api).await
    }

    /// Set a new price from a prompt value. `None` or blank input sends nothing.
    pub async fn update_price(&mut self, api: &ApiClient, id: &str, input: Option<&str>) -> Outcome {
        let Some(input) = prompt_value(input) else {
            return Outcome::Skipped;
        };

        self.state.begin();
        let result = match parse_price(input) {
            Ok(price) => api.update_price(id, price).await,
            Err(e) => Err(e),
        };
        if let Err(e) = result {
            return self.state.fail(&e, PRODUCT_PRICE_FAILED);
        }

        tracing::info!(id, "Product price updated");
        self.load(api).await
    }

    /// Increment stock from a prompt value. `None` or blank input sends nothing.
    pub async fn add_stock(&mut self, api: &ApiClient, id: &str, input: Option<&str>) -> Outcome {
        let Some(input) = prompt_value(input) else {
            return Outcome::Skipped;
        };

        self.state.begin();
        let result = match parse_amount(input) {
            Ok(amount) => api.add_stock(id, amount).await,
            Err(e) => Err(e),
        };
        if let Err(e) = result {
            return self.state.fail(&e, PRODUCT_STOCK_FAILED);
        }

        tracing::info!(id, "Product stock incremented");
        self.load(api).await
    }
}

fn prompt_value(input: Option<&str>) -> Option<&str> {
    input.map(str::trim).filter(|s| !s.is_empty())
}
