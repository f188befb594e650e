//! Sales registration and query screen.

use crate::api::ApiClient;
use crate::errors::ApiError;
use crate::models::{Sale, SaleDraft, SaleQuery};

use super::{log_failure, user_message, ListState, Outcome, Phase};

pub const SALE_REGISTER_FAILED: &str = "Could not register sale";
pub const SALES_QUERY_FAILED: &str = "Could not load sales";
pub const SALE_REGISTERED: &str = "Sale registered";

#[derive(Debug, Default)]
pub struct SalesScreen {
    results: ListState<Sale>,
    notice: Option<String>,
    pub draft: SaleDraft,
    pub query: SaleQuery,
}

impl SalesScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn results(&self) -> &[Sale] {
        self.results.items()
    }

    pub fn error(&self) -> Option<&str> {
        self.results.error()
    }

    /// Acknowledgement from the last successful registration.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn phase(&self) -> Phase {
        self.results.phase()
    }

    /// Register the drafted sale.
    ///
    /// Any failure, malformed line items included, shows the generic
    /// registration error. On success the client id and line items are
    /// cleared; the date stays.
    pub async fn register(&mut self, api: &ApiClient) -> Outcome {
        self.notice = None;
        self.results.begin();

        let result = match self.draft.to_payload() {
            Ok(payload) => api.register_sale(&payload).await,
            Err(e) => Err(e),
        };
        if let Err(e) = result {
            log_failure(&e, SALE_REGISTER_FAILED);
            self.results.keep_with_error(SALE_REGISTER_FAILED.to_string());
            return Outcome::Failed;
        }

        tracing::info!(cliente_id = %self.draft.cliente_id.trim(), "Sale registered");
        self.draft.reset_after_registration();
        self.notice = Some(SALE_REGISTERED.to_string());
        self.results.succeed();
        Outcome::Completed
    }

    /// Query sales by client and exact date.
    ///
    /// Both fields are required; without them no request is sent. A
    /// non-success response shows the status and response text as received.
    pub async fn search(&mut self, api: &ApiClient) -> Outcome {
        self.notice = None;
        self.results.begin();

        let (cliente_id, fecha) = match self.query.validate() {
            Ok(valid) => valid,
            Err(e) => return self.results.fail(&e, SALES_QUERY_FAILED),
        };

        match api.sales_by_client_and_date(cliente_id, fecha).await {
            Ok(sales) => {
                self.results.replace(sales);
                Outcome::Completed
            }
            Err(e) => {
                log_failure(&e, SALES_QUERY_FAILED);
                let message = match &e {
                    ApiError::Status { .. } => e.to_string(),
                    _ => user_message(&e, SALES_QUERY_FAILED),
                };
                self.results.clear_with_error(message);
                Outcome::Failed
            }
        }
    }
}
